//! People in the clinic: patients and staff.
//!
//! Each role is its own struct composing a `PersonInfo`. Shared behavior
//! lives in capability traits instead of an inheritance chain:
//! - `Introducible`: anyone with a name and age
//! - `Treatable`: someone who receives care (patients)
//! - `Staff`: employees with a role and duties

use serde::{Deserialize, Serialize};

use super::enums::StaffRole;
use super::ids::{AppointmentId, DoctorId, PatientId, PrescriptionId, StaffId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInfo {
    pub name: String,
    pub age: u32,
}

impl PersonInfo {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

pub trait Introducible {
    fn person(&self) -> &PersonInfo;

    fn name(&self) -> &str {
        &self.person().name
    }

    fn age(&self) -> u32 {
        self.person().age
    }

    fn introduce(&self) -> String {
        format!("Hi, I am {} and I am {} years old.", self.name(), self.age())
    }
}

pub trait Treatable {
    fn receive_treatment(&self) -> String;
}

pub trait Staff: Introducible {
    fn staff_id(&self) -> StaffId;

    fn role(&self) -> StaffRole;

    fn perform_duties(&self) -> String;

    /// Name prefixed with the role title, e.g. "Dr. Zosia".
    fn display_name(&self) -> String {
        format!("{} {}", self.role().title(), self.name())
    }
}

// ─── Patient ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub person: PersonInfo,
    pub condition: String,
    pub(crate) prescriptions: Vec<PrescriptionId>,
    pub(crate) appointments: Vec<AppointmentId>,
}

impl Patient {
    pub fn new(name: impl Into<String>, age: u32, condition: impl Into<String>) -> Self {
        Self {
            id: PatientId::new(),
            person: PersonInfo::new(name, age),
            condition: condition.into(),
            prescriptions: Vec::new(),
            appointments: Vec::new(),
        }
    }

    /// Prescriptions in issue order.
    pub fn prescriptions(&self) -> &[PrescriptionId] {
        &self.prescriptions
    }

    /// Appointments in booking order.
    pub fn appointments(&self) -> &[AppointmentId] {
        &self.appointments
    }
}

impl Introducible for Patient {
    fn person(&self) -> &PersonInfo {
        &self.person
    }
}

impl Treatable for Patient {
    fn receive_treatment(&self) -> String {
        format!(
            "Patient {} is receiving treatment for: {}",
            self.person.name, self.condition
        )
    }
}

// ─── Doctor ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub person: PersonInfo,
    pub(crate) calendar: Vec<AppointmentId>,
}

impl Doctor {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            id: DoctorId::new(),
            person: PersonInfo::new(name, age),
            calendar: Vec::new(),
        }
    }

    /// Booked appointments in booking order.
    pub fn calendar(&self) -> &[AppointmentId] {
        &self.calendar
    }

    pub fn prescribe_medicine(&self, medicine: &str) -> String {
        format!("Dr. {} verbally prescribes: {medicine}", self.person.name)
    }
}

impl Introducible for Doctor {
    fn person(&self) -> &PersonInfo {
        &self.person
    }
}

impl Staff for Doctor {
    fn staff_id(&self) -> StaffId {
        StaffId::from(self.id.as_uuid())
    }

    fn role(&self) -> StaffRole {
        StaffRole::Doctor
    }

    fn perform_duties(&self) -> String {
        format!("Dr. {} is seeing patients.", self.person.name)
    }
}

// ─── Nurse ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nurse {
    pub id: StaffId,
    pub person: PersonInfo,
}

impl Nurse {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            id: StaffId::new(),
            person: PersonInfo::new(name, age),
        }
    }

    pub fn check_vitals(&self, patient: &Patient) -> String {
        format!(
            "Nurse {} checking vitals of {}",
            self.person.name, patient.person.name
        )
    }
}

impl Introducible for Nurse {
    fn person(&self) -> &PersonInfo {
        &self.person
    }
}

impl Staff for Nurse {
    fn staff_id(&self) -> StaffId {
        self.id
    }

    fn role(&self) -> StaffRole {
        StaffRole::Nurse
    }

    fn perform_duties(&self) -> String {
        format!("Nurse {} is assisting doctors.", self.person.name)
    }
}

// ─── Receptionist ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receptionist {
    pub id: StaffId,
    pub person: PersonInfo,
}

impl Receptionist {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            id: StaffId::new(),
            person: PersonInfo::new(name, age),
        }
    }
}

impl Introducible for Receptionist {
    fn person(&self) -> &PersonInfo {
        &self.person
    }
}

impl Staff for Receptionist {
    fn staff_id(&self) -> StaffId {
        self.id
    }

    fn role(&self) -> StaffRole {
        StaffRole::Receptionist
    }

    fn perform_duties(&self) -> String {
        format!("Receptionist {} is scheduling appointments.", self.person.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn introduce_uses_name_and_age() {
        let doctor = Doctor::new("Zosia", 50);
        assert_eq!(doctor.introduce(), "Hi, I am Zosia and I am 50 years old.");
        let patient = Patient::new("Maja", 40, "Flu");
        assert_eq!(patient.introduce(), "Hi, I am Maja and I am 40 years old.");
    }

    #[test]
    fn patient_receives_treatment_for_condition() {
        let patient = Patient::new("Maja", 40, "Flu");
        assert_eq!(
            patient.receive_treatment(),
            "Patient Maja is receiving treatment for: Flu"
        );
    }

    #[test]
    fn duties_differ_by_role() {
        let doctor = Doctor::new("Zosia", 50);
        let nurse = Nurse::new("Hania", 30);
        let receptionist = Receptionist::new("Ola", 28);

        assert_eq!(doctor.perform_duties(), "Dr. Zosia is seeing patients.");
        assert_eq!(nurse.perform_duties(), "Nurse Hania is assisting doctors.");
        assert_eq!(
            receptionist.perform_duties(),
            "Receptionist Ola is scheduling appointments."
        );
    }

    #[test]
    fn staff_display_name_uses_role_title() {
        let staff: Vec<Box<dyn Staff>> = vec![
            Box::new(Doctor::new("Zosia", 50)),
            Box::new(Nurse::new("Hania", 30)),
        ];
        let names: Vec<String> = staff.iter().map(|s| s.display_name()).collect();
        assert_eq!(names, vec!["Dr. Zosia", "Nurse Hania"]);
    }

    #[test]
    fn staff_id_follows_own_id() {
        let doctor = Doctor::new("Zosia", 50);
        assert_eq!(doctor.staff_id().as_uuid(), doctor.id.as_uuid());
        let nurse = Nurse::new("Hania", 30);
        assert_eq!(nurse.staff_id(), nurse.id);
        assert_ne!(nurse.staff_id(), Receptionist::new("Ola", 28).staff_id());
    }

    #[test]
    fn nurse_checks_vitals() {
        let nurse = Nurse::new("Hania", 30);
        let patient = Patient::new("Maja", 40, "Flu");
        assert_eq!(nurse.check_vitals(&patient), "Nurse Hania checking vitals of Maja");
    }

    #[test]
    fn doctor_verbal_prescription() {
        let doctor = Doctor::new("Zosia", 50);
        assert_eq!(
            doctor.prescribe_medicine("Rest"),
            "Dr. Zosia verbally prescribes: Rest"
        );
    }

    #[test]
    fn new_entities_start_empty() {
        let patient = Patient::new("Jula", 22, "Broken Arm");
        assert!(patient.appointments().is_empty());
        assert!(patient.prescriptions().is_empty());
        assert!(Doctor::new("Zosia", 50).calendar().is_empty());
    }
}
