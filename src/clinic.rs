//! The clinic registry: entry points a presentation layer calls.
//!
//! `ClinicSystem` owns the entity store plus the ordered set of registered
//! patients that search runs over. Booking and prescribing work for any
//! patient in the store; only search requires registration.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::format_timestamp;
use crate::display::{self, Listing};
use crate::models::{
    Doctor, DoctorId, Patient, PatientId, PrescriptionId, Staff, Treatment,
};
use crate::prescriptions;
use crate::scheduler::{self, BookingOutcome};
use crate::search::{self, SearchOutcome};
use crate::store::{ClinicStore, StoreError};

/// Outcome of a registry-level booking plus the line to show the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingReport {
    pub outcome: BookingOutcome,
    pub message: String,
}

impl BookingReport {
    pub fn is_booked(&self) -> bool {
        self.outcome.is_booked()
    }
}

#[derive(Debug, Default)]
pub struct ClinicSystem {
    store: ClinicStore,
    registered: Vec<PatientId>,
}

impl ClinicSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ClinicStore {
        &self.store
    }

    // ── People ──────────────────────────────────────────

    pub fn admit_patient(
        &mut self,
        name: impl Into<String>,
        age: u32,
        condition: impl Into<String>,
    ) -> Result<PatientId, StoreError> {
        self.store.insert_patient(Patient::new(name, age, condition))
    }

    pub fn hire_doctor(
        &mut self,
        name: impl Into<String>,
        age: u32,
    ) -> Result<DoctorId, StoreError> {
        self.store.insert_doctor(Doctor::new(name, age))
    }

    pub fn patient(&self, id: PatientId) -> Result<&Patient, StoreError> {
        self.store.patient(id)
    }

    pub fn doctor(&self, id: DoctorId) -> Result<&Doctor, StoreError> {
        self.store.doctor(id)
    }

    /// Make a patient discoverable by search. Returns `false` if already registered.
    pub fn register_patient(&mut self, patient_id: PatientId) -> Result<bool, StoreError> {
        let name = &self.store.patient(patient_id)?.person.name;
        if self.registered.contains(&patient_id) {
            return Ok(false);
        }
        tracing::info!(patient = %name, "Patient registered");
        self.registered.push(patient_id);
        Ok(true)
    }

    /// Registered patients in registration order.
    pub fn registered_patients(&self) -> &[PatientId] {
        &self.registered
    }

    // ── Booking ─────────────────────────────────────────

    /// Registry-level booking. Conflicts come back as a report, not an error.
    pub fn add_appointment(
        &mut self,
        patient_id: PatientId,
        doctor_id: DoctorId,
        at: NaiveDateTime,
    ) -> Result<BookingReport, StoreError> {
        let outcome = scheduler::schedule_appointment(&mut self.store, patient_id, doctor_id, at)?;
        let patient_name = &self.store.patient(patient_id)?.person.name;
        let doctor_name = &self.store.doctor(doctor_id)?.person.name;
        let when = format_timestamp(&at);

        let message = match outcome {
            BookingOutcome::Booked { .. } => {
                tracing::info!(patient = %patient_name, doctor = %doctor_name, at = %when, "Appointment set");
                format!("[OK] Appointment set for {patient_name} with Dr. {doctor_name} at {when}")
            }
            BookingOutcome::Conflict { .. } => {
                tracing::warn!(patient = %patient_name, doctor = %doctor_name, at = %when, "Doctor busy");
                format!("[ERROR] Dr. {doctor_name} is busy at {when}")
            }
        };
        Ok(BookingReport { outcome, message })
    }

    /// Booking made directly by a staff member. Same availability rule as
    /// `add_appointment`; the caller gets the bare outcome.
    pub fn schedule_by_staff(
        &mut self,
        staff: &dyn Staff,
        patient_id: PatientId,
        doctor_id: DoctorId,
        at: NaiveDateTime,
    ) -> Result<BookingOutcome, StoreError> {
        tracing::debug!(
            staff = %staff.staff_id(),
            name = %staff.display_name(),
            role = %staff.role(),
            "Staff booking"
        );
        scheduler::schedule_appointment(&mut self.store, patient_id, doctor_id, at)
    }

    pub fn is_available(&self, doctor_id: DoctorId, at: NaiveDateTime) -> Result<bool, StoreError> {
        scheduler::is_available(&self.store, doctor_id, at)
    }

    // ── Prescriptions ───────────────────────────────────

    pub fn create_prescription(
        &mut self,
        doctor_id: DoctorId,
        patient_id: PatientId,
    ) -> Result<PrescriptionId, StoreError> {
        prescriptions::create_prescription(&mut self.store, doctor_id, patient_id)
    }

    pub fn draft_prescription(
        &mut self,
        doctor_id: DoctorId,
        patient_id: PatientId,
    ) -> Result<PrescriptionId, StoreError> {
        prescriptions::draft_prescription(&mut self.store, doctor_id, patient_id)
    }

    pub fn add_treatment(
        &mut self,
        prescription_id: PrescriptionId,
        treatment: Treatment,
    ) -> Result<(), StoreError> {
        prescriptions::add_treatment(&mut self.store, prescription_id, treatment)
    }

    /// Idempotent: returns `false` when the prescription was already listed.
    pub fn add_prescription(
        &mut self,
        patient_id: PatientId,
        prescription_id: PrescriptionId,
    ) -> Result<bool, StoreError> {
        prescriptions::register_prescription(&mut self.store, patient_id, prescription_id)
    }

    // ── Display ─────────────────────────────────────────

    pub fn display_patient_appointments(&self, patient_id: PatientId) -> Result<Listing, StoreError> {
        display::patient_appointments(&self.store, patient_id)
    }

    pub fn display_doctor_calendar(&self, doctor_id: DoctorId) -> Result<Listing, StoreError> {
        display::doctor_calendar(&self.store, doctor_id)
    }

    pub fn display_patient_prescriptions(
        &self,
        patient_id: PatientId,
    ) -> Result<Listing, StoreError> {
        display::patient_prescriptions(&self.store, patient_id)
    }

    // ── Search ──────────────────────────────────────────

    pub fn find_patients_by_medicine_and_doctor(
        &self,
        medicine_name: &str,
        doctor_id: DoctorId,
    ) -> Result<SearchOutcome, StoreError> {
        search::find_patients_by_medicine_and_doctor(
            &self.store,
            &self.registered,
            medicine_name,
            doctor_id,
        )
    }
}
