//! The illustrative clinic scenario run by the binary.
//!
//! Returns the transcript instead of printing it so the whole flow is testable.

use chrono::{Duration, NaiveDateTime};

use crate::clinic::ClinicSystem;
use crate::config::DEMO_FOLLOW_UP_HOURS;
use crate::display::Listing;
use crate::models::{Introducible, Nurse, Staff, Treatable, Treatment};
use crate::store::StoreError;

fn push_listing(out: &mut Vec<String>, listing: &Listing) {
    out.push(String::new());
    out.extend(listing.to_string().lines().map(String::from));
}

pub fn run_demo(start: NaiveDateTime) -> Result<Vec<String>, StoreError> {
    let mut out = vec!["=== CLINIC SYSTEM DEMO ===".to_string()];

    let mut clinic = ClinicSystem::new();
    let zosia = clinic.hire_doctor("Zosia", 50)?;
    let hania = Nurse::new("Hania", 30);
    let maja = clinic.admit_patient("Maja", 40, "Flu")?;
    let jula = clinic.admit_patient("Jula", 22, "Broken Arm")?;

    clinic.register_patient(maja)?;
    clinic.register_patient(jula)?;

    out.push(String::new());
    out.push(">>> Scheduling Appointments:".into());
    for (patient, at) in [
        (maja, start),
        (jula, start),
        (jula, start + Duration::hours(DEMO_FOLLOW_UP_HOURS)),
    ] {
        out.push(clinic.add_appointment(patient, zosia, at)?.message);
    }

    push_listing(&mut out, &clinic.display_doctor_calendar(zosia)?);

    out.push(String::new());
    out.push(">>> Creating Prescriptions:".into());

    let first = clinic.create_prescription(zosia, maja)?;
    clinic.add_treatment(first, Treatment::medicine("Ibuprofen", 400.0)?)?;
    clinic.add_treatment(first, Treatment::note("Bed rest")?)?;

    let second = clinic.create_prescription(zosia, jula)?;
    clinic.add_treatment(second, Treatment::medicine("Ibuprofen", 400.0)?)?;
    clinic.add_treatment(second, Treatment::medicine("Calcium", 500.0)?)?;

    push_listing(&mut out, &clinic.display_patient_prescriptions(maja)?);

    for medicine in ["Ibuprofen", "Calcium"] {
        let doctor_name = &clinic.doctor(zosia)?.person.name;
        out.push(String::new());
        out.push(format!(
            "--- Searching: Patients with {medicine} from Dr. {doctor_name} ---"
        ));
        let outcome = clinic.find_patients_by_medicine_and_doctor(medicine, zosia)?;
        out.extend(outcome.report_lines());
    }

    out.push(String::new());
    out.push(">>> Staff & Patient Checks:".into());
    let doctor = clinic.doctor(zosia)?;
    let patient = clinic.patient(maja)?;
    out.push(doctor.introduce());
    out.push(doctor.perform_duties());
    out.push(patient.receive_treatment());
    out.push(hania.check_vitals(patient));

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn section<'a>(lines: &'a [String], header: &str) -> Vec<&'a str> {
        lines
            .iter()
            .skip_while(|l| l.as_str() != header)
            .skip(1)
            .take_while(|l| !l.is_empty())
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn scheduling_conflicts_then_follow_up_succeeds() {
        let lines = run_demo(start()).unwrap();
        assert_eq!(
            section(&lines, ">>> Scheduling Appointments:"),
            vec![
                "[OK] Appointment set for Maja with Dr. Zosia at 2026-03-02 09:00:00",
                "[ERROR] Dr. Zosia is busy at 2026-03-02 09:00:00",
                "[OK] Appointment set for Jula with Dr. Zosia at 2026-03-02 10:00:00",
            ]
        );
    }

    #[test]
    fn calendar_holds_exactly_two_entries() {
        let lines = run_demo(start()).unwrap();
        assert_eq!(
            section(&lines, "--- Calendar for Dr. Zosia ---"),
            vec![
                "2026-03-02 09:00:00 with Patient: Maja",
                "2026-03-02 10:00:00 with Patient: Jula",
            ]
        );
    }

    #[test]
    fn prescriptions_listed_for_maja() {
        let lines = run_demo(start()).unwrap();
        assert_eq!(
            section(&lines, "--- Prescriptions for Maja ---"),
            vec!["Prescription by Dr. Zosia: [Ibuprofen (400mg), Bed rest]"]
        );
    }

    #[test]
    fn searches_report_expected_patients() {
        let lines = run_demo(start()).unwrap();
        assert_eq!(
            section(&lines, "--- Searching: Patients with Ibuprofen from Dr. Zosia ---"),
            vec!["Found: Maja", "Found: Jula"]
        );
        assert_eq!(
            section(&lines, "--- Searching: Patients with Calcium from Dr. Zosia ---"),
            vec!["Found: Jula"]
        );
    }

    #[test]
    fn closing_checks_print_role_lines() {
        let lines = run_demo(start()).unwrap();
        assert_eq!(
            section(&lines, ">>> Staff & Patient Checks:"),
            vec![
                "Hi, I am Zosia and I am 50 years old.",
                "Dr. Zosia is seeing patients.",
                "Patient Maja is receiving treatment for: Flu",
                "Nurse Hania checking vitals of Maja",
            ]
        );
    }
}
