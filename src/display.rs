//! Human-readable listings for patients and doctors.
//!
//! Every listing keeps its owner's insertion order. Nothing is sorted by time.

use serde::Serialize;

use crate::config::format_timestamp;
use crate::models::{DoctorId, PatientId};
use crate::store::{ClinicStore, StoreError};

/// A titled block of lines, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub title: String,
    pub lines: Vec<String>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "--- {} ---", self.title)?;
        for line in &self.lines {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// "Date: 2026-03-02 09:00:00 | Doctor: Zosia" per appointment.
pub fn patient_appointments(
    store: &ClinicStore,
    patient_id: PatientId,
) -> Result<Listing, StoreError> {
    let patient = store.patient(patient_id)?;
    let mut lines = Vec::with_capacity(patient.appointments().len());
    for appt in store.appointments(patient.appointments())? {
        let doctor = store.doctor(appt.doctor_id())?;
        lines.push(format!(
            "Date: {} | Doctor: {}",
            format_timestamp(&appt.at()),
            doctor.person.name
        ));
    }
    Ok(Listing {
        title: format!("Appointments for {}", patient.person.name),
        lines,
    })
}

/// "2026-03-02 09:00:00 with Patient: Maja" per calendar entry.
pub fn doctor_calendar(store: &ClinicStore, doctor_id: DoctorId) -> Result<Listing, StoreError> {
    let doctor = store.doctor(doctor_id)?;
    let mut lines = Vec::with_capacity(doctor.calendar().len());
    for appt in store.appointments(doctor.calendar())? {
        let patient = store.patient(appt.patient_id())?;
        lines.push(format!(
            "{} with Patient: {}",
            format_timestamp(&appt.at()),
            patient.person.name
        ));
    }
    Ok(Listing {
        title: format!("Calendar for Dr. {}", doctor.person.name),
        lines,
    })
}

/// "Prescription by Dr. Zosia: [Ibuprofen (400mg), Bed rest]" per prescription.
pub fn patient_prescriptions(
    store: &ClinicStore,
    patient_id: PatientId,
) -> Result<Listing, StoreError> {
    let patient = store.patient(patient_id)?;
    let mut lines = Vec::with_capacity(patient.prescriptions().len());
    for id in patient.prescriptions() {
        let prescription = store.prescription(*id)?;
        let doctor = store.doctor(prescription.doctor_id)?;
        lines.push(format!(
            "Prescription by Dr. {}: {}",
            doctor.person.name,
            prescription.treatment_list()
        ));
    }
    Ok(Listing {
        title: format!("Prescriptions for {}", patient.person.name),
        lines,
    })
}
