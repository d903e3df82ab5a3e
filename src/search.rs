//! Which registered patients received medicine M from doctor D.

use serde::Serialize;

use crate::models::{DoctorId, PatientId, PrescriptionId};
use crate::store::{ClinicStore, StoreError};

/// One qualifying treatment. A patient appears once per match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicineMatch {
    pub patient_id: PatientId,
    pub patient_name: String,
    pub prescription_id: PrescriptionId,
    pub dosage_mg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", content = "matches", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found(Vec<MedicineMatch>),
    NoPatientsFound,
}

impl SearchOutcome {
    pub fn matches(&self) -> &[MedicineMatch] {
        match self {
            Self::Found(matches) => matches,
            Self::NoPatientsFound => &[],
        }
    }

    pub fn patient_names(&self) -> Vec<&str> {
        self.matches().iter().map(|m| m.patient_name.as_str()).collect()
    }

    /// "Found: Maja" per match, or a single "No patients found." line.
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            Self::Found(matches) => matches
                .iter()
                .map(|m| format!("Found: {}", m.patient_name))
                .collect(),
            Self::NoPatientsFound => vec!["No patients found.".to_string()],
        }
    }
}

/// Scan `registered` patients for medicine-kind treatments named
/// `medicine_name` (case-insensitive) on prescriptions issued by `doctor_id`.
///
/// Doctors are compared by id, never by name.
pub fn find_patients_by_medicine_and_doctor(
    store: &ClinicStore,
    registered: &[PatientId],
    medicine_name: &str,
    doctor_id: DoctorId,
) -> Result<SearchOutcome, StoreError> {
    let doctor = store.doctor(doctor_id)?;
    let _span = tracing::info_span!(
        "medicine_search",
        medicine = medicine_name,
        doctor = %doctor.person.name
    )
    .entered();

    let mut matches = Vec::new();
    for patient_id in registered {
        let patient = store.patient(*patient_id)?;
        for prescription_id in patient.prescriptions() {
            let prescription = store.prescription(*prescription_id)?;
            if prescription.doctor_id != doctor_id {
                continue;
            }
            for treatment in prescription.treatments() {
                if !treatment.is_medicine_named(medicine_name) {
                    continue;
                }
                tracing::info!(patient = %patient.person.name, "Found");
                matches.push(MedicineMatch {
                    patient_id: *patient_id,
                    patient_name: patient.person.name.clone(),
                    prescription_id: *prescription_id,
                    dosage_mg: treatment.dosage_mg().unwrap_or_default(),
                });
            }
        }
    }

    if matches.is_empty() {
        tracing::info!("No patients found");
        return Ok(SearchOutcome::NoPatientsFound);
    }
    Ok(SearchOutcome::Found(matches))
}
