//! Prescription issuance: create, extend with treatments, register on a patient.

use crate::models::{DoctorId, PatientId, Prescription, PrescriptionId, Treatment};
use crate::store::{ClinicStore, StoreError};

/// Issue an empty prescription from `doctor_id` to `patient_id`.
///
/// The prescription is on the patient's list as soon as it exists.
pub fn create_prescription(
    store: &mut ClinicStore,
    doctor_id: DoctorId,
    patient_id: PatientId,
) -> Result<PrescriptionId, StoreError> {
    store.doctor(doctor_id)?;
    store.patient(patient_id)?;

    let id = store.insert_prescription(Prescription::new(doctor_id, patient_id));
    store.patient_mut(patient_id)?.prescriptions.push(id);

    tracing::info!(prescription = %id, doctor = %doctor_id, patient = %patient_id, "Prescription issued");
    Ok(id)
}

/// Write a prescription without putting it on the patient's list yet.
///
/// It stays invisible to displays and search until `register_prescription`.
pub fn draft_prescription(
    store: &mut ClinicStore,
    doctor_id: DoctorId,
    patient_id: PatientId,
) -> Result<PrescriptionId, StoreError> {
    store.doctor(doctor_id)?;
    store.patient(patient_id)?;

    let id = store.insert_prescription(Prescription::new(doctor_id, patient_id));
    tracing::debug!(prescription = %id, doctor = %doctor_id, patient = %patient_id, "Prescription drafted");
    Ok(id)
}

pub fn add_treatment(
    store: &mut ClinicStore,
    prescription_id: PrescriptionId,
    treatment: Treatment,
) -> Result<(), StoreError> {
    let prescription = store.prescription_mut(prescription_id)?;
    tracing::debug!(prescription = %prescription_id, treatment = %treatment, "Treatment added");
    prescription.push_treatment(treatment);
    Ok(())
}

/// Put a prescription on its patient's list unless it is already there.
///
/// Returns `true` when the list changed. A prescription can only be
/// registered on the patient it was issued to.
pub fn register_prescription(
    store: &mut ClinicStore,
    patient_id: PatientId,
    prescription_id: PrescriptionId,
) -> Result<bool, StoreError> {
    let issued_to = store.prescription(prescription_id)?.patient_id;
    if issued_to != patient_id {
        return Err(StoreError::ConstraintViolation(format!(
            "Prescription {prescription_id} was issued to patient {issued_to}, not {patient_id}"
        )));
    }

    let patient = store.patient_mut(patient_id)?;
    if patient.prescriptions.contains(&prescription_id) {
        tracing::debug!(prescription = %prescription_id, patient = %patient_id, "Prescription already registered");
        return Ok(false);
    }
    patient.prescriptions.push(prescription_id);
    Ok(true)
}
