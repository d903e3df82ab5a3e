//! In-memory arena owning every clinic entity.
//!
//! Patients and doctors refer to appointments and prescriptions by id, so
//! both sides of a booking see the same record without shared ownership.
//! Appointments are handed out only by shared reference.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::models::{
    Appointment, AppointmentId, Doctor, DoctorId, Patient, PatientId, Prescription,
    PrescriptionId,
};

use super::StoreError;

#[derive(Debug, Default)]
pub struct ClinicStore {
    patients: HashMap<PatientId, Patient>,
    doctors: HashMap<DoctorId, Doctor>,
    appointments: HashMap<AppointmentId, Appointment>,
    prescriptions: HashMap<PrescriptionId, Prescription>,
}

impl ClinicStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Patients ────────────────────────────────────────

    /// Fails if a patient with the same id is already stored, so a stale
    /// copy can never wipe the stored appointments and prescriptions.
    pub fn insert_patient(&mut self, patient: Patient) -> Result<PatientId, StoreError> {
        let id = patient.id;
        match self.patients.entry(id) {
            Entry::Occupied(_) => Err(StoreError::duplicate("patient", id)),
            Entry::Vacant(slot) => {
                slot.insert(patient);
                Ok(id)
            }
        }
    }

    pub fn patient(&self, id: PatientId) -> Result<&Patient, StoreError> {
        self.patients
            .get(&id)
            .ok_or_else(|| StoreError::not_found("patient", id))
    }

    pub(crate) fn patient_mut(&mut self, id: PatientId) -> Result<&mut Patient, StoreError> {
        self.patients
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("patient", id))
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    // ── Doctors ─────────────────────────────────────────

    pub fn insert_doctor(&mut self, doctor: Doctor) -> Result<DoctorId, StoreError> {
        let id = doctor.id;
        match self.doctors.entry(id) {
            Entry::Occupied(_) => Err(StoreError::duplicate("doctor", id)),
            Entry::Vacant(slot) => {
                slot.insert(doctor);
                Ok(id)
            }
        }
    }

    pub fn doctor(&self, id: DoctorId) -> Result<&Doctor, StoreError> {
        self.doctors
            .get(&id)
            .ok_or_else(|| StoreError::not_found("doctor", id))
    }

    pub(crate) fn doctor_mut(&mut self, id: DoctorId) -> Result<&mut Doctor, StoreError> {
        self.doctors
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("doctor", id))
    }

    // ── Appointments ────────────────────────────────────

    pub(crate) fn insert_appointment(&mut self, appointment: Appointment) -> AppointmentId {
        let id = appointment.id();
        self.appointments.insert(id, appointment);
        id
    }

    pub fn appointment(&self, id: AppointmentId) -> Result<&Appointment, StoreError> {
        self.appointments
            .get(&id)
            .ok_or_else(|| StoreError::not_found("appointment", id))
    }

    /// Resolve a list of appointment ids, preserving order.
    pub fn appointments<'a>(
        &'a self,
        ids: &[AppointmentId],
    ) -> Result<Vec<&'a Appointment>, StoreError> {
        ids.iter().map(|id| self.appointment(*id)).collect()
    }

    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }

    // ── Prescriptions ───────────────────────────────────

    pub(crate) fn insert_prescription(&mut self, prescription: Prescription) -> PrescriptionId {
        let id = prescription.id;
        self.prescriptions.insert(id, prescription);
        id
    }

    pub fn prescription(&self, id: PrescriptionId) -> Result<&Prescription, StoreError> {
        self.prescriptions
            .get(&id)
            .ok_or_else(|| StoreError::not_found("prescription", id))
    }

    pub(crate) fn prescription_mut(
        &mut self,
        id: PrescriptionId,
    ) -> Result<&mut Prescription, StoreError> {
        self.prescriptions
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("prescription", id))
    }
}
