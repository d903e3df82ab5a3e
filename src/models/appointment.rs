use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ids::{AppointmentId, DoctorId, PatientId};

/// A booked slot. Fields are private: once created an appointment never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    id: AppointmentId,
    at: NaiveDateTime,
    patient_id: PatientId,
    doctor_id: DoctorId,
}

impl Appointment {
    pub(crate) fn new(at: NaiveDateTime, patient_id: PatientId, doctor_id: DoctorId) -> Self {
        Self {
            id: AppointmentId::new(),
            at,
            patient_id,
            doctor_id,
        }
    }

    pub fn id(&self) -> AppointmentId {
        self.id
    }

    pub fn at(&self) -> NaiveDateTime {
        self.at
    }

    pub fn patient_id(&self) -> PatientId {
        self.patient_id
    }

    pub fn doctor_id(&self) -> DoctorId {
        self.doctor_id
    }
}
