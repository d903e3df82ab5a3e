//! Doctor availability and appointment booking.
//!
//! A doctor is busy only at the exact instants already on their calendar.
//! Both the registry entry point and staff-initiated bookings go through
//! `schedule_appointment`, so there is a single availability rule.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::{Appointment, AppointmentId, DoctorId, PatientId};
use crate::store::{ClinicStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookingOutcome {
    Booked { appointment_id: AppointmentId },
    Conflict { existing_id: AppointmentId },
}

impl BookingOutcome {
    pub fn is_booked(&self) -> bool {
        matches!(self, Self::Booked { .. })
    }
}

/// The appointment already holding `at` on the doctor's calendar, if any.
pub fn conflicting_appointment(
    store: &ClinicStore,
    doctor_id: DoctorId,
    at: NaiveDateTime,
) -> Result<Option<AppointmentId>, StoreError> {
    let doctor = store.doctor(doctor_id)?;
    for id in doctor.calendar() {
        if store.appointment(*id)?.at() == at {
            return Ok(Some(*id));
        }
    }
    Ok(None)
}

pub fn is_available(
    store: &ClinicStore,
    doctor_id: DoctorId,
    at: NaiveDateTime,
) -> Result<bool, StoreError> {
    Ok(conflicting_appointment(store, doctor_id, at)?.is_none())
}

/// Book `patient_id` with `doctor_id` at `at`.
///
/// On conflict nothing is written. Unknown ids fail before any mutation.
pub fn schedule_appointment(
    store: &mut ClinicStore,
    patient_id: PatientId,
    doctor_id: DoctorId,
    at: NaiveDateTime,
) -> Result<BookingOutcome, StoreError> {
    store.patient(patient_id)?;

    if let Some(existing_id) = conflicting_appointment(store, doctor_id, at)? {
        tracing::debug!(doctor = %doctor_id, %at, existing = %existing_id, "Doctor busy");
        return Ok(BookingOutcome::Conflict { existing_id });
    }

    let appointment_id = store.insert_appointment(Appointment::new(at, patient_id, doctor_id));
    store.doctor_mut(doctor_id)?.calendar.push(appointment_id);
    store.patient_mut(patient_id)?.appointments.push(appointment_id);

    tracing::debug!(
        appointment = %appointment_id,
        patient = %patient_id,
        doctor = %doctor_id,
        %at,
        "Appointment booked"
    );
    Ok(BookingOutcome::Booked { appointment_id })
}
