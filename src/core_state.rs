//! Shared clinic state for multi-actor use.
//!
//! `CoreState` wraps the `ClinicSystem` in an `RwLock`. Displays and search
//! take the read lock; booking and prescribing take the write lock, so the
//! availability check and the calendar append are one atomic step and a
//! doctor can never be double-booked from two threads.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDateTime;

use crate::clinic::{BookingReport, ClinicSystem};
use crate::display::Listing;
use crate::models::{DoctorId, PatientId};
use crate::search::SearchOutcome;
use crate::store::StoreError;

pub struct CoreState {
    clinic: RwLock<ClinicSystem>,
}

impl CoreState {
    pub fn new() -> Self {
        Self::from_clinic(ClinicSystem::new())
    }

    pub fn from_clinic(clinic: ClinicSystem) -> Self {
        Self {
            clinic: RwLock::new(clinic),
        }
    }

    // ── Clinic access (read path) ───────────────────────

    pub fn read_clinic(&self) -> Result<RwLockReadGuard<'_, ClinicSystem>, CoreError> {
        self.clinic.read().map_err(|_| CoreError::LockPoisoned)
    }

    // ── Clinic mutation (write path) ────────────────────

    pub fn write_clinic(&self) -> Result<RwLockWriteGuard<'_, ClinicSystem>, CoreError> {
        self.clinic.write().map_err(|_| CoreError::LockPoisoned)
    }

    /// Book under the write lock.
    pub fn add_appointment(
        &self,
        patient_id: PatientId,
        doctor_id: DoctorId,
        at: NaiveDateTime,
    ) -> Result<BookingReport, CoreError> {
        let mut clinic = self.write_clinic()?;
        Ok(clinic.add_appointment(patient_id, doctor_id, at)?)
    }

    pub fn display_doctor_calendar(&self, doctor_id: DoctorId) -> Result<Listing, CoreError> {
        let clinic = self.read_clinic()?;
        Ok(clinic.display_doctor_calendar(doctor_id)?)
    }

    pub fn find_patients_by_medicine_and_doctor(
        &self,
        medicine_name: &str,
        doctor_id: DoctorId,
    ) -> Result<SearchOutcome, CoreError> {
        let clinic = self.read_clinic()?;
        Ok(clinic.find_patients_by_medicine_and_doctor(medicine_name, doctor_id)?)
    }

    /// Take the clinic back out, e.g. once all worker threads are done.
    pub fn into_inner(self) -> Result<ClinicSystem, CoreError> {
        self.clinic.into_inner().map_err(|_| CoreError::LockPoisoned)
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    use chrono::NaiveDate;

    fn slot() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn concurrent_same_slot_books_once() {
        let mut clinic = ClinicSystem::new();
        let zosia = clinic.hire_doctor("Zosia", 50).unwrap();
        let patients: Vec<PatientId> = (0..8)
            .map(|i| clinic.admit_patient(format!("Patient {i}"), 30, "Flu").unwrap())
            .collect();
        let state = Arc::new(CoreState::from_clinic(clinic));

        let handles: Vec<_> = patients
            .into_iter()
            .map(|patient| {
                let state = Arc::clone(&state);
                thread::spawn(move || state.add_appointment(patient, zosia, slot()).unwrap())
            })
            .collect();

        let booked = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|report| report.is_booked())
            .count();
        assert_eq!(booked, 1);

        let calendar = state.display_doctor_calendar(zosia).unwrap();
        assert_eq!(calendar.lines.len(), 1);
    }

    #[test]
    fn store_errors_pass_through() {
        let state = CoreState::new();
        let err = state
            .add_appointment(PatientId::new(), DoctorId::new(), slot())
            .unwrap_err();
        assert!(matches!(err, CoreError::Store(StoreError::NotFound { .. })));
    }

    #[test]
    fn poisoned_lock_reported() {
        let state = Arc::new(CoreState::new());
        let poisoner = Arc::clone(&state);
        let _ = thread::spawn(move || {
            let _guard = poisoner.write_clinic().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(state.read_clinic(), Err(CoreError::LockPoisoned)));
    }

    #[test]
    fn into_inner_returns_clinic() {
        let state = CoreState::new();
        {
            let mut clinic = state.write_clinic().unwrap();
            clinic.hire_doctor("Zosia", 50).unwrap();
        }
        let clinic = state.into_inner().unwrap();
        assert!(clinic.registered_patients().is_empty());
    }
}
