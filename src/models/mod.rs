pub mod appointment;
pub mod enums;
pub mod ids;
pub mod person;
pub mod prescription;
pub mod treatment;

pub use appointment::Appointment;
pub use enums::StaffRole;
pub use ids::{AppointmentId, DoctorId, PatientId, PrescriptionId, StaffId};
pub use person::{
    Doctor, Introducible, Nurse, Patient, PersonInfo, Receptionist, Staff, Treatable,
};
pub use prescription::Prescription;
pub use treatment::{Treatment, TreatmentKind};
