use serde::{Deserialize, Serialize};

use super::ids::{DoctorId, PatientId, PrescriptionId};
use super::treatment::Treatment;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: PrescriptionId,
    pub doctor_id: DoctorId,
    pub patient_id: PatientId,
    pub(crate) treatments: Vec<Treatment>,
}

impl Prescription {
    pub(crate) fn new(doctor_id: DoctorId, patient_id: PatientId) -> Self {
        Self {
            id: PrescriptionId::new(),
            doctor_id,
            patient_id,
            treatments: Vec::new(),
        }
    }

    /// Treatments in the order they were added.
    pub fn treatments(&self) -> &[Treatment] {
        &self.treatments
    }

    pub(crate) fn push_treatment(&mut self, treatment: Treatment) {
        self.treatments.push(treatment);
    }

    /// "[Ibuprofen (400mg), Bed rest]"
    pub fn treatment_list(&self) -> String {
        let items: Vec<String> = self.treatments.iter().map(ToString::to_string).collect();
        format!("[{}]", items.join(", "))
    }
}
