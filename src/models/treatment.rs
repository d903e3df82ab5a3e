use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// What kind of care a treatment is. Only medicines carry a dosage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreatmentKind {
    Note,
    Medicine { dosage_mg: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TreatmentRepr")]
pub struct Treatment {
    description: String,
    #[serde(flatten)]
    kind: TreatmentKind,
}

/// Wire form, validated through `Treatment::build` on the way in.
#[derive(Deserialize)]
struct TreatmentRepr {
    description: String,
    #[serde(flatten)]
    kind: TreatmentKind,
}

impl TryFrom<TreatmentRepr> for Treatment {
    type Error = StoreError;

    fn try_from(repr: TreatmentRepr) -> Result<Self, Self::Error> {
        Self::build(repr.description, repr.kind)
    }
}

impl Treatment {
    /// A plain care instruction, e.g. "Bed rest".
    pub fn note(description: impl Into<String>) -> Result<Self, StoreError> {
        Self::build(description.into(), TreatmentKind::Note)
    }

    /// A dosed medicine. `dosage_mg` is in milligrams.
    pub fn medicine(name: impl Into<String>, dosage_mg: f64) -> Result<Self, StoreError> {
        Self::build(name.into(), TreatmentKind::Medicine { dosage_mg })
    }

    fn build(description: String, kind: TreatmentKind) -> Result<Self, StoreError> {
        if description.trim().is_empty() {
            return Err(StoreError::ConstraintViolation(
                "Treatment description must not be empty".into(),
            ));
        }
        Ok(Self { description, kind })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn dosage_mg(&self) -> Option<f64> {
        match self.kind {
            TreatmentKind::Medicine { dosage_mg } => Some(dosage_mg),
            TreatmentKind::Note => None,
        }
    }

    pub fn is_medicine(&self) -> bool {
        matches!(self.kind, TreatmentKind::Medicine { .. })
    }

    /// Case-insensitive medicine match. Notes never match.
    pub fn is_medicine_named(&self, name: &str) -> bool {
        self.is_medicine() && self.description.to_lowercase() == name.to_lowercase()
    }
}

impl std::fmt::Display for Treatment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TreatmentKind::Note => write!(f, "{}", self.description),
            TreatmentKind::Medicine { dosage_mg } => {
                write!(f, "{} ({dosage_mg}mg)", self.description)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medicine_display_includes_dosage() {
        let t = Treatment::medicine("Ibuprofen", 400.0).unwrap();
        assert_eq!(t.to_string(), "Ibuprofen (400mg)");
        assert_eq!(t.dosage_mg(), Some(400.0));
    }

    #[test]
    fn note_display_is_description_only() {
        let t = Treatment::note("Bed rest").unwrap();
        assert_eq!(t.to_string(), "Bed rest");
        assert_eq!(t.dosage_mg(), None);
        assert!(!t.is_medicine());
    }

    #[test]
    fn fractional_dosage_keeps_decimals() {
        let t = Treatment::medicine("Levothyroxine", 0.05).unwrap();
        assert_eq!(t.to_string(), "Levothyroxine (0.05mg)");
    }

    #[test]
    fn empty_description_rejected() {
        assert!(matches!(
            Treatment::note("   "),
            Err(StoreError::ConstraintViolation(_))
        ));
        assert!(Treatment::medicine("", 10.0).is_err());
    }

    #[test]
    fn medicine_name_match_ignores_case() {
        let t = Treatment::medicine("Ibuprofen", 400.0).unwrap();
        assert!(t.is_medicine_named("ibuprofen"));
        assert!(t.is_medicine_named("IBUPROFEN"));
        assert!(!t.is_medicine_named("Ibuprofen 400"));
    }

    #[test]
    fn note_never_matches_medicine_name() {
        let t = Treatment::note("Ibuprofen").unwrap();
        assert!(!t.is_medicine_named("Ibuprofen"));
    }

    #[test]
    fn serialized_shape_is_flat() {
        let t = Treatment::medicine("Calcium", 500.0).unwrap();
        let json: serde_json::Value = serde_json::to_value(&t).unwrap();
        assert_eq!(json["description"], "Calcium");
        assert_eq!(json["kind"], "medicine");
        assert_eq!(json["dosage_mg"], 500.0);

        let note: serde_json::Value =
            serde_json::to_value(Treatment::note("Bed rest").unwrap()).unwrap();
        assert_eq!(note["kind"], "note");
        assert!(note.get("dosage_mg").is_none());
    }

    #[test]
    fn deserialize_enforces_description() {
        let blank = serde_json::from_str::<Treatment>(r#"{"description":"","kind":"note"}"#);
        assert!(blank.is_err());
        let padded = serde_json::from_str::<Treatment>(
            r#"{"description":"  ","kind":"medicine","dosage_mg":10.0}"#,
        );
        assert!(padded.is_err());

        let ok: Treatment =
            serde_json::from_str(r#"{"description":"Calcium","kind":"medicine","dosage_mg":500.0}"#)
                .unwrap();
        assert_eq!(ok, Treatment::medicine("Calcium", 500.0).unwrap());
    }
}
