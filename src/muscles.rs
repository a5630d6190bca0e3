// muscles.rs — fixed clinical reference dataset, embedded at compile time
// and validated once on startup.
use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleStatus {
    /// Shortened / overactive.
    Tight,
    /// Lengthened / inhibited.
    Weak,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MuscleRecord {
    pub id: String,
    pub name: String,
    pub latin_name: String,
    pub status: MuscleStatus,
    pub description: String,
    pub mechanism: String,
    pub exercise: String,
    /// Non-owning cross-reference into the same table; must resolve.
    #[serde(default)]
    pub antagonist_id: Option<String>,
}

impl MuscleRecord {
    /// The exercise text packs up to two recommendations behind a fixed
    /// "; " delimiter.
    pub fn exercise_steps(&self) -> impl Iterator<Item = &str> {
        self.exercise
            .split("; ")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .take(2)
    }
}

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to parse muscle dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate muscle id '{0}'")]
    DuplicateId(String),
    #[error("muscle '{id}' links to unknown antagonist '{target}'")]
    DanglingAntagonist { id: String, target: String },
}

/// Immutable, ordered muscle table. Loaded once, never mutated.
pub struct MuscleLibrary {
    muscles: Vec<MuscleRecord>,
}

impl MuscleLibrary {
    pub fn load() -> Result<Self, LibraryError> {
        Self::from_json(include_str!("../assets/muscles.json"))
    }

    pub fn from_json(json: &str) -> Result<Self, LibraryError> {
        let muscles: Vec<MuscleRecord> = serde_json::from_str(json)?;
        for (i, m) in muscles.iter().enumerate() {
            if muscles[..i].iter().any(|other| other.id == m.id) {
                return Err(LibraryError::DuplicateId(m.id.clone()));
            }
            if let Some(target) = &m.antagonist_id {
                if !muscles.iter().any(|other| &other.id == target) {
                    return Err(LibraryError::DanglingAntagonist {
                        id: m.id.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
        Ok(Self { muscles })
    }

    pub fn len(&self) -> usize {
        self.muscles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MuscleRecord> {
        self.muscles.iter()
    }

    /// Unknown ids resolve to `None`; callers treat that as "no selection".
    pub fn get(&self, id: &str) -> Option<&MuscleRecord> {
        self.muscles.iter().find(|m| m.id == id)
    }

    pub fn antagonist_of(&self, id: &str) -> Option<&MuscleRecord> {
        let target = self.get(id)?.antagonist_id.as_deref()?;
        self.get(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_loads_and_validates() {
        let lib = MuscleLibrary::load().expect("embedded dataset must be valid");
        assert_eq!(lib.len(), 6);
        for id in ["pecs", "upper_traps", "levator", "deep_flexors", "rhomboids", "serratus"] {
            assert!(lib.get(id).is_some(), "missing record {id}");
        }
    }

    #[test]
    fn antagonist_links_work_in_both_directions() {
        let lib = MuscleLibrary::load().unwrap();
        assert_eq!(lib.antagonist_of("pecs").unwrap().id, "rhomboids");
        assert_eq!(lib.antagonist_of("rhomboids").unwrap().id, "pecs");
        assert_eq!(lib.antagonist_of("upper_traps").unwrap().id, "deep_flexors");
        assert_eq!(lib.antagonist_of("deep_flexors").unwrap().id, "upper_traps");
    }

    #[test]
    fn status_split_is_three_tight_three_weak() {
        let lib = MuscleLibrary::load().unwrap();
        let tight = lib.iter().filter(|m| m.status == MuscleStatus::Tight).count();
        assert_eq!(tight, 3);
        assert_eq!(lib.len() - tight, 3);
    }

    #[test]
    fn unknown_id_is_no_selection() {
        let lib = MuscleLibrary::load().unwrap();
        assert!(lib.get("biceps").is_none());
        assert!(lib.antagonist_of("biceps").is_none());
    }

    #[test]
    fn exercise_text_splits_into_at_most_two_steps() {
        let lib = MuscleLibrary::load().unwrap();
        for m in lib.iter() {
            let steps: Vec<_> = m.exercise_steps().collect();
            assert!(!steps.is_empty(), "{} has no exercise steps", m.id);
            assert!(steps.len() <= 2);
        }
        let pecs: Vec<_> = lib.get("pecs").unwrap().exercise_steps().collect();
        assert_eq!(pecs, ["Doorway chest stretch", "foam-roll thoracic release"]);
    }

    #[test]
    fn dangling_antagonist_is_rejected() {
        let json = r#"[{
            "id": "a", "name": "A", "latin_name": "A", "status": "tight",
            "description": "", "mechanism": "", "exercise": "x",
            "antagonist_id": "missing"
        }]"#;
        assert!(matches!(
            MuscleLibrary::from_json(json),
            Err(LibraryError::DanglingAntagonist { .. })
        ));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let json = r#"[
            {"id": "a", "name": "A", "latin_name": "A", "status": "tight",
             "description": "", "mechanism": "", "exercise": "x"},
            {"id": "a", "name": "A2", "latin_name": "A", "status": "weak",
             "description": "", "mechanism": "", "exercise": "x"}
        ]"#;
        assert!(matches!(MuscleLibrary::from_json(json), Err(LibraryError::DuplicateId(_))));
    }
}
