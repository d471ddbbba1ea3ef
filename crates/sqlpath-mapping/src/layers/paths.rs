//! Learning path composition across all three layers.

use sqlpath_core::entities::ConceptInfo;
use sqlpath_core::enums::Difficulty;
use sqlpath_core::responses::{CuratedPath, LearningPath};

use crate::system::ConceptMappingSystem;

impl ConceptMappingSystem {
    /// Resolve an error subtype to an ordered, readable learning path.
    ///
    /// `None` only when the subtype is not in the catalog. Concept ids the
    /// registry does not know are skipped; the survivors keep their order.
    #[must_use]
    pub fn get_learning_path(&self, key: &str) -> Option<LearningPath> {
        let error_info = self.get_error_info(key)?;
        let concepts = self.resolve_concepts(key, self.get_remediation_order(key));

        Some(LearningPath {
            error_subtype: key.to_string(),
            error_info: error_info.clone(),
            teaching_strategy: self.get_teaching_strategy(key).map(String::from),
            total_read_time: total_read_time(&concepts),
            difficulty: overall_difficulty(&concepts),
            concepts,
        })
    }

    /// Names of the registry's curated paths, in declaration order.
    #[must_use]
    pub fn list_curated_paths(&self) -> Vec<&str> {
        self.concept_registry().learning_paths.keys().collect()
    }

    /// Resolve a curated path by name, dropping unknown concept ids.
    #[must_use]
    pub fn get_curated_path(&self, name: &str) -> Option<CuratedPath> {
        let ids = self.concept_registry().learning_paths.get(name)?;
        let concepts = self.resolve_concepts(name, ids);

        Some(CuratedPath {
            name: name.to_string(),
            total_read_time: total_read_time(&concepts),
            difficulty: overall_difficulty(&concepts),
            concepts,
        })
    }

    fn resolve_concepts(&self, owner: &str, ids: &[String]) -> Vec<ConceptInfo> {
        ids.iter()
            .filter_map(|id| {
                let concept = self.get_concept_content(id);
                if concept.is_none() {
                    tracing::debug!(owner, concept_id = %id, "skipping unknown concept");
                }
                concept.cloned()
            })
            .collect()
    }
}

/// Sum of read times in minutes; 0 for an empty path.
#[must_use]
pub fn total_read_time(concepts: &[ConceptInfo]) -> f64 {
    concepts.iter().map(|concept| concept.estimated_read_time).sum()
}

/// Hardest difficulty present; `Beginner` for an empty path.
#[must_use]
pub fn overall_difficulty(concepts: &[ConceptInfo]) -> Difficulty {
    concepts
        .iter()
        .map(|concept| concept.difficulty)
        .max()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use sqlpath_core::entities::ConceptInfo;
    use sqlpath_core::enums::{Difficulty, QualityStatus};
    use sqlpath_core::responses::LearningPath;

    use super::{overall_difficulty, total_read_time};
    use crate::test_support::helpers::fixture_system;

    fn concept(id: &str, difficulty: Difficulty, minutes: f64) -> ConceptInfo {
        ConceptInfo {
            id: id.into(),
            title: id.into(),
            description: String::new(),
            difficulty,
            estimated_read_time: minutes,
            category: "Test".into(),
            content_location: format!("concepts/{id}.md"),
            quality_status: QualityStatus::Draft,
            learning_objectives: vec![],
        }
    }

    fn concept_ids(path: &LearningPath) -> Vec<&str> {
        path.concepts.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn path_follows_remediation_order() {
        let system = fixture_system();
        let path = system.get_learning_path("missing_comma_in_select").unwrap();
        assert_eq!(path.error_subtype, "missing_comma_in_select");
        assert_eq!(path.error_info.id, 4);
        assert_eq!(path.teaching_strategy.as_deref(), Some("syntax_drill"));
        assert_eq!(concept_ids(&path), vec!["syntax-error", "select-basic"]);
        assert_eq!(path.total_read_time, 8.0);
        assert_eq!(path.difficulty, Difficulty::Beginner);
    }

    #[test]
    fn path_without_explicit_order_uses_concept_ids() {
        let system = fixture_system();
        let path = system.get_learning_path("incorrect_join_type").unwrap();
        assert_eq!(concept_ids(&path), vec!["joins", "inner-join", "outer-join"]);
        assert_eq!(path.total_read_time, 30.0);
        assert_eq!(path.difficulty, Difficulty::Advanced);
    }

    #[test]
    fn low_confidence_mapping_still_yields_a_path() {
        let system = fixture_system();
        let path = system.get_learning_path("correlated_subquery_error").unwrap();
        // `subqueries` is not in the registry.
        assert_eq!(concept_ids(&path), vec!["correlated-subquery"]);
        assert_eq!(path.total_read_time, 15.0);
        assert_eq!(path.difficulty, Difficulty::Advanced);
    }

    #[test]
    fn unmapped_subtype_yields_empty_path() {
        let system = fixture_system();
        let path = system.get_learning_path("undefined_alias").unwrap();
        assert!(path.concepts.is_empty());
        assert_eq!(path.teaching_strategy, None);
        assert_eq!(path.total_read_time, 0.0);
        assert_eq!(path.difficulty, Difficulty::Beginner);
    }

    #[test]
    fn unknown_subtype_has_no_path() {
        let system = fixture_system();
        assert!(system.get_learning_path("ambiguous_column_reference").is_none());
    }

    #[test]
    fn path_concepts_are_resolved_subsequence_of_order() {
        let system = fixture_system();
        for key in system.list_error_subtypes() {
            let path = system.get_learning_path(key).unwrap();
            let expected: Vec<&str> = system
                .get_remediation_order(key)
                .iter()
                .map(String::as_str)
                .filter(|id| system.get_concept_content(id).is_some())
                .collect();
            assert_eq!(concept_ids(&path), expected, "path for {key}");
        }
    }

    #[test]
    fn curated_paths_listed_in_order() {
        let system = fixture_system();
        assert_eq!(
            system.list_curated_paths(),
            vec!["foundations", "joining-tables"]
        );
    }

    #[test]
    fn curated_path_drops_dangling_ids() {
        let system = fixture_system();
        let path = system.get_curated_path("joining-tables").unwrap();
        let ids: Vec<&str> = path.concepts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["joins", "inner-join", "outer-join"]);
        assert_eq!(path.total_read_time, 30.0);
        assert_eq!(path.difficulty, Difficulty::Advanced);

        assert!(system.get_curated_path("window-functions").is_none());
    }

    #[rstest]
    #[case(&[], Difficulty::Beginner)]
    #[case(&[Difficulty::Beginner, Difficulty::Beginner], Difficulty::Beginner)]
    #[case(&[Difficulty::Beginner, Difficulty::Intermediate], Difficulty::Intermediate)]
    #[case(
        &[Difficulty::Advanced, Difficulty::Beginner, Difficulty::Intermediate],
        Difficulty::Advanced
    )]
    fn difficulty_is_the_hardest_present(
        #[case] levels: &[Difficulty],
        #[case] expected: Difficulty,
    ) {
        let concepts: Vec<ConceptInfo> = levels
            .iter()
            .enumerate()
            .map(|(i, level)| concept(&format!("c{i}"), *level, 1.0))
            .collect();
        assert_eq!(overall_difficulty(&concepts), expected);
    }

    #[test]
    fn read_time_sums_fractional_minutes() {
        assert_eq!(total_read_time(&[]), 0.0);
        assert_eq!(
            total_read_time(&[
                concept("a", Difficulty::Beginner, 7.5),
                concept("b", Difficulty::Beginner, 2.0),
            ]),
            9.5
        );
    }
}
