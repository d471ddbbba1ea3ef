//! Consistency checks and declared statistics.

use sqlpath_core::responses::{MappingStatistics, ValidationReport};

use crate::system::ConceptMappingSystem;

impl ConceptMappingSystem {
    /// Cross-check the alignment map against the registry and the catalog.
    ///
    /// Dangling concept references are listed as `"<errorKey> -> <conceptId>"`
    /// in alignment order; catalog keys with no mapping follow catalog order.
    #[must_use]
    pub fn validate_mapping(&self) -> ValidationReport {
        let missing_concepts: Vec<String> = self
            .alignment_map()
            .mappings
            .iter()
            .flat_map(|(key, mapping)| {
                mapping
                    .concept_ids
                    .iter()
                    .filter(move |id| self.get_concept_content(id).is_none())
                    .map(move |id| format!("{key} -> {id}"))
            })
            .collect();

        let unmapped_errors: Vec<String> = self
            .error_subtypes()
            .subtypes
            .keys()
            .filter(|key| !self.alignment_map().mappings.contains_key(key))
            .map(String::from)
            .collect();

        ValidationReport {
            is_valid: missing_concepts.is_empty() && unmapped_errors.is_empty(),
            missing_concepts,
            unmapped_errors,
        }
    }

    /// Totals as declared by the manifests. Nothing is recounted.
    #[must_use]
    pub fn get_statistics(&self) -> MappingStatistics {
        MappingStatistics {
            total_errors: self.error_subtypes().total_subtypes,
            total_concepts: self.concept_registry().total_concepts,
            total_mappings: self.alignment_map().total_mappings,
            coverage_by_difficulty: self.concept_registry().statistics.by_difficulty.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sqlpath_core::responses::{MappingStatistics, ValidationReport};

    use crate::system::ConceptMappingSystem;
    use crate::test_support::helpers::{fixture_manifests, fixture_system};

    #[test]
    fn fixture_inconsistencies_are_reported() {
        let report = fixture_system().validate_mapping();
        assert_eq!(
            report,
            ValidationReport {
                is_valid: false,
                missing_concepts: vec![
                    "incorrect_null_comparison -> is-null-operator".into(),
                    "correlated_subquery_error -> subqueries".into(),
                ],
                unmapped_errors: vec!["undefined_alias".into()],
            }
        );
    }

    #[test]
    fn single_dangling_reference_reported_once() {
        let (mut subtypes, mut alignment, mut registry) = fixture_manifests();
        alignment.mappings = alignment
            .mappings
            .iter()
            .filter(|(key, _)| *key == "missing_comma_in_select")
            .map(|(key, mapping)| (key, mapping.clone()))
            .collect();
        subtypes.subtypes = subtypes
            .subtypes
            .iter()
            .filter(|(key, _)| *key == "missing_comma_in_select")
            .map(|(key, subtype)| (key, subtype.clone()))
            .collect();
        registry.concepts = registry
            .concepts
            .iter()
            .filter(|(key, _)| *key != "syntax-error")
            .map(|(key, concept)| (key, concept.clone()))
            .collect();

        let report = ConceptMappingSystem::new(subtypes, alignment, registry).validate_mapping();
        assert!(!report.is_valid);
        assert_eq!(
            report.missing_concepts,
            vec!["missing_comma_in_select -> syntax-error"]
        );
        assert!(report.unmapped_errors.is_empty());
    }

    #[test]
    fn consistent_snapshot_is_valid() {
        let (mut subtypes, mut alignment, registry) = fixture_manifests();
        subtypes.subtypes = subtypes
            .subtypes
            .iter()
            .filter(|(key, _)| matches!(*key, "missing_comma_in_select" | "incorrect_join_type"))
            .map(|(key, subtype)| (key, subtype.clone()))
            .collect();
        alignment.mappings = alignment
            .mappings
            .iter()
            .filter(|(key, _)| matches!(*key, "missing_comma_in_select" | "incorrect_join_type"))
            .map(|(key, mapping)| (key, mapping.clone()))
            .collect();

        let report = ConceptMappingSystem::new(subtypes, alignment, registry).validate_mapping();
        assert_eq!(
            report,
            ValidationReport {
                is_valid: true,
                ..ValidationReport::default()
            }
        );
    }

    #[test]
    fn statistics_are_declared_not_counted() {
        let system = fixture_system();
        assert_eq!(
            system.get_statistics(),
            MappingStatistics {
                total_errors: 23,
                total_concepts: 29,
                total_mappings: 23,
                coverage_by_difficulty: [("beginner", 12), ("intermediate", 11), ("advanced", 6)]
                    .into_iter()
                    .collect(),
            }
        );
        assert_eq!(system.list_error_subtypes().len(), 5);
    }

    #[test]
    fn statistics_keep_the_registry_key_order() {
        let (subtypes, alignment, mut registry) = fixture_manifests();
        registry.statistics.by_difficulty =
            [("advanced", 1), ("beginner", 2), ("intermediate", 3)].into_iter().collect();
        let system = ConceptMappingSystem::new(subtypes, alignment, registry);

        let stats = system.get_statistics();
        assert_eq!(
            stats.coverage_by_difficulty.keys().collect::<Vec<_>>(),
            vec!["advanced", "beginner", "intermediate"]
        );
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains(r#""coverageByDifficulty":{"advanced":1,"beginner":2,"intermediate":3}"#));
    }
}
