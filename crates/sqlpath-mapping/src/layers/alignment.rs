//! Layer 2: error subtype → concept alignment.
//!
//! `get_concepts_for_error` applies the confidence gate, `get_remediation_order`
//! does not. Learning paths are built from the ungated order, so a
//! low-confidence mapping still produces a path while reporting no concepts.

use sqlpath_core::entities::AlignmentMapping;

use crate::system::ConceptMappingSystem;

impl ConceptMappingSystem {
    /// Raw alignment entry for `key`.
    #[must_use]
    pub fn get_alignment(&self, key: &str) -> Option<&AlignmentMapping> {
        self.alignment_map().mappings.get(key)
    }

    /// Concept ids for a subtype whose mapping is trusted.
    ///
    /// Empty for unknown keys and for `low` confidence mappings.
    #[must_use]
    pub fn get_concepts_for_error(&self, key: &str) -> &[String] {
        match self.get_alignment(key) {
            Some(mapping) if mapping.confidence.is_trusted() => &mapping.concept_ids,
            _ => &[],
        }
    }

    /// Concept ids in the order they should be studied, regardless of
    /// confidence. Falls back to `concept_ids` when no explicit order is set.
    #[must_use]
    pub fn get_remediation_order(&self, key: &str) -> &[String] {
        self.get_alignment(key)
            .map(AlignmentMapping::remediation_sequence)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn get_teaching_strategy(&self, key: &str) -> Option<&str> {
        self.get_alignment(key).and_then(AlignmentMapping::strategy)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::test_support::helpers::fixture_system;

    #[rstest]
    #[case("missing_comma_in_select", &["select-basic", "syntax-error"])]
    #[case("incorrect_null_comparison", &["null-handling", "is-null-operator"])]
    #[case("incorrect_join_type", &["joins", "inner-join", "outer-join"])]
    #[case("correlated_subquery_error", &[])]
    #[case("undefined_alias", &[])]
    #[case("no_such_error", &[])]
    fn concepts_respect_confidence_gate(#[case] key: &str, #[case] expected: &[&str]) {
        let system = fixture_system();
        assert_eq!(system.get_concepts_for_error(key), expected);
    }

    #[rstest]
    #[case("missing_comma_in_select", &["syntax-error", "select-basic"])]
    #[case("incorrect_null_comparison", &["null-handling"])]
    #[case("incorrect_join_type", &["joins", "inner-join", "outer-join"])]
    #[case("correlated_subquery_error", &["subqueries", "correlated-subquery"])]
    #[case("undefined_alias", &[])]
    fn remediation_order_is_ungated(#[case] key: &str, #[case] expected: &[&str]) {
        let system = fixture_system();
        assert_eq!(system.get_remediation_order(key), expected);
    }

    #[test]
    fn low_confidence_mapping_hides_concepts_but_keeps_order() {
        let system = fixture_system();
        assert!(system.get_concepts_for_error("correlated_subquery_error").is_empty());
        assert!(!system.get_remediation_order("correlated_subquery_error").is_empty());
    }

    #[test]
    fn teaching_strategy_lookup() {
        let system = fixture_system();
        assert_eq!(
            system.get_teaching_strategy("missing_comma_in_select"),
            Some("syntax_drill")
        );
        assert_eq!(
            system.get_teaching_strategy("correlated_subquery_error"),
            Some("correlated_subqueries")
        );
        assert_eq!(system.get_teaching_strategy("undefined_alias"), None);
        assert_eq!(system.get_teaching_strategy("no_such_error"), None);
    }
}
