//! Layer 1: error catalog lookup and detection.

use sqlpath_core::entities::ErrorSubtype;

use crate::system::ConceptMappingSystem;

impl ConceptMappingSystem {
    /// Catalog entry for `key`, or `None` for an unknown subtype.
    #[must_use]
    pub fn get_error_info(&self, key: &str) -> Option<&ErrorSubtype> {
        self.error_subtypes().subtypes.get(key)
    }

    /// Catalog keys in manifest order.
    #[must_use]
    pub fn list_error_subtypes(&self) -> Vec<&str> {
        self.error_subtypes().subtypes.keys().collect()
    }

    /// Classify a raw diagnostic message against the detection table.
    ///
    /// The returned key is not checked against the catalog; pair it with
    /// [`Self::get_error_info`] when the catalog entry is needed.
    #[must_use]
    pub fn detect_error_subtype(&self, message: &str, sql_text: &str) -> Option<&str> {
        self.classifier().classify(message, sql_text)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sqlpath_core::enums::{ErrorCategory, Severity};

    use crate::test_support::helpers::fixture_system;

    #[test]
    fn known_key_resolves() {
        let system = fixture_system();
        let info = system.get_error_info("missing_comma_in_select").unwrap();
        assert_eq!(info.id, 4);
        assert_eq!(info.name, "Missing Comma in SELECT");
        assert_eq!(info.severity, Severity::Error);
        assert_eq!(info.category, ErrorCategory::Syntax);
    }

    #[test]
    fn unknown_key_is_absent() {
        let system = fixture_system();
        assert!(system.get_error_info("no_such_error").is_none());
        assert!(system.get_error_info("").is_none());
    }

    #[test]
    fn list_keeps_manifest_order() {
        let system = fixture_system();
        assert_eq!(
            system.list_error_subtypes(),
            vec![
                "missing_comma_in_select",
                "incorrect_null_comparison",
                "incorrect_join_type",
                "correlated_subquery_error",
                "undefined_alias",
            ]
        );
    }

    #[test]
    fn detection_may_name_a_key_outside_the_catalog() {
        let system = fixture_system();
        let key = system
            .detect_error_subtype("ambiguous column name: id", "SELECT id FROM a JOIN b")
            .unwrap();
        assert_eq!(key, "ambiguous_column_reference");
        assert!(system.get_error_info(key).is_none());
    }

    #[test]
    fn detection_resolves_in_catalog() {
        let system = fixture_system();
        let key = system
            .detect_error_subtype("WHERE x = NULL never matches", "")
            .unwrap();
        assert_eq!(key, "incorrect_null_comparison");
        assert_eq!(system.get_error_info(key).unwrap().id, 10);
    }
}
