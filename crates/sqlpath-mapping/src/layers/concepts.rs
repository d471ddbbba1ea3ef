//! Layer 3: concept registry lookup.

use sqlpath_core::entities::ConceptInfo;
use sqlpath_core::enums::Difficulty;

use crate::system::ConceptMappingSystem;

impl ConceptMappingSystem {
    #[must_use]
    pub fn get_concept_content(&self, id: &str) -> Option<&ConceptInfo> {
        self.concept_registry().concepts.get(id)
    }

    /// Concept ids in registry order.
    #[must_use]
    pub fn list_concepts(&self) -> Vec<&str> {
        self.concept_registry().concepts.keys().collect()
    }

    #[must_use]
    pub fn get_concepts_by_difficulty(&self, level: Difficulty) -> Vec<&ConceptInfo> {
        self.filter_concepts(|concept| concept.difficulty == level)
    }

    /// Exact, case-sensitive category match.
    #[must_use]
    pub fn get_concepts_by_category(&self, category: &str) -> Vec<&ConceptInfo> {
        self.filter_concepts(|concept| concept.category == category)
    }

    /// Case-insensitive substring search over title, description and
    /// learning objectives. Results keep registry order.
    #[must_use]
    pub fn search_concepts(&self, query: &str) -> Vec<&ConceptInfo> {
        let needle = query.to_lowercase();
        self.filter_concepts(|concept| {
            contains_folded(&concept.title, &needle)
                || contains_folded(&concept.description, &needle)
                || concept
                    .learning_objectives
                    .iter()
                    .any(|objective| contains_folded(objective, &needle))
        })
    }

    fn filter_concepts(&self, predicate: impl Fn(&ConceptInfo) -> bool) -> Vec<&ConceptInfo> {
        self.concept_registry()
            .concepts
            .values()
            .filter(|&concept| predicate(concept))
            .collect()
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
