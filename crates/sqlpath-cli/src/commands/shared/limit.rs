/// Compute effective limit with precedence: global flag -> configured default.
#[must_use]
pub fn effective_limit(flag: Option<u32>, configured: u32) -> usize {
    usize::try_from(flag.unwrap_or(configured)).unwrap_or(usize::MAX)
}

/// Limit for full catalog listings: everything unless `--limit` is given.
#[must_use]
pub fn catalog_limit(flag: Option<u32>) -> usize {
    flag.map_or(usize::MAX, |limit| usize::try_from(limit).unwrap_or(usize::MAX))
}

/// Keep at most `limit` items.
#[must_use]
pub fn truncated<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::{catalog_limit, effective_limit, truncated};

    #[test]
    fn flag_takes_precedence() {
        assert_eq!(effective_limit(Some(5), 20), 5);
    }

    #[test]
    fn configured_default_used_when_flag_missing() {
        assert_eq!(effective_limit(None, 20), 20);
    }

    #[test]
    fn catalog_listing_is_unbounded_without_flag() {
        assert_eq!(catalog_limit(None), usize::MAX);
        assert_eq!(catalog_limit(Some(3)), 3);
    }

    #[test]
    fn truncation_keeps_leading_items() {
        assert_eq!(truncated(vec![1, 2, 3], 2), vec![1, 2]);
        assert_eq!(truncated(vec![1], 5), vec![1]);
    }
}
