use std::fmt::Display;
use std::str::FromStr;

/// Parse a manifest enum value from a command-line argument.
pub fn parse_enum<T>(raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>().map_err(|error| anyhow::anyhow!("{error}"))
}

#[cfg(test)]
mod tests {
    use sqlpath_core::enums::Difficulty;

    use super::parse_enum;

    #[test]
    fn parses_manifest_value() {
        let level: Difficulty = parse_enum("advanced").expect("difficulty should parse");
        assert_eq!(level, Difficulty::Advanced);
    }

    #[test]
    fn parsing_ignores_case() {
        let level: Difficulty = parse_enum("Beginner").expect("difficulty should parse");
        assert_eq!(level, Difficulty::Beginner);
    }

    #[test]
    fn errors_on_invalid_value() {
        let err = parse_enum::<Difficulty>("expert").expect_err("should fail");
        assert!(err.to_string().contains("invalid difficulty 'expert'"));
    }
}
