// Scheme name aliasing - maps user-facing classification names to table columns

use crate::error::{CoreError, Result};
use lazy_static::lazy_static;
use std::collections::HashMap;

pub const NAME_SHORT: &str = "name_short";
pub const NAME_OFFICIAL: &str = "name_official";
pub const REGEX: &str = "regex";
pub const ISO2: &str = "ISO2";
pub const ISO3: &str = "ISO3";
pub const ISO_NUMERIC: &str = "ISOnumeric";
pub const UN_CODE: &str = "UNcode";
pub const EU: &str = "EU";
pub const OECD: &str = "OECD";
pub const UN_MEMBER: &str = "UNmember";

lazy_static! {
    // Alternate spellings accepted for classification names, keyed lowercase.
    static ref SCHEME_ALIASES: HashMap<&'static str, &'static str> = {
        let mut aliases = HashMap::new();
        for alias in ["short", "short_name", "name", "names"] {
            aliases.insert(alias, NAME_SHORT);
        }
        for alias in ["official", "long_name", "long"] {
            aliases.insert(alias, NAME_OFFICIAL);
        }
        for alias in ["un", "unnumeric"] {
            aliases.insert(alias, UN_CODE);
        }
        aliases.insert("isocode", ISO_NUMERIC);
        aliases
    };
}

/// Resolve a user-facing scheme name to one of `columns`, case-insensitively
/// and through the alias table. The returned string carries the column's own
/// casing.
pub fn resolve_scheme(name: &str, columns: &[&str]) -> Result<String> {
    let lowered = name.to_lowercase();
    let canonical = SCHEME_ALIASES
        .get(lowered.as_str())
        .map(|resolved| resolved.to_lowercase())
        .unwrap_or(lowered);

    columns
        .iter()
        .find(|column| column.to_lowercase() == canonical)
        .map(|column| column.to_string())
        .ok_or_else(|| CoreError::InvalidClassification(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: [&str; 6] = [NAME_SHORT, NAME_OFFICIAL, REGEX, ISO3, ISO_NUMERIC, UN_CODE];

    #[test]
    fn test_aliases_resolve_to_canonical_columns() {
        assert_eq!(resolve_scheme("short", &COLUMNS).unwrap(), NAME_SHORT);
        assert_eq!(resolve_scheme("names", &COLUMNS).unwrap(), NAME_SHORT);
        assert_eq!(resolve_scheme("official", &COLUMNS).unwrap(), NAME_OFFICIAL);
        assert_eq!(resolve_scheme("long", &COLUMNS).unwrap(), NAME_OFFICIAL);
        assert_eq!(resolve_scheme("UN", &COLUMNS).unwrap(), UN_CODE);
        assert_eq!(resolve_scheme("isocode", &COLUMNS).unwrap(), ISO_NUMERIC);
    }

    #[test]
    fn test_column_names_match_case_insensitively() {
        assert_eq!(resolve_scheme("iso3", &COLUMNS).unwrap(), ISO3);
        assert_eq!(resolve_scheme("ISONUMERIC", &COLUMNS).unwrap(), ISO_NUMERIC);
        assert_eq!(resolve_scheme("Regex", &COLUMNS).unwrap(), REGEX);
    }

    #[test]
    fn test_unknown_scheme_is_an_error() {
        let err = resolve_scheme("continentt", &COLUMNS).unwrap_err();
        assert!(matches!(err, CoreError::InvalidClassification(_)));
        assert!(err.to_string().contains("continentt"));
    }
}
