// Exclusion-prefix splitting: "Asia excluding China" converts as "Asia"

use crate::error::{CoreError, Result};
use regex::Regex;

/// Default markers that negate everything after them.
pub const DEFAULT_EXCLUDE_PREFIX: [&str; 3] = [r"\bexcl\w*", "without", "w/o"];

/// A name split at the first exclusion marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeSplit {
    pub clean_name: String,
    pub excluded: Vec<String>,
}

/// Split `name` on the union of the exclusion patterns. The prefix before
/// the first marker (trimmed) becomes the clean name; the remaining
/// fragments are captured but not converted.
pub fn separate_exclude_cases(name: &str, exclude_prefix: &[String]) -> Result<ExcludeSplit> {
    if exclude_prefix.is_empty() {
        return Ok(ExcludeSplit {
            clean_name: name.trim().to_string(),
            excluded: Vec::new(),
        });
    }

    let union = exclude_prefix.join("|");
    let excluder = Regex::new(&union).map_err(|e| CoreError::ExcludePrefix { source: e })?;

    let mut parts = excluder.split(name);
    let clean_name = parts.next().unwrap_or(name).trim().to_string();
    let excluded = parts
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect();

    Ok(ExcludeSplit {
        clean_name,
        excluded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        DEFAULT_EXCLUDE_PREFIX
            .iter()
            .map(|pattern| pattern.to_string())
            .collect()
    }

    #[test]
    fn test_excluding_marker_truncates_the_name() {
        let split = separate_exclude_cases("Asia excluding China", &defaults()).unwrap();
        assert_eq!(split.clean_name, "Asia");
        assert_eq!(split.excluded, vec!["China".to_string()]);
    }

    #[test]
    fn test_without_and_wo_markers() {
        let split = separate_exclude_cases("Europe without Switzerland", &defaults()).unwrap();
        assert_eq!(split.clean_name, "Europe");

        let split = separate_exclude_cases("EU w/o Malta", &defaults()).unwrap();
        assert_eq!(split.clean_name, "EU");
        assert_eq!(split.excluded, vec!["Malta".to_string()]);
    }

    #[test]
    fn test_name_without_marker_is_untouched() {
        let split = separate_exclude_cases("China", &defaults()).unwrap();
        assert_eq!(split.clean_name, "China");
        assert!(split.excluded.is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let patterns = vec!["([".to_string()];
        let err = separate_exclude_cases("Asia", &patterns).unwrap_err();
        assert!(matches!(err, CoreError::ExcludePrefix { .. }));
    }
}
