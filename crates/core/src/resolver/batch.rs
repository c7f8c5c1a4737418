// Batch matching - correlates two name lists through the pattern table

use crate::error::Result;
use crate::model::value::SchemeValue;
use crate::resolver::engine::{CountryResolver, Resolved};
use tracing::warn;

/// Options for [`CountryResolver::match_lists`].
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Fill value for entries without a correspondence; `None` keeps the input.
    pub not_found: Option<String>,
    /// Keep single correspondences as lists instead of collapsing.
    pub enforce_sublist: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            not_found: Some("not found".to_string()),
            enforce_sublist: false,
        }
    }
}

/// One A-side entry with its B-side correspondences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntry {
    pub name: String,
    pub matched: Resolved,
}

impl CountryResolver {
    /// For every name in `list_a`, collect the entries of `list_b` matched by
    /// the same compiled pattern(s) that match the A-side name.
    ///
    /// Correspondences are returned in first-seen order; a B entry matched by
    /// several patterns is kept once per observation rather than deduplicated.
    pub fn match_lists<S: AsRef<str>>(
        &self,
        list_a: &[S],
        list_b: &[S],
        options: &MatchOptions,
    ) -> Result<Vec<MatchEntry>> {
        let matchers = self.table().matchers();
        let mut entries = Vec::with_capacity(list_a.len());

        for name_a in list_a {
            let name_a = name_a.as_ref();
            let pattern_rows = self.table().rows_matching_pattern(name_a);

            if pattern_rows.is_empty() {
                warn!(name = name_a, "could not identify entry in list_a");
                entries.push(MatchEntry {
                    name: name_a.to_string(),
                    matched: fill_entry(name_a, options),
                });
                continue;
            }
            if pattern_rows.len() > 1 {
                warn!(
                    name = name_a,
                    matches = pattern_rows.len(),
                    "multiple pattern matches in list_a"
                );
            }

            let mut found = Vec::new();
            for row in &pattern_rows {
                for name_b in list_b {
                    let name_b = name_b.as_ref();
                    if matchers[*row].is_match(name_b) {
                        found.push(SchemeValue::Text(name_b.to_string()));
                    }
                }
            }

            let matched = if found.is_empty() {
                warn!(name = name_a, "no correspondence in list_b");
                fill_entry(name_a, options)
            } else {
                if found.len() > 1 {
                    warn!(
                        name = name_a,
                        matches = found.len(),
                        "multiple matches in list_b"
                    );
                }
                shape(found, options.enforce_sublist)
            };

            entries.push(MatchEntry {
                name: name_a.to_string(),
                matched,
            });
        }

        Ok(entries)
    }
}

fn fill_entry(name: &str, options: &MatchOptions) -> Resolved {
    let fill = options
        .not_found
        .clone()
        .unwrap_or_else(|| name.to_string());
    shape(vec![SchemeValue::Text(fill)], options.enforce_sublist)
}

fn shape(mut values: Vec<SchemeValue>, enforce_sublist: bool) -> Resolved {
    if values.len() == 1 && !enforce_sublist {
        Resolved::Single(values.remove(0))
    } else {
        Resolved::Multiple(values)
    }
}
