// Resolution engine - converts country references between classification schemes

use crate::error::Result;
use crate::loader::{self, TableSource};
use crate::model::scheme::{ISO2, ISO3, ISO_NUMERIC, REGEX};
use crate::model::table::ReferenceTable;
use crate::model::value::SchemeValue;
use crate::resolver::exclusion::{separate_exclude_cases, DEFAULT_EXCLUDE_PREFIX};
use tracing::{debug, warn};

/// Conversion result for one input name.
///
/// Exactly one match with `enforce_list == false` collapses to `Single`;
/// everything else (including the not-found fill) stays `Multiple`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Single(SchemeValue),
    Multiple(Vec<SchemeValue>),
}

impl Resolved {
    pub fn into_values(self) -> Vec<SchemeValue> {
        match self {
            Resolved::Single(value) => vec![value],
            Resolved::Multiple(values) => values,
        }
    }

    pub fn as_single(&self) -> Option<&SchemeValue> {
        match self {
            Resolved::Single(value) => Some(value),
            Resolved::Multiple(_) => None,
        }
    }
}

/// Options for [`CountryResolver::convert`].
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Source classification; `None` infers the scheme per name.
    pub src: Option<String>,
    /// Target classification.
    pub to: String,
    /// Keep single matches as lists instead of collapsing to a scalar.
    pub enforce_list: bool,
    /// Fill value for names without a match; `None` keeps the input name.
    pub not_found: Option<String>,
    /// Markers that negate everything after them.
    pub exclude_prefix: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            src: None,
            to: ISO3.to_string(),
            enforce_list: false,
            not_found: Some("not found".to_string()),
            exclude_prefix: DEFAULT_EXCLUDE_PREFIX
                .iter()
                .map(|pattern| pattern.to_string())
                .collect(),
        }
    }
}

/// Stateless conversion engine over an immutable [`ReferenceTable`].
///
/// Each operation is a pure function of its inputs and the table; instances
/// are safe to share across threads for read-only use.
#[derive(Debug, Clone)]
pub struct CountryResolver {
    table: ReferenceTable,
}

impl CountryResolver {
    /// Build from the bundled reference dataset.
    pub fn new() -> Result<Self> {
        Self::with_additional(&[])
    }

    /// Build from the bundled dataset plus additional sources. Additional
    /// data overrides bundled records on key collisions.
    pub fn with_additional(additional: &[TableSource]) -> Result<Self> {
        Self::with_sources(TableSource::Frame(loader::bundled_frame()?), additional)
    }

    /// Build from an explicit base source plus additional sources.
    pub fn with_sources(base: TableSource, additional: &[TableSource]) -> Result<Self> {
        Ok(Self {
            table: loader::load(base, additional)?,
        })
    }

    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// Valid classification names for this table.
    pub fn schemes(&self) -> Vec<String> {
        self.table.schemes()
    }

    /// Convert `names` into the target scheme. Each name is handled
    /// independently; zero matches yield the not-found fill and multiple
    /// matches are all retained, both logged at warning level.
    pub fn convert<S: AsRef<str>>(
        &self,
        names: &[S],
        options: &ConvertOptions,
    ) -> Result<Vec<Resolved>> {
        let to = self.table.resolve_scheme(&options.to)?;
        let src = match options.src.as_deref() {
            Some(scheme) => Some(self.table.resolve_scheme(scheme)?),
            None => None,
        };

        names
            .iter()
            .map(|name| self.convert_name(name.as_ref(), src.as_deref(), &to, options))
            .collect()
    }

    /// Convenience for a single input name.
    pub fn convert_one(&self, name: &str, options: &ConvertOptions) -> Result<Resolved> {
        let mut results = self.convert(&[name], options)?;
        Ok(results.remove(0))
    }

    fn convert_name(
        &self,
        name: &str,
        src: Option<&str>,
        to: &str,
        options: &ConvertOptions,
    ) -> Result<Resolved> {
        let split = separate_exclude_cases(name, &options.exclude_prefix)?;
        let clean = split.clean_name.as_str();
        if !split.excluded.is_empty() {
            debug!(name, excluded = ?split.excluded, "dropping excluded remainder before conversion");
        }

        let scheme = match src {
            Some(scheme) => scheme,
            None => infer_scheme(clean),
        };

        let rows = if scheme.eq_ignore_ascii_case(REGEX) {
            self.table.rows_matching_pattern(clean)
        } else {
            self.table.rows_matching_code(scheme, clean)?
        };

        if rows.is_empty() {
            warn!(name = clean, scheme, "not found");
            let fill = options
                .not_found
                .clone()
                .unwrap_or_else(|| clean.to_string());
            return Ok(shape(vec![SchemeValue::Text(fill)], options.enforce_list));
        }
        if rows.len() > 1 {
            warn!(name = clean, scheme, matches = rows.len(), "multiple matches");
        }

        let mut values = Vec::with_capacity(rows.len());
        for row in rows {
            values.push(self.table.value(row, to)?);
        }
        Ok(shape(values, options.enforce_list))
    }
}

fn shape(mut values: Vec<SchemeValue>, enforce_list: bool) -> Resolved {
    if values.len() == 1 && !enforce_list {
        Resolved::Single(values.remove(0))
    } else {
        Resolved::Multiple(values)
    }
}

/// Infer the source scheme from the shape of a clean name: integers are
/// ISOnumeric, two characters ISO2, three ISO3, anything longer free text.
fn infer_scheme(name: &str) -> &'static str {
    if name.parse::<i64>().is_ok() {
        return ISO_NUMERIC;
    }
    match name.chars().count() {
        2 => ISO2,
        3 => ISO3,
        _ => REGEX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_scheme_by_shape() {
        assert_eq!(infer_scheme("840"), ISO_NUMERIC);
        assert_eq!(infer_scheme("DE"), ISO2);
        assert_eq!(infer_scheme("DEU"), ISO3);
        assert_eq!(infer_scheme("Germany"), REGEX);
    }

    #[test]
    fn test_shape_collapses_only_single_unforced_results() {
        let single = shape(vec![SchemeValue::Int(1)], false);
        assert_eq!(single, Resolved::Single(SchemeValue::Int(1)));

        let forced = shape(vec![SchemeValue::Int(1)], true);
        assert_eq!(forced, Resolved::Multiple(vec![SchemeValue::Int(1)]));

        let multi = shape(vec![SchemeValue::Int(1), SchemeValue::Int(2)], false);
        assert!(matches!(multi, Resolved::Multiple(_)));
    }
}
