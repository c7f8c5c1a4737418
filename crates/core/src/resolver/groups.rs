// Membership views - EU / OECD / UN filters over the reference table

use crate::error::Result;
use crate::model::scheme::{EU, OECD, UN_MEMBER};
use crate::model::value::SchemeValue;
use crate::resolver::engine::CountryResolver;

/// Built-in membership groups. The columns hold accession years; missing
/// cells mean non-membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// EU membership as of 2015 (accession year before 2015).
    Eu28,
    /// EU membership as of 2013 (accession year before 2013).
    Eu27,
    /// OECD member states.
    Oecd,
    /// UN member states.
    Un,
}

impl Group {
    fn column(self) -> &'static str {
        match self {
            Group::Eu28 | Group::Eu27 => EU,
            Group::Oecd => OECD,
            Group::Un => UN_MEMBER,
        }
    }

    fn admits(self, year: i64) -> bool {
        match self {
            Group::Eu28 => year < 2015,
            Group::Eu27 => year < 2013,
            Group::Oecd | Group::Un => year > 0,
        }
    }
}

impl CountryResolver {
    /// All records satisfying `group`, projected into scheme `to`.
    pub fn members_of(&self, group: Group, to: &str) -> Result<Vec<SchemeValue>> {
        let to = self.table().resolve_scheme(to)?;
        let column = self.table().frame().column(group.column())?;

        let mut members = Vec::new();
        for row in 0..self.table().height() {
            let admitted = match SchemeValue::from_any(&column.get(row)?) {
                SchemeValue::Int(year) => group.admits(year),
                _ => false,
            };
            if admitted {
                members.push(self.table().value(row, &to)?);
            }
        }
        Ok(members)
    }
}
