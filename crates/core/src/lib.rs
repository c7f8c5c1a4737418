pub mod error;
pub mod loader;
pub mod model;
pub mod resolver;

pub use error::{CoreError, Result};
pub use loader::TableSource;
pub use model::table::ReferenceTable;
pub use model::value::SchemeValue;
pub use resolver::batch::{MatchEntry, MatchOptions};
pub use resolver::engine::{ConvertOptions, CountryResolver, Resolved};
pub use resolver::exclusion::DEFAULT_EXCLUDE_PREFIX;
pub use resolver::groups::Group;
