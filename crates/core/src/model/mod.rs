pub mod scheme;
pub mod table;
pub mod value;
