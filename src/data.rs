//! Location table: record types, the built-in table, JSON loading and validation.

mod builtin;
mod record;
mod validate;

pub use builtin::builtin;
pub use record::{LocationRecord, RiskTier};
pub use validate::{ValidatedLocations, load_locations, validate};
