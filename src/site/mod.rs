//! Site roster data model
//!
//! Sites are owned by whatever system maintains the roster file; this crate
//! only reads them. Split into submodules:
//! - `record`: `Site`, `SiteStatus`, `Frequency`
//! - `roster`: the `Roster` container and its queries
//! - `serde_impl`: label-based enum serialization and lenient date parsing

mod record;
mod roster;
mod serde_impl;

pub use record::{Frequency, Site, SiteStatus};
pub use roster::Roster;
