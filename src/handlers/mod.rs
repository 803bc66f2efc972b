//! MCP tool handlers for the site visit server
//!
//! Each handler is in a separate file. Handlers resolve the basis date,
//! evaluate sites under the roster lock, and format the result as text.

pub mod alerts;
pub mod calendar;
pub mod check;
pub mod list;
pub mod reload;
pub mod summary;
