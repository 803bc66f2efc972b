//! Validation helper functions for the site visit MCP server
//!
//! This module contains parsing logic for tool parameters (status and
//! frequency filters, basis dates) and error messages for unknown sites.

use crate::calendar::normalize_date;
use crate::site::{Frequency, Roster, SiteStatus};
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse and validate status filter parameter
///
/// Case-insensitive; only the four known statuses are accepted.
pub fn parse_status_filter(status_str: &str) -> McpResult<SiteStatus> {
    status_str.parse::<SiteStatus>().map_err(invalid_params)
}

/// Parse and validate frequency filter parameter
pub fn parse_frequency_filter(frequency_str: &str) -> McpResult<Frequency> {
    frequency_str.parse::<Frequency>().map_err(invalid_params)
}

/// Parse and validate a basis date parameter
///
/// Accepts `YYYY-MM-DD`; a date-time is truncated to its date.
pub fn parse_date_filter(date_str: &str) -> McpResult<NaiveDate> {
    normalize_date(date_str).ok_or_else(|| {
        invalid_params(format!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        ))
    })
}

/// Format an error message for an unknown site ID with the available IDs
pub fn format_unknown_site_error(site_id: &str, roster: &Roster) -> String {
    if roster.is_empty() {
        format!(
            "Site '{}' does not exist. The roster has no sites; check the roster file and call reload().",
            site_id
        )
    } else {
        let ids: Vec<&str> = roster.sites.iter().map(|site| site.id.as_str()).collect();
        format!(
            "Site '{}' does not exist.\nAvailable sites: {}",
            site_id,
            ids.join(", ")
        )
    }
}

/// Normalize a site ID by trimming surrounding whitespace
pub fn normalize_site_id(site_id: &str) -> String {
    site_id.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Site;

    #[test]
    fn test_parse_status_filter() {
        assert_eq!(parse_status_filter("completed").unwrap(), SiteStatus::Completed);
        assert!(parse_status_filter("archived").is_err());
    }

    #[test]
    fn test_parse_frequency_filter() {
        assert_eq!(parse_frequency_filter("Bi-Weekly").unwrap(), Frequency::BiWeekly);
        assert!(parse_frequency_filter("daily").is_err());
    }

    #[test]
    fn test_parse_date_filter() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(parse_date_filter("2025-03-15").unwrap(), expected);
        assert_eq!(parse_date_filter("2025-03-15T09:00:00Z").unwrap(), expected);
        assert!(parse_date_filter("15/03/2025").is_err());
    }

    #[test]
    fn test_format_unknown_site_error() {
        let mut roster = Roster::new();
        assert!(format_unknown_site_error("x", &roster).contains("no sites"));

        roster.add(Site::new("acme", "Acme", Frequency::Weekly));
        roster.add(Site::new("globex", "Globex", Frequency::Monthly));
        let message = format_unknown_site_error("x", &roster);
        assert!(message.contains("Available sites: acme, globex"));
    }

    #[test]
    fn test_normalize_site_id() {
        assert_eq!(normalize_site_id("  acme-north "), "acme-north");
        assert_eq!(normalize_site_id("acme"), "acme");
    }
}
