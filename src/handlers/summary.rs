//! Summary handler for the site visit MCP server

use crate::SiteVisitServerHandler;
use crate::formatting::{self, Summary};
use crate::schedule;
use crate::site::{Roster, SiteStatus};
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

/// Compute dashboard counts for a roster on a basis date
pub fn summarize(roster: &Roster, basis: NaiveDate) -> Summary {
    let mut summary = Summary {
        total: roster.len(),
        active: roster.count_with_status(&SiteStatus::Active),
        on_hold: roster.count_with_status(&SiteStatus::OnHold),
        not_active: roster.count_with_status(&SiteStatus::NotActive),
        completed: roster.count_with_status(&SiteStatus::Completed),
        unrecognized_status: roster.count_unrecognized_status(),
        ..Summary::default()
    };

    for site in &roster.sites {
        let evaluation = schedule::evaluate(site, basis);
        if evaluation.on_hold {
            summary.in_hold_window += 1;
        }
        if evaluation.due {
            summary.due += 1;
        }
        if evaluation.alert.is_some() {
            summary.alerts += 1;
        }
    }

    summary
}

impl SiteVisitServerHandler {
    /// Returns dashboard counts: sites by status, sites due, and alerts.
    pub async fn handle_summary(&self, date: Option<String>) -> McpResult<String> {
        let basis = self.resolve_basis(date.as_deref())?;
        let roster = self.lock_roster();
        let summary = summarize(&roster, basis);
        Ok(formatting::format_summary(&summary, basis))
    }
}
