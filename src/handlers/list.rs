//! List handler for the site visit MCP server

use crate::SiteVisitServerHandler;
use crate::formatting;
use crate::schedule;
use crate::validation;
use mcp_attr::Result as McpResult;
use tracing::debug;

impl SiteVisitServerHandler {
    /// Handles list/filter operations - evaluates each matching site and formats the listing.
    pub async fn handle_list(
        &self,
        status: Option<String>,
        frequency: Option<String>,
        due_only: Option<bool>,
        date: Option<String>,
    ) -> McpResult<String> {
        // Parse and validate filters
        let status_filter = if let Some(ref status_str) = status {
            Some(validation::parse_status_filter(status_str)?)
        } else {
            None
        };

        let frequency_filter = if let Some(ref frequency_str) = frequency {
            Some(validation::parse_frequency_filter(frequency_str)?)
        } else {
            None
        };

        let basis = self.resolve_basis(date.as_deref())?;

        // Evaluate matching sites against the basis date
        let roster = self.lock_roster();
        let mut entries: Vec<_> = roster
            .list(status_filter.as_ref(), frequency_filter.as_ref())
            .into_iter()
            .map(|site| (site, schedule::evaluate(site, basis)))
            .collect();

        if due_only.unwrap_or(false) {
            formatting::apply_due_filter(&mut entries);
        }

        // Format and return results
        debug!(%basis, matched = entries.len(), "list evaluated");
        Ok(formatting::format_sites(&entries, basis))
    }
}
