//! Alerts handler for the site visit MCP server

use crate::SiteVisitServerHandler;
use crate::formatting;
use crate::schedule;
use mcp_attr::Result as McpResult;
use tracing::debug;

impl SiteVisitServerHandler {
    /// Collects management alerts for every site that has one on the basis date.
    pub async fn handle_alerts(&self, date: Option<String>) -> McpResult<String> {
        let basis = self.resolve_basis(date.as_deref())?;

        let roster = self.lock_roster();
        let alerts: Vec<_> = roster
            .sites
            .iter()
            .filter_map(|site| schedule::alert_for(site, basis).map(|alert| (site, alert)))
            .collect();

        debug!(%basis, count = alerts.len(), "alerts evaluated");
        Ok(formatting::format_alerts(&alerts, basis))
    }
}
