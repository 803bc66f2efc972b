//! Check handler for the site visit MCP server

use crate::SiteVisitServerHandler;
use crate::formatting;
use crate::schedule;
use crate::validation;
use mcp_attr::Result as McpResult;
use tracing::debug;

impl SiteVisitServerHandler {
    /// Evaluates a single site by ID and returns its full details.
    pub async fn handle_check(&self, id: String, date: Option<String>) -> McpResult<String> {
        // Validate input parameters
        let id = validation::normalize_site_id(&id);
        let basis = self.resolve_basis(date.as_deref())?;

        // Look up the site
        let roster = self.lock_roster();
        let Some(site) = roster.find_by_id(&id) else {
            let message = validation::format_unknown_site_error(&id, &roster);
            return Err(mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS)
                .with_message(message, true));
        };

        // Evaluate and format
        let evaluation = schedule::evaluate(site, basis);
        debug!(site_id = %site.id, %basis, due = evaluation.due, "site checked");
        Ok(formatting::format_site_detail(site, &evaluation, basis))
    }
}
