//! Calendar handler for the site visit MCP server

use crate::SiteVisitServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl SiteVisitServerHandler {
    /// Reports business-calendar facts for the basis date.
    pub async fn handle_calendar(&self, date: Option<String>) -> McpResult<String> {
        let basis = self.resolve_basis(date.as_deref())?;
        Ok(formatting::format_calendar(basis))
    }
}
