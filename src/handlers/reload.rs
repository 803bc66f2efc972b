//! Reload handler for the site visit MCP server

use crate::SiteVisitServerHandler;
use mcp_attr::{Result as McpResult, bail};
use tracing::{info, warn};

impl SiteVisitServerHandler {
    /// Re-reads the roster file. On failure the previously loaded roster is kept.
    pub async fn handle_reload(&self) -> McpResult<String> {
        let fresh = match self.storage.load() {
            Ok(roster) => roster,
            Err(e) => {
                warn!(error = %format!("{:#}", e), "roster reload failed");
                bail!("Failed to reload roster: {:#}", e);
            }
        };

        let count = fresh.len();
        *self.lock_roster() = fresh;
        info!(sites = count, "roster reloaded");

        Ok(format!(
            "Reloaded {} site(s) from {}",
            count,
            self.storage.file_path().display()
        ))
    }
}
