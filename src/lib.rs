//! Site Visit MCP Server Library
//!
//! This library decides which serviced sites are due for a visit and writes
//! management alerts explaining why. Due-ness is computed on a business-day
//! calendar (Monday through Friday) from each site's status, visit frequency,
//! last visit date and hold window.
//!
//! # Architecture
//!
//! - **Calendar**: `calendar` module - business-day arithmetic on `NaiveDate`
//! - **Rules**: `schedule` module - pure due/alert decisions for one site and one basis date
//! - **Data**: `site` module - the roster model, read from TOML by `storage`
//! - **MCP Layer**: `SiteVisitServerHandler` - exposes the rules as MCP tools
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use site_visit_mcp::schedule::{alert_for, is_due};
//! use site_visit_mcp::{Frequency, Site};
//!
//! let mut site = Site::new("acme-north", "Acme North", Frequency::Weekly);
//! site.last_visited = NaiveDate::from_ymd_opt(2024, 6, 6);
//!
//! let friday = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
//! let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//! assert!(!is_due(&site, friday));
//! assert!(is_due(&site, monday));
//! assert!(alert_for(&site, monday).is_some());
//! ```

pub mod calendar;
pub mod formatting;
mod handlers;
pub mod logging;
pub mod schedule;
pub mod site;
mod storage;
pub mod validation;

use anyhow::Result;
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use handlers::summary::summarize;
pub use schedule::Evaluation;
pub use site::{Frequency, Roster, Site, SiteStatus};
pub use storage::Storage;

/// MCP Server handler for site visit scheduling
///
/// Holds the roster loaded from a TOML file. The roster is read-only here;
/// `reload` picks up edits made by whatever maintains the file.
pub struct SiteVisitServerHandler {
    pub(crate) roster: Mutex<Roster>,
    pub(crate) storage: Storage,
    /// Basis date used when a tool call does not pass one
    pub(crate) pinned_basis: Option<NaiveDate>,
}

impl SiteVisitServerHandler {
    /// Create a new handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the roster file (TOML format)
    /// * `pinned_basis` - Fixed default basis date; `None` means today
    ///
    /// # Example
    /// ```no_run
    /// # use site_visit_mcp::SiteVisitServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = SiteVisitServerHandler::new("sites.toml", None)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str, pinned_basis: Option<NaiveDate>) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let roster = Mutex::new(storage.load()?);
        Ok(Self {
            roster,
            storage,
            pinned_basis,
        })
    }

    pub(crate) fn lock_roster(&self) -> MutexGuard<'_, Roster> {
        self.roster.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Resolve the basis date for a tool call
    ///
    /// An explicit `date` wins, then the pinned date, then today.
    pub(crate) fn resolve_basis(&self, date: Option<&str>) -> McpResult<NaiveDate> {
        match date {
            Some(date_str) if !date_str.trim().is_empty() => validation::parse_date_filter(date_str),
            _ => Ok(self.pinned_basis.unwrap_or_else(calendar::local_date_today)),
        }
    }
}

/// Site visit scheduler: tells you which serviced sites are due for a visit and why.
///
/// Every site has a status (Active, On Hold, Not Active, Completed) and a visit
/// frequency (Weekly, Bi-Weekly, Monthly, Shop Audit). Due-ness is computed on a
/// business-day calendar (Mon-Fri, no holidays):
/// - **Weekly**: due when not visited yet in the current Mon-Sun week
/// - **Bi-Weekly**: due 10 business days after the last visit
/// - **Monthly / Shop Audit**: due when not visited in the current calendar month
/// - Never-visited sites are always due; Not Active and Completed sites never are
/// - On Hold sites are exempt inside their inclusive hold window
///
/// Alerts are stricter: only Active sites alert, and monthly cadences alert only
/// when 7 or fewer business days remain in the month or the last visit was over
/// 35 days ago.
///
/// Dates are YYYY-MM-DD. Omit `date` to evaluate as of today.
#[mcp_server]
impl McpServer for SiteVisitServerHandler {
    /// **Check one site**: status, last visit, hold window, due flag, next due date and alert.
    #[tool]
    async fn check(
        &self,
        /// Site ID from the roster (e.g., "acme-north")
        id: String,
        /// Basis date YYYY-MM-DD (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_check(id, date).await
    }

    /// **List sites** with their due flags. Use due_only=true for the sites needing a visit (plan drafting).
    #[tool]
    async fn list(
        &self,
        /// Status filter: Active/On Hold/Not Active/Completed (optional)
        status: Option<String>,
        /// Frequency filter: Weekly/Bi-Weekly/Monthly/Shop Audit (optional)
        frequency: Option<String>,
        /// Only sites that are due (optional, default false)
        due_only: Option<bool>,
        /// Basis date YYYY-MM-DD (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_list(status, frequency, due_only, date).await
    }

    /// **Management alerts**: explanations for Active sites that need attention.
    #[tool]
    async fn alerts(
        &self,
        /// Basis date YYYY-MM-DD (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_alerts(date).await
    }

    /// **Dashboard summary**: site counts by status, sites due, and alerts.
    #[tool]
    async fn summary(
        &self,
        /// Basis date YYYY-MM-DD (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_summary(date).await
    }

    /// **Business calendar**: whether a date is a business day, its Monday-to-Friday business week, and business days left in its month.
    #[tool]
    async fn calendar(
        &self,
        /// Date YYYY-MM-DD (optional, default today)
        date: Option<String>,
    ) -> McpResult<String> {
        self.handle_calendar(date).await
    }

    /// **Reload** the roster file after it has been edited.
    #[tool]
    async fn reload(&self) -> McpResult<String> {
        self.handle_reload().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn get_test_handler(content: &str, pinned: Option<NaiveDate>) -> (SiteVisitServerHandler, NamedTempFile) {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        let handler =
            SiteVisitServerHandler::new(temp_file.path().to_str().unwrap(), pinned).unwrap();
        (handler, temp_file)
    }

    #[test]
    fn test_custom_file_path() {
        let (handler, temp_file) = get_test_handler("", None);
        assert_eq!(handler.storage.file_path(), temp_file.path());
        assert!(handler.lock_roster().is_empty());
    }

    #[test]
    fn test_resolve_basis_precedence() {
        let pinned = NaiveDate::from_ymd_opt(2024, 6, 10);
        let (handler, _temp_file) = get_test_handler("", pinned);

        assert_eq!(handler.resolve_basis(None).unwrap(), pinned.unwrap());
        assert_eq!(handler.resolve_basis(Some("  ")).unwrap(), pinned.unwrap());
        assert_eq!(
            handler.resolve_basis(Some("2024-01-02")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
        );
        assert!(handler.resolve_basis(Some("tomorrow")).is_err());
    }

    #[test]
    fn test_resolve_basis_defaults_to_today() {
        let (handler, _temp_file) = get_test_handler("", None);
        // Compare against the clock on both sides of the call to survive midnight
        let before = calendar::local_date_today();
        let basis = handler.resolve_basis(None).unwrap();
        let after = calendar::local_date_today();
        assert!(basis == before || basis == after);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let (handler, _temp_file) = get_test_handler("", None);
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = handler.roster.lock().unwrap();
            panic!("poison the roster lock");
        }));
        assert!(handler.lock_roster().is_empty());
    }
}
