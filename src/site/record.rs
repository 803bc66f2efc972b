use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::serde_impl::lenient_date;

/// Administrative status of a serviced site
///
/// Labels match the roster file (`"Active"`, `"On Hold"`, ...). Anything
/// else is kept verbatim in `Other` so unknown values never fail a load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SiteStatus {
    /// Serviced normally; the only status that raises alerts
    Active,
    /// Temporarily exempt while inside its hold window
    OnHold,
    /// No longer serviced
    NotActive,
    /// Contract finished
    Completed,
    /// Unrecognized label from the roster
    Other(String),
}

impl SiteStatus {
    /// All recognized statuses, in display order
    pub const KNOWN: [SiteStatus; 4] = [
        SiteStatus::Active,
        SiteStatus::OnHold,
        SiteStatus::NotActive,
        SiteStatus::Completed,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SiteStatus::Active => "Active",
            SiteStatus::OnHold => "On Hold",
            SiteStatus::NotActive => "Not Active",
            SiteStatus::Completed => "Completed",
            SiteStatus::Other(label) => label,
        }
    }
}

impl From<&str> for SiteStatus {
    fn from(label: &str) -> Self {
        match label {
            "Active" => SiteStatus::Active,
            "On Hold" => SiteStatus::OnHold,
            "Not Active" => SiteStatus::NotActive,
            "Completed" => SiteStatus::Completed,
            other => SiteStatus::Other(other.to_string()),
        }
    }
}

impl FromStr for SiteStatus {
    type Err = String;

    /// Strict, case-insensitive parse used for user-supplied filters
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SiteStatus::KNOWN
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "Invalid status '{}'. Valid options are: Active, On Hold, Not Active, Completed",
                    s
                )
            })
    }
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared visit cadence of a site
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Frequency {
    Weekly,
    BiWeekly,
    Monthly,
    /// Monthly cadence with audit wording in alerts
    ShopAudit,
    /// Unrecognized label from the roster; never due by rule
    Other(String),
}

impl Frequency {
    /// All recognized frequencies, in display order
    pub const KNOWN: [Frequency; 4] = [
        Frequency::Weekly,
        Frequency::BiWeekly,
        Frequency::Monthly,
        Frequency::ShopAudit,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Frequency::Weekly => "Weekly",
            Frequency::BiWeekly => "Bi-Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::ShopAudit => "Shop Audit",
            Frequency::Other(label) => label,
        }
    }
}

impl From<&str> for Frequency {
    fn from(label: &str) -> Self {
        match label {
            "Weekly" => Frequency::Weekly,
            "Bi-Weekly" => Frequency::BiWeekly,
            "Monthly" => Frequency::Monthly,
            "Shop Audit" => Frequency::ShopAudit,
            other => Frequency::Other(other.to_string()),
        }
    }
}

impl FromStr for Frequency {
    type Err = String;

    /// Strict, case-insensitive parse used for user-supplied filters
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Frequency::KNOWN
            .into_iter()
            .find(|frequency| frequency.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "Invalid frequency '{}'. Valid options are: Weekly, Bi-Weekly, Monthly, Shop Audit",
                    s
                )
            })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A serviced site as recorded in the roster
///
/// The scheduling engine only reads these fields. Dates carry calendar
/// precision only; time components in the roster are dropped on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Roster key (e.g., "acme-north")
    pub id: String,
    /// Display label, used verbatim in alert text
    pub client_name: String,
    pub status: SiteStatus,
    pub frequency: Frequency,
    /// Date of the most recent visit; `None` means never visited
    #[serde(default, with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub last_visited: Option<NaiveDate>,
    /// First day of the hold window (inclusive)
    #[serde(default, with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub on_hold_start: Option<NaiveDate>,
    /// Last day of the hold window (inclusive)
    #[serde(default, with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub on_hold_end: Option<NaiveDate>,
    /// Optional free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Site {
    /// Create an active, never-visited site
    pub fn new(id: impl Into<String>, client_name: impl Into<String>, frequency: Frequency) -> Self {
        Self {
            id: id.into(),
            client_name: client_name.into(),
            status: SiteStatus::Active,
            frequency,
            last_visited: None,
            on_hold_start: None,
            on_hold_end: None,
            notes: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == SiteStatus::Active
    }

    /// The inclusive hold window, only when both bounds are set
    pub fn hold_window(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.on_hold_start?, self.on_hold_end?))
    }
}
