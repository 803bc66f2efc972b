use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::site::Roster;

/// Read-only access to a TOML roster file
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the roster, treating a missing file as an empty roster
    pub fn load(&self) -> Result<Roster> {
        if !self.file_path.exists() {
            warn!(path = %self.file_path.display(), "roster file not found, starting empty");
            return Ok(Roster::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let roster: Roster = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;

        for id in roster.duplicate_ids() {
            warn!(site_id = id, "duplicate site id in roster, first entry wins");
        }
        debug!(sites = roster.len(), path = %self.file_path.display(), "roster loaded");

        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{Frequency, SiteStatus};
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_roster(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("absent.toml"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_sites() {
        let file = write_roster(
            r#"
[[site]]
id = "acme-north"
client_name = "Acme North"
status = "Active"
frequency = "Weekly"
last_visited = "2024-06-06"

[[site]]
id = "globex"
client_name = "Globex"
status = "On Hold"
frequency = "Shop Audit"
on_hold_start = "2024-06-03"
on_hold_end = "2024-06-07T17:00:00"
notes = "Closed for renovation"
"#,
        );

        let roster = Storage::new(file.path()).load().unwrap();
        assert_eq!(roster.len(), 2);

        let acme = roster.find_by_id("acme-north").unwrap();
        assert_eq!(acme.frequency, Frequency::Weekly);
        assert_eq!(acme.last_visited, NaiveDate::from_ymd_opt(2024, 6, 6));

        let globex = roster.find_by_id("globex").unwrap();
        assert_eq!(globex.status, SiteStatus::OnHold);
        assert_eq!(globex.frequency, Frequency::ShopAudit);
        assert!(globex.last_visited.is_none());
        assert_eq!(globex.on_hold_end, NaiveDate::from_ymd_opt(2024, 6, 7));
        assert_eq!(globex.notes.as_deref(), Some("Closed for renovation"));
    }

    #[test]
    fn test_load_toml_native_dates() {
        let file = write_roster(
            r#"
[[site]]
id = "acme-north"
client_name = "Acme North"
status = "On Hold"
frequency = "Weekly"
last_visited = 2024-06-06
on_hold_start = 2024-06-10T08:00:00
on_hold_end = 2024-06-14T17:30:00+09:00
"#,
        );

        let roster = Storage::new(file.path()).load().unwrap();
        let site = roster.find_by_id("acme-north").unwrap();
        assert_eq!(site.last_visited, NaiveDate::from_ymd_opt(2024, 6, 6));
        assert_eq!(site.on_hold_start, NaiveDate::from_ymd_opt(2024, 6, 10));
        assert_eq!(site.on_hold_end, NaiveDate::from_ymd_opt(2024, 6, 14));
    }

    #[test]
    fn test_toml_time_only_value_is_rejected() {
        let file = write_roster(
            r#"
[[site]]
id = "acme-north"
client_name = "Acme North"
status = "Active"
frequency = "Weekly"
last_visited = 08:00:00
"#,
        );

        assert!(Storage::new(file.path()).load().is_err());
    }

    #[test]
    fn test_unknown_labels_are_preserved() {
        let file = write_roster(
            r#"
[[site]]
id = "initech"
client_name = "Initech"
status = "Prospect"
frequency = "Quarterly"
last_visited = ""
"#,
        );

        let roster = Storage::new(file.path()).load().unwrap();
        let site = roster.find_by_id("initech").unwrap();
        assert_eq!(site.status, SiteStatus::Other("Prospect".to_string()));
        assert_eq!(site.frequency, Frequency::Other("Quarterly".to_string()));
        assert!(site.last_visited.is_none());
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let file = write_roster(
            r#"
[[site]]
id = "initech"
client_name = "Initech"
status = "Active"
frequency = "Weekly"
last_visited = "last tuesday"
"#,
        );

        let err = Storage::new(file.path()).load().unwrap_err();
        assert!(format!("{:#}", err).contains("invalid date"));
    }

    #[test]
    fn test_serialized_roster_loads_back() {
        let mut roster = Roster::new();
        let mut site = crate::site::Site::new("acme", "Acme Corp", Frequency::BiWeekly);
        site.last_visited = NaiveDate::from_ymd_opt(2024, 6, 3);
        roster.add(site);

        let file = write_roster(&toml::to_string_pretty(&roster).unwrap());
        assert_eq!(Storage::new(file.path()).load().unwrap(), roster);
    }
}
