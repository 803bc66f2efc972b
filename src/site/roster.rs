use super::record::{Frequency, Site, SiteStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// All sites loaded from a roster file
///
/// Sites are kept in file order so listings are stable between reloads.
/// In TOML each site is a `[[site]]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default, rename = "site")]
    pub sites: Vec<Site>,
}

impl Roster {
    /// Create a new empty roster
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Append a site
    pub fn add(&mut self, site: Site) {
        self.sites.push(site);
    }

    /// Find a site by its ID
    ///
    /// When an ID is duplicated, the first entry in file order wins.
    pub fn find_by_id(&self, id: &str) -> Option<&Site> {
        self.sites.iter().find(|site| site.id == id)
    }

    /// IDs that appear more than once, in first-seen order
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for site in &self.sites {
            if !seen.insert(site.id.as_str()) && !duplicates.contains(&site.id.as_str()) {
                duplicates.push(site.id.as_str());
            }
        }
        duplicates
    }

    /// List sites, optionally restricted to a status and/or frequency
    pub fn list(
        &self,
        status: Option<&SiteStatus>,
        frequency: Option<&Frequency>,
    ) -> Vec<&Site> {
        self.sites
            .iter()
            .filter(|site| status.is_none_or(|s| &site.status == s))
            .filter(|site| frequency.is_none_or(|f| &site.frequency == f))
            .collect()
    }

    /// Count sites with the given status
    pub fn count_with_status(&self, status: &SiteStatus) -> usize {
        self.sites.iter().filter(|site| &site.status == status).count()
    }

    /// Count sites whose status label is not recognized
    pub fn count_unrecognized_status(&self) -> usize {
        self.sites
            .iter()
            .filter(|site| matches!(site.status, SiteStatus::Other(_)))
            .count()
    }
}
