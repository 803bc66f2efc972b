//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use site_visit_mcp::{Frequency, Site, SiteStatus, SiteVisitServerHandler, logging};
use std::io::Write;
use tempfile::NamedTempFile;

/// Roster used by the handler tests
///
/// As of Monday 2024-06-10:
/// - acme-north: weekly, visited last week -> due, alert
/// - globex: bi-weekly, visited 2024-06-03 -> 5 business days, not due
/// - initech: monthly, visited 2024-05-20 -> due, no alert yet (14 business days left, 21 days since visit)
/// - umbrella: on hold through 2024-06-14, never visited -> not due
/// - hooli: completed -> not due
/// - stark: shop audit, never visited -> due, alert
pub const SAMPLE_ROSTER: &str = r#"
[[site]]
id = "acme-north"
client_name = "Acme North"
status = "Active"
frequency = "Weekly"
last_visited = "2024-06-06"

[[site]]
id = "globex"
client_name = "Globex"
status = "Active"
frequency = "Bi-Weekly"
last_visited = "2024-06-03T09:30:00"

[[site]]
id = "initech"
client_name = "Initech"
status = "Active"
frequency = "Monthly"
last_visited = "2024-05-20"

[[site]]
id = "umbrella"
client_name = "Umbrella"
status = "On Hold"
frequency = "Weekly"
on_hold_start = "2024-06-03"
on_hold_end = "2024-06-14"

[[site]]
id = "hooli"
client_name = "Hooli"
status = "Completed"
frequency = "Monthly"
last_visited = "2023-11-20"

[[site]]
id = "stark"
client_name = "Stark Industries"
status = "Active"
frequency = "Shop Audit"
"#;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Write roster content to a temp file and open a handler on it
pub fn get_test_handler(
    content: &str,
    pinned: Option<NaiveDate>,
) -> (SiteVisitServerHandler, NamedTempFile) {
    logging::init_test();
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    let handler = SiteVisitServerHandler::new(temp_file.path().to_str().unwrap(), pinned).unwrap();
    (handler, temp_file)
}

/// Create an active site with a last visit date
pub fn visited_site(frequency: Frequency, last_visited: NaiveDate) -> Site {
    Site {
        last_visited: Some(last_visited),
        ..Site::new("site-1", "Acme Corp", frequency)
    }
}

/// Create a never-visited site with the given status
pub fn site_with_status(status: SiteStatus, frequency: Frequency) -> Site {
    Site {
        status,
        ..Site::new("site-1", "Acme Corp", frequency)
    }
}
