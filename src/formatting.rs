//! Formatting helper functions for the site visit MCP server
//!
//! This module turns sites and their evaluations into the text returned by
//! the MCP tools.

use crate::calendar::{business_days_remaining_in_month, business_week_range, is_business_day};
use crate::schedule::Evaluation;
use crate::site::Site;
use chrono::NaiveDate;

/// Dashboard counts over a whole roster for one basis date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
    pub on_hold: usize,
    pub in_hold_window: usize,
    pub not_active: usize,
    pub completed: usize,
    pub unrecognized_status: usize,
    pub due: usize,
    pub alerts: usize,
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn format_last_visited(site: &Site) -> String {
    site.last_visited
        .map(|date| date.to_string())
        .unwrap_or_else(|| "never".to_string())
}

/// Apply the due-only filter to evaluated sites
pub fn apply_due_filter(entries: &mut Vec<(&Site, Evaluation)>) {
    entries.retain(|(_, evaluation)| evaluation.due);
}

/// Format full details for a single site
pub fn format_site_detail(site: &Site, evaluation: &Evaluation, basis: NaiveDate) -> String {
    let mut result = format!("Site: {} ({})\n", site.id, site.client_name);
    result.push_str(&format!("  Status: {}\n", site.status));
    result.push_str(&format!("  Frequency: {}\n", site.frequency));
    result.push_str(&format!("  Last visited: {}\n", format_last_visited(site)));

    match (site.on_hold_start, site.on_hold_end) {
        (Some(start), Some(end)) => {
            let state = if evaluation.on_hold { " (in effect)" } else { "" };
            result.push_str(&format!("  Hold window: {} to {}{}\n", start, end, state));
        }
        (Some(start), None) => {
            result.push_str(&format!("  Hold window: from {} (no end date, ignored)\n", start));
        }
        (None, Some(end)) => {
            result.push_str(&format!("  Hold window: until {} (no start date, ignored)\n", end));
        }
        (None, None) => {}
    }

    result.push_str(&format!("  Basis date: {}\n", basis));
    result.push_str(&format!("  Due: {}\n", yes_no(evaluation.due)));
    if let Some(next_due) = evaluation.next_due {
        result.push_str(&format!("  Next due: {}\n", next_due));
    }
    if let Some(ref alert) = evaluation.alert {
        result.push_str(&format!("  Alert: {}\n", alert));
    }
    if let Some(ref notes) = site.notes {
        result.push_str(&format!("  Notes: {}\n", notes));
    }

    result
}

/// Format evaluated sites into a listing
pub fn format_sites(entries: &[(&Site, Evaluation)], basis: NaiveDate) -> String {
    if entries.is_empty() {
        return "No sites found".to_string();
    }

    let mut result = format!("Found {} site(s) as of {}:\n\n", entries.len(), basis);
    for (site, evaluation) in entries {
        result.push_str(&format!(
            "- [{}] {} (status: {}, frequency: {}, due: {})\n",
            site.id,
            site.client_name,
            site.status,
            site.frequency,
            yes_no(evaluation.due)
        ));
        result.push_str(&format!("  Last visited: {}\n", format_last_visited(site)));
        if evaluation.on_hold {
            result.push_str("  On hold\n");
        }
        if let Some(next_due) = evaluation.next_due
            && !evaluation.due
        {
            result.push_str(&format!("  Next due: {}\n", next_due));
        }
    }

    result
}

/// Format alerts as a list, one per site
pub fn format_alerts(alerts: &[(&Site, String)], basis: NaiveDate) -> String {
    if alerts.is_empty() {
        return format!("No alerts as of {}", basis);
    }

    let mut result = format!("{} alert(s) as of {}:\n\n", alerts.len(), basis);
    for (site, alert) in alerts {
        result.push_str(&format!("- [{}] {}\n", site.id, alert));
    }

    result
}

/// Format dashboard counts
pub fn format_summary(summary: &Summary, basis: NaiveDate) -> String {
    let mut result = format!("Site summary as of {}:\n", basis);
    result.push_str(&format!("  Total sites: {}\n", summary.total));
    result.push_str(&format!("  Active: {}\n", summary.active));
    result.push_str(&format!(
        "  On Hold: {} ({} in hold window)\n",
        summary.on_hold, summary.in_hold_window
    ));
    result.push_str(&format!("  Not Active: {}\n", summary.not_active));
    result.push_str(&format!("  Completed: {}\n", summary.completed));
    if summary.unrecognized_status > 0 {
        result.push_str(&format!(
            "  Unrecognized status: {}\n",
            summary.unrecognized_status
        ));
    }
    result.push_str(&format!("  Due for a visit: {}\n", summary.due));
    result.push_str(&format!("  Alerts: {}\n", summary.alerts));
    result
}

/// Format business-calendar facts for a date
pub fn format_calendar(date: NaiveDate) -> String {
    let (week_start, week_end) = business_week_range(date);
    format!(
        "{} ({})\n  Business day: {}\n  Business week: {} to {}\n  Business days remaining in month: {}\n",
        date,
        date.format("%A"),
        yes_no(is_business_day(date)),
        week_start,
        week_end,
        business_days_remaining_in_month(date)
    )
}
