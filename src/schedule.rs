//! Due/alert rules for site visits
//!
//! Every function here is a pure function of a site and an explicit basis
//! date. Nothing reads the clock; callers pick the date.
//!
//! `is_due` is the coarse flag used for listings and plan drafting.
//! `alert_for` is stricter: only active sites alert, and monthly cadences
//! alert only near month end or after a long gap.

use crate::calendar::{
    add_business_days, business_days_between, business_days_remaining_in_month,
    first_day_of_next_month, same_month, start_of_business_week,
};
use crate::site::{Frequency, Site, SiteStatus};
use chrono::{Duration, NaiveDate};

/// Business days after the last visit at which a bi-weekly site is due
pub const BI_WEEKLY_THRESHOLD: u32 = 10;

/// Monthly alerts fire once this few business days remain in the month
pub const MONTH_END_WINDOW: u32 = 7;

/// Monthly alerts fire once this many calendar days have passed since a visit
pub const MONTHLY_GAP_DAYS: i64 = 35;

/// Result of evaluating one site on one basis date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub due: bool,
    pub alert: Option<String>,
    /// First date the frequency rule alone reports due; see `next_due_date`
    pub next_due: Option<NaiveDate>,
    pub on_hold: bool,
}

/// Check if `basis` falls inside the site's hold window
///
/// Only `On Hold` sites with both bounds set have a window; the bounds are
/// inclusive.
pub fn is_on_hold(site: &Site, basis: NaiveDate) -> bool {
    if site.status != SiteStatus::OnHold {
        return false;
    }
    site.hold_window()
        .is_some_and(|(start, end)| start <= basis && basis <= end)
}

/// Decide whether a site needs a visit as of `basis`
pub fn is_due(site: &Site, basis: NaiveDate) -> bool {
    if matches!(site.status, SiteStatus::NotActive | SiteStatus::Completed) {
        return false;
    }

    if is_on_hold(site, basis) {
        return false;
    }

    let Some(last_visited) = site.last_visited else {
        return true;
    };

    match &site.frequency {
        Frequency::Weekly => last_visited < start_of_business_week(basis),
        Frequency::BiWeekly => business_days_between(last_visited, basis) >= BI_WEEKLY_THRESHOLD,
        Frequency::Monthly | Frequency::ShopAudit => !same_month(last_visited, basis),
        Frequency::Other(_) => false,
    }
}

/// Build the management alert for a site as of `basis`
///
/// Returns `None` for anything but `Active` sites, and when the site's
/// cadence does not call for attention yet.
pub fn alert_for(site: &Site, basis: NaiveDate) -> Option<String> {
    if !site.is_active() {
        return None;
    }

    let Some(last_visited) = site.last_visited else {
        return Some(format!(
            "{} site due: This site has never been visited.",
            site.frequency
        ));
    };

    let client = &site.client_name;
    match &site.frequency {
        Frequency::Weekly => (last_visited < start_of_business_week(basis)).then(|| {
            format!(
                "Weekly site due: {} has not been visited during this week's business-day window.",
                client
            )
        }),
        Frequency::BiWeekly => (business_days_between(last_visited, basis)
            >= BI_WEEKLY_THRESHOLD)
            .then(|| {
                format!(
                    "Bi-Weekly site due: {} has not been visited within its bi-weekly business-day window.",
                    client
                )
            }),
        Frequency::Monthly => monthly_window_reached(last_visited, basis).then(|| {
            format!(
                "Monthly site due: {} is approaching or has exceeded its monthly business-day visit window.",
                client
            )
        }),
        Frequency::ShopAudit => monthly_window_reached(last_visited, basis).then(|| {
            format!(
                "Shop Audit due: {} is approaching or has exceeded its monthly business-day audit window.",
                client
            )
        }),
        Frequency::Other(_) => None,
    }
}

/// Alert gate shared by monthly and shop-audit cadences
fn monthly_window_reached(last_visited: NaiveDate, basis: NaiveDate) -> bool {
    if same_month(last_visited, basis) {
        return false;
    }
    let gap_days = (basis - last_visited).num_days();
    business_days_remaining_in_month(basis) <= MONTH_END_WINDOW || gap_days > MONTHLY_GAP_DAYS
}

/// First basis date on which the frequency rule reports the site due
///
/// Ignores status and hold windows. `None` when the site was never visited
/// (it is due already) or its frequency is unrecognized (never due by rule).
///
/// For monthly cadences this is the first of the month after the visit; a
/// basis date in an earlier month than the visit also counts as due.
pub fn next_due_date(site: &Site) -> Option<NaiveDate> {
    let last_visited = site.last_visited?;

    match &site.frequency {
        Frequency::Weekly => Some(start_of_business_week(last_visited) + Duration::days(7)),
        Frequency::BiWeekly => Some(add_business_days(last_visited, BI_WEEKLY_THRESHOLD)),
        Frequency::Monthly | Frequency::ShopAudit => first_day_of_next_month(last_visited),
        Frequency::Other(_) => None,
    }
}

/// Evaluate due flag, alert, next due date and hold state in one pass
pub fn evaluate(site: &Site, basis: NaiveDate) -> Evaluation {
    Evaluation {
        due: is_due(site, basis),
        alert: alert_for(site, basis),
        next_due: next_due_date(site),
        on_hold: is_on_hold(site, basis),
    }
}
