use super::publish_date;
use crate::scoring::tables::FreshnessTable;
use crate::scraping::ParsedDocument;
use crate::types::CriterionResult;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

pub const MAX: u32 = 10;
pub const LABEL: &str = "Content Freshness";

const DAYS_PER_MONTH: f64 = 30.44;

/// Accepts RFC 3339, a bare `YYYY-MM-DDTHH:MM:SS`, or anything starting with `YYYY-MM-DD`.
pub(crate) fn parse_publish_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    let date = NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()?;
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

pub(crate) fn months_elapsed(published: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - published).num_days().max(0) as f64 / DAYS_PER_MONTH
}

pub(crate) fn age_points(months: f64) -> u32 {
    match months {
        m if m <= 1.0 => 10,
        m if m <= 3.0 => 8,
        m if m <= 6.0 => 6,
        m if m <= 12.0 => 4,
        m if m <= 24.0 => 2,
        _ => 0,
    }
}

pub fn evaluate(doc: &ParsedDocument, table: &FreshnessTable, now: DateTime<Utc>) -> CriterionResult {
    let mut result = CriterionResult::new(LABEL, MAX);
    let text = doc.text();

    let published = publish_date(doc, &table.publish_date_selectors)
        .as_deref()
        .and_then(parse_publish_date);

    match published {
        Some(date) => {
            let months = months_elapsed(date, now);
            let points = age_points(months);
            let message = format!(
                "Published {} ({:.0} months ago)",
                date.format("%Y-%m-%d"),
                months
            );
            if points > 0 {
                result.pass(points, message);
            } else {
                result.fail(message);
            }
        }
        None => {
            let current = now.year().to_string();
            let previous = (now.year() - 1).to_string();
            if text.contains(&current) {
                result.pass(6, format!("Mentions the current year ({})", current));
            } else if text.contains(&previous) {
                result.pass(4, format!("Mentions last year ({})", previous));
            } else {
                result.fail("No publish date or recent year found");
            }
        }
    }

    let recency = table.recency_signals.count_in(text);
    result.check(
        recency >= 2,
        2,
        format!("{} recency signals (updated, latest, ...)", recency),
        "Few recency signals",
    );

    result
}
