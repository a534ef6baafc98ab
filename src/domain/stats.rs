//! Monthly earnings aggregation.
//!
//! Groups bookings by the (year, month) of their shoot date in a single
//! pass and reports the count and summed price per month, newest first.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::shoot::parse_shoot_date;

/// Earnings for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    /// Calendar year.
    pub year: i32,
    /// Month of the year, 1-based.
    pub month: u32,
    /// Number of bookings dated in this month.
    pub shoot_count: u64,
    /// Sum of booking prices for this month.
    pub total_earnings: f64,
}

/// Which buckets feed the aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatsScope {
    /// Pending bookings only.
    #[default]
    Pending,
    /// Edited bookings only.
    Edited,
    /// Both buckets.
    All,
}

impl StatsScope {
    /// Whether pending bookings are counted.
    #[must_use]
    pub const fn includes_pending(self) -> bool {
        matches!(self, Self::Pending | Self::All)
    }

    /// Whether edited bookings are counted.
    #[must_use]
    pub const fn includes_edited(self) -> bool {
        matches!(self, Self::Edited | Self::All)
    }
}

/// Aggregates `(date, price)` pairs into per-month totals, sorted
/// descending by (year, month). Entries whose date does not parse are
/// skipped.
pub fn monthly_stats<'a, I>(entries: I) -> Vec<MonthlyStats>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut months: BTreeMap<(i32, u32), (u64, f64)> = BTreeMap::new();

    for (date, price) in entries {
        let Some(day) = parse_shoot_date(date) else {
            tracing::debug!(date, "skipping booking with unparsable date");
            continue;
        };
        let slot = months.entry((day.year(), day.month())).or_insert((0, 0.0));
        slot.0 = slot.0.saturating_add(1);
        slot.1 += price;
    }

    months
        .into_iter()
        .rev()
        .map(|((year, month), (shoot_count, total_earnings))| MonthlyStats {
            year,
            month,
            shoot_count,
            total_earnings,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_month_collapses_into_one_bucket() {
        let stats = monthly_stats([("2024-01-10", 100.0), ("2024-01-20", 50.0)]);
        assert_eq!(
            stats,
            vec![MonthlyStats {
                year: 2024,
                month: 1,
                shoot_count: 2,
                total_earnings: 150.0,
            }]
        );
    }

    #[test]
    fn buckets_sorted_newest_first() {
        let stats = monthly_stats([
            ("2023-12-31", 10.0),
            ("2024-02-01", 20.0),
            ("2024-01-15", 30.0),
            ("2024-02-03T09:00:00Z", 5.0),
        ]);
        let keys: Vec<(i32, u32)> = stats.iter().map(|s| (s.year, s.month)).collect();
        assert_eq!(keys, vec![(2024, 2), (2024, 1), (2023, 12)]);
        assert_eq!(stats.first().map(|s| s.total_earnings), Some(25.0));
    }

    #[test]
    fn unparsable_dates_are_skipped() {
        let stats = monthly_stats([("someday", 99.0), ("2024-05-05", 1.0)]);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats.first().map(|s| s.shoot_count), Some(1));
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        assert!(monthly_stats(std::iter::empty::<(&str, f64)>()).is_empty());
    }

    #[test]
    fn scope_flags() {
        assert!(StatsScope::All.includes_pending() && StatsScope::All.includes_edited());
        assert!(!StatsScope::Pending.includes_edited());
        assert!(!StatsScope::Edited.includes_pending());
        assert_eq!(StatsScope::default(), StatsScope::Pending);
    }
}
