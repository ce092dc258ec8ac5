use chrono::{NaiveDate, TimeDelta};

use crate::error::SummaryError;
use crate::models::{
    round1, round2, HistoryStatistics, MonthlyComparison, ProgressOverview, ProgressRecord,
    ProgressStats, WeeklySummary,
};

/// Records per block in the monthly comparison.
const MONTH_BLOCK: usize = 30;

pub fn generate_weekly_summary(records: &[ProgressRecord]) -> Result<WeeklySummary, SummaryError> {
    if records.is_empty() {
        return Err(SummaryError::NoData);
    }

    let total_emissions: f64 = records.iter().map(|r| r.total_emissions).sum();
    let average_daily = total_emissions / records.len() as f64;
    let challenges_completed = records.iter().map(|r| r.challenges_completed.len()).sum();
    let total_saved: f64 = records.iter().map(ProgressRecord::carbon_saved).sum();
    let net_impact = total_emissions - total_saved;

    Ok(WeeklySummary {
        period: "This Week".to_string(),
        total_emissions: round2(total_emissions),
        average_daily: round2(average_daily),
        challenges_completed,
        carbon_saved: round2(total_saved),
        net_impact: round2(net_impact),
        summary: format!(
            "You emitted {total_emissions:.1}kg CO₂ but saved {total_saved:.1}kg through challenges. Net impact: {net_impact:.1}kg CO₂."
        ),
    })
}

/// Totals over records dated within the last `period_days` days of `today`.
pub fn history_statistics(
    records: &[ProgressRecord],
    period_days: i64,
    today: NaiveDate,
) -> HistoryStatistics {
    let cutoff = cutoff_date(today, period_days);
    let in_window: Vec<&ProgressRecord> = records.iter().filter(|r| r.date >= cutoff).collect();

    let total_carbon: f64 = in_window.iter().map(|r| r.total_emissions).sum();
    let average_daily = if in_window.is_empty() {
        0.0
    } else {
        total_carbon / in_window.len() as f64
    };

    HistoryStatistics {
        total_carbon: round2(total_carbon),
        average_daily: round2(average_daily),
        days: in_window.len(),
        period: format!("{} days", period_days.max(1)),
    }
}

/// Start of the window; periods reaching past the calendar clamp to its first day.
pub fn cutoff_date(today: NaiveDate, period_days: i64) -> NaiveDate {
    TimeDelta::try_days(period_days.max(1))
        .and_then(|span| today.checked_sub_signed(span))
        .unwrap_or(NaiveDate::MIN)
}

/// Lifetime totals plus a comparison of the newest 30 records with the 30
/// before them. `records` is expected most-recent-first.
pub fn progress_stats(records: &[ProgressRecord]) -> ProgressStats {
    let total_days = records.len();
    let total_carbon: f64 = records.iter().map(|r| r.total_emissions).sum();
    let average_daily = if total_days > 0 {
        total_carbon / total_days as f64
    } else {
        0.0
    };

    let block_total = |block: &[ProgressRecord]| -> f64 {
        block.iter().map(|r| r.total_emissions).sum()
    };
    let split = total_days.min(MONTH_BLOCK);
    let end = total_days.min(2 * MONTH_BLOCK);
    let last = block_total(&records[..split]);
    let previous = block_total(&records[split..end]);
    let change = if previous > 0.0 {
        (previous - last) / previous * 100.0
    } else {
        0.0
    };

    ProgressStats {
        overview: ProgressOverview {
            total_days,
            total_carbon: round2(total_carbon),
            average_daily: round2(average_daily),
            total_challenges: records.iter().map(|r| r.challenges_completed.len()).sum(),
            total_carbon_saved: round2(records.iter().map(ProgressRecord::carbon_saved).sum()),
            first_activity: records.last().map(|r| r.date),
        },
        monthly_comparison: MonthlyComparison {
            last_30_days: round2(last),
            previous_30_days: round2(previous),
            change: round1(change),
            improving: change > 0.0,
        },
    }
}
