use log::debug;

use crate::factors::TREE_ABSORPTION_KG_PER_YEAR;
use crate::models::{
    FootprintSummary, InsightReport, LifestyleProfile, ProgressRecord, TransportMode,
};
use crate::templates::{render_advice, render_insight, AdviceKind, InsightKind};

const MAX_INSIGHTS: usize = 5;
const MAX_RECOMMENDATIONS: usize = 5;

/// Records considered for trend and consistency checks.
const TREND_WINDOW: usize = 7;
/// Percent change needed before a trend is worth mentioning.
const TREND_THRESHOLD_PERCENT: f64 = 5.0;
const CONSISTENCY_MAX_VARIANCE: f64 = 2.0;
const LONG_COMMUTE_KM: f64 = 20.0;
const HIGH_ELECTRICITY_KWH: f64 = 10.0;
const STREAK_MIN_RECORDS: usize = 7;

/// Builds insights and recommendations for one user.
///
/// `recent_progress` is expected most-recent-first.
pub fn generate_insights(
    lifestyle: &LifestyleProfile,
    recent_progress: &[ProgressRecord],
    footprint: &FootprintSummary,
) -> InsightReport {
    let mut kinds = analyze_trends(recent_progress);
    kinds.extend(analyze_lifestyle(lifestyle));
    kinds.extend(analyze_achievements(recent_progress));

    let advice = category_advice(lifestyle, footprint);
    debug!(
        "selected {} insights and {} recommendations from {} progress records",
        kinds.len(),
        advice.len(),
        recent_progress.len()
    );

    InsightReport {
        insights: kinds
            .into_iter()
            .take(MAX_INSIGHTS)
            .map(render_insight)
            .collect(),
        recommendations: advice
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .map(render_advice)
            .collect(),
    }
}

/// Compares the newest few records against the oldest ones in the window.
pub fn analyze_trends(recent_progress: &[ProgressRecord]) -> Vec<InsightKind> {
    let mut kinds = Vec::new();
    if recent_progress.len() < 2 {
        return kinds;
    }

    let totals: Vec<f64> = recent_progress
        .iter()
        .take(TREND_WINDOW)
        .map(|record| record.total_emissions)
        .collect();

    let recent_avg = if totals.len() >= 3 {
        mean(&totals[..3])
    } else {
        totals[0]
    };
    // The older side only averages once the window is long enough not to overlap.
    let older_avg = if totals.len() >= 6 {
        mean(&totals[totals.len() - 3..])
    } else {
        totals[totals.len() - 1]
    };

    let change_percent = if older_avg > 0.0 {
        (older_avg - recent_avg) / older_avg * 100.0
    } else {
        0.0
    };

    if change_percent > TREND_THRESHOLD_PERCENT {
        kinds.push(InsightKind::EmissionsDecreased {
            percent: change_percent,
        });
    } else if change_percent < -TREND_THRESHOLD_PERCENT {
        kinds.push(InsightKind::EmissionsIncreased {
            percent: change_percent,
        });
    }

    if totals.len() >= TREND_WINDOW && variance(&totals) < CONSISTENCY_MAX_VARIANCE {
        kinds.push(InsightKind::SteadyEmissions);
    }

    kinds
}

pub fn analyze_lifestyle(lifestyle: &LifestyleProfile) -> Vec<InsightKind> {
    let mut kinds = Vec::new();

    if lifestyle.transport_mode == TransportMode::Car
        && lifestyle.distance_per_day > LONG_COMMUTE_KM
    {
        kinds.push(InsightKind::LongCarCommute {
            distance_km: lifestyle.distance_per_day,
        });
    } else if lifestyle.transport_mode.is_zero_emission() {
        kinds.push(InsightKind::ZeroEmissionTransport);
    }

    if lifestyle.uses_renewable {
        kinds.push(InsightKind::CleanEnergy);
    }

    if lifestyle.diet.is_plant_based() {
        kinds.push(InsightKind::PlantBasedDiet);
    }

    kinds
}

pub fn category_advice(
    lifestyle: &LifestyleProfile,
    footprint: &FootprintSummary,
) -> Vec<AdviceKind> {
    let mut advice = Vec::new();

    if lifestyle.transport_mode == TransportMode::Car {
        advice.push(AdviceKind::CarFreeDay);
    }

    if !lifestyle.uses_renewable {
        advice.push(AdviceKind::ContactEnergyProvider {
            daily_total: footprint.daily_total,
        });
    }
    if lifestyle.electricity_usage > HIGH_ELECTRICITY_KWH {
        advice.push(AdviceKind::EnergyAudit);
    }

    if lifestyle.diet.includes_meat() {
        advice.push(AdviceKind::MeatlessMondays);
    }

    advice.push(AdviceKind::SecondHandFirst);
    advice
}

pub fn analyze_achievements(recent_progress: &[ProgressRecord]) -> Vec<InsightKind> {
    let mut kinds = Vec::new();

    let total_saved: f64 = recent_progress.iter().map(ProgressRecord::carbon_saved).sum();
    if total_saved > 0.0 {
        kinds.push(InsightKind::ImpactMilestone {
            saved_kg: total_saved,
            trees: (total_saved / TREE_ABSORPTION_KG_PER_YEAR).floor() as u64,
        });
    }

    if recent_progress.len() >= STREAK_MIN_RECORDS {
        kinds.push(InsightKind::TrackingStreak {
            days: recent_progress.len(),
        });
    }

    kinds
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance.
fn variance(values: &[f64]) -> f64 {
    let avg = mean(values);
    mean(&values.iter().map(|v| (v - avg).powi(2)).collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChallengeCompletion, Diet, InsightType, Sentiment};
    use approx::assert_relative_eq;
    use chrono::{Duration, NaiveDate};

    fn records(totals: &[f64]) -> Vec<ProgressRecord> {
        let newest = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        totals
            .iter()
            .enumerate()
            .map(|(offset, &total)| ProgressRecord {
                id: None,
                date: newest - Duration::days(offset as i64),
                total_emissions: total,
                challenges_completed: Vec::new(),
            })
            .collect()
    }

    fn cyclist() -> LifestyleProfile {
        LifestyleProfile {
            transport_mode: TransportMode::Bicycle,
            distance_per_day: 8.0,
            electricity_usage: 6.0,
            gas_usage: 2.0,
            uses_renewable: true,
            diet: Diet::Vegan,
            clothes_per_month: 1.0,
            electronics_per_year: 0.0,
        }
    }

    #[test]
    fn single_record_yields_no_trend() {
        assert!(analyze_trends(&records(&[10.0])).is_empty());
    }

    #[test]
    fn falling_emissions_are_praised() {
        let kinds = analyze_trends(&records(&[8.0, 10.0]));
        assert_eq!(kinds.len(), 1);
        match kinds[0] {
            InsightKind::EmissionsDecreased { percent } => {
                assert_relative_eq!(percent, 20.0, epsilon = 1e-9)
            }
            other => panic!("unexpected insight {other:?}"),
        }
    }

    #[test]
    fn rising_emissions_are_flagged() {
        let kinds = analyze_trends(&records(&[12.0, 12.0, 12.0, 10.0]));
        match kinds[0] {
            InsightKind::EmissionsIncreased { percent } => {
                assert_relative_eq!(percent, -20.0, epsilon = 1e-9)
            }
            other => panic!("unexpected insight {other:?}"),
        }
    }

    #[test]
    fn small_changes_are_ignored() {
        assert!(analyze_trends(&records(&[10.2, 10.0])).is_empty());
    }

    #[test]
    fn six_records_average_both_ends() {
        // newest three average 9, oldest three average 12
        let kinds = analyze_trends(&records(&[9.0, 8.0, 10.0, 12.0, 11.0, 13.0]));
        match kinds[0] {
            InsightKind::EmissionsDecreased { percent } => {
                assert_relative_eq!(percent, 25.0, epsilon = 1e-9)
            }
            other => panic!("unexpected insight {other:?}"),
        }
    }

    #[test]
    fn only_first_seven_records_count() {
        let mut totals = vec![10.0; 7];
        totals.push(100.0);
        let kinds = analyze_trends(&records(&totals));
        assert_eq!(kinds, vec![InsightKind::SteadyEmissions]);
    }

    #[test]
    fn volatile_week_is_not_consistent() {
        let kinds = analyze_trends(&records(&[10.0, 14.0, 6.0, 10.0, 14.0, 6.0, 10.0]));
        assert!(!kinds.contains(&InsightKind::SteadyEmissions));
    }

    #[test]
    fn zero_older_average_reports_no_change() {
        assert!(analyze_trends(&records(&[5.0, 0.0])).is_empty());
    }

    #[test]
    fn long_car_commute_is_noted() {
        let profile = LifestyleProfile {
            transport_mode: TransportMode::Car,
            distance_per_day: 35.0,
            ..LifestyleProfile::default()
        };
        assert_eq!(
            analyze_lifestyle(&profile),
            vec![InsightKind::LongCarCommute { distance_km: 35.0 }]
        );
    }

    #[test]
    fn green_lifestyle_collects_every_positive_insight() {
        assert_eq!(
            analyze_lifestyle(&cyclist()),
            vec![
                InsightKind::ZeroEmissionTransport,
                InsightKind::CleanEnergy,
                InsightKind::PlantBasedDiet,
            ]
        );
    }

    #[test]
    fn car_driver_advice_follows_category_order() {
        let profile = LifestyleProfile {
            transport_mode: TransportMode::Car,
            electricity_usage: 12.0,
            diet: Diet::HighMeat,
            ..LifestyleProfile::default()
        };
        let advice = category_advice(&profile, &FootprintSummary { daily_total: 20.0 });
        assert_eq!(
            advice,
            vec![
                AdviceKind::CarFreeDay,
                AdviceKind::ContactEnergyProvider { daily_total: 20.0 },
                AdviceKind::EnergyAudit,
                AdviceKind::MeatlessMondays,
                AdviceKind::SecondHandFirst,
            ]
        );
    }

    #[test]
    fn green_lifestyle_still_gets_shopping_tip() {
        let advice = category_advice(&cyclist(), &FootprintSummary::default());
        assert_eq!(advice, vec![AdviceKind::SecondHandFirst]);
    }

    #[test]
    fn challenge_savings_become_trees() {
        let mut history = records(&[10.0, 10.0]);
        history[0].challenges_completed = vec![
            ChallengeCompletion {
                name: Some("Bike to work".to_string()),
                carbon_saved: 30.0,
            },
            ChallengeCompletion {
                name: None,
                carbon_saved: 15.0,
            },
        ];
        assert_eq!(
            analyze_achievements(&history),
            vec![InsightKind::ImpactMilestone {
                saved_kg: 45.0,
                trees: 2
            }]
        );
    }

    #[test]
    fn week_of_tracking_earns_streak() {
        let kinds = analyze_achievements(&records(&[9.0; 9]));
        assert_eq!(kinds, vec![InsightKind::TrackingStreak { days: 9 }]);
    }

    #[test]
    fn output_is_capped_at_five_in_stage_order() {
        let mut history = records(&[8.0, 8.0, 8.0, 8.0, 8.0, 8.0, 8.0]);
        history[2].challenges_completed = vec![ChallengeCompletion {
            name: None,
            carbon_saved: 4.0,
        }];

        let report = generate_insights(&cyclist(), &history, &FootprintSummary::default());
        let kinds: Vec<InsightType> = report.insights.iter().map(|i| i.kind).collect();

        assert_eq!(
            kinds,
            vec![
                InsightType::Consistency,
                InsightType::Lifestyle,
                InsightType::Lifestyle,
                InsightType::Lifestyle,
                InsightType::Achievement,
            ]
        );
        assert!(report.insights.iter().all(|i| i.sentiment == Sentiment::Positive));
        assert_eq!(report.recommendations.len(), 1);
    }

    #[test]
    fn empty_history_still_produces_lifestyle_output() {
        let report = generate_insights(&cyclist(), &[], &FootprintSummary::default());
        assert_eq!(report.insights.len(), 3);
        assert_eq!(report.recommendations[0].title, "Second-Hand First");
    }
}
