use std::fmt::Write;

use crate::estimator;
use crate::insights;
use crate::models::{Category, FootprintSummary, LifestyleProfile, ProgressRecord};
use crate::summary;

pub fn build_report(profile: &LifestyleProfile, history: &[ProgressRecord]) -> String {
    let estimate = estimator::estimate(profile);
    let projection = estimator::annual_projection(estimate.daily_total);
    let footprint = FootprintSummary {
        daily_total: estimate.daily_total,
    };
    let generated = insights::generate_insights(profile, history, &footprint);

    let mut output = String::new();

    let _ = writeln!(output, "# Carbon Footprint Report");
    let _ = writeln!(
        output,
        "Estimated {:.2} kg CO₂ per day ({:.2} kg per week, {:.2} kg per month)",
        estimate.daily_total, estimate.weekly, estimate.monthly
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Breakdown");

    let mut categories: Vec<(Category, f64)> = Category::ALL
        .iter()
        .map(|&category| (category, estimate.breakdown.get(category)))
        .collect();
    categories.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    for (category, value) in categories {
        let _ = writeln!(output, "- {}: {:.2} kg/day", category, value);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Annual Projection");
    let _ = writeln!(
        output,
        "- {:.2} t CO₂ per year ({:+.1}% vs. global average)",
        projection.annual_tons, projection.comparison_to_global_average_percent
    );
    let _ = writeln!(
        output,
        "- {} trees needed to absorb it",
        projection.trees_needed
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Top Recommendations");

    if estimate.recommendations.is_empty() {
        let _ = writeln!(output, "No category is above its recommendation threshold.");
    } else {
        for rec in estimate.recommendations.iter() {
            let _ = writeln!(
                output,
                "- **{}** ({}, {:?}): {} (saves {:.2} kg/day)",
                rec.title, rec.category, rec.difficulty, rec.description, rec.potential_saving
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Insights");

    if generated.insights.is_empty() {
        let _ = writeln!(output, "No insights yet. Keep tracking to see trends.");
    } else {
        for insight in generated.insights.iter() {
            let _ = writeln!(output, "- {}: {}", insight.title, insight.description);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Next Steps");
    for rec in generated.recommendations.iter() {
        let _ = writeln!(output, "- {}: {}", rec.title, rec.description);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Weekly Summary");

    match summary::generate_weekly_summary(history) {
        Ok(weekly) => {
            let _ = writeln!(output, "{}", weekly.summary);
        }
        Err(err) => {
            let _ = writeln!(output, "{err}.");
        }
    }

    let mut recent = history.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Recent Days");

    if recent.is_empty() {
        let _ = writeln!(output, "No progress recorded yet.");
    } else {
        for record in recent.iter().take(5) {
            let _ = writeln!(
                output,
                "- {}: {:.2} kg CO₂, {} challenges ({:.1} kg saved)",
                record.date,
                record.total_emissions,
                record.challenges_completed.len(),
                record.carbon_saved()
            );
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::sample_week;
    use crate::models::{Diet, TransportMode};

    fn commuter() -> LifestyleProfile {
        LifestyleProfile {
            transport_mode: TransportMode::Car,
            distance_per_day: 30.0,
            electricity_usage: 10.0,
            gas_usage: 5.0,
            uses_renewable: false,
            diet: Diet::Omnivore,
            clothes_per_month: 2.0,
            electronics_per_year: 1.0,
        }
    }

    #[test]
    fn report_lists_largest_category_first() {
        let report = build_report(&commuter(), &[]);
        let diet = report.find("- diet:").unwrap();
        let shopping = report.find("- shopping:").unwrap();
        assert!(diet < shopping);
        assert!(report.contains("Estimated 18.10 kg CO₂ per day"));
        assert!(report.contains("Switch to Public Transport"));
    }

    #[test]
    fn report_without_history_says_so() {
        let report = build_report(&commuter(), &[]);
        assert!(report.contains("No data available."));
        assert!(report.contains("No progress recorded yet."));
    }

    #[test]
    fn report_with_history_includes_summary_and_days() {
        let history = sample_week().unwrap();
        let report = build_report(&commuter(), &history);
        assert!(report.contains("You emitted"));
        assert!(report.contains("- 2026-03-15: 14.20 kg CO₂, 1 challenges (3.1 kg saved)"));
        assert!(!report.contains("2026-03-10"));
    }
}
