use log::debug;

use crate::factors::{FACTORS, GLOBAL_AVERAGE_KG_PER_YEAR, TREE_ABSORPTION_KG_PER_YEAR};
use crate::models::{
    round1, round2, AnnualProjection, Category, ChangeImpact, EmissionBreakdown,
    FootprintEstimate, LifestyleProfile, Recommendation, TransportMode,
};
use crate::templates::{render_advice, AdviceKind};

/// Minimum daily emissions (kg) before a category earns a recommendation.
const TRANSPORT_THRESHOLD: f64 = 2.0;
const ENERGY_THRESHOLD: f64 = 3.0;
const DIET_THRESHOLD: f64 = 5.0;
const SHOPPING_THRESHOLD: f64 = 2.0;

const RANKED_CATEGORIES: usize = 3;

pub fn breakdown(profile: &LifestyleProfile) -> EmissionBreakdown {
    let factors = &FACTORS;
    let renewable = if profile.uses_renewable {
        factors.renewable_multiplier
    } else {
        1.0
    };

    EmissionBreakdown {
        transportation: profile.distance_per_day * factors.transport(profile.transport_mode),
        energy: profile.electricity_usage * factors.electricity_per_kwh * renewable
            + profile.gas_usage * factors.gas_per_kwh,
        diet: factors.diet(profile.diet),
        shopping: profile.clothes_per_month * factors.clothing_per_item / 30.0
            + profile.electronics_per_year * factors.electronics_per_item / 365.0,
    }
}

pub fn estimate(profile: &LifestyleProfile) -> FootprintEstimate {
    let breakdown = breakdown(profile);
    let daily = breakdown.daily_total();
    debug!(
        "estimated {:.3} kg/day (transport {:.3}, energy {:.3}, diet {:.3}, shopping {:.3})",
        daily, breakdown.transportation, breakdown.energy, breakdown.diet, breakdown.shopping
    );

    FootprintEstimate {
        daily_total: round2(daily),
        weekly: round2(daily * 7.0),
        monthly: round2(daily * 30.0),
        breakdown: breakdown.rounded(),
        recommendations: rank_recommendations(&breakdown, profile),
    }
}

/// Suggestions for the three largest categories, largest first.
///
/// Ties keep the fixed category order, since the sort is stable.
pub fn rank_recommendations(
    breakdown: &EmissionBreakdown,
    profile: &LifestyleProfile,
) -> Vec<Recommendation> {
    let mut ranked: Vec<(Category, f64)> = Category::ALL
        .iter()
        .map(|&category| (category, breakdown.get(category)))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut advice = Vec::new();
    for (category, emissions) in ranked.into_iter().take(RANKED_CATEGORIES) {
        match category {
            Category::Transportation if emissions > TRANSPORT_THRESHOLD => {
                match profile.transport_mode {
                    TransportMode::Car => advice.push(AdviceKind::PublicTransport { emissions }),
                    TransportMode::Motorcycle => {
                        advice.push(AdviceKind::ElectricVehicle { emissions })
                    }
                    _ => {}
                }
            }
            Category::Energy if emissions > ENERGY_THRESHOLD => {
                if !profile.uses_renewable {
                    advice.push(AdviceKind::RenewableSwitch { emissions });
                }
                advice.push(AdviceKind::EnergyEfficiency { emissions });
            }
            Category::Diet if emissions > DIET_THRESHOLD => {
                if profile.diet.includes_meat() {
                    advice.push(AdviceKind::ReduceMeat { emissions });
                }
            }
            Category::Shopping if emissions > SHOPPING_THRESHOLD => {
                advice.push(AdviceKind::BuySecondHand { emissions });
            }
            _ => {}
        }
    }

    advice.into_iter().map(render_advice).collect()
}

/// Compares the reported daily totals of two profiles, so the savings always
/// agree with the two figures shown beside them.
pub fn predict_change_impact(
    current: &LifestyleProfile,
    proposed: &LifestyleProfile,
) -> ChangeImpact {
    let current_daily = estimate(current).daily_total;
    let predicted_daily = estimate(proposed).daily_total;
    let savings = current_daily - predicted_daily;

    ChangeImpact {
        current: current_daily,
        predicted: predicted_daily,
        savings: round2(savings),
        savings_percent: round1(savings_percent(savings, current_daily)),
    }
}

fn savings_percent(savings: f64, current_daily: f64) -> f64 {
    if current_daily > 0.0 {
        savings / current_daily * 100.0
    } else {
        0.0
    }
}

pub fn annual_projection(daily_total: f64) -> AnnualProjection {
    let annual = daily_total * 365.0;

    AnnualProjection {
        annual_kg: round2(annual),
        annual_tons: round2(annual / 1000.0),
        comparison_to_global_average_percent: round1(
            (annual / GLOBAL_AVERAGE_KG_PER_YEAR - 1.0) * 100.0,
        ),
        trees_needed: (annual / TREE_ABSORPTION_KG_PER_YEAR).round().max(0.0) as u64,
    }
}
