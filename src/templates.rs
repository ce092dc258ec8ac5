//! Text for insights and recommendations.
//!
//! Selection code decides *which* observation applies and with what figures;
//! this module only turns those decisions into user-facing records.

use crate::models::{
    round2, Category, Difficulty, Impact, Insight, InsightType, Recommendation, Sentiment,
    Timeframe,
};

/// An observation about the user's footprint, with the figures it quotes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsightKind {
    EmissionsDecreased { percent: f64 },
    EmissionsIncreased { percent: f64 },
    SteadyEmissions,
    LongCarCommute { distance_km: f64 },
    ZeroEmissionTransport,
    CleanEnergy,
    PlantBasedDiet,
    ImpactMilestone { saved_kg: f64, trees: u64 },
    TrackingStreak { days: usize },
}

/// An actionable suggestion. Variants carrying `emissions` scale their
/// saving from that category's daily emissions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdviceKind {
    PublicTransport { emissions: f64 },
    ElectricVehicle { emissions: f64 },
    RenewableSwitch { emissions: f64 },
    EnergyEfficiency { emissions: f64 },
    ReduceMeat { emissions: f64 },
    BuySecondHand { emissions: f64 },
    CarFreeDay,
    ContactEnergyProvider { daily_total: f64 },
    EnergyAudit,
    MeatlessMondays,
    SecondHandFirst,
}

pub fn render_insight(kind: InsightKind) -> Insight {
    use InsightKind::*;

    let (kind_tag, title, description, sentiment, impact) = match kind {
        EmissionsDecreased { percent } => (
            InsightType::Trend,
            "📉 Great Progress!",
            format!(
                "Your carbon footprint decreased by {:.1}% this week!",
                percent.abs()
            ),
            Sentiment::Positive,
            Impact::High,
        ),
        EmissionsIncreased { percent } => (
            InsightType::Trend,
            "📈 Let's Improve",
            format!(
                "Your emissions increased by {:.1}% this week. Small changes can make a big difference!",
                percent.abs()
            ),
            Sentiment::Neutral,
            Impact::Medium,
        ),
        SteadyEmissions => (
            InsightType::Consistency,
            "🎯 Consistency Champion",
            "Your emissions are very consistent. Great job maintaining your eco-friendly habits!"
                .to_string(),
            Sentiment::Positive,
            Impact::Medium,
        ),
        LongCarCommute { distance_km } => (
            InsightType::Lifestyle,
            "🚗 High Travel Distance",
            format!(
                "You travel {distance_km:.1}km daily by car. Consider carpooling or remote work days to reduce emissions."
            ),
            Sentiment::Neutral,
            Impact::High,
        ),
        ZeroEmissionTransport => (
            InsightType::Lifestyle,
            "🚴 Eco Transport Champion",
            "Amazing! Your zero-emission transportation is making a real difference for the planet!"
                .to_string(),
            Sentiment::Positive,
            Impact::High,
        ),
        CleanEnergy => (
            InsightType::Lifestyle,
            "♻️ Clean Energy User",
            "Excellent! Using renewable energy reduces your carbon footprint by up to 70%!"
                .to_string(),
            Sentiment::Positive,
            Impact::High,
        ),
        PlantBasedDiet => (
            InsightType::Lifestyle,
            "🌱 Plant-Based Hero",
            "Your plant-based diet saves approximately 3-5kg CO₂ daily compared to a meat-heavy diet!"
                .to_string(),
            Sentiment::Positive,
            Impact::High,
        ),
        ImpactMilestone { saved_kg, trees } => (
            InsightType::Achievement,
            "🌳 Impact Milestone",
            format!("You've saved {saved_kg:.1}kg CO₂! That's like planting {trees} trees!"),
            Sentiment::Positive,
            Impact::High,
        ),
        TrackingStreak { days } => (
            InsightType::Streak,
            "🔥 Consistency Matters",
            format!("{days} days of tracking! Your commitment is making a real difference!"),
            Sentiment::Positive,
            Impact::Medium,
        ),
    };

    Insight {
        kind: kind_tag,
        title: title.to_string(),
        description,
        sentiment,
        impact,
    }
}

pub fn render_advice(kind: AdviceKind) -> Recommendation {
    use AdviceKind::*;

    let (category, title, description, saving, difficulty, timeframe) = match kind {
        PublicTransport { emissions } => (
            Category::Transportation,
            "Switch to Public Transport",
            format!(
                "Using public transport could save you {:.1}kg CO₂ daily",
                emissions * 0.5
            ),
            emissions * 0.5,
            Difficulty::Medium,
            None,
        ),
        ElectricVehicle { emissions } => (
            Category::Transportation,
            "Consider an Electric Vehicle",
            format!(
                "An electric vehicle could reduce your transport emissions by {:.1}kg CO₂",
                emissions * 0.6
            ),
            emissions * 0.6,
            Difficulty::Hard,
            None,
        ),
        RenewableSwitch { emissions } => (
            Category::Energy,
            "Switch to Renewable Energy",
            format!(
                "Renewable energy could reduce your emissions by {:.1}kg CO₂ daily",
                emissions * 0.7
            ),
            emissions * 0.7,
            Difficulty::Easy,
            None,
        ),
        EnergyEfficiency { emissions } => (
            Category::Energy,
            "Improve Energy Efficiency",
            "LED bulbs and better insulation could save 20% on energy emissions".to_string(),
            emissions * 0.2,
            Difficulty::Easy,
            None,
        ),
        ReduceMeat { emissions } => (
            Category::Diet,
            "Reduce Meat Consumption",
            format!(
                "Eating plant-based 2-3 days per week could save {:.1}kg CO₂ daily",
                emissions * 0.3
            ),
            emissions * 0.3,
            Difficulty::Medium,
            None,
        ),
        BuySecondHand { emissions } => (
            Category::Shopping,
            "Buy Second-Hand",
            "Choosing second-hand items can reduce shopping emissions by up to 80%".to_string(),
            emissions * 0.8,
            Difficulty::Easy,
            None,
        ),
        CarFreeDay => (
            Category::Transportation,
            "Try a Car-Free Day",
            "Challenge yourself to use alternative transport one day this week. You could save 2-5kg CO₂!"
                .to_string(),
            3.5,
            Difficulty::Easy,
            Some(Timeframe::Weekly),
        ),
        ContactEnergyProvider { daily_total } => (
            Category::Energy,
            "Contact Your Energy Provider",
            "Ask about renewable energy plans. It's often the same price and can cut emissions by 70%!"
                .to_string(),
            daily_total * 0.3,
            Difficulty::Easy,
            Some(Timeframe::OneTime),
        ),
        EnergyAudit => (
            Category::Energy,
            "Energy Audit",
            "Your electricity usage is above average. Consider an energy audit to find savings opportunities."
                .to_string(),
            2.0,
            Difficulty::Medium,
            Some(Timeframe::Monthly),
        ),
        MeatlessMondays => (
            Category::Diet,
            "Meatless Mondays",
            "Start with one plant-based day per week. It's easier than you think and saves ~1kg CO₂ per day!"
                .to_string(),
            1.0,
            Difficulty::Easy,
            Some(Timeframe::Weekly),
        ),
        SecondHandFirst => (
            Category::Shopping,
            "Second-Hand First",
            "Before buying new, check second-hand options. It reduces manufacturing emissions significantly!"
                .to_string(),
            1.5,
            Difficulty::Easy,
            Some(Timeframe::Ongoing),
        ),
    };

    Recommendation {
        category,
        title: title.to_string(),
        description,
        potential_saving: round2(saving),
        difficulty,
        timeframe,
    }
}
