use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum TransportMode {
    #[default]
    Car,
    PublicTransport,
    Bicycle,
    Walking,
    Motorcycle,
    ElectricCar,
}

impl TransportMode {
    /// Parses a mode label, treating anything unrecognised as a car.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "public_transport" => TransportMode::PublicTransport,
            "bicycle" => TransportMode::Bicycle,
            "walking" => TransportMode::Walking,
            "motorcycle" => TransportMode::Motorcycle,
            "electric_car" => TransportMode::ElectricCar,
            _ => TransportMode::Car,
        }
    }

    pub fn is_zero_emission(self) -> bool {
        matches!(self, TransportMode::Bicycle | TransportMode::Walking)
    }
}

impl From<String> for TransportMode {
    fn from(label: String) -> Self {
        TransportMode::from_label(&label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Diet {
    Vegan,
    Vegetarian,
    Pescatarian,
    #[default]
    Omnivore,
    HighMeat,
}

impl Diet {
    /// Parses a diet label, treating anything unrecognised as omnivore.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "vegan" => Diet::Vegan,
            "vegetarian" => Diet::Vegetarian,
            "pescatarian" => Diet::Pescatarian,
            "high_meat" => Diet::HighMeat,
            _ => Diet::Omnivore,
        }
    }

    pub fn is_plant_based(self) -> bool {
        matches!(self, Diet::Vegan | Diet::Vegetarian)
    }

    pub fn includes_meat(self) -> bool {
        matches!(self, Diet::Omnivore | Diet::HighMeat)
    }
}

impl From<String> for Diet {
    fn from(label: String) -> Self {
        Diet::from_label(&label)
    }
}

/// Self-reported lifestyle inputs for one estimate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifestyleProfile {
    #[serde(alias = "primaryMode")]
    pub transport_mode: TransportMode,
    /// km per day
    pub distance_per_day: f64,
    /// kWh per day
    pub electricity_usage: f64,
    /// kWh per day
    pub gas_usage: f64,
    #[serde(alias = "renewableEnergy")]
    pub uses_renewable: bool,
    pub diet: Diet,
    pub clothes_per_month: f64,
    pub electronics_per_year: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Transportation,
    Energy,
    Diet,
    Shopping,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Transportation,
        Category::Energy,
        Category::Diet,
        Category::Shopping,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Transportation => "transportation",
            Category::Energy => "energy",
            Category::Diet => "diet",
            Category::Shopping => "shopping",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Daily emissions per category, in kg CO₂.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub transportation: f64,
    pub energy: f64,
    pub diet: f64,
    pub shopping: f64,
}

impl EmissionBreakdown {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::Energy => self.energy,
            Category::Diet => self.diet,
            Category::Shopping => self.shopping,
        }
    }

    pub fn daily_total(&self) -> f64 {
        self.transportation + self.energy + self.diet + self.shopping
    }

    /// Copy with every category rounded for display. Never sum the result.
    pub fn rounded(&self) -> Self {
        EmissionBreakdown {
            transportation: round2(self.transportation),
            energy: round2(self.energy),
            diet: round2(self.diet),
            shopping: round2(self.shopping),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeframe {
    Weekly,
    OneTime,
    Monthly,
    Ongoing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: Category,
    pub title: String,
    pub description: String,
    /// kg CO₂ per day
    pub potential_saving: f64,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<Timeframe>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChallengeCompletion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub carbon_saved: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub date: NaiveDate,
    #[serde(default)]
    pub total_emissions: f64,
    #[serde(default)]
    pub challenges_completed: Vec<ChallengeCompletion>,
}

impl ProgressRecord {
    pub fn carbon_saved(&self) -> f64 {
        self.challenges_completed.iter().map(|c| c.carbon_saved).sum()
    }
}

/// Current footprint figures supplied alongside insight requests.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FootprintSummary {
    #[serde(alias = "daily")]
    pub daily_total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    Trend,
    Consistency,
    Lifestyle,
    Achievement,
    Streak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub title: String,
    pub description: String,
    pub sentiment: Sentiment,
    pub impact: Impact,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FootprintEstimate {
    pub daily_total: f64,
    pub weekly: f64,
    pub monthly: f64,
    pub breakdown: EmissionBreakdown,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeImpact {
    pub current: f64,
    pub predicted: f64,
    pub savings: f64,
    pub savings_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualProjection {
    pub annual_kg: f64,
    pub annual_tons: f64,
    pub comparison_to_global_average_percent: f64,
    pub trees_needed: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InsightReport {
    pub insights: Vec<Insight>,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub period: String,
    pub total_emissions: f64,
    pub average_daily: f64,
    pub challenges_completed: usize,
    pub carbon_saved: f64,
    pub net_impact: f64,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStatistics {
    pub total_carbon: f64,
    pub average_daily: f64,
    pub days: usize,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressOverview {
    pub total_days: usize,
    pub total_carbon: f64,
    pub average_daily: f64,
    pub total_challenges: usize,
    pub total_carbon_saved: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_activity: Option<NaiveDate>,
}

/// Newest 30 records against the 30 before them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyComparison {
    pub last_30_days: f64,
    pub previous_30_days: f64,
    /// Percent drop from the previous block; negative when emissions rose.
    pub change: f64,
    pub improving: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub overview: ProgressOverview,
    pub monthly_comparison: MonthlyComparison,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
