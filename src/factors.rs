use crate::models::{Diet, TransportMode};

/// Emission factors in kg CO₂ per unit of activity.
#[derive(Debug, Clone, Copy)]
pub struct EmissionFactorTable {
    pub electricity_per_kwh: f64,
    pub gas_per_kwh: f64,
    pub clothing_per_item: f64,
    pub electronics_per_item: f64,
    /// Multiplier on the electricity term when the household buys renewable power.
    pub renewable_multiplier: f64,
}

pub const FACTORS: EmissionFactorTable = EmissionFactorTable {
    // EU grid average
    electricity_per_kwh: 0.295,
    gas_per_kwh: 0.185,
    clothing_per_item: 15.0,
    electronics_per_item: 100.0,
    renewable_multiplier: 0.3,
};

/// Yearly CO₂ absorption of one tree, in kg.
pub const TREE_ABSORPTION_KG_PER_YEAR: f64 = 21.0;

/// Reference per-capita footprint used for annual comparisons, in kg.
pub const GLOBAL_AVERAGE_KG_PER_YEAR: f64 = 4000.0;

impl EmissionFactorTable {
    /// kg CO₂ per km travelled.
    pub fn transport(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Car => 0.192,
            TransportMode::PublicTransport => 0.089,
            TransportMode::Bicycle | TransportMode::Walking => 0.0,
            TransportMode::Motorcycle => 0.113,
            TransportMode::ElectricCar => 0.053,
        }
    }

    /// kg CO₂ per day of eating this way.
    pub fn diet(&self, diet: Diet) -> f64 {
        match diet {
            Diet::Vegan => 2.89,
            Diet::Vegetarian => 3.81,
            Diet::Pescatarian => 4.67,
            Diet::Omnivore => 7.19,
            Diet::HighMeat => 10.24,
        }
    }
}
