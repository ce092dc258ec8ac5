use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use log::info;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::InputError;
use crate::models::{ChallengeCompletion, LifestyleProfile, ProgressRecord};

pub fn load_profile(path: &Path) -> Result<LifestyleProfile, InputError> {
    read_json(path)
}

/// Loads progress records from a `.json` array or a `.csv` export, newest first.
pub fn load_history(path: &Path) -> Result<Vec<ProgressRecord>, InputError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let mut records = match extension.as_deref() {
        Some("json") => read_json::<Vec<ProgressRecord>>(path)?,
        Some("csv") => {
            let contents = read(path)?;
            parse_csv(&contents).map_err(|source| InputError::Csv {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => {
            return Err(InputError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    sort_newest_first(&mut records);
    info!("loaded {} progress records from {}", records.len(), path.display());
    Ok(records)
}

/// Parses `date,total_emissions,challenge,carbon_saved` rows.
///
/// Consecutive rows sharing a date describe one day with several completed
/// challenges; the challenge columns may be empty.
pub fn parse_csv(contents: &str) -> Result<Vec<ProgressRecord>, csv::Error> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        date: NaiveDate,
        total_emissions: f64,
        challenge: Option<String>,
        carbon_saved: Option<f64>,
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());
    let mut records: Vec<ProgressRecord> = Vec::new();

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        let name = row.challenge.filter(|name| !name.is_empty());
        let completion = if name.is_some() || row.carbon_saved.is_some() {
            Some(ChallengeCompletion {
                name,
                carbon_saved: row.carbon_saved.unwrap_or(0.0),
            })
        } else {
            None
        };

        match records.last_mut() {
            Some(last) if last.date == row.date => {
                last.challenges_completed.extend(completion);
            }
            _ => records.push(ProgressRecord {
                id: Some(Uuid::new_v4()),
                date: row.date,
                total_emissions: row.total_emissions,
                challenges_completed: completion.into_iter().collect(),
            }),
        }
    }

    Ok(records)
}

pub fn sort_newest_first(records: &mut [ProgressRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

/// A realistic week of tracking used for demos when no history file is given.
pub fn sample_week() -> anyhow::Result<Vec<ProgressRecord>> {
    let days = vec![
        ("6b0c1a52-8f0e-4d7b-9a7e-1c5d2f0a9e11", 15, 14.2, vec![("Meatless Monday", 3.1)]),
        ("0f8a9d2e-3b44-4c61-8a0b-5e7f9c2d1a22", 14, 15.8, vec![]),
        ("c3e1b7a4-6d5f-4e2a-b8c9-2a1f0e3d4b33", 13, 13.9, vec![("Bike to work", 5.8)]),
        ("9a2d4c6e-1f3b-4a5c-8d7e-6b9f0a1c2d44", 12, 16.4, vec![]),
        ("4e6f8a0c-2b4d-4f6a-9c8e-0d2b4f6a8c55", 11, 15.1, vec![("Cold wash laundry", 0.6)]),
        ("7d9b1f3a-5c7e-4b9d-a1f3-5c7e9b1d3f66", 10, 17.3, vec![]),
        ("2c4e6a8b-0d2f-4c6e-8a0b-2d4f6c8e0a77", 9, 16.8, vec![("Car-free day", 4.6)]),
    ];

    let mut records = Vec::new();
    for (id, day, total, challenges) in days {
        records.push(ProgressRecord {
            id: Some(Uuid::parse_str(id)?),
            date: NaiveDate::from_ymd_opt(2026, 3, day).context("invalid date")?,
            total_emissions: total,
            challenges_completed: challenges
                .into_iter()
                .map(|(name, carbon_saved)| ChallengeCompletion {
                    name: Some(name.to_string()),
                    carbon_saved,
                })
                .collect(),
        });
    }

    Ok(records)
}

fn read(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let contents = read(path)?;
    serde_json::from_str(&contents).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}
