use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;

mod config;
mod error;
mod estimator;
mod factors;
mod history;
mod insights;
mod models;
mod report;
mod summary;
mod templates;

use config::OutputFormat;
use models::{FootprintSummary, ProgressRecord};

#[derive(Parser)]
#[command(name = "ecostep", version)]
#[command(
    about = "Daily carbon footprint estimates and personalised eco insights",
    long_about = None
)]
struct Cli {
    /// Output format (defaults to $ECOSTEP_FORMAT, then text)
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct HistorySource {
    /// Progress history as .json or .csv
    #[arg(long, conflicts_with = "sample_history")]
    history: Option<PathBuf>,
    /// Use a built-in week of sample progress
    #[arg(long)]
    sample_history: bool,
}

impl HistorySource {
    fn load(&self) -> anyhow::Result<Vec<ProgressRecord>> {
        if self.sample_history {
            return history::sample_week();
        }
        match &self.history {
            Some(path) => Ok(history::load_history(path)?),
            None => Ok(Vec::new()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate daily emissions for a lifestyle profile
    Estimate {
        #[arg(long)]
        profile: PathBuf,
    },
    /// Compare a current profile against a proposed change
    Predict {
        #[arg(long)]
        current: PathBuf,
        #[arg(long)]
        proposed: PathBuf,
    },
    /// Project a daily total over a year
    Annual {
        #[arg(long)]
        daily: f64,
    },
    /// Generate insights and recommendations
    Insights {
        #[arg(long)]
        profile: PathBuf,
        #[command(flatten)]
        source: HistorySource,
    },
    /// Summarise a week of progress records
    Weekly {
        #[command(flatten)]
        source: HistorySource,
    },
    /// Totals over a recent period plus a month-over-month comparison
    Stats {
        #[arg(long)]
        history: PathBuf,
        #[arg(long, default_value_t = 30)]
        period_days: i64,
    },
    /// Generate a markdown report
    Report {
        #[arg(long)]
        profile: PathBuf,
        #[command(flatten)]
        source: HistorySource,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let format = config::resolve_format(cli.format)?;

    match cli.command {
        Commands::Estimate { profile } => {
            let profile = load_profile(&profile)?;
            let estimate = estimator::estimate(&profile);
            emit(format, &estimate, || {
                let mut lines = vec![format!(
                    "Daily footprint: {:.2} kg CO₂",
                    estimate.daily_total
                )];
                for category in models::Category::ALL {
                    lines.push(format!(
                        "  {:<15} {:.2} kg",
                        category.as_str(),
                        estimate.breakdown.get(category)
                    ));
                }
                for rec in estimate.recommendations.iter() {
                    lines.push(format!(
                        "- {} (saves {:.2} kg/day, {:?})",
                        rec.title, rec.potential_saving, rec.difficulty
                    ));
                }
                lines.join("\n")
            })?;
        }
        Commands::Predict { current, proposed } => {
            let current = load_profile(&current)?;
            let proposed = load_profile(&proposed)?;
            let impact = estimator::predict_change_impact(&current, &proposed);
            emit(format, &impact, || {
                format!(
                    "Current {:.2} kg/day -> predicted {:.2} kg/day: saves {:.2} kg ({:.1}%)",
                    impact.current, impact.predicted, impact.savings, impact.savings_percent
                )
            })?;
        }
        Commands::Annual { daily } => {
            let projection = estimator::annual_projection(daily);
            emit(format, &projection, || {
                format!(
                    "{:.2} kg ({:.2} t) per year, {:+.1}% vs. global average, {} trees to offset",
                    projection.annual_kg,
                    projection.annual_tons,
                    projection.comparison_to_global_average_percent,
                    projection.trees_needed
                )
            })?;
        }
        Commands::Insights { profile, source } => {
            let profile = load_profile(&profile)?;
            let records = source.load()?;
            let footprint = FootprintSummary {
                daily_total: estimator::estimate(&profile).daily_total,
            };
            let generated = insights::generate_insights(&profile, &records, &footprint);
            emit(format, &generated, || {
                let mut lines = vec!["Insights:".to_string()];
                for insight in generated.insights.iter() {
                    lines.push(format!("- {}: {}", insight.title, insight.description));
                }
                lines.push("Recommendations:".to_string());
                for rec in generated.recommendations.iter() {
                    lines.push(format!("- {}: {}", rec.title, rec.description));
                }
                lines.join("\n")
            })?;
        }
        Commands::Weekly { source } => {
            let records = source.load()?;
            match summary::generate_weekly_summary(&records) {
                Ok(weekly) => emit(format, &weekly, || weekly.summary.clone())?,
                Err(err) => emit(
                    format,
                    &serde_json::json!({ "error": err.to_string() }),
                    || err.to_string(),
                )?,
            }
        }
        Commands::Stats {
            history,
            period_days,
        } => {
            let records = history::load_history(&history)?;
            let today = chrono::Local::now().date_naive();
            let window = summary::history_statistics(&records, period_days, today);
            let progress = summary::progress_stats(&records);
            let output = StatsOutput {
                window: &window,
                progress: &progress,
            };
            emit(format, &output, || {
                let monthly = &progress.monthly_comparison;
                format!(
                    "{} tracked days in the last {}: {:.2} kg total, {:.2} kg/day average\n\
                     {} days tracked overall, {} challenges, {:.2} kg saved\n\
                     Last 30 records {:.2} kg vs. previous 30 {:.2} kg ({:+.1}%, {})",
                    window.days,
                    window.period,
                    window.total_carbon,
                    window.average_daily,
                    progress.overview.total_days,
                    progress.overview.total_challenges,
                    progress.overview.total_carbon_saved,
                    monthly.last_30_days,
                    monthly.previous_30_days,
                    monthly.change,
                    if monthly.improving { "improving" } else { "not improving" }
                )
            })?;
        }
        Commands::Report {
            profile,
            source,
            out,
        } => {
            let profile = load_profile(&profile)?;
            let records = source.load()?;
            let report = report::build_report(&profile, &records);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            info!("report covers {} progress records", records.len());
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct StatsOutput<'a> {
    window: &'a models::HistoryStatistics,
    progress: &'a models::ProgressStats,
}

fn load_profile(path: &Path) -> anyhow::Result<models::LifestyleProfile> {
    Ok(history::load_profile(path)?)
}

fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => println!("{}", text()),
    }
    Ok(())
}
