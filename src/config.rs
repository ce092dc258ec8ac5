use anyhow::bail;
use clap::ValueEnum;

pub const FORMAT_ENV: &str = "ECOSTEP_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("{FORMAT_ENV} must be 'text' or 'json', got '{other}'"),
        }
    }
}

/// Picks the output format: explicit flag, then environment, then text.
pub fn resolve_format(flag: Option<OutputFormat>) -> anyhow::Result<OutputFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    match std::env::var(FORMAT_ENV) {
        Ok(value) => OutputFormat::parse(&value),
        Err(_) => Ok(OutputFormat::default()),
    }
}
