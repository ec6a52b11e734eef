use anyhow::{bail, Context, Result};

/// Which conversation flow this deployment runs.
///
/// `Major` offers 6 major-city prefectures right after the occupation step and
/// carries the rich-menu actions (start_search, help) plus the follow
/// greeting. `Regions` inserts a region step so all 47 prefectures fit the
/// quick-reply item limit, and drops the rich-menu-only branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowVariant {
    Major,
    Regions,
}

impl FlowVariant {
    fn parse(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(FlowVariant::Major),
            "regions" => Ok(FlowVariant::Regions),
            other => bail!("FLOW_VARIANT must be 'major' or 'regions', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub channel_access_token: String,
    pub flow_variant: FlowVariant,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            channel_access_token: require_env("LINE_CHANNEL_ACCESS_TOKEN")?,
            flow_variant: FlowVariant::parse(
                &std::env::var("FLOW_VARIANT").unwrap_or_else(|_| "major".to_string()),
            )?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
