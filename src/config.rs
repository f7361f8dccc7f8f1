use std::str::FromStr;

use color_eyre::eyre::{bail, WrapErr};
use lib::{BoundaryPolicy, FoodTargeting, SelectorConfig};
use serde::Serialize;

/// What `/info` reports to the game host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SnakeInfo {
    pub apiversion: String,
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
}

impl Default for SnakeInfo {
    fn default() -> Self {
        Self {
            apiversion: "1".to_string(),
            author: "Slitherin".to_string(),
            color: "#888888".to_string(),
            head: "silly".to_string(),
            tail: "bonhomme".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Tree,
}

impl FromStr for LogFormat {
    type Err = color_eyre::Report;

    fn from_str(s: &str) -> color_eyre::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "tree" => Ok(Self::Tree),
            other => bail!("unknown log format {other:?}, expected pretty, json or tree"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub port: u16,
    pub info: SnakeInfo,
    pub selector: SelectorConfig,
    pub log_format: LogFormat,
    pub sentry_dsn: Option<String>,
}

impl Settings {
    /// Reads settings from the process environment. Call `dotenvy::dotenv()` first
    /// to pick up a `.env` file.
    pub fn from_env() -> color_eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> color_eyre::Result<Self> {
        let defaults = SnakeInfo::default();
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .wrap_err_with(|| format!("PORT must be a port number, got {port:?}"))?,
            None => 8000,
        };
        let info = SnakeInfo {
            apiversion: defaults.apiversion,
            author: lookup("SNAKE_AUTHOR").unwrap_or(defaults.author),
            color: lookup("SNAKE_COLOR").unwrap_or(defaults.color),
            head: lookup("SNAKE_HEAD").unwrap_or(defaults.head),
            tail: lookup("SNAKE_TAIL").unwrap_or(defaults.tail),
        };
        let selector = SelectorConfig {
            boundary: parse_or_default::<BoundaryPolicy>(lookup("BOUNDARY_POLICY"))?,
            food: parse_or_default::<FoodTargeting>(lookup("FOOD_TARGETING"))?,
        };
        Ok(Self {
            port,
            info,
            selector,
            log_format: parse_or_default(lookup("LOG_FORMAT"))?,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
        })
    }
}

fn parse_or_default<T>(value: Option<String>) -> color_eyre::Result<T>
where
    T: FromStr<Err = color_eyre::Report> + Default,
{
    value.map_or_else(|| Ok(T::default()), |v| v.parse())
}
