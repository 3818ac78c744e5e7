use serde::{Deserialize, Serialize};
use std::fs;

/// Policy kinds the factory in sixmax-ai knows how to build.
const KNOWN_POLICIES: &[&str] = &["uniform"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub delay_ms: u64,
    pub record: Option<String>,
    pub policy: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub delay_ms: ValueSource,
    pub record: ValueSource,
    pub policy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            delay_ms: ValueSource::Default,
            record: ValueSource::Default,
            policy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            delay_ms: 1_000,
            record: None,
            policy: "uniform".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolve the effective configuration: defaults, then the TOML file named
/// by `SIXMAX_CONFIG`, then env overrides, tracking where each value came
/// from.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("SIXMAX_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.delay_ms {
            cfg.delay_ms = v;
            sources.delay_ms = ValueSource::File;
        }
        if let Some(v) = f.record {
            cfg.record = Some(v);
            sources.record = ValueSource::File;
        }
        if let Some(v) = f.policy {
            cfg.policy = v;
            sources.policy = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("SIXMAX_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(delay) = std::env::var("SIXMAX_DELAY_MS")
        && !delay.is_empty()
    {
        cfg.delay_ms = delay
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid delay_ms".into()))?;
        sources.delay_ms = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    delay_ms: Option<u64>,
    #[serde(default)]
    record: Option<String>,
    #[serde(default)]
    policy: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !KNOWN_POLICIES.contains(&cfg.policy.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown policy {:?}",
            cfg.policy
        )));
    }
    if cfg.delay_ms > 60_000 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: delay_ms must be <= 60000".into(),
        ));
    }
    Ok(())
}
