use std::path::Path;

use clap::ArgMatches;
use kvs_defs::KvsError;
use kvs_utils::get_config_path;
use serde::Deserialize;

use crate::output::OutputFormat;

/// Contents of `config.json` in the cfkvs config directory. Every field is optional.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    pub output: Option<String>,
    pub region: Option<String>,
}

impl CliConfig {
    pub fn load() -> Result<Self, KvsError> {
        let path = get_config_path()?;
        Self::load_from(&path)
    }

    /// A missing file gives the defaults.
    pub fn load_from(path: &Path) -> Result<Self, KvsError> {
        if !path.exists() {
            log::debug!("No config file at {}", path.display());
            return Ok(CliConfig::default());
        }

        let invalid = |e: String| KvsError::InvalidConfig(path.display().to_string(), e);
        let content = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub output: OutputFormat,
    pub region: Option<String>,
    pub debug: bool,
}

impl Settings {
    /// Flags win over the config file, which wins over the defaults.
    pub fn resolve(matches: &ArgMatches, config: &CliConfig) -> Result<Self, KvsError> {
        let output = match matches.get_one::<String>("output") {
            Some(flag) => flag.parse()?,
            None => match &config.output {
                Some(value) => value.parse()?,
                None => OutputFormat::default(),
            },
        };

        let region = matches
            .get_one::<String>("region")
            .cloned()
            .or_else(|| config.region.clone())
            .filter(|r| !r.is_empty());

        Ok(Settings {
            output,
            region,
            debug: matches.get_flag("debug"),
        })
    }
}
