use anyhow::{anyhow, Result};
use config::Config;
use std::collections::HashMap;
use std::path::Path;

pub struct IpscopeConfig {
    /// Access token for the lookup API, if any
    pub token: Option<String>,

    /// Base URL of the lookup API
    pub api_base: String,
}

const DEFAULT_API_BASE: &str = "https://ipinfo.io";

const EMPTY_CONFIG: &str = r#"### ipscope configuration file

### access token for the lookup API
# token = ""

### base URL of the lookup API
# api_base = "https://ipinfo.io"
"#;

impl Default for IpscopeConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl IpscopeConfig {
    /// Create and initialize a new configuration
    ///
    /// By default `$HOME/.ipscope/ipscope.toml` is used; a commented template
    /// is written on first run. Environment variables with the `IPSCOPE`
    /// prefix override file values, e.g. `IPSCOPE_TOKEN=... ipscope ip 1.1.1.1`.
    pub fn new(path: &Option<String>) -> Result<IpscopeConfig> {
        let mut builder = Config::builder();

        match path {
            Some(p) => {
                let path = Path::new(p.as_str());
                if path.exists() {
                    let path_str = path
                        .to_str()
                        .ok_or_else(|| anyhow!("Could not convert path to string"))?;
                    builder = builder.add_source(config::File::with_name(path_str));
                } else {
                    std::fs::write(p.as_str(), EMPTY_CONFIG)
                        .map_err(|e| anyhow!("Unable to create config file: {}", e))?;
                }
            }
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not find home directory"))?
                    .to_str()
                    .ok_or_else(|| anyhow!("Could not convert home directory path to string"))?
                    .to_owned();
                let ipscope_dir = format!("{}/.ipscope", home_dir.as_str());
                std::fs::create_dir_all(ipscope_dir.as_str())
                    .map_err(|e| anyhow!("Unable to create ipscope directory: {}", e))?;
                let p = format!("{}/ipscope.toml", ipscope_dir.as_str());
                if Path::new(p.as_str()).exists() {
                    builder = builder.add_source(config::File::with_name(p.as_str()));
                } else {
                    std::fs::write(p.as_str(), EMPTY_CONFIG).map_err(|e| {
                        anyhow!("Unable to create config file {}: {}", p.as_str(), e)
                    })?;
                }
            }
        }

        // Environment overrides with a prefix of IPSCOPE, e.g. IPSCOPE_TOKEN
        builder = builder.add_source(config::Environment::with_prefix("IPSCOPE"));

        let settings = builder
            .build()
            .map_err(|e| anyhow!("Failed to build configuration: {}", e))?;

        let config = settings
            .try_deserialize::<HashMap<String, String>>()
            .map_err(|e| anyhow!("Failed to deserialize configuration: {}", e))?;

        let token = config.get("token").filter(|t| !t.is_empty()).cloned();
        let api_base = config
            .get("api_base")
            .cloned()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(IpscopeConfig { token, api_base })
    }

    /// Get the default config file path
    pub fn config_file_path() -> String {
        let home_dir = dirs::home_dir()
            .map(|h| h.to_string_lossy().to_string())
            .unwrap_or_else(|| "~".to_string());
        format!("{}/.ipscope/ipscope.toml", home_dir)
    }
}
