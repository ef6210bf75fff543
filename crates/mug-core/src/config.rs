use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default lookup endpoint; `{query}` is replaced by the encoded name.
pub const DEFAULT_LOOKUP_URL: &str =
    "http://www.csc.kth.se/hacks/new/xfinger/results.php?freetext={query}";

/// Default base URL that relative `<img src>` values are resolved against.
pub const DEFAULT_IMAGE_BASE_URL: &str = "http://www.csc.kth.se/hacks/new/xfinger/";

/// Global configuration loaded from `~/.config/mug/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MugConfig {
    /// Lookup endpoint template. Must contain `{query}`.
    pub lookup_url: String,
    /// Base URL for image `src` attributes found in lookup results.
    pub image_base_url: String,
    /// Extension (without dot) used for saved images.
    pub extension: String,
    /// Connect timeout for every HTTP request, in seconds.
    pub connect_timeout_secs: u64,
    /// Overall timeout for every HTTP request, in seconds.
    pub timeout_secs: u64,
    /// Maximum tasks in flight per phase (None = one task per name).
    #[serde(default)]
    pub max_in_flight: Option<usize>,
    /// Optional User-Agent header sent with every request.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for MugConfig {
    fn default() -> Self {
        Self {
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            extension: "png".to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 60,
            max_in_flight: None,
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mug")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MugConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MugConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MugConfig =
        toml::from_str(&data).with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
