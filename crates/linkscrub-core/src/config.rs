use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/linkscrub/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrubConfig {
    /// Rewrite every URL found in a text. When false, only inputs that are
    /// in their entirety a single URL get rewritten.
    #[serde(default = "default_scan_whole_text")]
    pub scan_whole_text: bool,
    /// Resolve known shortener links to their final destination. Costs one
    /// blocking HTTP request per distinct unresolved link.
    #[serde(default)]
    pub resolve_shorteners: bool,
    /// Additional query-key prefixes to strip, on top of the built-in list.
    #[serde(default)]
    pub extra_strip_prefixes: Vec<String>,
}

fn default_scan_whole_text() -> bool {
    true
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            scan_whole_text: true,
            resolve_shorteners: false,
            extra_strip_prefixes: Vec::new(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkscrub")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScrubConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScrubConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ScrubConfig = toml::from_str(&data)?;
    Ok(cfg)
}
