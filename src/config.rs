// Host configuration
//
// Optional rc file at ~/.tosh/rc with one key=value per line. Unknown
// keys and malformed lines are skipped; a missing file means defaults.
//
// Recognized keys:
//   banner=on|off   show the startup banner (default on)
//   seed=on|off     boot with the demo tasks (default on)
//   color=on|off    ANSI colors in the renderer (default on)
//   prompt=<text>   prompt label (default "guest@tosh:~$")

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_PROMPT: &str = "guest@tosh:~$";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub banner: bool,
    pub seed: bool,
    pub color: bool,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banner: true,
            seed: true,
            color: true,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Path of the rc file, `~/.tosh/rc`
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".tosh").join("rc"))
    }

    /// Load the user's config, falling back to defaults when the file is
    /// absent
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config = Self::default();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "banner" => config.banner = parse_switch(value, config.banner),
                "seed" => config.seed = parse_switch(value, config.seed),
                "color" => config.color = parse_switch(value, config.color),
                "prompt" => {
                    if !value.is_empty() {
                        config.prompt = value.to_string();
                    }
                }
                _ => {}
            }
        }
        Ok(config)
    }
}

fn parse_switch(value: &str, default: bool) -> bool {
    match value {
        "on" | "true" | "1" => true,
        "off" | "false" | "0" => false,
        _ => default,
    }
}
