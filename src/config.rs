use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Shortest tick the sampler will run at, whatever the config says.
pub const MIN_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Pause between the end of one sample and the start of the next, in milliseconds
    pub update_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Chrome theme: default, nord, gruvbox
    pub theme: String,
    /// Show the per-volume read/write/busy line
    pub show_io: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace)
    pub level: String,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { update_interval_ms: 500 }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { theme: "default".into(), show_io: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".into() }
    }
}

impl GeneralConfig {
    pub fn interval_ms(&self) -> u64 {
        self.update_interval_ms.max(MIN_INTERVAL_MS)
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    /// Load the user config, falling back to defaults. Runs before logging is
    /// set up, so a problem with an existing file comes back as a message for
    /// the caller to log once the logger exists.
    pub fn load() -> (Self, Option<String>) {
        match Config::config_path() {
            Some(path) => load_or_default(&path),
            None       => (Config::default(), None),
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("resmon").join("resmon.toml"))
    }
}

pub fn load_or_default(path: &Path) -> (Config, Option<String>) {
    if !path.exists() {
        // First run; writing the template is best-effort
        let _ = write_defaults(path);
        return (Config::default(), None);
    }
    match load_from(path) {
        Ok(c)  => (c, None),
        Err(e) => {
            let note = format!("ignoring unreadable config {}: {}", path.display(), e);
            (Config::default(), Some(note))
        }
    }
}

pub fn load_from(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&text)?;
    Ok(cfg)
}

pub fn write_defaults(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# resmon configuration\n# Generated on first run, edit freely\n\n{}", text))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_round_trip_through_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("resmon.toml");
        write_defaults(&path).unwrap();
        assert_eq!(load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resmon.toml");
        fs::write(&path, "[general]\nupdate_interval_ms = 2000\n\n[display]\ntheme = \"nord\"\n").unwrap();

        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg.general.update_interval_ms, 2000);
        assert_eq!(cfg.display.theme, "nord");
        assert!(cfg.display.show_io);
        assert_eq!(cfg.logging.level, "warn");
    }

    #[test]
    fn test_interval_floor() {
        let g = GeneralConfig { update_interval_ms: 5 };
        assert_eq!(g.interval_ms(), MIN_INTERVAL_MS);
        assert_eq!(GeneralConfig::default().interval_ms(), 500);
    }

    #[test]
    fn test_garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resmon.toml");
        fs::write(&path, "general = [[[").unwrap();
        assert!(load_from(&path).is_err());
    }

    #[test]
    fn test_first_run_writes_defaults_quietly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resmon").join("resmon.toml");
        let (cfg, note) = load_or_default(&path);
        assert_eq!(cfg, Config::default());
        assert!(note.is_none());
        assert!(path.is_file());
    }

    #[test]
    fn test_broken_file_falls_back_with_a_note() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resmon.toml");
        fs::write(&path, "[general]\nupdate_interval_ms = \"fast\"\n").unwrap();

        let (cfg, note) = load_or_default(&path);
        assert_eq!(cfg, Config::default());
        assert!(note.unwrap().contains("resmon.toml"));
        // The broken file is left alone
        assert!(fs::read_to_string(&path).unwrap().contains("fast"));
    }
}
