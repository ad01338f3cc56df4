use anyhow::{Context, Result};
use directories::ProjectDirs;
use gitfinder_core::ports::ScanPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::CliArgs;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub roots: Vec<PathBuf>,
    #[serde(default)]
    pub scan: ScanPolicy,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Show each repository's path next to its name
    pub show_paths: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            roots: vec![dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))],
            scan: ScanPolicy::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { show_paths: true }
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "gitfinder")
        .context("Failed to determine project directories")?;

    let config_dir = proj_dirs.config_dir();
    Ok(config_dir.join("config.toml"))
}

impl Config {
    /// Load the configuration file, falling back to defaults when it does not
    /// exist. Nothing is written.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn from_cli_and_file(cli_args: &CliArgs) -> Result<Self> {
        let mut config = Self::load(cli_args.config.clone())?;

        // CLI args override config file
        if !cli_args.roots.is_empty() {
            config.roots = cli_args.roots.clone();
        }
        config.scan.ignore.extend(cli_args.ignore.iter().cloned());
        if cli_args.follow_links {
            config.scan.follow_links = true;
        }
        if cli_args.max_depth.is_some() {
            config.scan.max_depth = cli_args.max_depth;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.roots.len(), 1);
        assert!(config.ui.show_paths);
        assert!(config.scan.ignore.contains("node_modules"));
        assert!(!config.scan.follow_links);
    }

    #[test]
    fn test_config_serialization_roundtrip() -> Result<()> {
        let mut config = Config::default();
        config.roots = vec![PathBuf::from("/test/path"), PathBuf::from("/work")];
        config.scan.ignore.insert("vendor".to_string());
        config.scan.max_depth = Some(4);
        config.ui.show_paths = false;

        let toml_str = toml::to_string(&config)?;
        let parsed_config: Config = toml::from_str(&toml_str)?;

        assert_eq!(config, parsed_config);
        Ok(())
    }

    #[test]
    fn test_partial_file_uses_defaults() -> Result<()> {
        let config: Config = toml::from_str("version = 1\nroots = [\"/src\"]\n")?;
        assert_eq!(config.roots, vec![PathBuf::from("/src")]);
        assert_eq!(config.scan, ScanPolicy::default());
        assert!(config.ui.show_paths);

        let config: Config = toml::from_str("version = 1\n[scan]\nfollow_links = true\n")?;
        assert!(config.scan.follow_links);
        assert!(config.scan.ignore.contains("node_modules"));
        Ok(())
    }

    #[test]
    fn test_config_load_nonexistent_uses_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load(Some(config_path.clone()))?;

        assert_eq!(config, Config::default());
        assert!(!config_path.exists(), "loading must not create the file");
        Ok(())
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested/dir/test.toml");

        let mut config = Config::default();
        config.roots = vec![PathBuf::from("/custom/path")];
        config.ui.show_paths = false;

        config.save(&config_path)?;
        let loaded_config = Config::load(Some(config_path))?;

        assert_eq!(config, loaded_config);
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "version = \"one\"")?;

        let err = Config::load(Some(config_path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        Ok(())
    }

    #[test]
    fn test_cli_override() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("test.toml");

        let original_config = Config {
            roots: vec![PathBuf::from("/original/path")],
            ..Config::default()
        };
        original_config.save(&config_path)?;

        let cli_args = CliArgs::parse_from([
            "gf",
            "/override/path",
            "--config",
            config_path.to_str().unwrap(),
            "--ignore",
            "vendor",
            "--follow-links",
            "--max-depth",
            "3",
        ]);

        let final_config = Config::from_cli_and_file(&cli_args)?;
        assert_eq!(final_config.roots, vec![PathBuf::from("/override/path")]);
        assert!(final_config.scan.ignore.contains("vendor"));
        assert!(final_config.scan.ignore.contains("node_modules"));
        assert!(final_config.scan.follow_links);
        assert_eq!(final_config.scan.max_depth, Some(3));
        Ok(())
    }

    #[test]
    fn test_cli_without_roots_keeps_configured_roots() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("test.toml");
        let original_config = Config {
            roots: vec![PathBuf::from("/a"), PathBuf::from("/b")],
            ..Config::default()
        };
        original_config.save(&config_path)?;

        let cli_args = CliArgs::parse_from(["gf", "--config", config_path.to_str().unwrap()]);
        let final_config = Config::from_cli_and_file(&cli_args)?;
        assert_eq!(final_config.roots, original_config.roots);
        Ok(())
    }

    #[test]
    fn test_get_default_config_path() -> Result<()> {
        let path = get_default_config_path()?;
        assert!(path.ends_with("config.toml"));
        Ok(())
    }
}
