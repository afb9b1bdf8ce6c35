use crate::error::{DropletError, Result};
use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for droplet, stored in the user config dir as config.json.
///
/// Everything is optional; a missing file means defaults. Loaded once at
/// startup and passed around by reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DropletConfig {
    /// Directory where shortcut files are written when `--file` is not
    /// given. Falls back to the directory of the droplet binary.
    #[serde(default)]
    pub launcher_dir: Option<PathBuf>,

    /// Private key used for `key` authentication. Falls back to
    /// `~/.ssh/id_rsa`.
    #[serde(default)]
    pub key_file: Option<PathBuf>,
}

impl DropletConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DropletError::Io)?;
        let config: DropletConfig =
            serde_json::from_str(&content).map_err(DropletError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DropletError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DropletError::Serialization)?;
        fs::write(config_path, content).map_err(DropletError::Io)?;
        Ok(())
    }

    /// Load from the platform config dir (e.g. `~/.config/droplet/`).
    pub fn load_default() -> Result<Self> {
        match Self::config_dir() {
            Some(dir) => Self::load(dir),
            None => Ok(Self::default()),
        }
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "droplet", "droplet").map(|p| p.config_dir().to_path_buf())
    }

    /// The private key to use for `key` auth.
    pub fn key_file_or_default(&self) -> Result<PathBuf> {
        if let Some(path) = &self.key_file {
            return Ok(path.clone());
        }
        let base = BaseDirs::new()
            .ok_or_else(|| DropletError::Config("could not determine home directory".to_string()))?;
        Ok(base.home_dir().join(".ssh").join("id_rsa"))
    }

    /// The launcher output directory, given the running binary's path.
    pub fn launcher_dir_or_default(&self, exe: &Path) -> PathBuf {
        if let Some(dir) = &self.launcher_dir {
            return dir.clone();
        }
        exe.parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DropletConfig::default();
        assert_eq!(config.launcher_dir, None);
        assert_eq!(config.key_file, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = DropletConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, DropletConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let config = DropletConfig {
            launcher_dir: Some(PathBuf::from("/launchers")),
            key_file: Some(PathBuf::from("/keys/id_ed25519")),
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = DropletConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{not json").unwrap();

        let err = DropletConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, DropletError::Serialization(_)));
    }

    #[test]
    fn test_launcher_dir_falls_back_to_exe_dir() {
        let config = DropletConfig::default();
        let dir = config.launcher_dir_or_default(Path::new("/opt/droplet/droplet"));
        assert_eq!(dir, PathBuf::from("/opt/droplet"));
    }

    #[test]
    fn test_launcher_dir_override_wins() {
        let config = DropletConfig {
            launcher_dir: Some(PathBuf::from("/launchers")),
            key_file: None,
        };
        let dir = config.launcher_dir_or_default(Path::new("/opt/droplet/droplet"));
        assert_eq!(dir, PathBuf::from("/launchers"));
    }
}
