use crate::domain::{
    config::StabTermConfig,
    error::{StabTermError, StabTermResult},
};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration manager
///
/// Resolves a global config under the home directory and a project config
/// found by walking up from the current directory; the project config, when
/// present, takes precedence wholesale.
pub struct ConfigManager {
    global_config_path: PathBuf,
    project_config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Create new configuration manager
    pub fn new() -> StabTermResult<Self> {
        let global_config_path = Self::get_global_config_path()?;
        let project_config_path = Self::find_project_config_path();

        Ok(Self {
            global_config_path,
            project_config_path,
        })
    }

    /// Load configuration, preferring the project file over the global one.
    /// With neither present, all defaults apply.
    pub fn load_config(&self) -> StabTermResult<StabTermConfig> {
        if let Some(project_path) = &self.project_config_path {
            if project_path.exists() {
                return self.load_config_from_path(project_path);
            }
        }

        if self.global_config_path.exists() {
            return self.load_config_from_path(&self.global_config_path);
        }

        Ok(StabTermConfig::default())
    }

    /// Load configuration from specific path
    pub fn load_config_from_path(&self, path: &Path) -> StabTermResult<StabTermConfig> {
        let content = fs::read_to_string(path).map_err(|e| StabTermError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;

        toml::from_str(&content).map_err(|e| StabTermError::Config {
            message: format!("Failed to parse config file {}: {}", path.display(), e),
        })
    }

    /// Save configuration to specific path
    pub fn save_config_to_path(&self, path: &Path, config: &StabTermConfig) -> StabTermResult<()> {
        let content = toml::to_string_pretty(config).map_err(|e| StabTermError::Config {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(path, content).map_err(|e| StabTermError::Config {
            message: format!("Failed to write config file {}: {}", path.display(), e),
        })
    }

    /// Create a default project configuration under `path`, returning the
    /// path of the written file.
    pub fn init_project_config(&self, path: &Path) -> StabTermResult<PathBuf> {
        let config_dir = path.join(".stabterm");
        let config_file = config_dir.join("config.toml");

        if config_file.exists() {
            return Err(StabTermError::Config {
                message: "Project configuration already exists".to_string(),
            });
        }

        fs::create_dir_all(&config_dir).map_err(|e| StabTermError::Config {
            message: format!("Failed to create .stabterm directory: {}", e),
        })?;

        self.save_config_to_path(&config_file, &StabTermConfig::default())?;
        Ok(config_file)
    }

    /// Get the current project config path (if any)
    pub fn get_project_config_path(&self) -> Option<&PathBuf> {
        self.project_config_path.as_ref()
    }

    /// Get the global config path
    pub fn get_global_config_path_ref(&self) -> &PathBuf {
        &self.global_config_path
    }

    fn get_global_config_path() -> StabTermResult<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| StabTermError::Config {
            message: "Could not determine home directory".to_string(),
        })?;

        Ok(home.join(".config").join("stabterm").join("config.toml"))
    }

    /// Find project configuration path by walking up directory tree
    fn find_project_config_path() -> Option<PathBuf> {
        let current_dir = std::env::current_dir().ok()?;
        let mut path = current_dir.as_path();

        loop {
            let config_path = path.join(".stabterm").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }

            path = path.parent()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_manager_creation() {
        let _manager = ConfigManager::new().unwrap();
    }

    #[test]
    fn test_init_project_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::new().unwrap();

        let written = manager.init_project_config(temp_dir.path()).unwrap();
        assert!(written.exists());

        let config = manager.load_config_from_path(&written).unwrap();
        assert_eq!(config.link.baud, 115200);

        // A second init must refuse to clobber the existing file.
        assert!(manager.init_project_config(temp_dir.path()).is_err());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "not [ valid toml").unwrap();

        let manager = ConfigManager::new().unwrap();
        let result = manager.load_config_from_path(&path);
        assert!(matches!(result, Err(StabTermError::Config { .. })));
    }
}
