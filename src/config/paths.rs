//! Path management for the budget tracker
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_TRACKER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/budget-tracker` or `~/.config/budget-tracker`
//! 3. Windows: `%APPDATA%\budget-tracker`

use std::path::PathBuf;

use crate::error::BudgetError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BUDGET_TRACKER_DATA_DIR";

/// Manages all paths used by the budget tracker
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the budget state
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Budget ceiling, committed expenses and view state
    pub fn state_file(&self) -> PathBuf {
        self.data_dir().join("budget.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the tracker has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                BudgetError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("budget-tracker"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budget-tracker"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.state_file(),
            temp_dir.path().join("data").join("budget.json")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = BudgetPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().exists());
    }
}
