//! # Library Manager Module
//!
//! ## Purpose
//! Keeps the location of the pure-species property table (and the log level of the
//! binary) in one persisted place, so that no calculator carries a file path literal.
//!
//! ## Architecture
//! - **TableConfig**: serializable configuration structure
//! - **TableManager**: loads/saves the configuration and opens the species table
//! - **Global Access**: `OnceLock<Mutex<..>>` singleton with closure helpers
//! - **Configuration File**: `eqconst_config.json` in the working directory
//!
//! ## Configuration Format
//! ```json
//! {
//!   "species_table": "DataPure.csv",
//!   "log_level": "info"
//! }
//! ```
//!
//! ## Usage Patterns
//! ```rust, ignore
//! use EqConst::library_manager::with_table_manager;
//!
//! let table = with_table_manager(|manager| manager.load_species_table())?;
//! ```

use crate::Thermodynamics::DBhandlers::species_table::SpeciesTable;
use crate::Thermodynamics::DBhandlers::table_sources::create_source_by_path;
use crate::Thermodynamics::thermo_errors::EquilibriumError;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Configuration of the species table location and logging.
///
/// # Fields
/// * `species_table` - CSV (or `.json`) file with the pure-species properties
/// * `log_level` - one of `off`, `error`, `warn`, `info`, `debug`, `trace`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub species_table: String,
    pub log_level: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            species_table: "DataPure.csv".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Owner of the current configuration and of the path it is persisted to.
#[derive(Debug, Clone)]
pub struct TableManager {
    config: TableConfig,
    config_file: String,
}

impl TableManager {
    /// Loads `eqconst_config.json` from the working directory, falling back to defaults
    /// when the file is absent or unreadable.
    pub fn new() -> Self {
        Self::with_config_file("eqconst_config.json")
    }

    /// Same as `new` with a non-standard configuration file location.
    pub fn with_config_file(config_file: &str) -> Self {
        let config = Self::load_config(config_file).unwrap_or_default();
        Self {
            config,
            config_file: config_file.to_string(),
        }
    }

    fn load_config(config_file: &str) -> Result<TableConfig, Box<dyn std::error::Error>> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let config: TableConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(TableConfig::default())
        }
    }

    /// Writes the configuration as pretty JSON. Does nothing under `cfg(test)`.
    pub fn save_config(&self) -> Result<(), Box<dyn std::error::Error>> {
        #[cfg(test)]
        {
            return Ok(());
        }

        #[cfg(not(test))]
        {
            let content = serde_json::to_string_pretty(&self.config)?;
            fs::write(&self.config_file, content)?;
            Ok(())
        }
    }

    pub fn species_table_path(&self) -> &str {
        &self.config.species_table
    }

    /// Points the manager at another species table; the file must exist.
    pub fn set_species_table(&mut self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if Path::new(path).exists() {
            self.config.species_table = path.to_string();
            self.save_config()?;
            Ok(())
        } else {
            Err(format!("File does not exist: {}", path).into())
        }
    }

    /// Parsed log level; unknown strings fall back to `Info`.
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(&self.config.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn set_log_level(&mut self, level: &str) -> Result<(), Box<dyn std::error::Error>> {
        LevelFilter::from_str(level).map_err(|_| format!("Unknown log level: {}", level))?;
        self.config.log_level = level.to_lowercase();
        self.save_config()?;
        Ok(())
    }

    pub fn get_config(&self) -> &TableConfig {
        &self.config
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.config = TableConfig::default();
        self.save_config()?;
        Ok(())
    }

    /// Reads the configured table; the reader is chosen by file extension.
    pub fn load_species_table(&self) -> Result<SpeciesTable, EquilibriumError> {
        let source = create_source_by_path(&self.config.species_table);
        SpeciesTable::load(&source)
    }
}

impl Default for TableManager {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_TABLE_MANAGER: OnceLock<Mutex<TableManager>> = OnceLock::new();

/// Guard over the process-wide manager. A poisoned lock is recovered: the manager only
/// holds paths, so a panic elsewhere cannot leave it half-updated.
pub fn get_table_manager() -> MutexGuard<'static, TableManager> {
    GLOBAL_TABLE_MANAGER
        .get_or_init(|| Mutex::new(TableManager::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Executes a closure with read-only access to the global manager.
pub fn with_table_manager<F, R>(f: F) -> R
where
    F: FnOnce(&TableManager) -> R,
{
    let manager = get_table_manager();
    f(&manager)
}

/// Executes a closure with mutable access to the global manager.
pub fn with_table_manager_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut TableManager) -> R,
{
    let mut manager = get_table_manager();
    f(&mut manager)
}
