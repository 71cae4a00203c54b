use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database used when an account is configured.
    pub database: String,
    /// JSON key-value file used in guest mode.
    pub local_file: String,
    /// Owner identifier; `None` means guest mode.
    #[serde(default)]
    pub account: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            local_file: Self::local_store_file().to_string_lossy().to_string(),
            account: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("evtrack")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".evtrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("evtrack.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("evtrack.sqlite")
    }

    /// Return the full path of the guest-mode JSON store
    pub fn local_store_file() -> PathBuf {
        Self::config_dir().join("local.json")
    }

    /// Data directory: the override when given, the platform default otherwise.
    pub fn dir_or_default(data_dir: Option<&str>) -> PathBuf {
        match data_dir {
            Some(d) => PathBuf::from(d),
            None => Self::config_dir(),
        }
    }

    fn defaults_in(dir: &Path) -> Self {
        Self {
            database: dir.join("evtrack.sqlite").to_string_lossy().to_string(),
            local_file: dir.join("local.json").to_string_lossy().to_string(),
            account: None,
        }
    }

    /// Load configuration rooted at an overridden data directory.
    pub fn load_from(data_dir: Option<&str>) -> AppResult<Self> {
        let dir = Self::dir_or_default(data_dir);
        let path = dir.join("evtrack.conf");

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Self::defaults_in(&dir))
        }
    }

    /// Initialize the configuration directory and files.
    ///
    /// Creates the config dir, writes the YAML config (unless running in
    /// test mode) and touches the database and guest-store files.
    pub fn init_all(
        custom_db: Option<String>,
        data_dir: Option<String>,
        is_test: bool,
    ) -> AppResult<()> {
        let dir = Self::dir_or_default(data_dir.as_deref());
        fs::create_dir_all(&dir)?;

        // DB path: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("evtrack.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::defaults_in(&dir)
        };

        if !is_test {
            let conf_path = dir.join("evtrack.conf");
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(&conf_path)?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", conf_path);
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
