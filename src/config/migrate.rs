use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;

/// Keys every config file must carry, with the default written when missing.
const REQUIRED_KEYS: &[(&str, &str)] = &[("database", ""), ("local_file", "")];

/// Fill missing fields in the YAML config with their defaults.
///
/// Older config files predate `local_file`; a plain
/// `serde_yaml` parse would reject them where no `#[serde(default)]` applies,
/// so `config --check` repairs the file in place. Returns the number of keys
/// added.
pub fn ensure_config_keys() -> AppResult<usize> {
    let conf_file = super::Config::config_file();

    if !conf_file.exists() {
        info("No configuration file found; nothing to check.");
        return Ok(0);
    }

    let content = fs::read_to_string(&conf_file)?;
    let mut yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", conf_file.display(), e)))?;

    let map = yaml
        .as_mapping_mut()
        .ok_or_else(|| AppError::Config("config file is not a YAML mapping".into()))?;

    let mut added = 0;
    for (key, default) in REQUIRED_KEYS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            let v = match *key {
                "database" => super::Config::database_file().to_string_lossy().to_string(),
                "local_file" => super::Config::local_store_file()
                    .to_string_lossy()
                    .to_string(),
                _ => default.to_string(),
            };
            map.insert(k, Value::String(v));
            added += 1;
        }
    }

    if added > 0 {
        let serialized =
            serde_yaml::to_string(&yaml).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(&conf_file, serialized)?;
        success(format!("Added {} missing config field(s).", added));
    } else {
        success("Configuration file is complete.");
    }

    Ok(added)
}
