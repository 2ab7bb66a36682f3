use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::settings::GeneratorSettings;
use crate::error::SettingsError;

const APP_DIR: &str = "quantum_sentence_generator";

pub fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push("settings.json");
    path
}

/// A missing file is not an error: defaults apply.
pub fn load_settings_from(path: &Path) -> Result<GeneratorSettings, SettingsError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(GeneratorSettings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_settings() -> Result<GeneratorSettings, SettingsError> {
    load_settings_from(&settings_path())
}

pub fn save_settings_to(path: &Path, settings: &GeneratorSettings) -> Result<(), SettingsError> {
    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(settings).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(io_err)
}

pub fn save_settings(settings: &GeneratorSettings) -> Result<PathBuf, SettingsError> {
    let path = settings_path();
    save_settings_to(&path, settings)?;
    Ok(path)
}
