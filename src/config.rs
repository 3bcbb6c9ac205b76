use crate::error::{HydroFindError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/api/process-query";
pub const DEFAULT_FILE_PREFIX: &str = "гидравлика";
pub const BACKEND_URL_ENV: &str = "HYDRO_FIND_BACKEND_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend_url: String,
    pub file_prefix: String,
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.into(),
            file_prefix: DEFAULT_FILE_PREFIX.into(),
            output_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| HydroFindError::Config("Домашний каталог не найден".into()))?;
        Ok(home.join(".config").join("hydro-find").join("config.json"))
    }

    /// Адрес бэкенда (переменная окружения приоритетнее файла)
    pub fn backend_url(&self) -> String {
        match std::env::var(BACKEND_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.backend_url.clone(),
        }
    }

    pub fn set_backend_url(&mut self, url: String) -> Result<()> {
        if url.trim().is_empty() {
            return Err(HydroFindError::Config("Адрес бэкенда не может быть пустым".into()));
        }
        self.backend_url = url;
        self.save()
    }

    pub fn set_file_prefix(&mut self, prefix: String) -> Result<()> {
        if prefix.trim().is_empty() {
            return Err(HydroFindError::Config("Префикс файла не может быть пустым".into()));
        }
        self.file_prefix = prefix;
        self.save()
    }
}
