use thiserror::Error;

#[derive(Error, Debug)]
pub enum HydroFindError {
    #[error("Ошибка конфигурации: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("Ошибка сети: {0}")]
    Network(String),

    #[error("Не удалось сгенерировать Excel файл: {0}")]
    Export(String),

    #[error("Ошибка разбора JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),
}

impl From<hydro_find_common::Error> for HydroFindError {
    fn from(err: hydro_find_common::Error) -> Self {
        use hydro_find_common::Error as Common;
        match err {
            Common::Validation(msg) => HydroFindError::Validation(msg),
            Common::Export(msg) => HydroFindError::Export(msg),
        }
    }
}

impl From<reqwest::Error> for HydroFindError {
    fn from(err: reqwest::Error) -> Self {
        HydroFindError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HydroFindError>;
