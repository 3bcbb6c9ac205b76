//! Типы ошибок общей библиотеки

use thiserror::Error;

/// Общий тип ошибки
///
/// Библиотека не читает файлов и не разбирает JSON сама, поэтому
/// вариантов ровно два.
#[derive(Error, Debug)]
pub enum Error {
    /// Пустой или некорректный ввод (операция прерывается до побочных эффектов)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Нет данных для экспорта или сбой сборки Excel
    #[error("Export error: {0}")]
    Export(String),
}

/// Псевдоним Result
pub type Result<T> = std::result::Result<T, Error>;
