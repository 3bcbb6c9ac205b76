//! Получение текста запроса: аргумент, файл или редактор

use crate::error::{HydroFindError, Result};
use crate::session::{CharCountLevel, CHAR_LIMIT};
use colored::*;
use dialoguer::{Confirm, Editor};
use std::path::Path;

/// Текст запроса из аргумента, файла или `$EDITOR`
///
/// Пустой текст не считается ошибкой здесь: проверку делает
/// вызывающая операция.
pub fn read_query(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return Ok(std::fs::read_to_string(path)?);
    }

    let edited = Editor::new()
        .edit("")
        .map_err(|e| HydroFindError::Io(std::io::Error::other(e.to_string())))?;
    Ok(edited.unwrap_or_default())
}

/// Спросить, продолжать ли
pub fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| HydroFindError::Io(std::io::Error::other(e.to_string())))
}

/// Строка счётчика символов, окрашенная по уровню
pub fn char_count_line(count: usize) -> String {
    let line = format!("Символов: {}/{}", count, CHAR_LIMIT);
    match CharCountLevel::for_count(count) {
        CharCountLevel::Normal => line.dimmed().to_string(),
        CharCountLevel::Warning => line.yellow().to_string(),
        CharCountLevel::OverLimit => line.red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_query_prefers_text() {
        let text = read_query(Some("DK-12".into()), None).unwrap();
        assert_eq!(text, "DK-12");
    }

    #[test]
    fn test_read_query_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("query.txt");
        std::fs::write(&path, "Фитинг арт. 7890").unwrap();
        let text = read_query(None, Some(&path)).unwrap();
        assert_eq!(text, "Фитинг арт. 7890");
    }

    #[test]
    fn test_read_query_missing_file() {
        let result = read_query(None, Some(Path::new("/nonexistent/query.txt")));
        assert!(matches!(result, Err(HydroFindError::Io(_))));
    }

    #[test]
    fn test_char_count_line() {
        colored::control::set_override(false);
        assert_eq!(char_count_line(12), "Символов: 12/1000");
    }
}
