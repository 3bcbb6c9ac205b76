//! Поиск артикулов в свободном тексте
//!
//! Четыре регулярных выражения применяются по очереди, все совпадения
//! собираются в один список и сводятся к набору уникальных строк
//! (порядок первого появления сохраняется, но вызывающий код
//! не должен на него полагаться).

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashSet;

lazy_static::lazy_static! {
    static ref ARTICLE_PATTERNS: Vec<Regex> = vec![
        // Коды вида A-123-45, DK-12, 12-33-44
        Regex::new(r"(?i)[A-ZА-ЯЁ0-9]+(?:[-_]\d{2,})+").unwrap(),
        // «арт. 7890», «арт7890»
        Regex::new(r"(?i)арт\.?\s*\d+").unwrap(),
        // Числа от 6 цифр
        Regex::new(r"\b\d{6,}\b").unwrap(),
        // Буквенно-цифровые токены от 5 символов
        Regex::new(r"(?i)[A-ZА-ЯЁ0-9]{5,}").unwrap(),
    ];
}

/// Найти артикулы в тексте
///
/// # Returns
/// * `Ok(Vec<String>)` - уникальные совпадения (пустой, если ничего не найдено)
/// * `Err(Error::Validation)` - текст пустой или состоит из пробелов
///
/// # Examples
/// ```
/// use hydro_find_common::extract_articles;
///
/// let found = extract_articles("Насос A-123-45, арт. 7890, 123456").unwrap();
/// assert!(found.contains(&"A-123-45".to_string()));
/// assert!(found.contains(&"арт. 7890".to_string()));
/// assert!(found.contains(&"123456".to_string()));
/// ```
pub fn extract_articles(text: &str) -> Result<Vec<String>> {
    if text.trim().is_empty() {
        return Err(Error::Validation("Введите текст".into()));
    }

    let all_matches = ARTICLE_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.find_iter(text).map(|m| m.as_str()));

    let mut seen = HashSet::new();
    Ok(all_matches
        .filter(|m| seen.insert(*m))
        .map(str::to_string)
        .collect())
}
