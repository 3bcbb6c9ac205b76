//! Типы результатов поиска
//!
//! Общие для CLI и экспорта:
//! - ComponentMatch: одна найденная позиция каталога
//! - SearchResult: ответ бэкенда по одному запросу (на вход экспортёру)

use serde::{Deserialize, Deserializer, Serialize};

/// `null` и отсутствующее поле читаются одинаково: как значение по умолчанию
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Найденный компонент
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentMatch {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub article: String,
}

impl ComponentMatch {
    pub fn new(name: impl Into<String>, article: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            article: article.into(),
        }
    }
}

/// Результат поиска по одному запросу
///
/// Все поля необязательны: `null`, пустые строки и нулевое количество
/// трактуются при выгрузке как отсутствующие.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_query: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<ComponentMatch>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: f64,
}

impl SearchResult {
    /// Количество для выгрузки (0 означает «не указано» → 1)
    pub fn effective_quantity(&self) -> f64 {
        if self.quantity == 0.0 || !self.quantity.is_finite() {
            1.0
        } else {
            self.quantity
        }
    }

    pub fn is_found(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Сумма найденных позиций по всем результатам
pub fn total_matches(results: &[SearchResult]) -> usize {
    results.iter().map(|r| r.matches.len()).sum()
}
