//! Карточки результатов поиска
//!
//! Ответ бэкенда разбирается нестрого: всё, что не похоже на
//! `{ results: [...] }`, превращается в карточку «результаты не найдены».

use colored::*;
use serde_json::Value;
use std::fmt;

pub const DEFAULT_TYPE: &str = "component";
pub const NO_ARTICLE: &str = "—";
pub const NO_DESCRIPTION: &str = "Информация отсутствует";
pub const NO_RESULTS_BADGE: &str = "РЕЗУЛЬТАТЫ НЕ НАЙДЕНЫ";
pub const MALFORMED_RESPONSE: &str = "Бэкенд вернул некорректные данные.";
pub const EMPTY_RESPONSE: &str = "По вашему запросу не найдено подходящих артикулов.";

/// Карточка одного результата
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
    /// Тип в верхнем регистре
    pub badge: String,
    pub article: String,
    pub description: String,
}

/// Что показать пользователю
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView {
    Cards {
        /// Тексты всех результатов через пустую строку
        articles_text: Option<String>,
        cards: Vec<ResultCard>,
    },
    NoResults {
        message: String,
    },
}

impl SearchView {
    pub fn no_results(message: &str) -> Self {
        SearchView::NoResults {
            message: message.to_string(),
        }
    }

    pub fn cards(&self) -> &[ResultCard] {
        match self {
            SearchView::Cards { cards, .. } => cards,
            SearchView::NoResults { .. } => &[],
        }
    }
}

fn non_empty_str<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn to_card(item: &Value) -> ResultCard {
    ResultCard {
        badge: non_empty_str(item, "type").unwrap_or(DEFAULT_TYPE).to_uppercase(),
        article: non_empty_str(item, "text").unwrap_or(NO_ARTICLE).to_string(),
        description: non_empty_str(item, "description")
            .unwrap_or(NO_DESCRIPTION)
            .to_string(),
    }
}

/// Ответ бэкенда → карточки
pub fn render_response(data: &Value) -> SearchView {
    let Some(items) = data.get("results").and_then(Value::as_array) else {
        return SearchView::no_results(MALFORMED_RESPONSE);
    };

    if items.is_empty() {
        return SearchView::no_results(EMPTY_RESPONSE);
    }

    let texts: Vec<&str> = items.iter().filter_map(|item| non_empty_str(item, "text")).collect();
    let articles_text = if texts.is_empty() {
        None
    } else {
        Some(texts.join("\n\n"))
    };

    SearchView::Cards {
        articles_text,
        cards: items.iter().map(to_card).collect(),
    }
}

impl fmt::Display for ResultCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", format!(" {} ", self.badge).on_blue().white().bold())?;
        writeln!(f, "  {} {}", "Артикул:".bold(), self.article)?;
        write!(f, "  {} {}", "Описание:".bold(), self.description)
    }
}

impl fmt::Display for SearchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchView::Cards { articles_text, cards } => {
                if let Some(text) = articles_text {
                    writeln!(f, "{}", "Найденные артикулы:".bold())?;
                    writeln!(f, "{}\n", text)?;
                }
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    writeln!(f, "{}", card)?;
                }
                Ok(())
            }
            SearchView::NoResults { message } => {
                writeln!(f, "{}", format!(" {} ", NO_RESULTS_BADGE).on_yellow().black().bold())?;
                writeln!(f, "  {}", message)
            }
        }
    }
}
