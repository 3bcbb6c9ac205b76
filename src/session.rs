//! Состояние экрана поиска артикулов
//!
//! Текст ввода, найденные артикулы и флаги экрана как обычные поля.

use crate::error::{HydroFindError, Result};
use hydro_find_common::extract_articles;
use tracing::{debug, warn};

pub const CHAR_WARNING_THRESHOLD: usize = 800;
pub const CHAR_LIMIT: usize = 1000;

/// Уровень счётчика символов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharCountLevel {
    Normal,
    Warning,
    OverLimit,
}

impl CharCountLevel {
    pub fn for_count(count: usize) -> Self {
        if count > CHAR_LIMIT {
            CharCountLevel::OverLimit
        } else if count > CHAR_WARNING_THRESHOLD {
            CharCountLevel::Warning
        } else {
            CharCountLevel::Normal
        }
    }
}

#[derive(Debug, Default)]
pub struct ArticleSession {
    pub input_text: String,
    pub found_articles: Vec<String>,
    pub search_performed: bool,
    pub is_expanded: bool,
}

impl ArticleSession {
    pub fn new(input_text: impl Into<String>) -> Self {
        Self {
            input_text: input_text.into(),
            ..Default::default()
        }
    }

    /// Найти артикулы во введённом тексте
    ///
    /// При пустом вводе состояние не меняется.
    pub fn find_articles(&mut self) -> Result<&[String]> {
        self.run_extraction()?;
        Ok(&self.found_articles)
    }

    /// Найти артикулы, запрашивая текст заново после каждой ошибки валидации
    ///
    /// `reenter` получает ошибку (для показа пользователю) и возвращает новый
    /// текст. Остальные ошибки, включая ошибки самого `reenter`, возвращаются.
    pub fn find_articles_retrying<F>(&mut self, mut reenter: F) -> Result<&[String]>
    where
        F: FnMut(&HydroFindError) -> Result<String>,
    {
        loop {
            match self.run_extraction() {
                Ok(()) => return Ok(&self.found_articles),
                Err(e @ HydroFindError::Validation(_)) => self.input_text = reenter(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn run_extraction(&mut self) -> Result<()> {
        let found = extract_articles(&self.input_text).map_err(|e| {
            warn!("{}", e);
            e
        })?;

        self.search_performed = true;
        self.found_articles = found;

        if self.found_articles.is_empty() {
            debug!("Артикулы не найдены");
        }
        Ok(())
    }

    pub fn clear_input(&mut self) {
        self.input_text.clear();
        self.found_articles.clear();
        self.search_performed = false;
    }

    pub fn toggle_instructions(&mut self) {
        self.is_expanded = !self.is_expanded;
    }

    pub fn char_count(&self) -> usize {
        self.input_text.chars().count()
    }

    pub fn char_count_level(&self) -> CharCountLevel {
        CharCountLevel::for_count(self.char_count())
    }
}
