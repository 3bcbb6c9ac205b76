//! Контроллер экрана поиска
//!
//! Состояние экрана (ввод, признак занятости, строка статуса, карточки)
//! хранится в явных полях. `search` берёт `&mut self`, поэтому у одного
//! контроллера не бывает двух запросов одновременно.

use super::client::BackendClient;
use super::render::{render_response, SearchView};
use crate::error::{HydroFindError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{error, info, warn};

pub const EMPTY_QUERY_MESSAGE: &str = "Пожалуйста, введите запрос для поиска";
pub const FETCH_FAILED_STATUS: &str = "Ошибка при получении данных.";

pub struct SearchController {
    client: BackendClient,
    input: String,
    busy: bool,
    status: Option<String>,
    view: Option<SearchView>,
    show_progress: bool,
}

impl SearchController {
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            input: String::new(),
            busy: false,
            status: None,
            view: None,
            show_progress: true,
        }
    }

    /// Без спиннера (тесты, неинтерактивный вывод)
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn view(&self) -> Option<&SearchView> {
        self.view.as_ref()
    }

    fn spinner(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message("Обработка запроса...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Выполнить поиск по текущему вводу
    ///
    /// Пустой ввод — ошибка валидации до каких-либо побочных эффектов.
    /// Ошибка сети или бэкенда выставляет строку статуса и возвращается.
    pub async fn search(&mut self) -> Result<&SearchView> {
        let query = self.input.trim().to_string();
        if query.is_empty() {
            warn!("{}", EMPTY_QUERY_MESSAGE);
            return Err(HydroFindError::Validation(EMPTY_QUERY_MESSAGE.into()));
        }

        self.busy = true;
        self.status = None;
        let spinner = self.spinner();

        let outcome = self.client.send(&query).await;

        spinner.finish_and_clear();
        self.busy = false;

        match outcome {
            Ok(payload) => {
                let view = render_response(&payload);
                info!(cards = view.cards().len(), "результаты получены");
                Ok(self.view.insert(view))
            }
            Err(e) => {
                error!("Ошибка: {}", e);
                self.status = Some(FETCH_FAILED_STATUS.into());
                Err(e)
            }
        }
    }
}
