//! HTTP-клиент бэкенда поиска
//!
//! Один POST `{"message": <запрос>}` на настроенный адрес.
//! Без повторов, таймаута и отмены.

use crate::error::{HydroFindError, Result};
use serde::Serialize;
use tracing::{debug, error};

#[derive(Serialize)]
struct SearchRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    url: String,
}

impl BackendClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Отправить запрос и вернуть JSON ответа как есть
    ///
    /// Статус вне 2xx считается ошибкой запроса.
    pub async fn send(&self, query: &str) -> Result<serde_json::Value> {
        debug!(url = %self.url, query_len = query.chars().count(), "отправка запроса");

        let response = self
            .http
            .post(&self.url)
            .json(&SearchRequest { message: query })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            error!(%status, "бэкенд вернул ошибку");
            return Err(HydroFindError::Network(format!(
                "Ошибка бэкенда: {}",
                status.as_u16()
            )));
        }

        let payload: serde_json::Value = response.json().await?;
        debug!("ответ бэкенда: {}", payload);
        Ok(payload)
    }
}
