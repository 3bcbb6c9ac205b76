//! Таблица результатов для выгрузки
//!
//! Строки: заголовок, по строке на каждый найденный компонент
//! (или одна строка-заглушка, если по запросу ничего не найдено),
//! затем две итоговые строки. Тип строки хранится явно, поэтому
//! оформление не зависит ни от смещений, ни от текста заглушки.

use crate::error::{Error, Result};
use crate::types::{total_matches, SearchResult};

pub const HEADERS: [&str; 4] = ["Запрос", "Наименование", "Артикул", "Количество"];
pub const COLUMN_COUNT: usize = HEADERS.len();

pub const NOT_FOUND_TEXT: &str = "Компонент не найден";
pub const NO_NAME_TEXT: &str = "Не указано";
pub const NO_ARTICLE_TEXT: &str = "Не указан";
pub const SUMMARY_LABEL: &str = "ИТОГО:";

/// Число итоговых строк в конце таблицы
pub const SUMMARY_ROWS: usize = 2;

/// Значение ячейки
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// Назначение строки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header,
    Found,
    NotFound,
    SummaryLabel,
    SummaryTotals,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub kind: RowKind,
    pub cells: Vec<CellValue>,
}

impl GridRow {
    fn new(kind: RowKind, cells: [CellValue; COLUMN_COUNT]) -> Self {
        Self { kind, cells: cells.into() }
    }
}

/// Таблица результатов
#[derive(Debug, Clone, PartialEq)]
pub struct ResultGrid {
    rows: Vec<GridRow>,
}

impl ResultGrid {
    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary_label_row(&self) -> usize {
        self.rows.len() - 2
    }

    pub fn summary_totals_row(&self) -> usize {
        self.rows.len() - 1
    }
}

fn text_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// Собрать таблицу из результатов поиска
///
/// # Returns
/// * `Err(Error::Export)` - список результатов пуст
pub fn build_grid(results: &[SearchResult]) -> Result<ResultGrid> {
    if results.is_empty() {
        return Err(Error::Export("Нет данных для экспорта".into()));
    }

    let mut rows = Vec::with_capacity(results.len() + 1 + SUMMARY_ROWS);
    rows.push(GridRow::new(RowKind::Header, HEADERS.map(CellValue::from)));

    let mut total_quantity = 0.0_f64;
    let mut not_found = 0usize;

    for result in results {
        let quantity = result.effective_quantity();

        if result.is_found() {
            for m in &result.matches {
                rows.push(GridRow::new(
                    RowKind::Found,
                    [
                        result.original_query.as_str().into(),
                        text_or(&m.name, NO_NAME_TEXT).into(),
                        text_or(&m.article, NO_ARTICLE_TEXT).into(),
                        quantity.into(),
                    ],
                ));
                total_quantity += quantity;
            }
        } else {
            rows.push(GridRow::new(
                RowKind::NotFound,
                [
                    result.original_query.as_str().into(),
                    NOT_FOUND_TEXT.into(),
                    "".into(),
                    quantity.into(),
                ],
            ));
            total_quantity += quantity;
            not_found += 1;
        }
    }

    rows.push(GridRow::new(
        RowKind::SummaryLabel,
        [SUMMARY_LABEL.into(), "".into(), "".into(), "".into()],
    ));
    rows.push(GridRow::new(
        RowKind::SummaryTotals,
        [
            format!("Запросов: {}", results.len()).into(),
            format!("Найдено позиций: {}", total_matches(results)).into(),
            format!("Не найдено: {}", not_found).into(),
            total_quantity.into(),
        ],
    ));

    Ok(ResultGrid { rows })
}
