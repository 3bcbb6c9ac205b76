//! Hydro Find Common Library
//!
//! Общие типы и чистые преобразования: поиск артикулов в тексте,
//! таблица результатов и её оформление для выгрузки в Excel.

pub mod types;
pub mod error;
pub mod extractor;
pub mod grid;
pub mod style;
pub mod export;

pub use types::{ComponentMatch, SearchResult, total_matches};
pub use error::{Error, Result};
pub use extractor::extract_articles;
pub use grid::{build_grid, CellValue, GridRow, ResultGrid, RowKind};
pub use style::{style_grid, CellStyle, StyleMap};
