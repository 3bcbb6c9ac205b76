//! Генерация Excel (общая библиотека)
//!
//! Таблица результатов (`grid`) и карта стилей (`style`) переводятся
//! в книгу rust_xlsxwriter и сохраняются в буфер.

use crate::grid::{CellValue, ResultGrid};
use crate::style::{CellStyle, HAlign, StyleMap, VAlign, COLUMN_WIDTHS};
use rust_xlsxwriter::*;

pub const SHEET_NAME: &str = "Результаты поиска";
pub const DOCUMENT_TITLE: &str = "Результаты поиска гидравлических компонентов";
pub const DOCUMENT_AUTHOR: &str = "Гидравлика Поиск";

/// CellStyle → Format
fn to_format(style: &CellStyle) -> Format {
    let mut format = Format::new();

    if style.bold {
        format = format.set_bold();
    }
    if style.italic {
        format = format.set_italic();
    }
    if let Some(size) = style.font_size {
        format = format.set_font_size(size);
    }
    if let Some(color) = style.font_color {
        format = format.set_font_color(Color::RGB(color));
    }
    if let Some(fill) = style.fill {
        format = format
            .set_pattern(FormatPattern::Solid)
            .set_background_color(Color::RGB(fill));
    }
    if let Some(HAlign::Center) = style.h_align {
        format = format.set_align(FormatAlign::Center);
    }
    match style.v_align {
        Some(VAlign::Top) => format = format.set_align(FormatAlign::Top),
        Some(VAlign::Center) => format = format.set_align(FormatAlign::VerticalCenter),
        None => {}
    }
    if style.wrap {
        format = format.set_text_wrap();
    }

    format
}

/// Сохранить таблицу в буфер XLSX
///
/// # Arguments
/// * `grid` - таблица результатов
/// * `styles` - стили ячеек; ячейки без стиля пишутся без формата
pub fn generate_results_buffer(grid: &ResultGrid, styles: &StyleMap) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let properties = DocProperties::new()
        .set_title(DOCUMENT_TITLE)
        .set_author(DOCUMENT_AUTHOR);
    workbook.set_properties(&properties);

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| format!("Ошибка имени листа: {}", e))?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, *width)
            .map_err(|e| format!("Ошибка ширины столбца: {}", e))?;
    }

    let plain = CellStyle::default();

    for (row, grid_row) in grid.rows().iter().enumerate() {
        let row = row as u32;
        for (col, value) in grid_row.cells.iter().enumerate() {
            let col = col as u16;
            let format = to_format(styles.get(&(row, col)).unwrap_or(&plain));

            let written = match value {
                CellValue::Text(text) if text.is_empty() => worksheet.write_blank(row, col, &format),
                CellValue::Text(text) => worksheet.write_string_with_format(row, col, text, &format),
                CellValue::Number(n) => worksheet.write_number_with_format(row, col, *n, &format),
            };
            written.map_err(|e| format!("Ошибка записи ячейки ({}, {}): {}", row, col, e))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Ошибка сохранения Excel: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;
    use crate::style::style_grid;
    use crate::types::{ComponentMatch, SearchResult};

    #[test]
    fn test_buffer_is_zip() {
        let grid = build_grid(&[SearchResult {
            original_query: "фитинг DK".into(),
            matches: vec![ComponentMatch::new("Фитинг DK", "DK-12")],
            quantity: 1.0,
        }])
        .unwrap();
        let buffer = generate_results_buffer(&grid, &style_grid(&grid)).unwrap();
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_unstyled_grid_still_renders() {
        let grid = build_grid(&[SearchResult::default()]).unwrap();
        let buffer = generate_results_buffer(&grid, &StyleMap::new()).unwrap();
        assert!(!buffer.is_empty());
    }
}
