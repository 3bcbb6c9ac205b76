//! Оформление ячеек таблицы результатов
//!
//! Стили считаются отдельно от записи файла: карта (строка, столбец) → стиль.
//! Формат Excel строится из неё в `export::excel_core`.

use crate::grid::{ResultGrid, RowKind};
use std::collections::BTreeMap;

/// Ширины столбцов (в символах)
pub const COLUMN_WIDTHS: [f64; 4] = [40.0, 50.0, 25.0, 12.0];

pub const HEADER_FONT_COLOR: u32 = 0xFFFFFF;
pub const HEADER_FILL: u32 = 0x4562E4;
pub const QUERY_COLOR: u32 = 0x2C3E50;
pub const NOT_FOUND_COLOR: u32 = 0xDC3545;
pub const NOT_FOUND_FILL: u32 = 0xFFF5F5;
pub const ARTICLE_COLOR: u32 = 0x007BFF;
pub const QUANTITY_COLOR: u32 = 0x28A745;
pub const STRIPE_FILL: u32 = 0xF8F9FA;
pub const SUMMARY_LABEL_FILL: u32 = 0xE9ECEF;
pub const SUMMARY_TOTALS_COLOR: u32 = 0x6C757D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
}

/// Атрибуты оформления одной ячейки
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellStyle {
    pub bold: bool,
    pub italic: bool,
    pub font_size: Option<f64>,
    pub font_color: Option<u32>,
    pub fill: Option<u32>,
    pub h_align: Option<HAlign>,
    pub v_align: Option<VAlign>,
    pub wrap: bool,
}

pub type StyleMap = BTreeMap<(u32, u16), CellStyle>;

fn header_style() -> CellStyle {
    CellStyle {
        bold: true,
        font_size: Some(12.0),
        font_color: Some(HEADER_FONT_COLOR),
        fill: Some(HEADER_FILL),
        h_align: Some(HAlign::Center),
        v_align: Some(VAlign::Center),
        wrap: true,
        ..Default::default()
    }
}

fn data_style(kind: RowKind, row: usize, col: usize) -> CellStyle {
    let not_found = kind == RowKind::NotFound;

    let mut style = CellStyle {
        v_align: Some(VAlign::Top),
        wrap: true,
        ..Default::default()
    };

    match col {
        0 => {
            style.bold = true;
            style.font_color = Some(QUERY_COLOR);
        }
        1 if not_found => {
            style.italic = true;
            style.font_color = Some(NOT_FOUND_COLOR);
            style.fill = Some(NOT_FOUND_FILL);
        }
        2 => {
            style.bold = true;
            style.font_color = Some(ARTICLE_COLOR);
        }
        3 => {
            // выравнивание заменяется целиком, без переноса
            style.h_align = Some(HAlign::Center);
            style.v_align = Some(VAlign::Center);
            style.wrap = false;
            style.bold = true;
            style.font_color = Some(QUANTITY_COLOR);
        }
        _ => {}
    }

    // чередование строк (строки «не найдено» не закрашиваются)
    if row % 2 == 1 && !not_found && style.fill.is_none() {
        style.fill = Some(STRIPE_FILL);
    }

    style
}

fn summary_label_style() -> CellStyle {
    CellStyle {
        bold: true,
        font_size: Some(12.0),
        fill: Some(SUMMARY_LABEL_FILL),
        ..Default::default()
    }
}

fn summary_totals_style() -> CellStyle {
    CellStyle {
        bold: true,
        font_color: Some(SUMMARY_TOTALS_COLOR),
        ..Default::default()
    }
}

/// Рассчитать стили всех ячеек таблицы
pub fn style_grid(grid: &ResultGrid) -> StyleMap {
    let mut styles = StyleMap::new();

    for (row, grid_row) in grid.rows().iter().enumerate() {
        for col in 0..grid_row.cells.len() {
            let style = match grid_row.kind {
                RowKind::Header => header_style(),
                RowKind::Found | RowKind::NotFound => data_style(grid_row.kind, row, col),
                RowKind::SummaryLabel => summary_label_style(),
                RowKind::SummaryTotals => summary_totals_style(),
            };
            styles.insert((row as u32, col as u16), style);
        }
    }

    styles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;
    use crate::types::{ComponentMatch, SearchResult};

    fn sample_grid() -> ResultGrid {
        build_grid(&[
            SearchResult {
                original_query: "фитинг".into(),
                matches: vec![
                    ComponentMatch::new("Фитинг DK", "DK-12"),
                    ComponentMatch::new("Фитинг DK", "DK-16"),
                ],
                quantity: 2.0,
            },
            SearchResult {
                original_query: "неизвестно".into(),
                ..Default::default()
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_every_cell_styled() {
        let grid = sample_grid();
        let styles = style_grid(&grid);
        assert_eq!(styles.len(), grid.len() * 4);
    }

    #[test]
    fn test_header_style() {
        let styles = style_grid(&sample_grid());
        let style = &styles[&(0, 1)];
        assert!(style.bold);
        assert_eq!(style.font_color, Some(HEADER_FONT_COLOR));
        assert_eq!(style.fill, Some(HEADER_FILL));
        assert_eq!(style.font_size, Some(12.0));
    }

    #[test]
    fn test_stripes_on_odd_rows() {
        let styles = style_grid(&sample_grid());
        // строка 1 — нечётная, строка 2 — чётная
        assert_eq!(styles[&(1, 0)].fill, Some(STRIPE_FILL));
        assert_eq!(styles[&(2, 0)].fill, None);
    }

    #[test]
    fn test_not_found_row_style() {
        let styles = style_grid(&sample_grid());
        // строка 3 — «не найдено», нечётная, но без полосы
        let name = &styles[&(3, 1)];
        assert!(name.italic);
        assert_eq!(name.font_color, Some(NOT_FOUND_COLOR));
        assert_eq!(name.fill, Some(NOT_FOUND_FILL));
        assert_eq!(styles[&(3, 0)].fill, None);
    }

    #[test]
    fn test_column_styles() {
        let styles = style_grid(&sample_grid());
        assert_eq!(styles[&(2, 0)].font_color, Some(QUERY_COLOR));
        assert_eq!(styles[&(2, 2)].font_color, Some(ARTICLE_COLOR));
        let quantity = &styles[&(2, 3)];
        assert_eq!(quantity.h_align, Some(HAlign::Center));
        assert_eq!(quantity.v_align, Some(VAlign::Center));
        assert_eq!(quantity.font_color, Some(QUANTITY_COLOR));
    }

    #[test]
    fn test_summary_styles() {
        let grid = sample_grid();
        let styles = style_grid(&grid);
        let label = &styles[&(grid.summary_label_row() as u32, 0)];
        assert_eq!(label.fill, Some(SUMMARY_LABEL_FILL));
        let totals = &styles[&(grid.summary_totals_row() as u32, 3)];
        assert_eq!(totals.font_color, Some(SUMMARY_TOTALS_COLOR));
        assert!(totals.bold);
    }
}
