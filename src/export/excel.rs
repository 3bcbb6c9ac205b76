//! Выгрузка результатов поиска в Excel (CLI)
//!
//! Таблица и стили собираются в общей библиотеке, здесь только
//! имя файла, запись на диск и обёртка ошибок.

use super::{output_path_for, XLSX_MIME};
use crate::error::{HydroFindError, Result};
use chrono::NaiveDate;
use hydro_find_common::export::excel_core::generate_results_buffer;
use hydro_find_common::{build_grid, style_grid, total_matches, SearchResult};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Имя файла: `<префикс>_<ГГГГММДД>_<кол-во найденных>шт.xlsx`
pub fn generate_filename(results: &[SearchResult], prefix: &str, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}шт.xlsx",
        prefix,
        date.format("%Y%m%d"),
        total_matches(results)
    )
}

fn build_workbook(results: &[SearchResult]) -> Result<Vec<u8>> {
    let grid = build_grid(results)?;
    let styles = style_grid(&grid);
    debug!(rows = grid.len(), cells = styles.len(), "таблица результатов собрана");

    generate_results_buffer(&grid, &styles).map_err(HydroFindError::Export)
}

/// Выгрузить результаты в файл
///
/// Книга полностью собирается в памяти до записи, поэтому при ошибке
/// файл не создаётся.
///
/// # Arguments
/// * `output` - каталог (имя файла генерируется) или путь к .xlsx
/// * `prefix` - префикс имени файла
pub fn export_results(results: &[SearchResult], output: &Path, prefix: &str) -> Result<PathBuf> {
    let written = build_workbook(results).and_then(|buffer| {
        let today = chrono::Local::now().date_naive();
        let path = output_path_for(output, &generate_filename(results, prefix, today));
        std::fs::write(&path, buffer)?;
        Ok(path)
    });

    match written {
        Ok(path) => {
            info!(path = %path.display(), mime = XLSX_MIME, "Excel файл успешно сгенерирован");
            Ok(path)
        }
        Err(e) => {
            error!("Ошибка генерации Excel: {}", e);
            Err(into_export_error(e))
        }
    }
}

/// Выгрузить результаты из JSON-файла (массив SearchResult)
pub fn export_json_file(input: &Path, output: &Path, prefix: &str) -> Result<PathBuf> {
    let results = read_results(input).map_err(|e| {
        error!("Ошибка чтения результатов: {}", e);
        into_export_error(e)
    })?;
    export_results(&results, output, prefix)
}

fn read_results(input: &Path) -> Result<Vec<SearchResult>> {
    let content = std::fs::read_to_string(input)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    if !value.is_array() {
        return Err(HydroFindError::Export("Нет данных для экспорта".into()));
    }

    Ok(serde_json::from_value(value)?)
}

/// Любая ошибка выгрузки → одна ошибка Export
fn into_export_error(e: HydroFindError) -> HydroFindError {
    match e {
        HydroFindError::Export(msg) => HydroFindError::Export(msg),
        other => HydroFindError::Export(other.to_string()),
    }
}
