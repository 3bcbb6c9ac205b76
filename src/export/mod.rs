pub mod excel;

use std::path::{Path, PathBuf};

/// MIME-тип книги XLSX
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Путь файла выгрузки: каталог + сгенерированное имя, либо явный путь к файлу
fn output_path_for(output: &Path, file_name: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(file_name)
    } else {
        output.to_path_buf()
    }
}

pub use excel::{export_json_file, export_results, generate_filename};
