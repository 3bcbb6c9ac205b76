//! Интеграционные тесты выгрузки в Excel

use calamine::{open_workbook, Data, Reader, Xlsx};
use hydro_find::error::HydroFindError;
use hydro_find::export::{export_json_file, export_results};
use hydro_find_common::export::excel_core::SHEET_NAME;
use hydro_find_common::{ComponentMatch, SearchResult};
use std::path::Path;
use tempfile::tempdir;

fn create_test_results() -> Vec<SearchResult> {
    vec![
        SearchResult {
            original_query: "Фитинг DK 12 x 1.5".into(),
            matches: vec![
                ComponentMatch::new("Фитинг DK прямой", "DK-12-15"),
                ComponentMatch::new("Фитинг DK угловой", "DK-12-90"),
            ],
            quantity: 2.0,
        },
        SearchResult {
            original_query: "Переходник неизвестный".into(),
            matches: vec![],
            quantity: 0.0,
        },
    ]
}

fn read_sheet(path: &Path) -> calamine::Range<Data> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("не удалось открыть xlsx");
    workbook
        .worksheet_range(SHEET_NAME)
        .expect("лист результатов отсутствует")
}

fn text(range: &calamine::Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        Some(Data::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[test]
fn test_excel_generation() {
    let dir = tempdir().expect("Failed to create temp dir");
    let results = create_test_results();

    let path = export_results(&results, dir.path(), "гидравлика").expect("выгрузка не удалась");

    assert!(path.exists(), "файл не создан");
    let file_name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(file_name.starts_with("гидравлика_"));
    assert!(file_name.ends_with("_2шт.xlsx"), "имя файла: {}", file_name);

    let range = read_sheet(&path);
    // 1 заголовок + 2 найденных + 1 «не найдено» + 2 итоговые
    assert_eq!(range.height(), 6);

    assert_eq!(text(&range, 0, 0), "Запрос");
    assert_eq!(text(&range, 0, 3), "Количество");

    assert_eq!(text(&range, 1, 0), "Фитинг DK 12 x 1.5");
    assert_eq!(text(&range, 1, 2), "DK-12-15");
    assert_eq!(range.get_value((1, 3)), Some(&Data::Float(2.0)));

    assert_eq!(text(&range, 3, 1), "Компонент не найден");
    assert_eq!(text(&range, 3, 2), "");
    assert_eq!(range.get_value((3, 3)), Some(&Data::Float(1.0)));

    assert_eq!(text(&range, 4, 0), "ИТОГО:");
    assert_eq!(text(&range, 5, 0), "Запросов: 2");
    assert_eq!(text(&range, 5, 1), "Найдено позиций: 2");
}

#[test]
fn test_excel_generation_explicit_file_path() {
    let dir = tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("отчёт.xlsx");

    let path = export_results(&create_test_results(), &target, "гидравлика").unwrap();

    assert_eq!(path, target);
    assert!(target.exists());
}

#[test]
fn test_excel_generation_empty_results() {
    let dir = tempdir().expect("Failed to create temp dir");

    let result = export_results(&[], dir.path(), "гидравлика");

    assert!(matches!(result, Err(HydroFindError::Export(_))));
    let files = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(files, 0, "при ошибке файл создаваться не должен");
}

#[test]
fn test_export_json_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("results.json");
    std::fs::write(&input, serde_json::to_string(&create_test_results()).unwrap()).unwrap();

    let path = export_json_file(&input, dir.path(), "фитинги").unwrap();

    let file_name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(file_name.starts_with("фитинги_"));
}

#[test]
fn test_export_json_file_not_array() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("results.json");
    std::fs::write(&input, r#"{"original_query": "DK-12"}"#).unwrap();

    let result = export_json_file(&input, dir.path(), "гидравлика");

    match result {
        Err(HydroFindError::Export(msg)) => assert!(msg.contains("Нет данных")),
        other => panic!("ожидалась ошибка выгрузки: {:?}", other),
    }
}

#[test]
fn test_export_json_file_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("broken.json");
    std::fs::write(&input, "[{").unwrap();

    let result = export_json_file(&input, dir.path(), "гидравлика");

    assert!(matches!(result, Err(HydroFindError::Export(_))));
}

/// null и дробное количество из ответа бэкенда не срывают выгрузку
#[test]
fn test_export_json_file_with_nulls() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("results.json");
    std::fs::write(
        &input,
        r#"[
            {"original_query": "фитинг", "matches": [], "quantity": null},
            {"original_query": null, "matches": null, "quantity": 1.5},
            {"original_query": "шланг", "matches": [{"name": null, "article": "HS-10"}]}
        ]"#,
    )
    .unwrap();

    let path = export_json_file(&input, dir.path(), "гидравлика").expect("выгрузка не удалась");

    let range = read_sheet(&path);
    // 1 заголовок + 3 строки данных + 2 итоговые
    assert_eq!(range.height(), 6);
    assert_eq!(range.get_value((1, 3)), Some(&Data::Float(1.0)));
    assert_eq!(text(&range, 2, 1), "Компонент не найден");
    assert_eq!(range.get_value((2, 3)), Some(&Data::Float(1.5)));
    assert_eq!(text(&range, 3, 1), "Не указано");
    assert_eq!(text(&range, 3, 2), "HS-10");
    assert_eq!(range.get_value((5, 3)), Some(&Data::Float(3.5)));
}
