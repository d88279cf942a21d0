//! 대화형 루프와 단발 변환 경로.
use std::io::Cursor;

use unit_converter::app::{self, AppError};
use unit_converter::category::Category;
use unit_converter::config::{load_or_default, Config};
use unit_converter::ui_cli::Console;

fn run_script(script: &str, cfg: &mut Config, path: &std::path::Path) -> String {
    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    app::run(cfg, path, &mut console).expect("interactive run");
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn interactive_session_converts_and_shows_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    // 변환 두 번, 기록 숨기기, 다크 모드, 종료
    let out = run_script("1\n3\n0\nC\nK\n1\n\n2\nm\ncm\n3\n4\n0\n", &mut cfg, &path);
    assert!(out.contains("변환 결과: 0 Celsius = 273.1500 Kelvin"), "{out}");
    assert!(out.contains("🕒 2 Meters → 200.0000 Centimeters"));
    assert!(out.contains("🕒 0 Celsius → 273.1500 Kelvin"));
    assert!(out.contains("변환 기록을 숨겼습니다."));
    assert!(out.contains("화면 모드: 🌙 다크"));
    assert!(out.contains("프로그램을 종료합니다."));
    // 설정을 바꾸지 않았으므로 파일을 쓰지 않는다
    assert!(!path.exists());
}

#[test]
fn settings_change_is_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    run_script("5\n2\n1\n1\n\n1\nm\ncm\n0\n", &mut cfg, &path);
    assert_eq!(cfg.decimal_places, 1);
    assert_eq!(load_or_default(&path).unwrap().decimal_places, 1);
}

#[test]
fn end_of_input_ends_the_loop() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    let out = run_script("1\n2\n", &mut cfg, &path);
    assert!(!out.contains("변환 결과"));
}

#[test]
fn one_shot_conversion() {
    let cfg = Config::default();
    let line = app::convert_once(&cfg, Category::DataStorage, "GB", "MB", 1.0).unwrap();
    assert_eq!(line, "1 Gigabytes = 1024.0000 Megabytes");
    let err = app::convert_once(&cfg, Category::Length, "m", "lightyear", 1.0).unwrap_err();
    assert!(matches!(err, AppError::Conversion(_)));
}

#[test]
fn convert_all_and_unit_listing() {
    let cfg = Config {
        decimal_places: 1,
        ..Config::default()
    };
    let lines = app::convert_all_lines(&cfg, Category::Temperature, "Celsius", 100.0).unwrap();
    assert_eq!(lines, vec!["212.0 Fahrenheit", "373.1 Kelvin"]);

    let listing = app::unit_listing(Some(Category::Weight));
    assert_eq!(
        listing,
        vec!["Weight: Kilograms, Grams, Milligrams, Pounds, Ounces"]
    );
    assert_eq!(app::unit_listing(None).len(), 4);
}
