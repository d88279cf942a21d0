//! 세션 기록/화면 모드 규칙.
use unit_converter::category::Category;
use unit_converter::conversion::{ConversionRequest, ConversionResult};
use unit_converter::session::{DisplayMode, Session, HISTORY_CAPACITY};

fn meters_to_centimeters(value: f64) -> ConversionResult {
    ConversionRequest::parse(Category::Length, "Meters", "Centimeters", value)
        .expect("valid units")
        .execute()
        .expect("conversion")
}

#[test]
fn new_session_starts_light_with_empty_history() {
    let session = Session::new();
    assert_eq!(session.display_mode(), DisplayMode::Light);
    assert!(session.history().is_empty());
    assert!(session.history_log().is_empty());
    assert!(session.history_visible());
}

#[test]
fn history_keeps_five_newest_first() {
    let mut session = Session::new();
    for i in 1..=7 {
        session.record_conversion(meters_to_centimeters(i as f64));
    }
    let history = session.history();
    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(history.len(), 5);
    assert_eq!(history[0].result.request.value, 7.0);
    assert_eq!(history[4].result.request.value, 3.0);
    let values: Vec<f64> = history.iter().map(|e| e.result.request.value).collect();
    assert_eq!(values, vec![7.0, 6.0, 5.0, 4.0, 3.0]);
}

#[test]
fn record_returns_updated_log() {
    let mut session = Session::new();
    let log = session.record_conversion(meters_to_centimeters(1.0));
    assert_eq!(log.len(), 1);
}

#[test]
fn history_entry_format() {
    let mut session = Session::new();
    session.record_conversion(meters_to_centimeters(2.5));
    let temp = ConversionRequest::parse(Category::Temperature, "Celsius", "Fahrenheit", 37.0)
        .unwrap()
        .execute()
        .unwrap();
    session.record_conversion(temp);
    assert_eq!(session.history()[0].to_string(), "37 Celsius → 98.6000 Fahrenheit");
    assert_eq!(session.history()[1].to_string(), "2.5 Meters → 250.0000 Centimeters");
}

#[test]
fn decimal_places_apply_to_new_entries_only() {
    let mut session = Session::with_decimal_places(2);
    session.record_conversion(meters_to_centimeters(1.0));
    session.set_decimal_places(0);
    session.record_conversion(meters_to_centimeters(1.0));
    assert_eq!(session.history()[0].to_string(), "1 Meters → 100 Centimeters");
    assert_eq!(session.history()[1].to_string(), "1 Meters → 100.00 Centimeters");
}

#[test]
fn display_mode_toggling() {
    let mut session = Session::new();
    assert_eq!(session.toggle_display_mode(), DisplayMode::Dark);
    assert_eq!(session.toggle_display_mode(), DisplayMode::Light);
    assert_eq!(session.toggle_display_mode(), DisplayMode::Dark);
    assert_eq!(session.display_mode(), DisplayMode::Dark);

    for _ in 0..4 {
        session.toggle_display_mode();
    }
    assert_eq!(session.display_mode(), DisplayMode::Dark);
}

#[test]
fn sessions_do_not_share_state() {
    let mut a = Session::new();
    let b = Session::new();
    a.record_conversion(meters_to_centimeters(1.0));
    a.toggle_display_mode();
    assert!(b.history().is_empty());
    assert_eq!(b.display_mode(), DisplayMode::Light);
}
