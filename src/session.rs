//! 세션 단위 상태: 최근 변환 기록과 화면 모드.
//!
//! 세션은 시작 시 만들어져 호출자가 소유하고 종료 시 버려진다. 여러 세션을
//! 동시에 다루더라도 각 `Session` 값이 서로 상태를 공유하지 않는다.

use std::fmt;

use crate::conversion::ConversionResult;

/// 기록에 남기는 최대 항목 수.
pub const HISTORY_CAPACITY: usize = 5;

/// 화면 표시 소수 자릿수 기본값.
pub const DEFAULT_DECIMAL_PLACES: usize = 4;

/// 라이트/다크 표시 모드.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Light => "☀️ 라이트",
            DisplayMode::Dark => "🌙 다크",
        }
    }
}

/// 과거 변환 한 건.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub result: ConversionResult,
    decimal_places: usize,
}

impl HistoryEntry {
    pub fn new(result: ConversionResult, decimal_places: usize) -> Self {
        Self {
            result,
            decimal_places,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let req = &self.result.request;
        write!(
            f,
            "{} {} → {:.prec$} {}",
            req.value,
            req.from,
            self.result.output,
            req.to,
            prec = self.decimal_places
        )
    }
}

/// 최신 항목이 앞에 오는 길이 제한 기록.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// 맨 앞에 추가하고 용량을 넘으면 가장 오래된 항목을 버린다.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 한 사용자 세션의 상태.
#[derive(Debug, Clone)]
pub struct Session {
    history: HistoryLog,
    display_mode: DisplayMode,
    show_history: bool,
    decimal_places: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_decimal_places(DEFAULT_DECIMAL_PLACES)
    }

    pub fn with_decimal_places(decimal_places: usize) -> Self {
        Self {
            history: HistoryLog::default(),
            display_mode: DisplayMode::default(),
            show_history: true,
            decimal_places,
        }
    }

    /// 변환 결과를 기록 맨 앞에 남긴다.
    pub fn record_conversion(&mut self, result: ConversionResult) -> &HistoryLog {
        let entry = HistoryEntry::new(result, self.decimal_places);
        tracing::debug!(entry = %entry, "history recorded");
        self.history.push(entry);
        &self.history
    }

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.display_mode = self.display_mode.toggled();
        tracing::debug!(mode = ?self.display_mode, "display mode toggled");
        self.display_mode
    }

    /// 기록 표시 여부를 뒤집고 새 값을 돌려준다. 새 세션은 기록을 보여준다.
    pub fn toggle_history_visibility(&mut self) -> bool {
        self.show_history = !self.show_history;
        self.show_history
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn history_log(&self) -> &HistoryLog {
        &self.history
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn history_visible(&self) -> bool {
        self.show_history
    }

    pub fn decimal_places(&self) -> usize {
        self.decimal_places
    }

    /// 이후 기록에 쓰일 자릿수를 바꾼다. 이미 남은 기록은 그대로 둔다.
    pub fn set_decimal_places(&mut self, decimal_places: usize) {
        self.decimal_places = decimal_places;
    }
}
