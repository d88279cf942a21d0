//! 단위 변환 엔진과 세션 상태를 라이브러리로 분리하여 CLI 외의 화면에서도 재사용한다.

pub mod app;
pub mod category;
pub mod config;
pub mod conversion;
pub mod session;
pub mod ui_cli;
pub mod units;
