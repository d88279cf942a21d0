use std::io::{BufRead, Write};
use std::path::Path;

use thiserror::Error;

use crate::category::Category;
use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError, ConversionRequest};
use crate::session::Session;
use crate::ui_cli::{self, Console, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 입력 스트림이 닫힘
    #[error("입력이 종료되었습니다")]
    InputClosed,
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 세션은 이 호출 동안만 살아 있으며 종료 시 버려진다.
pub fn run<R: BufRead, W: Write>(
    config: &mut Config,
    config_path: &Path,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let mut session = Session::with_decimal_places(config.decimal_places);
    loop {
        let step = match ui_cli::main_menu(console, &session)? {
            MenuChoice::Convert => ui_cli::handle_conversion(console, &mut session, config),
            MenuChoice::ConvertAll => ui_cli::handle_convert_all(console, &session, config),
            MenuChoice::History => ui_cli::handle_history(console, &mut session),
            MenuChoice::ToggleDisplayMode => ui_cli::handle_display_mode(console, &mut session),
            MenuChoice::Settings => apply_settings(console, config, config_path, &mut session),
            MenuChoice::Exit => {
                console.say("프로그램을 종료합니다.")?;
                break;
            }
        };
        match step {
            Ok(()) => {}
            Err(AppError::InputClosed) => break,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn apply_settings<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &mut Config,
    config_path: &Path,
    session: &mut Session,
) -> Result<(), AppError> {
    if ui_cli::handle_settings(console, config)? {
        session.set_decimal_places(config.decimal_places);
        config.save(config_path)?;
    }
    Ok(())
}

/// 한 번의 변환을 수행하고 표시용 문자열을 돌려준다.
pub fn convert_once(
    config: &Config,
    category: Category,
    from: &str,
    to: &str,
    value: f64,
) -> Result<String, AppError> {
    let result = ConversionRequest::parse(category, from, to, value)?.execute()?;
    Ok(result.display(config.decimal_places))
}

/// 계열별 단위 목록을 `Length: Meters, Kilometers, ...` 형태로 만든다.
pub fn unit_listing(category: Option<Category>) -> Vec<String> {
    let categories = match category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };
    categories
        .into_iter()
        .map(|c| format!("{c}: {}", c.unit_names().join(", ")))
        .collect()
}

/// 계열 내 모든 단위로 환산한 결과를 줄 단위 문자열로 만든다.
pub fn convert_all_lines(
    config: &Config,
    category: Category,
    from: &str,
    value: f64,
) -> Result<Vec<String>, AppError> {
    let table = conversion::convert_all(category, from, value)?;
    Ok(table
        .iter()
        .map(|(unit, v)| format!("{v:.prec$} {unit}", prec = config.decimal_places))
        .collect())
}
