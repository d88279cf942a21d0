use std::io::{BufRead, Write};

use crate::app::AppError;
use crate::category::Category;
use crate::config::{Config, MAX_DECIMAL_PLACES};
use crate::conversion::{self, ConversionRequest};
use crate::session::{DisplayMode, Session};
use crate::units::Unit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    ConvertAll,
    History,
    ToggleDisplayMode,
    Settings,
    Exit,
}

/// 대화형 입출력. 표준 입출력 외에 테스트용 버퍼도 받는다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝나면 `None`.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn require_line(&mut self, prompt: &str) -> Result<String, AppError> {
        self.read_line(prompt)?.ok_or(AppError::InputClosed)
    }

    /// 0 이상의 유한한 숫자를 받을 때까지 반복한다. `-0` 은 `0` 으로 바꾼다.
    fn read_non_negative(&mut self, prompt: &str) -> Result<f64, AppError> {
        loop {
            let s = self.require_line(prompt)?;
            match s.parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => return Ok(v + 0.0),
                _ => self.say("0 이상의 숫자를 입력하세요.")?,
            }
        }
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &Session,
) -> Result<MenuChoice, AppError> {
    let mode = session.display_mode();
    console.say(&format!("\n{}", banner("🧮 Advanced Unit Converter", mode)))?;
    console.say("1) 단위 변환")?;
    console.say("2) 모든 단위로 변환")?;
    console.say(if session.history_visible() {
        "3) 변환 기록 숨기기"
    } else {
        "3) 변환 기록 보기"
    })?;
    console.say(match mode {
        DisplayMode::Light => "4) 🌙 다크 모드로 전환",
        DisplayMode::Dark => "4) ☀️ 라이트 모드로 전환",
    })?;
    console.say("5) 설정")?;
    console.say("0) 종료")?;
    loop {
        let Some(sel) = console.read_line("메뉴 선택: ")? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.as_str() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::ConvertAll),
            "3" => return Ok(MenuChoice::History),
            "4" => return Ok(MenuChoice::ToggleDisplayMode),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => console.say("잘못된 입력입니다. 다시 선택하세요.")?,
        }
    }
}

fn banner(title: &str, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Light => format!("=== {title} === [{}]", mode.label()),
        DisplayMode::Dark => format!("### {title} ### [{}]", mode.label()),
    }
}

/// 단위 변환 메뉴를 처리한다. 성공한 변환은 세션 기록에 남는다.
pub fn handle_conversion<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
    cfg: &Config,
) -> Result<(), AppError> {
    console.say("\n-- 단위 변환 --")?;
    let category = read_category(console, cfg.default_category)?;
    let value = console.read_non_negative("값 입력: ")?;
    print_units(console, category)?;
    let from = read_unit(console, category, "입력 단위: ")?;
    let to = read_unit(console, category, "변환 단위: ")?;
    let request = ConversionRequest {
        category,
        from,
        to,
        value,
    };
    match request.execute() {
        Ok(result) => {
            console.say(&format!(
                "변환 결과: {}",
                result.display(session.decimal_places())
            ))?;
            session.record_conversion(result);
            if session.history_visible() {
                print_history(console, session)?;
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "conversion rejected");
            console.say(&format!("변환 오류: {e}"))?;
        }
    }
    Ok(())
}

/// 입력 단위를 계열 내 모든 단위로 환산해 표로 보여준다.
pub fn handle_convert_all<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &Session,
    cfg: &Config,
) -> Result<(), AppError> {
    console.say("\n-- 모든 단위로 변환 --")?;
    let category = read_category(console, cfg.default_category)?;
    let value = console.read_non_negative("값 입력: ")?;
    print_units(console, category)?;
    let from = read_unit(console, category, "입력 단위: ")?;
    match conversion::convert_all_units(value, from) {
        Ok(table) => {
            console.say(&format!("{value} {from} ="))?;
            for (unit, v) in table.iter() {
                console.say(&format!(
                    "  {v:.prec$} {unit}",
                    prec = session.decimal_places()
                ))?;
            }
        }
        Err(e) => console.say(&format!("변환 오류: {e}"))?,
    }
    Ok(())
}

/// 기록 표시 여부를 전환하고, 보이게 되면 기록을 출력한다.
pub fn handle_history<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> Result<(), AppError> {
    if session.toggle_history_visibility() {
        print_history(console, session)
    } else {
        console.say("변환 기록을 숨겼습니다.")
    }
}

fn print_history<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &Session,
) -> Result<(), AppError> {
    if session.history().is_empty() {
        return console.say("최근 변환 기록이 없습니다.");
    }
    console.say("### 최근 변환:")?;
    for entry in session.history() {
        console.say(&format!("🕒 {entry}"))?;
    }
    Ok(())
}

pub fn handle_display_mode<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> Result<(), AppError> {
    let mode = session.toggle_display_mode();
    console.say(&format!("화면 모드: {}", mode.label()))
}

/// 설정 메뉴를 처리한다. 값이 바뀌면 `true`.
pub fn handle_settings<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &mut Config,
) -> Result<bool, AppError> {
    console.say("\n-- 설정 --")?;
    console.say(&format!(
        "현재 기본 변환 종류: {}, 소수 자릿수: {}",
        cfg.default_category, cfg.decimal_places
    ))?;
    console.say("1) 기본 변환 종류  2) 소수 자릿수")?;
    let sel = console.require_line("변경할 번호(취소하려면 엔터): ")?;
    match sel.as_str() {
        "" => Ok(false),
        "1" => {
            cfg.default_category = read_category(console, cfg.default_category)?;
            console.say(&format!("기본 변환 종류가 {} 로 설정되었습니다.", cfg.default_category))?;
            Ok(true)
        }
        "2" => {
            let prompt = format!("소수 자릿수 (0-{MAX_DECIMAL_PLACES}): ");
            let s = console.require_line(&prompt)?;
            match s.parse::<usize>() {
                Ok(n) if n <= MAX_DECIMAL_PLACES => {
                    cfg.decimal_places = n;
                    console.say(&format!("소수 자릿수가 {n} 로 설정되었습니다."))?;
                    Ok(true)
                }
                _ => {
                    console.say("잘못된 입력이므로 변경하지 않습니다.")?;
                    Ok(false)
                }
            }
        }
        _ => {
            console.say("잘못된 입력이므로 변경하지 않습니다.")?;
            Ok(false)
        }
    }
}

/// 번호나 이름으로 변환 종류를 고른다. 빈 입력은 `default`.
fn read_category<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    default: Category,
) -> Result<Category, AppError> {
    let options: Vec<String> = Category::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}) {c}", i + 1))
        .collect();
    console.say(&options.join("  "))?;
    let prompt = format!("변환 종류 선택 (기본 {default}): ");
    loop {
        let sel = console.require_line(&prompt)?;
        if sel.is_empty() {
            return Ok(default);
        }
        if let Some(c) = pick_numbered(&sel, &Category::ALL) {
            return Ok(c);
        }
        if let Ok(c) = sel.parse::<Category>() {
            return Ok(c);
        }
        console.say("지원하지 않는 변환 종류입니다.")?;
    }
}

fn print_units<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    category: Category,
) -> Result<(), AppError> {
    let options: Vec<String> = category
        .units()
        .iter()
        .enumerate()
        .map(|(i, u)| format!("{}) {u}", i + 1))
        .collect();
    console.say(&options.join("  "))
}

/// 번호나 단위 이름/약어로 단위를 고른다.
fn read_unit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    category: Category,
    prompt: &str,
) -> Result<Unit, AppError> {
    let units = category.units();
    loop {
        let sel = console.require_line(prompt)?;
        if let Some(u) = pick_numbered(&sel, &units) {
            return Ok(u);
        }
        match conversion::parse_unit(category, &sel) {
            Ok(u) => return Ok(u),
            Err(e) => console.say(&e.to_string())?,
        }
    }
}

fn pick_numbered<T: Copy>(sel: &str, items: &[T]) -> Option<T> {
    let n = sel.parse::<usize>().ok()?;
    items.get(n.checked_sub(1)?).copied()
}
