use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unit_converter::category::Category;
use unit_converter::ui_cli::Console;
use unit_converter::{app, config};

/// 길이, 무게, 온도, 데이터 용량 단위 변환기.
#[derive(Debug, Parser)]
#[command(name = "unit_converter", version)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 값 하나를 변환해 출력한다
    Convert {
        category: Category,
        from: String,
        to: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// 값 하나를 계열 내 모든 단위로 변환해 출력한다
    All {
        category: Category,
        from: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// 지원하는 단위 목록을 출력한다
    Units { category: Option<Category> },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unit_converter=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    // 대화형 모드만 설정 파일을 만든다
    let mut cfg = match cli.command {
        None => config::load_or_default(&cli.config)?,
        Some(_) => config::load_or_builtin(&cli.config)?,
    };
    match cli.command {
        None => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            app::run(&mut cfg, &cli.config, &mut console)?;
        }
        Some(Command::Convert {
            category,
            from,
            to,
            value,
        }) => {
            println!("{}", app::convert_once(&cfg, category, &from, &to, value)?);
        }
        Some(Command::All {
            category,
            from,
            value,
        }) => {
            for line in app::convert_all_lines(&cfg, category, &from, value)? {
                println!("{line}");
            }
        }
        Some(Command::Units { category }) => {
            for line in app::unit_listing(category) {
                println!("{line}");
            }
        }
    }
    Ok(())
}
