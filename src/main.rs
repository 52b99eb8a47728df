use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use dimensional_units::config::Config;
use dimensional_units::{catalog, constants, simplify, Catalog, Dimension, DimensionVector};

#[derive(Parser)]
#[command(name = "dimensional_units", version, about = "차원 해석 및 단위 기호 단순화 도구")]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// 디버그 로그 출력
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 차원 지수로 합성 단위 기호를 구한다
    Simplify {
        /// `차원=지수` 형식. 예: --dim length=2 --dim time=-1
        #[arg(long = "dim", value_parser = parse_dim, required = true)]
        dims: Vec<(Dimension, i32)>,

        /// SI 기준 단위 대비 배율
        #[arg(long, default_value_t = 1.0)]
        factor: f64,
    },
    /// 카탈로그 단위를 우선순위 순서로 나열한다
    Catalog,
    /// 물리 상수표를 출력한다
    Constants,
}

fn parse_dim(s: &str) -> Result<(Dimension, i32), String> {
    let (name, exp) = s
        .split_once('=')
        .ok_or_else(|| format!("`차원=지수` 형식이 아닙니다: {s}"))?;
    let dim = Dimension::from_name(name).ok_or_else(|| format!("알 수 없는 차원: {name}"))?;
    let exp = exp
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("지수 {exp} 를 읽을 수 없습니다: {e}"))?;
    Ok((dim, exp))
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령을 실행한다.
fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load_or_default(&cli.config)?;
    info!(path = %cli.config.display(), "loaded config");

    let mut active = Catalog::default_si();
    active.apply_config(&cfg);
    debug!(units = active.len(), overrides = active.overrides().len(), "catalog ready");
    catalog::with_default_mut(|c| *c = active.clone());

    match cli.command {
        Command::Simplify { dims, factor } => {
            let vector = DimensionVector::from_exponents(dims)?;
            let symbol = simplify::simplify(&vector, &active);
            if factor == 1.0 {
                println!("{symbol}");
            } else {
                println!("{factor} {symbol}");
            }
        }
        Command::Catalog => {
            for entry in active.units() {
                println!("{:<6} {}", entry.symbol(), entry.vector());
            }
            for (vector, symbol) in active.overrides() {
                println!("{symbol:<6} {vector} (고정)");
            }
        }
        Command::Constants => {
            for (symbol, name, value) in constants::table()? {
                let value = match cfg.display.digits {
                    Some(d) => value.round(d),
                    None => value,
                };
                let text = value.to_string();
                println!("{symbol:<6} {text:<40} {name}");
            }
        }
    }
    Ok(())
}
