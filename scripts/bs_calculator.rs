// scripts/bs_calculator.rs
use bs_greeks::error::{PricerError, PricerResult};
use bs_greeks::math_utils::Timer;
use bs_greeks::output;
use bs_greeks::{Columns, EvalConfig, OptionBatch, Param, TableBuilder};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: bs_calculator S K T r sigma [--csv PATH] [--json] [--all-columns]

  S      underlying price
  K      strike price
  T      time to expiration in years
  r      risk-free interest rate (continuously compounded)
  sigma  annualized volatility, e.g. 0.15 for 15%

Any of the five values may be a comma-separated list; lists must have equal
lengths and single values are repeated on every row.";

#[derive(Debug)]
struct Args {
    batch: OptionBatch,
    csv: Option<PathBuf>,
    json: bool,
    all_columns: bool,
}

fn parse_param(name: &str, raw: &str) -> PricerResult<Param> {
    let values = raw
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| PricerError::Parse {
                    argument: name.to_string(),
                    reason: format!("'{}': {}", part, e),
                })
        })
        .collect::<PricerResult<Vec<f64>>>()?;

    if raw.contains(',') {
        Ok(Param::from(values))
    } else {
        Ok(Param::Scalar(values[0]))
    }
}

fn parse_args(raw: &[String]) -> PricerResult<Args> {
    let mut positional = Vec::new();
    let mut csv = None;
    let mut json = false;
    let mut all_columns = false;

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--csv" => {
                let path = iter.next().ok_or_else(|| PricerError::Parse {
                    argument: "--csv".to_string(),
                    reason: "missing file path".to_string(),
                })?;
                csv = Some(PathBuf::from(path));
            }
            "--json" => json = true,
            "--all-columns" => all_columns = true,
            other => positional.push(other),
        }
    }

    if positional.len() != 5 {
        return Err(PricerError::Parse {
            argument: "parameters".to_string(),
            reason: format!("expected 5 values (S K T r sigma), got {}", positional.len()),
        });
    }

    let batch = OptionBatch {
        s: parse_param("S", positional[0])?,
        k: parse_param("K", positional[1])?,
        t: parse_param("T", positional[2])?,
        r: parse_param("r", positional[3])?,
        sigma: parse_param("sigma", positional[4])?,
    };

    Ok(Args {
        batch,
        csv,
        json,
        all_columns,
    })
}

/// Shape errors fail; a domain error is returned for the caller to warn about
fn check_inputs(batch: &OptionBatch) -> PricerResult<Option<PricerError>> {
    batch.row_count()?;
    Ok(batch.validate().err())
}

fn run(args: Args) -> PricerResult<()> {
    if let Some(e) = check_inputs(&args.batch)? {
        tracing::warn!(
            error = %e,
            "inputs outside the model domain, results may be NaN or infinite"
        );
    }

    let columns = if args.all_columns {
        Columns::ALL
    } else {
        Columns::DEFAULT
    };
    let config = EvalConfig::from_env()?;

    let mut timer = Timer::new();
    timer.start();
    let table = TableBuilder::new()
        .columns(columns)
        .config(config)
        .build(&args.batch)?;
    tracing::info!(rows = table.len(), elapsed_ms = timer.elapsed_ms(), "priced options");

    if args.json {
        println!("{}", output::table_to_json(&table)?);
    } else {
        print!("{}", table);
    }

    if let Some(path) = args.csv {
        let comments = vec![
            "Black-Scholes prices and Greeks".to_string(),
            format!(
                "Generated: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            ),
        ];
        output::write_table_to_csv(&path, &table, &comments)?;
        tracing::info!(path = %path.display(), "wrote csv");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    if raw.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let result = parse_args(&raw).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            if matches!(e, PricerError::Parse { .. }) {
                eprintln!("\n{}", USAGE);
            }
            ExitCode::FAILURE
        }
    }
}
