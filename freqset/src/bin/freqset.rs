use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use freqset::io::{load_store, write_closed, write_itemsets, write_report, write_statistics, RecordFormat, ReportPaths};
use freqset::{mine, Algorithm, MineResult, MinerConfig, MiningError};

struct RunConfig {
    input: PathBuf,
    miner: MinerConfig,
    step: String,
    out_dir: PathBuf,
    format: RecordFormat,
}

fn print_usage() {
    eprintln!("Usage: freqset -f FILE [-s MIN_SUPPORT] [-a apriori|fp-growth] [-p STEP] [-o OUT_DIR] [--skip N] [--parallel]");
    eprintln!("Writes step<STEP>_task<N>_<dataset>_<min_support>_result<M>.txt reports into OUT_DIR.");
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("{} requires a value", flag))
}

/// Parses the command line. `Ok(None)` means help was requested.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<RunConfig>, String> {
    let mut input: Option<PathBuf> = None;
    let mut min_support: f64 = 0.1;
    let mut algorithm = Algorithm::Apriori;
    let mut step: Option<String> = None;
    let mut out_dir = PathBuf::from(".");
    let mut format = RecordFormat::default();
    let mut parallel = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-f" | "--input" => input = Some(PathBuf::from(next_value(&mut args, &arg)?)),
            "-s" | "--min-support" => {
                let v = next_value(&mut args, &arg)?;
                min_support = v.parse().map_err(|_| format!("{} needs a number, got {}", arg, v))?;
            }
            "-a" | "--algorithm" => {
                algorithm = next_value(&mut args, &arg)?.parse().map_err(|e: MiningError| e.to_string())?;
            }
            "-p" | "--step" => step = Some(next_value(&mut args, &arg)?),
            "-o" | "--out-dir" => out_dir = PathBuf::from(next_value(&mut args, &arg)?),
            "--skip" => {
                let v = next_value(&mut args, &arg)?;
                format.skip_fields = v.parse().map_err(|_| format!("--skip needs a non-negative integer, got {}", v))?;
            }
            "--parallel" => parallel = true,
            "-h" | "--help" => return Ok(None),
            other => return Err(format!("unexpected argument: {}", other)),
        }
    }

    let input = input.ok_or_else(|| MiningError::MissingInput.to_string())?;
    let miner = MinerConfig::builder()
        .with_min_support(min_support)
        .with_algorithm(algorithm)
        .with_parallel(parallel)
        .build()
        .map_err(|e| e.to_string())?;
    let step = step.unwrap_or_else(|| match algorithm {
        Algorithm::Apriori => "2".to_string(),
        Algorithm::FpGrowth => "3".to_string(),
    });

    Ok(Some(RunConfig {
        input,
        miner,
        step,
        out_dir,
        format,
    }))
}

fn dataset_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string())
}

fn run(config: &RunConfig) -> MineResult<()> {
    let store = load_store(&config.input, config.format)?;
    eprintln!(
        "[info] loaded {} transactions ({} distinct items) from {}",
        store.len(),
        store.num_items(),
        config.input.display()
    );

    let paths = ReportPaths::new(
        &config.out_dir,
        &dataset_name(&config.input),
        config.miner.min_support,
        &config.step,
    );

    // Task 1: frequent itemsets
    let task1_start = Instant::now();
    let outcome = mine(&store, &config.miner);
    write_report(&paths.itemsets, |out| write_itemsets(out, &outcome.itemsets, store.vocabulary()))?;
    if let Some(stats) = &outcome.stats {
        write_report(&paths.statistics, |out| write_statistics(out, stats))?;
    }
    let task1_time = task1_start.elapsed().as_secs_f64();

    eprintln!(
        "[info] {} found {} frequent itemsets at min support {}",
        config.miner.algorithm,
        outcome.itemsets.len(),
        config.miner.min_support
    );
    println!("Task 1 computation time in {}: {:.6} seconds", config.miner.algorithm, task1_time);

    if config.miner.algorithm != Algorithm::Apriori {
        return Ok(());
    }

    // Task 2: closed itemsets
    let task2_start = Instant::now();
    let closed = outcome.closed();
    write_report(&paths.closed, |out| write_closed(out, &closed, store.vocabulary()))?;
    let task2_time = task2_start.elapsed().as_secs_f64();

    let total_time = task1_time + task2_time;
    println!("Number of closed itemsets found: {}", closed.len());
    println!("Task 2 (closed itemsets only) computation time: {:.6} seconds", task2_time);
    println!("Total computation time: {:.6} seconds", total_time);
    if task1_time > 0.0 {
        println!("[Task 2 / Task 1] time ratio: {:.6}%", task2_time / task1_time * 100.0);
        println!("[(Task 1 + Task 2) / Task 1] time ratio: {:.6}%", total_time / task1_time * 100.0);
    }
    Ok(())
}

fn main() -> ExitCode {
    let program_start = Instant::now();

    let config = match parse_args(env::args().skip(1)) {
        Ok(Some(config)) => config,
        Ok(None) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("[error] {}", message);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("[error] {}", e);
        return ExitCode::FAILURE;
    }

    eprintln!("[time] program_total={:.2}ms", program_start.elapsed().as_secs_f64() * 1000.0);
    ExitCode::SUCCESS
}
