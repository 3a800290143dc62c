use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "algolab workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the algorithm benchmarks and write a report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Criterion baseline to save results under
        #[arg(long, default_value = "current")]
        baseline: String,
    },
}

const BENCH: &str = "algorithms";

/// Workload -> baseline -> throughput (elements or iterations per second).
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            baseline,
        } => {
            if !report_only {
                run_benchmarks(quick, &baseline)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, baseline: &str) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", BENCH, "--release"])
        .status()
        .context("failed to spawn cargo")?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    println!("\n>>> Benchmarking into baseline: {baseline}");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--").arg("--save-baseline").arg(baseline);
    if quick {
        cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run bench into baseline {baseline}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark run failed for baseline {baseline}");
    }
    println!("Finished in {:.2?}", start.elapsed());

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, criterion_dir, &mut results);

    let baselines: BTreeSet<&String> = results.values().flat_map(BTreeMap::keys).collect();

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("cannot create {}", report_path.display()))?;

    writeln!(file, "# Algorithm Benchmark Report")?;
    writeln!(file)?;

    write!(file, "| Workload |")?;
    for baseline in &baselines {
        write!(file, " {baseline} (Ops/s) |")?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in &baselines {
        write!(file, "---|")?;
    }
    writeln!(file)?;

    for (workload, per_baseline) in &results {
        write!(file, "| {workload} |")?;
        for baseline in &baselines {
            match per_baseline.get(*baseline) {
                Some(ops) => write!(file, " {} |", format_ops(*ops))?,
                None => write!(file, " N/A |")?,
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name()?.to_str().map(str::to_owned)
}

/// Grouped benches nest as `<group>/<function>/<parameter>`; keep the full path.
fn workload_name(root: &Path, workload_dir: &Path) -> Option<String> {
    let relative = workload_dir.strip_prefix(root).ok()?;
    relative.to_str().map(|s| s.replace('\\', "/"))
}

fn read_json(path: &Path) -> Option<serde_json::Value> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

fn collect_results(root: &Path, dir: &Path, results: &mut Results) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(root, &path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        // Structure: .../<workload>/<baseline>/estimates.json
        let Some(baseline_dir) = path.parent() else { continue };
        let Some(workload_dir) = baseline_dir.parent() else { continue };
        let Some(baseline) = dir_name(baseline_dir) else { continue };
        let Some(workload) = workload_name(root, workload_dir) else { continue };

        // Criterion keeps scratch data in `new`/`base`/`change`; `report` holds plots.
        if matches!(baseline.as_str(), "report" | "new" | "base" | "change") {
            continue;
        }

        let elements = read_json(&baseline_dir.join("benchmark.json"))
            .and_then(|json| json.get("throughput")?.get("Elements")?.as_f64());

        let Some(time_ns) = read_json(&path)
            .and_then(|json| json.get("mean")?.get("point_estimate")?.as_f64())
            .filter(|t| *t > 0.0)
        else {
            continue;
        };

        let metric = elements.unwrap_or(1.0) * 1e9 / time_ns;
        results.entry(workload).or_default().insert(baseline, metric);
    }
}
