mod cli;

use chrono::Local;
use clap::Parser;
use std::path::{Path, PathBuf};
use summary_analyzer::analyze::{self, Analyzer};
use summary_analyzer::config;
use summary_analyzer::error::{AnalyzerError, Result};
use summary_analyzer::inputs;
use summary_analyzer::publish::{self, ReportStats};
use summary_analyzer::report;
use summary_analyzer::types::config::AnalyzerConfig;
use summary_analyzer::types::report::Report;
use summary_analyzer::types::scoring::Metric;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const NO_INPUTS: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load(root: &Path) -> Result<(AnalyzerConfig, bool)> {
    let loaded = config::load_config(root)?;
    if let Some(project) = &loaded.config.project {
        tracing::info!(project = %project.name, layers = loaded.layers.len(), "loaded config");
    }
    Ok((loaded.config, !loaded.has_project_file))
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(AnalyzerError::PathNotFound(path.display().to_string()))
    }
}

fn write_report(path: &Path, rendered: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, rendered)?;
    Ok(())
}

fn run(cli: cli::Cli) -> Result<i32> {
    let quiet = cli.quiet;
    match cli.command {
        cli::Commands::Analyze(cmd) => {
            ensure_exists(&cmd.path)?;
            let (cfg, missing_config) = load(&cmd.path)?;

            let summaries = inputs::load_summaries(&cmd.path, &cfg)?;
            let analyzer = Analyzer::from_config(&cfg);
            let records = analyze::analyze(&analyzer, &summaries, &cfg.source_stats());
            let analysis = Report::new(records, Local::now().date_naive());
            if let Some(leader) = analysis.leader() {
                tracing::info!(
                    models = analysis.records.len(),
                    leader = %leader.model,
                    total_score = leader.total_score,
                    "analysis complete"
                );
            }

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&analysis, output_format)?;
            if !quiet {
                println!("{rendered}");
            }

            if !cmd.no_write {
                let output = cmd.output.unwrap_or_else(|| cfg.report_output());
                let target: PathBuf = cmd.path.join(output);
                write_report(&target, &rendered)?;
                if !quiet {
                    eprintln!("report saved to {}", target.display());
                }
            }

            if missing_config {
                eprintln!(
                    "warning: no {} found in {}; using defaults",
                    config::DEFAULT_CONFIG_FILE,
                    cmd.path.display()
                );
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Score(cmd) => {
            ensure_exists(&cmd.file)?;
            let (cfg, missing_config) = load(&cmd.config_root)?;
            let summary = inputs::load_summary_file(&cmd.file, &cfg.extraction_markers())?;

            let analyzer = Analyzer::from_config(&cfg);
            tracing::debug!(weights = ?analyzer.weights(), "scoring with weights");
            let record = analyzer.analyze_model(&cmd.model, &summary, &cfg.source_stats());

            println!("model: {}", record.model);
            println!("words: {}", record.word_count);
            for metric in Metric::ALL {
                println!("  {}: {:.1}", metric, record.metric(metric));
            }
            println!("total: {:.2}", record.total_score);

            if missing_config {
                tracing::warn!(
                    root = %cmd.config_root.display(),
                    "no config found; using defaults"
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Publish(cmd) => {
            ensure_exists(&cmd.path)?;
            let (cfg, _) = load(&cmd.path)?;
            let outcome = publish::copy_report(
                &cmd.path.join(cfg.base_report()),
                &cmd.path.join(cfg.generated_report()),
            )?;
            if !quiet {
                println!(
                    "copied {} -> {} ({} bytes, sha256 {})",
                    outcome.source.display(),
                    outcome.destination.display(),
                    outcome.bytes,
                    outcome.sha256
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Stats(cmd) => {
            let stats = ReportStats::from_path(&cmd.file)?;
            println!("statistics for {}", cmd.file.display());
            println!("{}", "-".repeat(60));
            println!("  Lines: {}", stats.lines);
            println!("  Words: {}", stats.words);
            println!("  Characters: {}", stats.characters);
            println!("{}", "-".repeat(60));
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e @ AnalyzerError::NoInputs(_)) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::NO_INPUTS);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
