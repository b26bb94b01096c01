//! # Tacalc CLI
//!
//! Command-line front-end for the test automation cost calculator.
//! Inputs persist between invocations in the configured data file; every
//! evaluation command reads them back, so a typical session is a few `set`
//! calls followed by `savings`, `break-even`, `maintenance` or `report`.
//!
//! ```text
//! tacalc set manual_test_execution_time 10
//! tacalc set automated_test_execution_time_min 30
//! tacalc --lang de savings
//! tacalc report --output summary.pdf
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Local;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tacalc_core::calculations::Model;
use tacalc_core::i18n::{format_number, next_six_months};
use tacalc_core::report::{assemble, ReportBundle, ReportBundles, ReportDocument};
use tacalc_core::{AppConfig, CalcError, CalcResult, InputKey, Language, Session};

#[derive(Parser, Debug)]
#[command(name = "tacalc")]
#[command(about = "Test automation cost calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to tacalc.toml in the user config directory)
    #[arg(long, global = true, env = "TACALC_CONFIG")]
    config: Option<PathBuf>,

    /// Display language (en, de, fr, lb)
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Input record file, overriding the configured one
    #[arg(long = "data-file", global = true)]
    data_file: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Store an input value (negative values are stored as 0)
    Set {
        /// Input identifier, e.g. manual_test_execution_time
        key: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Print a stored input value (0 when unset)
    Get { key: String },
    /// Print every input value
    Show,
    /// Remove every stored input
    Clear,
    /// Hours saved per automated run
    Savings,
    /// Runs needed to recover the automation investment
    BreakEven,
    /// Whether the team can maintain more automated tests
    Maintenance,
    /// Write a model's chart as SVG
    Chart {
        #[arg(value_enum)]
        model: ChartModel,
        /// SVG file to write
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Export the PDF summary report
    Report {
        /// PDF file to write (defaults to a timestamped name in report_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List supported languages
    Languages,
    /// Print the effective configuration as TOML
    Config {
        /// Write it to the configuration file
        #[arg(long)]
        save: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ChartModel {
    Savings,
    BreakEven,
    Maintenance,
}

impl From<ChartModel> for Model {
    fn from(value: ChartModel) -> Self {
        match value {
            ChartModel::Savings => Model::TimeSavings,
            ChartModel::BreakEven => Model::BreakEven,
            ChartModel::Maintenance => Model::Maintenance,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            print_error(&e, cli.json);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_level, cli.verbose);

    match run(&cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(default_level: &str, verbose: u8) {
    let level = match verbose {
        0 => default_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber set by the environment wins
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn print_error(error: &CalcError, json: bool) {
    if json {
        if let Ok(body) = serde_json::to_string_pretty(error) {
            eprintln!("{}", body);
            return;
        }
    }
    eprintln!("Error: {}", error);
}

fn run(cli: &Cli, mut config: AppConfig) -> CalcResult<()> {
    if let Some(code) = &cli.lang {
        config.language = Language::parse(code)?;
    }
    if let Some(path) = &cli.data_file {
        config.data_file = Some(path.clone());
    }

    let session = Session::from_config(&config);
    debug!(
        language = %session.language(),
        data_file = %session.store().path().display(),
        "session ready"
    );

    match &cli.command {
        Commands::Set { key, value } => cmd_set(&session, key, *value, cli.json),
        Commands::Get { key } => cmd_get(&session, key, cli.json),
        Commands::Show => cmd_show(&session, cli.json),
        Commands::Clear => cmd_clear(&session, cli.json),
        Commands::Savings => cmd_savings(&session, cli.json),
        Commands::BreakEven => cmd_break_even(&session, cli.json),
        Commands::Maintenance => cmd_maintenance(&session, cli.json),
        Commands::Chart { model, output } => cmd_chart(&session, (*model).into(), output, cli.json),
        Commands::Report { output } => cmd_report(&session, &config, output.as_deref(), cli.json),
        Commands::Languages => cmd_languages(cli.json),
        Commands::Config { save } => cmd_config(&config, cli.config.as_deref(), *save),
    }
}

/// Stream pretty JSON to stdout; long trend series are never buffered whole.
fn print_json<T: Serialize>(value: &T) -> CalcResult<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).map_err(|e| CalcError::serialization(e.to_string()))?;
    writeln!(out).map_err(|e| CalcError::file_error("write", "stdout", e.to_string()))
}

#[derive(Serialize)]
struct KeyValue<'a> {
    key: &'a str,
    value: f64,
}

fn cmd_set(session: &Session, key: &str, value: f64, json: bool) -> CalcResult<()> {
    let key = InputKey::parse(key)?;
    let stored = session.set_input(key, value)?;
    if json {
        print_json(&KeyValue {
            key: key.as_str(),
            value: stored,
        })
    } else {
        println!("{} = {}", key, stored);
        Ok(())
    }
}

fn cmd_get(session: &Session, key: &str, json: bool) -> CalcResult<()> {
    let key = InputKey::parse(key)?;
    let value = session.input(key);
    if json {
        print_json(&KeyValue {
            key: key.as_str(),
            value,
        })
    } else {
        println!("{}", value);
        Ok(())
    }
}

fn cmd_show(session: &Session, json: bool) -> CalcResult<()> {
    let record = session.store().load();
    let values: BTreeMap<&str, f64> = InputKey::ALL
        .iter()
        .map(|key| (key.as_str(), record.get(key.as_str()).copied().unwrap_or(0.0)))
        .collect();

    if json {
        return print_json(&values);
    }
    println!("# {}", session.store().path().display());
    for key in InputKey::ALL {
        println!("{} = {}", key, values.get(key.as_str()).copied().unwrap_or(0.0));
    }
    Ok(())
}

fn cmd_clear(session: &Session, json: bool) -> CalcResult<()> {
    session.clear_inputs()?;
    if json {
        print_json(&serde_json::json!({ "cleared": true }))
    } else {
        println!("All inputs cleared.");
        Ok(())
    }
}

/// Print a one-section document: title, inputs, result paragraphs.
fn print_section(document: &ReportDocument) {
    for section in &document.sections {
        println!("{}", section.title);
        println!();
        for row in &section.inputs {
            println!("  {}: {}", row.label, row.value);
        }
        println!();
        for paragraph in &section.results {
            println!("{}", paragraph);
        }
    }
}

fn not_enough_input(keys: &[InputKey]) {
    let names: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
    eprintln!("Not enough input. Set: {}", names.join(", "));
}

fn cmd_savings(session: &Session, json: bool) -> CalcResult<()> {
    let result = session.time_savings()?;
    if json {
        return print_json(&result);
    }
    match result {
        Some(result) => {
            let bundles = ReportBundles {
                time_savings: Some(ReportBundle::new(result)),
                ..Default::default()
            };
            print_section(&assemble(session.language(), &bundles, Local::now().naive_local()));
        }
        None => not_enough_input(&[
            InputKey::ManualTestExecutionTime,
            InputKey::AutomatedTestExecutionTimeMin,
        ]),
    }
    Ok(())
}

fn cmd_break_even(session: &Session, json: bool) -> CalcResult<()> {
    let result = session.break_even()?;
    if json {
        return print_json(&result);
    }
    let bundles = ReportBundles {
        break_even: Some(ReportBundle::new(result)),
        ..Default::default()
    };
    print_section(&assemble(session.language(), &bundles, Local::now().naive_local()));
    Ok(())
}

fn cmd_maintenance(session: &Session, json: bool) -> CalcResult<()> {
    let result = session.maintenance()?;
    if json {
        return print_json(&result);
    }
    let Some(result) = result else {
        not_enough_input(&[InputKey::TotalTestCount]);
        return Ok(());
    };

    let now = Local::now().naive_local();
    let bundles = ReportBundles {
        maintenance: Some(ReportBundle::new(result)),
        ..Default::default()
    };
    print_section(&assemble(session.language(), &bundles, now));

    println!();
    let months = next_six_months(session.language(), now.date());
    for (index, month) in months.iter().enumerate() {
        if let Some(potential) = result.potential_for_month(index + 1) {
            println!(
                "  {:<6} P = {}",
                month,
                format_number(potential, 1, session.language())
            );
        }
    }
    if let Some(month) = result.first_month_without_headroom() {
        println!("  No headroom left from {} on", months[month - 1]);
    }
    Ok(())
}

fn cmd_chart(session: &Session, model: Model, output: &Path, json: bool) -> CalcResult<()> {
    let today = Local::now().date_naive();
    let chart = session.chart(model, today)?.ok_or_else(|| {
        CalcError::invalid_input(
            "chart",
            model.slug(),
            "Not enough input to draw this chart",
        )
    })?;

    fs::write(output, chart.to_svg())
        .map_err(|e| CalcError::file_error("write", output.display().to_string(), e.to_string()))?;

    if json {
        print_json(&serde_json::json!({ "model": model, "output": output }))
    } else {
        println!("{}", output.display());
        Ok(())
    }
}

fn cmd_report(session: &Session, config: &AppConfig, output: Option<&Path>, json: bool) -> CalcResult<()> {
    let report = session.export_report(Local::now().naive_local())?;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let dir = config.report_dir_path();
            fs::create_dir_all(&dir)
                .map_err(|e| CalcError::file_error("create_dir", dir.display().to_string(), e.to_string()))?;
            dir.join(&report.filename)
        }
    };

    fs::write(&path, &report.bytes)
        .map_err(|e| CalcError::file_error("write", path.display().to_string(), e.to_string()))?;

    if json {
        print_json(&serde_json::json!({
            "output": path,
            "sections": report.sections,
            "bytes": report.bytes.len(),
        }))
    } else {
        println!("{}", path.display());
        Ok(())
    }
}

fn cmd_config(config: &AppConfig, path: Option<&Path>, save: bool) -> CalcResult<()> {
    if !save {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let path = path
        .map(Path::to_path_buf)
        .or_else(AppConfig::default_path)
        .ok_or_else(|| CalcError::file_error("save", "tacalc.toml", "no configuration directory"))?;
    config.save(&path)?;
    println!("{}", path.display());
    Ok(())
}

fn cmd_languages(json: bool) -> CalcResult<()> {
    if json {
        let languages: Vec<_> = Language::ALL
            .iter()
            .map(|l| serde_json::json!({ "code": l.code(), "name": l.native_name() }))
            .collect();
        return print_json(&languages);
    }
    for language in Language::ALL {
        println!("{}  {}", language.code(), language.native_name());
    }
    Ok(())
}
