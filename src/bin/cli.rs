use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use taskscan::config::Config;
use taskscan::error::ScanError;
use taskscan::output::OutputFormat;
use taskscan::registry::Registry;
use taskscan::ScanOptions;

#[derive(Parser)]
#[command(
    name = "taskscan",
    about = "Rule-based content-security scanner for task repositories",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan task folders for security issues
    Scan {
        /// Repository root containing the tasks directory
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Specific task folders to scan (default: all)
        folders: Vec<String>,

        /// Config file path
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output format (markdown, json, console)
        #[arg(long, short = 'f')]
        format: Option<String>,

        /// Write output to file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List all built-in detection rules
    ListRules {
        /// Output format (table, json)
        #[arg(long, short = 'f', default_value = "table")]
        format: String,
    },

    /// Generate a starter .taskscan.toml config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan {
            root,
            folders,
            config,
            format,
            output,
        } => cmd_scan(root, folders, config, format, output),
        Commands::ListRules { format } => cmd_list_rules(format),
        Commands::Init { force } => cmd_init(force),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn cmd_scan(
    root: PathBuf,
    folders: Vec<String>,
    config: Option<PathBuf>,
    format_str: Option<String>,
    output_path: Option<PathBuf>,
) -> Result<i32, ScanError> {
    let format_override = format_str.and_then(|s| {
        let format = OutputFormat::from_str_lenient(&s);
        if format.is_none() {
            eprintln!("Warning: unknown format '{}', using config default", s);
        }
        format
    });

    let options = ScanOptions {
        config_path: config,
        folders,
        format_override,
    };

    let report = taskscan::scan(&root, &options)?;

    for skipped in &report.skipped {
        eprintln!(
            "Warning: skipped {}: {}",
            skipped.path.display(),
            skipped.reason
        );
    }

    let rendered = taskscan::render_report(&report, report.format)?;
    match output_path {
        Some(out) => std::fs::write(&out, &rendered)?,
        None => print!("{}", rendered),
    }

    // Exit code: 0 = pass, 1 = critical or high findings present
    Ok(if report.summary.passed() { 0 } else { 1 })
}

fn cmd_list_rules(format_str: String) -> Result<i32, ScanError> {
    let registry = Registry::shared()?;
    let rules = registry.list_rules();

    match format_str.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&rules)?;
            println!("{}", json);
        }
        _ => {
            println!("{:<24} {:<28} {:<10} DESCRIPTION", "ID", "NAME", "SEVERITY");
            println!("{}", "-".repeat(100));
            for rule in &rules {
                println!(
                    "{:<24} {:<28} {:<10} {}",
                    rule.id,
                    rule.name,
                    rule.severity.to_string(),
                    rule.description,
                );
            }
        }
    }

    Ok(0)
}

fn cmd_init(force: bool) -> Result<i32, ScanError> {
    let path = PathBuf::from(".taskscan.toml");

    if path.exists() && !force {
        eprintln!(".taskscan.toml already exists. Use --force to overwrite.");
        return Ok(1);
    }

    std::fs::write(&path, Config::starter_toml())?;
    println!("Created .taskscan.toml");

    Ok(0)
}
