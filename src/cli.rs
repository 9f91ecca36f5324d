use crate::qc::{config::DEFAULT_RUNFOLDER_PATH, Highlight, DEFAULT_MIN_DEPTH};
use chrono::Datelike;
use clap::{error::ErrorKind, ArgAction, Args, Parser};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

type ArgResult<T> = std::result::Result<T, String>;

/// Exit status for a rejected command line; run failures use 1-4.
pub const USAGE_EXIT_CODE: i32 = 64;

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="exonqc",
          version=&**FULL_VERSION,
          about="Aggregate BRCA1/BRCA2 exon coverage QC across a clinical pool run",
          long_about = None,
          after_help = format!("Copyright (C) 2020-{}
Flags exons whose minimum depth falls below the threshold in any sample report.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(flatten)]
    pub args: ExonQcArgs,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Args, Debug)]
pub struct ExonQcArgs {
    #[clap(required = true)]
    #[clap(help = "Clinical pool run name, i.e. CP0379A")]
    #[clap(value_name = "RUN")]
    #[arg(value_parser = check_run_name)]
    pub run: String,

    #[clap(short = 'f')]
    #[clap(long = "runfolder-path")]
    #[clap(help = "Directory holding the run folders")]
    #[clap(value_name = "DIR")]
    #[clap(default_value = DEFAULT_RUNFOLDER_PATH)]
    pub runfolder_path: PathBuf,

    #[clap(short = 'o')]
    #[clap(long = "output-dir")]
    #[clap(help = "Directory for the <RUN>_brcaQC.xlsx report")]
    #[clap(value_name = "DIR")]
    #[clap(default_value = ".")]
    #[arg(value_parser = check_dir_exists)]
    pub output_dir: PathBuf,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "min-depth")]
    #[clap(value_name = "DEPTH")]
    #[clap(help = "Exons with a minimum depth below this value fail")]
    #[clap(default_value_t = DEFAULT_MIN_DEPTH)]
    #[arg(value_parser = depth_in_range)]
    pub min_depth: i64,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "highlight")]
    #[clap(value_name = "STYLE")]
    #[clap(help = "Emphasis for failed cells (background or font)")]
    #[clap(default_value = "background")]
    pub highlight: Highlight,
}

pub fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => USAGE_EXIT_CODE,
    }
}

pub fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        std::process::exit(usage_exit_code(&err));
    })
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_run_name(s: &str) -> ArgResult<String> {
    if s.trim().is_empty() {
        Err("Run name cannot be an empty string".to_string())
    } else if s.contains(['/', '\\']) || s == "." || s == ".." {
        Err(format!("Run name must be a folder name, not a path: {}", s))
    } else {
        Ok(s.to_string())
    }
}

fn check_dir_exists(s: &str) -> ArgResult<PathBuf> {
    let path = Path::new(s);
    if !path.is_dir() {
        Err(format!("Directory does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn depth_in_range(s: &str) -> ArgResult<i64> {
    let depth: i64 = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid depth", s))?;
    if depth >= 1 {
        Ok(depth)
    } else {
        Err("Minimum depth must be at least 1".into())
    }
}
