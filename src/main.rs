// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::{info, warn};

use gps_log_compare::data_analysis::statistics::{PairingMode, StatisticsReport};
use gps_log_compare::data_analysis::stats_export::write_stats_csv;
use gps_log_compare::data_input::log_selection::resolve_selection;
use gps_log_compare::data_input::log_set::LogSet;
use gps_log_compare::plot_framework::FigureContext;
use gps_log_compare::plot_functions::render_all_plots;

#[derive(Parser, Debug)]
#[command(name = "gps_log_compare")]
#[command(version = gps_log_compare::crate_version())]
#[command(about = "Command line tool for making plots from GPS logs")]
struct Args {
    /// Total number of files to process
    #[arg(short = 'n', long)]
    files_number: usize,

    /// Filename prefix (including folder); files are read as "{prefix}{index}.log"
    #[arg(short, long, default_value = "log")]
    prefix: String,

    /// Convert latitude/longitude to meters from a local origin
    #[arg(short, long, default_value_t = true, action = ArgAction::Set)]
    meters: bool,

    /// Render plots
    #[arg(short = 'e', long, default_value_t = true, action = ArgAction::Set)]
    plot_en: bool,

    /// Logs (1-based) shown in the combined plots; all logs when omitted
    #[arg(short = 's', long, num_args = 1..)]
    plot_show: Vec<usize>,

    /// Directory for the rendered PNG images
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Pair samples of two logs by timestamp instead of by index
    #[arg(long)]
    align_by_time: bool,

    /// Write the computed statistics to this CSV file
    #[arg(long)]
    stats_csv: Option<PathBuf>,

    /// Print the loaded tables
    #[arg(long)]
    print_data: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let selection = resolve_selection(&args.plot_show, args.files_number)?;
    let mode = if args.align_by_time {
        PairingMode::Time
    } else {
        PairingMode::Index
    };

    let log_set = LogSet::load(&args.prefix, args.files_number, args.meters)?;
    for (index, log) in log_set.logs().iter().enumerate() {
        if log.is_empty() {
            warn!("Log {} ('{}') has no samples", index + 1, log.display_name());
        }
    }
    if args.print_data {
        log_set.print_data();
    }

    let report = StatisticsReport::compute(log_set.logs(), mode)?;
    report.print_column_std_dev();
    report.print_pairwise_std_dev();

    if let Some(stats_path) = &args.stats_csv {
        write_stats_csv(stats_path, &report)?;
    }

    if args.plot_en {
        std::fs::create_dir_all(&args.output_dir)?;
        let ctx = FigureContext::new(args.output_dir.clone(), &args.prefix, log_set.meters_enabled());
        render_all_plots(&log_set, &selection, &report, mode, &ctx)?;
        info!("Plots written to '{}'", args.output_dir.display());
    } else {
        info!("Plotting disabled");
    }
    Ok(())
}
