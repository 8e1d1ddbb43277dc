use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::error;
use log::info;
use log::LevelFilter;
use u_jobselect::models::Instance;
use u_jobselect::models::InstanceFile;
use u_jobselect::models::InstanceLimits;
use u_jobselect::report::SolutionReport;
use u_jobselect::search::SearchEngine;
use u_jobselect::SelectionResult;

#[derive(Debug, Parser)]
#[command(author, version, about, arg_required_else_help = true)]
struct Args {
    /// The instance to solve, as a JSON document:
    ///   { "name": "demo", "workers": 2,
    ///     "tasks": [{ "starting_date": 0, "ending_date": 3, "profit": 40 }, ...] }
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// Overrides the number of workers given in the instance file.
    #[arg(short = 'p', long)]
    workers: Option<usize>,

    /// Replaces every profit by 1, so the best profit is the largest number of tasks
    /// that can be done.
    #[arg(long)]
    ignore_profits: bool,

    /// Writes the text report to this file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Writes the profit histogram (one `profit count` line per reached profit) to this file.
    #[arg(long)]
    histogram: Option<PathBuf>,

    /// Prints the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Maximum number of tasks accepted.
    #[arg(long, default_value_t = InstanceLimits::default().max_tasks)]
    max_tasks: usize,

    /// Maximum number of workers accepted.
    #[arg(long, default_value_t = InstanceLimits::default().max_workers)]
    max_workers: usize,

    /// Enables debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> SelectionResult<()> {
    let args = Args::parse();
    configure_logging(args.verbose);

    let limits = InstanceLimits::default()
        .with_max_tasks(args.max_tasks)
        .with_max_workers(args.max_workers);

    let mut file = InstanceFile::from_reader(BufReader::new(File::open(&args.instance_path)?))?;
    if let Some(workers) = args.workers {
        file.workers = workers;
    }
    let mut instance = Instance::from_file(file, &limits)?;
    if args.ignore_profits {
        instance = instance.ignoring_profits();
    }
    info!(
        "Loaded {} with {} tasks and {} workers",
        args.instance_path.display(),
        instance.task_count(),
        instance.worker_count()
    );

    let outcome = SearchEngine::new(&instance).enumerate();
    let report = SolutionReport::new(&instance, &outcome);

    let rendered = if args.json {
        report.to_json()?
    } else {
        report.to_string()
    };
    match &args.output {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(rendered.as_bytes())?;
            file.flush()?;
            info!("Report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    if let Some(path) = &args.histogram {
        let mut file = File::create(path)?;
        file.write_all(report.render_histogram().as_bytes())?;
        file.flush()?;
        info!("Histogram written to {}", path.display());
    }

    Ok(())
}
