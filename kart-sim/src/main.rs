use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use kart_core::{Tuning, TuningLoader};
use kart_sim::{default_tuning_dir, RaceFile, Runner};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Options {
    /// Race description (YAML)
    race: PathBuf,

    /// Named tuning file, without extension
    #[arg(long, short = 't')]
    tuning: Option<String>,

    /// Directory holding tuning files; defaults to the ones shipped with kart-core
    #[arg(long)]
    tuning_dir: Option<PathBuf>,

    /// Seed for the ice randomness; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Override the number of frames in the race file
    #[arg(long)]
    frames: Option<u64>,

    /// Only print every Nth frame
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Print only the final summary
    #[arg(long)]
    summary_only: bool,

    /// Additional logging to stderr; repeat for more
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    let level = match options.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new().with_level(level).init()?;

    let mut plan = RaceFile::load(&options.race)?;
    if let Some(frames) = options.frames {
        plan.frames = frames;
    }

    let tuning_dir = options
        .tuning_dir
        .clone()
        .unwrap_or_else(default_tuning_dir);
    let tuning = match &options.tuning {
        Some(name) => TuningLoader::new(&tuning_dir)
            .load(name)
            .with_context(|| format!("failed to load tuning {:?} from {}", name, tuning_dir.display()))?,
        None => Tuning::default(),
    };
    info!("tuning: {:?}", tuning);

    let mut runner = Runner::new(plan, tuning, options.seed)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let every = options.every.max(1);
    let mut write_error = None;

    let summary = runner.run(|dump| {
        if options.summary_only || write_error.is_some() || dump.frame % every != 0 {
            return;
        }
        let written = serde_json::to_writer(&mut out, dump)
            .map_err(anyhow::Error::from)
            .and_then(|()| writeln!(out).map_err(anyhow::Error::from));
        if let Err(e) = written {
            write_error = Some(e);
        }
    });
    if let Some(e) = write_error {
        return Err(e.context("failed to write frame"));
    }

    serde_json::to_writer(&mut out, &summary)?;
    writeln!(out)?;
    out.flush()?;

    info!("finished after {} frames, laps {:?}", summary.frames, summary.laps);
    Ok(())
}
