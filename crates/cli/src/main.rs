use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use polyarea::api::{
    AreaError, BenchCfg, McCfg, RoundReplay, WallClock, DEFAULT_RADIUS, DEFAULT_SAMPLES,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

/// Exit code for rejected arguments (`AreaError::InvalidArgument`).
/// clap already uses 2 for usage errors.
const EXIT_INVALID_ARGUMENT: u8 = 3;
/// Exit code for any other failure (e.g. writing to stdout).
const EXIT_FAILURE: u8 = 1;

#[derive(Parser)]
#[command(name = "polyarea")]
#[command(about = "Compare exact (shoelace) and Monte Carlo areas of random simple polygons")]
struct Cmd {
    /// Vertex counts; one round per entry
    #[arg(long, value_delimiter = ',', default_values_t = [10usize, 50, 100])]
    vertices: Vec<usize>,
    /// Base radius of the generated polygons
    #[arg(long, default_value_t = DEFAULT_RADIUS)]
    radius: f64,
    /// Monte Carlo samples per estimate
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,
    /// Benchmark repetitions to average over
    #[arg(long, default_value_t = 1)]
    runs: u32,
    /// Seed for reproducible rounds; fresh entropy per round when omitted
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match run(&cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<AreaError>().is_some() {
        EXIT_INVALID_ARGUMENT
    } else {
        EXIT_FAILURE
    }
}

fn run(cmd: &Cmd) -> Result<()> {
    let cfg = BenchCfg {
        mc: McCfg {
            samples: cmd.samples,
        },
        runs: cmd.runs,
    };
    tracing::info!(
        vertices = ?cmd.vertices,
        radius = cmd.radius,
        samples = cfg.mc.samples,
        runs = cfg.runs,
        seed = ?cmd.seed,
        "start"
    );
    let mut rounds = Vec::with_capacity(cmd.vertices.len());
    for (i, &n) in cmd.vertices.iter().enumerate() {
        let mut rng = match cmd.seed {
            Some(seed) => RoundReplay {
                seed,
                index: i as u64,
            }
            .rng(),
            None => StdRng::from_entropy(),
        };
        let round = report::run_round(n, cmd.radius, cfg, &mut rng, &mut WallClock)?;
        tracing::info!(vertices = n, exact = round.exact_area, mc = round.mc_area, "round");
        rounds.push(round);
    }
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    // Rounds are rendered only after all succeeded.
    match cmd.format {
        Format::Text => {
            for round in &rounds {
                report::write_text(&mut out, round)?;
            }
        }
        Format::Json => {
            let doc = report::to_json(&rounds, cmd.radius, cmd.seed);
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
    }
    out.flush()?;
    Ok(())
}
