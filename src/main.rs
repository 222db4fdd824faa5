//! Neck turn exercise tracker replaying recorded skeleton frames.

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use neck_motion_tracker::{
    config::{Config, EXAMPLE_CONFIG},
    session::{Session, SessionHandle, SessionSummary},
    sink::{FeedbackSink, JsonLinesSink, LogSink},
    skeleton::TrackingMode,
    source::ReplaySource,
    tracker::NeckMotionTracker,
};
use std::io::BufRead;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recording to replay (JSON lines, one skeleton frame per line)
    #[arg(short, long, required_unless_present = "print_config")]
    replay: Option<String>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Use seated (upper body) tracking mode
    #[arg(long)]
    seated: bool,

    /// Print feedback signals as JSON lines on stdout
    #[arg(long)]
    json: bool,

    /// Pace frames at the configured frame rate
    #[arg(long)]
    realtime: bool,

    /// Read commands from stdin: r = repeat, s = seated, d = default, q = quit
    #[arg(short, long)]
    interactive: bool,

    /// Print an example configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    info!("Neck Motion Tracker");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if args.seated {
        config.session.tracking_mode = TrackingMode::Seated;
    }
    if args.realtime {
        config.session.realtime = true;
    }
    config.validate().context("Invalid configuration")?;

    let replay = args.replay.context("No recording given")?;
    let source = ReplaySource::open(&replay).with_context(|| format!("Failed to open recording {replay}"))?;
    let tracker = NeckMotionTracker::with_config(config.tracker.clone())?;

    let summary = if args.json {
        let sink = JsonLinesSink::new(std::io::stdout().lock());
        run_session(source, sink, tracker, &config, args.interactive)?
    } else {
        run_session(source, LogSink::new(), tracker, &config, args.interactive)?
    };

    info!(
        "Final phase: {} ({} completed, {} rejected)",
        summary.final_phase, summary.completions, summary.rejections
    );

    Ok(())
}

fn run_session<K: FeedbackSink>(
    source: ReplaySource<std::io::BufReader<std::fs::File>>,
    sink: K,
    tracker: NeckMotionTracker,
    config: &Config,
    interactive: bool,
) -> Result<SessionSummary> {
    let (mut session, handle) = Session::new(source, sink, tracker, config.session.clone());
    if interactive {
        spawn_control_reader(handle);
    }
    Ok(session.run()?)
}

/// Forward stdin commands to the session until it closes
fn spawn_control_reader(handle: SessionHandle) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let sent = match line.trim() {
                "r" => handle.repeat(),
                "s" => handle.set_tracking_mode(TrackingMode::Seated),
                "d" => handle.set_tracking_mode(TrackingMode::Default),
                "q" => handle.stop(),
                "" => continue,
                other => {
                    warn!("Unknown command: {}", other);
                    continue;
                }
            };
            if sent.is_err() {
                break;
            }
        }
    });
}
