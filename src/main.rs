//! ids-monitor - terminal SOC simulation
//!
//! Loads the trained model and fitted scaler (or the heuristic fallback),
//! then drives the streaming monitor against synthetic traffic, rendering
//! KPIs and the alert journal to the terminal.

use std::path::Path;
use std::process::ExitCode;

use ids_monitor::classifier::{Classifier, HeuristicClassifier, OnnxClassifier};
use ids_monitor::clock::SystemClock;
use ids_monitor::monitor::{Monitor, MonitorConfig};
use ids_monitor::sink::ConsoleSink;
use ids_monitor::source::SyntheticSource;
use ids_monitor::{constants, source::FeatureSource};

struct CliOptions {
    iterations: u32,
    rate_hz: f32,
    threshold: f32,
    seed: Option<u64>,
    model_path: String,
    scaler_path: String,
    use_fallback: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            iterations: constants::get_iterations(),
            rate_hz: constants::get_rate_hz(),
            threshold: constants::DEFAULT_ALERT_THRESHOLD,
            seed: None,
            model_path: constants::get_model_path(),
            scaler_path: constants::get_scaler_path(),
            use_fallback: false,
        }
    }
}

fn parse_args() -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        let mut take = |name: &str| {
            args.next()
                .ok_or_else(|| format!("{} requires a value", name))
        };
        match arg.as_str() {
            "--iterations" => {
                options.iterations = take("--iterations")?
                    .parse()
                    .map_err(|e| format!("--iterations: {}", e))?;
            }
            "--rate" => {
                options.rate_hz = take("--rate")?
                    .parse()
                    .map_err(|e| format!("--rate: {}", e))?;
            }
            "--threshold" => {
                options.threshold = take("--threshold")?
                    .parse()
                    .map_err(|e| format!("--threshold: {}", e))?;
            }
            "--seed" => {
                options.seed = Some(
                    take("--seed")?
                        .parse()
                        .map_err(|e| format!("--seed: {}", e))?,
                );
            }
            "--model" => options.model_path = take("--model")?,
            "--scaler" => options.scaler_path = take("--scaler")?,
            "--fallback" => options.use_fallback = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(options)
}

fn print_usage() {
    println!(
        "{} v{} - streaming IDS monitor simulation

USAGE:
    ids-monitor [OPTIONS]

OPTIONS:
    --iterations <N>    ticks to run (default {})
    --rate <HZ>         packets per second, {}..{} (default {})
    --threshold <T>     alert threshold in (0,1] (default {})
    --seed <S>          seed the traffic generator (reproducible runs)
    --model <PATH>      ONNX model artifact (default {})
    --scaler <PATH>     fitted scaler artifact (default {})
    --fallback          use the heuristic classifier, no artifacts needed",
        constants::APP_NAME,
        constants::APP_VERSION,
        constants::DEFAULT_ITERATIONS,
        constants::MIN_RATE_HZ,
        constants::MAX_RATE_HZ,
        constants::DEFAULT_RATE_HZ,
        constants::DEFAULT_ALERT_THRESHOLD,
        constants::DEFAULT_MODEL_PATH,
        constants::DEFAULT_SCALER_PATH,
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match parse_args() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {}", e);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Starting {} v{}",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    let classifier: Box<dyn Classifier> = if options.use_fallback {
        log::info!("Using heuristic classifier (no model artifacts)");
        Box::new(HeuristicClassifier::new(options.threshold))
    } else {
        match OnnxClassifier::load(
            Path::new(&options.model_path),
            Path::new(&options.scaler_path),
            options.threshold,
        ) {
            Ok(classifier) => Box::new(classifier),
            Err(e) => {
                log::error!("Model unavailable: {}", e);
                log::error!(
                    "Place the artifacts next to the binary or rerun with --fallback"
                );
                return ExitCode::FAILURE;
            }
        }
    };

    let mut source: Box<dyn FeatureSource> = match options.seed {
        Some(seed) => {
            log::info!("Seeded traffic generator (seed {})", seed);
            Box::new(SyntheticSource::seeded(seed))
        }
        None => Box::new(SyntheticSource::new()),
    };

    let config = MonitorConfig {
        iterations: options.iterations,
        rate_hz: options.rate_hz,
        alert_threshold: options.threshold,
        ..Default::default()
    };

    let mut clock = SystemClock;
    let mut sink = ConsoleSink::stdout();
    let mut monitor = Monitor::new(classifier.as_ref(), source.as_mut(), &mut clock);

    match monitor.run(&config, &mut sink) {
        Ok(summary) => {
            let status = classifier.status();
            log::info!(
                "Engine: {} | {} inferences, avg {:.2} ms",
                status.model_name,
                status.inference_count,
                status.avg_latency_ms
            );
            log::info!(
                "Done: {} analyzed, {} legitimate, {} blocked",
                summary.processed,
                summary.processed - summary.attacks,
                summary.attacks
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Run aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
