use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use vitalscore::input::Readings;
use vitalscore::scoring::Channel;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Args, Debug, Default)]
struct ScoreArgs {
    /// Path to a readings JSON file
    file: Option<PathBuf>,

    /// Score the bundled sample readings instead of a file
    #[arg(long)]
    sample: bool,

    /// Emit one tab-separated line (score, band, channel count)
    #[arg(long)]
    tsv: bool,

    /// Deep sleep in hours
    #[arg(long, value_name = "HOURS")]
    deep_sleep: Option<f64>,

    /// REM sleep in hours
    #[arg(long, value_name = "HOURS")]
    rem_sleep: Option<f64>,

    /// Step count
    #[arg(long)]
    steps: Option<f64>,

    /// Active calories burned
    #[arg(long, value_name = "KCAL")]
    calories: Option<f64>,

    /// Resting heart rate in bpm
    #[arg(long, value_name = "BPM")]
    heart_rate: Option<f64>,

    /// Body mass index
    #[arg(long)]
    bmi: Option<f64>,

    /// Body weight in kg (informational, never scored)
    #[arg(long, value_name = "KG")]
    weight: Option<f64>,

    /// Average glucose in mg/dL
    #[arg(long, value_name = "MG_DL")]
    glucose: Option<f64>,
}

impl ScoreArgs {
    /// Flag values, paired with their channels. Flags win over file values.
    fn overrides(&self) -> [(Channel, Option<f64>); 8] {
        [
            (Channel::DeepSleep, self.deep_sleep),
            (Channel::RemSleep, self.rem_sleep),
            (Channel::Steps, self.steps),
            (Channel::ActiveCalories, self.calories),
            (Channel::RestingHeartRate, self.heart_rate),
            (Channel::Bmi, self.bmi),
            (Channel::BodyWeight, self.weight),
            (Channel::AvgGlucose, self.glucose),
        ]
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a day of biometric readings (default if no subcommand)
    Score(ScoreArgs),
    /// Print the effective channel table (weights and curves)
    Curves,
    /// Write the default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "vitalscore")]
#[command(about = "Wellness scoring CLI: sparse biometric readings in, 0-100 score out", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/vitalscore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Score(ScoreArgs::default()));
    let start_time = Instant::now();

    let config_path = cli.config.clone().map(PathBuf::from);

    match command {
        Commands::Init { force } => {
            if let Err(e) = vitalscore::config::run_init(config_path, force) {
                eprintln!("Init error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
        Commands::Curves => {
            let scoring = load_scoring(config_path, cli.verbose);
            let use_colors = vitalscore::output::should_use_colors();
            println!(
                "{}",
                vitalscore::output::format_channel_table(&scoring, use_colors)
            );
        }
        Commands::Score(args) => {
            let scoring = load_scoring(config_path, cli.verbose);

            let mut readings = if args.sample {
                vitalscore::input::sample_readings()
            } else if let Some(ref file) = args.file {
                match vitalscore::input::load_readings(file) {
                    Ok(r) => r,
                    Err(e) => {
                        eprintln!("Readings error: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else {
                Readings::default()
            };

            // Flags override whatever the file supplied
            for (channel, value) in args.overrides() {
                if let Some(v) = value {
                    readings.set(channel, v);
                }
            }

            if readings.is_empty() {
                eprintln!("No readings supplied.");
                eprintln!("Pass a readings JSON file, channel flags, or --sample:");
                eprintln!("  vitalscore score today.json");
                eprintln!("  vitalscore score --steps 8000 --heart-rate 61");
                eprintln!("  vitalscore score --sample");
                std::process::exit(EXIT_INPUT);
            }

            let result = vitalscore::scoring::compute_score(&readings, &scoring);

            if args.tsv {
                println!("{}", vitalscore::output::format_tsv(&result));
            } else {
                let use_colors = vitalscore::output::should_use_colors();
                println!(
                    "{}",
                    vitalscore::output::format_report(&readings, &result, use_colors)
                );
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Scored {} of {} channels in {:?}",
                    result.breakdown.len(),
                    Channel::ALL.len(),
                    start_time.elapsed()
                );
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load config and validate the channel table, exiting on any error.
fn load_scoring(config_path: Option<PathBuf>, verbose: bool) -> vitalscore::scoring::ScoringConfig {
    let config = match vitalscore::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if verbose {
        let source = if config.scoring.is_some() {
            "config file"
        } else {
            "built-in defaults"
        };
        eprintln!("Channel table from {}", source);
    }

    let scoring = config.effective_scoring();
    if let Err(errors) = vitalscore::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    scoring
}
