use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::input::Readings;
use crate::scoring::{Channel, ChannelContribution, ScoreResult, ScoringConfig};

/// Qualitative label shown next to the final score. Display-side banding
/// only; the engine knows nothing about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl Band {
    pub fn for_score(score: u8) -> Self {
        match score {
            90.. => Band::Excellent,
            75..=89 => Band::Good,
            60..=74 => Band::Fair,
            _ => Band::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Band::Excellent => "Excellent",
            Band::Good => "Good",
            Band::Fair => "Fair",
            Band::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

const DEFAULT_BAR_WIDTH: usize = 20;

/// Format the full score report: one row per supplied channel, then the
/// final score with its band.
pub fn format_report(readings: &Readings, result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    if let Some(date) = readings.recorded_at {
        lines.push(format!("Readings from {}", date));
    }

    if result.breakdown.is_empty() {
        lines.push("No readings to score.".to_string());
        return lines.join("\n");
    }

    let label_width = Channel::ALL
        .iter()
        .map(|c| c.label().len())
        .max()
        .unwrap_or(0);
    let bar_width = bar_width_for_terminal();

    for contribution in &result.breakdown {
        lines.push(format_channel_row(
            contribution,
            label_width,
            bar_width,
            use_colors,
        ));
    }

    lines.push(String::new());
    lines.push(format_score_line(result.score, use_colors));
    lines.join("\n")
}

fn format_channel_row(
    contribution: &ChannelContribution,
    label_width: usize,
    bar_width: usize,
    use_colors: bool,
) -> String {
    let channel = contribution.channel;
    let value = match channel.unit() {
        "" => format_raw(contribution.raw),
        unit => format!("{} {}", format_raw(contribution.raw), unit),
    };

    // Zero-weight channels are shown for context but carry no bar
    if contribution.weight == 0.0 {
        return format!(
            "{:<label_width$}  {:>12}  (not scored)",
            channel.label(),
            value,
        );
    }

    let bar = goodness_bar(contribution.goodness, bar_width);
    let goodness = format!("{:>5.1}", contribution.goodness);

    if use_colors {
        let goodness = if contribution.goodness >= 75.0 {
            goodness.green().to_string()
        } else if contribution.goodness >= 50.0 {
            goodness.yellow().to_string()
        } else {
            goodness.red().to_string()
        };
        format!(
            "{:<label_width$}  {:>12}  {}  {}",
            channel.label(),
            value,
            bar,
            goodness,
        )
    } else {
        format!(
            "{:<label_width$}  {:>12}  {}  {}",
            channel.label(),
            value,
            bar,
            goodness,
        )
    }
}

/// Final score line: "Score: 83  Good"
pub fn format_score_line(score: u8, use_colors: bool) -> String {
    let band = Band::for_score(score);
    if use_colors {
        let label = match band {
            Band::Excellent => band.label().green().to_string(),
            Band::Good => band.label().cyan().to_string(),
            Band::Fair => band.label().yellow().to_string(),
            Band::NeedsImprovement => band.label().red().to_string(),
        };
        format!("Score: {}  {}", score.bold(), label)
    } else {
        format!("Score: {}  {}", score, band.label())
    }
}

/// Format the result as one tab-separated line for scripting:
/// score, band, number of channels that participated
pub fn format_tsv(result: &ScoreResult) -> String {
    format!(
        "{}\t{}\t{}",
        result.score,
        Band::for_score(result.score).label(),
        result.breakdown.len()
    )
}

/// List the effective channel table (for the `curves` subcommand)
pub fn format_channel_table(config: &ScoringConfig, use_colors: bool) -> String {
    let key_width = Channel::ALL
        .iter()
        .map(|c| c.key().len())
        .max()
        .unwrap_or(0);

    Channel::ALL
        .iter()
        .map(|&channel| {
            let spec = config.channel(channel);
            // Pad before colorizing so ANSI codes don't skew the columns
            let key = format!("{:<key_width$}", channel.key());
            if use_colors {
                format!(
                    "{}  weight {:>4}  {}",
                    key.bold(),
                    spec.weight,
                    spec.curve.describe().dimmed(),
                )
            } else {
                format!(
                    "{}  weight {:>4}  {}",
                    key,
                    spec.weight,
                    spec.curve.describe(),
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a 0-100 goodness as a fixed-width bar
fn goodness_bar(goodness: f64, width: usize) -> String {
    let filled = ((goodness / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Shrink the bar on very narrow terminals; pipes get the default width
fn bar_width_for_terminal() -> usize {
    match get_terminal_width() {
        Some(width) if width < 60 => 10,
        _ => DEFAULT_BAR_WIDTH,
    }
}

/// Trim readings values for display: whole numbers lose the decimal point
fn format_raw(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
