pub mod formatter;

pub use formatter::{
    format_channel_table, format_report, format_score_line, format_tsv, should_use_colors, Band,
};
