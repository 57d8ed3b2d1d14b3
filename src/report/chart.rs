//! Two-bar text comparison of corpus available vs corpus needed

use crate::currency::format_money;

const LABEL_WIDTH: usize = 16;

/// Bar length for `value` when `max` fills `width`; negatives draw nothing
fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let scaled = (value / max * width as f64).round();
    (scaled as usize).min(width)
}

fn bar_line(label: &str, fill: char, value: f64, max: f64, width: usize, symbol: &str) -> String {
    let filled = bar_length(value, max, width);
    format!(
        "{:<label_width$} |{}{}| {}",
        label,
        fill.to_string().repeat(filled),
        " ".repeat(width - filled),
        format_money(symbol, value),
        label_width = LABEL_WIDTH,
    )
}

/// Render the comparison; the larger figure spans `width` characters
pub fn corpus_comparison(available: f64, needed: f64, symbol: &str, width: usize) -> Vec<String> {
    let max = available.max(needed);
    vec![
        bar_line("Corpus Available", '#', available, max, width, symbol),
        bar_line("Corpus Needed", '=', needed, max, width, symbol),
    ]
}
