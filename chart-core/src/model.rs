//! Pure chart generation. No I/O, no failure modes.

use crate::domain::{BaseNumber, CHART_LEN, Chart, LineIndex};

/// All ten lines for `base`, k = 1..=10.
pub fn generate_lines(base: BaseNumber) -> Chart {
    let lines = (1..=CHART_LEN as i64)
        .map(|k| format_line(base.get(), k))
        .collect();
    Chart::from_parts(base, lines)
}

/// Formats `"<base> * <multiplier> = <product>"`. Caller guarantees the range.
pub fn format_line(base: i64, multiplier: i64) -> String {
    format!("{} * {} = {}", base, multiplier, base * multiplier)
}

/// A single row, or `None` when `index` is outside 1..=10.
pub fn generate_specific_line(base: BaseNumber, index: i64) -> Option<String> {
    let index = LineIndex::new(index)?;
    Some(format_line(base.get(), index.get()))
}
