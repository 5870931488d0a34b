//! Text views
//!
//! Pure renderings of session state: the mapping table, the token list, the
//! grid and the frequency chart. Views never mutate; the shell re-renders
//! after every command.

use seqgen_core::{FrequencyTally, MappingStore, SequenceResult};
use std::fmt::Write as _;

/// Cells per grid row
pub const GRID_COLUMNS: usize = 10;

/// Width of a full chart bar in characters
pub const CHART_WIDTH: usize = 30;

/// Shown instead of results before the first generation
pub const EMPTY_STATE: &str = "No sequence yet. Run 'generate' to draw one.";

const BAR_CHAR: char = '█';

/// Mapping table with an item count header
#[must_use]
pub fn render_mappings(store: &MappingStore) -> String {
    let mut out = format!("{} Items\n", store.len());
    let id_width = store.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
    let src_width = store.iter().map(|r| r.source.chars().count()).max().unwrap_or(0);

    for record in store {
        let _ = writeln!(
            out,
            "  #{:<id_width$}  Src {:<src_width$}  →  Out {}",
            record.id, record.source, record.target,
        );
    }
    out
}

/// Display keys joined with `", "`
#[inline]
#[must_use]
pub fn render_tokens(result: &SequenceResult) -> String {
    result.token_text()
}

/// Grid of target labels, `columns` cells per row
#[must_use]
pub fn render_grid(result: &SequenceResult, columns: usize) -> String {
    let columns = columns.max(1);
    let cell_width = result
        .iter()
        .map(|r| r.grid_label().chars().count())
        .max()
        .unwrap_or(0);

    let labels: Vec<_> = result.iter().map(|r| r.grid_label()).collect();
    let mut out = String::new();
    for row in labels.chunks(columns) {
        let line = row
            .iter()
            .map(|label| format!("[{label:^cell_width$}]"))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Horizontal bar chart, one bar per display key
///
/// The most frequent key gets a bar of `width` characters; others are
/// scaled by `count / max_count`.
#[must_use]
pub fn render_chart(tally: &FrequencyTally, width: usize) -> String {
    let key_width = tally.iter().map(|e| e.key.chars().count()).max().unwrap_or(0);
    let mut out = String::new();

    for entry in tally {
        let bar: String = std::iter::repeat(BAR_CHAR)
            .take(bar_length(entry.bar_ratio, width))
            .collect();
        let _ = writeln!(
            out,
            "{:>key_width$} │{:<width$}│ {} ({}%)",
            entry.key,
            bar,
            entry.count,
            entry.percent_label(),
        );
    }
    out
}

/// Token list, grid and chart, or the empty state
#[must_use]
pub fn render_results(result: Option<&SequenceResult>) -> String {
    let Some(result) = result else {
        return format!("{EMPTY_STATE}\n");
    };

    let tally = FrequencyTally::compute(result);
    let mut out = String::new();
    let _ = writeln!(out, "Sequence ({}):", result.len());
    let _ = writeln!(out, "{}", render_tokens(result));
    out.push('\n');
    out.push_str("Grid:\n");
    out.push_str(&render_grid(result, GRID_COLUMNS));
    out.push('\n');
    out.push_str("Frequency:\n");
    out.push_str(&render_chart(&tally, CHART_WIDTH));
    out
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar_length(ratio: f64, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let scaled = (ratio * width as f64).round() as usize;
    scaled.clamp(usize::from(ratio > 0.0), width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use seqgen_core::{MappingId, MappingRecord};

    fn result_of(pairs: &[(u64, &str, &str)]) -> SequenceResult {
        SequenceResult::from_entries(
            pairs
                .iter()
                .map(|&(id, s, t)| MappingRecord::new(id, s, t))
                .collect(),
        )
    }

    #[test]
    fn mappings_show_count_and_rows() {
        let mut store = MappingStore::seeded();
        store.remove(MappingId(3));

        let text = render_mappings(&store);
        assert!(text.starts_with("3 Items\n"));
        assert!(text.contains("#1  Src 1  →  Out 45"));
        assert!(!text.contains("Out 55"));
    }

    #[test]
    fn grid_wraps_rows_and_uses_placeholder() {
        let result = result_of(&[(1, "1", "45"), (5, "5", ""), (2, "2", "50")]);

        assert_eq!(render_grid(&result, 2), "[45] [? ]\n[50]\n");
    }

    #[test]
    fn chart_scales_to_most_frequent() {
        let result = result_of(&[(1, "1", "a"), (2, "2", "b"), (2, "2", "b"), (2, "2", "b")]);
        let tally = FrequencyTally::compute(&result);

        let chart = render_chart(&tally, 4);
        assert_eq!(chart, "a │█   │ 1 (25.0%)\nb │████│ 3 (75.0%)\n");
    }

    #[test]
    fn results_show_empty_state() {
        assert_eq!(render_results(None), format!("{EMPTY_STATE}\n"));
    }

    #[test]
    fn results_include_all_sections() {
        let result = result_of(&[(1, "1", "45"), (1, "1", "45")]);
        let text = render_results(Some(&result));

        assert!(text.contains("Sequence (2):\n45, 45\n"));
        assert!(text.contains("Grid:\n[45] [45]\n"));
        assert!(text.contains("2 (100.0%)"));
    }

    #[test]
    fn bar_never_vanishes_for_drawn_key() {
        assert_eq!(bar_length(0.001, 30), 1);
        assert_eq!(bar_length(1.0, 30), 30);
        assert_eq!(bar_length(0.0, 30), 0);
        assert_eq!(bar_length(0.5, 0), 0);
    }
}
