//! Bar chart of the working buffer
//!
//! Each value becomes a vertical bar scaled against the fixed value range,
//! drawn with eighth-block glyphs for sub-cell height. Colors follow value
//! rank: small values lean green, large values lean red, all with full blue.
//! Bars touched by the last step are highlighted. When there are more values
//! than columns, columns sample the buffer evenly.

use crate::buffer::VALUE_RANGE;
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
    Frame,
};
use rustc_hash::FxHashMap;

const BLOCKS: [&str; 9] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

/// Render the bars pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, snapshot: &Snapshot<'_>) {
    let block = Block::default()
        .title(format!(" {} · {} ", snapshot.algorithm, snapshot.order))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Bars {
            values: snapshot.values,
            highlighted: snapshot.highlighted(),
        },
        inner,
    );
}

/// Map each distinct value to its rank color
pub fn rank_colors(values: &[u32]) -> FxHashMap<u32, Color> {
    let mut distinct = values.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let k = distinct.len() as u32;
    distinct
        .into_iter()
        .zip(0u32..)
        .map(|(value, rank)| {
            let red = (rank + 1) * 255 / k;
            let green = (k - rank) * 255 / k;
            (value, Color::Rgb(red as u8, green as u8, 255))
        })
        .collect()
}

/// Height of a bar in eighths of a cell, rounded up so no bar vanishes
fn bar_eighths(value: u32, rows: usize) -> usize {
    let range = VALUE_RANGE as usize;
    (value.min(VALUE_RANGE) as usize * rows * 8).div_ceil(range)
}

struct Bars<'a> {
    values: &'a [u32],
    highlighted: Vec<usize>,
}

impl Widget for Bars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.values.is_empty() {
            return;
        }

        let colors = rank_colors(self.values);
        let count = self.values.len();
        let columns = area.width as usize;
        let rows = area.height as usize;

        for column in 0..columns {
            let index = column * count / columns;
            let value = self.values[index];
            let color = if self.highlighted.contains(&index) {
                DEFAULT_THEME.highlight
            } else {
                colors.get(&value).copied().unwrap_or(DEFAULT_THEME.fg)
            };

            let x = area.left() + column as u16;
            let eighths = bar_eighths(value, rows);
            for row in 0..rows {
                let filled = eighths.saturating_sub(row * 8).min(8);
                if filled == 0 {
                    break;
                }
                let y = area.bottom() - 1 - row as u16;
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(BLOCKS[filled]).set_fg(color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_colors_run_green_to_red() {
        let colors = rank_colors(&[30, 10, 20, 10]);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[&10], Color::Rgb(85, 255, 255));
        assert_eq!(colors[&30], Color::Rgb(255, 85, 255));
    }

    #[test]
    fn test_bar_heights() {
        assert_eq!(bar_eighths(VALUE_RANGE, 10), 80);
        assert_eq!(bar_eighths(VALUE_RANGE / 2, 10), 40);
        assert_eq!(bar_eighths(1, 10), 1);
    }

    #[test]
    fn test_tallest_bar_fills_the_column() {
        let area = Rect::new(0, 0, 4, 3);
        let mut buf = Buffer::empty(area);
        Bars {
            values: &[VALUE_RANGE, 1],
            highlighted: Vec::new(),
        }
        .render(area, &mut buf);

        for y in 0..3 {
            assert_eq!(buf.cell((0, y)).map(|c| c.symbol()), Some("█"));
        }
        assert_eq!(buf.cell((2, 2)).map(|c| c.symbol()), Some("▁"));
        assert_eq!(buf.cell((2, 1)).map(|c| c.symbol()), Some(" "));
    }
}
