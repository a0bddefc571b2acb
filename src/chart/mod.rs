//! Bar Chart Rendering
//!
//! Presentation step for a finished ranking: a list of `(label, height)` bars
//! plus axis labels, drawn as a horizontal text chart for the terminal.

use crate::mapreduce::RankedEntry;
use serde::Serialize;

const BAR: char = '█';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<(String, u64)>,
}

impl BarChart {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        bars: Vec<(String, u64)>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            bars,
        }
    }

    /// Word-frequency chart for a ranking, labelled the way the report is read.
    pub fn from_ranking(ranking: &[RankedEntry], top_n: usize) -> Self {
        Self::new(
            format!("Top {} Words by Frequency", top_n),
            "Words",
            "Frequency",
            ranking
                .iter()
                .map(|entry| (entry.token.clone(), entry.count))
                .collect(),
        )
    }

    /// Draws the chart with the tallest bar spanning `width` cells.
    ///
    /// Every non-zero bar gets at least one cell. Labels are left-aligned in a
    /// column as wide as the longest label.
    pub fn render(&self, width: usize) -> String {
        let mut out = format!("{}\n", self.title);

        if self.bars.is_empty() {
            out.push_str("(no data)\n");
            return out;
        }

        let width = width.max(1);
        let label_width = self
            .bars
            .iter()
            .map(|(label, _)| label.chars().count())
            .chain(std::iter::once(self.x_label.chars().count()))
            .max()
            .unwrap_or(0);
        let tallest = self.bars.iter().map(|(_, height)| *height).max().unwrap_or(0);

        out.push_str(&format!(
            "{:<label_width$} | {}\n",
            self.x_label, self.y_label
        ));

        for (label, height) in &self.bars {
            let cells = scaled(*height, tallest, width);
            out.push_str(&format!(
                "{:<label_width$} | {} {}\n",
                label,
                BAR.to_string().repeat(cells),
                height
            ));
        }
        out
    }
}

fn scaled(height: u64, tallest: u64, width: usize) -> usize {
    if height == 0 || tallest == 0 {
        return 0;
    }
    let cells = (height as u128 * width as u128 / tallest as u128) as usize;
    cells.max(1)
}
