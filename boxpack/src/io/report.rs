use std::fmt::{Display, Formatter};

use crate::entities::Bin;

/// Separator written after every rendered bin
pub const BIN_SEPARATOR: char = '/';

/// Textual report of a sequence of bins:
/// `Result: 91/82/.../` followed by `Nb boxes: N`, or `No boxes` if no bin has any content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// Concatenation of all non-empty rendered bins, each followed by [`BIN_SEPARATOR`]
    pub result: String,
    pub n_bins: usize,
}

impl Report {
    pub fn new(bins: &[Bin]) -> Self {
        Report {
            result: render_bins(bins),
            n_bins: bins.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }
}

/// Renders every non-empty bin followed by [`BIN_SEPARATOR`]
pub fn render_bins(bins: &[Bin]) -> String {
    let mut result = String::new();
    for rendered in bins.iter().map(|b| b.render()).filter(|r| !r.is_empty()) {
        result.push_str(&rendered);
        result.push(BIN_SEPARATOR);
    }
    result
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.is_empty() {
            true => write!(f, "No boxes"),
            false => write!(f, "Result: {}\nNb boxes: {}", self.result, self.n_bins),
        }
    }
}
