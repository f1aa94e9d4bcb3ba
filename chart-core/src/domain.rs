// chart_core/src/domain.rs
use std::fmt;

use serde::Serialize;

pub const MIN_NUMBER: i64 = 1;
pub const MAX_NUMBER: i64 = 10;
/// Rows per chart (k = 1..=10).
pub const CHART_LEN: usize = MAX_NUMBER as usize;

fn in_range(n: i64) -> bool {
    (MIN_NUMBER..=MAX_NUMBER).contains(&n)
}

/// Multiplicand identifying a chart, always within 1..=10.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BaseNumber(u8);

impl BaseNumber {
    pub fn new(n: i64) -> Option<Self> {
        in_range(n).then(|| Self(n as u8))
    }

    pub fn get(self) -> i64 {
        i64::from(self.0)
    }
}

impl fmt::Display for BaseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based row within a chart, always within 1..=10.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineIndex(u8);

impl LineIndex {
    pub fn new(n: i64) -> Option<Self> {
        in_range(n).then(|| Self(n as u8))
    }

    pub fn get(self) -> i64 {
        i64::from(self.0)
    }

    /// Zero-based offset into a chart's lines.
    pub fn offset(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl fmt::Display for LineIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ten lines of one multiplication table, k = 1..=10 in order.
///
/// Only [`crate::model`] builds charts, so `lines.len() == CHART_LEN` always holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Chart {
    base: BaseNumber,
    lines: Vec<String>,
}

impl Chart {
    pub(crate) fn from_parts(base: BaseNumber, lines: Vec<String>) -> Self {
        debug_assert_eq!(lines.len(), CHART_LEN);
        Self { base, lines }
    }

    pub fn base(&self) -> BaseNumber {
        self.base
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
