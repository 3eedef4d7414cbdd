use float_cmp::{ApproxEq, F64Margin};
use std::cmp::Ordering;

/// Stage values are sums of `count * value` products, so two counts reaching the same total can
/// still differ in their last bits. The margin is purely relative: values far below 1.0 are
/// real values, not noise around 0.
pub const STAGE_VALUE_MARGIN: F64Margin = F64Margin {
    epsilon: 0.0,
    ulps: 4,
};

/// Accumulated value of a stage, compared within [`STAGE_VALUE_MARGIN`].
#[derive(Debug, Clone, Copy)]
pub struct StageValue(pub f64);

impl StageValue {
    /// Both values are the same up to rounding
    pub fn ties(self, other: StageValue) -> bool {
        self.0.approx_eq(other.0, STAGE_VALUE_MARGIN)
    }

    /// Strictly larger and outside the tie margin
    pub fn beats(self, other: StageValue) -> bool {
        self.0 > other.0 && !self.ties(other)
    }
}

impl PartialEq for StageValue {
    fn eq(&self, other: &Self) -> bool {
        self.ties(*other)
    }
}

impl PartialOrd for StageValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.ties(*other) {
            return Some(Ordering::Equal);
        }
        self.0.partial_cmp(&other.0)
    }
}
