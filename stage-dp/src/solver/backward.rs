use crate::entities::{ItemType, StageCell, StageTable};
use crate::solver::StageOrder;
use crate::util::StageValue;
use log::{debug, trace};
use std::collections::BTreeMap;

/// Value contributed by the stages after the current one, 0 when there are none.
pub fn next_value(next_column: Option<&[StageCell]>, residual: usize) -> f64 {
    next_column.map_or(0.0, |column| column[residual].best_value)
}

/// Builds the [`StageTable`] for all stages except the first, last stage first.
///
/// Each column only depends on the column built in the previous iteration,
/// which is handed down explicitly.
pub fn backward_pass(order: &StageOrder, capacity: usize) -> StageTable {
    let mut columns: BTreeMap<usize, Vec<StageCell>> = BTreeMap::new();
    let mut next_stage: Option<usize> = None;

    for stage in order.backward() {
        debug_assert_eq!(next_stage, order.next_of(stage.id));
        let next_column = next_stage.map(|id| columns[&id].as_slice());
        let column = stage_column(stage, capacity, next_column);
        debug!(
            "[DP] stage {} (w: {}, v: {}) done, W({}) = {}",
            stage.id, stage.weight, stage.value, capacity, column[capacity].best_value
        );
        columns.insert(stage.id, column);
        next_stage = Some(stage.id);
    }

    StageTable::new(capacity, columns)
}

/// Computes the cells of a single stage for every residual capacity `0..=capacity`.
pub fn stage_column(
    stage: &ItemType,
    capacity: usize,
    next_column: Option<&[StageCell]>,
) -> Vec<StageCell> {
    (0..=capacity)
        .map(|residual| best_cell(stage, residual, next_column))
        .collect()
}

/// Smallest count of `stage` that maximizes the value at `residual` capacity.
/// Later counts only replace the incumbent when they are strictly better.
fn best_cell(stage: &ItemType, residual: usize, next_column: Option<&[StageCell]>) -> StageCell {
    // zero units is always possible
    let mut best = StageCell {
        best_value: next_value(next_column, residual),
        optimal_count: 0,
    };
    for count in 1..=stage.max_count(residual) {
        let value =
            stage.value * count as f64 + next_value(next_column, residual - stage.weight * count);
        if StageValue(value).beats(StageValue(best.best_value)) {
            best = StageCell {
                best_value: value,
                optimal_count: count,
            };
        }
    }
    trace!(
        "[DP] W{}({}) = {} with x = {}",
        stage.id, residual, best.best_value, best.optimal_count
    );
    best
}
