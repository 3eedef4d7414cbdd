//! Checks on intermediate and final results of the solver, used in `debug_assert!`s and tests.

use crate::entities::{ItemType, LoadResult, Solution, StageTable};
use crate::solver::StageOrder;
use crate::util::StageValue;

/// The solution stays within the capacity.
pub fn solution_is_feasible(solution: &Solution, items: &[ItemType], capacity: usize) -> bool {
    solution.total_weight_of(items) <= capacity
}

/// The solution reaches `value`.
pub fn solution_attains(solution: &Solution, items: &[ItemType], value: f64) -> bool {
    StageValue(solution.total_value_of(items)).ties(StageValue(value))
}

/// Every solution is feasible, attains the maximum value and assigns a count to every item type.
pub fn result_is_consistent(result: &LoadResult) -> bool {
    !result.solutions.is_empty()
        && result.solutions.iter().all(|s| {
            solution_is_feasible(s, &result.items, result.capacity)
                && solution_attains(s, &result.items, result.max_value)
                && s.counts().count() == result.items.len()
        })
}

/// Every stage except the first has a column covering residual capacities `0..=capacity`.
pub fn stage_table_is_complete(table: &StageTable, order: &StageOrder) -> bool {
    table.n_stages() == order.n_stages() - 1
        && order.backward().all(|stage| {
            table
                .column(stage.id)
                .is_some_and(|c| c.len() == table.capacity() + 1)
        })
}
