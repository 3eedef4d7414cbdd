mod backward;
mod first_stage;
mod reconstruct;
mod stage_order;

#[doc(inline)]
pub use backward::{backward_pass, next_value, stage_column};
#[doc(inline)]
pub use first_stage::{FirstStageTies, first_stage_ties};
#[doc(inline)]
pub use reconstruct::reconstruct;
#[doc(inline)]
pub use stage_order::StageOrder;

use crate::entities::{ItemType, LoadInstance, LoadResult};
use crate::error::LoadError;
use crate::util::SolverConfig;
use crate::util::assertions;
use itertools::Itertools;
use log::debug;

/// Solves a validated instance.
///
/// Builds the stage table from the last stage toward the first, collects every tied count of the
/// first stage and reconstructs one [`Solution`](crate::entities::Solution) per tie.
/// Ties at the other stages are collapsed to their smallest count.
pub fn solve(instance: &LoadInstance, config: SolverConfig) -> LoadResult {
    let order = StageOrder::new(instance, config.stage_ordering);
    debug!(
        "[DP] solving Q = {} over stages [{}] ({:?})",
        instance.capacity(),
        order.ids().join(", "),
        config.stage_ordering
    );

    let table = backward_pass(&order, instance.capacity());
    debug_assert!(assertions::stage_table_is_complete(&table, &order));

    let ties = first_stage_ties(&order, &table);
    let solutions = ties
        .counts
        .iter()
        .map(|&count| reconstruct(&order, &table, count))
        .collect_vec();

    let result = LoadResult {
        max_value: ties.max_value,
        solutions,
        capacity: instance.capacity(),
        items: instance.items().to_vec(),
    };
    debug_assert!(assertions::result_is_consistent(&result));

    result
}

/// Validates `capacity` and `items`, then solves with the default [`SolverConfig`].
pub fn solve_items(capacity: i64, items: &[ItemType]) -> Result<LoadResult, LoadError> {
    let instance = LoadInstance::new(capacity, items.to_vec())?;
    Ok(solve(&instance, SolverConfig::default()))
}
