use crate::entities::StageTable;
use crate::solver::StageOrder;
use crate::solver::backward::next_value;
use crate::util::StageValue;
use log::debug;

/// Every count of the first stage that attains the optimal value at full capacity.
#[derive(Clone, Debug, PartialEq)]
pub struct FirstStageTies {
    pub max_value: f64,
    /// Tied counts in ascending order
    pub counts: Vec<usize>,
}

/// Evaluates the first stage against the full capacity, keeping all tied counts.
pub fn first_stage_ties(order: &StageOrder, table: &StageTable) -> FirstStageTies {
    let stage = order.first();
    let capacity = table.capacity();
    let next_column = order.next_of(stage.id).and_then(|id| table.column(id));

    let mut max_value = next_value(next_column, capacity);
    let mut counts = vec![0];

    for count in 1..=stage.max_count(capacity) {
        let value =
            stage.value * count as f64 + next_value(next_column, capacity - stage.weight * count);
        if StageValue(value).beats(StageValue(max_value)) {
            max_value = value;
            counts.clear();
            counts.push(count);
        } else if StageValue(value).ties(StageValue(max_value)) {
            counts.push(count);
        }
    }

    debug!(
        "[DP] first stage {}: W({}) = {}, tied counts: {:?}",
        stage.id, capacity, max_value, counts
    );

    FirstStageTies { max_value, counts }
}
