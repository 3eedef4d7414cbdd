use crate::entities::{Solution, StageTable};
use crate::solver::StageOrder;

/// Walks the stages forward from a given first-stage count, reading each stage's optimal count
/// from the table at the residual capacity left by the stages before it.
pub fn reconstruct(order: &StageOrder, table: &StageTable, first_count: usize) -> Solution {
    let first = order.first();
    let mut solution = Solution::new();
    let mut residual = table.capacity() - first.weight * first_count;
    solution.set_count(first.id, first_count);

    for stage in order.forward() {
        let count = table
            .cell(stage.id, residual)
            .map_or(0, |cell| cell.optimal_count);
        solution.set_count(stage.id, count);
        residual -= stage.weight * count;
    }

    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ItemType, LoadInstance};
    use crate::solver::backward::backward_pass;
    use crate::util::StageOrdering;

    #[test]
    fn reconstructs_every_stage() {
        let items = vec![
            ItemType::new(1, 2, 4.0),
            ItemType::new(2, 8, 10.0),
            ItemType::new(3, 3, 6.0),
            ItemType::new(4, 4, 8.0),
        ];
        let instance = LoadInstance::new(10, items).unwrap();
        let order = StageOrder::new(&instance, StageOrdering::DescendingId);
        let table = backward_pass(&order, instance.capacity());

        let solution = reconstruct(&order, &table, 1);
        let expected: Solution = [(1, 1), (2, 0), (3, 0), (4, 2)].into_iter().collect();
        assert_eq!(solution, expected);
        assert_eq!(solution.total_weight(&instance), 10);
        assert_eq!(solution.total_value(&instance), 20.0);

        let solution = reconstruct(&order, &table, 5);
        let expected: Solution = [(1, 5), (2, 0), (3, 0), (4, 0)].into_iter().collect();
        assert_eq!(solution, expected);
    }
}
