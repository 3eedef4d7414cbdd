use crate::entities::{LoadResult, Solution};
use crate::io::ext_repr::{ExtLoadResult, ExtSolution};

/// Exports a result out of the library, with the total weight and value of every solution.
pub fn export(result: &LoadResult) -> ExtLoadResult {
    ExtLoadResult {
        capacity: result.capacity,
        max_value: result.max_value,
        solutions: result
            .solutions
            .iter()
            .map(|s| export_solution(s, result))
            .collect(),
    }
}

fn export_solution(solution: &Solution, result: &LoadResult) -> ExtSolution {
    ExtSolution {
        counts: solution
            .counts()
            .map(|(id, count)| (id as u64, count))
            .collect(),
        total_weight: solution.total_weight_of(&result.items),
        total_value: solution.total_value_of(&result.items),
    }
}
