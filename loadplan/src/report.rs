use itertools::Itertools;
use log::info;
use stage_dp::entities::LoadResult;
use thousands::Separable;

/// Logs the maximum value and every optimal solution with its total weight.
pub fn log_result(result: &LoadResult) {
    info!(
        "[LP] capacity: {}, item types (weight / value): {}",
        result.capacity,
        result
            .items
            .iter()
            .map(|i| format!("{}: {} / {}", i.id, i.weight, i.value))
            .join(", ")
    );
    info!(
        "[LP] maximum value: {}, {} optimal solution(s)",
        result.max_value.separate_with_commas(),
        result.n_solutions()
    );
    for (i, solution) in result.solutions.iter().enumerate() {
        info!(
            "[LP] solution {}: {} (total weight: {})",
            i + 1,
            format_counts(solution.counts()),
            solution.total_weight_of(&result.items)
        );
    }
}

/// Formats counts as `x1=1, x2=0, ...`
pub fn format_counts(counts: impl Iterator<Item = (usize, usize)>) -> String {
    counts.map(|(id, count)| format!("x{id}={count}")).join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_counts_by_id() {
        let counts = vec![(1, 1), (2, 0), (4, 2)];
        assert_eq!(format_counts(counts.into_iter()), "x1=1, x2=0, x4=2");
    }
}
