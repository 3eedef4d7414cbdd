use crate::entities::{ItemType, LoadInstance};
use crate::util::StageOrdering;
use itertools::Itertools;

/// Explicit assignment of item types to stages.
///
/// Stages are stored in backward-pass order: the last stage comes first and the designated first
/// stage comes last. [`StageOrder::backward`] and [`StageOrder::forward`] are mirrors of each other.
#[derive(Clone, Debug, PartialEq)]
pub struct StageOrder {
    stages: Vec<ItemType>,
}

impl StageOrder {
    pub fn new(instance: &LoadInstance, ordering: StageOrdering) -> Self {
        let stages = match ordering {
            StageOrdering::DescendingId => instance
                .items()
                .iter()
                .copied()
                .sorted_by(|a, b| b.id.cmp(&a.id))
                .collect_vec(),
            StageOrdering::AscendingId => instance
                .items()
                .iter()
                .copied()
                .sorted_by_key(|i| i.id)
                .collect_vec(),
        };
        Self { stages }
    }

    pub fn n_stages(&self) -> usize {
        self.stages.len()
    }

    /// All stages except the first, in processing order of the backward pass
    pub fn backward(&self) -> impl DoubleEndedIterator<Item = &ItemType> {
        self.stages[..self.stages.len() - 1].iter()
    }

    /// The stage evaluated against the full capacity
    pub fn first(&self) -> &ItemType {
        &self.stages[self.stages.len() - 1]
    }

    /// Stages second through last, the reverse of [`StageOrder::backward`]
    pub fn forward(&self) -> impl Iterator<Item = &ItemType> {
        self.backward().rev()
    }

    /// The stage whose table the stage `id` builds upon, `None` for the last stage
    pub fn next_of(&self, id: usize) -> Option<usize> {
        let pos = self.stages.iter().position(|s| s.id == id)?;
        match pos {
            0 => None,
            _ => Some(self.stages[pos - 1].id),
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.stages.iter().map(|s| s.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> LoadInstance {
        let items = vec![
            ItemType::new(1, 2, 4.0),
            ItemType::new(2, 8, 10.0),
            ItemType::new(3, 3, 6.0),
            ItemType::new(4, 4, 8.0),
        ];
        LoadInstance::new(10, items).unwrap()
    }

    #[test]
    fn descending_order_matches_stage_labels() {
        let order = StageOrder::new(&instance(), StageOrdering::DescendingId);
        assert_eq!(order.backward().map(|s| s.id).collect_vec(), vec![4, 3, 2]);
        assert_eq!(order.first().id, 1);
        assert_eq!(order.forward().map(|s| s.id).collect_vec(), vec![2, 3, 4]);
        assert_eq!(order.next_of(1), Some(2));
        assert_eq!(order.next_of(3), Some(4));
        assert_eq!(order.next_of(4), None);
        assert_eq!(order.next_of(42), None);
    }

    #[test]
    fn ascending_order_is_mirrored() {
        let order = StageOrder::new(&instance(), StageOrdering::AscendingId);
        assert_eq!(order.backward().map(|s| s.id).collect_vec(), vec![1, 2, 3]);
        assert_eq!(order.first().id, 4);
        assert_eq!(order.forward().map(|s| s.id).collect_vec(), vec![3, 2, 1]);
        assert_eq!(order.next_of(4), Some(3));
    }

    #[test]
    fn forward_is_reverse_of_backward() {
        let order = StageOrder::new(&instance(), StageOrdering::DescendingId);
        let mut backward = order.backward().map(|s| s.id).collect_vec();
        backward.reverse();
        assert_eq!(backward, order.forward().map(|s| s.id).collect_vec());
    }

    #[test]
    fn single_stage_has_no_backward_stages() {
        let instance = LoadInstance::new(10, vec![ItemType::new(1, 3, 5.0)]).unwrap();
        let order = StageOrder::new(&instance, StageOrdering::DescendingId);
        assert_eq!(order.backward().count(), 0);
        assert_eq!(order.forward().count(), 0);
        assert_eq!(order.first().id, 1);
        assert_eq!(order.next_of(1), None);
    }
}
