mod instance;
mod item_type;
mod solution;
mod stage_table;

#[doc(inline)]
pub use instance::LoadInstance;

#[doc(inline)]
pub use instance::MAX_CAPACITY;

#[doc(inline)]
pub use item_type::ItemType;

#[doc(inline)]
pub use solution::LoadResult;

#[doc(inline)]
pub use solution::Solution;

#[doc(inline)]
pub use stage_table::StageCell;

#[doc(inline)]
pub use stage_table::StageTable;
