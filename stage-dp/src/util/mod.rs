/// Set of functions used to assure the correctness of the library.
pub mod assertions;

mod config;
mod stage_value;

#[doc(inline)]
pub use config::SolverConfig;
#[doc(inline)]
pub use config::StageOrdering;
#[doc(inline)]
pub use stage_value::STAGE_VALUE_MARGIN;
#[doc(inline)]
pub use stage_value::StageValue;
