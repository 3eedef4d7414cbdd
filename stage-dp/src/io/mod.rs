mod export;
mod import;

/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// Exports a result out of the library.
pub use export::export;

/// Imports (and validates) an instance into the library.
pub use import::import;
