//! Types library for the live match scoreboard
//!
//! Shared type definitions used by the scoreboard service and its callers.
//!
//! # Modules
//! - `ids`: Match identifiers and the process-wide id generator
//! - `fixture`: The `Match` entity and its owned snapshot
//! - `requests`: Caller-side request shapes with possibly absent arguments
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod fixture;
pub mod requests;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::fixture::*;
    pub use crate::requests::*;
    pub use crate::errors::*;
}
