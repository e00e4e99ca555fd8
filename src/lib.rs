// src/lib.rs

pub mod core;
pub mod dictionary;
pub mod error;
pub mod logging;

pub use crate::core::canonical::{canonicalize, is_valid};
pub use crate::core::index::AnagramIndex;
pub use crate::core::shared::SharedIndex;
pub use crate::core::solver::{Solver, SolverOptions};
pub use crate::core::types::{CanonicalKey, LoadReport, Solution};
pub use crate::error::AnagramError;
