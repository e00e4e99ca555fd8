pub mod canonical;
pub mod index;
pub mod shared;
pub mod solver;
pub mod types;
