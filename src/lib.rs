pub mod cases;
pub mod eval;
pub mod ops;
pub mod table;

pub use cases::{evaluate_all, ResultRow, TEST_CASES};
pub use eval::{evaluate, evaluate_traced, Evaluation};
