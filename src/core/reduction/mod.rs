//! 범위 축소 모듈

pub mod range_reducer;


pub use range_reducer::{reduce, ReducedArgument, INV_LN2, LN2};
