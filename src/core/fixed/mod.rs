//! 고정소수점 포맷 모듈

pub mod formats;


pub use formats::{FixedFormat, Q3_29, Q4_12, Q8_16, UQ1_23};
