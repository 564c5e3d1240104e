//! 쌍곡 CORDIC 모듈
//!
//! 상수 테이블(리프) → 고정소수점 코어, 그리고 f64 기준 모델

pub mod tables;
pub mod hyperbolic;
pub mod reference;

#[cfg(test)]
mod __tests__;

pub use tables::{
    AtanhTable, ATANH_POW2_NEG, DEFAULT_GAIN_INVERSE, DEFAULT_REPEAT_INDICES, DEFAULT_STAGES,
    MAX_STAGES, derive_atanh_table, derive_gain_inverse, derive_repeat_schedule,
};
pub use hyperbolic::{CordicState, HyperbolicCordic};
pub use reference::{exp_cordic_f64, hyperbolic_rotate_f64};
