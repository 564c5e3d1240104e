//! # 쌍곡 CORDIC 지수 함수 코어
//!
//! 상수 테이블 → CORDIC 코어 → 범위 축소 → 입력 가드/최상위 진입점

pub mod fixed;
pub mod cordic;
pub mod reduction;
pub mod evaluator;
pub mod systems;

// 주요 타입들 재수출
pub use fixed::*;
pub use cordic::{HyperbolicCordic, AtanhTable};
pub use reduction::{reduce, ReducedArgument};
pub use evaluator::*;
pub use systems::CordicConfiguration;
