//! 쌍곡 CORDIC 기반 고정소수점 지수 함수 라이브러리
//!
//! Q4.12 입력 x ∈ [-8, 0]에 대해 UQ1.23 출력 exp(x) ∈ (0, 1]을
//! 덧셈, 뺄셈, 산술 시프트만으로 계산한다.

pub mod core;
pub mod validation;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 고정소수점 포맷
    FixedFormat, Q3_29, Q4_12, Q8_16, UQ1_23,
    // 평가기
    evaluate, evaluate_f64, ExpEvaluator,
    // 구성
    CordicConfiguration,
};

// 편의 타입 별칭들
pub type ExpInput = Q4_12;
pub type ExpOutput = UQ1_23;
