//! 오프라인 검증 도구
//!
//! 평가기를 입력/출력 계약으로만 사용하는 정확도 하니스와 격자 스윕

pub mod accuracy_utils;
pub mod harness;
pub mod sweep;

#[cfg(test)]
mod __tests__;

pub use accuracy_utils::{mean_squared_error, ErrorMetrics};
pub use harness::{
    quantize_to_grid, run_accuracy_check, sample_inputs, sanity_table, AccuracyReport,
    SanityRow, ValidationConfig, Xorshift32, SANITY_POINTS,
};
pub use sweep::{evaluate_sweep, save_csv, sweep_metrics, write_csv, SweepConfig, SweepRow};
