//! 최상위 평가기 모듈

pub mod guard;
pub mod exp_evaluator;

#[cfg(test)]
mod __tests__;

pub use guard::{guard, GuardOutcome};
pub use exp_evaluator::{below_domain, evaluate, evaluate_f64, ExpEvaluator};
