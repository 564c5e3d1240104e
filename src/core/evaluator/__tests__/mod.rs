pub mod guard_test;
pub mod exp_evaluator_test;
