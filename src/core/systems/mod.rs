//! # 시스템 구성 모듈

pub mod config;

pub use config::{CordicConfiguration, MAX_GAIN_INVERSE};

#[cfg(test)]
pub mod __tests__;
