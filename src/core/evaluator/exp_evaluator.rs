//! exp(x) 평가기, x ∈ [-8, 0]
//!
//! 입력 가드 → 범위 축소 → 쌍곡 CORDIC → 2^k 재구성.
//! 모든 단계는 순수 함수이며 공유 데이터는 읽기 전용 테이블뿐이다.

use anyhow::Result;
use once_cell::sync::Lazy;
use rayon::prelude::*;

use super::guard::{guard, GuardOutcome};
use crate::core::cordic::HyperbolicCordic;
use crate::core::fixed::{FixedFormat, Q4_12, UQ1_23};
use crate::core::reduction::reduce;
use crate::core::systems::CordicConfiguration;

/// 기본 구성의 프로세스 전역 평가기
static DEFAULT_EVALUATOR: Lazy<ExpEvaluator> = Lazy::new(ExpEvaluator::default);

/// 기본 구성으로 exp(x)
pub fn evaluate(x: Q4_12) -> UQ1_23 {
    DEFAULT_EVALUATOR.evaluate(x)
}

/// 실수 입력을 기본 구성으로 평가 (`ExpEvaluator::evaluate_real`)
pub fn evaluate_f64(x: f64) -> f64 {
    DEFAULT_EVALUATOR.evaluate_real(x).to_f64()
}

/// 양자화 전에 걸러야 하는 실수 입력 (NaN, x < -8)
pub fn below_domain(x: f64) -> bool {
    x.is_nan() || x < Q4_12::DOMAIN_MIN.to_f64()
}

/// 구성별 평가기
#[derive(Debug, Clone)]
pub struct ExpEvaluator {
    config: CordicConfiguration,
    cordic: HyperbolicCordic,
}

impl ExpEvaluator {
    pub fn new(config: CordicConfiguration) -> Result<Self> {
        let cordic = HyperbolicCordic::new(&config)?;
        Ok(Self { config, cordic })
    }

    pub fn config(&self) -> &CordicConfiguration {
        &self.config
    }

    pub fn cordic(&self) -> &HyperbolicCordic {
        &self.cordic
    }

    pub fn evaluate(&self, x: Q4_12) -> UQ1_23 {
        let x = match guard(x) {
            GuardOutcome::Saturated(out) => return out,
            GuardOutcome::Proceed(x) => x,
        };

        let reduced = reduce(x);
        let exp_r = self.cordic.exp_small(reduced.r.to_cordic());

        // 현재 정의역에서는 k ≤ 0이지만 부호로 분기한다
        exp_r.scale_pow2(reduced.k)
    }

    /// 실수 입력 평가. 가장 가까운 격자점으로 양자화한다.
    ///
    /// 양자화는 -8 아래를 -8로 포화시키므로 x < -8 (그리고 NaN)은
    /// 양자화 전에 0으로 처리한다.
    pub fn evaluate_real(&self, x: f64) -> UQ1_23 {
        if below_domain(x) {
            return UQ1_23::ZERO;
        }
        self.evaluate(Q4_12::quantize(x))
    }

    /// 독립 입력들을 병렬로 평가. 순서는 입력과 같다.
    pub fn evaluate_batch(&self, xs: &[Q4_12]) -> Vec<UQ1_23> {
        xs.par_iter().map(|&x| self.evaluate(x)).collect()
    }
}

impl Default for ExpEvaluator {
    fn default() -> Self {
        let config = CordicConfiguration::default();
        let cordic = HyperbolicCordic::new(&config)
            .unwrap_or_else(|e| unreachable!("기본 CORDIC 구성이 유효하지 않음: {e}"));
        Self { config, cordic }
    }
}
