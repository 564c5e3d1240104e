//! 정확도 검증 하니스
//!
//! 입력 격자에서 [-8, 0]을 균일 샘플링하고 f64 exp와 비교해
//! 제곱 오차 평균의 95% 신뢰 상한이 예산 안에 드는지 판정한다.
//! 평가기는 입력/출력 계약만으로 사용한다.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::core::evaluator::ExpEvaluator;
use crate::core::fixed::{FixedFormat, Q4_12};

/// 정규 근사 단측 95% 신뢰 계수
const CONFIDENCE_Z: f64 = 1.96;

/// 끝점 강제 포함 주기 (n & MASK == 0 → -8, == 1 → 0)
const ENDPOINT_MASK: usize = 0x3FFF;

/// 새니티 검사 입력점
pub const SANITY_POINTS: [f64; 6] = [-8.0, -4.0, -1.0, -0.5, -0.04675, 0.0];

/// 툴체인과 무관하게 재현 가능한 xorshift32 RNG
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub const DEFAULT_SEED: u32 = 0x1234_5678;

    /// 시드 0은 고정점이므로 기본 시드로 바꾼다
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { Self::DEFAULT_SEED } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// [0, 1) 균일, 24비트 분해능
    pub fn next_unit(&mut self) -> f64 {
        (self.next_u32() & 0xFF_FFFF) as f64 / (1u32 << 24) as f64
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

/// 검증 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// 샘플 수
    pub samples: usize,
    /// RNG 시드
    pub seed: u32,
    /// MSE 예산
    pub mse_limit: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            samples: 200_000,
            seed: Xorshift32::DEFAULT_SEED,
            mse_limit: 2.4e-11,
        }
    }
}

/// 검증 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    pub samples: usize,
    pub mse: f64,
    /// 제곱 오차의 표본 분산
    pub variance: f64,
    pub ci_low: f64,
    pub ci_high: f64,
    pub mse_limit: f64,
}

impl AccuracyReport {
    /// 신뢰 상한이 예산보다 작으면 통과
    pub fn passed(&self) -> bool {
        self.ci_high < self.mse_limit
    }

    pub fn report(&self) {
        println!("=== exp 평가기 검증 ===");
        println!("샘플 수       : {}", self.samples);
        println!("입력 양자화   : {:.12e} (2^-{})", 1.0 / (1u32 << Q4_12::FRAC_BITS) as f64, Q4_12::FRAC_BITS);
        println!("MSE           : {:.16e}", self.mse);
        println!("95% CI (근사) : [{:.16e}, {:.16e}]", self.ci_low, self.ci_high);
        println!("MSE 예산      : {:.16e}", self.mse_limit);
        if self.passed() {
            println!("✅ 통과: CI 상한 < 예산");
        } else {
            println!("❌ 실패: CI 상한 >= 예산");
        }
    }
}

/// [-8, 0]으로 포화한 뒤 가장 가까운 2^-12 격자점으로 양자화
pub fn quantize_to_grid(value: f64) -> Q4_12 {
    let clamped = value.clamp(-8.0, 0.0);
    Q4_12::quantize(clamped).clamp(Q4_12::DOMAIN_MIN, Q4_12::ZERO)
}

/// 샘플 입력 생성. 끝점 두 개를 주기적으로 강제 포함한다.
/// RNG는 끝점이 아닌 샘플에서만 전진한다.
pub fn sample_inputs(config: &ValidationConfig) -> Vec<Q4_12> {
    let mut rng = Xorshift32::new(config.seed);
    (0..config.samples)
        .map(|n| {
            let x = match n & ENDPOINT_MASK {
                0 => -8.0,
                1 => 0.0,
                _ => -8.0 + 8.0 * rng.next_unit(),
            };
            quantize_to_grid(x)
        })
        .collect()
}

/// 평가기를 블랙박스로 검증
pub fn run_accuracy_check(evaluator: &ExpEvaluator, config: &ValidationConfig) -> Result<AccuracyReport> {
    if config.samples == 0 {
        bail!("검증 샘플 수는 0보다 커야 함");
    }

    let inputs = sample_inputs(config);
    let outputs = evaluator.evaluate_batch(&inputs);

    // 합산 순서를 고정하기 위해 누적은 순차로
    let mut sum_se = 0.0f64;
    let mut sum_se2 = 0.0f64;
    for (x, y) in inputs.iter().zip(outputs.iter()) {
        let err = y.to_f64() - x.to_f64().exp();
        let se = err * err;
        sum_se += se;
        sum_se2 += se * se;
    }

    let n = config.samples as f64;
    let mse = sum_se / n;
    let variance = (sum_se2 / n - mse * mse).max(0.0);
    let half_width = CONFIDENCE_Z * (variance / n).sqrt();

    let report = AccuracyReport {
        samples: config.samples,
        mse,
        variance,
        ci_low: mse - half_width,
        ci_high: mse + half_width,
        mse_limit: config.mse_limit,
    };

    log::debug!(
        "검증 완료: stages={}, samples={}, mse={:.6e}, ci_high={:.6e}, passed={}",
        evaluator.config().stages,
        report.samples,
        report.mse,
        report.ci_high,
        report.passed()
    );

    Ok(report)
}

/// 새니티 표 한 줄
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SanityRow {
    /// 요청한 입력
    pub x: f64,
    /// 입력 포맷으로 절삭된 실제 입력
    pub quantized: f64,
    pub evaluated: f64,
    /// exp(quantized)
    pub reference: f64,
}

impl SanityRow {
    pub fn error(&self) -> f64 {
        self.evaluated - self.reference
    }
}

/// 고정 입력점에서 평가값과 기준값
pub fn sanity_table(evaluator: &ExpEvaluator) -> Vec<SanityRow> {
    SANITY_POINTS
        .iter()
        .map(|&x| {
            let input = Q4_12::from_f64(x);
            SanityRow {
                x,
                quantized: input.to_f64(),
                evaluated: evaluator.evaluate(input).to_f64(),
                reference: input.to_f64().exp(),
            }
        })
        .collect()
}
