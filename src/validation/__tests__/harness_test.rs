//! # 정확도 하니스 단위테스트

use crate::core::evaluator::ExpEvaluator;
use crate::core::fixed::Q4_12;
use crate::validation::harness::*;

#[test]
fn xorshift32_수열_테스트() {
    let mut rng = Xorshift32::default();
    // 0x12345678에서 한 단계
    let mut x: u32 = 0x1234_5678;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    assert_eq!(rng.next_u32(), x);

    let mut rng = Xorshift32::new(7);
    for _ in 0..1000 {
        let u = rng.next_unit();
        assert!((0.0..1.0).contains(&u));
    }

    // 시드 0은 고정점이므로 기본 시드로 대체
    let mut zero = Xorshift32::new(0);
    assert_ne!(zero.next_u32(), 0);
}

#[test]
fn 격자_양자화_테스트() {
    assert_eq!(quantize_to_grid(0.3), Q4_12::ZERO);
    assert_eq!(quantize_to_grid(-9.0), Q4_12::DOMAIN_MIN);
    assert_eq!(quantize_to_grid(-1.0), Q4_12::from_raw(-4096));
    // 0.5 ULP는 0에서 먼 쪽
    assert_eq!(quantize_to_grid(-0.5 / 4096.0), Q4_12::from_raw(-1));
    assert_eq!(quantize_to_grid(-0.4 / 4096.0), Q4_12::ZERO);
}

#[test]
fn 끝점_강제_포함_테스트() {
    let config = ValidationConfig {
        samples: 0x4000 * 2 + 2,
        ..ValidationConfig::default()
    };
    let inputs = sample_inputs(&config);

    assert_eq!(inputs.len(), config.samples);
    for base in [0usize, 0x4000, 0x8000] {
        assert_eq!(inputs[base], Q4_12::DOMAIN_MIN, "n={}", base);
        assert_eq!(inputs[base + 1], Q4_12::ZERO, "n={}", base + 1);
    }
    assert!(inputs.iter().all(|x| *x >= Q4_12::DOMAIN_MIN && *x <= Q4_12::ZERO));
}

#[test]
fn 샘플_재현성_테스트() {
    let config = ValidationConfig {
        samples: 5000,
        ..ValidationConfig::default()
    };
    assert_eq!(sample_inputs(&config), sample_inputs(&config));

    let other = ValidationConfig { seed: 99, ..config.clone() };
    assert_ne!(sample_inputs(&config), sample_inputs(&other));
}

#[test]
fn 빈_샘플_거부_테스트() {
    let evaluator = ExpEvaluator::default();
    let config = ValidationConfig {
        samples: 0,
        ..ValidationConfig::default()
    };
    assert!(run_accuracy_check(&evaluator, &config).is_err());
}

#[test]
fn 보고서_판정_테스트() {
    let report = AccuracyReport {
        samples: 10,
        mse: 1e-12,
        variance: 0.0,
        ci_low: 1e-12,
        ci_high: 2.4e-11,
        mse_limit: 2.4e-11,
    };
    // 상한이 예산과 같으면 실패
    assert!(!report.passed());

    let passing = AccuracyReport { ci_high: 2.3e-11, ..report };
    assert!(passing.passed());
}

#[test]
fn 새니티_표_테스트() {
    let evaluator = ExpEvaluator::default();
    let rows = sanity_table(&evaluator);

    assert_eq!(rows.len(), SANITY_POINTS.len());
    for row in rows {
        assert!(row.error().abs() < 1e-4, "x={}: 오차 {:.3e}", row.x, row.error());
    }
}
