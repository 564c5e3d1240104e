//! # exp 평가기 단위테스트

use crate::core::evaluator::{below_domain, evaluate, evaluate_f64, ExpEvaluator};
use crate::core::fixed::{FixedFormat, Q4_12, UQ1_23};
use crate::core::systems::CordicConfiguration;
use approx::assert_abs_diff_eq;

#[test]
fn 알려진_값_테스트() {
    let cases = [
        (-1.0, 0.367_879_441_171_442_3),
        (-0.5, 0.606_530_659_712_633_4),
        (-4.0, 0.018_315_638_888_734_18),
        (-8.0, 0.000_335_462_627_902_511_8),
    ];

    for (x, expected) in cases {
        let y = evaluate(Q4_12::from_f64(x)).to_f64();
        println!("exp({:>5}) = {:.10} (기준 {:.10})", x, y, expected);
        assert_abs_diff_eq!(y, expected, epsilon = 3e-5);
    }
}

#[test]
fn 영점_단위값_테스트() {
    let one = evaluate(Q4_12::ZERO);
    // 절삭된 게인 역수로 raw 8_388_619 (1.0 + 11 ULP). 허용 오차는
    // 입력 격자 간격 2^-12 기준이며 출력 ULP 단위가 아니다.
    assert_eq!(one.to_raw(), 8_388_619);
    assert_abs_diff_eq!(one.to_f64(), 1.0, epsilon = 2e-6);
    assert!(one <= UQ1_23::MAX);
}

#[test]
fn 양수_입력_포화_테스트() {
    let at_zero = evaluate(Q4_12::ZERO);
    for raw in [1i16, 2048, 4096, i16::MAX] {
        assert_eq!(evaluate(Q4_12::from_raw(raw)), at_zero, "x_raw={}", raw);
    }
    assert_eq!(evaluate_f64(3.5), at_zero.to_f64());
}

#[test]
fn 정의역_하한_미만_포화_테스트() {
    assert_eq!(evaluate_f64(-8.0001), 0.0);
    assert_eq!(evaluate_f64(-100.0), 0.0);
    assert_eq!(evaluate_f64(f64::NEG_INFINITY), 0.0);
    assert_eq!(evaluate_f64(f64::NAN), 0.0);
    // -8 자체는 정의역 안
    assert!(evaluate_f64(-8.0) > 0.0);
}

#[test]
fn 실수_입력_경로_테스트() {
    let evaluator = ExpEvaluator::default();

    // 양자화가 -8로 끌어올리기 전에 0으로 처리
    for x in [-9.0, -8.5, -8.0001, f64::NAN, f64::NEG_INFINITY] {
        assert!(below_domain(x), "x={}", x);
        assert_eq!(evaluator.evaluate_real(x), UQ1_23::ZERO, "x={}", x);
    }

    assert!(!below_domain(-8.0));
    assert_eq!(evaluator.evaluate_real(-8.0), evaluator.evaluate(Q4_12::DOMAIN_MIN));
    assert_eq!(evaluator.evaluate_real(-1.0), evaluator.evaluate(Q4_12::from_raw(-4096)));
    assert_eq!(evaluator.evaluate_real(-1.0).to_f64(), evaluate_f64(-1.0));
}

#[test]
fn 결정성_테스트() {
    let evaluator = ExpEvaluator::default();
    for raw in (-32768i32..=0).step_by(97) {
        let x = Q4_12::from_raw(raw as i16);
        assert_eq!(evaluator.evaluate(x), evaluator.evaluate(x));
        assert_eq!(evaluator.evaluate(x), evaluate(x));
    }
}

#[test]
fn 배치_평가_일치_테스트() {
    let evaluator = ExpEvaluator::default();
    let inputs: Vec<Q4_12> = (-32768i32..=0).step_by(13).map(|r| Q4_12::from_raw(r as i16)).collect();

    let batch = evaluator.evaluate_batch(&inputs);
    assert_eq!(batch.len(), inputs.len());
    for (x, y) in inputs.iter().zip(batch.iter()) {
        assert_eq!(*y, evaluator.evaluate(*x));
    }
}

#[test]
fn 전체_격자_단조성_테스트() {
    let evaluator = ExpEvaluator::default();
    let mut prev = UQ1_23::ZERO;
    let mut breaks = 0usize;
    let mut total = 0usize;

    for raw in Q4_12::DOMAIN_MIN.to_raw()..=0 {
        let y = evaluator.evaluate(Q4_12::from_raw(raw));
        if y < prev {
            breaks += 1;
        }
        prev = y;
        total += 1;
    }

    println!("단조성 위반: {}/{}", breaks, total);
    assert!(breaks * 1000 <= total, "단조성 위반이 너무 많음: {}/{}", breaks, total);
}

#[test]
fn 출력_범위_테스트() {
    let evaluator = ExpEvaluator::default();
    for raw in Q4_12::DOMAIN_MIN.to_raw()..=0 {
        let y = evaluator.evaluate(Q4_12::from_raw(raw));
        assert!(y > UQ1_23::ZERO, "x_raw={}에서 0 출력", raw);
        assert!(y.to_f64() < 1.0 + 1e-5, "x_raw={}에서 {} 출력", raw, y.to_f64());
    }
}

#[test]
fn 구성_접근_테스트() {
    let config = CordicConfiguration::derived(20);
    let evaluator = ExpEvaluator::new(config.clone()).expect("유도 구성은 유효");
    assert_eq!(evaluator.config(), &config);
    assert_eq!(evaluator.cordic().stages(), 20);
    assert_eq!(evaluator.cordic().pseudo_rotations(), 22);

    let invalid = CordicConfiguration {
        gain_inverse: f64::NAN,
        ..CordicConfiguration::default()
    };
    assert!(ExpEvaluator::new(invalid).is_err());
}
