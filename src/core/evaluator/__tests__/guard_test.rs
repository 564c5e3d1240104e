//! # 입력 가드 단위테스트

use crate::core::evaluator::{guard, GuardOutcome};
use crate::core::fixed::Q4_12;

#[test]
fn 정의역_하한_테스트() {
    // Q4.12의 최솟값이 곧 -8이므로 포맷 안의 입력은 모두 통과
    assert_eq!(Q4_12::MIN, Q4_12::DOMAIN_MIN);
    assert_eq!(guard(Q4_12::MIN), GuardOutcome::Proceed(Q4_12::DOMAIN_MIN));
    assert!(!matches!(guard(Q4_12::MIN), GuardOutcome::Saturated(_)));
}

#[test]
fn 양수_입력_영점_처리_테스트() {
    assert_eq!(guard(Q4_12::from_f64(0.5)), GuardOutcome::Proceed(Q4_12::ZERO));
    assert_eq!(guard(Q4_12::MAX), GuardOutcome::Proceed(Q4_12::ZERO));
    assert_eq!(guard(Q4_12::from_raw(1)), GuardOutcome::Proceed(Q4_12::ZERO));
}

#[test]
fn 정의역_내부_통과_테스트() {
    for raw in [-32768i16, -4096, -1, 0] {
        let x = Q4_12::from_raw(raw);
        assert_eq!(guard(x), GuardOutcome::Proceed(x));
    }
}
