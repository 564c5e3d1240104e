//! 입력 가드: 정의역 [-8, 0]으로 포화

use crate::core::fixed::{Q4_12, UQ1_23};

/// 가드 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// x < -8: 이후 단계 없이 이 값을 그대로 반환
    Saturated(UQ1_23),
    /// [-8, 0]으로 잘린 입력
    Proceed(Q4_12),
}

/// x < -8이면 출력 0, x > 0이면 0으로 취급, 그 외는 그대로
#[inline]
pub fn guard(x: Q4_12) -> GuardOutcome {
    if x < Q4_12::DOMAIN_MIN {
        GuardOutcome::Saturated(UQ1_23::ZERO)
    } else if x > Q4_12::ZERO {
        GuardOutcome::Proceed(Q4_12::ZERO)
    } else {
        GuardOutcome::Proceed(x)
    }
}
