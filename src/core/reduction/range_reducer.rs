//! 범위 축소: x = k·ln2 + r, r ∈ [0, ln2)
//!
//! 나눗셈 없이 1/ln2 곱으로 몫을 구하고, 더 넓은 Q8.16 포맷에서
//! k·ln2를 빼서 상쇄 오차를 막는다.

use once_cell::sync::Lazy;

use crate::core::fixed::{Q4_12, Q8_16};

/// ln2 (Q8.16, 절삭)
pub static LN2: Lazy<Q8_16> = Lazy::new(|| Q8_16::from_f64(std::f64::consts::LN_2));

/// 1/ln2 (Q8.16, 절삭)
pub static INV_LN2: Lazy<Q8_16> = Lazy::new(|| Q8_16::from_f64(std::f64::consts::LOG2_E));

/// 범위 축소 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReducedArgument {
    /// 2의 거듭제곱 지수 (정의역 [-8, 0]에서 -12..=0)
    pub k: i32,
    /// 잔차 (Q8.16), [0, ln2)
    pub r: Q8_16,
}

/// x를 (k, r)로 분해한다
pub fn reduce(x: Q4_12) -> ReducedArgument {
    let ln2 = *LN2;
    let xw = x.widen();

    // q = x / ln2
    let q = xw.mul(*INV_LN2);

    // 0 방향 절삭 후 음수면 한 칸 내려서 floor
    let mut k = q.trunc();
    if Q8_16::from_int(k) > q {
        k -= 1;
    }

    // k·ln2는 k가 정수이므로 raw 곱으로 정확하다
    let mut r = xw.to_raw() - k * ln2.to_raw();

    // 절삭된 1/ln2 때문에 q가 정수 경계를 몇 ULP 넘을 수 있다
    if r < 0 {
        k -= 1;
        r += ln2.to_raw();
    } else if r >= ln2.to_raw() {
        k += 1;
        r -= ln2.to_raw();
    }

    ReducedArgument {
        k,
        r: Q8_16::from_raw(r),
    }
}
