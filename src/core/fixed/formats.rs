//! 고정소수점 포맷 정의
//!
//! 모든 값은 정수 레지스터 + 암묵적 소수점 위치로 해석된다.
//! 소수 비트를 버릴 때는 항상 -∞ 방향 절삭(floor), 좁힐 때는 포화.

/// 고정소수점 포맷 메타데이터 (전체 폭, 정수 비트(부호 포함), 부호 여부)
pub trait FixedFormat: Copy {
    const TOTAL_BITS: u32;
    const INT_BITS: u32;
    const SIGNED: bool;
    const FRAC_BITS: u32 = Self::TOTAL_BITS - Self::INT_BITS;

    /// 실수값으로 변환 (검증/출력용)
    fn to_f64(self) -> f64;
}

/// 입력 포맷 Q4.12 (16비트, 부호 포함 정수 4비트, 소수 12비트)
///
/// 범위: [-8, 8), 해상도 2^-12. 계약상 의미 있는 구간은 [-8, 0].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Q4_12(i16);

impl Q4_12 {
    pub const ZERO: Self = Self(0);
    pub const MIN: Self = Self(i16::MIN);
    pub const MAX: Self = Self(i16::MAX);
    /// 정의역 하한 -8.0 (포맷 최솟값과 같다)
    pub const DOMAIN_MIN: Self = Self(i16::MIN);

    #[inline(always)]
    pub const fn from_raw(raw: i16) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn to_raw(self) -> i16 {
        self.0
    }

    /// 실수에서 생성 (절삭, 범위 밖은 포화)
    pub fn from_f64(value: f64) -> Self {
        Self(saturate_i64((value * (1 << Self::FRAC_BITS) as f64).floor() as i64, 16) as i16)
    }

    /// 가장 가까운 격자점으로 양자화 (0.5는 0에서 먼 쪽으로)
    pub fn quantize(value: f64) -> Self {
        Self(saturate_i64((value * (1 << Self::FRAC_BITS) as f64).round() as i64, 16) as i16)
    }

    /// 범위 축소 작업 포맷(Q8.16)으로 확장. 손실 없음.
    #[inline(always)]
    pub const fn widen(self) -> Q8_16 {
        Q8_16((self.0 as i32) << (Q8_16::FRAC_BITS - Self::FRAC_BITS))
    }
}

impl FixedFormat for Q4_12 {
    const TOTAL_BITS: u32 = 16;
    const INT_BITS: u32 = 4;
    const SIGNED: bool = true;

    fn to_f64(self) -> f64 {
        self.0 as f64 / (1 << Self::FRAC_BITS) as f64
    }
}

/// 출력 포맷 UQ1.23 (24비트 무부호, 정수 1비트, 소수 23비트)
///
/// 범위: [0, 2). 1.0은 raw `1 << 23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct UQ1_23(u32);

impl UQ1_23 {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << 23);
    pub const MAX: Self = Self((1 << 24) - 1);

    /// raw 값에서 생성. 24비트를 넘으면 MAX로 포화.
    #[inline(always)]
    pub const fn from_raw(raw: u32) -> Self {
        if raw > Self::MAX.0 {
            Self::MAX
        } else {
            Self(raw)
        }
    }

    #[inline(always)]
    pub const fn to_raw(self) -> u32 {
        self.0
    }

    /// 2^k 배 스케일. k < 0이면 오른쪽 시프트(절삭), k > 0이면 포화 왼쪽 시프트.
    pub const fn scale_pow2(self, k: i32) -> Self {
        if k < 0 {
            let shift = k.unsigned_abs();
            if shift >= Self::TOTAL_BITS {
                Self::ZERO
            } else {
                Self(self.0 >> shift)
            }
        } else if k > 0 {
            if self.0 == 0 {
                return self;
            }
            let shift = k as u32;
            if shift >= Self::TOTAL_BITS || self.0 > (Self::MAX.0 >> shift) {
                Self::MAX
            } else {
                Self(self.0 << shift)
            }
        } else {
            self
        }
    }
}

impl FixedFormat for UQ1_23 {
    const TOTAL_BITS: u32 = 24;
    const INT_BITS: u32 = 1;
    const SIGNED: bool = false;

    fn to_f64(self) -> f64 {
        self.0 as f64 / (1u32 << Self::FRAC_BITS) as f64
    }
}

/// CORDIC 작업 포맷 Q3.29 (32비트, 부호 포함 정수 3비트, 소수 29비트)
///
/// 게인 역수(~1.2)와 누적 잔차를 오버플로 없이 담는 폭.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Q3_29(i32);

impl Q3_29 {
    pub const ZERO: Self = Self(0);

    #[inline(always)]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn to_raw(self) -> i32 {
        self.0
    }

    /// 실수 상수 적재 (절삭, 포화)
    pub fn from_f64(value: f64) -> Self {
        Self(saturate_i64((value * (1u64 << Self::FRAC_BITS) as f64).floor() as i64, 32) as i32)
    }

    /// 출력 포맷으로 좁힘: 음수는 0, 소수 29→23비트 절삭, 상한 포화
    pub const fn to_output(self) -> UQ1_23 {
        if self.0 <= 0 {
            return UQ1_23::ZERO;
        }
        UQ1_23::from_raw((self.0 as u32) >> (Self::FRAC_BITS - UQ1_23::FRAC_BITS))
    }
}

impl FixedFormat for Q3_29 {
    const TOTAL_BITS: u32 = 32;
    const INT_BITS: u32 = 3;
    const SIGNED: bool = true;

    fn to_f64(self) -> f64 {
        self.0 as f64 / (1u64 << Self::FRAC_BITS) as f64
    }
}

/// 범위 축소 작업 포맷 Q8.16 (24비트, 부호 포함 정수 8비트, 소수 16비트)
///
/// k·ln2 (k ≥ -12)를 손실 없이 빼기 위한 폭. i32에 저장하며 24비트로 포화.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Q8_16(i32);

impl Q8_16 {
    pub const ZERO: Self = Self(0);

    #[inline(always)]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn to_raw(self) -> i32 {
        self.0
    }

    /// 정수 k를 그대로 표현
    #[inline(always)]
    pub const fn from_int(k: i32) -> Self {
        Self(k << Self::FRAC_BITS)
    }

    /// 실수 상수 적재 (절삭, 포화)
    pub fn from_f64(value: f64) -> Self {
        Self(saturate_i64((value * (1 << Self::FRAC_BITS) as f64).floor() as i64, 24) as i32)
    }

    /// 완전 정밀도 곱셈 후 16비트 소수로 절삭, 24비트 포화
    #[inline]
    pub const fn mul(self, rhs: Self) -> Self {
        let wide = (self.0 as i64 * rhs.0 as i64) >> Self::FRAC_BITS;
        Self(saturate_i64(wide, 24) as i32)
    }

    /// 0 방향 절삭 정수부 (C의 `(int)q`)
    #[inline(always)]
    pub const fn trunc(self) -> i32 {
        self.0 / (1 << Self::FRAC_BITS)
    }

    /// CORDIC 포맷으로 변환 (소수 16→29비트, 무손실)
    pub const fn to_cordic(self) -> Q3_29 {
        let wide = (self.0 as i64) << (Q3_29::FRAC_BITS - Self::FRAC_BITS);
        Q3_29(saturate_i64(wide, 32) as i32)
    }
}

impl FixedFormat for Q8_16 {
    const TOTAL_BITS: u32 = 24;
    const INT_BITS: u32 = 8;
    const SIGNED: bool = true;

    fn to_f64(self) -> f64 {
        self.0 as f64 / (1 << Self::FRAC_BITS) as f64
    }
}

/// `bits` 폭 부호 정수 범위로 포화
#[inline(always)]
const fn saturate_i64(value: i64, bits: u32) -> i64 {
    let max = (1i64 << (bits - 1)) - 1;
    let min = -(1i64 << (bits - 1));
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}
