//! 쌍곡 CORDIC 상수 테이블
//!
//! atanh(2^-i) 테이블, 게인 역수, 반복 인덱스 스케줄.
//! 게인 역수는 (단계 수, 반복 스케줄) 쌍에 묶여 있으므로 둘 중 하나가
//! 바뀌면 `derive_gain_inverse`로 다시 계산해야 한다.

use crate::core::fixed::Q3_29;

/// 지원하는 최대 시프트 인덱스
pub const MAX_STAGES: usize = 30;

/// 기본 단계 수 (최대 시프트 인덱스 i = 1..=15)
pub const DEFAULT_STAGES: usize = 15;

/// 기본 단계 수에서 두 번 실행되는 인덱스
pub const DEFAULT_REPEAT_INDICES: [usize; 2] = [4, 13];

/// 기본 (15단계, {4, 13}) 구성의 게인 역수 1/K
pub const DEFAULT_GAIN_INVERSE: f64 = 1.207497067763072;

/// atanh(2^-i), i = 0..=30. i = 0은 사용하지 않는 자리표시자.
pub const ATANH_POW2_NEG: [f64; MAX_STAGES + 1] = [
    0.0,
    0.54930614433405484570,
    0.25541281188299534160,
    0.12565721414045303884,
    0.06258157147700301068,
    0.03126017849066699238,
    0.01562627175205221142,
    0.00781265895154042152,
    0.00390626986839682592,
    0.00195312748353254912,
    0.00097656281044103586,
    0.00048828128880511276,
    0.00024414062985063866,
    0.00012207031310632980,
    0.00006103515632579145,
    0.00003051757813447360,
    0.00001525878906368405,
    0.00000762939453139803,
    0.00000381469726564350,
    0.00000190734863281458,
    0.00000095367431640681,
    0.00000047683715820317,
    0.00000023841857910158,
    0.00000011920928955078,
    0.00000005960464477539,
    0.00000002980232238770,
    0.00000001490116119385,
    0.00000000745058059692,
    0.00000000372529029846,
    0.00000000186264514923,
    0.00000000093132257462,
];

const _: () = assert!(ATANH_POW2_NEG.len() == MAX_STAGES + 1);
const _: () = assert!(DEFAULT_STAGES <= MAX_STAGES);

/// atanh(2^-i) 테이블 재계산 (i = 0은 0)
pub fn derive_atanh_table() -> [f64; MAX_STAGES + 1] {
    let mut table = [0.0f64; MAX_STAGES + 1];
    for (i, entry) in table.iter_mut().enumerate().skip(1) {
        *entry = libm::atanh(libm::ldexp(1.0, -(i as i32)));
    }
    table
}

/// 반복 인덱스 스케줄 유도: 4, 13, 40, ... (k ← 3k + 1) 중 `stages` 이하
pub fn derive_repeat_schedule(stages: usize) -> Vec<usize> {
    let mut schedule = Vec::new();
    let mut k = 4;
    while k <= stages {
        schedule.push(k);
        k = 3 * k + 1;
    }
    schedule
}

/// 게인 역수 유도: 1 / Π sqrt(1 - 2^(-2i)), 반복 인덱스는 두 번 곱한다
pub fn derive_gain_inverse(stages: usize, repeat_indices: &[usize]) -> f64 {
    let mut gain = 1.0f64;
    for i in 1..=stages {
        let factor = (1.0 - 2.0f64.powi(-2 * i as i32)).sqrt();
        gain *= factor;
        if repeat_indices.contains(&i) {
            gain *= factor;
        }
    }
    gain.recip()
}

/// Q3.29로 적재된 atanh 테이블. 한 번 만들고 읽기 전용으로 공유.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtanhTable {
    entries: [Q3_29; MAX_STAGES + 1],
}

impl AtanhTable {
    pub fn new() -> Self {
        let mut entries = [Q3_29::ZERO; MAX_STAGES + 1];
        for (entry, &angle) in entries.iter_mut().zip(ATANH_POW2_NEG.iter()) {
            *entry = Q3_29::from_f64(angle);
        }
        Self { entries }
    }

    #[inline(always)]
    pub fn get(&self, i: usize) -> Q3_29 {
        self.entries[i]
    }

    pub fn entries(&self) -> &[Q3_29] {
        &self.entries
    }
}

impl Default for AtanhTable {
    fn default() -> Self {
        Self::new()
    }
}
