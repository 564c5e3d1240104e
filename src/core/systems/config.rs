//! # 시스템 구성 설정
//!
//! 쌍곡 CORDIC 평가기의 조정 상수들.
//! 게인 역수는 (단계 수, 반복 스케줄) 쌍에만 유효하다.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::core::cordic::tables::{
    derive_gain_inverse, derive_repeat_schedule, DEFAULT_GAIN_INVERSE, DEFAULT_REPEAT_INDICES,
    DEFAULT_STAGES, MAX_STAGES,
};

/// 게인 역수 상한 (미포함). 이 아래에서 x, y 레지스터는 |·| < 2.25로
/// Q3.29 범위(±4) 안에 머문다.
pub const MAX_GAIN_INVERSE: f64 = 2.0;

/// 게인 역수가 유도값과 달라도 허용하는 오차
const GAIN_TOLERANCE: f64 = 1e-6;

/// CORDIC 구성
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CordicConfiguration {
    /// 최대 시프트 인덱스 (i = 1..=stages)
    pub stages: usize,
    /// 두 번 실행할 인덱스들
    pub repeat_indices: Vec<usize>,
    /// 초기 x 레지스터 값 1/K
    pub gain_inverse: f64,
}

impl CordicConfiguration {
    /// 주어진 단계 수에 맞게 반복 스케줄과 게인 역수를 유도한다
    pub fn derived(stages: usize) -> Self {
        let repeat_indices = derive_repeat_schedule(stages);
        let gain_inverse = derive_gain_inverse(stages, &repeat_indices);
        Self {
            stages,
            repeat_indices,
            gain_inverse,
        }
    }

    /// 반복을 포함한 총 의사 회전 수
    pub fn pseudo_rotations(&self) -> usize {
        let repeats = (1..=self.stages)
            .filter(|i| self.repeat_indices.contains(i))
            .count();
        self.stages + repeats
    }

    /// 구성 검증
    ///
    /// 테이블 범위를 벗어나는 값은 오류, 유도값과의 불일치는 경고만 남긴다.
    pub fn validate(&self) -> Result<()> {
        if self.stages == 0 || self.stages > MAX_STAGES {
            bail!(
                "CORDIC 단계 수 {}는 지원 범위(1..={})를 벗어남. LUT/게인 역수 확장 필요",
                self.stages,
                MAX_STAGES
            );
        }
        if let Some(&bad) = self
            .repeat_indices
            .iter()
            .find(|&&i| i == 0 || i > MAX_STAGES)
        {
            bail!("반복 인덱스 {}는 유효하지 않음 (1..={})", bad, MAX_STAGES);
        }
        if !self.gain_inverse.is_finite() || self.gain_inverse <= 0.0 {
            bail!("게인 역수는 양의 유한값이어야 함: {}", self.gain_inverse);
        }
        if self.gain_inverse >= MAX_GAIN_INVERSE {
            bail!(
                "게인 역수 {}는 상한 {} 이상. CORDIC 레지스터가 Q3.29 범위를 넘음",
                self.gain_inverse,
                MAX_GAIN_INVERSE
            );
        }

        let expected = Self::derived(self.stages);
        let mut active: Vec<usize> = self
            .repeat_indices
            .iter()
            .copied()
            .filter(|&i| i <= self.stages)
            .collect();
        active.sort_unstable();
        active.dedup();
        if active != expected.repeat_indices {
            log::warn!(
                "반복 스케줄 {:?}이 {}단계 유도값 {:?}과 다름",
                active,
                self.stages,
                expected.repeat_indices
            );
        }
        if (self.gain_inverse - expected.gain_inverse).abs() > GAIN_TOLERANCE {
            log::warn!(
                "게인 역수 {}이 {}단계 유도값 {}과 다름",
                self.gain_inverse,
                self.stages,
                expected.gain_inverse
            );
        }

        Ok(())
    }
}

impl Default for CordicConfiguration {
    fn default() -> Self {
        Self {
            stages: DEFAULT_STAGES,
            repeat_indices: DEFAULT_REPEAT_INDICES.to_vec(),
            gain_inverse: DEFAULT_GAIN_INVERSE,
        }
    }
}
