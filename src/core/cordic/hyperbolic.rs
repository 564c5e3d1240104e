//! 쌍곡 CORDIC 코어 (회전 모드)
//!
//! r ∈ [0, ln2)에 대해 cosh(r) + sinh(r) = exp(r)을 덧셈, 뺄셈,
//! 산술 시프트만으로 계산한다.

use anyhow::Result;

use super::tables::AtanhTable;
use crate::core::fixed::{Q3_29, UQ1_23};
use crate::core::systems::CordicConfiguration;

/// x, y 벡터 레지스터와 z 잔차 레지스터
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CordicState {
    pub x: Q3_29,
    pub y: Q3_29,
    pub z: Q3_29,
}

/// 쌍곡 CORDIC 엔진
///
/// 단계 수, 반복 스케줄, 게인 역수, atanh 테이블을 생성 시 고정한다.
/// 호출 사이에 가변 상태가 없으므로 여러 스레드에서 공유해도 된다.
#[derive(Debug, Clone)]
pub struct HyperbolicCordic {
    stages: usize,
    /// 비트 i가 켜져 있으면 인덱스 i를 두 번 실행
    repeat_mask: u32,
    gain_inverse: Q3_29,
    table: AtanhTable,
}

impl HyperbolicCordic {
    pub fn new(config: &CordicConfiguration) -> Result<Self> {
        config.validate()?;

        let repeat_mask = config
            .repeat_indices
            .iter()
            .fold(0u32, |mask, &i| mask | (1 << i));

        Ok(Self {
            stages: config.stages,
            repeat_mask,
            gain_inverse: Q3_29::from_f64(config.gain_inverse),
            table: AtanhTable::new(),
        })
    }

    pub fn stages(&self) -> usize {
        self.stages
    }

    #[inline(always)]
    pub fn is_repeat_index(&self, i: usize) -> bool {
        (self.repeat_mask & (1 << i)) != 0
    }

    /// 총 의사 회전 수 (반복 포함)
    pub fn pseudo_rotations(&self) -> usize {
        (1..=self.stages).filter(|&i| self.is_repeat_index(i)).count() + self.stages
    }

    /// 전체 반복을 수행하고 마지막 레지스터 상태를 돌려준다
    pub fn rotate(&self, r: Q3_29) -> CordicState {
        let mut state = CordicState {
            x: self.gain_inverse,
            y: Q3_29::ZERO,
            z: r,
        };

        for i in 1..=self.stages {
            self.micro_rotate(&mut state, i);
            if self.is_repeat_index(i) {
                self.micro_rotate(&mut state, i);
            }
        }

        state
    }

    /// exp(r), r ∈ [0, ln2). 결과는 출력 포맷으로 좁혀진다.
    pub fn exp_small(&self, r: Q3_29) -> UQ1_23 {
        let state = self.rotate(r);
        // cosh + sinh; 음수는 to_output에서 0으로 포화
        let e = state.x.to_raw().saturating_add(state.y.to_raw());
        Q3_29::from_raw(e).to_output()
    }

    /// 인덱스 i에서 한 번의 의사 회전. 방향은 현재 z의 부호로 정한다.
    #[inline(always)]
    fn micro_rotate(&self, state: &mut CordicState, i: usize) {
        let x = state.x.to_raw();
        let y = state.y.to_raw();
        let z = state.z.to_raw();
        let angle = self.table.get(i).to_raw();

        let x_shift = x >> i;
        let y_shift = y >> i;

        let (x, y, z) = if z >= 0 {
            (x.wrapping_add(y_shift), y.wrapping_add(x_shift), z.wrapping_sub(angle))
        } else {
            (x.wrapping_sub(y_shift), y.wrapping_sub(x_shift), z.wrapping_add(angle))
        };

        state.x = Q3_29::from_raw(x);
        state.y = Q3_29::from_raw(y);
        state.z = Q3_29::from_raw(z);
    }
}
