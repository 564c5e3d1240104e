//! f64 기준 모델
//!
//! 고정소수점 코어와 같은 결정/갱신 순서를 부동소수점으로 실행한다.
//! 양자화 오차와 알고리즘 자체의 오차를 분리해서 보기 위한 용도.

use super::tables::ATANH_POW2_NEG;
use crate::core::systems::CordicConfiguration;

/// 부동소수점 쌍곡 CORDIC으로 exp(r) 근사
pub fn exp_cordic_f64(r: f64, config: &CordicConfiguration) -> f64 {
    let (x, y) = hyperbolic_rotate_f64(r, config);
    x + y
}

/// (cosh(r), sinh(r)) 근사. 게인 역수로 미리 스케일된 x에서 시작한다.
pub fn hyperbolic_rotate_f64(r: f64, config: &CordicConfiguration) -> (f64, f64) {
    let mut x = config.gain_inverse;
    let mut y = 0.0f64;
    let mut z = r;

    let stages = config.stages.min(ATANH_POW2_NEG.len() - 1);
    for i in 1..=stages {
        let passes = if config.repeat_indices.contains(&i) { 2 } else { 1 };
        let shift = 2.0f64.powi(-(i as i32));

        for _ in 0..passes {
            let d = if z >= 0.0 { 1.0 } else { -1.0 };
            let new_x = x + d * y * shift;
            let new_y = y + d * x * shift;

            x = new_x;
            y = new_y;
            z -= d * ATANH_POW2_NEG[i];
        }
    }

    (x, y)
}
