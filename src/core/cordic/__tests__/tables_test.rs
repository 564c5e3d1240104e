//! # CORDIC 상수 테이블 단위테스트

use crate::core::cordic::tables::{
    derive_atanh_table, derive_gain_inverse, derive_repeat_schedule, AtanhTable, ATANH_POW2_NEG, DEFAULT_GAIN_INVERSE,
    DEFAULT_REPEAT_INDICES, DEFAULT_STAGES, MAX_STAGES,
};
use approx::assert_abs_diff_eq;

#[test]
fn atanh_테이블_정확성_테스트() {
    let derived = derive_atanh_table();
    assert_eq!(ATANH_POW2_NEG[0], 0.0);
    assert_eq!(derived[0], 0.0);
    for i in 1..=MAX_STAGES {
        assert_abs_diff_eq!(ATANH_POW2_NEG[i], derived[i], epsilon = 1e-15);
        assert_abs_diff_eq!(derived[i], (2.0f64.powi(-(i as i32))).atanh(), epsilon = 1e-15);
    }
}

#[test]
fn atanh_테이블_단조감소_테스트() {
    for i in 2..=MAX_STAGES {
        assert!(
            ATANH_POW2_NEG[i] < ATANH_POW2_NEG[i - 1],
            "atanh(2^-{}) >= atanh(2^-{})",
            i,
            i - 1
        );
    }
}

#[test]
fn 고정소수점_테이블_적재_테스트() {
    let table = AtanhTable::new();
    assert_eq!(table.entries().len(), MAX_STAGES + 1);
    assert_eq!(table.get(0).to_raw(), 0);
    assert_eq!(table.get(1).to_raw(), 294_906_490);
    assert_eq!(table.get(4).to_raw(), 33_598_225);
    assert_eq!(table.get(13).to_raw(), 65_536);
    assert_eq!(table.get(29).to_raw(), 1);
    // 2^-30 미만은 Q3.29에서 0으로 절삭
    assert_eq!(table.get(30).to_raw(), 0);
    assert_eq!(table, AtanhTable::default());
}

#[test]
fn 반복_스케줄_유도_테스트() {
    assert_eq!(derive_repeat_schedule(3), Vec::<usize>::new());
    assert_eq!(derive_repeat_schedule(4), vec![4]);
    assert_eq!(derive_repeat_schedule(12), vec![4]);
    assert_eq!(derive_repeat_schedule(DEFAULT_STAGES), DEFAULT_REPEAT_INDICES.to_vec());
    assert_eq!(derive_repeat_schedule(MAX_STAGES), vec![4, 13]);
    assert_eq!(derive_repeat_schedule(40), vec![4, 13, 40]);
}

#[test]
fn 게인_역수_유도_테스트() {
    let derived = derive_gain_inverse(DEFAULT_STAGES, &DEFAULT_REPEAT_INDICES);
    println!("유도된 게인 역수: {:.15}, 기본값: {:.15}", derived, DEFAULT_GAIN_INVERSE);
    assert_abs_diff_eq!(derived, DEFAULT_GAIN_INVERSE, epsilon = 1e-9);

    // 반복이 빠지면 게인 역수가 작아진다
    let without_repeats = derive_gain_inverse(DEFAULT_STAGES, &[]);
    assert!(without_repeats < derived);

    // 단계가 늘면 극한값 쪽으로 수렴
    let longer = derive_gain_inverse(MAX_STAGES, &[4, 13]);
    assert_abs_diff_eq!(longer, derived, epsilon = 1e-8);
}
