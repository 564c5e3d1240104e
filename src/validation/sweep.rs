//! 격자 스윕: 균일 입력열에 대한 기준값/평가값 비교
//!
//! 정의역 바깥(x > 0) 구간도 포함해서 포화 동작을 함께 보여준다.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::accuracy_utils::ErrorMetrics;
use crate::core::evaluator::ExpEvaluator;
use crate::core::fixed::FixedFormat;

/// 스윕 구간 [start, end), 간격 step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: -8.0,
            end: 0.1,
            step: 0.00025,
        }
    }
}

impl SweepConfig {
    /// 입력열 생성 (x_i = start + i·step < end)
    pub fn inputs(&self) -> Result<Vec<f64>> {
        if !(self.step > 0.0) || !self.step.is_finite() {
            bail!("스윕 간격은 양의 유한값이어야 함: {}", self.step);
        }
        if !(self.end > self.start) {
            bail!("스윕 구간이 비어 있음: [{}, {})", self.start, self.end);
        }

        let count = ((self.end - self.start) / self.step).ceil() as usize;
        Ok((0..count)
            .map(|i| self.start + i as f64 * self.step)
            .filter(|&x| x < self.end)
            .collect())
    }
}

/// 스윕 한 줄
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub x: f64,
    pub golden: f64,
    pub evaluated: f64,
}

impl SweepRow {
    pub fn error(&self) -> f64 {
        self.evaluated - self.golden
    }
}

/// 입력열을 병렬로 평가한다. 입력 처리는 `ExpEvaluator::evaluate_real`과 같다.
pub fn evaluate_sweep(evaluator: &ExpEvaluator, xs: &[f64]) -> Vec<SweepRow> {
    xs.par_iter()
        .map(|&x| SweepRow {
            x,
            golden: x.exp(),
            evaluated: evaluator.evaluate_real(x).to_f64(),
        })
        .collect()
}

/// 스윕 결과의 오차 메트릭
pub fn sweep_metrics(rows: &[SweepRow]) -> ErrorMetrics {
    let golden: Vec<f64> = rows.iter().map(|r| r.golden).collect();
    let evaluated: Vec<f64> = rows.iter().map(|r| r.evaluated).collect();
    ErrorMetrics::calculate(&golden, &evaluated)
}

/// CSV로 기록 (x, golden, cordic, error)
pub fn write_csv<W: Write>(rows: &[SweepRow], mut writer: W) -> Result<()> {
    writeln!(writer, "x,golden,cordic,error")?;
    for row in rows {
        writeln!(
            writer,
            "{:.5},{:.16},{:.16},{:.6e}",
            row.x,
            row.golden,
            row.evaluated,
            row.error()
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// CSV 파일로 저장
pub fn save_csv(rows: &[SweepRow], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("스윕 결과 파일 생성 실패: {}", path.display()))?;
    write_csv(rows, BufWriter::new(file))
        .with_context(|| format!("스윕 결과 기록 실패: {}", path.display()))
}
