//! 오차 측정 유틸리티

/// 평균 제곱 오차 (MSE). 길이가 다르거나 비어 있으면 무한대.
pub fn mean_squared_error(reference: &[f64], approximation: &[f64]) -> f64 {
    if reference.len() != approximation.len() || reference.is_empty() {
        return f64::INFINITY;
    }

    let sum_sq_diff: f64 = reference
        .iter()
        .zip(approximation.iter())
        .map(|(r, a)| (a - r).powi(2))
        .sum();

    sum_sq_diff / reference.len() as f64
}

/// RMSE (Root Mean Square Error)
pub fn rmse(reference: &[f64], approximation: &[f64]) -> f64 {
    mean_squared_error(reference, approximation).sqrt()
}

/// 최대 절대 오차
pub fn max_absolute_error(reference: &[f64], approximation: &[f64]) -> f64 {
    if reference.len() != approximation.len() {
        return f64::INFINITY;
    }

    reference
        .iter()
        .zip(approximation.iter())
        .map(|(r, a)| (r - a).abs())
        .fold(0.0f64, f64::max)
}

/// 평균 절대 오차
pub fn mean_absolute_error(reference: &[f64], approximation: &[f64]) -> f64 {
    if reference.len() != approximation.len() || reference.is_empty() {
        return f64::INFINITY;
    }

    let sum: f64 = reference
        .iter()
        .zip(approximation.iter())
        .map(|(r, a)| (r - a).abs())
        .sum();

    sum / reference.len() as f64
}

/// 오차 메트릭 묶음
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorMetrics {
    pub mse: f64,
    pub rmse: f64,
    pub max_absolute_error: f64,
    pub mean_absolute_error: f64,
}

impl ErrorMetrics {
    pub fn calculate(reference: &[f64], approximation: &[f64]) -> Self {
        Self {
            mse: mean_squared_error(reference, approximation),
            rmse: rmse(reference, approximation),
            max_absolute_error: max_absolute_error(reference, approximation),
            mean_absolute_error: mean_absolute_error(reference, approximation),
        }
    }

    pub fn report(&self, name: &str) {
        println!("\n=== {} 오차 분석 ===", name);
        println!("MSE: {:.6e}", self.mse);
        println!("RMSE: {:.6e}", self.rmse);
        println!("최대 절대 오차: {:.6e}", self.max_absolute_error);
        println!("평균 절대 오차: {:.6e}", self.mean_absolute_error);
    }
}
