// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function Φ(x)
///
/// Written with `erfc` so the lower tail keeps its relative precision.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erf::erfc(-x / SQRT_2)
}

/// Standard normal probability density function
///
/// ```text
/// φ(x) = (1/√(2π)) * exp(-x²/2)
/// ```
pub fn norm_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * x * x).exp()
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
