// src/params.rs
//! Option parameters
//!
//! A single parameter set is an [`OptionParams`] value. Batches mix scalar
//! and sequence inputs through [`Param`]; an [`OptionBatch`] zips its
//! sequences element-wise and repeats scalars on every row.

use crate::error::{validation::*, PricerError, PricerResult};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// The five Black-Scholes inputs for one option
///
/// - `s`: spot price of the underlying (> 0)
/// - `k`: strike price (> 0)
/// - `t`: time to expiry in years (> 0)
/// - `r`: continuously compounded risk-free rate
/// - `sigma`: annualized volatility (> 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParams {
    pub s: f64,
    pub k: f64,
    pub t: f64,
    pub r: f64,
    pub sigma: f64,
}

impl OptionParams {
    pub fn new(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> Self {
        Self { s, k, t, r, sigma }
    }

    /// Check the domain of every parameter.
    ///
    /// Pricing does not call this; out-of-domain inputs simply produce
    /// NaN or infinite results.
    pub fn validate(&self) -> PricerResult<()> {
        validate_positive("s", self.s)?;
        validate_positive("k", self.k)?;
        validate_positive("t", self.t)?;
        validate_finite("r", self.r)?;
        validate_positive("sigma", self.sigma)?;
        validate_finite("s", self.s)?;
        validate_finite("k", self.k)?;
        validate_finite("t", self.t)?;
        validate_finite("sigma", self.sigma)?;
        Ok(())
    }
}

/// A parameter that is either one number or an ordered sequence of numbers
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Scalar(f64),
    Series(Array1<f64>),
}

impl Param {
    /// Sequence length, `None` for a scalar
    pub fn len(&self) -> Option<usize> {
        match self {
            Param::Scalar(_) => None,
            Param::Series(values) => Some(values.len()),
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Param::Scalar(_))
    }

    /// Value on row `i`; scalars repeat on every row.
    ///
    /// Callers must keep `i` below the resolved row count.
    #[inline]
    pub fn at(&self, i: usize) -> f64 {
        match self {
            Param::Scalar(value) => *value,
            Param::Series(values) => values[i],
        }
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Param::Scalar(value)
    }
}

impl From<Vec<f64>> for Param {
    fn from(values: Vec<f64>) -> Self {
        Param::Series(Array1::from_vec(values))
    }
}

impl From<&[f64]> for Param {
    fn from(values: &[f64]) -> Self {
        Param::Series(Array1::from_vec(values.to_vec()))
    }
}

impl<const N: usize> From<[f64; N]> for Param {
    fn from(values: [f64; N]) -> Self {
        Param::Series(Array1::from_vec(values.to_vec()))
    }
}

impl From<Array1<f64>> for Param {
    fn from(values: Array1<f64>) -> Self {
        Param::Series(values)
    }
}

/// Scalar-or-sequence parameters for a batch of options
#[derive(Debug, Clone, PartialEq)]
pub struct OptionBatch {
    pub s: Param,
    pub k: Param,
    pub t: Param,
    pub r: Param,
    pub sigma: Param,
}

impl OptionBatch {
    pub fn new(
        s: impl Into<Param>,
        k: impl Into<Param>,
        t: impl Into<Param>,
        r: impl Into<Param>,
        sigma: impl Into<Param>,
    ) -> Self {
        Self {
            s: s.into(),
            k: k.into(),
            t: t.into(),
            r: r.into(),
            sigma: sigma.into(),
        }
    }

    fn named(&self) -> [(&'static str, &Param); 5] {
        [
            ("s", &self.s),
            ("k", &self.k),
            ("t", &self.t),
            ("r", &self.r),
            ("sigma", &self.sigma),
        ]
    }

    /// Number of logical rows.
    ///
    /// The first sequence parameter fixes the length; every other sequence
    /// must match it. All-scalar batches have exactly one row.
    pub fn row_count(&self) -> PricerResult<usize> {
        let mut expected: Option<usize> = None;
        for (name, param) in self.named() {
            if let Some(found) = param.len() {
                match expected {
                    None => expected = Some(found),
                    Some(n) => validate_same_length(name, n, found)?,
                }
            }
        }
        Ok(expected.unwrap_or(1))
    }

    /// Parameters for row `i`
    #[inline]
    pub fn row(&self, i: usize) -> OptionParams {
        OptionParams {
            s: self.s.at(i),
            k: self.k.at(i),
            t: self.t.at(i),
            r: self.r.at(i),
            sigma: self.sigma.at(i),
        }
    }

    /// Materialize every row after checking shapes
    pub fn rows(&self) -> PricerResult<Vec<OptionParams>> {
        let n = self.row_count()?;
        Ok((0..n).map(|i| self.row(i)).collect())
    }

    /// Domain check of every row, reporting the first failure with its row index
    pub fn validate(&self) -> PricerResult<()> {
        for (i, row) in self.rows()?.iter().enumerate() {
            row.validate().map_err(|e| match e {
                PricerError::InvalidParameter {
                    parameter,
                    value,
                    constraint,
                } => PricerError::InvalidParameter {
                    parameter: format!("{}[{}]", parameter, i),
                    value,
                    constraint,
                },
                other => other,
            })?;
        }
        Ok(())
    }
}

impl From<OptionParams> for OptionBatch {
    fn from(p: OptionParams) -> Self {
        OptionBatch::new(p.s, p.k, p.t, p.r, p.sigma)
    }
}
