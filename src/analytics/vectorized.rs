// src/analytics/vectorized.rs
//! Element-wise Black-Scholes evaluation over an [`OptionBatch`]
//!
//! Each output element is produced by the same scalar code path as
//! [`bs_analytic`](super::bs_analytic), so row `i` of any result is
//! bit-identical to the scalar accessor applied to row `i` of the batch.
//! Large batches are spread over the rayon pool; output order always
//! follows input order.
//!
//! Results always have one element per row, so an all-scalar batch yields
//! a length-1 array. Use the [`bs_analytic`](super::bs_analytic) functions
//! to get a plain `f64` for a single option.

use crate::analytics::bs_analytic::{BsTerms, Greeks};
use crate::config::EvalConfig;
use crate::error::PricerResult;
use crate::params::OptionBatch;
use ndarray::Array1;
use rayon::prelude::*;

/// Evaluate `f` on every row of `batch`
pub fn map_rows<T, F>(batch: &OptionBatch, cfg: &EvalConfig, f: F) -> PricerResult<Vec<T>>
where
    T: Send,
    F: Fn(&BsTerms) -> T + Sync + Send,
{
    cfg.validate()?;
    let n = batch.row_count()?;
    let parallel = cfg.runs_parallel(n);
    tracing::debug!(rows = n, parallel, "evaluating option batch");

    let eval = |i: usize| f(&BsTerms::new(batch.row(i)));
    let out: Vec<T> = if parallel {
        (0..n).into_par_iter().map(eval).collect()
    } else {
        (0..n).map(eval).collect()
    };
    Ok(out)
}

fn column<F>(batch: &OptionBatch, f: F) -> PricerResult<Array1<f64>>
where
    F: Fn(&BsTerms) -> f64 + Sync + Send,
{
    map_rows(batch, &EvalConfig::default(), f).map(Array1::from_vec)
}

/// Full [`Greeks`] record for every row
pub fn greeks(batch: &OptionBatch, cfg: &EvalConfig) -> PricerResult<Vec<Greeks>> {
    map_rows(batch, cfg, BsTerms::greeks)
}

pub fn d1(batch: &OptionBatch) -> PricerResult<Array1<f64>> {
    column(batch, |b| b.d1)
}

pub fn d2(batch: &OptionBatch) -> PricerResult<Array1<f64>> {
    column(batch, |b| b.d2)
}

pub fn call_price(batch: &OptionBatch) -> PricerResult<Array1<f64>> {
    column(batch, BsTerms::call_price)
}

pub fn put_price(batch: &OptionBatch) -> PricerResult<Array1<f64>> {
    column(batch, BsTerms::put_price)
}

pub fn call_delta(batch: &OptionBatch) -> PricerResult<Array1<f64>> {
    column(batch, BsTerms::call_delta)
}

pub fn put_delta(batch: &OptionBatch) -> PricerResult<Array1<f64>> {
    column(batch, BsTerms::put_delta)
}

pub fn call_gamma(batch: &OptionBatch) -> PricerResult<Array1<f64>> {
    column(batch, BsTerms::gamma)
}

pub fn put_gamma(batch: &OptionBatch) -> PricerResult<Array1<f64>> {
    column(batch, BsTerms::gamma)
}

pub fn call_theta(batch: &OptionBatch) -> PricerResult<Array1<f64>> {
    column(batch, BsTerms::call_theta)
}

pub fn put_theta(batch: &OptionBatch) -> PricerResult<Array1<f64>> {
    column(batch, BsTerms::put_theta)
}

pub fn call_vega(batch: &OptionBatch) -> PricerResult<Array1<f64>> {
    column(batch, BsTerms::vega)
}

pub fn put_vega(batch: &OptionBatch) -> PricerResult<Array1<f64>> {
    column(batch, BsTerms::vega)
}

pub fn call_rho(batch: &OptionBatch) -> PricerResult<Array1<f64>> {
    column(batch, BsTerms::call_rho)
}

pub fn put_rho(batch: &OptionBatch) -> PricerResult<Array1<f64>> {
    column(batch, BsTerms::put_rho)
}
