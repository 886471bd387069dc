// src/table.rs
//! Result table over the Black-Scholes pricer
//!
//! One row per logical input element with a fixed column order:
//! ```text
//! strike, call_price, call_delta, put_price, put_delta, gamma, theta, vega
//! ```
//! `theta` is the call-side theta. Put theta and both rhos are computed on
//! every row but only shown when selected through [`Columns`].

use crate::analytics::bs_analytic::Greeks;
use crate::analytics::vectorized;
use crate::config::EvalConfig;
use crate::error::PricerResult;
use crate::params::{OptionBatch, Param};
use bitflags::bitflags;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Visible table columns. Bit position gives the column order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Columns: u32 {
        const STRIKE     = 1 << 0;
        const CALL_PRICE = 1 << 1;
        const CALL_DELTA = 1 << 2;
        const PUT_PRICE  = 1 << 3;
        const PUT_DELTA  = 1 << 4;
        const GAMMA      = 1 << 5;
        const THETA      = 1 << 6;
        const VEGA       = 1 << 7;
        const PUT_THETA  = 1 << 8;
        const CALL_RHO   = 1 << 9;
        const PUT_RHO    = 1 << 10;

        const DEFAULT = Self::STRIKE.bits()
            | Self::CALL_PRICE.bits()
            | Self::CALL_DELTA.bits()
            | Self::PUT_PRICE.bits()
            | Self::PUT_DELTA.bits()
            | Self::GAMMA.bits()
            | Self::THETA.bits()
            | Self::VEGA.bits();
        const ALL = Self::DEFAULT.bits()
            | Self::PUT_THETA.bits()
            | Self::CALL_RHO.bits()
            | Self::PUT_RHO.bits();
    }
}

impl Default for Columns {
    fn default() -> Self {
        Columns::DEFAULT
    }
}

const COLUMN_COUNT: usize = 11;

const COLUMN_NAMES: [&str; COLUMN_COUNT] = [
    "strike",
    "call_price",
    "call_delta",
    "put_price",
    "put_delta",
    "gamma",
    "theta",
    "vega",
    "put_theta",
    "call_rho",
    "put_rho",
];

impl Columns {
    /// Indices of the selected columns, in table order
    fn indices(self) -> impl Iterator<Item = usize> {
        (0..COLUMN_COUNT).filter(move |&i| self.contains(Columns::from_bits_retain(1 << i)))
    }

    /// Names of the selected columns, in table order
    pub fn names(self) -> Vec<&'static str> {
        self.indices().map(|i| COLUMN_NAMES[i]).collect()
    }
}

/// One priced option
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingRow {
    pub strike: f64,
    pub call_price: f64,
    pub call_delta: f64,
    pub put_price: f64,
    pub put_delta: f64,
    pub gamma: f64,
    /// Call theta
    pub theta: f64,
    pub vega: f64,
    pub put_theta: f64,
    pub call_rho: f64,
    pub put_rho: f64,
}

impl PricingRow {
    pub fn from_greeks(strike: f64, g: &Greeks) -> Self {
        Self {
            strike,
            call_price: g.call_price,
            call_delta: g.call_delta,
            put_price: g.put_price,
            put_delta: g.put_delta,
            gamma: g.gamma,
            theta: g.call_theta,
            vega: g.vega,
            put_theta: g.put_theta,
            call_rho: g.call_rho,
            put_rho: g.put_rho,
        }
    }

    fn values(&self) -> [f64; COLUMN_COUNT] {
        [
            self.strike,
            self.call_price,
            self.call_delta,
            self.put_price,
            self.put_delta,
            self.gamma,
            self.theta,
            self.vega,
            self.put_theta,
            self.call_rho,
            self.put_rho,
        ]
    }

    /// Values of the selected columns, in table order
    pub fn select(&self, columns: Columns) -> Vec<f64> {
        let values = self.values();
        columns.indices().map(|i| values[i]).collect()
    }
}

/// Row-oriented pricing result
#[derive(Debug, Clone, PartialEq)]
pub struct PricingTable {
    rows: Vec<PricingRow>,
    columns: Columns,
}

impl PricingTable {
    pub fn rows(&self) -> &[PricingRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.names()
    }

    /// A visible column by name
    pub fn column(&self, name: &str) -> Option<Array1<f64>> {
        let idx = self
            .columns
            .indices()
            .find(|&i| COLUMN_NAMES[i] == name)?;
        Some(self.rows.iter().map(|row| row.values()[idx]).collect())
    }

    /// Rows × visible columns
    pub fn to_array2(&self) -> Array2<f64> {
        let names = self.column_names();
        let mut out = Array2::zeros((self.rows.len(), names.len()));
        for (mut dst, row) in out.outer_iter_mut().zip(&self.rows) {
            for (cell, value) in dst.iter_mut().zip(row.select(self.columns)) {
                *cell = value;
            }
        }
        out
    }
}

impl fmt::Display for PricingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>5}", "")?;
        for name in self.column_names() {
            write!(f, " {:>12}", name)?;
        }
        writeln!(f)?;
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "{:>5}", i)?;
            for value in row.select(self.columns) {
                write!(f, " {:>12.6}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds a [`PricingTable`] from an [`OptionBatch`]
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    columns: Columns,
    config: EvalConfig,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(mut self, columns: Columns) -> Self {
        self.columns = columns;
        self
    }

    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Price every row once. Each row's columns come from a single
    /// Greeks evaluation of that row's parameters.
    pub fn build(&self, batch: &OptionBatch) -> PricerResult<PricingTable> {
        let greeks = vectorized::greeks(batch, &self.config)?;
        let rows: Vec<PricingRow> = greeks
            .iter()
            .enumerate()
            .map(|(i, g)| PricingRow::from_greeks(batch.k.at(i), g))
            .collect();
        tracing::debug!(rows = rows.len(), columns = ?self.columns, "built pricing table");
        Ok(PricingTable {
            rows,
            columns: self.columns,
        })
    }
}

/// Price a call/put pair and their Greeks for scalar or sequence inputs
///
/// Sequences are zipped element-wise and scalars repeated on every row.
/// Returns one row for all-scalar input, N rows for sequences of length N,
/// and `PricerError::ShapeMismatch` when sequence lengths differ.
///
/// ```rust
/// use bs_greeks::price_and_greeks;
///
/// let table = price_and_greeks(300.0, vec![250.0, 350.0], 1.0, 0.03, 0.15).unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.column_names()[0], "strike");
/// ```
pub fn price_and_greeks(
    s: impl Into<Param>,
    k: impl Into<Param>,
    t: impl Into<Param>,
    r: impl Into<Param>,
    sigma: impl Into<Param>,
) -> PricerResult<PricingTable> {
    TableBuilder::new().build(&OptionBatch::new(s, k, t, r, sigma))
}
