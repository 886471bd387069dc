//! # bs-greeks: Closed-Form Black-Scholes Prices and Greeks
//!
//! Prices European calls and puts and their sensitivities (delta, gamma,
//! theta, vega, rho) from five market parameters: spot, strike, time to
//! expiry, risk-free rate and volatility.
//!
//! ## Key Features
//!
//! - **Scalar and vectorized**: every formula works on one parameter set or
//!   element-wise over sequences, with scalars broadcast across rows
//! - **Consistent**: all values for a parameter set share one d₁/d₂
//! - **Parallel batches**: large batches run on Rayon with identical results
//! - **Tabular output**: fixed-column result table with CSV and JSON writers
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks::price_and_greeks;
//!
//! let table = price_and_greeks(
//!     vec![300.0, 300.0], // Spot
//!     vec![250.0, 350.0], // Strike
//!     1.0,                // Time to expiry (years)
//!     0.03,               // Risk-free rate
//!     0.15,               // Volatility
//! )
//! .expect("matching lengths");
//!
//! let calls = table.column("call_price").unwrap();
//! assert!((calls[0] - 58.820).abs() < 1e-3);
//! ```
//!
//! ## Numerical Contract
//!
//! Inputs are not validated during pricing. Zero expiry or volatility and
//! non-positive spot or strike yield NaN/Inf rather than errors; use
//! [`OptionParams::validate`] or [`OptionBatch::validate`] to reject them
//! up front. Sequences of unequal length are reported as
//! [`PricerError::ShapeMismatch`].

pub mod analytics;
pub mod config;
pub mod error;
pub mod math_utils;
pub mod output;
pub mod params;
pub mod table;

pub use analytics::bs_analytic::{greeks, BsTerms, Greeks};
pub use config::EvalConfig;
pub use error::{PricerError, PricerResult};
pub use params::{OptionBatch, OptionParams, Param};
pub use table::{price_and_greeks, Columns, PricingRow, PricingTable, TableBuilder};
