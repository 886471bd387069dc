// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! European prices have closed forms in terms of the standard normal
//! CDF Φ(x) and density φ(x), both driven by
//! ```text
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! ```
//!
//! Every quantity for a parameter set is derived from one [`BsTerms`], so
//! prices and Greeks always agree on the same d₁/d₂.
//!
//! Theta, vega and rho are scaled by 0.01.
//!
//! No input is clamped or rejected here. Zero expiry or volatility, or
//! non-positive spot or strike, produce NaN or infinite values.

use crate::math_utils::{norm_cdf, norm_pdf};
use crate::params::OptionParams;
use serde::{Deserialize, Serialize};

/// Scaling applied to theta, vega and rho
pub const GREEK_SCALE: f64 = 0.01;

/// Intermediate terms shared by every formula for one parameter set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BsTerms {
    pub params: OptionParams,
    pub sqrt_t: f64,
    /// e^(-rT)
    pub discount: f64,
    pub d1: f64,
    pub d2: f64,
    /// φ(d₁)
    pub pdf_d1: f64,
}

impl BsTerms {
    pub fn new(params: OptionParams) -> Self {
        let OptionParams { s, k, t, r, sigma } = params;
        let sqrt_t = t.sqrt();
        let d1 = ((s / k).ln() + (r + sigma * sigma / 2.0) * t) / (sigma * sqrt_t);
        let d2 = d1 - sigma * sqrt_t;
        Self {
            params,
            sqrt_t,
            discount: (-r * t).exp(),
            d1,
            d2,
            pdf_d1: norm_pdf(d1),
        }
    }

    /// C = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
    pub fn call_price(&self) -> f64 {
        let p = &self.params;
        p.s * norm_cdf(self.d1) - p.k * self.discount * norm_cdf(self.d2)
    }

    /// Put-call parity: P = K*e^(-rT) - S + C
    pub fn put_price(&self) -> f64 {
        let p = &self.params;
        p.k * self.discount - p.s + self.call_price()
    }

    /// Δ_call = Φ(d₁), in [0, 1]
    pub fn call_delta(&self) -> f64 {
        norm_cdf(self.d1)
    }

    /// Δ_put = -Φ(-d₁) = Φ(d₁) - 1, in [-1, 0]
    pub fn put_delta(&self) -> f64 {
        -norm_cdf(-self.d1)
    }

    /// Γ = φ(d₁) / (S σ √T), same for calls and puts
    pub fn gamma(&self) -> f64 {
        let p = &self.params;
        self.pdf_d1 / (p.s * p.sigma * self.sqrt_t)
    }

    /// Decay term shared by call and put theta: -S φ(d₁) σ / (2√T)
    fn theta_decay(&self) -> f64 {
        let p = &self.params;
        -(p.s * self.pdf_d1 * p.sigma) / (2.0 * self.sqrt_t)
    }

    /// Θ_call = 0.01 * (-S φ(d₁) σ / (2√T) - r K e^(-rT) Φ(d₂))
    pub fn call_theta(&self) -> f64 {
        let p = &self.params;
        GREEK_SCALE * (self.theta_decay() - p.r * p.k * self.discount * norm_cdf(self.d2))
    }

    /// Θ_put = 0.01 * (-S φ(d₁) σ / (2√T) + r K e^(-rT) Φ(-d₂))
    pub fn put_theta(&self) -> f64 {
        let p = &self.params;
        GREEK_SCALE * (self.theta_decay() + p.r * p.k * self.discount * norm_cdf(-self.d2))
    }

    /// ν = 0.01 * S φ(d₁) √T, same for calls and puts
    pub fn vega(&self) -> f64 {
        GREEK_SCALE * (self.params.s * self.pdf_d1 * self.sqrt_t)
    }

    /// ρ_call = 0.01 * K T e^(-rT) Φ(d₂)
    pub fn call_rho(&self) -> f64 {
        let p = &self.params;
        GREEK_SCALE * (p.k * p.t * self.discount * norm_cdf(self.d2))
    }

    /// ρ_put = 0.01 * -K T e^(-rT) Φ(-d₂)
    pub fn put_rho(&self) -> f64 {
        let p = &self.params;
        GREEK_SCALE * (-p.k * p.t * self.discount * norm_cdf(-self.d2))
    }

    pub fn greeks(&self) -> Greeks {
        let call_price = self.call_price();
        let p = &self.params;
        Greeks {
            d1: self.d1,
            d2: self.d2,
            call_price,
            // same expression as `put_price`, reusing the call value
            put_price: p.k * self.discount - p.s + call_price,
            call_delta: self.call_delta(),
            put_delta: self.put_delta(),
            gamma: self.gamma(),
            call_theta: self.call_theta(),
            put_theta: self.put_theta(),
            vega: self.vega(),
            call_rho: self.call_rho(),
            put_rho: self.put_rho(),
        }
    }
}

/// Prices and sensitivities of a call/put pair sharing one parameter set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    pub d1: f64,
    pub d2: f64,
    pub call_price: f64,
    pub put_price: f64,
    pub call_delta: f64,
    pub put_delta: f64,
    pub gamma: f64,
    pub call_theta: f64,
    pub put_theta: f64,
    pub vega: f64,
    pub call_rho: f64,
    pub put_rho: f64,
}

/// All prices and Greeks for one parameter set
pub fn greeks(params: &OptionParams) -> Greeks {
    BsTerms::new(*params).greeks()
}

#[inline]
fn terms(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> BsTerms {
    BsTerms::new(OptionParams::new(s, k, t, r, sigma))
}

/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
pub fn d1(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    terms(s, k, t, r, sigma).d1
}

/// d₂ = d₁ - σ√T
pub fn d2(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    terms(s, k, t, r, sigma).d2
}

/// Black-Scholes European call option price
///
/// # Formula
/// ```text
/// C(S,K,T,r,σ) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
///
/// # Parameters
/// - `s`: Current stock price
/// - `k`: Strike price
/// - `t`: Time to expiration in years
/// - `r`: Risk-free rate
/// - `sigma`: Volatility
pub fn call_price(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    terms(s, k, t, r, sigma).call_price()
}

/// Black-Scholes European put option price
///
/// Derived from the call through put-call parity:
/// ```text
/// P = K*e^(-rT) - S + C
/// ```
pub fn put_price(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    terms(s, k, t, r, sigma).put_price()
}

/// Delta (∂V/∂S) for a European call
///
/// # Interpretation
/// - Hedge ratio: number of shares to hold per option sold
/// - Range: [0, 1]
pub fn call_delta(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    terms(s, k, t, r, sigma).call_delta()
}

/// Delta for a European put, range [-1, 0]
pub fn put_delta(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    terms(s, k, t, r, sigma).put_delta()
}

/// Gamma (∂²V/∂S²) for a European call
///
/// # Formula
/// ```text
/// Γ = φ(d₁) / (S * σ * √T)
/// ```
///
/// Maximal near the money, identical for calls and puts.
pub fn call_gamma(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    terms(s, k, t, r, sigma).gamma()
}

pub fn put_gamma(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    terms(s, k, t, r, sigma).gamma()
}

/// Theta (∂V/∂t) for a European call, scaled by 0.01
///
/// # Formula
/// ```text
/// Θ = 0.01 * (-S*φ(d₁)*σ/(2√T) - r*K*e^(-rT)*Φ(d₂))
/// ```
pub fn call_theta(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    terms(s, k, t, r, sigma).call_theta()
}

/// Theta for a European put, scaled by 0.01
pub fn put_theta(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    terms(s, k, t, r, sigma).put_theta()
}

/// Vega (∂V/∂σ) per 1% volatility move
///
/// # Formula
/// ```text
/// ν = 0.01 * S * φ(d₁) * √T
/// ```
pub fn call_vega(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    terms(s, k, t, r, sigma).vega()
}

pub fn put_vega(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    terms(s, k, t, r, sigma).vega()
}

/// Rho (∂V/∂r) for a European call per 1% rate move
///
/// # Formula
/// ```text
/// ρ = 0.01 * K * T * e^(-rT) * Φ(d₂)
/// ```
pub fn call_rho(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    terms(s, k, t, r, sigma).call_rho()
}

/// Rho for a European put, non-positive
pub fn put_rho(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    terms(s, k, t, r, sigma).put_rho()
}
