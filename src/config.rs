// src/config.rs
use crate::error::{PricerError, PricerResult};

/// Environment variable overriding [`EvalConfig::parallel_threshold`]
pub const PARALLEL_THRESHOLD_ENV: &str = "BS_PARALLEL_THRESHOLD";

/// Batch evaluation settings
#[derive(Debug, Clone, PartialEq)]
pub struct EvalConfig {
    /// Batches with at least this many rows are evaluated on the rayon pool.
    /// Results are identical either way; only the scheduling differs.
    pub parallel_threshold: usize,
}

impl EvalConfig {
    /// Always evaluate sequentially
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }

    /// Parallelize any non-empty batch
    pub fn parallel() -> Self {
        Self {
            parallel_threshold: 1,
        }
    }

    pub fn validate(&self) -> PricerResult<()> {
        if self.parallel_threshold == 0 {
            return Err(PricerError::InvalidConfiguration {
                field: "parallel_threshold".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Defaults overridden by `BS_PARALLEL_THRESHOLD`, reading `.env` if present
    pub fn from_env() -> PricerResult<Self> {
        dotenvy::dotenv().ok();

        let mut cfg = Self::default();
        if let Ok(raw) = std::env::var(PARALLEL_THRESHOLD_ENV) {
            cfg.parallel_threshold =
                raw.trim()
                    .parse::<usize>()
                    .map_err(|e| PricerError::InvalidConfiguration {
                        field: PARALLEL_THRESHOLD_ENV.to_string(),
                        reason: e.to_string(),
                    })?;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub(crate) fn runs_parallel(&self, rows: usize) -> bool {
        rows >= self.parallel_threshold
    }
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            parallel_threshold: 4096,
        }
    }
}
