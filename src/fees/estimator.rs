// Copyright (C) 2025 Category Labs, Inc.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fee estimation on top of live chain data.
//!
//! [`estimate_fees`] is the pure computation: it takes a snapshot of the two
//! chain values and a [`FeeMode`] and produces a [`FeeQuote`].
//! [`GasFeeEstimator`] fetches a fresh snapshot from a [`FeeDataSource`] on
//! every call and runs the computation on it.

use super::{FeeDataSupplier, FeeError, FeeMode, FeeQuote};
use crate::rpc::FeeDataSource;
use alloy::primitives::U256;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

const HUNDRED: U256 = U256::from_limbs([100, 0, 0, 0]);

/// Chain values a quote is computed from. Never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainFeeSnapshot {
    pub base_fee_per_gas: Option<U256>,
    pub suggested_priority_fee: U256,
}

/// Compute fee caps for `mode` from a chain snapshot.
///
/// The suggested tip is raised by `priority_fee_buffer_percent` and the base
/// fee by a fixed 25% before the strategy is applied. All divisions are
/// integer divisions performed after the multiplication.
pub fn estimate_fees(
    snapshot: &ChainFeeSnapshot,
    mode: FeeMode,
    priority_fee_buffer_percent: u64,
) -> Result<FeeQuote, FeeError> {
    let base_fee = snapshot.base_fee_per_gas.ok_or(FeeError::MissingBaseFee)?;

    let buffered_priority_fee = scale_percent(
        snapshot.suggested_priority_fee,
        HUNDRED + U256::from(priority_fee_buffer_percent),
    )?;
    let scaled_base_fee = scaled_base_fee(base_fee)?;

    let priority_fee = match mode {
        FeeMode::Fixed(value) => buffered_priority_fee
            .checked_add(value)
            .ok_or(FeeError::Overflow)?,
        FeeMode::BaseFeePercentage(percent) => scale_percent(scaled_base_fee, percent)?,
        FeeMode::PriorityFeePercentage(percent) => scale_percent(
            buffered_priority_fee,
            HUNDRED.checked_add(percent).ok_or(FeeError::Overflow)?,
        )?,
        FeeMode::Default => {
            return Err(FeeError::UnsupportedStrategy(mode.strategy().to_string()));
        }
    };

    Ok(FeeQuote {
        max_fee_per_gas: scaled_base_fee
            .checked_add(priority_fee)
            .ok_or(FeeError::Overflow)?,
        max_priority_fee_per_gas: priority_fee,
    })
}

/// Base fee with 25% headroom (`* 5 / 4`).
fn scaled_base_fee(base_fee: U256) -> Result<U256, FeeError> {
    base_fee
        .checked_mul(U256::from(5))
        .map(|fee| fee / U256::from(4))
        .ok_or(FeeError::Overflow)
}

/// `amount * percent / 100`.
fn scale_percent(amount: U256, percent: U256) -> Result<U256, FeeError> {
    amount
        .checked_mul(percent)
        .map(|scaled| scaled / HUNDRED)
        .ok_or(FeeError::Overflow)
}

/// Fee-data supplier that prices every call from fresh chain reads.
pub struct GasFeeEstimator<S> {
    source: Arc<S>,
    mode: FeeMode,
    priority_fee_buffer_percent: u64,
}

impl<S: FeeDataSource> GasFeeEstimator<S> {
    pub fn new(source: Arc<S>, mode: FeeMode, priority_fee_buffer_percent: u64) -> Self {
        Self {
            source,
            mode,
            priority_fee_buffer_percent,
        }
    }

    /// Read the latest base fee, then the suggested tip, and compute a quote.
    ///
    /// A block without a base fee fails before the tip is fetched. Transport
    /// errors are returned as-is.
    pub async fn estimate(&self) -> Result<FeeQuote, FeeError> {
        let base_fee_per_gas = self.source.latest_base_fee().await?;
        if base_fee_per_gas.is_none() {
            return Err(FeeError::MissingBaseFee);
        }
        let suggested_priority_fee = self.source.suggested_priority_fee().await?;

        let snapshot = ChainFeeSnapshot {
            base_fee_per_gas,
            suggested_priority_fee,
        };
        let quote = estimate_fees(&snapshot, self.mode, self.priority_fee_buffer_percent)?;

        debug!(
            "Gas ({}): base_fee={:?}, suggested_tip={}, max_fee={}, priority={}",
            self.mode,
            snapshot.base_fee_per_gas,
            snapshot.suggested_priority_fee,
            quote.max_fee_per_gas,
            quote.max_priority_fee_per_gas
        );

        Ok(quote)
    }
}

#[async_trait]
impl<S: FeeDataSource + 'static> FeeDataSupplier for GasFeeEstimator<S> {
    async fn fee_data(&self) -> Result<FeeQuote, FeeError> {
        self.estimate().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockFeeSource;

    fn snapshot(base_fee: u64, tip: u64) -> ChainFeeSnapshot {
        ChainFeeSnapshot {
            base_fee_per_gas: Some(U256::from(base_fee)),
            suggested_priority_fee: U256::from(tip),
        }
    }

    fn quote(max_fee: u64, priority: u64) -> FeeQuote {
        FeeQuote {
            max_fee_per_gas: U256::from(max_fee),
            max_priority_fee_per_gas: U256::from(priority),
        }
    }

    #[test]
    fn fixed_adds_value_to_buffered_tip() {
        let got = estimate_fees(&snapshot(100, 10), FeeMode::Fixed(U256::from(5)), 20).unwrap();
        // tip 10 * 120 / 100 = 12, base 100 * 5 / 4 = 125
        assert_eq!(got, quote(142, 17));
    }

    #[test]
    fn base_fee_percentage_scales_headroomed_base_fee() {
        let mode = FeeMode::BaseFeePercentage(U256::from(50));
        let got = estimate_fees(&snapshot(100, 10), mode, 20).unwrap();
        assert_eq!(got, quote(187, 62));
    }

    #[test]
    fn priority_fee_percentage_raises_buffered_tip() {
        let mode = FeeMode::PriorityFeePercentage(U256::from(110));
        let got = estimate_fees(&snapshot(100, 10), mode, 20).unwrap();
        assert_eq!(got, quote(150, 25));
    }

    #[test]
    fn divisions_truncate() {
        // base 3 * 5 / 4 = 3, tip 7 * 133 / 100 = 9
        let got = estimate_fees(&snapshot(3, 7), FeeMode::Fixed(U256::ZERO), 33).unwrap();
        assert_eq!(got, quote(12, 9));
    }

    #[test]
    fn max_fee_never_below_priority_fee() {
        let modes = [
            FeeMode::Fixed(U256::from(1_000_000_000u64)),
            FeeMode::BaseFeePercentage(U256::from(500)),
            FeeMode::PriorityFeePercentage(U256::ZERO),
        ];
        for base_fee in [0u64, 1, 7, 30_000_000_000] {
            for tip in [0u64, 3, 1_500_000_000] {
                for mode in modes {
                    let got = estimate_fees(&snapshot(base_fee, tip), mode, 15).unwrap();
                    assert!(got.max_fee_per_gas >= got.max_priority_fee_per_gas);
                    assert_eq!(
                        got.max_fee_per_gas - got.max_priority_fee_per_gas,
                        U256::from(base_fee) * U256::from(5) / U256::from(4)
                    );
                }
            }
        }
    }

    #[test]
    fn missing_base_fee_fails() {
        let snapshot = ChainFeeSnapshot {
            base_fee_per_gas: None,
            suggested_priority_fee: U256::from(10),
        };
        let err = estimate_fees(&snapshot, FeeMode::Fixed(U256::from(5)), 0).unwrap_err();
        assert!(matches!(err, FeeError::MissingBaseFee));
    }

    #[test]
    fn default_mode_has_no_formula() {
        let err = estimate_fees(&snapshot(100, 10), FeeMode::Default, 0).unwrap_err();
        assert!(matches!(err, FeeError::UnsupportedStrategy(tag) if tag == "DEFAULT"));
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        let snapshot = ChainFeeSnapshot {
            base_fee_per_gas: Some(U256::MAX),
            suggested_priority_fee: U256::from(1),
        };
        let err = estimate_fees(&snapshot, FeeMode::Fixed(U256::ZERO), 0).unwrap_err();
        assert!(matches!(err, FeeError::Overflow));
    }

    #[tokio::test]
    async fn estimator_reads_fresh_chain_values() {
        let source = Arc::new(MockFeeSource::new(Some(100), 10));
        let estimator =
            GasFeeEstimator::new(source.clone(), FeeMode::Fixed(U256::from(5)), 20);

        assert_eq!(estimator.estimate().await.unwrap(), quote(142, 17));

        source.set_base_fee(Some(200));
        // base 200 * 5 / 4 = 250
        assert_eq!(estimator.estimate().await.unwrap(), quote(267, 17));
        assert_eq!(source.block_reads(), 2);
        assert_eq!(source.tip_reads(), 2);
    }

    #[tokio::test]
    async fn estimator_stops_before_tip_read_without_base_fee() {
        let source = Arc::new(MockFeeSource::new(None, 10));
        let estimator =
            GasFeeEstimator::new(source.clone(), FeeMode::Fixed(U256::from(5)), 20);

        let err = estimator.estimate().await.unwrap_err();
        assert!(matches!(err, FeeError::MissingBaseFee));
        assert_eq!(source.block_reads(), 1);
        assert_eq!(source.tip_reads(), 0);
    }

    #[tokio::test]
    async fn estimator_propagates_transport_errors() {
        let source = Arc::new(MockFeeSource::failing("connection reset"));
        let estimator =
            GasFeeEstimator::new(source, FeeMode::BaseFeePercentage(U256::from(50)), 0);

        let err = estimator.estimate().await.unwrap_err();
        assert!(matches!(err, FeeError::Transport(_)));
    }
}
