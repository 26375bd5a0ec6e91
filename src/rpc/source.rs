// Copyright (C) 2025 Category Labs, Inc.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Chain reads needed for fee estimation.

use crate::fees::FeeQuote;
use alloy::eips::BlockNumberOrTag;
use alloy::primitives::U256;
use alloy::providers::Provider;
use alloy::transports::TransportError;
use async_trait::async_trait;

/// Live fee inputs read from the network.
#[async_trait]
pub trait FeeDataSource: Send + Sync {
    /// Base fee of the latest block; `None` when the block carries none.
    async fn latest_base_fee(&self) -> Result<Option<U256>, TransportError>;

    /// Node's suggested priority fee (`eth_maxPriorityFeePerGas`).
    async fn suggested_priority_fee(&self) -> Result<U256, TransportError>;

    /// The provider's own EIP-1559 estimate, used when no strategy is set.
    async fn builtin_fee_estimate(&self) -> Result<FeeQuote, TransportError>;
}

/// [`FeeDataSource`] backed by an alloy provider.
#[derive(Debug, Clone)]
pub struct ProviderFeeSource<P> {
    provider: P,
}

impl<P: Provider> ProviderFeeSource<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: Provider> FeeDataSource for ProviderFeeSource<P> {
    async fn latest_base_fee(&self) -> Result<Option<U256>, TransportError> {
        let block = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Latest)
            .await?;

        Ok(block
            .and_then(|block| block.header.base_fee_per_gas)
            .map(U256::from))
    }

    async fn suggested_priority_fee(&self) -> Result<U256, TransportError> {
        let fee = self.provider.get_max_priority_fee_per_gas().await?;
        Ok(U256::from(fee))
    }

    async fn builtin_fee_estimate(&self) -> Result<FeeQuote, TransportError> {
        let estimation = self.provider.estimate_eip1559_fees().await?;
        Ok(FeeQuote::from(estimation))
    }
}
