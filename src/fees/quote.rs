// Copyright (C) 2025 Category Labs, Inc.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fee quote attached to outgoing transactions.

use super::FeeError;
use alloy::eips::eip1559::Eip1559Estimation;
use alloy::primitives::U256;
use alloy::rpc::types::TransactionRequest;
use serde::{Deserialize, Serialize};

/// EIP-1559 fee caps for a single transaction, in wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuote {
    pub max_fee_per_gas: U256,
    pub max_priority_fee_per_gas: U256,
}

impl FeeQuote {
    /// Set both fee caps on a transaction request.
    ///
    /// Transaction fields are `u128`; a quote above that range is rejected
    /// rather than truncated.
    pub fn apply(&self, tx: TransactionRequest) -> Result<TransactionRequest, FeeError> {
        let estimation = Eip1559Estimation::try_from(*self)?;
        Ok(tx
            .max_fee_per_gas(estimation.max_fee_per_gas)
            .max_priority_fee_per_gas(estimation.max_priority_fee_per_gas))
    }
}

impl From<Eip1559Estimation> for FeeQuote {
    fn from(estimation: Eip1559Estimation) -> Self {
        Self {
            max_fee_per_gas: U256::from(estimation.max_fee_per_gas),
            max_priority_fee_per_gas: U256::from(estimation.max_priority_fee_per_gas),
        }
    }
}

impl TryFrom<FeeQuote> for Eip1559Estimation {
    type Error = FeeError;

    fn try_from(quote: FeeQuote) -> Result<Self, Self::Error> {
        Ok(Self {
            max_fee_per_gas: u128::try_from(quote.max_fee_per_gas)
                .map_err(|_| FeeError::Overflow)?,
            max_priority_fee_per_gas: u128::try_from(quote.max_priority_fee_per_gas)
                .map_err(|_| FeeError::Overflow)?,
        })
    }
}
