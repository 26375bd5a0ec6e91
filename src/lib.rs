// Copyright (C) 2025 Category Labs, Inc.
// SPDX-License-Identifier: GPL-3.0-or-later

//! EIP-1559 fee estimation with configurable tip strategies.

pub mod config;
pub mod fees;
pub mod rpc;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use fees::{
    estimate_fees, with_gas_fee_estimator, ChainFeeSnapshot, FeeDataSupplier, FeeError, FeeMode,
    FeeQuote, FeeStrategy, GasFeeEstimator, GasFeeProvider,
};
pub use rpc::{create_provider, FeeDataSource, ProviderFeeSource, RpcConfig};
