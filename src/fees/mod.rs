// Copyright (C) 2025 Category Labs, Inc.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fee estimation module.

mod error;
pub mod estimator;
mod provider;
mod quote;
pub mod strategy;

pub use error::FeeError;
pub use estimator::{estimate_fees, ChainFeeSnapshot, GasFeeEstimator};
pub use provider::{with_gas_fee_estimator, FeeDataSupplier, GasFeeProvider};
pub use quote::FeeQuote;
pub use strategy::{FeeMode, FeeStrategy};
