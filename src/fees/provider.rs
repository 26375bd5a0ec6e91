// Copyright (C) 2025 Category Labs, Inc.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Provider wrapper with a pluggable fee-data supplier.

use super::{FeeError, FeeMode, FeeQuote, GasFeeEstimator};
use crate::rpc::FeeDataSource;
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Callback a [`GasFeeProvider`] consults when a transaction is being built.
#[async_trait]
pub trait FeeDataSupplier: Send + Sync {
    async fn fee_data(&self) -> Result<FeeQuote, FeeError>;
}

/// A fee data source plus an optional fee-data supplier.
///
/// Without a supplier, fees come from the source's built-in estimate.
pub struct GasFeeProvider<S> {
    source: Arc<S>,
    supplier: Option<Arc<dyn FeeDataSupplier>>,
}

impl<S: FeeDataSource + 'static> GasFeeProvider<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            supplier: None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Register the fee-data supplier, replacing any previous one.
    pub fn with_fee_data_getter(&mut self, supplier: impl FeeDataSupplier + 'static) -> &mut Self {
        if self.supplier.is_some() {
            debug!("Replacing registered fee data supplier");
        }
        self.supplier = Some(Arc::new(supplier));
        self
    }

    pub fn has_fee_data_supplier(&self) -> bool {
        self.supplier.is_some()
    }

    /// Fee caps for the next transaction.
    pub async fn fee_data(&self) -> Result<FeeQuote, FeeError> {
        match &self.supplier {
            Some(supplier) => supplier.fee_data().await,
            None => Ok(self.source.builtin_fee_estimate().await?),
        }
    }

    /// Set `max_fee_per_gas` and `max_priority_fee_per_gas` on `tx`.
    pub async fn fill_fees(&self, tx: TransactionRequest) -> Result<TransactionRequest, FeeError> {
        self.fee_data().await?.apply(tx)
    }
}

/// Attach a [`GasFeeEstimator`] for `mode` to `provider`.
///
/// `FeeMode::Default` leaves the provider untouched so it keeps its built-in
/// fee logic. Otherwise the estimator replaces whatever supplier was
/// registered before.
pub fn with_gas_fee_estimator<S: FeeDataSource + 'static>(
    mut provider: GasFeeProvider<S>,
    mode: FeeMode,
    priority_fee_buffer_percent: u64,
) -> GasFeeProvider<S> {
    if mode.is_default() {
        return provider;
    }

    info!(
        "⛽ Fee estimator: {} with {}% priority fee buffer",
        mode, priority_fee_buffer_percent
    );
    let estimator =
        GasFeeEstimator::new(Arc::clone(&provider.source), mode, priority_fee_buffer_percent);
    provider.with_fee_data_getter(estimator);
    provider
}
