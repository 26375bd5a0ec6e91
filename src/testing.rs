// Copyright (C) 2025 Category Labs, Inc.
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory fee data source for tests.

use crate::fees::FeeQuote;
use crate::rpc::FeeDataSource;
use alloy::primitives::U256;
use alloy::transports::{TransportError, TransportErrorKind};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Serves fixed chain values and counts reads.
///
/// The built-in estimate is `2 * base_fee + tip`, so tests can tell it apart
/// from strategy output.
pub struct MockFeeSource {
    base_fee: Mutex<Option<u64>>,
    tip: u64,
    failure: Option<String>,
    block_reads: AtomicUsize,
    tip_reads: AtomicUsize,
    builtin_reads: AtomicUsize,
}

impl MockFeeSource {
    pub fn new(base_fee: Option<u64>, tip: u64) -> Self {
        Self {
            base_fee: Mutex::new(base_fee),
            tip,
            failure: None,
            block_reads: AtomicUsize::new(0),
            tip_reads: AtomicUsize::new(0),
            builtin_reads: AtomicUsize::new(0),
        }
    }

    /// Every read fails with a transport error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new(Some(0), 0)
        }
    }

    pub fn set_base_fee(&self, base_fee: Option<u64>) {
        *self.base_fee.lock().unwrap() = base_fee;
    }

    pub fn block_reads(&self) -> usize {
        self.block_reads.load(Ordering::SeqCst)
    }

    pub fn tip_reads(&self) -> usize {
        self.tip_reads.load(Ordering::SeqCst)
    }

    pub fn builtin_reads(&self) -> usize {
        self.builtin_reads.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), TransportError> {
        match &self.failure {
            Some(message) => Err(TransportErrorKind::custom_str(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FeeDataSource for MockFeeSource {
    async fn latest_base_fee(&self) -> Result<Option<U256>, TransportError> {
        self.block_reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let base_fee = *self.base_fee.lock().unwrap();
        Ok(base_fee.map(U256::from))
    }

    async fn suggested_priority_fee(&self) -> Result<U256, TransportError> {
        self.tip_reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(U256::from(self.tip))
    }

    async fn builtin_fee_estimate(&self) -> Result<FeeQuote, TransportError> {
        self.builtin_reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        let base_fee = (*self.base_fee.lock().unwrap()).unwrap_or_default();
        Ok(FeeQuote {
            max_fee_per_gas: U256::from(2 * base_fee + self.tip),
            max_priority_fee_per_gas: U256::from(self.tip),
        })
    }
}
