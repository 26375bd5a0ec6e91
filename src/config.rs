// Copyright (C) 2025 Category Labs, Inc.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration module - loads settings from environment variables.

use crate::fees::{FeeMode, FeeStrategy};
use crate::rpc::RpcConfig;
use alloy::primitives::U256;

/// Fee estimator configuration.
#[derive(Debug, Clone)]
pub struct Config {
    // RPC
    pub rpc_url: String,

    // Gas
    pub fee_strategy: FeeStrategy,
    pub fee_value: U256,
    pub priority_fee_buffer_percent: u64,
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Result<Self, String> {
        Self::from_env_with_overrides(|_| None)
    }

    /// Like [`Config::from_env`], but `overrides` is consulted first for every variable.
    pub fn from_env_with_overrides(
        overrides: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, String> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| overrides(name).or_else(|| std::env::var(name).ok()))
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Malformed values are errors; fee settings never fall back silently.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        Ok(Self {
            // RPC
            rpc_url: env_var(&lookup, "RPC_URL")?,

            // Gas
            fee_strategy: parse_strategy(&env_var_or(
                &lookup,
                "GAS_FEE_STRATEGY",
                "DEFAULT",
            ))?,
            fee_value: parse_wei(&env_var_or(&lookup, "GAS_FEE_VALUE", "0"))?,
            priority_fee_buffer_percent: env_var_or(&lookup, "PRIORITY_FEE_BUFFER_PERCENT", "0")
                .trim()
                .parse()
                .map_err(|e| format!("Invalid PRIORITY_FEE_BUFFER_PERCENT: {}", e))?,
        })
    }

    pub fn fee_mode(&self) -> FeeMode {
        FeeMode::new(self.fee_strategy, self.fee_value)
    }

    pub fn rpc(&self) -> RpcConfig {
        RpcConfig {
            rpc_url: self.rpc_url.clone(),
        }
    }
}

fn env_var(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Result<String, String> {
    lookup(name).ok_or_else(|| format!("{} not set", name))
}

fn env_var_or(lookup: impl Fn(&str) -> Option<String>, name: &str, default: &str) -> String {
    lookup(name).unwrap_or_else(|| default.to_string())
}

fn parse_strategy(s: &str) -> Result<FeeStrategy, String> {
    s.parse().map_err(|e| format!("Invalid GAS_FEE_STRATEGY: {}", e))
}

/// Parse a wei amount, decimal or `0x`-prefixed hex.
fn parse_wei(s: &str) -> Result<U256, String> {
    s.trim()
        .parse::<U256>()
        .map_err(|e| format!("Invalid wei amount {}: {}", s, e))
}
