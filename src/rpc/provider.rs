// Copyright (C) 2025 Category Labs, Inc.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Provider setup for fee reads.

use alloy::{
    providers::{Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};

/// Configuration for RPC connection.
#[derive(Debug, Clone)]
pub struct RpcConfig {
    pub rpc_url: String,
}

/// Create a read-only HTTP provider from config.
///
/// No wallet is attached: fee estimation never signs.
pub fn create_provider(config: &RpcConfig) -> Result<impl Provider + Clone, String> {
    let url: Url = config
        .rpc_url
        .parse()
        .map_err(|e| format!("Invalid RPC URL: {e}"))?;

    Ok(ProviderBuilder::new().connect_http(url))
}
