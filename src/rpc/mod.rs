// Copyright (C) 2025 Category Labs, Inc.
// SPDX-License-Identifier: GPL-3.0-or-later

//! RPC module for reading fee data from the chain.

mod provider;
mod source;

pub use provider::{create_provider, RpcConfig};
pub use source::{FeeDataSource, ProviderFeeSource};
