// Copyright (C) 2025 Category Labs, Inc.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Errors raised while computing fee quotes.

use alloy::transports::TransportError;

/// Failure modes of a fee computation.
///
/// A computation either yields a complete quote or one of these; there are no
/// partial results.
#[derive(Debug, thiserror::Error)]
pub enum FeeError {
    /// The latest block carries no base fee (pre-EIP-1559 chain or incomplete response).
    #[error("baseFeePerGas is missing from the latest block")]
    MissingBaseFee,

    #[error("fee strategy not supported: {0}")]
    UnsupportedStrategy(String),

    /// Fee arithmetic left the range of the target integer type.
    #[error("fee arithmetic overflow")]
    Overflow,

    #[error(transparent)]
    Transport(#[from] TransportError),
}
