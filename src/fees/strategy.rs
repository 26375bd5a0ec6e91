// Copyright (C) 2025 Category Labs, Inc.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fee strategies for transaction priority.

use super::FeeError;
use alloy::primitives::U256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy tag, as it appears in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeStrategy {
    /// Defer to the provider's built-in fee estimate.
    Default,
    /// Buffered network tip plus a fixed wei amount.
    Fixed,
    /// A percentage of the scaled base fee.
    BaseFeePercentage,
    /// Buffered network tip raised by a percentage.
    PriorityFeePercentage,
}

impl FeeStrategy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Fixed => "FIXED",
            Self::BaseFeePercentage => "BASE_FEE_PERCENTAGE",
            Self::PriorityFeePercentage => "PRIORITY_FEE_PERCENTAGE",
        }
    }
}

impl fmt::Display for FeeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeeStrategy {
    type Err = FeeError;

    /// Case-insensitive; `-` is accepted in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "DEFAULT" => Ok(Self::Default),
            "FIXED" => Ok(Self::Fixed),
            "BASE_FEE_PERCENTAGE" => Ok(Self::BaseFeePercentage),
            "PRIORITY_FEE_PERCENTAGE" => Ok(Self::PriorityFeePercentage),
            _ => Err(FeeError::UnsupportedStrategy(s.to_string())),
        }
    }
}

/// Chosen strategy together with its magnitude.
///
/// For `Fixed` the payload is an additive wei amount; for the percentage
/// variants it is an integer percentage (100 keeps the input unchanged).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeeMode {
    #[default]
    Default,
    Fixed(U256),
    BaseFeePercentage(U256),
    PriorityFeePercentage(U256),
}

impl FeeMode {
    /// Build a mode from a strategy tag and its value. `value` is ignored for `Default`.
    pub fn new(strategy: FeeStrategy, value: U256) -> Self {
        match strategy {
            FeeStrategy::Default => Self::Default,
            FeeStrategy::Fixed => Self::Fixed(value),
            FeeStrategy::BaseFeePercentage => Self::BaseFeePercentage(value),
            FeeStrategy::PriorityFeePercentage => Self::PriorityFeePercentage(value),
        }
    }

    pub fn strategy(&self) -> FeeStrategy {
        match self {
            Self::Default => FeeStrategy::Default,
            Self::Fixed(_) => FeeStrategy::Fixed,
            Self::BaseFeePercentage(_) => FeeStrategy::BaseFeePercentage,
            Self::PriorityFeePercentage(_) => FeeStrategy::PriorityFeePercentage,
        }
    }

    pub fn value(&self) -> U256 {
        match self {
            Self::Default => U256::ZERO,
            Self::Fixed(v) | Self::BaseFeePercentage(v) | Self::PriorityFeePercentage(v) => *v,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Display for FeeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "{}", FeeStrategy::Default),
            other => write!(f, "{}({})", other.strategy(), other.value()),
        }
    }
}
