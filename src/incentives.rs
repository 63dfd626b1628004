//! Incentives
//!
//! The kinds of rebate incentive and the set of incentives a product accepts.

use std::{
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use serde::Deserialize;

/// The way a rebate amount is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncentiveType {
    /// A fixed cash amount, independent of volume.
    FixedCashAmount,

    /// A percentage of the product price, per unit of volume.
    FixedRateRebate,

    /// A fixed amount per unit of measure.
    AmountPerUom,
}

impl IncentiveType {
    /// Every incentive type, in declaration order.
    pub const ALL: [IncentiveType; 3] = [
        IncentiveType::FixedCashAmount,
        IncentiveType::FixedRateRebate,
        IncentiveType::AmountPerUom,
    ];

    /// The flag representing this incentive in a [`SupportedIncentives`] set.
    pub const fn flag(self) -> SupportedIncentives {
        match self {
            IncentiveType::FixedCashAmount => SupportedIncentives::FIXED_CASH_AMOUNT,
            IncentiveType::FixedRateRebate => SupportedIncentives::FIXED_RATE_REBATE,
            IncentiveType::AmountPerUom => SupportedIncentives::AMOUNT_PER_UOM,
        }
    }
}

impl fmt::Display for IncentiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IncentiveType::FixedCashAmount => "FixedCashAmount",
            IncentiveType::FixedRateRebate => "FixedRateRebate",
            IncentiveType::AmountPerUom => "AmountPerUom",
        };

        f.write_str(name)
    }
}

/// A set of incentive types, stored as independent bit flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SupportedIncentives {
    bits: u8,
}

impl SupportedIncentives {
    /// Supports [`IncentiveType::FixedCashAmount`].
    pub const FIXED_CASH_AMOUNT: Self = Self { bits: 1 };

    /// Supports [`IncentiveType::FixedRateRebate`].
    pub const FIXED_RATE_REBATE: Self = Self { bits: 1 << 1 };

    /// Supports [`IncentiveType::AmountPerUom`].
    pub const AMOUNT_PER_UOM: Self = Self { bits: 1 << 2 };

    /// The empty set.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// The set of every known incentive type.
    pub const fn all() -> Self {
        Self {
            bits: Self::FIXED_CASH_AMOUNT.bits
                | Self::FIXED_RATE_REBATE.bits
                | Self::AMOUNT_PER_UOM.bits,
        }
    }

    /// Raw bit representation.
    pub const fn bits(self) -> u8 {
        self.bits
    }

    /// Returns `true` when no flags are set.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` when every flag in `other` is also set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Returns `true` when the set contains the given incentive type.
    pub const fn supports(self, incentive: IncentiveType) -> bool {
        self.contains(incentive.flag())
    }

    /// Add the flags in `other`.
    pub fn insert(&mut self, other: Self) {
        self.bits |= other.bits;
    }

    /// Remove the flags in `other`.
    pub fn remove(&mut self, other: Self) {
        self.bits &= !other.bits;
    }

    /// Iterate over the incentive types in the set, in declaration order.
    pub fn iter(self) -> impl Iterator<Item = IncentiveType> {
        IncentiveType::ALL
            .into_iter()
            .filter(move |incentive| self.supports(*incentive))
    }
}

impl From<IncentiveType> for SupportedIncentives {
    fn from(incentive: IncentiveType) -> Self {
        incentive.flag()
    }
}

impl FromIterator<IncentiveType> for SupportedIncentives {
    fn from_iter<I: IntoIterator<Item = IncentiveType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, incentive| set | incentive.flag())
    }
}

impl BitOr for SupportedIncentives {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for SupportedIncentives {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl BitAnd for SupportedIncentives {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for SupportedIncentives {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl fmt::Display for SupportedIncentives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }

        let names: Vec<String> = self
            .iter()
            .map(|incentive| incentive.to_string())
            .collect();

        f.write_str(&names.join(", "))
    }
}
