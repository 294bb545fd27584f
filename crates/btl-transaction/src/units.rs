use std::fmt;
use std::str::FromStr;

use crate::error::TransactionError;

/// Standard token denominations, following the System of Units prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    /// Base unit.
    I,
    /// 10³ base units.
    Ki,
    /// 10⁶ base units.
    Mi,
    /// 10⁹ base units.
    Gi,
    /// 10¹² base units.
    Ti,
    /// 10¹⁵ base units.
    Pi,
}

impl Unit {
    /// Base units per one of this denomination.
    pub fn factor(self) -> f64 {
        match self {
            Unit::I => 1.0,
            Unit::Ki => 1e3,
            Unit::Mi => 1e6,
            Unit::Gi => 1e9,
            Unit::Ti => 1e12,
            Unit::Pi => 1e15,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Unit::I => "i",
            Unit::Ki => "Ki",
            Unit::Mi => "Mi",
            Unit::Gi => "Gi",
            Unit::Ti => "Ti",
            Unit::Pi => "Pi",
        };
        write!(f, "{symbol}")
    }
}

impl FromStr for Unit {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "i" => Ok(Unit::I),
            "Ki" => Ok(Unit::Ki),
            "Mi" => Ok(Unit::Mi),
            "Gi" => Ok(Unit::Gi),
            "Ti" => Ok(Unit::Ti),
            "Pi" => Ok(Unit::Pi),
            other => Err(TransactionError::UnknownUnit(other.to_string())),
        }
    }
}

/// Convert a value between denominations.
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    value * from.factor() / to.factor()
}
