use crate::error::{DomainError, Result};

/// Value object for a label number
///
/// Rules:
/// - Range 0..=999_999
/// - Always displayed as 6 zero-padded digits
/// - Successor wraps from 999_999 back to 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LabelNumber(u32);

impl LabelNumber {
    pub const MODULUS: u32 = 1_000_000;

    /// Counter value assumed when the settings document has none
    pub const INITIAL: LabelNumber = LabelNumber(117_823);

    pub fn new(value: u32) -> Result<Self> {
        if value >= Self::MODULUS {
            return Err(DomainError::InvalidLabelNumber(format!(
                "{value} is out of range (max {})",
                Self::MODULUS - 1
            )));
        }
        Ok(Self(value))
    }

    /// Parse a stored counter
    ///
    /// Any integer is accepted and reduced into range, the same way the
    /// successor arithmetic would treat it.
    pub fn parse(raw: &str) -> Result<Self> {
        let value: i64 = raw.trim().parse().map_err(|_| {
            DomainError::InvalidLabelNumber(format!("'{raw}' is not a number"))
        })?;
        Ok(Self(value.rem_euclid(Self::MODULUS as i64) as u32))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Next number in the wrapping sequence
    pub fn successor(&self) -> Self {
        Self((self.0 + 1) % Self::MODULUS)
    }
}

impl std::fmt::Display for LabelNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06}", self.0)
    }
}
