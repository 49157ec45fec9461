//! Error types for unit construction and conversion.

use crate::kind::UnitKind;

/// Result type for unit operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Error type for unit construction, lookup and conversion.
///
/// Equality compares `InvalidValue` quantities bit for bit, so two errors carrying the same
/// NaN compare equal.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// The quantity is NaN, infinite, zero or negative.
    #[error("Invalid unit value. Value must be greater than 0 and not NaN or Infinity.")]
    InvalidValue {
        /// The rejected quantity.
        value: f64,
    },

    /// The conversion table has no entry for the requested pair.
    #[error("Conversion from {from} to {to} is not allowed")]
    IncompatibleUnits {
        /// Source kind.
        from: UnitKind,
        /// Destination kind.
        to: UnitKind,
    },

    /// A factor was requested for a pair the table does not contain.
    #[error("No conversion factor from {from} to {to}")]
    UnknownConversion {
        /// Source kind.
        from: UnitKind,
        /// Destination kind.
        to: UnitKind,
    },

    /// No unit kind matches the given tag.
    #[error("Unknown unit kind: {0}")]
    UnknownKind(String),
}

impl PartialEq for ConversionError {
    fn eq(&self, other: &Self) -> bool {
        use ConversionError::*;
        match (self, other) {
            (InvalidValue { value: a }, InvalidValue { value: b }) => a.to_bits() == b.to_bits(),
            (
                IncompatibleUnits { from: f1, to: t1 },
                IncompatibleUnits { from: f2, to: t2 },
            ) => f1 == f2 && t1 == t2,
            (
                UnknownConversion { from: f1, to: t1 },
                UnknownConversion { from: f2, to: t2 },
            ) => f1 == f2 && t1 == t2,
            (UnknownKind(a), UnknownKind(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_equality_is_bitwise() {
        let nan = ConversionError::InvalidValue { value: f64::NAN };
        assert_eq!(nan, nan.clone());
        assert_eq!(
            crate::UnitValue::new(f64::NAN, UnitKind::Meter),
            Err(ConversionError::InvalidValue { value: f64::NAN })
        );

        let zero = ConversionError::InvalidValue { value: 0.0 };
        let neg_zero = ConversionError::InvalidValue { value: -0.0 };
        assert_ne!(zero, neg_zero);
    }

    #[test]
    fn variants_with_same_kinds_are_distinct() {
        let incompatible = ConversionError::IncompatibleUnits {
            from: UnitKind::Meter,
            to: UnitKind::Second,
        };
        let unknown = ConversionError::UnknownConversion {
            from: UnitKind::Meter,
            to: UnitKind::Second,
        };
        assert_ne!(incompatible, unknown);
        assert_eq!(
            ConversionError::UnknownKind("Furlong".into()),
            ConversionError::UnknownKind("Furlong".into())
        );
    }
}
