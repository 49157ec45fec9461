//! ABI-stable types and status codes.

use unitconv::{UnitKind, UnitValue};

/// Success.
pub const UCONV_OK: i32 = 0;
/// The kind discriminant does not name a supported unit.
pub const UCONV_ERR_UNKNOWN_KIND: i32 = -1;
/// The conversion table has no entry for the requested pair.
pub const UCONV_ERR_INCOMPATIBLE: i32 = -2;
/// A required output pointer was null.
pub const UCONV_ERR_NULL_OUT: i32 = -3;
/// The quantity, given or computed, is NaN, infinite, zero or negative.
pub const UCONV_ERR_INVALID_VALUE: i32 = -4;
/// A factor was requested for a pair with no table entry.
pub const UCONV_ERR_UNKNOWN_CONVERSION: i32 = -5;

/// A quantity with its unit kind, laid out for C.
///
/// `kind` holds a `UnitKind` discriminant (0 = Meter ... 5 = Hour). It is a plain `u32`
/// rather than the Rust enum so that foreign callers cannot produce an invalid enum value.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UconvQuantity {
    /// Numeric quantity.
    pub value: f64,
    /// Unit kind discriminant.
    pub kind: u32,
}

impl UconvQuantity {
    /// Creates a quantity without validating either field.
    pub const fn new(value: f64, kind: UnitKind) -> Self {
        Self {
            value,
            kind: kind as u32,
        }
    }

    /// Resolves the kind discriminant.
    pub const fn unit_kind(&self) -> Option<UnitKind> {
        UnitKind::from_u32(self.kind)
    }
}

impl From<UnitValue> for UconvQuantity {
    fn from(v: UnitValue) -> Self {
        Self::new(v.quantity(), v.kind())
    }
}

/// Maps an engine error onto its status code.
pub(crate) fn status_of(err: &unitconv::ConversionError) -> i32 {
    use unitconv::ConversionError::*;
    match err {
        InvalidValue { .. } => UCONV_ERR_INVALID_VALUE,
        IncompatibleUnits { .. } => UCONV_ERR_INCOMPATIBLE,
        UnknownConversion { .. } => UCONV_ERR_UNKNOWN_CONVERSION,
        UnknownKind(_) => UCONV_ERR_UNKNOWN_KIND,
    }
}
