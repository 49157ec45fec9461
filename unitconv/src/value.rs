//! Quantity values tagged with their unit kind.

use core::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, ConversionResult};
use crate::kind::UnitKind;

/// Checks that `value` is usable as an explicit quantity.
///
/// A quantity must be finite and strictly positive.
///
/// ```rust
/// use unitconv::validate_quantity;
///
/// assert!(validate_quantity(2.5).is_ok());
/// assert!(validate_quantity(0.0).is_err());
/// assert!(validate_quantity(f64::NAN).is_err());
/// ```
#[inline]
pub fn validate_quantity(value: f64) -> ConversionResult<f64> {
    // NaN fails `value > 0.0`, so it needs no separate check.
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConversionError::InvalidValue { value })
    }
}

/// A quantity together with the unit it is expressed in.
///
/// Values built with [`UnitValue::new`] always hold a finite, strictly positive quantity.
/// [`UnitValue::empty`] builds a destination placeholder holding `0.0` that is meant to be
/// filled by [`crate::convert`], which only ever stores valid quantities.
///
/// With serde a value travels as `{"kind": ..., "quantity": ...}`. A placeholder omits
/// `quantity`. An explicit quantity is validated on the way in, and `null` is rejected.
///
/// Rendering uses Rust's `f64` formatting with `.` as decimal separator:
///
/// ```rust
/// use unitconv::{UnitKind, UnitValue};
///
/// let km = UnitValue::new(0.001, UnitKind::Kilometer).unwrap();
/// assert_eq!(km.to_string(), "0.001 Kilometer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawUnitValue", try_from = "RawUnitValue")]
pub struct UnitValue {
    kind: UnitKind,
    quantity: f64,
}

impl UnitValue {
    /// Creates a value, rejecting NaN, infinite, zero and negative quantities.
    pub fn new(quantity: f64, kind: UnitKind) -> ConversionResult<Self> {
        let quantity = validate_quantity(quantity)?;
        Ok(Self { kind, quantity })
    }

    /// Creates an unfilled destination placeholder for `kind`.
    pub const fn empty(kind: UnitKind) -> Self {
        Self {
            kind,
            quantity: 0.0,
        }
    }

    /// Raw quantity.
    #[inline]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Unit kind, fixed at construction.
    #[inline]
    pub const fn kind(&self) -> UnitKind {
        self.kind
    }

    /// `true` while this is a placeholder that no conversion has written yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quantity == 0.0
    }

    /// Overwrites the quantity. Only the conversion operation writes results.
    #[inline]
    pub(crate) fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
    }
}

impl Display for UnitValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.quantity, self.kind)
    }
}

/// Wire form of [`UnitValue`]; a missing quantity means a placeholder.
#[derive(Serialize, Deserialize)]
struct RawUnitValue {
    kind: UnitKind,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_quantity"
    )]
    quantity: Option<f64>,
}

/// Only runs when the field is present, so `null` fails as a non-number.
fn present_quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    f64::deserialize(deserializer).map(Some)
}

impl From<UnitValue> for RawUnitValue {
    fn from(value: UnitValue) -> Self {
        Self {
            kind: value.kind,
            quantity: (!value.is_empty()).then_some(value.quantity),
        }
    }
}

impl TryFrom<RawUnitValue> for UnitValue {
    type Error = ConversionError;

    fn try_from(raw: RawUnitValue) -> Result<Self, Self::Error> {
        match raw.quantity {
            Some(quantity) => UnitValue::new(quantity, raw.kind),
            None => Ok(UnitValue::empty(raw.kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_keeps_quantity_and_kind() {
        let v = UnitValue::new(42.5, UnitKind::Second).unwrap();
        assert_eq!(v.quantity(), 42.5);
        assert_eq!(v.kind(), UnitKind::Second);
        assert!(!v.is_empty());
    }

    #[test]
    fn new_rejects_invalid_quantities() {
        for bad in [-1.0, 0.0, -0.0, f64::NAN, f64::NEG_INFINITY, f64::INFINITY] {
            let err = UnitValue::new(bad, UnitKind::Meter).unwrap_err();
            assert!(
                matches!(err, ConversionError::InvalidValue { .. }),
                "{bad} should be rejected"
            );
            assert_eq!(
                err.to_string(),
                "Invalid unit value. Value must be greater than 0 and not NaN or Infinity."
            );
        }
    }

    #[test]
    fn empty_is_an_unvalidated_placeholder() {
        let v = UnitValue::empty(UnitKind::Hour);
        assert_eq!(v.quantity(), 0.0);
        assert_eq!(v.kind(), UnitKind::Hour);
        assert!(v.is_empty());
        assert_eq!(v.to_string(), "0 Hour");
    }

    #[test]
    fn display_is_locale_independent() {
        let cases = [
            (1.0, UnitKind::Meter, "1 Meter"),
            (0.001, UnitKind::Kilometer, "0.001 Kilometer"),
            (3.6, UnitKind::MetersPerSecond, "3.6 MetersPerSecond"),
            (3600.0, UnitKind::Second, "3600 Second"),
        ];
        for (quantity, kind, expected) in cases {
            assert_eq!(UnitValue::new(quantity, kind).unwrap().to_string(), expected);
        }
    }

    #[test]
    fn deserialize_validates_explicit_quantity() {
        let ok: UnitValue =
            serde_json::from_str(r#"{"kind":"Kilometer","quantity":2.0}"#).unwrap();
        assert_eq!(ok, UnitValue::new(2.0, UnitKind::Kilometer).unwrap());

        let placeholder: UnitValue = serde_json::from_str(r#"{"kind":"Hour"}"#).unwrap();
        assert!(placeholder.is_empty());

        let bad = serde_json::from_str::<UnitValue>(r#"{"kind":"Meter","quantity":-3.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn deserialize_rejects_null_quantity() {
        let err = serde_json::from_str::<UnitValue>(r#"{"kind":"Meter","quantity":null}"#);
        assert!(err.is_err());
    }

    #[test]
    fn serialize_writes_kind_and_quantity() {
        let v = UnitValue::new(1.5, UnitKind::Hour).unwrap();
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "Hour", "quantity": 1.5 }));
    }

    #[test]
    fn placeholder_serializes_without_quantity() {
        let placeholder = UnitValue::empty(UnitKind::Hour);

        let json = serde_json::to_string(&placeholder).unwrap();
        assert_eq!(json, r#"{"kind":"Hour"}"#);

        let back: UnitValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, placeholder);
    }

    #[test]
    fn converted_value_round_trips() {
        let source = UnitValue::new(1.0, UnitKind::MetersPerSecond).unwrap();
        let mut destination = UnitValue::empty(UnitKind::KilometersPerHour);
        crate::convert(&source, &mut destination).unwrap();

        let json = serde_json::to_string(&destination).unwrap();
        let back: UnitValue = serde_json::from_str(&json).unwrap();

        assert_eq!(back.kind(), UnitKind::KilometersPerHour);
        assert!((back.quantity() - destination.quantity()).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn positive_finite_quantities_are_accepted(q in 1e-300f64..1e300) {
            let v = UnitValue::new(q, UnitKind::Meter).unwrap();
            prop_assert_eq!(v.quantity(), q);
        }

        #[test]
        fn non_positive_quantities_are_rejected(q in -1e300f64..=0.0) {
            prop_assert!(UnitValue::new(q, UnitKind::Second).is_err());
        }
    }
}
