//! Unit construction when the kind is only known at runtime.
//!
//! The factory resolves a [`UnitKind`] (or its name, or its raw discriminant) to a
//! constructor from a closed table and applies the usual quantity validation.

use crate::error::{ConversionError, ConversionResult};
use crate::kind::UnitKind;
use crate::value::UnitValue;

type Constructor = fn(f64) -> ConversionResult<UnitValue>;

/// Factory for [`UnitValue`]s.
///
/// # Example
///
/// ```rust
/// use unitconv::{UnitFactory, UnitKind};
///
/// let h = UnitFactory::create(UnitKind::Hour, 2.0)?;
/// assert_eq!(h.to_string(), "2 Hour");
///
/// assert!(UnitFactory::create_by_name("Furlong", 1.0).is_err());
/// # Ok::<(), unitconv::ConversionError>(())
/// ```
pub struct UnitFactory;

impl UnitFactory {
    /// Builds a value of `kind`.
    ///
    /// # Errors
    ///
    /// [`ConversionError::InvalidValue`] for NaN, infinite, zero or negative quantities.
    pub fn create(kind: UnitKind, quantity: f64) -> ConversionResult<UnitValue> {
        Self::constructor(kind)(quantity)
    }

    /// Builds a value whose kind is given by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// [`ConversionError::UnknownKind`] if no kind has that name, otherwise as [`Self::create`].
    pub fn create_by_name(name: &str, quantity: f64) -> ConversionResult<UnitValue> {
        let kind: UnitKind = name.parse()?;
        Self::create(kind, quantity)
    }

    /// Builds a value whose kind is given as a raw discriminant.
    ///
    /// # Errors
    ///
    /// [`ConversionError::UnknownKind`] for discriminants outside the enumeration, otherwise
    /// as [`Self::create`].
    pub fn create_from_raw(raw: u32, quantity: f64) -> ConversionResult<UnitValue> {
        let kind = UnitKind::from_u32(raw)
            .ok_or_else(|| ConversionError::UnknownKind(format!("#{}", raw)))?;
        Self::create(kind, quantity)
    }

    fn constructor(kind: UnitKind) -> Constructor {
        match kind {
            UnitKind::Meter => Self::meters,
            UnitKind::Kilometer => Self::kilometers,
            UnitKind::MetersPerSecond => Self::meters_per_second,
            UnitKind::KilometersPerHour => Self::kilometers_per_hour,
            UnitKind::Second => Self::seconds,
            UnitKind::Hour => Self::hours,
        }
    }

    /// A distance in meters.
    pub fn meters(quantity: f64) -> ConversionResult<UnitValue> {
        UnitValue::new(quantity, UnitKind::Meter)
    }

    /// A distance in kilometers.
    pub fn kilometers(quantity: f64) -> ConversionResult<UnitValue> {
        UnitValue::new(quantity, UnitKind::Kilometer)
    }

    /// A velocity in meters per second.
    pub fn meters_per_second(quantity: f64) -> ConversionResult<UnitValue> {
        UnitValue::new(quantity, UnitKind::MetersPerSecond)
    }

    /// A velocity in kilometers per hour.
    pub fn kilometers_per_hour(quantity: f64) -> ConversionResult<UnitValue> {
        UnitValue::new(quantity, UnitKind::KilometersPerHour)
    }

    /// A duration in seconds.
    pub fn seconds(quantity: f64) -> ConversionResult<UnitValue> {
        UnitValue::new(quantity, UnitKind::Second)
    }

    /// A duration in hours.
    pub fn hours(quantity: f64) -> ConversionResult<UnitValue> {
        UnitValue::new(quantity, UnitKind::Hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_builds_every_kind() {
        for kind in UnitKind::ALL {
            let v = UnitFactory::create(kind, 1.0).unwrap();
            assert_eq!(v.kind(), kind);
            assert_eq!(v.quantity(), 1.0);
        }
    }

    #[test]
    fn create_validates_quantity() {
        for bad in [-1.0, 0.0, f64::NAN, f64::NEG_INFINITY, f64::INFINITY] {
            let err = UnitFactory::create(UnitKind::Meter, bad).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Invalid unit value. Value must be greater than 0 and not NaN or Infinity."
            );
        }
    }

    #[test]
    fn create_by_name_resolves_kind() {
        let v = UnitFactory::create_by_name("metersPerSecond", 3.6).unwrap();
        assert_eq!(v.kind(), UnitKind::MetersPerSecond);
        assert_eq!(v.to_string(), "3.6 MetersPerSecond");
    }

    #[test]
    fn create_by_name_rejects_unknown_kind() {
        assert_eq!(
            UnitFactory::create_by_name("Parsec", 1.0),
            Err(ConversionError::UnknownKind("Parsec".to_string()))
        );
    }

    #[test]
    fn unknown_kind_is_reported_before_invalid_value() {
        assert!(matches!(
            UnitFactory::create_by_name("Parsec", f64::NAN),
            Err(ConversionError::UnknownKind(_))
        ));
    }

    #[test]
    fn create_from_raw_maps_discriminants() {
        let v = UnitFactory::create_from_raw(UnitKind::Second as u32, 60.0).unwrap();
        assert_eq!(v.kind(), UnitKind::Second);

        assert_eq!(
            UnitFactory::create_from_raw(42, 1.0),
            Err(ConversionError::UnknownKind("#42".to_string()))
        );
    }
}
