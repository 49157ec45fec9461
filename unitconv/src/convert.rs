//! The conversion operation.

use crate::error::{ConversionError, ConversionResult};
use crate::kind::UnitKind;
use crate::table::ConversionTable;
use crate::value::{validate_quantity, UnitValue};

/// Converts a bare quantity from one kind to another.
///
/// Neither the input nor the product is validated; use [`UnitValue::new`] for that. A
/// product that overflows comes back as infinity and one that underflows as `0.0`.
///
/// # Errors
///
/// [`ConversionError::IncompatibleUnits`] if the table has no entry for `(from, to)`.
///
/// # Example
///
/// ```rust
/// use unitconv::{convert_quantity, UnitKind};
///
/// let kmh = convert_quantity(1.0, UnitKind::MetersPerSecond, UnitKind::KilometersPerHour)?;
/// assert!((kmh - 3.6).abs() < 1e-12);
/// # Ok::<(), unitconv::ConversionError>(())
/// ```
#[inline]
pub fn convert_quantity(quantity: f64, from: UnitKind, to: UnitKind) -> ConversionResult<f64> {
    if !ConversionTable::is_compatible(from, to) {
        return Err(ConversionError::IncompatibleUnits { from, to });
    }

    let factor = ConversionTable::factor(from, to)?;
    Ok(quantity * factor)
}

/// Writes `source` converted into `destination`'s kind into `destination`.
///
/// `source` is only read. `destination` keeps its kind; only its quantity changes, and only
/// when the conversion succeeds.
///
/// The converted quantity must itself be a valid quantity. A source near `f64::MAX` can
/// overflow to infinity and a subnormal source can underflow to `0.0`. Both are rejected
/// rather than stored, so a filled destination never looks like an empty placeholder.
///
/// # Errors
///
/// - [`ConversionError::IncompatibleUnits`] if the two kinds have no table entry, including
///   the case where both kinds are the same.
/// - [`ConversionError::InvalidValue`] carrying the out-of-range result if the scaled
///   quantity is not finite or not strictly positive.
pub fn convert(source: &UnitValue, destination: &mut UnitValue) -> ConversionResult<()> {
    let converted = convert_quantity(source.quantity(), source.kind(), destination.kind())?;
    let converted = validate_quantity(converted)?;
    destination.set_quantity(converted);

    log::debug!("Converted {} to {}", source, destination);
    Ok(())
}
