//! Static conversion table.
//!
//! The table maps ordered `(from, to)` kind pairs to a multiplicative factor:
//!
//! ```text
//! v_to = v_from * factor(from, to)
//! ```
//!
//! Every supported pair is listed explicitly in both directions. Nothing is derived from
//! dimensions or chained through a canonical unit, and there are no identity entries.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{ConversionError, ConversionResult};
use crate::kind::UnitKind;

/// One row of the conversion table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionEntry {
    /// Source kind.
    pub from: UnitKind,
    /// Destination kind.
    pub to: UnitKind,
    /// Multiplier applied to the source quantity.
    pub factor: f64,
}

const fn entry(from: UnitKind, to: UnitKind, factor: f64) -> ConversionEntry {
    ConversionEntry { from, to, factor }
}

/// Declared entries. Reciprocal factors are computed, not transcribed.
static ENTRIES: [ConversionEntry; 6] = [
    entry(UnitKind::Meter, UnitKind::Kilometer, 1.0 / 1000.0),
    entry(UnitKind::Kilometer, UnitKind::Meter, 1000.0),
    entry(UnitKind::MetersPerSecond, UnitKind::KilometersPerHour, 3.6),
    entry(UnitKind::KilometersPerHour, UnitKind::MetersPerSecond, 1.0 / 3.6),
    entry(UnitKind::Second, UnitKind::Hour, 1.0 / 3600.0),
    entry(UnitKind::Hour, UnitKind::Second, 3600.0),
];

static INDEX: Lazy<HashMap<(UnitKind, UnitKind), f64>> = Lazy::new(|| {
    let index: HashMap<_, _> = ENTRIES
        .iter()
        .map(|e| ((e.from, e.to), e.factor))
        .collect();
    log::debug!("Conversion table initialized with {} entries", index.len());
    index
});

/// Read-only view of the process-wide conversion table.
///
/// # Example
///
/// ```rust
/// use unitconv::{ConversionTable, UnitKind};
///
/// assert!(ConversionTable::is_compatible(UnitKind::Hour, UnitKind::Second));
/// assert!(!ConversionTable::is_compatible(UnitKind::Hour, UnitKind::Meter));
/// assert_eq!(ConversionTable::factor(UnitKind::Hour, UnitKind::Second), Ok(3600.0));
/// ```
pub struct ConversionTable;

impl ConversionTable {
    /// `true` iff the table has an entry for the ordered pair.
    #[inline]
    pub fn is_compatible(from: UnitKind, to: UnitKind) -> bool {
        INDEX.contains_key(&(from, to))
    }

    /// Factor for the ordered pair.
    ///
    /// # Errors
    ///
    /// [`ConversionError::UnknownConversion`] when the pair has no entry.
    #[inline]
    pub fn factor(from: UnitKind, to: UnitKind) -> ConversionResult<f64> {
        INDEX
            .get(&(from, to))
            .copied()
            .ok_or(ConversionError::UnknownConversion { from, to })
    }

    /// All entries, in declaration order.
    pub fn entries() -> impl Iterator<Item = &'static ConversionEntry> {
        ENTRIES.iter()
    }
}
