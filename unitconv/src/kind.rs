//! Unit kinds and the dimensions they measure.

use core::fmt::{Display, Formatter, Result as FmtResult};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// Physical dimension of a [`UnitKind`].
///
/// Purely descriptive: the conversion table never derives entries from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Distance.
    Length,
    /// Distance per time.
    Velocity,
    /// Duration.
    Time,
}

/// Unit identifier.
///
/// The set is closed. Discriminants are explicit and stable because the FFI layer carries
/// kinds as raw `u32` values.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Meter (m)
    Meter = 0,
    /// Kilometer (km)
    Kilometer = 1,
    /// Meters per second (m/s)
    MetersPerSecond = 2,
    /// Kilometers per hour (km/h)
    KilometersPerHour = 3,
    /// Second (s)
    Second = 4,
    /// Hour (h)
    Hour = 5,
}

impl UnitKind {
    /// Every supported kind, in discriminant order.
    pub const ALL: [UnitKind; 6] = [
        UnitKind::Meter,
        UnitKind::Kilometer,
        UnitKind::MetersPerSecond,
        UnitKind::KilometersPerHour,
        UnitKind::Second,
        UnitKind::Hour,
    ];

    /// Variant name, used for rendering and name lookup.
    pub const fn name(self) -> &'static str {
        match self {
            UnitKind::Meter => "Meter",
            UnitKind::Kilometer => "Kilometer",
            UnitKind::MetersPerSecond => "MetersPerSecond",
            UnitKind::KilometersPerHour => "KilometersPerHour",
            UnitKind::Second => "Second",
            UnitKind::Hour => "Hour",
        }
    }

    /// Dimension measured by this kind.
    pub const fn dimension(self) -> Dimension {
        match self {
            UnitKind::Meter | UnitKind::Kilometer => Dimension::Length,
            UnitKind::MetersPerSecond | UnitKind::KilometersPerHour => Dimension::Velocity,
            UnitKind::Second | UnitKind::Hour => Dimension::Time,
        }
    }

    /// Maps a raw discriminant back to a kind.
    ///
    /// Returns `None` for values outside the enumeration.
    pub const fn from_u32(value: u32) -> Option<UnitKind> {
        match value {
            0 => Some(UnitKind::Meter),
            1 => Some(UnitKind::Kilometer),
            2 => Some(UnitKind::MetersPerSecond),
            3 => Some(UnitKind::KilometersPerHour),
            4 => Some(UnitKind::Second),
            5 => Some(UnitKind::Hour),
            _ => None,
        }
    }
}

impl Display for UnitKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for UnitKind {
    type Err = ConversionError;

    /// Looks a kind up by its variant name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConversionError::UnknownKind(s.to_string()))
    }
}
