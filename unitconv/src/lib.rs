//! Validated conversions between a fixed set of distance, time and velocity units.
//!
//! `unitconv` models a measured quantity as a [`UnitValue`]: an `f64` tagged with a
//! [`UnitKind`]. Conversions are looked up in a static [`ConversionTable`] that lists every
//! supported ordered pair explicitly:
//!
//! - Distance: [`UnitKind::Meter`] ↔ [`UnitKind::Kilometer`]
//! - Velocity: [`UnitKind::MetersPerSecond`] ↔ [`UnitKind::KilometersPerHour`]
//! - Time: [`UnitKind::Second`] ↔ [`UnitKind::Hour`]
//!
//! Nothing else converts. In particular there are no identity entries, so converting a kind
//! to itself is reported as [`ConversionError::IncompatibleUnits`].
//!
//! # Quick start
//!
//! ```rust
//! use unitconv::{convert, UnitKind, UnitValue};
//!
//! let seconds = UnitValue::new(3600.0, UnitKind::Second)?;
//! let mut hours = UnitValue::empty(UnitKind::Hour);
//!
//! convert(&seconds, &mut hours)?;
//! assert_eq!(hours.to_string(), "1 Hour");
//! # Ok::<(), unitconv::ConversionError>(())
//! ```
//!
//! When the kind is only known at runtime, go through the [`UnitFactory`]:
//!
//! ```rust
//! use unitconv::UnitFactory;
//!
//! let km = UnitFactory::create_by_name("Kilometer", 1.5)?;
//! assert_eq!(km.quantity(), 1.5);
//! # Ok::<(), unitconv::ConversionError>(())
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns [`ConversionResult`]. Failures never leave a destination
//! half-written: either the conversion succeeds or the destination keeps its previous value.
//!
//! # Thread safety
//!
//! The conversion table is built once and never mutated; [`UnitValue`] is a plain `Copy`
//! value. Independent conversions can run on any number of threads without locking.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod config;
mod convert;
mod error;
mod factory;
mod kind;
pub mod table;
mod value;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use convert::{convert, convert_quantity};
pub use error::{ConversionError, ConversionResult};
pub use factory::UnitFactory;
pub use kind::{Dimension, UnitKind};
pub use table::ConversionTable;
pub use value::{validate_quantity, UnitValue};
