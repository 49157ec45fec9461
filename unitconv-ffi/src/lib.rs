//! C-compatible FFI bindings for `unitconv` unit conversions.
//!
//! # Quick Start (C/C++)
//!
//! Include the generated header (`include/unitconv.h`) and link against the library:
//!
//! ```c
//! #include "unitconv.h"
//!
//! UconvQuantity seconds;
//! uconv_quantity_make(3600.0, 4 /* Second */, &seconds);
//!
//! UconvQuantity hours;
//! uconv_quantity_empty(5 /* Hour */, &hours);
//!
//! int32_t status = uconv_quantity_convert(seconds, &hours);
//! if (status == UCONV_OK) {
//!     // hours.value == 1.0
//! }
//! ```
//!
//! # Kind Discriminants
//!
//! Kinds travel as `u32` values matching `unitconv::UnitKind`:
//!
//! | value | kind |
//! |---|---|
//! | 0 | Meter |
//! | 1 | Kilometer |
//! | 2 | MetersPerSecond |
//! | 3 | KilometersPerHour |
//! | 4 | Second |
//! | 5 | Hour |
//!
//! # Error Handling
//!
//! All fallible functions return status codes:
//!
//! - [`UCONV_OK`] (0): Success
//! - [`UCONV_ERR_UNKNOWN_KIND`] (-1): Invalid kind discriminant
//! - [`UCONV_ERR_INCOMPATIBLE`] (-2): No conversion between the two kinds
//! - [`UCONV_ERR_NULL_OUT`] (-3): Null output pointer
//! - [`UCONV_ERR_INVALID_VALUE`] (-4): NaN, infinite, zero or negative quantity, as input or as a conversion result
//! - [`UCONV_ERR_UNKNOWN_CONVERSION`] (-5): Factor requested for a pair with no entry
//!
//! # Thread Safety
//!
//! All functions are thread-safe. The library contains no global mutable state.

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

mod ffi;
mod types;

pub use ffi::{
    uconv_conversion_factor, uconv_ffi_version, uconv_kind_is_valid, uconv_kind_name,
    uconv_kinds_compatible, uconv_quantity_convert, uconv_quantity_empty, uconv_quantity_make,
};

pub use types::{
    UconvQuantity, UCONV_ERR_INCOMPATIBLE, UCONV_ERR_INVALID_VALUE, UCONV_ERR_NULL_OUT,
    UCONV_ERR_UNKNOWN_CONVERSION, UCONV_ERR_UNKNOWN_KIND, UCONV_OK,
};
