//! Extern "C" API for FFI consumers.
//!
//! # Safety
//!
//! All functions in this module:
//! - Never panic across FFI boundaries (all panics are caught and converted to error codes)
//! - Check output pointers for null before writing
//! - Leave outputs untouched when they return an error

use crate::types::{
    status_of, UconvQuantity, UCONV_ERR_NULL_OUT, UCONV_ERR_UNKNOWN_KIND, UCONV_OK,
};
use core::ffi::c_char;
use unitconv::{convert, ConversionTable, UnitFactory, UnitKind, UnitValue};

/// Runs `body`, handing `on_panic` back to the C caller if it unwinds.
fn guarded<T>(on_panic: T, body: impl FnOnce() -> T) -> T {
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(body)).unwrap_or(on_panic)
}

/// Resolves a `(from, to)` pair of raw discriminants.
fn kind_pair(from: u32, to: u32) -> Option<(UnitKind, UnitKind)> {
    Some((UnitKind::from_u32(from)?, UnitKind::from_u32(to)?))
}

fn kind_name_cstr(kind: UnitKind) -> *const c_char {
    match kind {
        UnitKind::Meter => c"Meter".as_ptr(),
        UnitKind::Kilometer => c"Kilometer".as_ptr(),
        UnitKind::MetersPerSecond => c"MetersPerSecond".as_ptr(),
        UnitKind::KilometersPerHour => c"KilometersPerHour".as_ptr(),
        UnitKind::Second => c"Second".as_ptr(),
        UnitKind::Hour => c"Hour".as_ptr(),
    }
}

// =============================================================================
// Kind Validation / Info Functions
// =============================================================================

/// Checks if a kind discriminant names a supported unit.
///
/// # Arguments
///
/// * `kind` - Raw `UnitKind` discriminant (0 = Meter ... 5 = Hour)
#[no_mangle]
pub extern "C" fn uconv_kind_is_valid(kind: u32) -> bool {
    guarded(false, || UnitKind::from_u32(kind).is_some())
}

/// Gets the name of a unit kind as a NUL-terminated C string.
///
/// # Arguments
///
/// * `kind` - Raw `UnitKind` discriminant
///
/// # Returns
///
/// A pointer to a static string such as `"MetersPerSecond"`, or null if the kind is unknown.
/// The caller must not free or modify the returned string.
#[no_mangle]
pub extern "C" fn uconv_kind_name(kind: u32) -> *const c_char {
    guarded(core::ptr::null(), || {
        match UnitKind::from_u32(kind) {
            Some(kind) => kind_name_cstr(kind),
            None => core::ptr::null(),
        }
    })
}

/// Checks if the conversion table has an entry for `from -> to`.
///
/// Pairs are ordered, and a kind is never compatible with itself.
///
/// # Arguments
///
/// * `from` - Source kind discriminant
/// * `to` - Destination kind discriminant
/// * `out` - Receives `true` if a conversion exists
///
/// # Returns
///
/// * `UCONV_OK` on success
/// * `UCONV_ERR_NULL_OUT` if `out` is null
/// * `UCONV_ERR_UNKNOWN_KIND` if either kind is not recognized
///
/// # Safety
///
/// `out` must be null or point to writable memory for a `bool`.
#[no_mangle]
pub unsafe extern "C" fn uconv_kinds_compatible(from: u32, to: u32, out: *mut bool) -> i32 {
    guarded(UCONV_ERR_UNKNOWN_KIND, || {
        if out.is_null() {
            return UCONV_ERR_NULL_OUT;
        }

        let Some((from, to)) = kind_pair(from, to) else {
            return UCONV_ERR_UNKNOWN_KIND;
        };

        // SAFETY: We checked that `out` is not null
        unsafe { *out = ConversionTable::is_compatible(from, to) };
        UCONV_OK
    })
}

/// Gets the conversion factor for `from -> to`.
///
/// # Arguments
///
/// * `from` - Source kind discriminant
/// * `to` - Destination kind discriminant
/// * `out` - Receives the factor a `from` quantity is multiplied by
///
/// # Returns
///
/// * `UCONV_OK` on success
/// * `UCONV_ERR_NULL_OUT` if `out` is null
/// * `UCONV_ERR_UNKNOWN_KIND` if either kind is not recognized
/// * `UCONV_ERR_UNKNOWN_CONVERSION` if the pair has no table entry
///
/// # Safety
///
/// `out` must be null or point to writable memory for an `f64`.
#[no_mangle]
pub unsafe extern "C" fn uconv_conversion_factor(from: u32, to: u32, out: *mut f64) -> i32 {
    guarded(UCONV_ERR_UNKNOWN_KIND, || {
        if out.is_null() {
            return UCONV_ERR_NULL_OUT;
        }

        let Some((from, to)) = kind_pair(from, to) else {
            return UCONV_ERR_UNKNOWN_KIND;
        };

        match ConversionTable::factor(from, to) {
            Ok(factor) => {
                // SAFETY: We checked that `out` is not null
                unsafe { *out = factor };
                UCONV_OK
            }
            Err(e) => status_of(&e),
        }
    })
}

// =============================================================================
// Quantity Construction and Conversion Functions
// =============================================================================

/// Creates a validated quantity.
///
/// # Arguments
///
/// * `value` - Quantity; must be finite and strictly positive
/// * `kind` - Unit kind discriminant
/// * `out` - Receives the quantity
///
/// # Returns
///
/// * `UCONV_OK` on success
/// * `UCONV_ERR_NULL_OUT` if `out` is null
/// * `UCONV_ERR_UNKNOWN_KIND` if the kind is not recognized
/// * `UCONV_ERR_INVALID_VALUE` if `value` is NaN, infinite, zero or negative
///
/// # Safety
///
/// `out` must be null or point to writable memory for an `UconvQuantity`.
#[no_mangle]
pub unsafe extern "C" fn uconv_quantity_make(
    value: f64,
    kind: u32,
    out: *mut UconvQuantity,
) -> i32 {
    guarded(UCONV_ERR_UNKNOWN_KIND, || {
        if out.is_null() {
            return UCONV_ERR_NULL_OUT;
        }

        match UnitFactory::create_from_raw(kind, value) {
            Ok(unit) => {
                // SAFETY: We checked that `out` is not null
                unsafe { *out = unit.into() };
                UCONV_OK
            }
            Err(e) => status_of(&e),
        }
    })
}

/// Creates an empty destination quantity (value `0.0`) of the given kind.
///
/// The result is meant to be passed as `dst` to [`uconv_quantity_convert`].
///
/// # Arguments
///
/// * `kind` - Unit kind discriminant
/// * `out` - Receives the placeholder
///
/// # Returns
///
/// * `UCONV_OK` on success
/// * `UCONV_ERR_NULL_OUT` if `out` is null
/// * `UCONV_ERR_UNKNOWN_KIND` if the kind is not recognized
///
/// # Safety
///
/// `out` must be null or point to writable memory for an `UconvQuantity`.
#[no_mangle]
pub unsafe extern "C" fn uconv_quantity_empty(kind: u32, out: *mut UconvQuantity) -> i32 {
    guarded(UCONV_ERR_UNKNOWN_KIND, || {
        if out.is_null() {
            return UCONV_ERR_NULL_OUT;
        }

        let Some(kind) = UnitKind::from_u32(kind) else {
            return UCONV_ERR_UNKNOWN_KIND;
        };

        // SAFETY: We checked that `out` is not null
        unsafe { *out = UnitValue::empty(kind).into() };
        UCONV_OK
    })
}

/// Converts `src` into the kind already stored in `*dst`, writing `dst->value`.
///
/// `dst->kind` is never changed. On error `*dst` is left untouched.
///
/// # Arguments
///
/// * `src` - Source quantity, passed by value and validated like [`uconv_quantity_make`]
/// * `dst` - Destination whose `kind` selects the target unit; its `value` is overwritten
///
/// # Returns
///
/// * `UCONV_OK` on success
/// * `UCONV_ERR_NULL_OUT` if `dst` is null
/// * `UCONV_ERR_UNKNOWN_KIND` if either kind is not recognized
/// * `UCONV_ERR_INVALID_VALUE` if `src.value` is NaN, infinite, zero or negative
/// * `UCONV_ERR_INCOMPATIBLE` if the table has no entry for the pair
/// * `UCONV_ERR_INVALID_VALUE` if the result overflows to infinity or underflows to zero
///
/// # Safety
///
/// `dst` must be null or point to a valid, writable `UconvQuantity`.
#[no_mangle]
pub unsafe extern "C" fn uconv_quantity_convert(src: UconvQuantity, dst: *mut UconvQuantity) -> i32 {
    guarded(UCONV_ERR_UNKNOWN_KIND, || {
        if dst.is_null() {
            return UCONV_ERR_NULL_OUT;
        }

        // SAFETY: We checked that `dst` is not null
        let dst = unsafe { &mut *dst };

        let source = match UnitFactory::create_from_raw(src.kind, src.value) {
            Ok(source) => source,
            Err(e) => return status_of(&e),
        };
        let Some(dst_kind) = dst.unit_kind() else {
            return UCONV_ERR_UNKNOWN_KIND;
        };

        let mut destination = UnitValue::empty(dst_kind);
        match convert(&source, &mut destination) {
            Ok(()) => {
                dst.value = destination.quantity();
                UCONV_OK
            }
            Err(e) => status_of(&e),
        }
    })
}

// =============================================================================
// Version Info
// =============================================================================

/// Returns the FFI ABI version.
///
/// Incremented when breaking changes are made to the ABI.
#[no_mangle]
pub extern "C" fn uconv_ffi_version() -> u32 {
    1
}
