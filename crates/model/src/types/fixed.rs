// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Functions for handling fixed-point arithmetic.
//!
//! This module provides constants and functions that enforce a fixed-point precision strategy,
//! ensuring consistent precision and scaling across various types and calculations.
//!
//! # Raw Value Requirements
//!
//! When constructing value types like [`Price`] using `from_raw`, the raw value **must** be a
//! valid multiple of the scale factor for the given precision. Valid raw values should ideally
//! come from:
//!
//! - Accessing the `.raw` field of an existing value (e.g., `price.raw`)
//! - Using the fixed-point conversion functions in this module
//!
//! Raw values that are not valid multiples will cause a panic on construction in debug builds,
//! and may result in incorrect values in release builds.
//!
//! [`Price`]: crate::types::Price

use std::fmt::Display;

use tickline_core::correctness::FAILED;

/// The maximum fixed-point precision.
pub const FIXED_PRECISION: u8 = 9;

/// The scalar value corresponding to the maximum precision (10^9).
pub const FIXED_SCALAR: f64 = 1_000_000_000.0;

/// Precomputed powers of 10 for fast scale lookup.
///
/// Index i contains 10^i. Table covers 10^0 through 10^9 (sufficient for FIXED_PRECISION).
/// Used by [`check_fixed_raw_i64`] to avoid runtime exponentiation.
const POWERS_OF_10: [u64; 10] = [
    1,             // 10^0
    10,            // 10^1
    100,           // 10^2
    1_000,         // 10^3
    10_000,        // 10^4
    100_000,       // 10^5
    1_000_000,     // 10^6
    10_000_000,    // 10^7
    100_000_000,   // 10^8
    1_000_000_000, // 10^9
];

// Compile-time verification that FIXED_PRECISION is within table bounds.
// We index POWERS_OF_10[FIXED_PRECISION] when precision=0, so need strict `<`.
const _: () = assert!(
    (FIXED_PRECISION as usize) < POWERS_OF_10.len(),
    "FIXED_PRECISION exceeds POWERS_OF_10 table size"
);

/// Checks if a given `precision` value is within the allowed fixed-point precision range.
///
/// # Errors
///
/// Returns an error if `precision` exceeds [`FIXED_PRECISION`].
pub fn check_fixed_precision(precision: u8) -> anyhow::Result<()> {
    if precision > FIXED_PRECISION {
        anyhow::bail!(
            "`precision` exceeded maximum `FIXED_PRECISION` ({FIXED_PRECISION}), was {precision}"
        )
    }

    Ok(())
}

/// Builds the error for invalid fixed-point raw values (cold path).
#[cold]
fn invalid_raw_error(
    raw: impl Display,
    precision: u8,
    remainder: impl Display,
    scale: impl Display,
) -> anyhow::Error {
    anyhow::anyhow!(
        "Invalid fixed-point raw value {raw} for precision {precision}: \
         remainder {remainder} when divided by scale {scale}. \
         Raw value should be a multiple of {scale}. \
         This indicates data corruption or incorrect precision/scaling upstream"
    )
}

/// Checks that a raw signed fixed-point value has no spurious bits beyond the precision scale.
///
/// For a given precision P where P < FIXED_PRECISION, valid raw values must be exact
/// multiples of 10^(FIXED_PRECISION - P). Any non-zero remainder indicates data corruption
/// or incorrect scaling upstream. When `precision == FIXED_PRECISION`, every bit of the
/// raw value is significant and the check passes trivially.
///
/// # Errors
///
/// Returns an error if the raw value has non-zero bits beyond the precision scale.
#[inline(always)]
pub fn check_fixed_raw_i64(raw: i64, precision: u8) -> anyhow::Result<()> {
    if precision >= FIXED_PRECISION {
        return Ok(());
    }

    let exp = usize::from(FIXED_PRECISION - precision);
    let scale = POWERS_OF_10[exp] as i64;
    let remainder = raw % scale;

    if remainder != 0 {
        return Err(invalid_raw_error(raw, precision, remainder, scale));
    }

    Ok(())
}

/// Converts an `f64` value to a raw fixed-point `i64` representation with a specified precision.
///
/// # Precision and Rounding
///
/// This function performs IEEE 754 "round half to even" rounding at the specified precision
/// before scaling to the fixed-point representation. The rounding is intentionally applied
/// at the user-specified precision level to ensure values are correctly represented
/// without accumulating floating-point errors during scaling.
///
/// # Panics
///
/// Panics if `precision` exceeds [`FIXED_PRECISION`].
#[must_use]
pub fn f64_to_fixed_i64(value: f64, precision: u8) -> i64 {
    check_fixed_precision(precision).expect(FAILED);
    let pow1 = 10_i64.pow(u32::from(precision));
    let pow2 = 10_i64.pow(u32::from(FIXED_PRECISION - precision));
    let rounded = (value * pow1 as f64).round() as i64;
    rounded * pow2
}

/// Converts a raw fixed-point `i64` value back to an `f64` value.
#[must_use]
pub fn fixed_i64_to_f64(value: i64) -> f64 {
    (value as f64) / FIXED_SCALAR
}
