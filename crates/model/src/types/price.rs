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

//! Represents a price in a market, defined by a fixed-point raw value and a precision.

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    str::FromStr,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tickline_core::{
    correctness::{FAILED, check_in_range_inclusive_f64},
    parsing::precision_from_str,
};

use crate::types::fixed::{
    FIXED_PRECISION, FIXED_SCALAR, check_fixed_precision, check_fixed_raw_i64, f64_to_fixed_i64,
    fixed_i64_to_f64,
};

/// The raw i64 fixed-point backing for [`Price`].
pub type PriceRaw = i64;

/// The maximum valid price value which can be represented.
pub const PRICE_MAX: f64 = 9_223_372_036.0;

/// The minimum valid price value which can be represented.
pub const PRICE_MIN: f64 = -9_223_372_036.0;

/// The maximum raw fixed-point value for [`PRICE_MAX`].
pub const PRICE_RAW_MAX: PriceRaw = (PRICE_MAX * FIXED_SCALAR) as PriceRaw;

/// The minimum raw fixed-point value for [`PRICE_MIN`].
pub const PRICE_RAW_MIN: PriceRaw = (PRICE_MIN * FIXED_SCALAR) as PriceRaw;

/// Represents a price in a market.
///
/// The number of decimal places may vary. For certain asset classes, prices may
/// have negative values. For example, prices for options instruments can be
/// negative under certain conditions.
///
/// Handles up to [`FIXED_PRECISION`] decimals of precision.
///
/// - [`PRICE_MAX`] - Maximum representable price value
/// - [`PRICE_MIN`] - Minimum representable price value
#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct Price {
    /// The raw fixed-point value, with `precision` defining the number of decimal places.
    pub raw: PriceRaw,
    /// The number of decimal places, with a maximum of [`FIXED_PRECISION`].
    pub precision: u8,
}

impl Price {
    /// Creates a new [`Price`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `value` is NaN, infinite, or outside the representable range
    ///   [[`PRICE_MIN`], [`PRICE_MAX`]].
    /// - `precision` exceeds [`FIXED_PRECISION`].
    pub fn new_checked(value: f64, precision: u8) -> anyhow::Result<Self> {
        check_in_range_inclusive_f64(value, PRICE_MIN, PRICE_MAX, "value")?;
        check_fixed_precision(precision)?;

        Ok(Self {
            raw: f64_to_fixed_i64(value, precision),
            precision,
        })
    }

    /// Creates a new [`Price`] instance.
    ///
    /// # Panics
    ///
    /// Panics if a correctness check fails. See [`Price::new_checked`] for more details.
    #[must_use]
    pub fn new(value: f64, precision: u8) -> Self {
        Self::new_checked(value, precision).expect(FAILED)
    }

    /// Creates a new [`Price`] instance from the given raw fixed-point `value` and `precision`.
    ///
    /// In debug builds the raw value is additionally checked to be a valid multiple of the
    /// scale factor for the given precision.
    ///
    /// # Panics
    ///
    /// Panics if `precision` exceeds [`FIXED_PRECISION`].
    #[must_use]
    pub fn from_raw(raw: PriceRaw, precision: u8) -> Self {
        check_fixed_precision(precision).expect(FAILED);
        debug_assert!(
            check_fixed_raw_i64(raw, precision).is_ok(),
            "Invalid raw value {raw} for precision {precision}"
        );

        Self { raw, precision }
    }

    /// Creates a new [`Price`] instance with the maximum representable value, with the
    /// given `precision`.
    ///
    /// # Panics
    ///
    /// Panics if `precision` exceeds [`FIXED_PRECISION`].
    #[must_use]
    pub fn max(precision: u8) -> Self {
        check_fixed_precision(precision).expect(FAILED);

        Self {
            raw: PRICE_RAW_MAX,
            precision,
        }
    }

    /// Creates a new [`Price`] instance with the minimum representable value, with the
    /// given `precision`.
    ///
    /// # Panics
    ///
    /// Panics if `precision` exceeds [`FIXED_PRECISION`].
    #[must_use]
    pub fn min(precision: u8) -> Self {
        check_fixed_precision(precision).expect(FAILED);

        Self {
            raw: PRICE_RAW_MIN,
            precision,
        }
    }

    /// Creates a new [`Price`] instance with a value of zero, with the given `precision`.
    ///
    /// # Panics
    ///
    /// Panics if `precision` exceeds [`FIXED_PRECISION`].
    #[must_use]
    pub fn zero(precision: u8) -> Self {
        check_fixed_precision(precision).expect(FAILED);

        Self { raw: 0, precision }
    }

    /// Returns `true` if the value of this instance is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw == 0
    }

    /// Returns `true` if the value of this instance is positive (> 0).
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.raw > 0
    }

    /// Returns the value of this instance as an `f64`.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        fixed_i64_to_f64(self.raw)
    }

    /// Returns the value of this instance as a correctly scaled `Decimal`.
    #[must_use]
    pub fn as_decimal(&self) -> Decimal {
        // Scale down the raw value to be compatible with the precision
        let rescaled_raw =
            self.raw / PriceRaw::pow(10, u32::from(FIXED_PRECISION - self.precision));
        Decimal::from_i128_with_scale(i128::from(rescaled_raw), u32::from(self.precision))
    }
}

impl FromStr for Price {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let float_from_input = input
            .replace('_', "")
            .parse::<f64>()
            .map_err(|err| format!("Error parsing `input` string '{input}' as f64: {err}"))?;

        Self::new_checked(float_from_input, precision_from_str(input))
            .map_err(|err| format!("{err}"))
    }
}

impl From<&str> for Price {
    /// Creates a new [`Price`] instance from the given string slice.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid price representation.
    fn from(input: &str) -> Self {
        Self::from_str(input).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Hash for Price {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Price {}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl Debug for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({self})", stringify!(Price))
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.*}",
            self.precision as usize,
            fixed_i64_to_f64(self.raw),
        )
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let price_str: String = Deserialize::deserialize(deserializer)?;
        price_str.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use tickline_core::approx_eq;

    use super::*;

    #[rstest]
    fn test_new() {
        let price = Price::new(10.01, 2);
        assert_eq!(price.raw, 10_010_000_000);
        assert_eq!(price.precision, 2);
    }

    #[rstest]
    fn test_new_checked_with_valid_value() {
        let result = Price::new_checked(44.9, 1);
        assert!(result.is_ok());
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    #[case(PRICE_MAX * 10.0)]
    #[case(PRICE_MIN * 10.0)]
    fn test_new_checked_with_invalid_value(#[case] value: f64) {
        let result = Price::new_checked(value, 2);
        assert!(result.is_err());
    }

    #[rstest]
    #[should_panic(expected = "Condition failed")]
    fn test_new_with_nan_panics() {
        let _ = Price::new(f64::NAN, 2);
    }

    #[rstest]
    #[should_panic(expected = "Condition failed")]
    fn test_new_with_invalid_precision_panics() {
        let _ = Price::new(1.0, FIXED_PRECISION + 1);
    }

    #[rstest]
    fn test_from_raw() {
        let price = Price::from_raw(10_010_000_000, 2);
        assert_eq!(price, Price::new(10.01, 2));
    }

    #[rstest]
    fn test_max() {
        let price = Price::max(2);
        assert_eq!(price.raw, PRICE_RAW_MAX);
        assert_eq!(price.as_f64(), PRICE_MAX);
    }

    #[rstest]
    fn test_min() {
        let price = Price::min(2);
        assert_eq!(price.raw, PRICE_RAW_MIN);
        assert_eq!(price.as_f64(), PRICE_MIN);
    }

    #[rstest]
    fn test_zero() {
        let price = Price::zero(0);
        assert_eq!(price.raw, 0);
        assert!(price.is_zero());
        assert!(!price.is_positive());
    }

    #[rstest]
    fn test_is_positive() {
        assert!(Price::new(0.1, 1).is_positive());
        assert!(!Price::new(-0.1, 1).is_positive());
    }

    #[rstest]
    fn test_equality_ignores_precision() {
        assert_eq!(Price::from("1.5"), Price::from("1.50"));
        assert_ne!(Price::from("1.5"), Price::from("1.51"));
    }

    #[rstest]
    fn test_ordering() {
        assert!(Price::from("10.0") < Price::from("13.0"));
        assert!(Price::from("-1.0") < Price::from("0.0"));
        assert!(Price::from("13.0") <= Price::from("13.00"));
    }

    #[rstest]
    #[case("10.0", 10_000_000_000, 1)]
    #[case("10.00", 10_000_000_000, 2)]
    #[case("-1.5", -1_500_000_000, 1)]
    #[case("42", 42_000_000_000, 0)]
    #[case("0.000000001", 1, 9)]
    fn test_from_str_valid_input(
        #[case] input: &str,
        #[case] raw: PriceRaw,
        #[case] precision: u8,
    ) {
        let price = Price::from(input);
        assert_eq!(price.raw, raw);
        assert_eq!(price.precision, precision);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("10.0.0")]
    fn test_from_str_invalid_input(#[case] input: &str) {
        assert!(Price::from_str(input).is_err());
    }

    #[rstest]
    #[should_panic(expected = "Error parsing")]
    fn test_from_str_invalid_input_panics() {
        let _ = Price::from("invalid");
    }

    #[rstest]
    fn test_as_f64() {
        let value = Price::from("13.0").as_f64();
        assert!(approx_eq!(f64, value, 13.0, epsilon = 0.000_000_001));
    }

    #[rstest]
    #[case("44.12", dec!(44.12))]
    #[case("-0.5", dec!(-0.5))]
    #[case("100", dec!(100))]
    fn test_as_decimal(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(Price::from(input).as_decimal(), expected);
    }

    #[rstest]
    fn test_string_reprs() {
        let price = Price::from("10.01");
        assert_eq!(price.to_string(), "10.01");
        assert_eq!(format!("{price:?}"), "Price(10.01)");
        assert_eq!(format!("{price}"), "10.01");
    }

    #[rstest]
    fn test_display_uses_precision() {
        assert_eq!(Price::new(13.0, 3).to_string(), "13.000");
        assert_eq!(Price::new(42.0, 0).to_string(), "42");
    }

    #[rstest]
    fn test_json_serialization() {
        let price = Price::from("10.01");
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"10.01\"");

        let deserialized: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, price);
        assert_eq!(deserialized.precision, 2);
    }
}
