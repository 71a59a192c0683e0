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

//! Functions for condition and predicate checks similar to the *design by contract* philosophy,
//! enabling static analysis and correctness at runtime.
//!
//! Each function validates its input and returns an `anyhow::Result`, so that checked
//! constructors can propagate failures while their panicking counterparts simply `expect`
//! with the [`FAILED`] message.

/// Standard message for a failed correctness check when unwrapping with `expect`.
pub const FAILED: &str = "Condition failed";

/// Checks the string `s` has semantic meaning and contains only ASCII characters.
///
/// # Errors
///
/// Returns an error if:
/// - `s` is an empty string.
/// - `s` consists solely of whitespace characters.
/// - `s` contains one or more non-ASCII characters.
pub fn check_valid_string_ascii<T: AsRef<str>>(s: T, param: &str) -> anyhow::Result<()> {
    let s = s.as_ref();
    if s.is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty")
    }
    if s.chars().all(char::is_whitespace) {
        anyhow::bail!("invalid string for '{param}', was all whitespace")
    }
    if !s.is_ascii() {
        anyhow::bail!("invalid string for '{param}' contained a non-ASCII char, was '{s}'")
    }
    Ok(())
}

/// Checks the f64 `value` is within the inclusive range [`l`, `r`].
///
/// # Errors
///
/// Returns an error if:
/// - `value` is NaN or infinite.
/// - `value` is outside the inclusive range.
pub fn check_in_range_inclusive_f64(
    value: f64,
    l: f64,
    r: f64,
    param: &str,
) -> anyhow::Result<()> {
    if value.is_nan() || value.is_infinite() {
        anyhow::bail!("invalid f64 for '{param}', was {value}")
    }
    if value < l || value > r {
        anyhow::bail!("invalid f64 for '{param}' not in range [{l}, {r}], was {value}")
    }
    Ok(())
}
