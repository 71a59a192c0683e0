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

//! Functions for parsing strings.

/// Returns the decimal precision inferred from the given string.
///
/// Handles both fixed-point (`"44.999"`) and scientific (`"1e-5"`) notation.
/// Strings without a decimal component return a precision of zero.
#[must_use]
pub fn precision_from_str(s: &str) -> u8 {
    let lower_s = s.to_lowercase();

    // Handle scientific notation
    if lower_s.contains("e-") {
        return lower_s
            .rsplit("e-")
            .next()
            .and_then(|exp| exp.parse::<u8>().ok())
            .unwrap_or(0);
    }

    match lower_s.rsplit_once('.') {
        Some((_, decimal_part)) => decimal_part.len() as u8,
        None => 0,
    }
}
