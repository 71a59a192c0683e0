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

//! Value types for the trading domain model.
//!
//! This module provides the immutable [`Price`] value type, which uses fixed-point
//! arithmetic internally for deterministic calculations while providing a natural
//! numeric interface.
//!
//! # Immutability
//!
//! Value types are **immutable** - once constructed, their values cannot change.
//! This design ensures thread safety and predictable behavior when shared across
//! book and analytics components.
//!
//! # Precision
//!
//! Each value type stores a precision field indicating the number of decimal places.
//! The maximum precision is defined by [`fixed::FIXED_PRECISION`]. Two prices
//! constructed at different precisions compare equal when they represent the same
//! fixed-point value, so `1.5` at precision 1 and `1.50` at precision 2 occupy the
//! same level in an order book.
//!
//! # Constraints
//!
//! - [`Price`]: Signed values allowed (can represent negative prices for spreads, etc.).
//!   Values must be finite; NaN and infinities are rejected at construction.

pub mod fixed;
pub mod price;

// Re-exports
pub use price::{PRICE_MAX, PRICE_MIN, PRICE_RAW_MAX, PRICE_RAW_MIN, Price, PriceRaw};
