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

//! Core value types and validation functions for [Tickline](https://nautechsystems.io).
//!
//! The `tickline-core` crate provides the foundational primitives shared across the
//! Tickline crates:
//!
//! - [`SessionMillis`] timestamps for intra-session event times.
//! - Correctness checks used by constructors throughout the model.
//! - String parsing helpers for precision inference.

#![deny(unsafe_code)]

pub mod correctness;
pub mod millis;
pub mod parsing;

// Re-exports
pub use crate::millis::SessionMillis;

/// Drop-in replacement for the `float-cmp` crate's `approx_eq!` macro, which avoids
/// the dependency for the simple epsilon comparisons used in tests.
#[macro_export]
macro_rules! approx_eq {
    (f64, $lhs:expr, $rhs:expr, epsilon = $epsilon:expr) => {
        ($lhs - $rhs).abs() <= $epsilon
    };
    (f32, $lhs:expr, $rhs:expr, epsilon = $epsilon:expr) => {
        ($lhs - $rhs).abs() <= $epsilon
    };
}
