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

//! The order book and session analytics domain model for [Tickline](https://nautechsystems.io).
//!
//! The `tickline-model` crate defines the value types and stateful components used to
//! track live order flow over a single trading session:
//!
//! - [`types`]: Fixed-point value types, including [`Price`](types::Price).
//! - [`identifiers`]: Domain identifiers such as [`InstrumentId`](identifiers::InstrumentId).
//! - [`orderbook`]: A price-aggregated book of live orders keyed by order ID.
//! - [`analytics`]: Streaming session statistics such as the time-weighted average price.

#![deny(unsafe_code)]

pub mod analytics;
pub mod identifiers;
pub mod orderbook;
pub mod types;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;
