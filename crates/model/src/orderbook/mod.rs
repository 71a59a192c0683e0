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

//! A price-aggregated order book and its supporting ladder structure.

pub mod book;
pub(crate) mod ladder;

/// The venue-assigned order ID for a live order.
///
/// IDs are unique among the orders currently resting in a book; a feed may reuse
/// an ID after the order it referred to has been erased.
pub type OrderId = u64;

// Re-exports
pub use book::OrderBook;
