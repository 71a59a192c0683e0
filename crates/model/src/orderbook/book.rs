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

//! A performant, price-aggregated order book for live order flow.

use std::fmt::Display;

use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::{
    identifiers::InstrumentId,
    orderbook::{OrderId, ladder::PriceLadder},
    types::Price,
};

/// Provides a price-aggregated order book tracking the live orders of one instrument.
///
/// Orders are keyed by their venue-assigned order ID and aggregated into price levels,
/// with constant-time access to the maximum and minimum prices. Messages referring to
/// order IDs the book cannot honor (duplicate inserts, unknown erases) are skipped
/// without mutating book state, as session feeds replay such messages routinely.
#[derive(Clone, Debug)]
pub struct OrderBook {
    /// The instrument ID for the order book.
    pub instrument_id: InstrumentId,
    /// The current count of updates applied to the order book.
    pub update_count: u64,
    pub(crate) ladder: PriceLadder,
}

impl PartialEq for OrderBook {
    fn eq(&self, other: &Self) -> bool {
        self.instrument_id == other.instrument_id
    }
}

impl Eq for OrderBook {}

impl Display for OrderBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(instrument_id={}, orders={}, levels={}, update_count={})",
            stringify!(OrderBook),
            self.instrument_id,
            self.ladder.order_count(),
            self.ladder.len(),
            self.update_count,
        )
    }
}

impl OrderBook {
    /// Creates a new [`OrderBook`] instance.
    #[must_use]
    pub fn new(instrument_id: InstrumentId) -> Self {
        Self {
            instrument_id,
            update_count: 0,
            ladder: PriceLadder::new(),
        }
    }

    /// Resets the order book to its initial empty state.
    pub fn reset(&mut self) {
        self.ladder.clear();
        self.update_count = 0;
    }

    /// Adds the order with the given ID to the book at the given price.
    ///
    /// If the order ID is already present the book is left unchanged; the first
    /// price supplied for an ID wins. Each call counts as one update.
    pub fn insert(&mut self, order_id: OrderId, price: Price) {
        self.ladder.insert(order_id, price);
        self.increment();
    }

    /// Removes the order with the given ID from the book.
    ///
    /// If the order ID is not present the book is left unchanged. Each call
    /// counts as one update.
    pub fn erase(&mut self, order_id: OrderId) {
        self.ladder.erase(order_id);
        self.increment();
    }

    /// Removes all orders and price levels from the book. Counts as one update.
    pub fn clear(&mut self) {
        self.ladder.clear();
        self.increment();
    }

    /// Returns the maximum price level with at least one live order, if any.
    #[must_use]
    pub fn max_price(&self) -> Option<Price> {
        self.ladder.max_price()
    }

    /// Returns the minimum price level with at least one live order, if any.
    #[must_use]
    pub fn min_price(&self) -> Option<Price> {
        self.ladder.min_price()
    }

    /// Returns the total number of live orders in the book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ladder.order_count()
    }

    /// Returns true if the book has no live orders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ladder.order_count() == 0
    }

    /// Returns the number of live orders resting at the given price level.
    #[must_use]
    pub fn count_at(&self, price: Price) -> usize {
        self.ladder.count_at(price)
    }

    /// Returns an iterator over price levels and their live-order counts,
    /// highest price first.
    pub fn levels(&self, depth: Option<usize>) -> impl Iterator<Item = (&Price, &usize)> {
        self.ladder
            .levels
            .iter()
            .rev()
            .take(depth.unwrap_or(usize::MAX))
    }

    /// Returns price levels as a map of price to live-order count, highest price first.
    pub fn counts_as_map(&self, depth: Option<usize>) -> IndexMap<Decimal, usize> {
        self.levels(depth)
            .map(|(price, count)| (price.as_decimal(), *count))
            .collect()
    }

    fn increment(&mut self) {
        if self.update_count == u64::MAX {
            // Debug assert to catch in development
            debug_assert!(
                self.update_count < u64::MAX,
                "Update count at u64::MAX limit (about to overflow): {}",
                self.update_count
            );

            // Spam warnings in production when at/near u64::MAX
            log::warn!(
                "Update count at u64::MAX: {} (instrument_id={})",
                self.update_count,
                self.instrument_id
            );
        }

        self.update_count = self.update_count.saturating_add(1);
    }
}
