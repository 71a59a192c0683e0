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

//! Represents a ladder of price levels aggregating the live orders of an order book.

use std::{collections::BTreeMap, fmt::Display};

use ahash::AHashMap;

use crate::{orderbook::OrderId, types::Price};

/// Represents a ladder of price levels with per-level live-order counts.
///
/// Two collections are maintained in lockstep:
///
/// - `levels` maps each distinct price to the number of live orders resting at it,
///   ordered ascending so the maximum and minimum prices are the map ends.
/// - `cache` maps each live order ID to the price it rests at, giving O(1) removal
///   without scanning levels.
///
/// Every order in `cache` is counted in exactly one level, so the cache size always
/// equals the sum of level counts.
#[derive(Clone, Debug)]
pub(crate) struct PriceLadder {
    pub levels: BTreeMap<Price, usize>,
    pub cache: AHashMap<OrderId, Price>,
}

impl PriceLadder {
    /// Creates a new [`PriceLadder`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
            cache: AHashMap::new(),
        }
    }

    /// Returns the number of price levels in the ladder.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if the ladder has no price levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns the total number of live orders across all price levels.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.cache.len()
    }

    /// Adds an order to the ladder at the given price level.
    ///
    /// An order ID already present in the ladder is ignored; the first price
    /// supplied for an ID wins.
    pub fn insert(&mut self, order_id: OrderId, price: Price) {
        if self.cache.contains_key(&order_id) {
            log::debug!("Skipping insert for existing order_id={order_id}");
            return;
        }

        self.cache.insert(order_id, price);
        *self.levels.entry(price).or_insert(0) += 1;

        debug_assert_eq!(
            self.cache.len(),
            self.levels.values().sum::<usize>(),
            "Cache size should equal total orders across all levels"
        );
    }

    /// Removes an order by its ID from the ladder.
    ///
    /// An order ID not present in the ladder is ignored.
    pub fn erase(&mut self, order_id: OrderId) {
        let Some(price) = self.cache.remove(&order_id) else {
            log::debug!("Skipping erase for unknown order_id={order_id}");
            return;
        };

        match self.levels.get_mut(&price) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                self.levels.remove(&price);
                debug_assert!(
                    !self.cache.values().any(|p| *p == price),
                    "Cache should not contain removed price level {price:?}"
                );
            }
            None => debug_assert!(false, "Level should exist for cached price {price:?}"),
        }

        debug_assert_eq!(
            self.cache.len(),
            self.levels.values().sum::<usize>(),
            "Cache size should equal total orders across all levels"
        );
    }

    /// Removes all orders and price levels from the ladder.
    pub fn clear(&mut self) {
        self.levels.clear();
        self.cache.clear();
    }

    /// Returns the number of live orders resting at the given price level.
    #[must_use]
    pub fn count_at(&self, price: Price) -> usize {
        self.levels.get(&price).copied().unwrap_or(0)
    }

    /// Returns the maximum price level in the ladder.
    #[must_use]
    pub fn max_price(&self) -> Option<Price> {
        self.levels.keys().next_back().copied()
    }

    /// Returns the minimum price level in the ladder.
    #[must_use]
    pub fn min_price(&self) -> Option<Price> {
        self.levels.keys().next().copied()
    }
}

impl Default for PriceLadder {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for PriceLadder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}(levels={})", stringify!(PriceLadder), self.len())?;
        for (price, count) in self.levels.iter().rev() {
            writeln!(f, "  {price} -> {count} orders")?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl PriceLadder {
    /// Adds multiple orders to the ladder.
    pub fn insert_bulk(&mut self, orders: &[(OrderId, Price)]) {
        for (order_id, price) in orders {
            self.insert(*order_id, *price);
        }
    }
}
