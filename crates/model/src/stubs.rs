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

//! Helper functions for stubbing domain components in tests.

use rstest::fixture;

use crate::{identifiers::InstrumentId, orderbook::OrderBook, types::Price};

/// Returns a stub instrument ID.
#[fixture]
pub fn instrument_id_aapl_xnas() -> InstrumentId {
    InstrumentId::from("AAPL.XNAS")
}

/// Returns a stub order book seeded with four orders across three price levels.
#[fixture]
pub fn stub_order_book(instrument_id_aapl_xnas: InstrumentId) -> OrderBook {
    let mut book = OrderBook::new(instrument_id_aapl_xnas);
    book.insert(100, Price::from("10.00"));
    book.insert(101, Price::from("11.50"));
    book.insert(102, Price::from("13.00"));
    book.insert(103, Price::from("13.00"));
    book
}
