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

//! A streaming time-weighted average price (TWAP) accumulator.

use std::fmt::Display;

use tickline_core::SessionMillis;

use crate::types::Price;

/// Accumulates a time-weighted average price (TWAP) over one trading session.
///
/// Samples arrive as (timestamp, price) pairs in non-decreasing timestamp order.
/// Each new sample closes the interval opened by the previous one: the previous
/// price is held constant across the interval and blended into the running average
/// weighted by the interval length in milliseconds (sample-and-hold weighting).
///
/// A sample with no price marks a gap, such as an empty book side. The interval
/// ending at a gap sample is still weighted at the previous price; the interval
/// starting at a gap sample contributes no weight, so the average and elapsed
/// time carry over unchanged until a valid price arrives.
///
/// # Thread Safety
///
/// The accumulator is not thread-safe. If shared across threads, wrap it in an
/// appropriate synchronization primitive such as `Arc<Mutex<TwapAccumulator>>`.
#[derive(Clone, Debug)]
pub struct TwapAccumulator {
    last_ts: Option<SessionMillis>,
    last_px: Option<Price>,
    average: Option<f64>,
    elapsed: u64,
}

impl TwapAccumulator {
    /// Creates a new empty [`TwapAccumulator`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_ts: None,
            last_px: None,
            average: None,
            elapsed: 0,
        }
    }

    /// Processes the next price sample at the given session timestamp.
    ///
    /// A `px` of `None` marks a gap sample where no valid price was available.
    ///
    /// # Panics
    ///
    /// Panics if `ts` is earlier than the previous sample's timestamp.
    pub fn next_price(&mut self, ts: SessionMillis, px: Option<Price>) {
        if let Some(last_ts) = self.last_ts
            && let Some(last_px) = self.last_px
        {
            let dt = (ts - last_ts).as_u64();
            let total = self.elapsed + dt;

            match self.average {
                Some(average) if self.elapsed > 0 => {
                    let weight_prev = self.elapsed as f64 / total as f64;
                    let weight_new = dt as f64 / total as f64;
                    self.average = Some(average * weight_prev + last_px.as_f64() * weight_new);
                }
                _ => self.average = Some(last_px.as_f64()),
            }

            self.elapsed = total;
        }

        self.last_ts = Some(ts);
        self.last_px = px;
    }

    /// Returns the current time-weighted average price, if defined.
    ///
    /// The average remains undefined until at least one interval with a valid
    /// price has been closed.
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        self.average
    }

    /// Returns the total weighted time in milliseconds accumulated so far.
    ///
    /// Gap intervals are excluded, so this can be less than the span between the
    /// first and last sample timestamps.
    #[must_use]
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    /// Returns the price of the last processed sample, if it was valid.
    #[must_use]
    pub fn last_px(&self) -> Option<Price> {
        self.last_px
    }

    /// Returns the timestamp of the last processed sample, if any.
    #[must_use]
    pub fn last_ts(&self) -> Option<SessionMillis> {
        self.last_ts
    }

    /// Resets the accumulator to its initial empty state.
    ///
    /// This is typically called at a session boundary before replaying the next
    /// session's samples.
    pub fn reset(&mut self) {
        self.last_ts = None;
        self.last_px = None;
        self.average = None;
        self.elapsed = 0;
    }
}

impl Default for TwapAccumulator {
    /// Creates a new default [`TwapAccumulator`] instance.
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TwapAccumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}(average={:?}, elapsed_ms={})",
            stringify!(TwapAccumulator),
            self.average,
            self.elapsed,
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tickline_core::approx_eq;

    use super::*;

    fn sample(twap: &mut TwapAccumulator, ts: u64, px: Option<f64>) {
        twap.next_price(SessionMillis::new(ts), px.map(|value| Price::new(value, 2)));
    }

    #[rstest]
    fn test_new_accumulator_is_empty() {
        let twap = TwapAccumulator::new();
        assert_eq!(twap.average(), None);
        assert_eq!(twap.elapsed(), 0);
        assert_eq!(twap.last_px(), None);
        assert_eq!(twap.last_ts(), None);
    }

    #[rstest]
    fn test_default() {
        let twap = TwapAccumulator::default();
        assert_eq!(twap.average(), None);
        assert_eq!(twap.elapsed(), 0);
    }

    #[rstest]
    fn test_first_sample_defines_no_average() {
        let mut twap = TwapAccumulator::new();
        sample(&mut twap, 1000, Some(10.0));

        assert_eq!(twap.average(), None);
        assert_eq!(twap.elapsed(), 0);
        assert_eq!(twap.last_px(), Some(Price::new(10.0, 2)));
        assert_eq!(twap.last_ts(), Some(SessionMillis::new(1000)));
    }

    #[rstest]
    fn test_weighted_session_trace() {
        let mut twap = TwapAccumulator::new();

        sample(&mut twap, 1000, None);
        assert_eq!(twap.average(), None);

        sample(&mut twap, 2000, Some(10.0));
        assert_eq!(twap.average(), None);
        assert_eq!(twap.elapsed(), 0);

        sample(&mut twap, 2200, Some(13.0));
        assert!(approx_eq!(
            f64,
            twap.average().unwrap(),
            10.0,
            epsilon = 1e-9
        ));
        assert_eq!(twap.elapsed(), 200);

        sample(&mut twap, 2400, Some(13.0));
        assert!(approx_eq!(
            f64,
            twap.average().unwrap(),
            11.5,
            epsilon = 1e-9
        ));
        assert_eq!(twap.elapsed(), 400);

        sample(&mut twap, 2500, Some(10.0));
        assert!(approx_eq!(
            f64,
            twap.average().unwrap(),
            11.8,
            epsilon = 1e-9
        ));
        assert_eq!(twap.elapsed(), 500);

        sample(&mut twap, 4000, None);
        assert!(approx_eq!(
            f64,
            twap.average().unwrap(),
            10.45,
            epsilon = 1e-9
        ));
        assert_eq!(twap.elapsed(), 2000);
    }

    #[rstest]
    fn test_constant_price_average_is_that_price() {
        let mut twap = TwapAccumulator::new();
        for ts in [0, 100, 250, 600, 1000] {
            sample(&mut twap, ts, Some(5.0));
        }

        assert!(approx_eq!(f64, twap.average().unwrap(), 5.0, epsilon = 1e-9));
        assert_eq!(twap.elapsed(), 1000);
    }

    #[rstest]
    fn test_gap_interval_contributes_no_weight() {
        let mut twap = TwapAccumulator::new();
        sample(&mut twap, 0, Some(10.0));
        sample(&mut twap, 100, None);
        sample(&mut twap, 200, Some(20.0));
        sample(&mut twap, 300, Some(20.0));

        // The [0, 100] interval holds 10.0 and the [200, 300] interval holds
        // 20.0; the gap interval [100, 200] is excluded entirely.
        assert!(approx_eq!(
            f64,
            twap.average().unwrap(),
            15.0,
            epsilon = 1e-9
        ));
        assert_eq!(twap.elapsed(), 200);
    }

    #[rstest]
    fn test_leading_gap_samples_leave_average_undefined() {
        let mut twap = TwapAccumulator::new();
        sample(&mut twap, 0, None);
        sample(&mut twap, 10, None);
        sample(&mut twap, 20, None);

        assert_eq!(twap.average(), None);
        assert_eq!(twap.elapsed(), 0);
        assert_eq!(twap.last_ts(), Some(SessionMillis::new(20)));
    }

    #[rstest]
    fn test_average_holds_previous_price() {
        let mut twap = TwapAccumulator::new();
        sample(&mut twap, 1000, Some(10.0));
        sample(&mut twap, 2000, Some(20.0));

        // The closed interval was held at the earlier price; 20.0 has no
        // weight until a further sample closes its interval.
        assert!(approx_eq!(
            f64,
            twap.average().unwrap(),
            10.0,
            epsilon = 1e-9
        ));
        assert_eq!(twap.elapsed(), 1000);
    }

    #[rstest]
    fn test_zero_length_first_interval() {
        let mut twap = TwapAccumulator::new();
        sample(&mut twap, 1000, Some(10.0));
        sample(&mut twap, 1000, Some(13.0));

        assert!(approx_eq!(
            f64,
            twap.average().unwrap(),
            10.0,
            epsilon = 1e-9
        ));
        assert_eq!(twap.elapsed(), 0);

        sample(&mut twap, 2000, Some(13.0));
        assert!(approx_eq!(
            f64,
            twap.average().unwrap(),
            13.0,
            epsilon = 1e-9
        ));
        assert_eq!(twap.elapsed(), 1000);
    }

    #[rstest]
    #[should_panic(expected = "Error subtracting with underflow")]
    fn test_out_of_order_sample_panics() {
        let mut twap = TwapAccumulator::new();
        sample(&mut twap, 2000, Some(10.0));
        sample(&mut twap, 1000, Some(10.0));
    }

    #[rstest]
    fn test_gap_sample_clears_last_px() {
        let mut twap = TwapAccumulator::new();
        sample(&mut twap, 0, Some(10.0));
        sample(&mut twap, 100, None);

        assert_eq!(twap.last_px(), None);
        assert_eq!(twap.last_ts(), Some(SessionMillis::new(100)));
    }

    #[rstest]
    fn test_reset() {
        let mut twap = TwapAccumulator::new();
        sample(&mut twap, 0, Some(10.0));
        sample(&mut twap, 100, Some(12.0));
        twap.reset();

        assert_eq!(twap.average(), None);
        assert_eq!(twap.elapsed(), 0);
        assert_eq!(twap.last_px(), None);
        assert_eq!(twap.last_ts(), None);

        // Behaves as a fresh accumulator after reset
        sample(&mut twap, 500, Some(7.0));
        assert_eq!(twap.average(), None);
        assert_eq!(twap.elapsed(), 0);
    }

    #[rstest]
    fn test_display() {
        let mut twap = TwapAccumulator::new();
        assert_eq!(twap.to_string(), "TwapAccumulator(average=None, elapsed_ms=0)");

        sample(&mut twap, 0, Some(10.0));
        sample(&mut twap, 1000, Some(12.0));
        assert_eq!(
            twap.to_string(),
            "TwapAccumulator(average=Some(10.0), elapsed_ms=1000)"
        );
    }
}
