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

//! A `SessionMillis` timestamp: milliseconds elapsed since the start of a trading session.
//!
//! Session feeds stamp every event with a millisecond offset from the session open rather
//! than a wall-clock epoch, so the type wraps a plain `u64` offset. Values are expected to
//! arrive monotonically non-decreasing within one session.

use std::{
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// The number of milliseconds in one standard 24-hour trading session.
pub const MILLIS_PER_SESSION: u64 = 86_400_000;

/// Represents a timestamp in milliseconds since the start of a trading session.
#[repr(C)]
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SessionMillis(u64);

impl SessionMillis {
    /// Creates a new [`SessionMillis`] instance.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying value as `u64`.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Returns the underlying value as `f64`.
    #[must_use]
    pub const fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

impl Display for SessionMillis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SessionMillis {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<SessionMillis> for u64 {
    fn from(value: SessionMillis) -> Self {
        value.0
    }
}

impl FromStr for SessionMillis {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(SessionMillis)
    }
}

impl PartialEq<u64> for SessionMillis {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<SessionMillis> for u64 {
    fn eq(&self, other: &SessionMillis) -> bool {
        *self == other.0
    }
}

impl Add for SessionMillis {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the addition overflows `u64`.
    fn add(self, rhs: Self) -> Self::Output {
        Self(
            self.0
                .checked_add(rhs.0)
                .expect("Error adding with overflow"),
        )
    }
}

impl Sub for SessionMillis {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the subtraction underflows, which indicates timestamps were
    /// supplied out of order.
    fn sub(self, rhs: Self) -> Self::Output {
        Self(
            self.0
                .checked_sub(rhs.0)
                .expect("Error subtracting with underflow"),
        )
    }
}

impl Add<u64> for SessionMillis {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the addition overflows `u64`.
    fn add(self, rhs: u64) -> Self::Output {
        Self(self.0.checked_add(rhs).expect("Error adding with overflow"))
    }
}

impl AddAssign<u64> for SessionMillis {
    /// # Panics
    ///
    /// Panics if the addition overflows `u64`.
    fn add_assign(&mut self, rhs: u64) {
        self.0 = self.0.checked_add(rhs).expect("Error adding with overflow");
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_new() {
        let millis = SessionMillis::new(123);
        assert_eq!(millis.as_u64(), 123);
        assert_eq!(millis.as_f64(), 123.0);
    }

    #[rstest]
    fn test_default() {
        assert_eq!(SessionMillis::default().as_u64(), 0);
    }

    #[rstest]
    fn test_full_session_offset() {
        let close = SessionMillis::new(MILLIS_PER_SESSION);
        assert_eq!(close.as_u64(), 86_400_000);
    }

    #[rstest]
    fn test_from_u64() {
        let millis = SessionMillis::from(456);
        assert_eq!(millis, 456);
        assert_eq!(u64::from(millis), 456);
    }

    #[rstest]
    fn test_from_str() {
        let millis: SessionMillis = "1000".parse().unwrap();
        assert_eq!(millis.as_u64(), 1000);
    }

    #[rstest]
    fn test_from_str_invalid() {
        let result = "abc".parse::<SessionMillis>();
        assert!(result.is_err());
    }

    #[rstest]
    fn test_ordering() {
        assert!(SessionMillis::new(1) < SessionMillis::new(2));
        assert!(SessionMillis::new(2) <= SessionMillis::new(2));
    }

    #[rstest]
    fn test_add() {
        let result = SessionMillis::new(1000) + SessionMillis::new(500);
        assert_eq!(result.as_u64(), 1500);
    }

    #[rstest]
    fn test_add_u64() {
        let mut millis = SessionMillis::new(1000);
        millis += 500;
        assert_eq!(millis, SessionMillis::new(1000) + 500);
        assert_eq!(millis.as_u64(), 1500);
    }

    #[rstest]
    fn test_sub() {
        let result = SessionMillis::new(2200) - SessionMillis::new(2000);
        assert_eq!(result.as_u64(), 200);
    }

    #[rstest]
    #[should_panic(expected = "Error subtracting with underflow")]
    fn test_sub_underflow_panics() {
        let _ = SessionMillis::new(1000) - SessionMillis::new(2000);
    }

    #[rstest]
    #[should_panic(expected = "Error adding with overflow")]
    fn test_add_overflow_panics() {
        let _ = SessionMillis::new(u64::MAX) + SessionMillis::new(1);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(SessionMillis::new(42).to_string(), "42");
    }

    #[rstest]
    fn test_serde_round_trip() {
        let millis = SessionMillis::new(86_400_000);
        let json = serde_json::to_string(&millis).unwrap();
        assert_eq!(json, "86400000");
        let deserialized: SessionMillis = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, millis);
    }
}
