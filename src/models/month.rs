//! The billing-cycle month type
//!
//! The hostel bills on a fixed 12-month cycle running September through
//! August. `Month` is a closed enumeration: month names read back from the
//! database must parse into it, and anything else is a data error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A month of the September-August billing cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    September,
    October,
    November,
    December,
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
}

/// All twelve months in billing-cycle order (September first)
pub const BILLING_CYCLE: [Month; 12] = [
    Month::September,
    Month::October,
    Month::November,
    Month::December,
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
];

impl Month {
    /// All twelve months in billing-cycle order
    pub fn cycle() -> [Month; 12] {
        BILLING_CYCLE
    }

    /// The month's full English name
    pub fn name(&self) -> &'static str {
        match self {
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
        }
    }

    /// Position within the billing cycle (September = 0, August = 11)
    pub fn cycle_position(&self) -> usize {
        match self {
            Month::September => 0,
            Month::October => 1,
            Month::November => 2,
            Month::December => 3,
            Month::January => 4,
            Month::February => 5,
            Month::March => 6,
            Month::April => 7,
            Month::May => 8,
            Month::June => 9,
            Month::July => 10,
            Month::August => 11,
        }
    }

    /// Whether this is one of the eight academic months (September-April)
    pub fn is_academic(&self) -> bool {
        self.cycle_position() < 8
    }

    /// Whether this is one of the four holiday months (May-August)
    pub fn is_holiday(&self) -> bool {
        !self.is_academic()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    /// Parse a month from its full English name (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        BILLING_CYCLE
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| MonthParseError(s.to_string()))
    }
}

/// Error returned when a string is not a recognized month name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized month name: '{0}'")]
pub struct MonthParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        let cycle = Month::cycle();
        assert_eq!(cycle[0], Month::September);
        assert_eq!(cycle[11], Month::August);
        for (i, month) in cycle.iter().enumerate() {
            assert_eq!(month.cycle_position(), i);
        }
    }

    #[test]
    fn test_academic_and_holiday_split() {
        let academic: Vec<_> = Month::cycle()
            .iter()
            .filter(|m| m.is_academic())
            .copied()
            .collect();
        assert_eq!(academic.len(), 8);
        assert!(academic.contains(&Month::September));
        assert!(academic.contains(&Month::April));

        let holiday: Vec<_> = Month::cycle()
            .iter()
            .filter(|m| m.is_holiday())
            .copied()
            .collect();
        assert_eq!(holiday, vec![Month::May, Month::June, Month::July, Month::August]);
    }

    #[test]
    fn test_parse_roundtrip() {
        for month in Month::cycle() {
            assert_eq!(month.name().parse::<Month>().unwrap(), month);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("september".parse::<Month>().unwrap(), Month::September);
        assert_eq!("  MAY  ".parse::<Month>().unwrap(), Month::May);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("Septembre".parse::<Month>().is_err());
        assert!("".parse::<Month>().is_err());
    }
}
