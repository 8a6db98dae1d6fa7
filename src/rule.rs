//! Birth/survival threshold rules.

use std::convert::TryFrom;
use std::fmt;
use std::ops::RangeInclusive;

use regex::Regex;

use crate::error::{LifegridError, LifegridResult};
use crate::topology::Topology;

/// Conway's standard rule (B3/S23): the rectangular default.
pub const LIFE: Rule = Rule {
    survival: 2..=3,
    birth: 3..=3,
};

/// The hexagonal default rule (B34/S123).
pub const HEX_LIFE: Rule = Rule {
    survival: 1..=3,
    birth: 3..=4,
};

/// Totalistic birth/survival rule expressed as inclusive neighbor-count
/// ranges.
///
/// A live cell survives when its live-neighbor count falls inside `survival`;
/// a dead cell is born when its count falls inside `birth`. The next state of
/// a cell depends on nothing else, so identical counts and center values give
/// identical results anywhere on the grid.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Rule {
    survival: RangeInclusive<u8>,
    birth: RangeInclusive<u8>,
}

impl Default for Rule {
    fn default() -> Self {
        LIFE
    }
}

impl Rule {
    /// Creates a rule from explicit survival and birth ranges.
    pub const fn new(survival: RangeInclusive<u8>, birth: RangeInclusive<u8>) -> Self {
        Self { survival, birth }
    }

    /// Returns the survival range.
    #[inline]
    pub fn survival(&self) -> &RangeInclusive<u8> {
        &self.survival
    }

    /// Returns the birth range.
    #[inline]
    pub fn birth(&self) -> &RangeInclusive<u8> {
        &self.birth
    }

    /// Computes a cell's next state from its current state and live-neighbor
    /// count.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.survival.contains(&neighbors)
        } else {
            self.birth.contains(&neighbors)
        }
    }

    /// Checks that no threshold exceeds the maximum neighbor count a cell
    /// can have under the given topology.
    pub fn validate_for(&self, topology: Topology) -> LifegridResult<()> {
        let max = topology.max_neighbors();
        for &threshold in &[*self.survival.end(), *self.birth.end()] {
            if threshold > max {
                return Err(LifegridError::RuleOutOfRange {
                    threshold,
                    max,
                    topology,
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<&str> for Rule {
    type Error = LifegridError;

    /// Parses `B…/S…` notation (e.g. `"B3/S23"`). Because this rule type is
    /// a pair of ranges rather than arbitrary sets, the digits after each
    /// letter must form a contiguous run.
    fn try_from(s: &str) -> LifegridResult<Self> {
        let regex = Regex::new(r"^[Bb](\d*)/[Ss](\d*)$").unwrap();
        let captures = regex
            .captures(s)
            .ok_or_else(|| LifegridError::BadRuleString(s.to_owned()))?;
        let birth = digits_to_range(&captures[1], s)?;
        let survival = digits_to_range(&captures[2], s)?;
        Ok(Self { survival, birth })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        write_range(f, &self.birth)?;
        write!(f, "/S")?;
        write_range(f, &self.survival)
    }
}

fn write_range(f: &mut fmt::Formatter<'_>, range: &RangeInclusive<u8>) -> fmt::Result {
    for n in range.clone() {
        write!(f, "{}", n)?;
    }
    Ok(())
}

/// Converts a run of digits into an inclusive range, rejecting
/// non-contiguous sets. An empty run yields an empty range.
fn digits_to_range(digits: &str, rule: &str) -> LifegridResult<RangeInclusive<u8>> {
    let mut counts: Vec<u8> = digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect();
    counts.sort_unstable();
    counts.dedup();
    match (counts.first(), counts.last()) {
        (Some(&lo), Some(&hi)) => {
            if counts.len() == (hi - lo + 1) as usize {
                Ok(lo..=hi)
            } else {
                Err(LifegridError::NonContiguousRule(rule.to_owned()))
            }
        }
        // `1..=0` contains nothing; this is a rule with no birth (or no
        // survival) counts at all, like Seeds' survival component.
        _ => Ok(1..=0),
    }
}
