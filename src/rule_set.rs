use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0000_0000_0000_0000_0000
/// b012345678s012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    ///
    /// Big endian is used here (i.e. `b = 0b1` means b1, and `b = 0b1_0000_0000` means b8).
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// State of a cell in the next generation, given its current state and its number of live
    /// neighbors.
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        let mask = 1u16 << neighbors;

        if alive {
            self.survivals() & mask == mask
        } else {
            self.births() & mask == mask
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("Unexpected character '{0}' in rule")]
    InvalidChar(char),

    #[error("Neighbor count {0} is larger than 8")]
    TooManyNeighbors(u32),

    #[error("Rule is missing its survival part")]
    MissingSurvivals,
}

/// Accepts `b3/s23`, `B3S23` and the nameless `3/23`.
impl FromStr for RuleSet {
    type Err = RuleSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum State {
            Birth,
            Survival,
        }

        let mut state = State::Birth;
        let mut seen_survival = false;
        let (mut b, mut s_mask) = (0u16, 0u16);

        for c in s.trim().chars() {
            match c {
                'b' | 'B' => {
                    state = State::Birth;
                }
                's' | 'S' | '/' => {
                    state = State::Survival;
                    seen_survival = true;
                }
                c => {
                    let n = c.to_digit(10).ok_or(RuleSetError::InvalidChar(c))?;

                    if n > 8 {
                        return Err(RuleSetError::TooManyNeighbors(n));
                    }

                    match state {
                        State::Birth => b |= 1 << n,
                        State::Survival => s_mask |= 1 << n,
                    }
                }
            }
        }

        if !seen_survival {
            return Err(RuleSetError::MissingSurvivals);
        }

        Ok(RuleSet::new(b, s_mask))
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |mask: u16| -> String {
            (0..=8u8)
                .filter(|&n| mask & (1 << n) != 0)
                .map(|n| char::from(b'0' + n))
                .collect()
        };

        write!(f, "b{}/s{}", digits(self.births()), digits(self.survivals()))
    }
}

#[cfg(test)]
mod test {
    use super::RuleSet;
    use super::RuleSetError;
    use super::B3S23;

    #[test]
    fn conway_transitions() {
        for n in 0..=8 {
            assert_eq!(B3S23.next_state(false, n), n == 3, "birth with {n}");
            assert_eq!(B3S23.next_state(true, n), n == 2 || n == 3, "survival with {n}");
        }
    }

    #[test]
    fn parse_notations() {
        assert_eq!("b3/s23".parse::<RuleSet>(), Ok(B3S23));
        assert_eq!("B3S23".parse::<RuleSet>(), Ok(B3S23));
        assert_eq!("3/23".parse::<RuleSet>(), Ok(B3S23));
        assert_eq!(
            "b36/s23".parse::<RuleSet>(),
            Ok(RuleSet::new(0b100_1000, 0b1100))
        );
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "b3/s29".parse::<RuleSet>(),
            Err(RuleSetError::TooManyNeighbors(9))
        );
        assert_eq!(
            "b3x/s23".parse::<RuleSet>(),
            Err(RuleSetError::InvalidChar('x'))
        );
        assert_eq!("b3".parse::<RuleSet>(), Err(RuleSetError::MissingSurvivals));
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(B3S23.to_string(), "b3/s23");
        assert_eq!(RuleSet::new(0, 0).to_string(), "b/s");
    }
}
