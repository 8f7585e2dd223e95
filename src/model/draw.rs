use serde::Serialize;
use std::fmt;

/// Highest number that can be ticked, and so the number of random keys per draw.
pub const CANDIDATE_COUNT: usize = 49;

/// Numbers ticked per draw.
pub const PICK_COUNT: usize = 6;

/// A candidate lottery number paired with the random key it is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSlot<K> {
    pub number: u8,
    pub key: K,
}

impl<K> NumberSlot<K> {
    pub fn new(number: u8, key: K) -> Self {
        NumberSlot { number, key }
    }
}

/// Six distinct numbers in `1..=49`, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Draw([u8; PICK_COUNT]);

impl Draw {
    /// Sorts the picks and checks the draw shape. `None` if a number repeats or
    /// falls outside the candidate range.
    pub fn from_picks(mut numbers: [u8; PICK_COUNT]) -> Option<Draw> {
        numbers.sort_unstable();
        let in_range = numbers
            .iter()
            .all(|n| (1..=CANDIDATE_COUNT as u8).contains(n));
        let distinct = numbers.windows(2).all(|w| w[0] < w[1]);
        if in_range && distinct {
            Some(Draw(numbers))
        } else {
            None
        }
    }

    pub fn numbers(&self) -> &[u8; PICK_COUNT] {
        &self.0
    }
}

// Two lines of three, the way the numbers fit on the display.
impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = &self.0;
        write!(f, "{}, {}, {}\n{}, {}, {}", n[0], n[1], n[2], n[3], n[4], n[5])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_picks_sorts() {
        let draw = Draw::from_picks([49, 3, 17, 1, 22, 8]).unwrap();
        assert_eq!(draw.numbers(), &[1, 3, 8, 17, 22, 49]);
    }

    #[test]
    fn from_picks_rejects_duplicates_and_out_of_range() {
        assert!(Draw::from_picks([1, 2, 3, 4, 5, 5]).is_none());
        assert!(Draw::from_picks([0, 2, 3, 4, 5, 6]).is_none());
        assert!(Draw::from_picks([1, 2, 3, 4, 5, 50]).is_none());
    }

    #[test]
    fn display_is_two_lines_of_three() {
        let draw = Draw::from_picks([4, 15, 23, 31, 42, 49]).unwrap();
        assert_eq!(draw.to_string(), "4, 15, 23\n31, 42, 49");
    }

    #[test]
    fn serializes_as_plain_array() {
        let draw = Draw::from_picks([1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(serde_json::to_string(&draw).unwrap(), "[1,2,3,4,5,6]");
    }
}
