//! Board coordinates
//!
//! `x` is the file (0 = a, 7 = h) and `y` the rank (0 = rank 1, 7 = rank 8).
//! The linear index used for tables and enumeration order is `y * 8 + x`,
//! so a1 = 0, h1 = 7, a8 = 56, h8 = 63.

use crate::error::LocationError;
use std::fmt;
use std::str::FromStr;

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

/// A validated square on the 8x8 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardLocation {
    x: u8,
    y: u8,
}

impl BoardLocation {
    /// Create a location, rejecting anything outside `0..=7` on either axis
    pub fn new(x: i32, y: i32) -> Result<Self, LocationError> {
        if !(0..8).contains(&x) || !(0..8).contains(&y) {
            return Err(LocationError::OutOfRange { x, y });
        }
        Ok(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Create a location from its linear index `y * 8 + x`
    pub fn from_index(index: usize) -> Result<Self, LocationError> {
        if index >= NUM_SQUARES {
            return Err(LocationError::IndexOutOfRange { index });
        }
        Ok(Self {
            x: (index % 8) as u8,
            y: (index / 8) as u8,
        })
    }

    #[inline]
    pub fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub fn y(self) -> u8 {
        self.y
    }

    #[inline]
    pub fn index(self) -> usize {
        self.y as usize * 8 + self.x as usize
    }

    /// The square `(dx, dy)` away, if it is still on the board
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Self::new(self.x as i32 + dx as i32, self.y as i32 + dy as i32).ok()
    }

    /// Every square in index order (a1, b1, ... h8)
    pub fn all() -> impl Iterator<Item = BoardLocation> {
        (0..NUM_SQUARES).map(|index| BoardLocation {
            x: (index % 8) as u8,
            y: (index / 8) as u8,
        })
    }

    /// Signed distance to `other` as `(dx, dy)`
    #[inline]
    pub(crate) fn delta(self, other: BoardLocation) -> (i8, i8) {
        (
            other.x as i8 - self.x as i8,
            other.y as i8 - self.y as i8,
        )
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.x) as char, self.y + 1)
    }
}

impl FromStr for BoardLocation {
    type Err = LocationError;

    /// Parse algebraic notation (`a1` through `h8`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unparseable = || LocationError::Unparseable {
            text: s.to_string(),
        };
        let mut chars = s.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(unparseable());
        };
        let file = file.to_ascii_lowercase();
        if !file.is_ascii_lowercase() || !rank.is_ascii_digit() {
            return Err(unparseable());
        }
        let x = file as i32 - 'a' as i32;
        let y = rank as i32 - '1' as i32;
        BoardLocation::new(x, y)
    }
}

impl TryFrom<(i32, i32)> for BoardLocation {
    type Error = LocationError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        BoardLocation::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping() {
        let loc = BoardLocation::new(3, 5).unwrap();
        assert_eq!(loc.index(), 43);
        assert_eq!(BoardLocation::from_index(43).unwrap(), loc);
        assert_eq!(BoardLocation::new(7, 7).unwrap().index(), 63);
    }

    #[test]
    fn test_out_of_range_is_rejected_not_clamped() {
        assert_eq!(
            BoardLocation::new(8, 0),
            Err(LocationError::OutOfRange { x: 8, y: 0 })
        );
        assert!(BoardLocation::new(-1, 3).is_err());
        assert!(BoardLocation::new(0, 8).is_err());
        assert_eq!(
            BoardLocation::from_index(64),
            Err(LocationError::IndexOutOfRange { index: 64 })
        );
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = BoardLocation::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 2), BoardLocation::new(1, 2).ok());
    }

    #[test]
    fn test_algebraic_notation() {
        let e4: BoardLocation = "e4".parse().unwrap();
        assert_eq!((e4.x(), e4.y()), (4, 3));
        assert_eq!(e4.to_string(), "e4");
        assert!("i1".parse::<BoardLocation>().is_err());
        assert!("a9".parse::<BoardLocation>().is_err());
        assert!("e".parse::<BoardLocation>().is_err());
        assert!("e44".parse::<BoardLocation>().is_err());
    }

    #[test]
    fn test_all_is_index_ordered() {
        let all: Vec<_> = BoardLocation::all().collect();
        assert_eq!(all.len(), NUM_SQUARES);
        assert!(all.iter().enumerate().all(|(i, loc)| loc.index() == i));
    }
}
