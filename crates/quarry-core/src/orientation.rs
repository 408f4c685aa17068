//! Orientation: one of the four cardinal directions on the grid.

use crate::error::{QuarryError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A unit step along exactly one axis.
///
/// Both components lie in {-1, 0, 1} and exactly one of them is non-zero.
/// Values can only be obtained through the constants, [`Orientation::new`]
/// or [`Orientation::random`], so the invariant always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[i8; 2]", into = "[i8; 2]")]
pub struct Orientation {
    x: i8,
    y: i8,
}

impl Orientation {
    pub const UP: Orientation = Orientation { x: 0, y: 1 };
    pub const DOWN: Orientation = Orientation { x: 0, y: -1 };
    pub const LEFT: Orientation = Orientation { x: -1, y: 0 };
    pub const RIGHT: Orientation = Orientation { x: 1, y: 0 };

    pub const ALL: [Orientation; 4] = [
        Orientation::RIGHT,
        Orientation::LEFT,
        Orientation::UP,
        Orientation::DOWN,
    ];

    /// Validate a pair of components.
    pub fn new(x: i8, y: i8) -> Result<Self> {
        for c in [x, y] {
            if !(-1..=1).contains(&c) {
                return Err(QuarryError::value(
                    "orient",
                    "a pair of components in {-1, 0, 1}",
                    format!("[{}, {}]", x, y),
                ));
            }
        }
        if x.abs() + y.abs() != 1 {
            return Err(QuarryError::value(
                "orient",
                "a unit vector along exactly one axis",
                format!("[{}, {}]", x, y),
            ));
        }
        Ok(Self { x, y })
    }

    /// Draw one of the four directions uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Orientation::ALL
            .choose(rng)
            .unwrap_or(&Orientation::RIGHT)
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn as_array(&self) -> [i8; 2] {
        [self.x, self.y]
    }

    pub fn reversed(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Quarter turn clockwise (UP -> RIGHT).
    pub fn rotate_cw(&self) -> Self {
        Self {
            x: self.y,
            y: -self.x,
        }
    }

    /// Quarter turn counter-clockwise (UP -> LEFT).
    pub fn rotate_ccw(&self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

impl TryFrom<[i8; 2]> for Orientation {
    type Error = QuarryError;

    fn try_from(value: [i8; 2]) -> Result<Self> {
        Orientation::new(value[0], value[1])
    }
}

impl From<Orientation> for [i8; 2] {
    fn from(o: Orientation) -> Self {
        o.as_array()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_diagonals_and_zero() {
        assert!(Orientation::new(1, 1).is_err());
        assert!(Orientation::new(0, 0).is_err());
        assert!(Orientation::new(2, 0).is_err());
        assert_eq!(Orientation::new(0, -1).unwrap(), Orientation::DOWN);
    }

    #[test]
    fn rotations_cycle() {
        let o = Orientation::UP;
        assert_eq!(o.rotate_cw(), Orientation::RIGHT);
        assert_eq!(o.rotate_ccw(), Orientation::LEFT);
        assert_eq!(o.rotate_cw().rotate_cw(), o.reversed());
        assert_eq!(o.rotate_cw().rotate_ccw(), o);
    }

    #[test]
    fn random_draws_are_units() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let o = Orientation::random(&mut rng);
            assert_eq!(o.x().abs() + o.y().abs(), 1);
        }
    }

    #[test]
    fn serde_uses_pairs() {
        let json = serde_json::to_string(&Orientation::LEFT).unwrap();
        assert_eq!(json, "[-1,0]");
        let back: Orientation = serde_json::from_str("[0,1]").unwrap();
        assert_eq!(back, Orientation::UP);
        assert!(serde_json::from_str::<Orientation>("[1,1]").is_err());
    }
}
