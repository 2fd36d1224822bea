use super::vector3::Vector3;
use std::fmt;

use num_traits::Euclid;
use serde::{Deserialize, Serialize};

/// Aka Block Position
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct WorldPosition(pub Vector3<i32>);

impl WorldPosition {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The Bedrock protocol uses the zero position to say "no position".
    pub fn is_origin(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the chunk column coordinates `(x, z)` holding this block.
    pub fn chunk_coordinates(&self) -> (i32, i32) {
        (
            Euclid::div_euclid(&self.0.x, &16),
            Euclid::div_euclid(&self.0.z, &16),
        )
    }
}

impl fmt::Display for WorldPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0.x, self.0.y, self.0.z)
    }
}

#[cfg(test)]
mod tests {
    use super::WorldPosition;

    #[test]
    fn chunk_coordinates_floor_negative_positions() {
        assert_eq!(WorldPosition::new(17, 64, -1).chunk_coordinates(), (1, -1));
        assert_eq!(WorldPosition::new(-16, 0, 15).chunk_coordinates(), (-1, 0));
    }

    #[test]
    fn origin() {
        assert!(WorldPosition::default().is_origin());
        assert!(!WorldPosition::new(0, 1, 0).is_origin());
    }
}
