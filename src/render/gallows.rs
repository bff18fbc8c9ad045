//! The seven gallows drawings, one per miss count.

use strum::EnumIter;

/// Gallows drawing for a miss count from 0 to 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum GallowsStage {
    /// No misses.
    Empty,
    /// One miss.
    Head,
    /// Two misses.
    Torso,
    /// Three misses.
    LeftArm,
    /// Four misses.
    RightArm,
    /// Five misses.
    LeftLeg,
    /// Six misses: the round is lost.
    RightLeg,
}

impl GallowsStage {
    /// Stage for a miss count; counts past six show the full figure.
    pub fn from_misses(miss_count: usize) -> Self {
        match miss_count {
            0 => Self::Empty,
            1 => Self::Head,
            2 => Self::Torso,
            3 => Self::LeftArm,
            4 => Self::RightArm,
            5 => Self::LeftLeg,
            _ => Self::RightLeg,
        }
    }

    /// ASCII art for this stage.
    pub fn art(self) -> &'static str {
        match self {
            Self::Empty => {
                "
   +---+
       |
       |
       |
      ===
"
            }
            Self::Head => {
                "
   +---+
   O   |
       |
       |
      ===
"
            }
            Self::Torso => {
                "
   +---+
   O   |
   |   |
       |
      ===
"
            }
            Self::LeftArm => {
                "
   +---+
   O   |
  /|   |
       |
      ===
"
            }
            Self::RightArm => {
                r"
   +---+
   O   |
  /|\  |
       |
      ===
"
            }
            Self::LeftLeg => {
                r"
   +---+
   O   |
  /|\  |
  /    |
      ===
"
            }
            Self::RightLeg => {
                r"
   +---+
   O   |
  /|\  |
  / \  |
      ===
"
            }
        }
    }
}
