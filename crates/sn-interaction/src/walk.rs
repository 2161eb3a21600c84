//! Walking animation frames.
//!
//! Pure presentation: the core only says which frames to show, a renderer
//! steps through them (about one frame every 150 ms) and mirrors
//! them when the player faces left.

use crate::Facing;

/// One image of the player sprite sheet.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SpriteFrame {
    SnackLeftFoot,
    SnackRightFoot,
    SnackStanding,
    LeftFoot,
    RightFoot,
    Standing,
}

impl SpriteFrame {
    /// Position in the sprite sheet.
    pub fn index(self) -> usize {
        match self {
            SpriteFrame::SnackLeftFoot  => 0,
            SpriteFrame::SnackRightFoot => 1,
            SpriteFrame::SnackStanding  => 2,
            SpriteFrame::LeftFoot       => 3,
            SpriteFrame::RightFoot      => 4,
            SpriteFrame::Standing       => 5,
        }
    }
}

/// Frames to play for one step: left foot, stand, right foot, stand.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct WalkCycle {
    pub frames: [SpriteFrame; 4],
    pub facing: Facing,
}

impl WalkCycle {
    pub fn new(carrying_snack: bool, facing: Facing) -> Self {
        let frames = if carrying_snack {
            [
                SpriteFrame::SnackLeftFoot,
                SpriteFrame::SnackStanding,
                SpriteFrame::SnackRightFoot,
                SpriteFrame::SnackStanding,
            ]
        } else {
            [
                SpriteFrame::LeftFoot,
                SpriteFrame::Standing,
                SpriteFrame::RightFoot,
                SpriteFrame::Standing,
            ]
        };
        Self { frames, facing }
    }

    /// The frame left on screen once the cycle finishes.
    #[inline]
    pub fn rest_frame(&self) -> SpriteFrame {
        self.frames[3]
    }

    /// `true` if the renderer must flip the frames horizontally.
    #[inline]
    pub fn mirrored(&self) -> bool {
        self.facing == Facing::Left
    }
}
