//! Game configuration.
//!
//! `GameConfig::default()` reproduces the game's classic tuning.  An
//! application may override any subset of fields from a TOML file (see the
//! `playtest` demo); every missing field falls back to its default.
//!
//! All validation happens once, at construction of the session.  Nothing in
//! the per-tick or per-move path re-checks these invariants.

use crate::{CoreError, CoreResult, Size};

/// Upper bound of the settings slider for player speed.
pub const MAX_STEP_PX: i32 = 20;

/// Upper bound of the settings slider for bookshelf count.
pub const MAX_BOOKSHELVES: usize = 20;

// ── MsRange ───────────────────────────────────────────────────────────────────

/// Half-open millisecond range `[min, max)` a milestone is drawn from.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MsRange {
    pub min: u64,
    pub max: u64,
}

impl MsRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// `true` if `ms` lies in `[min, max)`.
    #[inline]
    pub fn contains(&self, ms: u64) -> bool {
        (self.min..self.max).contains(&ms)
    }

    fn validate(&self, what: &str) -> CoreResult<()> {
        if self.min == 0 {
            return Err(CoreError::Config(format!(
                "{what} range must start above 0 ms, got [{}, {})",
                self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(CoreError::Config(format!(
                "{what} range is empty: [{}, {})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

// ── AttentionConfig ───────────────────────────────────────────────────────────

/// Ranges for the librarian's three per-state durations.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttentionConfig {
    /// Time spent inattentive before starting to turn around.
    pub inattentive_ms: MsRange,
    /// Time spent turning around.
    pub transition_ms: MsRange,
    /// Time spent watching before the cycle restarts.
    pub attentive_ms: MsRange,
}

impl Default for AttentionConfig {
    fn default() -> Self {
        Self {
            inattentive_ms: MsRange::new(6_000, 16_000),
            transition_ms:  MsRange::new(500, 2_000),
            attentive_ms:   MsRange::new(4_000, 8_000),
        }
    }
}

impl AttentionConfig {
    pub fn validate(&self) -> CoreResult<()> {
        self.inattentive_ms.validate("inattentive")?;
        self.transition_ms.validate("transition")?;
        self.attentive_ms.validate("attentive")?;
        Ok(())
    }
}

// ── GameConfig ────────────────────────────────────────────────────────────────

/// Top-level game configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub attention: AttentionConfig,

    /// Period of the attention ticker thread.  Default: 20 ms.
    pub tick_period_ms: u64,

    /// Pixels moved per movement event.  Default: 10.
    pub step_px: i32,

    /// Player sprite (and hitbox) size.  Default: 100x100.
    pub player_size: Size,

    /// Game panel size used for the room layout.  Default: 1000x700.
    pub panel: Size,

    /// Number of bookshelves placed in the room.  Default: 10.
    pub bookshelf_count: usize,

    /// RNG seed.  `None` seeds from OS entropy; the same seed always
    /// produces the same layout and attention timings.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            attention:       AttentionConfig::default(),
            tick_period_ms:  20,
            step_px:         10,
            player_size:     Size::new(100, 100),
            panel:           Size::new(1_000, 700),
            bookshelf_count: 10,
            seed:            None,
        }
    }
}

impl GameConfig {
    /// Check every construction-time invariant.
    pub fn validate(&self) -> CoreResult<()> {
        self.attention.validate()?;

        if self.tick_period_ms == 0 {
            return Err(CoreError::Config("tick_period_ms must be positive".into()));
        }
        if !(1..=MAX_STEP_PX).contains(&self.step_px) {
            return Err(CoreError::Config(format!(
                "step_px must be in 1..={MAX_STEP_PX}, got {}",
                self.step_px
            )));
        }
        if self.bookshelf_count > MAX_BOOKSHELVES {
            return Err(CoreError::Config(format!(
                "bookshelf_count must be at most {MAX_BOOKSHELVES}, got {}",
                self.bookshelf_count
            )));
        }
        for (what, size) in [("player_size", self.player_size), ("panel", self.panel)] {
            if size.is_empty() {
                return Err(CoreError::EmptySize {
                    what,
                    width:  size.width,
                    height: size.height,
                });
            }
        }
        Ok(())
    }
}
