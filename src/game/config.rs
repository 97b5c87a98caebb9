use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Side length of one cell, in world units
pub const DEFAULT_SCALE: u32 = 20;

/// Configuration for a game session
///
/// Extents are expressed in world units; every cell is `scale` units wide, so
/// `width` and `height` must be positive multiples of `scale`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the playing field
    pub width: u32,
    /// Height of the playing field
    pub height: u32,
    /// Size of one cell
    pub scale: u32,
    /// Interval between ticks. Only the driver reads this.
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_presets(BoardSize::Regular, Speed::Regular)
    }
}

impl GameConfig {
    /// Create a configuration with custom extents and the default scale
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Build a square board from the size and speed presets
    pub fn from_presets(size: BoardSize, speed: Speed) -> Self {
        Self {
            width: size.extent(),
            height: size.extent(),
            scale: DEFAULT_SCALE,
            tick_interval_ms: speed.tick_interval_ms(),
        }
    }

    /// Tiny board used by tests
    pub fn small() -> Self {
        Self::new(100, 100)
    }

    /// Check that the configuration describes a usable grid
    pub fn validate(&self) -> Result<(), GameError> {
        if self.scale == 0 {
            return Err(GameError::invalid("scale must be positive"));
        }

        if self.width == 0 || self.height == 0 {
            return Err(GameError::invalid(format!(
                "width and height must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        if self.width % self.scale != 0 || self.height % self.scale != 0 {
            return Err(GameError::invalid(format!(
                "width and height must be multiples of scale {}, got {}x{}",
                self.scale, self.width, self.height
            )));
        }

        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(GameError::invalid(format!(
                "extents {}x{} do not fit in cell coordinates",
                self.width, self.height
            )));
        }

        // Room for at least the spawned snake and one food item
        let cells = u64::from(self.width / self.scale) * u64::from(self.height / self.scale);
        if cells < 2 {
            return Err(GameError::invalid(format!(
                "grid needs at least 2 cells, got {cells}"
            )));
        }

        Ok(())
    }
}

/// Board size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BoardSize {
    Small,
    #[default]
    Regular,
    Large,
}

impl BoardSize {
    /// Side length of the square board in world units
    pub fn extent(&self) -> u32 {
        match self {
            BoardSize::Small => 300,
            BoardSize::Regular => 500,
            BoardSize::Large => 700,
        }
    }
}

/// Tick speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Slow,
    #[default]
    Regular,
    Fast,
    Zoom,
}

impl Speed {
    pub fn tick_interval_ms(&self) -> u64 {
        match self {
            Speed::Slow => 250,
            Speed::Regular => 100,
            Speed::Fast => 70,
            Speed::Zoom => 30,
        }
    }
}
