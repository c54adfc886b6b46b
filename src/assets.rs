//! Startup sprite loading
//!
//! Three text-art sprites are loaded once before the loop starts: the tiling
//! background scene, the player, and the obstacle. Assets are static and
//! local, so a missing or unreadable file is fatal - the process must not
//! reach the game loop without them.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable overriding the asset directory
pub const ASSET_DIR_ENV: &str = "DODGE_THE_ROAR_ASSETS";
/// Default asset directory, relative to the working directory
pub const DEFAULT_ASSET_DIR: &str = "assets";

const BACKGROUND_FILE: &str = "savanna.txt";
const PLAYER_FILE: &str = "zebra.txt";
const OBSTACLE_FILE: &str = "lion.txt";

/// Errors from the single fatal failure class: startup asset loading
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read sprite {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("sprite {path} is empty")]
    Empty { path: PathBuf },
}

/// A rectangular text-art sprite
///
/// Rows are padded to a uniform width at load time; spaces are transparent
/// when composited.
#[derive(Debug, Clone)]
pub struct Sprite {
    rows: Vec<Vec<char>>,
    width: u16,
}

impl Sprite {
    /// Parse sprite text. Trailing blank lines are dropped; shorter rows are
    /// padded with spaces so every row has the same width.
    pub fn parse(text: &str) -> Option<Self> {
        let mut rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.chars().collect())
            .collect();
        while rows.last().is_some_and(|row| row.iter().all(|c| *c == ' ') || row.is_empty()) {
            rows.pop();
        }
        let width = rows.iter().map(Vec::len).max()?;
        if width == 0 {
            return None;
        }
        for row in &mut rows {
            row.resize(width, ' ');
        }
        Some(Self {
            rows,
            width: width as u16,
        })
    }

    fn load(path: &Path) -> Result<Self, AssetError> {
        let text = fs::read_to_string(path).map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).ok_or_else(|| AssetError::Empty {
            path: path.to_path_buf(),
        })
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.rows.len() as u16
    }

    /// Sprite rows, each exactly `width()` characters.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// All sprites for a run, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Assets {
    pub background: Sprite,
    pub player: Sprite,
    pub obstacle: Sprite,
}

impl Assets {
    /// Asset directory: `DODGE_THE_ROAR_ASSETS` if set, else `assets/`.
    pub fn dir() -> PathBuf {
        env::var_os(ASSET_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR))
    }

    /// Load all three sprites from `dir`, failing on the first problem.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let assets = Self {
            background: Sprite::load(&dir.join(BACKGROUND_FILE))?,
            player: Sprite::load(&dir.join(PLAYER_FILE))?,
            obstacle: Sprite::load(&dir.join(OBSTACLE_FILE))?,
        };
        log::info!(
            "loaded assets from {}: background {}x{}, player {}x{}, obstacle {}x{}",
            dir.display(),
            assets.background.width(),
            assets.background.height(),
            assets.player.width(),
            assets.player.height(),
            assets.obstacle.width(),
            assets.obstacle.height(),
        );
        Ok(assets)
    }
}
