//! Sprite sheet loading
//!
//! Only sheet geometry is needed by the game (frame slicing happens on the
//! host side), so loading reads image headers and caches the result. The
//! loader is owned by the game session rather than living in a global.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::GameError;
use crate::render::SpriteId;
use crate::sim::Rect;

/// Side of the stand-in sheet used when an asset is missing
pub const PLACEHOLDER_SIZE: u32 = 10;

/// A grid-sliced sprite sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub columns: u32,
    pub rows: u32,
    /// True when the real file could not be loaded
    pub placeholder: bool,
}

impl SpriteSheet {
    pub fn placeholder(path: impl Into<PathBuf>, columns: u32, rows: u32) -> Self {
        Self {
            path: path.into(),
            width: PLACEHOLDER_SIZE,
            height: PLACEHOLDER_SIZE,
            columns: columns.max(1),
            rows: rows.max(1),
            placeholder: true,
        }
    }

    /// Size of one frame in pixels
    pub fn frame_size(&self) -> (f32, f32) {
        (
            self.width as f32 / self.columns as f32,
            self.height as f32 / self.rows as f32,
        )
    }

    /// Source rect of the frame at (column, row), wrapping out-of-range indices
    pub fn frame_rect(&self, column: u32, row: u32) -> Rect {
        let (fw, fh) = self.frame_size();
        let c = column % self.columns;
        let r = row % self.rows;
        Rect::new(c as f32 * fw, r as f32 * fh, fw, fh)
    }
}

/// Caching loader rooted at an assets directory
#[derive(Debug)]
pub struct AssetLoader {
    root: PathBuf,
    cache: HashMap<PathBuf, SpriteSheet>,
}

impl AssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load sheet geometry, failing if the file is missing or not an image
    pub fn load(&mut self, file: &str, columns: u32, rows: u32) -> Result<SpriteSheet, GameError> {
        let path = self.root.join(file);
        if let Some(sheet) = self.cache.get(&path) {
            return Ok(sheet.clone());
        }

        let (width, height) =
            image::image_dimensions(&path).map_err(|e| GameError::ResourceLoad {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let sheet = SpriteSheet {
            path: path.clone(),
            width,
            height,
            columns: columns.max(1),
            rows: rows.max(1),
            placeholder: false,
        };
        log::debug!("Loaded sprite sheet {} ({}x{})", path.display(), width, height);
        self.cache.insert(path, sheet.clone());
        Ok(sheet)
    }

    /// Load sheet geometry, substituting a small placeholder on failure
    pub fn load_or_placeholder(&mut self, file: &str, columns: u32, rows: u32) -> SpriteSheet {
        match self.load(file, columns, rows) {
            Ok(sheet) => sheet,
            Err(e) => {
                log::warn!("{} - using placeholder", e);
                SpriteSheet::placeholder(self.root.join(file), columns, rows)
            }
        }
    }
}

/// Every sheet the game draws from
#[derive(Debug, Clone)]
pub struct SpriteSet {
    pub player: SpriteSheet,
    pub sword: SpriteSheet,
    pub coin: SpriteSheet,
}

impl SpriteSet {
    pub const PLAYER_FILE: &'static str = "player_sprites.png";
    pub const SWORD_FILE: &'static str = "sword.png";
    pub const COIN_FILE: &'static str = "coin.png";

    /// Player sheet layout: 4 frames per row, 5 rows (idle/right, -, up, down, side)
    pub const PLAYER_COLUMNS: u32 = 4;
    pub const PLAYER_ROWS: u32 = 5;
    /// Coin spin animation frames, laid out horizontally
    pub const COIN_FRAMES: u32 = 15;

    /// Strict load: the first missing sheet aborts start-up
    pub fn load(loader: &mut AssetLoader) -> Result<Self, GameError> {
        Ok(Self {
            player: loader.load(Self::PLAYER_FILE, Self::PLAYER_COLUMNS, Self::PLAYER_ROWS)?,
            sword: loader.load(Self::SWORD_FILE, 1, 1)?,
            coin: loader.load(Self::COIN_FILE, Self::COIN_FRAMES, 1)?,
        })
    }

    /// Resilient load: missing sheets become placeholders
    pub fn load_or_placeholder(loader: &mut AssetLoader) -> Self {
        Self {
            player: loader.load_or_placeholder(
                Self::PLAYER_FILE,
                Self::PLAYER_COLUMNS,
                Self::PLAYER_ROWS,
            ),
            sword: loader.load_or_placeholder(Self::SWORD_FILE, 1, 1),
            coin: loader.load_or_placeholder(Self::COIN_FILE, Self::COIN_FRAMES, 1),
        }
    }

    /// All-placeholder set for headless use
    pub fn placeholder() -> Self {
        Self {
            player: SpriteSheet::placeholder(
                Self::PLAYER_FILE,
                Self::PLAYER_COLUMNS,
                Self::PLAYER_ROWS,
            ),
            sword: SpriteSheet::placeholder(Self::SWORD_FILE, 1, 1),
            coin: SpriteSheet::placeholder(Self::COIN_FILE, Self::COIN_FRAMES, 1),
        }
    }

    pub fn sheet(&self, id: SpriteId) -> &SpriteSheet {
        match id {
            SpriteId::Player => &self.player,
            SpriteId::Sword => &self.sword,
            SpriteId::Coin => &self.coin,
        }
    }
}
