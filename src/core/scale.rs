//=========================================================================
// Scale Manager
//=========================================================================
//
// Lays the game canvas out inside its container.
//
//   game size (config) ──┐
//   container size ──────┼──► ScaleMode ──► display size
//   auto_round ──────────┘        │
//                                 └──► CenterMode ──► display offset
//
// The inverse mapping turns window coordinates (pointer input) back
// into game coordinates.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::config::{ScaleConfig, ScaleMode};

//=== Size ================================================================

/// Width and height in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

//=== DisplayRect =========================================================

/// Where the canvas is drawn inside its container, in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DisplayRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

//=== ScaleManager ========================================================

/// Computes the canvas layout for a scale policy.
#[derive(Debug, Clone)]
pub struct ScaleManager {
    config: ScaleConfig,
    auto_round: bool,
    game: Size,
    parent: Size,
    display: DisplayRect,
}

impl ScaleManager {
    //--- Construction -----------------------------------------------------

    pub fn new(config: ScaleConfig, auto_round: bool, game: Size, parent: Size) -> Self {
        let mut manager = Self {
            config,
            auto_round,
            game,
            parent: game,
            display: DisplayRect::default(),
        };

        // An empty container keeps the unscaled layout until it is sized
        if !manager.resize(parent) {
            manager.refresh();
        }

        manager
    }

    //--- Queries ----------------------------------------------------------

    /// Current game size. Differs from the configured size only in
    /// [`ScaleMode::Resize`].
    pub fn game_size(&self) -> Size {
        self.game
    }

    pub fn parent_size(&self) -> Size {
        self.parent
    }

    pub fn display(&self) -> DisplayRect {
        self.display
    }

    /// Display pixels per game pixel, horizontally.
    pub fn zoom(&self) -> f32 {
        if self.game.width == 0 {
            return 1.0;
        }
        self.display.width / self.game.width as f32
    }

    //--- Layout -----------------------------------------------------------

    /// Updates the container size and recomputes the layout.
    ///
    /// Returns `false` (and keeps the previous layout) for empty sizes.
    pub fn resize(&mut self, parent: Size) -> bool {
        if parent.is_empty() {
            debug!(target: "scale", "Ignoring empty container size {:?}", parent);
            return false;
        }

        self.parent = parent;
        if self.config.mode == ScaleMode::Resize {
            self.game = parent;
        }

        self.refresh();
        true
    }

    /// Maps a point in container pixels to game coordinates.
    pub fn to_game(&self, x: f32, y: f32) -> (f32, f32) {
        let DisplayRect { x: dx, y: dy, width, height } = self.display;
        if width <= 0.0 || height <= 0.0 {
            return (x, y);
        }

        (
            (x - dx) * self.game.width as f32 / width,
            (y - dy) * self.game.height as f32 / height,
        )
    }

    fn refresh(&mut self) {
        let game_w = self.game.width as f32;
        let game_h = self.game.height as f32;
        let parent_w = self.parent.width as f32;
        let parent_h = self.parent.height as f32;

        let (mut width, mut height) = match self.config.mode {
            ScaleMode::None | ScaleMode::Resize => (game_w, game_h),
            ScaleMode::Fit => {
                let scale = (parent_w / game_w).min(parent_h / game_h);
                (game_w * scale, game_h * scale)
            }
            ScaleMode::Envelop => {
                let scale = (parent_w / game_w).max(parent_h / game_h);
                (game_w * scale, game_h * scale)
            }
        };

        if self.auto_round {
            width = width.floor();
            height = height.floor();
        }

        let center = self.config.auto_center;
        let mut x = if center.centers_x() { (parent_w - width) / 2.0 } else { 0.0 };
        let mut y = if center.centers_y() { (parent_h - height) / 2.0 } else { 0.0 };

        if self.auto_round {
            x = x.floor();
            y = y.floor();
        }

        self.display = DisplayRect { x, y, width, height };

        debug!(
            target: "scale",
            "Layout {:?} in {}x{}: {}x{} at ({}, {})",
            self.config.mode, self.parent.width, self.parent.height, width, height, x, y
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CenterMode;

    fn fit_both() -> ScaleConfig {
        ScaleConfig {
            mode: ScaleMode::Fit,
            auto_center: CenterMode::CenterBoth,
        }
    }

    const GAME: Size = Size::new(390, 640);

    #[test]
    fn fit_in_exact_container_is_identity() {
        let scale = ScaleManager::new(fit_both(), true, GAME, GAME);
        assert_eq!(
            scale.display(),
            DisplayRect { x: 0.0, y: 0.0, width: 390.0, height: 640.0 }
        );
        assert_eq!(scale.zoom(), 1.0);
    }

    #[test]
    fn fit_in_landscape_container_letterboxes_horizontally() {
        let scale = ScaleManager::new(fit_both(), true, GAME, Size::new(800, 600));

        // 600 / 640 = 0.9375 → 365.625 wide, floored
        let display = scale.display();
        assert_eq!(display.width, 365.0);
        assert_eq!(display.height, 600.0);
        assert_eq!(display.x, 217.0);
        assert_eq!(display.y, 0.0);
    }

    #[test]
    fn fit_without_rounding_keeps_fractions() {
        let scale = ScaleManager::new(fit_both(), false, GAME, Size::new(800, 600));
        let display = scale.display();
        assert_eq!(display.width, 365.625);
        assert_eq!(display.x, 217.1875);
    }

    #[test]
    fn fit_in_tall_container_letterboxes_vertically() {
        let scale = ScaleManager::new(fit_both(), true, GAME, Size::new(780, 2000));
        let display = scale.display();
        assert_eq!((display.width, display.height), (780.0, 1280.0));
        assert_eq!((display.x, display.y), (0.0, 360.0));
        assert_eq!(scale.zoom(), 2.0);
    }

    #[test]
    fn envelop_covers_container() {
        let config = ScaleConfig {
            mode: ScaleMode::Envelop,
            auto_center: CenterMode::CenterBoth,
        };
        let scale = ScaleManager::new(config, true, GAME, Size::new(780, 640));
        let display = scale.display();
        assert_eq!((display.width, display.height), (780.0, 1280.0));
        assert_eq!(display.y, -320.0);
    }

    #[test]
    fn none_mode_ignores_container_but_still_centers() {
        let config = ScaleConfig {
            mode: ScaleMode::None,
            auto_center: CenterMode::CenterHorizontally,
        };
        let scale = ScaleManager::new(config, true, GAME, Size::new(590, 1000));
        let display = scale.display();
        assert_eq!((display.width, display.height), (390.0, 640.0));
        assert_eq!((display.x, display.y), (100.0, 0.0));
    }

    #[test]
    fn resize_mode_follows_container() {
        let config = ScaleConfig {
            mode: ScaleMode::Resize,
            auto_center: CenterMode::NoCenter,
        };
        let mut scale = ScaleManager::new(config, true, GAME, Size::new(1024, 768));
        assert_eq!(scale.game_size(), Size::new(1024, 768));

        scale.resize(Size::new(640, 480));
        assert_eq!(scale.game_size(), Size::new(640, 480));
        assert_eq!(scale.display().width, 640.0);
    }

    #[test]
    fn empty_container_keeps_previous_layout() {
        let mut scale = ScaleManager::new(fit_both(), true, GAME, Size::new(780, 1280));
        let before = scale.display();

        assert!(!scale.resize(Size::new(0, 400)));

        assert_eq!(scale.display(), before);
        assert_eq!(scale.parent_size(), Size::new(780, 1280));
    }

    #[test]
    fn empty_initial_container_uses_game_size() {
        let scale = ScaleManager::new(fit_both(), true, GAME, Size::new(0, 0));
        assert_eq!(scale.display().width, 390.0);
        assert_eq!(scale.parent_size(), GAME);
    }

    #[test]
    fn to_game_inverts_layout() {
        let scale = ScaleManager::new(fit_both(), true, GAME, Size::new(780, 2000));

        // Display is 780x1280 at (0, 360), zoom 2
        assert_eq!(scale.to_game(0.0, 360.0), (0.0, 0.0));
        assert_eq!(scale.to_game(390.0, 1000.0), (195.0, 320.0));
    }
}
