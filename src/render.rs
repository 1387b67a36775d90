//! Rendering
//!
//! Draws a [`GameState`] onto a [`DrawingSurface`]. The surface is a
//! capability supplied by the host (a canvas, a terminal, a test recorder);
//! this module only decides what to draw and where.

use serde::{Serialize, Deserialize};

use crate::core::vec2::Vec2;
use crate::game::asteroid::AsteroidColor;
use crate::game::state::{Bounds, GamePhase, GameState};
use crate::scores::leaderboard::ScoreEntry;

// =============================================================================
// PRIMITIVES
// =============================================================================

/// RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Background, `#0e0836`
    pub const BACKGROUND: Color = Color::rgb(0x0e, 0x08, 0x36);
    /// White
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Dimming layer behind end-of-game text
    pub const OVERLAY: Color = Color::rgba(0, 0, 0, 160);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<AsteroidColor> for Color {
    fn from(color: AsteroidColor) -> Self {
        let (r, g, b) = color.rgb();
        Color::rgb(r, g, b)
    }
}

/// Horizontal text anchoring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    /// Text starts at the anchor
    #[default]
    Left,
    /// Text is centered on the anchor
    Center,
}

/// Font size, color and alignment for a text draw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f64,
    /// Fill color
    pub color: Color,
    /// Alignment
    pub align: TextAlign,
}

impl TextStyle {
    /// White left-aligned text.
    pub const fn left(size: f64) -> Self {
        Self { size, color: Color::WHITE, align: TextAlign::Left }
    }

    /// White centered text.
    pub const fn centered(size: f64) -> Self {
        Self { size, color: Color::WHITE, align: TextAlign::Center }
    }
}

/// Host drawing capability. Coordinates are surface pixels, Y down.
pub trait DrawingSurface {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, origin: Vec2, width: f64, height: f64, color: Color);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color);

    /// Stroke a closed polygon.
    fn stroke_polygon(&mut self, points: &[Vec2], line_width: f64, color: Color);

    /// Draw a line of text.
    fn fill_text(&mut self, text: &str, position: Vec2, style: TextStyle);
}

// =============================================================================
// FRAME
// =============================================================================

/// Draw one frame: background, ship, asteroids, projectiles, HUD and, once
/// the game is over, the end-of-game overlay.
pub fn render_frame(surface: &mut impl DrawingSurface, state: &GameState) {
    let bounds = state.bounds;
    surface.fill_rect(Vec2::ZERO, bounds.width, bounds.height, Color::BACKGROUND);

    let ship = &state.ship;
    surface.stroke_polygon(&ship.hull(), ship.size / 20.0, Color::WHITE);

    for asteroid in &state.asteroids {
        surface.fill_circle(asteroid.position, asteroid.radius, asteroid.color.into());
        surface.fill_text(
            &asteroid.hit_points.to_string(),
            asteroid.position,
            TextStyle::centered(20.0),
        );
    }

    for projectile in &ship.projectiles {
        surface.fill_circle(projectile.position, projectile.radius, Color::WHITE);
    }

    render_hud(surface, state);

    match state.phase {
        GamePhase::Playing => {}
        GamePhase::Won => render_overlay(surface, bounds, "You Win!", state),
        GamePhase::GameOver => render_overlay(surface, bounds, "Game Over", state),
    }

    #[cfg(feature = "debug-tracing")]
    tracing::trace!(
        tick = state.tick,
        asteroids = state.asteroids.len(),
        projectiles = ship.projectiles.len(),
        "Frame rendered"
    );
}

/// Lives, invulnerability, level and score in the top-left corner.
fn render_hud(surface: &mut impl DrawingSurface, state: &GameState) {
    let size = state.config.hud_font_size;
    let style = TextStyle::left(size);
    let line_height = size * 1.5;

    let mut lines = vec![format!("Lives: {}", state.ship.lives)];
    if state.ship.invulnerable {
        lines.push("Invulnerable".to_string());
    }
    lines.push(format!("Level: {}", state.level));
    lines.push(format!("Score: {}", state.ship.score));

    for (row, line) in lines.iter().enumerate() {
        let y = size + row as f64 * line_height;
        surface.fill_text(line, Vec2::new(10.0, y), style);
    }
}

fn render_overlay(surface: &mut impl DrawingSurface, bounds: Bounds, title: &str, state: &GameState) {
    let size = state.config.hud_font_size;
    let center = bounds.center();

    surface.fill_rect(Vec2::ZERO, bounds.width, bounds.height, Color::OVERLAY);
    surface.fill_text(title, center, TextStyle::centered(size * 2.5));
    surface.fill_text(
        &format!("{} - Score: {}", state.ship.name, state.ship.score),
        center + Vec2::new(0.0, size * 2.0),
        TextStyle::centered(size),
    );
}

// =============================================================================
// LEADERBOARD
// =============================================================================

/// Draw the leaderboard as a ranked list, without a running game.
pub fn render_leaderboard(
    surface: &mut impl DrawingSurface,
    bounds: Bounds,
    entries: &[ScoreEntry],
    font_size: f64,
) {
    surface.fill_rect(Vec2::ZERO, bounds.width, bounds.height, Color::BACKGROUND);

    let x = bounds.width / 2.0;
    let line_height = font_size * 1.5;
    let top = font_size * 3.0;

    surface.fill_text("Leaderboard", Vec2::new(x, top), TextStyle::centered(font_size * 2.0));

    if entries.is_empty() {
        surface.fill_text(
            "No scores yet",
            Vec2::new(x, top + line_height * 2.0),
            TextStyle::centered(font_size),
        );
        return;
    }

    for (rank, entry) in entries.iter().enumerate() {
        let y = top + line_height * (rank as f64 + 2.0);
        let line = format!(
            "{}. {} - {} ({})",
            rank + 1,
            entry.nickname,
            entry.score,
            entry.date.format("%Y-%m-%d"),
        );
        surface.fill_text(&line, Vec2::new(x, y), TextStyle::centered(font_size));
    }
}

// =============================================================================
// RECORDING SURFACE
// =============================================================================

/// A recorded draw call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// `fill_rect`
    Rect {
        origin: Vec2,
        width: f64,
        height: f64,
        color: Color,
    },
    /// `fill_circle`
    Circle {
        center: Vec2,
        radius: f64,
        color: Color,
    },
    /// `stroke_polygon`
    Polygon {
        points: Vec<Vec2>,
        line_width: f64,
        color: Color,
    },
    /// `fill_text`
    Text {
        text: String,
        position: Vec2,
        style: TextStyle,
    },
}

/// Headless surface that records every draw call of the last frame.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingSurface {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded since the last background fill.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of frames started (full-surface background fills).
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Text drawn in the current frame, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn record(&mut self, command: DrawCommand) {
        #[cfg(feature = "debug-tracing")]
        tracing::trace!(?command, "draw");

        self.commands.push(command);
    }
}

impl DrawingSurface for RecordingSurface {
    fn fill_rect(&mut self, origin: Vec2, width: f64, height: f64, color: Color) {
        if color == Color::BACKGROUND {
            self.commands.clear();
            self.frames += 1;
        }
        self.record(DrawCommand::Rect { origin, width, height, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Color) {
        self.record(DrawCommand::Circle { center, radius, color });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], line_width: f64, color: Color) {
        self.record(DrawCommand::Polygon { points: points.to_vec(), line_width, color });
    }

    fn fill_text(&mut self, text: &str, position: Vec2, style: TextStyle) {
        self.record(DrawCommand::Text { text: text.to_string(), position, style });
    }
}
