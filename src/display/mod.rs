//! Rendering layer: all terminal output lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! session.  No game logic is performed; this module only projects the
//! logical 800×600 surface onto the terminal grid.

pub mod starfield;

use std::f32::consts::TAU;
use std::io::{self, Write};
use std::ops::Range;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::config::GameConfig;
use crate::entities::{Entity, GameSession, Rect, Shape, Tint};
use crate::registry::Registry;
use starfield::{star_glyph, Starfield};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::White;
const C_HINT: Color = Color::White;
const C_COCKPIT: Color = Color::Cyan;

pub const CONTROLS_HINT: &str = "Use arrow keys or WASD to move";

/// Segments used to trace a nebula ring.
const RING_STEPS: u32 = 72;

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Blue => Color::Rgb { r: 50, g: 150, b: 255 },
        Tint::Red => Color::Rgb { r: 255, g: 50, b: 50 },
        Tint::Green => Color::Rgb { r: 50, g: 255, b: 50 },
        Tint::Yellow => Color::Yellow,
        Tint::Purple => Color::Rgb { r: 200, g: 50, b: 200 },
        Tint::Orange => Color::Rgb { r: 255, g: 150, b: 50 },
    }
}

pub fn shape_glyph(shape: Shape) -> char {
    match shape {
        Shape::Ship => '▲',
        Shape::Circle => '●',
        Shape::Square => '■',
        Shape::TriangleUp => '▲',
        Shape::TriangleRight => '▶',
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Terminal grid the logical surface is scaled onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

fn span(lo: f32, hi: f32, bound: f32, cells: u16) -> Option<Range<u16>> {
    let n = cells as f32;
    let start = (lo * n / bound).floor() as i64;
    let end = ((hi * n / bound).ceil() as i64).max(start + 1);
    let start = start.max(0);
    let end = end.min(cells as i64);
    (start < end).then(|| start as u16..end as u16)
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    pub fn from_terminal() -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self::new(cols, rows))
    }

    /// Cell under a logical point, if it is on screen.
    pub fn cell(&self, x: f32, y: f32, config: &GameConfig) -> Option<(u16, u16)> {
        let col = span(x, x, config.screen_width, self.cols)?;
        let row = span(y, y, config.screen_height, self.rows)?;
        Some((col.start, row.start))
    }

    /// Cells covered by `rect`, clipped to the grid.  A visible rectangle
    /// always covers at least one cell.
    pub fn cells(&self, rect: &Rect, config: &GameConfig) -> Option<(Range<u16>, Range<u16>)> {
        let cols = span(rect.left(), rect.right(), config.screen_width, self.cols)?;
        let rows = span(rect.top(), rect.bottom(), config.screen_height, self.rows)?;
        Some((cols, rows))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: background, entities, score, controls hint.
pub fn render<W: Write>(
    out: &mut W,
    session: &GameSession,
    background: &Starfield,
    viewport: &Viewport,
) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_starfield(out, background, viewport, &session.config)?;
    draw_entities(out, &session.registry, viewport, &session.config)?;
    draw_score(out, session.score)?;
    draw_controls_hint(out, viewport)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, viewport.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

pub fn draw_starfield<W: Write>(
    out: &mut W,
    field: &Starfield,
    viewport: &Viewport,
    config: &GameConfig,
) -> io::Result<()> {
    for nebula in &field.nebulae {
        out.queue(style::SetForegroundColor(nebula.color))?;
        for step in 0..RING_STEPS {
            let angle = TAU * step as f32 / RING_STEPS as f32;
            let x = nebula.x + nebula.radius * angle.cos();
            let y = nebula.y + nebula.radius * angle.sin();
            if let Some((col, row)) = viewport.cell(x, y, config) {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(Print('░'))?;
            }
        }
    }

    for star in &field.stars {
        if let Some((col, row)) = viewport.cell(star.x, star.y, config) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(star.color))?;
            out.queue(Print(star_glyph(star.radius)))?;
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Draw every entity in insertion order, so later entities cover earlier ones.
pub fn draw_entities<W: Write>(
    out: &mut W,
    registry: &Registry,
    viewport: &Viewport,
    config: &GameConfig,
) -> io::Result<()> {
    for (_, entity) in registry.iter() {
        draw_entity(out, entity, viewport, config)?;
    }
    Ok(())
}

fn draw_entity<W: Write>(
    out: &mut W,
    entity: &Entity,
    viewport: &Viewport,
    config: &GameConfig,
) -> io::Result<()> {
    let Some((cols, rows)) = viewport.cells(entity.rect(), config) else {
        return Ok(());
    };
    let visual = entity.visual();
    let glyph = shape_glyph(visual.shape).to_string();
    let fill = glyph.repeat(cols.len());

    out.queue(style::SetForegroundColor(tint_color(visual.tint)))?;
    for row in rows {
        out.queue(cursor::MoveTo(cols.start, row))?;
        out.queue(Print(&fill))?;
    }

    // Cockpit dot on the ship's centre
    if let Entity::Player(player) = entity {
        let c = player.rect.center();
        if let Some((col, row)) = viewport.cell(c.x, c.y, config) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(C_COCKPIT))?;
            out.queue(Print('●'))?;
        }
    }
    Ok(())
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_score<W: Write>(out: &mut W, score: u32) -> io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", score)))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, viewport: &Viewport) -> io::Result<()> {
    let col = (viewport.cols / 2).saturating_sub(CONTROLS_HINT.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, viewport.rows.saturating_sub(2)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(CONTROLS_HINT))?;
    Ok(())
}
