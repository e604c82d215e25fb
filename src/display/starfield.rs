//! Static space backdrop, generated once per session.

use crossterm::style::Color;
use rand::Rng;

use crate::config::GameConfig;

const STAR_COLORS: [Color; 3] = [Color::White, Color::Cyan, Color::Yellow];

const NEBULA_COLORS: [Color; 3] = [
    Color::Rgb { r: 50, g: 0, b: 100 },
    Color::Rgb { r: 0, g: 50, b: 100 },
    Color::Rgb { r: 100, g: 0, b: 50 },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    /// 1..=3; bigger stars get a heavier glyph.
    pub radius: u32,
    pub color: Color,
}

/// A hollow ring of dust.
#[derive(Clone, Debug, PartialEq)]
pub struct Nebula {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Starfield {
    pub stars: Vec<Star>,
    pub nebulae: Vec<Nebula>,
}

impl Starfield {
    pub fn generate(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let stars = (0..config.star_count)
            .map(|_| Star {
                x: rng.gen_range(0.0..=config.screen_width),
                y: rng.gen_range(0.0..=config.screen_height),
                radius: rng.gen_range(1..=3),
                color: STAR_COLORS[rng.gen_range(0..STAR_COLORS.len())],
            })
            .collect();

        let nebulae = (0..config.nebula_count)
            .map(|_| Nebula {
                x: rng.gen_range(0.0..=config.screen_width),
                y: rng.gen_range(0.0..=config.screen_height),
                radius: rng.gen_range(50..=150) as f32,
                color: NEBULA_COLORS[rng.gen_range(0..NEBULA_COLORS.len())],
            })
            .collect();

        Self { stars, nebulae }
    }
}

pub fn star_glyph(radius: u32) -> char {
    match radius {
        0 | 1 => '·',
        2 => '•',
        _ => '*',
    }
}
