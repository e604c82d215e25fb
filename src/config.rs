//! Tunable constants for a game session.

use std::ops::RangeInclusive;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Logical surface size; rendering scales it onto the terminal grid.
    pub screen_width: f32,
    pub screen_height: f32,
    pub ticks_per_second: u32,
    /// Units moved per tick for each held direction.
    pub player_speed: f32,
    pub player_size: f32,
    pub initial_enemies: usize,
    /// Ticks between spawn opportunities.
    pub spawn_interval: u32,
    /// Periodic spawning never pushes the live enemy count past this.
    pub spawn_cap: usize,
    pub enemy_size: RangeInclusive<u32>,
    pub enemy_speed: RangeInclusive<u32>,
    pub star_count: usize,
    pub nebula_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            ticks_per_second: 60,
            player_speed: 5.0,
            player_size: 40.0,
            initial_enemies: 7,
            spawn_interval: 60,
            spawn_cap: 15,
            enemy_size: 20..=40,
            enemy_speed: 1..=3,
            star_count: 200,
            nebula_count: 5,
        }
    }
}

impl GameConfig {
    /// Wall-clock budget of one tick.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }
}
