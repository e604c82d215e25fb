//! Game-logic functions.
//!
//! Every function works on a `GameSession` (or one of its parts) and, where
//! needed, an injected RNG and sound cue.  No terminal I/O happens here, so
//! callers control determinism (tests use a seeded RNG and a counting cue).

use glam::Vec2;
use log::debug;
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{
    Edge, Enemy, Entity, GameSession, Movement, Player, Rect, SessionStatus, Shape, Tint,
    TickInput, Visual, EDGES, ENEMY_SHAPES, ENEMY_TINTS,
};
use crate::registry::{EntityId, Fate, Registry};
use crate::sound::Cue;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Player centred on screen.
pub fn new_player(config: &GameConfig) -> Player {
    Player {
        rect: Rect::from_center(
            config.screen_width / 2.0,
            config.screen_height / 2.0,
            config.player_size,
            config.player_size,
        ),
        visual: Visual {
            shape: Shape::Ship,
            tint: Tint::Blue,
        },
        speed: config.player_speed,
    }
}

/// Build a running session: the player first (so it draws underneath),
/// then the initial batch of enemies.
pub fn init_session(config: GameConfig, rng: &mut impl Rng) -> GameSession {
    let mut registry = Registry::new();
    let player = registry.add(Entity::Player(new_player(&config)));
    for _ in 0..config.initial_enemies {
        registry.add(Entity::Enemy(spawn_enemy(&config, rng)));
    }
    debug!("session started with {} enemies", registry.enemy_count());

    GameSession {
        registry,
        player,
        score: 0,
        spawn_timer: 0,
        status: SessionStatus::Running,
        frame: 0,
        config,
    }
}

// ── Enemy spawning ───────────────────────────────────────────────────────────

/// Bounding box for an enemy of `size` entering from `edge`.  The centre sits
/// `size` units beyond the edge; `along` is the coordinate parallel to it.
pub fn spawn_rect(edge: Edge, size: u32, along: f32, config: &GameConfig) -> Rect {
    let s = size as f32;
    let (cx, cy) = match edge {
        Edge::Top => (along, -s),
        Edge::Right => (config.screen_width + s, along),
        Edge::Bottom => (along, config.screen_height + s),
        Edge::Left => (-s, along),
    };
    Rect::from_center(cx, cy, s, s)
}

/// Uniform draw over [-1, 1]² normalised to unit length.  Draws too close to
/// zero are discarded.
pub fn random_direction(rng: &mut impl Rng) -> Vec2 {
    loop {
        let v = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        if v.length_squared() > f32::EPSILON {
            return v.normalize();
        }
    }
}

pub fn spawn_enemy(config: &GameConfig, rng: &mut impl Rng) -> Enemy {
    let size = rng.gen_range(config.enemy_size.clone());
    let visual = Visual {
        shape: ENEMY_SHAPES[rng.gen_range(0..ENEMY_SHAPES.len())],
        tint: ENEMY_TINTS[rng.gen_range(0..ENEMY_TINTS.len())],
    };

    let edge = EDGES[rng.gen_range(0..EDGES.len())];
    let along = match edge {
        Edge::Top | Edge::Bottom => rng.gen_range(0.0..=config.screen_width),
        Edge::Left | Edge::Right => rng.gen_range(0.0..=config.screen_height),
    };

    Enemy {
        rect: spawn_rect(edge, size, along, config),
        visual,
        size,
        direction: random_direction(rng),
        speed: rng.gen_range(config.enemy_speed.clone()) as f32,
    }
}

/// Advance the spawn timer by one tick.  Once it reaches the interval it
/// resets; an enemy is added only while the live count is below the cap.
/// A missed opportunity is not carried over.
pub fn advance_spawner(session: &mut GameSession, rng: &mut impl Rng) -> Option<EntityId> {
    session.spawn_timer += 1;
    if session.spawn_timer < session.config.spawn_interval {
        return None;
    }
    session.spawn_timer = 0;

    let live = session.registry.enemy_count();
    if live >= session.config.spawn_cap {
        debug!("spawn skipped: {} enemies at cap", live);
        return None;
    }

    let enemy = spawn_enemy(&session.config, rng);
    let id = session.registry.add(Entity::Enemy(enemy));
    debug!("spawned enemy {:?} ({} live)", id, live + 1);
    Some(id)
}

// ── Movement ─────────────────────────────────────────────────────────────────

/// Sum of the held direction vectors scaled by `speed`.  Diagonals are not
/// normalised, so two held keys move `speed` along each axis.
pub fn player_delta(movement: &Movement, speed: f32) -> Vec2 {
    let mut dir = Vec2::ZERO;
    if movement.left {
        dir.x -= 1.0;
    }
    if movement.right {
        dir.x += 1.0;
    }
    if movement.up {
        dir.y -= 1.0;
    }
    if movement.down {
        dir.y += 1.0;
    }
    dir * speed
}

fn clamp_axis(pos: f32, len: f32, bound: f32) -> f32 {
    if len >= bound {
        (bound - len) / 2.0
    } else {
        pos.clamp(0.0, bound - len)
    }
}

/// Move `rect` the least distance needed to lie inside the screen.
pub fn clamp_to_screen(rect: Rect, config: &GameConfig) -> Rect {
    Rect {
        x: clamp_axis(rect.x, rect.width, config.screen_width),
        y: clamp_axis(rect.y, rect.height, config.screen_height),
        ..rect
    }
}

pub fn move_player(player: &mut Player, movement: &Movement, config: &GameConfig) {
    let delta = player_delta(movement, player.speed);
    player.rect.x += delta.x;
    player.rect.y += delta.y;
    player.rect = clamp_to_screen(player.rect, config);
}

/// True once a moving enemy lies fully beyond an edge and is not heading back
/// across it.  Fresh spawns start off-screen, so only those facing away go
/// at once.
pub fn has_left_screen(enemy: &Enemy, config: &GameConfig) -> bool {
    if enemy.speed <= 0.0 {
        return false;
    }
    let r = &enemy.rect;
    let d = enemy.direction;
    (r.right() < 0.0 && d.x <= 0.0)
        || (r.left() > config.screen_width && d.x >= 0.0)
        || (r.bottom() < 0.0 && d.y <= 0.0)
        || (r.top() > config.screen_height && d.y >= 0.0)
}

pub fn advance_enemy(enemy: &mut Enemy, config: &GameConfig) -> Fate {
    enemy.rect.x += enemy.direction.x * enemy.speed;
    enemy.rect.y += enemy.direction.y * enemy.speed;
    if has_left_screen(enemy, config) {
        Fate::Dead
    } else {
        Fate::Alive
    }
}

/// Run every entity's per-tick update.  Enemies that leave the screen are
/// dropped from the registry during the same pass.
pub fn update_entities(session: &mut GameSession, movement: &Movement) {
    let config = &session.config;
    session.registry.update_all(|entity| match entity {
        Entity::Player(player) => {
            move_player(player, movement, config);
            Fate::Alive
        }
        Entity::Enemy(enemy) => {
            let fate = advance_enemy(enemy, config);
            if fate == Fate::Dead {
                debug!("enemy left the screen at {:?}", enemy.rect);
            }
            fate
        }
    });
}

// ── Collision & scoring ──────────────────────────────────────────────────────

/// Remove every enemy overlapping the player, scoring one point and playing
/// the cue once per removed enemy.  Returns the number of hits.
pub fn resolve_collisions(session: &mut GameSession, cue: &mut dyn Cue) -> u32 {
    let Some(player) = session.registry.player(session.player) else {
        return 0;
    };
    let player_rect = player.rect;

    let hits: Vec<EntityId> = session
        .registry
        .enemies()
        .filter(|(_, enemy)| enemy.rect.intersects(&player_rect))
        .map(|(id, _)| id)
        .collect();

    for &id in &hits {
        session.registry.remove(id);
        session.score += 1;
        cue.play();
        debug!("collision with {:?}, score {}", id, session.score);
    }
    hits.len() as u32
}

// ── Per-tick step ────────────────────────────────────────────────────────────

/// End the session.  Terminated is final.
pub fn terminate(session: &mut GameSession) {
    if session.status == SessionStatus::Running {
        debug!("session terminated at frame {} with score {}", session.frame, session.score);
    }
    session.status = SessionStatus::Terminated;
}

/// Advance a running session by one tick: apply the quit request, then spawn,
/// update, and resolve collisions in that order.  Returns the collision count.
pub fn tick(
    session: &mut GameSession,
    input: &TickInput,
    rng: &mut impl Rng,
    cue: &mut dyn Cue,
) -> u32 {
    if session.status == SessionStatus::Terminated {
        return 0;
    }
    if input.quit {
        terminate(session);
        return 0;
    }

    session.frame += 1;
    advance_spawner(session, rng);
    update_entities(session, &input.movement);
    resolve_collisions(session, cue)
}
