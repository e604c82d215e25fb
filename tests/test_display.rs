use sprite_collision::compute::{init_session, new_player};
use sprite_collision::config::GameConfig;
use sprite_collision::display::starfield::{star_glyph, Starfield};
use sprite_collision::display::{render, shape_glyph, Viewport, CONTROLS_HINT};
use sprite_collision::entities::*;
use sprite_collision::registry::Registry;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn session_with(entities: Vec<Entity>) -> GameSession {
    let config = GameConfig::default();
    let mut registry = Registry::new();
    let player = registry.add(Entity::Player(new_player(&config)));
    for e in entities {
        registry.add(e);
    }
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

fn render_to_string(session: &GameSession, background: &Starfield, viewport: &Viewport) -> String {
    let mut buf: Vec<u8> = Vec::new();
    render(&mut buf, session, background, viewport).unwrap();
    String::from_utf8(buf).unwrap()
}

// ── Viewport ──────────────────────────────────────────────────────────────────

#[test]
fn viewport_maps_logical_points_to_cells() {
    let cfg = GameConfig::default();
    let vp = Viewport::new(80, 24);
    assert_eq!(vp.cell(0.0, 0.0, &cfg), Some((0, 0)));
    assert_eq!(vp.cell(405.0, 300.0, &cfg), Some((40, 12)));
    assert_eq!(vp.cell(799.9, 599.9, &cfg), Some((79, 23)));
    assert_eq!(vp.cell(800.0, 10.0, &cfg), None);
    assert_eq!(vp.cell(-1.0, 10.0, &cfg), None);
}

#[test]
fn viewport_covers_rect_cells() {
    let cfg = GameConfig::default();
    let vp = Viewport::new(80, 24);
    let (cols, rows) = vp.cells(&Rect::new(380.0, 280.0, 40.0, 40.0), &cfg).unwrap();
    assert_eq!(cols, 38..42);
    assert_eq!(rows, 11..13);
}

#[test]
fn viewport_clips_partially_visible_rect() {
    let cfg = GameConfig::default();
    let vp = Viewport::new(80, 24);
    let (cols, _) = vp.cells(&Rect::new(-15.0, 100.0, 30.0, 30.0), &cfg).unwrap();
    assert_eq!(cols, 0..2);
    assert!(vp.cells(&Rect::new(-45.0, 100.0, 30.0, 30.0), &cfg).is_none());
}

#[test]
fn tiny_rect_still_gets_a_cell() {
    let cfg = GameConfig::default();
    let vp = Viewport::new(80, 24);
    let (cols, rows) = vp.cells(&Rect::new(100.0, 100.0, 1.0, 1.0), &cfg).unwrap();
    assert_eq!(cols.len(), 1);
    assert_eq!(rows.len(), 1);
}

// ── Frame ─────────────────────────────────────────────────────────────────────

#[test]
fn frame_contains_score_and_hint() {
    let mut s = session_with(Vec::new());
    s.score = 12;
    let out = render_to_string(&s, &Starfield::default(), &Viewport::new(80, 24));
    assert!(out.contains("Score: 12"));
    assert!(out.contains(CONTROLS_HINT));
}

#[test]
fn frame_draws_visible_enemies_only() {
    let visible = Entity::Enemy(Enemy {
        rect: Rect::new(100.0, 100.0, 20.0, 20.0),
        visual: Visual {
            shape: Shape::TriangleRight,
            tint: Tint::Orange,
        },
        size: 20,
        direction: Vec2::new(1.0, 0.0),
        speed: 1.0,
    });
    let hidden = Entity::Enemy(Enemy {
        rect: Rect::new(-100.0, 100.0, 20.0, 20.0),
        visual: Visual {
            shape: Shape::Square,
            tint: Tint::Red,
        },
        size: 20,
        direction: Vec2::new(1.0, 0.0),
        speed: 1.0,
    });
    let s = session_with(vec![visible, hidden]);
    let out = render_to_string(&s, &Starfield::default(), &Viewport::new(80, 24));
    assert!(out.contains(shape_glyph(Shape::TriangleRight)));
    assert!(!out.contains(shape_glyph(Shape::Square)));
    assert!(out.contains(shape_glyph(Shape::Ship)));
}

#[test]
fn frame_renders_full_session() {
    let cfg = GameConfig::default();
    let mut rng = seeded_rng();
    let background = Starfield::generate(&cfg, &mut rng);
    let s = init_session(cfg, &mut rng);
    let out = render_to_string(&s, &background, &Viewport::new(120, 40));
    assert!(out.contains("Score: 0"));
}

#[test]
fn zero_sized_viewport_does_not_fail() {
    let s = session_with(Vec::new());
    render_to_string(&s, &Starfield::default(), &Viewport::new(0, 0));
}

// ── Starfield ─────────────────────────────────────────────────────────────────

#[test]
fn starfield_matches_config() {
    let cfg = GameConfig::default();
    let field = Starfield::generate(&cfg, &mut seeded_rng());
    assert_eq!(field.stars.len(), 200);
    assert_eq!(field.nebulae.len(), 5);
    for star in &field.stars {
        assert!((1..=3).contains(&star.radius));
        assert!(star.x >= 0.0 && star.x <= 800.0);
        assert!(star.y >= 0.0 && star.y <= 600.0);
    }
    for nebula in &field.nebulae {
        assert!(nebula.radius >= 50.0 && nebula.radius <= 150.0);
    }
}

#[test]
fn starfield_is_deterministic_per_seed() {
    let cfg = GameConfig::default();
    let a = Starfield::generate(&cfg, &mut seeded_rng());
    let b = Starfield::generate(&cfg, &mut seeded_rng());
    assert_eq!(a, b);
}

#[test]
fn bigger_stars_get_heavier_glyphs() {
    assert_eq!(star_glyph(1), '·');
    assert_eq!(star_glyph(2), '•');
    assert_eq!(star_glyph(3), '*');
}
