//! Pairwise separation checks and the bounded outward collision search.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use crate::layout::config::LayoutConfig;

/// Whether `pos` keeps the minimum separation from every placed position.
pub fn is_clear(pos: Vec2, placed: &[Vec2], min_separation: f32) -> bool {
    let min_sq = min_separation * min_separation;
    placed.iter().all(|p| p.distance_squared(pos) >= min_sq)
}

/// Resolve a collision by searching outward from `anchor` along the node's
/// own bearing: the radius grows by a fixed step per attempt while the angle
/// swings alternately to either side by a growing offset. Best effort: after
/// the configured attempt budget the last tried position is accepted even if
/// it still overlaps.
pub fn resolve(preferred: Vec2, anchor: Vec2, placed: &[Vec2], config: &LayoutConfig) -> Vec2 {
    if is_clear(preferred, placed, config.min_separation) {
        return preferred;
    }

    let offset = preferred - anchor;
    let mut radius = offset.length();
    // A node sitting on its anchor has no bearing of its own; push it up.
    let bearing = if radius < f32::EPSILON {
        -FRAC_PI_2
    } else {
        offset.y.atan2(offset.x)
    };

    let mut last = preferred;
    for attempt in 1..=config.collision_attempts {
        radius += config.collision_radial_step;
        let swing = ((attempt + 1) / 2) as f32 * config.collision_angle_step;
        let side = if attempt % 2 == 1 { 1.0 } else { -1.0 };
        last = anchor + Vec2::from_angle(bearing + side * swing) * radius;
        if is_clear(last, placed, config.min_separation) {
            return last;
        }
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    #[test]
    fn clear_position_is_returned_unchanged() {
        let preferred = Vec2::new(200.0, 0.0);
        let placed = vec![Vec2::ZERO];
        let resolved = resolve(preferred, Vec2::ZERO, &placed, &config());
        assert_eq!(resolved, preferred);
    }

    #[test]
    fn colliding_position_moves_outward() {
        let cfg = config();
        let anchor = Vec2::ZERO;
        let preferred = Vec2::new(100.0, 0.0);
        let placed = vec![anchor, Vec2::new(110.0, 0.0)];
        let resolved = resolve(preferred, anchor, &placed, &cfg);
        assert_ne!(resolved, preferred);
        assert!(is_clear(resolved, &placed, cfg.min_separation));
        // Search moves away from the anchor, not toward it.
        assert!(resolved.distance(anchor) > preferred.distance(anchor));
    }

    #[test]
    fn exhaustion_accepts_last_attempt() {
        // A wall of occupied positions the search cannot escape within its
        // attempt budget.
        let mut cfg = config();
        cfg.collision_attempts = 3;
        cfg.collision_radial_step = 1.0;
        cfg.collision_angle_step = 0.01;
        let anchor = Vec2::ZERO;
        let preferred = Vec2::new(100.0, 0.0);
        let placed: Vec<Vec2> = (0..400)
            .map(|i| Vec2::new(80.0 + (i % 20) as f32 * 5.0, -45.0 + (i / 20) as f32 * 5.0))
            .collect();
        let resolved = resolve(preferred, anchor, &placed, &cfg);
        // Still overlapping, but a position was produced.
        assert!(!is_clear(resolved, &placed, cfg.min_separation));
        assert!(resolved.distance(anchor) > 100.0);
    }

    #[test]
    fn anchored_node_gets_upward_bearing() {
        let cfg = config();
        let anchor = Vec2::new(50.0, 50.0);
        let placed = vec![anchor];
        let resolved = resolve(anchor, anchor, &placed, &cfg);
        assert!(is_clear(resolved, &placed, cfg.min_separation));
        // y-down coordinates: "up" means smaller y.
        assert!(resolved.y < anchor.y);
    }
}
