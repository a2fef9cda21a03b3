use crate::core::{SessionRng, Vec2};
use crate::domain::PhysicsConfig;
use crate::systems::glyph::Body;

use super::CollisionCounters;

/// Below this center distance the normal can't be derived from the centers
const MIN_NORMAL_DISTANCE: f32 = 1e-6;

/// Normal used when two centers coincide: pushes the first body of the pair up
const COINCIDENT_NORMAL: Vec2 = Vec2 { x: 0.0, y: -1.0 };

/// Penetration between two overlapping circles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Unit vector pointing from the second body's center to the first's
    pub normal: Vec2,
    /// How far the circles interpenetrate
    pub overlap: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairOutcome {
    /// No overlap
    Apart,
    /// Overlap corrected, but the bodies were already moving apart
    Separating,
    /// Overlap corrected and an impulse applied
    Resolved,
}

/// Overlap test for the circles inscribed in both bounding squares.
pub fn contact_between(a: &Body, b: &Body) -> Option<Contact> {
    let delta = a.center() - b.center();
    let distance = delta.length();
    let combined_radii = a.radius() + b.radius();

    if distance >= combined_radii {
        return None;
    }

    let normal = if distance > MIN_NORMAL_DISTANCE {
        delta * (1.0 / distance)
    } else {
        COINCIDENT_NORMAL
    };

    Some(Contact {
        normal,
        overlap: combined_radii - distance,
    })
}

/// Resolve all unordered pairs `i < j` in insertion order.
///
/// Pairs whose first body is settled are skipped; a settled second body is
/// still an obstacle. Bodies are mutated in place, so a body touching
/// several neighbors sees the corrections of earlier pairs.
pub fn resolve_pairs(
    bodies: &mut [Body],
    config: &PhysicsConfig,
    rng: &mut SessionRng,
) -> CollisionCounters {
    let mut counters = CollisionCounters::default();
    let n = bodies.len();

    for i in 0..n {
        if bodies[i].settled {
            continue;
        }
        for j in (i + 1)..n {
            let (head, tail) = bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            counters.pair_checks += 1;
            match resolve_pair(a, b, config, rng) {
                PairOutcome::Apart => {}
                PairOutcome::Separating => counters.contacts += 1,
                PairOutcome::Resolved => {
                    counters.contacts += 1;
                    counters.impulses += 1;
                }
            }
        }
    }

    counters
}

/// Push one overlapping pair apart and exchange momentum along the normal.
///
/// Mass is the body size. A settled body has infinite mass: it never moves,
/// and its partner takes the whole correction and impulse. Touching a settled
/// body does not settle the other one.
pub fn resolve_pair(
    a: &mut Body,
    b: &mut Body,
    config: &PhysicsConfig,
    rng: &mut SessionRng,
) -> PairOutcome {
    if a.settled && b.settled {
        return PairOutcome::Apart;
    }
    let Some(contact) = contact_between(a, b) else {
        return PairOutcome::Apart;
    };
    let n = contact.normal;

    // Positional correction
    if !a.settled {
        let share = if b.settled { 1.0 } else { 0.5 };
        a.pos += n * (contact.overlap * share);
    }
    if !b.settled {
        let share = if a.settled { 1.0 } else { 0.5 };
        b.pos -= n * (contact.overlap * share);
    }

    let velocity_along_normal = (a.velocity - b.velocity).dot(n);
    if velocity_along_normal >= 0.0 {
        return PairOutcome::Separating;
    }

    let inv_a = a.inv_mass();
    let inv_b = b.inv_mass();
    let impulse = -(1.0 + config.body_restitution) * velocity_along_normal / (inv_a + inv_b);

    a.apply_impulse(n * impulse);
    b.apply_impulse(-n * impulse);

    // Cosmetic spin kick
    if !a.settled {
        a.rotation_speed += rng.centered(config.collision_spin * 0.5);
    }
    if !b.settled {
        b.rotation_speed -= rng.centered(config.collision_spin * 0.5);
    }

    PairOutcome::Resolved
}
