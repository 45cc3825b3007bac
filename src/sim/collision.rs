//! Equal-mass elastic collision resolution.
//!
//! Velocities are decomposed along the collision normal, the line between
//! the two centers. The normal-direction speeds are exchanged between the
//! balls; the tangential components are untouched. This is the frictionless
//! equal-mass case; unequal masses would need the exchange re-derived from
//! momentum and energy conservation.

use super::ball::Ball;

/// Center distances below this are treated as coincident: the collision
/// normal is undefined, so resolution is skipped instead of dividing by
/// zero. See [`resolve_collision`].
pub const COINCIDENT_EPS: f32 = 1e-6;

/// Resolve an elastic collision between two equal-mass balls, mutating both
/// velocities in place.
///
/// Uses the position-difference formulation: with `d = b.pos - a.pos`, the
/// relative velocity projected onto `d` is transferred from one ball to the
/// other, which exchanges the normal speeds exactly and leaves the
/// tangential parts alone.
///
/// The caller must already have established overlap via [`Ball::collides`];
/// no check is performed here, and calling this on a non-overlapping pair
/// produces a physically meaningless exchange. A pair closer than
/// [`COINCIDENT_EPS`] is skipped with a warning rather than resolved.
pub fn resolve_collision(a: &mut Ball, b: &mut Ball) {
    let d = b.pos - a.pos;
    let dist_sq = d.length_squared();
    if dist_sq < COINCIDENT_EPS * COINCIDENT_EPS {
        log::warn!("skipping collision between coincident balls at {:?}", a.pos);
        return;
    }

    // k * d is the normal-speed difference times the unit normal, so
    // subtracting it from one velocity and adding it to the other swaps the
    // normal components.
    let k = (a.vel - b.vel).dot(d) / dist_sq;
    a.vel -= k * d;
    b.vel += k * d;
}
