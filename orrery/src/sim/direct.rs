use cgmath::{Vector3, Zero};

use crate::Body;

/// Fill `out_buffer[i]` with the acceleration body `i` feels from all others.
///
/// Reads only, so every body sees the same positions.
pub fn accumulate_gravity(
    bodies: &[Body],
    out_buffer: &mut [Vector3<f32>],
    gravity_strength: f32,
) {
    debug_assert_eq!(bodies.len(), out_buffer.len());
    for (i, (body, out)) in bodies.iter().zip(out_buffer.iter_mut()).enumerate() {
        *out = body.gravity_from(i, bodies, gravity_strength);
    }
}

pub fn integrate(bodies: &mut [Body], acc: &mut [Vector3<f32>], delta: f32) {
    for (body, acc) in bodies.iter_mut().zip(acc.iter_mut()) {
        body.integrate(*acc, delta);
        // The buffer is reused next tick.
        *acc = Vector3::zero();
    }
}

/// Resolve every overlapping pair `(i, j)`, `i < j`, in index order.
///
/// Later pairs see positions already corrected by earlier ones.
/// Returns the number of pairs resolved.
pub fn resolve_collisions(bodies: &mut [Body]) -> usize {
    let mut resolved = 0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (head, tail) = bodies.split_at_mut(j);
            let (a, b) = (&mut head[i], &mut tail[0]);
            if a.check_collision(b) {
                a.resolve_collision(b);
                resolved += 1;
            }
        }
    }
    resolved
}
