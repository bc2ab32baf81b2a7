//! Joint angle calculation using the dot product
//!
//! The angle at vertex B is taken between the rays B→A and B→C.

use super::Point2D;

/// Interior angle at `b` in degrees, in `[0, 180]`.
///
/// Uses cos(θ) = (BA · BC) / (|BA| × |BC|). A zero-length ray leaves the
/// angle undefined, in which case 0.0 is returned. Each ray is normalized
/// on its own so tiny or huge coordinates never form a norm product; a
/// ray whose length overflows also falls back to 0.0.
pub fn compute_angle(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    let ba = a.offset_from(b);
    let bc = c.offset_from(b);

    let ba_norm = ba.0.hypot(ba.1);
    let bc_norm = bc.0.hypot(bc.1);
    if ba_norm == 0.0 || bc_norm == 0.0 {
        return 0.0;
    }

    let dot = (ba.0 / ba_norm) * (bc.0 / bc_norm) + (ba.1 / ba_norm) * (bc.1 / bc_norm);
    if !dot.is_finite() {
        return 0.0;
    }

    // Rounding can push |cos| slightly past 1 for near-collinear rays
    let cos_theta = dot.clamp(-1.0, 1.0);

    cos_theta.acos().to_degrees()
}
