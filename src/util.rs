/// Vectors and chords shorter than this are treated as degenerate.
pub const DEGENERATE_LENGTH: f64 = 1e-6;

/// Centripetal weight of a chord: its length raised to `alpha`.
///
/// A weight too small to divide by is replaced with 1.0, which makes
/// coincident control points fall back to uniform parameterization.
pub fn chord_weight(length: f64, alpha: f64) -> f64 {
    let w = length.powf(alpha);
    if w < DEGENERATE_LENGTH {
        1.0
    } else {
        w
    }
}
