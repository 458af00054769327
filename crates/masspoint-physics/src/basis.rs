//! Orthonormal frame construction
//!
//! Infrastructure toward contact and constraint resolution, where a tangent
//! frame has to be built around a single known axis.

use crate::vector::Vector3;
use std::error::Error;
use std::fmt;

/// The two input axes were parallel, so no frame could be built.
///
/// On this outcome `a` has been normalized, `b` is untouched and `c` is the
/// zero vector; the trio is not a usable basis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DegenerateBasis;

impl fmt::Display for DegenerateBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot build an orthonormal basis from parallel vectors")
    }
}

impl Error for DegenerateBasis {}

/// Build a right-handed orthonormal frame `{a, b, c}` in place.
///
/// `a` fixes the primary axis and is only normalized. `b` need not be unit
/// length or perpendicular to `a` on entry; it is recomputed so the result
/// is mutually orthogonal. `c` is entirely an output.
pub fn make_orthonormal_basis(
    a: &mut Vector3,
    b: &mut Vector3,
    c: &mut Vector3,
) -> Result<(), DegenerateBasis> {
    a.normalize();
    *c = a.cross(*b);
    if c.square_magnitude() == 0.0 {
        return Err(DegenerateBasis);
    }
    c.normalize();
    *b = c.cross(*a);
    Ok(())
}
