//! Row dot products, real and complex.
//!
//! Both variants assume equal-length inputs; the caller guarantees this and
//! the kernels do not reverify it in release builds.

use num_complex::Complex64;

/// Compute the real dot product `sum(a[i] * b[i])`.
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "row lengths must match");

    let mut sum = 0.0;
    for (ai, bi) in a.iter().zip(b.iter()) {
        sum += ai * bi;
    }
    sum
}

/// Compute the complex dot product `sum(a[i] * b[i])`.
///
/// No conjugation is applied; this is the plain bilinear product used by
/// matrix multiplication, not a Hermitian inner product.
#[inline]
pub fn dot_complex(a: &[Complex64], b: &[Complex64]) -> Complex64 {
    debug_assert_eq!(a.len(), b.len(), "row lengths must match");

    let mut sum = Complex64::new(0.0, 0.0);
    for (ai, bi) in a.iter().zip(b.iter()) {
        sum += ai * bi;
    }
    sum
}
