//! Exact posterior density of the collision-based measures
//!
//! For two proper classes the posterior density of the (modified) ambiguity
//! value under Dirichlet(a1, a2, a_cs) has a one-dimensional integral
//! representation: conditioning on the cannot-solve mass `u ~ Beta(a_cs,
//! a1 + a2)`, the proper-class split `xi ~ Beta(a1, a2)` maps to the
//! ambiguity value through an invertible branch, and the density follows by
//! a change of variables integrated over `u` with adaptive Simpson
//! quadrature.

use ambig_core::{Error, Result};
use statrs::function::gamma::ln_gamma;

/// Default quadrature tolerance
pub const DEFAULT_TOL: f64 = 1e-8;

const MAX_DEPTH: u32 = 20;

/// Which collision-based family the density describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbiguityKind {
    /// Unmodified collision-based ambiguity
    Standard,
    /// Modified (rescaled) collision-based ambiguity
    Modified,
}

fn beta_density(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 || x >= 1.0 {
        return 0.0;
    }
    let log_b = ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b);
    ((a - 1.0) * x.ln() + (b - 1.0) * (1.0 - x).ln() - log_b).exp()
}

/// The proper-class split reaching ambiguity `a` at cannot-solve mass `u`,
/// with the Jacobian of the map
fn xi_and_slope(a: f64, u: f64, kind: AmbiguityKind) -> Option<(f64, f64)> {
    let denom = 1.0 - u;
    let (arg, slope_scale) = match kind {
        AmbiguityKind::Standard => (2.0 * (1.0 - a) / denom - 1.0, 2.0),
        AmbiguityKind::Modified => ((1.0 - a) / denom, 4.0),
    };
    if arg <= 0.0 {
        return None;
    }
    let root = arg.sqrt();
    let xi = 0.5 * (1.0 - root);
    let slope = 1.0 / (slope_scale * denom * root);
    Some((xi, slope))
}

fn lower_limit(a: f64, kind: AmbiguityKind) -> f64 {
    match kind {
        AmbiguityKind::Standard => (2.0 * a - 1.0).max(0.0),
        AmbiguityKind::Modified => 0.0,
    }
}

fn integrand(a: f64, u: f64, kind: AmbiguityKind, a1: f64, a2: f64, a_cs: f64) -> f64 {
    if u <= lower_limit(a, kind) || u >= a {
        return 0.0;
    }
    let Some((xi, slope)) = xi_and_slope(a, u, kind) else {
        return 0.0;
    };
    let f_u = beta_density(a_cs, a1 + a2, u);
    // Both branches of the split map to the same ambiguity value.
    let f_xi = beta_density(a1, a2, xi) + beta_density(a1, a2, 1.0 - xi);
    f_u * slope * f_xi
}

fn adaptive_simpson<F: Fn(f64) -> f64>(
    f: &F,
    x0: f64,
    x1: f64,
    eps: f64,
    s: f64,
    f0: f64,
    f1: f64,
    fm: f64,
    depth: u32,
) -> f64 {
    let xm = 0.5 * (x0 + x1);
    let xl = 0.5 * (x0 + xm);
    let xr = 0.5 * (xm + x1);

    let fl = f(xl);
    let fr = f(xr);

    let s_left = (xm - x0) / 6.0 * (f0 + 4.0 * fl + fm);
    let s_right = (x1 - xm) / 6.0 * (fm + 4.0 * fr + f1);
    let err = s_left + s_right - s;

    if err.abs() < 15.0 * eps || depth > MAX_DEPTH {
        return s_left + s_right + err / 15.0;
    }

    adaptive_simpson(f, x0, xm, eps / 2.0, s_left, f0, fm, fl, depth + 1)
        + adaptive_simpson(f, xm, x1, eps / 2.0, s_right, fm, f1, fr, depth + 1)
}

/// Posterior density of the ambiguity value `a` under Dirichlet(a1, a2,
/// a_cs), two proper classes
pub fn ambiguity_pdf(
    a: f64,
    a1: f64,
    a2: f64,
    a_cs: f64,
    kind: AmbiguityKind,
    tol: f64,
) -> Result<f64> {
    if a <= 0.0 || a >= 1.0 {
        return Err(Error::InvalidParameter(format!(
            "ambiguity value must lie in (0, 1), got {a}"
        )));
    }
    for (name, value) in [("a1", a1), ("a2", a2), ("a_cs", a_cs)] {
        if value <= 0.0 {
            return Err(Error::non_positive(name, value));
        }
    }
    if tol <= 0.0 {
        return Err(Error::non_positive("tol", tol));
    }

    let u0 = lower_limit(a, kind);
    let f = |u: f64| integrand(a, u, kind, a1, a2, a_cs);

    let f0 = f(u0);
    let f1 = f(a);
    let fm = f(0.5 * (u0 + a));
    let s = (a - u0) / 6.0 * (f0 + 4.0 * fm + f1);

    Ok(adaptive_simpson(&f, u0, a, tol, s, f0, f1, fm, 0))
}

/// Batch evaluation of [`ambiguity_pdf`]
pub fn ambiguity_pdf_batch(
    a_vals: &[f64],
    a1: f64,
    a2: f64,
    a_cs: f64,
    kind: AmbiguityKind,
    tol: f64,
) -> Result<Vec<f64>> {
    a_vals
        .iter()
        .map(|&a| ambiguity_pdf(a, a1, a2, a_cs, kind, tol))
        .collect()
}
