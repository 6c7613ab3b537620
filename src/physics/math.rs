//! Math primitives and physical constants shared by the simulation core.

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 2D vector type for positions, velocities, and forces
pub type Vector = bevy::math::DVec2;

/// Gravitational constant, m³ kg⁻¹ s⁻²
pub const GRAVITATIONAL_CONSTANT: Scalar = 6.67e-11;

/// Solar mass, kg
pub const SOLAR_MASS: Scalar = 1.989e30;

/// Solar radius, m
pub const SOLAR_RADIUS: Scalar = 696_340_000.0;

/// Astronomical unit, m
pub const ASTRONOMICAL_UNIT: Scalar = 149_597_870_700.0;

/// Eggleton-style Roche-lobe radius for a body at distance `separation`
/// from a companion, given the mass ratio `q = m_companion / m_self`.
///
/// `r_L = d · 0.49 q^(-2/3) / (0.6 q^(-2/3) + ln(1 + q^(-1/3)))`
///
/// Scales linearly with separation at fixed mass ratio.
pub fn roche_radius(separation: Scalar, q: Scalar) -> Scalar {
    let q_neg_two_thirds = libm::cbrt(q * q).recip();
    let q_neg_one_third = libm::cbrt(q).recip();

    separation * 0.49 * q_neg_two_thirds
        / (0.6 * q_neg_two_thirds + libm::log1p(q_neg_one_third))
}
