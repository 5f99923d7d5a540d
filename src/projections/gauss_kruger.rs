//! Gauss-Krüger projection formulas.
//!
//! The geodetic latitude is first mapped to the conformal latitude, the
//! conformal sphere is projected with the spherical transverse Mercator and
//! the result is corrected with the Krüger series in the third flattening
//! `n`, truncated after `n⁴`. The inverse runs the same steps backwards with
//! its own coefficient tables.

use log::trace;
use num::Complex;

use crate::{latlon::LatLon, grid::GridCoord, EllipsoidParams, utility::{polyval, power_series}};

// ================================
// Gauss-Krüger Constants
// ================================

// Each row k holds the polynomial (highest power first) that is multiplied
// by x^k, x being n for the Krüger coefficients and e² for the conformal
// latitude coefficients.

/// β₁..β₄, grid from the conformal sphere
const BETA_COEFF: [&[f64]; 4] = [
    &[41. / 180., 5. / 16., -2. / 3., 1. / 2.],
    &[557. / 1440., -3. / 5., 13. / 48.],
    &[-103. / 140., 61. / 240.],
    &[49561. / 161_280.],
];

/// δ₁..δ₄, conformal sphere from the grid
const DELTA_COEFF: [&[f64]; 4] = [
    &[-1. / 360., 37. / 96., -2. / 3., 1. / 2.],
    &[-437. / 1440., 1. / 15., 1. / 48.],
    &[-37. / 840., 17. / 480.],
    &[4397. / 161_280.],
];

/// A, B, C, D: geodetic to conformal latitude
const CONFORMAL_COEFF: [&[f64]; 4] = [
    &[1.],
    &[-1. / 6., 5. / 6.],
    &[-45. / 120., 104. / 120.],
    &[1237. / 1260.],
];

/// A*, B*, C*, D*: conformal to geodetic latitude
const GEODETIC_COEFF: [&[f64]; 4] = [
    &[1., 1., 1., 1.],
    &[-30. / 6., -17. / 6., -7. / 6.],
    &[889. / 120., 224. / 120.],
    &[-4279. / 1260.],
];

/// Which way a [`transform`] goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Latitude/longitude to northing/easting
    #[default]
    Forward,
    /// Northing/easting to latitude/longitude
    Reverse,
}

impl Direction {
    pub fn from_reverse_flag(reverse: bool) -> Direction {
        if reverse { Direction::Reverse } else { Direction::Forward }
    }
}

/// `sin φ cos φ (A + B sin²φ + C sin⁴φ + D sin⁶φ)`, the difference between
/// geodetic and conformal latitude expressed in whichever of the two is
/// given.
fn latitude_correction(phi: f64, coeff: &[f64; 4]) -> f64 {
    let (s, c) = phi.sin_cos();
    let [a, b, c2, d] = *coeff;

    s * c * polyval(&[d, c2, b, a], s * s)
}

/// `ζ + sign · Σ cₖ sin(2kζ)` over the complex argument `ζ = ξ + iη`, whose
/// real and imaginary parts are the northing and easting series.
fn kruger_sum(zeta: Complex<f64>, coeff: &[f64; 4], sign: f64) -> Complex<f64> {
    coeff
        .iter()
        .zip(1_i32..)
        .fold(zeta, |acc, (c, k)| {
            acc + (zeta * (2. * f64::from(k))).sin() * (sign * c)
        })
}

/// Geodetic to grid.
///
/// # Usage
///
/// ```
/// use gausskruger::{forward, EllipsoidParams, LatLon};
///
/// let params = EllipsoidParams::new(298.257222101, 6378137.0)
///     .with_central_meridian(11.30625)
///     .with_scale(1.000006)
///     .with_false_origin(-667.282, 1500025.141);
///
/// let grid = forward(&LatLon::new(59.0, 15.0), &params);
///
/// assert!((grid.northing() - 6547908.1294).abs() < 1e-4);
/// assert!((grid.easting() - 1712256.7518).abs() < 1e-4);
/// ```
pub fn forward(point: &LatLon, params: &EllipsoidParams) -> GridCoord {
    let e2 = params.eccentricity_squared();
    let n = params.third_flattening();
    let radius = params.scale * params.rectifying_radius();

    let phi = point.latitude.to_radians();
    let delta_lambda = point.longitude.to_radians() - params.central_meridian.to_radians();

    let phi_star = phi - latitude_correction(phi, &power_series(&CONFORMAL_COEFF, e2));

    let xi_prim = (phi_star.tan() / delta_lambda.cos()).atan();
    let eta_prim = (phi_star.cos() * delta_lambda.sin()).atanh();

    let beta = power_series(&BETA_COEFF, n);
    let sum = kruger_sum(Complex::new(xi_prim, eta_prim), &beta, 1.);

    let grid = GridCoord::new(
        params.false_northing + radius * sum.re,
        params.false_easting + radius * sum.im,
    );

    trace!("forward {point} -> {grid} (phi* = {phi_star}, dlambda = {delta_lambda})");

    grid
}

/// Grid to geodetic.
///
/// # Usage
///
/// ```
/// use gausskruger::{inverse, EllipsoidParams, GridCoord};
///
/// let params = EllipsoidParams::new(298.257222101, 6378137.0)
///     .with_central_meridian(11.30625)
///     .with_scale(1.000006)
///     .with_false_origin(-667.282, 1500025.141);
///
/// let latlon = inverse(&GridCoord::new(6547908.1294, 1712256.7518), &params);
///
/// assert!((latlon.latitude() - 59.0).abs() < 1e-8);
/// assert!((latlon.longitude() - 15.0).abs() < 1e-8);
/// ```
pub fn inverse(point: &GridCoord, params: &EllipsoidParams) -> LatLon {
    let e2 = params.eccentricity_squared();
    let n = params.third_flattening();
    let radius = params.scale * params.rectifying_radius();

    let xi = (point.northing - params.false_northing) / radius;
    let eta = (point.easting - params.false_easting) / radius;

    let delta = power_series(&DELTA_COEFF, n);
    let prim = kruger_sum(Complex::new(xi, eta), &delta, -1.);
    let (xi_prim, eta_prim) = (prim.re, prim.im);

    let phi_star = (xi_prim.sin() / eta_prim.cosh()).asin();
    let delta_lambda = (eta_prim.sinh() / xi_prim.cos()).atan();

    let phi = phi_star + latitude_correction(phi_star, &power_series(&GEODETIC_COEFF, e2));

    let latlon = LatLon::new(
        phi.to_degrees(),
        params.central_meridian + delta_lambda.to_degrees(),
    );

    trace!("inverse {point} -> {latlon} (phi* = {phi_star}, dlambda = {delta_lambda})");

    latlon
}

/// Runs [`forward`] or [`inverse`] on a bare pair of numbers: latitude and
/// longitude for [`Direction::Forward`], northing and easting for
/// [`Direction::Reverse`]. The output pair is in the other coordinate space.
///
/// ```
/// use gausskruger::{transform, Direction, Projection};
///
/// let params = Projection::Rt90_7_5GonV.params();
///
/// let (northing, easting) = transform(Direction::Forward, (59.0, 15.0), &params);
/// let (lat, lon) = transform(Direction::Reverse, (northing, easting), &params);
///
/// assert!((lat - 59.0).abs() < 1e-8);
/// assert!((lon - 15.0).abs() < 1e-8);
/// ```
pub fn transform(direction: Direction, point: (f64, f64), params: &EllipsoidParams) -> (f64, f64) {
    match direction {
        Direction::Forward => {
            let grid = forward(&LatLon::new(point.0, point.1), params);
            (grid.northing, grid.easting)
        }
        Direction::Reverse => {
            let latlon = inverse(&GridCoord::new(point.0, point.1), params);
            (latlon.latitude, latlon.longitude)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rt90() -> EllipsoidParams {
        EllipsoidParams::new(298.257_222_101, 6_378_137.)
            .with_central_meridian(11.30625)
            .with_scale(1.000_006)
            .with_false_origin(-667.282, 1_500_025.141)
    }

    #[test]
    fn coefficient_tables_match_the_expanded_polynomials() {
        let n: f64 = 0.001_679_220_394_63;
        let beta = power_series(&BETA_COEFF, n);
        let delta = power_series(&DELTA_COEFF, n);

        let beta1 = n / 2. - 2. / 3. * n.powi(2) + 5. / 16. * n.powi(3) + 41. / 180. * n.powi(4);
        let beta4 = 49561. / 161_280. * n.powi(4);
        let delta1 = n / 2. - 2. / 3. * n.powi(2) + 37. / 96. * n.powi(3) - 1. / 360. * n.powi(4);
        let delta2 = n.powi(2) / 48. + n.powi(3) / 15. - 437. / 1440. * n.powi(4);

        assert!((beta[0] - beta1).abs() < 1e-18);
        assert!((beta[3] - beta4).abs() < 1e-24);
        assert!((delta[0] - delta1).abs() < 1e-18);
        assert!((delta[1] - delta2).abs() < 1e-20);

        let e2: f64 = 0.006_694_380_022_9;
        let conformal = power_series(&CONFORMAL_COEFF, e2);
        let geodetic = power_series(&GEODETIC_COEFF, e2);

        assert!((conformal[1] - (5. * e2.powi(2) - e2.powi(3)) / 6.).abs() < 1e-18);
        assert!((conformal[2] - (104. * e2.powi(3) - 45. * e2.powi(4)) / 120.).abs() < 1e-20);
        assert!((geodetic[0] - (e2 + e2.powi(2) + e2.powi(3) + e2.powi(4))).abs() < 1e-18);
        assert!((geodetic[1] + (7. * e2.powi(2) + 17. * e2.powi(3) + 30. * e2.powi(4)) / 6.).abs() < 1e-18);
        assert!((geodetic[3] + 4279. * e2.powi(4) / 1260.).abs() < 1e-20);
    }

    #[test]
    fn kruger_sum_matches_real_form() {
        let coeff = [1e-3, 2e-6, 3e-9, 4e-12];
        let (xi, eta) = (0.9, 0.03);
        let sum = kruger_sum(Complex::new(xi, eta), &coeff, 1.);

        let (mut re, mut im) = (xi, eta);
        for (k, c) in coeff.iter().enumerate() {
            let m = 2. * (k + 1) as f64;
            re += c * (m * xi).sin() * (m * eta).cosh();
            im += c * (m * xi).cos() * (m * eta).sinh();
        }

        assert!((sum.re - re).abs() < 1e-15);
        assert!((sum.im - im).abs() < 1e-15);
    }

    #[test]
    fn reference_point() {
        let grid = forward(&LatLon::new(59., 15.), &rt90());
        assert!((grid.northing - 6_547_908.129_4).abs() < 1e-4);
        assert!((grid.easting - 1_712_256.751_8).abs() < 1e-4);

        let back = inverse(&grid, &rt90());
        assert!((back.latitude - 59.).abs() < 1e-8);
        assert!((back.longitude - 15.).abs() < 1e-8);
    }

    #[test]
    fn reference_inverse_point() {
        let latlon = inverse(&GridCoord::new(6_500_000., 1_400_000.), &rt90());
        assert!((latlon.latitude - 58.611_071_970_0).abs() < 1e-9);
        assert!((latlon.longitude - 9.585_193_746_3).abs() < 1e-9);
    }

    #[test]
    fn sphere_reduces_to_spherical_transverse_mercator() {
        let radius = 6_371_000.;
        let params = EllipsoidParams::sphere(radius);

        let lat = 30_f64.to_radians();
        let dlon = 2_f64.to_radians();
        let grid = forward(&LatLon::new(30., 2.), &params);

        assert!((grid.northing - radius * (lat.tan() / dlon.cos()).atan()).abs() < 1e-6);
        assert!((grid.easting - radius * (lat.cos() * dlon.sin()).atanh()).abs() < 1e-6);

        let back = inverse(&grid, &params);
        assert!((back.latitude - 30.).abs() < 1e-12);
        assert!((back.longitude - 2.).abs() < 1e-12);
    }

    #[test]
    fn equator_on_central_meridian_is_false_origin() {
        let grid = forward(&LatLon::new(0., 11.30625), &rt90());
        assert!((grid.northing + 667.282).abs() < 1e-9);
        assert!((grid.easting - 1_500_025.141).abs() < 1e-9);
    }

    #[test]
    fn non_finite_inputs_propagate() {
        let grid = forward(&LatLon::new(f64::NAN, 15.), &rt90());
        assert!(grid.northing.is_nan());
        assert!(grid.easting.is_nan());

        let latlon = inverse(&GridCoord::new(6_500_000., f64::INFINITY), &rt90());
        assert!(!latlon.longitude.is_finite());
    }

    #[test]
    fn transform_dispatches_on_direction() {
        let (n, e) = transform(Direction::Forward, (59., 15.), &rt90());
        let grid = forward(&LatLon::new(59., 15.), &rt90());
        assert_eq!((n, e), (grid.northing, grid.easting));

        let (lat, lon) = transform(Direction::Reverse, (n, e), &rt90());
        let latlon = inverse(&grid, &rt90());
        assert_eq!((lat, lon), (latlon.latitude, latlon.longitude));

        assert_eq!(Direction::from_reverse_flag(true), Direction::Reverse);
        assert_eq!(Direction::from_reverse_flag(false), Direction::default());
    }
}
