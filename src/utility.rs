pub(crate) mod dms {
    /// Degrees per quarter turn
    pub const QD: i32 = 90;
    /// Minutes per degree
    pub const DM: i32 = 60;
    /// Seconds per minute
    pub const MS: i32 = 60;
    /// Degrees per half turn
    pub const HD: i32 = 2 * QD;
    /// Seconds per degree
    pub const DS: i32 = DM * MS;
}

/// Evaluate a polynomial, coefficients ordered from the highest power down
pub(crate) fn polyval(p: &[f64], x: f64) -> f64 {
    p
        .iter()
        .fold(0_f64, |acc, val| acc*x + val)
}

/// Evaluates a four term series whose `k`-th term is `x^k * polyval(table[k-1], x)`.
///
/// Both the Krüger coefficients (in `n`) and the conformal latitude
/// coefficients (in `e²`) are laid out this way.
pub(crate) fn power_series(table: &[&[f64]; 4], x: f64) -> [f64; 4] {
    let mut out = [0_f64; 4];
    let mut d = x;

    for (coeff, poly) in out.iter_mut().zip(table) {
        *coeff = d * polyval(poly, x);
        d *= x;
    }

    out
}

/// Degrees, minutes and seconds to decimal degrees.
///
/// The sign of `deg` carries over to the whole angle.
pub fn dms_to_degrees(deg: f64, min: f64, sec: f64) -> f64 {
    let magnitude = deg.abs() + min / f64::from(dms::DM) + sec / f64::from(dms::DS);
    magnitude.copysign(deg)
}

pub(crate) trait GeoMath {
    fn is_zero(&self) -> bool;
}

impl GeoMath for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < f64::EPSILON
    }
}
