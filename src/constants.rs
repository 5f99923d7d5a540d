// GRS 80 semi-major axis a
pub(crate) const GRS80_A: f64 = 6_378_137.;
// GRS 80 inverse flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const GRS80_INV_F: f64 = 298.257222101;

// Bessel 1841 semi-major axis a
#[allow(clippy::unreadable_literal)]
pub(crate) const BESSEL_A: f64 = 6_377_397.155;
// Bessel 1841 inverse flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const BESSEL_INV_F: f64 = 299.1528128;

// False easting shared by every RT 90 zone before the GRS 80 adjustment
pub(crate) const RT90_FE: f64 = 1_500_000.;
// False easting shared by the SWEREF 99 local zones
pub(crate) const SWEREF99_LOCAL_FE: f64 = 150_000.;
// SWEREF 99 TM central scale factor
pub(crate) const SWEREF99_TM_K0: f64 = 9996.0 / 10_000.;
