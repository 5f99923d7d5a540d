//! Named Swedish grid definitions.
//!
//! The RT 90 zones are given in their GRS 80 form, which maps SWEREF 99
//! coordinates straight onto the RT 90 grid. `bessel_rt90` is the original
//! definition on the Bessel 1841 ellipsoid.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use lazy_static::lazy_static;

use crate::{
    Error,
    EllipsoidParams,
    utility::dms_to_degrees,
    constants::{GRS80_A, GRS80_INV_F, BESSEL_A, BESSEL_INV_F, RT90_FE, SWEREF99_LOCAL_FE, SWEREF99_TM_K0},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Projection {
    Rt90_7_5GonV,
    Rt90_5_0GonV,
    Rt90_2_5GonV,
    Rt90_0_0GonV,
    Rt90_2_5GonO,
    Rt90_5_0GonO,
    BesselRt90,
    SwerefTm,
    Sweref1200,
    Sweref1330,
    Sweref1500,
    Sweref1630,
    Sweref1800,
    Sweref1415,
    Sweref1545,
    Sweref1715,
    Sweref1845,
    Sweref2015,
    Sweref2145,
    Sweref2315,
}

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, Projection> = Projection::ALL
        .iter()
        .map(|proj| (proj.name(), *proj))
        .collect();
}

impl Projection {
    pub const ALL: [Projection; 20] = [
        Projection::Rt90_7_5GonV,
        Projection::Rt90_5_0GonV,
        Projection::Rt90_2_5GonV,
        Projection::Rt90_0_0GonV,
        Projection::Rt90_2_5GonO,
        Projection::Rt90_5_0GonO,
        Projection::BesselRt90,
        Projection::SwerefTm,
        Projection::Sweref1200,
        Projection::Sweref1330,
        Projection::Sweref1500,
        Projection::Sweref1630,
        Projection::Sweref1800,
        Projection::Sweref1415,
        Projection::Sweref1545,
        Projection::Sweref1715,
        Projection::Sweref1845,
        Projection::Sweref2015,
        Projection::Sweref2145,
        Projection::Sweref2315,
    ];

    /// The grid the command line tool uses unless told otherwise.
    pub const DEFAULT: Projection = Projection::Rt90_7_5GonV;

    pub fn name(&self) -> &'static str {
        match self {
            Projection::Rt90_7_5GonV => "rt90_7.5_gon_v",
            Projection::Rt90_5_0GonV => "rt90_5.0_gon_v",
            Projection::Rt90_2_5GonV => "rt90_2.5_gon_v",
            Projection::Rt90_0_0GonV => "rt90_0.0_gon_v",
            Projection::Rt90_2_5GonO => "rt90_2.5_gon_o",
            Projection::Rt90_5_0GonO => "rt90_5.0_gon_o",
            Projection::BesselRt90 => "bessel_rt90",
            Projection::SwerefTm => "sweref_99_tm",
            Projection::Sweref1200 => "sweref_99_1200",
            Projection::Sweref1330 => "sweref_99_1330",
            Projection::Sweref1500 => "sweref_99_1500",
            Projection::Sweref1630 => "sweref_99_1630",
            Projection::Sweref1800 => "sweref_99_1800",
            Projection::Sweref1415 => "sweref_99_1415",
            Projection::Sweref1545 => "sweref_99_1545",
            Projection::Sweref1715 => "sweref_99_1715",
            Projection::Sweref1845 => "sweref_99_1845",
            Projection::Sweref2015 => "sweref_99_2015",
            Projection::Sweref2145 => "sweref_99_2145",
            Projection::Sweref2315 => "sweref_99_2315",
        }
    }

    /// Builds the ellipsoid and projection constants for this grid.
    ///
    /// # Usage
    ///
    /// ```
    /// use gausskruger::Projection;
    ///
    /// let params = Projection::Rt90_7_5GonV.params();
    ///
    /// assert_eq!(params.equatorial_radius, 6378137.0);
    /// assert_eq!(params.central_meridian, 11.30625);
    /// assert_eq!(params.scale, 1.000006);
    /// assert_eq!(params.false_northing, -667.282);
    /// assert_eq!(params.false_easting, 1500025.141);
    /// ```
    #[allow(clippy::unreadable_literal)]
    pub fn params(&self) -> EllipsoidParams {
        match self {
            Projection::Rt90_7_5GonV => rt90(dms_to_degrees(11., 18.375, 0.), 1.000006, -667.282, 1500025.141),
            Projection::Rt90_5_0GonV => rt90(dms_to_degrees(13., 33.376, 0.), 1.0000058, -667.130, 1500044.695),
            Projection::Rt90_2_5GonV => rt90(dms_to_degrees(15., 48., 22.624306), 1.00000561024, -667.711, 1500064.274),
            Projection::Rt90_0_0GonV => rt90(dms_to_degrees(18., 3.378, 0.), 1.0000054, -668.844, 1500083.521),
            Projection::Rt90_2_5GonO => rt90(dms_to_degrees(20., 18.379, 0.), 1.0000052, -670.706, 1500102.765),
            Projection::Rt90_5_0GonO => rt90(dms_to_degrees(22., 33.380, 0.), 1.0000049, -672.557, 1500121.846),
            Projection::BesselRt90 => EllipsoidParams::new(BESSEL_INV_F, BESSEL_A)
                .with_central_meridian(dms_to_degrees(15., 48., 29.8))
                .with_false_easting(RT90_FE),
            Projection::SwerefTm => grs80()
                .with_central_meridian(15.)
                .with_scale(SWEREF99_TM_K0)
                .with_false_easting(500_000.),
            Projection::Sweref1200 => sweref_local(12.),
            Projection::Sweref1330 => sweref_local(13.5),
            Projection::Sweref1500 => sweref_local(15.),
            Projection::Sweref1630 => sweref_local(16.5),
            Projection::Sweref1800 => sweref_local(18.),
            Projection::Sweref1415 => sweref_local(14.25),
            Projection::Sweref1545 => sweref_local(15.75),
            Projection::Sweref1715 => sweref_local(17.25),
            Projection::Sweref1845 => sweref_local(18.75),
            Projection::Sweref2015 => sweref_local(20.25),
            Projection::Sweref2145 => sweref_local(21.75),
            Projection::Sweref2315 => sweref_local(23.25),
        }
    }
}

fn grs80() -> EllipsoidParams {
    EllipsoidParams::new(GRS80_INV_F, GRS80_A)
}

fn rt90(central_meridian: f64, scale: f64, false_northing: f64, false_easting: f64) -> EllipsoidParams {
    grs80()
        .with_central_meridian(central_meridian)
        .with_scale(scale)
        .with_false_origin(false_northing, false_easting)
}

fn sweref_local(central_meridian: f64) -> EllipsoidParams {
    grs80()
        .with_central_meridian(central_meridian)
        .with_false_easting(SWEREF99_LOCAL_FE)
}

impl Default for Projection {
    fn default() -> Self {
        Projection::DEFAULT
    }
}

impl FromStr for Projection {
    type Err = Error;

    /// Looks up a grid by its name, ignoring case.
    ///
    /// ```
    /// use gausskruger::Projection;
    ///
    /// assert_eq!("SWEREF_99_TM".parse::<Projection>().unwrap(), Projection::SwerefTm);
    /// assert!("utm_33n".parse::<Projection>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BY_NAME
            .get(value.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| Error::UnknownProjection(value.to_string()))
    }
}

impl Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
