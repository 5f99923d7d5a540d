use std::fmt::Display;

use crate::{Error, ParseCoord, EllipsoidParams, latlon::LatLon, projections::gauss_kruger};

/// A Gauss-Krüger grid point. Northing and easting are in the same linear
/// unit as the equatorial radius of the [`EllipsoidParams`] that produced
/// them, normally meters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    #[cfg_attr(feature = "serde", serde(alias = "north", alias = "x"))]
    pub(crate) northing: f64,
    #[cfg_attr(feature = "serde", serde(alias = "east", alias = "y"))]
    pub(crate) easting: f64,
}

impl GridCoord {
    /// Creates a grid point without any checks.
    pub fn new(northing: f64, easting: f64) -> GridCoord {
        Self {
            northing,
            easting,
        }
    }

    /// Creates a grid point, rejecting values that are not finite. Any
    /// finite pair is a valid grid position for some projection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either value is NaN or infinite.
    ///
    /// # Usage
    ///
    /// ```
    /// use gausskruger::GridCoord;
    ///
    /// let coord = GridCoord::create(6547908.129, 1712256.752).unwrap();
    /// assert_eq!(coord.northing(), 6547908.129);
    ///
    /// assert!(GridCoord::create(f64::NAN, 0.0).is_err());
    /// ```
    pub fn create(northing: f64, easting: f64) -> Result<GridCoord, Error> {
        if !northing.is_finite() {
            Err(Error::InvalidCoord(format!("Northing {northing} is not finite")))
        } else if !easting.is_finite() {
            Err(Error::InvalidCoord(format!("Easting {easting} is not finite")))
        } else {
            Ok(GridCoord::new(northing, easting))
        }
    }

    /// Returns the northing value.
    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Returns the easting value.
    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Converts from [`LatLon`] to [`GridCoord`]
    pub fn from_latlon(value: &LatLon, params: &EllipsoidParams) -> GridCoord {
        gauss_kruger::forward(value, params)
    }

    /// Converts from [`GridCoord`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use gausskruger::{GridCoord, Projection};
    ///
    /// let params = Projection::Rt90_7_5GonV.params();
    /// let coord = GridCoord::create(6547908.1294, 1712256.7518).unwrap();
    ///
    /// let converted = coord.to_latlon(&params);
    ///
    /// assert!((converted.latitude() - 59.0).abs() < 1e-8);
    /// assert!((converted.longitude() - 15.0).abs() < 1e-8);
    /// ```
    pub fn to_latlon(&self, params: &EllipsoidParams) -> LatLon {
        gauss_kruger::inverse(self, params)
    }
}

impl ParseCoord for GridCoord {
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let (northing, easting) = crate::parse_pair(value)?;
        GridCoord::create(northing, easting)
    }
}

impl Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        write!(
            f,
            "{northing} {easting}",
        )
    }
}
