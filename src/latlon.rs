use std::fmt::Display;

use crate::{Error, ParseCoord, EllipsoidParams, grid::GridCoord, projections::gauss_kruger, utility::dms};

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;

/// A geodetic latitude/longitude point in degrees on whatever ellipsoid the
/// accompanying [`EllipsoidParams`] describe. Can be converted to/from
/// [`GridCoord`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Creates a point without checking the bounds of lat/lon. Out of range
    /// values are carried through the transforms as-is.
    pub fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoord`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use gausskruger::LatLon;
    ///
    /// let coord = LatLon::create(59.0, 15.0);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 59.0);
    /// assert_eq!(coord.longitude(), 15.0);
    ///
    /// let invalid_coord_lat = LatLon::create(100.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, -200.0);
    /// assert!(invalid_coord_lon.is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        let qd = f64::from(dms::QD);
        let hd = f64::from(dms::HD);

        if !(-qd..=qd).contains(&lat) {
            Err(Error::InvalidCoord(format!("Latitude {lat} outside of valid range [-90, 90].")))
        } else if !(-hd..=hd).contains(&lon) {
            Err(Error::InvalidCoord(format!("Longitude {lon} outside of valid range [-180, 180].")))
        } else {
            Ok(LatLon::new(lat, lon))
        }
    }

    /// Returns the latitude value.
    ///
    /// # Example
    /// ```
    /// use gausskruger::LatLon;
    ///
    /// let coord = LatLon::create(59.0, 15.0).unwrap();
    /// assert_eq!(coord.latitude(), 59.0);
    /// ```
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    ///
    /// # Example
    /// ```
    /// use gausskruger::LatLon;
    ///
    /// let coord = LatLon::create(59.0, 15.0).unwrap();
    /// assert_eq!(coord.longitude(), 15.0);
    /// ```
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the distance in meters between two [`LatLon`] points
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    pub fn haversine(&self, other: &LatLon) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Converts from [`GridCoord`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use gausskruger::{GridCoord, LatLon, Projection};
    ///
    /// let params = Projection::SwerefTm.params();
    /// let grid = GridCoord::create(6540052.0174, 500000.0).unwrap();
    ///
    /// let converted = LatLon::from_grid(&grid, &params);
    ///
    /// assert!((converted.latitude() - 59.0).abs() < 1e-8);
    /// assert!((converted.longitude() - 15.0).abs() < 1e-8);
    /// ```
    pub fn from_grid(value: &GridCoord, params: &EllipsoidParams) -> LatLon {
        gauss_kruger::inverse(value, params)
    }

    /// Converts from [`LatLon`] to [`GridCoord`]
    ///
    /// # Usage
    ///
    /// ```
    /// use gausskruger::{LatLon, Projection};
    ///
    /// let params = Projection::SwerefTm.params();
    /// let coord = LatLon::create(59.0, 15.0).unwrap();
    ///
    /// let converted = coord.to_grid(&params);
    ///
    /// assert!((converted.northing() - 6540052.0174).abs() < 1e-3);
    /// assert!((converted.easting() - 500000.0).abs() < 1e-3);
    /// ```
    pub fn to_grid(&self, params: &EllipsoidParams) -> GridCoord {
        gauss_kruger::forward(self, params)
    }
}

impl ParseCoord for LatLon {
    /// Parses `"<lat> <lon>"` (or comma separated) and applies the range
    /// checks of [`LatLon::create`].
    fn parse_coord(value: &str) -> Result<Self, Error> {
        let (lat, lon) = crate::parse_pair(value)?;
        LatLon::create(lat, lon)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
