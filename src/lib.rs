#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Conversion between geodetic latitude/longitude and Gauss-Krüger
//! (transverse Mercator) grid coordinates on an arbitrary ellipsoid.
//!
//! ```
//! use gausskruger::{LatLon, Projection};
//!
//! let params = Projection::Rt90_7_5GonV.params();
//! let grid = LatLon::create(59.0, 15.0).unwrap().to_grid(&params);
//!
//! assert!((grid.northing() - 6_547_908.1294).abs() < 1e-3);
//! assert!((grid.easting() - 1_712_256.7518).abs() < 1e-3);
//! ```

use thiserror::Error;

pub mod ellipsoid;
pub mod grid;
pub mod latlon;
pub mod presets;
pub mod report;
pub mod utility;

pub use ellipsoid::EllipsoidParams;
pub use grid::GridCoord;
pub use latlon::LatLon;
pub use presets::Projection;
pub use projections::gauss_kruger::{forward, inverse, transform, Direction};

pub mod projections {
    pub mod gauss_kruger;
}

pub(crate) mod constants;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate parameters are not valid: {0}")]
    InvalidCoord(String),
    #[error("Ellipsoid parameters are not valid: {0}")]
    InvalidParams(String),
    #[error("Unknown projection: {0}")]
    UnknownProjection(String),
}

pub trait ParseCoord {
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any coordinate type implementing [`ParseCoord`].
///
/// ```
/// use gausskruger::{GridCoord, LatLon};
///
/// let point: LatLon = gausskruger::from_str("59.0 15.0").unwrap();
/// assert_eq!(point.latitude(), 59.0);
///
/// let grid: GridCoord = gausskruger::from_str("6547908.129, 1712256.752").unwrap();
/// assert_eq!(grid.easting(), 1712256.752);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidCoord`] if the text is not a pair of numbers or
/// the values fail the coordinate's range checks.
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

/// Splits `"a b"` or `"a,b"` into two finite numbers.
pub(crate) fn parse_pair(value: &str) -> Result<(f64, f64), Error> {
    let pieces = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>();

    let [first, second] = pieces.as_slice() else {
        return Err(Error::InvalidCoord(format!("Expected two numbers, got \"{}\"", value.trim())));
    };

    let parse = |piece: &str| {
        piece
            .parse::<f64>()
            .ok()
            .filter(|val| val.is_finite())
            .ok_or_else(|| Error::InvalidCoord(format!("\"{piece}\" is not a finite number")))
    };

    Ok((parse(*first)?, parse(*second)?))
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
