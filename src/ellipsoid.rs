use crate::{Error, utility::GeoMath};

/// Ellipsoid and projection constants for a Gauss-Krüger grid.
///
/// This is plain data: the transforms read it and never change it. `flattening`
/// is what the transforms consume; `inverse_flattening` is kept alongside it
/// for display. [`EllipsoidParams::new`] derives one from the other, setting
/// the fields directly leaves keeping them in step up to the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipsoidParams {
    pub inverse_flattening: f64,
    pub flattening: f64,
    #[cfg_attr(feature = "serde", serde(alias = "a"))]
    pub equatorial_radius: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon0"))]
    pub central_meridian: f64,
    #[cfg_attr(feature = "serde", serde(alias = "k0"))]
    pub scale: f64,
    pub false_northing: f64,
    pub false_easting: f64,
}

impl EllipsoidParams {
    /// Creates parameters for an ellipsoid with no projection offsets: the
    /// central meridian is Greenwich, the scale is `1` and the false origin is
    /// `(0, 0)`.
    ///
    /// A non-positive `inverse_flattening` designates a sphere.
    ///
    /// # Usage
    ///
    /// ```
    /// use gausskruger::EllipsoidParams;
    ///
    /// let grs80 = EllipsoidParams::new(298.257222101, 6378137.0);
    /// assert!((grs80.flattening - 1.0 / 298.257222101).abs() < 1e-18);
    ///
    /// let sphere = EllipsoidParams::new(0.0, 6371000.0);
    /// assert_eq!(sphere.flattening, 0.0);
    /// ```
    pub fn new(inverse_flattening: f64, equatorial_radius: f64) -> EllipsoidParams {
        Self {
            inverse_flattening,
            flattening: flattening_from_inverse(inverse_flattening),
            equatorial_radius,
            central_meridian: 0.,
            scale: 1.,
            false_northing: 0.,
            false_easting: 0.,
        }
    }

    /// A sphere of the given radius.
    pub fn sphere(radius: f64) -> EllipsoidParams {
        Self::new(0., radius)
    }

    /// Sets the flattening directly. The inverse flattening follows it, with
    /// `0` standing in for a sphere.
    pub fn with_flattening(mut self, flattening: f64) -> EllipsoidParams {
        self.flattening = flattening;
        self.inverse_flattening = if flattening > 0. { 1. / flattening } else { 0. };
        self
    }

    pub fn with_central_meridian(mut self, central_meridian: f64) -> EllipsoidParams {
        self.central_meridian = central_meridian;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> EllipsoidParams {
        self.scale = scale;
        self
    }

    pub fn with_false_northing(mut self, false_northing: f64) -> EllipsoidParams {
        self.false_northing = false_northing;
        self
    }

    pub fn with_false_easting(mut self, false_easting: f64) -> EllipsoidParams {
        self.false_easting = false_easting;
        self
    }

    pub fn with_false_origin(self, false_northing: f64, false_easting: f64) -> EllipsoidParams {
        self
            .with_false_northing(false_northing)
            .with_false_easting(false_easting)
    }

    /// Re-derives `flattening` from `inverse_flattening`. Used after the
    /// inverse flattening has been overridden field by field.
    pub fn sync_flattening(mut self) -> EllipsoidParams {
        self.flattening = flattening_from_inverse(self.inverse_flattening);
        self
    }

    /// Whether the ellipsoid degenerates to a sphere.
    pub fn is_sphere(&self) -> bool {
        self.flattening.is_zero()
    }

    /// Checks that the parameters are inside the domain of the projection
    /// formulas. The transforms themselves never call this.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] naming the first offending field.
    ///
    /// # Usage
    ///
    /// ```
    /// use gausskruger::EllipsoidParams;
    ///
    /// assert!(EllipsoidParams::new(298.257222101, 6378137.0).validate().is_ok());
    /// assert!(EllipsoidParams::new(298.257222101, -1.0).validate().is_err());
    /// assert!(EllipsoidParams::sphere(1.0).with_scale(0.0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.equatorial_radius.is_finite() && self.equatorial_radius > 0.) {
            return Err(Error::InvalidParams(
                format!("Equatorial radius {} must be a positive number", self.equatorial_radius)
            ));
        }

        if !(0_f64..1_f64).contains(&self.flattening) {
            return Err(Error::InvalidParams(
                format!("Flattening {} outside of valid range [0, 1)", self.flattening)
            ));
        }

        if !(self.scale.is_finite() && self.scale > 0.) {
            return Err(Error::InvalidParams(
                format!("Scale factor {} must be a positive number", self.scale)
            ));
        }

        let offsets = [
            ("Central meridian", self.central_meridian),
            ("False northing", self.false_northing),
            ("False easting", self.false_easting),
        ];

        match offsets.iter().find(|(_, val)| !val.is_finite()) {
            Some((name, val)) => Err(Error::InvalidParams(format!("{name} {val} is not finite"))),
            None => Ok(()),
        }
    }

    /// First eccentricity squared, `e² = f(2 - f)`.
    #[inline]
    pub fn eccentricity_squared(&self) -> f64 {
        self.flattening * (2. - self.flattening)
    }

    /// Third flattening, `n = f / (2 - f)`.
    #[inline]
    pub fn third_flattening(&self) -> f64 {
        self.flattening / (2. - self.flattening)
    }

    /// Radius of the sphere with the same meridian arc length as the
    /// ellipsoid, truncated after the `n⁴` term.
    ///
    /// ```
    /// use gausskruger::EllipsoidParams;
    ///
    /// assert_eq!(EllipsoidParams::sphere(6371000.0).rectifying_radius(), 6371000.0);
    /// ```
    pub fn rectifying_radius(&self) -> f64 {
        let n = self.third_flattening();
        let n2 = n * n;
        self.equatorial_radius / (1. + n) * (1. + n2 / 4. + n2 * n2 / 64.)
    }
}

fn flattening_from_inverse(inverse_flattening: f64) -> f64 {
    if inverse_flattening > 0. { 1. / inverse_flattening } else { 0. }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRS80: EllipsoidParams = EllipsoidParams {
        inverse_flattening: 298.257_222_101,
        flattening: 1. / 298.257_222_101,
        equatorial_radius: 6_378_137.,
        central_meridian: 0.,
        scale: 1.,
        false_northing: 0.,
        false_easting: 0.,
    };

    #[test]
    fn new_derives_flattening() {
        let params = EllipsoidParams::new(298.257_222_101, 6_378_137.);
        assert_eq!(params, GRS80);

        assert_eq!(EllipsoidParams::new(-5., 1.).flattening, 0.);
        assert!(EllipsoidParams::sphere(1.).is_sphere());
        assert!(!params.is_sphere());
    }

    #[test]
    fn with_flattening_keeps_inverse_in_step() {
        let params = EllipsoidParams::sphere(1.).with_flattening(0.25);
        assert_eq!(params.inverse_flattening, 4.);

        let params = params.with_flattening(0.);
        assert_eq!(params.inverse_flattening, 0.);
        assert!(params.is_sphere());
    }

    #[test]
    fn sync_flattening_after_field_override() {
        let mut params = GRS80;
        params.inverse_flattening = 299.152_812_8;
        let params = params.sync_flattening();
        assert_eq!(params.flattening, 1. / 299.152_812_8);
    }

    #[test]
    fn derived_constants() {
        // GRS 80 reference values
        assert!((GRS80.eccentricity_squared() - 0.006_694_380_022_90).abs() < 1e-14);
        assert!((GRS80.third_flattening() - 0.001_679_220_394_63).abs() < 1e-14);
        assert!((GRS80.rectifying_radius() - 6_367_449.145_771).abs() < 1e-3);
    }

    #[test]
    fn builder_sets_projection_fields() {
        let params = GRS80
            .with_central_meridian(15.)
            .with_scale(0.9996)
            .with_false_origin(-10., 500_000.);

        assert_eq!(params.central_meridian, 15.);
        assert_eq!(params.scale, 0.9996);
        assert_eq!(params.false_northing, -10.);
        assert_eq!(params.false_easting, 500_000.);
    }

    #[test]
    fn validate_rejects_out_of_domain_values() {
        assert!(GRS80.validate().is_ok());
        assert!(EllipsoidParams::sphere(6_371_000.).validate().is_ok());

        assert!(GRS80.with_flattening(1.).validate().is_err());
        assert!(GRS80.with_flattening(-0.1).validate().is_err());
        assert!(EllipsoidParams::sphere(0.).validate().is_err());
        assert!(EllipsoidParams::sphere(f64::INFINITY).validate().is_err());
        assert!(GRS80.with_scale(-1.).validate().is_err());
        assert!(GRS80.with_scale(f64::NAN).validate().is_err());
        assert!(GRS80.with_central_meridian(f64::NAN).validate().is_err());
        assert!(GRS80.with_false_easting(f64::INFINITY).validate().is_err());

        let err = GRS80.with_false_northing(f64::NEG_INFINITY).validate().unwrap_err();
        assert!(err.to_string().contains("False northing"));
    }
}
