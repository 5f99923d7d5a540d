//! Text output of the command line tool.

use std::fmt::Display;

use crate::{Direction, EllipsoidParams, ThisOrThat};

/// Decimals printed for northing/easting
pub const LINEAR_DECIMALS: usize = 4;
/// Decimals printed for latitude/longitude
pub const ANGULAR_DECIMALS: usize = 10;
/// Decimals printed for the ellipsoid constants
const PARAM_DECIMALS: usize = 6;

fn input_labels(direction: Direction) -> [&'static str; 2] {
    match direction {
        Direction::Forward => ["Latitude", "Longitude"],
        Direction::Reverse => ["Northing", "Easting"],
    }
}

fn output_labels(direction: Direction) -> [&'static str; 2] {
    match direction {
        Direction::Forward => ["Northing", "Easting"],
        Direction::Reverse => ["Latitude", "Longitude"],
    }
}

fn input_decimals(direction: Direction) -> usize {
    (direction == Direction::Forward).ternary(ANGULAR_DECIMALS, LINEAR_DECIMALS)
}

fn output_decimals(direction: Direction) -> usize {
    (direction == Direction::Forward).ternary(LINEAR_DECIMALS, ANGULAR_DECIMALS)
}

/// The transformed pair on one line, separated by a space.
///
/// ```
/// use gausskruger::{report::quiet_line, Direction};
///
/// assert_eq!(quiet_line(Direction::Forward, (6547908.129371, 1712256.751794)), "6547908.1294 1712256.7518");
/// assert_eq!(quiet_line(Direction::Reverse, (59.0, 15.0)), "59.0000000000 15.0000000000");
/// ```
pub fn quiet_line(direction: Direction, output: (f64, f64)) -> String {
    let prec = output_decimals(direction);
    format!("{:.prec$} {:.prec$}", output.0, output.1)
}

/// Multi-line description of the parameters, the input point and the
/// transformed point.
pub struct Report<'a> {
    pub params: &'a EllipsoidParams,
    pub direction: Direction,
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self.params;
        let pp = PARAM_DECIMALS;

        writeln!(f, "Ellipsoid:")?;
        writeln!(f, "  Inverse flattening = {:.pp$}", params.inverse_flattening)?;
        writeln!(f, "  Equatorial radius = {:.pp$}", params.equatorial_radius)?;
        writeln!(f, "  Central meridian = {:.pp$}", params.central_meridian)?;
        writeln!(f, "  Scale factor = {:.pp$}", params.scale)?;
        writeln!(f, "  False northing = {:.pp$}", params.false_northing)?;
        writeln!(f, "  False easting = {:.pp$}", params.false_easting)?;

        writeln!(f, "Point:")?;
        let ip = input_decimals(self.direction);
        let [first, second] = input_labels(self.direction);
        writeln!(f, "  {first} = {:.ip$}", self.input.0)?;
        writeln!(f, "  {second} = {:.ip$}", self.input.1)?;

        let op = output_decimals(self.direction);
        let [first, second] = output_labels(self.direction);
        writeln!(f, "  {first} = {:.op$}", self.output.0)?;
        write!(f, "  {second} = {:.op$}", self.output.1)
    }
}

/// Renders a [`Report`] into a string.
pub fn full_report(
    params: &EllipsoidParams,
    direction: Direction,
    input: (f64, f64),
    output: (f64, f64),
) -> String {
    Report { params, direction, input, output }.to_string()
}
