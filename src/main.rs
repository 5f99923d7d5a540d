//! Gauss-Krüger command line tool
//!
//! Converts one latitude/longitude pair to grid northing/easting, or back
//! with `-r`. The grid defaults to RT 90 7.5 gon V on GRS 80; `-p` picks a
//! different named grid and the single letter options override individual
//! constants.
//!
//! Usage:
//!   gausskruger [options] <latitude> <longitude>
//!   gausskruger -r [options] <northing> <easting>
//!   gausskruger --batch [options] < points.txt

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, info};
use tracing_subscriber::filter::LevelFilter;

use gausskruger::{
    report, transform, Direction, EllipsoidParams, GridCoord, LatLon, ParseCoord, Projection,
};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Gauss-Krüger conversion between latitude/longitude and grid northing/easting",
    long_about = None
)]
struct Args {
    /// Named grid supplying the default constants (see --list)
    #[arg(short, long, default_value_t = Projection::DEFAULT)]
    projection: Projection,

    /// Inverse flattening of the ellipsoid, 0 for a sphere
    #[arg(short, long, allow_negative_numbers = true)]
    inverse_flattening: Option<f64>,

    /// Equatorial radius
    #[arg(short = 'a', long)]
    equatorial_radius: Option<f64>,

    /// Longitude of the central meridian
    #[arg(short = 'm', long, allow_negative_numbers = true)]
    central_meridian: Option<f64>,

    /// Scale factor along the central meridian
    #[arg(short, long)]
    scale: Option<f64>,

    /// False northing
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    false_northing: Option<f64>,

    /// False easting
    #[arg(short = 'e', long, allow_negative_numbers = true)]
    false_easting: Option<f64>,

    /// Reverse transformation, northing/easting to latitude/longitude
    #[arg(short, long)]
    reverse: bool,

    /// Print only the transformed pair
    #[arg(short, long)]
    quiet: bool,

    /// Log debugging information to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print the names of the known grids and exit
    #[arg(long)]
    list: bool,

    /// Read one pair per line from stdin
    #[arg(long, conflicts_with_all = ["first", "second"])]
    batch: bool,

    /// Latitude, or northing with -r
    #[arg(allow_negative_numbers = true)]
    first: Option<f64>,

    /// Longitude, or easting with -r
    #[arg(allow_negative_numbers = true)]
    second: Option<f64>,
}

impl Args {
    /// The named grid with any individual overrides applied on top.
    fn ellipsoid(&self) -> EllipsoidParams {
        let mut params = self.projection.params();

        if let Some(inverse_flattening) = self.inverse_flattening {
            params.inverse_flattening = inverse_flattening;
            params = params.sync_flattening();
        }
        if let Some(equatorial_radius) = self.equatorial_radius {
            params.equatorial_radius = equatorial_radius;
        }
        if let Some(central_meridian) = self.central_meridian {
            params.central_meridian = central_meridian;
        }
        if let Some(scale) = self.scale {
            params.scale = scale;
        }
        if let Some(false_northing) = self.false_northing {
            params.false_northing = false_northing;
        }
        if let Some(false_easting) = self.false_easting {
            params.false_easting = false_easting;
        }

        params
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Range checks a pair the same way the library constructors do.
fn check_point(direction: Direction, point: (f64, f64)) -> Result<(f64, f64)> {
    match direction {
        Direction::Forward => {
            LatLon::create(point.0, point.1)?;
        }
        Direction::Reverse => {
            GridCoord::create(point.0, point.1)?;
        }
    }

    Ok(point)
}

fn parse_point(direction: Direction, line: &str) -> Result<(f64, f64)> {
    let point = match direction {
        Direction::Forward => {
            let latlon = LatLon::parse_coord(line)?;
            (latlon.latitude(), latlon.longitude())
        }
        Direction::Reverse => {
            let grid = GridCoord::parse_coord(line)?;
            (grid.northing(), grid.easting())
        }
    };

    Ok(point)
}

fn print_result(args: &Args, params: &EllipsoidParams, direction: Direction, input: (f64, f64)) {
    let output = transform(direction, input, params);
    debug!("{direction:?} {input:?} -> {output:?}");

    if args.quiet {
        println!("{}", report::quiet_line(direction, output));
    } else {
        println!("{}", report::full_report(params, direction, input, output));
    }
}

fn run_batch(args: &Args, params: &EllipsoidParams, direction: Direction) -> Result<()> {
    let stdin = io::stdin();
    let mut count = 0_usize;

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let input = parse_point(direction, &line)
            .with_context(|| format!("Line {}: \"{}\"", index + 1, line.trim()))?;
        print_result(args, params, direction, input);
        count += 1;
    }

    info!("Converted {count} points");
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    if args.list {
        for proj in Projection::ALL {
            println!("{proj}");
        }
        return Ok(());
    }

    let params = args.ellipsoid();
    params
        .validate()
        .with_context(|| format!("Invalid parameters for {}", args.projection))?;
    debug!("Using {} with {params:?}", args.projection);

    let direction = Direction::from_reverse_flag(args.reverse);

    if args.batch {
        return run_batch(args, &params, direction);
    }

    match (args.first, args.second) {
        (Some(first), Some(second)) => {
            let input = check_point(direction, (first, second))?;
            print_result(args, &params, direction, input);
        }
        _ => {
            Args::command().print_help()?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    run(&args)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("gausskruger").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn default_projection_without_overrides() {
        assert_eq!(args(&[]).ellipsoid(), Projection::DEFAULT.params());
    }

    #[test]
    fn overrides_apply_on_top_of_the_preset() {
        let params = args(&["-p", "sweref_99_tm", "-i", "0", "-n", "5"]).ellipsoid();

        assert_eq!(params.inverse_flattening, 0.);
        assert_eq!(params.flattening, 0.);
        assert_eq!(params.false_northing, 5.);
        assert_eq!(params.central_meridian, 15.);
        assert_eq!(params.scale, 0.9996);
    }

    #[test]
    fn sphere_from_flags() {
        let args = args(&["-q", "-i", "0", "-a", "6371000", "-m", "0", "-s", "1", "-n", "0", "-e", "0", "30", "2"]);
        let params = args.ellipsoid();
        assert!(params.validate().is_ok());

        let (northing, easting) = transform(Direction::Forward, (30., 2.), &params);
        assert_abs_diff_eq!(northing, 3_337_529.107_5, epsilon = 1e-4);
        assert_abs_diff_eq!(easting, 192_614.817_3, epsilon = 1e-4);

        assert!(run(&args).is_ok());
    }

    #[test]
    fn negative_positionals_parse() {
        let args = args(&["-r", "-m", "-3", "6500000", "-12000"]);
        assert!(args.reverse);
        assert_eq!(args.central_meridian, Some(-3.));
        assert_eq!(args.second, Some(-12_000.));
    }

    #[test]
    fn batch_conflicts_with_positionals() {
        assert!(Args::try_parse_from(["gausskruger", "--batch", "59", "15"]).is_err());
        assert!(Args::try_parse_from(["gausskruger", "59", "north"]).is_err());
        assert!(Args::try_parse_from(["gausskruger", "-p", "utm_33"]).is_err());
    }

    #[test]
    fn check_point_uses_the_constructor_ranges() {
        assert!(check_point(Direction::Forward, (59., 15.)).is_ok());
        assert!(check_point(Direction::Forward, (91., 0.)).is_err());
        assert!(check_point(Direction::Reverse, (6_500_000., -12_000.)).is_ok());
        assert!(check_point(Direction::Reverse, (f64::NAN, 0.)).is_err());
    }

    #[test]
    fn parse_point_by_direction() {
        assert_eq!(parse_point(Direction::Forward, "59, 15").unwrap(), (59., 15.));
        assert_eq!(parse_point(Direction::Reverse, "6500000 1400000").unwrap(), (6_500_000., 1_400_000.));
        assert!(parse_point(Direction::Forward, "59").is_err());
        assert!(parse_point(Direction::Reverse, "a b").is_err());
        assert!(parse_point(Direction::Forward, "-91 0").is_err());
    }

    #[test]
    fn run_without_positionals_prints_help() {
        assert!(run(&args(&[])).is_ok());
        assert!(run(&args(&["--list"])).is_ok());
    }

    #[test]
    fn run_rejects_invalid_parameters() {
        let err = run(&args(&["-s", "0"])).unwrap_err();
        assert!(err.to_string().contains("rt90_7.5_gon_v"));

        assert!(run(&args(&["-a", "0", "59", "15"])).is_err());
        assert!(run(&args(&["-i", "0.5", "59", "15"])).is_err());
        assert!(run(&args(&["91", "15"])).is_err());
    }
}
