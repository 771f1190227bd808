//! Geodesy on a spherical Earth: angle notations, great-circle distance,
//! bearings, destination points and range maps.
//!
//! Angles come in three notations: decimal degrees, radians and
//! degree-minute-second strings (`040°26′46″N`). Every result is reported
//! as a bundle exposing the same quantity in all of them.
//!
//! ```
//! use geod_sphere::{haversine_distance, parse_angle};
//!
//! let lat = parse_angle("40°26'46\"N").unwrap();
//! let lon = parse_angle("79°58'56\"W").unwrap();
//! let report = haversine_distance(lat, lon, lat, lon);
//! assert_eq!(report.distance().meters(), 0.0);
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(invalid_html_tags)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_crate_level_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{
    degrees_to_all_units, degrees_to_dms_string, degrees_to_radians, dms_string_to_degrees,
    latitude_to_all_units, latitude_to_dms_string, longitude_to_all_units,
    longitude_to_dms_string, parse_angle, radians_to_degrees, AngleInput, AngleUnits, Dms,
    ParseAngleError,
};
pub use coord::{ParseDirectionError, ParsePoleError, PointUnits, Pole, RotationalDirection};
pub use distance::{meters_to_all_units, meters_to_miles, meters_to_nautical_miles, DistanceUnits};
pub use geodesic::{
    final_bearing, generate_range_map, haversine_distance, initial_bearing, project_destination,
    BearingReport, DistanceReport, Sphere, EARTH_MEAN_RADIUS,
};

mod angle;
mod coord;
mod distance;
mod geodesic;
mod utils;

#[cfg(test)]
mod test_utils;
