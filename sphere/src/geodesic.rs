//! Great-circle navigation on a sphere:
//! <https://www.movable-type.co.uk/scripts/latlong.html>

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::{AngleInput, AngleUnits, ParseAngleError, FULL_TURN_DEG, HALF_TURN_DEG},
    coord::PointUnits,
    distance::DistanceUnits,
};

/// The mean radius of the Earth in meters
pub const EARTH_MEAN_RADIUS: f64 = 6_371_000.0;

/// The sphere of the given radius (in meters) to run the calculations on
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sphere {
    radius: f64,
}

impl Default for Sphere {
    fn default() -> Self {
        Self::EARTH
    }
}

impl Sphere {
    /// The Earth approximated by the sphere with the mean radius
    pub const EARTH: Self = Self::new(EARTH_MEAN_RADIUS);

    /// The sphere of any radius (in meters).
    /// The radius is not validated, so the negative or zero one give the meaningless results.
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// The radius in meters
    pub fn radius(self) -> f64 {
        self.radius
    }

    /// Great-circle distance between the points given in decimal degrees
    /// calculated with the haversine formula.
    pub fn distance(self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> DistanceReport {
        let phi1 = lat1.to_radians();
        let phi2 = lat2.to_radians();
        let delta_phi = (lat2 - lat1).to_radians();
        let delta_lambda = (lon2 - lon1).to_radians();

        let a = (delta_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
        // the rounding pushes it above 1 for some antipodes
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        DistanceReport {
            start: PointUnits::from_degrees(lat1, lon1),
            end: PointUnits::from_degrees(lat2, lon2),
            distance: DistanceUnits::from_meters(self.radius * c),
        }
    }

    /// Latitude and longitude (in decimal degrees) of the point reached
    /// by travelling the `distance` meters along the great circle
    /// starting with the `bearing` (in decimal degrees).
    ///
    /// The longitude is normalized to the range `[-180, 180]`.
    fn destination_degrees(self, lat: f64, lon: f64, bearing: f64, distance: f64) -> (f64, f64) {
        let phi1 = lat.to_radians();
        let lambda1 = lon.to_radians();
        let theta = bearing.to_radians();
        // angular distance
        let delta = distance / self.radius;

        let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
        let lambda2 = lambda1
            + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

        let lon2 = lambda2.to_degrees();
        let lon2 = if (-HALF_TURN_DEG..=HALF_TURN_DEG).contains(&lon2) {
            lon2
        } else {
            (lon2 + HALF_TURN_DEG).rem_euclid(FULL_TURN_DEG) - HALF_TURN_DEG
        };
        (phi2.to_degrees(), lon2)
    }

    /// Solve the direct geodesic problem for the start point and bearing given in decimal degrees
    pub fn destination(self, lat: f64, lon: f64, bearing: f64, distance: f64) -> PointUnits {
        let (lat2, lon2) = self.destination_degrees(lat, lon, bearing, distance);
        PointUnits::from_degrees(lat2, lon2)
    }

    /// Solve the direct geodesic problem with the bearing given in any notation.
    ///
    /// # Errors
    /// The textual bearing cannot be parsed.
    pub fn project<'a>(
        self,
        lat: f64,
        lon: f64,
        bearing: impl Into<AngleInput<'a>>,
        distance: f64,
    ) -> Result<PointUnits, ParseAngleError> {
        let bearing = bearing.into().to_degrees()?;
        Ok(self.destination(lat, lon, bearing, distance))
    }

    /// The points at the same `distance` from the center
    /// with the bearings evenly dividing the full turn into `steps` sectors.
    ///
    /// The points go clockwise starting from the north (bearing 0°).
    pub fn range_map(self, lat: f64, lon: f64, distance: f64, steps: u32) -> Vec<PointUnits> {
        (0..steps)
            .map(|i| f64::from(i) * FULL_TURN_DEG / f64::from(steps))
            .map(|bearing| self.destination(lat, lon, bearing, distance))
            .collect()
    }
}

/// The start and the end points along with the bearing between them
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BearingReport {
    start: PointUnits,
    end: PointUnits,
    bearing: AngleUnits,
}

impl BearingReport {
    /// The point to measure the bearing from
    pub fn start(&self) -> &PointUnits {
        &self.start
    }

    /// The point to measure the bearing to
    pub fn end(&self) -> &PointUnits {
        &self.end
    }

    /// Clockwise angle from the north in the range `[0, 360)`
    pub fn bearing(&self) -> &AngleUnits {
        &self.bearing
    }
}

/// The start and the end points along with the distance between them
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceReport {
    start: PointUnits,
    end: PointUnits,
    distance: DistanceUnits,
}

impl DistanceReport {
    /// The first point
    pub fn start(&self) -> &PointUnits {
        &self.start
    }

    /// The second point
    pub fn end(&self) -> &PointUnits {
        &self.end
    }

    /// The length of the shortest arc between the points
    pub fn distance(&self) -> &DistanceUnits {
        &self.distance
    }
}

/// Bearing in degrees `[0, 360)` for the points in radians
fn bearing_degrees(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_lambda = lon2 - lon1;
    let y = delta_lambda.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lambda.cos();
    let theta = y.atan2(x);

    // not the `rem_euclid`: it gives 360 for the tiny negative angles
    (theta.to_degrees() + FULL_TURN_DEG) % FULL_TURN_DEG
}

/// The direction to start the travel along the great circle
/// from the first point to the second one.
///
/// The latitudes and longitudes are in **radians**.
/// For the coincident points the bearing is 0.
pub fn initial_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> BearingReport {
    BearingReport {
        start: PointUnits::from_radians(lat1, lon1),
        end: PointUnits::from_radians(lat2, lon2),
        bearing: AngleUnits::new(bearing_degrees(lat1, lon1, lat2, lon2)),
    }
}

/// The direction on arrival at the second point
/// while travelling along the great circle from the first one.
///
/// The latitudes and longitudes are in **radians**.
/// For the coincident points the bearing is 180
/// (the reversed bearing 0 of the way back).
pub fn final_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> BearingReport {
    let reverse = bearing_degrees(lat2, lon2, lat1, lon1);
    BearingReport {
        start: PointUnits::from_radians(lat1, lon1),
        end: PointUnits::from_radians(lat2, lon2),
        bearing: AngleUnits::new((reverse + HALF_TURN_DEG) % FULL_TURN_DEG),
    }
}

/// Great-circle distance on the Earth between the points in decimal degrees
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> DistanceReport {
    Sphere::EARTH.distance(lat1, lon1, lat2, lon2)
}

/// The point on the Earth reached from the start point (in decimal degrees)
/// travelling the `distance` meters with the initial `bearing`.
///
/// The bearing is either decimal degrees or a string:
/// the DMS notation if it contains the degree sign, any [`parse_angle`](crate::parse_angle)
/// notation otherwise.
///
/// ```
/// use geod_sphere::project_destination;
///
/// let dest = project_destination(53.320_556, -1.729_722, "096°01′18″", 124_800.0).unwrap();
/// assert_eq!(dest.latitude().dms(), "053°11′18″N");
/// assert_eq!(dest.longitude().dms(), "000°08′00″E");
/// ```
///
/// # Errors
/// The textual bearing cannot be parsed.
pub fn project_destination<'a>(
    lat: f64,
    lon: f64,
    bearing: impl Into<AngleInput<'a>>,
    distance: f64,
) -> Result<PointUnits, ParseAngleError> {
    Sphere::EARTH.project(lat, lon, bearing, distance)
}

/// The ring of `steps` points on the Earth at the same `distance` (meters)
/// from the center (decimal degrees), ordered by the increasing bearing from 0°.
///
/// The bearing 360° is never included, so there are always exactly `steps` points.
pub fn generate_range_map(lat: f64, lon: f64, distance: f64, steps: u32) -> Vec<PointUnits> {
    Sphere::EARTH.range_map(lat, lon, distance, steps)
}

#[cfg(test)]
mod bearing_tests {
    use super::*;
    use crate::test_utils::assert_close;

    fn bearing_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        initial_bearing(
            lat1.to_radians(),
            lon1.to_radians(),
            lat2.to_radians(),
            lon2.to_radians(),
        )
        .bearing()
        .decimal()
    }

    #[test]
    fn cardinal_directions() {
        assert_close!(bearing_deg(0.0, 0.0, 1.0, 0.0), 0.0);
        assert_close!(bearing_deg(0.0, 0.0, 0.0, 1.0), 90.0);
        assert_close!(bearing_deg(0.0, 0.0, -1.0, 0.0), 180.0);
        assert_close!(bearing_deg(0.0, 0.0, 0.0, -1.0), 270.0);
    }

    #[test]
    fn baghdad_to_osaka() {
        let report = initial_bearing(
            35_f64.to_radians(),
            45_f64.to_radians(),
            35_f64.to_radians(),
            135_f64.to_radians(),
        );
        assert_close!(report.bearing().decimal(), 60.162_433_5, 1e-6);
        assert_eq!(report.bearing().dms(), "060°09′45″");
        assert_close!(report.bearing().radian(), 60.162_433_5_f64.to_radians(), 1e-6);
    }

    #[test]
    fn report_points_are_in_degrees() {
        let report = initial_bearing(
            35_f64.to_radians(),
            45_f64.to_radians(),
            (-35_f64).to_radians(),
            (-135_f64).to_radians(),
        );
        assert_close!(report.start().latitude().decimal(), 35.0);
        assert_close!(report.start().longitude().radian(), 45_f64.to_radians());
        assert_eq!(report.start().latitude().dms(), "035°00′00″N");
        assert_eq!(report.end().latitude().dms(), "035°00′00″S");
        assert_eq!(report.end().longitude().dms(), "135°00′00″W");
    }

    #[test]
    fn coincident_points() {
        let report = initial_bearing(0.5, 0.5, 0.5, 0.5);
        assert_eq!(report.bearing().decimal(), 0.0);
        assert_eq!(report.bearing().dms(), "000°00′00″");
    }

    #[test]
    fn always_in_range() {
        let mut lat1 = -89.5;
        while lat1 < 90.0 {
            let mut lon2 = -180.0;
            while lon2 <= 180.0 {
                let bearing = bearing_deg(lat1, 10.0, -lat1 / 3.0, lon2);
                assert!((0.0..360.0).contains(&bearing), "{bearing}");
                lon2 += 7.3;
            }
            lat1 += 11.9;
        }
    }

    #[test]
    fn tiny_negative_angle_wraps_to_zero() {
        // west of the meridian by a hair: (-tiny + 360) rounds to 360
        let report = initial_bearing(0.0, 0.0, 1.0, -1e-18);
        assert!((0.0..360.0).contains(&report.bearing().decimal()));
    }

    #[test]
    fn final_bearing_baghdad_to_osaka() {
        let report = final_bearing(
            35_f64.to_radians(),
            45_f64.to_radians(),
            35_f64.to_radians(),
            135_f64.to_radians(),
        );
        assert_close!(report.bearing().decimal(), 119.837_566_5, 1e-6);
        assert_close!(report.end().longitude().decimal(), 135.0);
    }

    #[test]
    fn final_bearing_of_coincident_points() {
        let report = final_bearing(0.5, 0.5, 0.5, 0.5);
        assert_eq!(report.bearing().decimal(), 180.0);
        assert_eq!(report.bearing().dms(), "180°00′00″");
        assert_eq!(initial_bearing(0.5, 0.5, 0.5, 0.5).bearing().decimal(), 0.0);
    }

    #[test]
    fn final_bearing_along_meridian() {
        let report = final_bearing(0.0, 0.0, 0.5, 0.0);
        assert_close!(report.bearing().decimal(), 0.0);
    }
}



#[cfg(test)]
mod range_map_tests {
    use super::*;
    use crate::test_utils::assert_close;

    fn bearing_from(lat: f64, lon: f64, point: &PointUnits) -> f64 {
        initial_bearing(
            lat.to_radians(),
            lon.to_radians(),
            point.latitude().radian(),
            point.longitude().radian(),
        )
        .bearing()
        .decimal()
    }

    #[test]
    fn four_cardinal_points() {
        let ring = generate_range_map(0.0, 0.0, 100_000.0, 4);
        assert_eq!(ring.len(), 4);

        for (point, expected) in ring.iter().zip([0.0, 90.0, 180.0, 270.0]) {
            let report = haversine_distance(
                0.0,
                0.0,
                point.latitude().decimal(),
                point.longitude().decimal(),
            );
            assert_close!(report.distance().meters(), 100_000.0, 1e-3);
            assert_close!(bearing_from(0.0, 0.0, point), expected, 1e-6);
        }

        assert_close!(ring[0].latitude().decimal(), 0.899_321_6, 1e-6);
        assert_close!(ring[1].longitude().decimal(), 0.899_321_6, 1e-6);
        assert_close!(ring[2].latitude().decimal(), -0.899_321_6, 1e-6);
        assert_close!(ring[3].longitude().decimal(), -0.899_321_6, 1e-6);
    }

    #[test]
    fn uneven_steps_give_exactly_steps_points() {
        let ring = generate_range_map(51.5, -0.12, 5000.0, 7);
        assert_eq!(ring.len(), 7);

        let last = bearing_from(51.5, -0.12, &ring[6]);
        assert_close!(last, 6.0 * 360.0 / 7.0, 1e-3);
        assert!(last < 360.0);
    }

    #[test]
    fn bearings_increase() {
        let ring = generate_range_map(-20.0, 45.0, 25_000.0, 36);
        assert_eq!(ring.len(), 36);

        let bearings: Vec<_> = ring.iter().map(|p| bearing_from(-20.0, 45.0, p)).collect();
        for pair in bearings.windows(2) {
            assert!(pair[0] < pair[1], "{:?}", pair);
        }
    }

    #[test]
    fn single_step_is_north() {
        let ring = generate_range_map(0.0, 0.0, 100_000.0, 1);
        assert_eq!(ring.len(), 1);
        assert_close!(ring[0].longitude().decimal(), 0.0);
        assert!(ring[0].latitude().decimal() > 0.0);
    }

    #[test]
    fn no_steps_no_points() {
        assert!(generate_range_map(0.0, 0.0, 100_000.0, 0).is_empty());
    }

    #[test]
    fn zero_distance_collapses() {
        let ring = Sphere::EARTH.range_map(12.0, 34.0, 0.0, 3);
        assert_eq!(ring.len(), 3);
        for point in ring {
            assert_close!(point.latitude().decimal(), 12.0);
            assert_close!(point.longitude().decimal(), 34.0);
        }
    }
}
