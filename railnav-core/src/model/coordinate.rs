use geo::{Distance, Haversine, Point};
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance in kilometers
    pub fn distance_km(self, other: Coordinate) -> f64 {
        Haversine.distance(self.to_point(), other.to_point()) / 1000.0
    }

    /// Arithmetic mean of both latitudes and both longitudes.
    ///
    /// A planar approximation, not the geodesic midpoint.
    pub fn planar_midpoint(self, other: Coordinate) -> Coordinate {
        Coordinate {
            lat: (self.lat + other.lat) / 2.0,
            lon: (self.lon + other.lon) / 2.0,
        }
    }

    /// Point with x = longitude, y = latitude
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }

    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coordinate: Coordinate) -> Self {
        coordinate.to_point()
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Coordinate::new(point.y(), point.x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = Coordinate::new(10.0, 20.0);
        let b = Coordinate::new(11.0, 20.0);
        let d = a.distance_km(b);
        assert!((d - 111.2).abs() < 0.5, "got {d}");
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let penn = Coordinate::new(40.7589, -73.9851);
        let jamaica = Coordinate::new(40.7282, -73.7948);
        assert_eq!(penn.distance_km(penn), 0.0);
        assert!((penn.distance_km(jamaica) - jamaica.distance_km(penn)).abs() < 1e-9);
    }

    #[test]
    fn midpoint_is_planar_average() {
        let a = Coordinate::new(50.0, 0.0);
        let b = Coordinate::new(52.0, 3.0);
        assert_eq!(a.planar_midpoint(b), Coordinate::new(51.0, 1.5));
    }

    #[test]
    fn point_axes() {
        let point = Coordinate::new(40.0, -73.0).to_point();
        assert_eq!(point.x(), -73.0);
        assert_eq!(point.y(), 40.0);
        assert_eq!(Coordinate::from(point), Coordinate::new(40.0, -73.0));
    }
}
