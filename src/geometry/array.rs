use super::Point2D;
use crate::error::{Result, TdoaError};

/// Three-microphone array
///
/// Microphone A is the reference: every TDOA is taken as arrival at A minus
/// arrival at B or C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MicArray {
    /// Reference microphone
    pub a: Point2D,
    pub b: Point2D,
    pub c: Point2D,
}

/// Distances from one point to each microphone, in meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MicDistances {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl MicDistances {
    /// Path length difference A - B
    pub fn ab(&self) -> f64 {
        self.a - self.b
    }

    /// Path length difference A - C
    pub fn ac(&self) -> f64 {
        self.a - self.c
    }
}

impl MicArray {
    pub fn new(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Self { a, b, c }
    }

    /// Center of mass of the three microphones
    pub fn centroid(&self) -> Point2D {
        (self.a + self.b + self.c) / 3.0
    }

    /// Same array shifted by `offset`
    pub fn translated(&self, offset: Point2D) -> Self {
        Self::new(self.a + offset, self.b + offset, self.c + offset)
    }

    /// Array re-expressed in a frame whose origin is its centroid
    pub fn recentered(&self) -> Self {
        let centroid = self.centroid();
        Self::new(self.a - centroid, self.b - centroid, self.c - centroid)
    }

    pub fn distances_from(&self, point: Point2D) -> MicDistances {
        MicDistances {
            a: point.distance(self.a),
            b: point.distance(self.b),
            c: point.distance(self.c),
        }
    }

    /// Reject arrays where every microphone sits on the same point.
    ///
    /// Collinear arrays are accepted.
    pub fn validate(&self) -> Result<()> {
        if self.a == self.b && self.b == self.c {
            return Err(TdoaError::CoincidentMicrophones);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn board_array() -> MicArray {
        MicArray::new(
            Point2D::new(0.01, 0.04),
            Point2D::new(0.10, 0.01),
            Point2D::new(0.15, 0.06),
        )
    }

    #[test]
    fn test_centroid() {
        let centroid = board_array().centroid();
        assert_abs_diff_eq!(centroid.x, 0.26 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(centroid.y, 0.11 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_recentered_has_zero_centroid() {
        let centroid = board_array().recentered().centroid();
        assert_abs_diff_eq!(centroid.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(centroid.y, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_recentering_preserves_pairwise_distances() {
        let original = board_array();
        let recentered = original.recentered();

        assert_abs_diff_eq!(
            original.a.distance(original.b),
            recentered.a.distance(recentered.b),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            original.a.distance(original.c),
            recentered.a.distance(recentered.c),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            original.b.distance(original.c),
            recentered.b.distance(recentered.c),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_distance_differences() {
        let array = MicArray::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 0.0),
            Point2D::new(0.0, 2.0),
        );
        let d = array.distances_from(Point2D::new(0.0, 0.0));
        assert_abs_diff_eq!(d.ab(), -1.0);
        assert_abs_diff_eq!(d.ac(), -2.0);
    }

    #[test]
    fn test_validate() {
        assert!(board_array().validate().is_ok());

        let p = Point2D::new(0.3, 0.3);
        assert_eq!(
            MicArray::new(p, p, p).validate(),
            Err(TdoaError::CoincidentMicrophones)
        );

        // Collinear is degenerate but allowed
        let collinear = MicArray::new(
            Point2D::new(0.0, 0.0),
            Point2D::new(0.1, 0.0),
            Point2D::new(0.2, 0.0),
        );
        assert!(collinear.validate().is_ok());
    }
}
