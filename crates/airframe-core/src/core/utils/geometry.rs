use super::math::pow2;
use nalgebra::Point3;
use std::f64::consts::PI;

/// A point mass on or near the component axis.
///
/// The position is measured from the fore end of the component, with the x axis pointing
/// aft along the component axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassPoint {
    /// Location of the mass in meters.
    pub position: Point3<f64>,
    /// Mass in kilograms.
    pub mass: f64,
}

impl MassPoint {
    /// Creates a mass point on the component axis at axial offset `x`.
    pub fn on_axis(x: f64, mass: f64) -> Self {
        Self {
            position: Point3::new(x, 0.0, 0.0),
            mass,
        }
    }

    pub fn axial_offset(&self) -> f64 {
        self.position.x
    }
}

/// One axial station of a rotationally symmetric bounding outline.
///
/// A body of revolution fits inside the convex hull of the square cross sections
/// described by its stations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxialBound {
    /// Axial offset of the station in meters.
    pub x: f64,
    /// Largest radius of the body at this station in meters.
    pub radius: f64,
}

impl AxialBound {
    pub fn new(x: f64, radius: f64) -> Self {
        Self { x, radius }
    }

    /// Expands the station into the four corners of the square enclosing its cross section.
    pub fn corners(&self) -> [Point3<f64>; 4] {
        let (x, r) = (self.x, self.radius);
        [
            Point3::new(x, -r, -r),
            Point3::new(x, r, -r),
            Point3::new(x, r, r),
            Point3::new(x, -r, r),
        ]
    }
}

/// Volume of a solid cylinder.
#[inline]
pub fn filled_cylinder_volume(radius: f64, length: f64) -> f64 {
    PI * radius * radius * length
}

/// Volume of an annular tube, computed as the difference of two solid cylinders.
///
/// The result is exactly zero when `length` is zero or both radii are equal.
#[inline]
pub fn tube_volume(outer_radius: f64, inner_radius: f64, length: f64) -> f64 {
    filled_cylinder_volume(outer_radius, length) - filled_cylinder_volume(inner_radius, length)
}

/// Moment of inertia per unit mass of a thick-walled cylinder about a transverse axis
/// through its centroid: `(3 (r_i² + r_o²) + l²) / 12`.
#[inline]
pub fn tube_longitudinal_unit_inertia(inner_radius: f64, outer_radius: f64, length: f64) -> f64 {
    (3.0 * (pow2(inner_radius) + pow2(outer_radius)) + pow2(length)) / 12.0
}

/// Moment of inertia per unit mass of a thick-walled cylinder about its own axis:
/// `(r_i² + r_o²) / 2`.
#[inline]
pub fn tube_rotational_unit_inertia(inner_radius: f64, outer_radius: f64) -> f64 {
    (pow2(inner_radius) + pow2(outer_radius)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn filled_cylinder_volume_matches_closed_form() {
        let volume = filled_cylinder_volume(0.5, 2.0);
        assert!(f64_approx_equal(volume, PI * 0.5));
    }

    #[test]
    fn tube_volume_is_exactly_zero_for_zero_length() {
        assert_eq!(tube_volume(0.03, 0.01, 0.0), 0.0);
    }

    #[test]
    fn tube_volume_is_exactly_zero_for_zero_wall() {
        assert_eq!(tube_volume(0.0237, 0.0237, 1.7), 0.0);
    }

    #[test]
    fn tube_volume_with_zero_inner_radius_equals_filled_volume() {
        assert_eq!(tube_volume(0.02, 0.0, 0.3), filled_cylinder_volume(0.02, 0.3));
    }

    #[test]
    fn solid_cylinder_inertias_follow_textbook_formulas() {
        let (r, l) = (0.1, 0.6);
        assert!(f64_approx_equal(
            tube_longitudinal_unit_inertia(0.0, r, l),
            (3.0 * r * r + l * l) / 12.0
        ));
        assert!(f64_approx_equal(tube_rotational_unit_inertia(0.0, r), r * r / 2.0));
    }

    #[test]
    fn thin_walled_rotational_inertia_approaches_radius_squared() {
        let r = 0.05;
        let inertia = tube_rotational_unit_inertia(r - 1e-9, r);
        assert!((inertia - r * r).abs() < 1e-9);
    }

    #[test]
    fn axial_bound_corners_enclose_the_cross_section() {
        let corners = AxialBound::new(0.4, 0.02).corners();
        assert_eq!(corners.len(), 4);
        for corner in &corners {
            assert_eq!(corner.x, 0.4);
            assert_eq!(corner.y.abs(), 0.02);
            assert_eq!(corner.z.abs(), 0.02);
        }
        assert_ne!(corners[0], corners[2]);
    }

    #[test]
    fn mass_point_on_axis_has_zero_lateral_offset() {
        let point = MassPoint::on_axis(0.15, 0.2);
        assert_eq!(point.axial_offset(), 0.15);
        assert_eq!(point.position.y, 0.0);
        assert_eq!(point.position.z, 0.0);
        assert_eq!(point.mass, 0.2);
    }
}
