//! Kinematic state for entities that move in 3D space
//!
//! Explicit Euler integration: velocity first, then position from the new
//! velocity.

use crate::foundation::math::Vec3;

/// Position, velocity and acceleration of one entity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kinematics {
    /// Linear acceleration in units per second squared
    pub acceleration: Vec3,

    /// Linear velocity in units per second
    pub velocity: Vec3,

    /// World-space position
    pub position: Vec3,
}

impl Kinematics {
    /// Create a kinematic state
    pub fn new(position: Vec3, velocity: Vec3, acceleration: Vec3) -> Self {
        Self {
            acceleration,
            velocity,
            position,
        }
    }

    /// Advance by `delta_time` seconds
    pub fn integrate(&mut self, delta_time: f32) {
        self.velocity += self.acceleration * delta_time;
        self.position += self.velocity * delta_time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_integrate_velocity_then_position() {
        let mut body = Kinematics::new(Vec3::zeros(), Vec3::zeros(), Vec3::new(0.0, -9.8, 0.0));

        body.integrate(1.0);

        assert_eq!(body.velocity, Vec3::new(0.0, -9.8, 0.0));
        assert_eq!(body.position, Vec3::new(0.0, -9.8, 0.0));
    }

    #[test]
    fn test_integration_with_initial_velocity() {
        let mut body = Kinematics::new(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );

        body.integrate(0.5);

        assert_relative_eq!(body.velocity, Vec3::new(1.0, 0.5, 0.0));
        assert_relative_eq!(body.position, Vec3::new(1.5, 0.25, 0.0));
    }

    #[test]
    fn test_zero_delta_is_a_no_op() {
        let mut body = Kinematics::new(Vec3::new(3.0, 2.0, 1.0), Vec3::new(1.0, 1.0, 1.0), Vec3::new(5.0, 5.0, 5.0));
        let before = body;

        body.integrate(0.0);

        assert_eq!(body, before);
    }
}
