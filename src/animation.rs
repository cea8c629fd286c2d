//! Time-based rotation for the animated lessons.
//!
//! The angle advances by a fixed number of degrees per second of elapsed time rather than per
//! frame, so the spin speed doesn't depend on the frame rate.

use std::time::Duration;

use log::trace;
use math::*;

/// Default rotation speed in degrees per second.
pub const ANGLE_STEP: f32 = 30.0;

/// A rotation about a fixed axis whose angle advances with time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    angle: f32,
    pub degrees_per_second: f32,
    pub axis: Vector3,
}

impl Spin {
    /// Starts at angle 0 turning [`ANGLE_STEP`] degrees per second about `axis`.
    pub fn new(axis: Vector3) -> Spin {
        Spin {
            angle: 0.0,
            degrees_per_second: ANGLE_STEP,
            axis,
        }
    }

    /// The current angle in degrees, always in `[0, 360)`.
    pub fn angle(&self) -> f32 { self.angle }

    pub fn set_angle(&mut self, angle: f32) -> &mut Spin {
        self.angle = wrap_degrees(angle);
        self
    }

    /// Advances the angle by `elapsed` and returns the new angle.
    pub fn advance(&mut self, elapsed: Duration) -> f32 {
        let delta = self.degrees_per_second * elapsed.as_secs_f32();
        self.angle = wrap_degrees(self.angle + delta);
        trace!("spin advanced {:?} to {} degrees", elapsed, self.angle);
        self.angle
    }

    /// Sets `matrix` to the rotation for the current angle.
    pub fn apply(&self, matrix: &mut Matrix4) -> Result<(), MathError> {
        matrix.set_rotate(self.angle, self.axis.x, self.axis.y, self.axis.z)?;
        Ok(())
    }
}

fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);

    // `rem_euclid` can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_by_elapsed_time() {
        let mut spin = Spin::new(Vector3::back());
        assert_eq!(spin.advance(Duration::from_millis(500)), 15.0);
        assert_eq!(spin.advance(Duration::from_secs(1)), 45.0);
    }

    #[test]
    fn wraps_at_a_full_turn() {
        let mut spin = Spin::new(Vector3::back());
        spin.set_angle(350.0);
        let angle = spin.advance(Duration::from_secs(1));
        assert!((angle - 20.0).abs() < 1e-4, "{}", angle);

        spin.set_angle(-90.0);
        assert_eq!(spin.angle(), 270.0);

        spin.set_angle(720.0);
        assert_eq!(spin.angle(), 0.0);
    }

    #[test]
    fn negative_speed_stays_in_range() {
        let mut spin = Spin::new(Vector3::back());
        spin.degrees_per_second = -ANGLE_STEP;

        let angle = spin.advance(Duration::from_millis(100));
        assert!((angle - 357.0).abs() < 1e-4, "{}", angle);
    }

    #[test]
    fn many_small_frames() {
        let mut spin = Spin::new(Vector3::back());
        for _ in 0..1000 {
            let angle = spin.advance(Duration::from_millis(16));
            assert!(angle >= 0.0 && angle < 360.0);
        }

        // 16 seconds at 30 degrees per second.
        assert!((spin.angle() - 120.0).abs() < 0.1, "{}", spin.angle());
    }

    #[test]
    fn apply_sets_rotation() {
        let mut spin = Spin::new(Vector3::back());
        spin.set_angle(90.0);

        let mut matrix = Matrix4::from_translation(5.0, 5.0, 5.0);
        spin.apply(&mut matrix).unwrap();
        assert!(matrix.approx_eq(&Matrix4::from_rotation(90.0, Vector3::back()).unwrap(), 1e-6));

        spin.axis = Vector3::zero();
        assert_eq!(spin.apply(&mut matrix), Err(MathError::ZeroLength));
    }
}
