use rand::Rng;

use crate::{Matrix4, Vector3};


/// Builds `T * R * S` from random but well-conditioned parts.
fn random_transform<R: Rng>(rng: &mut R) -> Matrix4 {
    let mut axis = Vector3::zero();
    while axis.length() < 0.1 {
        axis = Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
    }

    let mut matrix = Matrix4::from_translation(
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
    );
    matrix
        .rotate(rng.gen_range(-180.0..180.0), axis.x, axis.y, axis.z)
        .unwrap()
        .scale(
            rng.gen_range(0.5..2.0),
            rng.gen_range(0.5..2.0),
            rng.gen_range(0.5..2.0),
        );
    matrix
}
