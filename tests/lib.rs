extern crate lightbox;

use std::time::Duration;

use lightbox::math::*;
use lightbox::{FrameUniforms, Lesson, Nudge, SceneConfig};

fn single_frame(lesson: Lesson) -> FrameUniforms {
    let uniforms = lesson.scene(1.0).unwrap().frame().unwrap();
    assert_eq!(uniforms.len(), 1, "{} should draw one instance", lesson);
    uniforms[0]
}

#[test]
fn rotate_triangle() {
    let uniforms = single_frame(Lesson::RotateTriangle);

    // -90 degrees about z turns +y into +x.
    let tip = uniforms.mvp_matrix() * Point::new(0.0, 0.5, 0.0);
    assert!(tip.approx_eq(&Point::new(0.5, 0.0, 0.0), 1e-6), "{:?}", tip);
}

#[test]
fn rotated_translated_triangle() {
    let uniforms = single_frame(Lesson::RotatedTranslatedTriangle);

    // Translated along x first, then the whole thing is rotated -45 degrees.
    let half_sqrt = 0.5f32.sqrt();
    let moved = uniforms.model_matrix() * Point::origin();
    assert!(moved.approx_eq(&Point::new(0.5 * half_sqrt, -0.5 * half_sqrt, 0.0), 1e-6), "{:?}", moved);
}

#[test]
fn rotate_animation() {
    let mut scene = Lesson::RotateAnimation.scene(1.0).unwrap();

    let start = scene.frame().unwrap()[0].model_matrix() * Point::origin();
    assert!(start.approx_eq(&Point::new(0.4, 0.0, 0.0), 1e-6), "{:?}", start);

    // Three seconds at 30 degrees per second.
    for _ in 0..3 {
        scene.advance(Duration::from_secs(1));
    }
    let turned = scene.frame().unwrap()[0].model_matrix() * Point::origin();
    assert!(turned.approx_eq(&Point::new(0.0, 0.4, 0.0), 1e-6), "{:?}", turned);

    // Nine more seconds completes the turn.
    assert_eq!(scene.advance(Duration::from_secs(9)), Some(0.0));
}

#[test]
fn look_at_triangles_nudge() {
    let mut scene = Lesson::LookAtTriangles.scene(1.0).unwrap();
    let before = scene.frame().unwrap()[0].mvp_matrix();

    scene.nudge_eye(Nudge::Right);
    scene.nudge_eye(Nudge::Left);
    let after = scene.frame().unwrap()[0].mvp_matrix();
    assert!(before.approx_eq(&after, 1e-6));

    scene.nudge_eye(Nudge::Right);
    let eye = scene.camera.unwrap().eye;
    assert!(eye.approx_eq(&Vector3::new(0.25, 0.25, 0.25), 1e-6), "{:?}", eye);

    let mut expected = Matrix4::new();
    expected.set_look_at(eye, Vector3::zero(), Vector3::up()).unwrap();
    assert!(scene.frame().unwrap()[0].mvp_matrix().approx_eq(&expected, 1e-6));
}

#[test]
fn perspective_mvp_draws_two_instances() {
    let uniforms = Lesson::PerspectiveMvp.scene(1.0).unwrap().frame().unwrap();
    assert_eq!(uniforms.len(), 2);

    let mut projection = Matrix4::new();
    projection.set_perspective(30.0, 1.0, 1.0, 100.0).unwrap();

    // The camera at z = 5 looking down -z is a plain translation.
    for (instance, x) in uniforms.iter().zip([0.75, -0.75].iter()) {
        let expected = projection * Matrix4::from_translation(0.0, 0.0, -5.0) * Matrix4::from_translation(*x, 0.0, 0.0);
        assert!(instance.mvp_matrix().approx_eq(&expected, 1e-5));
    }
}

#[test]
fn z_fighting_mvp_is_proj_view_model() {
    let uniforms = single_frame(Lesson::ZFighting);

    let mut projection = Matrix4::new();
    projection.set_perspective(30.0, 1.0, 1.0, 100.0).unwrap();
    let mut view = Matrix4::new();
    view.set_look_at(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -100.0), Vector3::up())
        .unwrap();
    let model = Matrix4::from_translation(0.001, 0.0, 0.0);

    let mut mvp = Matrix4::new();
    mvp.set(&projection).multiply(&view).multiply(&model);
    assert!(uniforms.mvp_matrix().approx_eq(&mvp, 1e-6));
}

#[test]
fn hello_cube_corners_land_in_clip_space() {
    let uniforms = single_frame(Lesson::HelloCube);

    for &x in [-1.0, 1.0].iter() {
        for &y in [-1.0, 1.0].iter() {
            for &z in [-1.0, 1.0].iter() {
                let clip = uniforms.mvp_matrix() * Point::new(x, y, z);
                let ndc = clip.to_cartesian().unwrap();
                assert!(clip.w > 0.0);
                assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0 && ndc.z.abs() <= 1.0, "{:?}", ndc);
            }
        }
    }
}

#[test]
fn lighted_translated_rotated_cube() {
    let uniforms = single_frame(Lesson::LightedTranslatedRotatedCube);

    let mut model = Matrix4::new();
    model.set_translate(0.0, 1.0, 0.0).rotate(45.0, 0.0, 0.0, 1.0).unwrap();
    assert!(uniforms.model_matrix().approx_eq(&model, 1e-6));

    // Rigid model, so the normal matrix is the model's rotation part.
    let normal = uniforms.normal_matrix().transform_direction(Vector3::right());
    assert!(normal.approx_eq(&model.transform_direction(Vector3::right()), 1e-6), "{:?}", normal);

    let direction = Vector3::new(0.5, 3.0, 4.0).normalized().unwrap();
    assert!(Vector3::new(uniforms.light_vector[0], uniforms.light_vector[1], uniforms.light_vector[2])
        .approx_eq(&direction, 1e-6));
    assert_eq!(uniforms.light_vector[3], 0.0);
    assert_eq!(uniforms.ambient, [0.2, 0.2, 0.2, 1.0]);
}

#[test]
fn point_lighted_cube_shading() {
    let scene = Lesson::PointLightedCube.scene(1.0).unwrap();
    let uniforms = scene.frame().unwrap()[0];
    let lighting = scene.lighting.unwrap();
    assert_eq!(uniforms.light_vector, [3.0, 3.0, 4.0, 1.0]);

    // The cube is turned 90 degrees about y, so its +x face ends up facing -z, away from the
    // light.
    let base = Color::rgb(1.0, 0.0, 0.0);
    let model = uniforms.model_matrix();
    let normal_matrix = uniforms.normal_matrix();

    let back = lighting
        .shade_vertex(base, Point::new(1.0, 0.0, 0.0), Vector3::right(), &model, &normal_matrix)
        .unwrap();
    assert!(back.approx_eq(&Color::rgb(0.2, 0.0, 0.0), 1e-5), "{:?}", back);

    // The +z face turns to +x. At (1, 0, 0) the light is at (2, 3, 4) relative to it.
    let lit = lighting
        .shade_vertex(base, Point::new(0.0, 0.0, 1.0), Vector3::back(), &model, &normal_matrix)
        .unwrap();
    let n_dot_l = 2.0 / 29.0f32.sqrt();
    assert!(lit.approx_eq(&Color::rgb(n_dot_l + 0.2, 0.0, 0.0), 1e-5), "{:?}", lit);
}

#[test]
fn per_fragment_lesson_uses_its_own_camera_and_light() {
    let uniforms = single_frame(Lesson::PointLightedCubePerFragment);
    assert_eq!(uniforms.light_vector, [2.3, 4.0, 3.5, 1.0]);

    let mut mvp = Matrix4::new();
    mvp.set_perspective(30.0, 1.0, 1.0, 100.0).unwrap()
        .look_at(Vector3::new(8.0, 8.0, 16.0), Vector3::zero(), Vector3::up()).unwrap()
        .multiply(&Matrix4::from_rotation(90.0, Vector3::up()).unwrap());
    assert!(uniforms.mvp_matrix().approx_eq(&mvp, 1e-6));
}

#[test]
fn config_matches_preset() {
    let config: SceneConfig = r#"{
        "canvas": { "width": 400, "height": 400 },
        "camera": {
            "eye": [3.0, 3.0, 7.0],
            "projection": { "kind": "perspective", "fov": 30.0, "near": 1.0, "far": 100.0 }
        },
        "instances": [[{ "op": "rotate", "angle": 90.0, "axis": [0.0, 1.0, 0.0] }]],
        "lighting": {
            "light": { "kind": "point", "position": [3.0, 3.0, 4.0] },
            "ambient": [0.2, 0.2, 0.2]
        }
    }"#
    .parse()
    .unwrap();

    let from_config = config.build_scene().unwrap().frame().unwrap();
    let from_preset = Lesson::PointLightedCube.scene(1.0).unwrap().frame().unwrap();
    assert_eq!(from_config, from_preset);
}

#[test]
fn uniform_bytes_follow_field_order() {
    let uniforms = single_frame(Lesson::HelloCube);
    let bytes = uniforms.as_bytes();

    assert_eq!(bytes.len(), 60 * 4);
    assert_eq!(&bytes[..64], uniforms.model_matrix().as_bytes());
    assert_eq!(&bytes[64..128], uniforms.mvp_matrix().as_bytes());
}
