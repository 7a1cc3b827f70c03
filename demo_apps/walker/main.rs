//! Walk demo: W/A/S/D moves a character relative to an orbiting camera,
//! Shift toggles walk/run, left-drag orbits, scroll zooms. There is no
//! renderer — the character's state is reported through the log instead
//! (`RUST_LOG=info`, `debug` to also see every animation transition).

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use anyhow::Result;
use glam::Vec3;

use strider::animation::{
    AnimationClip, AnimationMixer, InterpolationMode, KeyframeTrack, TargetPath, Track, TrackData,
};
use strider::{App, Camera, CharacterControls, FrameClock, Key, MotionConfig, MoveIntent, OrbitControls, Transform};

/// A placeholder clip: a vertical bob standing in for real skinned motion.
fn bob_clip(name: &str, duration: f32, amplitude: f32) -> AnimationClip {
    let track = Track {
        target: TargetPath::Translation,
        data: TrackData::Vector3(KeyframeTrack::new(
            vec![0.0, duration / 2.0, duration],
            vec![Vec3::ZERO, Vec3::Y * amplitude, Vec3::ZERO],
            InterpolationMode::Linear,
        )),
    };
    AnimationClip::new(name, vec![track])
}

fn main() -> Result<()> {
    env_logger::init();

    let mut mixer = AnimationMixer::new();
    mixer.clip_action(Arc::new(bob_clip("Idle", 2.0, 0.01)));
    mixer.clip_action(Arc::new(bob_clip("Walking", 1.0, 0.04)));
    mixer.clip_action(Arc::new(bob_clip("Run", 0.6, 0.08)));
    log::info!(
        "registered clips: {}",
        mixer.clip_names().collect::<Vec<_>>().join(", ")
    );

    let mut model = Transform::new();
    let mut camera_transform = Transform::new();
    let mut camera = Camera::new_perspective(45.0, 16.0 / 9.0, 0.1, 1000.0);

    let mut orbit = OrbitControls::new(Vec3::Y, 7.0);
    orbit.min_distance = 5.0;
    orbit.max_distance = 15.0;
    orbit.max_polar = FRAC_PI_2 - 0.05;

    let mut controls = CharacterControls::new(MotionConfig::default(), &mut mixer);
    let mut clock = FrameClock::new();

    // Place the camera on its orbit before the first frame
    orbit.update(&mut camera_transform, &strider::Input::new(), 0.0);

    let mut app = App::new().with_title("strider — walker");
    app.set_update_fn(move |input, dt| {
        if input.get_key_down(Key::ShiftLeft) || input.get_key_down(Key::ShiftRight) {
            controls.switch_run_toggle();
        }

        let intent = MoveIntent::from_input(input);
        controls.update(
            dt,
            intent,
            &mut mixer,
            &mut model,
            &mut camera_transform,
            &mut orbit,
        );
        orbit.update(&mut camera_transform, input, dt);

        let size = input.screen_size();
        if size.y > 0.0 {
            camera.aspect = size.x / size.y;
            camera.update_projection_matrix();
        }
        camera.update_view_matrix(&camera_transform);

        clock.tick();
        if let Some(fps) = clock.take_fps_sample() {
            log::info!(
                "pos=({:.2}, {:.2}) action={} fps={:.0}",
                model.position.x,
                model.position.z,
                controls.current_action(),
                fps
            );
        }
    });

    app.run()?;
    Ok(())
}
