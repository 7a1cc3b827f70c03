//! Animation System Tests
//!
//! Tests for:
//! - KeyframeTrack linear/step interpolation and range clamping
//! - KeyframeCursor hint and binary-search fallback
//! - AnimationClip duration auto-computation
//! - AnimationAction loop modes (Once, Loop, PingPong)
//! - Fade ramps (fade-in, fade-out, replacement)
//! - AnimationMixer registry and crossfade protocol

use std::sync::Arc;

use glam::{Quat, Vec3};

use strider::animation::{
    AnimationAction, AnimationClip, AnimationMixer, AnimationPlayer, InterpolationMode,
    KeyframeCursor, KeyframeTrack, LoopMode, TargetPath, Track, TrackData,
};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn translation_track(times: Vec<f32>, values: Vec<Vec3>) -> Track {
    Track {
        target: TargetPath::Translation,
        data: TrackData::Vector3(KeyframeTrack::new(times, values, InterpolationMode::Linear)),
    }
}

// ============================================================================
// KeyframeTrack: Interpolation
// ============================================================================

#[test]
fn track_linear_f32_midpoint() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![0.0_f32, 10.0],
        InterpolationMode::Linear,
    );

    let val = track.sample(0.5);
    assert!(approx(val, 5.0), "Expected 5.0, got {val}");
}

#[test]
fn track_linear_f32_exact_keyframes() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0],
        vec![0.0_f32, 10.0, 20.0],
        InterpolationMode::Linear,
    );

    let mut cursor = KeyframeCursor::default();
    assert!(approx(track.sample_with_cursor(0.0, &mut cursor), 0.0));
    assert!(approx(track.sample_with_cursor(1.0, &mut cursor), 10.0));
    assert!(approx(track.sample_with_cursor(2.0, &mut cursor), 20.0));
}

#[test]
fn track_clamps_outside_range() {
    let track = KeyframeTrack::new(
        vec![1.0, 2.0],
        vec![10.0_f32, 20.0],
        InterpolationMode::Linear,
    );

    // Before the first keyframe: first value; after the last: last value
    assert!(approx(track.sample(0.5), 10.0));
    assert!(approx(track.sample(5.0), 20.0));
}

#[test]
fn track_step_holds_value() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0, 2.0],
        vec![0.0_f32, 100.0, 200.0],
        InterpolationMode::Step,
    );

    let mut cursor = KeyframeCursor::default();
    assert!(approx(track.sample_with_cursor(0.5, &mut cursor), 0.0));
    assert!(approx(track.sample_with_cursor(0.99, &mut cursor), 0.0));
    assert!(approx(track.sample_with_cursor(1.0, &mut cursor), 100.0));
    assert!(approx(track.sample_with_cursor(1.5, &mut cursor), 100.0));
}

#[test]
fn track_linear_vec3() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![Vec3::ZERO, Vec3::new(10.0, 20.0, 30.0)],
        InterpolationMode::Linear,
    );

    let val = track.sample(0.5);
    assert!(val.abs_diff_eq(Vec3::new(5.0, 10.0, 15.0), EPSILON));
}

#[test]
fn track_linear_quat_slerp_midpoint() {
    let track = KeyframeTrack::new(
        vec![0.0, 1.0],
        vec![Quat::IDENTITY, Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)],
        InterpolationMode::Linear,
    );

    let val = track.sample(0.5);
    let expected = Quat::from_rotation_y(std::f32::consts::FRAC_PI_4);
    assert!(val.angle_between(expected) < 1e-4);
}

#[test]
fn track_single_keyframe_is_constant() {
    let track = KeyframeTrack::new(vec![0.0], vec![7.0_f32], InterpolationMode::Linear);

    let mut cursor = KeyframeCursor::default();
    assert!(approx(track.sample_with_cursor(0.0, &mut cursor), 7.0));
    assert!(approx(track.sample_with_cursor(3.0, &mut cursor), 7.0));
}

// ============================================================================
// KeyframeCursor
// ============================================================================

#[test]
fn cursor_tracks_forward_playback() {
    let times: Vec<f32> = (0..10).map(|i| i as f32).collect();
    let values: Vec<f32> = (0..10).map(|i| (i * 10) as f32).collect();
    let track = KeyframeTrack::new(times, values, InterpolationMode::Linear);

    let mut cursor = KeyframeCursor::default();
    // Steady forward sampling keeps the cursor within scan distance
    for i in 0..9 {
        let t = i as f32 + 0.5;
        let val = track.sample_with_cursor(t, &mut cursor);
        assert!(approx(val, t * 10.0), "at t={t}: got {val}");
        assert_eq!(cursor.last_index, i);
    }
}

#[test]
fn cursor_recovers_after_large_jump() {
    let times: Vec<f32> = (0..100).map(|i| i as f32).collect();
    let values: Vec<f32> = (0..100).map(|i| i as f32).collect();
    let track = KeyframeTrack::new(times, values, InterpolationMode::Linear);

    let mut cursor = KeyframeCursor::default();
    // Warm the cursor near the end, then jump back to the start (loop wrap)
    track.sample_with_cursor(90.5, &mut cursor);
    assert_eq!(cursor.last_index, 90);

    let val = track.sample_with_cursor(2.5, &mut cursor);
    assert!(approx(val, 2.5));
    assert_eq!(cursor.last_index, 2);
}

// ============================================================================
// AnimationClip
// ============================================================================

#[test]
fn clip_duration_is_max_track_end() {
    let clip = AnimationClip::new(
        "Blend",
        vec![
            translation_track(vec![0.0, 0.8], vec![Vec3::ZERO, Vec3::X]),
            Track {
                target: TargetPath::Rotation,
                data: TrackData::Quaternion(KeyframeTrack::new(
                    vec![0.0, 1.5],
                    vec![Quat::IDENTITY, Quat::from_rotation_y(1.0)],
                    InterpolationMode::Linear,
                )),
            },
        ],
    );

    assert!(approx(clip.duration, 1.5));
}

#[test]
fn clip_with_duration_has_no_tracks() {
    let clip = AnimationClip::with_duration("External", 0.75);
    assert!(approx(clip.duration, 0.75));
    assert!(clip.tracks.is_empty());
}

// ============================================================================
// AnimationAction: loop modes
// ============================================================================

fn action_with_duration(duration: f32) -> AnimationAction {
    AnimationAction::new(Arc::new(AnimationClip::with_duration("Test", duration)))
}

#[test]
fn action_once_clamps_and_pauses() {
    let mut action = action_with_duration(1.0);
    action.loop_mode = LoopMode::Once;
    action.play();

    action.update(2.5);
    assert!(approx(action.time, 1.0));
    assert!(action.paused);
}

#[test]
fn action_loop_wraps() {
    let mut action = action_with_duration(1.0);
    action.loop_mode = LoopMode::Loop;
    action.play();

    action.update(2.25);
    assert!(approx(action.time, 0.25));
    assert!(!action.paused);
}

#[test]
fn action_ping_pong_reflects() {
    let mut action = action_with_duration(1.0);
    action.loop_mode = LoopMode::PingPong;
    action.play();

    // 1.25 into a 1.0 clip: 0.25 into the reverse leg
    action.update(1.25);
    assert!(approx(action.time, 0.75));
}

#[test]
fn action_reverse_loop_wraps_from_end() {
    let mut action = action_with_duration(1.0);
    action.loop_mode = LoopMode::Loop;
    action.time_scale = -1.0;
    action.play();

    action.update(0.25);
    assert!(approx(action.time, 0.75));
}

#[test]
fn disabled_action_does_not_advance() {
    let mut action = action_with_duration(1.0);
    // Never played: disabled
    action.update(0.5);
    assert!(approx(action.time, 0.0));
}

// ============================================================================
// AnimationAction: fades
// ============================================================================

#[test]
fn fade_in_ramps_to_full_weight() {
    let mut action = action_with_duration(1.0);
    action.fade_in(0.2);

    assert!(action.enabled);
    action.update(0.1);
    assert!(approx(action.weight, 0.5), "got {}", action.weight);
    assert!(action.is_fading());

    action.update(0.1);
    assert!(approx(action.weight, 1.0));
    assert!(!action.is_fading());
    assert!(action.enabled);
}

#[test]
fn fade_out_reaches_zero_and_disables() {
    let mut action = action_with_duration(1.0);
    action.play();
    action.fade_out(0.2);

    action.update(0.1);
    assert!(approx(action.weight, 0.5));
    assert!(action.enabled);

    action.update(0.1);
    assert!(approx(action.weight, 0.0));
    assert!(!action.enabled);
    assert!(!action.is_fading());
}

#[test]
fn new_fade_replaces_pending_one() {
    let mut action = action_with_duration(1.0);
    action.fade_in(0.2);
    action.update(0.1); // weight 0.5, fade-in pending

    // Reversing mid-fade starts from the in-flight weight
    action.fade_out(0.2);
    action.update(0.1);
    assert!(approx(action.weight, 0.25), "got {}", action.weight);

    action.update(0.1);
    assert!(approx(action.weight, 0.0));
    assert!(!action.enabled);
}

#[test]
fn reset_rewinds_and_cancels_fade() {
    let mut action = action_with_duration(1.0);
    action.play();
    action.update(0.4);
    action.fade_out(0.2);

    action.reset();
    assert!(approx(action.time, 0.0));
    assert!(action.enabled);
    assert!(!action.is_fading());
}

// ============================================================================
// AnimationAction: track sampling
// ============================================================================

#[test]
fn action_samples_translation_at_current_time() {
    let clip = AnimationClip::new(
        "Bob",
        vec![translation_track(
            vec![0.0, 1.0],
            vec![Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0)],
        )],
    );
    let mut action = AnimationAction::new(Arc::new(clip));
    action.play();
    action.update(0.5);

    let pos = action.sample_translation().expect("translation track");
    assert!(pos.abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), EPSILON));
    assert!(action.sample_rotation().is_none());
    assert!(action.sample_scale().is_none());
}

#[test]
fn action_samples_scale_at_current_time() {
    let scale_track = Track {
        target: TargetPath::Scale,
        data: TrackData::Vector3(KeyframeTrack::new(
            vec![0.0, 1.0],
            vec![Vec3::ONE, Vec3::splat(3.0)],
            InterpolationMode::Linear,
        )),
    };
    let clip = AnimationClip::new(
        "Grow",
        vec![
            translation_track(vec![0.0, 1.0], vec![Vec3::ZERO, Vec3::X]),
            scale_track,
        ],
    );
    let mut action = AnimationAction::new(Arc::new(clip));
    action.play();
    action.update(0.5);

    let scale = action.sample_scale().expect("scale track");
    assert!(scale.abs_diff_eq(Vec3::splat(2.0), EPSILON));

    // The translation track is untouched by the scale lookup
    let pos = action.sample_translation().expect("translation track");
    assert!(pos.abs_diff_eq(Vec3::X * 0.5, EPSILON));
}

// ============================================================================
// AnimationMixer: registry
// ============================================================================

fn mixer_with(names: &[&str]) -> AnimationMixer {
    let mut mixer = AnimationMixer::new();
    for name in names {
        mixer.clip_action(Arc::new(AnimationClip::with_duration(*name, 1.0)));
    }
    mixer
}

#[test]
fn mixer_registers_and_looks_up_by_name() {
    let mixer = mixer_with(&["Idle", "Walking"]);
    assert_eq!(mixer.len(), 2);
    assert!(mixer.get("Idle").is_some());
    assert!(mixer.get("TPose").is_none());
    assert_eq!(mixer.action("Walking").clip().name, "Walking");
}

#[test]
fn mixer_reregistering_keeps_existing_action() {
    let mut mixer = mixer_with(&["Idle"]);
    mixer.action_mut("Idle").time_scale = 2.0;

    mixer.clip_action(Arc::new(AnimationClip::with_duration("Idle", 5.0)));
    assert_eq!(mixer.len(), 1);
    assert!(approx(mixer.action("Idle").time_scale, 2.0));
}

#[test]
fn mixer_lists_registered_clip_names() {
    let mixer = mixer_with(&["Idle", "Walking", "Run"]);
    let mut names: Vec<&str> = mixer.clip_names().collect();
    names.sort_unstable();
    assert_eq!(names, ["Idle", "Run", "Walking"]);
}

#[test]
#[should_panic(expected = "animation clip not registered: Fly")]
fn mixer_unregistered_lookup_panics() {
    let mixer = mixer_with(&["Idle"]);
    let _ = mixer.action("Fly");
}

#[test]
#[should_panic(expected = "animation clip not registered")]
fn mixer_crossfade_to_unregistered_clip_panics() {
    let mut mixer = mixer_with(&["Idle"]);
    mixer.crossfade("Idle", "Walking", 0.2);
}

// ============================================================================
// AnimationMixer: crossfade
// ============================================================================

#[test]
fn crossfade_runs_both_ramps_concurrently() {
    let mut mixer = mixer_with(&["Idle", "Walking"]);
    mixer.play("Idle");
    mixer.update(0.5);

    mixer.crossfade("Idle", "Walking", 0.2);

    // Halfway through: outgoing and incoming overlap
    mixer.update(0.1);
    assert!(approx(mixer.action("Idle").weight, 0.5));
    assert!(approx(mixer.action("Walking").weight, 0.5));
    assert!(mixer.action("Idle").enabled);
    assert!(mixer.action("Walking").enabled);

    // Completed: exactly one action remains active
    mixer.update(0.1);
    assert!(!mixer.action("Idle").enabled);
    assert!(approx(mixer.action("Idle").weight, 0.0));
    assert!(mixer.action("Walking").enabled);
    assert!(approx(mixer.action("Walking").weight, 1.0));
}

#[test]
fn crossfade_rewinds_the_incoming_clip() {
    let mut mixer = mixer_with(&["Idle", "Walking"]);
    mixer.play("Walking");
    mixer.update(0.7);
    assert!(approx(mixer.action("Walking").time, 0.7));

    mixer.play("Idle");
    mixer.crossfade("Idle", "Walking", 0.2);
    assert!(approx(mixer.action("Walking").time, 0.0));
}
