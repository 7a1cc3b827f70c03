/// Backend seam for named-clip playback.
///
/// The character controller never touches actions directly; it drives
/// whatever implements this trait. [`crate::animation::AnimationMixer`] is
/// the in-crate backend, and alternate animation systems (or test doubles)
/// can stand in for it.
///
/// All three operations treat an unregistered clip name as a caller
/// contract violation: implementations fail fast rather than no-op.
pub trait AnimationPlayer {
    /// Starts the named clip.
    fn play(&mut self, name: &str);

    /// Crossfades: fades `from` out while fading a rewound `to` in, both
    /// over `duration` seconds. The two ramps run concurrently off the same
    /// clock, so the motion overlaps instead of cutting.
    fn crossfade(&mut self, from: &str, to: &str, duration: f32);

    /// Advances every clip clock and pending fade by `dt` seconds.
    fn advance(&mut self, dt: f32);
}
