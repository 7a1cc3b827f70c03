use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::animation::action::AnimationAction;
use crate::animation::clip::AnimationClip;
use crate::animation::player::AnimationPlayer;

/// Name-keyed registry of animation actions.
///
/// Each registered clip gets one [`AnimationAction`]; [`update`](Self::update)
/// advances them all off the same clock. Lookups through
/// [`action`](Self::action) / [`action_mut`](Self::action_mut) are part of
/// the caller's contract: the registry must be populated for every name the
/// caller can reach, and a miss panics. Use [`get`](Self::get) /
/// [`get_mut`](Self::get_mut) to probe.
#[derive(Debug, Default)]
pub struct AnimationMixer {
    actions: FxHashMap<String, AnimationAction>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `clip` under its own name and returns its action.
    /// Registering the same name again returns the existing action.
    pub fn clip_action(&mut self, clip: Arc<AnimationClip>) -> &mut AnimationAction {
        self.actions
            .entry(clip.name.clone())
            .or_insert_with(|| AnimationAction::new(clip))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AnimationAction> {
        self.actions.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut AnimationAction> {
        self.actions.get_mut(name)
    }

    /// Contract-checked lookup.
    ///
    /// # Panics
    /// Panics if no clip is registered under `name`.
    #[must_use]
    pub fn action(&self, name: &str) -> &AnimationAction {
        self.actions
            .get(name)
            .unwrap_or_else(|| panic!("animation clip not registered: {name}"))
    }

    /// Contract-checked lookup.
    ///
    /// # Panics
    /// Panics if no clip is registered under `name`.
    pub fn action_mut(&mut self, name: &str) -> &mut AnimationAction {
        self.actions
            .get_mut(name)
            .unwrap_or_else(|| panic!("animation clip not registered: {name}"))
    }

    /// Registered clip names, in no particular order.
    pub fn clip_names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Advances every action's clock and pending fade.
    pub fn update(&mut self, dt: f32) {
        for action in self.actions.values_mut() {
            action.update(dt);
        }
    }
}

impl AnimationPlayer for AnimationMixer {
    fn play(&mut self, name: &str) {
        self.action_mut(name).play();
    }

    fn crossfade(&mut self, from: &str, to: &str, duration: f32) {
        self.action_mut(from).fade_out(duration);

        let incoming = self.action_mut(to);
        incoming.reset();
        incoming.fade_in(duration);
        incoming.play();
    }

    fn advance(&mut self, dt: f32) {
        self.update(dt);
    }
}
