//! The hosting environment: reload and animation capabilities.

use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Capabilities supplied by whatever hosts the rendered markup.
///
/// The runtime never reloads a page or drives an animation itself; it asks
/// the environment to, and treats both as opaque external effects.
pub trait Environment {
    /// Reloads the whole environment (a full page reload in a browser).
    fn reload(&self);

    /// Starts an animation and returns a handle used to revert it later.
    fn start_animation(&self, animation: &Animation) -> AnimationHandle;

    /// Reverts a previously started animation.
    fn revert_animation(&self, handle: AnimationHandle);
}

impl<E: Environment + ?Sized> Environment for Rc<E> {
    fn reload(&self) {
        (**self).reload()
    }

    fn start_animation(&self, animation: &Animation) -> AnimationHandle {
        (**self).start_animation(animation)
    }

    fn revert_animation(&self, handle: AnimationHandle) {
        (**self).revert_animation(handle)
    }
}

/// Opaque identifier for a started animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AnimationHandle(pub u64);

/// An animation request: tween every element matching `target` from one
/// keyframe to another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub target: String,
    pub from: Keyframe,
    pub to: Keyframe,
    pub timing: Timing,
}

impl Animation {
    pub fn new(target: impl Into<String>, from: Keyframe, to: Keyframe, timing: Timing) -> Self {
        Self {
            target: target.into(),
            from,
            to,
            timing,
        }
    }
}

/// Animated properties. Unset properties are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Keyframe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

/// How many times an animation plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Repeat {
    Once,
    Times(u32),
    Infinite,
}

/// Timing of an animation, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timing {
    pub duration: f32,
    pub delay: f32,
    /// Offset between consecutive targets.
    pub stagger: f32,
    pub repeat: Repeat,
    /// Play backwards on every other repeat.
    pub yoyo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<String>,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: 0.5,
            delay: 0.0,
            stagger: 0.0,
            repeat: Repeat::Once,
            yoyo: false,
            ease: None,
        }
    }
}

/// An environment that records every request instead of acting on it.
///
/// Useful in tests and for server-side rendering, where there is no page to
/// reload and nothing to animate.
#[derive(Debug, Default)]
pub struct RecordingEnvironment {
    reloads: Cell<usize>,
    started: RefCell<Vec<(AnimationHandle, Animation)>>,
    reverted: RefCell<Vec<AnimationHandle>>,
    next_handle: Cell<u64>,
}

impl RecordingEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reload requests received.
    pub fn reloads(&self) -> usize {
        self.reloads.get()
    }

    /// Every animation started so far, in order.
    pub fn started(&self) -> Vec<Animation> {
        self.started
            .borrow()
            .iter()
            .map(|(_, animation)| animation.clone())
            .collect()
    }

    /// Handles of every reverted animation, in order.
    pub fn reverted(&self) -> Vec<AnimationHandle> {
        self.reverted.borrow().clone()
    }

    /// Number of animations started and not yet reverted.
    pub fn running(&self) -> usize {
        let reverted = self.reverted.borrow();
        self.started
            .borrow()
            .iter()
            .filter(|(handle, _)| !reverted.contains(handle))
            .count()
    }
}

impl Environment for RecordingEnvironment {
    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }

    fn start_animation(&self, animation: &Animation) -> AnimationHandle {
        let handle = AnimationHandle(self.next_handle.get());
        self.next_handle.set(handle.0 + 1);
        self.started.borrow_mut().push((handle, animation.clone()));
        handle
    }

    fn revert_animation(&self, handle: AnimationHandle) {
        self.reverted.borrow_mut().push(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pulse() -> Animation {
        Animation::new(
            ".dot",
            Keyframe {
                opacity: Some(0.5),
                ..Keyframe::default()
            },
            Keyframe {
                opacity: Some(1.0),
                ..Keyframe::default()
            },
            Timing::default(),
        )
    }

    #[test]
    fn test_recording_environment_counts_reloads() {
        let env = RecordingEnvironment::new();
        env.reload();
        env.reload();
        assert_eq!(env.reloads(), 2);
    }

    #[test]
    fn test_recording_environment_tracks_running_animations() {
        let env = RecordingEnvironment::new();
        let first = env.start_animation(&pulse());
        let second = env.start_animation(&pulse());
        assert_ne!(first, second);
        assert_eq!(env.running(), 2);

        env.revert_animation(first);
        assert_eq!(env.running(), 1);
        assert_eq!(env.reverted(), vec![first]);
    }

    #[test]
    fn test_rc_environment_delegates() {
        let env = Rc::new(RecordingEnvironment::new());
        let shared: Rc<RecordingEnvironment> = Rc::clone(&env);
        shared.reload();
        assert_eq!(env.reloads(), 1);
    }

    #[test]
    fn test_animation_serializes_without_unset_fields() {
        let json = serde_json::to_value(pulse()).unwrap();
        assert_eq!(json["target"], ".dot");
        assert!(json["from"].get("scale").is_none());
        assert_eq!(json["timing"]["repeat"], "once");
    }
}
