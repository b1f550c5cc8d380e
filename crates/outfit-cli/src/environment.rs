//! The environment components see when rendered from the command line.

use outfit::{Animation, AnimationHandle, Environment, RecordingEnvironment};
use tracing::{debug, info};

/// Records requests like [`RecordingEnvironment`] and logs each one.
#[derive(Debug, Default)]
pub struct PreviewEnvironment {
    recorded: RecordingEnvironment,
}

impl PreviewEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Animations requested so far, in start order.
    pub fn animations(&self) -> Vec<Animation> {
        self.recorded.started()
    }
}

impl Environment for PreviewEnvironment {
    fn reload(&self) {
        info!("reload requested; nothing to reload in a preview");
        self.recorded.reload();
    }

    fn start_animation(&self, animation: &Animation) -> AnimationHandle {
        let handle = self.recorded.start_animation(animation);
        debug!(selector = %animation.target, handle = handle.0, "animation started");
        handle
    }

    fn revert_animation(&self, handle: AnimationHandle) {
        debug!(handle = handle.0, "animation reverted");
        self.recorded.revert_animation(handle);
    }
}
