//! Copy-to-clipboard confirmation state.
//!
//! DESIGN
//! ======
//! Each successful copy starts a new generation. The confirmation timer only
//! reverts the icon if its generation is still the newest, so a second copy
//! before expiry restarts the confirmation instead of being cut short by the
//! first timer.

/// How long the confirmation icon stays visible after a copy.
pub const COPY_CONFIRM_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: bool,
    generation: u64,
}

impl CopyFeedback {
    /// Mark a successful copy. Returns the generation the reset timer must
    /// present to [`CopyFeedback::expire`].
    pub fn confirm(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.copied = true;
        self.generation
    }

    /// Revert to the idle icon if `generation` is still current.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.copied {
            return false;
        }
        self.copied = false;
        true
    }

    #[must_use]
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
#[path = "copy_test.rs"]
mod tests;
