//! Stack capturers

use super::{Frame, Stack, StackCapturer};

/// Maximum number of frames kept by [`BacktraceCapturer::default`].
pub const DEFAULT_DEPTH: usize = 32;

/// Walks the live call stack of the current thread with the `backtrace` crate.
///
/// Only instruction pointers are recorded; see [`Frame`] for resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BacktraceCapturer {
    depth: usize,
}

impl BacktraceCapturer {
    /// Capturer keeping at most `depth` frames. Deeper stacks are truncated.
    #[must_use]
    pub const fn with_depth(depth: usize) -> Self {
        Self { depth }
    }

    /// The configured frame cap.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for BacktraceCapturer {
    fn default() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }
}

impl StackCapturer for BacktraceCapturer {
    /// Record return addresses, dropping everything up to and including this
    /// method's own frame plus `skip` further frames.
    ///
    /// The walk happens directly in this frame so the frame count between the
    /// anchor and the caller does not depend on inlining or tail calls. When
    /// this frame cannot be located (no unwind info for it) every walked frame
    /// is kept, still limited to `depth`.
    #[inline(never)]
    fn capture(&self, skip: usize) -> Stack {
        let anchor = <Self as StackCapturer>::capture as fn(&Self, usize) -> Stack as usize;
        let mut frames = Vec::with_capacity(self.depth);
        let mut anchored = false;
        let mut pending = 0usize;

        backtrace::trace(|frame| {
            if !anchored && frame.symbol_address() as usize == anchor {
                anchored = true;
                pending = skip;
                frames.clear();
                return true;
            }
            if anchored && pending > 0 {
                pending -= 1;
                return true;
            }
            if frames.len() < self.depth {
                frames.push(Frame::from_ip(frame.ip() as usize));
            }
            !(anchored && frames.len() >= self.depth)
        });

        log::trace!("captured {} stack frames (anchored: {anchored})", frames.len());
        std::hint::black_box(Stack::from_frames(frames))
    }
}

/// Capturer for environments without stack walking; always yields an empty stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopCapturer;

impl StackCapturer for NoopCapturer {
    fn capture(&self, _skip: usize) -> Stack {
        Stack::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recurse(capturer: &BacktraceCapturer, remaining: usize) -> Stack {
        if remaining == 0 {
            capturer.capture(0)
        } else {
            let stack = recurse(capturer, remaining - 1);
            std::hint::black_box(stack)
        }
    }

    #[test]
    fn depth_is_capped() {
        let capturer = BacktraceCapturer::default();
        let stack = recurse(&capturer, 64);
        assert!(stack.len() <= DEFAULT_DEPTH);
    }

    #[test]
    fn custom_depth_is_capped() {
        let capturer = BacktraceCapturer::with_depth(4);
        let stack = recurse(&capturer, 16);
        assert!(stack.len() <= 4);
    }

    #[test]
    fn noop_is_empty() {
        assert!(NoopCapturer.capture(0).is_empty());
    }
}
