use crate::FrameContentPolicy;

/// Options for reading, checking and writing functional groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupInterfaceOptions {
    /// Run `check()` before writing and refuse to write inconsistent groups.
    pub check_on_write: bool,
    /// Upper bound on worker threads for per-frame read/write (0 is treated as 1).
    pub use_threads: u32,
    /// Severity of a frame without Frame Content group in `check()`.
    pub frame_content_policy: FrameContentPolicy,
}

impl Default for GroupInterfaceOptions {
    fn default() -> Self {
        Self {
            check_on_write: true,
            use_threads: 1,
            frame_content_policy: FrameContentPolicy::default(),
        }
    }
}

impl GroupInterfaceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_check_on_write(mut self, check_on_write: bool) -> Self {
        self.check_on_write = check_on_write;
        self
    }

    pub fn with_threads(mut self, use_threads: u32) -> Self {
        self.use_threads = use_threads.max(1);
        self
    }

    pub fn with_frame_content_policy(mut self, policy: FrameContentPolicy) -> Self {
        self.frame_content_policy = policy;
        self
    }
}
