/// Context parameters for the GL layer.
///
/// Defaults request the 3.3 core profile with vsync.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Requested OpenGL version as `(major, minor)`.
    pub gl_version: (u8, u8),

    /// Wait for one vertical blank per buffer swap.
    ///
    /// If the platform rejects the swap interval the frame loop still runs, unthrottled.
    pub vsync: bool,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            gl_version: (3, 3),
            vsync: true,
        }
    }
}
