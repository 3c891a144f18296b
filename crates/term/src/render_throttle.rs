/// Decides when the game loop should redraw.
///
/// The game ticks every millisecond but the picture only changes a few times
/// per second, so frames are drawn on change (no faster than `min_frame_ms`)
/// and otherwise refreshed every `refresh_ms`.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_frame_ms: u64,
    refresh_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_frame_ms: u64, refresh_ms: u64) -> Self {
        Self {
            min_frame_ms,
            refresh_ms: refresh_ms.max(min_frame_ms),
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    pub fn min_frame_ms(&self) -> u64 {
        self.min_frame_ms
    }

    /// Forget the last frame so the next call renders (e.g. after a resize).
    pub fn force(&mut self) {
        self.has_rendered = false;
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        if !self.has_rendered {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        let since = now_ms.saturating_sub(self.last_render_ms);
        if fingerprint != self.last_fingerprint && since >= self.min_frame_ms {
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if since >= self.refresh_ms {
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        false
    }
}
