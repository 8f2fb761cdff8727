/// Perpetual low-amplitude oscillation around each node's rest anchor.
///
/// Pure read side: the offset is recomputed fresh every frame from the clock
/// and never written back to the stored layout, so the clock is trivially
/// restartable.
#[derive(Debug, Clone, Default)]
pub struct FloatClock {
    t: f64,
}

impl FloatClock {
    /// Fixed per-tick step; the clock advances by this regardless of wall time.
    pub const STEP: f64 = 0.015;

    /// Deterministic per-node phase offset so nodes don't sway in lockstep.
    const PHASE_STEP: f64 = 0.7;

    pub fn tick(&mut self) {
        self.t += Self::STEP;
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    /// Render offset for the node at `index`. Hubs sway less than satellites.
    pub fn offset(&self, index: usize, is_hub: bool) -> (f64, f64) {
        let phase = index as f64 * Self::PHASE_STEP;
        let amplitude = if is_hub { 2.0 } else { 4.0 };
        (
            (self.t + phase).sin() * amplitude,
            (self.t * 0.6 + phase).cos() * amplitude,
        )
    }
}
