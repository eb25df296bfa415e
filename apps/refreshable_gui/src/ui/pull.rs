//! Pull-to-refresh gesture tracking, independent of the egui frame loop.

/// How far past the threshold the list may be dragged, as a multiple of it.
const MAX_OVERPULL: f32 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PullGesture {
    threshold: f32,
    distance: f32,
}

impl PullGesture {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(1.0),
            distance: 0.0,
        }
    }

    /// Feeds one frame of vertical pointer movement while the pointer is held over the list.
    ///
    /// A pull only starts while the list is scrolled to the top; once started it
    /// follows the pointer until release.
    pub fn drag(&mut self, delta_y: f32, at_top: bool) {
        if self.distance <= 0.0 && (!at_top || delta_y <= 0.0) {
            return;
        }
        self.distance = (self.distance + delta_y).clamp(0.0, self.threshold * MAX_OVERPULL);
    }

    /// Ends the gesture. Returns true when it was released past the threshold.
    pub fn release(&mut self) -> bool {
        let armed = self.is_armed();
        self.distance = 0.0;
        armed
    }

    pub fn is_armed(&self) -> bool {
        self.distance >= self.threshold
    }

    pub fn is_active(&self) -> bool {
        self.distance > 0.0
    }

    pub fn progress(&self) -> f32 {
        (self.distance / self.threshold).min(1.0)
    }
}

#[cfg(test)]
#[path = "tests/pull_tests.rs"]
mod tests;
