/// On/off switch driven by a level signal (a key or button being down).
///
/// A press flips the state and disarms the latch; it re-arms only once the
/// control is seen released. Holding the control therefore toggles once.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ToggleLatch {
    on: bool,
    armed: bool
}

impl ToggleLatch {
    pub fn new(on: bool) -> Self {
        Self {
            on,
            armed: true
        }
    }

    /// Feeds the current level of the control. Returns true when the state
    /// flipped.
    pub fn update(&mut self, pressed: bool) -> bool {
        if pressed && self.armed {
            self.armed = false;
            self.on = !self.on;
            true
        } else {
            if !pressed {
                self.armed = true;
            }
            false
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Default for ToggleLatch {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holding_toggles_once() {
        let mut latch = ToggleLatch::default();

        assert!(latch.update(true));
        for _ in 0..10 {
            assert!(!latch.update(true));
        }
        assert!(latch.is_on());
    }

    #[test]
    fn release_rearms() {
        let mut latch = ToggleLatch::default();

        latch.update(true);
        latch.update(false);
        assert!(latch.update(true));
        assert!(!latch.is_on());
    }

    #[test]
    fn idle_frames_change_nothing() {
        let mut latch = ToggleLatch::new(true);
        for _ in 0..5 {
            assert!(!latch.update(false));
        }
        assert!(latch.is_on());
    }
}
