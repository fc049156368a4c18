// Counts tick time down and reports when it runs out.

/// Repeating countdown over tick time.
///
/// When the countdown reaches or crosses zero it reports a single expiry and
/// starts over from the full `duration`. Overshoot is dropped: a huge `dt`
/// still yields exactly one expiry and a full reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    pub duration: f32,
    pub remaining: f32,
}

impl Countdown {
    pub fn new(duration: f32) -> Self {
        Countdown {
            duration,
            remaining: duration,
        }
    }

    /// Subtract `dt`; returns true on the tick the countdown expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if dt <= 0.0 {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.reset();
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.remaining = self.duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_once_and_resets_without_carry() {
        let mut countdown = Countdown::new(8.3);
        assert!(!countdown.tick(4.15));
        assert!(countdown.tick(4.15));
        assert_eq!(countdown.remaining, 8.3);
    }

    #[test]
    fn overshoot_fires_only_once() {
        let mut countdown = Countdown::new(1.0);
        assert!(countdown.tick(25.0));
        assert_eq!(countdown.remaining, 1.0);
        assert!(!countdown.tick(0.5));
    }

    #[test]
    fn zero_dt_keeps_remaining() {
        let mut countdown = Countdown::new(2.0);
        countdown.tick(0.5);
        assert!(!countdown.tick(0.0));
        assert_eq!(countdown.remaining, 1.5);
    }
}
