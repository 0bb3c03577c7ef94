//! Counter Animation
//!
//! Step math for the landing page statistics: values climb linearly from
//! zero to their targets over a fixed number of ticks. Timers are the
//! caller's concern.

use serde::{Deserialize, Serialize};

/// Animation timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterTiming {
    /// Delay before the first tick
    pub start_delay_ms: u32,
    /// Total animation time
    pub duration_ms: u32,
    pub steps: u32,
}

impl Default for CounterTiming {
    fn default() -> Self {
        Self {
            start_delay_ms: 500,
            duration_ms: 2000,
            steps: 60,
        }
    }
}

impl CounterTiming {
    /// Interval between ticks
    pub fn step_ms(&self) -> u32 {
        self.duration_ms / self.steps.max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAnimation<const N: usize> {
    targets: [u64; N],
    steps: u32,
    step: u32,
}

impl<const N: usize> CounterAnimation<N> {
    pub fn new(targets: [u64; N], timing: &CounterTiming) -> Self {
        Self {
            targets,
            steps: timing.steps.max(1),
            step: 0,
        }
    }

    /// Values at the current step
    pub fn values(&self) -> [u64; N] {
        if self.is_finished() {
            return self.targets;
        }
        let (step, steps) = (u128::from(self.step), u128::from(self.steps));
        // step < steps, so the quotient fits back into u64
        self.targets.map(|target| (u128::from(target) * step / steps) as u64)
    }

    /// Advance one step and return the new values
    pub fn tick(&mut self) -> [u64; N] {
        if !self.is_finished() {
            self.step += 1;
        }
        self.values()
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_and_ends_on_targets() {
        let mut anim = CounterAnimation::new([2847, 2134, 87], &CounterTiming::default());
        assert_eq!(anim.values(), [0, 0, 0]);

        let mut last = anim.values();
        let mut ticks = 0;
        while !anim.is_finished() {
            let next = anim.tick();
            assert!(next.iter().zip(last.iter()).all(|(n, l)| n >= l));
            last = next;
            ticks += 1;
        }
        assert_eq!(ticks, 60);
        assert_eq!(last, [2847, 2134, 87]);
        assert_eq!(anim.tick(), [2847, 2134, 87]);
    }

    #[test]
    fn test_values_round_down() {
        let timing = CounterTiming { steps: 60, ..Default::default() };
        let mut anim = CounterAnimation::new([87], &timing);
        anim.tick();
        // 87 * 1 / 60
        assert_eq!(anim.values(), [1]);
        for _ in 0..29 {
            anim.tick();
        }
        assert_eq!(anim.values(), [43]);
    }

    #[test]
    fn test_large_targets_do_not_overflow() {
        let targets = [u64::MAX / 2, u64::MAX];
        let mut anim = CounterAnimation::new(targets, &CounterTiming::default());
        let mut last = anim.values();
        while !anim.is_finished() {
            let next = anim.tick();
            assert!(next[0] >= last[0] && next[1] >= last[1]);
            last = next;
        }
        assert_eq!(last, targets);
    }

    #[test]
    fn test_step_interval() {
        assert_eq!(CounterTiming::default().step_ms(), 33);
    }
}
