/// Peak darkness of the night overlay, reached mid-cycle.
pub const MIDNIGHT_OPACITY: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DaySample {
    /// Position inside the current cycle, `[0, 1)`.
    pub phase: f32,
    /// Completed cycles.
    pub day: u64,
    pub night_opacity: f32,
    pub sun_angle_deg: f32,
}

/// Tick clock for the day-night cycle. One cycle is also the fruit
/// respawn delay.
#[derive(Clone, Debug)]
pub struct DayCycle {
    ticks: u64,
    cycle_ticks: u64,
}

impl DayCycle {
    pub fn new(cycle_ticks: u64) -> Self {
        Self {
            ticks: 0,
            cycle_ticks: cycle_ticks.max(1),
        }
    }

    #[inline]
    pub fn now(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn cycle_ticks(&self) -> u64 {
        self.cycle_ticks
    }

    pub fn advance(&mut self) -> DaySample {
        self.ticks += 1;
        self.sample()
    }

    pub fn sample(&self) -> DaySample {
        let day = self.ticks / self.cycle_ticks;
        let phase = (self.ticks % self.cycle_ticks) as f32 / self.cycle_ticks as f32;
        // Back-and-forth ramp to midnight, eased with a cubic.
        let t = 1.0 - (2.0 * phase - 1.0).abs();
        let eased = t * t * (3.0 - 2.0 * t);
        DaySample {
            phase,
            day,
            night_opacity: eased * MIDNIGHT_OPACITY,
            sun_angle_deg: phase * 360.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_peaks_mid_cycle() {
        let mut c = DayCycle::new(1800);
        assert_eq!(c.sample().night_opacity, 0.0);
        for _ in 0..900 {
            c.advance();
        }
        let s = c.sample();
        assert!((s.night_opacity - MIDNIGHT_OPACITY).abs() < 1e-6);
        assert!((s.sun_angle_deg - 180.0).abs() < 1e-3);
        for _ in 0..900 {
            c.advance();
        }
        let s = c.sample();
        assert_eq!(s.day, 1);
        assert_eq!(s.phase, 0.0);
        assert_eq!(s.night_opacity, 0.0);
    }

    #[test]
    fn opacity_stays_in_range() {
        let mut c = DayCycle::new(97);
        for _ in 0..500 {
            let s = c.advance();
            assert!((0.0..=MIDNIGHT_OPACITY).contains(&s.night_opacity));
            assert!((0.0..360.0).contains(&s.sun_angle_deg));
        }
    }
}
