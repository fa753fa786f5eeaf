use crate::range::TemperatureRange;

/// Timed linear interpolation of a temperature towards a target.
///
/// The tween does not own a clock; the host passes its elapsed time in seconds to
/// [`TemperatureTween::sample`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureTween {
    pub from: f32,
    pub to: f32,
    pub started_at: f32,
    pub duration: f32,
}

impl TemperatureTween {
    pub fn new(from: f32, to: f32, started_at: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn is_finished(&self, now: f32) -> bool {
        now - self.started_at >= self.duration
    }

    /// Temperature at `now`. Returns `to` exactly once the duration has elapsed.
    pub fn sample(&self, now: f32) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        let t = ((now - self.started_at) / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    /// Pull both endpoints into `range`, keeping the timing.
    pub fn clamp_to(&mut self, range: &TemperatureRange) {
        self.from = range.clamp(self.from);
        self.to = range.clamp(self.to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10.0, 0.0)]
    #[case(10.5, 2.5)]
    #[case(11.0, 5.0)]
    #[case(11.5, 7.5)]
    fn test_linear_progress(#[case] now: f32, #[case] expected: f32) {
        let tween = TemperatureTween::new(0.0, 10.0, 10.0, 2.0);
        assert!((tween.sample(now) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_settles_exactly_on_target() {
        let tween = TemperatureTween::new(-3.3, 17.123_457, 0.0, 2.0);
        assert!(tween.is_finished(2.0));
        assert_eq!(tween.sample(2.0), 17.123_457);
        assert_eq!(tween.sample(50.0), 17.123_457);
    }

    #[test]
    fn test_zero_duration_settles_immediately() {
        let tween = TemperatureTween::new(1.0, 9.0, 4.0, 0.0);
        assert!(tween.is_finished(4.0));
        assert_eq!(tween.sample(4.0), 9.0);
    }

    #[test]
    fn test_sample_before_start_holds_start_value() {
        let tween = TemperatureTween::new(5.0, 15.0, 3.0, 1.0);
        assert_eq!(tween.sample(2.0), 5.0);
    }

    #[test]
    fn test_clamp_to_narrower_range() {
        let mut tween = TemperatureTween::new(25.0, 35.0, 1.0, 2.0);
        tween.clamp_to(&TemperatureRange { min: 0.0, max: 20.0 });

        assert_eq!(tween.from, 20.0);
        assert_eq!(tween.to, 20.0);
        assert_eq!(tween.started_at, 1.0);
        assert_eq!(tween.sample(10.0), 20.0);
    }
}
