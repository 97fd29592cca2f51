use std::collections::HashSet;
use std::f64::consts::{FRAC_PI_2, TAU};

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// European wheel layout: the 37 pockets in physical order around the rim.
pub const WHEEL_SEQUENCE: [u8; 37] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33, 1, 20,
    14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

static RED_NUMBERS: Lazy<HashSet<u8>> = Lazy::new(|| {
    [
        1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
    ]
    .into_iter()
    .collect()
});

/// Fixed pointer anchor: 12 o'clock in canvas coordinates.
pub const POINTER_ANGLE: f64 = -FRAC_PI_2;

// Animation constants shared with the frontend
pub const SPIN_DURATION_MS: f64 = 5000.0;
pub const MIN_FULL_SPINS: f64 = 5.0; // fixed full rotations for a consistent spin feel

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PocketColor {
    Red,
    Black,
    Green,
}

/// Classifies a pocket number. Total over all inputs: 0 is the single
/// green pocket, the fixed red set is red, everything else is black.
pub fn color_of(number: u8) -> PocketColor {
    if number == 0 {
        PocketColor::Green
    } else if RED_NUMBERS.contains(&number) {
        PocketColor::Red
    } else {
        PocketColor::Black
    }
}

/// Outcome of one completed spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinResult {
    pub number: u8,
    pub color: PocketColor,
}

impl SpinResult {
    pub fn new(number: u8) -> Self {
        Self {
            number,
            color: color_of(number),
        }
    }
}

/// Ease-out cubic: fast start, velocity decaying to zero at the end.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Normalizes an angle into [0, 2π).
pub fn normalize_angle(angle: f64) -> f64 {
    ((angle % TAU) + TAU) % TAU
}

/// An ordered, fixed set of pockets laid out in equal angular segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wheel {
    pockets: Vec<u8>,
}

impl Wheel {
    /// Builds a wheel from an explicit pocket order. At least one pocket
    /// is required.
    pub fn new(pockets: Vec<u8>) -> Option<Self> {
        if pockets.is_empty() {
            None
        } else {
            Some(Self { pockets })
        }
    }

    pub fn european() -> Self {
        Self {
            pockets: WHEEL_SEQUENCE.to_vec(),
        }
    }

    pub fn pockets(&self) -> &[u8] {
        &self.pockets
    }

    pub fn len(&self) -> usize {
        self.pockets.len()
    }

    pub fn segment_angle(&self) -> f64 {
        TAU / self.pockets.len() as f64
    }

    pub fn index_of(&self, number: u8) -> Option<usize> {
        self.pockets.iter().position(|&p| p == number)
    }

    /// Rotation (not yet normalized) that puts segment `index`'s center
    /// under the pointer.
    pub fn target_rotation(&self, index: usize) -> f64 {
        let segment = self.segment_angle();
        POINTER_ANGLE - (index as f64 * segment + segment / 2.0)
    }

    /// Reads off the pocket currently under the pointer for a given wheel
    /// rotation.
    pub fn pocket_under_pointer(&self, rotation: f64) -> u8 {
        let segment = self.segment_angle();
        let mut index = (normalize_angle(POINTER_ANGLE - rotation) / segment) as usize;
        // floating point can land exactly on the upper bound
        if index >= self.pockets.len() {
            index = 0;
        }
        self.pockets[index]
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SpinSession {
    start: f64,
    end: f64,
    started_at_ms: f64,
    target_index: usize,
}

/// Drives a single wheel animation at a time: `spin` opens a session,
/// `frame` advances it against a monotonic clock and reports the result
/// exactly once when the session completes.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelSpinner {
    wheel: Wheel,
    rotation: f64,
    session: Option<SpinSession>,
}

impl WheelSpinner {
    pub fn new(wheel: Wheel) -> Self {
        Self {
            wheel,
            rotation: 0.0,
            session: None,
        }
    }

    pub fn european() -> Self {
        Self::new(Wheel::european())
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    /// Current rendered rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.session.is_some()
    }

    /// Requests one animation cycle ending on `target` (uniform random
    /// pocket when `None`). Returns whether a session was started: a spin
    /// already in flight is left untouched, and a target outside the
    /// wheel is rejected rather than animated to the wrong segment.
    pub fn spin(&mut self, target: Option<u8>, now_ms: f64) -> bool {
        if self.session.is_some() {
            return false;
        }

        let target_index = match target {
            Some(number) => match self.wheel.index_of(number) {
                Some(index) => index,
                None => {
                    log::warn!("ignoring spin request for pocket {number} not on the wheel");
                    return false;
                }
            },
            None => rand::thread_rng().gen_range(0..self.wheel.len()),
        };

        let start = self.rotation;
        // Always the same direction: a fixed number of full revolutions
        // plus the shortest remaining arc to the target segment's center.
        let distance = normalize_angle(self.wheel.target_rotation(target_index) - start);
        let end = start + TAU * MIN_FULL_SPINS + distance;

        self.session = Some(SpinSession {
            start,
            end,
            started_at_ms: now_ms,
            target_index,
        });
        true
    }

    /// Advances the in-flight session to `now_ms`. Returns the result on
    /// the frame that completes the session; the terminal rotation is the
    /// exact precomputed angle, not the last eased sample.
    pub fn frame(&mut self, now_ms: f64) -> Option<SpinResult> {
        let session = self.session.as_ref()?;
        let t = ((now_ms - session.started_at_ms) / SPIN_DURATION_MS).clamp(0.0, 1.0);

        if t < 1.0 {
            self.rotation = session.start + (session.end - session.start) * ease_out_cubic(t);
            return None;
        }

        self.rotation = session.end;
        let number = self.wheel.pockets[session.target_index];
        self.session = None;
        Some(SpinResult::new(number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors() {
        assert_eq!(color_of(0), PocketColor::Green);
        assert_eq!(color_of(32), PocketColor::Red);
        assert_eq!(color_of(15), PocketColor::Black);
        assert_eq!(color_of(17), PocketColor::Black);
        assert_eq!(color_of(19), PocketColor::Red);
        let reds = WHEEL_SEQUENCE
            .iter()
            .filter(|&&n| color_of(n) == PocketColor::Red)
            .count();
        assert_eq!(reds, 18);
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!((normalize_angle(-FRAC_PI_2) - (TAU - FRAC_PI_2)).abs() < 1e-12);
        assert!((normalize_angle(3.0 * TAU + 1.0) - 1.0).abs() < 1e-9);
        for i in -10..10 {
            let a = normalize_angle(i as f64 * 1.37);
            assert!((0.0..TAU).contains(&a));
        }
    }

    #[test]
    fn test_easing_endpoints_and_monotonicity() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        let mut previous = 0.0;
        for step in 1..=1000 {
            let eased = ease_out_cubic(step as f64 / 1000.0);
            assert!(eased >= previous);
            previous = eased;
        }
    }

    #[test]
    fn test_every_target_lands_under_pointer() {
        for &number in WHEEL_SEQUENCE.iter() {
            let mut spinner = WheelSpinner::european();
            assert!(spinner.spin(Some(number), 0.0));
            let result = spinner.frame(SPIN_DURATION_MS).expect("spin completes");
            assert_eq!(result.number, number);
            assert_eq!(result.color, color_of(number));
            assert_eq!(spinner.wheel().pocket_under_pointer(spinner.rotation()), number);
        }
    }

    #[test]
    fn test_scenario_target_17() {
        let mut spinner = WheelSpinner::european();
        assert_eq!(spinner.wheel().len(), 37);
        assert!(spinner.spin(Some(17), 1000.0));

        // still in flight just before the fixed duration elapses
        assert!(spinner.frame(1000.0 + SPIN_DURATION_MS - 1.0).is_none());
        assert!(spinner.is_spinning());

        let result = spinner.frame(1000.0 + SPIN_DURATION_MS).expect("completes on time");
        assert_eq!(result, SpinResult::new(17));
        assert_eq!(spinner.wheel().pocket_under_pointer(spinner.rotation()), 17);

        // completion is reported exactly once
        assert!(!spinner.is_spinning());
        assert!(spinner.frame(1000.0 + SPIN_DURATION_MS + 500.0).is_none());
    }

    #[test]
    fn test_second_spin_while_in_flight_is_ignored() {
        let mut spinner = WheelSpinner::european();
        assert!(spinner.spin(Some(17), 0.0));
        assert!(!spinner.spin(Some(5), 100.0));
        assert!(!spinner.spin(None, 200.0));

        // original target and duration are unaffected
        assert!(spinner.frame(SPIN_DURATION_MS - 1.0).is_none());
        let result = spinner.frame(SPIN_DURATION_MS).expect("first spin completes");
        assert_eq!(result.number, 17);
    }

    #[test]
    fn test_unknown_target_rejected_without_animation() {
        let mut spinner = WheelSpinner::european();
        let resting = spinner.rotation();
        assert!(!spinner.spin(Some(99), 0.0));
        assert!(!spinner.is_spinning());
        assert!(spinner.frame(100.0).is_none());
        assert_eq!(spinner.rotation(), resting);
    }

    #[test]
    fn test_minimum_full_revolutions() {
        let mut spinner = WheelSpinner::european();
        assert!(spinner.spin(Some(26), 0.0));
        let start = 0.0;
        // drive to completion and measure total travel
        let _ = spinner.frame(SPIN_DURATION_MS);
        let travelled = spinner.rotation() - start;
        assert!(travelled >= TAU * MIN_FULL_SPINS);
        assert!(travelled < TAU * (MIN_FULL_SPINS + 1.0));
    }

    #[test]
    fn test_rotation_is_monotonic_during_spin() {
        let mut spinner = WheelSpinner::european();
        assert!(spinner.spin(Some(3), 0.0));
        let mut previous = spinner.rotation();
        for ms in (0..=5000).step_by(50) {
            let _ = spinner.frame(ms as f64);
            assert!(spinner.rotation() >= previous);
            previous = spinner.rotation();
        }
    }

    #[test]
    fn test_random_target_still_aligns() {
        let mut spinner = WheelSpinner::european();
        assert!(spinner.spin(None, 0.0));
        let result = spinner.frame(SPIN_DURATION_MS).expect("completes");
        assert!(WHEEL_SEQUENCE.contains(&result.number));
        assert_eq!(
            spinner.wheel().pocket_under_pointer(spinner.rotation()),
            result.number
        );
    }

    #[test]
    fn test_single_pocket_wheel_completes() {
        let wheel = Wheel::new(vec![7]).expect("non-empty layout");
        let mut spinner = WheelSpinner::new(wheel);
        assert!(spinner.spin(None, 0.0));
        let result = spinner.frame(SPIN_DURATION_MS).expect("completes");
        assert_eq!(result.number, 7);
        assert_eq!(spinner.wheel().pocket_under_pointer(spinner.rotation()), 7);
    }

    #[test]
    fn test_empty_layout_rejected() {
        assert!(Wheel::new(Vec::new()).is_none());
    }

    #[test]
    fn test_back_to_back_spins_share_resting_angle() {
        let mut spinner = WheelSpinner::european();
        assert!(spinner.spin(Some(17), 0.0));
        let _ = spinner.frame(SPIN_DURATION_MS);
        let resting = spinner.rotation();

        assert!(spinner.spin(Some(0), 10_000.0));
        // second session starts from the first one's exact resting angle
        let _ = spinner.frame(10_000.0);
        assert_eq!(spinner.rotation(), resting);
        let result = spinner.frame(10_000.0 + SPIN_DURATION_MS).expect("completes");
        assert_eq!(result.number, 0);
        assert_eq!(result.color, PocketColor::Green);
    }
}
