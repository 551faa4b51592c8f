// core/easing.rs
//
// Pure easing curves mapping normalized time to normalized progress.
// No dependencies on keyframes or sections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Easing curve attached to a keyframe.
///
/// Serialized by its camelCase tag (`"linear"`, `"easeInOutCubic"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    /// Constant velocity (no easing).
    Linear,
    /// Slow start.
    EaseInQuad,
    /// Slow end.
    EaseOutQuad,
    /// Slow start and end.
    EaseInOutQuad,
    /// Stronger slow start.
    EaseInCubic,
    /// Stronger slow end.
    EaseOutCubic,
    /// Stronger slow start and end. Default for new keyframes.
    #[default]
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    /// Exponential easing (dramatic).
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    /// Pulls back below 0 before moving forward.
    EaseInBack,
    /// Overshoots past 1 then settles.
    EaseOutBack,
    EaseInOutBack,
}

/// Overshoot amount shared by the Back family.
const BACK_S: f64 = 1.70158;
/// Overshoot amount for the in-out Back curve.
const BACK_S_IN_OUT: f64 = BACK_S * 1.525;

impl Easing {
    /// Every curve, in declaration order.
    pub const ALL: [Easing; 16] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuart,
        Easing::EaseOutQuart,
        Easing::EaseInOutQuart,
        Easing::EaseInExpo,
        Easing::EaseOutExpo,
        Easing::EaseInOutExpo,
        Easing::EaseInBack,
        Easing::EaseOutBack,
        Easing::EaseInOutBack,
    ];

    /// Apply the easing function to a normalized time value `t`.
    ///
    /// `t` is clamped to [0, 1] first. The result is in [0, 1] for every
    /// curve except the Back family, which may undershoot or overshoot.
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,

            // Quadratic
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }

            // Cubic
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
                }
            }

            // Quartic
            Easing::EaseInQuart => t * t * t * t,
            Easing::EaseOutQuart => {
                let u = t - 1.0;
                1.0 - u * u * u * u
            }
            Easing::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    let u = t - 1.0;
                    1.0 - 8.0 * u * u * u * u
                }
            }

            // Exponential. The endpoints are pinned because 2^-10 is not 0.
            Easing::EaseInExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2.0_f64.powf(10.0 * (t - 1.0))
                }
            }
            Easing::EaseOutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f64.powf(-10.0 * t)
                }
            }
            Easing::EaseInOutExpo => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    2.0_f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }

            // Back (overshoot)
            Easing::EaseInBack => t * t * ((BACK_S + 1.0) * t - BACK_S),
            Easing::EaseOutBack => {
                let u = t - 1.0;
                u * u * ((BACK_S + 1.0) * u + BACK_S) + 1.0
            }
            Easing::EaseInOutBack => {
                const S: f64 = BACK_S_IN_OUT;
                if t < 0.5 {
                    let u = t * 2.0;
                    u * u * ((S + 1.0) * u - S) / 2.0
                } else {
                    let u = t * 2.0 - 2.0;
                    (u * u * ((S + 1.0) * u + S) + 2.0) / 2.0
                }
            }
        }
    }

    /// Whether the curve never decreases across [0, 1].
    /// Only the Back family dips or overshoots.
    pub fn is_monotonic(self) -> bool {
        !matches!(
            self,
            Easing::EaseInBack | Easing::EaseOutBack | Easing::EaseInOutBack
        )
    }

    /// The serialized tag for this curve.
    pub fn as_str(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseInQuad => "easeInQuad",
            Easing::EaseOutQuad => "easeOutQuad",
            Easing::EaseInOutQuad => "easeInOutQuad",
            Easing::EaseInCubic => "easeInCubic",
            Easing::EaseOutCubic => "easeOutCubic",
            Easing::EaseInOutCubic => "easeInOutCubic",
            Easing::EaseInQuart => "easeInQuart",
            Easing::EaseOutQuart => "easeOutQuart",
            Easing::EaseInOutQuart => "easeInOutQuart",
            Easing::EaseInExpo => "easeInExpo",
            Easing::EaseOutExpo => "easeOutExpo",
            Easing::EaseInOutExpo => "easeInOutExpo",
            Easing::EaseInBack => "easeInBack",
            Easing::EaseOutBack => "easeOutBack",
            Easing::EaseInOutBack => "easeInOutBack",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Easing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| Error::UnknownEasing(s.to_string()))
    }
}

/// Apply `easing` to `t`, clamping `t` to [0, 1] first.
#[inline]
pub fn apply_easing(t: f64, easing: Easing) -> f64 {
    easing.apply(t)
}
