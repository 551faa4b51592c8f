// core/interpolate.rs
//
// Keyframe interpolation: (sorted keyframes, scroll) -> scene state.
//
// Stateless. The caller owns ordering: keyframes must already be sorted by
// ascending `scroll`. Malformed input degrades to a defined fallback rather
// than an error, because this runs once per rendered frame.

use serde::{Deserialize, Serialize};

use super::easing::apply_easing;
use super::math::clamp;
use crate::components::camera::CameraConfig;
use crate::components::keyframe::Keyframe;
use crate::components::transform::ModelTransform;

/// Model pose and camera framing to display at one scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneState {
    pub model: ModelTransform,
    pub camera: CameraConfig,
}

impl SceneState {
    /// The state stored on a keyframe, verbatim.
    pub fn of(keyframe: &Keyframe) -> Self {
        Self {
            model: keyframe.model,
            camera: keyframe.camera,
        }
    }
}

/// Pair of consecutive keyframes surrounding a scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub prev: usize,
    pub next: usize,
    /// Linear progress from `prev` to `next`, in [0, 1].
    pub t: f64,
    /// `t` after the destination keyframe's easing curve.
    pub eased: f64,
    /// `prev` is a hold keyframe: its state is pinned for the whole bracket.
    pub held: bool,
}

/// Where a scroll position falls on the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelinePosition {
    /// Exactly one keyframe's state applies: a single-keyframe timeline, or
    /// scroll at or beyond either end.
    Pinned(usize),
    /// Between two keyframes.
    Between(Bracket),
}

/// Locate `scroll` on the timeline. Returns `None` for an empty list.
pub fn locate(keyframes: &[Keyframe], scroll: f64) -> Option<TimelinePosition> {
    let (first, last) = match keyframes {
        [] => return None,
        [_] => return Some(TimelinePosition::Pinned(0)),
        [first, .., last] => (first, last),
    };

    let scroll = clamp(scroll, 0.0, 1.0);

    // No extrapolation past either end.
    if scroll <= first.scroll {
        return Some(TimelinePosition::Pinned(0));
    }
    if scroll >= last.scroll {
        return Some(TimelinePosition::Pinned(keyframes.len() - 1));
    }

    // Unsorted input can miss every bracket; fall back to the first pair.
    let prev = keyframes
        .windows(2)
        .position(|pair| scroll >= pair[0].scroll && scroll <= pair[1].scroll)
        .unwrap_or(0);
    let next = prev + 1;
    let (a, b) = (&keyframes[prev], &keyframes[next]);

    // Zero or negative range (duplicate or out-of-order scrolls) snaps to prev.
    let range = b.scroll - a.scroll;
    let t = if range > 0.0 { (scroll - a.scroll) / range } else { 0.0 };

    Some(TimelinePosition::Between(Bracket {
        prev,
        next,
        t,
        eased: apply_easing(t, b.ease_from),
        held: a.hold,
    }))
}

/// The keyframe pair blending at `scroll`, if any. `None` when the timeline
/// is empty or `scroll` is pinned to a single keyframe.
pub fn active_bracket(keyframes: &[Keyframe], scroll: f64) -> Option<Bracket> {
    match locate(keyframes, scroll)? {
        TimelinePosition::Between(bracket) => Some(bracket),
        TimelinePosition::Pinned(_) => None,
    }
}

/// Interpolated scene state at `scroll`, or `None` when there are no keyframes.
///
/// The destination keyframe's `ease_from` shapes the blend. `camera.look_at`
/// is never blended: it always comes from the earlier keyframe of the bracket.
pub fn interpolate_at_scroll(keyframes: &[Keyframe], scroll: f64) -> Option<SceneState> {
    let state = match locate(keyframes, scroll)? {
        TimelinePosition::Pinned(i) => SceneState::of(&keyframes[i]),
        TimelinePosition::Between(bracket) => {
            let prev = &keyframes[bracket.prev];
            if bracket.held {
                SceneState::of(prev)
            } else {
                let next = &keyframes[bracket.next];
                SceneState {
                    model: prev.model.lerp(&next.model, bracket.eased),
                    camera: prev.camera.lerp(&next.camera, bracket.eased),
                }
            }
        }
    };
    Some(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::camera::LookAt;
    use crate::core::easing::Easing;
    use glam::{DVec2, DVec3};

    const EPS: f64 = 1e-9;

    fn kf(id: &str, scroll: f64) -> Keyframe {
        Keyframe::new(id, scroll, "sec-1").with_ease_from(Easing::Linear)
    }

    fn kf_a() -> Keyframe {
        kf("a", 0.0)
            .with_model(
                ModelTransform::new()
                    .with_position(DVec3::ZERO)
                    .with_scale(1.0)
                    .with_opacity(1.0),
            )
            .with_camera(CameraConfig::new().with_elevation(0.0))
    }

    fn kf_b() -> Keyframe {
        kf("b", 1.0)
            .with_model(
                ModelTransform::new()
                    .with_position(DVec3::new(100.0, 100.0, 10.0))
                    .with_rotation(DVec3::new(90.0, 180.0, 45.0))
                    .with_scale(2.0)
                    .with_opacity(0.5),
            )
            .with_camera(
                CameraConfig::new()
                    .with_orbit(180.0)
                    .with_elevation(45.0)
                    .with_distance(10.0)
                    .with_fov(75.0)
                    .with_offset(DVec2::new(1.0, 2.0)),
            )
    }

    #[test]
    fn empty_timeline_has_no_state() {
        assert_eq!(interpolate_at_scroll(&[], 0.5), None);
        assert_eq!(locate(&[], 0.5), None);
    }

    #[test]
    fn single_keyframe_is_returned_verbatim() {
        let a = kf_a();
        for scroll in [0.0, 0.3, 0.5, 1.0] {
            let state = interpolate_at_scroll(std::slice::from_ref(&a), scroll).unwrap();
            assert_eq!(state, SceneState::of(&a));
        }
    }

    #[test]
    fn before_first_and_after_last_are_pinned() {
        let kfs = [
            kf("a", 0.3).with_model(ModelTransform::new().with_scale(3.0)),
            kf("b", 0.8).with_model(ModelTransform::new().with_scale(5.0)),
        ];
        assert_eq!(interpolate_at_scroll(&kfs, 0.1).unwrap().model, kfs[0].model);
        assert_eq!(interpolate_at_scroll(&kfs, 0.9).unwrap().model, kfs[1].model);
        assert_eq!(interpolate_at_scroll(&kfs, -4.0).unwrap().model, kfs[0].model);
        assert_eq!(interpolate_at_scroll(&kfs, 7.0).unwrap().model, kfs[1].model);
    }

    #[test]
    fn linear_blend_at_midpoint() {
        let s = interpolate_at_scroll(&[kf_a(), kf_b()], 0.5).unwrap();
        assert!((s.model.position.x - 50.0).abs() < EPS);
        assert!((s.model.position.y - 50.0).abs() < EPS);
        assert!((s.model.rotation.y - 90.0).abs() < EPS);
        assert!((s.model.scale - 1.5).abs() < EPS);
        assert!((s.model.opacity - 0.75).abs() < EPS);
        assert!((s.camera.orbit - 90.0).abs() < EPS);
        assert!((s.camera.elevation - 22.5).abs() < EPS);
        assert!((s.camera.distance - 7.5).abs() < EPS);
        assert!((s.camera.fov - 62.5).abs() < EPS);
        assert!((s.camera.offset.x - 0.5).abs() < EPS);
        assert!((s.camera.offset.y - 1.0).abs() < EPS);
    }

    #[test]
    fn linear_blend_at_quarter() {
        let s = interpolate_at_scroll(&[kf_a(), kf_b()], 0.25).unwrap();
        assert!((s.model.position.x - 25.0).abs() < EPS);
        assert!((s.model.scale - 1.25).abs() < EPS);
    }

    #[test]
    fn hold_pins_previous_state() {
        let held = kf_a().held();
        let s = interpolate_at_scroll(&[held.clone(), kf_b()], 0.5).unwrap();
        assert_eq!(s, SceneState::of(&held));
    }

    #[test]
    fn hold_on_destination_does_not_pin() {
        let s = interpolate_at_scroll(&[kf_a(), kf_b().held()], 0.5).unwrap();
        assert!((s.model.position.x - 50.0).abs() < EPS);
    }

    #[test]
    fn destination_easing_shapes_blend() {
        // easeOutQuad(0.5) = 0.75
        let b = kf_b().with_ease_from(Easing::EaseOutQuad);
        let s = interpolate_at_scroll(&[kf_a(), b], 0.5).unwrap();
        assert!((s.model.position.x - 75.0).abs() < EPS);

        // The origin's curve is irrelevant.
        let a = kf_a().with_ease_from(Easing::EaseInQuart);
        let s = interpolate_at_scroll(&[a, kf_b()], 0.5).unwrap();
        assert!((s.model.position.x - 50.0).abs() < EPS);
    }

    #[test]
    fn back_easing_overshoots_keyframe_range() {
        let b = kf_b().with_ease_from(Easing::EaseOutBack);
        let s = interpolate_at_scroll(&[kf_a(), b], 0.9).unwrap();
        assert!(s.model.position.x > 100.0);
    }

    #[test]
    fn finds_bracket_among_many() {
        let mid = kf("mid", 0.5).with_model(
            ModelTransform::new()
                .with_position(DVec3::new(50.0, 50.0, 5.0))
                .with_scale(1.5),
        );
        // between a (0) and mid (0.5): local t = 0.5
        let s = interpolate_at_scroll(&[kf_a(), mid, kf_b()], 0.25).unwrap();
        assert!((s.model.position.x - 25.0).abs() < EPS);
        assert!((s.model.scale - 1.25).abs() < EPS);

        match locate(&[kf_a(), kf("mid", 0.5), kf_b()], 0.75) {
            Some(TimelinePosition::Between(b)) => {
                assert_eq!((b.prev, b.next), (1, 2));
                assert!((b.t - 0.5).abs() < EPS);
            }
            other => panic!("expected a bracket, got {:?}", other),
        }
    }

    #[test]
    fn look_at_comes_from_prev_only() {
        let a = kf("a", 0.0).with_camera(CameraConfig::new().with_look_at(LookAt::TrackModel));
        let b = kf("b", 1.0).with_camera(
            CameraConfig::new().with_look_at(LookAt::Point(DVec3::new(1.0, 2.0, 3.0))),
        );
        for scroll in [0.01, 0.5, 0.99] {
            let s = interpolate_at_scroll(&[a.clone(), b.clone()], scroll).unwrap();
            assert_eq!(s.camera.look_at, LookAt::TrackModel);
        }

        let s = interpolate_at_scroll(&[b.clone(), kf("c", 1.0)], 0.5).unwrap();
        assert_eq!(s.camera.look_at, b.camera.look_at);
    }

    #[test]
    fn zero_range_bracket_snaps_to_prev() {
        let kfs = [
            kf("a", 0.0),
            kf("b", 0.5).with_model(ModelTransform::new().with_scale(2.0)),
            kf("c", 0.5).with_model(ModelTransform::new().with_scale(9.0)),
            kf("d", 1.0),
        ];
        let s = interpolate_at_scroll(&kfs, 0.5).unwrap();
        // First matching bracket is (a, b) at its end; b's scale wins exactly.
        assert!((s.model.scale - 2.0).abs() < EPS);

        let dup = [kf("a", 0.5), kf("b", 0.5)];
        assert!(interpolate_at_scroll(&dup, 0.5).is_some());
    }

    #[test]
    fn unsorted_input_degrades_without_panicking() {
        let kfs = [
            kf("a", 0.2),
            kf("b", 0.9).with_model(ModelTransform::new().with_scale(4.0)),
            kf("c", 0.1).with_model(ModelTransform::new().with_scale(7.0)),
            kf("d", 0.6),
        ];
        let s = interpolate_at_scroll(&kfs, 0.3).unwrap();
        // (a, b) is the first pair that contains 0.3
        assert!((s.model.scale - (1.0 + 3.0 / 7.0)).abs() < EPS);
    }

    #[test]
    fn no_matching_bracket_falls_back_to_first_pair() {
        let first = kf("a", 0.0).with_model(ModelTransform::new().with_scale(3.0));
        let kfs = [first.clone(), kf("b", f64::NAN), kf("c", 1.0)];
        let s = interpolate_at_scroll(&kfs, 0.5).unwrap();
        assert_eq!(s, SceneState::of(&first));
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let kfs = [kf_a(), kf_b().with_ease_from(Easing::EaseInOutExpo)];
        let first = interpolate_at_scroll(&kfs, 0.377);
        for _ in 0..10 {
            assert_eq!(interpolate_at_scroll(&kfs, 0.377), first);
        }
    }

    #[test]
    fn active_bracket_reports_blending_pair() {
        let kfs = [kf("a", 0.0), kf("b", 0.5), kf("c", 1.0)];
        let bracket = active_bracket(&kfs, 0.75).unwrap();
        assert_eq!((bracket.prev, bracket.next), (1, 2));
        assert!((bracket.t - 0.5).abs() < EPS);
        assert!((bracket.eased - 0.5).abs() < EPS);
        assert!(!bracket.held);

        assert_eq!(active_bracket(&kfs, 0.0), None);
        assert_eq!(active_bracket(&kfs, 1.0), None);
        assert_eq!(active_bracket(&[], 0.5), None);
    }
}
