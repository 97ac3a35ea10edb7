// Host-side tests for the scroll timeline, shape cues and scroll progress.

use aether_core::*;
use glam::Vec3;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn progress_is_normalised_and_clamped() {
    assert_eq!(scroll_progress(0.0, 5000.0, 1000.0), Some(0.0));
    assert_eq!(scroll_progress(2000.0, 5000.0, 1000.0), Some(0.5));
    assert_eq!(scroll_progress(4000.0, 5000.0, 1000.0), Some(1.0));
    assert_eq!(scroll_progress(4500.0, 5000.0, 1000.0), Some(1.0));
    assert_eq!(scroll_progress(-20.0, 5000.0, 1000.0), Some(0.0));
}

#[test]
fn no_overflow_means_no_progress() {
    assert_eq!(scroll_progress(0.0, 800.0, 800.0), None);
    assert_eq!(scroll_progress(0.0, 600.0, 800.0), None);
    assert_eq!(scroll_progress(f32::NAN, 5000.0, 800.0), None);
    let sample = ScrollSample::new(0.0, 0.0, 0.0);
    assert_eq!(sample.progress(), None);
}

#[test]
fn viewport_center_is_offset_plus_half_height() {
    let sample = ScrollSample::new(300.0, 5000.0, 1000.0);
    assert_eq!(sample.viewport_center(), 800.0);
}

#[test]
fn timeline_hits_keyframes_at_phase_boundaries() {
    let timeline = ScrollTimeline::default();
    let keys = timeline.keyframes().to_vec();
    assert_eq!(timeline.phase_count(), 3);
    assert_eq!(timeline.sample(0.0), keys[0]);
    let end = timeline.sample(1.0);
    assert!(close(end.camera_eye, keys[3].camera_eye));
    assert!(close(end.light_color, keys[3].light_color));
    assert!(close(end.field_rotation, keys[3].field_rotation));
    let s1 = timeline.sample(1.0 / 3.0);
    assert!(close(s1.camera_eye, keys[1].camera_eye));
    let s2 = timeline.sample(2.0 / 3.0);
    assert!(close(s2.camera_eye, keys[2].camera_eye));
    assert!(close(s2.field_rotation, keys[2].field_rotation));
}

#[test]
fn timeline_is_linear_within_a_phase() {
    let timeline = ScrollTimeline::default();
    let keys = timeline.keyframes().to_vec();
    let mid = timeline.sample(1.0 / 6.0);
    let expected = keys[0].lerp(&keys[1], 0.5);
    assert!(close(mid.camera_eye, expected.camera_eye));
    assert!(close(mid.light_color, expected.light_color));
    let (phase, local) = timeline.phase_at(0.5);
    assert_eq!(phase, 1);
    assert!((local - 0.5).abs() < 1e-5);
}

#[test]
fn timeline_sampling_is_reversible() {
    let timeline = ScrollTimeline::default();
    let forward: Vec<TimelineState> = (0..=100).map(|i| timeline.sample(i as f32 / 100.0)).collect();
    let backward: Vec<TimelineState> = (0..=100)
        .rev()
        .map(|i| timeline.sample(i as f32 / 100.0))
        .collect();
    for (i, state) in forward.iter().enumerate() {
        assert_eq!(*state, backward[100 - i]);
    }
}

#[test]
fn timeline_needs_two_keyframes() {
    let one = vec![ScrollTimeline::default().keyframes()[0]];
    assert_eq!(
        ScrollTimeline::new(one).err(),
        Some(ConfigError::TimelineTooShort(1))
    );
    let two = ScrollTimeline::default().keyframes()[..2].to_vec();
    let t = ScrollTimeline::new(two).unwrap();
    assert_eq!(t.phase_count(), 1);
}

#[test]
fn cues_fire_once_per_forward_crossing() {
    let mut cues = CueTracker::default();
    assert!(cues.advance(0.0).is_empty());
    assert_eq!(cues.advance(0.1).as_slice(), &[ShapeId::Torus]);
    assert!(cues.advance(0.2).is_empty());
    assert!(cues.advance(0.5).is_empty());
    assert_eq!(cues.advance(0.7).as_slice(), &[ShapeId::Plane]);
    assert!(cues.advance(1.0).is_empty());
}

#[test]
fn cues_fire_on_backward_crossing_too() {
    let mut cues = CueTracker::default();
    cues.advance(0.9);
    assert_eq!(cues.advance(0.5).as_slice(), &[ShapeId::Torus]);
    assert!(cues.advance(0.3).is_empty());
    assert_eq!(cues.advance(0.0).as_slice(), &[ShapeId::Sphere]);
    assert!(cues.advance(0.0).is_empty());
}

#[test]
fn a_jump_reports_every_crossed_cue_in_order() {
    let mut cues = CueTracker::default();
    assert_eq!(
        cues.advance(0.95).as_slice(),
        &[ShapeId::Torus, ShapeId::Plane]
    );
    assert_eq!(
        cues.advance(0.0).as_slice(),
        &[ShapeId::Torus, ShapeId::Sphere]
    );
}

#[test]
fn shape_at_agrees_with_tracker() {
    let mut cues = CueTracker::default();
    let mut shape = ShapeId::Sphere;
    for p in [0.0, 0.2, 0.8, 0.4, 0.0, 1.0, 0.66, 0.67] {
        if let Some(&last) = cues.advance(p).last() {
            shape = last;
        }
        assert_eq!(shape, cues.shape_at(p, ShapeId::Sphere), "at {}", p);
    }
}

#[test]
fn custom_cues_are_sorted() {
    let cues = CueTracker::new(vec![
        ShapeCue {
            at: 0.8,
            before: ShapeId::Torus,
            after: ShapeId::Wave,
        },
        ShapeCue {
            at: 0.2,
            before: ShapeId::Sphere,
            after: ShapeId::Torus,
        },
    ]);
    assert_eq!(cues.cues()[0].at, 0.2);
    assert_eq!(cues.shape_at(0.9, ShapeId::Sphere), ShapeId::Wave);
    assert_eq!(cues.shape_at(0.1, ShapeId::Sphere), ShapeId::Sphere);
}
