//! End-to-end tests for property timelines
//!
//! These tests verify that:
//! - Segments resolve correctly at any play time
//! - Repeats and reversals map play time to the right fraction
//! - Listeners fire only when the clamped play time moves
//! - Every value kind animates through a property

use std::sync::{Arc, Mutex};
use vexel_animation::{
    AnimatableProperty, AnimationError, AnimationSegment, Easing, Keyframe, RepeatCount,
    RepeatMode, SegmentConfig, SegmentList, Timeline, TotalDuration,
};
use vexel_paint::{Color, PathBuilder, PathData};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("vexel_animation=trace")
        .try_init();
}

fn float(start: f32, end: f32, start_delay: u64, duration: u64) -> AnimationSegment<f32> {
    AnimationSegment::of_float(
        start,
        end,
        SegmentConfig {
            start_delay,
            duration,
            ..Default::default()
        },
    )
    .unwrap()
}

#[test]
fn test_linear_segment_is_proportional_to_elapsed_time() {
    init_tracing();
    let mut property = AnimatableProperty::new(vec![float(0.0, 1_000.0, 0, 1_000)]).unwrap();
    for t in [0_i64, 125, 250, 500, 875, 1_000] {
        property.set_current_play_time(t);
        assert_eq!(*property.animated_value(), t as f32, "at t={t}");
    }
}

#[test]
fn test_set_play_time_is_idempotent() {
    init_tracing();
    let mut property = AnimatableProperty::new(vec![float(0.0, 1.0, 0, 100)]).unwrap();
    let fired = Arc::new(Mutex::new(Vec::new()));
    let log = fired.clone();
    property.add_listener(move |p| log.lock().unwrap().push(p.current_play_time()));

    property.set_current_play_time(30);
    property.set_current_play_time(30);
    // Clamps to the same value as the previous call
    property.set_current_play_time(500);
    property.set_current_play_time(100);

    assert_eq!(*fired.lock().unwrap(), vec![30, 100]);
}

#[test]
fn test_listeners_fire_in_registration_order() {
    let mut property = AnimatableProperty::new(vec![float(0.0, 1.0, 0, 100)]).unwrap();
    let order = Arc::new(Mutex::new(Vec::new()));
    for name in ["first", "second", "third"] {
        let order = order.clone();
        property.add_listener(move |_| order.lock().unwrap().push(name));
    }
    property.set_current_play_time(10);
    assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
}

#[test]
fn test_clamp_law() {
    let mut property = AnimatableProperty::new(vec![float(0.0, 10.0, 50, 100)]).unwrap();
    assert_eq!(property.total_duration(), TotalDuration::Finite(150));

    property.set_current_play_time(-1_000);
    assert_eq!(property.current_play_time(), 0);
    property.set_current_play_time(10_000);
    assert_eq!(property.current_play_time(), 150);
    assert_eq!(*property.animated_value(), 10.0);
}

fn repeating(mode: RepeatMode) -> AnimatableProperty<f32> {
    AnimatableProperty::new(vec![AnimationSegment::of_float(
        0.0,
        100.0,
        SegmentConfig {
            start_delay: 40,
            duration: 200,
            repeat_count: RepeatCount::Count(2),
            repeat_mode: mode,
            ..Default::default()
        },
    )
    .unwrap()])
    .unwrap()
}

#[test]
fn test_restart_law() {
    let mut property = repeating(RepeatMode::Restart);
    property.set_current_play_time(40 + 100);
    let first = property.current_fraction();
    property.set_current_play_time(40 + 300);
    assert_eq!(property.current_fraction(), first);
    assert_eq!(first, 0.5);
    assert_eq!(*property.animated_value(), 50.0);
}

#[test]
fn test_reverse_law() {
    let mut property = repeating(RepeatMode::Reverse);
    property.set_current_play_time(40 + 250);
    assert_eq!(property.current_fraction(), 0.75);
    assert_eq!(*property.animated_value(), 75.0);

    // Third cycle plays forward again
    property.set_current_play_time(40 + 450);
    assert_eq!(property.current_fraction(), 0.25);
}

#[test]
fn test_multi_segment_selection() {
    let a = float(0.0, 1.0, 0, 100);
    let b = float(10.0, 20.0, 100, 100);
    let mut property = AnimatableProperty::new(vec![b, a]).unwrap();

    property.set_current_play_time(50);
    assert_eq!(property.current_segment().start_delay(), 0);
    assert_eq!(*property.animated_value(), 0.5);

    property.set_current_play_time(150);
    assert_eq!(property.current_segment().start_delay(), 100);
    assert_eq!(*property.animated_value(), 15.0);

    // The later segment wins on the shared boundary
    property.set_current_play_time(100);
    assert_eq!(property.current_segment().start_delay(), 100);
    assert_eq!(*property.animated_value(), 10.0);
}

#[test]
fn test_color_property_uses_gamma_correct_midpoint() {
    let mut property = AnimatableProperty::new(vec![AnimationSegment::of_argb(
        Color::BLACK,
        Color::WHITE,
        SegmentConfig {
            duration: 100,
            ..Default::default()
        },
    )
    .unwrap()])
    .unwrap();
    property.set_current_play_time(50);
    assert_eq!(*property.animated_value(), Color::from_argb(0xFFBA_BABA));
}

#[test]
fn test_zero_duration_segment_holds_end_value() {
    let mut property = AnimatableProperty::new(vec![
        float(0.0, 0.0, 0, 0),
        float(3.0, 8.0, 200, 0),
    ])
    .unwrap();
    for t in [200_i64, 201, 5_000] {
        property.set_current_play_time(t);
        assert_eq!(*property.animated_value(), 8.0);
    }
}

#[test]
fn test_infinite_segment_makes_property_infinite() {
    let spin = AnimationSegment::of_float(
        0.0,
        360.0,
        SegmentConfig {
            duration: 1_000,
            repeat_count: RepeatCount::Infinite,
            ..Default::default()
        },
    )
    .unwrap();
    let mut property = AnimatableProperty::new(vec![float(0.0, 1.0, 0, 50), spin]).unwrap();
    assert_eq!(property.total_duration(), TotalDuration::Infinite);

    property.set_current_play_time(10_250);
    assert_eq!(property.current_play_time(), 10_250);
    assert_eq!(*property.animated_value(), 90.0);
}

#[test]
fn test_overshoot_easing_extrapolates() {
    let mut property = AnimatableProperty::new(vec![AnimationSegment::of_float(
        0.0,
        100.0,
        SegmentConfig {
            duration: 1_000,
            easing: Easing::Overshoot(2.0),
            ..Default::default()
        },
    )
    .unwrap()])
    .unwrap();
    let peak = (0..=1_000)
        .step_by(10)
        .map(|t| {
            property.set_current_play_time(t);
            *property.animated_value()
        })
        .fold(f32::MIN, f32::max);
    assert!(peak > 100.0);
    assert_eq!(*property.animated_value(), 100.0);
}

#[test]
fn test_float_array_property() {
    let mut property = AnimatableProperty::new(vec![AnimationSegment::of_float_array(
        vec![4.0, 8.0],
        vec![8.0, 16.0],
        SegmentConfig {
            duration: 100,
            ..Default::default()
        },
    )
    .unwrap()])
    .unwrap();
    property.set_current_play_time(25);
    assert_eq!(property.animated_value(), &vec![5.0, 10.0]);
}

#[test]
fn test_float_array_length_mismatch_is_a_construction_error() {
    let err =
        AnimationSegment::of_float_array(vec![1.0, 2.0, 3.0], vec![1.0], SegmentConfig::default())
            .unwrap_err();
    assert_eq!(
        err,
        AnimationError::ArrayLengthMismatch {
            expected: 3,
            actual: 1
        }
    );
}

fn diamond(radius: f32) -> PathData {
    PathBuilder::new()
        .move_to(0.0, -radius)
        .line_to(radius, 0.0)
        .line_to(0.0, radius)
        .line_to(-radius, 0.0)
        .close()
        .build()
}

#[test]
fn test_path_morph_property() {
    let mut property = AnimatableProperty::new(vec![AnimationSegment::of_keyframes(
        vec![
            Keyframe::new(0.0, diamond(10.0)),
            Keyframe::new(0.5, diamond(30.0)),
            Keyframe::new(1.0, diamond(20.0)),
        ],
        SegmentConfig {
            duration: 400,
            ..Default::default()
        },
    )
    .unwrap()])
    .unwrap();

    property.set_current_play_time(100);
    assert_eq!(property.animated_value(), &diamond(20.0));
    property.set_current_play_time(300);
    assert_eq!(property.animated_value(), &diamond(25.0));
}

#[test]
fn test_incompatible_shapes_fail_at_construction() {
    let triangle = PathBuilder::new()
        .move_to(0.0, 0.0)
        .line_to(10.0, 0.0)
        .line_to(5.0, 10.0)
        .close()
        .build();
    let result = AnimationSegment::of_path_morph(diamond(10.0), triangle, SegmentConfig::default());
    assert!(matches!(
        result,
        Err(AnimationError::ShapeIncompatible { index: 1, .. })
    ));
}

#[test]
fn test_scene_node_style_property() {
    // A node's fill starts red, turns blue after a delay, then pulses alpha
    let mut fill = SegmentList::new(Color::RED);
    fill.push(
        AnimationSegment::of_argb(
            Color::RED,
            Color::BLUE,
            SegmentConfig {
                start_delay: 500,
                duration: 100,
                ..Default::default()
            },
        )
        .unwrap(),
    );
    fill.push(
        AnimationSegment::of_argb(
            Color::BLUE,
            Color::BLUE.with_alpha(0),
            SegmentConfig {
                start_delay: 1_000,
                duration: 100,
                repeat_count: RepeatCount::Count(1),
                repeat_mode: RepeatMode::Reverse,
                ..Default::default()
            },
        )
        .unwrap(),
    );

    let mut timeline = Timeline::new();
    let fill = timeline.register(fill.build());
    assert_eq!(timeline.total_duration(), TotalDuration::Finite(1_200));

    let mut sample = |t: i64| {
        timeline.set_current_play_time(t);
        *timeline.animated_value(fill).unwrap()
    };
    assert_eq!(sample(0), Color::RED);
    assert_eq!(sample(250), Color::RED);
    assert_eq!(sample(550), Color::from_argb(0xFFBA_00BA));
    assert_eq!(sample(800), Color::BLUE);
    assert_eq!(sample(1_100), Color::BLUE.with_alpha(0));
    assert_eq!(sample(1_200), Color::BLUE);
}
