//! Segment configuration loaded from data files

#![cfg(feature = "serde")]

use vexel_animation::{RepeatCount, RepeatMode, SegmentConfig, TotalDuration};

#[test]
fn test_toml_config_fills_defaults() {
    let config: SegmentConfig = toml::from_str(
        r#"
        start_delay = 250
        repeat_mode = "reverse"
        repeat_count = { count = 3 }
        "#,
    )
    .unwrap();
    assert_eq!(config.start_delay, 250);
    assert_eq!(config.duration, 300);
    assert_eq!(config.repeat_count, RepeatCount::Count(3));
    assert_eq!(config.repeat_mode, RepeatMode::Reverse);
}

#[test]
fn test_json_infinite_repeat() {
    let config: SegmentConfig =
        serde_json::from_str(r#"{ "duration": 1000, "repeat_count": "infinite" }"#).unwrap();
    assert_eq!(config.duration, 1_000);
    assert_eq!(config.repeat_count, RepeatCount::Infinite);
    assert_eq!(config.repeat_mode, RepeatMode::Restart);
}

#[test]
fn test_config_drives_segment() {
    let config: SegmentConfig =
        serde_json::from_str(r#"{ "start_delay": 100, "duration": 200 }"#).unwrap();
    let segment = vexel_animation::AnimationSegment::of_float(0.0, 1.0, config).unwrap();
    assert_eq!(segment.total_duration(), TotalDuration::Finite(300));
}

#[test]
fn test_color_is_transparent_u32() {
    let color: vexel_paint::Color = serde_json::from_str("4278190335").unwrap();
    assert_eq!(color, vexel_paint::Color::BLUE);
}
