use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::{Duration, Instant},
};

use fluid_slider::{
    DimensionValue, DrawCommand, Dp, DragEvent, FluidSlider, FluidSliderArgs, GesturePhase,
    Position, SliderError, SliderLabel, SliderTheme, TextAlign,
};
use parking_lot::Mutex;

#[derive(Default)]
struct Calls {
    start: Vec<f64>,
    change: Vec<f64>,
    end: Vec<f64>,
}

fn slider_with_log(value: f64, width: f32) -> Result<(FluidSlider, Arc<Mutex<Calls>>), SliderError> {
    let calls = Arc::new(Mutex::new(Calls::default()));
    let (a, b, c) = (calls.clone(), calls.clone(), calls.clone());
    let args = FluidSliderArgs::default()
        .min(0.0)
        .max(100.0)
        .value(value)
        .on_change(move |v| a.lock().change.push(v))
        .on_change_start(move |v| b.lock().start.push(v))
        .on_change_end(move |v| c.lock().end.push(v));
    let mut slider = FluidSlider::new(args)?;
    slider.measure(DimensionValue::Fixed(Dp(width)));
    Ok((slider, calls))
}

fn start(slider: &mut FluidSlider, x: f32) {
    slider.handle_event(DragEvent::Down);
    slider.handle_event(DragEvent::Start {
        local_position: Position::new(Dp(x), Dp(30.0)),
    });
}

fn drag(slider: &mut FluidSlider, dx: f32) {
    slider.handle_event(DragEvent::Update {
        primary_delta: Dp(dx),
    });
}

/// Plays the pop animation to its end.
fn settle(slider: &mut FluidSlider, t0: Instant) {
    slider.tick(t0);
    slider.tick(t0 + Duration::from_millis(400));
}

#[test]
fn test_far_left_and_far_right_reach_the_bounds() -> Result<(), SliderError> {
    let (mut slider, calls) = slider_with_log(40.0, 300.0)?;
    start(&mut slider, 120.0);
    drag(&mut slider, -1000.0);
    slider.handle_event(DragEvent::End);

    start(&mut slider, 120.0);
    drag(&mut slider, 1000.0);
    slider.handle_event(DragEvent::End);

    let calls = calls.lock();
    assert_eq!(calls.end, [0.0, 100.0]);
    assert_eq!(calls.start, [40.0, 40.0]);
    Ok(())
}

#[test]
fn test_change_fires_once_per_distinct_value() -> Result<(), SliderError> {
    let (mut slider, calls) = slider_with_log(0.0, 200.0)?;
    start(&mut slider, 0.0);
    for dx in [20.0, 0.0, 0.0, 20.0, -400.0, -10.0, 0.0] {
        drag(&mut slider, dx);
    }
    slider.handle_event(DragEvent::End);

    let calls = calls.lock();
    assert_eq!(calls.change, [10.0, 20.0, 0.0]);
    for pair in calls.change.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    Ok(())
}

#[test]
fn test_cancel_matches_end() -> Result<(), SliderError> {
    let finish_with = |event: DragEvent| -> Result<(Vec<f64>, GesturePhase, f64), SliderError> {
        let (mut slider, calls) = slider_with_log(10.0, 300.0)?;
        start(&mut slider, 60.0);
        drag(&mut slider, 45.0);
        slider.handle_event(event);
        let end = calls.lock().end.clone();
        Ok((end, slider.phase(), slider.running_position()))
    };

    let ended = finish_with(DragEvent::End)?;
    let cancelled = finish_with(DragEvent::Cancel)?;
    assert_eq!(ended, cancelled);
    assert_eq!(ended.0.len(), 1);
    assert!((ended.0[0] - 35.0).abs() < 1e-9);
    assert_eq!(ended.1, GesturePhase::Idle);
    assert_eq!(ended.2, 0.0);
    Ok(())
}

#[test]
fn test_disabled_slider_is_inert_and_muted() -> Result<(), SliderError> {
    let calls = Arc::new(Mutex::new(Calls::default()));
    let (b, c) = (calls.clone(), calls.clone());
    let args = FluidSliderArgs::default()
        .max(100.0)
        .value(30.0)
        .on_change_start(move |v| b.lock().start.push(v))
        .on_change_end(move |v| c.lock().end.push(v));
    let mut slider = FluidSlider::new(args)?;
    slider.measure(DimensionValue::Fixed(Dp(300.0)));

    let t0 = Instant::now();
    start(&mut slider, 100.0);
    drag(&mut slider, 50.0);
    slider.handle_event(DragEvent::End);
    settle(&mut slider, t0);

    let calls = calls.lock();
    assert!(calls.start.is_empty() && calls.change.is_empty() && calls.end.is_empty());
    assert_eq!(slider.animation_progress(), 0.0);

    let theme = SliderTheme::default();
    let scene = slider.render();
    let DrawCommand::RoundedRect { color, .. } = &scene.commands()[0] else {
        panic!("track must be drawn first");
    };
    assert_eq!(*color, theme.disabled_track);
    Ok(())
}

#[test]
fn test_splash_is_drawn_only_while_popped() -> Result<(), SliderError> {
    let (mut slider, _calls) = slider_with_log(50.0, 300.0)?;
    let has_path = |slider: &FluidSlider| {
        slider
            .render()
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Path { .. }))
    };
    assert!(!has_path(&slider));

    let t0 = Instant::now();
    slider.handle_event(DragEvent::Down);
    slider.tick(t0);
    slider.tick(t0 + Duration::from_millis(100));
    assert!(!slider.is_popped());
    assert!(!has_path(&slider));

    slider.tick(t0 + Duration::from_millis(400));
    assert!(slider.is_popped());
    assert!(has_path(&slider));

    // Same inputs, same path.
    let rebuilds = slider.splash_rebuild_count();
    slider.render();
    slider.render();
    assert_eq!(slider.splash_rebuild_count(), rebuilds);

    let t1 = t0 + Duration::from_millis(500);
    slider.handle_event(DragEvent::Up);
    slider.tick(t1);
    slider.tick(t1 + Duration::from_millis(400));
    assert!(!has_path(&slider));
    Ok(())
}

#[test]
fn test_scene_layers_are_ordered_back_to_front() -> Result<(), SliderError> {
    let args = FluidSliderArgs::default()
        .min(0.0)
        .max(100.0)
        .value(50.0)
        .on_change(|_| {})
        .end(SliderLabel::custom(|bounds| {
            vec![DrawCommand::Text {
                text: "MAX".to_string(),
                bounds,
                align: TextAlign::End,
                style: SliderTheme::default().label_text,
            }]
        }));
    let mut slider = FluidSlider::new(args)?;
    slider.measure(DimensionValue::Fixed(Dp(300.0)));

    let t0 = Instant::now();
    slider.handle_event(DragEvent::Down);
    settle(&mut slider, t0);

    let scene = slider.render();
    let kinds: Vec<&str> = scene
        .commands()
        .iter()
        .map(|c| match c {
            DrawCommand::RoundedRect { .. } => "track",
            DrawCommand::Circle { .. } => "circle",
            DrawCommand::Path { .. } => "splash",
            DrawCommand::Text { .. } => "text",
        })
        .collect();
    assert_eq!(
        kinds,
        ["track", "text", "text", "splash", "circle", "circle", "text"]
    );

    let texts: Vec<&str> = scene
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, ["0", "MAX", "50"]);

    let DrawCommand::Circle { radius: outer, .. } = scene.commands()[4] else {
        panic!("outer thumb circle expected");
    };
    let DrawCommand::Circle { radius: inner, .. } = scene.commands()[5] else {
        panic!("inner thumb circle expected");
    };
    assert_eq!(outer, Dp(30.0));
    assert_eq!(inner, Dp(22.5));
    Ok(())
}

#[test]
fn test_thumb_rests_at_value_position() -> Result<(), SliderError> {
    let (mut slider, _calls) = slider_with_log(50.0, 300.0)?;
    let size = slider.measure(DimensionValue::Fixed(Dp(300.0)));
    assert_eq!(size.height, Dp(60.0));

    let layout = slider.layout();
    assert_eq!(layout.resting.left, Dp(116.0));

    let unbounded = slider.measure(DimensionValue::UNBOUNDED);
    assert_eq!(unbounded.width, Dp(200.0));
    Ok(())
}

#[test]
fn test_listeners_hear_animation_and_arg_changes() -> Result<(), SliderError> {
    let (mut slider, _calls) = slider_with_log(50.0, 300.0)?;
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    slider.add_listener(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let t0 = Instant::now();
    slider.handle_event(DragEvent::Down);
    settle(&mut slider, t0);
    let after_animation = hits.load(Ordering::SeqCst);
    assert!(after_animation >= 2);

    let args = slider.args().clone().value(75.0);
    slider.set_args(args)?;
    assert_eq!(hits.load(Ordering::SeqCst), after_animation + 1);

    let bad = slider.args().clone().value(175.0);
    assert!(matches!(
        slider.set_args(bad),
        Err(SliderError::ValueOutOfRange { .. })
    ));
    assert_eq!(slider.args().value, 75.0);
    Ok(())
}

#[test]
fn test_custom_formatter_and_decimal_flag() -> Result<(), SliderError> {
    let args = FluidSliderArgs::default()
        .max(10.0)
        .value(2.5)
        .show_decimal_value(true)
        .start("lo")
        .map_value_to_string(|v| format!("{v:.2} kg"));
    let slider = FluidSlider::new(args)?;
    let texts: Vec<String> = slider
        .render()
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, ["lo", "10.0", "2.50 kg"]);
    Ok(())
}

#[test]
fn test_far_right_on_fractional_range_echoes_through_set_args() -> Result<(), SliderError> {
    let reported = Arc::new(Mutex::new(Vec::new()));
    let sink = reported.clone();
    let args = FluidSliderArgs::default()
        .min(-0.3)
        .max(0.1)
        .value(0.0)
        .on_change(move |v| sink.lock().push(v));
    let mut slider = FluidSlider::new(args)?;
    slider.measure(DimensionValue::Fixed(Dp(300.0)));

    start(&mut slider, 150.0);
    drag(&mut slider, 1000.0);

    let last = reported.lock().last().copied();
    assert_eq!(last, Some(0.1));

    // The host stores the reported value and hands it back.
    let echoed = slider.args().clone().value(0.1);
    slider.set_args(echoed)?;
    slider.handle_event(DragEvent::End);
    assert_eq!(slider.args().value, 0.1);
    Ok(())
}

#[test]
fn test_forward_pop_bounces() -> Result<(), SliderError> {
    let (mut slider, _calls) = slider_with_log(50.0, 300.0)?;
    let t0 = Instant::now();
    slider.handle_event(DragEvent::Down);
    slider.tick(t0);
    slider.tick(t0 + Duration::from_millis(200));

    assert!((slider.animation_progress() - 0.5).abs() < 1e-6);
    assert!((slider.eased_progress() - 0.765625).abs() < 1e-4);
    Ok(())
}
