use crate::{
    CallbackWith, Dp, Rect,
    scene::{DrawCommand, Scene, TextAlign},
};

use super::{
    INNER_THUMB_SCALE, LABEL_INSET, SliderLabel, SliderLayout, SliderPalette, TRACK_CORNER_RADIUS,
    splash::{SplashKey, SplashPainter},
};

/// Formats the value shown inside the thumb.
///
/// A custom formatter wins; otherwise one decimal place when `show_decimal`
/// is set, else the value truncated towards zero.
pub fn format_value(
    value: f64,
    formatter: Option<&CallbackWith<f64, String>>,
    show_decimal: bool,
) -> String {
    if let Some(formatter) = formatter {
        return formatter.call(value);
    }
    format_number(value, show_decimal)
}

pub(super) fn format_number(value: f64, show_decimal: bool) -> String {
    if show_decimal {
        format!("{value:.1}")
    } else {
        // `as` saturates on overflow and maps NaN to zero.
        (value.trunc() as i64).to_string()
    }
}

pub(super) struct FrameInput<'a> {
    pub layout: SliderLayout,
    pub palette: SliderPalette,
    pub value_text: String,
    pub min_text: String,
    pub max_text: String,
    pub start_label: Option<&'a SliderLabel>,
    pub end_label: Option<&'a SliderLabel>,
    pub eased_progress: f32,
    pub raw_progress: f32,
}

pub(super) fn compose(input: FrameInput<'_>, splash: &mut SplashPainter) -> Scene {
    let mut scene = Scene::new();
    let layout = input.layout;
    let palette = input.palette;

    scene.push(DrawCommand::RoundedRect {
        rect: Rect::from_ltwh(Dp::ZERO, Dp::ZERO, layout.width, layout.height),
        radius: TRACK_CORNER_RADIUS,
        color: palette.track,
    });

    let half = layout.width * 0.5;
    let label_width = Dp((half - LABEL_INSET).0.max(0.0));
    let start_bounds = Rect::from_ltwh(LABEL_INSET, Dp::ZERO, label_width, layout.height);
    let end_bounds = Rect::from_ltwh(half, Dp::ZERO, label_width, layout.height);
    push_label(
        &mut scene,
        input.start_label,
        input.min_text,
        start_bounds,
        TextAlign::Start,
        &palette,
    );
    push_label(
        &mut scene,
        input.end_label,
        input.max_text,
        end_bounds,
        TextAlign::End,
        &palette,
    );

    let thumb = layout.thumb_bounds(input.eased_progress);
    let key = SplashKey {
        progress: input.raw_progress,
        color: palette.track,
        padding: thumb.size.width - layout.thumb_diameter,
    };
    if let Some(path) = splash.paint(key, thumb.size) {
        scene.push(DrawCommand::Path {
            path,
            origin: thumb.origin,
            color: palette.track,
        });
    }

    let center = thumb.center();
    let radius = layout.thumb_diameter * 0.5;
    scene.push(DrawCommand::Circle {
        center,
        radius,
        color: palette.track,
    });
    scene.push(DrawCommand::Circle {
        center,
        radius: radius * INNER_THUMB_SCALE,
        color: palette.thumb,
    });
    scene.push(DrawCommand::Text {
        text: input.value_text,
        bounds: thumb,
        align: TextAlign::Center,
        style: palette.value_text,
    });

    scene
}

fn push_label(
    scene: &mut Scene,
    label: Option<&SliderLabel>,
    default_text: String,
    bounds: Rect,
    align: TextAlign,
    palette: &SliderPalette,
) {
    match label {
        Some(SliderLabel::Custom(content)) => scene.extend(content.call(bounds)),
        Some(SliderLabel::Text(text)) => scene.push(DrawCommand::Text {
            text: text.clone(),
            bounds,
            align,
            style: palette.label_text,
        }),
        None => scene.push(DrawCommand::Text {
            text: default_text,
            bounds,
            align,
            style: palette.label_text,
        }),
    }
}
