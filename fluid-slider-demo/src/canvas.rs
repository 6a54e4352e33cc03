use fluid_slider::{
    Canvas, Color, Dp, Position, Rect, TextAlign, TextStyle, scene::LyonPath,
};
use tracing::debug;

/// Canvas that writes every draw call to the log instead of a surface.
#[derive(Default)]
pub struct LogCanvas {
    pub draw_calls: usize,
}

fn hex(color: Color) -> String {
    let [r, g, b, a] = color.to_array().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
}

impl Canvas for LogCanvas {
    fn draw_rounded_rect(&mut self, rect: Rect, radius: Dp, color: Color) {
        self.draw_calls += 1;
        debug!(
            x = rect.left().0,
            y = rect.top().0,
            w = rect.size.width.0,
            h = rect.size.height.0,
            radius = radius.0,
            color = %hex(color),
            "rounded rect"
        );
    }

    fn draw_circle(&mut self, center: Position, radius: Dp, color: Color) {
        self.draw_calls += 1;
        debug!(x = center.x.0, y = center.y.0, radius = radius.0, color = %hex(color), "circle");
    }

    fn fill_path(&mut self, path: &LyonPath, origin: Position, color: Color) {
        self.draw_calls += 1;
        debug!(
            x = origin.x.0,
            y = origin.y.0,
            events = path.iter().count(),
            color = %hex(color),
            "splash path"
        );
    }

    fn draw_text(&mut self, text: &str, bounds: Rect, align: TextAlign, style: &TextStyle) {
        self.draw_calls += 1;
        debug!(
            text,
            x = bounds.left().0,
            ?align,
            size = style.font_size.0,
            "text"
        );
    }
}
