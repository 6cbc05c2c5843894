use super::{Surface, TextAlign, TextBaseline};

/// Discards every call
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {}
    fn begin_path(&mut self) {}
    fn close_path(&mut self) {}
    fn set_stroke_style(&mut self, _color: &str) {}
    fn set_line_width(&mut self, _width: f64) {}
    fn arc(&mut self, _x: f64, _y: f64, _radius: f64, _start: f64, _end: f64) -> Result<(), String> {
        Ok(())
    }
    fn stroke(&mut self) {}
    fn set_font(&mut self, _font: &str) {}
    fn set_text_align(&mut self, _align: TextAlign) {}
    fn set_text_baseline(&mut self, _baseline: TextBaseline) {}
    fn fill_text(&mut self, _text: &str, _x: f64, _y: f64) -> Result<(), String> {
        Ok(())
    }
}
