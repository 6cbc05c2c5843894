use web_sys::CanvasRenderingContext2d;

use super::{Surface, TextAlign, TextBaseline};

fn js_error(op: &str, err: wasm_bindgen::JsValue) -> String {
    format!("{} failed: {:?}", op, err)
}

impl Surface for CanvasRenderingContext2d {
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn close_path(&mut self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), String> {
        CanvasRenderingContext2d::arc(self, x, y, radius, start, end).map_err(|e| js_error("arc", e))
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn set_text_align(&mut self, align: TextAlign) {
        CanvasRenderingContext2d::set_text_align(self, align.as_css());
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        CanvasRenderingContext2d::set_text_baseline(self, baseline.as_css());
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), String> {
        CanvasRenderingContext2d::fill_text(self, text, x, y).map_err(|e| js_error("fill_text", e))
    }
}
