//! Glyph outline extraction: `ttf-parser` outline events -> `lyon` path.

use lyon::math::point;
use lyon::path::Path;

/// Collects `ttf-parser` outline callbacks into a lyon path builder, scaling
/// from font units to world units and offsetting by the pen position as it
/// goes.
///
/// Font outlines are Y-up, which matches world space; no flip is needed.
pub struct OutlineSink {
    builder: lyon::path::Builder,
    scale: f32,
    pen_x: f32,
    pen_y: f32,
    contour_open: bool,
}

impl OutlineSink {
    pub fn new(scale: f32, pen_x: f32, pen_y: f32) -> Self {
        Self {
            builder: Path::builder(),
            scale,
            pen_x,
            pen_y,
            contour_open: false,
        }
    }

    fn map(&self, x: f32, y: f32) -> lyon::math::Point {
        point(x * self.scale + self.pen_x, y * self.scale + self.pen_y)
    }

    pub fn finish(mut self) -> Path {
        // Fonts close every contour, but guard against a trailing open one.
        if self.contour_open {
            self.builder.close();
        }
        self.builder.build()
    }
}

impl ttf_parser::OutlineBuilder for OutlineSink {
    fn move_to(&mut self, x: f32, y: f32) {
        if self.contour_open {
            self.builder.close();
        }
        self.builder.begin(self.map(x, y));
        self.contour_open = true;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.map(x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder
            .quadratic_bezier_to(self.map(x1, y1), self.map(x, y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder
            .cubic_bezier_to(self.map(x1, y1), self.map(x2, y2), self.map(x, y));
    }

    fn close(&mut self) {
        if self.contour_open {
            self.builder.close();
            self.contour_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttf_parser::OutlineBuilder;

    #[test]
    fn sink_scales_and_offsets_points() {
        let mut sink = OutlineSink::new(0.001, 10.0, 20.0);
        sink.move_to(1000.0, 0.0);
        sink.line_to(2000.0, 1000.0);
        sink.close();
        let path = sink.finish();

        let mut points = Vec::new();
        for event in path.iter() {
            if let lyon::path::Event::Begin { at } = event {
                points.push(at);
            }
        }
        assert_eq!(points.len(), 1);
        assert!((points[0].x - 11.0).abs() < 1e-6);
        assert!((points[0].y - 20.0).abs() < 1e-6);
    }

    #[test]
    fn unterminated_contour_is_closed_on_finish() {
        let mut sink = OutlineSink::new(1.0, 0.0, 0.0);
        sink.move_to(0.0, 0.0);
        sink.line_to(1.0, 0.0);
        sink.line_to(1.0, 1.0);
        // No close() call.
        let path = sink.finish();
        assert!(path.iter().count() > 0);
    }

    #[test]
    fn multiple_contours_survive() {
        let mut sink = OutlineSink::new(1.0, 0.0, 0.0);
        for offset in [0.0, 10.0] {
            sink.move_to(offset, 0.0);
            sink.line_to(offset + 1.0, 0.0);
            sink.line_to(offset + 1.0, 1.0);
            sink.close();
        }
        let path = sink.finish();
        let begins = path
            .iter()
            .filter(|e| matches!(e, lyon::path::Event::Begin { .. }))
            .count();
        assert_eq!(begins, 2);
    }
}
