/// DDA line rasterization with optional anti-aliasing and gamma encoding
use crate::color::{self, Color};
use crate::framebuffer::PixelSink;
use crate::geometry::{LineSegment, Model};
use crate::pipeline::RenderOptions;

/// Draw one clipped, canonical-space line segment into the pixel sink.
pub fn rasterize(
    model: &Model,
    segment: &LineSegment,
    options: RenderOptions,
    sink: &mut dyn PixelSink,
) {
    let w = sink.width() as f64;
    let h = sink.height() as f64;

    let p0 = model.vertices[segment.vertices[0]].position;
    let p1 = model.vertices[segment.vertices[1]].position;
    let mut c0 = model.colors[segment.colors[0]];
    let mut c1 = model.colors[segment.colors[1]];

    // Map canonical coordinates onto the pixel grid. The 2.001 divisor
    // biases rounding off the exact top/right viewport edge and must stay
    // as-is for pixel parity.
    let mut x0 = (0.5 + w / 2.001 * (p0.x as f64 + 1.0)).round();
    let mut y0 = (0.5 + h / 2.001 * (p0.y as f64 + 1.0)).round();
    let mut x1 = (0.5 + w / 2.001 * (p1.x as f64 + 1.0)).round();
    let mut y1 = (0.5 + h / 2.001 * (p1.y as f64 + 1.0)).round();

    if model.debug {
        log::debug!("rasterize: pixels ({x0}, {y0})-({x1}, {y1})");
    }

    // Degenerate segment: one pixel in the first endpoint's color.
    if x0 == x1 && y0 == y1 {
        plot(sink, false, x0, y0, shade(c0, options));
        return;
    }

    // Walk whichever axis is longer so each step covers one pixel; when the
    // line is steep, x and y trade places for the rest of the algorithm.
    let transposed = (y1 - y0).abs() > (x1 - x0).abs();
    if transposed {
        std::mem::swap(&mut x0, &mut y0);
        std::mem::swap(&mut x1, &mut y1);
    }

    // Iterate left to right, keeping endpoint colors paired with endpoints.
    if x1 < x0 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
        std::mem::swap(&mut c0, &mut c1);
    }

    let dx = x1 - x0;
    let slope = (y1 - y0) / dx;
    let color_slope = color::slope(c1, c0, dx);

    let mut x = x0;
    let mut y = y0;
    while x < x1 {
        let c = color::interpolate(c0, color_slope, x - x0);
        if options.anti_alias {
            let low = y.floor();
            let weight = y - low;
            let (c_low, c_high) = color::anti_alias(c, sink.background(), weight);
            plot(sink, transposed, x, low, shade(c_low, options));
            plot(sink, transposed, x, low + 1.0, shade(c_high, options));
        } else {
            plot(sink, transposed, x, y.round(), shade(c, options));
        }
        x += 1.0;
        y += slope;
    }

    // The final endpoint is written explicitly so accumulated rounding in y
    // can never displace it.
    plot(sink, transposed, x1, y1.round(), shade(c1, options));
}

fn shade(color: Color, options: RenderOptions) -> Color {
    if options.gamma {
        color::apply_gamma(color)
    } else {
        color
    }
}

/// Write one pixel given 1-based pixel-grid coordinates with y growing
/// upward; the sink itself is addressed from the top-left with y downward.
fn plot(sink: &mut dyn PixelSink, transposed: bool, a: f64, b: f64, color: Color) {
    let (px, py) = if transposed { (b, a) } else { (a, b) };
    let w = sink.width() as i64;
    let h = sink.height() as i64;
    let px = px as i64;
    let py = py as i64;
    if px < 1 || px > w || py < 1 || py > h {
        log::debug!("pixel ({px}, {py}) is outside the {w}x{h} viewport");
        return;
    }
    sink.set_pixel((px - 1) as usize, (h - py) as usize, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::geometry::Vertex;

    fn canonical_segment(p0: (f32, f32), p1: (f32, f32), c0: Color, c1: Color) -> (Model, LineSegment) {
        let mut model = Model::new("raster-test");
        let v0 = model.add_vertex(Vertex::new(p0.0, p0.1, -1.0));
        let v1 = model.add_vertex(Vertex::new(p1.0, p1.1, -1.0));
        let i0 = model.add_color(c0);
        let i1 = model.add_color(c1);
        (model, LineSegment::new(v0, v1, i0, i1))
    }

    fn lit_pixels(fb: &FrameBuffer) -> Vec<(usize, usize)> {
        let mut lit = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get_pixel(x, y) != fb.background() {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test_log::test]
    fn test_bottom_edge_fills_bottom_row() {
        let (model, segment) = canonical_segment((-1.0, -1.0), (1.0, -1.0), Color::WHITE, Color::WHITE);
        let mut fb = FrameBuffer::new(10, 10);
        rasterize(&model, &segment, RenderOptions::default(), &mut fb);

        for x in 0..10 {
            assert_eq!(fb.get_pixel(x, 9), Color::WHITE, "column {x}");
        }
        assert_eq!(lit_pixels(&fb).len(), 10);
    }

    #[test_log::test]
    fn test_top_edge_fills_top_row() {
        let (model, segment) = canonical_segment((-1.0, 1.0), (1.0, 1.0), Color::RED, Color::RED);
        let mut fb = FrameBuffer::new(10, 10);
        rasterize(&model, &segment, RenderOptions::default(), &mut fb);

        for x in 0..10 {
            assert_eq!(fb.get_pixel(x, 0), Color::RED, "column {x}");
        }
    }

    #[test_log::test]
    fn test_degenerate_segment_writes_single_center_pixel() {
        let (model, segment) = canonical_segment((0.0, 0.0), (0.0, 0.0), Color::GREEN, Color::BLUE);
        let mut fb = FrameBuffer::new(10, 10);
        rasterize(&model, &segment, RenderOptions::default(), &mut fb);

        // First endpoint's color, one pixel only.
        assert_eq!(lit_pixels(&fb), vec![(4, 5)]);
        assert_eq!(fb.get_pixel(4, 5), Color::GREEN);
    }

    #[test_log::test]
    fn test_steep_line_is_transposed_and_continuous() {
        let (model, segment) = canonical_segment((0.0, -1.0), (0.0, 1.0), Color::WHITE, Color::WHITE);
        let mut fb = FrameBuffer::new(10, 10);
        rasterize(&model, &segment, RenderOptions::default(), &mut fb);

        // A full vertical column, one pixel per row.
        for y in 0..10 {
            assert_eq!(fb.get_pixel(4, y), Color::WHITE, "row {y}");
        }
        assert_eq!(lit_pixels(&fb).len(), 10);
    }

    #[test_log::test]
    fn test_right_to_left_matches_left_to_right() {
        let (model_a, segment_a) = canonical_segment((-0.8, -0.4), (0.8, 0.6), Color::RED, Color::BLUE);
        let (model_b, segment_b) = canonical_segment((0.8, 0.6), (-0.8, -0.4), Color::BLUE, Color::RED);
        let mut fb_a = FrameBuffer::new(32, 32);
        let mut fb_b = FrameBuffer::new(32, 32);
        rasterize(&model_a, &segment_a, RenderOptions::default(), &mut fb_a);
        rasterize(&model_b, &segment_b, RenderOptions::default(), &mut fb_b);

        for y in 0..32 {
            for x in 0..32 {
                assert_eq!(fb_a.get_pixel(x, y), fb_b.get_pixel(x, y), "pixel ({x}, {y})");
            }
        }
    }

    #[test_log::test]
    fn test_anti_aliasing_splits_across_adjacent_pixels() {
        // Slope 1/9 on a 10x10 grid: intermediate steps land between rows.
        let (model, segment) =
            canonical_segment((-1.0, -1.0), (1.0, -0.69985), Color::WHITE, Color::WHITE);
        let mut fb = FrameBuffer::new(10, 10);
        let options = RenderOptions {
            anti_alias: true,
            ..RenderOptions::default()
        };
        rasterize(&model, &segment, options, &mut fb);

        // Second step: y = 1 + 1/9, split between pixel rows 1 and 2
        // (sink rows 9 and 8).
        let low = fb.get_pixel(1, 9);
        let high = fb.get_pixel(1, 8);
        assert_ne!(low, Color::WHITE);
        assert_ne!(low, Color::BLACK);
        assert_ne!(high, Color::WHITE);
        assert_ne!(high, Color::BLACK);
        // Complementary background weights: the pair sums back to the
        // foreground channel value give or take truncation.
        let sum = low.r as u16 + high.r as u16;
        assert!((254..=255).contains(&sum), "sum = {sum}");
        assert!(low.r > high.r);
    }

    #[test_log::test]
    fn test_gamma_encodes_written_pixels() {
        let gray = Color::new(128, 128, 128);
        let (model, segment) = canonical_segment((0.0, 0.0), (0.0, 0.0), gray, gray);
        let mut fb = FrameBuffer::new(10, 10);
        let options = RenderOptions {
            gamma: true,
            ..RenderOptions::default()
        };
        rasterize(&model, &segment, options, &mut fb);

        assert_eq!(fb.get_pixel(4, 5), Color::new(186, 186, 186));
    }

    #[test_log::test]
    fn test_color_interpolation_along_segment() {
        let (model, segment) = canonical_segment((-1.0, 0.0), (1.0, 0.0), Color::new(0, 0, 0), Color::new(90, 90, 90));
        let mut fb = FrameBuffer::new(10, 10);
        rasterize(&model, &segment, RenderOptions::default(), &mut fb);

        // Channel value climbs monotonically left to right.
        let row = 10 - 5; // y = 0 maps to pixel row 5, sink row 5
        let mut last = -1i32;
        for x in 0..10 {
            let v = fb.get_pixel(x, row).r as i32;
            assert!(v >= last, "column {x}: {v} < {last}");
            last = v;
        }
        assert_eq!(fb.get_pixel(0, row).r, 0);
        assert_eq!(fb.get_pixel(9, row).r, 90);
    }
}
