// src/pdf/sheet.rs
//
// Page assembly for the brochure. A `LayoutSheet` owns the vertical cursor
// and the op stream of the page being built; callers draw top-down and call
// `check_page_break` between elements. Coordinates are millimetres with the
// origin top-left and text positioned at its baseline. Conversion to PDF
// space (points, origin bottom-left) happens at op-emission time.

use printpdf::graphics::{LinePoint, PaintMode, Point, Polygon, PolygonRing, WindingOrder};
use printpdf::matrix::TextMatrix;
use printpdf::ops::Op;
use printpdf::text::TextItem;
use printpdf::{BuiltinFont, Mm, PdfPage, Pt, Rgb, XObjectId};

use crate::pdf::wrap;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const TOP_MARGIN: f32 = 10.0;

/// Left edge for body text.
pub const TEXT_X: f32 = 16.0;
/// Banner rectangle geometry.
pub const BANNER_X: f32 = 14.0;
pub const BANNER_WIDTH: f32 = 182.0;
pub const BANNER_HEIGHT: f32 = 8.0;
/// Right content boundary pills and text must not cross.
pub const CONTENT_RIGHT: f32 = 190.0;

pub type Color = (u8, u8, u8);

pub const BLACK: Color = (0, 0, 0);
pub const BANNER_FILL: Color = (240, 240, 240);
pub const PILL_FILL: Color = (220, 220, 220);
pub const PILL_TEXT: Color = (50, 50, 50);

fn pt(mm: f32) -> Pt {
    Mm(mm).into_pt()
}

fn rgb(c: Color) -> printpdf::color::Color {
    printpdf::color::Color::Rgb(Rgb::new(
        c.0 as f32 / 255.0,
        c.1 as f32 / 255.0,
        c.2 as f32 / 255.0,
        None,
    ))
}

pub struct LayoutSheet {
    pages: Vec<Vec<Op>>,
    ops: Vec<Op>,
    y: f32,

    font: BuiltinFont,
    font_size: f32,
    text_color: Color,

    // Per-page emitted graphics state.
    in_text_section: bool,
    emitted_font: Option<(BuiltinFont, f32)>,
    emitted_fill: Option<Color>,
}

impl LayoutSheet {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            ops: Vec::new(),
            y: TOP_MARGIN,
            font: BuiltinFont::Helvetica,
            font_size: 12.0,
            text_color: BLACK,
            in_text_section: false,
            emitted_font: None,
            emitted_fill: None,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// The fixed page-break heuristic: a conservative 10-unit check, not a
    /// measurement of the next element. Elements taller than 10 units can
    /// overflow the page; reproduced as-is for output compatibility.
    pub fn check_page_break(&mut self) {
        if self.y + 10.0 > PAGE_HEIGHT - 20.0 {
            self.flush_page();
            self.y = TOP_MARGIN;
        }
    }

    pub fn set_font(&mut self, font: BuiltinFont, size: f32) {
        self.font = font;
        self.font_size = size;
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Baseline text at the cursor's current line.
    pub fn text(&mut self, s: &str, x: f32) {
        self.text_at(s, x, self.y);
    }

    pub fn text_at(&mut self, s: &str, x: f32, y: f32) {
        if s.is_empty() {
            return;
        }
        self.ensure_text_section();
        self.ensure_fill(self.text_color);

        if self.emitted_font != Some((self.font, self.font_size)) {
            self.ops.push(Op::SetFontSizeBuiltinFont {
                size: Pt(self.font_size),
                font: self.font,
            });
            self.emitted_font = Some((self.font, self.font_size));
        }

        let matrix = TextMatrix::Translate(pt(x), pt(PAGE_HEIGHT - y));
        self.ops.push(Op::SetTextMatrix { matrix });
        self.ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(s.to_string())],
            font: self.font,
        });
    }

    /// Text centered on `cx`, using the shared width approximation.
    pub fn text_centered_at(&mut self, s: &str, cx: f32, y: f32) {
        let w = wrap::text_width_mm(s, self.font_size);
        self.text_at(s, cx - w / 2.0, y);
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.close_text_section();
        self.ensure_fill(color);

        let bottom = PAGE_HEIGHT - (y + h);
        let corners = [
            (x, bottom),
            (x + w, bottom),
            (x + w, bottom + h),
            (x, bottom + h),
        ];
        let polygon = Polygon {
            rings: vec![PolygonRing {
                points: corners
                    .iter()
                    .map(|&(px, py)| LinePoint {
                        p: Point { x: pt(px), y: pt(py) },
                        bezier: false,
                    })
                    .collect(),
            }],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::EvenOdd,
        };
        self.ops.push(Op::DrawPolygon { polygon });
    }

    /// Filled rounded rectangle, corner radius `r` (the pill shape).
    pub fn rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
        self.close_text_section();
        self.ensure_fill(color);

        let r = r.min(w / 2.0).min(h / 2.0);
        let bottom = PAGE_HEIGHT - (y + h);
        let polygon = Polygon {
            rings: vec![rounded_ring(x, bottom, w, h, r)],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::EvenOdd,
        };
        self.ops.push(Op::DrawPolygon { polygon });
    }

    /// Places a decoded image XObject with its natural pixel size scaled to
    /// the requested box (no aspect handling here; callers pre-fit).
    pub fn image(&mut self, id: XObjectId, px: (u32, u32), x: f32, y: f32, w: f32, h: f32) {
        self.close_text_section();

        let (img_w, img_h) = px;
        let transform = printpdf::xobject::XObjectTransform {
            translate_x: Some(pt(x)),
            translate_y: Some(pt(PAGE_HEIGHT - (y + h))),
            scale_x: Some(pt(w).0 / img_w.max(1) as f32),
            scale_y: Some(pt(h).0 / img_h.max(1) as f32),
            rotate: None,
            dpi: Some(72.0),
        };
        self.ops.push(Op::UseXobject { id, transform });
    }

    /// Section banner: shaded rectangle with a bold caption at the current
    /// font size, then `y += 15` and a page-break check.
    pub fn banner(&mut self, caption: &str) {
        self.fill_rect(BANNER_X, self.y, BANNER_WIDTH, BANNER_HEIGHT, BANNER_FILL);

        let prev = self.font;
        self.set_font(BuiltinFont::HelveticaBold, self.font_size);
        self.text_at(caption, TEXT_X, self.y + 5.0);
        self.set_font(prev, self.font_size);

        self.advance(15.0);
        self.check_page_break();
    }

    pub fn finish(mut self) -> Vec<PdfPage> {
        self.flush_page();
        self.pages
            .into_iter()
            .map(|ops| PdfPage::new(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), ops))
            .collect()
    }

    fn flush_page(&mut self) {
        self.close_text_section();
        let ops = std::mem::take(&mut self.ops);
        self.pages.push(ops);
        // Graphics state does not carry across content streams.
        self.emitted_font = None;
        self.emitted_fill = None;
    }

    fn ensure_text_section(&mut self) {
        if !self.in_text_section {
            self.ops.push(Op::StartTextSection);
            self.in_text_section = true;
        }
    }

    fn close_text_section(&mut self) {
        if self.in_text_section {
            self.ops.push(Op::EndTextSection);
            self.in_text_section = false;
        }
    }

    fn ensure_fill(&mut self, color: Color) {
        if self.emitted_fill != Some(color) {
            self.ops.push(Op::SetFillColor { col: rgb(color) });
            self.emitted_fill = Some(color);
        }
    }

    #[cfg(test)]
    pub(crate) fn current_page_ops(&self) -> &[Op] {
        &self.ops
    }
}

/// Rounded-rectangle outline in PDF space (x, y = lower-left corner).
/// Corner arcs are the usual cubic approximation of a quarter circle.
fn rounded_ring(x: f32, y: f32, w: f32, h: f32, r: f32) -> PolygonRing {
    const K: f32 = 0.552_284_8;
    let k = K * r;

    let line = |px: f32, py: f32| LinePoint {
        p: Point { x: pt(px), y: pt(py) },
        bezier: false,
    };
    let ctrl = |px: f32, py: f32| LinePoint {
        p: Point { x: pt(px), y: pt(py) },
        bezier: true,
    };

    PolygonRing {
        points: vec![
            // Bottom edge, left to right.
            line(x + r, y),
            line(x + w - r, y),
            // Bottom-right corner.
            ctrl(x + w - r + k, y),
            ctrl(x + w, y + r - k),
            line(x + w, y + r),
            // Right edge.
            line(x + w, y + h - r),
            // Top-right corner.
            ctrl(x + w, y + h - r + k),
            ctrl(x + w - r + k, y + h),
            line(x + w - r, y + h),
            // Top edge.
            line(x + r, y + h),
            // Top-left corner.
            ctrl(x + r - k, y + h),
            ctrl(x, y + h - r + k),
            line(x, y + h - r),
            // Left edge.
            line(x, y + r),
            // Bottom-left corner.
            ctrl(x, y + r - k),
            ctrl(x + r - k, y),
            line(x + r, y),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_starts_at_top_margin() {
        let sheet = LayoutSheet::new();
        assert_eq!(sheet.y(), 10.0);
    }

    #[test]
    fn page_break_triggers_exactly_past_the_threshold() {
        // Threshold: y + 10 > 297 - 20, i.e. breaks when y > 267.
        let mut sheet = LayoutSheet::new();
        sheet.advance(257.0); // y = 267.0 -> 277.0 is not > 277.0
        sheet.check_page_break();
        assert_eq!(sheet.y(), 267.0);

        sheet.advance(0.5); // y = 267.5 -> breaks
        sheet.check_page_break();
        assert_eq!(sheet.y(), 10.0);
        assert_eq!(sheet.finish().len(), 2);
    }

    #[test]
    fn no_break_leaves_single_page() {
        let mut sheet = LayoutSheet::new();
        sheet.text("hello", TEXT_X);
        sheet.advance(8.0);
        sheet.check_page_break();
        assert_eq!(sheet.finish().len(), 1);
    }

    #[test]
    fn banner_advances_fifteen_units() {
        let mut sheet = LayoutSheet::new();
        let before = sheet.y();
        sheet.banner("PROPERTY FEATURES");
        assert_eq!(sheet.y(), before + 15.0);
    }

    #[test]
    fn banner_restores_regular_font() {
        let mut sheet = LayoutSheet::new();
        sheet.set_font(BuiltinFont::Helvetica, 11.0);
        sheet.banner("DESCRIPTION");
        sheet.text("body", TEXT_X);
        let wrote_regular = sheet.current_page_ops().iter().any(|op| {
            matches!(
                op,
                Op::WriteTextBuiltinFont {
                    font: BuiltinFont::Helvetica,
                    ..
                }
            )
        });
        assert!(wrote_regular);
    }

    #[test]
    fn text_emits_font_setting_once_per_run() {
        let mut sheet = LayoutSheet::new();
        sheet.set_font(BuiltinFont::Helvetica, 10.0);
        sheet.text("a", TEXT_X);
        sheet.advance(8.0);
        sheet.text("b", TEXT_X);
        let sets = sheet
            .current_page_ops()
            .iter()
            .filter(|op| matches!(op, Op::SetFontSizeBuiltinFont { .. }))
            .count();
        assert_eq!(sets, 1);
    }
}
