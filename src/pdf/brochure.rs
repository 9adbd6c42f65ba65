// src/pdf/brochure.rs
//
// Composes the property brochure: one forward pass over the record, top to
// bottom, with the shared page-break check between elements. Geometry and
// section order are fixed; see `sheet` for the cursor rules.

use chrono::{DateTime, Local, SecondsFormat, Utc};
use printpdf::image::RawImage;
use printpdf::xobject::XObject;
use printpdf::{BuiltinFont, PdfDocument, PdfSaveOptions, XObjectId};

use crate::domain::Property;
use crate::pdf::images::ImageFetcher;
use crate::pdf::sheet::{LayoutSheet, BLACK, CONTENT_RIGHT, PAGE_HEIGHT, PILL_FILL, PILL_TEXT, TEXT_X};
use crate::pdf::wrap;
use crate::pdf::PdfError;

const CONTENT_WIDTH: f32 = 180.0;

const PILL_HEIGHT: f32 = 8.0;
const PILL_PAD_X: f32 = 4.0;
const PILL_MARGIN_X: f32 = 4.0;

const IMG_BOX_W: f32 = 52.0;
const IMG_BOX_H: f32 = 50.0;
const IMG_GAP: f32 = 10.0;
const IMG_COLS: usize = 3;

const ABOUT_TEXT: &str = "Mondus Properties is a leading property brokerage, investment, and \
consultancy firm with a dedicated team of international experts. We provide tailored property \
solutions across commercial, residential, retail, and offplan sectors, backed by expertise in \
market trends, negotiation, and management.";

const DISCLAIMER: &str =
    "Disclaimer: Prices May Vary Based on Unit Location, Size, and Availability.";

/// A gallery slot: a registered image XObject with its pixel dimensions, or
/// `None` for an image whose fetch/decode failed (rendered blank).
pub(crate) type GallerySlot = Option<(XObjectId, (u32, u32))>;

/// `"<Brand>_Property_<id>_<ISO-8601 UTC>.pdf"`.
pub fn brochure_filename(brand: &str, id: i64, now: DateTime<Utc>) -> String {
    format!(
        "{}_Property_{}_{}.pdf",
        brand,
        id,
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Renders one fully-resolved record into PDF bytes.
///
/// Gallery image failures are logged and leave their slot blank; everything
/// else renders. Only a record-level failure aborts (handled by the caller
/// before this runs).
pub fn render_brochure(
    prop: &Property,
    fetcher: &ImageFetcher,
    brand: &str,
    header_image_url: &str,
) -> Result<Vec<u8>, PdfError> {
    let mut doc = PdfDocument::new(&format!("{brand} Property {}", prop.id));
    let mut sheet = LayoutSheet::new();

    section_header_image(&mut sheet, &mut doc, prop, fetcher, header_image_url);
    section_title_block(&mut sheet, prop);
    section_metadata(&mut sheet, prop);
    section_features(&mut sheet, prop);
    section_description(&mut sheet, prop.description.as_deref().filter(|s| !s.is_empty()).unwrap_or("N/A"));
    section_amenities(&mut sheet, &prop.amenities);

    if !prop.images.is_empty() {
        let slots = fetch_gallery(&mut doc, fetcher, prop);
        section_images(&mut sheet, &slots);
    }

    section_contact(&mut sheet);
    section_about(&mut sheet, brand);
    section_disclaimer(&mut sheet);
    stamp_footer(&mut sheet, Local::now());

    doc.pages = sheet.finish();

    let mut out = Vec::new();
    let mut warnings = Vec::new();
    doc.save_writer(&mut out, &PdfSaveOptions::default(), &mut warnings);
    Ok(out)
}

/// Brand header illustration, drawn stretched across the top of page one
/// whenever the record's first photo has a machine URL.
fn section_header_image(
    sheet: &mut LayoutSheet,
    doc: &mut PdfDocument,
    prop: &Property,
    fetcher: &ImageFetcher,
    header_image_url: &str,
) {
    if !prop.has_cover_image() {
        return;
    }
    if let Some((id, dims)) = fetch_decoded(doc, fetcher, header_image_url) {
        sheet.image(id, dims, 10.0, sheet.y(), 190.0, 140.0);
        sheet.advance(150.0);
        sheet.check_page_break();
    }
}

fn section_title_block(sheet: &mut LayoutSheet, prop: &Property) {
    sheet.set_font(BuiltinFont::HelveticaBold, 14.0);
    sheet.text(n_a(&prop.title), TEXT_X);
    sheet.advance(10.0);
    sheet.check_page_break();

    sheet.set_font(BuiltinFont::Helvetica, 12.0);
    sheet.text(&prop.location_line(), TEXT_X);
    sheet.advance(8.0);
    sheet.check_page_break();

    sheet.set_font(BuiltinFont::HelveticaBold, 12.0);
    sheet.text(&prop.price_line(), TEXT_X);
    sheet.advance(16.0);
    sheet.check_page_break();
}

fn section_metadata(sheet: &mut LayoutSheet, prop: &Property) {
    use crate::crm::labels;

    sheet.set_font(BuiltinFont::Helvetica, 10.0);

    sheet.text(&format!("ID: {}", prop.id), TEXT_X);
    sheet.advance(8.0);
    sheet.check_page_break();

    sheet.text(&format!("Property Type: {}", n_a(&prop.property_type)), TEXT_X);
    sheet.advance(8.0);
    sheet.check_page_break();

    let listing = labels::map_listing_type(prop.listing_type);
    sheet.text(
        &format!("Listing Type: {}", if listing.is_empty() { "N/A" } else { listing }),
        TEXT_X,
    );
    sheet.advance(8.0);
    sheet.check_page_break();

    let status = labels::map_status(prop.status);
    sheet.text(
        &format!("Status: {}", if status.is_empty() { "N/A" } else { status }),
        TEXT_X,
    );
    sheet.advance(16.0);
    sheet.check_page_break();
}

fn section_features(sheet: &mut LayoutSheet, prop: &Property) {
    sheet.set_font(BuiltinFont::Helvetica, 11.0);
    sheet.banner("PROPERTY FEATURES");

    sheet.text(
        &format!(
            "Sq Ft: {}       Beds: {}       Baths: {}",
            n_a(&prop.sqft),
            n_a(&prop.bedrooms),
            n_a(&prop.bathrooms)
        ),
        TEXT_X,
    );
    sheet.advance(8.0);
    sheet.check_page_break();

    sheet.text(&format!("Price: {}", prop.price_line()), TEXT_X);
    sheet.advance(8.0);
    sheet.check_page_break();
}

pub(crate) fn section_description(sheet: &mut LayoutSheet, text: &str) {
    sheet.banner("DESCRIPTION");
    sheet.set_font(BuiltinFont::Helvetica, 10.0);

    let lines = wrap::split_to_width(text, CONTENT_WIDTH, 10.0);
    let mut line_y = sheet.y();
    for line in &lines {
        sheet.text_at(line, TEXT_X, line_y);
        line_y += 7.0;
    }

    sheet.advance(lines.len() as f32 * 7.0 + 8.0);
    sheet.check_page_break();
}

/// Pill badges flowed left-to-right into fixed-height rows: greedy placement,
/// wrap when a pill would cross the right content boundary.
pub(crate) fn section_amenities(sheet: &mut LayoutSheet, amenities: &[String]) {
    sheet.banner("PRIVATE AMENITIES");

    let mut x = TEXT_X;
    for amenity in amenities {
        let pill_w = wrap::text_width_mm(amenity, sheet.font_size()) + PILL_PAD_X * 2.0;

        if x + pill_w > CONTENT_RIGHT {
            x = TEXT_X;
            sheet.advance(PILL_HEIGHT + PILL_MARGIN_X);
            sheet.check_page_break();
        }

        sheet.rounded_rect(x, sheet.y(), pill_w, PILL_HEIGHT, 3.0, PILL_FILL);
        sheet.set_text_color(PILL_TEXT);
        sheet.text_at(amenity, x + PILL_PAD_X, sheet.y() + 6.0);
        sheet.set_text_color(BLACK);

        x += pill_w + PILL_MARGIN_X;
    }

    sheet.advance(PILL_HEIGHT + 8.0);
}

/// Fetch + decode the gallery photos sequentially, in record order. Refs
/// without a machine URL contribute no slot at all; failed fetches produce a
/// blank slot that still occupies a grid cell.
fn fetch_gallery(doc: &mut PdfDocument, fetcher: &ImageFetcher, prop: &Property) -> Vec<GallerySlot> {
    prop.images
        .iter()
        .filter_map(|img| img.url.as_deref())
        .map(|url| fetch_decoded(doc, fetcher, url))
        .collect()
}

pub(crate) fn section_images(sheet: &mut LayoutSheet, slots: &[GallerySlot]) {
    sheet.banner("PROPERTY IMAGES");

    let mut col = 0usize;
    let mut x = TEXT_X;
    for slot in slots {
        if let Some((id, dims)) = slot {
            let (dx, dy, w, h) = fit_into_box(*dims, IMG_BOX_W, IMG_BOX_H);
            sheet.image(id.clone(), *dims, x + dx, sheet.y() + dy, w, h);
        }

        col += 1;
        x += IMG_BOX_W + IMG_GAP;

        if col >= IMG_COLS {
            col = 0;
            x = TEXT_X;
            sheet.advance(IMG_BOX_H + IMG_GAP);
            sheet.check_page_break();
        }
    }

    sheet.advance(IMG_BOX_H + IMG_GAP);
}

fn section_contact(sheet: &mut LayoutSheet) {
    sheet.banner("CONTACT INFORMATION");
    sheet.set_font(BuiltinFont::Helvetica, 10.0);

    let lines = [
        "For viewing and more information, please contact our property specialist:",
        "Mohammed Fayaz",
        "m: 971509701507",
        "e: fayaz@mondusgroup.com",
        "Mondus Properties | https://mondusproperties.ae/",
    ];
    for (i, line) in lines.iter().enumerate() {
        sheet.text(line, TEXT_X);
        sheet.advance(if i + 1 == lines.len() { 8.0 } else { 7.0 });
    }
    sheet.check_page_break();
}

fn section_about(sheet: &mut LayoutSheet, brand: &str) {
    sheet.banner(&format!("ABOUT {} PROPERTIES", brand.to_uppercase()));

    let about_lines = wrap::split_to_width(ABOUT_TEXT, CONTENT_WIDTH, 10.0);
    let mut line_y = sheet.y();
    for line in &about_lines {
        sheet.text_at(line, TEXT_X, line_y);
        line_y += 7.0;
    }
    sheet.advance(about_lines.len() as f32 * 7.0 + 8.0);
    sheet.check_page_break();

    let lines = [
        "Mondus Properties Real Estate Brokers LLC",
        "RERA ORN: 123456",
        "Address: 2402 Mondus Group Iris Bay - Business Bay - Dubai",
        "Phone No: +971521110794",
        "Web: www.mondusproperties.ae",
    ];
    for (i, line) in lines.iter().enumerate() {
        sheet.text(line, TEXT_X);
        sheet.advance(if i + 1 == lines.len() { 8.0 } else { 7.0 });
    }
    sheet.check_page_break();
}

fn section_disclaimer(sheet: &mut LayoutSheet) {
    sheet.set_font(BuiltinFont::Helvetica, 8.0);
    sheet.text(DISCLAIMER, TEXT_X);
    sheet.advance(8.0);
    sheet.check_page_break();
}

/// Generation timestamp, centered near the bottom. Stamped once after the
/// main pass, so only the last page carries it.
fn stamp_footer(sheet: &mut LayoutSheet, now: DateTime<Local>) {
    sheet.set_font(BuiltinFont::Helvetica, 8.0);
    let stamp = format!("Generated on {}", now.format("%-m/%-d/%Y, %-I:%M:%S %p"));
    sheet.text_centered_at(&stamp, 105.0, PAGE_HEIGHT - 10.0);
}

/// Aspect-ratio-preserving fit: returns (dx, dy, w, h) where dx/dy center
/// the scaled image inside the box.
pub(crate) fn fit_into_box(natural: (u32, u32), box_w: f32, box_h: f32) -> (f32, f32, f32, f32) {
    let (nw, nh) = (natural.0 as f32, natural.1 as f32);
    if nw <= 0.0 || nh <= 0.0 {
        return (0.0, 0.0, box_w, box_h);
    }
    let ratio = (box_w / nw).min(box_h / nh);
    let (w, h) = (nw * ratio, nh * ratio);
    ((box_w - w) / 2.0, (box_h - h) / 2.0, w, h)
}

fn fetch_decoded(
    doc: &mut PdfDocument,
    fetcher: &ImageFetcher,
    url: &str,
) -> Option<(XObjectId, (u32, u32))> {
    let bytes = match fetcher.fetch(url) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("⚠️ Failed to load image {url}: {e}");
            return None;
        }
    };

    let mut warnings = Vec::new();
    let raw = match RawImage::decode_from_bytes(&bytes, &mut warnings) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("⚠️ Failed to decode image {url}: {e}");
            return None;
        }
    };

    let dims = (raw.width as u32, raw.height as u32);
    let id = XObjectId::new();
    doc.resources.xobjects.map.insert(id.clone(), XObject::Image(raw));
    Some((id, dims))
}

fn n_a(opt: &Option<String>) -> &str {
    opt.as_deref().filter(|s| !s.is_empty()).unwrap_or("N/A")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use printpdf::ops::Op;

    #[test]
    fn filename_follows_the_fixed_template() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap();
        assert_eq!(
            brochure_filename("Mondus", 42, ts),
            "Mondus_Property_42_2026-08-25T12:00:00.000Z.pdf"
        );
    }

    #[test]
    fn empty_amenities_still_renders_banner_and_advances_fixed_amount() {
        let mut sheet = LayoutSheet::new();
        sheet.set_font(BuiltinFont::Helvetica, 10.0);
        let before = sheet.y();
        section_amenities(&mut sheet, &[]);
        // Banner (15) plus pill height + gap (8 + 8) with zero pills drawn.
        assert_eq!(sheet.y(), before + 15.0 + 16.0);
    }

    #[test]
    fn pills_wrap_to_a_new_row_at_the_right_boundary() {
        let mut sheet = LayoutSheet::new();
        sheet.set_font(BuiltinFont::Helvetica, 10.0);
        let before = sheet.y();

        // Each pill: 30 chars * 10pt * 0.6 * (25.4/72) + 8 ≈ 71.5mm.
        // Rows: [16..91.5..163], then the third pill would end past 190.
        let amenities = vec!["x".repeat(30), "x".repeat(30), "x".repeat(30)];
        section_amenities(&mut sheet, &amenities);

        // Banner (15) + one row wrap (8 + 4) + trailing gap (8 + 8).
        assert_eq!(sheet.y(), before + 15.0 + 12.0 + 16.0);
    }

    #[test]
    fn description_cursor_advances_by_lines_times_line_height_plus_gap() {
        let text = "word ".repeat(120);
        let expected_lines = wrap::split_to_width(&text, CONTENT_WIDTH, 10.0).len();
        assert!(expected_lines > 1);

        let mut sheet = LayoutSheet::new();
        let before = sheet.y();
        section_description(&mut sheet, &text);
        assert_eq!(
            sheet.y(),
            before + 15.0 + expected_lines as f32 * 7.0 + 8.0
        );
    }

    #[test]
    fn gallery_skips_failed_slot_but_advances_its_column() {
        let mut sheet = LayoutSheet::new();
        sheet.set_font(BuiltinFont::Helvetica, 10.0);
        let before = sheet.y();

        let slots: Vec<GallerySlot> = vec![
            Some((XObjectId::new(), (100, 100))),
            None, // fetch failed: blank slot
            Some((XObjectId::new(), (100, 100))),
            Some((XObjectId::new(), (100, 100))),
        ];
        section_images(&mut sheet, &slots);

        let drawn = sheet
            .current_page_ops()
            .iter()
            .filter(|op| matches!(op, Op::UseXobject { .. }))
            .count();
        assert_eq!(drawn, 3);

        // Four slots: one full row (wrap, +60) plus the trailing +60.
        assert_eq!(sheet.y(), before + 15.0 + 60.0 + 60.0);
    }

    #[test]
    fn gallery_columns_advance_left_to_right() {
        let mut sheet = LayoutSheet::new();
        let slots: Vec<GallerySlot> = (0..3)
            .map(|_| Some((XObjectId::new(), (52, 50))))
            .collect();
        section_images(&mut sheet, &slots);

        // 52x50 px fills the 52x50 box exactly, so dx = dy = 0 and the
        // slot origins are 16, 78, 140.
        let xs: Vec<f32> = sheet
            .current_page_ops()
            .iter()
            .filter_map(|op| match op {
                Op::UseXobject { transform, .. } => transform.translate_x.map(|p| p.0),
                _ => None,
            })
            .collect();
        assert_eq!(xs.len(), 3);
        let expected = [16.0f32, 78.0, 140.0];
        for (got, want) in xs.iter().zip(expected) {
            let want_pt = printpdf::Mm(want).into_pt().0;
            assert!((got - want_pt).abs() < 0.01, "got {got}, want {want_pt}");
        }
    }

    #[test]
    fn fit_into_box_scales_and_centers() {
        // Landscape 2:1 into 52x50: scale by 52/104 = 0.5 -> 52x25, centered
        // vertically.
        let (dx, dy, w, h) = fit_into_box((104, 50), 52.0, 50.0);
        assert_eq!((dx, w), (0.0, 52.0));
        assert!((h - 25.0).abs() < 1e-4);
        assert!((dy - 12.5).abs() < 1e-4);

        // Portrait 1:2 into the same box: height-bound.
        let (dx, _dy, w, h) = fit_into_box((50, 100), 52.0, 50.0);
        assert!((h - 50.0).abs() < 1e-4);
        assert!((w - 25.0).abs() < 1e-4);
        assert!((dx - 13.5).abs() < 1e-4);

        // Degenerate dimensions fall back to the full box.
        assert_eq!(fit_into_box((0, 10), 52.0, 50.0), (0.0, 0.0, 52.0, 50.0));
    }
}
