// Text measurement and word wrapping for the brochure layout.
//
// Widths use the same approximation everywhere: 0.6 * font_size per
// character. That keeps measurement deterministic without font metrics, and
// wrapping/centering only need to be self-consistent with it.

pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Approximate rendered width of `text` in layout units (mm) at `font_size`
/// points.
pub fn text_width_mm(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.6 * MM_PER_PT
}

/// Greedy word wrap to `max_width` mm. Words longer than a full line are
/// hard-broken. Explicit newlines are respected. Empty input yields no lines.
pub fn split_to_width(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end();
        if paragraph.is_empty() {
            if !text.trim().is_empty() {
                lines.push(String::new());
            }
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if text_width_mm(&candidate, font_size) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            // Word alone still too wide: hard-break by characters.
            let mut piece = String::new();
            for c in word.chars() {
                piece.push(c);
                if text_width_mm(&piece, font_size) > max_width && piece.chars().count() > 1 {
                    piece.pop();
                    lines.push(std::mem::take(&mut piece));
                    piece.push(c);
                }
            }
            current = piece;
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}
