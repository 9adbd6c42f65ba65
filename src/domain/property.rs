// src/domain/property.rs

use crate::crm::labels;
use crate::crm::models::ItemFields;

/// A property record with named fields, decoded from the opaque user-field
/// map the CRM returns. This is the anti-corruption layer between the wire
/// payload and everything downstream (table page, brochure renderer).
#[derive(Debug, Clone, Default)]
pub struct Property {
    pub id: i64,
    pub title: Option<String>,
    pub emirate: Option<i64>,
    pub building_name: Option<String>,
    pub address: Option<String>,
    pub property_type: Option<String>,
    pub listing_type: Option<i64>,
    pub status: Option<i64>,
    pub price: Option<String>,
    pub sqft: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub description: Option<String>,
    pub amenities: Vec<String>,
    pub images: Vec<PropertyImage>,
}

#[derive(Debug, Clone)]
pub struct PropertyImage {
    pub url: Option<String>,
}

impl Property {
    pub fn from_item(item: ItemFields) -> Self {
        Self {
            id: item.id,
            title: item.title,
            emirate: item.emirate,
            building_name: item.building_name,
            address: item.address,
            property_type: item.property_type,
            listing_type: item.listing_type,
            status: item.status,
            price: item.price,
            sqft: item.sqft,
            bedrooms: item.bedrooms,
            bathrooms: item.bathrooms,
            description: item.description,
            amenities: item.amenities,
            images: item
                .images
                .into_iter()
                .map(|img| PropertyImage {
                    url: img.url_machine,
                })
                .collect(),
        }
    }

    /// "{emirate} - {building} - {cleaned address}"; missing parts join as
    /// empty strings, exactly as the brochure prints them.
    pub fn location_line(&self) -> String {
        format!(
            "{} - {} - {}",
            labels::map_emirate(self.emirate),
            self.building_name.as_deref().unwrap_or(""),
            clean_address(self.address.as_deref().unwrap_or("")),
        )
    }

    /// "AED <parsed price>". A non-numeric price parses to NaN and the
    /// literal token is printed; kept for output compatibility.
    pub fn price_line(&self) -> String {
        format!("AED {}", parse_float_prefix(self.price.as_deref().unwrap_or("N/A")))
    }

    /// True when the record's first image carries a machine URL. Later
    /// images do not count; the cover check looks at the first slot only.
    pub fn has_cover_image(&self) -> bool {
        self.images
            .first()
            .and_then(|img| img.url.as_ref())
            .is_some()
    }
}

/// Address fields arrive as "<street part> | <unit>; <extra>" with a stray
/// plot number glued to the end. Keep the first segment, drop trailing digits.
pub fn clean_address(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let first = input
        .split(|c| c == '|' || c == ';')
        .next()
        .unwrap_or("")
        .trim();

    first.trim_end_matches(|c: char| c.is_ascii_digit()).trim().to_string()
}

/// JS `parseFloat` semantics: longest numeric prefix (including an optional
/// exponent and the `Infinity` literal), NaN when there is none.
pub fn parse_float_prefix(s: &str) -> f64 {
    let t = s.trim_start();
    let bytes = t.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let sign_len = end;

    if t[sign_len..].starts_with("Infinity") {
        return if t.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    // A bare sign or dot is not a number.
    if t[sign_len..end].chars().all(|c| c == '.') {
        return f64::NAN;
    }

    // Exponent part only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    t[..end].parse().unwrap_or(f64::NAN)
}
