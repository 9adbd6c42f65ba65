// Fixed enumeration lookups for the coded CRM fields. The codes are the
// list-element ids assigned by the remote system; anything unknown renders
// as an empty label.

pub fn map_emirate(id: Option<i64>) -> &'static str {
    match id.unwrap_or(0) {
        37 => "Dubai",
        38 => "Abu Dhabi",
        39 => "Sharjah",
        40 => "Ras Al Khaimah",
        41 => "Fujairah",
        42 => "Ajman",
        _ => "",
    }
}

pub fn map_listing_type(id: Option<i64>) -> &'static str {
    match id.unwrap_or(0) {
        50 => "Off-Plan",
        51 => "Leasing",
        52 => "Secondary",
        _ => "",
    }
}

pub fn map_status(id: Option<i64>) -> &'static str {
    match id.unwrap_or(0) {
        55 => "Vacant",
        56 => "Rented",
        _ => "",
    }
}

pub const STATUS_VACANT: i64 = 55;
pub const STATUS_RENTED: i64 = 56;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(map_emirate(Some(37)), "Dubai");
        assert_eq!(map_emirate(Some(42)), "Ajman");
        assert_eq!(map_listing_type(Some(51)), "Leasing");
        assert_eq!(map_status(Some(STATUS_RENTED)), "Rented");
    }

    #[test]
    fn unknown_and_missing_codes_fall_back_to_empty() {
        assert_eq!(map_emirate(Some(999)), "");
        assert_eq!(map_emirate(None), "");
        assert_eq!(map_listing_type(Some(0)), "");
        assert_eq!(map_status(None), "");
    }
}
