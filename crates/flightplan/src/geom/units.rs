//! Unit conversions between map pixels, nautical miles, and angle units.

/// Map scale: pixels per nautical mile.
pub const PX_PER_NM: f64 = 5.0;

/// Nautical miles to map pixels.
#[inline]
pub fn nm_to_px(nm: f64) -> f64 {
    nm * PX_PER_NM
}

/// Map pixels to nautical miles.
#[inline]
pub fn px_to_nm(px: f64) -> f64 {
    px / PX_PER_NM
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}
