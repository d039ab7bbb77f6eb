use crate::image::RgbGrid;

/// Remap every pixel from RGB to HSV.
///
/// Each output pixel is `[H, S, V]` with all three scaled to `0..=255`
/// (hue is scaled from degrees, so 255 corresponds to 360°).
///
/// The components occupy the slots R, G, B hold in the input, so a PNG of
/// the result carries H in its red channel and V in its blue channel.
/// BGR-ordered tools that write the same triple show H in blue instead.
pub fn rgb_to_hsv(image: &RgbGrid) -> RgbGrid {
    image.map(|&px| rgb_to_hsv_pixel(px))
}

/// Convert a single `[r, g, b]` pixel to scaled `[h, s, v]`.
///
/// When several channels share the maximum, blue takes precedence over
/// green and green over red. All three formulas agree on such ties up to
/// the final `+360` wrap, so the precedence only fixes which branch runs.
///
/// ```
/// use tone_quant::rgb_to_hsv_pixel;
///
/// assert_eq!(rgb_to_hsv_pixel([255, 0, 0]), [0, 255, 255]);
/// assert_eq!(rgb_to_hsv_pixel([0, 255, 0]), [85, 255, 255]);
/// assert_eq!(rgb_to_hsv_pixel([0, 0, 255]), [170, 255, 255]);
/// ```
pub fn rgb_to_hsv_pixel([r, g, b]: [u8; 3]) -> [u8; 3] {
    // Ratios of normalized components equal ratios of the raw bytes, so the
    // formulas run on byte differences and V is exact.
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = (max - min) as f32;
    let (r, g, b) = (r as f32, g as f32, b as f32);

    let s = if chroma > 0.0 { chroma / max as f32 } else { 0.0 };

    let mut h = if chroma == 0.0 {
        0.0
    } else if max as f32 == b {
        240.0 + 60.0 * (r - g) / chroma
    } else if max as f32 == g {
        120.0 + 60.0 * (b - r) / chroma
    } else {
        60.0 * (g - b) / chroma
    };
    if h < 0.0 {
        h += 360.0;
    }

    [(h * 255.0 / 360.0) as u8, (s * 255.0) as u8, max]
}
