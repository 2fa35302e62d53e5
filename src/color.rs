use eframe::egui::Color32;
use palette::{Mix, Srgb};

// ---------------------------------------------------------------------------
// Correlation colour scale
// ---------------------------------------------------------------------------

/// Cell fill for a coefficient: black → red for positive values, black → blue
/// for negative ones.
pub fn correlation_color(value: f64) -> Color32 {
    let intensity = (255.0 * value.abs().min(1.0)).round() as u8;
    if value < 0.0 {
        Color32::from_rgb(0, 0, intensity)
    } else {
        Color32::from_rgb(intensity, 0, 0)
    }
}

/// Legend gradient stops: blue at -1, white at 0, red at +1.
const LEGEND_STOPS: [(f32, [f32; 3]); 3] = [
    (0.0, [0.0, 0.0, 1.0]),
    (0.5, [1.0, 1.0, 1.0]),
    (1.0, [1.0, 0.0, 0.0]),
];

/// Sample the legend gradient at `t` in [0, 1] (0 = -1.0, 1 = +1.0).
/// Interpolates in gamma-encoded sRGB like a 2D canvas gradient does.
pub fn legend_gradient(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let upper = LEGEND_STOPS
        .iter()
        .position(|(stop, _)| *stop >= t)
        .unwrap_or(LEGEND_STOPS.len() - 1)
        .max(1);
    let (t0, c0) = LEGEND_STOPS[upper - 1];
    let (t1, c1) = LEGEND_STOPS[upper];

    let from = Srgb::new(c0[0], c0[1], c0[2]);
    let to = Srgb::new(c1[0], c1[1], c1[2]);
    let mixed = from.mix(to, (t - t0) / (t1 - t0));
    let rgb: Srgb<u8> = mixed.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Series palette
// ---------------------------------------------------------------------------

/// Fixed categorical palette for trend series, cycled by series index.
pub const SERIES_PALETTE: [Color32; 6] = [
    Color32::from_rgb(0xe4, 0x1a, 0x1c),
    Color32::from_rgb(0x37, 0x7e, 0xb8),
    Color32::from_rgb(0x4d, 0xaf, 0x4a),
    Color32::from_rgb(0x98, 0x4e, 0xa3),
    Color32::from_rgb(0xff, 0x7f, 0x00),
    Color32::from_rgb(0xff, 0xff, 0x33),
];

pub fn series_color(index: usize) -> Color32 {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}
