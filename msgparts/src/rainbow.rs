//! The rainbow text transform.
//!
//! `/rainbow` messages colour every code point along a hue circle. The colours
//! come from a CIELAB circle at fixed lightness (L = 75, chroma 127), converted
//! to sRGB, so that neighbouring letters differ by equal perceived amounts.
//!
//! The assembler recomputes this transform to recognise rainbow messages: a
//! formatted body equal to the transform of its plain body is taken to have
//! been typed with `/rainbow`.

use std::f64::consts::PI;

const LIGHTNESS: f64 = 75.0;
const CHROMA: f64 = 127.0;

/// Wraps every code point of `text` except plain spaces in a coloured `<font>`.
///
/// Combining marks and the pieces of emoji sequences get their own tags. The
/// output has to match what other clients send byte for byte.
pub fn text_to_html_rainbow(text: &str) -> String {
    // the hue step is based on UTF-16 length while the index counts code
    // points, so text outside the BMP never completes the circle
    let frequency = 2.0 * PI / text.encode_utf16().count() as f64;
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            if c == ' ' {
                return c.to_string();
            }
            let hue = i as f64 * frequency;
            let [r, g, b] = lab_to_rgb(LIGHTNESS, CHROMA * hue.cos(), CHROMA * hue.sin());
            format!("<font color=\"#{r:02x}{g:02x}{b:02x}\">{c}</font>")
        })
        .collect()
}

/// CIELAB (D65) to 8-bit sRGB, clamped.
fn lab_to_rgb(l: f64, a: f64, b: f64) -> [u8; 3] {
    let y = (l + 16.0) / 116.0;
    let x = adjust_xyz(y + a / 500.0) * 0.9505;
    let z = adjust_xyz(y - b / 200.0) * 1.089;
    let y = adjust_xyz(y);

    let r = 3.24096994 * x - 1.53738318 * y - 0.49861076 * z;
    let g = -0.96924364 * x + 1.8759675 * y + 0.04155506 * z;
    let b = 0.05563008 * x - 0.20397696 * y + 1.05697151 * z;

    [r, g, b].map(|channel| (gamma_correct(channel).clamp(0.0, 1.0) * 255.0).round() as u8)
}

fn adjust_xyz(v: f64) -> f64 {
    if v > 0.2069 {
        v.powi(3)
    } else {
        0.1284 * v - 0.01771
    }
}

fn gamma_correct(v: f64) -> f64 {
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}
