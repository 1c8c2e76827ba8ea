// Small CSS value builders used by the scene renderers.

/// `hsl(h, s%, l%)` with whole-degree hue and whole-percent channels.
#[inline]
pub fn hsl(h: f64, s: f64, l: f64) -> String {
    format!("hsl({:.0}, {:.0}%, {:.0}%)", h, s, l)
}

/// `hsla(h, s%, l%, a)` with two-decimal alpha.
#[inline]
pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> String {
    format!("hsla({:.0}, {:.0}%, {:.0}%, {:.2})", h, s, l, a)
}

/// Pixel length, one decimal is plenty for style values.
#[inline]
pub fn px(v: f64) -> String {
    format!("{:.1}px", v)
}

/// Percent length.
#[inline]
pub fn pct(v: f64) -> String {
    format!("{:.1}%", v)
}

/// Opacity formatted the way the styles expect (three decimals).
#[inline]
pub fn alpha(v: f64) -> String {
    format!("{:.3}", v)
}

/// Top-to-bottom three-stop linear gradient.
pub fn vertical_gradient(top: &str, mid: &str, bottom: &str) -> String {
    format!(
        "linear-gradient(180deg, {} 0%, {} 50%, {} 100%)",
        top, mid, bottom
    )
}

/// Top-to-bottom two-stop linear gradient.
pub fn vertical_gradient2(top: &str, bottom: &str) -> String {
    format!("linear-gradient(180deg, {} 0%, {} 100%)", top, bottom)
}
