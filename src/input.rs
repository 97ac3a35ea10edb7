use glam::Vec2;

/// Pointer position relative to the viewport centre, in CSS pixels.
#[inline]
pub fn recenter(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Vec2 {
    Vec2::new(client_x - viewport_w * 0.5, client_y - viewport_h * 0.5)
}

/// Canvas backing size for a CSS box, with the device pixel ratio capped.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, device_pixel_ratio: f64, max_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(max_ratio)
    } else {
        1.0
    };
    let w = (css_w.max(0.0) * dpr) as u32;
    let h = (css_h.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}

/// Real elapsed seconds clamped to `[0, max]`.
#[inline]
pub fn clamp_frame_dt(dt_sec: f32, max: f32) -> f32 {
    if dt_sec.is_finite() {
        dt_sec.clamp(0.0, max)
    } else {
        0.0
    }
}

/// Index from a nav dot's `data-section` attribute.
#[inline]
pub fn parse_section_index(attr: Option<&str>) -> Option<usize> {
    attr?.trim().parse().ok()
}
