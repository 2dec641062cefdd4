//! Palette, in ARGB8888.

pub const BACKGROUND_TOP: u32 = 0xFF1A1A2E;
pub const BACKGROUND_BOTTOM: u32 = 0xFF0F0F1E;
pub const GRID: u32 = 0xFFFFFFFF;
/// Grid lines are white at 5% opacity.
pub const GRID_ALPHA: f32 = 0.05;

pub const BAR_DEFAULT: u32 = 0xFF6366F1; // Indigo
pub const BAR_COMPARING: u32 = 0xFFFF6B6B; // Red
pub const BAR_SORTED: u32 = 0xFF10B981; // Green

#[inline]
fn channels(color: u32) -> [u32; 3] {
    [(color >> 16) & 0xFF, (color >> 8) & 0xFF, color & 0xFF]
}

#[inline]
fn pack([r, g, b]: [u32; 3]) -> u32 {
    0xFF00_0000 | (r << 16) | (g << 8) | b
}

/// Linear interpolation between two opaque colors, `t` in [0, 1].
pub fn lerp(from: u32, to: u32, t: f32) -> u32 {
    let t = t.clamp(0.0, 1.0);
    let a = channels(from);
    let b = channels(to);
    let mix = |x: u32, y: u32| (x as f32 + (y as f32 - x as f32) * t).round() as u32;
    pack([mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])])
}

/// Paint `src` over `dst` with the given opacity.
#[inline]
pub fn blend(dst: u32, src: u32, alpha: f32) -> u32 {
    lerp(dst, src, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(BACKGROUND_TOP, BACKGROUND_BOTTOM, 0.0), BACKGROUND_TOP);
        assert_eq!(lerp(BACKGROUND_TOP, BACKGROUND_BOTTOM, 1.0), BACKGROUND_BOTTOM);
    }

    #[test]
    fn blend_is_faint() {
        let out = blend(0xFF000000, GRID, GRID_ALPHA);
        // 255 * 0.05 rounds to 13
        assert_eq!(out, 0xFF0D0D0D);
    }
}
