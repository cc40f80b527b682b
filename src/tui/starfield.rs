// Starfield - animated particle background behind section content
//
// A fixed-density field of stars drifting slowly upward, each twinkling
// on its own cycle. Stars live in fractional coordinates so drift speeds
// below one cell per tick still accumulate. The field reseeds itself when
// the terminal is resized.

use crate::tui::theme::Theme;
use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Glyphs a star can render as, dimmest to brightest
const STAR_GLYPHS: [char; 4] = ['.', '·', '+', '*'];

/// One background particle
#[derive(Debug, Clone)]
struct Star {
    /// Fractional cell position
    x: f64,
    y: f64,
    /// Upward drift in cells per tick
    speed: f64,
    /// Glyph index, also the base brightness
    glyph: usize,
    /// Twinkle cycle position, advanced every tick
    phase: f64,
}

/// The animated background field
#[derive(Debug)]
pub struct Starfield {
    stars: Vec<Star>,
    width: u16,
    height: u16,
    density: f64,
    enabled: bool,
}

impl Starfield {
    pub fn new(density: f64, enabled: bool) -> Self {
        Self {
            stars: Vec::new(),
            width: 0,
            height: 0,
            density,
            enabled,
        }
    }

    /// Reseed the field for a new terminal size. Star count scales with
    /// area so density looks the same at any size.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;

        let mut rng = rand::thread_rng();
        let count = (width as f64 * height as f64 * self.density) as usize;
        self.stars = (0..count)
            .map(|_| Star {
                x: rng.gen_range(0.0..width.max(1) as f64),
                y: rng.gen_range(0.0..height.max(1) as f64),
                speed: rng.gen_range(0.01..0.08),
                glyph: rng.gen_range(0..STAR_GLYPHS.len()),
                phase: rng.gen_range(0.0..std::f64::consts::TAU),
            })
            .collect();
    }

    /// Advance drift and twinkle by one tick.
    pub fn tick(&mut self) {
        if !self.enabled {
            return;
        }
        let height = self.height.max(1) as f64;
        for star in &mut self.stars {
            star.y -= star.speed;
            if star.y < 0.0 {
                star.y += height;
            }
            star.phase += 0.15;
            if star.phase > std::f64::consts::TAU {
                star.phase -= std::f64::consts::TAU;
            }
        }
    }

    /// Draw the field directly into the frame buffer. Runs before any
    /// widget so content renders over the stars.
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if !self.enabled {
            return;
        }
        for star in &self.stars {
            let x = star.x as u16;
            let y = star.y as u16;
            if x >= area.width || y >= area.height {
                continue;
            }
            // Twinkle: bright half of the cycle uses the bright color
            let bright = star.phase.sin() > 0.3;
            let color = if bright {
                theme.star_bright
            } else {
                theme.star_dim
            };
            let cell = &mut buf[(area.x + x, area.y + y)];
            cell.set_char(STAR_GLYPHS[star.glyph]);
            cell.set_style(Style::default().fg(color));
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_scales_star_count_with_area() {
        let mut field = Starfield::new(0.02, true);
        field.resize(100, 50);
        assert_eq!(field.stars.len(), 100);

        field.resize(50, 20);
        assert_eq!(field.stars.len(), 20);
    }

    #[test]
    fn test_resize_to_same_size_keeps_stars() {
        let mut field = Starfield::new(0.02, true);
        field.resize(80, 24);
        let before: Vec<(u64, u64)> = field
            .stars
            .iter()
            .map(|s| (s.x.to_bits(), s.y.to_bits()))
            .collect();
        field.resize(80, 24);
        let after: Vec<(u64, u64)> = field
            .stars
            .iter()
            .map(|s| (s.x.to_bits(), s.y.to_bits()))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_tick_wraps_stars_at_top() {
        let mut field = Starfield::new(0.05, true);
        field.resize(40, 10);
        for _ in 0..5000 {
            field.tick();
        }
        for star in &field.stars {
            assert!(star.y >= 0.0 && star.y < 10.0, "star escaped: y={}", star.y);
        }
    }

    #[test]
    fn test_disabled_field_does_not_move() {
        let mut field = Starfield::new(0.05, false);
        field.resize(40, 10);
        let before: Vec<u64> = field.stars.iter().map(|s| s.y.to_bits()).collect();
        field.tick();
        let after: Vec<u64> = field.stars.iter().map(|s| s.y.to_bits()).collect();
        assert_eq!(before, after);
    }
}
