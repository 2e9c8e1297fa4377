use raylib::prelude::*;
use crate::constants::*;

pub struct Slide {
    image: Texture2D,
    scale: f32,

    transition_secs: f32,
    offset: f32,
    alpha: f32,
    tween_offset: ease::Tween,
    tween_alpha: ease::Tween,
}

impl Slide {
    pub fn new(image: Texture2D, transition_secs: f32) -> Self {
        let scale = fit_scale(image.width() as f32, image.height() as f32);
        Self {
            image,
            scale,
            transition_secs,
            offset: 0.0,
            alpha: 1.0,
            tween_offset: settled_tween(0.0),
            tween_alpha: settled_tween(1.0),
        }
    }

    /// Replays the entrance: fade in while easing from a slight offset.
    pub fn restart(&mut self) {
        if self.transition_secs <= 0.0 {
            self.offset = 0.0;
            self.alpha = 1.0;
            return;
        }
        self.tween_offset = ease::Tween::new(ease::cubic_out, ENTRANCE_OFFSET, 0.0, self.transition_secs);
        self.tween_alpha = ease::Tween::new(ease::quad_out, 0.0, 1.0, self.transition_secs);
        self.offset = ENTRANCE_OFFSET;
        self.alpha = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        if self.transition_secs <= 0.0 {
            return;
        }
        self.offset = self.tween_offset.apply(dt);
        self.alpha = self.tween_alpha.apply(dt).clamp(0.0, 1.0);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let screen_width = RENDER_WIDTH as f32;
        let screen_height = RENDER_HEIGHT as f32;

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        let scaled_width = tex_width * self.scale;
        let scaled_height = tex_height * self.scale;

        let dest = Rectangle::new(
            screen_width * (0.5 + self.offset) - scaled_width * 0.5,
            (screen_height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, (self.alpha * 255.0).round() as u8),
        );
    }
}

// Holds `value`; a zero duration would make the easing divide by zero
fn settled_tween(value: f32) -> ease::Tween {
    ease::Tween::new(ease::linear_none, value, value, 1.0)
}

/// Largest scale that keeps the whole image inside the fitted render area.
pub fn fit_scale(width: f32, height: f32) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 1.0;
    }
    let max_width = RENDER_WIDTH as f32 * SLIDE_FIT;
    let max_height = RENDER_HEIGHT as f32 * SLIDE_FIT;
    (max_width / width).min(max_height / height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_images_fit_the_width() {
        let scale = fit_scale(3840.0, 1080.0);
        assert!((3840.0 * scale - RENDER_WIDTH as f32 * SLIDE_FIT).abs() < 0.01);
    }

    #[test]
    fn tall_images_fit_the_height() {
        let scale = fit_scale(500.0, 2000.0);
        assert!((2000.0 * scale - RENDER_HEIGHT as f32 * SLIDE_FIT).abs() < 0.01);
    }

    #[test]
    fn small_images_are_enlarged() {
        assert!(fit_scale(640.0, 360.0) > 1.0);
        assert_eq!(fit_scale(0.0, 10.0), 1.0);
    }
}
