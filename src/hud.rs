//! Everything drawn on top of the slide: counter, progress bar, control
//! hints, copy feedback and the modal overlays.

use raylib::prelude::*;

use crate::constants::*;
use crate::goto_prompt::GoToPrompt;
use crate::navigator::{CounterObserver, ProgressObserver};
use crate::state::Mode;

pub const HELP_LINES: [&str; 9] = [
    "Right / Space   next slide",
    "Left            previous slide",
    "Home / End      first / last slide",
    "1 - 9           jump to slide",
    "G               go to slide number",
    "F               toggle fullscreen",
    "C               copy slide snippet",
    "H / ?           this help, Esc closes",
    "Q               quit",
];

/// Text of the "current / total" counter.
#[derive(Debug, Default)]
pub struct SlideCounter {
    text: String,
}

impl SlideCounter {
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl CounterObserver for SlideCounter {
    fn counter_changed(&mut self, current: usize, total: usize) -> anyhow::Result<()> {
        self.text = format!("{current} / {total}");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ProgressBar {
    fraction: f32,
}

impl ProgressBar {
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Filled width for a bar `width` pixels wide.
    pub fn fill_width(&self, width: i32) -> i32 {
        (width as f32 * self.fraction()).round() as i32
    }
}

impl ProgressObserver for ProgressBar {
    fn progress_changed(&mut self, fraction: f32) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&fraction) {
            anyhow::bail!("progress {fraction} is not a fraction");
        }
        self.fraction = fraction;
        Ok(())
    }
}

/// Short-lived "Copied!" / "Failed" label.
#[derive(Debug)]
pub struct CopyFeedback {
    duration: f32,
    shown: Option<(&'static str, f32)>,
}

impl CopyFeedback {
    pub fn new(duration: f32) -> Self {
        Self { duration, shown: None }
    }

    pub fn copied(&mut self) {
        self.shown = Some(("Copied!", self.duration));
    }

    pub fn failed(&mut self) {
        self.shown = Some(("Failed", self.duration));
    }

    pub fn update(&mut self, dt: f32) {
        if let Some((_, remaining)) = &mut self.shown {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.shown = None;
            }
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        self.shown.map(|(label, _)| label)
    }
}

/// Hides the controls after a quiet period, but only in fullscreen.
#[derive(Debug)]
pub struct IdleFade {
    hide_after: f32,
    remaining: Option<f32>,
    visible: bool,
}

impl IdleFade {
    pub fn new(hide_after: f32) -> Self {
        Self { hide_after, remaining: None, visible: true }
    }

    pub fn pointer_activity(&mut self, fullscreen: bool) {
        self.visible = true;
        self.remaining = fullscreen.then_some(self.hide_after);
    }

    /// Leaving fullscreen always brings the controls back.
    pub fn fullscreen_changed(&mut self, fullscreen: bool) {
        self.pointer_activity(fullscreen);
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(remaining) = &mut self.remaining {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.remaining = None;
                self.visible = false;
            }
        }
    }

    pub fn controls_visible(&self) -> bool {
        self.visible
    }
}

pub struct HudView<'a> {
    pub counter: &'a SlideCounter,
    pub progress: &'a ProgressBar,
    pub controls_visible: bool,
    pub fullscreen: bool,
    pub feedback: Option<&'static str>,
    pub mode: &'a Mode,
    pub total: usize,
}

pub fn draw_hud(d: &mut RaylibDrawHandle, view: &HudView) {
    let sw = d.get_screen_width();
    let sh = d.get_screen_height();

    // Progress bar stays visible even when the controls fade out
    d.draw_rectangle(0, sh - PROGRESS_HEIGHT, sw, PROGRESS_HEIGHT, Color::new(255, 255, 255, 40));
    d.draw_rectangle(0, sh - PROGRESS_HEIGHT, view.progress.fill_width(sw), PROGRESS_HEIGHT, Color::SKYBLUE);

    if view.controls_visible {
        let y = sh - HUD_HEIGHT + (HUD_HEIGHT - PROGRESS_HEIGHT - HUD_FONT_SIZE) / 2;
        let counter_width = d.measure_text(view.counter.text(), HUD_FONT_SIZE);
        d.draw_text(view.counter.text(), sw - counter_width - 16, y, HUD_FONT_SIZE, Color::WHITE);
        let hints = if view.fullscreen { "<  >   F exit fullscreen   H help" } else { "<  >   F fullscreen   H help" };
        d.draw_text(hints, 16, y, HUD_FONT_SIZE, Color::LIGHTGRAY);
    }

    if let Some(label) = view.feedback {
        let width = d.measure_text(label, HUD_FONT_SIZE);
        d.draw_text(label, (sw - width) / 2, sh - HUD_HEIGHT - HUD_FONT_SIZE, HUD_FONT_SIZE, Color::LIME);
    }

    match view.mode {
        Mode::Presenting => {}
        Mode::Help => draw_panel(d, "Keyboard shortcuts", &HELP_LINES),
        Mode::GoTo(prompt) => {
            let entry = format!("{}_", prompt.text());
            draw_panel(d, &GoToPrompt::label(view.total), &[entry.as_str()]);
        }
    }
}

fn draw_panel(d: &mut RaylibDrawHandle, title: &str, lines: &[&str]) {
    let sw = d.get_screen_width();
    let sh = d.get_screen_height();
    let line_height = OVERLAY_FONT_SIZE + 8;

    let widest = lines
        .iter()
        .chain(std::iter::once(&title))
        .map(|l| d.measure_text(l, OVERLAY_FONT_SIZE))
        .max()
        .unwrap_or(0);
    let panel_width = widest + 64;
    let panel_height = line_height * (lines.len() as i32 + 1) + 48;
    let x = (sw - panel_width) / 2;
    let y = (sh - panel_height) / 2;

    d.draw_rectangle(0, 0, sw, sh, Color::new(0, 0, 0, 140));
    d.draw_rectangle(x, y, panel_width, panel_height, Color::new(30, 30, 36, 240));
    d.draw_rectangle_lines(x, y, panel_width, panel_height, Color::GRAY);

    d.draw_text(title, x + 32, y + 24, OVERLAY_FONT_SIZE, Color::WHITE);
    for (i, line) in lines.iter().enumerate() {
        let line_y = y + 24 + line_height * (i as i32 + 1);
        d.draw_text(line, x + 32, line_y, OVERLAY_FONT_SIZE, Color::LIGHTGRAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_renders_position() {
        let mut counter = SlideCounter::default();
        counter.counter_changed(3, 13).unwrap();
        assert_eq!(counter.text(), "3 / 13");
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        let mut bar = ProgressBar::default();
        bar.progress_changed(0.25).unwrap();
        assert_eq!(bar.fill_width(800), 200);
        assert!(bar.progress_changed(1.5).is_err());
        assert_eq!(bar.fraction(), 0.25);
    }

    #[test]
    fn copy_feedback_expires() {
        let mut feedback = CopyFeedback::new(2.0);
        feedback.copied();
        feedback.update(1.5);
        assert_eq!(feedback.label(), Some("Copied!"));
        feedback.failed();
        feedback.update(1.5);
        assert_eq!(feedback.label(), Some("Failed"));
        feedback.update(0.6);
        assert_eq!(feedback.label(), None);
    }

    #[test]
    fn controls_fade_only_in_fullscreen() {
        let mut idle = IdleFade::new(3.0);
        idle.pointer_activity(false);
        idle.update(10.0);
        assert!(idle.controls_visible());

        idle.fullscreen_changed(true);
        idle.update(2.0);
        assert!(idle.controls_visible());
        idle.pointer_activity(true);
        idle.update(2.5);
        assert!(idle.controls_visible());
        idle.update(0.6);
        assert!(!idle.controls_visible());

        idle.fullscreen_changed(false);
        assert!(idle.controls_visible());
    }
}
