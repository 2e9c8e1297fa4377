use anyhow::{Result, anyhow, bail};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod constants;
mod deck;
mod goto_prompt;
mod hud;
mod input;
mod navigator;
mod session;
mod slide;
mod state;

use crate::config::{Cli, Config};
use crate::constants::*;
use crate::deck::{discover_slides, load_texture_with_exif_rotation};
use crate::hud::{HudView, draw_hud, HELP_LINES};
use crate::input::{PointerTracker, poll_keys};
use crate::session::{Effect, Session};
use crate::slide::Slide;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "slidedeck=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;
    let title = config.window_title(&cli.dir);

    // --- Discover slides before opening a window ---
    let sources = discover_slides(&cli.dir)?;
    info!("Input path: {}, {} slide image(s)", cli.dir.display(), sources.len());

    let (mut rl, thread) = raylib::init()
        .size(config.window_width, config.window_height)
        .title(&title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.set_exit_key(None); // Escape leaves fullscreen and closes overlays, Q quits

    // --- Load Slides ---
    let mut slides = Vec::new();
    let mut snippets = Vec::new();
    for source in sources {
        match load_texture_with_exif_rotation(&mut rl, &thread, &source.image) {
            Ok(texture) => {
                slides.push(Slide::new(texture, config.transition_secs));
                snippets.push(source.snippet);
            }
            Err(e) => warn!("skipping slide: {e:#}"),
        }
    }
    if slides.is_empty() {
        bail!("no slides could be loaded from {}", cli.dir.display());
    }

    let mut session = Session::new(snippets, &config)?;
    if config.fullscreen {
        rl.toggle_fullscreen();
    }
    slides[session.current_index()].restart();

    info!(
        "{title}: presentation loaded, {} slides. Shortcuts: {}",
        session.state().total(),
        HELP_LINES.join("; ")
    );

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {e}"))?;
    let mut pointer = PointerTracker::new(config.swipe_threshold, config.click_zone);

    // --- Main Loop ---
    'running: while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // --- Input ---
        let mut effects = Vec::new();
        for key in poll_keys(&mut rl) {
            effects.extend(session.handle_key(key));
        }

        let mouse = rl.get_mouse_position();
        let mouse_delta = rl.get_mouse_delta();
        let screen_width = rl.get_screen_width() as f32;
        let slide_area_bottom = (rl.get_screen_height() - HUD_HEIGHT) as f32;

        if mouse_delta.x != 0.0 || mouse_delta.y != 0.0 {
            session.pointer_activity();
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            session.pointer_activity();
            if mouse.y < slide_area_bottom {
                pointer.press(mouse.x);
            } else {
                pointer.cancel();
            }
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(command) = pointer.release(mouse.x, screen_width) {
                effects.extend(session.handle_pointer(command));
            }
        }

        // --- Effects ---
        for effect in effects {
            match effect {
                Effect::SlideShown(index) => slides[index].restart(),
                Effect::SetFullscreen(on) => {
                    if rl.is_window_fullscreen() != on {
                        rl.toggle_fullscreen();
                    }
                }
                Effect::CopyToClipboard(text) => {
                    let result = rl
                        .set_clipboard_text(&text)
                        .map_err(|e| anyhow!("clipboard rejected snippet: {e}"));
                    session.copy_finished(result);
                }
                Effect::Quit => break 'running,
            }
        }

        // --- Update ---
        session.update(dt);
        let current = session.current_index();
        slides[current].update(dt);

        // --- Render the current slide into the fixed size "framebuffer" ---
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            d.clear_background(Color::BLACK);
            slides[current].draw(&mut d);
        });

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        // Render textures are stored upside down, hence the negative source height
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );

        draw_hud(
            &mut d,
            &HudView {
                counter: session.counter(),
                progress: session.progress(),
                controls_visible: session.controls_visible(),
                fullscreen: session.is_fullscreen(),
                feedback: session.feedback(),
                mode: session.mode(),
                total: session.state().total(),
            },
        );
    }

    info!("presentation closed");
    Ok(())
}
