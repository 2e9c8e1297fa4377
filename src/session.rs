//! Presenter logic between raw input and the window.
//!
//! A [`Session`] owns the navigator and the overlay state. Key presses and
//! pointer gestures go in, [`Effect`]s for the platform layer come out; no
//! raylib call happens here.

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::goto_prompt::GoToPrompt;
use crate::hud::{CopyFeedback, IdleFade, ProgressBar, SlideCounter};
use crate::input::{Command, KeyPress, command_for_key};
use crate::navigator::{NavigationError, NavigationState, Navigator};
use crate::state::Mode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SlideShown(usize), // zero-based index of the slide that became current
    SetFullscreen(bool),
    CopyToClipboard(String),
    Quit,
}

pub struct Session {
    navigator: Navigator<SlideCounter, ProgressBar>,
    snippets: Vec<Option<String>>,
    mode: Mode,
    fullscreen: bool,
    feedback: CopyFeedback,
    idle: IdleFade,
}

impl Session {
    /// One entry in `snippets` per slide.
    pub fn new(snippets: Vec<Option<String>>, config: &Config) -> Result<Self, NavigationError> {
        let navigator = Navigator::new(snippets.len(), SlideCounter::default(), ProgressBar::default())?;
        let mut session = Self {
            navigator,
            snippets,
            mode: Mode::Presenting,
            fullscreen: config.fullscreen,
            feedback: CopyFeedback::new(config.copy_feedback_secs),
            idle: IdleFade::new(config.idle_hide_secs),
        };
        session.idle.fullscreen_changed(session.fullscreen);

        if config.start_slide != 1 {
            if let Err(e) = session.navigator.jump_to(config.start_slide) {
                warn!("start slide ignored: {e}");
            }
        }
        Ok(session)
    }

    pub fn state(&self) -> NavigationState {
        self.navigator.state()
    }

    pub fn current_index(&self) -> usize {
        self.navigator.state().index()
    }

    pub fn counter(&self) -> &SlideCounter {
        self.navigator.counter()
    }

    pub fn progress(&self) -> &ProgressBar {
        self.navigator.progress()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn controls_visible(&self) -> bool {
        self.idle.controls_visible()
    }

    pub fn feedback(&self) -> Option<&'static str> {
        self.feedback.label()
    }

    pub fn handle_key(&mut self, key: KeyPress) -> Vec<Effect> {
        if let Mode::GoTo(prompt) = &mut self.mode {
            match key {
                KeyPress::Char(c) => prompt.push(c),
                KeyPress::Backspace => prompt.backspace(),
                KeyPress::Escape => self.mode = Mode::Presenting,
                KeyPress::Enter => {
                    let target = prompt.submit();
                    self.mode = Mode::Presenting;
                    if let Some(target) = target {
                        return self.apply(Command::JumpTo(target));
                    }
                }
                _ => {}
            }
            return Vec::new();
        }

        match command_for_key(key, self.navigator.state().total()) {
            Some(command) => self.apply(command),
            None => Vec::new(),
        }
    }

    /// Swipes and zone clicks only act on the slide itself, not through an overlay.
    pub fn handle_pointer(&mut self, command: Command) -> Vec<Effect> {
        if self.mode != Mode::Presenting {
            return Vec::new();
        }
        self.apply(command)
    }

    pub fn pointer_activity(&mut self) {
        self.idle.pointer_activity(self.fullscreen);
    }

    pub fn copy_finished(&mut self, result: anyhow::Result<()>) {
        match result {
            Ok(()) => {
                debug!(slide = self.navigator.state().current(), "snippet copied");
                self.feedback.copied();
            }
            Err(e) => {
                warn!("failed to copy snippet: {e:#}");
                self.feedback.failed();
            }
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.feedback.update(dt);
        self.idle.update(dt);
    }

    pub fn apply(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Advance(delta) => {
                let state = self.navigator.advance(delta);
                vec![Effect::SlideShown(state.index())]
            }
            Command::JumpTo(target) => match self.navigator.jump_to(target) {
                Ok(state) => vec![Effect::SlideShown(state.index())],
                Err(e) => {
                    debug!("jump ignored: {e}");
                    Vec::new()
                }
            },
            Command::ToggleFullscreen => vec![self.set_fullscreen(!self.fullscreen)],
            Command::Dismiss => {
                if self.mode == Mode::Help {
                    self.mode = Mode::Presenting;
                }
                if self.fullscreen {
                    vec![self.set_fullscreen(false)]
                } else {
                    Vec::new()
                }
            }
            Command::ShowHelp => {
                self.mode = Mode::Help;
                Vec::new()
            }
            Command::OpenGoTo => {
                self.mode = Mode::GoTo(GoToPrompt::new());
                Vec::new()
            }
            Command::CopySnippet => match &self.snippets[self.current_index()] {
                Some(text) => vec![Effect::CopyToClipboard(text.clone())],
                None => {
                    debug!(slide = self.navigator.state().current(), "no snippet to copy");
                    Vec::new()
                }
            },
            Command::Quit => {
                info!("quitting presentation");
                vec![Effect::Quit]
            }
        }
    }

    fn set_fullscreen(&mut self, on: bool) -> Effect {
        self.fullscreen = on;
        self.idle.fullscreen_changed(on);
        debug!(fullscreen = on, "fullscreen toggled");
        Effect::SetFullscreen(on)
    }
}
