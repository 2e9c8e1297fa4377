use raylib::prelude::*;

/// A key press, reduced to what the presenter reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Right,
    Left,
    Home,
    End,
    Escape,
    Enter,
    Backspace,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance(i64),
    JumpTo(i64),
    ToggleFullscreen,
    Dismiss,
    ShowHelp,
    OpenGoTo,
    CopySnippet,
    Quit,
}

/// Key bindings while presenting.
pub fn command_for_key(key: KeyPress, total: usize) -> Option<Command> {
    let command = match key {
        KeyPress::Right | KeyPress::Char(' ') => Command::Advance(1),
        KeyPress::Left => Command::Advance(-1),
        KeyPress::Home => Command::JumpTo(1),
        KeyPress::End => Command::JumpTo(total as i64),
        KeyPress::Escape => Command::Dismiss,
        KeyPress::Char('f' | 'F') => Command::ToggleFullscreen,
        KeyPress::Char('h' | 'H' | '?') => Command::ShowHelp,
        KeyPress::Char('g' | 'G') => Command::OpenGoTo,
        KeyPress::Char('c' | 'C') => Command::CopySnippet,
        KeyPress::Char('q' | 'Q') => Command::Quit,
        KeyPress::Char(c @ '1'..='9') => Command::JumpTo(i64::from(c as u8 - b'0')),
        _ => return None,
    };
    Some(command)
}

/// Turns pointer press/release pairs into swipes or zone clicks.
#[derive(Debug, Clone, Copy)]
pub struct PointerTracker {
    swipe_threshold: f32,
    click_zone: f32,
    pressed_at: Option<f32>,
}

impl PointerTracker {
    pub fn new(swipe_threshold: f32, click_zone: f32) -> Self {
        Self { swipe_threshold, click_zone, pressed_at: None }
    }

    pub fn press(&mut self, x: f32) {
        self.pressed_at = Some(x);
    }

    /// Ends the gesture started by [`press`](Self::press). `width` is the
    /// width of the clickable area the coordinates are measured in.
    pub fn release(&mut self, x: f32, width: f32) -> Option<Command> {
        let start = self.pressed_at.take()?;
        let diff = start - x;
        if diff.abs() > self.swipe_threshold {
            return Some(Command::Advance(if diff > 0.0 { 1 } else { -1 }));
        }
        if x < width * self.click_zone {
            Some(Command::Advance(-1))
        } else if x > width * (1.0 - self.click_zone) {
            Some(Command::Advance(1))
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.pressed_at = None;
    }
}

/// Drains this frame's key presses from raylib.
pub fn poll_keys(rl: &mut RaylibHandle) -> Vec<KeyPress> {
    let mut keys = Vec::new();
    for (key, press) in [
        (KeyboardKey::KEY_RIGHT, KeyPress::Right),
        (KeyboardKey::KEY_LEFT, KeyPress::Left),
        (KeyboardKey::KEY_HOME, KeyPress::Home),
        (KeyboardKey::KEY_END, KeyPress::End),
        (KeyboardKey::KEY_ESCAPE, KeyPress::Escape),
        (KeyboardKey::KEY_ENTER, KeyPress::Enter),
        (KeyboardKey::KEY_KP_ENTER, KeyPress::Enter),
        (KeyboardKey::KEY_BACKSPACE, KeyPress::Backspace),
    ] {
        if rl.is_key_pressed(key) {
            keys.push(press);
        }
    }
    while let Some(c) = rl.get_char_pressed() {
        keys.push(KeyPress::Char(c));
    }
    keys
}
