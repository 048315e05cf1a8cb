use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use wire3d_core::Buttons;

/// Without keyboard enhancement, terminals report presses and auto-repeats
/// but no releases, so a button counts as held for this many frames after its
/// last key event. Must outlast the OS auto-repeat delay (up to about 600 ms).
const HOLD_FRAMES: u8 = 40;

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press(Buttons),
    Quit,
}

/// map terminal keys to handheld buttons
pub fn map_key(event: &KeyEvent) -> Option<KeyAction> {
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }
    let buttons = match event.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(KeyAction::Quit),
        KeyCode::Char('a') | KeyCode::Char(' ') | KeyCode::Enter => Buttons::A,
        KeyCode::Char('b') | KeyCode::Char('c') => Buttons::B,
        KeyCode::Char('s') => Buttons::START,
        KeyCode::Tab => Buttons::SELECT,
        KeyCode::Left => Buttons::LEFT,
        KeyCode::Right => Buttons::RIGHT,
        KeyCode::Up => Buttons::UP,
        KeyCode::Down => Buttons::DOWN,
        KeyCode::Char('l') => Buttons::L,
        KeyCode::Char('r') => Buttons::R,
        _ => return None,
    };
    Some(KeyAction::Press(buttons))
}

/// Result of folding one frame's key events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFrame {
    pub buttons: Buttons,
    pub quit: bool,
}

/// Turns a stream of key events into per-frame button snapshots
#[derive(Debug, Default)]
pub struct KeyboardInput {
    hold: [u8; 16],
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the events seen since the previous frame into a snapshot.
    ///
    /// Release events, when the terminal reports them, end the hold at once.
    pub fn frame<I: IntoIterator<Item = KeyEvent>>(&mut self, events: I) -> InputFrame {
        for frames in self.hold.iter_mut() {
            *frames = frames.saturating_sub(1);
        }

        let mut quit = false;
        for event in events {
            let released = event.kind == KeyEventKind::Release;
            match map_key(&event) {
                Some(KeyAction::Press(buttons)) => {
                    let frames = if released { 0 } else { HOLD_FRAMES };
                    for button in buttons.iter() {
                        self.hold[button.bits().trailing_zeros() as usize] = frames;
                    }
                }
                _ if released => {}
                Some(KeyAction::Quit) => quit = true,
                None => tracing::warn!(code = ?event.code, "unmapped key"),
            }
        }

        let buttons = self
            .hold
            .iter()
            .enumerate()
            .filter(|(_, frames)| **frames > 0)
            .fold(Buttons::empty(), |held, (bit, _)| {
                held | Buttons::from_bits_truncate(1 << bit)
            });
        InputFrame { buttons, quit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_KEYS: [KeyEvent; 0] = [];

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_keymap() {
        assert_eq!(map_key(&key(KeyCode::Char('a'))), Some(KeyAction::Press(Buttons::A)));
        assert_eq!(map_key(&key(KeyCode::Char(' '))), Some(KeyAction::Press(Buttons::A)));
        assert_eq!(map_key(&key(KeyCode::Char('b'))), Some(KeyAction::Press(Buttons::B)));
        assert_eq!(map_key(&key(KeyCode::Up)), Some(KeyAction::Press(Buttons::UP)));
        assert_eq!(map_key(&key(KeyCode::Esc)), Some(KeyAction::Quit));
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        assert_eq!(map_key(&key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_press_is_held_then_released() {
        let mut input = KeyboardInput::new();
        assert_eq!(input.frame([key(KeyCode::Char('a'))]).buttons, Buttons::A);
        for _ in 1..HOLD_FRAMES {
            assert_eq!(input.frame(NO_KEYS).buttons, Buttons::A);
        }
        assert_eq!(input.frame(NO_KEYS).buttons, Buttons::empty());
    }

    #[test]
    fn test_repeats_keep_button_held() {
        let mut input = KeyboardInput::new();
        input.frame([key(KeyCode::Char('a'))]);
        for _ in 0..3 * HOLD_FRAMES {
            input.frame(NO_KEYS);
            let frame = input.frame([key(KeyCode::Char('a'))]);
            assert!(frame.buttons.contains(Buttons::A));
        }
    }

    #[test]
    fn test_release_ends_hold() {
        let mut input = KeyboardInput::new();
        assert_eq!(input.frame([key(KeyCode::Char('b'))]).buttons, Buttons::B);
        assert_eq!(input.frame(NO_KEYS).buttons, Buttons::B);

        let mut release = key(KeyCode::Char('b'));
        release.kind = KeyEventKind::Release;
        assert_eq!(input.frame([release]).buttons, Buttons::empty());

        // A lone release never presses anything
        let mut release = key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        assert_eq!(input.frame([release]).buttons, Buttons::empty());
    }

    #[test]
    fn test_auto_repeat_delay_is_one_press() {
        // Press at frame 0, auto-repeat from frame 30 (500 ms) every 2 frames
        let mut input = KeyboardInput::new();
        let mut previous = Buttons::empty();
        let mut rising_edges = 0;
        for frame in 0..120 {
            let events = if frame == 0 || (frame >= 30 && frame % 2 == 0) {
                vec![key(KeyCode::Char('a'))]
            } else {
                Vec::new()
            };
            let buttons = input.frame(events).buttons;
            if buttons.pressed_since(previous).contains(Buttons::A) {
                rising_edges += 1;
            }
            assert!(buttons.contains(Buttons::A), "released at frame {frame}");
            previous = buttons;
        }
        assert_eq!(rising_edges, 1);
    }

    #[test]
    fn test_quit_and_buttons_together() {
        let mut input = KeyboardInput::new();
        let frame = input.frame([key(KeyCode::Char('b')), key(KeyCode::Char('q'))]);
        assert!(frame.quit);
        assert_eq!(frame.buttons, Buttons::B);
    }
}
