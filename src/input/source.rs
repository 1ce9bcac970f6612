use crate::game::Direction;

use super::handler::KeyAction;

/// What an input source reported since the previous poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Poll {
    /// Most recent direction request, if any
    pub direction: Option<Direction>,
    pub quit: bool,
}

/// Non-blocking source of player requests, polled once per tick
pub trait InputSource {
    fn poll(&mut self) -> Poll;
}

/// Keyboard state fed by terminal events between ticks.
///
/// Directions go into a single slot where the latest key press wins.
#[derive(Debug, Default)]
pub struct KeyboardInput {
    latest: Option<Direction>,
    acknowledged: bool,
    restart: bool,
    quit: bool,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(direction) => self.latest = Some(direction),
            KeyAction::Acknowledge => self.acknowledged = true,
            KeyAction::Restart => self.restart = true,
            KeyAction::Quit => self.quit = true,
            KeyAction::None => {}
        }
    }

    /// Consume a pending game-over acknowledgement
    pub fn take_acknowledgement(&mut self) -> bool {
        std::mem::take(&mut self.acknowledged)
    }

    /// Consume a pending restart request
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart)
    }

    /// Drop everything buffered for the previous round
    pub fn clear(&mut self) {
        self.latest = None;
        self.acknowledged = false;
        self.restart = false;
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> Poll {
        Poll {
            direction: self.latest.take(),
            quit: self.quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_direction_wins() {
        let mut input = KeyboardInput::new();
        input.push(KeyAction::Turn(Direction::Up));
        input.push(KeyAction::Turn(Direction::Left));

        assert_eq!(input.poll().direction, Some(Direction::Left));
    }

    #[test]
    fn test_poll_drains_direction() {
        let mut input = KeyboardInput::new();
        input.push(KeyAction::Turn(Direction::Down));

        assert_eq!(input.poll().direction, Some(Direction::Down));
        assert_eq!(input.poll(), Poll::default());
    }

    #[test]
    fn test_quit_is_sticky() {
        let mut input = KeyboardInput::new();
        input.push(KeyAction::Quit);

        assert!(input.poll().quit);
        assert!(input.poll().quit);
    }

    #[test]
    fn test_acknowledgement_is_consumed() {
        let mut input = KeyboardInput::new();
        input.push(KeyAction::Acknowledge);

        assert!(input.take_acknowledgement());
        assert!(!input.take_acknowledgement());
    }

    #[test]
    fn test_clear_keeps_quit() {
        let mut input = KeyboardInput::new();
        input.push(KeyAction::Turn(Direction::Up));
        input.push(KeyAction::Restart);
        input.push(KeyAction::Quit);

        input.clear();

        assert!(!input.take_restart());
        assert_eq!(
            input.poll(),
            Poll {
                direction: None,
                quit: true
            }
        );
    }
}
