//! Session settings adjustable via `set`.

use gambit_core::Promotion;

use crate::command::SessionOption;

/// Configuration knobs for a console session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Draw pieces as Unicode chess symbols.
    pub glyphs: bool,
    /// Print rank numbers and file letters around the board.
    pub coordinates: bool,
    /// Print the board after every accepted move.
    pub echo: bool,
    /// Deepest enumeration `count` and `divide` will run.
    pub max_depth: usize,
    /// Piece every promotion becomes during enumeration.
    pub promotion: Promotion,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            glyphs: true,
            coordinates: true,
            echo: true,
            max_depth: 5,
            promotion: Promotion::Queen,
        }
    }
}

impl SessionConfig {
    /// Apply one setting.
    pub fn apply(&mut self, option: SessionOption) {
        match option {
            SessionOption::Glyphs(on) => self.glyphs = on,
            SessionOption::Coordinates(on) => self.coordinates = on,
            SessionOption::Echo(on) => self.echo = on,
            SessionOption::MaxDepth(depth) => self.max_depth = depth,
            SessionOption::Promotion(piece) => self.promotion = piece,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert!(config.glyphs);
        assert!(config.coordinates);
        assert!(config.echo);
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.promotion, Promotion::Queen);
    }

    #[test]
    fn apply_each_option() {
        let mut config = SessionConfig::default();
        config.apply(SessionOption::Glyphs(false));
        config.apply(SessionOption::Coordinates(false));
        config.apply(SessionOption::Echo(false));
        config.apply(SessionOption::MaxDepth(3));
        config.apply(SessionOption::Promotion(Promotion::Knight));
        assert_eq!(
            config,
            SessionConfig {
                glyphs: false,
                coordinates: false,
                echo: false,
                max_depth: 3,
                promotion: Promotion::Knight,
            }
        );
    }
}
