use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::render::Style;
use crate::rule_set::RuleSet;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },

    #[error("Frame rate must be positive")]
    ZeroFrameRate,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "life", version, about = "Conway's Game of Life in the terminal")]
pub struct Config {
    /// Width of the board, in cells.
    #[arg(short = 'W', long, default_value_t = 25)]
    pub width: usize,

    /// Height of the board, in cells.
    #[arg(short = 'H', long, default_value_t = 25)]
    pub height: usize,

    /// Generations drawn per second.
    #[arg(long, default_value_t = 10)]
    pub fps: u32,

    /// Passes over the pattern library when seeding the board.
    #[arg(long, default_value_t = 5)]
    pub iterations: usize,

    /// Random spots tried for each pattern before giving up on it.
    #[arg(long, default_value_t = 10)]
    pub tries: usize,

    /// Seed for the pattern placement. A random one is used when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Birth/survival rule, e.g. b3/s23.
    #[arg(long, default_value_t = RuleSet::default())]
    pub rule: RuleSet,

    /// Character drawn for live cells.
    #[arg(long, default_value_t = '.')]
    pub alive: char,

    /// Character drawn for dead cells.
    #[arg(long, default_value_t = ' ')]
    pub dead: char,

    /// Draw 2x4 cells per character using braille dots. Overrides the glyphs.
    #[arg(long)]
    pub braille: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            fps: 10,
            iterations: 5,
            tries: 10,
            seed: None,
            rule: RuleSet::default(),
            alive: '.',
            dead: ' ',
            braille: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }

        if self.fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }

        Ok(())
    }

    /// Time between two frames. Expects a validated config; the clamp only guards the division.
    pub fn frame_time(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn style(&self) -> Style {
        if self.braille {
            Style::Braille
        } else {
            Style::Glyphs {
                alive: self.alive,
                dead: self.dead,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use clap::CommandFactory;
    use clap::Parser;

    use super::Config;
    use super::ConfigError;
    use crate::render::Style;
    use crate::rule_set::RuleSet;
    use crate::rule_set::B3S23;

    #[test]
    fn cli_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn defaults_match_cli() {
        let parsed = Config::try_parse_from(["life"]).unwrap();
        let default = Config::default();

        assert_eq!(parsed.width, default.width);
        assert_eq!(parsed.height, default.height);
        assert_eq!(parsed.fps, default.fps);
        assert_eq!(parsed.iterations, default.iterations);
        assert_eq!(parsed.tries, default.tries);
        assert_eq!(parsed.seed, None);
        assert_eq!(parsed.rule, B3S23);
        assert_eq!(parsed.style(), default.style());
        assert_eq!(default.frame_time(), Duration::from_millis(100));
    }

    #[test]
    fn parse_flags() {
        let config = Config::try_parse_from([
            "life", "-W", "40", "-H", "12", "--fps", "4", "--seed", "9", "--rule", "b36/s23",
            "--alive", "#", "--dead", "-",
        ])
        .unwrap();

        assert_eq!((config.width, config.height), (40, 12));
        assert_eq!(config.frame_time(), Duration::from_millis(250));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.rule, RuleSet::new(0b100_1000, 0b1100));
        assert_eq!(
            config.style(),
            Style::Glyphs {
                alive: '#',
                dead: '-'
            }
        );
    }

    #[test]
    fn braille_overrides_glyphs() {
        let config = Config::try_parse_from(["life", "--braille", "--alive", "#"]).unwrap();

        assert_eq!(config.style(), Style::Braille);
    }

    #[test]
    fn bad_rule_is_rejected() {
        assert!(Config::try_parse_from(["life", "--rule", "b9/s23"]).is_err());
    }

    #[test]
    fn validate() {
        assert_eq!(Config::default().validate(), Ok(()));

        let empty = Config {
            width: 0,
            ..Config::default()
        };
        assert_eq!(
            empty.validate(),
            Err(ConfigError::EmptyBoard {
                width: 0,
                height: 25
            })
        );

        let frozen = Config {
            fps: 0,
            ..Config::default()
        };
        assert_eq!(frozen.validate(), Err(ConfigError::ZeroFrameRate));

        // Unvalidated configs don't divide by zero
        assert_eq!(frozen.frame_time(), Duration::from_secs(1));
    }
}
