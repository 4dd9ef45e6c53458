//! Minimal TOML reader for `board.toml`
//!
//! Handles only what the board file uses:
//! - `[clock]` and `[joystick]` section headers
//! - `key = value` with integer and boolean values
//! - one inline table, `pins = { left = 12, ... }`
//! - `#` comments
//!
//! Works line by line without allocation. Keys missing from the file keep
//! their defaults.

use super::types::{BoardConfig, ConfigError, JoystickPins};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Clock,
    Joystick,
}

/// Parse and validate a board configuration
pub fn parse_config(input: &str) -> Result<BoardConfig, ConfigError> {
    let mut config = BoardConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let header = header.strip_suffix(']').ok_or(ConfigError::InvalidSection)?;
            section = match header.trim() {
                "clock" => Section::Clock,
                "joystick" => Section::Joystick,
                _ => return Err(ConfigError::InvalidSection),
            };
            continue;
        }

        let (key, value) = split_key_value(line)?;
        match section {
            Section::Root => return Err(ConfigError::UnknownKey),
            Section::Clock => match key {
                "tick_hz" => config.clock.tick_hz = parse_int(value)?,
                _ => return Err(ConfigError::UnknownKey),
            },
            Section::Joystick => {
                let joystick = &mut config.joystick;
                match key {
                    "poll_ticks" => joystick.poll_ticks = parse_int(value)?,
                    "dead_zone" => joystick.dead_zone = parse_int(value)?,
                    "max_step" => joystick.max_step = parse_int(value)?,
                    "active_low" => joystick.active_low = parse_bool(value)?,
                    "pins" => parse_pins(value, &mut joystick.pins)?,
                    _ => return Err(ConfigError::UnknownKey),
                }
            }
        }
    }

    config.validate()?;
    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn split_key_value(line: &str) -> Result<(&str, &str), ConfigError> {
    let (key, value) = line.split_once('=').ok_or(ConfigError::InvalidValue)?;
    Ok((key.trim(), value.trim()))
}

fn parse_int<T: TryFrom<i64>>(value: &str) -> Result<T, ConfigError> {
    let digits = strip_separators(value).ok_or(ConfigError::InvalidValue)?;
    let n: i64 = digits.parse().map_err(|_| ConfigError::InvalidValue)?;
    T::try_from(n).map_err(|_| ConfigError::OutOfRange)
}

/// TOML allows `10_000`; copy the digits without separators
fn strip_separators(value: &str) -> Option<heapless::String<20>> {
    let mut out = heapless::String::new();
    for ch in value.chars().filter(|&c| c != '_') {
        out.push(ch).ok()?;
    }
    Some(out)
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

/// Parse `{ left = 12, right = 13, ... }`
fn parse_pins(value: &str, pins: &mut JoystickPins) -> Result<(), ConfigError> {
    let inner = value
        .strip_prefix('{')
        .and_then(|v| v.strip_suffix('}'))
        .ok_or(ConfigError::InvalidValue)?;

    for entry in inner.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (name, pin) = split_key_value(entry)?;
        let pin: u8 = parse_int(pin)?;
        match name {
            "left" => pins.left = pin,
            "right" => pins.right = pin,
            "up" => pins.up = pin,
            "down" => pins.down = pin,
            "center" => pins.center = pin,
            _ => return Err(ConfigError::UnknownKey),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD_TOML: &str = r#"
# Five-way joystick on GPIO 2..6
[clock]
tick_hz = 1_000

[joystick]
poll_ticks = 25   # 25 ms
dead_zone = 2
max_step = 20
active_low = false
pins = { left = 2, right = 3, up = 4, down = 5, center = 6 }
"#;

    #[test]
    fn test_parse_full_file() {
        let config = parse_config(BOARD_TOML).unwrap();
        assert_eq!(config.clock.tick_hz, 1000);
        assert_eq!(config.joystick.poll_ticks, 25);
        assert_eq!(config.joystick.dead_zone, 2);
        assert_eq!(config.joystick.max_step, 20);
        assert!(!config.joystick.active_low);
        assert_eq!(config.joystick.pins.as_array(), [2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(parse_config(""), Ok(BoardConfig::default()));
    }

    #[test]
    fn test_partial_pins_keep_defaults() {
        let config = parse_config("[joystick]\npins = { center = 20 }\n").unwrap();
        assert_eq!(config.joystick.pins.center, 20);
        assert_eq!(config.joystick.pins.left, JoystickPins::default().left);
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(
            parse_config("[display]\nwidth = 320\n"),
            Err(ConfigError::InvalidSection)
        );
    }

    #[test]
    fn test_unclosed_section() {
        assert_eq!(parse_config("[clock\n"), Err(ConfigError::InvalidSection));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            parse_config("[clock]\nprescaler = 4\n"),
            Err(ConfigError::UnknownKey)
        );
        assert_eq!(parse_config("tick_hz = 1000\n"), Err(ConfigError::UnknownKey));
    }

    #[test]
    fn test_bad_values() {
        assert_eq!(
            parse_config("[joystick]\nactive_low = yes\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[joystick]\ndead_zone = three\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[joystick]\nmax_step = 300\n"),
            Err(ConfigError::OutOfRange)
        );
    }

    #[test]
    fn test_validation_applies() {
        assert_eq!(
            parse_config("[joystick]\npins = { left = 3, right = 3 }\n"),
            Err(ConfigError::DuplicatePin)
        );
        assert_eq!(
            parse_config("[clock]\ntick_hz = 20\n"),
            Err(ConfigError::OutOfRange)
        );
    }
}
