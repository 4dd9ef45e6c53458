//! Build script for joypid-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time
//! - Links the prebuilt GUI library archive

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default archive name (`lib<name>.a`) of the GUI library
const DEFAULT_GUI_LIB: &str = "emWin";

/// Text columns inside the error box
const BOX_WIDTH: usize = 66;

fn main() {
    setup_linker();
    validate_config();
    link_gui_library();
}

/// Put memory.x on the linker search path
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("memory.x"), include_bytes!("memory.x")).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Point the linker at the GUI library
///
/// `JOYPID_GUI_LIB_DIR` names the directory holding the archive, and
/// `JOYPID_GUI_LIB` overrides its name.
fn link_gui_library() {
    println!("cargo:rerun-if-env-changed=JOYPID_GUI_LIB_DIR");
    println!("cargo:rerun-if-env-changed=JOYPID_GUI_LIB");

    let lib = env::var("JOYPID_GUI_LIB").unwrap_or_else(|_| DEFAULT_GUI_LIB.to_string());

    match env::var("JOYPID_GUI_LIB_DIR") {
        Ok(dir) => println!("cargo:rustc-link-search=native={}", dir),
        Err(_) => println!(
            "cargo:warning=JOYPID_GUI_LIB_DIR not set; lib{}.a must be on the linker path",
            lib
        ),
    }
    println!("cargo:rustc-link-lib=static={}", lib);
}

/// Abort the build with a boxed report
fn fail(title: &str, lines: &[String]) -> ! {
    let rule = "─".repeat(BOX_WIDTH + 2);
    let row = |text: &str| {
        let text: String = text.chars().take(BOX_WIDTH).collect();
        format!("│  {:<width$}│\n", text, width = BOX_WIDTH)
    };

    let mut report = format!("\n┌{}┐\n", rule);
    report += &row(title);
    if !lines.is_empty() {
        report += &format!("├{}┤\n", rule);
        for line in lines {
            report += &row(line);
        }
    }
    report += &format!("└{}┘\n", rule);

    panic!("{}", report);
}

/// Validate board.toml at compile time
///
/// Mirrors the range checks of `BoardConfig::validate`.
fn validate_config() {
    println!("cargo:rerun-if-changed=board.toml");

    let content = fs::read_to_string(Path::new("board.toml"))
        .unwrap_or_else(|e| fail("ERROR: cannot read board.toml", &[e.to_string()]));

    let config: toml::Value = toml::from_str(&content).unwrap_or_else(|e| {
        let lines: Vec<String> = e.to_string().lines().map(str::to_string).collect();
        fail("ERROR: invalid TOML syntax in board.toml", &lines)
    });

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_clock(&config, &mut errors);
    validate_joystick(&config, &mut errors);

    if !errors.is_empty() {
        let lines: Vec<String> = errors.iter().map(|e| format!("• {}", e)).collect();
        fail("ERROR: invalid board configuration", &lines);
    }

    println!("cargo:warning=board.toml validated successfully");
}

/// Only [clock] and [joystick] are understood by the firmware reader
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        return;
    };

    for (name, value) in table {
        match (name.as_str(), value) {
            ("clock" | "joystick", toml::Value::Table(_)) => {}
            ("clock" | "joystick", _) => errors.push(format!("[{}] must be a table", name)),
            _ => errors.push(format!("unknown top-level key '{}'", name)),
        }
    }
}

/// Check an optional integer key against an inclusive range
fn check_int(
    table: &toml::value::Table,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    match table.get(key) {
        None => {}
        Some(toml::Value::Integer(n)) if (min..=max).contains(n) => {}
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max))
        }
        Some(_) => errors.push(format!("[{}] {} must be an integer", section, key)),
    }
}

fn validate_clock(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(clock) = config.get("clock").and_then(|c| c.as_table()) else {
        return;
    };

    for key in clock.keys() {
        if key != "tick_hz" {
            errors.push(format!("[clock] unknown key '{}'", key));
        }
    }
    check_int(clock, "clock", "tick_hz", 100, 10_000, errors);
}

fn validate_joystick(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(joystick) = config.get("joystick").and_then(|j| j.as_table()) else {
        return;
    };

    for key in joystick.keys() {
        if !["poll_ticks", "dead_zone", "max_step", "active_low", "pins"].contains(&key.as_str()) {
            errors.push(format!("[joystick] unknown key '{}'", key));
        }
    }

    check_int(joystick, "joystick", "poll_ticks", 1, 65_535, errors);
    check_int(joystick, "joystick", "dead_zone", 0, 255, errors);
    check_int(joystick, "joystick", "max_step", 1, 255, errors);

    if let Some(value) = joystick.get("active_low") {
        if !value.is_bool() {
            errors.push("[joystick] active_low must be true or false".to_string());
        }
    }

    let pins = match joystick.get("pins") {
        None => return,
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[joystick] pins must be an inline table".to_string());
            return;
        }
    };

    let mut seen = Vec::new();
    for (name, pin) in pins {
        if !["left", "right", "up", "down", "center"].contains(&name.as_str()) {
            errors.push(format!("[joystick] pins: unknown button '{}'", name));
            continue;
        }
        match pin {
            toml::Value::Integer(n) if (0..30).contains(n) => {
                if seen.contains(n) {
                    errors.push(format!("[joystick] pins: GPIO {} used twice", n));
                }
                seen.push(*n);
            }
            _ => errors.push(format!("[joystick] pins.{} must be a GPIO 0-29", name)),
        }
    }
}
