//! Build script for rotclock-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates clock.toml at compile time, using the same constructors the
//!   firmware runs at boot
//! - Generates `clock_config.rs` (constants + pin-taking macro) in OUT_DIR

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use rotclock_core::config::{ClockConfig, ClockGeometry, PinAssignment};

/// GPIO0..GPIO29 on the RP2040
const RP2040_GPIO_COUNT: u8 = 30;

fn main() {
    setup_linker();
    let settings = validate_config();
    generate_config(&settings);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Values extracted from clock.toml
struct Settings {
    geometry: ClockGeometry,
    pins: PinAssignment,
    debounce_ms: u32,
    max_steps_per_poll: Option<u32>,
    undefined_policy: &'static str,
}

/// Validate clock.toml configuration at compile time
fn validate_config() -> Settings {
    println!("cargo:rerun-if-changed=clock.toml");

    let config_path = Path::new("clock.toml");

    if !config_path.exists() {
        fail(
            "clock.toml not found!",
            &["The firmware requires a clock.toml configuration file".to_string()],
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read clock.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in clock.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();

    let clock_teeth = read_int::<u16>(&config, "geometry", "clock_teeth", &mut errors);
    let gear_teeth = read_int::<u16>(&config, "geometry", "gear_teeth", &mut errors);
    let motor_steps = read_int::<u16>(&config, "geometry", "motor_steps", &mut errors);

    let pin = |key: &str, errors: &mut Vec<String>| read_int::<u8>(&config, "pins", key, errors);
    let coil_a_plus = pin("coil_a_plus", &mut errors);
    let coil_a_minus = pin("coil_a_minus", &mut errors);
    let coil_b_plus = pin("coil_b_plus", &mut errors);
    let coil_b_minus = pin("coil_b_minus", &mut errors);
    let switch_first = pin("switch_first", &mut errors);
    let switch_second = pin("switch_second", &mut errors);

    let debounce_ms = match section(&config, "switch").and_then(|s| s.get("debounce_ms")) {
        None => Some(rotclock_core::config::DEFAULT_DEBOUNCE_MS),
        Some(_) => read_int::<u32>(&config, "switch", "debounce_ms", &mut errors),
    };

    let motion = section(&config, "motion");

    let max_steps_per_poll = match motion.and_then(|s| s.get("max_steps_per_poll")) {
        None => None,
        Some(_) => read_int::<u32>(&config, "motion", "max_steps_per_poll", &mut errors),
    };

    let undefined_policy = match motion.and_then(|s| s.get("undefined_policy")) {
        None => "Assert",
        Some(toml::Value::String(s)) if s == "assert" => "Assert",
        Some(toml::Value::String(s)) if s == "fallback_to_hour" => "FallbackToHour",
        Some(_) => {
            errors.push(
                "[motion] undefined_policy must be 'assert' or 'fallback_to_hour'".to_string(),
            );
            "Assert"
        }
    };

    if !errors.is_empty() {
        fail("Invalid clock.toml", &errors);
    }

    // All fields are present past this point
    let (Some(clock_teeth), Some(gear_teeth), Some(motor_steps)) =
        (clock_teeth, gear_teeth, motor_steps)
    else {
        unreachable!()
    };

    let geometry = match ClockGeometry::new(clock_teeth, gear_teeth, motor_steps) {
        Ok(geometry) => geometry,
        Err(e) => fail("Invalid [geometry] in clock.toml", &[format!("{:?}", e)]),
    };

    let pins = PinAssignment {
        coil_a_plus: coil_a_plus.unwrap(),
        coil_a_minus: coil_a_minus.unwrap(),
        coil_b_plus: coil_b_plus.unwrap(),
        coil_b_minus: coil_b_minus.unwrap(),
        switch_first: switch_first.unwrap(),
        switch_second: switch_second.unwrap(),
    };
    if let Err(e) = pins.validate(RP2040_GPIO_COUNT) {
        fail("Invalid [pins] in clock.toml", &[format!("{:?}", e)]);
    }

    if let Some(cap) = max_steps_per_poll {
        if let Err(e) = ClockConfig::new(geometry).with_step_cap(cap) {
            fail("Invalid [motion] in clock.toml", &[format!("{:?}", e)]);
        }
    }

    println!(
        "cargo:warning=clock.toml validated: {} half-steps per clock revolution",
        geometry.halfsteps_per_clock_revolution()
    );

    Settings {
        geometry,
        pins,
        debounce_ms: debounce_ms.unwrap(),
        max_steps_per_poll,
        undefined_policy,
    }
}

/// Write the generated configuration module
fn generate_config(settings: &Settings) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let pins = &settings.pins;

    let max_steps = match settings.max_steps_per_poll {
        Some(cap) => format!("Some({})", cap),
        None => "None".to_string(),
    };

    let generated = format!(
        "// Generated by build.rs from clock.toml. Do not edit.

pub const CLOCK_TEETH: u16 = {clock_teeth};
pub const GEAR_TEETH: u16 = {gear_teeth};
pub const MOTOR_STEPS_PER_REVOLUTION: u16 = {motor_steps};
pub const DEBOUNCE_MS: u32 = {debounce_ms};
pub const MAX_STEPS_PER_POLL: Option<u32> = {max_steps};
pub const UNDEFINED_POLICY: rotclock_core::config::UndefinedPolicy =
    rotclock_core::config::UndefinedPolicy::{policy};

pub const PINS: rotclock_core::config::PinAssignment = rotclock_core::config::PinAssignment {{
    coil_a_plus: {a_plus},
    coil_a_minus: {a_minus},
    coil_b_plus: {b_plus},
    coil_b_minus: {b_minus},
    switch_first: {sw_first},
    switch_second: {sw_second},
}};

/// Take the configured GPIOs out of the embassy peripherals
macro_rules! take_clock_pins {{
    ($p:ident) => {{
        $crate::config::ClockPins {{
            coil_a_plus: ::rotclock_hal_rp2040::RpPin::new($p.PIN_{a_plus}),
            coil_a_minus: ::rotclock_hal_rp2040::RpPin::new($p.PIN_{a_minus}),
            coil_b_plus: ::rotclock_hal_rp2040::RpPin::new($p.PIN_{b_plus}),
            coil_b_minus: ::rotclock_hal_rp2040::RpPin::new($p.PIN_{b_minus}),
            switch_first: ::rotclock_hal_rp2040::RpPin::new($p.PIN_{sw_first}),
            switch_second: ::rotclock_hal_rp2040::RpPin::new($p.PIN_{sw_second}),
        }}
    }};
}}
",
        clock_teeth = settings.geometry.clock_teeth(),
        gear_teeth = settings.geometry.gear_teeth(),
        motor_steps = settings.geometry.motor_steps_per_revolution(),
        debounce_ms = settings.debounce_ms,
        max_steps = max_steps,
        policy = settings.undefined_policy,
        a_plus = pins.coil_a_plus,
        a_minus = pins.coil_a_minus,
        b_plus = pins.coil_b_plus,
        b_minus = pins.coil_b_minus,
        sw_first = pins.switch_first,
        sw_second = pins.switch_second,
    );

    fs::write(out_dir.join("clock_config.rs"), generated).unwrap();
}

fn section<'a>(config: &'a toml::Value, name: &str) -> Option<&'a toml::value::Table> {
    config.get(name).and_then(|s| s.as_table())
}

/// Read an integer field, recording a message if it is missing or out of range
fn read_int<T: TryFrom<i64>>(
    config: &toml::Value,
    section_name: &str,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<T> {
    let Some(table) = section(config, section_name) else {
        errors.push(format!("Missing [{}] section", section_name));
        return None;
    };

    match table.get(key) {
        Some(toml::Value::Integer(value)) => match T::try_from(*value) {
            Ok(value) => Some(value),
            Err(_) => {
                errors.push(format!("[{}] {} = {} is out of range", section_name, key, value));
                None
            }
        },
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section_name, key));
            None
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section_name, key));
            None
        }
    }
}

/// Shorten a message line to at most `width` characters
fn truncate(line: &str, width: usize) -> String {
    if line.chars().count() > width {
        let mut short: String = line.chars().take(width - 3).collect();
        short.push_str("...");
        short
    } else {
        line.to_string()
    }
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|line| format!("║  • {:<62} ║", truncate(line, 62)))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_line_unchanged() {
        assert_eq!(truncate("[pins] missing 'coil_a_plus'", 62), "[pins] missing 'coil_a_plus'");
    }

    #[test]
    fn test_truncate_multibyte_line() {
        let line = format!("{}é→ unexpected character", "x".repeat(58));
        let short = truncate(&line, 62);
        assert_eq!(short.chars().count(), 62);
        assert!(short.ends_with("..."));
        assert!(short.starts_with(&"x".repeat(58)));
    }
}
