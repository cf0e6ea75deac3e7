//! Command-line driver for the colorpick core.
//!
//! ```text
//! colorpick parse <hex>...
//! colorpick shades <hex>
//! colorpick presets <hex>
//! colorpick session <config.json> [action]...
//! ```
//!
//! Session actions: `toggle`, `preset:<i>`, `shade:<i>`, `alpha:<progress>`,
//! `hex:<text>`, `drag:<sx>,<sy>,<x>,<y>`, `new`, `confirm`, `dismiss`.
//! Drags use a fixed 200x200 sat/val plane with the hue slider to its right
//! and the alpha slider below.

use std::process::ExitCode;

use colorpick_core::{
    ColorParseError, ConfigError, Hsv, MATERIAL_COLORS, PickerConfig, PickerError, PickerEvent,
    PickerMode, PickerPanels, PickerSession, color_shades, load_presets, parse_color_string,
};
use kurbo::{Point, Rect};
use thiserror::Error;

#[derive(Debug, Error)]
enum DemoError {
    #[error("{0}")]
    Usage(String),
    #[error("bad action {0:?}")]
    BadAction(String),
    #[error(transparent)]
    Parse(#[from] ColorParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Picker(#[from] PickerError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const USAGE: &str = "usage: colorpick <parse|shades|presets|session> ...";

fn demo_panels() -> PickerPanels {
    PickerPanels::new(
        Rect::new(1.0, 1.0, 201.0, 201.0),
        Rect::new(211.0, 1.0, 241.0, 201.0),
        Some(Rect::new(1.0, 211.0, 241.0, 231.0)),
    )
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), DemoError> {
    let (command, rest) = args
        .split_first()
        .ok_or_else(|| DemoError::Usage(USAGE.to_string()))?;

    match command.as_str() {
        "parse" => {
            for text in rest {
                let color = parse_color_string(text)?;
                let hsv = Hsv::from_color(color);
                println!(
                    "{text}: {color} a={} r={} g={} b={} h={:.1} s={:.3} v={:.3}",
                    color.alpha(),
                    color.red(),
                    color.green(),
                    color.blue(),
                    hsv.hue,
                    hsv.saturation,
                    hsv.value
                );
            }
        }
        "shades" => {
            let color = parse_color_string(single(rest)?)?;
            for shade in color_shades(color) {
                println!("{shade}");
            }
        }
        "presets" => {
            let color = parse_color_string(single(rest)?)?;
            for (i, preset) in load_presets(&MATERIAL_COLORS, color).iter().enumerate() {
                let marker = if *preset == color { " *" } else { "" };
                println!("{i:2} {preset}{marker}");
            }
        }
        "session" => {
            let (path, actions) = rest.split_first().ok_or_else(|| {
                DemoError::Usage("usage: colorpick session <config.json> [action]...".into())
            })?;
            let mut session = PickerSession::new(PickerConfig::load(path)?);
            print_state(&session);
            for action in actions {
                if let Some(event) = apply(&mut session, action)? {
                    println!("event: {}", serde_json::to_string(&event)?);
                    log::info!("dialog {} finished", session.config().dialog_id);
                    break;
                }
                print_state(&session);
            }
        }
        _ => return Err(DemoError::Usage(USAGE.to_string())),
    }
    Ok(())
}

fn single(rest: &[String]) -> Result<&str, DemoError> {
    match rest {
        [one] => Ok(one.as_str()),
        _ => Err(DemoError::Usage("expected exactly one color".to_string())),
    }
}

fn apply(session: &mut PickerSession, action: &str) -> Result<Option<PickerEvent>, DemoError> {
    let bad = || DemoError::BadAction(action.to_string());
    let (name, arg) = action.split_once(':').unwrap_or((action, ""));
    log::debug!("action {name} {arg:?}");

    let event = match name {
        "toggle" => {
            session.toggle_mode();
            None
        }
        "preset" => session.select_preset(arg.parse().map_err(|_| bad())?)?,
        "shade" => session.select_shade(arg.parse().map_err(|_| bad())?)?,
        "alpha" => {
            session.set_transparency(arg.parse().map_err(|_| bad())?)?;
            None
        }
        "hex" => {
            session.edit_hex(arg)?;
            None
        }
        "drag" => {
            let coords = arg
                .split(',')
                .map(|n| n.trim().parse::<f64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| bad())?;
            let [sx, sy, x, y] = coords[..] else {
                return Err(bad());
            };
            session.drag(&demo_panels(), Point::new(sx, sy), Point::new(x, y))?;
            None
        }
        "new" => session.tap_new_color()?,
        "confirm" => Some(session.confirm()),
        "dismiss" => Some(session.dismiss()),
        _ => return Err(bad()),
    };
    Ok(event)
}

fn print_state(session: &PickerSession) {
    println!("mode: {:?}  color: {}", session.mode(), session.color());
    match session.mode() {
        PickerMode::Presets => {
            let presets: Vec<String> = session.presets().iter().map(|c| c.hex_argb()).collect();
            println!("  presets: {}", presets.join(" "));
            println!("  selected preset: {:?}", session.selected_preset());
            if let Some(shades) = session.shades() {
                let shades: Vec<String> = shades.iter().map(|c| c.hex_argb()).collect();
                println!("  shades: {}", shades.join(" "));
                println!("  selected shade: {:?}", session.selected_shade());
            }
        }
        PickerMode::Custom => {
            let picker = session.picker();
            println!(
                "  hsv: {:.1} {:.3} {:.3} alpha {}  hex: {}  was: {}",
                picker.hsv.hue,
                picker.hsv.saturation,
                picker.hsv.value,
                picker.alpha,
                session.hex_text(),
                session.original_color()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorpick_core::Color;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_actions_drive_session() {
        let mut session = PickerSession::new(PickerConfig::new().color(Color::RED));
        assert!(apply(&mut session, "toggle").unwrap().is_none());
        assert!(apply(&mut session, "drag:220,10,220,101").unwrap().is_none());
        assert_eq!(session.color(), Color::CYAN);
        assert!(apply(&mut session, "hex:00FF00").unwrap().is_none());
        assert_eq!(
            apply(&mut session, "confirm").unwrap(),
            Some(PickerEvent::Selected {
                dialog_id: 0,
                color: Color::GREEN
            })
        );
    }

    #[test]
    fn test_bad_actions() {
        let mut session = PickerSession::new(PickerConfig::new());
        assert!(matches!(apply(&mut session, "jump"), Err(DemoError::BadAction(_))));
        assert!(matches!(apply(&mut session, "preset:x"), Err(DemoError::BadAction(_))));
        assert!(matches!(apply(&mut session, "drag:1,2,3"), Err(DemoError::BadAction(_))));
        assert!(matches!(apply(&mut session, "preset:99"), Err(DemoError::Picker(_))));
    }

    #[test]
    fn test_run_commands() {
        assert!(run(&args(&["parse", "#FF0000", "80FF0000"])).is_ok());
        assert!(run(&args(&["shades", "2196F3"])).is_ok());
        assert!(matches!(run(&args(&["shades"])), Err(DemoError::Usage(_))));
        assert!(matches!(run(&args(&["parse", "GG"])), Err(DemoError::Parse(_))));
        assert!(matches!(run(&[]), Err(DemoError::Usage(_))));
    }

    #[test]
    fn test_run_session_script() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("picker.json");
        PickerConfig::new()
            .dialog_id(4)
            .color(Color::RED)
            .show_alpha_slider(true)
            .save(&path)
            .unwrap();
        let path = path.to_string_lossy().into_owned();

        let script = args(&[
            "session",
            path.as_str(),
            "preset:1",
            "shade:3",
            "alpha:128",
            "toggle",
            "confirm",
        ]);
        assert!(run(&script).is_ok());

        // Actions after the dialog closed are never reached.
        assert!(run(&args(&["session", path.as_str(), "dismiss", "jump"])).is_ok());
        assert!(matches!(
            run(&args(&["session", path.as_str(), "shade:99"])),
            Err(DemoError::Picker(_))
        ));
        assert!(matches!(
            run(&args(&["session", dir.path().join("missing.json").to_str().unwrap()])),
            Err(DemoError::Config(_))
        ));
        assert!(matches!(run(&args(&["session"])), Err(DemoError::Usage(_))));
    }
}
