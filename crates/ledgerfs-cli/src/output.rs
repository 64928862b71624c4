use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

/// Print a command result: pretty JSON with `--json`, otherwise one
/// `key: value` line per top-level field.
pub fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let v = serde_json::to_value(value)?;
    if is_json() {
        println!("{}", serde_json::to_string_pretty(&v)?);
        return Ok(());
    }

    let serde_json::Value::Object(map) = v else {
        println!("{}", serde_json::to_string_pretty(&v)?);
        return Ok(());
    };

    let mut out = stdout();
    let mut key = ColorSpec::new();
    key.set_fg(Some(Color::Cyan)).set_bold(true);
    for (k, v) in map {
        out.set_color(&key)?;
        write!(out, "{k}")?;
        out.reset()?;
        writeln!(out, ": {}", render(&v))?;
    }
    Ok(())
}

fn render(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

pub fn stdout() -> StandardStream {
    StandardStream::stdout(ColorChoice::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_unquotes_strings() {
        assert_eq!(render(&serde_json::json!("abc")), "abc");
        assert_eq!(render(&serde_json::json!(null)), "-");
        assert_eq!(render(&serde_json::json!([1, 2])), "[1,2]");
    }
}
