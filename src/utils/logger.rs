#[cfg(feature = "cli")]
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
#[cfg(feature = "cli")]
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Success,
    Error,
    Warning,
}

impl LogLevel {
    fn label(&self) -> &'static str {
        match self {
            LogLevel::Success => "SUCCESS",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
        }
    }

    // stdout carries only the confirmation line
    fn to_stderr(&self) -> bool {
        !matches!(self, LogLevel::Success)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Logger
    }

    pub fn log_message(&self, level: LogLevel, message: &str) {
        let line = self.format_line(level, message);
        if level.to_stderr() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        format!(
            "📦 {} {} {}",
            self.tool_signature(),
            self.format_status(level),
            message
        )
    }

    #[cfg(feature = "cli")]
    fn tool_signature(&self) -> String {
        let mut s = String::new();

        let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
        s.push('[');
        let _ = write!(
            &mut s,
            "{}",
            SetForegroundColor(Color::Rgb {
                r: 29,
                g: 211,
                b: 176,
            })
        );
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Bold));
        s.push_str("Stable Builds");
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
        let _ = write!(&mut s, "{}", SetForegroundColor(Color::Grey));
        s.push(']');
        let _ = write!(&mut s, "{}", ResetColor);

        s
    }

    #[cfg(not(feature = "cli"))]
    fn tool_signature(&self) -> String {
        "[Stable Builds]".to_string()
    }

    #[cfg(feature = "cli")]
    fn format_status(&self, level: LogLevel) -> String {
        let color = match level {
            LogLevel::Success => Color::Rgb {
                r: 76,
                g: 175,
                b: 80,
            },
            LogLevel::Error => Color::Rgb {
                r: 244,
                g: 67,
                b: 54,
            },
            LogLevel::Warning => Color::Rgb {
                r: 255,
                g: 152,
                b: 0,
            },
        };

        let mut s = String::new();
        s.push('[');
        let _ = write!(&mut s, "{}", SetForegroundColor(color));
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Bold));
        s.push_str(level.label());
        let _ = write!(&mut s, "{}", SetAttribute(Attribute::Reset));
        s.push(']');
        let _ = write!(&mut s, "{}", ResetColor);

        s
    }

    #[cfg(not(feature = "cli"))]
    fn format_status(&self, level: LogLevel) -> String {
        format!("[{}]", level.label())
    }
}
