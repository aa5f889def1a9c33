use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    /// Box-drawing characters in tables; ASCII otherwise
    pub unicode: bool,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Honours NO_COLOR, CLICOLOR and CLICOLOR_FORCE, in that order.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // no-color.org
        if env::var_os("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }

        if env::var("CLICOLOR").is_ok_and(|val| val == "0") {
            config.color = ColorMode::Never;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|val| val == "1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// ASCII-only output without colors
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            unicode: false,
        }
    }

    /// Applies a `use_color` preference from the config file. Environment
    /// overrides win over the file.
    pub fn with_color_preference(mut self, use_color: Option<bool>) -> Self {
        if self.color == ColorMode::Auto {
            match use_color {
                Some(true) => self.color = ColorMode::Always,
                Some(false) => self.color = ColorMode::Never,
                None => {}
            }
        }
        self
    }
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn info(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    enabled: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        let enabled = config.color.should_use_color();
        colored::control::set_override(enabled);
        Self { enabled }
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    fn info(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan())
    }

    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }
}

fn detect_color_support() -> bool {
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }

    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_formatter_leaves_text_untouched() {
        let formatter = ColoredFormatter::new(FormattingConfig::plain());
        assert_eq!(formatter.header("Report"), "Report");
        assert_eq!(formatter.error("High"), "High");
    }

    #[test]
    fn test_file_preference_only_applies_in_auto_mode() {
        let auto = FormattingConfig::new(ColorMode::Auto).with_color_preference(Some(false));
        assert_eq!(auto.color, ColorMode::Never);

        let forced = FormattingConfig::new(ColorMode::Always).with_color_preference(Some(false));
        assert_eq!(forced.color, ColorMode::Always);
    }
}
