use inksac::prelude::*;

/// Terminal colors for the prompt, `ls` and the built-in help pages.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Colors are on when the terminal supports them, unless `disabled` is
    /// set or `NO_COLOR` is present in the environment.
    pub fn detect(disabled: bool) -> Self {
        if disabled || std::env::var_os("NO_COLOR").is_some() {
            return Self::plain();
        }

        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            enabled: !matches!(support, ColorSupport::NoColor),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.style(style).to_string()
    }

    pub fn user(&self, text: &str) -> String {
        self.paint(text, Style::builder().foreground(Color::Green).bold().build())
    }

    pub fn folder(&self, text: &str) -> String {
        self.paint(text, Style::builder().foreground(Color::Blue).bold().build())
    }

    pub fn link(&self, text: &str) -> String {
        self.paint(text, Style::builder().foreground(Color::Cyan).build())
    }

    pub fn device(&self, text: &str) -> String {
        self.paint(text, Style::builder().foreground(Color::Yellow).build())
    }

    pub fn hidden(&self, text: &str) -> String {
        self.paint(
            text,
            Style::builder()
                .foreground(Color::RGB(128, 128, 128))
                .bold()
                .build(),
        )
    }

    pub fn important(&self, text: &str) -> String {
        self.paint(text, Style::builder().foreground(Color::Magenta).bold().build())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, Style::builder().bold().build())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, Style::builder().foreground(Color::Red).bold().build())
    }
}
