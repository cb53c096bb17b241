// src/domain/theme.rs

pub const THEME_COOKIE: &str = "theme";
pub const ACCENT_COOKIE: &str = "accent";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::System => "system",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Accent {
    #[default]
    Default,
    Pink,
    Blue,
    Green,
    Purple,
    Slate,
}

impl Accent {
    pub const ALL: [Accent; 6] = [
        Accent::Default,
        Accent::Pink,
        Accent::Blue,
        Accent::Green,
        Accent::Purple,
        Accent::Slate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Accent::Default => "default",
            Accent::Pink => "pink",
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Purple => "purple",
            Accent::Slate => "slate",
        }
    }

    /// HSL components, in the form CSS custom properties expect.
    pub fn hsl(self) -> &'static str {
        match self {
            Accent::Default | Accent::Blue => "221.2 83.2% 53.3%",
            Accent::Pink => "346.8 77.2% 49.8%",
            Accent::Green => "142.1 76.2% 36.3%",
            Accent::Purple => "262.1 83.3% 57.8%",
            Accent::Slate => "215.4 16.3% 46.9%",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == s)
    }
}

/// The visitor's display preferences. Unknown or missing cookie values fall back to defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeSettings {
    pub mode: ThemeMode,
    pub accent: Accent,
}

impl ThemeSettings {
    pub fn from_cookie_header(header: Option<&str>) -> Self {
        let mut settings = ThemeSettings::default();
        let Some(header) = header else {
            return settings;
        };

        for pair in header.split(';') {
            let Some((key, value)) = pair.trim().split_once('=') else {
                continue;
            };
            match key {
                THEME_COOKIE => {
                    if let Some(mode) = ThemeMode::parse(value) {
                        settings.mode = mode;
                    }
                }
                ACCENT_COOKIE => {
                    if let Some(accent) = Accent::parse(value) {
                        settings.accent = accent;
                    }
                }
                _ => {}
            }
        }

        settings
    }

    /// Inline style that points the stylesheet's accent variables at the chosen colour.
    pub fn root_style(&self) -> String {
        let hsl = self.accent.hsl();
        format!("--primary: {hsl}; --ring: {hsl};")
    }
}
