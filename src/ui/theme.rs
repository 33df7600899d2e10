use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_form: ColorSpec,
    pub footer_dashboard: ColorSpec,
}

/// Color specification for a single RGB value.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

const DEFAULT_THEME_NAME: &str = "tokyo-night";

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(125, 207, 255),        // Blue
            accent: ColorSpec::rgb(255, 159, 196),         // Magenta
            text: ColorSpec::rgb(169, 177, 214),           // Foreground
            text_muted: ColorSpec::rgb(117, 121, 148),     // Comment
            background: ColorSpec::rgb(26, 27, 38),        // Background
            surface: ColorSpec::rgb(36, 40, 59),           // Selection
            success: ColorSpec::rgb(158, 206, 106),        // Green
            warning: ColorSpec::rgb(255, 202, 40),         // Yellow
            error: ColorSpec::rgb(247, 118, 142),          // Red
            info: ColorSpec::rgb(125, 207, 255),           // Blue
            border_active: ColorSpec::rgb(125, 207, 255),  // Blue
            border_normal: ColorSpec::rgb(117, 121, 148),  // Comment
            highlight_bg: ColorSpec::rgb(125, 207, 255),   // Blue
            highlight_fg: ColorSpec::rgb(26, 27, 38),      // Background
            footer_form: ColorSpec::rgb(255, 202, 40),     // Yellow
            footer_dashboard: ColorSpec::rgb(158, 206, 106), // Green
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::rgb(161, 119, 255),       // Purple
            accent: ColorSpec::rgb(255, 109, 146),        // Pink
            text: ColorSpec::rgb(88, 82, 96),             // Text
            text_muted: ColorSpec::rgb(152, 147, 165),    // Muted
            background: ColorSpec::rgb(250, 244, 237),    // Base
            surface: ColorSpec::rgb(255, 250, 243),       // Surface
            success: ColorSpec::rgb(59, 247, 209),        // Pine
            warning: ColorSpec::rgb(255, 210, 0),         // Gold
            error: ColorSpec::rgb(235, 111, 146),         // Love
            info: ColorSpec::rgb(61, 174, 233),           // Foam
            border_active: ColorSpec::rgb(161, 119, 255), // Purple
            border_normal: ColorSpec::rgb(88, 82, 96),    // Text
            highlight_bg: ColorSpec::rgb(61, 174, 233),   // Foam
            highlight_fg: ColorSpec::rgb(0, 0, 0),        // Black
            footer_form: ColorSpec::rgb(255, 210, 0),     // Gold
            footer_dashboard: ColorSpec::rgb(59, 247, 209), // Pine
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(189, 147, 249),       // Purple
            accent: ColorSpec::rgb(255, 121, 198),        // Pink
            text: ColorSpec::rgb(248, 248, 242),          // Foreground
            text_muted: ColorSpec::rgb(98, 114, 164),     // Comment
            background: ColorSpec::rgb(40, 42, 54),       // Background
            surface: ColorSpec::rgb(68, 71, 90),          // Selection
            success: ColorSpec::rgb(80, 250, 123),        // Green
            warning: ColorSpec::rgb(255, 184, 108),       // Orange
            error: ColorSpec::rgb(255, 85, 85),           // Red
            info: ColorSpec::rgb(139, 233, 253),          // Cyan
            border_active: ColorSpec::rgb(189, 147, 249), // Purple
            border_normal: ColorSpec::rgb(98, 114, 164),  // Comment
            highlight_bg: ColorSpec::rgb(139, 233, 253),  // Cyan
            highlight_fg: ColorSpec::rgb(40, 42, 54),     // Background
            footer_form: ColorSpec::rgb(255, 184, 108),   // Orange
            footer_dashboard: ColorSpec::rgb(80, 250, 123), // Green
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Get a theme by name, falling back to the default theme for unknown
    /// names.
    ///
    pub fn from_name_or_default(name: &str) -> Self {
        match Self::from_name(name) {
            Some(theme) => theme,
            None => {
                log::warn!(
                    "Unknown theme '{}', using '{}'. Available themes: {}",
                    name,
                    DEFAULT_THEME_NAME,
                    Self::available_themes().join(", ")
                );
                Self::default()
            }
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine-dawn".to_string(),
            "dracula".to_string(),
        ]
    }
}
