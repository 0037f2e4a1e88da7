//! Retro color palettes the window can cycle through.

use egui::Color32;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "CRT Green")]
    CrtGreen,
    #[default]
    Amber,
    Monochrome,
    #[serde(rename = "DOS Blue")]
    DosBlue,
    Matrix,
    Cyberpunk,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    pub bg: Color32,
    pub fg: Color32,
    pub label_bg: Color32,
    pub label_fg: Color32,
}

impl Theme {
    /// Cycle order used by the "Switch Theme" button.
    pub const ALL: [Theme; 6] = [
        Theme::CrtGreen,
        Theme::Amber,
        Theme::Monochrome,
        Theme::DosBlue,
        Theme::Matrix,
        Theme::Cyberpunk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Theme::CrtGreen => "CRT Green",
            Theme::Amber => "Amber",
            Theme::Monochrome => "Monochrome",
            Theme::DosBlue => "DOS Blue",
            Theme::Matrix => "Matrix",
            Theme::Cyberpunk => "Cyberpunk",
        }
    }

    /// Next palette in cycle order, wrapping around after the last one.
    pub fn next(self) -> Theme {
        let idx = Self::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn colors(self) -> ThemeColors {
        let (bg, fg, label_bg, label_fg) = match self {
            Theme::CrtGreen => (0x002b00, 0x99ff99, 0x003f00, 0x80ff80),
            Theme::Amber => (0x2b1b00, 0xffdd99, 0x3f2a00, 0xffd280),
            Theme::Monochrome => (0x1f1f1f, 0xdcdcdc, 0x2e2e2e, 0xffffff),
            Theme::DosBlue => (0x0000aa, 0xffffff, 0x000080, 0xc0c0c0),
            Theme::Matrix => (0x000000, 0x00ff00, 0x001100, 0x00cc00),
            Theme::Cyberpunk => (0x0f001a, 0xff00cc, 0x1a0033, 0xff66ff),
        };
        ThemeColors {
            bg: rgb(bg),
            fg: rgb(fg),
            label_bg: rgb(label_bg),
            label_fg: rgb(label_fg),
        }
    }

    /// Dark visuals tinted with this palette.
    pub fn visuals(self) -> egui::Visuals {
        let colors = self.colors();
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(colors.fg);
        visuals.panel_fill = colors.bg;
        visuals.window_fill = colors.bg;
        visuals.extreme_bg_color = colors.label_bg;
        visuals.widgets.inactive.weak_bg_fill = colors.label_bg;
        visuals.widgets.inactive.bg_fill = colors.label_bg;
        visuals.widgets.hovered.weak_bg_fill = colors.bg;
        visuals.widgets.noninteractive.bg_fill = colors.bg;
        visuals
    }
}

fn rgb(hex: u32) -> Color32 {
    let [_, r, g, b] = hex.to_be_bytes();
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_through_all_themes() {
        let mut theme = Theme::CrtGreen;
        let mut seen = Vec::new();
        for _ in 0..Theme::ALL.len() {
            seen.push(theme);
            theme = theme.next();
        }

        assert_eq!(seen, Theme::ALL.to_vec());
        assert_eq!(theme, Theme::CrtGreen);
        assert_eq!(Theme::Cyberpunk.next(), Theme::CrtGreen);
    }

    #[test]
    fn test_serialized_names_match_display_names() {
        for theme in Theme::ALL {
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.name()));
        }
    }

    #[test]
    fn test_palette_colors() {
        let colors = Theme::DosBlue.colors();

        assert_eq!(colors.bg, Color32::from_rgb(0x00, 0x00, 0xaa));
        assert_eq!(colors.label_fg, Color32::from_rgb(0xc0, 0xc0, 0xc0));
        assert_eq!(Theme::default(), Theme::Amber);
    }
}
