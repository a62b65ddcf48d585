//! Colors and the frame palette derived from theme colors.

use crate::constants::FRAME_SHADE_OFFSET;
use serde::{Deserialize, Serialize};

/// RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Adds `amount` to every color channel, leaving alpha untouched.
    ///
    /// Channels are not clamped; the paint backend saturates them.
    pub fn offset(self, amount: f32) -> Self {
        Self {
            red: self.red + amount,
            green: self.green + amount,
            blue: self.blue + amount,
            alpha: self.alpha,
        }
    }

    /// Mean of the three color channels.
    pub fn luminance(&self) -> f32 {
        (self.red + self.green + self.blue) / 3.0
    }

    /// Color half way between `bg` and `fg`: the absolute channel difference
    /// halved, with the alpha of `fg`.
    pub fn half_tone(bg: Rgba, fg: Rgba) -> Rgba {
        Rgba {
            red: (bg.red - fg.red).abs() / 2.0,
            green: (bg.green - fg.green).abs() / 2.0,
            blue: (bg.blue - fg.blue).abs() / 2.0,
            alpha: fg.alpha,
        }
    }
}

/// The four theme colors the canvas palette is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: Rgba,
    pub text: Rgba,
    pub selected_background: Rgba,
    pub selected_text: Rgba,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(0.96, 0.96, 0.96),
            text: Rgba::rgb(0.18, 0.20, 0.21),
            selected_background: Rgba::rgb(0.29, 0.56, 0.85),
            selected_text: Rgba::rgb(1.0, 1.0, 1.0),
        }
    }
}

/// Frame colors in their normal and active variants.
///
/// Index 0 is the frame/fill color, index 1 the text color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub frame: [Rgba; 2],
    pub frame_active: [Rgba; 2],
    pub fg: Rgba,
}

impl Palette {
    pub fn from_theme(theme: &ThemeColors) -> Self {
        let off = if theme.background.luminance() < 0.5 {
            FRAME_SHADE_OFFSET
        } else {
            -FRAME_SHADE_OFFSET
        };

        let frame = [theme.background.offset(off), theme.text];
        Self {
            frame,
            frame_active: [theme.selected_background, theme.selected_text],
            fg: frame[1],
        }
    }

    /// Frame and text colors for the current selection state.
    pub fn frame_colors(&self, selected: bool) -> &[Rgba; 2] {
        if selected {
            &self.frame_active
        } else {
            &self.frame
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_theme(&ThemeColors::default())
    }
}
