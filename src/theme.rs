use eframe::egui::Color32;

/// Theme chosen by the application shell; views only read it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub is_dark_theme: bool,
}

impl Theme {
    pub fn toggled(self) -> Self {
        Self {
            is_dark_theme: !self.is_dark_theme,
        }
    }

    pub fn palette(self) -> Palette {
        Palette::for_theme(self)
    }
}

/// Page colors derived from the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color32,
    pub text: Color32,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_dark_theme {
            Self {
                background: Color32::from_rgb(0x0f, 0x0f, 0x0f),
                text: Color32::from_rgb(0xf9, 0xf9, 0xf9),
            }
        } else {
            Self {
                background: Color32::from_rgb(0xf9, 0xf9, 0xf9),
                text: Color32::from_rgb(0x23, 0x1f, 0x20),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette() {
        let palette = Theme { is_dark_theme: true }.palette();
        assert_eq!(palette.background.to_array(), [0x0f, 0x0f, 0x0f, 0xff]);
        assert_eq!(palette.text.to_array(), [0xf9, 0xf9, 0xf9, 0xff]);
    }

    #[test]
    fn light_palette() {
        let palette = Theme { is_dark_theme: false }.palette();
        assert_eq!(palette.background.to_array(), [0xf9, 0xf9, 0xf9, 0xff]);
        assert_eq!(palette.text.to_array(), [0x23, 0x1f, 0x20, 0xff]);
    }

    #[test]
    fn toggle_flips() {
        let dark = Theme { is_dark_theme: true };
        assert_eq!(dark.toggled().toggled(), dark);
        assert!(!dark.toggled().is_dark_theme);
    }
}
