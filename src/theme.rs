//! Display mode flag and the colour table derived from it.

use crate::color::Rgb;

/// Dark/light display mode. Every session starts dark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeState {
    #[default]
    Dark,
    Light,
}

impl ThemeState {
    /// Flips the mode
    pub fn toggle(self) -> Self {
        match self {
            ThemeState::Dark => ThemeState::Light,
            ThemeState::Light => ThemeState::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeState::Dark => "dark",
            ThemeState::Light => "light",
        }
    }
}

/// Colours and intensities consumed by the renderer and the view
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub obelisk_base: Rgb,
    pub emissive: Rgb,
    pub emissive_intensity: f64,
    pub wireframe: Rgb,
    pub wireframe_opacity: f64,
    pub grid_cell: Rgb,
    pub grid_section: Rgb,
    pub ambient_intensity: f64,
    pub light_color: Rgb,
    pub light_intensity: f64,
    pub show_stars: bool,
    pub text: Rgb,
    pub muted_text: Rgb,
    /// Hero headline
    pub hero_accent: Rgb,
    pub strategist_accent: Rgb,
    pub alchemist_accent: Rgb,
    pub strategist_border: Rgb,
    pub alchemist_border: Rgb,
    /// Translucent card fill, blended over the scene
    pub card_fill: Rgb,
    pub card_opacity: f64,
    pub contact_button: Rgb,
    pub toggle_label: &'static str,
}

const GREEN: Rgb = Rgb::hex(0x00ff88);
const GREEN_400: Rgb = Rgb::hex(0x4ade80);
const EMERALD: Rgb = Rgb::hex(0x34d399);
const BLUE_400: Rgb = Rgb::hex(0x60a5fa);

impl Palette {
    /// Pure lookup from the mode to its colour set
    pub fn for_theme(theme: ThemeState) -> Self {
        match theme {
            ThemeState::Dark => Palette {
                background: Rgb::BLACK,
                obelisk_base: Rgb::hex(0x080808),
                emissive: GREEN,
                emissive_intensity: 0.3,
                wireframe: GREEN,
                wireframe_opacity: 0.1,
                grid_cell: GREEN,
                grid_section: Rgb::hex(0x005533),
                ambient_intensity: 0.5,
                light_color: GREEN,
                light_intensity: 2.0,
                show_stars: true,
                text: Rgb::WHITE,
                muted_text: Rgb::hex(0x8a8a8a),
                hero_accent: EMERALD,
                strategist_accent: GREEN_400,
                alchemist_accent: BLUE_400,
                strategist_border: Rgb::hex(0x1f6b3c),
                alchemist_border: Rgb::hex(0x2b4f80),
                card_fill: Rgb::BLACK,
                card_opacity: 0.6,
                contact_button: GREEN_400,
                toggle_label: "LIGHT MODE",
            },
            ThemeState::Light => Palette {
                background: Rgb::hex(0xf3f4f6),
                obelisk_base: Rgb::WHITE,
                emissive: Rgb::hex(0x999999),
                emissive_intensity: 0.1,
                wireframe: Rgb::BLACK,
                wireframe_opacity: 0.1,
                grid_cell: Rgb::BLACK,
                grid_section: Rgb::hex(0xaaaaaa),
                ambient_intensity: 1.5,
                light_color: Rgb::WHITE,
                light_intensity: 2.0,
                show_stars: false,
                text: Rgb::BLACK,
                muted_text: Rgb::hex(0x6b6b6b),
                hero_accent: Rgb::hex(0x059669),
                strategist_accent: Rgb::hex(0x16a34a),
                alchemist_accent: Rgb::hex(0x2563eb),
                strategist_border: Rgb::hex(0xd4d4d4),
                alchemist_border: Rgb::hex(0xd4d4d4),
                card_fill: Rgb::WHITE,
                card_opacity: 0.6,
                contact_button: Rgb::BLACK,
                toggle_label: "DARK MODE",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark() {
        assert_eq!(ThemeState::default(), ThemeState::Dark);
    }

    #[test]
    fn toggle_twice_restores_palette() {
        for theme in [ThemeState::Dark, ThemeState::Light] {
            let before = Palette::for_theme(theme);
            let after = Palette::for_theme(theme.toggle().toggle());
            assert_eq!(theme.toggle().toggle(), theme);
            assert_eq!(before, after);
        }
    }

    #[test]
    fn toggle_changes_palette() {
        let dark = Palette::for_theme(ThemeState::Dark);
        let light = Palette::for_theme(ThemeState::Dark.toggle());
        assert_ne!(dark, light);
        assert!(dark.show_stars);
        assert!(!light.show_stars);
        assert_eq!(dark.toggle_label, "LIGHT MODE");
        assert_eq!(light.toggle_label, "DARK MODE");
        assert!(dark.ambient_intensity < light.ambient_intensity);
    }

    #[test]
    fn text_contrasts_with_background() {
        for theme in [ThemeState::Dark, ThemeState::Light] {
            let p = Palette::for_theme(theme);
            assert!((p.text.luminance() - p.background.luminance()).abs() > 0.5);
        }
    }
}
