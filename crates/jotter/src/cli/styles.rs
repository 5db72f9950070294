//! Styles for the jotter shell.
//!
//! Output code never picks colors directly. It asks the active [`ThemeMode`] for
//! its [`Palette`] and styles text by meaning: a note title, a muted hint, a
//! warning. The light and dark palettes map those meanings to actual colors, so
//! the `theme` command only has to swap palettes.
//!
//! The initial mode follows the terminal's background as reported by
//! `dark-light`. Both palettes are built once through `once_cell::sync::Lazy`.
//!
//! `console` drops the escape codes on its own when stdout is not a terminal,
//! which keeps piped output and tests plain.

use console::Style;
use once_cell::sync::Lazy;

pub struct Palette {
    pub regular: Style,
    pub muted: Style,
    pub title: Style,
    pub list_title: Style,
    pub success: Style,
    pub info: Style,
    pub warning: Style,
    pub error: Style,
    pub status: Style,
    pub help_command: Style,
    pub help_desc: Style,
}

static LIGHT: Lazy<Palette> = Lazy::new(|| {
    let regular = Style::new().black();
    let muted = Style::new().color256(243);
    Palette {
        title: regular.clone().bold(),
        list_title: regular.clone(),
        regular,
        success: Style::new().green(),
        info: muted.clone(),
        warning: Style::new().color256(172).bold(),
        error: Style::new().red().bold(),
        status: muted.clone().italic(),
        help_command: Style::new().color256(28),
        help_desc: muted.clone(),
        muted,
    }
});

static DARK: Lazy<Palette> = Lazy::new(|| {
    let regular = Style::new().white();
    let muted = Style::new().color256(250);
    Palette {
        title: regular.clone().bold(),
        list_title: regular.clone(),
        regular,
        success: Style::new().green(),
        info: muted.clone(),
        warning: Style::new().yellow().bold(),
        error: Style::new().red().bold(),
        status: muted.clone().italic(),
        help_command: Style::new().color256(120),
        help_desc: muted.clone(),
        muted,
    }
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Match the terminal background.
    pub fn detect() -> Self {
        if matches!(dark_light::detect(), dark_light::Mode::Dark) {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}
