//! Color palette for the WAKEEL TUI.

use crate::notifications::ToastState;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Palette {
    pub bg: Color,
    pub surface: Color,
    pub backdrop: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub accent: Color,
    pub star: Color,
    pub danger: Color,
    pub toast: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl Palette {
    pub fn wakeel() -> Self {
        Self {
            bg: Color::Rgb(246, 248, 249),
            surface: Color::Rgb(255, 255, 255),
            backdrop: Color::Rgb(20, 28, 33),
            primary: Color::Rgb(20, 110, 120),
            primary_dim: Color::Rgb(120, 160, 165),
            accent: Color::Rgb(196, 154, 60),
            star: Color::Rgb(240, 180, 40),
            danger: Color::Rgb(214, 69, 65),
            toast: Color::Rgb(0x23, 0x34, 0x3e),
            text: Color::Rgb(30, 40, 45),
            text_dim: Color::Rgb(120, 130, 135),
            border: Color::Rgb(200, 208, 212),
            border_focus: Color::Rgb(20, 110, 120),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::wakeel()
    }
}

pub fn toast_color(state: ToastState, palette: &Palette) -> Color {
    match state {
        ToastState::Normal => palette.toast,
        ToastState::Danger => palette.danger,
    }
}
