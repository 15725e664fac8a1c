use ratatui::style::{Color, Modifier, Style};

// ── Helper: build an Rgb Color from a hex literal ──────────────────────

const fn rgb(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >>  8) & 0xFF) as u8,
        ( hex        & 0xFF) as u8,
    )
}

// ── Theme variant selector ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeVariant {
    Default,
    Nord,
    Gruvbox,
}

impl ThemeVariant {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Nord    => "Nord",
            Self::Gruvbox => "Gruvbox",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Default => Self::Nord,
            Self::Nord    => Self::Gruvbox,
            Self::Gruvbox => Self::Default,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "nord"    => Self::Nord,
            "gruvbox" => Self::Gruvbox,
            _         => Self::Default,
        }
    }
}

// ── Theme struct ────────────────────────────────────────────────────────
//
// Only the chrome is themed. Bar fills always come from util::color so a
// given percentage looks the same under every theme.

#[derive(Clone)]
pub struct Theme {
    pub border:      Style,
    pub title:       Style,
    pub text:        Style,
    pub text_dim:    Style,
    pub header:      Style,
    pub warn:        Style,
    pub gauge_bg:    Color,
    pub footer_bg:   Style,
    pub footer_key:  Style,
    pub footer_text: Style,
}

impl Theme {
    pub fn for_variant(v: ThemeVariant) -> Self {
        match v {
            ThemeVariant::Default => Self::default(),
            ThemeVariant::Nord    => Self::nord(),
            ThemeVariant::Gruvbox => Self::gruvbox(),
        }
    }

    pub fn default() -> Self {
        Self {
            border:      Style::default().fg(Color::DarkGray),
            title:       Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            text:        Style::default().fg(Color::White),
            text_dim:    Style::default().fg(Color::DarkGray),
            header:      Style::default().fg(Color::White).bg(Color::Black).add_modifier(Modifier::BOLD),
            warn:        Style::default().fg(Color::Yellow),
            gauge_bg:    Color::Black,
            footer_bg:   Style::default().bg(Color::DarkGray).fg(Color::White),
            footer_key:  Style::default().bg(Color::DarkGray).fg(Color::Cyan).add_modifier(Modifier::BOLD),
            footer_text: Style::default().bg(Color::DarkGray).fg(Color::Gray),
        }
    }

    fn nord() -> Self {
        // Polar Night: #2e3440 #3b4252 #4c566a  Snow Storm: #d8dee9 #eceff4
        // Frost: #88c0d0  Aurora yellow: #ebcb8b
        Self {
            border:      Style::default().fg(rgb(0x4c566a)),
            title:       Style::default().fg(rgb(0xeceff4)).add_modifier(Modifier::BOLD),
            text:        Style::default().fg(rgb(0xe5e9f0)),
            text_dim:    Style::default().fg(rgb(0x4c566a)),
            header:      Style::default().fg(rgb(0xeceff4)).bg(rgb(0x3b4252)).add_modifier(Modifier::BOLD),
            warn:        Style::default().fg(rgb(0xebcb8b)),
            gauge_bg:    rgb(0x2e3440),
            footer_bg:   Style::default().bg(rgb(0x3b4252)).fg(rgb(0xd8dee9)),
            footer_key:  Style::default().bg(rgb(0x3b4252)).fg(rgb(0x88c0d0)).add_modifier(Modifier::BOLD),
            footer_text: Style::default().bg(rgb(0x3b4252)).fg(rgb(0x4c566a)),
        }
    }

    fn gruvbox() -> Self {
        // bg0: #282828  bg1: #3c3836  fg1: #ebdbb2  fg4: #a89984
        // yellow: #fabd2f  aqua: #83a598
        Self {
            border:      Style::default().fg(rgb(0x504945)),
            title:       Style::default().fg(rgb(0xebdbb2)).add_modifier(Modifier::BOLD),
            text:        Style::default().fg(rgb(0xebdbb2)),
            text_dim:    Style::default().fg(rgb(0xa89984)),
            header:      Style::default().fg(rgb(0xebdbb2)).bg(rgb(0x3c3836)).add_modifier(Modifier::BOLD),
            warn:        Style::default().fg(rgb(0xfabd2f)),
            gauge_bg:    rgb(0x282828),
            footer_bg:   Style::default().bg(rgb(0x3c3836)).fg(rgb(0xebdbb2)),
            footer_key:  Style::default().bg(rgb(0x3c3836)).fg(rgb(0x83a598)).add_modifier(Modifier::BOLD),
            footer_text: Style::default().bg(rgb(0x3c3836)).fg(rgb(0xa89984)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_cycle_and_lookup() {
        let mut v = ThemeVariant::Default;
        for _ in 0..3 { v = v.next(); }
        assert_eq!(v, ThemeVariant::Default);
        assert_eq!(ThemeVariant::from_name("NORD"), ThemeVariant::Nord);
        assert_eq!(ThemeVariant::from_name("unknown"), ThemeVariant::Default);
    }
}
