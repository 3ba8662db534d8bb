//! Colour schemes. `d` flips between the two at runtime.

use ratatui::style::{Color, Modifier, Style};
use when_core::Metric;

/// One complete colour scheme.
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub comment: Color,
    pub sel_bg: Color,
    pub zebra_bg: Color,
    pub red: Color,
    pub orange: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,
    pub cyan: Color,
}

/// One Dark.
pub const DARK: Palette = Palette {
    bg: Color::Rgb(0x28, 0x2C, 0x34),       // #282C34
    fg: Color::Rgb(0xAB, 0xB2, 0xBF),       // #ABB2BF
    comment: Color::Rgb(0x5C, 0x63, 0x70),  // #5C6370
    sel_bg: Color::Rgb(0x3E, 0x44, 0x51),   // #3E4451
    zebra_bg: Color::Rgb(0x2C, 0x31, 0x3C), // #2C313C
    red: Color::Rgb(0xE0, 0x6C, 0x75),      // #E06C75
    orange: Color::Rgb(0xD1, 0x9A, 0x66),   // #D19A66
    yellow: Color::Rgb(0xE5, 0xC0, 0x7B),   // #E5C07B
    green: Color::Rgb(0x98, 0xC3, 0x79),    // #98C379
    blue: Color::Rgb(0x61, 0xAF, 0xEF),     // #61AFEF
    cyan: Color::Rgb(0x56, 0xB6, 0xC2),     // #56B6C2
};

/// One Light.
pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(0xFA, 0xFA, 0xFA),       // #FAFAFA
    fg: Color::Rgb(0x38, 0x3A, 0x42),       // #383A42
    comment: Color::Rgb(0xA0, 0xA1, 0xA7),  // #A0A1A7
    sel_bg: Color::Rgb(0xD7, 0xD9, 0xE0),   // #D7D9E0
    zebra_bg: Color::Rgb(0xF0, 0xF0, 0xF1), // #F0F0F1
    red: Color::Rgb(0xE4, 0x56, 0x49),      // #E45649
    orange: Color::Rgb(0xC1, 0x84, 0x01),   // #C18401
    yellow: Color::Rgb(0x98, 0x68, 0x01),   // #986801
    green: Color::Rgb(0x50, 0xA1, 0x4F),    // #50A14F
    blue: Color::Rgb(0x40, 0x78, 0xF2),     // #4078F2
    cyan: Color::Rgb(0x01, 0x84, 0xBC),     // #0184BC
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode { &DARK } else { &LIGHT }
}

impl Palette {
    /// Default text on the scheme background.
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Title bar.
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.blue)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_header(&self) -> Style {
        Style::default()
            .fg(self.yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.sel_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Alternating row background.
    pub fn zebra(&self, row: usize) -> Style {
        if row % 2 == 1 {
            Style::default().bg(self.zebra_bg)
        } else {
            Style::default()
        }
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.comment)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.cyan)
    }

    pub fn placeholder(&self) -> Style {
        Style::default().fg(self.comment)
    }

    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.cyan)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.comment)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.red).add_modifier(Modifier::BOLD)
    }

    pub fn status(&self) -> Style {
        Style::default().fg(self.green)
    }

    /// Key in the footer hint line.
    pub fn help_key(&self) -> Style {
        Style::default().fg(self.yellow).add_modifier(Modifier::BOLD)
    }

    pub fn help(&self) -> Style {
        Style::default().fg(self.comment)
    }

    /// Bar colour per chart: orange total, red alertness, blue energy.
    pub fn metric(&self, metric: Metric) -> Style {
        let color = match metric {
            Metric::Total => self.orange,
            Metric::Alertness => self.red,
            Metric::Energy => self.blue,
        };
        Style::default().fg(color)
    }
}
