use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Named color palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Nyx,
    Icecream,
    Kirokaze,
    Grayscale,
    Monoramp,
    Blessing,
}

impl ThemeName {
    pub const ALL: [ThemeName; 6] = [
        ThemeName::Nyx,
        ThemeName::Icecream,
        ThemeName::Kirokaze,
        ThemeName::Grayscale,
        ThemeName::Monoramp,
        ThemeName::Blessing,
    ];

    /// The theme after this one, wrapping around
    pub fn next(&self) -> ThemeName {
        let index = Self::ALL.iter().position(|name| name == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeName::Nyx => "nyx",
            ThemeName::Icecream => "icecream",
            ThemeName::Kirokaze => "kirokaze",
            ThemeName::Grayscale => "grayscale",
            ThemeName::Monoramp => "monoramp",
            ThemeName::Blessing => "blessing",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeName::Nyx => Theme {
                snake: rgb(0x816271),
                background: rgb(0x20394f),
                border: Some(rgb(0x0f2a3f)),
                food: rgb(0xf6d6bd),
                text: rgb(0xffffff),
            },
            ThemeName::Icecream => Theme {
                snake: rgb(0x7c3f58),
                background: rgb(0xfff6d3),
                border: Some(rgb(0xffe5be)),
                food: rgb(0xeb6b6f),
                text: rgb(0x000000),
            },
            ThemeName::Kirokaze => Theme {
                snake: rgb(0x94e344),
                background: rgb(0x332c50),
                border: None,
                food: rgb(0x46878f),
                text: rgb(0xffffff),
            },
            ThemeName::Grayscale => Theme {
                snake: rgb(0x000000),
                background: rgb(0xb6b6b6),
                border: Some(rgb(0x676767)),
                food: rgb(0xffffff),
                text: rgb(0xffffff),
            },
            ThemeName::Monoramp => Theme {
                snake: rgb(0x8b6d9c),
                background: rgb(0x272744),
                border: Some(rgb(0x494d7e)),
                food: rgb(0xfbf5ef),
                text: rgb(0xffffff),
            },
            ThemeName::Blessing => Theme {
                snake: rgb(0x96fbc7),
                background: rgb(0x74569b),
                border: Some(rgb(0xffb3cb)),
                food: rgb(0xf7ffae),
                text: rgb(0xffffff),
            },
        }
    }
}

/// Colors for each drawing role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub snake: Color,
    pub background: Color,
    /// `None` draws the border in the background color
    pub border: Option<Color>,
    pub food: Color,
    pub text: Color,
}

impl Theme {
    pub fn border_color(&self) -> Color {
        self.border.unwrap_or(self.background)
    }
}

fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}
