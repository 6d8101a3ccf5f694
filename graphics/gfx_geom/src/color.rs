//! Shape colors.

use std::fmt;

/// Palette color attached to every shape.
///
/// Discriminants are stable and follow palette order, starting at 0.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    #[default]
    Red = 0,
    Green = 1,
    Blue = 2,
    Yellow = 3,
    Cyan = 4,
    Magenta = 5,
    White = 6,
    Black = 7,
}

impl Color {
    /// Every color, in palette order.
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Cyan,
        Color::Magenta,
        Color::White,
        Color::Black,
    ];

    /// Lower-case color name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Cyan => "cyan",
            Color::Magenta => "magenta",
            Color::White => "white",
            Color::Black => "black",
        }
    }

    /// Look up a color by its palette index.
    pub fn from_index(index: u8) -> Option<Color> {
        Self::ALL.get(usize::from(index)).copied()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
