use std::fmt;

/// An RGBA colour
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 215, 0);
    pub const GREEN: Color = Color::rgb(0, 170, 0);
    pub const BLUE: Color = Color::rgb(0, 90, 255);
    pub const ORANGE: Color = Color::rgb(255, 140, 0);
    pub const PURPLE: Color = Color::rgb(140, 0, 200);
    pub const CYAN: Color = Color::rgb(0, 200, 200);
    pub const MAGENTA: Color = Color::rgb(230, 0, 150);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BROWN: Color = Color::rgb(140, 80, 20);

    /// Colours offered to players, in the order the console assigns them
    pub const PALETTE: [Color; 10] = [
        Color::RED,
        Color::YELLOW,
        Color::GREEN,
        Color::BLUE,
        Color::ORANGE,
        Color::PURPLE,
        Color::CYAN,
        Color::MAGENTA,
        Color::WHITE,
        Color::BROWN,
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, u8::MAX)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// A token occupying one cell of the board
///
/// Chips are plain values: two chips of the same colour are the same chip.
/// The transparent chip [`Chip::NONE`] marks an empty cell.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Chip(Color);

impl Chip {
    /// The empty-cell sentinel
    pub const NONE: Chip = Chip(Color::TRANSPARENT);

    pub const fn new(color: Color) -> Self {
        Self(color)
    }

    pub fn color(&self) -> Color {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_transparent()
    }
}

impl Default for Chip {
    fn default() -> Self {
        Chip::NONE
    }
}

impl From<Color> for Chip {
    fn from(color: Color) -> Self {
        Chip::new(color)
    }
}
