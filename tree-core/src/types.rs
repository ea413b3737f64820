/// An opaque RGB color handed to a [`crate::surface::Surface`].
///
/// The core crate never interprets colors; it only carries them through
/// to whatever backend draws the scene. The named constants cover the
/// palette the tree renderer uses by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Background behind the tree.
    pub const SKY_BLUE: Color = Color::rgb(135, 206, 235);
    /// Default branch color.
    pub const BROWN: Color = Color::rgb(139, 69, 19);
    /// Default leaf color.
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    /// Default pen color before anything else is set.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
}
