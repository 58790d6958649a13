/// 8-bit sRGB color with straight (non-premultiplied) alpha
///
/// Element colors are opaque to the dispatch logic; only the painter and the
/// backend canvas look at the channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn transparent() -> Self {
        Self::rgba(0, 0, 0, 0)
    }

    /// Add `amount` to every color channel, saturating at 255.
    ///
    /// Alpha is left untouched.
    pub const fn lighten(self, amount: u8) -> Self {
        Self::rgba(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
            self.a,
        )
    }

    /// Channels as `[r, g, b, a]`
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        css::WHITE
    }
}

impl From<[u8; 4]> for Color {
    fn from(arr: [u8; 4]) -> Self {
        Self::rgba(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

/// CSS color constants
pub mod css {
    use super::Color;

    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIME: Color = Color::rgb(0, 255, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

/// Fixed colors used by the element painter
pub mod palette {
    use super::Color;

    /// Window background behind all elements
    pub const BACKGROUND: Color = Color::rgb(30, 30, 35);
    /// Fill of text inputs
    pub const INPUT_FILL: Color = Color::rgb(45, 45, 48);
    /// Frame of the focused button or input
    pub const FOCUS_STROKE: Color = Color::rgb(0, 120, 215);
    /// Frame of an unfocused button or input
    pub const IDLE_STROKE: Color = Color::rgb(80, 80, 80);
    /// Slider track
    pub const SLIDER_TRACK: Color = Color::rgb(100, 100, 100);
    /// Terminal background
    pub const TERMINAL_FILL: Color = Color::rgb(20, 20, 20);
    /// Terminal text and focus frame
    pub const TERMINAL_TEXT: Color = Color::rgb(0, 255, 0);
    /// Caption text on buttons and inputs
    pub const CAPTION: Color = Color::rgb(255, 255, 255);
    /// Per-channel boost applied to hovered buttons and active slider knobs
    pub const HOVER_BOOST: u8 = 30;
}
