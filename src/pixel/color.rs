//! Pixel and colour types with named channel access
//!
//! A pixel remembers whether its source carried an alpha channel so that
//! operations preserving the source layout can write the same layout back.

use std::fmt;

/// Exact RGB colour triple used for palettes and reserved anatomical colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Construct a colour from its three channel values
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self([red, green, blue])
    }

    /// Red channel value
    pub const fn red(self) -> u8 {
        self.0[0]
    }

    /// Green channel value
    pub const fn green(self) -> u8 {
        self.0[1]
    }

    /// Blue channel value
    pub const fn blue(self) -> u8 {
        self.0[2]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red(), self.green(), self.blue())
    }
}

/// Parses `R,G,B` as written on the command line
impl std::str::FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [r, g, b] = *parts.as_slice() else {
            return Err(format!("expected R,G,B but got '{s}'"));
        };

        let channel = |value: &str| {
            value
                .parse::<u8>()
                .map_err(|e| format!("channel '{value}' is not in 0..=255: {e}"))
        };

        Ok(Self::new(channel(r)?, channel(g)?, channel(b)?))
    }
}

/// Single RGB or RGBA pixel
///
/// `alpha` is `None` when the pixel came from a three-channel source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
    /// Alpha channel, absent for RGB sources
    pub alpha: Option<u8>,
}

impl Default for Pixel {
    fn default() -> Self {
        Self::rgba(0, 0, 0, 0)
    }
}

impl Pixel {
    /// Three-channel pixel
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
        }
    }

    /// Four-channel pixel
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: Some(alpha),
        }
    }

    /// Colour triple without alpha
    pub const fn color(self) -> Rgb {
        Rgb([self.red, self.green, self.blue])
    }

    /// Whether the source carried an alpha channel
    pub const fn has_alpha(self) -> bool {
        self.alpha.is_some()
    }

    /// Normalise to four channels, treating a missing alpha as fully opaque
    pub const fn to_rgba(self) -> Self {
        let alpha = match self.alpha {
            Some(a) => a,
            None => u8::MAX,
        };
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Drop the alpha channel, keeping the colour as is
    pub const fn to_rgb(self) -> Self {
        Self::rgb(self.red, self.green, self.blue)
    }

    /// Fully transparent (alpha present and zero)
    pub const fn is_transparent(self) -> bool {
        matches!(self.alpha, Some(0))
    }

    /// RGB channels are exactly (0, 0, 0), regardless of alpha
    pub const fn is_black(self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0
    }

    /// Every channel the pixel carries is zero
    pub const fn is_uncolored(self) -> bool {
        self.is_black() && matches!(self.alpha, None | Some(0))
    }

    /// Replace the colour, keeping the channel layout and alpha value
    pub const fn with_color(self, color: Rgb) -> Self {
        Self {
            red: color.red(),
            green: color.green(),
            blue: color.blue(),
            alpha: self.alpha,
        }
    }
}

impl From<Rgb> for Pixel {
    fn from(color: Rgb) -> Self {
        Self::rgb(color.red(), color.green(), color.blue())
    }
}
