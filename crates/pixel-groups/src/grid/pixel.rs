//! Sample types.

/// One 8-bit RGBA sample.
///
/// Channels are straight (not premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0..=255)
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the value of every unwritten output sample.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a sample from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque sample.
    ///
    /// # Example
    /// ```
    /// use pixel_groups::Rgba;
    /// let grey = Rgba::opaque(128, 128, 128);
    /// assert_eq!(grey.a, 255);
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a sample from a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The color channels, dropping alpha.
    #[inline]
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Same color channels with alpha forced to 255.
    #[inline]
    pub const fn to_opaque(self) -> Self {
        Self::opaque(self.r, self.g, self.b)
    }
}

/// Three 8-bit color channels without alpha.
///
/// This is the shape of a scalar aggregate: averages, minima and maxima are
/// only computed over color channels, alpha is always written as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Promote to a fully opaque [`Rgba`].
    #[inline]
    pub const fn opaque(self) -> Rgba {
        Rgba::opaque(self.r, self.g, self.b)
    }
}

/// A sample together with its grid coordinates.
///
/// Yielded by the [`PixelGrid`](super::PixelGrid) iterators so that callers
/// walking a row or tile know where each sample came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    /// Column, `0..width`
    pub x: usize,
    /// Row, `0..height`
    pub y: usize,
    /// The sample at `(x, y)`
    pub rgba: Rgba,
}
