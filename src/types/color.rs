use derive_more::{Deref, Display, From, Into};

/// A 32-bit `0xAARRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into, Display)]
#[display("#{_0:08X}")]
pub struct Argb(pub u32);

impl Argb {
    #[inline]
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub fn blue(self) -> u8 {
        self.0 as u8
    }
}

pub const DEFAULT_PALETTE: [Argb; 12] = [
    Argb(0xFFE57373),
    Argb(0xFF64B5F6),
    Argb(0xFF81C784),
    Argb(0xFFFFB74D),
    Argb(0xFF4DB6AC),
    Argb(0xFFF06292),
    Argb(0xFF9575CD),
    Argb(0xFFAED581),
    Argb(0xFFFFD54F),
    Argb(0xFF4FC3F7),
    Argb(0xFFBA68C8),
    Argb(0xFFFF8A65),
];

/// A non-empty list of colors to hand out by title.
#[derive(Debug, Clone, PartialEq, Eq, Deref)]
pub struct Palette(Vec<Argb>);

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_PALETTE.to_vec())
    }
}

impl Palette {
    /// Returns `None` for an empty list.
    pub fn new(colors: impl IntoIterator<Item = Argb>) -> Option<Self> {
        let colors = colors.into_iter().collect::<Vec<_>>();
        (!colors.is_empty()).then_some(Self(colors))
    }

    /// The color for `title`. Equal titles always get the same color.
    pub fn pick(&self, title: &str) -> Argb {
        let idx = title_hash(title).unsigned_abs() as usize % self.0.len();
        self.0[idx]
    }
}

/// `h = 31 * h + unit` over the UTF-16 code units of `title`, wrapping at 32 bits.
pub fn title_hash(title: &str) -> i32 {
    title
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}
