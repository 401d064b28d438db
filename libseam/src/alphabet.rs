pub const UTF8_SPACE: u8 = 32;
pub const UTF8_DASH: u8 = 45;
pub const UTF8_PIPE: u8 = 124;

/// The padding byte placed at position 0 of a sequence's byte buffer.
pub const UTF8_PAD: u8 = 255;
