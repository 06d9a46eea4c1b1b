use smart_leds::RGB8;

/// Pixel count of the square indicator matrix.
pub const PIXELS: usize = 25;

/// Up arrow, shown while the radio is associating.
pub const ARROW: [u8; PIXELS] = [
    0, 0, 1, 0, 0, //
    0, 1, 1, 1, 0, //
    1, 0, 1, 0, 1, //
    0, 0, 1, 0, 0, //
    0, 0, 1, 0, 0, //
];

/// Letter glyph used in the boot animation.
pub const LETTER_E: [u8; PIXELS] = [
    1, 1, 1, 1, 0, //
    1, 0, 0, 0, 0, //
    1, 1, 1, 0, 0, //
    1, 0, 0, 0, 0, //
    1, 1, 1, 1, 0, //
];

/// Check mark for a successful association.
pub const CHECK: [u8; PIXELS] = [
    0, 0, 0, 0, 1, //
    0, 0, 0, 1, 0, //
    1, 0, 1, 0, 0, //
    0, 1, 0, 0, 0, //
    0, 0, 0, 0, 0, //
];

/// Cross for a failed connection cycle.
pub const X_MARK: [u8; PIXELS] = [
    1, 0, 0, 0, 1, //
    0, 1, 0, 1, 0, //
    0, 0, 1, 0, 0, //
    0, 1, 0, 1, 0, //
    1, 0, 0, 0, 1, //
];

// Low intensity; the panel is painful to look at much above this.
pub const RED: RGB8 = RGB8 { r: 15, g: 0, b: 0 };
pub const GREEN: RGB8 = RGB8 { r: 0, g: 15, b: 0 };
pub const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 15 };
pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Boot melody as (frequency Hz, duration ms) triples.
pub const STARTUP_MELODY: [(u16, u64); 3] = [(660, 100), (880, 100), (990, 100)];
