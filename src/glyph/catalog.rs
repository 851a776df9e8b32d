//! Fixed numeral catalog: the 20 Ethiopic numeral glyphs (U+1369–U+137C).
//!
//! Each glyph belongs to exactly one [`DigitClass`] and carries one value.
//! Within a class the glyph/value mapping is a bijection. The table order is
//! the on-screen keypad order: ones, tens, then the two multipliers.

use num_bigint::BigUint;

/// Class of a numeral glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitClass {
    /// ፩–፱, values 1–9.
    Ones,
    /// ፲–፺, values 10, 20, …, 90.
    Tens,
    /// ፻, the hundred multiplier.
    Hundred,
    /// ፼, the myriad multiplier. Stackable: ፼፼ is 10,000².
    Myriad,
}

impl DigitClass {
    /// Whether this class is a multiplier (starts a fresh digit group).
    pub fn is_multiplier(self) -> bool {
        matches!(self, DigitClass::Hundred | DigitClass::Myriad)
    }
}

impl std::fmt::Display for DigitClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigitClass::Ones => write!(f, "ones"),
            DigitClass::Tens => write!(f, "tens"),
            DigitClass::Hundred => write!(f, "hundred"),
            DigitClass::Myriad => write!(f, "myriad"),
        }
    }
}

/// A numeral glyph in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeral {
    /// The Ethiopic numeral character.
    pub glyph: char,
    /// Numeric value of the glyph on its own.
    pub value: u32,
    /// Digit class.
    pub class: DigitClass,
    /// Keypad label.
    pub label: &'static str,
}

/// ፩ (1), written out only where a multiplier of one cannot stay implicit.
pub const ONE: char = '\u{1369}';
/// ፻ (100).
pub const HUNDRED: char = '\u{137B}';
/// ፼ (10,000).
pub const MYRIAD: char = '\u{137C}';

/// Value of one myriad.
pub const MYRIAD_VALUE: u32 = 10_000;

const fn numeral(glyph: char, value: u32, class: DigitClass, label: &'static str) -> Numeral {
    Numeral {
        glyph,
        value,
        class,
        label,
    }
}

static NUMERALS: [Numeral; 20] = [
    // -- Ones (9): U+1369–U+1371 --
    numeral(ONE, 1, DigitClass::Ones, "one"),
    numeral('\u{136A}', 2, DigitClass::Ones, "two"),
    numeral('\u{136B}', 3, DigitClass::Ones, "three"),
    numeral('\u{136C}', 4, DigitClass::Ones, "four"),
    numeral('\u{136D}', 5, DigitClass::Ones, "five"),
    numeral('\u{136E}', 6, DigitClass::Ones, "six"),
    numeral('\u{136F}', 7, DigitClass::Ones, "seven"),
    numeral('\u{1370}', 8, DigitClass::Ones, "eight"),
    numeral('\u{1371}', 9, DigitClass::Ones, "nine"),
    // -- Tens (9): U+1372–U+137A --
    numeral('\u{1372}', 10, DigitClass::Tens, "ten"),
    numeral('\u{1373}', 20, DigitClass::Tens, "twenty"),
    numeral('\u{1374}', 30, DigitClass::Tens, "thirty"),
    numeral('\u{1375}', 40, DigitClass::Tens, "forty"),
    numeral('\u{1376}', 50, DigitClass::Tens, "fifty"),
    numeral('\u{1377}', 60, DigitClass::Tens, "sixty"),
    numeral('\u{1378}', 70, DigitClass::Tens, "seventy"),
    numeral('\u{1379}', 80, DigitClass::Tens, "eighty"),
    numeral('\u{137A}', 90, DigitClass::Tens, "ninety"),
    // -- Multipliers (2) --
    numeral(HUNDRED, 100, DigitClass::Hundred, "hundred"),
    numeral(MYRIAD, MYRIAD_VALUE, DigitClass::Myriad, "myriad (stackable)"),
];

/// Get all 20 numerals in keypad order.
pub fn all_numerals() -> &'static [Numeral] {
    &NUMERALS
}

/// Numerals of a single class, in ascending value order.
pub fn numerals_of(class: DigitClass) -> impl Iterator<Item = &'static Numeral> {
    NUMERALS.iter().filter(move |n| n.class == class)
}

/// Look up the catalog entry for a glyph.
pub fn lookup(glyph: char) -> Option<&'static Numeral> {
    // The block is contiguous, so the codepoint offset is the table index.
    let idx = (glyph as u32).checked_sub(0x1369)? as usize;
    NUMERALS.get(idx)
}

/// Numeric value of a glyph, or `None` if it is not a Ge'ez numeral.
pub fn value_of(glyph: char) -> Option<u32> {
    lookup(glyph).map(|n| n.value)
}

/// Digit class of a glyph, or `None` if it is not a Ge'ez numeral.
pub fn classify(glyph: char) -> Option<DigitClass> {
    lookup(glyph).map(|n| n.class)
}

/// Whether `glyph` is one of ፩–፱.
pub fn is_ones(glyph: char) -> bool {
    classify(glyph) == Some(DigitClass::Ones)
}

/// Whether `glyph` is one of ፲–፺.
pub fn is_tens(glyph: char) -> bool {
    classify(glyph) == Some(DigitClass::Tens)
}

/// Glyph for a ones value (1–9).
pub fn ones_glyph(value: u32) -> Option<char> {
    match value {
        1..=9 => Some(NUMERALS[value as usize - 1].glyph),
        _ => None,
    }
}

/// Glyph for a tens value (10, 20, …, 90).
pub fn tens_glyph(value: u32) -> Option<char> {
    match value {
        10..=90 if value % 10 == 0 => Some(NUMERALS[8 + (value / 10) as usize].glyph),
        _ => None,
    }
}

/// Description of a stack of `power` myriad glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyriadPower {
    pub power: u32,
    /// 10,000^power.
    pub value: BigUint,
    /// Human-readable name.
    pub name: String,
}

/// Describe what a run of `power` consecutive ፼ glyphs multiplies by.
pub fn myriad_power_info(power: u32) -> MyriadPower {
    let value = BigUint::from(MYRIAD_VALUE).pow(power);
    let name = match power {
        1 => "Myriad (፼)".to_string(),
        2 => "Double Myriad (፼፼) - 100 Million".to_string(),
        3 => "Triple Myriad (፼፼፼) - 1 Trillion".to_string(),
        4 => "Quadruple Myriad (፼፼፼፼) - 10 Quadrillion".to_string(),
        p => format!("{p}× Myriad (10,000^{p})"),
    };
    MyriadPower { power, value, name }
}
