//! Unicode block table.
//!
//! Blocks are half-open ranges `[start, end)`. A block's id is its name
//! lowercased with everything but ASCII letters and digits removed.

use super::UnicodeDatabase;

/// A named contiguous range of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeBlock {
    pub start: u32,
    pub end: u32,
    pub name: &'static str,
}

impl UnicodeBlock {
    const fn new(start: u32, end: u32, name: &'static str) -> Self {
        Self { start, end, name }
    }

    /// Lookup key for this block, e.g. `latin1supplement`.
    pub fn id(&self) -> String {
        block_id(self.name)
    }

    /// Whether `c` lies inside the block.
    pub fn contains(&self, c: char) -> bool {
        (self.start..self.end).contains(&(c as u32))
    }
}

/// Shortlist offered before the full table.
pub const COMMON_BLOCK_IDS: &[&str] = &[
    "latin1supplement",
    "latinextendeda",
    "latinextendedb",
    "cyrillic",
    "cyrillicsupplement",
    "currencysymbols",
    "arrows",
    "boxdrawing",
    "blockelements",
    "geometricshapes",
    "miscellaneoussymbols",
];

/// Convert a block name to its id.
pub fn block_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Find a block by id.
pub fn lookup(id: &str) -> Option<&'static UnicodeBlock> {
    BLOCKS.iter().find(|b| b.id() == id)
}

/// Every block id, in code point order.
pub fn all_block_ids() -> Vec<String> {
    BLOCKS.iter().map(UnicodeBlock::id).collect()
}

/// Block containing `c`, if `c` lies in an allocated block.
pub fn block_of(c: char) -> Option<&'static UnicodeBlock> {
    let value = c as u32;
    let index = BLOCKS.partition_point(|b| b.end <= value);
    BLOCKS.get(index).filter(|b| b.contains(c))
}

/// Every block, in code point order.
pub fn all_blocks() -> &'static [UnicodeBlock] {
    BLOCKS
}

/// Printable characters of `block`, ascending.
pub fn printable_candidates(block: &UnicodeBlock, db: &impl UnicodeDatabase) -> Vec<char> {
    (block.start..block.end)
        .filter_map(char::from_u32)
        .filter(|c| db.is_printable(*c))
        .collect()
}

static BLOCKS: &[UnicodeBlock] = &[
    UnicodeBlock::new(0x0000, 0x0080, "Basic Latin"),
    UnicodeBlock::new(0x0080, 0x0100, "Latin-1 Supplement"),
    UnicodeBlock::new(0x0100, 0x0180, "Latin Extended-A"),
    UnicodeBlock::new(0x0180, 0x0250, "Latin Extended-B"),
    UnicodeBlock::new(0x0250, 0x02B0, "IPA Extensions"),
    UnicodeBlock::new(0x02B0, 0x0300, "Spacing Modifier Letters"),
    UnicodeBlock::new(0x0300, 0x0370, "Combining Diacritical Marks"),
    UnicodeBlock::new(0x0370, 0x0400, "Greek and Coptic"),
    UnicodeBlock::new(0x0400, 0x0500, "Cyrillic"),
    UnicodeBlock::new(0x0500, 0x0530, "Cyrillic Supplement"),
    UnicodeBlock::new(0x0530, 0x0590, "Armenian"),
    UnicodeBlock::new(0x0590, 0x0600, "Hebrew"),
    UnicodeBlock::new(0x0600, 0x0700, "Arabic"),
    UnicodeBlock::new(0x0700, 0x0750, "Syriac"),
    UnicodeBlock::new(0x0750, 0x0780, "Arabic Supplement"),
    UnicodeBlock::new(0x0780, 0x07C0, "Thaana"),
    UnicodeBlock::new(0x07C0, 0x0800, "NKo"),
    UnicodeBlock::new(0x0800, 0x0840, "Samaritan"),
    UnicodeBlock::new(0x0840, 0x0860, "Mandaic"),
    UnicodeBlock::new(0x0860, 0x0870, "Syriac Supplement"),
    UnicodeBlock::new(0x0870, 0x08A0, "Arabic Extended-B"),
    UnicodeBlock::new(0x08A0, 0x0900, "Arabic Extended-A"),
    UnicodeBlock::new(0x0900, 0x0980, "Devanagari"),
    UnicodeBlock::new(0x0980, 0x0A00, "Bengali"),
    UnicodeBlock::new(0x0A00, 0x0A80, "Gurmukhi"),
    UnicodeBlock::new(0x0A80, 0x0B00, "Gujarati"),
    UnicodeBlock::new(0x0B00, 0x0B80, "Oriya"),
    UnicodeBlock::new(0x0B80, 0x0C00, "Tamil"),
    UnicodeBlock::new(0x0C00, 0x0C80, "Telugu"),
    UnicodeBlock::new(0x0C80, 0x0D00, "Kannada"),
    UnicodeBlock::new(0x0D00, 0x0D80, "Malayalam"),
    UnicodeBlock::new(0x0D80, 0x0E00, "Sinhala"),
    UnicodeBlock::new(0x0E00, 0x0E80, "Thai"),
    UnicodeBlock::new(0x0E80, 0x0F00, "Lao"),
    UnicodeBlock::new(0x0F00, 0x1000, "Tibetan"),
    UnicodeBlock::new(0x1000, 0x10A0, "Myanmar"),
    UnicodeBlock::new(0x10A0, 0x1100, "Georgian"),
    UnicodeBlock::new(0x1100, 0x1200, "Hangul Jamo"),
    UnicodeBlock::new(0x1200, 0x1380, "Ethiopic"),
    UnicodeBlock::new(0x1380, 0x13A0, "Ethiopic Supplement"),
    UnicodeBlock::new(0x13A0, 0x1400, "Cherokee"),
    UnicodeBlock::new(0x1400, 0x1680, "Unified Canadian Aboriginal Syllabics"),
    UnicodeBlock::new(0x1680, 0x16A0, "Ogham"),
    UnicodeBlock::new(0x16A0, 0x1700, "Runic"),
    UnicodeBlock::new(0x1700, 0x1720, "Tagalog"),
    UnicodeBlock::new(0x1720, 0x1740, "Hanunoo"),
    UnicodeBlock::new(0x1740, 0x1760, "Buhid"),
    UnicodeBlock::new(0x1760, 0x1780, "Tagbanwa"),
    UnicodeBlock::new(0x1780, 0x1800, "Khmer"),
    UnicodeBlock::new(0x1800, 0x18B0, "Mongolian"),
    UnicodeBlock::new(0x18B0, 0x1900, "Unified Canadian Aboriginal Syllabics Extended"),
    UnicodeBlock::new(0x1900, 0x1950, "Limbu"),
    UnicodeBlock::new(0x1950, 0x1980, "Tai Le"),
    UnicodeBlock::new(0x1980, 0x19E0, "New Tai Lue"),
    UnicodeBlock::new(0x19E0, 0x1A00, "Khmer Symbols"),
    UnicodeBlock::new(0x1A00, 0x1A20, "Buginese"),
    UnicodeBlock::new(0x1A20, 0x1AB0, "Tai Tham"),
    UnicodeBlock::new(0x1AB0, 0x1B00, "Combining Diacritical Marks Extended"),
    UnicodeBlock::new(0x1B00, 0x1B80, "Balinese"),
    UnicodeBlock::new(0x1B80, 0x1BC0, "Sundanese"),
    UnicodeBlock::new(0x1BC0, 0x1C00, "Batak"),
    UnicodeBlock::new(0x1C00, 0x1C50, "Lepcha"),
    UnicodeBlock::new(0x1C50, 0x1C80, "Ol Chiki"),
    UnicodeBlock::new(0x1C80, 0x1C90, "Cyrillic Extended-C"),
    UnicodeBlock::new(0x1C90, 0x1CC0, "Georgian Extended"),
    UnicodeBlock::new(0x1CC0, 0x1CD0, "Sundanese Supplement"),
    UnicodeBlock::new(0x1CD0, 0x1D00, "Vedic Extensions"),
    UnicodeBlock::new(0x1D00, 0x1D80, "Phonetic Extensions"),
    UnicodeBlock::new(0x1D80, 0x1DC0, "Phonetic Extensions Supplement"),
    UnicodeBlock::new(0x1DC0, 0x1E00, "Combining Diacritical Marks Supplement"),
    UnicodeBlock::new(0x1E00, 0x1F00, "Latin Extended Additional"),
    UnicodeBlock::new(0x1F00, 0x2000, "Greek Extended"),
    UnicodeBlock::new(0x2000, 0x2070, "General Punctuation"),
    UnicodeBlock::new(0x2070, 0x20A0, "Superscripts and Subscripts"),
    UnicodeBlock::new(0x20A0, 0x20D0, "Currency Symbols"),
    UnicodeBlock::new(0x20D0, 0x2100, "Combining Diacritical Marks for Symbols"),
    UnicodeBlock::new(0x2100, 0x2150, "Letterlike Symbols"),
    UnicodeBlock::new(0x2150, 0x2190, "Number Forms"),
    UnicodeBlock::new(0x2190, 0x2200, "Arrows"),
    UnicodeBlock::new(0x2200, 0x2300, "Mathematical Operators"),
    UnicodeBlock::new(0x2300, 0x2400, "Miscellaneous Technical"),
    UnicodeBlock::new(0x2400, 0x2440, "Control Pictures"),
    UnicodeBlock::new(0x2440, 0x2460, "Optical Character Recognition"),
    UnicodeBlock::new(0x2460, 0x2500, "Enclosed Alphanumerics"),
    UnicodeBlock::new(0x2500, 0x2580, "Box Drawing"),
    UnicodeBlock::new(0x2580, 0x25A0, "Block Elements"),
    UnicodeBlock::new(0x25A0, 0x2600, "Geometric Shapes"),
    UnicodeBlock::new(0x2600, 0x2700, "Miscellaneous Symbols"),
    UnicodeBlock::new(0x2700, 0x27C0, "Dingbats"),
    UnicodeBlock::new(0x27C0, 0x27F0, "Miscellaneous Mathematical Symbols-A"),
    UnicodeBlock::new(0x27F0, 0x2800, "Supplemental Arrows-A"),
    UnicodeBlock::new(0x2800, 0x2900, "Braille Patterns"),
    UnicodeBlock::new(0x2900, 0x2980, "Supplemental Arrows-B"),
    UnicodeBlock::new(0x2980, 0x2A00, "Miscellaneous Mathematical Symbols-B"),
    UnicodeBlock::new(0x2A00, 0x2B00, "Supplemental Mathematical Operators"),
    UnicodeBlock::new(0x2B00, 0x2C00, "Miscellaneous Symbols and Arrows"),
    UnicodeBlock::new(0x2C00, 0x2C60, "Glagolitic"),
    UnicodeBlock::new(0x2C60, 0x2C80, "Latin Extended-C"),
    UnicodeBlock::new(0x2C80, 0x2D00, "Coptic"),
    UnicodeBlock::new(0x2D00, 0x2D30, "Georgian Supplement"),
    UnicodeBlock::new(0x2D30, 0x2D80, "Tifinagh"),
    UnicodeBlock::new(0x2D80, 0x2DE0, "Ethiopic Extended"),
    UnicodeBlock::new(0x2DE0, 0x2E00, "Cyrillic Extended-A"),
    UnicodeBlock::new(0x2E00, 0x2E80, "Supplemental Punctuation"),
    UnicodeBlock::new(0x2E80, 0x2F00, "CJK Radicals Supplement"),
    UnicodeBlock::new(0x2F00, 0x2FE0, "Kangxi Radicals"),
    UnicodeBlock::new(0x2FF0, 0x3000, "Ideographic Description Characters"),
    UnicodeBlock::new(0x3000, 0x3040, "CJK Symbols and Punctuation"),
    UnicodeBlock::new(0x3040, 0x30A0, "Hiragana"),
    UnicodeBlock::new(0x30A0, 0x3100, "Katakana"),
    UnicodeBlock::new(0x3100, 0x3130, "Bopomofo"),
    UnicodeBlock::new(0x3130, 0x3190, "Hangul Compatibility Jamo"),
    UnicodeBlock::new(0x3190, 0x31A0, "Kanbun"),
    UnicodeBlock::new(0x31A0, 0x31C0, "Bopomofo Extended"),
    UnicodeBlock::new(0x31C0, 0x31F0, "CJK Strokes"),
    UnicodeBlock::new(0x31F0, 0x3200, "Katakana Phonetic Extensions"),
    UnicodeBlock::new(0x3200, 0x3300, "Enclosed CJK Letters and Months"),
    UnicodeBlock::new(0x3300, 0x3400, "CJK Compatibility"),
    UnicodeBlock::new(0x3400, 0x4DC0, "CJK Unified Ideographs Extension A"),
    UnicodeBlock::new(0x4DC0, 0x4E00, "Yijing Hexagram Symbols"),
    UnicodeBlock::new(0x4E00, 0xA000, "CJK Unified Ideographs"),
    UnicodeBlock::new(0xA000, 0xA490, "Yi Syllables"),
    UnicodeBlock::new(0xA490, 0xA4D0, "Yi Radicals"),
    UnicodeBlock::new(0xA4D0, 0xA500, "Lisu"),
    UnicodeBlock::new(0xA500, 0xA640, "Vai"),
    UnicodeBlock::new(0xA640, 0xA6A0, "Cyrillic Extended-B"),
    UnicodeBlock::new(0xA6A0, 0xA700, "Bamum"),
    UnicodeBlock::new(0xA700, 0xA720, "Modifier Tone Letters"),
    UnicodeBlock::new(0xA720, 0xA800, "Latin Extended-D"),
    UnicodeBlock::new(0xA800, 0xA830, "Syloti Nagri"),
    UnicodeBlock::new(0xA830, 0xA840, "Common Indic Number Forms"),
    UnicodeBlock::new(0xA840, 0xA880, "Phags-pa"),
    UnicodeBlock::new(0xA880, 0xA8E0, "Saurashtra"),
    UnicodeBlock::new(0xA8E0, 0xA900, "Devanagari Extended"),
    UnicodeBlock::new(0xA900, 0xA930, "Kayah Li"),
    UnicodeBlock::new(0xA930, 0xA960, "Rejang"),
    UnicodeBlock::new(0xA960, 0xA980, "Hangul Jamo Extended-A"),
    UnicodeBlock::new(0xA980, 0xA9E0, "Javanese"),
    UnicodeBlock::new(0xA9E0, 0xAA00, "Myanmar Extended-B"),
    UnicodeBlock::new(0xAA00, 0xAA60, "Cham"),
    UnicodeBlock::new(0xAA60, 0xAA80, "Myanmar Extended-A"),
    UnicodeBlock::new(0xAA80, 0xAAE0, "Tai Viet"),
    UnicodeBlock::new(0xAAE0, 0xAB00, "Meetei Mayek Extensions"),
    UnicodeBlock::new(0xAB00, 0xAB30, "Ethiopic Extended-A"),
    UnicodeBlock::new(0xAB30, 0xAB70, "Latin Extended-E"),
    UnicodeBlock::new(0xAB70, 0xABC0, "Cherokee Supplement"),
    UnicodeBlock::new(0xABC0, 0xAC00, "Meetei Mayek"),
    UnicodeBlock::new(0xAC00, 0xD7B0, "Hangul Syllables"),
    UnicodeBlock::new(0xD7B0, 0xD800, "Hangul Jamo Extended-B"),
    UnicodeBlock::new(0xD800, 0xDB80, "High Surrogates"),
    UnicodeBlock::new(0xDB80, 0xDC00, "High Private Use Surrogates"),
    UnicodeBlock::new(0xDC00, 0xE000, "Low Surrogates"),
    UnicodeBlock::new(0xE000, 0xF900, "Private Use Area"),
    UnicodeBlock::new(0xF900, 0xFB00, "CJK Compatibility Ideographs"),
    UnicodeBlock::new(0xFB00, 0xFB50, "Alphabetic Presentation Forms"),
    UnicodeBlock::new(0xFB50, 0xFE00, "Arabic Presentation Forms-A"),
    UnicodeBlock::new(0xFE00, 0xFE10, "Variation Selectors"),
    UnicodeBlock::new(0xFE10, 0xFE20, "Vertical Forms"),
    UnicodeBlock::new(0xFE20, 0xFE30, "Combining Half Marks"),
    UnicodeBlock::new(0xFE30, 0xFE50, "CJK Compatibility Forms"),
    UnicodeBlock::new(0xFE50, 0xFE70, "Small Form Variants"),
    UnicodeBlock::new(0xFE70, 0xFF00, "Arabic Presentation Forms-B"),
    UnicodeBlock::new(0xFF00, 0xFFF0, "Halfwidth and Fullwidth Forms"),
    UnicodeBlock::new(0xFFF0, 0x10000, "Specials"),
    UnicodeBlock::new(0x10000, 0x10080, "Linear B Syllabary"),
    UnicodeBlock::new(0x10080, 0x10100, "Linear B Ideograms"),
    UnicodeBlock::new(0x10100, 0x10140, "Aegean Numbers"),
    UnicodeBlock::new(0x10140, 0x10190, "Ancient Greek Numbers"),
    UnicodeBlock::new(0x10190, 0x101D0, "Ancient Symbols"),
    UnicodeBlock::new(0x101D0, 0x10200, "Phaistos Disc"),
    UnicodeBlock::new(0x10280, 0x102A0, "Lycian"),
    UnicodeBlock::new(0x102A0, 0x102E0, "Carian"),
    UnicodeBlock::new(0x102E0, 0x10300, "Coptic Epact Numbers"),
    UnicodeBlock::new(0x10300, 0x10330, "Old Italic"),
    UnicodeBlock::new(0x10330, 0x10350, "Gothic"),
    UnicodeBlock::new(0x10350, 0x10380, "Old Permic"),
    UnicodeBlock::new(0x10380, 0x103A0, "Ugaritic"),
    UnicodeBlock::new(0x103A0, 0x103E0, "Old Persian"),
    UnicodeBlock::new(0x10400, 0x10450, "Deseret"),
    UnicodeBlock::new(0x10450, 0x10480, "Shavian"),
    UnicodeBlock::new(0x10480, 0x104B0, "Osmanya"),
    UnicodeBlock::new(0x104B0, 0x10500, "Osage"),
    UnicodeBlock::new(0x10500, 0x10530, "Elbasan"),
    UnicodeBlock::new(0x10530, 0x10570, "Caucasian Albanian"),
    UnicodeBlock::new(0x10570, 0x105C0, "Vithkuqi"),
    UnicodeBlock::new(0x105C0, 0x10600, "Todhri"),
    UnicodeBlock::new(0x10600, 0x10780, "Linear A"),
    UnicodeBlock::new(0x10780, 0x107C0, "Latin Extended-F"),
    UnicodeBlock::new(0x10800, 0x10840, "Cypriot Syllabary"),
    UnicodeBlock::new(0x10840, 0x10860, "Imperial Aramaic"),
    UnicodeBlock::new(0x10860, 0x10880, "Palmyrene"),
    UnicodeBlock::new(0x10880, 0x108B0, "Nabataean"),
    UnicodeBlock::new(0x108E0, 0x10900, "Hatran"),
    UnicodeBlock::new(0x10900, 0x10920, "Phoenician"),
    UnicodeBlock::new(0x10920, 0x10940, "Lydian"),
    UnicodeBlock::new(0x10980, 0x109A0, "Meroitic Hieroglyphs"),
    UnicodeBlock::new(0x109A0, 0x10A00, "Meroitic Cursive"),
    UnicodeBlock::new(0x10A00, 0x10A60, "Kharoshthi"),
    UnicodeBlock::new(0x10A60, 0x10A80, "Old South Arabian"),
    UnicodeBlock::new(0x10A80, 0x10AA0, "Old North Arabian"),
    UnicodeBlock::new(0x10AC0, 0x10B00, "Manichaean"),
    UnicodeBlock::new(0x10B00, 0x10B40, "Avestan"),
    UnicodeBlock::new(0x10B40, 0x10B60, "Inscriptional Parthian"),
    UnicodeBlock::new(0x10B60, 0x10B80, "Inscriptional Pahlavi"),
    UnicodeBlock::new(0x10B80, 0x10BB0, "Psalter Pahlavi"),
    UnicodeBlock::new(0x10C00, 0x10C50, "Old Turkic"),
    UnicodeBlock::new(0x10C80, 0x10D00, "Old Hungarian"),
    UnicodeBlock::new(0x10D00, 0x10D40, "Hanifi Rohingya"),
    UnicodeBlock::new(0x10D40, 0x10D90, "Garay"),
    UnicodeBlock::new(0x10E60, 0x10E80, "Rumi Numeral Symbols"),
    UnicodeBlock::new(0x10E80, 0x10EC0, "Yezidi"),
    UnicodeBlock::new(0x10EC0, 0x10F00, "Arabic Extended-C"),
    UnicodeBlock::new(0x10F00, 0x10F30, "Old Sogdian"),
    UnicodeBlock::new(0x10F30, 0x10F70, "Sogdian"),
    UnicodeBlock::new(0x10F70, 0x10FB0, "Old Uyghur"),
    UnicodeBlock::new(0x10FB0, 0x10FE0, "Chorasmian"),
    UnicodeBlock::new(0x10FE0, 0x11000, "Elymaic"),
    UnicodeBlock::new(0x11000, 0x11080, "Brahmi"),
    UnicodeBlock::new(0x11080, 0x110D0, "Kaithi"),
    UnicodeBlock::new(0x110D0, 0x11100, "Sora Sompeng"),
    UnicodeBlock::new(0x11100, 0x11150, "Chakma"),
    UnicodeBlock::new(0x11150, 0x11180, "Mahajani"),
    UnicodeBlock::new(0x11180, 0x111E0, "Sharada"),
    UnicodeBlock::new(0x111E0, 0x11200, "Sinhala Archaic Numbers"),
    UnicodeBlock::new(0x11200, 0x11250, "Khojki"),
    UnicodeBlock::new(0x11280, 0x112B0, "Multani"),
    UnicodeBlock::new(0x112B0, 0x11300, "Khudawadi"),
    UnicodeBlock::new(0x11300, 0x11380, "Grantha"),
    UnicodeBlock::new(0x11380, 0x11400, "Tulu-Tigalari"),
    UnicodeBlock::new(0x11400, 0x11480, "Newa"),
    UnicodeBlock::new(0x11480, 0x114E0, "Tirhuta"),
    UnicodeBlock::new(0x11580, 0x11600, "Siddham"),
    UnicodeBlock::new(0x11600, 0x11660, "Modi"),
    UnicodeBlock::new(0x11660, 0x11680, "Mongolian Supplement"),
    UnicodeBlock::new(0x11680, 0x116D0, "Takri"),
    UnicodeBlock::new(0x116D0, 0x11700, "Myanmar Extended-C"),
    UnicodeBlock::new(0x11700, 0x11750, "Ahom"),
    UnicodeBlock::new(0x11800, 0x11850, "Dogra"),
    UnicodeBlock::new(0x118A0, 0x11900, "Warang Citi"),
    UnicodeBlock::new(0x11900, 0x11960, "Dives Akuru"),
    UnicodeBlock::new(0x119A0, 0x11A00, "Nandinagari"),
    UnicodeBlock::new(0x11A00, 0x11A50, "Zanabazar Square"),
    UnicodeBlock::new(0x11A50, 0x11AB0, "Soyombo"),
    UnicodeBlock::new(0x11AB0, 0x11AC0, "Unified Canadian Aboriginal Syllabics Extended-A"),
    UnicodeBlock::new(0x11AC0, 0x11B00, "Pau Cin Hau"),
    UnicodeBlock::new(0x11B00, 0x11B60, "Devanagari Extended-A"),
    UnicodeBlock::new(0x11BC0, 0x11C00, "Sunuwar"),
    UnicodeBlock::new(0x11C00, 0x11C70, "Bhaiksuki"),
    UnicodeBlock::new(0x11C70, 0x11CC0, "Marchen"),
    UnicodeBlock::new(0x11D00, 0x11D60, "Masaram Gondi"),
    UnicodeBlock::new(0x11D60, 0x11DB0, "Gunjala Gondi"),
    UnicodeBlock::new(0x11EE0, 0x11F00, "Makasar"),
    UnicodeBlock::new(0x11F00, 0x11F60, "Kawi"),
    UnicodeBlock::new(0x11FB0, 0x11FC0, "Lisu Supplement"),
    UnicodeBlock::new(0x11FC0, 0x12000, "Tamil Supplement"),
    UnicodeBlock::new(0x12000, 0x12400, "Cuneiform"),
    UnicodeBlock::new(0x12400, 0x12480, "Cuneiform Numbers and Punctuation"),
    UnicodeBlock::new(0x12480, 0x12550, "Early Dynastic Cuneiform"),
    UnicodeBlock::new(0x12F90, 0x13000, "Cypro-Minoan"),
    UnicodeBlock::new(0x13000, 0x13430, "Egyptian Hieroglyphs"),
    UnicodeBlock::new(0x13430, 0x13460, "Egyptian Hieroglyph Format Controls"),
    UnicodeBlock::new(0x13460, 0x14400, "Egyptian Hieroglyphs Extended-A"),
    UnicodeBlock::new(0x14400, 0x14680, "Anatolian Hieroglyphs"),
    UnicodeBlock::new(0x16100, 0x16140, "Gurung Khema"),
    UnicodeBlock::new(0x16800, 0x16A40, "Bamum Supplement"),
    UnicodeBlock::new(0x16A40, 0x16A70, "Mro"),
    UnicodeBlock::new(0x16A70, 0x16AD0, "Tangsa"),
    UnicodeBlock::new(0x16AD0, 0x16B00, "Bassa Vah"),
    UnicodeBlock::new(0x16B00, 0x16B90, "Pahawh Hmong"),
    UnicodeBlock::new(0x16D40, 0x16D80, "Kirat Rai"),
    UnicodeBlock::new(0x16E40, 0x16EA0, "Medefaidrin"),
    UnicodeBlock::new(0x16F00, 0x16FA0, "Miao"),
    UnicodeBlock::new(0x16FE0, 0x17000, "Ideographic Symbols and Punctuation"),
    UnicodeBlock::new(0x17000, 0x18800, "Tangut"),
    UnicodeBlock::new(0x18800, 0x18B00, "Tangut Components"),
    UnicodeBlock::new(0x18B00, 0x18D00, "Khitan Small Script"),
    UnicodeBlock::new(0x18D00, 0x18D80, "Tangut Supplement"),
    UnicodeBlock::new(0x1AFF0, 0x1B000, "Kana Extended-B"),
    UnicodeBlock::new(0x1B000, 0x1B100, "Kana Supplement"),
    UnicodeBlock::new(0x1B100, 0x1B130, "Kana Extended-A"),
    UnicodeBlock::new(0x1B130, 0x1B170, "Small Kana Extension"),
    UnicodeBlock::new(0x1B170, 0x1B300, "Nushu"),
    UnicodeBlock::new(0x1BC00, 0x1BCA0, "Duployan"),
    UnicodeBlock::new(0x1BCA0, 0x1BCB0, "Shorthand Format Controls"),
    UnicodeBlock::new(0x1CC00, 0x1CEC0, "Symbols for Legacy Computing Supplement"),
    UnicodeBlock::new(0x1CF00, 0x1CFD0, "Znamenny Musical Notation"),
    UnicodeBlock::new(0x1D000, 0x1D100, "Byzantine Musical Symbols"),
    UnicodeBlock::new(0x1D100, 0x1D200, "Musical Symbols"),
    UnicodeBlock::new(0x1D200, 0x1D250, "Ancient Greek Musical Notation"),
    UnicodeBlock::new(0x1D2C0, 0x1D2E0, "Kaktovik Numerals"),
    UnicodeBlock::new(0x1D2E0, 0x1D300, "Mayan Numerals"),
    UnicodeBlock::new(0x1D300, 0x1D360, "Tai Xuan Jing Symbols"),
    UnicodeBlock::new(0x1D360, 0x1D380, "Counting Rod Numerals"),
    UnicodeBlock::new(0x1D400, 0x1D800, "Mathematical Alphanumeric Symbols"),
    UnicodeBlock::new(0x1D800, 0x1DAB0, "Sutton SignWriting"),
    UnicodeBlock::new(0x1DF00, 0x1E000, "Latin Extended-G"),
    UnicodeBlock::new(0x1E000, 0x1E030, "Glagolitic Supplement"),
    UnicodeBlock::new(0x1E030, 0x1E090, "Cyrillic Extended-D"),
    UnicodeBlock::new(0x1E100, 0x1E150, "Nyiakeng Puachue Hmong"),
    UnicodeBlock::new(0x1E290, 0x1E2C0, "Toto"),
    UnicodeBlock::new(0x1E2C0, 0x1E300, "Wancho"),
    UnicodeBlock::new(0x1E4D0, 0x1E500, "Nag Mundari"),
    UnicodeBlock::new(0x1E5D0, 0x1E600, "Ol Onal"),
    UnicodeBlock::new(0x1E7E0, 0x1E800, "Ethiopic Extended-B"),
    UnicodeBlock::new(0x1E800, 0x1E8E0, "Mende Kikakui"),
    UnicodeBlock::new(0x1E900, 0x1E960, "Adlam"),
    UnicodeBlock::new(0x1EC70, 0x1ECC0, "Indic Siyaq Numbers"),
    UnicodeBlock::new(0x1ED00, 0x1ED50, "Ottoman Siyaq Numbers"),
    UnicodeBlock::new(0x1EE00, 0x1EF00, "Arabic Mathematical Alphabetic Symbols"),
    UnicodeBlock::new(0x1F000, 0x1F030, "Mahjong Tiles"),
    UnicodeBlock::new(0x1F030, 0x1F0A0, "Domino Tiles"),
    UnicodeBlock::new(0x1F0A0, 0x1F100, "Playing Cards"),
    UnicodeBlock::new(0x1F100, 0x1F200, "Enclosed Alphanumeric Supplement"),
    UnicodeBlock::new(0x1F200, 0x1F300, "Enclosed Ideographic Supplement"),
    UnicodeBlock::new(0x1F300, 0x1F600, "Miscellaneous Symbols and Pictographs"),
    UnicodeBlock::new(0x1F600, 0x1F650, "Emoticons"),
    UnicodeBlock::new(0x1F650, 0x1F680, "Ornamental Dingbats"),
    UnicodeBlock::new(0x1F680, 0x1F700, "Transport and Map Symbols"),
    UnicodeBlock::new(0x1F700, 0x1F780, "Alchemical Symbols"),
    UnicodeBlock::new(0x1F780, 0x1F800, "Geometric Shapes Extended"),
    UnicodeBlock::new(0x1F800, 0x1F900, "Supplemental Arrows-C"),
    UnicodeBlock::new(0x1F900, 0x1FA00, "Supplemental Symbols and Pictographs"),
    UnicodeBlock::new(0x1FA00, 0x1FA70, "Chess Symbols"),
    UnicodeBlock::new(0x1FA70, 0x1FB00, "Symbols and Pictographs Extended-A"),
    UnicodeBlock::new(0x1FB00, 0x1FC00, "Symbols for Legacy Computing"),
    UnicodeBlock::new(0x20000, 0x2A6E0, "CJK Unified Ideographs Extension B"),
    UnicodeBlock::new(0x2A700, 0x2B740, "CJK Unified Ideographs Extension C"),
    UnicodeBlock::new(0x2B740, 0x2B820, "CJK Unified Ideographs Extension D"),
    UnicodeBlock::new(0x2B820, 0x2CEB0, "CJK Unified Ideographs Extension E"),
    UnicodeBlock::new(0x2CEB0, 0x2EBF0, "CJK Unified Ideographs Extension F"),
    UnicodeBlock::new(0x2EBF0, 0x2EE60, "CJK Unified Ideographs Extension I"),
    UnicodeBlock::new(0x2F800, 0x2FA20, "CJK Compatibility Ideographs Supplement"),
    UnicodeBlock::new(0x30000, 0x31350, "CJK Unified Ideographs Extension G"),
    UnicodeBlock::new(0x31350, 0x323B0, "CJK Unified Ideographs Extension H"),
    UnicodeBlock::new(0xE0000, 0xE0080, "Tags"),
    UnicodeBlock::new(0xE0100, 0xE01F0, "Variation Selectors Supplement"),
    UnicodeBlock::new(0xF0000, 0x100000, "Supplementary Private Use Area-A"),
    UnicodeBlock::new(0x100000, 0x110000, "Supplementary Private Use Area-B"),
];
