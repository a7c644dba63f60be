//! Character name database.

/// Source of character names.
///
/// Characters without a real name (controls, unassigned, private use) get a
/// placeholder wrapped in angle brackets, e.g. `<control-0007>`. Printability
/// is defined on top of that: a character is printable iff its name does not
/// start with `<`.
pub trait UnicodeDatabase {
    /// Human-readable name of `c`, or a bracketed placeholder.
    fn name(&self, c: char) -> String;

    /// Whether `c` has a real display name.
    fn is_printable(&self, c: char) -> bool {
        !self.name(c).starts_with('<')
    }
}

/// Name database backed by the `unicode_names2` tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDatabase;

impl UnicodeDatabase for SystemDatabase {
    fn name(&self, c: char) -> String {
        match unicode_names2::name(c) {
            Some(name) => name.to_string(),
            None => placeholder(c),
        }
    }
}

fn placeholder(c: char) -> String {
    let value = c as u32;
    let kind = if c.is_control() {
        "control"
    } else if is_private_use(value) {
        "private-use"
    } else if is_noncharacter(value) {
        "noncharacter"
    } else {
        "reserved"
    };
    format!("<{}-{:04X}>", kind, value)
}

fn is_private_use(value: u32) -> bool {
    matches!(value, 0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD)
}

fn is_noncharacter(value: u32) -> bool {
    (0xFDD0..=0xFDEF).contains(&value) || value & 0xFFFE == 0xFFFE
}

/// Label used in selection lists and warnings: the character, four spaces, its name.
pub fn describe(db: &impl UnicodeDatabase, c: char) -> String {
    format!("{}    {}", c, db.name(c))
}
