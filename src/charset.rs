//! Fixed-size charset store.
//!
//! A [`Charset`] is an ordered array of slots, each empty or holding one
//! character. Its length never changes after creation. Occupied slots never
//! share a character, and only printable characters are ever stored.

use std::collections::HashSet;

use crate::export;
use crate::unicode::UnicodeDatabase;

/// First printable ASCII code point (space).
pub const ASCII_PRINTABLE_START: u32 = 32;
/// One past the last printable ASCII code point (`~`).
pub const ASCII_PRINTABLE_END: u32 = 127;

/// One position in the charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterSlot {
    #[default]
    Empty,
    Occupied(char),
}

impl CharacterSlot {
    /// The stored character, if any.
    pub fn char(&self) -> Option<char> {
        match self {
            CharacterSlot::Empty => None,
            CharacterSlot::Occupied(c) => Some(*c),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CharacterSlot::Empty)
    }
}

/// Outcome of [`Charset::insert`].
///
/// All lists keep the order in which characters were passed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertReport {
    /// Characters that were stored, with the slot each one landed in.
    pub placed: Vec<(usize, char)>,
    /// Characters that were already present.
    pub duplicates: Vec<char>,
    /// Characters that were rejected because no empty slot remained.
    pub overflow: Vec<char>,
}

impl InsertReport {
    /// True if nothing was rejected as duplicate or overflow.
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.overflow.is_empty()
    }
}

/// Outcome of [`Charset::insert_ascii`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsciiReport {
    /// Number of ASCII characters written to their own index.
    pub placed: usize,
    /// ASCII characters whose code point is not a valid index.
    pub did_not_fit: Vec<char>,
}

/// Errors raised by charset mutation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CharsetError {
    #[error("slot index {index} is out of range for a charset of {size} slots")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Fixed-length ordered collection of character slots.
#[derive(Debug, Clone)]
pub struct Charset {
    slots: Box<[CharacterSlot]>,
    /// Characters currently stored, for constant-time duplicate checks.
    stored: HashSet<char>,
    /// Every slot below this index is occupied.
    free_hint: usize,
}

impl PartialEq for Charset {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl Eq for Charset {}

impl Charset {
    /// Create a charset of `size` empty slots.
    pub fn new(size: usize) -> Self {
        log::info!("Created charset with {} slots", size);
        Self {
            slots: vec![CharacterSlot::Empty; size].into_boxed_slice(),
            stored: HashSet::new(),
            free_hint: 0,
        }
    }

    /// Number of slots.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[CharacterSlot] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<CharacterSlot> {
        self.slots.get(index).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.stored.contains(&c)
    }

    /// Occupied slots as `(index, char)`, ascending by index.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.char().map(|c| (i, c)))
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    pub fn free_count(&self) -> usize {
        self.size() - self.occupied_count()
    }

    /// Lowest empty slot. Advances the hint past the occupied prefix.
    fn first_free(&mut self) -> Option<usize> {
        let offset = self.slots[self.free_hint..]
            .iter()
            .position(CharacterSlot::is_empty)?;
        self.free_hint += offset;
        Some(self.free_hint)
    }

    /// Put every printable ASCII character at the index equal to its code point.
    ///
    /// Meant to run once on a fresh charset: whatever occupies slots 32..=126
    /// is overwritten without checking. Characters whose code point is not a
    /// valid index are reported in `did_not_fit`.
    pub fn insert_ascii(&mut self) -> AsciiReport {
        let mut report = AsciiReport::default();
        for c in (ASCII_PRINTABLE_START..ASCII_PRINTABLE_END).filter_map(char::from_u32) {
            let index = c as usize;
            match self.slots.get_mut(index) {
                Some(slot) => {
                    if let Some(previous) = slot.char() {
                        self.stored.remove(&previous);
                    }
                    *slot = CharacterSlot::Occupied(c);
                    self.stored.insert(c);
                    report.placed += 1;
                }
                None => report.did_not_fit.push(c),
            }
        }
        log::info!(
            "Placed {} ASCII characters, {} did not fit",
            report.placed,
            report.did_not_fit.len()
        );
        report
    }

    /// Insert characters first-fit into the lowest empty slot.
    ///
    /// Characters already present are reported as duplicates, characters that
    /// find no empty slot as overflow. Non-printable characters are dropped
    /// without being reported.
    pub fn insert<I>(&mut self, chars: I, db: &impl UnicodeDatabase) -> InsertReport
    where
        I: IntoIterator<Item = char>,
    {
        let mut report = InsertReport::default();
        for c in chars {
            if self.contains(c) {
                report.duplicates.push(c);
            } else if !db.is_printable(c) {
                log::debug!("Skipping non-printable U+{:04X}", c as u32);
            } else if let Some(index) = self.first_free() {
                self.slots[index] = CharacterSlot::Occupied(c);
                self.stored.insert(c);
                report.placed.push((index, c));
            } else {
                report.overflow.push(c);
            }
        }
        log::info!(
            "Inserted {} characters ({} duplicate, {} overflow)",
            report.placed.len(),
            report.duplicates.len(),
            report.overflow.len()
        );
        report
    }

    /// Clear the given slots. Returns how many of them were occupied.
    ///
    /// Every index is checked before anything is cleared, so an out-of-range
    /// index leaves the charset untouched.
    pub fn delete<I>(&mut self, indices: I) -> Result<usize, CharsetError>
    where
        I: IntoIterator<Item = usize>,
    {
        let indices: Vec<usize> = indices.into_iter().collect();
        let size = self.size();
        if let Some(&index) = indices.iter().find(|&&i| i >= size) {
            return Err(CharsetError::IndexOutOfRange { index, size });
        }

        let mut cleared = 0;
        for index in indices {
            if let Some(c) = self.slots[index].char() {
                self.stored.remove(&c);
                self.free_hint = self.free_hint.min(index);
                cleared += 1;
            }
            self.slots[index] = CharacterSlot::Empty;
        }
        log::info!("Cleared {} slots", cleared);
        Ok(cleared)
    }

    /// Render the charset in export format, slot 0 first.
    pub fn serialize(&self, db: &impl UnicodeDatabase) -> String {
        self.slots
            .iter()
            .map(|slot| export::slot_record(*slot, db))
            .collect()
    }
}
