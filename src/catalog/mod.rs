//! # Star catalog: records, storage, and ingestion
//!
//! The central type is [`Catalog`], an owned, ordered, contiguous sequence of
//! [`StarRecord`]s. Its length is whatever the source contained; the position
//! of a record in the catalog (its [`StarIndex`](crate::constants::StarIndex))
//! is the identity used by the partitioner, not the record's own `id`.
//!
//! Modules
//! -----------------
//! * [`star_record`](crate::catalog::star_record) – The immutable [`StarRecord`] and its separation helper.
//! * [`catalog_reader`](crate::catalog::catalog_reader) – Whitespace-separated text reader (`id ra dec` per line).
//!
//! Data Model
//! -----------------
//! * Records are `Copy` and never mutated after loading.
//! * A [`Catalog`] is filled **once**, sequentially, before any worker starts; afterwards it is
//!   only ever borrowed immutably (`&[StarRecord]`), so concurrent reads need no locking.
//!
//! Units
//! -----------------
//! * Right ascension and declination are stored in **degrees**, exactly as read.
pub mod catalog_reader;
pub mod star_record;

use std::ops::Index;

use camino::Utf8Path;

use crate::{constants::StarIndex, StarSepError};

pub use star_record::StarRecord;

/// Ordered, read-only collection of [`StarRecord`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    stars: Vec<StarRecord>,
}

impl Catalog {
    /// Wrap already-built records, keeping their order.
    pub fn from_records(stars: Vec<StarRecord>) -> Self {
        Self { stars }
    }

    /// Load a catalog file (`id ra dec` per line).
    ///
    /// Arguments
    /// -----------------
    /// * `path`: location of the catalog text file.
    ///
    /// Return
    /// ----------
    /// * The loaded [`Catalog`], or a [`StarSepError`] if the file is missing
    ///   or any line is malformed. No partial catalog is ever returned.
    ///
    /// See also
    /// ------------
    /// * [`catalog_reader::read_catalog_file`] – The underlying reader.
    pub fn from_file(path: &Utf8Path) -> Result<Self, StarSepError> {
        catalog_reader::read_catalog_file(path).map(Self::from_records)
    }

    /// Parse a catalog from any in-memory text source.
    pub fn from_text(text: &str) -> Result<Self, StarSepError> {
        catalog_reader::read_catalog(text.as_bytes()).map(Self::from_records)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    #[inline]
    pub fn stars(&self) -> &[StarRecord] {
        &self.stars
    }

    #[inline]
    pub fn get(&self, index: StarIndex) -> Option<&StarRecord> {
        self.stars.get(index)
    }
}

impl Index<StarIndex> for Catalog {
    type Output = StarRecord;

    fn index(&self, index: StarIndex) -> &Self::Output {
        &self.stars[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a StarRecord;
    type IntoIter = std::slice::Iter<'a, StarRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.stars.iter()
    }
}

impl FromIterator<StarRecord> for Catalog {
    fn from_iter<T: IntoIterator<Item = StarRecord>>(iter: T) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}
