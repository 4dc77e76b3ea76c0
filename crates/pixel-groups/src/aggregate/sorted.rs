//! Sorted channel sequences and the cursor that reinserts them.

use crate::grid::{Rgb, Rgba};

/// Per-channel ascending sequences for one group.
///
/// The three channels are sorted independently, so the `i`-th output color is
/// generally not a color that occurred in the group; only the per-channel
/// multisets are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedChannels {
    r: Vec<u8>,
    g: Vec<u8>,
    b: Vec<u8>,
}

impl SortedChannels {
    /// Sort each color channel of `samples` ascending.
    pub fn from_samples(samples: &[Rgba]) -> Self {
        let mut r: Vec<u8> = samples.iter().map(|px| px.r).collect();
        let mut g: Vec<u8> = samples.iter().map(|px| px.g).collect();
        let mut b: Vec<u8> = samples.iter().map(|px| px.b).collect();
        r.sort();
        g.sort();
        b.sort();
        Self { r, g, b }
    }

    /// Number of entries per channel (the group size).
    #[inline]
    pub fn len(&self) -> usize {
        self.r.len()
    }

    /// Whether the group was empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.r.is_empty()
    }

    /// The color formed by the `index`-th entry of every channel.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn at(&self, index: usize) -> Rgb {
        Rgb::new(self.r[index], self.g[index], self.b[index])
    }

    /// The sorted red channel.
    pub fn red(&self) -> &[u8] {
        &self.r
    }

    /// The sorted green channel.
    pub fn green(&self) -> &[u8] {
        &self.g
    }

    /// The sorted blue channel.
    pub fn blue(&self) -> &[u8] {
        &self.b
    }
}

/// Which visited pixels consume a sorted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReinsertOrder {
    /// Every visited pixel consumes the entry at its own slot, masked or not.
    /// A protected pixel discards the entry it would have received.
    Slot,
    /// Only unmasked pixels consume entries, in visitation order. Entries at
    /// the tail of the sequence go unused when pixels are protected.
    Unmasked,
}

/// Walks a [`SortedChannels`] while an engine re-scans a group.
///
/// A fresh cursor is created for every group. The engine calls
/// [`take`](Self::take) for each unmasked pixel and
/// [`skip_masked`](Self::skip_masked) for each protected one; the
/// [`ReinsertOrder`] decides whether the latter advances.
#[derive(Debug)]
pub struct SortCursor<'a> {
    channels: &'a SortedChannels,
    order: ReinsertOrder,
    position: usize,
}

impl<'a> SortCursor<'a> {
    /// Start a cursor at the smallest entry.
    pub fn new(channels: &'a SortedChannels, order: ReinsertOrder) -> Self {
        Self {
            channels,
            order,
            position: 0,
        }
    }

    /// Number of entries consumed or skipped so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Take the next entry for an unmasked pixel.
    ///
    /// # Panics
    ///
    /// Panics when called more times than the group has pixels.
    #[inline]
    pub fn take(&mut self) -> Rgb {
        let value = self.channels.at(self.position);
        self.position += 1;
        value
    }

    /// Account for a protected pixel.
    #[inline]
    pub fn skip_masked(&mut self) {
        if self.order == ReinsertOrder::Slot {
            self.position += 1;
        }
    }
}
