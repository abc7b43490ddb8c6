//! Key bytes derived from the generator.

use crate::engine::ChaosEngine;

/// Map a generator state onto a key byte: `floor(x * 255)`.
///
/// For `x` in `(0, 1)` the result is in `0..=254`.
#[inline]
pub fn key_byte(x: f64) -> u8 {
    (x * 255.0).floor() as u8
}

/// An endless iterator of key bytes, one generator step per byte.
pub struct Keystream<'a> {
    engine: &'a mut ChaosEngine,
}

impl<'a> Keystream<'a> {
    pub(crate) fn new(engine: &'a mut ChaosEngine) -> Self {
        Self { engine }
    }

    /// XOR the keystream into `buf` in place.
    pub fn apply(&mut self, buf: &mut [u8]) {
        for (byte, key) in buf.iter_mut().zip(self) {
            *byte ^= key;
        }
    }
}

impl Iterator for Keystream<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(key_byte(self.engine.next()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
