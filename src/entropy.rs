//! Access to the random bytes passwords are drawn from.

use rand::{CryptoRng, RngCore};

/// A supplier of cryptographically suitable, uniformly random bytes.
///
/// Sources are assumed to be inexhaustible: there is no error path.
pub trait EntropySource {
    fn fill_bytes(&mut self, dest: &mut [u8]);
}

impl<R> EntropySource for R
where
    R: RngCore + CryptoRng + ?Sized,
{
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        RngCore::fill_bytes(self, dest)
    }
}

/// Bytes requested from the source per refill.
pub(crate) const BLOCK_SIZE: usize = 64;

/// An unbounded stream of random bytes, pulled from a source one block at a time.
///
/// The stream borrows the source for as long as it lives, and wipes its buffered bytes when it is
/// dropped.
pub struct ByteStream<'a, S: EntropySource + ?Sized> {
    source: &'a mut S,
    block: [u8; BLOCK_SIZE],
    pos: usize,
}

impl<'a, S: EntropySource + ?Sized> ByteStream<'a, S> {
    pub fn new(source: &'a mut S) -> ByteStream<'a, S> {
        ByteStream {
            source,
            block: [0; BLOCK_SIZE],
            // Start exhausted, so the first pull fetches a block.
            pos: BLOCK_SIZE,
        }
    }
}

impl<S: EntropySource + ?Sized> Iterator for ByteStream<'_, S> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.pos == BLOCK_SIZE {
            self.source.fill_bytes(&mut self.block);
            self.pos = 0;
            tracing::trace!(block_size = BLOCK_SIZE, "refilled entropy block");
        }
        let byte = self.block[self.pos];
        self.pos += 1;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<S: EntropySource + ?Sized> Drop for ByteStream<'_, S> {
    fn drop(&mut self) {
        self.block.fill(0);
    }
}
