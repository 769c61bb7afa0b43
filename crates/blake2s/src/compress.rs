//! BLAKE2s compression function (RFC 7693, section 3.2).
//!
//! Pure, allocation-free, and portable. Everything above this module (streaming,
//! keyed mode, BLAKE2Xs) drives the state through [`compress_blocks`].

#![allow(clippy::indexing_slicing)] // Compression schedule uses fixed indices

/// Block size in bytes.
pub const BLOCK_LEN: usize = 64;

/// Flag value XORed into `v14` when compressing the final block.
pub const FINAL_FLAG: u32 = 0xFFFF_FFFF;

/// Initialization vector (the SHA-256 IV).
pub const IV: [u32; 8] = [
  0x6A09_E667,
  0xBB67_AE85,
  0x3C6E_F372,
  0xA54F_F53A,
  0x510E_527F,
  0x9B05_688C,
  0x1F83_D9AB,
  0x5BE0_CD19,
];

/// Message word schedule, one permutation of `0..16` per round.
pub const SIGMA: [[usize; 16]; 10] = [
  [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
  [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
  [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
  [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
  [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
  [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
  [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
  [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
  [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
  [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// Add `n` bytes to the 64-bit counter `c = (low, high)`, carrying into the high word.
#[inline(always)]
pub fn increment_counter(c: &mut [u32; 2], n: u32) {
  c[0] = c[0].wrapping_add(n);
  if c[0] < n {
    c[1] = c[1].wrapping_add(1);
  }
}

/// Subtract `n` bytes from the counter, borrowing from the high word when the
/// low word underflows.
#[inline(always)]
pub fn rewind_counter(c: &mut [u32; 2], n: u32) {
  if c[0] < n {
    c[1] = c[1].wrapping_sub(1);
  }
  c[0] = c[0].wrapping_sub(n);
}

#[inline(always)]
fn g(a: &mut u32, b: &mut u32, c: &mut u32, d: &mut u32, x: u32, y: u32) {
  *a = a.wrapping_add(*b).wrapping_add(x);
  *d = (*d ^ *a).rotate_right(16);
  *c = c.wrapping_add(*d);
  *b = (*b ^ *c).rotate_right(12);
  *a = a.wrapping_add(*b).wrapping_add(y);
  *d = (*d ^ *a).rotate_right(8);
  *c = c.wrapping_add(*d);
  *b = (*b ^ *c).rotate_right(7);
}

/// Compress one block. `c` is the counter value *after* this block was added.
#[inline(always)]
fn compress_block(h: &mut [u32; 8], block: &[u8; BLOCK_LEN], c: [u32; 2], flag: u32) {
  let (words, _) = block.as_chunks::<4>();
  let mut m = [0u32; 16];
  for (dst, src) in m.iter_mut().zip(words) {
    *dst = u32::from_le_bytes(*src);
  }

  let mut v0 = h[0];
  let mut v1 = h[1];
  let mut v2 = h[2];
  let mut v3 = h[3];
  let mut v4 = h[4];
  let mut v5 = h[5];
  let mut v6 = h[6];
  let mut v7 = h[7];

  let mut v8 = IV[0];
  let mut v9 = IV[1];
  let mut v10 = IV[2];
  let mut v11 = IV[3];
  let mut v12 = IV[4] ^ c[0];
  let mut v13 = IV[5] ^ c[1];
  let mut v14 = IV[6] ^ flag;
  // v15 carries the last-node flag in tree mode; sequential hashing leaves it alone.
  let mut v15 = IV[7];

  for s in &SIGMA {
    g(&mut v0, &mut v4, &mut v8, &mut v12, m[s[0]], m[s[1]]);
    g(&mut v1, &mut v5, &mut v9, &mut v13, m[s[2]], m[s[3]]);
    g(&mut v2, &mut v6, &mut v10, &mut v14, m[s[4]], m[s[5]]);
    g(&mut v3, &mut v7, &mut v11, &mut v15, m[s[6]], m[s[7]]);

    g(&mut v0, &mut v5, &mut v10, &mut v15, m[s[8]], m[s[9]]);
    g(&mut v1, &mut v6, &mut v11, &mut v12, m[s[10]], m[s[11]]);
    g(&mut v2, &mut v7, &mut v8, &mut v13, m[s[12]], m[s[13]]);
    g(&mut v3, &mut v4, &mut v9, &mut v14, m[s[14]], m[s[15]]);
  }

  h[0] ^= v0 ^ v8;
  h[1] ^= v1 ^ v9;
  h[2] ^= v2 ^ v10;
  h[3] ^= v3 ^ v11;
  h[4] ^= v4 ^ v12;
  h[5] ^= v5 ^ v13;
  h[6] ^= v6 ^ v14;
  h[7] ^= v7 ^ v15;
}

/// Compress consecutive 64-byte blocks into `h`.
///
/// For each block the counter `c` is first advanced by [`BLOCK_LEN`], then the
/// block is mixed with `flag` XORed into `v14` (`0` for interior blocks,
/// [`FINAL_FLAG`] for the last one).
///
/// `blocks.len()` must be a multiple of [`BLOCK_LEN`]. This is a caller
/// contract: it is checked with `debug_assert!` only, and any trailing partial
/// block is ignored in release builds.
#[inline]
pub fn compress_blocks(h: &mut [u32; 8], c: &mut [u32; 2], flag: u32, blocks: &[u8]) {
  debug_assert_eq!(blocks.len() % BLOCK_LEN, 0);
  let (blocks, _) = blocks.as_chunks::<BLOCK_LEN>();
  for block in blocks {
    increment_counter(c, BLOCK_LEN as u32);
    compress_block(h, block, *c, flag);
  }
}
