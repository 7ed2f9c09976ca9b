//! # Block Compressor — Schedule Expansion and the 64-Round Core
//!
//! Processes 512-bit blocks strictly in order: each block is expanded into a
//! 64-word message schedule and folded into the running 8-word hash state by
//! the FIPS 180-4 compression function. Block *i*'s output state is block
//! *i+1*'s input state; the state after the last block is the digest.
//!
//! All arithmetic is unsigned 32-bit with wraparound (`wrapping_add`), and
//! the working state is a fixed 8-register array mutated in place across the
//! 64 rounds.

use crate::padding::Block;

#[inline]
fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

#[inline]
fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Σ0 — big sigma applied to register `a` in the round function.
#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1 — big sigma applied to register `e` in the round function.
#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// σ0 — small sigma over `W[i-15]` in the schedule recurrence.
#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1 — small sigma over `W[i-2]` in the schedule recurrence.
#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand one block into the 64-word message schedule.
///
/// Words 0–15 are the block itself; words 16–63 follow
/// `W[i] = W[i-16] + σ0(W[i-15]) + W[i-7] + σ1(W[i-2])` mod 2^32.
fn expand_schedule(block: &Block) -> [u32; 64] {
    let mut w = [0u32; 64];
    w[..16].copy_from_slice(block);
    for i in 16..64 {
        w[i] = w[i - 16]
            .wrapping_add(small_sigma0(w[i - 15]))
            .wrapping_add(w[i - 7])
            .wrapping_add(small_sigma1(w[i - 2]));
    }
    w
}

/// Fold one block into the hash state and return the block's output state.
fn compress_block(state: [u32; 8], block: &Block, k: &[u32; 64]) -> [u32; 8] {
    let w = expand_schedule(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state;

    for i in 0..64 {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(k[i])
            .wrapping_add(w[i]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    // Feed-forward: add the final registers back into the incoming state.
    [
        state[0].wrapping_add(a),
        state[1].wrapping_add(b),
        state[2].wrapping_add(c),
        state[3].wrapping_add(d),
        state[4].wrapping_add(e),
        state[5].wrapping_add(f),
        state[6].wrapping_add(g),
        state[7].wrapping_add(h),
    ]
}

/// Run the compression function over every block in order, starting from
/// the initial hash value `h0`, and return the final 8-word state.
pub fn compress(blocks: &[Block], h0: [u32; 8], k: &[u32; 64]) -> [u32; 8] {
    blocks
        .iter()
        .fold(h0, |state, block| compress_block(state, block, k))
}
