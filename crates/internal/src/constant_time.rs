//! Constant-time operations to prevent timing attacks

use subtle::ConstantTimeEq;

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Only the
/// lengths are compared in variable time.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time check that every byte of `data` is zero
///
/// An empty slice counts as all-zero.
pub fn ct_is_zero(data: &[u8]) -> bool {
    let acc = data.iter().fold(0u8, |acc, &b| acc | b);
    acc.ct_eq(&0u8).into()
}

/// XOR `mask` into `dst` byte by byte
///
/// Panics if the lengths differ; callers derive the mask to the exact
/// length of the buffer.
pub fn ct_xor_into(dst: &mut [u8], mask: &[u8]) {
    assert_eq!(dst.len(), mask.len());
    for (d, m) in dst.iter_mut().zip(mask.iter()) {
        *d ^= *m;
    }
}
