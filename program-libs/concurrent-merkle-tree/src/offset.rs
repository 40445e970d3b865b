//! Fixed-width little-endian cursor helpers for account data.
//!
//! None of these functions check the length of the buffer. The
//! responsibility of such checks is on the caller.

/// Writes provided `data` into provided `bytes` buffer with the given
/// `offset`.
pub fn write_at(bytes: &mut [u8], data: &[u8], offset: &mut usize) {
    bytes[*offset..*offset + data.len()].copy_from_slice(data);
    *offset += data.len();
}

pub fn write_u32_at(bytes: &mut [u8], value: u32, offset: &mut usize) {
    write_at(bytes, &value.to_le_bytes(), offset);
}

pub fn write_u64_at(bytes: &mut [u8], value: u64, offset: &mut usize) {
    write_at(bytes, &value.to_le_bytes(), offset);
}

/// Reads `N` bytes from provided `bytes` buffer with the given `offset`.
pub fn read_array_at<const N: usize>(bytes: &[u8], offset: &mut usize) -> [u8; N] {
    let mut array = [0u8; N];
    array.copy_from_slice(&bytes[*offset..*offset + N]);
    *offset += N;
    array
}

pub fn read_u32_at(bytes: &[u8], offset: &mut usize) -> u32 {
    u32::from_le_bytes(read_array_at(bytes, offset))
}

pub fn read_u64_at(bytes: &[u8], offset: &mut usize) -> u64 {
    u64::from_le_bytes(read_array_at(bytes, offset))
}
