use std::mem;

use bytemuck::AnyBitPattern;

/// Reads one `T` out of `bytes` at `offset`, little-endian, no alignment
/// requirement. `None` if the slice is too short.
pub fn read_unaligned<T: AnyBitPattern>(bytes: &[u8], offset: usize) -> Option<T> {
    let end = offset.checked_add(mem::size_of::<T>())?;
    Some(bytemuck::pod_read_unaligned(bytes.get(offset..end)?))
}

pub fn read_i32(bytes: &[u8], offset: usize) -> Option<i32> {
    read_unaligned(bytes, offset)
}

pub fn read_u16(bytes: &[u8], offset: usize) -> Option<u16> {
    read_unaligned(bytes, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_are_bounds_checked() {
        let bytes = [1u8, 0, 0, 0, 2, 0];

        assert_eq!(read_i32(&bytes, 0), Some(1));
        assert_eq!(read_i32(&bytes, 3), None);
        assert_eq!(read_u16(&bytes, 4), Some(2));
        assert_eq!(read_i32(&bytes, usize::MAX), None);
    }
}
