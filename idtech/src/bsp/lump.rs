use super::BspError;

/// One lump directory entry: a byte range into the map file. Every flavor here
/// encodes it as two little-endian 32 bit integers.
#[repr(C, packed)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BspLump {
    pub offset: i32,
    pub length: i32,
}

impl BspLump {
    /// A lump is usable only if its whole range lies inside the file. Checked
    /// in i64 so a hostile offset/length pair cannot wrap.
    pub fn in_bounds(&self, file_len: usize) -> bool {
        let (offset, length) = (self.offset, self.length);
        offset >= 0 && length >= 0 && offset as i64 + length as i64 <= file_len as i64
    }
}

/// Rejects a directory containing any entry that reaches outside the file.
pub fn check_bounds(lumps: &[BspLump], file_len: usize) -> Result<(), BspError> {
    for (index, lump) in lumps.iter().enumerate() {
        if !lump.in_bounds(file_len) {
            let (offset, length) = (lump.offset, lump.length);
            return Err(BspError::LumpOutOfRange {
                index,
                offset,
                length,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lump(offset: i32, length: i32) -> BspLump {
        BspLump { offset, length }
    }

    #[test]
    fn bounds() {
        assert!(lump(0, 0).in_bounds(0));
        assert!(lump(8, 8).in_bounds(16));
        assert!(!lump(8, 9).in_bounds(16));
        assert!(!lump(-1, 4).in_bounds(16));
        assert!(!lump(4, -4).in_bounds(16));
        // offset + length would wrap an i32
        assert!(!lump(i32::MAX, i32::MAX).in_bounds(16));
    }

    #[test]
    fn directory_rejection_names_the_entry() {
        let lumps = [lump(0, 4), lump(4, 4), lump(6, 4)];
        assert!(check_bounds(&lumps[..2], 8).is_ok());
        assert!(matches!(
            check_bounds(&lumps, 8),
            Err(BspError::LumpOutOfRange { index: 2, .. })
        ));
    }
}
