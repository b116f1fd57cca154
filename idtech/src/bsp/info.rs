use std::fmt;

use super::{lump::BspLump, BspFlavor};

/// The normalized result of a successful parse. Owns the whole file buffer so
/// flavor-aware extraction can slice lumps later without touching the disk
/// again. Immutable after construction.
#[derive(Clone)]
pub struct BspInfo {
    pub flavor: BspFlavor,
    pub map_name: String,
    /// On-disk version integer; its meaning is flavor specific.
    pub version: i32,
    /// Index-addressed directory. Which index means what is decided by
    /// `flavor`, see the per-flavor enums in `consts`.
    pub lumps: Vec<BspLump>,
    /// The entire file buffer.
    pub raw: Vec<u8>,
}

impl BspInfo {
    /// Slice of the raw bytes covered by lump `index`, or `None` for an index
    /// this flavor does not have. The range itself was validated at parse
    /// time, so a lookup on a constructed `BspInfo` cannot fail on bounds.
    pub fn lump_bytes(&self, index: usize) -> Option<&[u8]> {
        let lump = self.lumps.get(index)?;
        let (offset, length) = (lump.offset as usize, lump.length as usize);
        self.raw.get(offset..offset + length)
    }
}

impl fmt::Debug for BspInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BspInfo")
            .field("flavor", &self.flavor)
            .field("map_name", &self.map_name)
            .field("version", &self.version)
            .field("lumps", &self.lumps.len())
            .field("raw", &self.raw.len())
            .finish()
    }
}
