pub mod consts;
pub mod goldsrc;
pub mod info;
pub mod loader;
pub mod lump;
pub mod miptex;
pub mod q1;
pub mod q2;
pub mod q3;

pub use info::BspInfo;
pub use loader::load_any_bsp;
pub use lump::BspLump;

use thiserror::Error;

// All four formats are the same idea: a small fixed header, then a directory
// of offset/length "lumps" pointing at variable length sections (entities,
// planes, faces, ...). What differs is the magic, the version, the entry count
// and what each index means, so everything downstream of detection keys off
// the flavor tag. Quake 1 and GoldSrc are the awkward pair: identical
// directory shape and overlapping version numbers, told apart by the texture
// lump encoding (see miptex.rs).

/// Which on-disk layout produced a `BspInfo`. Decides how consumers interpret
/// the lump indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BspFlavor {
    Quake1,
    Quake2,
    Quake3,
    GoldSrc,
}

/// Why a file did not load. Callers of `load_any_bsp` only ever see the
/// collapsed `None`; this is kept for logging and for callers that go through
/// `try_load_bsp`. A bad file is an expected outcome, never a panic.
#[derive(Debug, Error)]
pub enum BspError {
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("no known BSP flavor matches")]
    NoMatch,
    #[error("unexpected end of file in {0}")]
    Truncated(&'static str),
    #[error("bad magic number {found:?}")]
    BadMagic { found: [u8; 4] },
    #[error("unsupported {flavor:?} version {found}")]
    UnsupportedVersion { flavor: BspFlavor, found: i32 },
    #[error("texture lump is not in the {0:?} miptex encoding")]
    WrongTexEncoding(BspFlavor),
    #[error("lump {index} out of range (offset {offset}, length {length})")]
    LumpOutOfRange {
        index: usize,
        offset: i32,
        length: i32,
    },
}

/// Capability pair every flavor implements. Loaders are stateless unit
/// structs; a caller that already knows its format can use one directly and
/// skip dispatch.
pub trait BspLoader: Sync {
    fn flavor(&self) -> BspFlavor;

    /// Cheap, side-effect-free sniff of the leading bytes. Conservative by
    /// contract: exact magic/version matches only, and `false` (never a
    /// panic) on truncated input.
    fn can_load(&self, bytes: &[u8]) -> bool;

    /// Full header + directory decode with per-entry range validation. Takes
    /// the buffer by value; on success it becomes `BspInfo::raw`, so the file
    /// is read once and never copied.
    fn parse(&self, bytes: Vec<u8>) -> Result<BspInfo, BspError>;
}

/// Synthetic map files shared by the loader tests. Real maps are big and
/// copyrighted; these are the smallest buffers that exercise each layout.
#[cfg(test)]
pub(crate) mod test_maps {
    use super::consts::{
        Q1Lump, BSP_VERSION_Q2, BSP_VERSION_Q3, HEADER_LUMPS_Q1, HEADER_LUMPS_Q2, HEADER_LUMPS_Q3,
    };

    /// Byte offset of the lump directory in a Quake 1 / GoldSrc header.
    pub const Q1_DIR_OFFSET: usize = 4;
    /// Byte offset of the lump directory in an IBSP header.
    pub const IBSP_DIR_OFFSET: usize = 8;

    const Q1_HEADER_SIZE: usize = Q1_DIR_OFFSET + HEADER_LUMPS_Q1 * 8;

    fn push_lump(out: &mut Vec<u8>, offset: i32, length: i32) {
        out.extend_from_slice(&offset.to_le_bytes());
        out.extend_from_slice(&length.to_le_bytes());
    }

    fn push_miptex_header(out: &mut Vec<u8>, offsets: [u32; 4]) {
        let mut name = [0u8; 16];
        name[..4].copy_from_slice(b"wall");
        out.extend_from_slice(&name);
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&16u32.to_le_bytes());
        for offset in offsets {
            out.extend_from_slice(&offset.to_le_bytes());
        }
    }

    /// One 16x16 texture with all four mip levels embedded, Quake layout.
    pub fn quake_tex_lump() -> Vec<u8> {
        let mut lump = Vec::new();
        lump.extend_from_slice(&1i32.to_le_bytes()); // nummiptex
        lump.extend_from_slice(&8i32.to_le_bytes()); // dataofs[0]
        push_miptex_header(&mut lump, [40, 296, 360, 376]);
        lump.extend_from_slice(&[0x42; 256 + 64 + 16 + 4]); // mip pyramid
        lump
    }

    /// Same texture with the trailing GoldSrc color count and palette.
    pub fn goldsrc_tex_lump() -> Vec<u8> {
        let mut lump = quake_tex_lump();
        lump.extend_from_slice(&256u16.to_le_bytes());
        lump.extend_from_slice(&[0x24; 256 * 3]);
        lump
    }

    /// GoldSrc texture referencing an external WAD: no pixel data at all.
    pub fn goldsrc_wad_tex_lump() -> Vec<u8> {
        let mut lump = Vec::new();
        lump.extend_from_slice(&1i32.to_le_bytes());
        lump.extend_from_slice(&8i32.to_le_bytes());
        push_miptex_header(&mut lump, [0; 4]);
        lump
    }

    /// Version + 15 entry directory, the texture lump placed right after the
    /// header and every other lump empty.
    pub fn q1_style_file(version: i32, tex_lump: &[u8]) -> Vec<u8> {
        let mut file = version.to_le_bytes().to_vec();
        for i in 0..HEADER_LUMPS_Q1 {
            if i == Q1Lump::TEXTURES as usize && !tex_lump.is_empty() {
                push_lump(&mut file, Q1_HEADER_SIZE as i32, tex_lump.len() as i32);
            } else {
                push_lump(&mut file, 0, 0);
            }
        }
        file.extend_from_slice(tex_lump);
        file
    }

    pub fn q1_file(version: i32) -> Vec<u8> {
        q1_style_file(version, &quake_tex_lump())
    }

    pub fn goldsrc_file(version: i32) -> Vec<u8> {
        q1_style_file(version, &goldsrc_tex_lump())
    }

    pub fn goldsrc_wad_file(version: i32) -> Vec<u8> {
        q1_style_file(version, &goldsrc_wad_tex_lump())
    }

    fn ibsp_file(version: i32, lump_count: usize) -> Vec<u8> {
        let mut file = b"IBSP".to_vec();
        file.extend_from_slice(&version.to_le_bytes());
        for _ in 0..lump_count {
            push_lump(&mut file, 0, 0);
        }
        file
    }

    pub fn q2_file() -> Vec<u8> {
        ibsp_file(BSP_VERSION_Q2, HEADER_LUMPS_Q2)
    }

    pub fn q3_file() -> Vec<u8> {
        ibsp_file(BSP_VERSION_Q3, HEADER_LUMPS_Q3)
    }

    /// Rewrites directory entry `index` to a range past the end of the file.
    pub fn corrupt_lump(file: &mut [u8], dir_offset: usize, index: usize) {
        let at = dir_offset + index * 8;
        let len = file.len() as i32;
        file[at..at + 4].copy_from_slice(&len.to_le_bytes());
        file[at + 4..at + 8].copy_from_slice(&8i32.to_le_bytes());
    }
}
