use std::mem;

use crate::binaries;

use super::lump::BspLump;

// Quake 1 and GoldSrc share the 15-entry directory, and map compilers have
// shipped both layouts under both version numbers, so the texture lump is what
// actually separates them:
//   - Quake 1 embeds every texture and indexes the shared global palette; a
//     miptex spans exactly its header plus the four mip levels.
//   - GoldSrc either leaves all four mip offsets zero (texture lives in an
//     external WAD, a layout Quake never produces) or appends a 16 bit color
//     count and a 256 entry RGB palette after the mip data.

pub const MIPLEVELS: usize = 4;

/// Trailing GoldSrc palette: color count (always 256) + 256 RGB triples.
const PALETTE_BYTES: usize = 2 + 256 * 3;

/// Entries inspected before giving up on a verdict.
const PROBE_LIMIT: usize = 8;

#[repr(C, packed)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MipTex {
    pub name: [u8; 16],
    pub width: u32,
    pub height: u32,
    /// Offsets of the four mip levels, relative to this header. All zero means
    /// the pixel data is external.
    pub offsets: [u32; MIPLEVELS],
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TexEncoding {
    Quake,
    GoldSrc,
    /// Empty or unreadable texture lump; the caller falls back to the version
    /// number.
    Inconclusive,
}

/// Classifies the texture lump encoding. Side-effect free, never panics on a
/// truncated or corrupt lump, and reads nothing outside the lump's declared
/// extent, so neighboring lumps cannot sway the verdict.
pub fn probe(bytes: &[u8], textures: &BspLump) -> TexEncoding {
    if !textures.in_bounds(bytes.len()) || textures.length < 4 {
        return TexEncoding::Inconclusive;
    }
    let (base, len) = (textures.offset as usize, textures.length as usize);
    let lump = &bytes[base..base + len];

    let Some(count) = binaries::read_i32(lump, 0) else {
        return TexEncoding::Inconclusive;
    };
    if count <= 0 {
        return TexEncoding::Inconclusive;
    }

    for i in 0..(count as usize).min(PROBE_LIMIT) {
        let Some(rel) = binaries::read_i32(lump, 4 + i * 4) else {
            break;
        };
        if rel < 0 {
            // removed slot, both compilers emit these
            continue;
        }
        let at = rel as usize;
        let Some(tex) = binaries::read_unaligned::<MipTex>(lump, at) else {
            continue;
        };

        let offsets = tex.offsets;
        if offsets == [0; MIPLEVELS] {
            return TexEncoding::GoldSrc;
        }

        let (w, h) = (tex.width as usize, tex.height as usize);
        if w == 0 || h == 0 || w % 16 != 0 || h % 16 != 0 || w > 1024 || h > 1024 {
            continue;
        }

        // four mip levels at 1, 1/4, 1/16 and 1/64 of the full size
        let pixels = w * h * 85 / 64;
        let data_end = at + mem::size_of::<MipTex>() + pixels;
        if data_end > lump.len() {
            continue;
        }

        if data_end + PALETTE_BYTES <= lump.len() {
            if let Some(colors) = binaries::read_u16(lump, data_end) {
                if colors == 256 {
                    return TexEncoding::GoldSrc;
                }
            }
        }
        // mip data runs flush against the next entry or the lump end
        return TexEncoding::Quake;
    }

    TexEncoding::Inconclusive
}
