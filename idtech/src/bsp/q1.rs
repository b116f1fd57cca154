use crate::binaries;

use super::{
    consts::{Q1Lump, BSP_VERSION_GOLDSRC, BSP_VERSION_Q1, HEADER_LUMPS_Q1},
    info::BspInfo,
    lump::{self, BspLump},
    miptex::{self, TexEncoding},
    BspError, BspFlavor, BspLoader,
};

/// No magic; the file opens directly with the version integer.
#[repr(C, packed)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Q1Header {
    pub version: i32,
    pub lumps: [BspLump; HEADER_LUMPS_Q1],
}

pub struct Quake1Loader;

fn read_header(bytes: &[u8]) -> Result<Q1Header, BspError> {
    binaries::read_unaligned(bytes, 0).ok_or(BspError::Truncated("Quake 1 header"))
}

fn version_supported(version: i32) -> bool {
    // 30 is nominally GoldSrc, but Quake ports emit it too; the texture lump
    // settles which engine wrote the file.
    version == BSP_VERSION_Q1 || version == BSP_VERSION_GOLDSRC
}

impl BspLoader for Quake1Loader {
    fn flavor(&self) -> BspFlavor {
        BspFlavor::Quake1
    }

    fn can_load(&self, bytes: &[u8]) -> bool {
        let Ok(header) = read_header(bytes) else {
            return false;
        };
        let version = header.version;
        if !version_supported(version) {
            return false;
        }
        let lumps = header.lumps;
        match miptex::probe(bytes, &lumps[Q1Lump::TEXTURES as usize]) {
            TexEncoding::Quake => true,
            TexEncoding::GoldSrc => false,
            TexEncoding::Inconclusive => version == BSP_VERSION_Q1,
        }
    }

    fn parse(&self, bytes: Vec<u8>) -> Result<BspInfo, BspError> {
        let header = read_header(&bytes)?;
        let version = header.version;
        if !version_supported(version) {
            return Err(BspError::UnsupportedVersion {
                flavor: BspFlavor::Quake1,
                found: version,
            });
        }
        if !self.can_load(&bytes) {
            return Err(BspError::WrongTexEncoding(BspFlavor::Quake1));
        }

        let lumps = header.lumps;
        let lumps = lumps.to_vec();
        lump::check_bounds(&lumps, bytes.len())?;

        Ok(BspInfo {
            flavor: BspFlavor::Quake1,
            map_name: String::new(),
            version,
            lumps,
            raw: bytes,
        })
    }
}
