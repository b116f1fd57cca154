use crate::binaries;

use super::{
    consts::{BSP_VERSION_Q2, HEADER_LUMPS_Q2, IBSP_MAGIC},
    info::BspInfo,
    lump::{self, BspLump},
    BspError, BspFlavor, BspLoader,
};

#[repr(C, packed)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Q2Header {
    pub ident: [u8; 4],
    pub version: i32,
    pub lumps: [BspLump; HEADER_LUMPS_Q2],
}

pub struct Quake2Loader;

fn read_header(bytes: &[u8]) -> Result<Q2Header, BspError> {
    binaries::read_unaligned(bytes, 0).ok_or(BspError::Truncated("Quake 2 header"))
}

impl BspLoader for Quake2Loader {
    fn flavor(&self) -> BspFlavor {
        BspFlavor::Quake2
    }

    fn can_load(&self, bytes: &[u8]) -> bool {
        // magic + version only; Quake 3 shares the magic, the version is what
        // keeps the two apart
        let Some(ident) = binaries::read_unaligned::<[u8; 4]>(bytes, 0) else {
            return false;
        };
        let Some(version) = binaries::read_i32(bytes, 4) else {
            return false;
        };
        ident == IBSP_MAGIC && version == BSP_VERSION_Q2
    }

    fn parse(&self, bytes: Vec<u8>) -> Result<BspInfo, BspError> {
        // magic and version first, so a wrong-format file is reported as that
        // rather than as truncation against this header's size
        let ident: [u8; 4] =
            binaries::read_unaligned(&bytes, 0).ok_or(BspError::Truncated("Quake 2 header"))?;
        if ident != IBSP_MAGIC {
            return Err(BspError::BadMagic { found: ident });
        }
        let version =
            binaries::read_i32(&bytes, 4).ok_or(BspError::Truncated("Quake 2 header"))?;
        if version != BSP_VERSION_Q2 {
            return Err(BspError::UnsupportedVersion {
                flavor: BspFlavor::Quake2,
                found: version,
            });
        }

        let header = read_header(&bytes)?;
        let lumps = header.lumps;
        let lumps = lumps.to_vec();
        lump::check_bounds(&lumps, bytes.len())?;

        Ok(BspInfo {
            flavor: BspFlavor::Quake2,
            map_name: String::new(),
            version,
            lumps,
            raw: bytes,
        })
    }
}
