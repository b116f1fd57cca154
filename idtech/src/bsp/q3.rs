use crate::binaries;

use super::{
    consts::{BSP_VERSION_Q3, HEADER_LUMPS_Q3, IBSP_MAGIC},
    info::BspInfo,
    lump::{self, BspLump},
    BspError, BspFlavor, BspLoader,
};

/// Same magic as Quake 2, two lumps fewer and version 46.
#[repr(C, packed)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Q3Header {
    pub ident: [u8; 4],
    pub version: i32,
    pub lumps: [BspLump; HEADER_LUMPS_Q3],
}

pub struct Quake3Loader;

fn read_header(bytes: &[u8]) -> Result<Q3Header, BspError> {
    binaries::read_unaligned(bytes, 0).ok_or(BspError::Truncated("Quake 3 header"))
}

impl BspLoader for Quake3Loader {
    fn flavor(&self) -> BspFlavor {
        BspFlavor::Quake3
    }

    fn can_load(&self, bytes: &[u8]) -> bool {
        let Some(ident) = binaries::read_unaligned::<[u8; 4]>(bytes, 0) else {
            return false;
        };
        let Some(version) = binaries::read_i32(bytes, 4) else {
            return false;
        };
        ident == IBSP_MAGIC && version == BSP_VERSION_Q3
    }

    fn parse(&self, bytes: Vec<u8>) -> Result<BspInfo, BspError> {
        let ident: [u8; 4] =
            binaries::read_unaligned(&bytes, 0).ok_or(BspError::Truncated("Quake 3 header"))?;
        if ident != IBSP_MAGIC {
            return Err(BspError::BadMagic { found: ident });
        }
        let version =
            binaries::read_i32(&bytes, 4).ok_or(BspError::Truncated("Quake 3 header"))?;
        if version != BSP_VERSION_Q3 {
            return Err(BspError::UnsupportedVersion {
                flavor: BspFlavor::Quake3,
                found: version,
            });
        }

        let header = read_header(&bytes)?;
        let lumps = header.lumps;
        let lumps = lumps.to_vec();
        lump::check_bounds(&lumps, bytes.len())?;

        Ok(BspInfo {
            flavor: BspFlavor::Quake3,
            map_name: String::new(),
            version,
            lumps,
            raw: bytes,
        })
    }
}
