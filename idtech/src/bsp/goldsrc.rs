use crate::binaries;

use super::{
    consts::{Q1Lump, BSP_VERSION_GOLDSRC, BSP_VERSION_Q1, HEADER_LUMPS_Q1},
    info::BspInfo,
    lump::{self, BspLump},
    miptex::{self, TexEncoding},
    BspError, BspFlavor, BspLoader,
};

/// GoldSrc keeps Quake 1's header shape byte for byte; only the lump contents
/// diverge. The directory therefore reuses `HEADER_LUMPS_Q1` and `Q1Lump`
/// indices.
#[repr(C, packed)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GoldSrcHeader {
    pub version: i32,
    pub lumps: [BspLump; HEADER_LUMPS_Q1],
}

pub struct GoldSrcLoader;

fn read_header(bytes: &[u8]) -> Result<GoldSrcHeader, BspError> {
    binaries::read_unaligned(bytes, 0).ok_or(BspError::Truncated("GoldSrc header"))
}

fn version_supported(version: i32) -> bool {
    // 29 shows up on early Half-Life alphas and on maps run through old
    // compilers, so it is accepted here too when the textures say GoldSrc.
    version == BSP_VERSION_Q1 || version == BSP_VERSION_GOLDSRC
}

impl BspLoader for GoldSrcLoader {
    fn flavor(&self) -> BspFlavor {
        BspFlavor::GoldSrc
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
            TexEncoding::GoldSrc => true,
            TexEncoding::Quake => false,
            TexEncoding::Inconclusive => version == BSP_VERSION_GOLDSRC,
        }
    }

    fn parse(&self, bytes: Vec<u8>) -> Result<BspInfo, BspError> {
        let header = read_header(&bytes)?;
        let version = header.version;
        if !version_supported(version) {
            return Err(BspError::UnsupportedVersion {
                flavor: BspFlavor::GoldSrc,
                found: version,
            });
        }
        if !self.can_load(&bytes) {
            return Err(BspError::WrongTexEncoding(BspFlavor::GoldSrc));
        }

        let lumps = header.lumps;
        let lumps = lumps.to_vec();
        lump::check_bounds(&lumps, bytes.len())?;

        Ok(BspInfo {
            flavor: BspFlavor::GoldSrc,
            map_name: String::new(),
            version,
            lumps,
            raw: bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsp::test_maps;

    #[test]
    fn parses_embedded_and_wad_textured_maps() {
        for file in [
            test_maps::goldsrc_file(BSP_VERSION_GOLDSRC),
            test_maps::goldsrc_wad_file(BSP_VERSION_GOLDSRC),
        ] {
            assert!(GoldSrcLoader.can_load(&file));

            let info = GoldSrcLoader.parse(file).unwrap();
            assert_eq!(info.flavor, BspFlavor::GoldSrc);
            assert_eq!(info.version, BSP_VERSION_GOLDSRC);
            assert_eq!(info.lumps.len(), HEADER_LUMPS_Q1);
        }
    }

    #[test]
    fn version_collision_resolved_by_texture_lump() {
        // same version number in both files, still told apart
        let goldsrc = test_maps::goldsrc_file(BSP_VERSION_Q1);
        let quake = test_maps::q1_file(BSP_VERSION_Q1);

        assert!(GoldSrcLoader.can_load(&goldsrc));
        assert!(!GoldSrcLoader.can_load(&quake));
        assert!(matches!(
            GoldSrcLoader.parse(quake),
            Err(BspError::WrongTexEncoding(BspFlavor::GoldSrc))
        ));
    }

    #[test]
    fn empty_texture_lump_falls_back_to_version() {
        let bare_30 = test_maps::q1_style_file(BSP_VERSION_GOLDSRC, &[]);
        let bare_29 = test_maps::q1_style_file(BSP_VERSION_Q1, &[]);

        assert!(GoldSrcLoader.can_load(&bare_30));
        assert!(!GoldSrcLoader.can_load(&bare_29));
    }

    #[test]
    fn rejects_out_of_range_lump() {
        let mut file = test_maps::goldsrc_file(BSP_VERSION_GOLDSRC);
        test_maps::corrupt_lump(&mut file, test_maps::Q1_DIR_OFFSET, 7);
        // the texture lump is intact, so detection still accepts
        assert!(GoldSrcLoader.can_load(&file));
        assert!(matches!(
            GoldSrcLoader.parse(file),
            Err(BspError::LumpOutOfRange { index: 7, .. })
        ));
    }

    #[test]
    fn rejects_truncated_input() {
        let file = test_maps::goldsrc_file(BSP_VERSION_GOLDSRC);
        for len in [0, 4, 64] {
            assert!(!GoldSrcLoader.can_load(&file[..len]));
            assert!(GoldSrcLoader.parse(file[..len].to_vec()).is_err());
        }
    }
}
