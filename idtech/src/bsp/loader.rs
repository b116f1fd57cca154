use std::{fs, path::Path};

use log::{debug, warn};

use super::{
    goldsrc::GoldSrcLoader, info::BspInfo, q1::Quake1Loader, q2::Quake2Loader, q3::Quake3Loader,
    BspError, BspLoader,
};

/// Fixed detection order. Quake 1 and GoldSrc share a header shape, so their
/// probes run adjacently and ahead of the IBSP formats; Quake 2 runs before
/// Quake 3 because only the version field separates the shared magic.
pub static LOADERS: [&dyn BspLoader; 4] = [
    &Quake1Loader,
    &GoldSrcLoader,
    &Quake2Loader,
    &Quake3Loader,
];

/// Detection and parse over an in-memory file. The first accepting detector
/// wins; a detected file whose parse then fails is a real error, not a reason
/// to retry the remaining flavors with the wrong layout.
pub fn parse_any(bytes: Vec<u8>) -> Result<BspInfo, BspError> {
    for loader in LOADERS {
        if loader.can_load(&bytes) {
            debug!("detected {:?}", loader.flavor());
            return loader.parse(bytes);
        }
    }
    Err(BspError::NoMatch)
}

/// Reads the file once and dispatches. `map_name` is filled from the file
/// stem; none of these formats embeds a canonical name.
pub fn try_load_bsp(path: &Path) -> Result<BspInfo, BspError> {
    let bytes = fs::read(path)?;
    let mut info = parse_any(bytes)?;
    info.map_name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(info)
}

/// The entry point the viewer shell calls. Absence covers i/o failures,
/// unrecognized files and malformed directories alike; the reason is logged,
/// not returned.
pub fn load_any_bsp(path: &Path) -> Option<BspInfo> {
    match try_load_bsp(path) {
        Ok(info) => {
            debug!("loaded {info:?}");
            Some(info)
        }
        Err(err) => {
            warn!("{}: {err}", path.display());
            None
        }
    }
}
