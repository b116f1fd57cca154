pub use crate::bsp::{
    consts::{Q1Lump, Q2Lump, Q3Lump},
    goldsrc::GoldSrcLoader,
    info::BspInfo,
    loader::{load_any_bsp, parse_any, try_load_bsp},
    lump::BspLump,
    q1::Quake1Loader,
    q2::Quake2Loader,
    q3::Quake3Loader,
    BspError, BspFlavor, BspLoader,
};
