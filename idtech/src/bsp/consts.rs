use num_derive::FromPrimitive;

// Quake 1 / GoldSrc: https://www.gamers.org/dEngine/quake/spec/quake-spec34/qkspec_4.htm
// GoldSrc variant:   https://hlbsp.sourceforge.net/index.php?content=bspdef
// Quake 2:           https://www.flipcode.com/archives/Quake_2_BSP_File_Format.shtml
// Quake 3:           http://www.mralligator.com/q3/

/// Quake 1 shipped 29; pre-release maps used 28 but nothing loads those today.
pub const BSP_VERSION_Q1: i32 = 29;
/// GoldSrc ships 30, but version alone is not trusted to separate it from
/// Quake 1 (see the miptex probe).
pub const BSP_VERSION_GOLDSRC: i32 = 30;
pub const BSP_VERSION_Q2: i32 = 38;
pub const BSP_VERSION_Q3: i32 = 46;

/// Quake 2 and Quake 3 share this magic; only the version field separates them.
pub const IBSP_MAGIC: [u8; 4] = *b"IBSP";

pub const HEADER_LUMPS_Q1: usize = 15;
pub const HEADER_LUMPS_Q2: usize = 19;
pub const HEADER_LUMPS_Q3: usize = 17;

/// Lump directory indices for Quake 1. GoldSrc keeps the same table with
/// different entry encodings, so it shares this enum.
#[derive(Copy, Clone, FromPrimitive, Debug, PartialEq, Eq)]
pub enum Q1Lump {
    ENTITIES = 0,
    PLANES = 1,
    TEXTURES = 2,
    VERTEXES = 3,
    VISIBILITY = 4,
    NODES = 5,
    TEXINFO = 6,
    FACES = 7,
    LIGHTING = 8,
    CLIPNODES = 9,
    LEAFS = 10,
    MARKSURFACES = 11,
    EDGES = 12,
    SURFEDGES = 13,
    MODELS = 14,
}

#[derive(Copy, Clone, FromPrimitive, Debug, PartialEq, Eq)]
pub enum Q2Lump {
    ENTITIES = 0,
    PLANES = 1,
    VERTEXES = 2,
    VISIBILITY = 3,
    NODES = 4,
    TEXINFO = 5,
    FACES = 6,
    LIGHTING = 7,
    LEAFS = 8,
    LEAFFACES = 9,
    LEAFBRUSHES = 10,
    EDGES = 11,
    SURFEDGES = 12,
    MODELS = 13,
    BRUSHES = 14,
    BRUSHSIDES = 15,
    POP = 16,
    AREAS = 17,
    AREAPORTALS = 18,
}

#[derive(Copy, Clone, FromPrimitive, Debug, PartialEq, Eq)]
pub enum Q3Lump {
    ENTITIES = 0,
    TEXTURES = 1,
    PLANES = 2,
    NODES = 3,
    LEAFS = 4,
    LEAFFACES = 5,
    LEAFBRUSHES = 6,
    MODELS = 7,
    BRUSHES = 8,
    BRUSHSIDES = 9,
    VERTEXES = 10,
    MESHVERTS = 11,
    EFFECTS = 12,
    FACES = 13,
    LIGHTMAPS = 14,
    LIGHTVOLS = 15,
    VISDATA = 16,
}
