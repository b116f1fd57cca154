use std::{env, path::Path, process::ExitCode};

use idtech::prelude::*;
use num_traits::FromPrimitive;

/// Loads one map with whatever flavor sticks and prints its lump directory.
pub fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: bsp-readout <map.bsp>");
        return ExitCode::FAILURE;
    };

    let Some(info) = load_any_bsp(Path::new(&path)) else {
        // errors pass env_logger's default filter; RUST_LOG=warn adds the
        // per-flavor reason from the loader
        log::error!("{path}: not a loadable BSP");
        return ExitCode::FAILURE;
    };

    println!(
        "{} - {:?} version {} ({} bytes, {} lumps)",
        info.map_name,
        info.flavor,
        info.version,
        info.raw.len(),
        info.lumps.len()
    );
    for (index, lump) in info.lumps.iter().enumerate() {
        let (offset, length) = (lump.offset, lump.length);
        println!(
            "{index:>2} {:<24} offset {offset:>9} length {length:>9}",
            lump_name(info.flavor, index)
        );
    }

    ExitCode::SUCCESS
}

fn lump_name(flavor: BspFlavor, index: usize) -> String {
    let name = match flavor {
        BspFlavor::Quake1 | BspFlavor::GoldSrc => {
            Q1Lump::from_usize(index).map(|lump| format!("{lump:?}"))
        }
        BspFlavor::Quake2 => Q2Lump::from_usize(index).map(|lump| format!("{lump:?}")),
        BspFlavor::Quake3 => Q3Lump::from_usize(index).map(|lump| format!("{lump:?}")),
    };
    name.unwrap_or_else(|| "?".to_owned())
}
