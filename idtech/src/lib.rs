pub mod binaries;
pub mod bsp;
pub mod prelude;
