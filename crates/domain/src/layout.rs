pub mod packer;

pub use packer::CirclePacker;
