// src/utils/mod.rs
mod endian;

pub(crate) use endian::*;
