// Shared by several test binaries, each using a different subset
#![allow(dead_code)]

pub mod app;
pub mod factory;

pub use app::*;
pub use factory::*;
