#![deny(warnings)]

pub mod classify;
pub mod config;
pub mod extract;
pub mod fuse;
pub mod mood;
pub mod pipeline;
pub mod recommend;
pub mod summary;
pub mod text;
pub mod transcribe;
pub mod util;
pub mod voice;
