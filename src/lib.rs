pub mod app;
pub mod audio;
pub mod config;
pub mod input;
pub mod kit;
pub mod render;
pub mod traits;
pub mod util;

#[cfg(test)]
mod test_utils;
