pub mod views;
mod utils;
mod routes;
mod configs;
mod controller;
mod error;
#[cfg(target_arch = "wasm32")]
pub mod web;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::ThemeConfig;
pub use crate::controller::{ ColorScheme, PreferenceStore, ThemeController, ThemeView };
pub use crate::error::ThemeError;
