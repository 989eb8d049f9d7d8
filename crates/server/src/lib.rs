#[cfg(feature = "server")]
pub mod config;

pub mod api;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod proxy;

#[cfg(feature = "server")]
pub mod session;

#[cfg(feature = "server")]
pub mod upstream;

#[cfg(feature = "server")]
pub mod uploads;
