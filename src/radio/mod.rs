//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod nrf24l01p;
pub use nrf24l01p::{commands, mnemonics, registers, set_bit, Nrf24Error, Nrf24l01p, CE_PULSE_US};

mod config;
pub use config::RadioConfig;
