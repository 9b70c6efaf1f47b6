#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Nrf24l01p::new()`](fn@crate::radio::Nrf24l01p::new)
//! - [`Nrf24l01p::init()`](radio/struct.Nrf24l01p.html#method.init)
//! - [`Nrf24l01p::as_rx()`](radio/struct.Nrf24l01p.html#method.as_rx)
//! - [`Nrf24l01p::as_tx()`](radio/struct.Nrf24l01p.html#method.as_tx)
//! - [`Nrf24l01p::is_rx()`](radio/struct.Nrf24l01p.html#method.is_rx)
//! - [`Nrf24l01p::open_tx_pipe()`](radio/struct.Nrf24l01p.html#method.open_tx_pipe)
//! - [`Nrf24l01p::open_rx_pipe()`](radio/struct.Nrf24l01p.html#method.open_rx_pipe)
//! - [`Nrf24l01p::close_rx_pipe()`](radio/struct.Nrf24l01p.html#method.close_rx_pipe)
//! - [`Nrf24l01p::available()`](radio/struct.Nrf24l01p.html#method.available)
//! - [`Nrf24l01p::transmit()`](radio/struct.Nrf24l01p.html#method.transmit)
//! - [`Nrf24l01p::receive()`](radio/struct.Nrf24l01p.html#method.receive)
//! - [`Nrf24l01p::respond_to_interrupt()`](radio/struct.Nrf24l01p.html#method.respond_to_interrupt)
//! - [`Nrf24l01p::set_channel()`](radio/struct.Nrf24l01p.html#method.set_channel)
//! - [`Nrf24l01p::get_channel()`](radio/struct.Nrf24l01p.html#method.get_channel)
//!
//! ## Advanced API
//!
//! - [`Nrf24l01p::write_register()`](radio/struct.Nrf24l01p.html#method.write_register)
//! - [`Nrf24l01p::read_register()`](radio/struct.Nrf24l01p.html#method.read_register)
//! - [`Nrf24l01p::configure()`](radio/struct.Nrf24l01p.html#method.configure)
//! - [`Nrf24l01p::configure_pipes()`](radio/struct.Nrf24l01p.html#method.configure_pipes)
//! - [`Nrf24l01p::get_fifo_state()`](radio/struct.Nrf24l01p.html#method.get_fifo_state)
//! - [`Nrf24l01p::clear_interrupts()`](radio/struct.Nrf24l01p.html#method.clear_interrupts)
//! - [`Nrf24l01p::clear_status_flags()`](radio/struct.Nrf24l01p.html#method.clear_status_flags)
//! - [`Nrf24l01p::update()`](radio/struct.Nrf24l01p.html#method.update)
//! - [`Nrf24l01p::get_status_flags()`](radio/struct.Nrf24l01p.html#method.get_status_flags)
//! - [`Nrf24l01p::flush_rx()`](radio/struct.Nrf24l01p.html#method.flush_rx)
//! - [`Nrf24l01p::flush_tx()`](radio/struct.Nrf24l01p.html#method.flush_tx)
//! - [`Nrf24l01p::release()`](fn@crate::radio::Nrf24l01p::release)
//!
//! ## Configuration API
//!
//! - [`Nrf24l01p::with_config()`](radio/struct.Nrf24l01p.html#method.with_config)
//! - [`Nrf24l01p::set_address_length()`](radio/struct.Nrf24l01p.html#method.set_address_length)
//! - [`Nrf24l01p::get_address_length()`](radio/struct.Nrf24l01p.html#method.get_address_length)
//! - [`Nrf24l01p::get_payload_length()`](radio/struct.Nrf24l01p.html#method.get_payload_length)
//! - [`Nrf24l01p::set_data_rate()`](radio/struct.Nrf24l01p.html#method.set_data_rate)
//! - [`Nrf24l01p::get_data_rate()`](radio/struct.Nrf24l01p.html#method.get_data_rate)
//! - [`Nrf24l01p::set_pa_level()`](radio/struct.Nrf24l01p.html#method.set_pa_level)
//! - [`Nrf24l01p::get_pa_level()`](radio/struct.Nrf24l01p.html#method.get_pa_level)
//! - [`Nrf24l01p::is_powered()`](radio/struct.Nrf24l01p.html#method.is_powered)
//! - [`Nrf24l01p::power_up()`](radio/struct.Nrf24l01p.html#method.power_up)
//! - [`Nrf24l01p::power_down()`](radio/struct.Nrf24l01p.html#method.power_down)
//! - [`Nrf24l01p::print_details()`](radio/struct.Nrf24l01p.html#method.print_details)
//!
#![no_std]

mod types;
pub use types::{
    DataRate, FifoState, InvalidDataRate, PaLevel, ReadBuffer, StatusFlags, MAX_ACCESS_LENGTH,
};
pub mod radio;
pub use radio::set_bit;

/// The SPI mode the nRF24L01+ expects: clock idles LOW and data is sampled
/// on the leading edge (CPOL = 0, CPHA = 0), MSB first.
///
/// The bus clock must not exceed 10 MHz.
pub const SPI_MODE: embedded_hal::spi::Mode = embedded_hal::spi::MODE_0;
