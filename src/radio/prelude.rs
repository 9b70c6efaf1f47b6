//! One trait per concern of the nRF24L01+ driver.
//!
//! Each trait carries its own error type so that callers can name
//! `Esb*ErrorType` without spelling out the bus and pin generics.
//! Glob-import them to bring every method into scope:
//!
//! ```
//! use nrf24l01p::radio::prelude::*;
//! ```

use crate::types::{DataRate, FifoState, PaLevel, ReadBuffer, StatusFlags};

use super::RadioConfig;

/// Raw access to the register map.
pub trait EsbRegisters {
    type RegisterErrorType;

    /// Write `bytes` to the register at `address`.
    ///
    /// The command byte is the register-write opcode combined with `address`,
    /// followed by `bytes` in order (LSByte first for multi-byte registers).
    ///
    /// `bytes` must hold 1 - 5 bytes and `address` must be in range [0x00, 0x1F];
    /// otherwise nothing is sent to the radio.
    fn write_register(&mut self, address: u8, bytes: &[u8])
        -> Result<(), Self::RegisterErrorType>;

    /// Read `count` bytes from the register at `address`.
    ///
    /// The returned [`ReadBuffer`] is an owned copy; it also carries the STATUS byte
    /// that the radio clocked out with the command byte.
    ///
    /// `count` must be in range [1, 5] and `address` must be in range [0x00, 0x1F];
    /// otherwise nothing is sent to the radio.
    fn read_register(
        &mut self,
        address: u8,
        count: usize,
    ) -> Result<ReadBuffer, Self::RegisterErrorType>;
}

/// Switching between receiver and transmitter.
pub trait EsbMode {
    type ModeErrorType;

    /// Write the CONFIG register.
    ///
    /// CRC is always enabled with the 2 byte scheme and all IRQ events are
    /// reported on the IRQ pin. Only the mode (`is_rx`) and `power` bits vary.
    ///
    /// This does not touch the CE pin.
    fn configure(&mut self, is_rx: bool, power: bool) -> Result<(), Self::ModeErrorType>;

    /// Start listening.
    ///
    /// The radio is powered up as a receiver and the CE pin is left HIGH,
    /// so the radio listens continuously until [`EsbMode::as_tx()`] (or
    /// [`EsbPower::power_down()`]) is called.
    ///
    /// If pipe 0 was opened with [`EsbPipe::open_rx_pipe()`], then its address is
    /// restored here (before CE is asserted) because [`EsbPipe::open_tx_pipe()`]
    /// overwrites it.
    fn as_rx(&mut self) -> Result<(), Self::ModeErrorType>;

    /// Stop listening and idle as a transmitter (StandBy-I).
    ///
    /// The radio is powered up as a transmitter and the CE pin is left LOW.
    /// CE is only pulsed HIGH by [`EsbPayload::transmit()`].
    fn as_tx(&mut self) -> Result<(), Self::ModeErrorType>;

    /// Is the radio configured as a receiver?
    ///
    /// This uses the cached CONFIG value; no SPI transaction is performed.
    fn is_rx(&self) -> bool;
}

/// Pipe addresses and widths.
pub trait EsbPipe {
    type PipeErrorType;

    /// Enable the RX pipes in `pipe_mask` and set pipe 0's static payload `width`.
    ///
    /// This is two single-byte writes, in order: `pipe_mask` to EN_RXADDR
    /// then `width` to RX_PW_P0.
    ///
    /// The `width` must be in range [1, 32].
    fn configure_pipes(&mut self, pipe_mask: u8, width: u8) -> Result<(), Self::PipeErrorType>;

    /// Bind `address` to RX `pipe` and enable it in EN_RXADDR.
    ///
    /// A `pipe` above 5 is ignored.
    ///
    /// Pipes 0 and 1 take up to [`EsbPipe::get_address_length()`] bytes.
    /// Pipes 2 - 5 only take the first byte of `address`; their remaining
    /// bytes are shared with pipe 1.
    ///
    /// <div class="warning">
    ///
    /// An address given for pipe 0 is cached and written again by every
    /// [`EsbMode::as_rx()`], since [`EsbPipe::open_tx_pipe()`] reuses that register.
    ///
    /// </div>
    fn open_rx_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Write `address` to TX_ADDR.
    ///
    /// The same address is written to pipe 0's RX address
    /// because automatic acknowledgements arrive on pipe 0.
    fn open_tx_pipe(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Clear `pipe`'s bit in EN_RXADDR. A `pipe` above 5 is ignored.
    fn close_rx_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType>;

    /// Write SETUP_AW. `length` is clamped to [3, 5] bytes.
    fn set_address_length(&mut self, length: u8) -> Result<(), Self::PipeErrorType>;

    /// Read SETUP_AW back as a byte count.
    fn get_address_length(&mut self) -> Result<u8, Self::PipeErrorType>;

    /// Read RX_PW_P0.
    fn get_payload_length(&mut self) -> Result<u8, Self::PipeErrorType>;
}

/// Moving payloads in and out of the radio's FIFOs.
pub trait EsbPayload {
    type PayloadErrorType;

    /// Load `buf` into the TX FIFO and pulse the CE pin to start the transmission.
    ///
    /// `buf` must hold 1 - 5 bytes; otherwise nothing is sent to the radio.
    ///
    /// The outcome is reported later on the IRQ pin (see [`EsbStatus::respond_to_interrupt()`]):
    /// `tx_ds` on success, `max_rt` when all retries went unacknowledged.
    fn transmit(&mut self, buf: &[u8]) -> Result<(), Self::PayloadErrorType>;

    /// Fetch `count` bytes of the payload at the top of the RX FIFO.
    ///
    /// `count` must be in range [1, 5]; otherwise nothing is sent to the radio.
    ///
    /// The CE pin is held LOW during the transaction and is always driven HIGH
    /// afterwards, leaving the radio in active RX mode.
    fn receive(&mut self, count: usize) -> Result<ReadBuffer, Self::PayloadErrorType>;
}

/// The RF channel (RF_CH).
pub trait EsbChannel {
    type ChannelErrorType;

    /// Tune to `channel`, which is an offset in MHz from 2400 MHz.
    ///
    /// Anything above 125 is written as 125. After reset the chip sits on
    /// channel 2; [`EsbInit::init()`] moves it to 76.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Read RF_CH.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// The STATUS register and its IRQ flags.
pub trait EsbStatus {
    type StatusErrorType;

    /// Copy the STATUS byte cached by the most recent bus transaction into `flags`.
    fn get_status_flags(&self, flags: &mut StatusFlags);

    /// Service the IRQ pin.
    ///
    /// The STATUS register is read, then [`EsbStatus::clear_interrupts()`] is called.
    /// The returned [`StatusFlags`] describe the events as they were _before_ clearing.
    ///
    /// ```ignore
    /// let flags = radio.respond_to_interrupt().unwrap();
    /// if flags.rx_dr() {
    ///     let payload = radio.receive(5).unwrap();
    /// }
    /// ```
    fn respond_to_interrupt(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Clear all three IRQ status flags, then flush the TX FIFO.
    ///
    /// Each flag is cleared with its own STATUS write.
    ///
    /// <div class="warning">
    ///
    /// Any payload still waiting in the TX FIFO is discarded.
    /// Use [`EsbStatus::clear_status_flags()`] when queuing multiple payloads.
    ///
    /// </div>
    fn clear_interrupts(&mut self) -> Result<(), Self::StatusErrorType>;

    /// Clear only the flags that are `true` in `flags`, in one STATUS write.
    ///
    /// Flags left `false` keep their state, so the IRQ pin stays LOW while
    /// any uncleared event remains. The TX FIFO is left alone.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;

    /// Send a NOP so the cached STATUS byte is current.
    ///
    /// Read the result with [`EsbStatus::get_status_flags()`].
    fn update(&mut self) -> Result<(), Self::StatusErrorType>;
}

/// The RX and TX FIFOs.
pub trait EsbFifo {
    type FifoErrorType;

    /// Discard every payload in the RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Discard every payload in the TX FIFO.
    ///
    /// [`EsbStatus::clear_interrupts()`] calls this.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Decode FIFO_STATUS for the TX FIFO (`about_tx == true`) or the RX FIFO.
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;

    /// Does the RX FIFO hold at least one payload for [`EsbPayload::receive()`]?
    fn available(&mut self) -> Result<bool, Self::FifoErrorType>;
}

/// The power amplifier bits of RF_SETUP.
pub trait EsbPaLevel {
    type PaLevelErrorType;

    /// Read the PA level from RF_SETUP.
    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType>;

    /// Rewrite the PA bits of RF_SETUP, keeping the other bits.
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType>;
}

/// The PWR_UP bit of CONFIG.
pub trait EsbPower {
    type PowerErrorType;

    /// Drop CE and clear PWR_UP.
    ///
    /// Register contents survive power down, but the radio neither sends
    /// nor listens until [`EsbPower::power_up()`].
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Set PWR_UP and wait for the oscillator to start.
    ///
    /// `delay` is the wait in microseconds; [`None`] waits 5 ms and `Some(0)`
    /// skips the wait, leaving the caller to let 5 ms pass before asserting CE:
    /// ```ignore
    /// radio.power_up(Some(0)).unwrap();
    /// // other start-up work here
    /// radio.as_rx().unwrap();
    /// ```
    fn power_up(&mut self, delay: Option<u32>) -> Result<(), Self::PowerErrorType>;

    /// The PWR_UP bit of the cached CONFIG value.
    fn is_powered(&self) -> bool;
}

/// The data rate bits of RF_SETUP.
pub trait EsbDataRate {
    type DataRateErrorType;

    /// Read the data rate from RF_SETUP.
    ///
    /// The reserved bit combination is reported as a binary corruption.
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;

    /// Change the data rate.
    ///
    /// Only the two data rate bits of the RF_SETUP register are changed;
    /// every other bit is written back as it was read.
    ///
    /// Use [`DataRate::try_from()`] to convert a numeric selector
    /// (`250`, `1` or `2`) before calling this.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;
}

/// Debug output of the managed registers.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Read back the registers this driver manages and print them.
    ///
    /// Output goes through `defmt` on `target_os = "none"` builds with the `defmt`
    /// feature, or `std::println!` on hosted builds with the `std` feature.
    /// Otherwise this does nothing and touches no pins.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}

/// Bringing the radio up.
pub trait EsbInit {
    type ConfigErrorType;

    /// Wait for the radio to settle after power on, check that CONFIG reads back
    /// what was written, then apply [`RadioConfig::default()`].
    fn init(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Write every setting held by `config` in one go.
    ///
    /// Pending interrupts are cleared and both FIFOs are flushed first.
    /// The radio is left powered up in StandBy-I (TX mode, CE LOW).
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}
