use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};
pub(crate) mod bit_fields;
mod channel;
mod init;
use bit_fields::Config;
mod constants;
mod data_rate;
mod fifo;
mod mode;
mod pa_level;
mod payload;
pub use payload::CE_PULSE_US;
mod pipe;
mod power;
pub use constants::{commands, mnemonics, registers};
mod access;
pub use access::set_bit;
mod details;
#[cfg(test)]
pub(crate) mod sim;
mod status;

use crate::{types::MAX_ACCESS_LENGTH, ReadBuffer, StatusFlags};

/// The length of the scratch buffer: one command (or STATUS) byte plus the widest access.
const BUF_LEN: usize = MAX_ACCESS_LENGTH + 1;

/// An collection of error types to describe hardware malfunctions and rejected arguments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error (either the CE or the CSN pin).
    Gpo(DO),
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO)
    BinaryCorruption,
    /// A byte count that this driver cannot move in one access.
    ///
    /// Register accesses and payloads are limited to 1 - 5 bytes,
    /// payload widths (see [`EsbPipe::configure_pipes()`](fn@crate::radio::prelude::EsbPipe::configure_pipes))
    /// to 1 - 32 bytes.
    InvalidLength(usize),
    /// A register address that does not fit in a command byte.
    InvalidRegister(u8),
}

#[cfg(feature = "defmt")]
impl<SPI, DO> defmt::Format for Nrf24Error<SPI, DO> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Nrf24Error::Spi(_) => defmt::write!(fmt, "SPI bus fault"),
            Nrf24Error::Gpo(_) => defmt::write!(fmt, "output pin fault"),
            Nrf24Error::BinaryCorruption => defmt::write!(fmt, "binary corruption"),
            Nrf24Error::InvalidLength(len) => defmt::write!(fmt, "invalid length {=usize}", len),
            Nrf24Error::InvalidRegister(addr) => {
                defmt::write!(fmt, "invalid register {=u8:#04X}", addr)
            }
        }
    }
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01+ transceiver.
///
/// The CSN pin is driven by this struct; the `SPI` bus must not toggle it.
pub struct Nrf24l01p<SPI, CE, CSN, DELAY> {
    _spi: SPI,
    /// The CE pin for the radio.
    ///
    /// This really only exposed for advanced manipulation of active TX mode.
    /// It is strongly recommended to enter RX or TX mode using
    /// [`EsbMode::as_rx()`](fn@crate::radio::prelude::EsbMode::as_rx) and
    /// [`EsbMode::as_tx()`](fn@crate::radio::prelude::EsbMode::as_tx)
    /// because those methods guarantee proper radio usage.
    pub ce_pin: CE,
    _csn_pin: CSN,
    _delay_impl: DELAY,
    _buf: [u8; BUF_LEN],
    _status: StatusFlags,
    _config_reg: Config,
    _pipe0_rx_addr: Option<[u8; 5]>,
    _address_length: u8,
    _payload_length: u8,
}

impl<SPI, CE, CSN, DELAY> Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    /// Instantiate a [`Nrf24l01p`] object for use on the specified
    /// `spi` bus with the given `ce_pin` and `csn_pin`.
    ///
    /// The `spi` bus must already be configured for [`SPI_MODE`](crate::SPI_MODE)
    /// (MSB first, at most 10 MHz). No bus traffic happens until a method is called.
    pub fn new(ce_pin: CE, csn_pin: CSN, spi: SPI, delay_impl: DELAY) -> Self {
        Nrf24l01p {
            ce_pin,
            _csn_pin: csn_pin,
            _spi: spi,
            _delay_impl: delay_impl,
            _status: StatusFlags::from_bits(0),
            _buf: [0u8; BUF_LEN],
            _pipe0_rx_addr: None,
            // 16 bit CRC, enable all IRQ, and power down as TX
            _config_reg: Config::default(),
            _address_length: 5,
            _payload_length: 5,
        }
    }

    /// Release the bus, pins and delay given to [`Nrf24l01p::new()`].
    pub fn release(self) -> (SPI, CE, CSN, DELAY) {
        (self._spi, self.ce_pin, self._csn_pin, self._delay_impl)
    }

    /// Run `body` between CSN low and CSN high.
    ///
    /// CSN is driven high even if `body` (or the bus flush) fails.
    /// The bus error is only returned after CSN is released.
    fn with_transaction<R>(
        &mut self,
        body: impl FnOnce(&mut SPI, &mut [u8; BUF_LEN]) -> Result<R, SPI::Error>,
    ) -> Result<R, Nrf24Error<SPI::Error, CE::Error>> {
        self._csn_pin.set_low().map_err(Nrf24Error::Gpo)?;
        let result = body(&mut self._spi, &mut self._buf)
            .and_then(|value| self._spi.flush().map(|_| value));
        let released = self._csn_pin.set_high().map_err(Nrf24Error::Gpo);
        let value = result.map_err(Nrf24Error::Spi)?;
        released?;
        Ok(value)
    }

    /// Clock out the first `len` bytes of the scratch buffer (replacing them with
    /// what the chip clocked back) and cache the STATUS byte.
    fn spi_transfer(&mut self, len: usize) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self.with_transaction(|spi, buf| spi.transfer_in_place(&mut buf[..len]))?;
        self._status = StatusFlags::from_bits(self._buf[0]);
        Ok(())
    }

    /// Clock out `command` followed by `len` dummy bytes.
    ///
    /// The chip answers the command byte with STATUS, so the `len` data bytes
    /// land at `self._buf[1..=len]`. With `len == 0` this sends a bare command.
    fn spi_read(
        &mut self,
        len: usize,
        command: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self._buf[0] = command;
        self._buf[1..=len].fill(0);
        self.spi_transfer(len + 1)
    }

    fn spi_write_byte(
        &mut self,
        register: u8,
        byte: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self._buf[0] = register | commands::W_REGISTER;
        self._buf[1] = byte;
        self.spi_transfer(2)
    }

    fn spi_write_buf(
        &mut self,
        register: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self.spi_command_buf(register | commands::W_REGISTER, buf)
    }

    fn spi_command_buf(
        &mut self,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self._buf[0] = command;
        let buf_len = buf.len();
        self._buf[1..(buf_len + 1)].copy_from_slice(buf);
        self.spi_transfer(buf_len + 1)
    }

    /// Copy the latest read result out of the scratch buffer.
    fn read_buffer(&self, len: usize) -> ReadBuffer {
        ReadBuffer::copy_from(&self._buf, len)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{
        commands,
        sim::{Event, SimChip},
        Nrf24Error,
    };
    use crate::{radio::prelude::*, spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;

    #[test]
    pub fn csn_frames_every_command() {
        let spi_expectations = spi_test_expects![
            (vec![commands::NOP], vec![0x2Eu8]),
            (vec![commands::FLUSH_RX], vec![0xEu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin, mut csn_pin) = (mocks.0, mocks.1, mocks.2, mocks.3);
        radio.update().unwrap();
        let mut flags = Default::default();
        radio.get_status_flags(&mut flags);
        assert!(flags.tx_ds());
        radio.flush_rx().unwrap();
        radio.get_status_flags(&mut flags);
        assert!(!flags.tx_ds());
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }

    #[test]
    pub fn csn_released_on_bus_fault() {
        let (mut radio, chip) = SimChip::radio();
        chip.borrow_mut().fail_next_transfer = true;
        let result = radio.write_register(0x05, &[42]);
        assert!(matches!(result, Err(Nrf24Error::Spi(_))));
        let events = chip.borrow().events.clone();
        assert_eq!(events, vec![Event::CsnLow, Event::CsnHigh]);
        // the failed write never reached the register
        assert_eq!(radio.read_register(0x05, 1).unwrap().as_bytes(), &[2]);
    }

    #[test]
    pub fn release_parts() {
        let mocks = mk_radio(&[PinTransaction::set(PinState::Low)], &[]);
        let (radio, mut spi, mut ce_pin, mut csn_pin) = (mocks.0, mocks.1, mocks.2, mocks.3);
        let (_, mut ce, _, _) = radio.release();
        embedded_hal::digital::OutputPin::set_low(&mut ce).unwrap();
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }
}
