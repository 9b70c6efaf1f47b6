use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::{
    radio::{prelude::EsbRegisters, Nrf24Error, Nrf24l01p},
    types::{ReadBuffer, MAX_ACCESS_LENGTH},
};

use super::registers;

/// Return `value` with bit `bit` forced to `set`.
///
/// Only the 3 LSBits of `bit` are used (bit indices wrap at 8).
///
/// ```
/// use nrf24l01p::set_bit;
///
/// assert_eq!(set_bit(0b1000, 1, true), 0b1010);
/// assert_eq!(set_bit(0b1010, 3, false), 0b0010);
/// ```
pub const fn set_bit(value: u8, bit: u8, set: bool) -> u8 {
    let mask = 1u8 << (bit & 7);
    if set {
        value | mask
    } else {
        value & !mask
    }
}

impl<SPI, CE, CSN, DELAY> Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    /// Reject accesses that cannot be expressed as a single command.
    fn check_access(address: u8, len: usize) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        if address > registers::MAX_ADDRESS {
            return Err(Nrf24Error::InvalidRegister(address));
        }
        if !(1..=MAX_ACCESS_LENGTH).contains(&len) {
            return Err(Nrf24Error::InvalidLength(len));
        }
        Ok(())
    }
}

impl<SPI, CE, CSN, DELAY> EsbRegisters for Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type RegisterErrorType = Nrf24Error<SPI::Error, CE::Error>;

    fn write_register(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::RegisterErrorType> {
        Self::check_access(address, bytes.len())?;
        self.spi_write_buf(address, bytes)
    }

    fn read_register(
        &mut self,
        address: u8,
        count: usize,
    ) -> Result<ReadBuffer, Self::RegisterErrorType> {
        Self::check_access(address, count)?;
        self.spi_read(count, address)?;
        Ok(self.read_buffer(count))
    }
}
