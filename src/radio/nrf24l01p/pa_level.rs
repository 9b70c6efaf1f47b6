use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use super::{bit_fields::SetupRf, registers};
use crate::radio::{prelude::EsbPaLevel, Nrf24Error, Nrf24l01p};
use crate::PaLevel;

impl<SPI, CE, CSN, DELAY> EsbPaLevel for Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type PaLevelErrorType = Nrf24Error<SPI::Error, CE::Error>;

    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType> {
        self.spi_read(1, registers::RF_SETUP)?;
        Ok(SetupRf::from_bits(self._buf[1]).pa_level())
    }

    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType> {
        self.spi_read(1, registers::RF_SETUP)?;
        let out = SetupRf::from_bits(self._buf[1]).with_pa_level(pa_level);
        self.spi_write_byte(registers::RF_SETUP, out.into_bits())
    }
}
