use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::{
    radio::{prelude::EsbDataRate, Nrf24Error, Nrf24l01p},
    DataRate,
};

use super::{bit_fields::SetupRf, registers};

impl<SPI, CE, CSN, DELAY> EsbDataRate for Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type DataRateErrorType = Nrf24Error<SPI::Error, CE::Error>;

    /// Returns [`Nrf24Error::BinaryCorruption`] if both data rate bits are set
    /// (a reserved combination).
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        self.spi_read(1, registers::RF_SETUP)?;
        SetupRf::from_bits(self._buf[1])
            .data_rate()
            .ok_or(Nrf24Error::BinaryCorruption)
    }

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        self.spi_read(1, registers::RF_SETUP)?;
        let setup = SetupRf::from_bits(self._buf[1]).with_data_rate(data_rate);
        self.spi_write_byte(registers::RF_SETUP, setup.into_bits())
    }
}
