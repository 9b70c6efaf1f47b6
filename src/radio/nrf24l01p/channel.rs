use super::registers;
use crate::radio::{prelude::EsbChannel, Nrf24Error, Nrf24l01p};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

/// The highest channel the nRF24L01+ can tune to.
const MAX_CHANNEL: u8 = 125;

impl<SPI, CE, CSN, DELAY> EsbChannel for Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type ChannelErrorType = Nrf24Error<SPI::Error, CE::Error>;

    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        self.spi_write_byte(registers::RF_CH, channel.min(MAX_CHANNEL))
    }

    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        self.spi_read(1, registers::RF_CH)?;
        Ok(self._buf[1])
    }
}
