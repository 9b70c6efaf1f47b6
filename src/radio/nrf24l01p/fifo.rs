use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::radio::{prelude::EsbFifo, Nrf24Error, Nrf24l01p};
use crate::FifoState;

use super::{bit_fields::FifoStatus, commands, registers};

impl<SPI, CE, CSN, DELAY> Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    pub(super) fn read_fifo_status(
        &mut self,
    ) -> Result<FifoStatus, Nrf24Error<SPI::Error, CE::Error>> {
        self.spi_read(1, registers::FIFO_STATUS)?;
        Ok(FifoStatus::from_bits(self._buf[1]))
    }
}

impl<SPI, CE, CSN, DELAY> EsbFifo for Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type FifoErrorType = Nrf24Error<SPI::Error, CE::Error>;

    fn available(&mut self) -> Result<bool, Self::FifoErrorType> {
        Ok(!self.read_fifo_status()?.rx_empty())
    }

    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_command_buf(commands::FLUSH_RX, &[])
    }

    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_command_buf(commands::FLUSH_TX, &[])
    }

    /// A FIFO_STATUS value claiming "full" and "empty" at once
    /// is reported as [`Nrf24Error::BinaryCorruption`].
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType> {
        self.read_fifo_status()?
            .state(about_tx)
            .ok_or(Nrf24Error::BinaryCorruption)
    }
}
