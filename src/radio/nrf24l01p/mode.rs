use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::radio::{prelude::EsbMode, Nrf24Error, Nrf24l01p};

use super::{registers, Config};

impl<SPI, CE, CSN, DELAY> EsbMode for Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type ModeErrorType = Nrf24Error<SPI::Error, CE::Error>;

    fn configure(&mut self, is_rx: bool, power: bool) -> Result<(), Self::ModeErrorType> {
        self._config_reg = Config::compose(is_rx, power);
        self.spi_write_byte(registers::CONFIG, self._config_reg.into_bits())
    }

    /// The cached pipe-0 address is written with the current address width.
    fn as_rx(&mut self) -> Result<(), Self::ModeErrorType> {
        self.configure(true, true)?;

        if let Some(addr) = self._pipe0_rx_addr {
            let width = self._address_length as usize;
            self.spi_write_buf(registers::RX_ADDR_P0, &addr[..width])?;
        }

        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)
    }

    fn as_tx(&mut self) -> Result<(), Self::ModeErrorType> {
        self.configure(false, true)?;
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)
    }

    fn is_rx(&self) -> bool {
        self._config_reg.is_rx()
    }
}
