use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::radio::{
    prelude::{EsbMode, EsbPower},
    Nrf24Error, Nrf24l01p,
};

/// The wake-up wait used by [`EsbPower::power_up()`] when no delay is given.
///
/// Covers Tpd2stby (at most 4.5 ms) with some margin.
const POWER_UP_US: u32 = 5000;

impl<SPI, CE, CSN, DELAY> EsbPower for Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type PowerErrorType = Nrf24Error<SPI::Error, CE::Error>;

    /// CE is dropped first, then PWR_UP is cleared. PRIM_RX keeps its value.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        self.configure(self.is_rx(), false)
    }

    /// Does nothing (no bus traffic, no wait) if the cached CONFIG says the radio
    /// is already powered.
    fn power_up(&mut self, delay: Option<u32>) -> Result<(), Self::PowerErrorType> {
        if self.is_powered() {
            return Ok(());
        }
        self.configure(self.is_rx(), true)?;
        match delay.unwrap_or(POWER_UP_US) {
            0 => (),
            us => self._delay_impl.delay_us(us),
        }
        Ok(())
    }

    fn is_powered(&self) -> bool {
        self._config_reg.power()
    }
}
