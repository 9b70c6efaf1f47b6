use super::{registers, Nrf24Error, Nrf24l01p};
use crate::radio::{
    prelude::{EsbChannel, EsbFifo, EsbInit, EsbMode, EsbPipe, EsbPower, EsbStatus},
    RadioConfig,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

impl<SPI, CE, CSN, DELAY> EsbInit for Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, CE::Error>;

    /// Initialize the radio's hardware using the [`SpiBus`] and [`OutputPin`]s given
    /// to [`Nrf24l01p::new()`].
    ///
    /// Returns [`Nrf24Error::BinaryCorruption`] if the CONFIG register does not read
    /// back what was written to it (usually a wiring problem).
    fn init(&mut self) -> Result<(), Self::ConfigErrorType> {
        // Configuration bits may not stick until the radio has settled after power on.
        // Worst case is 4.5 ms + 14 us.
        self._delay_impl.delay_ns(5_000_000);

        self.power_down()?;
        self.spi_read(1, registers::CONFIG)?;
        if self._buf[1] != self._config_reg.into_bits() {
            #[cfg(all(feature = "defmt", target_os = "none"))]
            {
                defmt::error!(
                    "CONFIG read back as {=u8:#04X}, expected {=u8:#04X}",
                    self._buf[1],
                    self._config_reg.into_bits()
                );
            }
            return Err(Nrf24Error::BinaryCorruption);
        }
        self.with_config(&RadioConfig::default())
    }

    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        self.clear_interrupts()?;
        self.flush_rx()?;

        self.set_address_length(config.address_length())?;

        self.spi_write_byte(registers::SETUP_RETR, config.auto_retries.into_bits())?;
        self.spi_write_byte(registers::EN_AA, config.auto_ack())?;
        self.spi_write_byte(registers::RF_SETUP, config.setup_rf.into_bits())?;

        let mut address = [0; 5];
        config.tx_address(&mut address);
        self.open_tx_pipe(&address)?;
        // pipe 0 shares its address with TX; it is restored when entering RX mode
        self._pipe0_rx_addr = if config.is_rx_pipe_enabled(0) {
            config.rx_address(&mut address);
            Some(address)
        } else {
            None
        };

        self.configure_pipes(config.rx_pipes(), config.payload_length())?;
        self.set_channel(config.channel())?;

        // Do not write CE high so radio will remain in standby-I mode.
        self.as_tx()
    }
}
