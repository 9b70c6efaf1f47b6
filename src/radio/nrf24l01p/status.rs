use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::{
    radio::{
        prelude::{EsbFifo, EsbStatus},
        Nrf24Error, Nrf24l01p,
    },
    types::StatusFlags,
};

use super::{commands, mnemonics, registers};

impl<SPI, CE, CSN, DELAY> EsbStatus for Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type StatusErrorType = Nrf24Error<SPI::Error, CE::Error>;

    fn respond_to_interrupt(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.spi_read(1, registers::STATUS)?;
        let flags = StatusFlags::from_bits(self._buf[1]);
        #[cfg(all(feature = "defmt", target_os = "none"))]
        {
            defmt::debug!("IRQ: {}", flags);
        }
        self.clear_interrupts()?;
        Ok(flags)
    }

    fn clear_interrupts(&mut self) -> Result<(), Self::StatusErrorType> {
        for flag in [
            mnemonics::MASK_RX_DR,
            mnemonics::MASK_TX_DS,
            mnemonics::MASK_MAX_RT,
        ] {
            self.spi_write_byte(registers::STATUS, flag)?;
        }
        self.flush_tx()
    }

    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.spi_write_byte(registers::STATUS, flags.into_bits() & StatusFlags::IRQ_MASK)
    }

    fn update(&mut self) -> Result<(), Self::StatusErrorType> {
        self.spi_read(0, commands::NOP)
    }

    fn get_status_flags(&self, flags: &mut StatusFlags) {
        *flags = self._status;
    }
}
