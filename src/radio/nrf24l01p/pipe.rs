use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::radio::{prelude::EsbPipe, Nrf24Error, Nrf24l01p};

use super::{registers, set_bit};

/// The largest static payload width the radio's RX_PW_Px registers accept.
const MAX_PAYLOAD_WIDTH: u8 = 32;

impl<SPI, CE, CSN, DELAY> EsbPipe for Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type PipeErrorType = Nrf24Error<SPI::Error, CE::Error>;

    fn configure_pipes(&mut self, pipe_mask: u8, width: u8) -> Result<(), Self::PipeErrorType> {
        if !(1..=MAX_PAYLOAD_WIDTH).contains(&width) {
            return Err(Nrf24Error::InvalidLength(width as usize));
        }
        self.spi_write_byte(registers::EN_RXADDR, pipe_mask)?;
        self.spi_write_byte(registers::RX_PW_P0, width)?;
        self._payload_length = width;
        Ok(())
    }

    fn open_rx_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        let address = self.clip_address(address)?;
        let register = registers::RX_ADDR_P0 + pipe;
        match pipe {
            0 => {
                let cached = self._pipe0_rx_addr.get_or_insert([0; 5]);
                cached[..address.len()].copy_from_slice(address);
                self.spi_write_buf(register, address)?;
            }
            1 => self.spi_write_buf(register, address)?,
            // pipes 2 - 5 only hold the least significant byte
            _ => self.spi_write_byte(register, address[0])?,
        }
        self.set_pipe_enabled(pipe, true)
    }

    fn open_tx_pipe(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        let address = self.clip_address(address)?;
        for register in [registers::TX_ADDR, registers::RX_ADDR_P0] {
            self.spi_write_buf(register, address)?;
        }
        Ok(())
    }

    fn close_rx_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        self.set_pipe_enabled(pipe, false)?;
        if pipe == 0 {
            self._pipe0_rx_addr = None;
        }
        Ok(())
    }

    fn set_address_length(&mut self, length: u8) -> Result<(), Self::PipeErrorType> {
        let width = length.clamp(3, 5);
        // SETUP_AW encodes 3, 4 and 5 bytes as 1, 2 and 3
        self.spi_write_byte(registers::SETUP_AW, width - 2)?;
        self._address_length = width;
        Ok(())
    }

    /// Returns [`Nrf24Error::BinaryCorruption`] if the SETUP_AW register holds
    /// the illegal value `0`.
    fn get_address_length(&mut self) -> Result<u8, Self::PipeErrorType> {
        self.spi_read(1, registers::SETUP_AW)?;
        match self._buf[1] & 3 {
            0 => Err(Nrf24Error::BinaryCorruption),
            encoded => {
                self._address_length = encoded + 2;
                Ok(self._address_length)
            }
        }
    }

    fn get_payload_length(&mut self) -> Result<u8, Self::PipeErrorType> {
        self.spi_read(1, registers::RX_PW_P0)?;
        match self._buf[1] & 0x3F {
            width @ 0..=MAX_PAYLOAD_WIDTH => {
                self._payload_length = width;
                Ok(width)
            }
            _ => Err(Nrf24Error::BinaryCorruption),
        }
    }
}

impl<SPI, CE, CSN, DELAY> Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    /// Trim `address` to the configured address width. An empty address is rejected.
    fn clip_address<'a>(
        &self,
        address: &'a [u8],
    ) -> Result<&'a [u8], Nrf24Error<SPI::Error, CE::Error>> {
        match address.len() {
            0 => Err(Nrf24Error::InvalidLength(0)),
            len => Ok(&address[..len.min(self._address_length as usize)]),
        }
    }

    /// Read-modify-write `pipe`'s bit in EN_RXADDR.
    fn set_pipe_enabled(
        &mut self,
        pipe: u8,
        enabled: bool,
    ) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        self.spi_read(1, registers::EN_RXADDR)?;
        let mask = set_bit(self._buf[1], pipe, enabled);
        self.spi_write_byte(registers::EN_RXADDR, mask)
    }
}
