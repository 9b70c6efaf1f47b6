use super::{Nrf24Error, Nrf24l01p};
use crate::radio::prelude::EsbDetails;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

#[cfg(any(
    test,
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use super::{
    bit_fields::{Config, FifoStatus, SetupRf},
    registers,
};
#[cfg(any(
    test,
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use crate::{radio::prelude::EsbRegisters, types::ReadBuffer, FifoState, StatusFlags};
#[cfg(any(
    test,
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use core::fmt::{Display, Formatter, Result as FmtResult};

#[cfg(all(feature = "std", not(target_os = "none")))]
extern crate std;

/// The registers this driver manages, as read back from the chip.
#[cfg(any(
    test,
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
#[derive(Debug, Clone, Copy)]
struct Details {
    /// STATUS as clocked out with the first read.
    status: StatusFlags,
    config: Config,
    setup_rf: SetupRf,
    channel: u8,
    /// SETUP_AW decoded to a byte count.
    address_width: u8,
    open_pipes: u8,
    payload_width: u8,
    fifo: FifoStatus,
    tx_address: ReadBuffer,
    /// The pipe-0 address that [`as_rx()`](fn@crate::radio::prelude::EsbMode::as_rx)
    /// will restore.
    pipe0_rx_addr: Option<[u8; 5]>,
}

#[cfg(any(
    test,
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
impl Details {
    fn width(&self) -> usize {
        self.address_width.clamp(3, 5) as usize
    }
}

#[cfg(any(
    test,
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
fn fifo_label(state: Option<FifoState>) -> &'static str {
    state.map_or("invalid", FifoState::as_str)
}

#[cfg(any(
    test,
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
fn write_address(f: &mut Formatter<'_>, address: &[u8]) -> FmtResult {
    for (index, byte) in address.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }
        write!(f, "{byte:02X}")?;
    }
    Ok(())
}

#[cfg(any(
    test,
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
impl Display for Details {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(
            f,
            "CONFIG      {:#04X} ({}, {})",
            self.config.into_bits(),
            if self.config.is_rx() { "RX" } else { "TX" },
            if self.config.power() {
                "powered up"
            } else {
                "powered down"
            }
        )?;
        writeln!(f, "STATUS      {}", self.status)?;
        writeln!(
            f,
            "RF_CH       {} ({} MHz)",
            self.channel,
            2400u16 + self.channel as u16
        )?;
        write!(f, "RF_SETUP    {:#04X} (", self.setup_rf.into_bits())?;
        match self.setup_rf.data_rate() {
            Some(rate) => write!(f, "{rate}")?,
            None => write!(f, "reserved data rate")?,
        }
        writeln!(f, ", PA {})", self.setup_rf.pa_level())?;
        writeln!(f, "SETUP_AW    {} byte addresses", self.address_width)?;
        writeln!(f, "EN_RXADDR   {:#08b}", self.open_pipes)?;
        writeln!(f, "RX_PW_P0    {} bytes", self.payload_width)?;
        writeln!(
            f,
            "FIFO_STATUS TX {}, RX {}{}",
            fifo_label(self.fifo.state(true)),
            fifo_label(self.fifo.state(false)),
            if self.fifo.tx_reuse() {
                " (TX reuse)"
            } else {
                ""
            }
        )?;
        write!(f, "TX_ADDR     ")?;
        write_address(f, self.tx_address.as_bytes())?;
        write!(f, "\npipe 0 RX   ")?;
        match self.pipe0_rx_addr {
            Some(address) => write_address(f, &address[..self.width()]),
            None => write!(f, "same as TX_ADDR"),
        }
    }
}

#[cfg(all(feature = "defmt", target_os = "none"))]
impl defmt::Format for Details {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "CONFIG {=u8:#04X}, {}, RF_CH {=u8}, RF_SETUP {=u8:#04X}, SETUP_AW {=u8}, EN_RXADDR {=u8:#08b}, RX_PW_P0 {=u8}, FIFO_STATUS TX {=str} RX {=str}, TX_ADDR {=[u8]:X}, pipe 0 RX {}",
            self.config.into_bits(),
            self.status,
            self.channel,
            self.setup_rf.into_bits(),
            self.address_width,
            self.open_pipes,
            self.payload_width,
            fifo_label(self.fifo.state(true)),
            fifo_label(self.fifo.state(false)),
            self.tx_address.as_bytes(),
            self.pipe0_rx_addr,
        )
    }
}

#[cfg(any(
    test,
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
impl<SPI, CE, CSN, DELAY> Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    fn read_byte(&mut self, address: u8) -> Result<u8, Nrf24Error<SPI::Error, CE::Error>> {
        Ok(self.read_register(address, 1)?.as_bytes()[0])
    }

    fn collect_details(&mut self) -> Result<Details, Nrf24Error<SPI::Error, CE::Error>> {
        let config = self.read_register(registers::CONFIG, 1)?;
        let address_width = self.read_byte(registers::SETUP_AW)?.saturating_add(2);
        Ok(Details {
            status: config.status(),
            config: Config::from_bits(config.as_bytes()[0]),
            setup_rf: SetupRf::from_bits(self.read_byte(registers::RF_SETUP)?),
            channel: self.read_byte(registers::RF_CH)?,
            address_width,
            open_pipes: self.read_byte(registers::EN_RXADDR)?,
            payload_width: self.read_byte(registers::RX_PW_P0)?,
            fifo: self.read_fifo_status()?,
            tx_address: self.read_register(
                registers::TX_ADDR,
                address_width.clamp(3, 5) as usize,
            )?,
            pipe0_rx_addr: self._pipe0_rx_addr,
        })
    }
}

impl<SPI, CE, CSN, DELAY> EsbDetails for Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type DetailsErrorType = Nrf24Error<SPI::Error, CE::Error>;

    #[cfg(all(feature = "defmt", target_os = "none"))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let details = self.collect_details()?;
        defmt::println!("{}", details);
        Ok(())
    }

    #[cfg(all(feature = "std", not(target_os = "none")))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let details = self.collect_details()?;
        std::println!("{details}");
        Ok(())
    }

    #[cfg(not(any(
        all(feature = "defmt", target_os = "none"),
        all(feature = "std", not(target_os = "none"))
    )))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }
}
