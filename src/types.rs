//! Value types shared by the driver's traits.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// The largest number of bytes moved by one register or payload access.
///
/// Registers on the nRF24L01+ are at most 5 bytes wide (the pipe addresses),
/// and payloads are kept to the same width by this driver.
pub const MAX_ACCESS_LENGTH: usize = 5;

/// The power amplifier setting of RF_SETUP, from weakest to strongest output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PaLevel {
    /// -18 dBm, about 7.0 mA in TX mode.
    Min = 0,
    /// -12 dBm, about 7.5 mA in TX mode.
    Low = 2,
    /// -6 dBm, about 9.0 mA in TX mode.
    High = 4,
    /// 0 dBm, about 11.3 mA in TX mode.
    Max = 6,
}

impl PaLevel {
    /// The RF_PWR bits of RF_SETUP.
    pub(crate) const MASK: u8 = 6;

    pub(crate) const fn into_bits(self) -> u8 {
        self as u8
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 => PaLevel::Min,
            2 => PaLevel::Low,
            4 => PaLevel::High,
            _ => PaLevel::Max,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PaLevel::Min => "Min (-18 dBm)",
            PaLevel::Low => "Low (-12 dBm)",
            PaLevel::High => "High (-6 dBm)",
            PaLevel::Max => "Max (0 dBm)",
        }
    }
}

/// On-air bit rate, selected by the RF_DR_LOW and RF_DR_HIGH bits of RF_SETUP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataRate {
    Mbps1,
    Mbps2,
    /// The slowest rate has the longest range.
    Kbps250,
}

/// The error returned when a numeric data rate selector is not one of `250`, `1` or `2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidDataRate(pub u16);

#[cfg(feature = "defmt")]
impl defmt::Format for InvalidDataRate {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "invalid data rate selector {=u16}", self.0)
    }
}

impl Display for InvalidDataRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "data rate must be 250 (Kbps), 1 (Mbps) or 2 (Mbps), not {}",
            self.0
        )
    }
}

impl DataRate {
    /// Is the `RF_DR_LOW` bit asserted for this rate?
    pub(crate) const fn rf_dr_low(self) -> bool {
        matches!(self, DataRate::Kbps250)
    }

    /// Is the `RF_DR_HIGH` bit asserted for this rate?
    pub(crate) const fn rf_dr_high(self) -> bool {
        matches!(self, DataRate::Mbps2)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DataRate::Mbps1 => "1 Mbps",
            DataRate::Mbps2 => "2 Mbps",
            DataRate::Kbps250 => "250 Kbps",
        }
    }
}

/// Convert the numeric selector used by the chip's reference material:
/// `250` for 250 Kbps, `1` for 1 Mbps and `2` for 2 Mbps.
///
/// ```
/// use nrf24l01p::DataRate;
///
/// assert_eq!(DataRate::try_from(250u16), Ok(DataRate::Kbps250));
/// assert!(DataRate::try_from(500u16).is_err());
/// ```
impl TryFrom<u16> for DataRate {
    type Error = InvalidDataRate;

    fn try_from(selector: u16) -> core::result::Result<Self, Self::Error> {
        match selector {
            250 => Ok(DataRate::Kbps250),
            1 => Ok(DataRate::Mbps1),
            2 => Ok(DataRate::Mbps2),
            other => Err(InvalidDataRate(other)),
        }
    }
}

/// How full one of the 3-level FIFOs is, as reported by FIFO_STATUS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FifoState {
    /// All 3 levels hold a payload.
    Full,
    Empty,
    /// 1 or 2 levels hold a payload.
    Occupied,
}

impl FifoState {
    pub const fn as_str(self) -> &'static str {
        match self {
            FifoState::Full => "Full",
            FifoState::Empty => "Empty",
            FifoState::Occupied => "Occupied",
        }
    }
}

/// `Display` and `defmt::Format` for the enums above, both printing `as_str()`.
macro_rules! impl_labels {
    ($($name:ty),+) => {
        $(
            impl Display for $name {
                fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                    f.write_str(self.as_str())
                }
            }

            #[cfg(feature = "defmt")]
            impl defmt::Format for $name {
                fn format(&self, fmt: defmt::Formatter) {
                    defmt::write!(fmt, "{=str}", self.as_str())
                }
            }
        )+
    };
}

impl_labels!(PaLevel, DataRate, FifoState);

/// The chip's STATUS byte, as clocked out first in every SPI transaction.
///
/// [`StatusFlags::default`] has no IRQ flag asserted and [`StatusFlags::new`] has all
/// three. Pick individual flags (for example to pass to
/// [`EsbStatus::clear_status_flags()`](fn@crate::radio::prelude::EsbStatus::clear_status_flags))
/// with the `with_*` builders:
/// ```
/// use nrf24l01p::StatusFlags;
///
/// let only_rx = StatusFlags::default().with_rx_dr(true);
/// assert!(only_rx.rx_dr() && !only_rx.tx_ds());
/// ```
#[bitfield(u8, new = false, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// RX_DR: a payload arrived in the RX FIFO.
    pub rx_dr: bool,

    /// TX_DS: a payload was sent (and acknowledged, if auto-ack is on).
    pub tx_ds: bool,

    /// MAX_RT: every retry went unacknowledged.
    pub max_rt: bool,

    #[bits(3, access = RO)]
    rx_pipe_bits: u8,

    /// Is the TX FIFO full?
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "rx_dr={=bool} tx_ds={=bool} max_rt={=bool}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// All three IRQ flags asserted.
    pub fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// The pipe that received the payload at the head of the RX FIFO.
    ///
    /// Returns `None` when the RX FIFO is empty.
    pub const fn rx_pipe(&self) -> Option<u8> {
        match self.rx_pipe_bits() {
            pipe @ 0..=5 => Some(pipe),
            _ => None,
        }
    }

    /// Are any of the three IRQ flags asserted?
    pub const fn any(&self) -> bool {
        self.into_bits() & Self::IRQ_MASK != 0
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "rx_dr={} tx_ds={} max_rt={}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

/// An owned copy of the bytes clocked out of the chip by one read command.
///
/// Index 0 of the raw form is the STATUS byte that accompanies every command;
/// [`ReadBuffer::as_bytes()`] skips it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadBuffer {
    raw: [u8; MAX_ACCESS_LENGTH + 1],
    len: u8,
}

impl ReadBuffer {
    /// Copy `len` data bytes (plus the leading STATUS byte) out of a scratch buffer.
    pub(crate) fn copy_from(scratch: &[u8], len: usize) -> Self {
        let mut raw = [0u8; MAX_ACCESS_LENGTH + 1];
        raw[..=len].copy_from_slice(&scratch[..=len]);
        Self {
            raw,
            len: len as u8,
        }
    }

    /// The STATUS byte that was clocked out with the command byte.
    pub fn status(&self) -> StatusFlags {
        StatusFlags::from_bits(self.raw[0])
    }

    /// The register (or payload) content, without the STATUS byte.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw[1..=self.len as usize]
    }

    /// The STATUS byte followed by the register (or payload) content.
    pub fn raw(&self) -> &[u8] {
        &self.raw[..=self.len as usize]
    }

    /// The number of data bytes (the STATUS byte is not counted).
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Is there no data besides the STATUS byte?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for ReadBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReadBuffer {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "ReadBuffer {=[u8]:#04X}", self.raw())
    }
}
