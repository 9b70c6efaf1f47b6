use bitfield_struct::bitfield;

use super::{access::set_bit, mnemonics};
use crate::{DataRate, FifoState, PaLevel};

/// The CONFIG register.
///
/// The three `mask_*` fields keep the corresponding event off the IRQ pin when asserted.
#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    pub mask_rx_dr: bool,

    pub mask_tx_ds: bool,

    pub mask_max_rt: bool,

    /// CRC is always enabled by this driver.
    #[bits(1, default = true)]
    pub en_crc: bool,

    /// Use the 2 byte CRC scheme.
    #[bits(1, default = true)]
    pub crco: bool,

    pub power: bool,

    pub is_rx: bool,
}

impl Config {
    /// The value that every mode change starts from:
    /// CRC enabled (2 bytes), powered up, RX mode, all IRQ events unmasked.
    pub(crate) const BASELINE: u8 = 0b0000_1111;

    /// Compose a CONFIG value from [`Config::BASELINE`].
    pub const fn compose(is_rx: bool, power: bool) -> Self {
        let value = set_bit(Self::BASELINE, mnemonics::PRIM_RX, is_rx);
        Self::from_bits(set_bit(value, mnemonics::PWR_UP, power))
    }
}

#[bitfield(u8, order = Msb)]
pub(crate) struct SetupRetry {
    /// The auto-retry feature's `delay`.
    #[bits(4, default = 5)]
    pub ard: u8,

    /// The auto-retry feature's `count`.
    #[bits(4, default = 15)]
    pub arc: u8,
}

/// The RF_SETUP register.
#[bitfield(u8, order = Msb)]
pub(crate) struct SetupRf {
    pub cont_wave: bool,

    #[bits(1)]
    _padding: u8,

    pub rf_dr_low: bool,

    #[bits(1, access = RO)]
    pub pll_lock: bool,

    pub rf_dr_high: bool,

    #[bits(2, access = None, default = 3)]
    pa_level: u8,

    #[bits(1, default = true)]
    pub lna_enable: bool,
}

impl SetupRf {
    /// Decode the data rate bits.
    ///
    /// Returns `None` for the reserved combination (both bits asserted).
    pub const fn data_rate(&self) -> Option<DataRate> {
        match (self.rf_dr_low(), self.rf_dr_high()) {
            (true, false) => Some(DataRate::Kbps250),
            (false, false) => Some(DataRate::Mbps1),
            (false, true) => Some(DataRate::Mbps2),
            (true, true) => None,
        }
    }

    /// Rewrite only the data rate bits, keeping every other bit as it was.
    pub const fn with_data_rate(self, data_rate: DataRate) -> Self {
        let value = set_bit(self.into_bits(), mnemonics::RF_DR_LOW, data_rate.rf_dr_low());
        Self::from_bits(set_bit(
            value,
            mnemonics::RF_DR_HIGH,
            data_rate.rf_dr_high(),
        ))
    }

    pub const fn pa_level(&self) -> PaLevel {
        PaLevel::from_bits(self.into_bits())
    }

    pub const fn with_pa_level(self, level: PaLevel) -> Self {
        let new_val = self.into_bits() & !PaLevel::MASK;
        Self::from_bits(new_val | level.into_bits())
    }
}

/// The FIFO_STATUS register.
#[bitfield(u8, order = Msb)]
pub(crate) struct FifoStatus {
    #[bits(1)]
    _padding: u8,

    pub tx_reuse: bool,

    pub tx_full: bool,

    pub tx_empty: bool,

    #[bits(2)]
    _reserved: u8,

    pub rx_full: bool,

    pub rx_empty: bool,
}

impl FifoStatus {
    /// Decode the TX (`about_tx`) or RX half of the register.
    ///
    /// Returns `None` if "full" and "empty" are both asserted.
    pub const fn state(&self, about_tx: bool) -> Option<FifoState> {
        let (full, empty) = if about_tx {
            (self.tx_full(), self.tx_empty())
        } else {
            (self.rx_full(), self.rx_empty())
        };
        match (full, empty) {
            (false, false) => Some(FifoState::Occupied),
            (true, false) => Some(FifoState::Full),
            (false, true) => Some(FifoState::Empty),
            (true, true) => None,
        }
    }
}
