use crate::radio::nrf24l01p::bit_fields::{SetupRetry, SetupRf};
use crate::{DataRate, PaLevel};

/// Every setting [`EsbInit::with_config()`](fn@crate::radio::prelude::EsbInit::with_config)
/// writes to the radio, held off-chip.
///
/// Start from [`RadioConfig::default()`] and chain `with_*` calls. Out-of-range
/// values are clamped by the builders, so a `RadioConfig` is always writable.
/// ```
/// use nrf24l01p::radio::RadioConfig;
///
/// let config = RadioConfig::default().with_channel(42).with_payload_length(4);
/// assert_eq!(config.channel(), 42);
/// assert_eq!(config.payload_length(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RadioConfig {
    pub(crate) auto_retries: SetupRetry,
    pub(crate) setup_rf: SetupRf,
    channel: u8,
    address_length: u8,
    payload_length: u8,
    rx_pipes: u8,
    auto_ack: u8,
    tx_address: [u8; 5],
    rx_address: [u8; 5],
}

/// Copy the leading bytes that fit in both slices, up to a 5 byte address.
fn copy_address(dest: &mut [u8], src: &[u8]) {
    let len = dest.len().min(src.len()).min(5);
    dest[..len].copy_from_slice(&src[..len]);
}

impl Default for RadioConfig {
    /// | setting | value |
    /// |--------:|:------|
    /// | channel | 76 (2476 MHz) |
    /// | data rate | [`DataRate::Mbps1`] |
    /// | PA level | [`PaLevel::Max`], LNA on |
    /// | address length | 5 |
    /// | payload length | 5 |
    /// | RX pipes | `0b01` |
    /// | auto-ack | `0x3F` |
    /// | auto-retry | delay 5 (1500 us), count 15 |
    /// | TX and pipe-0 RX address | `[0xE7; 5]` |
    fn default() -> Self {
        Self {
            auto_retries: SetupRetry::default(),
            setup_rf: SetupRf::default(),
            channel: 76,
            address_length: 5,
            payload_length: 5,
            rx_pipes: 1,
            auto_ack: 0x3F,
            tx_address: [0xE7; 5],
            rx_address: [0xE7; 5],
        }
    }
}

impl RadioConfig {
    pub const fn data_rate(&self) -> DataRate {
        match self.setup_rf.data_rate() {
            Some(rate) => rate,
            None => DataRate::Mbps1,
        }
    }

    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self {
            setup_rf: self.setup_rf.with_data_rate(data_rate),
            ..self
        }
    }

    pub const fn pa_level(&self) -> PaLevel {
        self.setup_rf.pa_level()
    }

    pub fn with_pa_level(self, level: PaLevel) -> Self {
        Self {
            setup_rf: self.setup_rf.with_pa_level(level),
            ..self
        }
    }

    pub const fn address_length(&self) -> u8 {
        self.address_length
    }

    /// Clamped to [3, 5] bytes.
    pub fn with_address_length(self, value: u8) -> Self {
        Self {
            address_length: value.clamp(3, 5),
            ..self
        }
    }

    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Clamped to 125, the highest channel (2525 MHz).
    pub fn with_channel(self, value: u8) -> Self {
        Self {
            channel: value.min(125),
            ..self
        }
    }

    /// ARD: the wait between retries, in steps of 250 us above 250 us.
    pub const fn auto_retry_delay(&self) -> u8 {
        self.auto_retries.ard()
    }

    /// ARC: how many retries before MAX_RT is raised.
    pub const fn auto_retry_count(&self) -> u8 {
        self.auto_retries.arc()
    }

    /// Set SETUP_RETR. Both values are clamped to 15.
    ///
    /// A `delay` of `n` waits `250 * (n + 1)` us between retries.
    /// A `count` of 0 turns retries off.
    pub fn with_auto_retries(self, delay: u8, count: u8) -> Self {
        Self {
            auto_retries: SetupRetry::new()
                .with_ard(delay.min(15))
                .with_arc(count.min(15)),
            ..self
        }
    }

    pub const fn auto_ack(&self) -> u8 {
        self.auto_ack
    }

    /// Set EN_AA, one bit per pipe. Bits above pipe 5 are dropped.
    pub fn with_auto_ack(self, enable: u8) -> Self {
        Self {
            auto_ack: enable & 0x3F,
            ..self
        }
    }

    pub const fn payload_length(&self) -> u8 {
        self.payload_length
    }

    /// Pipe 0's static payload width, clamped to [1, 32].
    pub fn with_payload_length(self, value: u8) -> Self {
        Self {
            payload_length: value.clamp(1, 32),
            ..self
        }
    }

    pub const fn rx_pipes(&self) -> u8 {
        self.rx_pipes
    }

    /// Set EN_RXADDR, one bit per pipe. Bits above pipe 5 are dropped.
    pub fn with_rx_pipes(self, mask: u8) -> Self {
        Self {
            rx_pipes: mask & 0x3F,
            ..self
        }
    }

    pub const fn is_rx_pipe_enabled(&self, pipe: u8) -> bool {
        pipe < 6 && self.rx_pipes & (1u8 << pipe) > 0
    }

    /// Copy the pipe-0 RX address into `address` (as many bytes as fit).
    pub fn rx_address(&self, address: &mut [u8]) {
        copy_address(address, &self.rx_address);
    }

    /// Replace the leading bytes of the pipe-0 RX address.
    ///
    /// [`EsbMode::as_rx()`](fn@crate::radio::prelude::EsbMode::as_rx) writes it back
    /// over the TX address that pipe 0 holds in TX mode.
    pub fn with_rx_address(self, address: &[u8]) -> Self {
        let mut rx_address = self.rx_address;
        copy_address(&mut rx_address, address);
        Self { rx_address, ..self }
    }

    /// Copy the TX address into `address` (as many bytes as fit).
    pub fn tx_address(&self, address: &mut [u8]) {
        copy_address(address, &self.tx_address);
    }

    /// Replace the leading bytes of the TX address.
    pub fn with_tx_address(self, address: &[u8]) -> Self {
        let mut tx_address = self.tx_address;
        copy_address(&mut tx_address, address);
        Self { tx_address, ..self }
    }
}
