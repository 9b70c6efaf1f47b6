/// Register addresses of the nRF24L01+.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const OBSERVE_TX: u8 = 0x08;
    pub const RPD: u8 = 0x09;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const FIFO_STATUS: u8 = 0x17;
    pub const DYNPD: u8 = 0x1C;
    pub const FEATURE: u8 = 0x1D;

    /// The highest address reachable by the 5-bit register field of a command byte.
    pub const MAX_ADDRESS: u8 = 0x1F;
}

/// SPI command bytes of the nRF24L01+.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const NOP: u8 = 0xFF;
}

/// Bit positions within registers
pub mod mnemonics {
    // CONFIG
    pub const PRIM_RX: u8 = 0;
    pub const PWR_UP: u8 = 1;
    pub const CRCO: u8 = 2;
    pub const EN_CRC: u8 = 3;

    // RF_SETUP
    pub const RF_DR_HIGH: u8 = 3;
    pub const RF_DR_LOW: u8 = 5;

    // STATUS
    pub const MAX_RT: u8 = 4;
    pub const TX_DS: u8 = 5;
    pub const RX_DR: u8 = 6;

    pub const MASK_RX_DR: u8 = 1 << RX_DR;
    pub const MASK_TX_DS: u8 = 1 << TX_DS;
    pub const MASK_MAX_RT: u8 = 1 << MAX_RT;
}
