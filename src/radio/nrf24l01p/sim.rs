//! A behavioural model of the nRF24L01+ used by unit tests that need chip state
//! (register contents, FIFOs and IRQ flags) rather than exact bus expectations.
//!
//! All three HAL objects share one [`SimChip`] and log what they observe,
//! so tests can assert on the ordering of pin and bus activity.
extern crate std;

use core::{cell::RefCell, convert::Infallible};
use std::{collections::VecDeque, rc::Rc, vec::Vec};

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType as PinErrorType, OutputPin},
    spi::{Error, ErrorKind, ErrorType, SpiBus},
};

use super::{commands, mnemonics, registers, Nrf24l01p};

/// Something a [`SimChip`] observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    CsnLow,
    CsnHigh,
    CeLow,
    CeHigh,
    /// A byte clocked in on MOSI.
    Byte(u8),
    /// A delay, in nanoseconds.
    Delay(u32),
}

/// The error returned by [`SimBus`] when [`SimChip::fail_next_transfer`] is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimFault;

impl Error for SimFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

const TX_ADDR_WIDTH: usize = 5;
const FIFO_DEPTH: usize = 3;

pub struct SimChip {
    registers: [[u8; TX_ADDR_WIDTH]; 0x20],
    irq: u8,
    tx_fifo: VecDeque<Vec<u8>>,
    rx_fifo: VecDeque<(u8, Vec<u8>)>,
    /// Payloads that left the TX FIFO because CE was pulsed in TX mode.
    pub sent: Vec<Vec<u8>>,
    pub events: Vec<Event>,
    /// Make the next SPI call fail before any byte is exchanged.
    pub fail_next_transfer: bool,
    ce: bool,
    command: Option<u8>,
    clocked: Vec<u8>,
}

pub type SimRadio = Nrf24l01p<SimBus, SimPin, SimPin, SimDelay>;

impl Default for SimChip {
    fn default() -> Self {
        Self::new()
    }
}

impl SimChip {
    pub fn new() -> Self {
        let mut regs = [[0u8; TX_ADDR_WIDTH]; 0x20];
        // power-on reset values
        regs[registers::CONFIG as usize][0] = 0x08;
        regs[registers::EN_AA as usize][0] = 0x3F;
        regs[registers::EN_RXADDR as usize][0] = 0x03;
        regs[registers::SETUP_AW as usize][0] = 0x03;
        regs[registers::SETUP_RETR as usize][0] = 0x03;
        regs[registers::RF_CH as usize][0] = 0x02;
        regs[registers::RF_SETUP as usize][0] = 0x0E;
        regs[registers::RX_ADDR_P0 as usize] = [0xE7; TX_ADDR_WIDTH];
        regs[registers::RX_ADDR_P0 as usize + 1] = [0xC2; TX_ADDR_WIDTH];
        for pipe in 2..6u8 {
            regs[(registers::RX_ADDR_P0 + pipe) as usize][0] = 0xC1 + pipe;
        }
        regs[registers::TX_ADDR as usize] = [0xE7; TX_ADDR_WIDTH];
        Self {
            registers: regs,
            irq: 0,
            tx_fifo: VecDeque::new(),
            rx_fifo: VecDeque::new(),
            sent: Vec::new(),
            events: Vec::new(),
            fail_next_transfer: false,
            ce: false,
            command: None,
            clocked: Vec::new(),
        }
    }

    /// Build a radio whose bus, pins and delay all drive one shared chip.
    pub fn radio() -> (SimRadio, Rc<RefCell<SimChip>>) {
        let chip = Rc::new(RefCell::new(SimChip::new()));
        let radio = Nrf24l01p::new(
            SimPin {
                chip: chip.clone(),
                is_csn: false,
            },
            SimPin {
                chip: chip.clone(),
                is_csn: true,
            },
            SimBus(chip.clone()),
            SimDelay(chip.clone()),
        );
        (radio, chip)
    }

    /// Queue a received payload as if it arrived on `pipe`, asserting RX_DR.
    pub fn inject_rx(&mut self, pipe: u8, payload: &[u8]) {
        self.rx_fifo.push_back((pipe, payload.to_vec()));
        self.irq |= mnemonics::MASK_RX_DR;
    }

    /// Assert IRQ flags directly (as if the radio raised them).
    pub fn raise(&mut self, mask: u8) {
        self.irq |= mask & 0x70;
    }

    pub fn register(&self, address: u8) -> u8 {
        self.read_reg(address, 0)
    }

    pub fn tx_fifo_len(&self) -> usize {
        self.tx_fifo.len()
    }

    pub fn ce(&self) -> bool {
        self.ce
    }

    fn status(&self) -> u8 {
        let pipe = self.rx_fifo.front().map_or(7, |(pipe, _)| *pipe);
        self.irq | (pipe << 1) | (self.tx_fifo.len() >= FIFO_DEPTH) as u8
    }

    fn fifo_status(&self) -> u8 {
        (self.rx_fifo.is_empty() as u8)
            | ((self.rx_fifo.len() >= FIFO_DEPTH) as u8) << 1
            | (self.tx_fifo.is_empty() as u8) << 4
            | ((self.tx_fifo.len() >= FIFO_DEPTH) as u8) << 5
    }

    fn read_reg(&self, address: u8, index: usize) -> u8 {
        match address {
            registers::STATUS => self.status(),
            registers::FIFO_STATUS => self.fifo_status(),
            _ => self.registers[address as usize & 0x1F]
                .get(index)
                .copied()
                .unwrap_or(0),
        }
    }

    fn exchange(&mut self, mosi: u8) -> u8 {
        self.events.push(Event::Byte(mosi));
        let index = self.clocked.len();
        self.clocked.push(mosi);
        let Some(command) = self.command else {
            self.command = Some(mosi);
            return self.status();
        };
        if command <= registers::MAX_ADDRESS {
            self.read_reg(command, index - 1)
        } else if command == commands::R_RX_PAYLOAD {
            self.rx_fifo
                .front()
                .and_then(|(_, payload)| payload.get(index - 1).copied())
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Act on the command that CSN just finished framing.
    fn commit(&mut self) {
        let Some(command) = self.command.take() else {
            return;
        };
        let data: Vec<u8> = self.clocked.drain(..).skip(1).collect();
        match command {
            c if c & 0xE0 == commands::W_REGISTER => {
                let address = c & 0x1F;
                if address == registers::STATUS {
                    if let Some(value) = data.first() {
                        self.irq &= !(value & 0x70);
                    }
                } else {
                    for (index, byte) in data.iter().take(TX_ADDR_WIDTH).enumerate() {
                        self.registers[address as usize][index] = *byte;
                    }
                }
            }
            commands::W_TX_PAYLOAD => {
                if !data.is_empty() && self.tx_fifo.len() < FIFO_DEPTH {
                    self.tx_fifo.push_back(data);
                }
            }
            commands::R_RX_PAYLOAD => {
                if !data.is_empty() {
                    self.rx_fifo.pop_front();
                }
            }
            commands::FLUSH_TX => self.tx_fifo.clear(),
            commands::FLUSH_RX => self.rx_fifo.clear(),
            _ => (),
        }
    }

    fn set_csn(&mut self, high: bool) {
        if high {
            self.events.push(Event::CsnHigh);
            self.commit();
        } else {
            self.events.push(Event::CsnLow);
            self.command = None;
            self.clocked.clear();
        }
    }

    fn set_ce(&mut self, high: bool) {
        self.events.push(if high { Event::CeHigh } else { Event::CeLow });
        let config = self.registers[registers::CONFIG as usize][0];
        let is_tx = config & (1 << mnemonics::PRIM_RX) == 0;
        let powered = config & (1 << mnemonics::PWR_UP) != 0;
        if high && !self.ce && is_tx && powered {
            if let Some(payload) = self.tx_fifo.pop_front() {
                self.sent.push(payload);
                self.irq |= mnemonics::MASK_TX_DS;
            }
        }
        self.ce = high;
    }

    fn take_fault(&mut self) -> Result<(), SimFault> {
        if self.fail_next_transfer {
            self.fail_next_transfer = false;
            return Err(SimFault);
        }
        Ok(())
    }
}

pub struct SimBus(Rc<RefCell<SimChip>>);

impl ErrorType for SimBus {
    type Error = SimFault;
}

impl SpiBus for SimBus {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        let mut chip = self.0.borrow_mut();
        chip.take_fault()?;
        for word in words.iter_mut() {
            *word = chip.exchange(0);
        }
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        let mut chip = self.0.borrow_mut();
        chip.take_fault()?;
        for word in words {
            chip.exchange(*word);
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        let mut chip = self.0.borrow_mut();
        chip.take_fault()?;
        for index in 0..read.len().max(write.len()) {
            let miso = chip.exchange(write.get(index).copied().unwrap_or(0));
            if let Some(word) = read.get_mut(index) {
                *word = miso;
            }
        }
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        let mut chip = self.0.borrow_mut();
        chip.take_fault()?;
        for word in words.iter_mut() {
            *word = chip.exchange(*word);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub struct SimPin {
    chip: Rc<RefCell<SimChip>>,
    is_csn: bool,
}

impl PinErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut chip = self.chip.borrow_mut();
        if self.is_csn {
            chip.set_csn(false);
        } else {
            chip.set_ce(false);
        }
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut chip = self.chip.borrow_mut();
        if self.is_csn {
            chip.set_csn(true);
        } else {
            chip.set_ce(true);
        }
        Ok(())
    }
}

pub struct SimDelay(Rc<RefCell<SimChip>>);

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().events.push(Event::Delay(ns));
    }
}
