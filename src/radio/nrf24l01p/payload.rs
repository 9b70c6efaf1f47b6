use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiBus};

use crate::{
    radio::{prelude::EsbPayload, Nrf24Error, Nrf24l01p},
    types::{ReadBuffer, MAX_ACCESS_LENGTH},
};

use super::commands;

/// How long (in microseconds) the CE pin is held HIGH to start a transmission.
///
/// The datasheet asks for at least 10 us.
pub const CE_PULSE_US: u32 = 10;

impl<SPI, CE, CSN, DELAY> Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    fn check_payload_length(len: usize) -> Result<(), Nrf24Error<SPI::Error, CE::Error>> {
        if (1..=MAX_ACCESS_LENGTH).contains(&len) {
            Ok(())
        } else {
            Err(Nrf24Error::InvalidLength(len))
        }
    }
}

impl<SPI, CE, CSN, DELAY> EsbPayload for Nrf24l01p<SPI, CE, CSN, DELAY>
where
    SPI: SpiBus,
    CE: OutputPin,
    CSN: OutputPin<Error = CE::Error>,
    DELAY: DelayNs,
{
    type PayloadErrorType = Nrf24Error<SPI::Error, CE::Error>;

    fn transmit(&mut self, buf: &[u8]) -> Result<(), Self::PayloadErrorType> {
        Self::check_payload_length(buf.len())?;
        self.spi_command_buf(commands::W_TX_PAYLOAD, buf)?;
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._delay_impl.delay_us(CE_PULSE_US);
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)
    }

    fn receive(&mut self, count: usize) -> Result<ReadBuffer, Self::PayloadErrorType> {
        Self::check_payload_length(count)?;
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        let fetched = self.spi_read(count, commands::R_RX_PAYLOAD);
        // resume listening even if the payload could not be fetched
        let resumed = self.ce_pin.set_high().map_err(Nrf24Error::Gpo);
        fetched?;
        resumed?;
        Ok(self.read_buffer(count))
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, EsbPayload, CE_PULSE_US};
    use crate::{
        radio::{
            nrf24l01p::sim::{Event, SimChip},
            prelude::{EsbFifo, EsbMode, EsbPipe},
            Nrf24Error,
        },
        spi_test_expects,
        test::mk_radio,
    };
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;

    #[test]
    pub fn transmit() {
        let ce_expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ];
        let spi_expectations = spi_test_expects![
            (
                vec![commands::W_TX_PAYLOAD, 1u8, 2, 3],
                vec![0xEu8, 0, 0, 0],
            ),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin, mut csn_pin) = (mocks.0, mocks.1, mocks.2, mocks.3);
        radio.transmit(&[1, 2, 3]).unwrap();
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }

    #[test]
    pub fn receive() {
        let ce_expectations = [
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = spi_test_expects![
            (
                vec![commands::R_RX_PAYLOAD, 0u8, 0, 0, 0],
                vec![0x40u8, 0xDE, 0xAD, 0xBE, 0xEF],
            ),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin, mut csn_pin) = (mocks.0, mocks.1, mocks.2, mocks.3);
        let payload = radio.receive(4).unwrap();
        assert_eq!(payload.as_bytes(), &[0xDE, 0xAD, 0xBE, 0xEF]);
        assert!(payload.status().rx_dr());
        assert_eq!(payload.status().rx_pipe(), Some(0));
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }

    #[test]
    pub fn payload_lengths_rejected() {
        // no bus or pin activity is expected
        let mocks = mk_radio(&[], &[]);
        let (mut radio, mut spi, mut ce_pin, mut csn_pin) = (mocks.0, mocks.1, mocks.2, mocks.3);
        assert_eq!(radio.transmit(&[]), Err(Nrf24Error::InvalidLength(0)));
        assert_eq!(radio.transmit(&[0; 6]), Err(Nrf24Error::InvalidLength(6)));
        assert_eq!(radio.receive(0), Err(Nrf24Error::InvalidLength(0)));
        assert_eq!(radio.receive(32), Err(Nrf24Error::InvalidLength(32)));
        spi.done();
        ce_pin.done();
        csn_pin.done();
    }

    #[test]
    fn transmit_event_order() {
        let (mut radio, chip) = SimChip::radio();
        radio.as_tx().unwrap();
        chip.borrow_mut().events.clear();
        radio.transmit(&[0x01, 0x02, 0x03]).unwrap();
        assert_eq!(
            chip.borrow().events,
            vec![
                Event::CsnLow,
                Event::Byte(commands::W_TX_PAYLOAD),
                Event::Byte(0x01),
                Event::Byte(0x02),
                Event::Byte(0x03),
                Event::CsnHigh,
                Event::CeHigh,
                Event::Delay(CE_PULSE_US * 1000),
                Event::CeLow,
            ]
        );
        assert_eq!(chip.borrow().sent, vec![vec![1u8, 2, 3]]);
    }

    #[test]
    fn receive_event_order() {
        let (mut radio, chip) = SimChip::radio();
        radio.as_rx().unwrap();
        chip.borrow_mut().inject_rx(1, b"ab");
        chip.borrow_mut().events.clear();
        let payload = radio.receive(2).unwrap();
        assert_eq!(payload.as_bytes(), b"ab");
        // CE stays low for the whole R_RX_PAYLOAD transaction
        assert_eq!(
            chip.borrow().events,
            vec![
                Event::CeLow,
                Event::CsnLow,
                Event::Byte(commands::R_RX_PAYLOAD),
                Event::Byte(0),
                Event::Byte(0),
                Event::CsnHigh,
                Event::CeHigh,
            ]
        );
    }

    #[test]
    fn receive_restores_ce_after_fault() {
        let (mut radio, chip) = SimChip::radio();
        chip.borrow_mut().inject_rx(2, &[9, 8, 7]);
        radio.as_rx().unwrap();
        chip.borrow_mut().fail_next_transfer = true;
        assert!(matches!(radio.receive(3), Err(Nrf24Error::Spi(_))));
        assert!(chip.borrow().ce());
        assert!(radio.available().unwrap());

        let payload = radio.receive(3).unwrap();
        assert_eq!(payload.as_bytes(), &[9, 8, 7]);
        assert_eq!(payload.status().rx_pipe(), Some(2));
        assert!(chip.borrow().ce());
        assert!(!radio.available().unwrap());
    }

    #[test]
    fn round_trip_between_two_radios() {
        let (mut tx, tx_chip) = SimChip::radio();
        let (mut rx, rx_chip) = SimChip::radio();
        rx.configure_pipes(1, 4).unwrap();
        rx.as_rx().unwrap();
        tx.as_tx().unwrap();
        tx.transmit(b"ping").unwrap();
        // carry the payload over the air
        let sent = tx_chip.borrow_mut().sent.remove(0);
        rx_chip.borrow_mut().inject_rx(0, &sent);
        assert!(rx.available().unwrap());
        assert_eq!(rx.receive(4).unwrap().as_bytes(), b"ping");
    }
}
