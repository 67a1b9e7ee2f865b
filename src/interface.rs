//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`]
//! struct for talking to a Sharp memory panel over SPI.
//!
//! ## Hardware Requirements
//!
//! The panel needs:
//! - SPI bus (MOSI + SCK only; the panel has no output)
//! - 1 GPIO pin: **CS**, chip select, *active high* (unusual; most SPI
//!   peripherals are active low)
//!
//! Because CS is active high and must stay asserted across every byte of a
//! frame, the driver takes an exclusive [`SpiBus`] plus its own CS pin
//! rather than an `SpiDevice` with managed per-transaction chip select.
//! The panel latches the frame on the falling edge of CS, so
//! [`end_frame`](DisplayInterface::end_frame) flushes the bus before
//! releasing the pin.
//!
//! Configure the bus with [`RECOMMENDED_MODE`] and a clock at or below
//! [`MAX_SCLK_HZ`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::SpiBus;
//! use sharpmem::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiBus for MockSpi {
//! #     fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! let mut interface = Interface::new(MockSpi, MockPin);
//!
//! // One chip-select session, by hand:
//! let _ = interface.begin_frame();
//! let _ = interface.write(&[0x80]);
//! let _ = interface.end_frame();
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Recommended SPI mode for Sharp memory panels (CPOL=0, CPHA=0)
pub const RECOMMENDED_MODE: embedded_hal::spi::Mode = embedded_hal::spi::MODE_0;

/// Maximum SPI clock the panels are specified for
pub const MAX_SCLK_HZ: u32 = 2_000_000;

/// Trait for the transport session to a Sharp memory panel
///
/// This trait abstracts over different hardware arrangements, allowing the
/// [`Display`](crate::display::Display) to work with any transport that can
/// hold an exclusive, ordered byte session open across a whole frame.
///
/// The display's internal shift register is loaded while CS is asserted and
/// latched when it falls; implementations must not release the session
/// between [`begin_frame`](Self::begin_frame) and
/// [`end_frame`](Self::end_frame), and must deliver writes in order.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this
/// trait yourself if your CS line is inverted in hardware, shared through an
/// expander, or otherwise needs custom handling.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Open a frame session (assert chip select)
    ///
    /// # Errors
    ///
    /// Returns an error if the select line cannot be driven.
    fn begin_frame(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Send bytes within the open session
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication fails.
    fn write(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Close the frame session (complete transmission, deassert chip select)
    ///
    /// The implementation must guarantee every byte has left the bus before
    /// the select line drops.
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn end_frame(&mut self) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface implementation over `embedded-hal` v1.0 traits
///
/// ## Type Parameters
///
/// * `SPI` - Exclusive SPI bus implementing [`SpiBus`]
/// * `CS` - Chip select pin implementing [`OutputPin`] (active high)
///
/// Construction drives the select line to its defined initial state once;
/// frames then toggle it per session.
pub struct Interface<SPI, CS> {
    /// SPI bus for communication (MOSI/SCK)
    spi: SPI,
    /// Chip select pin (active high, latches on fall)
    cs: CS,
}

impl<SPI, CS> Interface<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI bus (must implement [`SpiBus`])
    /// * `cs` - Chip select pin (output, active high)
    ///
    /// The select line is raised to its defined initial state here; as with
    /// other one-shot pin setup, a failure on this first edge is ignored and
    /// will resurface on the first frame.
    pub fn new(spi: SPI, mut cs: CS) -> Self {
        let _ = cs.set_high();
        Self { spi, cs }
    }

    /// Release the bus and pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> DisplayInterface for Interface<SPI, CS>
where
    SPI: SpiBus,
    SPI::Error: Debug,
    CS: OutputPin,
    CS::Error: Debug,
{
    type Error = InterfaceError<SPI::Error, CS::Error>;

    fn begin_frame(&mut self) -> InterfaceResult<(), Self::Error> {
        self.cs.set_high().map_err(InterfaceError::Pin)
    }

    fn write(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.spi.write(data).map_err(InterfaceError::Spi)
    }

    fn end_frame(&mut self) -> InterfaceResult<(), Self::Error> {
        // The panel latches on the falling CS edge; drain the bus first.
        self.spi.flush().map_err(InterfaceError::Spi)?;
        self.cs.set_low().map_err(InterfaceError::Pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use core::convert::Infallible;

    #[derive(Debug, PartialEq, Clone)]
    enum Event {
        CsHigh,
        CsLow,
        Write(Vec<u8>),
        Flush,
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct LoggedSpi(Log);

    impl embedded_hal::spi::ErrorType for LoggedSpi {
        type Error = Infallible;
    }

    impl SpiBus for LoggedSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Event::Write(words.to_vec()));
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Event::Flush);
            Ok(())
        }
    }

    struct LoggedPin(Log);

    impl embedded_hal::digital::ErrorType for LoggedPin {
        type Error = Infallible;
    }

    impl OutputPin for LoggedPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Event::CsLow);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.0.borrow_mut().push(Event::CsHigh);
            Ok(())
        }
    }

    #[test]
    fn test_construction_raises_select_line() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let _interface = Interface::new(LoggedSpi(Rc::clone(&log)), LoggedPin(Rc::clone(&log)));
        assert_eq!(log.borrow().as_slice(), &[Event::CsHigh]);
    }

    #[test]
    fn test_frame_session_brackets_writes_and_flushes_before_release() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let mut interface =
            Interface::new(LoggedSpi(Rc::clone(&log)), LoggedPin(Rc::clone(&log)));
        log.borrow_mut().clear();

        interface.begin_frame().unwrap();
        interface.write(&[0xC0]).unwrap();
        interface.write(&[0x80, 0x00]).unwrap();
        interface.end_frame().unwrap();

        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::CsHigh,
                Event::Write(alloc::vec![0xC0]),
                Event::Write(alloc::vec![0x80, 0x00]),
                Event::Flush,
                Event::CsLow,
            ]
        );
    }

    #[test]
    fn test_release_returns_peripherals() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let interface = Interface::new(LoggedSpi(Rc::clone(&log)), LoggedPin(Rc::clone(&log)));
        let (_spi, mut cs) = interface.release();
        cs.set_low().unwrap();
        assert_eq!(log.borrow().last(), Some(&Event::CsLow));
    }

    #[test]
    fn test_recommended_bus_parameters() {
        assert_eq!(RECOMMENDED_MODE, embedded_hal::spi::MODE_0);
        assert_eq!(MAX_SCLK_HZ, 2_000_000);
    }
}
