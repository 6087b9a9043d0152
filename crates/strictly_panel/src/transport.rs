//! Shift-register display transport.
//!
//! Each LED has a red and a green drive line, so the nine tiles need 18
//! outputs spread across a daisy chain of 8-bit serial-in/parallel-out
//! registers. Tile `i` drives its red line from chain bit `2i` and its
//! green line from bit `2i + 1`; register 0 (nearest the controller) holds
//! bits 0-7.

use crate::TransportError;
use strictly_ledgame::{DrivePair, Frame, Position};
use tracing::{instrument, trace};

const DRIVE_LINES: usize = 2 * Position::ALL.len();

/// Sends frames to the physical display.
pub trait Transport {
    /// Latches `frame` onto the LEDs.
    fn send(&mut self, frame: &Frame) -> Result<(), TransportError>;

    /// Turns every LED off.
    fn blank(&mut self) -> Result<(), TransportError> {
        self.send(&Frame::BLANK)
    }
}

/// Bit layout of a register chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRegisterChain {
    registers: usize,
}

impl ShiftRegisterChain {
    /// Describes a chain of `registers` 8-bit registers.
    ///
    /// Fails when the chain has fewer outputs than the 18 drive lines.
    #[instrument]
    pub fn new(registers: usize) -> Result<Self, TransportError> {
        let outputs = registers.checked_mul(8).ok_or_else(|| {
            TransportError::new(format!("{} registers overflow the output count", registers))
        })?;
        if outputs < DRIVE_LINES {
            return Err(TransportError::new(format!(
                "{} registers provide {} outputs, {} needed",
                registers, outputs, DRIVE_LINES
            )));
        }
        Ok(Self { registers })
    }

    /// Number of registers in the chain.
    pub fn registers(&self) -> usize {
        self.registers
    }

    /// Packs a frame into register bytes, register 0 first.
    pub fn pack(&self, frame: &Frame) -> Vec<u8> {
        let mut bytes = vec![0u8; self.registers];
        for (i, pair) in frame.pairs().iter().enumerate() {
            for (bit, on) in [(2 * i, pair.red), (2 * i + 1, pair.green)] {
                if on {
                    bytes[bit / 8] |= 1 << (bit % 8);
                }
            }
        }
        bytes
    }

    /// Recovers a frame from register bytes, register 0 first.
    pub fn unpack(&self, bytes: &[u8]) -> Result<Frame, TransportError> {
        if bytes.len() != self.registers {
            return Err(TransportError::new(format!(
                "Expected {} register bytes, got {}",
                self.registers,
                bytes.len()
            )));
        }
        let bit = |n: usize| bytes[n / 8] & (1 << (n % 8)) != 0;
        let mut pairs = [DrivePair::OFF; 9];
        for (i, pair) in pairs.iter_mut().enumerate() {
            *pair = DrivePair {
                red: bit(2 * i),
                green: bit(2 * i + 1),
            };
        }
        Ok(Frame::from_pairs(pairs))
    }
}

/// The three control lines of a shift-register chain.
pub trait OutputPins {
    /// Drives the serial data line.
    fn write_data(&mut self, high: bool);

    /// Clocks one bit into the chain.
    fn pulse_clock(&mut self);

    /// Copies the shifted bits to the outputs.
    fn pulse_latch(&mut self);
}

/// Bit-bangs packed frames through a set of [`OutputPins`].
#[derive(Debug)]
pub struct BitBangTransport<P> {
    chain: ShiftRegisterChain,
    pins: P,
}

impl<P: OutputPins> BitBangTransport<P> {
    /// Creates a transport driving `pins`.
    pub fn new(chain: ShiftRegisterChain, pins: P) -> Self {
        Self { chain, pins }
    }

    /// The chain layout.
    pub fn chain(&self) -> ShiftRegisterChain {
        self.chain
    }

    /// The pins being driven.
    pub fn pins(&self) -> &P {
        &self.pins
    }
}

impl<P: OutputPins> Transport for BitBangTransport<P> {
    fn send(&mut self, frame: &Frame) -> Result<(), TransportError> {
        let bytes = self.chain.pack(frame);
        trace!(?bytes, "Shifting frame");
        // The first byte shifted travels to the far end of the chain.
        for byte in bytes.iter().rev() {
            for bit in (0..8).rev() {
                self.pins.write_data(byte & (1 << bit) != 0);
                self.pins.pulse_clock();
            }
        }
        self.pins.pulse_latch();
        Ok(())
    }
}

/// A software model of a chain of 8-bit shift registers.
#[derive(Debug, Clone)]
pub struct SimulatedPins {
    data: bool,
    shift: Vec<u8>,
    latched: Vec<u8>,
    latches: usize,
}

impl SimulatedPins {
    /// Creates `registers` cleared registers.
    pub fn new(registers: usize) -> Self {
        Self {
            data: false,
            shift: vec![0; registers],
            latched: vec![0; registers],
            latches: 0,
        }
    }

    /// Register outputs as of the last latch, register 0 first.
    pub fn latched(&self) -> &[u8] {
        &self.latched
    }

    /// How many times the outputs have been latched.
    pub fn latch_count(&self) -> usize {
        self.latches
    }
}

impl OutputPins for SimulatedPins {
    fn write_data(&mut self, high: bool) {
        self.data = high;
    }

    fn pulse_clock(&mut self) {
        // Each register's top bit carries into the next register down the chain.
        let mut carry = self.data;
        for register in self.shift.iter_mut() {
            let out = *register & 0x80 != 0;
            *register = (*register << 1) | u8::from(carry);
            carry = out;
        }
    }

    fn pulse_latch(&mut self) {
        self.latched.clone_from(&self.shift);
        self.latches += 1;
    }
}

/// Transport over simulated registers, as used by the terminal and replay modes.
pub type SimulatedTransport = BitBangTransport<SimulatedPins>;

impl SimulatedTransport {
    /// Creates a transport over a freshly cleared simulated chain.
    pub fn simulated(chain: ShiftRegisterChain) -> Self {
        Self::new(chain, SimulatedPins::new(chain.registers()))
    }

    /// What the LEDs currently show.
    pub fn displayed(&self) -> Result<Frame, TransportError> {
        self.chain.unpack(self.pins.latched())
    }
}
