//! A standalone interpreter for the Zilog Z80 CPU.
//!
//! This crate models only the processor: its registers, its instruction
//! set, and its interrupt-acknowledgement sequence. It does not own memory
//! or peripherals — both are supplied by the host through the [`Memory`]
//! and [`Ports`] traits, one call at a time, so the same [`Cpu`] can drive a
//! flat RAM image in a unit test or a banked, memory-mapped machine in a
//! full system emulator without any change to this crate.
//!
//! ```
//! use z80_core::{Cpu, FlatMemory, Memory};
//!
//! let mut cpu = Cpu::new();
//! let mut mem = FlatMemory::new();
//! mem.load(0, &[0x3E, 0x2A]); // LD A,0x2A
//! cpu.step(&mut mem);
//! assert_eq!(cpu.a, 0x2A);
//! ```

pub mod cpu;
pub mod io;
pub mod memory;

pub use cpu::{Cpu, Im};
pub use io::{NullPorts, Ports};
pub use memory::{FlatMemory, Memory};
