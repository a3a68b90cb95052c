//! Reservation numbering and client-name memory.

mod sequencer;

pub use sequencer::{format_reservation_number, ReservationSequencer, ReservationSequencerTrait};
