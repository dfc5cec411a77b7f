pub mod journey;

pub use journey::{EntryPatch, JourneyEntry, NewEntry, Profile, Theme};
