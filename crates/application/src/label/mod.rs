pub mod sequencer;

pub use sequencer::LabelSequencer;
