mod sequencer;

#[cfg(test)]
mod tests;

pub use sequencer::build_frames;
