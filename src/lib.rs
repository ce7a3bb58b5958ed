// textmood: a kid-friendly text mood detector.
//
// This is the library root. A sentence passes a length check and a profanity
// gate, gets a polarity score, and comes out as one of three moods.

pub mod config;
pub mod explain;
pub mod mood;
pub mod output;
pub mod safety;
pub mod sentiment;
pub mod status;

#[cfg(feature = "web")]
pub mod web;
