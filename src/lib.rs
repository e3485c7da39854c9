//! # Fret Pitch
//! *fret_pitch* is the listening core of an instrument-practice tool. It estimates
//! the fundamental frequency of a monophonic window of audio and names the
//! nearest equal-tempered note, so a trainer can check whether the player hit
//! the target note.
//!
//! # Detectors
//! A *detector* turns a window of samples into a [DetectionResult]. Detectors own
//! their scratch buffers, so a capture loop should create one and reuse it.
//!
//!   * [AutocorrelationDetector][detector::autocorrelation]
//!
//! # Note names
//! [note::name_of] maps a frequency to a [NoteName] such as `A4` or `C#3`.
//!
//! # Examples
//! ```
//! use fret_pitch::detector::autocorrelation::AutocorrelationDetector;
//! use fret_pitch::detector::PitchDetector;
//! use fret_pitch::NoteName;
//!
//! fn main() -> fret_pitch::Result<()> {
//!     const SAMPLE_RATE: usize = 44100;
//!     const SIZE: usize = 2048;
//!
//!     // Signal coming from some source (microphone, generated, etc...)
//!     let dt = 1.0 / SAMPLE_RATE as f64;
//!     let freq = 220.0;
//!     let signal: Vec<f64> = (0..SIZE)
//!         .map(|x| (2.0 * std::f64::consts::PI * x as f64 * dt * freq).sin())
//!         .collect();
//!
//!     let mut detector = AutocorrelationDetector::new(SIZE);
//!     let result = detector.get_pitch(&signal, SAMPLE_RATE)?;
//!
//!     let target: NoteName = "A3".parse()?;
//!     assert_eq!(result.note_name(), Some(target));
//!     Ok(())
//! }
//! ```

pub use detector::DetectionResult;
pub use error::{Error, Result};
pub use note::{NoteName, PitchClass};

pub mod detector;
pub mod error;
pub mod float;
pub mod note;
pub mod utils;
