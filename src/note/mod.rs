//! Equal-tempered note naming.
//!
//! Frequencies map to the nearest MIDI note number with A4 = 440 Hz as
//! MIDI note 69:
//!
//! > midi = round(12 * log2(f / 440)) + 69
//!
//! Pitch classes are spelled with sharps and octaves follow the MIDI
//! convention, so MIDI note 0 is `C-1` and middle C (MIDI 60) is `C4`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::float::Float;

/// Frequency of A4 in Hz.
pub const A4_HZ: f64 = 440.0;
/// MIDI note number of A4.
pub const MIDI_A4: i32 = 69;

const SEMITONES: i32 = 12;

/// One of the twelve semitones within an octave, starting at C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Pitch class of a semitone index. Any integer is reduced modulo 12.
    pub fn from_index(index: i32) -> Self {
        PitchClass::ALL[index.rem_euclid(SEMITONES) as usize]
    }

    /// Semitones above C, in `0..12`.
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Sharp spelling, e.g. `"F#"`.
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = Error;

    /// Accepts a letter `A`..`G` (either case) followed by an optional `#` or `b`.
    fn from_str(s: &str) -> Result<Self> {
        semitone_offset(s)
            .map(PitchClass::from_index)
            .ok_or_else(|| Error::InvalidNoteName(s.to_string()))
    }
}

/// Semitones above C of a spelled pitch class, in `-1..=12` (`Cb` is -1, `B#` is 12).
fn semitone_offset(s: &str) -> Option<i32> {
    let mut chars = s.chars();
    let natural = match chars.next()?.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };
    let accidental = match chars.as_str() {
        "" => 0,
        "#" => 1,
        "b" => -1,
        _ => return None,
    };
    Some(natural + accidental)
}

/// A pitch class and a MIDI-convention octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteName {
    pub octave: i32,
    pub pitch_class: PitchClass,
}

impl NoteName {
    pub fn new(pitch_class: PitchClass, octave: i32) -> Self {
        NoteName {
            octave,
            pitch_class,
        }
    }

    /// Nearest equal-tempered note to `frequency` (Hz).
    ///
    /// Fails unless `frequency` is finite and strictly positive.
    pub fn from_frequency<T: Float>(frequency: T) -> Result<Self> {
        fractional_midi(frequency).map(|midi| NoteName::from_midi(midi.round() as i32))
    }

    pub fn from_midi(midi: i32) -> Self {
        NoteName {
            octave: midi.div_euclid(SEMITONES) - 1,
            pitch_class: PitchClass::from_index(midi),
        }
    }

    /// MIDI note number. Octaves too far from 0 to have an `i32` MIDI number
    /// saturate to `i32::MIN` or `i32::MAX`.
    pub fn midi(&self) -> i32 {
        let midi = self.wide_midi();
        i32::try_from(midi).unwrap_or(if midi < 0 { i32::MIN } else { i32::MAX })
    }

    /// MIDI note number without overflow for any octave.
    fn wide_midi(&self) -> i64 {
        (i64::from(self.octave) + 1) * i64::from(SEMITONES) + i64::from(self.pitch_class.index())
    }

    /// Equal-tempered frequency of this note in Hz.
    pub fn frequency(&self) -> f64 {
        let semitones = (self.wide_midi() - i64::from(MIDI_A4)) as f64;
        A4_HZ * 2f64.powf(semitones / f64::from(SEMITONES))
    }

    /// Signed distance from this note to `frequency`, in cents.
    /// Positive means `frequency` is sharp.
    pub fn cents_offset<T: Float>(&self, frequency: T) -> Result<f64> {
        fractional_midi(frequency).map(|midi| (midi - self.wide_midi() as f64) * 100.0)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

impl FromStr for NoteName {
    type Err = Error;

    /// Parses names such as `"A4"`, `"C#3"`, `"Bb2"` or `"G-1"`. Flats are
    /// read as their enharmonic sharp, so `"Cb4"` is `B3`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidNoteName(s.to_string());
        let split = s
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .ok_or_else(invalid)?;
        let (class, octave) = s.split_at(split);
        let offset = semitone_offset(class).ok_or_else(invalid)?;
        let octave: i32 = octave.parse().map_err(|_| invalid())?;
        let midi = octave
            .checked_add(1)
            .and_then(|o| o.checked_mul(SEMITONES))
            .and_then(|m| m.checked_add(offset))
            .ok_or_else(invalid)?;
        Ok(NoteName::from_midi(midi))
    }
}

/// Nearest note name to `frequency` (Hz). See [NoteName::from_frequency].
pub fn name_of<T: Float>(frequency: T) -> Result<NoteName> {
    NoteName::from_frequency(frequency)
}

/// Unrounded MIDI note number of `frequency`.
fn fractional_midi<T: Float>(frequency: T) -> Result<f64> {
    let hz = frequency.to_f64().unwrap_or(f64::NAN);
    if !(hz.is_finite() && hz > 0.0) {
        return Err(Error::InvalidFrequency(hz));
    }
    Ok(f64::from(SEMITONES) * (hz / A4_HZ).log2() + f64::from(MIDI_A4))
}
