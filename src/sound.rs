//! Collision cue.
//!
//! Audio is best effort: when no output device can be opened the session
//! gets a `Silent` cue, and a beep that fails to queue is dropped.  Neither
//! case is ever reported to the game loop.

use std::time::Duration;

use log::{debug, warn};
use rodio::source::SineWave;
use rodio::{OutputStream, OutputStreamHandle, Source, StreamError};

/// 44.1 kHz samples of `sin(0.1 * i)`: roughly a 702 Hz tone.
const BEEP_HZ: f32 = 702.0;
const BEEP_LENGTH: Duration = Duration::from_secs(1);
const BEEP_VOLUME: f32 = 0.5;

/// A fire-and-forget sound trigger.
pub trait Cue {
    fn play(&mut self);
}

/// No-op cue used when audio is unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Cue for Silent {
    fn play(&mut self) {}
}

/// Sine beep on the default audio output.
pub struct Beep {
    // Playback stops once the stream is dropped
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Beep {
    pub fn open() -> Result<Self, StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }
}

impl Cue for Beep {
    fn play(&mut self) {
        let tone = SineWave::new(BEEP_HZ)
            .take_duration(BEEP_LENGTH)
            .amplify(BEEP_VOLUME);
        if let Err(err) = self.handle.play_raw(tone) {
            debug!("collision beep dropped: {err}");
        }
    }
}

/// Pick the best cue available on this machine.
pub fn select_cue() -> Box<dyn Cue> {
    match Beep::open() {
        Ok(beep) => Box::new(beep),
        Err(err) => {
            warn!("audio output unavailable ({err}); collision sound disabled");
            Box::new(Silent)
        }
    }
}
