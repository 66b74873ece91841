/// The scrubbable virtual clock driving the grid animation.
///
/// Time is measured in seconds relative to the timeline origin and bounded to
/// `[0, max_time]`. The clock only advances when a caller drives `tick`; it
/// carries no timer of its own, so teardown is the caller's problem.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    time: f64,
    speed: f64,
    playing: bool,
    max_time: f64,
    reset_pending: bool,
}

impl SimulationClock {
    /// Creates a paused clock at time 0 with the given upper bound.
    pub fn new(max_time: f64) -> Self {
        Self {
            time: 0.0,
            speed: 1.0,
            playing: false,
            max_time: max_time.max(0.0),
            reset_pending: false,
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Sets the speed multiplier. The accepted range is loosely [0.1, 10];
    /// out-of-range values are used as given.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Advances the clock by one period while playing. Clamps to the upper
    /// bound and stops playback upon reaching it.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        self.time = (self.time + self.speed).min(self.max_time);
        if self.time >= self.max_time {
            self.playing = false;
        }
    }

    /// Manual scrub by `delta` seconds, clamped to the bounds. Does not
    /// affect playback.
    pub fn step(&mut self, delta: f64) {
        self.time = (self.time + delta).clamp(0.0, self.max_time);
    }

    /// Rewinds to 0, stops playback, and arms the transient reset flag.
    pub fn reset(&mut self) {
        self.time = 0.0;
        self.playing = false;
        self.reset_pending = true;
    }

    /// Consumes the reset flag armed by [`reset`](Self::reset). Returns true
    /// exactly once per reset.
    pub fn take_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_pending)
    }
}
