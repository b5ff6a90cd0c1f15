//! Three-position selector switch
//!
//! Two inputs with pull-ups; the lever grounds one, the other or neither:
//!
//! ```text
//! lever    second  first   reading
//! up          0      1     Up     (0b01)
//! center      1      1     Middle (0b11)
//! down        1      0     Down   (0b10)
//! ```
//!
//! Sampling and debounce policy come from rotclock-core; this type owns the
//! pins and delivers accepted changes to a listener.

use rotclock_core::switch::{Debouncer, SwitchReading};
use rotclock_core::traits::SwitchListener;
use rotclock_hal::{InputPin, PinMode};

/// Debounced selector on two input pins
pub struct SelectorSwitch<P> {
    /// Input sampled as bit 0
    first: P,
    /// Input sampled as bit 1
    second: P,
    debouncer: Debouncer,
    /// Set by `begin`; inputs are not pulled up before that
    primed: bool,
}

impl<P: InputPin> SelectorSwitch<P> {
    /// Create a selector with the default 50ms debounce
    pub fn new(first: P, second: P) -> Self {
        Self {
            first,
            second,
            debouncer: Debouncer::default(),
            primed: false,
        }
    }

    /// Create a selector with a custom debounce interval
    pub fn with_debounce(first: P, second: P, debounce_ms: u32) -> Self {
        Self {
            first,
            second,
            debouncer: Debouncer::new(debounce_ms),
            primed: false,
        }
    }

    /// Configure the inputs and report the starting position
    ///
    /// The first read bypasses debounce and is always delivered to the
    /// listener, so it can derive its initial state before the first poll.
    pub fn begin<L: SwitchListener>(&mut self, now_ms: u32, listener: &mut L) -> SwitchReading {
        self.first.configure(PinMode::InputPullUp);
        self.second.configure(PinMode::InputPullUp);

        let reading = self.sample();
        self.debouncer.prime(now_ms, reading);
        self.primed = true;

        #[cfg(feature = "defmt")]
        defmt::info!("Selector initial position: {:?}", reading);

        listener.on_switch_change(reading);
        reading
    }

    /// Sample the inputs if the debounce window allows it
    ///
    /// Calls the listener and returns the reading only when a change is
    /// accepted. Does nothing until [`begin`](Self::begin) has run.
    pub fn poll<L: SwitchListener>(
        &mut self,
        now_ms: u32,
        listener: &mut L,
    ) -> Option<SwitchReading> {
        if !self.primed || self.debouncer.is_settling(now_ms) {
            return None;
        }

        let reading = self.debouncer.offer(now_ms, self.sample())?;

        #[cfg(feature = "defmt")]
        defmt::debug!("Selector moved: {:?}", reading);

        listener.on_switch_change(reading);
        Some(reading)
    }

    /// Last accepted reading
    pub fn reading(&self) -> SwitchReading {
        self.debouncer.accepted()
    }

    /// Debounce interval in milliseconds
    pub fn debounce_ms(&self) -> u32 {
        self.debouncer.interval_ms()
    }

    fn sample(&self) -> SwitchReading {
        SwitchReading::from_levels(self.first.is_high(), self.second.is_high())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use rotclock_hal::ConfigurePin;

    /// Input whose level the test can change while the switch owns it
    struct MockInput<'a> {
        level: &'a Cell<bool>,
        mode: Option<PinMode>,
    }

    impl<'a> MockInput<'a> {
        fn new(level: &'a Cell<bool>) -> Self {
            Self { level, mode: None }
        }
    }

    impl ConfigurePin for MockInput<'_> {
        fn configure(&mut self, mode: PinMode) {
            self.mode = Some(mode);
        }
    }

    impl InputPin for MockInput<'_> {
        fn is_high(&self) -> bool {
            self.level.get()
        }
    }

    /// Records every notification
    #[derive(Default)]
    struct Recorder {
        calls: u32,
        last: Option<SwitchReading>,
    }

    impl SwitchListener for Recorder {
        fn on_switch_change(&mut self, reading: SwitchReading) {
            self.calls += 1;
            self.last = Some(reading);
        }
    }

    fn set(first: &Cell<bool>, second: &Cell<bool>, reading: SwitchReading) {
        first.set(reading.bits() & 0b01 != 0);
        second.set(reading.bits() & 0b10 != 0);
    }

    #[test]
    fn test_begin_reports_initial_position() {
        let (a, b) = (Cell::new(false), Cell::new(false));
        set(&a, &b, SwitchReading::Middle);
        let mut switch = SelectorSwitch::new(MockInput::new(&a), MockInput::new(&b));
        let mut recorder = Recorder::default();

        let reading = switch.begin(0, &mut recorder);

        assert_eq!(reading, SwitchReading::Middle);
        assert_eq!(switch.reading(), SwitchReading::Middle);
        assert_eq!(recorder.calls, 1);
        assert_eq!(recorder.last, Some(SwitchReading::Middle));
        assert_eq!(switch.first.mode, Some(PinMode::InputPullUp));
        assert_eq!(switch.second.mode, Some(PinMode::InputPullUp));
    }

    #[test]
    fn test_silent_until_begin() {
        let (a, b) = (Cell::new(false), Cell::new(false));
        set(&a, &b, SwitchReading::Up);
        let mut switch = SelectorSwitch::new(MockInput::new(&a), MockInput::new(&b));
        let mut recorder = Recorder::default();

        assert_eq!(switch.poll(0, &mut recorder), None);
        assert_eq!(switch.poll(1_000, &mut recorder), None);
        assert_eq!(recorder.calls, 0);
        assert_eq!(switch.reading(), SwitchReading::Undefined);
        assert_eq!(switch.first.mode, None);

        switch.begin(2_000, &mut recorder);
        assert_eq!(recorder.calls, 1);
        set(&a, &b, SwitchReading::Middle);
        assert_eq!(switch.poll(2_050, &mut recorder), Some(SwitchReading::Middle));
    }

    #[test]
    fn test_no_read_inside_window() {
        let (a, b) = (Cell::new(false), Cell::new(false));
        set(&a, &b, SwitchReading::Up);
        let mut switch = SelectorSwitch::new(MockInput::new(&a), MockInput::new(&b));
        let mut recorder = Recorder::default();
        switch.begin(100, &mut recorder);

        set(&a, &b, SwitchReading::Down);
        assert_eq!(switch.poll(140, &mut recorder), None);
        assert_eq!(recorder.calls, 1);

        assert_eq!(switch.poll(150, &mut recorder), Some(SwitchReading::Down));
        assert_eq!(recorder.calls, 2);
    }

    #[test]
    fn test_bounce_triggers_once() {
        let (a, b) = (Cell::new(false), Cell::new(false));
        set(&a, &b, SwitchReading::Middle);
        let mut switch = SelectorSwitch::new(MockInput::new(&a), MockInput::new(&b));
        let mut recorder = Recorder::default();
        switch.begin(0, &mut recorder);

        // Lever lands on Down at 1000ms, contacts chatter every 10ms
        let chatter = [
            (1000, SwitchReading::Down),
            (1010, SwitchReading::Middle),
            (1020, SwitchReading::Down),
            (1030, SwitchReading::Middle),
            (1040, SwitchReading::Down),
        ];
        for (now, reading) in chatter {
            set(&a, &b, reading);
            switch.poll(now, &mut recorder);
        }

        assert_eq!(recorder.calls, 2);
        assert_eq!(recorder.last, Some(SwitchReading::Down));

        // Settled; no re-confirmation callbacks
        for now in (1100..2000).step_by(7) {
            assert_eq!(switch.poll(now, &mut recorder), None);
        }
        assert_eq!(recorder.calls, 2);
    }

    #[test]
    fn test_custom_debounce() {
        let (a, b) = (Cell::new(false), Cell::new(false));
        set(&a, &b, SwitchReading::Up);
        let mut switch =
            SelectorSwitch::with_debounce(MockInput::new(&a), MockInput::new(&b), 200);
        let mut calls = 0;
        let mut listener = |_reading: SwitchReading| calls += 1;
        switch.begin(0, &mut listener);

        set(&a, &b, SwitchReading::Middle);
        assert_eq!(switch.poll(199, &mut listener), None);
        assert_eq!(switch.poll(200, &mut listener), Some(SwitchReading::Middle));
        assert_eq!(switch.debounce_ms(), 200);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_undefined_is_still_a_state() {
        let (a, b) = (Cell::new(false), Cell::new(false));
        set(&a, &b, SwitchReading::Up);
        let mut switch = SelectorSwitch::new(MockInput::new(&a), MockInput::new(&b));
        let mut recorder = Recorder::default();
        switch.begin(0, &mut recorder);

        set(&a, &b, SwitchReading::Undefined);
        assert_eq!(
            switch.poll(60, &mut recorder),
            Some(SwitchReading::Undefined)
        );
        assert_eq!(switch.reading(), SwitchReading::Undefined);
    }
}
