//! `RunStats` simply tracks round and selection counts without any logging
//! or persistence. Reporting happens on demand.

#[derive(Debug, Clone, PartialEq)]
pub struct RunStats {
    pub rounds: u64,
    pub spelling_selected: u64,
    pub sound_selected: u64,
    pub input_words: u64,
    pub blocked_words: u64,
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            rounds: 0,
            spelling_selected: 0,
            sound_selected: 0,
            input_words: 0,
            blocked_words: 0,
        }
    }

    pub fn tick_round(&mut self, spelling: u64, sound: u64, inputs: u64) {
        self.rounds += 1;
        self.spelling_selected += spelling;
        self.sound_selected += sound;
        self.input_words += inputs;
    }

    pub fn set_blocked(&mut self, blocked: u64) {
        self.blocked_words = blocked;
    }

    pub fn report(&self) {
        eprintln!(
            "Processed {} rounds, selected: spelling {}, sound {}, inputs {}, blocked {}",
            self.rounds,
            self.spelling_selected,
            self.sound_selected,
            self.input_words,
            self.blocked_words
        );
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}
