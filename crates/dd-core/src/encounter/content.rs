//! Narrative content used by encounters: the Mad Scientist's openers and
//! the riddle pool. The core only needs uniform selection and normalized
//! answer comparison; the strings themselves are data.

/// Nonsense the Mad Scientist greets the player with.
pub const SCIENCE_OPENERS: [&str; 6] = [
    "Behold! The quantum entanglement paradox of hyper-space atoms!",
    "Ah, yes! The bifurcating nuclei of the plasmonic resonance are upon us!",
    "Aha! My flux capacitor is in perfect harmony with the neutrino wave!",
    "Did you know that photons can polarize to infinity under an antimatter ray?",
    "Ah, I\u{2019}ve perfected the infinite vacuum instability of antimatter vortices!",
    "Behold my latest experiment! Transdimensional ionic bonding in action!",
];

/// A riddle with its accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Riddle {
    pub question: &'static str,
    pub answer: &'static str,
}

impl Riddle {
    /// Case-insensitive, whitespace-trimmed answer check.
    pub fn accepts(&self, input: &str) -> bool {
        input.trim().eq_ignore_ascii_case(self.answer)
    }
}

pub const RIDDLES: [Riddle; 10] = [
    Riddle {
        question: "What has to be broken before you can use it?",
        answer: "egg",
    },
    Riddle {
        question: "I\u{2019}m tall when I\u{2019}m young, and I\u{2019}m short when I\u{2019}m old. What am I?",
        answer: "candle",
    },
    Riddle {
        question: "What has hands but can\u{2019}t clap?",
        answer: "clock",
    },
    Riddle {
        question: "What can you catch but not throw?",
        answer: "cold",
    },
    Riddle {
        question: "What has a head, a tail, is brown, and has no legs?",
        answer: "penny",
    },
    Riddle {
        question: "I\u{2019}m light as a feather, yet the strongest man can\u{2019}t hold me for long. What am I?",
        answer: "breath",
    },
    Riddle {
        question: "What comes down but never goes up?",
        answer: "rain",
    },
    Riddle {
        question: "What has many keys but can\u{2019}t open a single lock?",
        answer: "piano",
    },
    Riddle {
        question: "What has one eye but can\u{2019}t see?",
        answer: "needle",
    },
    Riddle {
        question: "What has roots as nobody sees, is taller than trees, up, up it goes, and yet it never grows?",
        answer: "mountain",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_are_normalized() {
        let riddle = RIDDLES[0];
        assert!(riddle.accepts("egg"));
        assert!(riddle.accepts("  EGG "));
        assert!(riddle.accepts("Egg"));
        assert!(!riddle.accepts("omelette"));
    }

    #[test]
    fn pool_is_populated() {
        assert!(!SCIENCE_OPENERS.is_empty());
        assert!(RIDDLES.iter().all(|r| !r.answer.is_empty()));
    }
}
