pub const PHRASES: &[&str] = &[
    "Frontend Developer",
    "3D Artist",
    "UI/UX Designer",
    "Creative Coder",
    "Content Writer",
];

pub const START_DELAY_MS: u32 = 1000;
pub const TYPE_DELAY_MS: u32 = 150;
pub const DELETE_DELAY_MS: u32 = 75;
pub const FULL_PAUSE_MS: u32 = 1500;
pub const EMPTY_PAUSE_MS: u32 = 500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub next_delay_ms: u32,
}

/// Typing/deleting cursor over a cyclic phrase list.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            phrase_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    #[cfg(test)]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    fn current_len(&self) -> usize {
        self.phrases
            .get(self.phrase_index)
            .map(|phrase| phrase.chars().count())
            .unwrap_or(0)
    }

    /// Advances one character and returns the text to show plus the delay
    /// before the next tick.
    pub fn tick(&mut self) -> Frame {
        let len = self.current_len();
        if len == 0 {
            self.advance_phrase();
            return Frame {
                text: String::new(),
                next_delay_ms: EMPTY_PAUSE_MS,
            };
        }

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        let text = self.phrases[self.phrase_index]
            .chars()
            .take(self.char_index)
            .collect();

        let next_delay_ms = if !self.deleting && self.char_index == len {
            self.deleting = true;
            FULL_PAUSE_MS
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.advance_phrase();
            EMPTY_PAUSE_MS
        } else if self.deleting {
            DELETE_DELAY_MS
        } else {
            TYPE_DELAY_MS
        };

        Frame {
            text,
            next_delay_ms,
        }
    }

    fn advance_phrase(&mut self) {
        if self.phrases.is_empty() {
            return;
        }
        self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(PHRASES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(typewriter: &mut Typewriter, ticks: usize) -> Vec<Frame> {
        (0..ticks).map(|_| typewriter.tick()).collect()
    }

    #[test]
    fn types_then_deletes_each_phrase_in_order() {
        let phrases = ["Frontend Developer", "3D Artist"];
        let mut typewriter = Typewriter::new(phrases);
        let mut expected = Vec::new();
        for _ in 0..2 {
            for phrase in phrases {
                let chars: Vec<char> = phrase.chars().collect();
                for n in 1..=chars.len() {
                    expected.push(chars[..n].iter().collect::<String>());
                }
                for n in (0..chars.len()).rev() {
                    expected.push(chars[..n].iter().collect::<String>());
                }
            }
        }
        let frames = run(&mut typewriter, expected.len());
        let texts: Vec<String> = frames.into_iter().map(|frame| frame.text).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn delays_follow_the_typing_rhythm() {
        let mut typewriter = Typewriter::new(["abc"]);
        let delays: Vec<u32> = run(&mut typewriter, 7)
            .into_iter()
            .map(|frame| frame.next_delay_ms)
            .collect();
        assert_eq!(
            delays,
            vec![
                TYPE_DELAY_MS,
                TYPE_DELAY_MS,
                FULL_PAUSE_MS,
                DELETE_DELAY_MS,
                DELETE_DELAY_MS,
                EMPTY_PAUSE_MS,
                TYPE_DELAY_MS,
            ]
        );
    }

    #[test]
    fn never_exceeds_current_phrase() {
        let mut typewriter = Typewriter::default();
        for _ in 0..500 {
            let phrase = PHRASES[typewriter.phrase_index()];
            let frame = typewriter.tick();
            assert!(phrase.starts_with(&frame.text));
        }
    }

    #[test]
    fn wraps_from_last_phrase_to_first() {
        let mut typewriter = Typewriter::new(["a", "b"]);
        let texts: Vec<String> = run(&mut typewriter, 6)
            .into_iter()
            .map(|frame| frame.text)
            .collect();
        assert_eq!(texts, vec!["a", "", "b", "", "a", ""]);
        assert_eq!(typewriter.phrase_index(), 1);
    }
}
