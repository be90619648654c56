//! Game session: the guess lifecycle state machine
//!
//! A session owns the hidden solution, the six guess slots, the letters typed
//! for the guess in progress, and the transient validation notice. Input layers
//! drive it through `append_letter`, `backspace`, `submit_guess` and
//! `new_round`; renderers read it through `rows`.

use super::{MAX_GUESSES, Pattern, WORD_LENGTH, Word};
use crate::wordlists::{WordSource, loader::parse_words};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::fmt;
use std::io;
use std::time::{Duration, Instant};

/// How long a validation notice stays visible
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Notice raised when every tile of a guess holds the same letter
pub const SAME_LETTER_MESSAGE: &str = "You can't use the same letter for all tiles!";

/// Round progress
///
/// There is no `Lost` variant: running out of slots leaves the
/// round `InProgress` with no current slot. Use [`GameSession::outcome`] to
/// tell a lost round from a playable one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Result of a submission that did not fail validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Nothing happened: wrong length, round over, or no round yet
    Ignored,
    /// Guess stored in `slot`; the round goes on
    Accepted { slot: usize, pattern: Pattern },
    /// Guess matched the solution
    Won { guesses: usize },
    /// Guess filled the last slot without matching
    Lost,
}

/// Rejected guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    SameLetter,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SameLetter => write!(f, "{SAME_LETTER_MESSAGE}"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Failures that prevent a round from starting
#[derive(Debug)]
pub enum SessionError {
    EmptyWordList,
    NoWordsLoaded,
    WordSource(io::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "Word list contains no usable words"),
            Self::NoWordsLoaded => write!(f, "No word list has been loaded yet"),
            Self::WordSource(err) => write!(f, "Unable to load word list: {err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WordSource(err) => Some(err),
            _ => None,
        }
    }
}

/// Transient message shown after a rejected guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub raised_at: Instant,
}

impl Notice {
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.raised_at + NOTICE_DURATION
    }
}

/// How a slot should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Submitted(Pattern),
    Current,
    Empty,
}

/// Render-ready view of one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView<'a> {
    pub text: &'a str,
    pub kind: RowKind,
}

/// One player's game: solution, slots, buffer and notice
#[derive(Debug)]
pub struct GameSession {
    rng: StdRng,
    words: Vec<Word>,
    fetched: bool,
    solution: Option<Word>,
    slots: [Option<Word>; MAX_GUESSES],
    buffer: String,
    state: RoundState,
    notice: Option<Notice>,
}

impl GameSession {
    /// Create an idle session; `seed` makes solution selection reproducible
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            rng,
            words: Vec::new(),
            fetched: false,
            solution: None,
            slots: Default::default(),
            buffer: String::with_capacity(WORD_LENGTH),
            state: RoundState::InProgress,
            notice: None,
        }
    }

    /// Fetch the word list once and start the first round
    ///
    /// Returns `Ok(false)` without touching `source` if a fetch was already
    /// attempted, successful or not.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WordSource` if the source fails and
    /// `SessionError::EmptyWordList` if it yields no valid words. The session
    /// then has no solution and ignores all input.
    pub fn load_words(&mut self, source: &dyn WordSource) -> Result<bool, SessionError> {
        if self.fetched {
            return Ok(false);
        }
        self.fetched = true;

        info!("Fetching word list from {}", source.describe());
        let raw = source.fetch_words().map_err(|err| {
            warn!("Word list fetch failed: {err}");
            SessionError::WordSource(err)
        })?;

        let words = parse_words(&raw);
        self.start_round(&words)?;
        Ok(true)
    }

    /// Start a round with a solution drawn uniformly from `words`
    ///
    /// The list is kept for later `new_round` calls.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyWordList` if `words` is empty; the session
    /// is left unchanged.
    pub fn start_round(&mut self, words: &[Word]) -> Result<(), SessionError> {
        if words.is_empty() {
            return Err(SessionError::EmptyWordList);
        }
        self.words = words.to_vec();
        self.new_round()
    }

    /// Start another round from the cached word list
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoWordsLoaded` if no list has been supplied yet.
    pub fn new_round(&mut self) -> Result<(), SessionError> {
        let solution = self
            .words
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SessionError::NoWordsLoaded)?;

        debug!("Solution word: {solution}");
        info!("New round started ({} candidate words)", self.words.len());

        self.solution = Some(solution);
        self.slots = Default::default();
        self.buffer.clear();
        self.state = RoundState::InProgress;
        self.notice = None;
        Ok(())
    }

    /// Add a letter to the guess in progress
    ///
    /// Ignored unless the round is playable, the buffer has room and `ch` is
    /// an ASCII lowercase letter.
    pub fn append_letter(&mut self, ch: char) {
        if self.accepts_input() && self.buffer.len() < WORD_LENGTH && ch.is_ascii_lowercase() {
            self.buffer.push(ch);
        }
    }

    /// Remove the last typed letter, if any
    pub fn backspace(&mut self) {
        if self.accepts_input() {
            self.buffer.pop();
        }
    }

    /// Submit the guess in progress
    ///
    /// # Errors
    ///
    /// Returns `GuessError::SameLetter` when every letter is identical; the
    /// slots and buffer are untouched and a notice is raised, replacing any
    /// earlier one.
    pub fn submit_guess(&mut self) -> Result<Submission, GuessError> {
        if !self.accepts_input() || self.buffer.len() != WORD_LENGTH {
            return Ok(Submission::Ignored);
        }
        let (Some(slot), Some(solution)) = (self.current_slot(), self.solution.as_ref()) else {
            return Ok(Submission::Ignored);
        };
        // Buffer only ever holds lowercase ASCII letters
        let Ok(guess) = Word::new(self.buffer.as_str()) else {
            return Ok(Submission::Ignored);
        };

        if guess.is_uniform() {
            debug!("Rejected uniform guess {guess}");
            self.notice = Some(Notice {
                text: SAME_LETTER_MESSAGE.to_string(),
                raised_at: Instant::now(),
            });
            return Err(GuessError::SameLetter);
        }

        let pattern = Pattern::calculate(&guess, solution);
        debug!("Guess {} in slot {slot}: {}", guess, pattern.to_emoji());

        self.notice = None;
        self.buffer.clear();
        self.slots[slot] = Some(guess);

        if pattern.is_perfect() {
            self.state = RoundState::Won;
            info!("Round won in {} guesses", slot + 1);
            return Ok(Submission::Won { guesses: slot + 1 });
        }
        if slot + 1 == MAX_GUESSES {
            info!("Round lost; all {MAX_GUESSES} slots used");
            return Ok(Submission::Lost);
        }
        Ok(Submission::Accepted { slot, pattern })
    }

    /// Drop the notice once it has been visible for `NOTICE_DURATION`
    pub fn expire_notice(&mut self, now: Instant) {
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| now >= notice.deadline())
        {
            self.notice = None;
        }
    }

    /// The solution for the current round, if one has started
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        self.solution.as_ref()
    }

    #[must_use]
    pub const fn slots(&self) -> &[Option<Word>; MAX_GUESSES] {
        &self.slots
    }

    /// Index of the first empty slot
    #[must_use]
    pub fn current_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// True once a word source has been consulted
    #[must_use]
    pub const fn fetched(&self) -> bool {
        self.fetched
    }

    /// `None` while the round can still be played
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            RoundState::Won => Some(Outcome::Won),
            RoundState::InProgress if self.solution.is_some() && self.current_slot().is_none() => {
                Some(Outcome::Lost)
            }
            RoundState::InProgress => None,
        }
    }

    /// Six rows for the renderer; submitted rows are classified here
    #[must_use]
    pub fn rows(&self) -> Vec<RowView<'_>> {
        let current = if self.accepts_input() {
            self.current_slot()
        } else {
            None
        };

        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| match (slot, self.solution.as_ref()) {
                (Some(guess), Some(solution)) => RowView {
                    text: guess.text(),
                    kind: RowKind::Submitted(Pattern::calculate(guess, solution)),
                },
                _ if Some(i) == current => RowView {
                    text: &self.buffer,
                    kind: RowKind::Current,
                },
                _ => RowView {
                    text: "",
                    kind: RowKind::Empty,
                },
            })
            .collect()
    }

    fn accepts_input(&self) -> bool {
        self.solution.is_some() && self.outcome().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback::{Absent, Correct, Present};
    use crate::wordlists::ListWords;

    struct FailingSource;

    impl WordSource for FailingSource {
        fn fetch_words(&self) -> io::Result<Vec<String>> {
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
        }

        fn describe(&self) -> String {
            "failing source".to_string()
        }
    }

    fn session_with(solution: &str) -> GameSession {
        let mut session = GameSession::new(Some(7));
        session
            .start_round(&[Word::new(solution).unwrap()])
            .unwrap();
        session
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for ch in word.chars() {
            session.append_letter(ch);
        }
    }

    fn guess(session: &mut GameSession, word: &str) -> Result<Submission, GuessError> {
        type_word(session, word);
        session.submit_guess()
    }

    #[test]
    fn start_round_resets_everything() {
        let session = session_with("crane");

        assert_eq!(session.solution().map(Word::text), Some("crane"));
        assert_eq!(session.buffer(), "");
        assert!(session.slots().iter().all(Option::is_none));
        assert_eq!(session.state(), RoundState::InProgress);
        assert_eq!(session.current_slot(), Some(0));
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn start_round_rejects_empty_list() {
        let mut session = GameSession::new(Some(1));
        assert!(matches!(
            session.start_round(&[]),
            Err(SessionError::EmptyWordList)
        ));
        assert!(session.solution().is_none());
    }

    #[test]
    fn new_round_without_words_fails() {
        let mut session = GameSession::new(Some(1));
        assert!(matches!(
            session.new_round(),
            Err(SessionError::NoWordsLoaded)
        ));
    }

    #[test]
    fn start_round_picks_from_list() {
        let words: Vec<Word> = ["crane", "slate", "train"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let mut session = GameSession::new(Some(42));

        for _ in 0..20 {
            session.start_round(&words).unwrap();
            assert!(words.contains(session.solution().unwrap()));
        }
    }

    #[test]
    fn seeded_sessions_agree() {
        let words: Vec<Word> = ["crane", "slate", "train", "audio", "point"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let mut a = GameSession::new(Some(99));
        let mut b = GameSession::new(Some(99));

        for _ in 0..5 {
            a.start_round(&words).unwrap();
            b.start_round(&words).unwrap();
            assert_eq!(a.solution(), b.solution());
        }
    }

    #[test]
    fn input_ignored_before_first_round() {
        let mut session = GameSession::new(None);
        session.append_letter('a');
        assert_eq!(session.buffer(), "");
        assert_eq!(session.submit_guess(), Ok(Submission::Ignored));
    }

    #[test]
    fn append_letter_filters_input() {
        let mut session = session_with("crane");

        session.append_letter('A');
        session.append_letter('1');
        session.append_letter(' ');
        session.append_letter('é');
        assert_eq!(session.buffer(), "");

        type_word(&mut session, "trains");
        assert_eq!(session.buffer(), "train");
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut session = session_with("crane");

        session.backspace();
        assert_eq!(session.buffer(), "");

        type_word(&mut session, "tra");
        session.backspace();
        assert_eq!(session.buffer(), "tr");
    }

    #[test]
    fn submit_ignores_wrong_length() {
        let mut session = session_with("crane");

        assert_eq!(session.submit_guess(), Ok(Submission::Ignored));
        type_word(&mut session, "tra");
        assert_eq!(session.submit_guess(), Ok(Submission::Ignored));

        assert_eq!(session.buffer(), "tra");
        assert_eq!(session.current_slot(), Some(0));
        assert!(session.notice().is_none());
    }

    #[test]
    fn uniform_guess_raises_notice_without_mutation() {
        let mut session = session_with("crane");

        assert_eq!(guess(&mut session, "aaaaa"), Err(GuessError::SameLetter));
        assert!(session.slots().iter().all(Option::is_none));
        assert_eq!(session.buffer(), "aaaaa");
        assert_eq!(
            session.notice().map(|n| n.text.as_str()),
            Some(SAME_LETTER_MESSAGE)
        );
    }

    #[test]
    fn notice_expires_after_duration() {
        let mut session = session_with("crane");
        let _ = guess(&mut session, "zzzzz");
        let raised_at = session.notice().unwrap().raised_at;

        session.expire_notice(raised_at + Duration::from_secs(1));
        assert!(session.notice().is_some());

        session.expire_notice(raised_at + NOTICE_DURATION);
        assert!(session.notice().is_none());
    }

    #[test]
    fn accepted_guess_clears_notice() {
        let mut session = session_with("crane");
        let _ = guess(&mut session, "eeeee");
        assert!(session.notice().is_some());

        for _ in 0..WORD_LENGTH {
            session.backspace();
        }
        assert!(matches!(
            guess(&mut session, "train"),
            Ok(Submission::Accepted { slot: 0, .. })
        ));
        assert!(session.notice().is_none());
    }

    #[test]
    fn accepted_guess_fills_next_slot() {
        let mut session = session_with("crane");

        let result = guess(&mut session, "train").unwrap();
        assert_eq!(
            result,
            Submission::Accepted {
                slot: 0,
                pattern: Pattern::new([Absent, Correct, Correct, Absent, Present]),
            }
        );
        assert_eq!(session.buffer(), "");
        assert_eq!(session.slots()[0].as_ref().map(Word::text), Some("train"));
        assert_eq!(session.current_slot(), Some(1));
        assert_eq!(session.guesses_used(), 1);
    }

    #[test]
    fn exact_guess_wins_and_locks_round() {
        let mut session = session_with("crane");
        guess(&mut session, "train").unwrap();

        assert_eq!(
            guess(&mut session, "crane"),
            Ok(Submission::Won { guesses: 2 })
        );
        assert_eq!(session.state(), RoundState::Won);
        assert_eq!(session.outcome(), Some(Outcome::Won));

        type_word(&mut session, "slate");
        assert_eq!(session.buffer(), "");
        assert_eq!(session.submit_guess(), Ok(Submission::Ignored));
        assert_eq!(session.guesses_used(), 2);
    }

    #[test]
    fn six_misses_leave_round_in_progress() {
        let mut session = session_with("crane");
        let misses = ["train", "slate", "audio", "point", "child", "brave"];

        for (i, word) in misses.iter().enumerate() {
            let result = guess(&mut session, word).unwrap();
            if i + 1 < MAX_GUESSES {
                assert!(matches!(result, Submission::Accepted { .. }));
            } else {
                assert_eq!(result, Submission::Lost);
            }
        }

        assert_eq!(session.state(), RoundState::InProgress);
        assert_eq!(session.current_slot(), None);
        assert_eq!(session.outcome(), Some(Outcome::Lost));

        type_word(&mut session, "crane");
        assert_eq!(session.buffer(), "");
        assert_eq!(session.submit_guess(), Ok(Submission::Ignored));
        assert_eq!(session.state(), RoundState::InProgress);
    }

    #[test]
    fn new_round_clears_previous_round() {
        let mut session = session_with("crane");
        guess(&mut session, "crane").unwrap();
        type_word(&mut session, "ab");

        session.new_round().unwrap();
        assert_eq!(session.state(), RoundState::InProgress);
        assert_eq!(session.guesses_used(), 0);
        assert_eq!(session.buffer(), "");
        assert_eq!(session.solution().map(Word::text), Some("crane"));
    }

    #[test]
    fn rows_classify_submitted_only() {
        let mut session = session_with("crane");
        guess(&mut session, "train").unwrap();
        type_word(&mut session, "sl");

        let rows = session.rows();
        assert_eq!(rows.len(), MAX_GUESSES);
        assert_eq!(rows[0].text, "train");
        assert!(matches!(rows[0].kind, RowKind::Submitted(_)));
        assert_eq!(
            rows[1],
            RowView {
                text: "sl",
                kind: RowKind::Current
            }
        );
        assert!(rows[2..].iter().all(|row| row.kind == RowKind::Empty));
    }

    #[test]
    fn rows_have_no_current_after_win() {
        let mut session = session_with("crane");
        guess(&mut session, "crane").unwrap();

        let rows = session.rows();
        assert_eq!(rows[0].kind, RowKind::Submitted(Pattern::PERFECT));
        assert!(rows[1..].iter().all(|row| row.kind == RowKind::Empty));
    }

    #[test]
    fn load_words_fetches_once() {
        let mut session = GameSession::new(Some(3));
        let source = ListWords::new(["crane", "bogus!", "toolong", "train"]);

        assert!(session.load_words(&source).unwrap());
        assert!(session.fetched());
        let solution = session.solution().unwrap().text().to_string();
        assert!(solution == "crane" || solution == "train");

        assert!(!session.load_words(&source).unwrap());
        assert_eq!(session.solution().map(Word::text), Some(solution.as_str()));
    }

    #[test]
    fn load_words_reports_source_failure() {
        let mut session = GameSession::new(Some(3));

        assert!(matches!(
            session.load_words(&FailingSource),
            Err(SessionError::WordSource(_))
        ));
        assert!(session.solution().is_none());
        assert!(session.rows().iter().all(|row| row.kind == RowKind::Empty));

        // Guard stays set; no second fetch
        assert!(!session.load_words(&FailingSource).unwrap());
    }

    #[test]
    fn load_words_rejects_list_without_valid_words() {
        let mut session = GameSession::new(Some(3));
        let source = ListWords::new(["abc", "123456"]);

        assert!(matches!(
            session.load_words(&source),
            Err(SessionError::EmptyWordList)
        ));
    }
}
