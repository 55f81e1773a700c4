//! Letter-by-letter feedback for a guess
//!
//! Each guessed letter is reported as one of:
//! - Absent (letter not left in the secret word)
//! - Present (letter in the secret word, wrong position)
//! - Correct (letter in the correct position)

use super::Word;

/// Feedback for a single guessed position
///
/// `is_in_correct_position` always implies `is_present`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterStat {
    pub symbol: char,
    pub is_present: bool,
    pub is_in_correct_position: bool,
}

/// Collapsed view of a `LetterStat`, used for colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    Absent,
    Present,
    Correct,
}

impl Hint {
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl LetterStat {
    const fn absent(symbol: char) -> Self {
        Self {
            symbol,
            is_present: false,
            is_in_correct_position: false,
        }
    }

    #[must_use]
    pub const fn hint(&self) -> Hint {
        if self.is_in_correct_position {
            Hint::Correct
        } else if self.is_present {
            Hint::Present
        } else {
            Hint::Absent
        }
    }
}

/// Feedback for one submitted guess, in guess order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessRecord {
    letters: Vec<LetterStat>,
}

impl GuessRecord {
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterStat] {
        &self.letters
    }

    /// The guessed word, rebuilt from the symbols
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|stat| stat.symbol).collect()
    }

    /// Check if every letter is in its correct position
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.letters.iter().all(|stat| stat.is_in_correct_position)
    }

    /// Count the letters in their correct position
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.letters
            .iter()
            .filter(|stat| stat.is_in_correct_position)
            .count()
    }

    /// Count the letters present in the word, correct position or not
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.letters.iter().filter(|stat| stat.is_present).count()
    }

    /// Convert the feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|stat| stat.hint().emoji()).collect()
    }
}

/// Score `guess` against `secret`
///
/// Both words must have the same letter count; the game checks this before
/// calling.
///
/// # Algorithm
/// 1. Count the letters of the secret word
/// 2. First pass: mark exact position matches and consume them from the counts
/// 3. Second pass: for every position not matched exactly, mark the letter
///    present if an occurrence is still unconsumed, and consume it
///
/// Exact matches have to be consumed first, otherwise an earlier misplaced
/// letter could use up the occurrence a later exact match needs.
///
/// # Examples
/// ```
/// use wordle_season::core::{Word, evaluate};
///
/// let secret = Word::new("great").unwrap();
/// let guess = Word::new("gater").unwrap();
/// let record = evaluate(&secret, &guess);
///
/// assert_eq!(record.to_emoji(), "🟩🟨🟨🟨🟨");
/// ```
///
/// # Panics
/// Panics in debug mode if the words differ in length
#[must_use]
pub fn evaluate(secret: &Word, guess: &Word) -> GuessRecord {
    debug_assert_eq!(
        secret.letter_count(),
        guess.letter_count(),
        "guess must match secret length"
    );

    let mut available = secret.letter_frequencies();
    let mut letters: Vec<LetterStat> = guess
        .letters()
        .iter()
        .copied()
        .map(LetterStat::absent)
        .collect();

    // First pass: exact position matches
    for (stat, &expected) in letters.iter_mut().zip(secret.letters()) {
        if stat.symbol == expected {
            stat.is_present = true;
            stat.is_in_correct_position = true;
            available.decrease_count(stat.symbol);
        }
    }

    // Second pass: present but misplaced, limited by the remaining counts
    for stat in letters.iter_mut().filter(|stat| !stat.is_in_correct_position) {
        if available.contains(stat.symbol) {
            stat.is_present = true;
            available.decrease_count(stat.symbol);
        }
    }

    let record = GuessRecord { letters };
    log::trace!("evaluated {guess}: {}", record.to_emoji());
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(symbol: char, is_present: bool, is_in_correct_position: bool) -> LetterStat {
        LetterStat {
            symbol,
            is_present,
            is_in_correct_position,
        }
    }

    fn score(secret: &str, guess: &str) -> GuessRecord {
        evaluate(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn all_absent() {
        let record = score("great", "build");

        assert!(record.letters().iter().all(|s| s.hint() == Hint::Absent));
        assert_eq!(record.count_present(), 0);
        assert_eq!(record.to_emoji(), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn all_correct() {
        let record = score("great", "great");

        assert!(record.is_solved());
        assert_eq!(record.count_correct(), 5);
        assert_eq!(record.to_emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn anagram_of_secret() {
        // GATER vs GREAT: G in place, the rest present elsewhere
        let record = score("great", "gater");

        assert_eq!(
            record.letters(),
            &[
                stat('G', true, true),
                stat('A', true, false),
                stat('T', true, false),
                stat('E', true, false),
                stat('R', true, false),
            ]
        );
    }

    #[test]
    fn repeated_guess_letter_single_occurrence_in_secret() {
        // GREAT has one E; EERIE has three, none in place.
        // Only the first E in scan order is present.
        let record = score("great", "eerie");

        assert_eq!(
            record.letters(),
            &[
                stat('E', true, false),
                stat('E', false, false),
                stat('R', true, false),
                stat('I', false, false),
                stat('E', false, false),
            ]
        );
        let present_es = record
            .letters()
            .iter()
            .filter(|s| s.symbol == 'E' && s.is_present)
            .count();
        assert_eq!(present_es, 1);
    }

    #[test]
    fn exact_match_consumes_before_presence() {
        // BLOOM vs OOOOO: positions 2 and 3 take both Os, nothing is left
        // for the misplaced Os
        let record = score("bloom", "ooooo");

        assert_eq!(record.count_correct(), 2);
        assert_eq!(record.count_present(), 2);
        assert_eq!(record.to_emoji(), "⬜⬜🟩🟩⬜");
    }

    #[test]
    fn misplaced_before_exact_does_not_steal_count() {
        // Secret THERE has E at 2 and 4. Guess EERIE: E at 4 is exact,
        // E at 0 takes the remaining E, E at 1 is absent.
        let record = score("there", "eerie");

        assert_eq!(
            record.letters(),
            &[
                stat('E', true, false),
                stat('E', false, false),
                stat('R', true, false),
                stat('I', false, false),
                stat('E', true, true),
            ]
        );
    }

    #[test]
    fn duplicate_letters_in_secret_both_found() {
        // GLASS vs SASSY: S at 3 exact, S at 0 takes the second S, S at 2 absent
        let record = score("glass", "sassy");

        assert_eq!(record.to_emoji(), "🟨🟨⬜🟩⬜");
        assert_eq!(record.count_correct(), 1);
        assert_eq!(record.count_present(), 3);
    }

    #[test]
    fn correct_count_matches_agreeing_positions() {
        let pairs = [
            ("hello", "hollo"),
            ("broom", "groom"),
            ("books", "boots"),
            ("there", "three"),
            ("valid", "lived"),
        ];

        for (secret, guess) in pairs {
            let record = score(secret, guess);
            let agreeing = secret
                .chars()
                .zip(guess.chars())
                .filter(|(a, b)| a == b)
                .count();
            assert_eq!(record.count_correct(), agreeing, "{secret} vs {guess}");
        }
    }

    #[test]
    fn present_never_exceeds_secret_occurrences() {
        let pairs = [
            ("token", "ootto"),
            ("glare", "eeeee"),
            ("lexem", "eemle"),
            ("watch", "hhhhh"),
            ("earth", "tartt"),
        ];

        for (secret, guess) in pairs {
            let record = score(secret, guess);
            let secret_word = Word::new(secret).unwrap();
            let counts = secret_word.letter_frequencies();

            for letter in record.letters().iter().map(|s| s.symbol) {
                let present = record
                    .letters()
                    .iter()
                    .filter(|s| s.symbol == letter && s.is_present)
                    .count();
                assert!(
                    present <= counts.count(letter),
                    "{secret} vs {guess}: {letter} over-counted"
                );
            }
        }
    }

    #[test]
    fn correct_position_implies_present() {
        for (secret, guess) in [("delta", "dealt"), ("guess", "sages"), ("hover", "rover")] {
            let record = score(secret, guess);
            assert!(
                record
                    .letters()
                    .iter()
                    .all(|s| !s.is_in_correct_position || s.is_present)
            );
        }
    }

    #[test]
    fn record_word_roundtrips_symbols() {
        let record = score("break", "bread");
        assert_eq!(record.word(), "BREAD");
    }

    #[test]
    fn hint_mapping() {
        assert_eq!(stat('A', false, false).hint(), Hint::Absent);
        assert_eq!(stat('A', true, false).hint(), Hint::Present);
        assert_eq!(stat('A', true, true).hint(), Hint::Correct);
        assert_eq!(Hint::Correct.emoji(), '🟩');
    }
}
