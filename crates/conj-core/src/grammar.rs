//! Modes, tenses, languages and the grammatical description of one
//! inflection.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    French,
    Italian,
    /// Recognized so that callers can report it, but no dictionary can be
    /// built for it.
    Greek,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "fr" => Some(Self::French),
            "it" => Some(Self::Italian),
            "el" => Some(Self::Greek),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::French => "fr",
            Self::Italian => "it",
            Self::Greek => "el",
        }
    }

    pub fn is_supported(self) -> bool {
        matches!(self, Self::French | Self::Italian)
    }

    /// Root element name of the template document for this language.
    pub fn conjugation_root(self) -> String {
        format!("conjugation-{}", self.code())
    }

    /// Root element name of the verb list document for this language.
    pub fn verbs_root(self) -> String {
        format!("verbs-{}", self.code())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Infinitive,
    Indicative,
    Conditional,
    Subjunctive,
    Imperative,
    Participle,
    Gerund,
}

impl Mode {
    /// Parse a mode element name from a template document.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "infinitive" => Some(Self::Infinitive),
            "indicative" => Some(Self::Indicative),
            "conditional" => Some(Self::Conditional),
            "subjunctive" => Some(Self::Subjunctive),
            "imperative" => Some(Self::Imperative),
            "participle" => Some(Self::Participle),
            "gerund" => Some(Self::Gerund),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Infinitive => "infinitive",
            Self::Indicative => "indicative",
            Self::Conditional => "conditional",
            Self::Subjunctive => "subjunctive",
            Self::Imperative => "imperative",
            Self::Participle => "participle",
            Self::Gerund => "gerund",
        }
    }

    /// Modes whose persons take a subject pronoun.
    pub fn takes_pronouns(self) -> bool {
        matches!(self, Self::Indicative | Self::Conditional | Self::Subjunctive)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Present,
    Past,
    Imperfect,
    Future,
}

impl Tense {
    /// Parse a tense element name from a template document. Several element
    /// names collapse onto the same tense (`imperative-present` is `Present`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "infinitive-present" | "present" | "imperative-present" | "present-participle"
            | "present-gerund" => Some(Self::Present),
            "simple-past" | "past-participle" | "past" => Some(Self::Past),
            "imperfect" => Some(Self::Imperfect),
            "future" => Some(Self::Future),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Past => "past",
            Self::Imperfect => "imperfect",
            Self::Future => "future",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mode, tense, person and number of one termination.
///
/// `person` is 1, 2 or 3 in personal modes and 0 where person does not
/// apply (infinitive, gerund). Participles reuse 4 for masculine and 5 for
/// feminine forms. `correct` is false for accent-dropped spellings kept
/// only for tolerant lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GrammarTag {
    pub mode: Mode,
    pub tense: Tense,
    pub person: u8,
    pub plural: bool,
    pub correct: bool,
}

impl GrammarTag {
    /// Build a tag from the 1-based position of a `<p>` element inside its
    /// tense element.
    pub fn from_counter(
        mode: Mode,
        tense: Tense,
        counter: usize,
        correct: bool,
        language: Language,
    ) -> Self {
        let (person, plural) = match mode {
            Mode::Imperative if language == Language::Italian => match counter {
                1 => (2, false),
                2 => (3, false),
                3 => (1, true),
                4 => (2, true),
                5 => (3, true),
                _ => (0, false),
            },
            Mode::Imperative => match counter {
                1 => (2, false),
                2 => (1, true),
                3 => (2, true),
                _ => (0, false),
            },
            Mode::Infinitive => (0, false),
            _ if !(1..=6).contains(&counter) => (0, false),
            Mode::Participle => (if counter <= 2 { 4 } else { 5 }, counter == 2 || counter == 4),
            Mode::Gerund => (0, false),
            _ => (((counter - 1) % 3 + 1) as u8, counter > 3),
        };
        Self {
            mode,
            tense,
            person,
            plural,
            correct,
        }
    }
}

impl fmt::Display for GrammarTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mode, self.tense)?;
        match self.person {
            0 => {}
            4 => write!(f, ", masculine")?,
            5 => write!(f, ", feminine")?,
            p => write!(f, ", person {p}")?,
        }
        if self.person != 0 {
            f.write_str(if self.plural { " plural" } else { " singular" })?;
        }
        if !self.correct {
            f.write_str(" (accents missing)")?;
        }
        Ok(())
    }
}

/// Mode/tense pairs that make up a full paradigm, in display order.
/// The gerund only exists in Italian templates.
pub const STANDARD_MODE_TENSES: [(Mode, Tense); 12] = [
    (Mode::Infinitive, Tense::Present),
    (Mode::Indicative, Tense::Present),
    (Mode::Indicative, Tense::Imperfect),
    (Mode::Indicative, Tense::Future),
    (Mode::Indicative, Tense::Past),
    (Mode::Conditional, Tense::Present),
    (Mode::Subjunctive, Tense::Present),
    (Mode::Subjunctive, Tense::Imperfect),
    (Mode::Imperative, Tense::Present),
    (Mode::Participle, Tense::Present),
    (Mode::Participle, Tense::Past),
    (Mode::Gerund, Tense::Present),
];
