//! In-memory model of conjugation templates and the lookup tables built
//! from them.
//!
//! A template is named `<radical model>:<termination model>`, e.g. `aim:er`.
//! Every verb following it shares the termination model; stripping that
//! many code points from the infinitive gives the verb's radical.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

use crate::grammar::{GrammarTag, Mode, Tense};

/// One spelling of a termination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InflectionEntry {
    pub text: String,
    /// False for accent-dropped spellings that only serve lookups.
    pub correct: bool,
}

impl InflectionEntry {
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }
}

/// Alternative spellings for one person, usually a single entry.
pub type PersonSlot = Vec<InflectionEntry>;

/// Persons of one tense: 1, 3 or 6 slots depending on the mode.
pub type TenseTable = Vec<PersonSlot>;

pub type ModeTable = BTreeMap<Tense, TenseTable>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateSpec {
    pub modes: BTreeMap<Mode, ModeTable>,
}

impl TemplateSpec {
    pub fn tense(&self, mode: Mode, tense: Tense) -> Option<&TenseTable> {
        self.modes.get(&mode)?.get(&tense)
    }

    pub(crate) fn tense_mut(&mut self, mode: Mode, tense: Tense) -> &mut TenseTable {
        self.modes.entry(mode).or_default().entry(tense).or_default()
    }
}

/// Template name → template.
pub type ConjugationSystem = BTreeMap<String, TemplateSpec>;

/// Infinitive spelling → names of the templates that produce it.
pub type VerbIndex = BTreeMap<String, BTreeSet<String>>;

/// Termination text → every grammatical reading of it, in document order.
pub type TemplateInflections = HashMap<String, Vec<GrammarTag>>;

/// Template name → its termination index.
pub type InflectionIndex = HashMap<String, TemplateInflections>;

/// Payload of a radical trie node: one entry per template the radical
/// belongs to. `radical` is the correctly accented spelling, which differs
/// from the trie key when the key is an accent-dropped variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadicalEntry {
    pub template: String,
    pub radical: String,
}

/// One analysis of a conjugated word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InflectionDesc {
    pub infinitive: String,
    pub template: String,
    #[serde(flatten)]
    pub tag: GrammarTag,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no colon found in template name: {0}")]
pub struct InvalidTemplateName(pub String);

/// Termination model of a template name: the text after the colon.
pub fn termination(template_name: &str) -> Result<&str, InvalidTemplateName> {
    template_name
        .split_once(':')
        .map(|(_, term)| term)
        .ok_or_else(|| InvalidTemplateName(template_name.to_string()))
}

/// Radical of `infinitive` under `template_name`: the infinitive minus as
/// many code points as the template's termination has. An infinitive
/// shorter than the termination yields an empty radical.
pub fn radical(infinitive: &str, template_name: &str) -> Result<String, InvalidTemplateName> {
    let term_len = termination(template_name)?.chars().count();
    let inf_len = infinitive.chars().count();
    Ok(infinitive
        .chars()
        .take(inf_len.saturating_sub(term_len))
        .collect())
}
