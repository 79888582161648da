//! Verb dictionary: conjugation templates, known verbs and the radical trie.
//!
//! `DictionaryBuilder` turns the template and verb list documents into a
//! `VerbDictionary`, which is read-only afterwards and can be shared between
//! threads behind an `Arc`.

mod builder;
mod deconjugate;
#[cfg(test)]
pub(crate) mod tests;

pub use builder::DictionaryBuilder;

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::{parse_document_bytes, DocumentError, Element};
use crate::grammar::{GrammarTag, Language};
use crate::template::{
    self, ConjugationSystem, InflectionIndex, InvalidTemplateName, RadicalEntry, TemplateSpec,
    VerbIndex,
};
use crate::trie::Trie;

/// Failure to construct a `VerbDictionary`. Construction is all or nothing:
/// when any of these is returned, no dictionary exists.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {}: {source}", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error("empty {0} document")]
    EmptyDocument(String),

    #[error("wrong top node in {kind} document: got {found}, expected {expected}")]
    WrongRoot {
        kind: &'static str,
        expected: String,
        found: String,
    },

    #[error("missing template name attribute")]
    MissingTemplateName,

    #[error("missing colon in template name: {0}")]
    MissingColon(String),

    #[error("missing <{element}> node in verb entry #{entry}")]
    MissingElement { element: &'static str, entry: usize },

    #[error("empty <{element}> node in verb entry #{entry}")]
    EmptyElement { element: &'static str, entry: usize },

    #[error("unknown mode '{mode}' in template {template}")]
    UnknownMode { template: String, mode: String },

    #[error("unknown tense '{tense}' in template {template}")]
    UnknownTense { template: String, tense: String },

    #[error("unknown template name: {0}")]
    UnknownTemplate(String),

    #[error("termination of template {template} is longer than infinitive {infinitive}")]
    TerminationTooLong { infinitive: String, template: String },

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

impl From<InvalidTemplateName> for DictError {
    fn from(e: InvalidTemplateName) -> Self {
        DictError::MissingColon(e.0)
    }
}

/// Read and parse one data file in any encoding its byte-order mark or XML
/// declaration names.
pub fn load_document(path: &Path) -> Result<Element, DictError> {
    let content = fs::read(path).map_err(|source| DictError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document_bytes(&content).map_err(|source| match source {
        DocumentError::NoRoot => DictError::EmptyDocument(path.display().to_string()),
        source => DictError::Document {
            path: path.to_path_buf(),
            source,
        },
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictStats {
    pub templates: usize,
    pub verbs: usize,
    pub radical_keys: usize,
    pub trie_nodes: usize,
    pub trie_bytes: usize,
}

pub struct VerbDictionary {
    pub(crate) language: Language,
    pub(crate) accent_tolerant: bool,
    pub(crate) conjugation: ConjugationSystem,
    pub(crate) verbs: VerbIndex,
    pub(crate) aspirate_h: HashSet<String>,
    pub(crate) inflections: InflectionIndex,
    pub(crate) radicals: Trie<Vec<RadicalEntry>>,
}

impl VerbDictionary {
    /// Build a dictionary from already parsed documents. `extra_verbs` are
    /// supplementary verb lists merged after the main one.
    pub fn from_documents(
        language: Language,
        accent_tolerant: bool,
        conjugation: &Element,
        verbs: &Element,
        extra_verbs: &[Element],
    ) -> Result<Self, DictError> {
        let mut builder = DictionaryBuilder::new(language, accent_tolerant)?
            .read_conjugation(conjugation)?
            .read_verbs(verbs)?;
        for extra in extra_verbs {
            builder = builder.read_verbs(extra)?;
        }
        Ok(builder.build())
    }

    /// Build a dictionary from data files.
    pub fn load(
        language: Language,
        accent_tolerant: bool,
        conjugation_path: &Path,
        verbs_path: &Path,
        extra_verbs: &[PathBuf],
    ) -> Result<Self, DictError> {
        let mut builder = DictionaryBuilder::new(language, accent_tolerant)?
            .read_conjugation(&load_document(conjugation_path)?)?
            .read_verbs(&load_document(verbs_path)?)?;
        for path in extra_verbs {
            builder = builder.read_verbs(&load_document(path)?)?;
        }
        Ok(builder.build())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_accent_tolerant(&self) -> bool {
        self.accent_tolerant
    }

    /// Templates that can produce `infinitive`, or `None` for unknown verbs.
    pub fn templates_for_infinitive(&self, infinitive: &str) -> Option<&BTreeSet<String>> {
        self.verbs.get(infinitive)
    }

    /// Like [`Self::templates_for_infinitive`], empty for unknown verbs.
    pub fn template_names_for(&self, infinitive: &str) -> Vec<&str> {
        self.verbs
            .get(infinitive)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn template(&self, name: &str) -> Option<&TemplateSpec> {
        self.conjugation.get(name)
    }

    pub fn templates(&self) -> impl Iterator<Item = (&str, &TemplateSpec)> {
        self.conjugation.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Known infinitives, including accent-dropped spellings when the
    /// dictionary is accent tolerant.
    pub fn known_verbs(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.verbs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Grammatical readings of `inflection` under `template`.
    pub fn grammar_tags_for(&self, template: &str, inflection: &str) -> Option<&[GrammarTag]> {
        self.inflections
            .get(template)?
            .get(inflection)
            .map(Vec::as_slice)
    }

    pub fn is_starting_with_aspirate_h(&self, infinitive: &str) -> bool {
        self.aspirate_h.contains(infinitive)
    }

    pub fn radical(
        &self,
        infinitive: &str,
        template_name: &str,
    ) -> Result<String, InvalidTemplateName> {
        template::radical(infinitive, template_name)
    }

    pub fn stats(&self) -> DictStats {
        DictStats {
            templates: self.conjugation.len(),
            verbs: self.verbs.len(),
            radical_keys: self.radicals.len(),
            trie_nodes: self.radicals.node_count(),
            trie_bytes: self.radicals.memory_usage(|entries| {
                entries.capacity() * std::mem::size_of::<RadicalEntry>()
                    + entries
                        .iter()
                        .map(|e| e.template.capacity() + e.radical.capacity())
                        .sum::<usize>()
            }),
        }
    }
}
