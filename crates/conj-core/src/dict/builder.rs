use std::collections::HashSet;

use tracing::debug;

use super::{DictError, VerbDictionary};
use crate::document::Element;
use crate::grammar::{GrammarTag, Language, Mode, Tense};
use crate::template::{
    self, ConjugationSystem, InflectionEntry, InflectionIndex, RadicalEntry, TemplateSpec,
    VerbIndex,
};
use crate::trie::Trie;
use crate::variants::unaccented_variant_strings;

/// Accumulates the template document and one or more verb lists.
///
/// Every `read_*` step takes the builder by value, so a failing step drops
/// whatever had been read so far.
pub struct DictionaryBuilder {
    language: Language,
    accent_tolerant: bool,
    conjugation: ConjugationSystem,
    inflections: InflectionIndex,
    verbs: VerbIndex,
    aspirate_h: HashSet<String>,
    radicals: Trie<Vec<RadicalEntry>>,
}

impl DictionaryBuilder {
    pub fn new(language: Language, accent_tolerant: bool) -> Result<Self, DictError> {
        if !language.is_supported() {
            return Err(DictError::UnsupportedLanguage(language.code().to_string()));
        }
        Ok(Self {
            language,
            accent_tolerant,
            conjugation: ConjugationSystem::new(),
            inflections: InflectionIndex::new(),
            verbs: VerbIndex::new(),
            aspirate_h: HashSet::new(),
            radicals: Trie::new(),
        })
    }

    /// Read a `conjugation-<code>` document.
    pub fn read_conjugation(mut self, root: &Element) -> Result<Self, DictError> {
        check_root(root, "conjugation", self.language.conjugation_root())?;

        for template_elem in root.children_named("template") {
            let name = template_elem
                .attribute("name")
                .filter(|name| !name.is_empty())
                .ok_or(DictError::MissingTemplateName)?;
            template::termination(name)?;
            self.read_template(name, template_elem)?;
        }

        debug!(
            language = %self.language,
            templates = self.conjugation.len(),
            "conjugation document read"
        );
        Ok(self)
    }

    fn read_template(&mut self, name: &str, template_elem: &Element) -> Result<(), DictError> {
        let language = self.language;
        let tolerant = self.accent_tolerant;
        let spec: &mut TemplateSpec = self.conjugation.entry(name.to_string()).or_default();
        let index = self.inflections.entry(name.to_string()).or_default();

        for mode_elem in &template_elem.children {
            let mode = Mode::from_name(&mode_elem.name).ok_or_else(|| DictError::UnknownMode {
                template: name.to_string(),
                mode: mode_elem.name.clone(),
            })?;

            for tense_elem in &mode_elem.children {
                let tense =
                    Tense::from_name(&tense_elem.name).ok_or_else(|| DictError::UnknownTense {
                        template: name.to_string(),
                        tense: tense_elem.name.clone(),
                    })?;
                let table = spec.tense_mut(mode, tense);

                let persons = tense_elem.children_named("p");
                for (counter, person_elem) in (1..).zip(persons) {
                    let mut slot = Vec::new();
                    for inflection in person_elem.children_named("i") {
                        let text = inflection.text();
                        slot.push(InflectionEntry::new(text, true));
                        index.entry(text.to_string()).or_default().push(
                            GrammarTag::from_counter(mode, tense, counter, true, language),
                        );

                        if !tolerant {
                            continue;
                        }
                        for variant in unaccented_variant_strings(text) {
                            index.entry(variant.clone()).or_default().push(
                                GrammarTag::from_counter(mode, tense, counter, false, language),
                            );
                            slot.push(InflectionEntry::new(variant, false));
                        }
                    }
                    table.push(slot);
                }
            }
        }
        Ok(())
    }

    /// Read a `verbs-<code>` document. Can be called again with a
    /// supplementary list once the templates are in place.
    pub fn read_verbs(mut self, root: &Element) -> Result<Self, DictError> {
        check_root(root, "verbs", self.language.verbs_root())?;

        let mut count = 0usize;
        for (entry, verb) in (1..).zip(root.children_named("v")) {
            let infinitive = required_text(verb, "i", entry)?;
            let template_name = required_text(verb, "t", entry)?;

            if !self.conjugation.contains_key(template_name) {
                return Err(DictError::UnknownTemplate(template_name.to_string()));
            }
            let term_len = template::termination(template_name)?.chars().count();
            if term_len > infinitive.chars().count() {
                return Err(DictError::TerminationTooLong {
                    infinitive: infinitive.to_string(),
                    template: template_name.to_string(),
                });
            }
            let radical = template::radical(infinitive, template_name)?;

            if verb.has_child("aspirate-h") {
                self.aspirate_h.insert(infinitive.to_string());
            }
            self.insert_radical(&radical, &radical, template_name);
            self.index_verb(infinitive, template_name);

            if self.accent_tolerant {
                for variant in unaccented_variant_strings(&radical) {
                    self.insert_radical(&variant, &radical, template_name);
                }
                for variant in unaccented_variant_strings(infinitive) {
                    self.index_verb(&variant, template_name);
                }
            }
            count += 1;
        }

        debug!(
            language = %self.language,
            entries = count,
            verbs = self.verbs.len(),
            radical_keys = self.radicals.len(),
            "verbs document read"
        );
        Ok(self)
    }

    /// A `(template, radical)` pair already stored under `key` is not pushed
    /// again, so a verb listed in both the system and the user list yields
    /// one analysis per form rather than two.
    fn insert_radical(&mut self, key: &str, radical: &str, template_name: &str) {
        let key: Vec<char> = key.chars().collect();
        let entries = self.radicals.entry_or_default(&key);
        let exists = entries
            .iter()
            .any(|e| e.template == template_name && e.radical == radical);
        if !exists {
            entries.push(RadicalEntry {
                template: template_name.to_string(),
                radical: radical.to_string(),
            });
        }
    }

    fn index_verb(&mut self, infinitive: &str, template_name: &str) {
        self.verbs
            .entry(infinitive.to_string())
            .or_default()
            .insert(template_name.to_string());
    }

    pub fn build(self) -> VerbDictionary {
        let dict = VerbDictionary {
            language: self.language,
            accent_tolerant: self.accent_tolerant,
            conjugation: self.conjugation,
            verbs: self.verbs,
            aspirate_h: self.aspirate_h,
            inflections: self.inflections,
            radicals: self.radicals,
        };
        if tracing::enabled!(tracing::Level::DEBUG) {
            let stats = dict.stats();
            debug!(
                language = %dict.language,
                templates = stats.templates,
                verbs = stats.verbs,
                radical_keys = stats.radical_keys,
                trie_nodes = stats.trie_nodes,
                trie_bytes = stats.trie_bytes,
                "verb dictionary built"
            );
        }
        dict
    }
}

fn check_root(root: &Element, kind: &'static str, expected: String) -> Result<(), DictError> {
    if root.name != expected {
        return Err(DictError::WrongRoot {
            kind,
            expected,
            found: root.name.clone(),
        });
    }
    Ok(())
}

fn required_text<'a>(
    verb: &'a Element,
    element: &'static str,
    entry: usize,
) -> Result<&'a str, DictError> {
    let text = verb
        .child(element)
        .ok_or(DictError::MissingElement { element, entry })?
        .text();
    if text.is_empty() {
        return Err(DictError::EmptyElement { element, entry });
    }
    Ok(text)
}
