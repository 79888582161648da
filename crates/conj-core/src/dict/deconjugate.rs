use tracing::{debug, debug_span};

use super::VerbDictionary;
use crate::template::{self, InflectionDesc};
use crate::unicode::to_code_points;

impl VerbDictionary {
    /// Every analysis of `word` as an inflection of a known verb.
    ///
    /// Results come shortest radical first, then in the order the verbs were
    /// read, then in template document order. Identical analyses reached
    /// through different radicals are all reported.
    pub fn deconjugate(&self, word: &str) -> Vec<InflectionDesc> {
        let _span = debug_span!("deconjugate", word).entered();
        let chars: Vec<char> = word.chars().collect();
        self.deconjugate_code_points(&chars)
    }

    /// Same as [`Self::deconjugate`] for raw bytes. Bytes that are not valid
    /// UTF-8 have no analysis.
    pub fn deconjugate_bytes(&self, bytes: &[u8]) -> Vec<InflectionDesc> {
        match to_code_points(bytes) {
            Ok(chars) => self.deconjugate_code_points(&chars),
            Err(e) => {
                debug!(error = %e, "undecodable word");
                Vec::new()
            }
        }
    }

    fn deconjugate_code_points(&self, word: &[char]) -> Vec<InflectionDesc> {
        let mut results = Vec::new();
        self.radicals.walk_prefixes(word, |key, index, entries| {
            let suffix: String = key[index..].iter().collect();
            for entry in entries {
                let Some(tags) = self.grammar_tags_for(&entry.template, &suffix) else {
                    continue;
                };
                let Ok(termination) = template::termination(&entry.template) else {
                    continue;
                };
                let infinitive = format!("{}{termination}", entry.radical);
                results.extend(tags.iter().map(|tag| InflectionDesc {
                    infinitive: infinitive.clone(),
                    template: entry.template.clone(),
                    tag: *tag,
                }));
            }
        });
        debug!(results = results.len(), "deconjugated");
        results
    }
}
