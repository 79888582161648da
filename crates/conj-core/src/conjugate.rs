//! Regenerating inflected forms from a radical and a template.

use serde::Serialize;

use crate::dict::VerbDictionary;
use crate::grammar::{Language, Mode, Tense, STANDARD_MODE_TENSES};
use crate::template::{InvalidTemplateName, TemplateSpec};
use crate::unicode::{fold_case, is_h, is_vowel, remove_accents};

const FRENCH_PRONOUNS: [&str; 6] = ["je ", "tu ", "il ", "nous ", "vous ", "ils "];
const ITALIAN_PRONOUNS: [&str; 6] = ["io ", "tu ", "egli ", "noi ", "voi ", "essi "];

/// Forms of one tense, one inner list per person slot.
///
/// Returns `None` when the template has no such mode or tense. Only correct
/// spellings are produced. Subject pronouns (and the subjunctive
/// connective) are prepended for personal modes when `include_pronouns` is
/// set; `aspirate_h` keeps the French first person from eliding.
pub fn generate_tense(
    radical: &str,
    template: &TemplateSpec,
    mode: Mode,
    tense: Tense,
    include_pronouns: bool,
    aspirate_h: bool,
    language: Language,
) -> Option<Vec<Vec<String>>> {
    let persons = template.tense(mode, tense)?;
    let with_pronouns = include_pronouns && mode.takes_pronouns();
    let italian = language == Language::Italian;

    let forms: Vec<Vec<String>> = persons
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.iter()
                .filter(|entry| entry.correct)
                .map(|entry| {
                    let word = format!("{radical}{}", entry.text);
                    if !with_pronouns {
                        return word;
                    }
                    let pronoun = subject_pronoun(index, &word, aspirate_h, italian);
                    let connective = if mode == Mode::Subjunctive {
                        subjunctive_connective(index, italian)
                    } else {
                        ""
                    };
                    format!("{connective}{pronoun}{word}")
                })
                .collect::<Vec<String>>()
        })
        .collect();
    Some(forms)
}

fn subject_pronoun(index: usize, word: &str, aspirate_h: bool, italian: bool) -> &'static str {
    if italian {
        return ITALIAN_PRONOUNS.get(index).copied().unwrap_or("");
    }
    if index == 0 && !aspirate_h {
        if let Some(first) = word.chars().next() {
            if is_vowel(first) || is_h(first) {
                return "j'";
            }
        }
    }
    FRENCH_PRONOUNS.get(index).copied().unwrap_or("")
}

fn subjunctive_connective(index: usize, italian: bool) -> &'static str {
    match (italian, index) {
        (true, _) => "che ",
        (false, 2 | 5) => "qu'",
        (false, _) => "que ",
    }
}

/// One mode/tense of a paradigm. `persons` is empty when the template does
/// not define it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenseConjugation {
    pub mode: Mode,
    pub tense: Tense,
    pub persons: Vec<Vec<String>>,
}

pub type Paradigm = Vec<TenseConjugation>;

/// Every standard mode/tense of `infinitive` under `template_name`. The
/// gerund is only listed for Italian. An unknown template gives an empty
/// paradigm.
pub fn conjugate_all(
    dict: &VerbDictionary,
    infinitive: &str,
    template_name: &str,
    include_pronouns: bool,
) -> Result<Paradigm, InvalidTemplateName> {
    let radical = dict.radical(infinitive, template_name)?;
    let Some(template) = dict.template(template_name) else {
        return Ok(Paradigm::new());
    };
    let language = dict.language();
    let aspirate_h = dict.is_starting_with_aspirate_h(infinitive);

    Ok(STANDARD_MODE_TENSES
        .iter()
        .filter(|(mode, _)| *mode != Mode::Gerund || language == Language::Italian)
        .map(|&(mode, tense)| TenseConjugation {
            mode,
            tense,
            persons: generate_tense(
                &radical,
                template,
                mode,
                tense,
                include_pronouns,
                aspirate_h,
                language,
            )
            .unwrap_or_default(),
        })
        .collect())
}

impl VerbDictionary {
    /// [`generate_tense`] for a known infinitive, looking up its radical,
    /// template and aspirate-h flag. `Ok(None)` when the template is unknown
    /// or lacks the mode or tense.
    pub fn conjugate(
        &self,
        infinitive: &str,
        template_name: &str,
        mode: Mode,
        tense: Tense,
        include_pronouns: bool,
    ) -> Result<Option<Vec<Vec<String>>>, InvalidTemplateName> {
        let radical = self.radical(infinitive, template_name)?;
        let Some(template) = self.template(template_name) else {
            return Ok(None);
        };
        Ok(generate_tense(
            &radical,
            template,
            mode,
            tense,
            include_pronouns,
            self.is_starting_with_aspirate_h(infinitive),
            self.language(),
        ))
    }
}

/// The bare verb of a generated form, without connective or pronoun.
pub fn strip_pronoun(form: &str) -> &str {
    let mut rest = form;
    for connective in ["que ", "qu'", "che "] {
        if let Some(r) = rest.strip_prefix(connective) {
            rest = r;
            break;
        }
    }
    FRENCH_PRONOUNS
        .iter()
        .chain(ITALIAN_PRONOUNS.iter())
        .chain(std::iter::once(&"j'"))
        .find_map(|p| rest.strip_prefix(p))
        .unwrap_or(rest)
}

/// True if `form` is what the user typed, ignoring pronouns, case and
/// accents.
pub fn matches_user_text(form: &str, user_text: &str) -> bool {
    remove_accents(strip_pronoun(form)) == remove_accents(&fold_case(user_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::tests::{french_dictionary, italian_dictionary};

    fn present(dict: &VerbDictionary, infinitive: &str, pronouns: bool) -> Vec<Vec<String>> {
        let template = dict.template_names_for(infinitive)[0];
        dict.conjugate(infinitive, template, Mode::Indicative, Tense::Present, pronouns)
            .unwrap()
            .unwrap()
    }

    fn flat(forms: Vec<Vec<String>>) -> Vec<String> {
        forms.into_iter().flatten().collect()
    }

    #[test]
    fn present_without_pronouns() {
        let dict = french_dictionary(true);
        assert_eq!(
            flat(present(&dict, "aimer", false)),
            vec!["aime", "aimes", "aime", "aimons", "aimez", "aiment"]
        );
    }

    #[test]
    fn present_with_pronouns_and_elision() {
        let dict = french_dictionary(true);
        assert_eq!(
            flat(present(&dict, "aimer", true)),
            vec!["j'aime", "tu aimes", "il aime", "nous aimons", "vous aimez", "ils aiment"]
        );
        assert_eq!(flat(present(&dict, "habiter", true))[0], "j'habite");
        assert_eq!(flat(present(&dict, "hacher", true))[0], "je hache");
        assert_eq!(flat(present(&dict, "céder", true))[0], "je cède");
    }

    #[test]
    fn subjunctive_connectives() {
        let dict = french_dictionary(true);
        let forms = dict
            .conjugate("aimer", "aim:er", Mode::Subjunctive, Tense::Present, true)
            .unwrap()
            .unwrap();
        assert_eq!(
            flat(forms),
            vec![
                "que j'aime",
                "que tu aimes",
                "qu'il aime",
                "que nous aimions",
                "que vous aimiez",
                "qu'ils aiment"
            ]
        );
    }

    #[test]
    fn italian_pronouns() {
        let dict = italian_dictionary(true);
        let forms = flat(present(&dict, "amare", true));
        assert_eq!(forms[0], "io amo");
        assert_eq!(forms[2], "egli ama");
        assert_eq!(forms[5], "essi amano");

        let subj = dict
            .conjugate("parlare", "am:are", Mode::Subjunctive, Tense::Present, true)
            .unwrap()
            .unwrap();
        assert_eq!(subj[0], vec!["che io parli"]);
        assert_eq!(subj[2], vec!["che egli parli"]);
    }

    #[test]
    fn impersonal_modes_take_no_pronoun() {
        let dict = french_dictionary(true);
        let imperative = dict
            .conjugate("aimer", "aim:er", Mode::Imperative, Tense::Present, true)
            .unwrap()
            .unwrap();
        assert_eq!(flat(imperative), vec!["aime", "aimons", "aimez"]);
        let participle = dict
            .conjugate("aimer", "aim:er", Mode::Participle, Tense::Past, true)
            .unwrap()
            .unwrap();
        assert_eq!(flat(participle), vec!["aimé", "aimés", "aimée", "aimées"]);
    }

    #[test]
    fn incorrect_spellings_never_generated() {
        let dict = french_dictionary(true);
        let past = dict
            .conjugate("aimer", "aim:er", Mode::Indicative, Tense::Past, false)
            .unwrap()
            .unwrap();
        assert_eq!(past[3], vec!["aimâmes"]);
        assert!(flat(past).iter().all(|f| !f.contains("aimames")));
    }

    #[test]
    fn missing_mode_or_template() {
        let dict = french_dictionary(true);
        let missing = dict
            .conjugate("céder", "c:éder", Mode::Subjunctive, Tense::Present, true)
            .unwrap();
        assert!(missing.is_none());
        assert!(dict
            .conjugate("aimer", "xyz:er", Mode::Indicative, Tense::Present, true)
            .unwrap()
            .is_none());
        assert!(dict
            .conjugate("aimer", "aimer", Mode::Indicative, Tense::Present, true)
            .is_err());
    }

    #[test]
    fn generate_tense_is_independent_of_dictionary() {
        let dict = french_dictionary(false);
        let template = dict.template("aim:er").unwrap();
        let forms = generate_tense(
            "dans",
            template,
            Mode::Indicative,
            Tense::Future,
            false,
            false,
            Language::French,
        )
        .unwrap();
        assert_eq!(forms[3], vec!["danserons"]);
        assert!(generate_tense(
            "dans",
            template,
            Mode::Gerund,
            Tense::Present,
            false,
            false,
            Language::French
        )
        .is_none());
    }

    #[test]
    fn paradigm_lists_standard_tenses() {
        let dict = french_dictionary(true);
        let paradigm = conjugate_all(&dict, "aimer", "aim:er", false).unwrap();
        assert_eq!(paradigm.len(), STANDARD_MODE_TENSES.len() - 1);
        assert!(paradigm.iter().all(|t| t.mode != Mode::Gerund));
        assert_eq!(paradigm[0].persons, vec![vec!["aimer".to_string()]]);
        assert_eq!(paradigm[4].tense, Tense::Past);
        assert_eq!(paradigm[4].persons[5], vec!["aimèrent".to_string()]);

        let cede = conjugate_all(&dict, "céder", "c:éder", false).unwrap();
        let subj = cede
            .iter()
            .find(|t| t.mode == Mode::Subjunctive && t.tense == Tense::Present)
            .unwrap();
        assert!(subj.persons.is_empty());

        let it = conjugate_all(&italian_dictionary(true), "amare", "am:are", false).unwrap();
        assert_eq!(it.len(), STANDARD_MODE_TENSES.len());
        assert_eq!(it.last().unwrap().persons, vec![vec!["amando".to_string()]]);

        assert!(conjugate_all(&dict, "aimer", "xyz:er", false)
            .unwrap()
            .is_empty());
        assert!(conjugate_all(&dict, "aimer", "aimer", false).is_err());
    }

    #[test]
    fn strip_pronoun_forms() {
        assert_eq!(strip_pronoun("j'aime"), "aime");
        assert_eq!(strip_pronoun("que j'aime"), "aime");
        assert_eq!(strip_pronoun("qu'ils aiment"), "aiment");
        assert_eq!(strip_pronoun("nous aimons"), "aimons");
        assert_eq!(strip_pronoun("che egli parli"), "parli");
        assert_eq!(strip_pronoun("io amo"), "amo");
        assert_eq!(strip_pronoun("aimé"), "aimé");
    }

    #[test]
    fn user_text_matching() {
        assert!(matches_user_text("nous étalons", "etalons"));
        assert!(matches_user_text("nous étalons", "ÉTALONS"));
        assert!(matches_user_text("que j'aime", "aime"));
        assert!(!matches_user_text("nous étalons", "étalez"));
    }

    #[test]
    fn generated_forms_deconjugate_back() {
        let dict = french_dictionary(true);
        for infinitive in ["aimer", "étaler", "hacher", "céder"] {
            for template_name in dict.template_names_for(infinitive) {
                for tense in conjugate_all(&dict, infinitive, template_name, false).unwrap() {
                    for form in tense.persons.iter().flatten() {
                        let hit = dict.deconjugate(form).into_iter().any(|r| {
                            r.infinitive == infinitive
                                && r.tag.mode == tense.mode
                                && r.tag.tense == tense.tense
                        });
                        assert!(hit, "{form} should analyse as {infinitive}");
                    }
                }
            }
        }
    }
}
