use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use conj_core::conjugate::{self, Paradigm};
use conj_core::dict::{DictError, VerbDictionary};
use conj_core::grammar::{Language, Mode, Tense};
use conj_core::settings::settings;
use conj_core::template::{InflectionDesc, InvalidTemplateName, TemplateSpec};

/// Data files for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub conjugation: PathBuf,
    pub verbs: PathBuf,
    /// Supplementary verb list, used only if the file exists.
    pub user_verbs: Option<PathBuf>,
}

impl DataPaths {
    /// `conjugation-<code>.xml` and `verbs-<code>.xml` under `data_dir`, plus
    /// the user's verb list.
    pub fn for_language(language: Language, data_dir: &Path) -> Self {
        Self {
            conjugation: data_dir.join(format!("{}.xml", language.conjugation_root())),
            verbs: data_dir.join(format!("{}.xml", language.verbs_root())),
            user_verbs: user_verbs_path(language),
        }
    }

    pub fn with_user_verbs(mut self, user_verbs: Option<PathBuf>) -> Self {
        self.user_verbs = user_verbs;
        self
    }
}

/// `$HOME/<user_dir>/verbs-<code>.xml`, or `None` without a home directory.
pub fn user_verbs_path(language: Language) -> Option<PathBuf> {
    settings()
        .data
        .resolved_user_dir()
        .map(|dir| dir.join(format!("{}.xml", language.verbs_root())))
}

/// A loaded dictionary for one language.
///
/// Cloning is cheap and clones share the dictionary, so one `Engine` can
/// serve many threads. Switching language means opening another `Engine`.
#[derive(Clone)]
pub struct Engine {
    dict: Arc<VerbDictionary>,
}

impl Engine {
    /// Load the dictionary for `language_code` (`fr` or `it`). Without
    /// explicit `paths`, files are looked up in the configured data
    /// directory.
    pub fn open(
        language_code: &str,
        accent_tolerant: bool,
        paths: Option<DataPaths>,
    ) -> Result<Self, DictError> {
        let language = Language::from_code(language_code)
            .filter(|l| l.is_supported())
            .ok_or_else(|| DictError::UnsupportedLanguage(language_code.to_string()))?;
        let paths = paths.unwrap_or_else(|| {
            DataPaths::for_language(language, &settings().data.resolved_dir())
        });

        let extra: Vec<PathBuf> = paths
            .user_verbs
            .iter()
            .filter(|p| p.is_file())
            .cloned()
            .collect();

        let dict = VerbDictionary::load(
            language,
            accent_tolerant,
            &paths.conjugation,
            &paths.verbs,
            &extra,
        )?;
        info!(
            language = %language,
            accent_tolerant,
            conjugation = %paths.conjugation.display(),
            verbs = %paths.verbs.display(),
            user_verbs = extra.len(),
            "engine opened"
        );
        Ok(Self::from_dictionary(dict))
    }

    pub fn from_dictionary(dict: VerbDictionary) -> Self {
        Self {
            dict: Arc::new(dict),
        }
    }

    pub fn language(&self) -> Language {
        self.dict.language()
    }

    pub fn dictionary(&self) -> &VerbDictionary {
        &self.dict
    }

    /// Templates known for `infinitive`; empty for unknown verbs.
    pub fn lookup_templates(&self, infinitive: &str) -> Vec<&str> {
        self.dict.template_names_for(infinitive)
    }

    pub fn template(&self, name: &str) -> Option<&TemplateSpec> {
        self.dict.template(name)
    }

    pub fn radical(
        &self,
        infinitive: &str,
        template_name: &str,
    ) -> Result<String, InvalidTemplateName> {
        self.dict.radical(infinitive, template_name)
    }

    pub fn generate_tense(
        &self,
        infinitive: &str,
        template_name: &str,
        mode: Mode,
        tense: Tense,
        include_pronouns: bool,
    ) -> Result<Option<Vec<Vec<String>>>, InvalidTemplateName> {
        self.dict
            .conjugate(infinitive, template_name, mode, tense, include_pronouns)
    }

    pub fn conjugate_all(
        &self,
        infinitive: &str,
        template_name: &str,
        include_pronouns: bool,
    ) -> Result<Paradigm, InvalidTemplateName> {
        conjugate::conjugate_all(&self.dict, infinitive, template_name, include_pronouns)
    }

    pub fn deconjugate(&self, word: &str) -> Vec<InflectionDesc> {
        self.dict.deconjugate(word)
    }

    pub fn is_starting_with_aspirate_h(&self, infinitive: &str) -> bool {
        self.dict.is_starting_with_aspirate_h(infinitive)
    }
}
