use std::path::PathBuf;

use clap::{Parser, Subcommand};

use conj_cli::commands::verb_ops::{ConjugateOptions, LookupOptions};
use conj_cli::commands::{check_ops, config_ops, verb_ops};

#[derive(Parser)]
#[command(name = "conjtool", about = "French and Italian verb conjugation tool")]
struct Cli {
    /// Settings TOML file (default: built-in settings)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Directory holding conjugation-<lang>.xml and verbs-<lang>.xml
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Write JSON trace events to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the infinitives, modes, tenses and persons of a conjugated word
    Deconjugate {
        /// Conjugated word
        word: String,
        /// Language code (fr, it)
        #[arg(long, default_value = "fr")]
        lang: String,
        /// Require correct accents
        #[arg(long)]
        strict: bool,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Conjugate a verb in every mode and tense
    Conjugate {
        /// Infinitive
        infinitive: String,
        /// Template name (default: every template of the verb)
        #[arg(long)]
        template: Option<String>,
        /// Language code (fr, it)
        #[arg(long, default_value = "fr")]
        lang: String,
        /// Omit subject pronouns
        #[arg(long)]
        no_pronouns: bool,
        /// Mark the forms matching this text
        #[arg(long)]
        highlight: Option<String>,
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// List the templates of a verb
    Templates {
        /// Infinitive
        infinitive: String,
        /// Language code (fr, it)
        #[arg(long, default_value = "fr")]
        lang: String,
    },
    /// Check a verb list for missing and duplicate infinitives
    CheckVerbs {
        /// verbs-<lang>.xml file
        file: String,
        /// Language code (fr, it)
        #[arg(long, default_value = "fr")]
        lang: String,
    },
    /// Show dictionary statistics
    Stats {
        /// Language code (fr, it)
        #[arg(long, default_value = "fr")]
        lang: String,
        /// Require correct accents
        #[arg(long)]
        strict: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(file) = &cli.settings {
        config_ops::settings_load(file);
    }
    if let Some(dir) = &cli.trace_dir {
        conj_engine::trace_init::init_tracing(dir);
    }
    let data_dir = cli.data_dir.as_deref();

    match cli.command {
        Command::Deconjugate {
            word,
            lang,
            strict,
            json,
        } => {
            let opts = LookupOptions {
                lang: &lang,
                data_dir,
                strict,
            };
            verb_ops::deconjugate(&opts, &word, json);
        }
        Command::Conjugate {
            infinitive,
            template,
            lang,
            no_pronouns,
            highlight,
            json,
        } => {
            let opts = LookupOptions {
                lang: &lang,
                data_dir,
                strict: false,
            };
            let conj = ConjugateOptions {
                template: template.as_deref(),
                no_pronouns,
                highlight: highlight.as_deref(),
                json,
            };
            verb_ops::conjugate(&opts, &infinitive, &conj);
        }
        Command::Templates { infinitive, lang } => {
            let opts = LookupOptions {
                lang: &lang,
                data_dir,
                strict: false,
            };
            verb_ops::templates(&opts, &infinitive);
        }
        Command::CheckVerbs { file, lang } => check_ops::check_verbs(&file, &lang),
        Command::Stats { lang, strict } => {
            let opts = LookupOptions {
                lang: &lang,
                data_dir,
                strict,
            };
            verb_ops::stats(&opts);
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
