use std::collections::HashSet;
use std::path::Path;
use std::process;

use serde::Serialize;

use conj_core::conjugate::{matches_user_text, Paradigm};
use conj_core::grammar::Language;
use conj_core::settings::settings;
use conj_core::template::InflectionDesc;
use conj_core::unicode::fold_case;
use conj_engine::{DataPaths, Engine};

/// Where and how to load the dictionary.
pub struct LookupOptions<'a> {
    pub lang: &'a str,
    pub data_dir: Option<&'a Path>,
    /// Disable accent-tolerant lookup regardless of settings.
    pub strict: bool,
}

pub struct ConjugateOptions<'a> {
    pub template: Option<&'a str>,
    pub no_pronouns: bool,
    /// Mark the forms matching this text.
    pub highlight: Option<&'a str>,
    pub json: bool,
}

pub fn open_engine(opts: &LookupOptions) -> Engine {
    let paths = opts.data_dir.map(|dir| {
        let language = Language::from_code(opts.lang).unwrap_or_else(|| {
            eprintln!("Error: unknown language '{}' (available: fr, it)", opts.lang);
            process::exit(1);
        });
        DataPaths::for_language(language, dir)
    });
    let accent_tolerant = settings().lookup.accent_tolerant && !opts.strict;
    die!(
        Engine::open(opts.lang, accent_tolerant, paths),
        "Error loading dictionary: {}"
    )
}

/// Analyses with exact repeats removed, first occurrence kept.
pub fn unique_analyses(results: &[InflectionDesc]) -> Vec<&InflectionDesc> {
    let mut seen = HashSet::new();
    results.iter().filter(|r| seen.insert(*r)).collect()
}

#[derive(Serialize)]
struct DeconjugationReport<'a> {
    word: &'a str,
    analyses: Vec<&'a InflectionDesc>,
}

pub fn deconjugate(opts: &LookupOptions, word: &str, json: bool) {
    let engine = open_engine(opts);
    let word = fold_case(word.trim());
    let results = engine.deconjugate(&word);
    let analyses = unique_analyses(&results);

    if json {
        let report = DeconjugationReport {
            word: &word,
            analyses,
        };
        let out = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{out}");
        return;
    }

    if analyses.is_empty() {
        eprintln!("No analysis for '{word}'");
        return;
    }
    for a in analyses {
        println!("{}\t{}\t{}", a.infinitive, a.template, a.tag);
    }
}

#[derive(Serialize)]
struct ParadigmReport<'a> {
    infinitive: &'a str,
    template: &'a str,
    tenses: Paradigm,
}

pub fn conjugate(opts: &LookupOptions, infinitive: &str, conj: &ConjugateOptions) {
    let engine = open_engine(opts);
    let templates: Vec<&str> = match conj.template {
        Some(t) => vec![t],
        None => engine.lookup_templates(infinitive),
    };
    if templates.is_empty() {
        eprintln!("Error: unknown verb '{infinitive}'");
        process::exit(1);
    }
    let include_pronouns = settings().conjugation.include_pronouns && !conj.no_pronouns;

    let mut reports = Vec::with_capacity(templates.len());
    for template in templates {
        let tenses = die!(
            engine.conjugate_all(infinitive, template, include_pronouns),
            "Error: {}"
        );
        reports.push(ParadigmReport {
            infinitive,
            template,
            tenses,
        });
    }

    if conj.json {
        let out = die!(serde_json::to_string_pretty(&reports), "Error: {}");
        println!("{out}");
        return;
    }

    for report in &reports {
        println!("{} ({})", report.infinitive, report.template);
        for tense in report.tenses.iter().filter(|t| !t.persons.is_empty()) {
            println!("- {} {}:", tense.mode, tense.tense);
            for person in &tense.persons {
                let line: Vec<String> = person
                    .iter()
                    .map(|form| match conj.highlight {
                        Some(text) if matches_user_text(form, text) => format!("*{form}*"),
                        _ => form.clone(),
                    })
                    .collect();
                println!("{}", line.join(", "));
            }
        }
        println!();
    }
}

pub fn templates(opts: &LookupOptions, infinitive: &str) {
    let engine = open_engine(opts);
    let templates = engine.lookup_templates(infinitive);
    if templates.is_empty() {
        eprintln!("Error: unknown verb '{infinitive}'");
        process::exit(1);
    }
    for t in templates {
        let aspirate = if engine.is_starting_with_aspirate_h(infinitive) {
            " (aspirate h)"
        } else {
            ""
        };
        println!("{t}{aspirate}");
    }
}

pub fn stats(opts: &LookupOptions) {
    let engine = open_engine(opts);
    let dict = engine.dictionary();
    let stats = dict.stats();
    println!("Language:      {}", dict.language());
    println!("Accents:       {}", if dict.is_accent_tolerant() { "tolerant" } else { "strict" });
    println!("Templates:     {}", stats.templates);
    println!("Verbs:         {}", stats.verbs);
    println!("Radical keys:  {}", stats.radical_keys);
    println!("Trie nodes:    {}", stats.trie_nodes);
    println!("Trie memory:   {:.1} KB", stats.trie_bytes as f64 / 1024.0);
}
