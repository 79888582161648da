use std::collections::HashSet;
use std::path::Path;
use std::process;

use conj_core::dict::load_document;
use conj_core::document::Element;
use conj_core::grammar::Language;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum VerbListProblem {
    #[error("missing <i> node at <v> #{0}")]
    MissingInfinitive(usize),

    #[error("infinitive \"{infinitive}\" found more than once at <v> #{entry}")]
    Duplicate { infinitive: String, entry: usize },
}

/// Entries of a verb list without an infinitive, and infinitives listed
/// more than once. Entries are numbered from 1.
pub fn find_problems(root: &Element) -> Vec<VerbListProblem> {
    let mut seen = HashSet::new();
    let mut problems = Vec::new();
    for (entry, verb) in (1..).zip(&root.children) {
        let infinitive = match verb.child("i").map(Element::text) {
            Some(text) if !text.is_empty() => text,
            _ => {
                problems.push(VerbListProblem::MissingInfinitive(entry));
                continue;
            }
        };
        if !seen.insert(infinitive) {
            problems.push(VerbListProblem::Duplicate {
                infinitive: infinitive.to_string(),
                entry,
            });
        }
    }
    problems
}

pub fn check_verbs(file: &str, lang: &str) {
    let language = Language::from_code(lang).unwrap_or_else(|| {
        eprintln!("Error: unknown language '{lang}' (available: fr, it)");
        process::exit(1);
    });
    let root = die!(load_document(Path::new(file)), "Error: {}");
    let expected = language.verbs_root();
    if root.name != expected {
        eprintln!("Error: root element is <{}>, expected <{expected}>", root.name);
        process::exit(1);
    }

    let problems = find_problems(&root);
    for p in &problems {
        println!("{file}: {p}");
    }
    println!("{} error(s) found.", problems.len());
    if !problems.is_empty() {
        process::exit(1);
    }
}
