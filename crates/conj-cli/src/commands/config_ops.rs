use std::fs;

pub fn settings_export() {
    print!("{}", conj_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        conj_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: data.dir={}, data.user_dir={}, lookup.accent_tolerant={}, conjugation.include_pronouns={}",
        s.data.dir.display(),
        s.data.user_dir.display(),
        s.lookup.accent_tolerant,
        s.conjugation.include_pronouns
    );
}

/// Install a settings file before anything reads the settings.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(conj_core::settings::init_custom(content), "Error: {}");
}
