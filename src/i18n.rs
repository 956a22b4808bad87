// ==========================================
// Localization (i18n) module
// ==========================================
// Uses the rust-i18n crate.
// Persian (default) and English catalogs live in locales/app.yml.
// Note: the rust_i18n::i18n! macro is initialized in lib.rs.
// ==========================================

/// Current locale code.
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Switch locale ("fa" or "en").
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Translate a message (no arguments).
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Translate a message with `%{name}` placeholders.
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
