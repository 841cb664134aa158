//! Translation catalog for overlay tooltips.
//!
//! One string table per locale, loaded from the TOML files under `locales/`.
//! Lookups fall back from the active locale to English, and from English to a
//! visible `(no translation:<key>)` marker.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};

use hud_core::{HudError, Localizer, Result};
use tracing::warn;

/// Locale used when no locale is set, and the fallback for missing keys.
pub const DEFAULT_LOCALE: &str = "en";

/// Locales shipped with the crate.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "de", "fr"];

const BUILTIN_TABLES: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.toml")),
    ("de", include_str!("../locales/de.toml")),
    ("fr", include_str!("../locales/fr.toml")),
];

/// Maps translation keys to templates for a single locale.
pub type StringTable = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct Catalog {
    active_locale: String,
    tables: BTreeMap<String, StringTable>,
}

impl Catalog {
    /// Catalog with every shipped locale, English active.
    pub fn builtin() -> Result<Self> {
        let mut catalog = Self {
            active_locale: DEFAULT_LOCALE.to_string(),
            tables: BTreeMap::new(),
        };
        for (locale, raw) in BUILTIN_TABLES {
            catalog.insert_table(locale, raw)?;
        }
        Ok(catalog)
    }

    /// Shipped catalog with `locale` active (English if `locale` is unknown).
    pub fn with_locale(locale: &str) -> Result<Self> {
        let mut catalog = Self::builtin()?;
        catalog.set_locale(locale);
        Ok(catalog)
    }

    /// Parse `raw` as a flat `key = "template"` TOML table and merge it into
    /// `locale`'s table.  Later inserts override earlier keys.
    pub fn insert_table(&mut self, locale: &str, raw: &str) -> Result<()> {
        let parsed: toml::Table = toml::from_str(raw)
            .map_err(|e| HudError::Locale(format!("{locale}: {e}")))?;

        let table = self.tables.entry(locale.to_string()).or_default();
        for (key, value) in parsed {
            let text = value.as_str().ok_or_else(|| {
                HudError::Locale(format!("{locale}: value of '{key}' is not a string"))
            })?;
            table.insert(key, text.to_string());
        }
        Ok(())
    }

    /// Switch the active locale.  Unknown locales are ignored.
    pub fn set_locale(&mut self, locale: &str) -> bool {
        if !self.tables.contains_key(locale) {
            warn!(locale, "unknown locale; keeping '{}'", self.active_locale);
            return false;
        }
        self.active_locale = locale.to_string();
        true
    }

    pub fn active_locale(&self) -> &str {
        &self.active_locale
    }

    /// Raw template for `key`, falling back to English.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lookup(&self.active_locale, key)
            .or_else(|| self.lookup(DEFAULT_LOCALE, key))
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.tables
            .get(locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

impl Localizer for Catalog {
    fn format(&self, key: &str, args: &[&dyn fmt::Display]) -> String {
        match self.get(key) {
            Some(template) => substitute(template, args),
            None => format!("(no translation:{key})"),
        }
    }
}

/// Replace `{0}`, `{1}`, … with the matching argument in one left-to-right
/// pass; argument text is never rescanned.  Placeholders without an argument
/// are left untouched.
fn substitute(template: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let placeholder = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            args.get(index).map(|arg| (close, arg))
        });

        match placeholder {
            Some((close, arg)) => {
                let _ = write!(out, "{arg}");
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_formats_english() {
        let catalog = Catalog::builtin().unwrap();
        let text = catalog.format("building-status", &[&5]);
        assert!(text.contains('5'));
        assert!(!text.contains("{0}"));
    }

    #[test]
    fn every_shipped_locale_has_the_house_upgrade_key() {
        let catalog = Catalog::builtin().unwrap();
        for locale in SUPPORTED_LOCALES {
            assert!(catalog.lookup(locale, "house-upgrade-status").is_some(), "{locale}");
        }
    }

    #[test]
    fn missing_key_falls_back_to_english() {
        let catalog = Catalog::with_locale("fr").unwrap();
        assert_eq!(catalog.active_locale(), "fr");
        assert_eq!(
            catalog.get("building-status"),
            Catalog::builtin().unwrap().get("building-status")
        );
    }

    #[test]
    fn unknown_key_degrades_to_marker() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.format("nope", &[&1]), "(no translation:nope)");
    }

    #[test]
    fn unknown_locale_is_ignored() {
        let mut catalog = Catalog::builtin().unwrap();
        assert!(!catalog.set_locale("xx"));
        assert_eq!(catalog.active_locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn substitute_is_positional() {
        assert_eq!(substitute("{1} then {0}", &[&"a", &"b"]), "b then a");
        assert_eq!(substitute("{0} of {2}", &[&3]), "3 of {2}");
    }

    #[test]
    fn argument_text_is_not_rescanned() {
        assert_eq!(substitute("{0} and {1}", &[&"{1}", &"x"]), "{1} and x");
        assert_eq!(substitute("{1} and {0}", &[&"y", &"{0}"]), "{0} and y");
    }

    #[test]
    fn stray_braces_survive() {
        assert_eq!(substitute("{ {0}} {x}", &[&7]), "{ 7} {x}");
    }

    #[test]
    fn non_string_values_are_rejected() {
        let mut catalog = Catalog::builtin().unwrap();
        let err = catalog.insert_table("en", "building-status = 3").unwrap_err();
        assert!(matches!(err, HudError::Locale(_)));
    }
}
