// SPDX-License-Identifier: MPL-2.0
use super::catalog::{interpolate, Catalog};
use crate::config::Config;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/locales/"]
struct Asset;

/// Locale used when nothing else matches, and as the lookup fallback.
pub const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    catalogs: HashMap<LanguageIdentifier, Catalog>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("current_locale", &self.current_locale)
            .field("available_locales", &self.available_locales)
            .finish()
    }
}

impl I18n {
    /// Loads the embedded catalogs and resolves the active locale from the
    /// CLI, then the config, then the OS.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut catalogs = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".json") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(filename, "skipping locale file with invalid name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            match Catalog::from_json(&String::from_utf8_lossy(content.data.as_ref())) {
                Ok(catalog) => catalogs.push((locale, catalog)),
                Err(err) => tracing::error!(filename, %err, "skipping unreadable locale file"),
            }
        }

        let mut i18n = Self::from_catalogs(catalogs);
        if let Some(locale) = resolve_locale(
            cli_lang,
            config,
            &i18n.available_locales,
            sys_locale::get_locale(),
        ) {
            i18n.current_locale = locale;
        }
        i18n
    }

    /// Builds an instance from already parsed catalogs, starting on
    /// [`DEFAULT_LOCALE`].
    pub fn from_catalogs(catalogs: impl IntoIterator<Item = (LanguageIdentifier, Catalog)>) -> Self {
        let fallback_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let catalogs: HashMap<_, _> = catalogs.into_iter().collect();
        let mut available_locales: Vec<_> = catalogs.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        Self {
            catalogs,
            available_locales,
            current_locale: fallback_locale.clone(),
            fallback_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.catalogs.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.lookup(key)
            .map(str::to_string)
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        match self.lookup(key) {
            Some(template) => interpolate(template, args),
            None => format!("MISSING: {}", key),
        }
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.catalogs
            .get(&self.current_locale)
            .and_then(|catalog| catalog.get(key))
            .or_else(|| {
                self.catalogs
                    .get(&self.fallback_locale)
                    .and_then(|catalog| catalog.get(key))
            })
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
    os_locale: Option<String>,
) -> Option<LanguageIdentifier> {
    let candidates = [cli_lang, config.general.language.clone(), os_locale];
    candidates
        .into_iter()
        .flatten()
        .find_map(|lang_str| match_available(&lang_str, available))
}

/// Exact match first, then the first available locale with the same language.
fn match_available(lang_str: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let lang = lang_str.parse::<LanguageIdentifier>().ok()?;
    if available.contains(&lang) {
        return Some(lang);
    }
    available
        .iter()
        .find(|candidate| candidate.language == lang.language)
        .cloned()
}
