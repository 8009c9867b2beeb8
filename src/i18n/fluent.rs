// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle loading and lookup.

use crate::config::{Config, DEFAULT_LOCALE};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            if let Some(bundle) = build_bundle(&locale, &content.data) {
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(
            cli_lang,
            config.general.language.as_deref(),
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or_else(default_locale);
        log::debug!("using locale {current_locale}");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Translates `key` in the current locale.
    ///
    /// Unknown keys render as `MISSING: key` so gaps are visible on screen.
    pub fn tr(&self, key: &str) -> String {
        let formatted = self.bundles.get(&self.current_locale).and_then(|bundle| {
            let pattern = bundle.get_message(key)?.value()?;
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, None, &mut errors);
            errors.is_empty().then(|| value.into_owned())
        });
        formatted.unwrap_or_else(|| format!("MISSING: {key}"))
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default())
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: &[u8],
) -> Option<FluentBundle<FluentResource>> {
    let resource = match FluentResource::try_new(String::from_utf8_lossy(source).into_owned()) {
        Ok(resource) => resource,
        Err((_, errors)) => {
            log::warn!("skipping {locale} translations: {} parse errors", errors.len());
            return None;
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Keep placeables free of Unicode isolation marks.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        log::warn!("skipping {locale} translations: {} duplicate keys", errors.len());
        return None;
    }
    Some(bundle)
}

/// Picks the first candidate that parses and has a bundle, in priority order:
/// CLI flag, config file, OS locale.
pub(crate) fn resolve_locale(
    cli_lang: Option<String>,
    config_lang: Option<&str>,
    os_lang: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let os_candidates = os_lang.into_iter().flat_map(|tag| {
        // "fr-CA" should still reach the "fr" bundle.
        let language = tag.split(['-', '_']).next().map(str::to_owned);
        [Some(tag), language]
    });

    cli_lang
        .into_iter()
        .chain(config_lang.map(str::to_owned))
        .map(Some)
        .chain(os_candidates)
        .flatten()
        .filter_map(|tag| tag.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}
