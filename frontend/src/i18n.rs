use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use yew::prelude::*;

const EN_MESSAGES: &str = include_str!("../messages/en.json");
const TR_MESSAGES: &str = include_str!("../messages/tr.json");
const LOCALE_STORAGE_KEY: &str = "sivra_locale";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Tr];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Tr => "TR",
        }
    }

    pub fn from_code(code: &str) -> Option<Locale> {
        let code = code.trim().to_ascii_lowercase();
        Locale::ALL
            .into_iter()
            .find(|locale| code == locale.code() || code.starts_with(&format!("{}-", locale.code())))
    }

    fn messages(self) -> &'static str {
        match self {
            Locale::En => EN_MESSAGES,
            Locale::Tr => TR_MESSAGES,
        }
    }
}

fn parse_messages(locale: Locale) -> Value {
    serde_json::from_str(locale.messages()).unwrap_or_else(|e| {
        log::error!("Failed to parse {} messages: {}", locale.code(), e);
        Value::Null
    })
}

fn lookup<'a>(tree: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(tree, |node, part| node.get(part))
}

/// Translation lookup for one active locale, falling back to English.
#[derive(Clone)]
pub struct I18n {
    locale: Locale,
    active: Rc<Value>,
    fallback: Rc<Value>,
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl I18n {
    pub fn new(locale: Locale) -> Self {
        let fallback = Rc::new(parse_messages(Locale::En));
        let active = if locale == Locale::En {
            fallback.clone()
        } else {
            Rc::new(parse_messages(locale))
        };
        Self {
            locale,
            active,
            fallback,
        }
    }

    /// Resolves a dotted key such as `home.badge`. Unknown keys render as the key itself.
    pub fn t(&self, key: &str) -> String {
        [&self.active, &self.fallback]
            .into_iter()
            .find_map(|tree| lookup(tree, key).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// Structured lookup (pricing tiers, products, skills).
    pub fn objects<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(node) = lookup(&self.active, key).or_else(|| lookup(&self.fallback, key)) else {
            log::warn!("Missing structured translation {}", key);
            return Vec::new();
        };
        match serde_json::from_value(node.clone()) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("Malformed structured translation {}: {}", key, e);
                Vec::new()
            }
        }
    }
}

/// Last locale the visitor picked, if any.
pub fn stored_locale() -> Option<Locale> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let code = storage.get_item(LOCALE_STORAGE_KEY).ok()??;
    Locale::from_code(&code)
}

pub fn store_locale(locale: Locale) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    if storage.set_item(LOCALE_STORAGE_KEY, locale.code()).is_err() {
        gloo_console::error!(format!("Failed to persist locale {}", locale.code()));
    }
}

#[hook]
pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or_else(|| I18n::new(Locale::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Tier {
        id: String,
        features: Vec<String>,
        #[serde(default)]
        highlighted: bool,
    }

    fn leaf_keys(prefix: &str, node: &Value, out: &mut Vec<String>) {
        match node {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    leaf_keys(&path, child, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    #[test]
    fn both_locales_parse() {
        for locale in Locale::ALL {
            let parsed: Value = serde_json::from_str(locale.messages()).unwrap();
            assert!(parsed.is_object(), "{} messages must be an object", locale.code());
        }
    }

    #[test]
    fn turkish_covers_every_english_key() {
        let en: Value = serde_json::from_str(EN_MESSAGES).unwrap();
        let tr: Value = serde_json::from_str(TR_MESSAGES).unwrap();
        let mut keys = Vec::new();
        leaf_keys("", &en, &mut keys);
        assert!(!keys.is_empty());
        for key in keys {
            assert!(lookup(&tr, &key).is_some(), "tr is missing {}", key);
        }
    }

    #[test]
    fn resolves_and_falls_back() {
        let en = I18n::new(Locale::En);
        let tr = I18n::new(Locale::Tr);
        assert_eq!(en.t("nav.home"), "Home");
        assert_ne!(tr.t("nav.home"), en.t("nav.home"));
        assert_eq!(tr.t("no.such.key"), "no.such.key");
        assert_eq!(en.t("nav"), "nav", "objects are not strings");
    }

    #[test]
    fn structured_lookup() {
        let i18n = I18n::new(Locale::Tr);
        let tiers: Vec<Tier> = i18n.objects("pricing.tiers");
        assert_eq!(tiers.len(), 3);
        assert!(tiers.iter().all(|tier| !tier.id.is_empty() && !tier.features.is_empty()));
        assert_eq!(tiers.iter().filter(|tier| tier.highlighted).count(), 1);

        let missing: Vec<Tier> = i18n.objects("pricing.nothing");
        assert!(missing.is_empty());
        let wrong_shape: Vec<Tier> = i18n.objects("nav.home");
        assert!(wrong_shape.is_empty());
    }

    #[test]
    fn locale_codes() {
        assert_eq!(Locale::from_code("tr"), Some(Locale::Tr));
        assert_eq!(Locale::from_code("TR-tr"), Some(Locale::Tr));
        assert_eq!(Locale::from_code("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_code("de"), None);
        assert_eq!(Locale::default(), Locale::En);
    }
}
