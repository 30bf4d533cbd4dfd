//! Display strings for components.
//!
//! Names are looked up through an explicit [`Translator`] handle rather than a global, so
//! callers decide which string resources a report is rendered with.

use phf::{Map, phf_map};
use std::borrow::Cow;

static ENGLISH_STRINGS: Map<&'static str, &'static str> = phf_map! {
    "BodyTube.BodyTube" => "Body tube",
    "Transition.Transition" => "Transition",
    "NoseCone.NoseCone" => "Nose cone",
};

/// Source of translated display strings.
pub trait Translator {
    /// Returns the string for `key`. Unknown keys are returned unchanged.
    fn get<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

/// Built-in English strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTranslator;

impl Translator for DefaultTranslator {
    fn get<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match ENGLISH_STRINGS.get(key) {
            Some(text) => Cow::Borrowed(*text),
            None => Cow::Borrowed(key),
        }
    }
}
