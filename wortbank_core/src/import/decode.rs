//! HTML character references for German letters.
//!
//! Meaning lines exported from flash-card decks keep umlauts and sharp s as
//! HTML references. Only this fixed set is decoded; everything else passes
//! through untouched.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const GERMAN_ENTITIES: &[(&str, &str)] = &[
    ("auml", "ä"),
    ("ouml", "ö"),
    ("uuml", "ü"),
    ("szlig", "ß"),
    ("Auml", "Ä"),
    ("Ouml", "Ö"),
    ("Uuml", "Ü"),
    ("#228", "ä"),
    ("#246", "ö"),
    ("#252", "ü"),
    ("#223", "ß"),
    ("#196", "Ä"),
    ("#214", "Ö"),
    ("#220", "Ü"),
    ("#7838", "ẞ"),
];

static ENTITY: Lazy<Regex> = Lazy::new(|| super::compile(r"&(#[0-9]{3,4}|[A-Za-z]{4,5});"));

/// Replace the known German entities in `text`.
#[must_use]
pub fn decode_entities(text: &str) -> Cow<'_, str> {
    ENTITY.replace_all(text, |caps: &Captures<'_>| {
        let name = &caps[1];
        GERMAN_ENTITIES
            .iter()
            .find(|(entity, _)| *entity == name)
            .map_or_else(|| caps[0].to_string(), |(_, letter)| (*letter).to_string())
    })
}
