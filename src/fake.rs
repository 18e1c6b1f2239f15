//! Synthetic post generation.
//!
//! The session is seeded with fake posts drawn from a fixed tech-flavored
//! vocabulary: a title is an adjective/noun pair, a body is a filled-in
//! phrase template. Generation is intentionally unseeded; every call pulls
//! from the thread RNG and is not reproducible.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::Post;

const ADJECTIVES: &[&str] = &[
    "auxiliary",
    "primary",
    "back-end",
    "digital",
    "open-source",
    "virtual",
    "cross-platform",
    "redundant",
    "online",
    "haptic",
    "multi-byte",
    "bluetooth",
    "wireless",
    "1080p",
    "neural",
    "optical",
    "solid state",
    "mobile",
];

const NOUNS: &[&str] = &[
    "driver",
    "protocol",
    "bandwidth",
    "panel",
    "microchip",
    "program",
    "port",
    "card",
    "array",
    "interface",
    "system",
    "sensor",
    "firewall",
    "hard drive",
    "pixel",
    "alarm",
    "feed",
    "monitor",
    "application",
    "transmitter",
    "bus",
    "circuit",
    "capacitor",
    "matrix",
];

const VERBS: &[&str] = &[
    "back up",
    "bypass",
    "hack",
    "override",
    "compress",
    "copy",
    "navigate",
    "index",
    "connect",
    "generate",
    "quantify",
    "calculate",
    "synthesize",
    "input",
    "transmit",
    "program",
    "reboot",
    "parse",
];

const ING_VERBS: &[&str] = &[
    "backing up",
    "bypassing",
    "hacking",
    "overriding",
    "compressing",
    "copying",
    "navigating",
    "indexing",
    "connecting",
    "generating",
    "quantifying",
    "calculating",
    "synthesizing",
    "inputting",
    "transmitting",
    "programming",
    "rebooting",
    "parsing",
];

const ABBREVIATIONS: &[&str] = &[
    "TCP", "HTTP", "SDD", "RAM", "GB", "CSS", "SSL", "AGP", "SQL", "FTP", "PCI", "AI", "ADP",
    "RSS", "XML", "EXE", "COM", "HDD", "THX", "SMTP", "SMS", "USB", "PNG", "SAS", "SCSI", "JSON",
    "XSS", "JBOD",
];

// Slot names must match the lookup in `expand`.
const PHRASES: &[&str] = &[
    "If we {verb} the {noun}, we can get to the {abbr} {noun} through the {adj} {abbr} {noun}!",
    "We need to {verb} the {adj} {abbr} {noun}!",
    "Try to {verb} the {abbr} {noun}, maybe it will {verb} the {adj} {noun}!",
    "You can't {verb} the {noun} without {ing} the {adj} {abbr} {noun}!",
    "Use the {adj} {abbr} {noun}, then you can {verb} the {adj} {noun}!",
    "The {abbr} {noun} is down, {verb} the {adj} {noun} so we can {verb} the {abbr} {noun}!",
    "{ing} the {noun} won't do anything, we need to {verb} the {adj} {abbr} {noun}!",
    "I'll {verb} the {adj} {abbr} {noun}, that should {verb} the {abbr} {noun}!",
];

fn pick<'a, R: Rng>(rng: &mut R, words: &[&'a str]) -> &'a str {
    // Vocabulary slices are non-empty constants.
    words.choose(rng).copied().unwrap_or("")
}

fn expand<R: Rng>(template: &str, rng: &mut R) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let word = match &after[..close] {
                    "adj" => pick(rng, ADJECTIVES),
                    "noun" => pick(rng, NOUNS),
                    "verb" => pick(rng, VERBS),
                    "ing" => pick(rng, ING_VERBS),
                    "abbr" => pick(rng, ABBREVIATIONS),
                    other => other,
                };
                out.push_str(word);
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// A random adjective/noun title, e.g. "neural firewall".
pub fn random_title() -> String {
    let mut rng = rand::thread_rng();
    format!("{} {}", pick(&mut rng, ADJECTIVES), pick(&mut rng, NOUNS))
}

/// A random body sentence from the phrase templates.
pub fn random_phrase() -> String {
    let mut rng = rand::thread_rng();
    let template = pick(&mut rng, PHRASES);
    expand(template, &mut rng)
}

/// One fresh synthetic post.
pub fn random_post() -> Post {
    Post::new(random_title(), random_phrase())
}

/// A batch of synthetic posts, used to seed the store and the archive.
pub fn random_posts(count: usize) -> Vec<Post> {
    (0..count).map(|_| random_post()).collect()
}
