// Domain rules - Naming and filter composition policies

use std::ffi::OsStr;
use std::path::Path;

use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::domain::model::WatermarkStyle;

/// Bytes of randomness behind every generated name
pub const RANDOM_NAME_ENTROPY_BYTES: usize = 128;

/// Length of a generated name stem (hex SHA-256)
pub const RANDOM_NAME_STEM_LEN: usize = 64;

/// Rules for destination file names
pub struct NamingRules;

impl NamingRules {
    /// Generate a collision-resistant basename carrying `extension`
    ///
    /// The stem is the hex digest of fresh random bytes, so names issued in
    /// one batch never need to be coordinated.
    pub fn random_basename(extension: Option<&OsStr>) -> String {
        let mut seed = [0u8; RANDOM_NAME_ENTROPY_BYTES];
        rand::rng().fill_bytes(&mut seed);
        let stem = hex::encode(Sha256::digest(seed));

        match extension {
            Some(ext) => format!("{}.{}", stem, ext.to_string_lossy()),
            None => stem,
        }
    }

    /// Check that a name looks like one produced by `random_basename`
    pub fn is_generated_name(name: &str) -> bool {
        let stem = name.split('.').next().unwrap_or_default();
        stem.len() == RANDOM_NAME_STEM_LEN
            && stem
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }
}

/// Rules for building ffmpeg filter descriptions
pub struct FilterRules;

impl FilterRules {
    /// Escape literal text for drawtext's own `%{...}` expansion
    pub fn escape_text_expansion(text: &str) -> String {
        escape_chars(text, &['\\', '\'', '%'])
    }

    /// Escape a value for use inside a filter's option list
    pub fn escape_option_value(value: &str) -> String {
        escape_chars(value, &['\\', '\'', '=', ':'])
    }

    /// Escape a complete filter for use inside a filter graph
    pub fn escape_graph(filter: &str) -> String {
        escape_chars(filter, &['\\', '\'', '[', ']', ',', ';'])
    }

    /// Render the centered `drawtext` filter for `text`
    pub fn drawtext(text: &str, font_path: &Path, style: &WatermarkStyle) -> String {
        let font = font_path.to_string_lossy();
        let options = [
            (
                "text",
                Self::escape_option_value(&Self::escape_text_expansion(text)),
            ),
            ("fontfile", Self::escape_option_value(&font)),
            ("fontsize", style.font_size.to_string()),
            ("fontcolor", style.font_color.to_string()),
            ("alpha", style.alpha.to_string()),
            ("box", if style.boxed { "1" } else { "0" }.to_string()),
            ("x", Self::escape_option_value(style.x)),
            ("y", Self::escape_option_value(style.y)),
        ];

        let options = options
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(":");

        Self::escape_graph(&format!("drawtext={}", options))
    }
}

fn escape_chars(value: &str, special: &[char]) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if special.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
