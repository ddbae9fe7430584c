//! Localized chart and report strings
//!
//! Two fixed language tables, selected once per run. Profiles are whole
//! records; there are no partial overrides.

use crate::error::ReportError;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Supported report languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    /// The two-letter code used in output filenames and CLI arguments.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Es => "ES",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EN" => Ok(Language::En),
            "ES" => Ok(Language::Es),
            other => Err(ReportError::UnsupportedLanguage(other.to_string())),
        }
    }
}

/// Chart titles and legend labels for one language.
#[derive(Debug, Clone, Copy)]
pub struct LanguageProfile {
    pub general_title: &'static str,
    pub general_labels: [&'static str; 2],
    pub length_title: &'static str,
    pub top_title: &'static str,
    pub compliance_title: &'static str,
    pub compliance_labels: [&'static str; 2],
}

lazy_static! {
    static ref PROFILES: HashMap<Language, LanguageProfile> = {
        let mut m = HashMap::new();
        m.insert(
            Language::En,
            LanguageProfile {
                general_title: "Passwords Recovery Statistics",
                general_labels: ["Cracked", "Not Cracked"],
                length_title: "Password Length Distribution",
                top_title: "Top 10 Most Used Passwords",
                compliance_title: "Password Policy Compliance",
                compliance_labels: ["Compliant", "Non-compliant"],
            },
        );
        m.insert(
            Language::Es,
            LanguageProfile {
                general_title: "Estadísticas de Contraseñas Recuperadas",
                general_labels: ["Descifradas", "No Descifradas"],
                length_title: "Distribución de Longitud de Contraseñas",
                top_title: "Top 10 Contraseñas Más Usadas",
                compliance_title: "Análisis de Cumplimiento de Políticas",
                compliance_labels: ["Cumple", "No Cumple"],
            },
        );
        m
    };
}

/// Look up the immutable profile for a language.
pub fn profile(language: Language) -> &'static LanguageProfile {
    &PROFILES[&language]
}
