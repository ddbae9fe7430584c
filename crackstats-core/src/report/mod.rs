//! Report composition
//!
//! Fills a markdown template with the computed statistics and embeds the
//! rendered charts as base64 data URIs. Substitution is literal string
//! replacement; there is no templating engine.

#[cfg(test)]
mod report_tests;

use crate::analytics::AnalyticsData;
use crate::charts::ChartKind;
use crate::error::{ReportError, Result};
use crate::locale::Language;
use crate::stats::calculate_statistics;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::{Path, PathBuf};

const TEMPLATE_EN: &str = include_str!("../../resources/template_EN.md");
const TEMPLATE_ES: &str = include_str!("../../resources/template_ES.md");

// The literal image slot the templates use in place of real image data.
const IMAGE_DATA_SLOT: &str = "base64/imagedata";

/// The exact image caption for a chart in a given language.
///
/// Image embedding matches on the full caption text, so these eight strings
/// are a compatibility contract: a custom template whose captions differ
/// keeps its literal placeholders. Note that the compliance caption is not
/// the same string as the compliance chart title.
pub fn chart_caption(language: Language, kind: ChartKind) -> &'static str {
    match (language, kind) {
        (Language::En, ChartKind::GeneralStats) => "Passwords Recovery Statistics",
        (Language::En, ChartKind::LengthDistribution) => "Password Length Distribution",
        (Language::En, ChartKind::TopPasswords) => "Top 10 Most Used Passwords",
        (Language::En, ChartKind::Compliance) => "Password Policy Compliance Statistics",
        (Language::Es, ChartKind::GeneralStats) => "Estadísticas de Contraseñas Recuperadas",
        (Language::Es, ChartKind::LengthDistribution) => "Distribución de Longitud de Contraseñas",
        (Language::Es, ChartKind::TopPasswords) => "Top 10 Contraseñas Más Usadas",
        (Language::Es, ChartKind::Compliance) => "Análisis de Cumplimiento de Políticas",
    }
}

fn builtin_template(language: Language) -> &'static str {
    match language {
        Language::En => TEMPLATE_EN,
        Language::Es => TEMPLATE_ES,
    }
}

fn load_template(language: Language, custom: Option<&Path>) -> Result<String> {
    match custom {
        Some(path) => {
            if !path.exists() {
                return Err(ReportError::TemplateNotFound(path.to_path_buf()));
            }
            Ok(fs::read_to_string(path)?)
        }
        None => Ok(builtin_template(language).to_string()),
    }
}

fn image_to_data_uri(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
}

/// Compose the final markdown report.
///
/// Substitutes every statistic placeholder, embeds each chart whose file
/// exists in `outdir`, writes `password_statistics_<LANG>.md` there and
/// returns the path. Placeholders for absent chart files are left literal;
/// unrecognized `{{…}}` tokens are left untouched.
pub fn compose_report(
    data: &AnalyticsData,
    outdir: &Path,
    language: Language,
    custom_template: Option<&Path>,
) -> Result<PathBuf> {
    let template = load_template(language, custom_template)?;

    let mut content = template;
    for (key, value) in calculate_statistics(data) {
        content = content.replace(&format!("{{{{{}}}}}", key), &value);
    }

    // Captions for both languages are checked so a custom template written
    // in either language embeds its images.
    for caption_language in Language::ALL {
        for kind in ChartKind::ALL {
            let caption = chart_caption(caption_language, kind);
            let placeholder = format!("![{}]({})", caption, IMAGE_DATA_SLOT);
            if !content.contains(&placeholder) {
                continue;
            }

            let image_path = outdir.join(kind.file_name());
            if !image_path.exists() {
                tracing::debug!(chart = kind.file_name(), "chart file absent, placeholder kept");
                continue;
            }

            let replacement = format!("![{}]({})", caption, image_to_data_uri(&image_path)?);
            content = content.replace(&placeholder, &replacement);
        }
    }

    let output_path = outdir.join(format!("password_statistics_{}.md", language.code()));
    fs::write(&output_path, content)?;
    tracing::info!(report = %output_path.display(), "composed report");

    Ok(output_path)
}
