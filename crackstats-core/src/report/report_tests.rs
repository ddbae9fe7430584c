//! Tests for report composition

#[cfg(test)]
mod tests {
    use crate::analytics::{
        AnalyticsData, ComplianceTally, CrackTally, LengthBucket, PasswordCount,
    };
    use crate::charts::ChartKind;
    use crate::error::ReportError;
    use crate::locale::Language;
    use crate::report::{chart_caption, compose_report};
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn sample_data() -> AnalyticsData {
        AnalyticsData {
            general: CrackTally {
                cracked: 80,
                not_cracked: 20,
            },
            lengths: vec![
                LengthBucket {
                    label: "8 chars".to_string(),
                    count: 5,
                },
                LengthBucket {
                    label: "10 chars".to_string(),
                    count: 9,
                },
            ],
            top_passwords: vec![PasswordCount {
                value: "123456".to_string(),
                count: 15,
            }],
            compliance: ComplianceTally {
                compliant: 30,
                non_compliant: 50,
            },
        }
    }

    // Stand-in chart bytes; embedding reads the file verbatim, so the
    // content does not need to be a decodable image.
    fn write_fake_chart(outdir: &Path, kind: ChartKind) -> PathBuf {
        let path = outdir.join(kind.file_name());
        fs::write(&path, format!("png-bytes-{}", kind.file_name())).unwrap();
        path
    }

    #[test]
    fn test_placeholders_are_substituted() {
        let dir = TempDir::new().unwrap();
        let path = compose_report(&sample_data(), dir.path(), Language::En, None).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "password_statistics_EN.md"
        );
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("**100**"));
        assert!(content.contains("**80**"));
        assert!(content.contains("80.0%"));
        assert!(content.contains("37.5%"));
        assert!(content.contains("**10 chars**"));
        assert!(content.contains("**8 chars**"));
        assert!(!content.contains("{{"));
    }

    #[test]
    fn test_unrecognized_tokens_are_left_untouched() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("custom.md");
        fs::write(&template, "{{TOTAL_AMOUNT_OF_CREDS}} and {{SOMETHING_ELSE}}").unwrap();

        let path =
            compose_report(&sample_data(), dir.path(), Language::En, Some(&template)).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "100 and {{SOMETHING_ELSE}}");
    }

    #[test]
    fn test_missing_custom_template_is_fatal_and_named() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.md");

        match compose_report(&sample_data(), dir.path(), Language::En, Some(&missing)) {
            Err(ReportError::TemplateNotFound(path)) => assert_eq!(path, missing),
            other => panic!("Expected TemplateNotFound, got {:?}", other),
        }
        assert!(!dir.path().join("password_statistics_EN.md").exists());
    }

    #[test]
    fn test_existing_charts_are_embedded_as_data_uris() {
        let dir = TempDir::new().unwrap();
        let chart_path = write_fake_chart(dir.path(), ChartKind::GeneralStats);

        let path = compose_report(&sample_data(), dir.path(), Language::En, None).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        let caption = chart_caption(Language::En, ChartKind::GeneralStats);
        let needle = format!("![{}](data:image/png;base64,", caption);
        assert!(content.contains(&needle), "no data URI for {}", caption);

        // Round-trip: the embedded payload decodes back to the file bytes.
        let start = content.find(&needle).unwrap() + needle.len();
        let end = start + content[start..].find(')').unwrap();
        let decoded = STANDARD.decode(&content[start..end]).unwrap();
        assert_eq!(decoded, fs::read(&chart_path).unwrap());
    }

    #[test]
    fn test_absent_charts_leave_placeholders_literal() {
        let dir = TempDir::new().unwrap();
        // Only one of the four charts exists.
        write_fake_chart(dir.path(), ChartKind::GeneralStats);

        let path = compose_report(&sample_data(), dir.path(), Language::En, None).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.contains("![Password Length Distribution](base64/imagedata)"));
        assert!(content.contains("![Top 10 Most Used Passwords](base64/imagedata)"));
        assert!(!content.contains("![Passwords Recovery Statistics](base64/imagedata)"));
    }

    #[test]
    fn test_custom_template_with_unknown_captions_keeps_literal_images() {
        let dir = TempDir::new().unwrap();
        write_fake_chart(dir.path(), ChartKind::GeneralStats);

        let template = dir.path().join("custom.md");
        fs::write(&template, "![My Own Caption](base64/imagedata)").unwrap();

        let path =
            compose_report(&sample_data(), dir.path(), Language::En, Some(&template)).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "![My Own Caption](base64/imagedata)");
    }

    #[test]
    fn test_spanish_report_uses_spanish_captions_and_filename() {
        let dir = TempDir::new().unwrap();
        write_fake_chart(dir.path(), ChartKind::Compliance);

        let path = compose_report(&sample_data(), dir.path(), Language::Es, None).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "password_statistics_ES.md"
        );

        let content = fs::read_to_string(&path).unwrap();
        let caption = chart_caption(Language::Es, ChartKind::Compliance);
        assert!(content.contains(&format!("![{}](data:image/png;base64,", caption)));
    }

    #[test]
    fn test_caption_table_covers_both_languages_and_all_charts() {
        let mut seen = std::collections::HashSet::new();
        for language in Language::ALL {
            for kind in ChartKind::ALL {
                seen.insert(chart_caption(language, kind));
            }
        }
        assert_eq!(seen.len(), 8);
    }
}
