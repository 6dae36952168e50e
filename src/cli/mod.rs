//! CLI argument parsing and table rendering.

mod args;
mod table;

pub use args::{Args, Command};
pub use table::{format_table_row, group_thousands};

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    // ===========================================
    // Table rendering tests
    // ===========================================

    #[test]
    fn test_format_table_row_pads_columns() {
        let row = format_table_row(&["Voice", "Gender"], &[10, 8]);
        assert_eq!(row, "Voice     Gender");
    }

    #[test]
    fn test_format_table_row_truncates_long_cells() {
        let row = format_table_row(&["averylongvoicename", "F"], &[8, 4]);
        // Truncated to width - 1 so columns stay separated.
        assert_eq!(row, "averylo F");
    }

    #[test]
    fn test_format_table_row_trims_trailing_spaces() {
        let row = format_table_row(&["a", "b"], &[4, 10]);
        assert_eq!(row, "a   b");
    }

    #[test]
    fn test_format_table_row_handles_multibyte() {
        let row = format_table_row(&["Céline", "fr-FR"], &[10, 6]);
        assert!(row.starts_with("Céline"));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(5), "5");
        assert_eq!(group_thousands(3000), "3,000");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    // ===========================================
    // Argument parsing tests
    // ===========================================

    #[test]
    fn test_parse_list_voices_filters() {
        let args = Args::try_parse_from([
            "polly-tts-rs",
            "list-voices",
            "-e",
            "neural",
            "-l",
            "en",
            "-g",
            "Female",
        ])
        .unwrap();

        match args.command {
            Command::ListVoices {
                engine,
                language,
                gender,
                region,
            } => {
                assert_eq!(engine.as_deref(), Some("neural"));
                assert_eq!(language.as_deref(), Some("en"));
                assert_eq!(gender.as_deref(), Some("Female"));
                assert_eq!(region, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_billing_defaults_to_thirty_days() {
        let args = Args::try_parse_from(["polly-tts-rs", "billing"]).unwrap();

        match args.command {
            Command::Billing {
                days,
                start_date,
                end_date,
                ..
            } => {
                assert_eq!(days, 30);
                assert_eq!(start_date, None);
                assert_eq!(end_date, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_billing_explicit_dates() {
        let args = Args::try_parse_from([
            "polly-tts-rs",
            "billing",
            "--start-date",
            "2025-01-01",
            "--end-date",
            "2025-01-31",
        ])
        .unwrap();

        match args.command {
            Command::Billing {
                start_date,
                end_date,
                ..
            } => {
                assert_eq!(start_date.unwrap().to_string(), "2025-01-01");
                assert_eq!(end_date.unwrap().to_string(), "2025-01-31");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_billing_rejects_bad_date() {
        let result = Args::try_parse_from(["polly-tts-rs", "billing", "--start-date", "01/01/25"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Args::try_parse_from(["polly-tts-rs"]).is_err());
    }
}
