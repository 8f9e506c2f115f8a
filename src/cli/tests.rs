#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::config::{LLMProvider, RuntimeEnv};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_args_default_values() {
        let args = Args::try_parse_from(&["dili-rs"]).unwrap();

        assert_eq!(args.query, None);
        assert_eq!(args.select, 0);
        assert_eq!(args.output_path, PathBuf::from("./dili.reports"));
        assert!(!args.live);
        assert!(!args.force_live);
        assert!(!args.production);
        assert!(!args.share);
        assert!(!args.verbose);
        assert!(args.edits.is_empty());
    }

    #[test]
    fn test_args_query_and_select() {
        let args = Args::try_parse_from(&["dili-rs", "示例科技", "-s", "1", "-v"]).unwrap();

        assert_eq!(args.query, Some("示例科技".to_string()));
        assert_eq!(args.select, 1);
        assert!(args.verbose);
    }

    #[test]
    fn test_args_repeated_edits() {
        let args = Args::try_parse_from(&[
            "dili-rs",
            "示例科技",
            "--edit",
            "teamInfo.background=新文本",
            "--edit",
            "investmentSuggestion.risks=新风险",
        ])
        .unwrap();

        assert_eq!(
            args.edits,
            vec![
                "teamInfo.background=新文本".to_string(),
                "investmentSuggestion.risks=新风险".to_string()
            ]
        );
    }

    #[test]
    fn test_args_llm_options() {
        let args = Args::try_parse_from(&[
            "dili-rs",
            "--llm-provider", "openai",
            "--llm-api-key", "test-key",
            "--llm-api-base-url", "https://api.openai.com",
            "--model", "gpt-4o",
            "--max-tokens", "2048",
            "--temperature", "0.7",
        ])
        .unwrap();

        assert_eq!(args.llm_provider, Some("openai".to_string()));
        assert_eq!(args.llm_api_key, Some("test-key".to_string()));
        assert_eq!(
            args.llm_api_base_url,
            Some("https://api.openai.com".to_string())
        );
        assert_eq!(args.model, Some("gpt-4o".to_string()));
        assert_eq!(args.max_tokens, Some(2048));
        assert_eq!(args.temperature, Some(0.7));
    }

    #[test]
    fn test_into_config_basic() {
        let args =
            Args::try_parse_from(&["dili-rs", "示例科技", "-o", "/test/output"]).unwrap();

        let config = args.into_config().unwrap();

        assert_eq!(config.company_query, Some("示例科技".to_string()));
        assert_eq!(config.select_index, 0);
        assert_eq!(config.output_path, PathBuf::from("/test/output"));
        assert!(config.use_mock_data);
        assert!(!config.force_live);
        assert_eq!(config.runtime, RuntimeEnv::Development);
    }

    #[test]
    fn test_into_config_with_overrides() {
        let args = Args::try_parse_from(&[
            "dili-rs",
            "示例科技",
            "--live",
            "--production",
            "--share",
            "--llm-provider", "moonshot",
            "--model", "moonshot-v1-32k",
            "--registry-app-key", "rk",
            "--registry-secret-key", "rs",
            "--websearch-api-key", "wk",
        ])
        .unwrap();

        let config = args.into_config().unwrap();

        assert!(!config.use_mock_data);
        assert_eq!(config.runtime, RuntimeEnv::Production);
        assert!(config.share);
        assert_eq!(config.llm.provider, LLMProvider::Moonshot);
        assert_eq!(config.llm.model, "moonshot-v1-32k");
        assert_eq!(config.registry.app_key, "rk");
        assert_eq!(config.registry.secret_key, "rs");
        assert_eq!(config.web_search.api_key, "wk");
    }

    #[test]
    fn test_into_config_force_live() {
        let args = Args::try_parse_from(&["dili-rs", "示例科技", "--force-live"]).unwrap();

        let config = args.into_config().unwrap();
        assert!(config.use_mock_data);
        assert!(config.force_live);
    }

    #[test]
    fn test_into_config_unreadable_file_is_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("dili.toml");
        std::fs::write(&config_path, "not [ valid ]] toml").unwrap();

        let args = Args::try_parse_from(&[
            "dili-rs",
            "示例科技",
            "-c",
            config_path.to_str().unwrap(),
        ])
        .unwrap();
        assert!(args.into_config().is_err());

        let args =
            Args::try_parse_from(&["dili-rs", "示例科技", "-c", "/nonexistent/dili.toml"])
                .unwrap();
        assert!(args.into_config().is_err());
    }
}
