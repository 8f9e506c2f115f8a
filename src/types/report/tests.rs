#[cfg(test)]
mod tests {
    use crate::error::GatewayError;
    use crate::gateway::mock;
    use crate::types::report::parse_report_json;

    fn full_report_json() -> serde_json::Value {
        let detail = mock::mock_company_detail("abc123");
        let results = mock::mock_web_search("示例");
        serde_json::to_value(mock::mock_generate_report(&detail, &results)).unwrap()
    }

    #[test]
    fn test_parse_report_complete() {
        let json = full_report_json().to_string();
        let report = parse_report_json(&json).unwrap();
        assert!(!report.company_basic_info.name.is_empty());
        assert!(!report.investment_suggestion.recommendation.is_empty());
    }

    #[test]
    fn test_parse_report_with_code_fence() {
        let fenced = format!("```json\n{}\n```", full_report_json());
        assert!(parse_report_json(&fenced).is_ok());
    }

    #[test]
    fn test_parse_report_missing_section() {
        let mut value = full_report_json();
        value.as_object_mut().unwrap().remove("marketAnalysis");

        let err = parse_report_json(&value.to_string()).unwrap_err();
        match err {
            GatewayError::Validation(msg) => assert!(msg.contains("marketAnalysis")),
            other => panic!("期望校验错误，实际为: {:?}", other),
        }
    }

    #[test]
    fn test_parse_report_not_an_object() {
        assert!(matches!(
            parse_report_json("[1, 2, 3]"),
            Err(GatewayError::Validation(_))
        ));
        assert!(matches!(
            parse_report_json("not json at all"),
            Err(GatewayError::Validation(_))
        ));
    }

    #[test]
    fn test_set_field_replaces_whole_value() {
        let detail = mock::mock_company_detail("abc123");
        let results = mock::mock_web_search("示例");
        let mut report = mock::mock_generate_report(&detail, &results);

        report
            .set_field("teamInfo.background", "核心团队来自头部机构")
            .unwrap();
        assert_eq!(report.team_info.background, "核心团队来自头部机构");

        report
            .set_field("investmentSuggestion.recommendation", "暂缓投资")
            .unwrap();
        assert_eq!(report.investment_suggestion.recommendation, "暂缓投资");
    }

    #[test]
    fn test_set_field_unknown_path() {
        let detail = mock::mock_company_detail("abc123");
        let results = mock::mock_web_search("示例");
        let mut report = mock::mock_generate_report(&detail, &results);

        assert!(matches!(
            report.set_field("teamInfo.salary", "x"),
            Err(GatewayError::Validation(_))
        ));
        assert!(matches!(
            report.set_field("nosuchsection.name", "x"),
            Err(GatewayError::Validation(_))
        ));
        assert!(matches!(
            report.set_field("teamInfo", "x"),
            Err(GatewayError::Validation(_))
        ));
    }
}
