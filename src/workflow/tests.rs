use super::*;
use crate::config::Config;
use crate::error::GatewayError;
use crate::gateway::{Gateway, mock};

fn mock_controller() -> WorkflowController {
    let config = Config::default();
    assert!(config.use_mock_data);
    let gateway = Gateway::new(config).unwrap();
    WorkflowController::new(WorkflowStore::new(), gateway)
}

/// 把控制器推进到建议书已生成的状态
async fn controller_with_report() -> WorkflowController {
    let mut ctl = mock_controller();
    ctl.run_search("测试").await.unwrap();
    ctl.select_company(0).unwrap();
    ctl.load_company_detail().await.unwrap();
    ctl.run_web_search().await.unwrap();
    ctl.generate_report(false).await.unwrap();
    assert!(ctl.state().report.is_some());
    ctl
}

#[test]
fn test_step_order_and_next() {
    assert_eq!(WorkflowStep::Search.index(), 1);
    assert_eq!(WorkflowStep::Export.index(), 6);
    assert_eq!(WorkflowStep::Search.next(), Some(WorkflowStep::CompanyInfo));
    assert_eq!(WorkflowStep::Review.next(), Some(WorkflowStep::Export));
    assert_eq!(WorkflowStep::Export.next(), None);
}

#[test]
fn test_enablement_matrix() {
    let mut state = WorkflowState::default();

    // 初始只有搜索步可用
    assert!(WorkflowStep::Search.is_enabled(&state));
    for step in [
        WorkflowStep::CompanyInfo,
        WorkflowStep::WebSearch,
        WorkflowStep::Generate,
        WorkflowStep::Review,
        WorkflowStep::Export,
    ] {
        assert!(!step.is_enabled(&state), "步骤不应可用: {:?}", step);
    }

    // 选中公司后公司信息步可用
    let results = mock::mock_search_company("测试");
    state.selected_company = Some(results[0].clone());
    assert!(WorkflowStep::CompanyInfo.is_enabled(&state));
    assert!(!WorkflowStep::WebSearch.is_enabled(&state));

    // 网络搜索结果先于企业详情到达时，生成步仍不可用
    state.web_search_results = mock::mock_web_search("测试");
    assert!(!WorkflowStep::Generate.is_enabled(&state));

    state.company_detail = Some(mock::mock_company_detail("abc123"));
    assert!(WorkflowStep::WebSearch.is_enabled(&state));
    assert!(WorkflowStep::Generate.is_enabled(&state));
    assert!(!WorkflowStep::Review.is_enabled(&state));

    state.report = Some(mock::mock_generate_report(
        state.company_detail.as_ref().unwrap(),
        &state.web_search_results,
    ));
    assert!(WorkflowStep::Review.is_enabled(&state));
    assert!(WorkflowStep::Export.is_enabled(&state));
}

#[test]
fn test_completion_rules() {
    let mut state = WorkflowState::default();
    assert!(!WorkflowStep::Search.is_complete(&state));

    state.selected_company = Some(mock::mock_search_company("测试")[0].clone());
    assert!(WorkflowStep::Search.is_complete(&state));

    state.company_detail = Some(mock::mock_company_detail("abc123"));
    state.web_search_results = mock::mock_web_search("测试");
    state.report = Some(mock::mock_generate_report(
        state.company_detail.as_ref().unwrap(),
        &state.web_search_results,
    ));

    // 审阅步以步骤游标越过为完成标志
    assert!(!WorkflowStep::Review.is_complete(&state));
    state.current_step = WorkflowStep::Export;
    assert!(WorkflowStep::Review.is_complete(&state));

    // 导出步可反复执行，永不报告完成
    assert!(!WorkflowStep::Export.is_complete(&state));
}

#[test]
fn test_goto_step_gated_by_enablement() {
    let mut store = WorkflowStore::new();
    let err = store.goto_step(WorkflowStep::Generate).unwrap_err();
    assert!(matches!(err, GatewayError::Validation(_)));
    assert_eq!(store.state().current_step, WorkflowStep::Search);
}

#[test]
fn test_select_company_cascades_invalidation() {
    let mut store = WorkflowStore::new();
    let results = mock::mock_search_company("测试");
    store.set_search_results("测试", results.clone());

    store.select_company(results[0].clone());
    store
        .set_company_detail(mock::mock_company_detail("abc123"))
        .unwrap();
    store.set_web_search_results(mock::mock_web_search("测试"));
    let report = mock::mock_generate_report(
        store.state().company_detail.as_ref().unwrap(),
        &store.state().web_search_results,
    );
    store.set_report(report).unwrap();
    store.set_error(WorkflowStep::Generate, Some("旧错误".to_string()));

    // 改选另一家公司，下游派生数据与错误必须全部清空
    store.select_company(results[1].clone());
    let state = store.state();
    assert_eq!(state.selected_company.as_ref().unwrap().unique_id, "def456");
    assert!(state.company_detail.is_none());
    assert!(state.web_search_results.is_empty());
    assert!(state.report.is_none());
    assert!(state.errors.get(WorkflowStep::Generate).is_none());
    // 搜索结果本身保留
    assert_eq!(state.search_results.len(), 2);
}

#[test]
fn test_detail_must_match_selected_company() {
    let mut store = WorkflowStore::new();
    let results = mock::mock_search_company("测试");
    store.select_company(results[0].clone());

    let err = store
        .set_company_detail(mock::mock_company_detail("def456"))
        .unwrap_err();
    assert!(matches!(err, GatewayError::Validation(_)));
    assert!(store.state().company_detail.is_none());
}

#[test]
fn test_report_requires_upstream_data() {
    let mut store = WorkflowStore::new();
    let detail = mock::mock_company_detail("abc123");
    let report = mock::mock_generate_report(&detail, &[]);

    let err = store.set_report(report).unwrap_err();
    assert!(matches!(err, GatewayError::Validation(_)));
}

#[test]
fn test_subscribe_sees_version_increments() {
    let mut store = WorkflowStore::new();
    let rx = store.subscribe();
    let before = *rx.borrow();

    store.set_search_results("测试", mock::mock_search_company("测试"));
    store.select_company(mock::mock_search_company("测试")[0].clone());

    assert_eq!(*rx.borrow(), before + 2);
}

#[tokio::test]
async fn test_full_mock_pipeline() {
    let ctl = controller_with_report().await;
    let state = ctl.state();

    assert!(state.search_results[0].name.contains("测试"));
    assert_eq!(
        state.company_detail.as_ref().unwrap().unique_id,
        state.selected_company.as_ref().unwrap().unique_id
    );
    assert!(!state.web_search_results.is_empty());

    let report = state.report.as_ref().unwrap();
    assert!(!report.company_basic_info.name.is_empty());
    assert!(!report.investment_suggestion.recommendation.is_empty());
}

#[tokio::test]
async fn test_load_company_detail_is_idempotent() {
    let mut ctl = mock_controller();
    ctl.run_search("测试").await.unwrap();
    ctl.select_company(0).unwrap();
    ctl.load_company_detail().await.unwrap();

    let before = ctl.state().company_detail.clone();
    ctl.load_company_detail().await.unwrap();
    assert_eq!(ctl.state().company_detail, before);
}

#[tokio::test]
async fn test_web_search_skips_when_results_exist() {
    let mut ctl = mock_controller();
    ctl.run_search("测试").await.unwrap();
    ctl.select_company(0).unwrap();
    ctl.load_company_detail().await.unwrap();
    ctl.run_web_search().await.unwrap();

    // 人为篡改结果集，再次触发不应覆盖
    let marker = vec![ctl.state().web_search_results[0].clone()];
    ctl.store_mut().set_web_search_results(marker.clone());
    ctl.run_web_search().await.unwrap();
    assert_eq!(ctl.state().web_search_results, marker);
}

#[tokio::test]
async fn test_generate_skips_when_report_exists() {
    let mut ctl = controller_with_report().await;

    let mut edited = ctl.state().report.clone().unwrap();
    edited
        .set_field("teamInfo.background", "手工编辑过的团队背景")
        .unwrap();
    ctl.store_mut().set_report(edited.clone()).unwrap();

    // 非强制生成不得覆盖已有建议书
    ctl.generate_report(false).await.unwrap();
    assert_eq!(ctl.state().report.as_ref().unwrap(), &edited);
}

#[tokio::test]
async fn test_regenerated_report_replaces_edits() {
    let mut ctl = controller_with_report().await;

    ctl.edit_report_field("teamInfo.background", "手工编辑过的团队背景")
        .unwrap();
    assert_eq!(
        ctl.state().report.as_ref().unwrap().team_info.background,
        "手工编辑过的团队背景"
    );

    // 重新生成的建议书整体覆盖旧对象，手工编辑不保留
    let fresh = mock::mock_generate_report(
        ctl.state().company_detail.as_ref().unwrap(),
        &ctl.state().web_search_results,
    );
    ctl.store_mut().set_report(fresh).unwrap();
    assert_ne!(
        ctl.state().report.as_ref().unwrap().team_info.background,
        "手工编辑过的团队背景"
    );
}

#[tokio::test]
async fn test_in_flight_guard_ignores_duplicate_fetch() {
    let mut ctl = mock_controller();
    ctl.store_mut().set_loading(WorkflowStep::Search, true);

    ctl.run_search("测试").await.unwrap();
    // 请求被忽略，不产生搜索结果
    assert!(ctl.state().search_results.is_empty());
}

#[tokio::test]
async fn test_select_out_of_range_is_validation_error() {
    let mut ctl = mock_controller();
    ctl.run_search("测试").await.unwrap();
    let err = ctl.select_company(99).unwrap_err();
    assert!(matches!(err, GatewayError::Validation(_)));
}

#[tokio::test]
async fn test_edit_report_field_via_controller() {
    let mut ctl = controller_with_report().await;
    ctl.edit_report_field("investmentSuggestion.recommendation", "建议暂缓投资")
        .unwrap();
    assert_eq!(
        ctl.state()
            .report
            .as_ref()
            .unwrap()
            .investment_suggestion
            .recommendation,
        "建议暂缓投资"
    );

    let err = ctl.edit_report_field("unknown.path", "x").unwrap_err();
    assert!(matches!(err, GatewayError::Validation(_)));
}

#[tokio::test]
async fn test_advance_walks_steps_in_order() {
    let mut ctl = controller_with_report().await;
    assert_eq!(ctl.state().current_step, WorkflowStep::Search);

    for expected in [
        WorkflowStep::CompanyInfo,
        WorkflowStep::WebSearch,
        WorkflowStep::Generate,
        WorkflowStep::Review,
        WorkflowStep::Export,
    ] {
        ctl.advance().unwrap();
        assert_eq!(ctl.state().current_step, expected);
    }
    let err = ctl.advance().unwrap_err();
    assert!(matches!(err, GatewayError::Validation(_)));
}
