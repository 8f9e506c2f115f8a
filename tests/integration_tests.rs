use dili_rs::config::Config;
use dili_rs::share::SharedReportStore;
use dili_rs::workflow::launch;
use std::fs;
use tempfile::TempDir;

/// 构造一个全程使用模拟数据的配置，输出落在临时目录
fn mock_config(temp_dir: &TempDir, query: &str) -> Config {
    let mut config = Config::default();
    config.company_query = Some(query.to_string());
    config.output_path = temp_dir.path().join("output");
    config.internal_path = temp_dir.path().join(".dili");
    assert!(config.use_mock_data);
    config
}

#[tokio::test]
async fn test_full_workflow_with_mock_data() {
    let temp_dir = TempDir::new().unwrap();
    let config = mock_config(&temp_dir, "示例");

    let result = launch(&config).await;
    assert!(result.is_ok(), "模拟数据模式下流水线应当完整跑通");

    // 三种格式各落盘一份，文件名以选中公司命名
    assert!(config.output_path.exists());
    let names: Vec<String> = fs::read_dir(&config.output_path)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 3);
    for ext in ["md", "html", "doc"] {
        assert!(
            names.iter().any(|n| n == &format!("示例科技有限公司_投资建议书.{}", ext)),
            "缺少导出文件: {}，实际: {:?}",
            ext,
            names
        );
    }

    // Markdown首行标题含公司名，六个章节齐全
    let md = fs::read_to_string(
        config.output_path.join("示例科技有限公司_投资建议书.md"),
    )
    .unwrap();
    assert!(md.starts_with("# 示例科技有限公司 投资建议书"));
    for heading in [
        "## 一、公司基本情况",
        "## 二、团队简介",
        "## 三、产品与技术",
        "## 四、业务模式",
        "## 五、市场分析",
        "## 六、投资建议",
    ] {
        assert!(md.contains(heading), "缺少章节: {}", heading);
    }
}

#[tokio::test]
async fn test_workflow_applies_edits() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = mock_config(&temp_dir, "示例");
    config.edits = vec!["investmentSuggestion.recommendation=建议暂缓投资".to_string()];

    launch(&config).await.unwrap();

    let md = fs::read_to_string(
        config.output_path.join("示例科技有限公司_投资建议书.md"),
    )
    .unwrap();
    assert!(md.contains("建议暂缓投资"));
}

#[tokio::test]
async fn test_workflow_rejects_malformed_edit() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = mock_config(&temp_dir, "示例");
    config.edits = vec!["没有等号的指令".to_string()];

    let result = launch(&config).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_workflow_publishes_shared_report() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = mock_config(&temp_dir, "示例");
    config.share = true;

    launch(&config).await.unwrap();

    // 分享目录下应有且仅有一条记录，可按键读回
    let shared_dir = config.internal_path.join("shared");
    let entries: Vec<_> = fs::read_dir(&shared_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);

    let file_name = entries[0].as_ref().unwrap().file_name();
    let key = file_name.to_string_lossy().trim_end_matches(".json").to_string();

    let store = SharedReportStore::new(&config.internal_path);
    let entry = store.get(&key).unwrap();
    assert_eq!(entry.share_url, format!("/shared-report/{}", key));
    assert_eq!(entry.company_name, "示例科技有限公司");
}

#[tokio::test]
async fn test_workflow_requires_query() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = mock_config(&temp_dir, "示例");
    config.company_query = None;

    let result = launch(&config).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_workflow_rejects_out_of_range_selection() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = mock_config(&temp_dir, "示例");
    config.select_index = 99;

    let result = launch(&config).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_rerun_overwrites_previous_exports() {
    let temp_dir = TempDir::new().unwrap();
    let config = mock_config(&temp_dir, "示例");

    launch(&config).await.unwrap();
    launch(&config).await.unwrap();

    let entries: Vec<_> = fs::read_dir(&config.output_path).unwrap().collect();
    assert_eq!(entries.len(), 3);
}
