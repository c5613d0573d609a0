use trivia_client::browser::connect_to_browser_and_page;
use trivia_client::config::Config;
use trivia_client::infrastructure::{
    DomQuizPage, DomResultsPage, JsExecutor, QuizForm, ResultsView,
};
use trivia_client::utils::logging;

// 以下测试需要本地启动答题服务，并以 --remote-debugging-port 启动浏览器

#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_browser_connection() {
    logging::init(true);

    let config = Config::from_env();

    let result = connect_to_browser_and_page(
        config.browser_debug_port,
        &config.quiz_url(),
        Some(&config.quiz_path),
    )
    .await;

    assert!(result.is_ok(), "应该能够成功连接浏览器");
}

#[tokio::test]
#[ignore]
async fn test_quiz_page_layout() {
    logging::init(true);

    let config = Config::from_env();
    let (_browser, page) = connect_to_browser_and_page(
        config.browser_debug_port,
        &config.quiz_url(),
        Some(&config.quiz_path),
    )
    .await
    .expect("连接浏览器失败");

    let executor = JsExecutor::new(page);
    let form = DomQuizPage::new(&executor);

    form.verify_layout().await.expect("答题页应包含必需元素");
    let ids = form.question_ids().await.expect("读取题目失败");
    assert_eq!(ids.len(), config.quiz_amount as usize);
}

#[tokio::test]
#[ignore]
async fn test_results_page_layout() {
    logging::init(true);

    let config = Config::from_env();
    let (_browser, page) = connect_to_browser_and_page(
        config.browser_debug_port,
        &config.url_for(&config.results_path),
        Some(&config.results_path),
    )
    .await
    .expect("连接浏览器失败");

    let executor = JsExecutor::new(page);
    let view = DomResultsPage::new(&executor);

    view.verify_layout().await.expect("结果页应包含必需元素");
}
