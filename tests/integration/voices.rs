//! Voice list loading against a mock backend

use crate::integration::mock_server::{controller_for, unreachable_base_url, MockServerFixture};
use tts_form::FormView;

#[tokio::test]
async fn test_voices_populate_in_backend_order() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_voices(
            r#"[
                {"index": 3, "name": "Hazel", "gender": "Female"},
                {"index": 0, "name": "David", "gender": "Male"},
                {"index": 1, "name": "Zira", "gender": "Female"}
            ]"#,
        )
        .await;

    let controller = fixture.controller();
    assert_eq!(controller.initialize().await, 3);
    mock.assert_async().await;

    let options = controller.view().voice_options();
    let rendered: Vec<(&str, &str)> = options
        .iter()
        .map(|o| (o.value.as_str(), o.label.as_str()))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("3", "Hazel (Female)"),
            ("0", "David (Male)"),
            ("1", "Zira (Female)"),
        ]
    );
    assert_eq!(controller.view().selected_voice(), "3");
    assert_eq!(controller.view().status(), "");
}

#[tokio::test]
async fn test_empty_voice_list() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_voices("[]").await;

    let controller = fixture.controller();
    assert_eq!(controller.initialize().await, 0);
    assert!(controller.view().voice_options().is_empty());
    assert_eq!(controller.view().status(), "");
}

#[tokio::test]
async fn test_non_json_voice_list_reports_load_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_raw("GET", "/get_voices", 500, b"<html>Internal Server Error</html>")
        .await;

    let controller = fixture.controller();
    assert_eq!(controller.initialize().await, 0);
    assert!(controller.view().voice_options().is_empty());
    assert_eq!(controller.view().status(), "Error loading voices.");
}

#[tokio::test]
async fn test_unreachable_backend_reports_load_error() {
    let controller = controller_for(&unreachable_base_url());
    assert_eq!(controller.initialize().await, 0);
    assert_eq!(controller.view().status(), "Error loading voices.");
}
