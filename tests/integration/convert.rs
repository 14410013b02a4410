//! Conversion submits against a mock backend

use crate::integration::mock_server::{controller_for, unreachable_base_url, MockServerFixture};
use serde_json::json;
use tts_form::{DownloadLink, FormView, SubmitOutcome};

const VOICES: &str = r#"[
    {"index": 0, "name": "David", "gender": "Male"},
    {"index": 1, "name": "Zira", "gender": "Female"}
]"#;

#[tokio::test]
async fn test_success_sends_payload_and_shows_download() {
    let fixture = MockServerFixture::new().await;
    let _voices = fixture.mock_voices(VOICES).await;
    let convert = fixture
        .mock_convert_expecting(
            json!({
                "text": "Hello there",
                "voice_index": 1,
                "save_to_file": true,
                "filename": "hello.mp3"
            }),
            r#"{"status": "success", "audio_url": "/static/3f2a.mp3"}"#,
        )
        .await;

    let controller = fixture.controller();
    controller.initialize().await;
    let view = controller.view();
    view.select_voice("1");
    view.set_text("  Hello there  ");
    view.set_save_to_file(true);
    controller.on_save_to_file_changed();
    view.set_filename("hello.mp3");

    let outcome = controller.submit().await;
    convert.assert_async().await;

    assert!(matches!(outcome, SubmitOutcome::Converted { .. }));
    assert_eq!(view.status(), "Conversion successful!");
    assert_eq!(
        view.download(),
        Some(DownloadLink {
            href: "/static/3f2a.mp3".into(),
            label: "Download hello.mp3".into(),
        })
    );
}

#[tokio::test]
async fn test_missing_voice_list_sends_null_voice() {
    let fixture = MockServerFixture::new().await;
    let _voices = fixture.mock_raw("GET", "/get_voices", 404, b"not found").await;
    let convert = fixture
        .mock_convert_expecting(
            json!({
                "text": "hi",
                "voice_index": null,
                "save_to_file": false,
                "filename": "output.mp3"
            }),
            r#"{"status": "success"}"#,
        )
        .await;

    let controller = fixture.controller();
    controller.initialize().await;
    controller.view().set_text("hi");
    controller.submit().await;
    convert.assert_async().await;

    assert_eq!(controller.view().status(), "Conversion successful!");
    assert!(controller.view().download().is_none());
}

#[tokio::test]
async fn test_rejection_message_is_shown() {
    let fixture = MockServerFixture::new().await;
    let _convert = fixture
        .mock_convert(400, r#"{"status": "error", "message": "bad voice"}"#)
        .await;

    let controller = fixture.controller();
    controller.view().set_text("hi");
    let outcome = controller.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            message: Some("bad voice".into())
        }
    );
    assert_eq!(controller.view().status(), "Error: bad voice");
    assert!(controller.view().download().is_none());
}

#[tokio::test]
async fn test_blank_text_never_reaches_backend() {
    let fixture = MockServerFixture::new().await;
    let convert = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", "/convert")
            .expect(0)
            .create_async()
            .await
    };

    let controller = fixture.controller();
    controller.view().set_text(" \t\n ");
    assert_eq!(controller.submit().await, SubmitOutcome::EmptyText);
    convert.assert_async().await;
    assert_eq!(controller.view().status(), "Please enter some text.");
}

#[tokio::test]
async fn test_non_json_response_is_conversion_error() {
    let fixture = MockServerFixture::new().await;
    let _convert = fixture
        .mock_raw("POST", "/convert", 502, b"Bad Gateway")
        .await;

    let controller = fixture.controller();
    controller.view().set_text("hi");
    assert_eq!(controller.submit().await, SubmitOutcome::Failed);
    assert_eq!(controller.view().status(), "Error during conversion.");
    assert!(controller.view().download().is_none());
}

#[tokio::test]
async fn test_connection_failure_is_conversion_error() {
    let controller = controller_for(&unreachable_base_url());
    controller.view().set_text("hi");
    assert_eq!(controller.submit().await, SubmitOutcome::Failed);
    assert_eq!(controller.view().status(), "Error during conversion.");
    assert!(controller.view().download().is_none());
}

#[tokio::test]
async fn test_failed_resubmit_hides_previous_download() {
    let fixture = MockServerFixture::new().await;
    let ok = fixture
        .mock_convert(200, r#"{"status": "success", "audio_url": "/static/a.mp3"}"#)
        .await;

    let controller = fixture.controller();
    controller.view().set_text("first");
    controller.submit().await;
    assert!(controller.view().download().is_some());

    ok.remove_async().await;
    let _bad = fixture
        .mock_convert(200, r#"{"status": "error", "message": "engine busy"}"#)
        .await;
    controller.view().set_text("second");
    controller.submit().await;

    assert_eq!(controller.view().status(), "Error: engine busy");
    assert!(controller.view().download().is_none());
}
