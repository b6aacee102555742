use std::sync::Arc;

use tempfile::tempdir;

use prompt_enhancer::{
    EnhancePromptUseCase, EnhancerSession, ExportFile, ExportPromptUseCase, MockChatClient,
    MockReply, Mode, NoticeKind, PromptExporter, SessionState, TextFileExporter,
};

#[tokio::test]
async fn exporter_writes_content_verbatim_into_new_directory() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("nested").join("exports");
    let exporter = TextFileExporter::new(&out);

    let content = "Line one\r\n  unicode: caf\u{e9} \u{1f431}\n";
    let file = ExportFile::new(Mode::Image, content, 1_700_000_000_000);
    let path = exporter.export(&file).await.expect("export");

    assert_eq!(path, out.join("enhanced-image-prompt-1700000000000.txt"));
    assert_eq!(std::fs::read(&path).expect("read"), content.as_bytes());
}

#[tokio::test]
async fn colliding_names_get_the_next_timestamp() {
    let dir = tempdir().expect("tempdir");
    let exporter = TextFileExporter::new(dir.path());

    let file = ExportFile::new(Mode::Video, "same body", 10);
    let first = exporter.export(&file).await.expect("first");
    let second = exporter.export(&file).await.expect("second");

    assert_ne!(first, second);
    assert!(second.ends_with("enhanced-video-prompt-11.txt"));
    assert_eq!(
        std::fs::read(&first).expect("read"),
        std::fs::read(&second).expect("read")
    );
}

#[tokio::test]
async fn exporting_twice_yields_identical_bodies_and_distinct_files() {
    let dir = tempdir().expect("tempdir");
    let export = ExportPromptUseCase::new(Arc::new(TextFileExporter::new(dir.path())));
    let enhance = EnhancePromptUseCase::new(Arc::new(MockChatClient::with_reply(
        MockReply::text("A neon city at dusk"),
    )));

    let mut session = EnhancerSession::new();
    session.select_mode(Mode::Image).unwrap();
    session.set_prompt("city").unwrap();
    assert!(session.submit(&enhance).await.is_success());

    let first_notice = session.export(&export).await;
    let first = session.last_export().expect("first export").to_path_buf();
    let second_notice = session.export(&export).await;
    let second = session.last_export().expect("second export").to_path_buf();

    assert!(first_notice.is_success());
    assert!(second_notice.is_success());
    assert_ne!(first, second);
    for path in [&first, &second] {
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("enhanced-image-prompt-"), "{}", name);
        assert!(name.ends_with(".txt"), "{}", name);
        assert_eq!(std::fs::read_to_string(path).unwrap(), "A neon city at dusk");
    }
}

#[tokio::test]
async fn export_without_result_is_a_validation_notice() {
    let dir = tempdir().expect("tempdir");
    let export = ExportPromptUseCase::new(Arc::new(TextFileExporter::new(dir.path())));

    let mut session = EnhancerSession::new();
    session.select_mode(Mode::Video).unwrap();
    let notice = session.export(&export).await;

    assert_eq!(notice.kind(), NoticeKind::Validation);
    assert_eq!(notice.message(), "No enhanced prompt to download");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

async fn enhanced_session(text: &str) -> EnhancerSession {
    let enhance = EnhancePromptUseCase::new(Arc::new(MockChatClient::with_reply(
        MockReply::text(text),
    )));
    let mut session = EnhancerSession::new();
    session.select_mode(Mode::Video).unwrap();
    session.set_prompt("waves").unwrap();
    assert!(session.submit(&enhance).await.is_success());
    session
}

#[tokio::test]
async fn reset_after_export_clears_all_fields() {
    let dir = tempdir().expect("tempdir");
    let export = ExportPromptUseCase::new(Arc::new(TextFileExporter::new(dir.path())));
    let mut session = enhanced_session("Crashing surf at dawn").await;

    assert!(session.export(&export).await.is_success());
    assert!(session.last_export().is_some());

    session.reset().unwrap();

    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.mode(), None);
    assert_eq!(session.prompt(), "");
    assert_eq!(session.enhanced_text(), None);
    assert!(session.last_export().is_none());
}

#[tokio::test]
async fn export_io_failure_is_an_error_notice_and_keeps_result() {
    let dir = tempdir().expect("tempdir");
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "file").expect("write blocker");
    let export = ExportPromptUseCase::new(Arc::new(TextFileExporter::new(blocker.join("out"))));
    let mut session = enhanced_session("Crashing surf at dawn").await;

    let notice = session.export(&export).await;

    assert_eq!(notice.kind(), NoticeKind::Error);
    assert!(notice.message().starts_with("Failed to save prompt:"), "{}", notice.message());
    assert_eq!(session.state(), SessionState::Enhanced);
    assert_eq!(session.enhanced_text(), Some("Crashing surf at dawn"));
    assert!(session.last_export().is_none());
}
