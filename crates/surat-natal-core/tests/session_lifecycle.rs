//! Card session lifecycle through the service
//!
//! Open guard, reset round trip, portrait races, and the share and export
//! actions against fake capabilities.

mod common;

use std::sync::Arc;

use common::*;
use surat_natal_core::*;

async fn ready(h: &Harness, name: &str) {
    h.service.set_sender_name(name).unwrap();
    h.service.set_portrait(b"photo".to_vec()).await.unwrap();
}

// ============================================================================
// Open guard
// ============================================================================

#[tokio::test]
async fn test_scenario_a_open_then_export_named_after_sender() {
    let h = harness();
    ready(&h, "Budi").await;

    h.service.open().unwrap();
    assert_eq!(h.service.phase(), Phase::Presenting);

    let outcome = h.service.export_image().await.unwrap();
    assert_eq!(
        outcome,
        ExportOutcome::Saved {
            path: "/downloads/Natal-Budi.png".into()
        }
    );

    let saved = h.downloads.saved.lock();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].file_name, "Natal-Budi.png");
    assert_eq!(*h.rasterizer.backgrounds.lock(), vec![Rgb::new(0x05, 0x0a, 0x14)]);
}

#[tokio::test]
async fn test_scenario_b_whitespace_name_blocks_open() {
    let h = harness();
    ready(&h, "  ").await;

    let err = h.service.open().unwrap_err();
    assert!(matches!(err, CardError::Validation(MissingField::SenderName)));
    assert_eq!(err.user_message(), "Silakan masukkan nama pembuat pesan!");
    assert_eq!(h.service.phase(), Phase::Composing);
    assert_eq!(h.audio.count(), 0);
}

#[test]
fn test_open_without_anything_reports_portrait() {
    let h = harness();
    let err = h.service.open().unwrap_err();
    assert!(matches!(err, CardError::Validation(MissingField::Portrait)));
    assert_eq!(h.service.phase(), Phase::Composing);
}

#[test]
fn test_open_with_name_but_no_portrait_reports_portrait() {
    let h = harness();
    h.service.set_sender_name("Budi").unwrap();
    let err = h.service.open().unwrap_err();
    assert!(matches!(err, CardError::Validation(MissingField::Portrait)));
}

#[tokio::test]
async fn test_open_starts_audio_once_and_ignores_autoplay_block() {
    let loader = Arc::new(EchoLoader);
    let audio = Arc::new(CountingAudio {
        blocked: true,
        ..CountingAudio::default()
    });
    let caps = Capabilities::new(
        loader,
        Arc::new(FakeRasterizer::working()),
        Arc::new(RecordingClipboard::default()),
        Arc::new(MemoryDownloads::default()),
    )
    .with_audio(audio.clone());
    let service = CardService::new(CardContent::default(), caps, PAGE_URL);

    service.set_sender_name("Budi").unwrap();
    service.set_portrait(b"photo".to_vec()).await.unwrap();

    service.open().unwrap();
    assert_eq!(service.phase(), Phase::Presenting);
    assert_eq!(audio.count(), 1);

    // Already open: no second start
    service.open().unwrap();
    assert_eq!(audio.count(), 1);
}

// ============================================================================
// Presenting freezes the fields; reset keeps them
// ============================================================================

#[tokio::test]
async fn test_presenting_freezes_name_and_portrait() {
    let h = harness();
    ready(&h, "Budi").await;
    let before = h.service.snapshot();

    h.service.open().unwrap();

    assert!(matches!(
        h.service.set_sender_name("Ani"),
        Err(CardError::InvalidPhase { .. })
    ));
    assert!(matches!(
        h.service.set_portrait(b"other".to_vec()).await,
        Err(CardError::InvalidPhase { .. })
    ));

    let after = h.service.snapshot();
    assert_eq!(after.sender_name, before.sender_name);
    assert_eq!(after.portrait, before.portrait);
}

#[tokio::test]
async fn test_reset_round_trip_keeps_fields() {
    let h = harness();
    ready(&h, "Budi").await;

    h.service.open().unwrap();
    h.service.reset();

    let session = h.service.snapshot();
    assert_eq!(session.phase, Phase::Composing);
    assert_eq!(session.sender_name, "Budi");
    assert!(session.portrait.is_some());

    h.service.open().unwrap();
    assert_eq!(h.service.phase(), Phase::Presenting);
}

#[tokio::test]
async fn test_reset_allows_editing_before_reopen() {
    let h = harness();
    ready(&h, "Budi").await;
    h.service.open().unwrap();
    h.service.reset();

    h.service.set_sender_name("Ani").unwrap();
    h.service.open().unwrap();
    h.service.export_image().await.unwrap();

    assert_eq!(h.downloads.saved.lock()[0].file_name, "Natal-Ani.png");
}

// ============================================================================
// Portrait loading
// ============================================================================

#[tokio::test]
async fn test_failed_decode_keeps_previous_portrait() {
    let h = harness();
    h.service.set_portrait(b"first".to_vec()).await.unwrap();

    let err = h.service.set_portrait(Vec::new()).await.unwrap_err();
    assert!(matches!(err, CardError::Decode(_)));

    let session = h.service.snapshot();
    assert_eq!(session.portrait.unwrap().png_bytes(), b"first");
}

#[tokio::test]
async fn test_scenario_c_last_selection_wins_when_first_finishes_last() {
    let (loader, mut started) = GatedLoader::new();
    let release_a = loader.gate(b'A');
    let release_b = loader.gate(b'B');
    let h = harness_with(Arc::new(loader), FakeRasterizer::working());

    let service = h.service.clone();
    let task_a = tokio::spawn(async move { service.set_portrait(vec![b'A']).await });
    assert_eq!(started.recv().await, Some(b'A'));

    let service = h.service.clone();
    let task_b = tokio::spawn(async move { service.set_portrait(vec![b'B']).await });
    assert_eq!(started.recv().await, Some(b'B'));

    release_b.send(()).unwrap();
    assert_eq!(task_b.await.unwrap().unwrap(), PortraitUpdate::Applied);

    release_a.send(()).unwrap();
    assert_eq!(task_a.await.unwrap().unwrap(), PortraitUpdate::Superseded);

    let portrait = h.service.snapshot().portrait.unwrap();
    assert_eq!(portrait.png_bytes(), b"B");
}

#[tokio::test]
async fn test_last_selection_wins_when_first_finishes_first() {
    let (loader, mut started) = GatedLoader::new();
    let release_a = loader.gate(b'A');
    let release_b = loader.gate(b'B');
    let h = harness_with(Arc::new(loader), FakeRasterizer::working());

    let service = h.service.clone();
    let task_a = tokio::spawn(async move { service.set_portrait(vec![b'A']).await });
    started.recv().await;
    let service = h.service.clone();
    let task_b = tokio::spawn(async move { service.set_portrait(vec![b'B']).await });
    started.recv().await;

    release_a.send(()).unwrap();
    assert_eq!(task_a.await.unwrap().unwrap(), PortraitUpdate::Superseded);
    assert!(h.service.snapshot().portrait.is_none());

    release_b.send(()).unwrap();
    assert_eq!(task_b.await.unwrap().unwrap(), PortraitUpdate::Applied);
    assert_eq!(h.service.snapshot().portrait.unwrap().png_bytes(), b"B");
}

// ============================================================================
// Share and export
// ============================================================================

#[tokio::test]
async fn test_actions_rejected_while_composing() {
    let h = harness();
    ready(&h, "Budi").await;

    assert!(matches!(
        h.service.share().await,
        Err(CardError::InvalidPhase { operation: "share", .. })
    ));
    assert!(matches!(
        h.service.export_image().await,
        Err(CardError::InvalidPhase { .. })
    ));
    assert!(h.clipboard.written.lock().is_empty());
    assert!(h.downloads.saved.lock().is_empty());
}

#[tokio::test]
async fn test_share_falls_back_to_clipboard() {
    let h = harness();
    ready(&h, "Budi").await;
    h.service.open().unwrap();

    let outcome = h.service.share().await.unwrap();
    assert_eq!(
        outcome,
        ShareOutcome::CopiedLink {
            url: PAGE_URL.to_string()
        }
    );
    assert_eq!(*h.clipboard.written.lock(), vec![PAGE_URL.to_string()]);
    assert_eq!(h.service.phase(), Phase::Presenting);
}

#[tokio::test]
async fn test_share_uses_native_sheet_when_available() {
    let sheet = Arc::new(RecordingSheet::default());
    let clipboard = Arc::new(RecordingClipboard::default());
    let caps = Capabilities::new(
        Arc::new(EchoLoader),
        Arc::new(FakeRasterizer::working()),
        clipboard.clone(),
        Arc::new(MemoryDownloads::default()),
    )
    .with_native_share(sheet.clone());
    let service = CardService::new(CardContent::default(), caps, PAGE_URL);
    service.set_page_url("https://example.org/card");

    service.set_sender_name(" Budi ").unwrap();
    service.set_portrait(b"photo".to_vec()).await.unwrap();
    service.open().unwrap();

    assert_eq!(service.share().await.unwrap(), ShareOutcome::NativeDialog);

    let shared = sheet.shared.lock();
    assert_eq!(
        shared[0],
        SharePayload {
            title: "Surat Natal Keluarga".into(),
            text: "Hai! Lihat surat Natal indah dari Budi.".into(),
            url: "https://example.org/card".into(),
        }
    );
    assert!(clipboard.written.lock().is_empty());
}

#[tokio::test]
async fn test_clipboard_failure_is_logged_not_raised() {
    let caps = Capabilities::new(
        Arc::new(EchoLoader),
        Arc::new(FakeRasterizer::working()),
        Arc::new(BrokenClipboard),
        Arc::new(MemoryDownloads::default()),
    );
    let service = CardService::new(CardContent::default(), caps, PAGE_URL);
    service.set_sender_name("Budi").unwrap();
    service.set_portrait(b"photo".to_vec()).await.unwrap();
    service.open().unwrap();

    assert_eq!(service.share().await.unwrap(), ShareOutcome::Failed);
    assert_eq!(service.phase(), Phase::Presenting);
}

#[tokio::test]
async fn test_rasterizer_failure_is_logged_not_raised() {
    let h = harness_with(Arc::new(EchoLoader), FakeRasterizer::broken());
    ready(&h, "Budi").await;
    h.service.open().unwrap();

    assert_eq!(h.service.export_image().await.unwrap(), ExportOutcome::Failed);
    assert!(h.downloads.saved.lock().is_empty());
    assert_eq!(h.service.phase(), Phase::Presenting);

    // Still usable afterwards
    h.service.reset();
    assert_eq!(h.service.phase(), Phase::Composing);
}

#[tokio::test]
async fn test_exported_image_is_the_rendered_card() {
    let h = harness();
    ready(&h, "Budi").await;
    h.service.open().unwrap();
    let rendered = h.service.render();

    h.service.export_image().await.unwrap();

    let saved = h.downloads.saved.lock();
    assert_eq!(saved[0].png, rendered.svg().as_bytes());
}
