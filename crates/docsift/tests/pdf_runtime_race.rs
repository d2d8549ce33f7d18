//! First-use race on the paginated runtime.
//!
//! Kept as the only test in its binary so the runtime is still unconfigured
//! when the racing extractions start.

use docsift::codec::paginated_initializations;
use docsift::extract_text;
use docsift::types::InputFile;
use std::sync::Arc;
use tokio::sync::Barrier;

mod helpers;

use helpers::build_pdf;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_simultaneous_first_pdf_extractions_initialize_once() {
    assert_eq!(paginated_initializations(), 0, "runtime must start unconfigured");

    let racers = 8;
    let barrier = Arc::new(Barrier::new(racers));
    let mut handles = Vec::new();

    for i in 0..racers {
        let barrier = Arc::clone(&barrier);
        let file = InputFile::from_bytes(
            format!("race-{i}.pdf"),
            "application/pdf",
            build_pdf(&[format!("Racer {i}").as_str()]),
        );

        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            extract_text(&file).await
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let text = handle.await.expect("Task should not panic");
        assert!(!text.starts_with('['), "unexpected placeholder: {text}");
        assert!(text.contains(&format!("Racer {i}")));
    }

    assert_eq!(paginated_initializations(), 1);
}
