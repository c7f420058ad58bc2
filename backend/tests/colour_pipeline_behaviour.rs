//! Behavioural tests for the fetch-then-save pipeline through its public API.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hexbot::domain::ports::{
    ColourRepository, ColourRepositoryError, ColourSource, ColourSourceError, FIXTURE_COLOUR,
    FixtureColourSource,
};
use hexbot::domain::{
    ColourFetcher, ColourPersister, ColourPipeline, ColourServiceError, PipelineStage,
};
use rstest::{fixture, rstest};

/// Source that replays one canned answer and counts calls.
struct ScriptedSource {
    answer: Result<String, ColourSourceError>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(answer: Result<String, ColourSourceError>) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ColourSource for ScriptedSource {
    async fn get_colour(&self) -> Result<String, ColourSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }
}

/// Repository that records every value it is asked to store.
#[derive(Default)]
struct RecordingRepository {
    saved: Mutex<Vec<String>>,
    failure: Option<ColourRepositoryError>,
}

impl RecordingRepository {
    fn failing(failure: ColourRepositoryError) -> Self {
        Self {
            saved: Mutex::default(),
            failure: Some(failure),
        }
    }

    fn saved(&self) -> Vec<String> {
        self.saved.lock().expect("saved mutex").clone()
    }
}

#[async_trait]
impl ColourRepository for RecordingRepository {
    async fn save(&self, colour: &str) -> Result<(), ColourRepositoryError> {
        self.saved.lock().expect("saved mutex").push(colour.to_owned());
        match &self.failure {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }
}

#[fixture]
fn repository() -> Arc<RecordingRepository> {
    Arc::new(RecordingRepository::default())
}

fn pipeline(
    source: Arc<ScriptedSource>,
    repository: Arc<RecordingRepository>,
) -> ColourPipeline<ScriptedSource, RecordingRepository> {
    ColourPipeline::new(ColourFetcher::new(source), ColourPersister::new(repository))
}

#[rstest]
#[tokio::test]
async fn fetched_colour_is_stored_exactly_once(repository: Arc<RecordingRepository>) {
    let source = Arc::new(ScriptedSource::new(Ok("#228B22".to_owned())));

    let colour = pipeline(Arc::clone(&source), Arc::clone(&repository))
        .run()
        .await
        .expect("pipeline succeeds");

    assert_eq!(colour.as_str(), "#228B22");
    assert_eq!(source.calls(), 1);
    assert_eq!(repository.saved(), vec!["#228B22".to_owned()]);
}

#[rstest]
#[tokio::test]
async fn transport_failure_never_reaches_storage(repository: Arc<RecordingRepository>) {
    let source = Arc::new(ScriptedSource::new(Err(ColourSourceError::transport(
        "GET unsuccessful",
    ))));

    let error = pipeline(source, Arc::clone(&repository))
        .run()
        .await
        .expect_err("fetch fails");

    assert_eq!(
        error.to_string(),
        "problem getting hex from hexbot: GET unsuccessful"
    );
    assert_eq!(error.stage(), PipelineStage::Fetch);
    assert!(repository.saved().is_empty());
}

#[rstest]
#[tokio::test]
async fn empty_colour_never_reaches_storage(repository: Arc<RecordingRepository>) {
    let source = Arc::new(ScriptedSource::new(Ok(String::new())));

    let error = pipeline(source, Arc::clone(&repository))
        .run()
        .await
        .expect_err("empty colour is rejected");

    assert_eq!(error, ColourServiceError::EmptyValue);
    assert_eq!(error.to_string(), "trying to save an empty colour string");
    assert!(repository.saved().is_empty());
}

#[tokio::test]
async fn storage_failure_is_reported_with_database_prefix() {
    let source = Arc::new(ScriptedSource::new(Ok("#C0FFEE".to_owned())));
    let repository = Arc::new(RecordingRepository::failing(
        ColourRepositoryError::connection("connection refused"),
    ));

    let error = pipeline(source, Arc::clone(&repository))
        .run()
        .await
        .expect_err("storage fails");

    assert_eq!(
        error.to_string(),
        "problem passing colour string to database layer: connection refused"
    );
    assert_eq!(error.stage(), PipelineStage::Save);
    assert_eq!(repository.saved(), vec!["#C0FFEE".to_owned()]);
}

#[tokio::test]
async fn pipelines_accept_trait_objects() {
    let source: Arc<dyn ColourSource> = Arc::new(FixtureColourSource);
    let recorder = Arc::new(RecordingRepository::default());
    let repository: Arc<dyn ColourRepository> = recorder.clone();

    let colour = ColourPipeline::new(ColourFetcher::new(source), ColourPersister::new(repository))
        .run()
        .await
        .expect("fixture pipeline succeeds");

    assert_eq!(colour.as_str(), FIXTURE_COLOUR);
    assert_eq!(recorder.saved(), vec![FIXTURE_COLOUR.to_owned()]);
}

#[tokio::test]
async fn each_run_fetches_a_fresh_colour() {
    let source = Arc::new(ScriptedSource::new(Ok("#123456".to_owned())));
    let repository = Arc::new(RecordingRepository::default());
    let pipeline = pipeline(Arc::clone(&source), Arc::clone(&repository));

    pipeline.run().await.expect("first run");
    pipeline.run().await.expect("second run");

    assert_eq!(source.calls(), 2);
    assert_eq!(repository.saved().len(), 2);
}
