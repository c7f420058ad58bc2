//! Tests for the colour persister.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{ColourRepositoryError, MockColourRepository};

fn persister(repository: MockColourRepository) -> ColourPersister<MockColourRepository> {
    ColourPersister::new(Arc::new(repository))
}

#[rstest]
#[case::hex("#228B22")]
#[case::lowercase("#ff00aa")]
#[case::whitespace(" ")]
#[case::json_payload(r##"{"colors":[{"value":"#52A3CC"}]}"##)]
#[tokio::test]
async fn forwards_non_empty_colours_exactly_once(#[case] raw: &'static str) {
    let mut repository = MockColourRepository::new();
    repository
        .expect_save()
        .withf(move |colour: &str| colour == raw)
        .times(1)
        .return_once(|_| Ok(()));

    persister(repository)
        .save(&Colour::from(raw))
        .await
        .expect("save succeeds");
}

#[tokio::test]
async fn rejects_empty_colour_without_touching_storage() {
    let mut repository = MockColourRepository::new();
    repository.expect_save().times(0);

    let error = persister(repository)
        .save(&Colour::default())
        .await
        .expect_err("empty colours are rejected");
    assert_eq!(error, ColourServiceError::EmptyValue);
    assert_eq!(error.to_string(), "trying to save an empty colour string");
}

#[rstest]
#[case::write(ColourRepositoryError::write("insert failed"), "insert failed")]
#[case::connection(
    ColourRepositoryError::connection("connection refused"),
    "connection refused"
)]
#[tokio::test]
async fn wraps_repository_errors_with_database_prefix(
    #[case] failure: ColourRepositoryError,
    #[case] cause: &'static str,
) {
    let mut repository = MockColourRepository::new();
    repository
        .expect_save()
        .times(1)
        .return_once(move |_| Err(failure));

    let error = persister(repository)
        .save(&Colour::from("#228B22"))
        .await
        .expect_err("storage failure surfaces");
    assert_eq!(
        error.to_string(),
        format!("problem passing colour string to database layer: {cause}")
    );
    assert!(matches!(error, ColourServiceError::Storage { .. }));
}
