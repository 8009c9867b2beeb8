// SPDX-License-Identifier: MPL-2.0
//! End-to-end form scenarios against an in-process fake prediction service.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use iced_vqa::domain::vqa::{FailureReason, SubmissionState, TRANSPORT_MESSAGE, VALIDATION_MESSAGE};
use iced_vqa::prediction::{PredictionClient, PredictionError, IMAGE_PART, QUESTION_PART};
use iced_vqa::ui::image_picker::load_picked_image;
use iced_vqa::ui::vqa_form::{self, banner, submit_control, Banner, SubmitOutcome};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::{tempdir, TempDir};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDRfake-pixels";

/// One multipart request as the fake service saw it.
#[derive(Debug, Clone, Default)]
struct Upload {
    parts: Vec<String>,
    file_name: Option<String>,
    content_type: Option<String>,
    image: Vec<u8>,
    question: Option<String>,
}

type Reply = dyn Fn(&Upload) -> (StatusCode, Value) + Send + Sync;

#[derive(Clone)]
struct FakeService {
    uploads: Arc<Mutex<Vec<Upload>>>,
    reply: Arc<Reply>,
}

impl FakeService {
    fn uploads(&self) -> Vec<Upload> {
        self.uploads.lock().expect("uploads lock").clone()
    }
}

async fn predict(State(service): State<FakeService>, mut multipart: Multipart) -> Response {
    let mut upload = Upload::default();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        upload.parts.push(name.clone());
        if name == IMAGE_PART {
            upload.file_name = field.file_name().map(str::to_owned);
            upload.content_type = field.content_type().map(str::to_owned);
            upload.image = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        } else if name == QUESTION_PART {
            upload.question = field.text().await.ok();
        }
    }

    service.uploads.lock().expect("uploads lock").push(upload.clone());

    // Same input checks as the reference backend.
    let (status, body) = match &upload.question {
        None => (
            StatusCode::BAD_REQUEST,
            json!({"error": "Image file and question are required!"}),
        ),
        _ if upload.image.is_empty() => (
            StatusCode::BAD_REQUEST,
            json!({"error": "Image file and question are required!"}),
        ),
        Some(question) if question.trim().is_empty() => (
            StatusCode::BAD_REQUEST,
            json!({"error": "Question cannot be empty!"}),
        ),
        Some(_) => (service.reply)(&upload),
    };
    (status, Json(body)).into_response()
}

async fn spawn_service<F>(reply: F) -> (String, FakeService)
where
    F: Fn(&Upload) -> (StatusCode, Value) + Send + Sync + 'static,
{
    let service = FakeService {
        uploads: Arc::new(Mutex::new(Vec::new())),
        reply: Arc::new(reply),
    };
    let router = Router::new()
        .route("/predict", post(predict))
        .with_state(service.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake service");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("fake service");
    });

    (format!("http://{addr}/predict"), service)
}

fn answer_cat(upload: &Upload) -> (StatusCode, Value) {
    (
        StatusCode::OK,
        json!({
            "question": upload.question.clone().unwrap_or_default(),
            "predicted_answer": "cat",
        }),
    )
}

fn write_image(name: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(name);
    std::fs::write(&path, PNG_BYTES).expect("write image");
    (dir, path)
}

async fn form_with_image(name: &str) -> vqa_form::State {
    let (_dir, path) = write_image(name);
    let picked = load_picked_image(path).await.expect("image loads");
    let mut form = vqa_form::State::default();
    form.set_image(picked);
    form
}

/// Submits and, when dispatched, runs the request to completion.
async fn submit_and_wait(form: &mut vqa_form::State, client: &PredictionClient) -> bool {
    match form.submit() {
        SubmitOutcome::Dispatched { ticket, request } => {
            assert!(submit_control(form.submission()).busy);
            assert_eq!(banner(form.submission()), None);
            let result = client.predict(request).await;
            assert!(form.complete(ticket, result));
            true
        }
        SubmitOutcome::Rejected | SubmitOutcome::AlreadySubmitting => false,
    }
}

#[tokio::test]
async fn happy_path_shows_result() {
    let (endpoint, service) = spawn_service(answer_cat).await;
    let client = PredictionClient::new(&endpoint).expect("client");

    let mut form = form_with_image("cat.png").await;
    form.set_question("What animal is this?");
    assert!(submit_and_wait(&mut form, &client).await);

    let Some(Banner::Result(result)) = banner(form.submission()) else {
        panic!("expected result banner, got {:?}", form.submission());
    };
    assert_eq!(result.question, "What animal is this?");
    assert_eq!(result.predicted_answer, "cat");
    assert!(submit_control(form.submission()).enabled);

    let uploads = service.uploads();
    assert_eq!(uploads.len(), 1);
    let upload = &uploads[0];
    assert_eq!(upload.parts, vec![IMAGE_PART, QUESTION_PART]);
    assert_eq!(upload.file_name.as_deref(), Some("cat.png"));
    assert_eq!(upload.content_type.as_deref(), Some("image/png"));
    assert_eq!(upload.image, PNG_BYTES);
    assert_eq!(upload.question.as_deref(), Some("What animal is this?"));
}

#[tokio::test]
async fn missing_image_never_reaches_service() {
    let (endpoint, service) = spawn_service(answer_cat).await;
    let client = PredictionClient::new(&endpoint).expect("client");

    let mut form = vqa_form::State::default();
    form.set_question("What is this?");
    assert!(!submit_and_wait(&mut form, &client).await);

    assert_eq!(
        banner(form.submission()).map(|b| match b {
            Banner::Error(reason) => reason.message().to_owned(),
            Banner::Result(_) => String::new(),
        }),
        Some(VALIDATION_MESSAGE.to_owned())
    );
    assert!(service.uploads().is_empty());
}

#[tokio::test]
async fn missing_question_never_reaches_service() {
    let (endpoint, service) = spawn_service(answer_cat).await;
    let client = PredictionClient::new(&endpoint).expect("client");

    let mut form = form_with_image("cat.png").await;
    form.set_question("   ");
    assert!(!submit_and_wait(&mut form, &client).await);

    assert_eq!(
        form.submission(),
        &SubmissionState::Failed(FailureReason::Validation)
    );
    assert!(service.uploads().is_empty());
}

#[tokio::test]
async fn server_error_message_is_shown_verbatim() {
    let (endpoint, _service) = spawn_service(|_: &Upload| {
        (StatusCode::BAD_REQUEST, json!({"error": "image too large"}))
    })
    .await;
    let client = PredictionClient::new(&endpoint).expect("client");

    let mut form = form_with_image("huge.png").await;
    form.set_question("What is this?");
    assert!(submit_and_wait(&mut form, &client).await);

    assert_eq!(
        banner(form.submission()),
        Some(Banner::Error(&FailureReason::Server("image too large".into())))
    );
    assert!(form.submission().result().is_none());
}

#[tokio::test]
async fn unreachable_service_shows_transport_message() {
    // Bind then drop a listener so the port is known to be closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = PredictionClient::new(&format!("http://{addr}/predict")).expect("client");
    let mut form = form_with_image("cat.png").await;
    form.set_question("What animal is this?");
    assert!(submit_and_wait(&mut form, &client).await);

    let failure = form.submission().failure().expect("failed state");
    assert_eq!(failure, &FailureReason::Transport);
    assert_eq!(failure.message(), TRANSPORT_MESSAGE);
}

#[tokio::test]
async fn resubmit_after_failure_clears_error_then_succeeds() {
    let (endpoint, service) = spawn_service(|upload: &Upload| {
        if upload.question.as_deref() == Some("Is it big?") {
            (StatusCode::BAD_REQUEST, json!({"error": "image too large"}))
        } else {
            answer_cat(upload)
        }
    })
    .await;
    let client = PredictionClient::new(&endpoint).expect("client");

    let mut form = form_with_image("cat.png").await;
    form.set_question("Is it big?");
    assert!(submit_and_wait(&mut form, &client).await);
    assert!(matches!(banner(form.submission()), Some(Banner::Error(_))));

    form.set_question("What animal is this?");
    let SubmitOutcome::Dispatched { ticket, request } = form.submit() else {
        panic!("resubmit should dispatch");
    };
    assert_eq!(banner(form.submission()), None);

    let result = client.predict(request).await;
    assert!(form.complete(ticket, result));
    assert!(matches!(banner(form.submission()), Some(Banner::Result(r)) if r.predicted_answer == "cat"));
    assert_eq!(service.uploads().len(), 2);
}

#[tokio::test]
async fn rapid_submits_send_one_request() {
    let (endpoint, service) = spawn_service(answer_cat).await;
    let client = PredictionClient::new(&endpoint).expect("client");

    let mut form = form_with_image("cat.png").await;
    form.set_question("What animal is this?");

    let SubmitOutcome::Dispatched { ticket, request } = form.submit() else {
        panic!("first submit should dispatch");
    };
    for _ in 0..5 {
        assert!(matches!(form.submit(), SubmitOutcome::AlreadySubmitting));
    }

    let result = client.predict(request).await;
    assert!(form.complete(ticket, result));
    assert_eq!(service.uploads().len(), 1);
}

#[tokio::test]
async fn malformed_success_body_is_a_transport_failure() {
    let (endpoint, _service) =
        spawn_service(|_: &Upload| (StatusCode::OK, json!({"answer": "cat"}))).await;
    let client = PredictionClient::new(&endpoint).expect("client");

    let mut form = form_with_image("cat.png").await;
    form.set_question("What animal is this?");
    let SubmitOutcome::Dispatched { request, .. } = form.submit() else {
        panic!("submit should dispatch");
    };

    let result = client.predict(request).await;
    assert!(matches!(result, Err(PredictionError::Transport(_))));
}

#[tokio::test]
async fn late_response_after_teardown_is_discarded() {
    let (endpoint, _service) = spawn_service(answer_cat).await;
    let client = PredictionClient::new(&endpoint).expect("client");

    let mut form = form_with_image("cat.png").await;
    form.set_question("What animal is this?");
    let SubmitOutcome::Dispatched { ticket, request } = form.submit() else {
        panic!("submit should dispatch");
    };

    form.teardown();
    let result = client.predict(request).await;
    assert!(!form.complete(ticket, result));
    assert_eq!(form.preview_ledger().live(), 0);
}
