use std::time::Duration;

use quiz_core::model::{Difficulty, Topic};
use serde_json::json;
use services::{GeminiSupplier, QuestionSupplier, SupplierConfig, SupplyError, SupplyRequest};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

fn supplier(base_url: &str, timeout: Duration) -> GeminiSupplier {
    let config = SupplierConfig::from_lookup(|key| match key {
        "QUIZ_AI_API_KEY" => Some("test-key".to_string()),
        "QUIZ_AI_BASE_URL" => Some(base_url.to_string()),
        _ => None,
    })
    .unwrap()
    .with_timeout(timeout);
    GeminiSupplier::new(config).unwrap()
}

fn science() -> SupplyRequest {
    SupplyRequest::new(Topic::new("Science").unwrap(), 5, Difficulty::Easy)
}

fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Reads one full request and returns its head (request line and headers).
async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return String::from_utf8_lossy(&buf).into_owned();
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = find(&buf, b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).into_owned();
            let body_len = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                return head;
            }
        }
    }
}

/// Answers exactly one request with `response`; the handle yields the request head.
async fn serve_once(response: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let head = read_request(&mut stream).await;
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;
        head
    });
    (format!("http://{addr}"), server)
}

#[tokio::test]
async fn valid_reply_yields_questions_and_sends_key_header() {
    let questions = json!({
        "questions": [{
            "question": "What is H2O?",
            "options": ["Water", "Salt", "Air", "Iron"],
            "correctAnswer": "Water",
            "explanation": "Two hydrogens, one oxygen."
        }]
    });
    let body = json!({
        "candidates": [{ "content": { "parts": [{ "text": questions.to_string() }] } }]
    });
    let (base_url, server) = serve_once(http_response("200 OK", &body.to_string())).await;

    let supplied = supplier(&base_url, Duration::from_secs(5))
        .supply(&science())
        .await
        .unwrap();
    assert_eq!(supplied.len(), 1);
    assert_eq!(supplied[0].correct_answer(), "Water");

    let head = server.await.unwrap();
    assert!(
        head.starts_with("POST /models/gemini-2.5-flash:generateContent "),
        "unexpected request line in {head}"
    );
    assert!(
        head.to_ascii_lowercase().contains("x-goog-api-key: test-key"),
        "missing key header in {head}"
    );
}

#[tokio::test]
async fn unreachable_service_is_unavailable() {
    let err = supplier("http://127.0.0.1:1", Duration::from_secs(5))
        .supply(&science())
        .await
        .unwrap_err();
    assert!(matches!(err, SupplyError::ServiceUnavailable(_)), "got {err:?}");
}

#[tokio::test]
async fn stalled_reply_times_out_as_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let _server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_request(&mut stream).await;
        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(stream);
    });

    let err = supplier(&format!("http://{addr}"), Duration::from_millis(200))
        .supply(&science())
        .await
        .unwrap_err();
    assert!(matches!(err, SupplyError::ServiceUnavailable(_)), "got {err:?}");
}

#[tokio::test]
async fn undecodable_body_is_malformed() {
    let (base_url, _server) = serve_once(http_response("200 OK", "<html>oops</html>")).await;
    let err = supplier(&base_url, Duration::from_secs(5))
        .supply(&science())
        .await
        .unwrap_err();
    assert!(matches!(err, SupplyError::Malformed(_)), "got {err:?}");
}

#[tokio::test]
async fn reply_without_candidates_is_malformed() {
    let (base_url, _server) = serve_once(http_response("200 OK", r#"{"candidates":[]}"#)).await;
    let err = supplier(&base_url, Duration::from_secs(5))
        .supply(&science())
        .await
        .unwrap_err();
    assert!(matches!(err, SupplyError::Malformed(_)), "got {err:?}");
}

#[tokio::test]
async fn error_statuses_are_classified_after_reading_the_body() {
    let cases = [
        ("429 Too Many Requests", "rate limited"),
        ("503 Service Unavailable", "overloaded"),
        ("401 Unauthorized", "bad key"),
    ];
    let mut errors = Vec::new();
    for (status, body) in cases {
        let (base_url, _server) = serve_once(http_response(status, body)).await;
        let err = supplier(&base_url, Duration::from_secs(5))
            .supply(&science())
            .await
            .unwrap_err();
        errors.push(err);
    }

    assert_eq!(errors[0], SupplyError::RateLimited);
    assert!(matches!(errors[1], SupplyError::ServiceUnavailable(_)), "got {:?}", errors[1]);
    assert!(
        matches!(&errors[2], SupplyError::Unknown(detail) if detail.contains("bad key")),
        "got {:?}",
        errors[2]
    );
}
