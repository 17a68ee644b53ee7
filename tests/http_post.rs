// tests/http_post.rs

mod common;

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use common::*;
use haptic_survey_lib::error::AppError;
use haptic_survey_lib::survey::{submit, FormPoster, SubmissionClient, UreqPoster};

/// Serves exactly one request with `status`, handing back the raw request.
fn one_shot_server(status: u16) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let request = read_request(&mut stream);

        let reason = if status == 200 { "OK" } else { "Internal Server Error" };
        let reply = format!(
            "HTTP/1.1 {status} {reason}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
        );
        stream.write_all(reply.as_bytes()).expect("write reply");
        stream.flush().expect("flush");

        tx.send(request).expect("hand back request");
    });

    (format!("http://{addr}/exec"), rx)
}

fn read_request(stream: &mut std::net::TcpStream) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).expect("read");
        assert!(n > 0, "client closed before headers");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            name.trim()
                .eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).expect("read body");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

// ======================================================
// Real form posts
// ======================================================

#[test]
fn accepted_post_marks_session_submitted() {
    let (url, rx) = one_shot_server(200);
    let client = SubmissionClient::new(Some(url), Arc::new(UreqPoster::new()));

    let mut s = fresh_session();
    walk_to_final(&mut s);
    assert!(submit(&mut s, &client));
    assert!(s.has_submitted);

    let request = rx.recv().expect("request captured");
    assert!(request.starts_with("POST /exec "));

    let lower = request.to_ascii_lowercase();
    assert!(lower.contains("content-type: application/x-www-form-urlencoded"));

    let body = request
        .split_once("\r\n\r\n")
        .map(|(_, b)| b)
        .expect("body");
    assert!(body.starts_with("payload="));
    assert!(body.contains("integration-session"));
}

#[test]
fn server_error_is_a_failed_submission() {
    let (url, rx) = one_shot_server(500);
    let poster = UreqPoster::new();

    assert_eq!(
        poster
            .post_form(&url, &[("payload", "{}")])
            .expect("status reported"),
        500
    );
    rx.recv().expect("request captured");

    let (url, _rx) = one_shot_server(500);
    let client = SubmissionClient::new(Some(url), Arc::new(UreqPoster::new()));
    let mut s = fresh_session();
    walk_to_final(&mut s);

    assert!(!submit(&mut s, &client));
    assert!(!s.has_submitted);
    assert!(!s.is_submitting);
    assert!(s.document.completed_at.is_some());
}

#[test]
fn unreachable_endpoint_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let port = {
        let l = TcpListener::bind("127.0.0.1:0").expect("bind");
        l.local_addr().expect("addr").port()
    };

    let poster = UreqPoster::new();
    let err = poster
        .post_form(&format!("http://127.0.0.1:{port}/exec"), &[("payload", "{}")])
        .expect_err("connection refused");
    assert!(matches!(err, AppError::SubmitTransport(_)));
}
