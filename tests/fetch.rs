// tests/fetch.rs
//
// Fetch against a throwaway local server: status handling and what the cache
// keeps afterwards.

mod common;

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use nifty_stats::config::options::FetchOptions;
use nifty_stats::core::net::http_get;
use nifty_stats::error::Error;
use nifty_stats::pipeline::load_table;
use nifty_stats::store::{TableCache, shared_table};

use common::FIXTURE;

/// Answer `count` requests with `status` and `body`, then stop.
fn serve(status: &'static str, body: &'static str, count: usize) -> (FetchOptions, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        for stream in listener.incoming().take(count) {
            let mut stream = stream.unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            // request line + headers, up to the blank line
            while reader.read_line(&mut line).unwrap() > 0 {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            let resp = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(resp.as_bytes()).unwrap();
        }
    });

    let opts = FetchOptions {
        url: format!("http://{addr}/symbols/NSE-NIFTY/components/"),
        timeout: Some(Duration::from_secs(10)),
    };
    (opts, handle)
}

#[test]
fn server_error_is_fatal() {
    let (opts, server) = serve("500 Internal Server Error", "", 1);
    match http_get(&opts) {
        Err(Error::Status { status, url }) => {
            assert_eq!(status, 500);
            assert_eq!(url, opts.url);
        }
        other => panic!("unexpected: {other:?}"),
    }
    server.join().unwrap();
}

#[test]
fn not_found_stops_the_load() {
    let (opts, server) = serve("404 Not Found", "gone", 1);
    assert!(matches!(load_table(&opts, None), Err(Error::Status { status: 404, .. })));
    server.join().unwrap();
}

#[test]
fn ok_page_builds_the_table() {
    let (opts, server) = serve("200 OK", FIXTURE, 1);
    let t = load_table(&opts, None).unwrap();
    assert_eq!(t.len(), 5);
    server.join().unwrap();
}

#[test]
fn failed_fetch_leaves_cache_empty() {
    let (opts, server) = serve("500 Internal Server Error", "", 1);
    let cache = TableCache::new();
    let err = cache.get_or_load(|| load_table(&opts, None)).unwrap_err();
    assert!(matches!(err, Error::Status { status: 500, .. }));
    assert!(cache.get().is_none());
    server.join().unwrap();
}

#[test]
fn shared_table_retries_after_failure() {
    // Only test in this binary touching the process-wide table.
    let (opts, server) = serve("503 Service Unavailable", "", 2);
    for _ in 0..2 {
        assert!(matches!(shared_table(&opts, None), Err(Error::Status { status: 503, .. })));
    }
    server.join().unwrap();
}
