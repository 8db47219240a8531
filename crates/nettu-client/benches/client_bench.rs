// Benchmarks for the per-request hot path
// Measures auth header derivation and response envelope decoding

use std::hint::black_box;

use bytes::Bytes;
use criterion::{Criterion, criterion_group, criterion_main};
use nettu_client::{ApiResponse, PartialCredentials, RawResponse, model::CalendarEventsResponse};

fn bench_create_auth_headers(c: &mut Criterion) {
    let account = PartialCredentials::default().with_api_key("secret").resolve();
    let user = PartialCredentials::default()
        .with_nettu_account("account-id")
        .with_token("header.payload.signature")
        .resolve();

    c.bench_function("create_auth_headers_account", |b| {
        b.iter(|| black_box(&account).create_auth_headers())
    });

    c.bench_function("create_auth_headers_user", |b| {
        b.iter(|| black_box(&user).create_auth_headers())
    });
}

fn bench_envelope_decode(c: &mut Criterion) {
    let events: Vec<String> = (0..50)
        .map(|i| {
            format!(
                r#"{{"event":{{"id":"e{i}","calendarId":"c1","userId":"u1","startTs":{i},"duration":3600000,"busy":true}},"instances":[{{"startTs":{i},"endTs":{},"busy":true}}]}}"#,
                i + 3600000
            )
        })
        .collect();
    let body = format!(
        r#"{{"calendar":{{"id":"c1","userId":"u1","settings":{{"wkst":0,"timezone":"UTC"}}}},"events":[{}]}}"#,
        events.join(",")
    );
    let raw = RawResponse {
        status: 200,
        headers: Vec::new(),
        body: Bytes::from(body),
    };

    c.bench_function("envelope_decode_calendar_events", |b| {
        b.iter(|| {
            let res: ApiResponse<CalendarEventsResponse> =
                ApiResponse::from_raw(black_box(raw.clone()));
            res
        })
    });

    let error = RawResponse {
        status: 404,
        headers: Vec::new(),
        body: Bytes::from_static(br#"{"error":"not found"}"#),
    };
    c.bench_function("envelope_decode_error_body", |b| {
        b.iter(|| {
            let res: ApiResponse<CalendarEventsResponse> =
                ApiResponse::from_raw(black_box(error.clone()));
            res
        })
    });
}

criterion_group!(benches, bench_create_auth_headers, bench_envelope_decode);
criterion_main!(benches);
