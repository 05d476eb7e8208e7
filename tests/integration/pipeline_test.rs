// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use regdocs::domain::services::observer::FetchEvent;
use regdocs::presentation::summary::{exit_code, render_summary, EXIT_ERRORS, EXIT_OK};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{build_pipeline, test_config};

const SEARCH_PATH: &str = "/online_services/search/by_title/_Business_Registration";

fn results_html(base: &str) -> String {
    format!(
        r#"<html><body>
        <table class="resultsTable">
          <tr><th>Name</th><th>SOS ID</th><th>Status</th><th>Date Formed</th></tr>
          <tr>
            <td><a href="/business/12345678">Test Company LLC</a></td>
            <td>12345678</td><td>Active</td><td>2020-06-15</td>
          </tr>
          <tr><td>malformed</td></tr>
          <tr>
            <td><a href="{}/business/87654321">Other Holdings Inc.</a></td>
            <td>87654321</td><td>Dissolved</td>
          </tr>
        </table>
        </body></html>"#,
        base
    )
}

async fn mount_html(server: &MockServer, at: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string(body),
        )
        .mount(server)
        .await;
}

async fn mount_pdf(server: &MockServer, at: &str, body: &'static [u8]) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/pdf")
                .set_body_bytes(body),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_run_downloads_documents() {
    let server = MockServer::start().await;
    let temp = tempfile::tempdir().unwrap();
    let storage_dir = temp.path().join("fetched");

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("Words", "Test Company"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_html(&server.uri())))
        .expect(1)
        .mount(&server)
        .await;
    mount_html(
        &server,
        "/business/12345678",
        r#"<a href="/d/a.pdf">Articles</a><a href="/d/B.PDF">Annual</a>
           <a href="/d/a.pdf">Articles (again)</a><a href="/about.html">About</a>"#
            .to_string(),
    )
    .await;
    mount_html(&server, "/business/87654321", "<p>No filings</p>".to_string()).await;
    mount_pdf(&server, "/d/a.pdf", b"%PDF-1.4 articles").await;
    mount_pdf(&server, "/d/B.PDF", b"%PDF-1.4 annual").await;

    let config = test_config(&server.uri(), &storage_dir);
    let (pipeline, _observer) = build_pipeline(&config).await;

    let (outcome, records) = pipeline.execute_with_records("Test Company").await;

    assert_eq!(outcome.businesses_found, 2);
    assert_eq!(outcome.documents_downloaded(), 2);
    assert_eq!(outcome.documents_downloaded(), outcome.downloaded_files().len());
    assert!(outcome.errors.is_empty());

    assert_eq!(records[0].entity_name, "Test Company LLC");
    assert_eq!(records[0].sos_identifier, "12345678");
    assert_eq!(records[0].status_text, "Active");
    assert_eq!(records[0].date_registered, "2020-06-15");
    assert_eq!(records[0].pdf_documents.len(), 2);
    assert_eq!(records[1].entity_name, "Other Holdings Inc.");
    assert_eq!(records[1].date_registered, "");
    assert!(records[1].pdf_documents.is_empty());

    let files = outcome.downloaded_files();
    assert_eq!(std::fs::read(&files[0]).unwrap(), b"%PDF-1.4 articles");
    assert_eq!(std::fs::read(&files[1]).unwrap(), b"%PDF-1.4 annual");
    for file in files {
        assert!(file.starts_with(&storage_dir));
        let name = file.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("Test Company LLC_"));
        assert!(name.ends_with(".pdf"));
    }
    assert_ne!(files[0], files[1]);

    assert_eq!(exit_code(&outcome), EXIT_OK);
    assert!(render_summary(&outcome).contains("Documents Downloaded: 2"));
}

#[tokio::test]
async fn test_search_exhausting_retries_records_single_error() {
    let server = MockServer::start().await;
    let temp = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let config = test_config(&server.uri(), temp.path());
    let (pipeline, observer) = build_pipeline(&config).await;

    let outcome = pipeline.execute("Acme").await;

    assert_eq!(outcome.businesses_found, 0);
    assert_eq!(outcome.documents_downloaded(), 0);
    assert!(outcome.downloaded_files().is_empty());
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].starts_with("Unable to search"));
    assert_eq!(exit_code(&outcome), EXIT_ERRORS);

    let retries = observer
        .events()
        .into_iter()
        .filter(|e| matches!(e, FetchEvent::RetryScheduled { .. }))
        .count();
    assert_eq!(retries, 2);
}

#[tokio::test]
async fn test_detail_failure_is_not_reported_as_error() {
    let server = MockServer::start().await;
    let temp = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<table class="resultsTable"><tr><th>h</th></tr>
               <tr><td><a href="/business/1">Broken Detail LLC</a></td><td>1</td><td>Active</td><td>2019-01-01</td></tr>
               </table>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/business/1"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let config = test_config(&server.uri(), temp.path());
    let (pipeline, observer) = build_pipeline(&config).await;

    let outcome = pipeline.execute("Broken").await;

    assert_eq!(outcome.businesses_found, 1);
    assert_eq!(outcome.documents_downloaded(), 0);
    assert!(outcome.errors.is_empty());
    assert_eq!(exit_code(&outcome), EXIT_OK);
    assert!(observer
        .events()
        .iter()
        .any(|e| matches!(e, FetchEvent::DetailFetchFailed { entity_name, .. } if entity_name == "Broken Detail LLC")));
}

#[tokio::test]
async fn test_failed_document_does_not_stop_remaining_downloads() {
    let server = MockServer::start().await;
    let temp = tempfile::tempdir().unwrap();

    mount_html(
        &server,
        SEARCH_PATH,
        r#"<table id="searchResults"><tr><th>h</th></tr>
           <tr><td><a href="/business/1">Partial Co</a></td><td>1</td><td>Active</td></tr>
           </table>"#
            .to_string(),
    )
    .await;
    mount_html(
        &server,
        "/business/1",
        r#"<a href="/d/gone.pdf">gone</a><a href="/d/ok.pdf">ok</a>"#.to_string(),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/d/gone.pdf"))
        .respond_with(ResponseTemplate::new(404))
        .expect(3)
        .mount(&server)
        .await;
    mount_pdf(&server, "/d/ok.pdf", b"%PDF ok").await;

    let config = test_config(&server.uri(), temp.path());
    let (pipeline, observer) = build_pipeline(&config).await;

    let outcome = pipeline.execute("Partial").await;

    assert_eq!(outcome.businesses_found, 1);
    assert_eq!(outcome.documents_downloaded(), 1);
    assert!(outcome.errors.is_empty());
    assert_eq!(
        std::fs::read(&outcome.downloaded_files()[0]).unwrap(),
        b"%PDF ok"
    );
    assert!(observer
        .events()
        .iter()
        .any(|e| matches!(e, FetchEvent::DocumentFailed { url, .. } if url.ends_with("/d/gone.pdf"))));
}
