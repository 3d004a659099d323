//! 実際の HTTP アダプタとファイルログで Runner を通すテスト

use std::io::Read;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use common::adapter::{FileJsonLog, HttpJournalResource};
use common::domain::BaseUrl;
use tiny_http::{Header, Response, Server, StatusCode};

use super::support::RecordingNotifier;
use crate::adapter::AssumeYesConfirmation;
use crate::cli::{Action, Config};
use crate::domain::JournalCommand;
use crate::ports::inbound::UseCaseRunner;
use crate::usecase::list::DELETE_SUCCESS;
use crate::wiring::App;
use crate::Runner;

/// 決まった応答を順に返すサーバ。受けたリクエストの "METHOD url" を送る
fn spawn_server(responses: Vec<(u16, &'static str)>) -> (String, mpsc::Receiver<String>) {
    let server = Server::http("127.0.0.1:0").expect("http server");
    let base = format!("http://{}", server.server_addr());
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for (status, body) in responses {
            let mut req = match server.recv_timeout(Duration::from_secs(5)) {
                Ok(Some(req)) => req,
                _ => break,
            };
            let mut sink = String::new();
            let _ = req.as_reader().read_to_string(&mut sink);
            let _ = tx.send(format!("{} {}", req.method(), req.url()));
            let response = Response::from_string(body)
                .with_status_code(StatusCode(status))
                .with_header(
                    Header::from_bytes("Content-Type", "application/json").expect("header"),
                );
            let _ = req.respond(response);
        }
    });
    (base, rx)
}

fn app(base: &str, log_path: std::path::PathBuf, notifier: Arc<RecordingNotifier>) -> App {
    App {
        resource: Arc::new(
            HttpJournalResource::new(BaseUrl::new(base), Duration::from_secs(5)).expect("resource"),
        ),
        confirmation: Arc::new(AssumeYesConfirmation),
        notifier,
        log: Arc::new(FileJsonLog::new(log_path)),
    }
}

#[test]
fn test_delete_over_http_and_log_lifecycle() {
    let (base, rx) = spawn_server(vec![
        (
            200,
            r#"[{"id":1,"title":"Kyoto","location":"Kyoto","date":"2024-04-01","description":"Temples"},
                {"id":2,"title":"Rome","location":"Rome","date":"2024-05-01","description":"Ruins"}]"#,
        ),
        (200, "{}"),
    ]);
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("log").join("journal.jsonl");
    let notifier = RecordingNotifier::new();
    let runner = Runner {
        app: app(&base, log_path.clone(), notifier.clone()),
    };

    let config = Config {
        action: Action::Delete,
        target: Some("2".to_string()),
        ..Default::default()
    };
    assert_eq!(runner.run(config).unwrap(), 0);

    assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), "GET /Travel_Journal");
    assert_eq!(
        rx.recv_timeout(Duration::from_secs(5)).unwrap(),
        "DELETE /Travel_Journal/2"
    );
    assert_eq!(
        notifier.notices(),
        vec![super::support::Notice::Success(DELETE_SUCCESS.to_string())]
    );

    let text = std::fs::read_to_string(&log_path).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.first().unwrap()["message"], "command started");
    let last = records.last().unwrap();
    assert_eq!(last["message"], "command finished");
    assert_eq!(last["fields"]["command"], "delete");
    assert_eq!(last["fields"]["exit_code"], 0);
}

#[test]
fn test_list_failure_over_http_is_silent() {
    let (base, _rx) = spawn_server(vec![(500, "oops")]);
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("journal.jsonl");
    let notifier = RecordingNotifier::new();
    let runner = Runner {
        app: app(&base, log_path.clone(), notifier.clone()),
    };

    assert_eq!(runner.run(Config::default()).unwrap(), 0);
    assert!(notifier.notices().is_empty());

    let text = std::fs::read_to_string(&log_path).unwrap();
    let warned = text
        .lines()
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap())
        .any(|r| r["level"] == "warn" && r["fields"]["status"] == 500);
    assert!(warned, "expected a warn record with status 500: {}", text);
}

#[test]
fn test_list_over_http_shows_every_row_despite_datetime_date() {
    let (base, _rx) = spawn_server(vec![(
        200,
        r#"[{"id":1,"title":"Kyoto","location":"Kyoto","date":"2024-04-01","description":"Temples"},
            {"id":2,"title":"Rome","location":"Rome","date":"2024-02-02T00:00:00.000Z","description":"Ruins"},
            {"id":3,"title":"Oslo","location":"Oslo","date":"2024-06-01","description":"Fjords"}]"#,
    )]);
    let dir = tempfile::tempdir().unwrap();
    let notifier = RecordingNotifier::new();
    let runner = Runner {
        app: app(&base, dir.path().join("journal.jsonl"), notifier.clone()),
    };

    let mut out = Vec::new();
    assert_eq!(runner.execute(JournalCommand::List, &mut out).unwrap(), 0);
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("No entries here"), "{}", text);
    for title in ["Kyoto", "Rome", "Oslo"] {
        assert!(text.contains(title), "missing {}: {}", title, text);
    }
    assert!(text.contains("2024-02-02"));
    assert!(notifier.notices().is_empty());
}
