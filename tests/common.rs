#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use std::thread;

use tempfile::TempDir;

/// Runs the built binary against an isolated settings file.
pub struct CliHarness {
    dir: TempDir,
    endpoint: Option<String>,
}

impl CliHarness {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
            endpoint: None,
        }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.path().join("settings.json")
    }

    /// Serve `body` with `status` from a local catalog endpoint.
    pub fn serve(mut self, status: u16, body: &str) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("Failed to bind test server");
        let port = server
            .server_addr()
            .to_ip()
            .expect("Test server has no IP address")
            .port();
        let body = body.to_string();
        thread::spawn(move || {
            for request in server.incoming_requests() {
                let header = tiny_http::Header::from_bytes(
                    &b"Content-Type"[..],
                    &b"application/json"[..],
                )
                .unwrap();
                let response = tiny_http::Response::from_string(body.clone())
                    .with_status_code(status)
                    .with_header(header);
                let _ = request.respond(response);
            }
        });
        self.endpoint = Some(format!("http://127.0.0.1:{port}/api/products"));
        self
    }

    pub fn run(&self, args: &[&str]) -> Output {
        let mut command = Command::new(env!("CARGO_BIN_EXE_catalog-tui"));
        command
            .arg("--settings")
            .arg(self.settings_path())
            .env("RUST_LOG", "catalog_tui=warn");
        if let Some(endpoint) = &self.endpoint {
            command.args(["--endpoint", endpoint]);
        }
        command
            .args(args)
            .output()
            .expect("Failed to run catalog-tui")
    }

    pub fn write_settings(&self, contents: &str) {
        std::fs::write(self.settings_path(), contents).expect("Failed to write settings");
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// JSON array of `count` products.
pub fn products_json(count: u64) -> String {
    let items: Vec<String> = (1..=count)
        .map(|id| {
            format!(
                r#"{{"id":{id},"title":"Product {id}","price":{id}.25,"description":"desc",
                    "category":"misc","image":"https://example.com/{id}.png"}}"#
            )
        })
        .collect();
    format!("[{}]", items.join(","))
}
