use assert_cmd::Command;
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;
use std::sync::mpsc;
use std::thread;
use tempfile::TempDir;

fn git_available() -> bool {
    StdCommand::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .args([
            "-c",
            "user.name=Bench Bot",
            "-c",
            "user.email=bench@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap();
    assert!(status.success(), "git {:?} failed", args);
}

fn repo_with_commits(count: usize) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    git(dir.path(), &["init", "-q"]);
    for i in 0..count {
        git(
            dir.path(),
            &["commit", "--allow-empty", "-q", "-m", &format!("commit {}", i)],
        );
    }
    dir
}

fn case(model: &str, mean: f64) -> Value {
    json!({
        "benchmark_info": {
            "model_name": model,
            "model_tags": ["fp32"],
            "model_source": "TFLite",
            "bench_mode": ["4-thread", "big-core", "full-inference"],
            "runner": "iree-dylib",
            "device_info": {
                "platform_type": "Android",
                "model": "Pixel-4",
                "cpu_abi": "arm64-v8a",
                "cpu_features": [],
                "gpu_name": "Adreno-640"
            }
        },
        "results": [
            {"name": "BM_main/real_time_mean", "run_type": "aggregate",
             "aggregate_name": "mean", "real_time": mean, "time_unit": "ms"}
        ]
    })
}

fn write_results(dir: &Path, name: &str, cases: Vec<Value>) -> PathBuf {
    let path = dir.join(name);
    let doc = json!({"commit": "HEAD", "benchmarks": cases});
    std::fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
    path
}

fn uploader() -> Command {
    let mut cmd = Command::cargo_bin("upload-benchmarks").unwrap();
    cmd.env_remove("IREE_DASHBOARD_URL")
        .env_remove("IREE_DASHBOARD_API_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

/// Accept `count` requests, answer each with 200 and report their request lines.
fn dashboard_server(count: usize) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for _ in 0..count {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap();
                }
            }
            let mut body = vec![0u8; content_length];
            reader.read_exact(&mut body).unwrap();
            stream
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\nConnection: close\r\n\r\n")
                .unwrap();
            stream.flush().unwrap();
            tx.send(request_line.trim_end().to_string()).unwrap();
        }
    });

    (format!("http://{}", addr), rx)
}

fn payloads(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter_map(|line| line.strip_prefix("API request payload: "))
        .map(|json| serde_json::from_str(json).unwrap())
        .collect()
}

#[test]
fn test_dry_run_prints_every_payload() {
    if !git_available() {
        return;
    }
    let repo = repo_with_commits(5);
    let inputs = tempfile::tempdir().unwrap();
    let first = write_results(inputs.path(), "a.json", vec![case("PoseNet", 12.3)]);
    let second = write_results(inputs.path(), "b.json", vec![case("MobileSSD", 45.6)]);

    let output = uploader()
        .arg("--dry-run")
        .arg("--repo-dir")
        .arg(repo.path())
        .arg(&first)
        .arg(&second)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let payloads = payloads(&output.stdout);
    assert_eq!(payloads.len(), 5);
    assert_eq!(payloads[0]["build"]["buildId"], json!(5));
    assert!(payloads[1]["serieId"]
        .as_str()
        .unwrap()
        .starts_with("PoseNet [fp32] (TFLite)"));
    assert_eq!(payloads[2]["sample"], json!({"buildId": 5, "value": 12.3}));
    assert!(payloads[3]["serieId"]
        .as_str()
        .unwrap()
        .starts_with("MobileSSD [fp32] (TFLite)"));
    assert_eq!(payloads[4]["sample"], json!({"buildId": 5, "value": 45.6}));
    assert!(payloads.iter().all(|p| p["override"] == json!(true)));
}

#[test]
fn test_verbose_prints_and_posts_every_payload() {
    if !git_available() {
        return;
    }
    let repo = repo_with_commits(3);
    let inputs = tempfile::tempdir().unwrap();
    let file = write_results(inputs.path(), "a.json", vec![case("PoseNet", 12.3)]);
    let (url, requests) = dashboard_server(3);

    let output = uploader()
        .current_dir(inputs.path())
        .env("IREE_DASHBOARD_URL", &url)
        .env("IREE_DASHBOARD_API_TOKEN", "secret")
        .env("NO_PROXY", "127.0.0.1")
        .env_remove("HTTP_PROXY")
        .env_remove("http_proxy")
        .env_remove("ALL_PROXY")
        .env_remove("all_proxy")
        .arg("--verbose")
        .arg("--repo-dir")
        .arg(repo.path())
        .arg(&file)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let payloads = payloads(&output.stdout);
    assert_eq!(payloads.len(), 3);
    assert_eq!(payloads[2]["sample"], json!({"buildId": 3, "value": 12.3}));

    let received: Vec<String> = requests.iter().take(3).collect();
    assert_eq!(
        received,
        [
            "POST /apis/addBuild HTTP/1.1",
            "POST /apis/addSerie HTTP/1.1",
            "POST /apis/addSample HTTP/1.1",
        ]
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Uploaded 1 series for build 3"));
}

#[test]
fn test_duplicate_series_across_files_fails() {
    if !git_available() {
        return;
    }
    let repo = repo_with_commits(1);
    let inputs = tempfile::tempdir().unwrap();
    let first = write_results(inputs.path(), "a.json", vec![case("PoseNet", 1.0)]);
    let second = write_results(inputs.path(), "b.json", vec![case("PoseNet", 2.0)]);

    let output = uploader()
        .arg("--dry-run")
        .arg("--repo-dir")
        .arg(repo.path())
        .arg(&first)
        .arg(&second)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(payloads(&output.stdout).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Duplicated benchmarks"));
}

#[test]
fn test_missing_token_fails_at_first_post() {
    if !git_available() {
        return;
    }
    let repo = repo_with_commits(2);
    let inputs = tempfile::tempdir().unwrap();
    let file = write_results(inputs.path(), "a.json", vec![case("PoseNet", 1.0)]);

    let output = uploader()
        .current_dir(inputs.path())
        .env("IREE_DASHBOARD_URL", "http://127.0.0.1:9")
        .arg("--repo-dir")
        .arg(repo.path())
        .arg(&file)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Missing environment variable \"IREE_DASHBOARD_API_TOKEN\""));
}

#[test]
fn test_nonexistent_file_is_usage_error() {
    let output = uploader()
        .arg("--dry-run")
        .arg("/nonexistent/results.json")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_malformed_json_fails() {
    let inputs = tempfile::tempdir().unwrap();
    let path = inputs.path().join("broken.json");
    std::fs::write(&path, "not json").unwrap();

    let output = uploader().arg("--dry-run").arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("broken.json"));
}
