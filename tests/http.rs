use reqwest::Client;
use serde_json::{json, Value};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use tokio::time::sleep;

struct TestServer {
    base_url: String,
    data_dir: PathBuf,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
        let _ = std::fs::remove_dir_all(&self.data_dir);
    }
}

#[cfg(unix)]
mod cleanup {
    use once_cell::sync::Lazy;
    use std::sync::{Mutex, Once};

    static REGISTER: Once = Once::new();
    static PIDS: Lazy<Mutex<Vec<i32>>> = Lazy::new(|| Mutex::new(Vec::new()));

    pub fn register(pid: u32) {
        PIDS.lock().unwrap().push(pid as i32);
        REGISTER.call_once(|| unsafe {
            libc::atexit(on_exit);
        });
    }

    extern "C" fn on_exit() {
        if let Ok(pids) = PIDS.lock() {
            for pid in pids.iter() {
                unsafe {
                    libc::kill(*pid, libc::SIGTERM);
                }
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn scratch_data_dir() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "intern_portal_http_{}_{}",
        std::process::id(),
        nanos
    ));
    std::fs::create_dir_all(&dir).expect("create scratch data dir");
    dir
}

fn write_resource(dir: &Path, name: &str, value: &Value) {
    std::fs::write(
        dir.join(format!("{name}.json")),
        serde_json::to_vec_pretty(value).unwrap(),
    )
    .expect("write resource file");
}

fn remove_resource(dir: &Path, name: &str) {
    std::fs::remove_file(dir.join(format!("{name}.json"))).expect("remove resource file");
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/health")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server(data_dir: PathBuf) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_intern_portal"))
        .env("PORT", port.to_string())
        .env("PORTAL_DATA_DIR", &data_dir)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer {
        base_url,
        data_dir,
        child,
    }
}

fn alice() -> Value {
    json!({
        "name": "Alice",
        "email": "alice@example.com",
        "referralCode": "REF777",
        "totalDonations": 100,
        "rank": 1,
        "referrals": 3,
        "thisMonth": 40,
        "lastMonth": 60
    })
}

#[tokio::test]
async fn user_endpoint_returns_file_contents_verbatim() {
    let dir = scratch_data_dir();
    // Shape the server never validates; it must round-trip untouched.
    let content = json!({
        "name": "Alice",
        "totalDonations": 100,
        "nested": { "anything": [1, 2, 3] }
    });
    write_resource(&dir, "user", &content);
    let server = spawn_server(dir).await;

    let body: Value = Client::new()
        .get(format!("{}/api/user", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body, content);
}

#[tokio::test]
async fn endpoints_fall_back_when_resources_missing() {
    let server = spawn_server(scratch_data_dir()).await;
    let client = Client::new();

    let user: Value = client
        .get(format!("{}/api/user", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(user["name"], "John Doe");
    assert_eq!(user["referralCode"], "REF123456");
    assert_eq!(user["totalDonations"], 18_500);

    let board: Value = client
        .get(format!("{}/api/leaderboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let rows = board.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["name"], "Sarah Johnson");
    assert_eq!(rows[0]["rank"], 1);
}

#[tokio::test]
async fn reload_keeps_previous_value_when_resource_removed() {
    let dir = scratch_data_dir();
    write_resource(&dir, "user", &alice());
    let server = spawn_server(dir).await;
    let client = Client::new();

    let loaded: Value = client
        .get(format!("{}/api/user", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(loaded, alice());

    remove_resource(&server.data_dir, "user");
    let reload: Value = client
        .post(format!("{}/api/reload-data", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reload["success"], true);
    assert_eq!(reload["userLoaded"], false);

    // The slot does not revert to fallback; the last loaded value stays.
    let after: Value = client
        .get(format!("{}/api/user", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after, alice());
}

#[tokio::test]
async fn reload_picks_up_new_content() {
    let server = spawn_server(scratch_data_dir()).await;
    let client = Client::new();

    let board = json!([
        { "name": "Alice", "amount": 900, "referrals": 2, "rank": 1 },
        { "name": "Bob", "amount": 500, "referrals": 1, "rank": 2 }
    ]);
    write_resource(&server.data_dir, "user", &alice());
    write_resource(&server.data_dir, "leaderboard", &board);

    let reload: Value = client
        .post(format!("{}/api/reload-data", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reload["success"], true);
    assert_eq!(reload["message"], "Data reloaded successfully");
    assert_eq!(reload["userLoaded"], true);
    assert_eq!(reload["leaderboardLoaded"], true);

    let user: Value = client
        .get(format!("{}/api/user", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(user, alice());

    let health: Value = client
        .get(format!("{}/api/health", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["dataSources"]["user"], true);
    assert_eq!(health["dataSources"]["leaderboard"], true);
}

#[tokio::test]
async fn health_reports_slot_state_and_timestamp() {
    let dir = scratch_data_dir();
    write_resource(&dir, "leaderboard", &json!([]));
    let server = spawn_server(dir).await;

    let health: Value = Client::new()
        .get(format!("{}/api/health", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(health["status"], "OK");
    assert_eq!(health["dataSources"]["user"], false);
    assert_eq!(health["dataSources"]["leaderboard"], true);
    let timestamp = health["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn leaderboard_reads_are_idempotent() {
    let server = spawn_server(scratch_data_dir()).await;
    let client = Client::new();

    let first: Value = client
        .get(format!("{}/api/leaderboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = client
        .get(format!("{}/api/leaderboard", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let server = spawn_server(scratch_data_dir()).await;

    let response = Client::new()
        .get(format!("{}/api/user", server.base_url))
        .header("Origin", "http://elsewhere.example")
        .send()
        .await
        .unwrap();

    let allow = response
        .headers()
        .get("access-control-allow-origin")
        .expect("missing CORS header");
    assert_eq!(allow, "*");
}

#[tokio::test]
async fn index_serves_app_shell() {
    let server = spawn_server(scratch_data_dir()).await;

    let response = Client::new()
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body = response.text().await.unwrap();
    assert!(body.contains("Intern Portal"));
    assert!(body.contains("/api/leaderboard"));
}
