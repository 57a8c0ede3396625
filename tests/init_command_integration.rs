//! Integration tests for the `init` and `base-path` commands.

use camino::Utf8PathBuf;
use ghstats::Host;

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_init_then_base_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = Utf8PathBuf::from_path_buf(dir.path().join("ghstats.toml")).unwrap();

    let mut host = TestHost::new();
    ghstats::run(&mut host, ["ghstats", "init", "--output", config.as_str()]).await;
    assert_eq!(host.exit_code, Some(0), "stderr: {}", host.error_str());
    assert!(config.exists());

    let mut host = TestHost::new();
    ghstats::run(&mut host, ["ghstats", "--config", config.as_str(), "base-path"]).await;
    assert_eq!(host.exit_code, Some(0), "stderr: {}", host.error_str());
    assert_eq!(host.output_str().trim(), "data");
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let config = Utf8PathBuf::from_path_buf(dir.path().join("ghstats.toml")).unwrap();
    std::fs::write(&config, "concurrency = 2\n").unwrap();

    let mut host = TestHost::new();
    ghstats::run(&mut host, ["ghstats", "init", "--output", config.as_str()]).await;
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("already exists"));
    assert_eq!(std::fs::read_to_string(&config).unwrap(), "concurrency = 2\n");

    let mut host = TestHost::new();
    ghstats::run(&mut host, ["ghstats", "init", "--output", config.as_str(), "--force"]).await;
    assert_eq!(host.exit_code, Some(0), "stderr: {}", host.error_str());
    assert!(std::fs::read_to_string(&config).unwrap().contains("base_path"));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri cannot call CreateIoCompletionPort")]
async fn test_invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = Utf8PathBuf::from_path_buf(dir.path().join("ghstats.toml")).unwrap();
    std::fs::write(&config, "[repos.\"not-a-repo\"]\n").unwrap();

    let mut host = TestHost::new();
    ghstats::run(&mut host, ["ghstats", "--config", config.as_str(), "base-path"]).await;
    assert_eq!(host.exit_code, Some(1));
    assert!(host.error_str().contains("owner/name"), "got: {}", host.error_str());
}
