use std::sync::Arc;

use common::domain::{HomeDir, ProviderName};
use common::error::Error;
use common::gate::sha256_hex;

use super::TestEnv;
use crate::cli::Config;
use crate::ports::inbound::UseCaseRunner;
use crate::wiring;

/// 一時ホームで App を組み立て、Runner で run する（テスト用の入口）
fn run_app(home: &tempfile::TempDir, env: TestEnv, config: Config) -> Result<i32, Error> {
    let app = wiring::wire_with_home(&config, Arc::new(env), HomeDir::new(home.path()))?;
    let runner = crate::Runner { app };
    runner.run(config)
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn echo_config(list: &[&str]) -> Config {
    Config {
        profile: Some(ProviderName::new("echo")),
        words: words(list),
        ..Default::default()
    }
}

#[test]
fn test_run_app_with_help() {
    let home = tempfile::tempdir().unwrap();
    let config = Config {
        help: true,
        ..Default::default()
    };
    assert_eq!(run_app(&home, TestEnv::new(home.path()), config).unwrap(), 0);
}

#[test]
fn test_run_app_without_command() {
    let home = tempfile::tempdir().unwrap();
    let err = run_app(&home, TestEnv::new(home.path()), Config::default()).unwrap_err();
    assert!(err.to_string().contains("No command given"));
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_run_app_list_profiles() {
    let home = tempfile::tempdir().unwrap();
    let config = Config {
        list_profiles: true,
        ..Default::default()
    };
    assert_eq!(run_app(&home, TestEnv::new(home.path()), config).unwrap(), 0);
}

#[test]
fn test_run_app_prompt_does_not_need_model() {
    let home = tempfile::tempdir().unwrap();
    let config = Config {
        words: words(&["prompt", "supremacy", "example.com"]),
        ..Default::default()
    };
    assert_eq!(run_app(&home, TestEnv::new(home.path()), config).unwrap(), 0);
}

#[test]
fn test_run_app_prompt_with_blank_param() {
    let home = tempfile::tempdir().unwrap();
    let config = Config {
        words: words(&["prompt", "code-harmony"]),
        ..Default::default()
    };
    let err = run_app(&home, TestEnv::new(home.path()), config).unwrap_err();
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_run_app_echo_audit_is_parse_failure() {
    // echo は指示文をそのまま返すので JSON にならない
    let home = tempfile::tempdir().unwrap();
    let err = run_app(
        &home,
        TestEnv::new(home.path()),
        echo_config(&["audit", "example.com"]),
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), 65);
    assert!(!home.path().join("AAS_AUDIT_HISTORY.json").exists());
    assert!(home.path().join("logs").join("athenea.jsonl").exists());
}

#[test]
fn test_run_app_echo_advanced_with_explicit_target() {
    let home = tempfile::tempdir().unwrap();
    let code = run_app(
        &home,
        TestEnv::new(home.path()),
        echo_config(&["advanced", "faith", "example.com"]),
    )
    .unwrap();
    assert_eq!(code, 0);
}

#[test]
fn test_run_app_advanced_without_history() {
    let home = tempfile::tempdir().unwrap();
    let err = run_app(
        &home,
        TestEnv::new(home.path()),
        echo_config(&["advanced", "faith"]),
    )
    .unwrap_err();
    assert!(err.is_usage());
}

#[test]
fn test_run_app_history_and_dossier() {
    let home = tempfile::tempdir().unwrap();
    let entry = serde_json::json!([{
        "target": "example.com",
        "cts": { "score": 80, "analysis": "a" },
        "hrl": { "score": 70, "analysis": "b" },
        "pensum": { "score": 60, "prediction": "c" },
        "sonica": { "score": 90, "recommendation": "d" },
        "capturedAt": "2025-11-06T09:30:00Z"
    }]);
    std::fs::write(home.path().join("AAS_AUDIT_HISTORY.json"), entry.to_string()).unwrap();

    let list = Config {
        words: words(&["history"]),
        ..Default::default()
    };
    assert_eq!(run_app(&home, TestEnv::new(home.path()), list).unwrap(), 0);

    let out = home.path().join("dossier.txt");
    let dossier = Config {
        words: words(&["dossier", "0"]),
        out: Some(out.clone()),
        ..Default::default()
    };
    assert_eq!(run_app(&home, TestEnv::new(home.path()), dossier).unwrap(), 0);
    let text = std::fs::read_to_string(out).unwrap();
    assert!(text.contains("OBJETIVO: example.com"));
    assert!(text.contains("FECHA: 2025-11-06T09:30:00.000Z"));

    let missing = Config {
        words: words(&["history", "3"]),
        ..Default::default()
    };
    let err = run_app(&home, TestEnv::new(home.path()), missing).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_run_app_gate_denies_without_code() {
    let home = tempfile::tempdir().unwrap();
    let cfg = serde_json::json!({ "access_code_sha256": sha256_hex("clave") });
    std::fs::write(home.path().join("config.json"), cfg.to_string()).unwrap();

    let err = run_app(
        &home,
        TestEnv::new(home.path()),
        echo_config(&["history"]),
    )
    .unwrap_err();
    assert_eq!(err.exit_code(), 77);

    let wrong = Config {
        access_code: Some("otra".to_string()),
        ..echo_config(&["history"])
    };
    let err = run_app(&home, TestEnv::new(home.path()), wrong).unwrap_err();
    assert_eq!(err.exit_code(), 77);

    // プロンプト表示はゲートを通さない
    let prompt = echo_config(&["prompt", "faith", "example.com"]);
    assert_eq!(run_app(&home, TestEnv::new(home.path()), prompt).unwrap(), 0);
}

#[test]
fn test_run_app_gate_accepts_code_from_env() {
    let home = tempfile::tempdir().unwrap();
    let cfg = serde_json::json!({ "access_code_sha256": sha256_hex("clave") });
    std::fs::write(home.path().join("config.json"), cfg.to_string()).unwrap();

    let mut env = TestEnv::new(home.path());
    env.vars
        .insert("ATHENEA_ACCESS_CODE".to_string(), "clave".to_string());
    assert_eq!(run_app(&home, env, echo_config(&["history"])).unwrap(), 0);
}

#[test]
fn test_run_app_broken_config_is_json_error() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("config.json"), "{ roto").unwrap();
    let err = run_app(&home, TestEnv::new(home.path()), echo_config(&["history"])).unwrap_err();
    assert_eq!(err.exit_code(), 65);
    assert!(err.to_string().contains("config.json"));
}
