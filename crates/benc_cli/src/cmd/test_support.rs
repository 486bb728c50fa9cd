use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use benc_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static BENC_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_arg(name: &str) -> String {
	shared_fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_benc(args: &[&str]) -> Output {
	Command::new(benc_bin()).args(args).output().expect("benc command executes")
}

pub(crate) fn run_benc_json(args: &[&str]) -> serde_json::Value {
	let output = run_benc(args);
	assert!(
		output.status.success(),
		"benc command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn benc_bin() -> &'static PathBuf {
	BENC_BIN.get_or_init(resolve_benc_bin)
}

fn resolve_benc_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_benc") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "benc.exe" } else { "benc" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "benc"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build benc binary at {}", bin.display());

	bin
}
