// crates/rgbapack-cli/tests/cli_seed_plane.rs

use std::fs;
use std::process::Command;

use rgbapack_core::container::decode_container;

fn run_ok(cmd: &mut Command) -> String {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).expect("utf8 stdout")
}

fn seeds_cmd(out: &std::path::Path, seed: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rgbapack-cli"));
    cmd.args([
        "seeds",
        "--out",
        out.to_str().unwrap(),
        "--width",
        "16",
        "--height",
        "8",
        "--seed",
        seed,
    ]);
    cmd
}

#[test]
fn seeds_are_deterministic_and_readable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = dir.path().join("a.rgp");
    let b = dir.path().join("b.rgp");

    run_ok(&mut seeds_cmd(&a, "0xD1CE"));
    run_ok(&mut seeds_cmd(&b, "0xD1CE"));

    let bytes_a = fs::read(&a).expect("read a");
    let bytes_b = fs::read(&b).expect("read b");
    assert_eq!(bytes_a, bytes_b, "same seed produced different planes");

    let plane = decode_container(&bytes_a).expect("valid container");
    assert_eq!(plane.layout().width, 16);
    assert_eq!(plane.seeds().len(), 32);

    let mut inspect = Command::new(env!("CARGO_BIN_EXE_rgbapack-cli"));
    inspect.args(["inspect", "--in", a.to_str().unwrap(), "--bins", "4", "--counts"]);
    let stdout = run_ok(&mut inspect);
    assert!(stdout.contains("dims            = 16x8"), "stdout:\n{stdout}");
    assert!(stdout.contains("seeds           = 32"), "stdout:\n{stdout}");
    assert!(stdout.contains("--- x ---") && stdout.contains("--- y ---"));
}

#[test]
fn inspect_rejects_corrupted_plane() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.rgp");
    run_ok(&mut seeds_cmd(&path, "7"));

    let mut bytes = fs::read(&path).expect("read plane");
    bytes[30] ^= 0xFF;
    fs::write(&path, &bytes).expect("write corrupted");

    let out = Command::new(env!("CARGO_BIN_EXE_rgbapack-cli"))
        .args(["inspect", "--in", path.to_str().unwrap()])
        .output()
        .expect("spawn inspect");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("crc32 mismatch"));
}
