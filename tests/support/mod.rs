use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Write a catalog document under `<dir>/data/talents.json` and return its path.
pub fn write_catalog(dir: &Path, catalog: &Value) -> PathBuf {
    let data_dir = dir.join("data");
    fs::create_dir_all(&data_dir).expect("create data dir");
    let path = data_dir.join("talents.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(catalog).expect("serialize catalog"),
    )
    .expect("write catalog");
    path
}

/// Fixture compendium exercising every source book, requirement shapes, and
/// name collisions (two records named "Guile" with distinct ids).
pub fn sample_catalog() -> Value {
    json!({
        "schema_version": "talent_catalog_v1",
        "title": "Fixture Compendium",
        "talents": [
            {
                "id": 1,
                "name": "Grit",
                "source": "core",
                "requirements": null,
                "flavor": "Hard to break.",
                "text": "Reroll one die after a failed endurance test."
            },
            {
                "id": 2,
                "name": "Guile",
                "source": "Sand_and_Dust",
                "requirements": "Grit",
                "flavor": "Misdirection as second nature.",
                "text": "Feints cost one less Momentum."
            },
            {
                "id": 3,
                "name": "Guile",
                "source": "Power_And_Pawns_Emperors_Court",
                "requirements": null,
                "flavor": "Court-trained misdirection.",
                "text": "Gain one bonus die on deception tests at court."
            },
            {
                "id": 4,
                "name": "Steel Nerves",
                "source": "The_Great_Game_Houses_of_the_Landsraad",
                "requirements": "Grit",
                "flavor": "Unmoved amid vendetta.",
                "text": "Ignore the first point of stress each scene."
            }
        ]
    })
}

pub fn talents_binary(repo_root: &Path) -> PathBuf {
    ensure_binary_built(repo_root).expect("failed to build the talents binary");
    let candidates = [
        repo_root.join("target").join("debug").join("talents"),
        repo_root.join("target").join("release").join("talents"),
    ];
    for candidate in candidates {
        if candidate.is_file() {
            return candidate;
        }
    }
    panic!("unable to locate the talents binary (checked target/debug, target/release)");
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

fn ensure_binary_built(repo_root: &Path) -> Result<()> {
    static BUILT: AtomicBool = AtomicBool::new(false);
    if BUILT.load(Ordering::SeqCst) {
        return Ok(());
    }

    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let mutex = LOCK.get_or_init(|| Mutex::new(()));
    let _guard = mutex.lock().unwrap_or_else(|err| err.into_inner());

    if BUILT.load(Ordering::SeqCst) {
        return Ok(());
    }

    let status = Command::new("cargo")
        .arg("build")
        .arg("--bins")
        .arg("--quiet")
        .current_dir(repo_root)
        .status()
        .context("failed to compile the talents binary")?;
    if status.success() {
        BUILT.store(true, Ordering::SeqCst);
        Ok(())
    } else {
        bail!("cargo build --bins exited with {}", status);
    }
}
