use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MODULES: &str = indoc! {r#"
    [
      {"serialNumber": "25-101", "projectId": "tower", "hitchBLM": "B1-L1-M02", "rearBLM": "B1-L1-M03", "buildSequence": 2},
      {"serialNumber": "25-100", "projectId": "tower", "hitchBLM": "B1-L1-M01", "rearBLM": "", "buildSequence": 1},
      {"serialNumber": "25-102", "projectId": "annex", "hitchBLM": "B1-L2-M01", "rearBLM": "B1-L2-M09", "sawbox": true, "buildSequence": "3"}
    ]
"#};

const DRAWINGS: &str = indoc! {r#"
    [
      {"name": "B1L1M01_Arch.pdf", "revision": 2},
      {"name": "L1M03 Mechanical.pdf"},
      {"name": "B1L2M09_Plan.pdf"}
    ]
"#};

const DIFFICULTY: &str = indoc! {r#"
    {
      "indicators": [{"id": "stairs", "name": "Stair opening"}],
      "entries_by_project": {
        "tower": [
          {"difficulty_indicator_id": "stairs", "station_id": "framing", "difficulty_category": "hard"}
        ]
      }
    }
"#};

const SCHEDULE: &str = indoc! {r#"
    {
      "stations": [{"id": "framing", "name": "Framing", "order": 1, "offset": 0}],
      "week": {
        "week_start": "2026-03-02",
        "starting_module": "25-100",
        "days": [
          {"date": "2026-03-02", "shifts": [2]},
          {"date": "2026-03-03", "shifts": [1]}
        ]
      }
    }
"#};

fn write_fixtures(dir: &Path) {
    fs::write(dir.join("modules.json"), MODULES).unwrap();
    fs::write(dir.join("drawings.json"), DRAWINGS).unwrap();
    fs::write(dir.join("difficulty.json"), DIFFICULTY).unwrap();
    fs::write(dir.join("schedule.json"), SCHEDULE).unwrap();
}

fn moda(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("moda").unwrap();
    cmd.current_dir(dir).arg("--plain").env_remove("RUST_LOG");
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_parse_json() {
    let temp = TempDir::new().unwrap();
    let value = json_output(moda(temp.path()).args(["parse", "b2-l3-m07", "L5M12", "-f", "json"]));

    assert_eq!(value[0]["building"], "2");
    assert_eq!(value[0]["module"], 7);
    assert_eq!(value[1]["building"], "1");
    assert_eq!(value[1]["raw"], "L5M12");
}

#[test]
fn test_drawings_report() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());

    let value = json_output(moda(temp.path()).args([
        "drawings",
        "--modules",
        "modules.json",
        "--drawings",
        "drawings.json",
        "--format",
        "json",
    ]));

    assert_eq!(value["total"], 3);
    assert_eq!(value["matched"], 2);
    // the sawbox ignores its rear side, so B1L2M09_Plan.pdf does not count
    assert_eq!(value["modules"][2]["status"], "missing");
    assert_eq!(value["modules"][0]["drawing"], "L1M03 Mechanical.pdf");
}

#[test]
fn test_sort_uses_config_defaults() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());
    fs::write(
        temp.path().join(".moda.toml"),
        "[sorting]\nkey = \"sequence\"\ndirection = \"desc\"\n\n[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();

    let value = json_output(moda(temp.path()).args(["sort", "--modules", "modules.json"]));
    assert_eq!(value["key"], "sequence");
    let serials: Vec<&str> = value["modules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["serial_number"].as_str().unwrap())
        .collect();
    assert_eq!(serials, vec!["25-102", "25-101", "25-100"]);
}

#[test]
fn test_heatmap_markdown() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());

    let output = moda(temp.path())
        .args([
            "heatmap",
            "--modules",
            "modules.json",
            "--difficulty",
            "difficulty.json",
            "--schedule",
            "schedule.json",
            "--format",
            "markdown",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("# Station Difficulty"));
    // Monday: 25-100 and 25-101, both tower modules with a hard stair opening
    assert!(text.contains("| framing | Heavy (+2, 2) | Normal (+0, 1) |"));
}

#[test]
fn test_report_written_to_file() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());

    moda(temp.path())
        .args([
            "drawings",
            "--modules",
            "modules.json",
            "--drawings",
            "drawings.json",
            "--missing-only",
            "-o",
            "missing.md",
            "-f",
            "markdown",
        ])
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join("missing.md")).unwrap();
    assert!(written.contains("25-102"));
    assert!(!written.contains("| 25-100 |"));
}

#[test]
fn test_bad_input_fails_with_path() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("modules.json"), "{\"oops\": true}").unwrap();

    let output = moda(temp.path())
        .args(["sort", "--modules", "modules.json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("modules.json"));
}

#[test]
fn test_init_writes_config_once() {
    let temp = TempDir::new().unwrap();
    moda(temp.path()).arg("init").assert().success();
    assert!(temp.path().join(".moda.toml").exists());
    moda(temp.path()).arg("init").assert().failure();
}

#[cfg(target_os = "linux")]
#[test]
fn test_failed_report_write_is_an_error() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());

    let output = moda(temp.path())
        .args([
            "drawings",
            "--modules",
            "modules.json",
            "--drawings",
            "drawings.json",
            "-o",
            "/dev/full",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to write report"));
}
