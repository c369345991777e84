use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn genedrift() -> Command {
    Command::cargo_bin("genedrift").unwrap()
}

#[test]
fn test_init_creates_config() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("drift.json");

    genedrift()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration written to"));

    assert!(config_path.exists());
}

#[test]
fn test_init_population_param() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("pop.json");

    genedrift()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .arg("--population-size")
        .arg("10")
        .assert()
        .success()
        .stdout(predicate::str::contains("Population Size: 10"));
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("existing.json");
    std::fs::write(&config_path, "{}").unwrap();

    genedrift()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    genedrift()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .arg("--force")
        .assert()
        .success();
}

#[test]
fn test_init_stdout_prints_json() {
    genedrift()
        .arg("init")
        .arg("--stdout")
        .arg("--mode")
        .arg("multi")
        .arg("--seed")
        .arg("3")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"multi\""))
        .stdout(predicate::str::contains("\"seed\": 3"));
}

#[test]
fn test_init_rejects_out_of_range_frequency() {
    genedrift()
        .arg("init")
        .arg("--stdout")
        .arg("--frequency")
        .arg("1.5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("above the maximum"));
}

#[test]
fn test_run_rejects_zero_population() {
    genedrift()
        .arg("run")
        .arg("--population-size")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("below the minimum"));
}

#[test]
fn test_run_rejects_unparseable_generations() {
    genedrift()
        .arg("run")
        .arg("--generations")
        .arg("many")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a number"));
}

#[test]
fn test_run_single_mode() {
    genedrift()
        .arg("run")
        .arg("--seed")
        .arg("42")
        .arg("--generations")
        .arg("20")
        .arg("--no-progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("Single Run Summary"))
        .stdout(predicate::str::contains("Simulation complete!"));
}

#[test]
fn test_run_single_export() {
    let temp = tempdir().unwrap();
    let freq = temp.path().join("freq");
    let het = temp.path().join("het.csv");

    genedrift()
        .arg("run")
        .arg("--seed")
        .arg("1")
        .arg("-g")
        .arg("10")
        .arg("--no-progress")
        .arg("--export")
        .arg(&freq)
        .arg("--export-heterozygosity")
        .arg(&het)
        .assert()
        .success();

    let text = std::fs::read_to_string(temp.path().join("freq.csv")).unwrap();
    assert!(text.starts_with("type 0 x,0.0,"));
    assert!(text.contains("\ntype 0 y,0.5,"));
    assert!(het.exists());
}

#[test]
fn test_run_export_declined_overwrite_fails() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("out.csv");
    std::fs::write(&out, "keep").unwrap();

    genedrift()
        .arg("run")
        .arg("--no-progress")
        .arg("--export")
        .arg(&out)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Refused to overwrite"));

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "keep");
}

#[test]
fn test_run_export_force_overwrites() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("out.csv");
    std::fs::write(&out, "old").unwrap();

    genedrift()
        .arg("run")
        .arg("--no-progress")
        .arg("--export")
        .arg(&out)
        .arg("--force")
        .assert()
        .success();

    assert!(std::fs::read_to_string(&out).unwrap().starts_with("type 0 x"));
}

#[test]
fn test_run_multi_mode() {
    genedrift()
        .arg("run")
        .arg("--mode")
        .arg("multi")
        .arg("--runs")
        .arg("20")
        .arg("--seed")
        .arg("5")
        .arg("--no-progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("Final Allele Frequency (20 runs)"))
        .stdout(predicate::str::contains("Total replicates: 20"));
}

#[test]
fn test_run_multi_parallel_matches_across_threads() {
    let run = |threads: &str| {
        let output = genedrift()
            .arg("--threads")
            .arg(threads)
            .arg("run")
            .arg("--mode")
            .arg("multi")
            .arg("--parallel")
            .arg("--runs")
            .arg("50")
            .arg("--seed")
            .arg("9")
            .output()
            .unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout).unwrap();
        // Drop the line that names the thread count
        stdout
            .lines()
            .filter(|line| !line.contains("threads"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    assert_eq!(run("1"), run("4"));
}

#[test]
fn test_run_writes_svg() {
    let temp = tempdir().unwrap();
    let svg_dir = temp.path().join("svg");

    genedrift()
        .arg("run")
        .arg("--no-progress")
        .arg("-g")
        .arg("5")
        .arg("--svg-dir")
        .arg(&svg_dir)
        .assert()
        .success();

    for name in ["allele_frequency.svg", "heterozygosity.svg", "gauge.svg"] {
        let svg = std::fs::read_to_string(svg_dir.join(name)).unwrap();
        assert!(svg.starts_with("<svg"), "{name} is not an SVG document");
    }
}

#[test]
fn test_run_from_config_with_override() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("cfg.json");

    genedrift()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .arg("--mode")
        .arg("multi")
        .arg("--runs")
        .arg("10")
        .assert()
        .success();

    genedrift()
        .arg("run")
        .arg("--config")
        .arg(&config_path)
        .arg("--runs")
        .arg("15")
        .arg("--no-progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total replicates: 15"));
}

#[test]
fn test_validate_good_config() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("ok.json");

    genedrift()
        .arg("init")
        .arg("--output")
        .arg(&config_path)
        .assert()
        .success();

    genedrift()
        .arg("validate")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Parameters: OK"));
}

#[test]
fn test_validate_bad_config() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("bad.json");
    std::fs::write(
        &config_path,
        r#"{
            "population": {"initial_frequency": 0.5, "population_size": 20000, "generations": 10},
            "execution": {"mode": "single", "runs": 100, "seed": null}
        }"#,
    )
    .unwrap();

    genedrift()
        .arg("validate")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Parameters: FAILED"))
        .stdout(predicate::str::contains("population size"));
}

#[test]
fn test_validate_missing_file() {
    let temp = tempdir().unwrap();

    genedrift()
        .arg("validate")
        .arg("--config")
        .arg(temp.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}
