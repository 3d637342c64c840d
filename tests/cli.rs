//! End-to-end tests for the `rekap` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

struct Workspace {
    data: TempDir,
    out: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            data: TempDir::new().unwrap(),
            out: TempDir::new().unwrap(),
        }
    }

    fn rekap(&self) -> Command {
        let mut cmd = Command::cargo_bin("rekap").unwrap();
        cmd.env("REKAP_DATA_DIR", self.data.path())
            .env_remove("REKAP_OUTPUT_DIR")
            .env_remove("RUST_LOG")
            .arg("--output-dir")
            .arg(self.out.path());
        cmd
    }

    fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.out.path().join(name)).unwrap()
    }
}

#[test]
fn amount_parse_and_format() {
    let ws = Workspace::new();

    ws.rekap()
        .args(["amount", "parse", "Rp1.000.000"])
        .assert()
        .success()
        .stdout("1000000\n");

    ws.rekap()
        .args(["amount", "parse", "  Rp 2,500 "])
        .assert()
        .success()
        .stdout("2500\n");

    ws.rekap()
        .args(["amount", "parse", "abc"])
        .assert()
        .success()
        .stdout("0\n");

    ws.rekap()
        .args(["amount", "format", "1234567"])
        .assert()
        .success()
        .stdout("Rp1.234.567\n");

    ws.rekap()
        .args(["amount", "format", "-1000"])
        .assert()
        .success()
        .stdout("-Rp1.000\n");
}

#[test]
fn daily_set_writes_csv_and_updates_totals() {
    let ws = Workspace::new();

    ws.rekap()
        .args(["daily", "set", "02/06/2025", "Makan", "Rp50.000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Makan total: Rp50.000"));

    ws.rekap()
        .args(["daily", "set", "03/06/2025", "Makan", "Rp25,000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Makan total: Rp75.000"));

    let csv = ws.read_output("pengeluaran_harian.csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Date,Makan,Bensin,Parkir,Ongkos,Shoope,Pulsa,Lain-lain");
    assert_eq!(lines[2], "02/06/2025,Rp50.000,,,,,,");
    assert_eq!(lines[3], "03/06/2025,\"Rp25,000\",,,,,,");
    assert_eq!(lines.len(), 31);
}

#[test]
fn daily_set_warns_on_malformed_amount() {
    let ws = Workspace::new();

    ws.rekap()
        .args(["daily", "set", "05/06/2025", "Pulsa", "sepuluh ribu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("counts as Rp0"));
}

#[test]
fn daily_set_rejects_unknown_category_and_date() {
    let ws = Workspace::new();

    ws.rekap()
        .args(["daily", "set", "02/06/2025", "Kopi", "Rp5.000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Kopi"));

    ws.rekap()
        .args(["daily", "set", "01/07/2025", "Makan", "Rp5.000"])
        .assert()
        .failure();

    ws.rekap()
        .args(["daily", "set", "2025-06-01", "Makan", "Rp5.000"])
        .assert()
        .failure();

    assert!(!ws.out.path().join("pengeluaran_harian.csv").exists());
}

#[test]
fn summary_set_and_nominal_from_daily() {
    let ws = Workspace::new();

    ws.rekap()
        .args(["daily", "set", "10/06/2025", "Bensin", "Rp30.000"])
        .assert()
        .success();

    ws.rekap()
        .args(["summary", "set", "8", "income-label", "BONUS"])
        .assert()
        .success();

    ws.rekap()
        .args(["summary", "set", "8", "income", "Rp100.000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rp3.800.000"))
        .stdout(predicate::str::contains("Rp2.370.000"));

    let csv = ws.read_output("rekap_keuangan_juni.csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "NO,Pemasukan,Jumlah Pemasukan,Pengeluaran,Jumlah Pengeluaran,Rincian Biaya,Nominal"
    );
    assert_eq!(lines[3], "3,BAPAK,,SELVI,\"Rp1,000,000\",Bensin,Rp30.000");
    assert_eq!(lines[8], "8,BONUS,Rp100.000,,,,");
}

#[test]
fn saves_create_a_missing_output_dir() {
    let ws = Workspace::new();
    let nested = ws.out.path().join("arsip").join("2025");
    let rekap = || {
        let mut cmd = Command::cargo_bin("rekap").unwrap();
        cmd.env("REKAP_DATA_DIR", ws.data.path())
            .env_remove("REKAP_OUTPUT_DIR")
            .env_remove("RUST_LOG")
            .arg("--output-dir")
            .arg(&nested);
        cmd
    };

    rekap()
        .args(["daily", "set", "02/06/2025", "Makan", "Rp50.000"])
        .assert()
        .success();
    assert!(nested.join("pengeluaran_harian.csv").exists());

    fs::remove_dir_all(ws.out.path().join("arsip")).unwrap();
    rekap()
        .args(["daily", "clear"])
        .assert()
        .success();
    assert!(nested.join("pengeluaran_harian.csv").exists());

    fs::remove_dir_all(ws.out.path().join("arsip")).unwrap();
    rekap()
        .args(["summary", "set", "8", "income-label", "BONUS"])
        .assert()
        .success();
    let summary = fs::read_to_string(nested.join("rekap_keuangan_juni.csv")).unwrap();
    assert!(summary.contains("8,BONUS,,,,,"));
}

#[test]
fn summary_nominal_is_not_editable() {
    let ws = Workspace::new();

    ws.rekap()
        .args(["summary", "set", "1", "nominal", "Rp1"])
        .assert()
        .failure();

    ws.rekap()
        .args(["summary", "set", "42", "income", "Rp1"])
        .assert()
        .failure();
}

#[test]
fn export_all_writes_both_files() {
    let ws = Workspace::new();
    let target = ws.out.path().join("backup");

    ws.rekap()
        .args(["export", "all", "--output"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("pengeluaran_harian.csv"))
        .stdout(predicate::str::contains("rekap_keuangan_juni.csv"));

    assert!(target.join("pengeluaran_harian.csv").exists());
    let summary = fs::read_to_string(target.join("rekap_keuangan_juni.csv")).unwrap();
    assert_eq!(summary.lines().count(), 11);
    assert!(summary.contains("7,CASH,\"Rp3,400,000\",,,Lain-lain,Rp0"));
}

#[test]
fn show_json_reports_totals() {
    let ws = Workspace::new();

    ws.rekap()
        .args(["daily", "set", "01/06/2025", "Makan", "Rp50.000"])
        .assert()
        .success();

    let output = ws
        .rekap()
        .args(["show", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["period"], "2025-06");
    assert_eq!(json["totals"]["income"], 3_700_000);
    assert_eq!(json["totals"]["expense"], 1_400_000);
    assert_eq!(json["totals"]["breakdown"], 50_000);
    assert_eq!(json["totals"]["balance"], 2_250_000);
    assert_eq!(json["totals"]["balance_formatted"], "Rp2.250.000");
}

#[test]
fn show_text_lists_the_balance() {
    let ws = Workspace::new();

    ws.rekap()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Juni 2025"))
        .stdout(predicate::str::contains("Saldo Saat Ini"))
        .stdout(predicate::str::contains("Rp2.300.000"));
}

#[test]
fn init_writes_seed_and_config_shows_paths() {
    let ws = Workspace::new();

    ws.rekap().arg("init").assert().success();
    assert!(ws.data.path().join("seed.yaml").exists());
    assert!(ws.data.path().join("config.json").exists());

    ws.rekap()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile: Iqbal"))
        .stdout(predicate::str::contains("Juni 2025"))
        .stdout(predicate::str::contains("Makan, Bensin"));
}

#[test]
fn custom_seed_changes_categories() {
    let ws = Workspace::new();
    fs::write(
        ws.data.path().join("seed.yaml"),
        "categories: [Makan, Kos]\nsummary_rows:\n  - income_label: GAJI\n    income_amount: Rp5.000.000\n    breakdown_label: Kos\n",
    )
    .unwrap();

    ws.rekap()
        .args(["daily", "set", "01/06/2025", "Kos", "Rp1.500.000"])
        .assert()
        .success();

    ws.rekap()
        .args(["summary", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rp3.500.000"));
}
