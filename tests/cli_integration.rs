use assert_cmd::Command;
use predicates::prelude::*;

fn listwise() -> Command {
    Command::cargo_bin("listwise").unwrap()
}

#[test]
fn bare_invocation_lists_sample_contacts() {
    listwise()
        .assert()
        .success()
        .stdout(predicates::str::contains("John Carter"))
        .stdout(predicates::str::contains("Jane Miller"))
        .stdout(predicates::str::contains("6 records"));
}

#[test]
fn status_filter_narrows_the_table() {
    listwise()
        .args(["list", "--status", "Subscribed"])
        .assert()
        .success()
        .stdout(predicates::str::contains("John Carter"))
        .stdout(predicates::str::contains("Jane Miller").not());
}

#[test]
fn search_matches_name_case_insensitively() {
    listwise()
        .args(["list", "--search", "ADA"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Ada Okafor"))
        .stdout(predicates::str::contains("1 record\n"));
}

#[test]
fn tag_filter_and_status_filter_combine() {
    listwise()
        .args(["list", "--status", "Subscribed", "--tag", "vip"])
        .assert()
        .success()
        .stdout(predicates::str::contains("John Carter"))
        .stdout(predicates::str::contains("Mei Lin"))
        .stdout(predicates::str::contains("Ada Okafor").not());
}

#[test]
fn delete_reports_count_and_prints_survivors() {
    listwise()
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Deleted 1 records"))
        .stdout(predicates::str::contains("John Carter").not())
        .stdout(predicates::str::contains("Jane Miller"));
}

#[test]
fn stale_id_is_a_reported_noop() {
    listwise()
        .args(["email", "999"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No records selected"));
}

#[test]
fn export_writes_a_gzip_archive() {
    let temp_dir = tempfile::tempdir().unwrap();

    listwise()
        .current_dir(temp_dir.path())
        .args(["export", "1", "2"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Exported 2 records"));

    let archive = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .find(|e| {
            let name = e.file_name().to_string_lossy().to_string();
            name.starts_with("listwise-") && name.ends_with(".tar.gz")
        })
        .expect("archive file should exist");

    let bytes = std::fs::read(archive.path()).unwrap();
    assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
}

#[test]
fn data_file_replaces_the_sample_collection() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("contacts.json");
    std::fs::write(
        &data,
        r#"[{
            "id": 10,
            "name": "Custom Person",
            "email": "custom@example.com",
            "status": "Subscribed",
            "tags": ["imported"],
            "joined_at": "2024-01-01T00:00:00Z"
        }]"#,
    )
    .unwrap();

    listwise()
        .args(["--data", data.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Custom Person"))
        .stdout(predicates::str::contains("John Carter").not());
}

#[test]
fn campaigns_sort_descending_by_recipients() {
    listwise()
        .args(["--campaigns", "list", "--sort", "recipients", "--desc"])
        .assert()
        .success()
        .stdout(
            predicates::str::is_match("(?s)Black Friday Teaser.*Spring Sale.*Re-engagement")
                .unwrap(),
        );
}
