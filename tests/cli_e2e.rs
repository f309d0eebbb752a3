use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn moviedb(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("moviedb").unwrap();
    cmd.env("MOVIEDB_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("OMDB_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn add(home: &Path, storage: &str, title: &str, year: &str, rating: &str) {
    moviedb(home)
        .args([storage, "add", title, "--year", year, "--rating", rating])
        .assert()
        .success()
        .stdout(predicate::str::contains("added"));
}

#[test]
fn test_add_list_delete_json() {
    let home = TempDir::new().unwrap();
    add(home.path(), "--json", "Heat", "1995", "8.3");

    assert!(home.path().join("movie_db.json").exists());
    moviedb(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Heat").and(predicate::str::contains("1995")));

    moviedb(home.path())
        .args(["delete", "heat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully deleted"));

    moviedb(home.path())
        .args(["delete", "heat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("doesn't exist"));
}

#[test]
fn test_add_list_delete_csv() {
    let home = TempDir::new().unwrap();
    add(home.path(), "--csv", "Alien", "1979", "8.5");

    let csv = fs::read_to_string(home.path().join("movie_db.csv")).unwrap();
    assert!(csv.starts_with("Title,Rating,Year,Poster,ID"));
    assert!(csv.contains("Alien"));
    assert!(!home.path().join("movie_db.json").exists());

    moviedb(home.path())
        .args(["--csv", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alien"));

    moviedb(home.path())
        .args(["--csv", "delete", "Alien"])
        .assert()
        .success();
    let csv = fs::read_to_string(home.path().join("movie_db.csv")).unwrap();
    assert_eq!(csv.trim(), "Title,Rating,Year,Poster,ID");
}

#[test]
fn test_duplicate_add_warns() {
    let home = TempDir::new().unwrap();
    add(home.path(), "--json", "Heat", "1995", "8.3");

    moviedb(home.path())
        .args(["add", "HEAT", "--year", "1995", "--rating", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_name_and_data_dir_select_file() {
    let home = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let data_dir = data.path().to_str().unwrap();

    moviedb(home.path())
        .args(["--data-dir", data_dir, "-n", "films", "add", "Up"])
        .args(["--year", "2009", "--rating", "8.3"])
        .assert()
        .success();

    assert!(data.path().join("films.json").exists());
    assert!(!home.path().join("movie_db.json").exists());
}

#[test]
fn test_stats_needs_two_movies() {
    let home = TempDir::new().unwrap();
    add(home.path(), "--json", "Solo", "2018", "6.9");

    moviedb(home.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("at least 2"));

    add(home.path(), "--json", "Heat", "1995", "8.1");
    moviedb(home.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Average rating").and(predicate::str::contains("7.50")));
}

#[test]
fn test_sort_by_year_ascending() {
    let home = TempDir::new().unwrap();
    add(home.path(), "--json", "Heat", "1995", "8.3");
    add(home.path(), "--json", "Alien", "1979", "8.5");
    add(home.path(), "--json", "Up", "2009", "8.3");

    let output = moviedb(home.path())
        .args(["sort", "year", "asc"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let alien = stdout.find("Alien").unwrap();
    let heat = stdout.find("Heat").unwrap();
    let up = stdout.find("Up").unwrap();
    assert!(alien < heat && heat < up, "unexpected order:\n{}", stdout);
}

#[test]
fn test_fetch_without_api_key_fails() {
    let home = TempDir::new().unwrap();

    moviedb(home.path())
        .args(["add", "Inception"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No OMDb API key"));
}

#[test]
fn test_corrupt_file_fails_without_overwriting() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("movie_db.json");
    fs::write(&path, "{ not json").unwrap();

    moviedb(home.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
}

#[test]
fn test_website_written_to_output() {
    let home = TempDir::new().unwrap();
    add(home.path(), "--json", "Heat", "1995", "8.3");
    let output = home.path().join("site.html");

    moviedb(home.path())
        .args(["website", "--heading", "My Films", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Website was generated successfully"));

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("My Films"));
    assert!(html.contains("Heat"));
}

#[test]
fn test_config_storage_switches_backend() {
    let home = TempDir::new().unwrap();

    moviedb(home.path())
        .args(["config", "storage", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage set to csv"));

    add(home.path(), "--csv", "Heat", "1995", "8.3");
    moviedb(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Heat"));
    assert!(home.path().join("movie_db.csv").exists());

    moviedb(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("storage = csv"));
}

#[test]
fn test_menu_exits_on_zero() {
    let home = TempDir::new().unwrap();
    add(home.path(), "--json", "Heat", "1995", "8.3");

    moviedb(home.path())
        .write_stdin("1\n\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Heat").and(predicate::str::contains("Bye!")));
}

#[test]
fn test_menu_add_without_key_prompts_for_details() {
    let home = TempDir::new().unwrap();

    moviedb(home.path())
        .arg("menu")
        .write_stdin("2\nHeat\n3000\n1995\n11\n8\n\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Year must be between"))
        .stdout(predicate::str::contains("Rating must be between"));

    let json = fs::read_to_string(home.path().join("movie_db.json")).unwrap();
    assert!(json.contains("\"Heat\""));
}
