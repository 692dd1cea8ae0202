use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dagraph() -> Command {
    Command::cargo_bin("dagraph").unwrap()
}

#[test]
fn test_sort_chain() {
    dagraph()
        .args(["sort", "A:B", "B:C"])
        .assert()
        .success()
        .stdout("A\nB\nC\n");
}

#[test]
fn test_sort_json() {
    dagraph()
        .args(["sort", "A:B", "B:C", "--json"])
        .assert()
        .success()
        .stdout("[\"A\",\"B\",\"C\"]\n");
}

#[test]
fn test_sort_empty_graph() {
    dagraph().arg("sort").assert().success().stdout("");
}

#[test]
fn test_sort_lone_vertex() {
    dagraph()
        .args(["sort", "--vertex", "solo"])
        .assert()
        .success()
        .stdout("solo\n");
}

#[test]
fn test_kahn_sort_fails_on_cycle() {
    dagraph()
        .args(["sort", "A:B", "B:C", "C:A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Graph has at least one cycle"));
}

#[test]
fn test_dfs_sort_does_not_fail_on_cycle() {
    dagraph()
        .args(["sort", "A:B", "B:C", "C:A", "--algorithm", "dfs"])
        .assert()
        .success()
        .stdout("A\nB\nC\n");
}

#[test]
fn test_check_reports_both_algorithms() {
    for algorithm in ["dfs", "kahn"] {
        dagraph()
            .args(["check", "A:B", "B:C", "--algorithm", algorithm])
            .assert()
            .success()
            .stdout("acyclic\n");

        dagraph()
            .args(["check", "A:A", "--algorithm", algorithm])
            .assert()
            .success()
            .stdout("cycle: A -> A\n");
    }
}

#[test]
fn test_invalid_edge() {
    dagraph()
        .args(["sort", "AB"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid edge `AB`"));
}

#[test]
fn test_dot_to_stdout() {
    dagraph()
        .args(["dot", "A:B", "--title", "mine"])
        .assert()
        .success()
        .stdout(predicate::str::contains("digraph dag {"))
        .stdout(predicate::str::contains("label=\"mine\";"))
        .stdout(predicate::str::contains("\"A\" -> \"B\";"));
}

#[test]
fn test_demo_writes_dot() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sample_dag.dot");

    dagraph()
        .args(["demo", "--seed", "3", "--dot"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Topological sort: ["));

    let dot = std::fs::read_to_string(&path).unwrap();
    assert!(dot.contains("Directed Acyclic Graph (DAG)"));
}

#[test]
fn test_demo_is_reproducible() {
    let first = dagraph()
        .args(["demo", "--seed", "11", "--vertices", "10"])
        .output()
        .unwrap();
    let second = dagraph()
        .args(["demo", "--seed", "11", "--vertices", "10"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_demo_rejects_bad_probability() {
    dagraph()
        .args(["demo", "--probability", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid edge probability 2"));
}
