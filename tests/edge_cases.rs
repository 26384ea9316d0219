//! Edge case and error handling tests for natls and treedraw


use harness::{TestDir, read_output, run_natls, run_treedraw, tree_body};
use std::fs;
use std::os::unix::fs::symlink;

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_natls_symlink_to_file_is_listed() {
    let dir = TestDir::new();
    dir.add_file("target.txt", "");
    symlink(dir.path().join("target.txt"), dir.path().join("link.txt"))
        .expect("Failed to create symlink");

    let run = run_natls(dir.path(), &[]);
    assert!(run.success);
    assert_eq!(
        read_output(dir.path(), "files_list.txt"),
        "link.txt\ntarget.txt"
    );
}

#[test]
fn test_natls_symlink_to_directory_is_not_listed() {
    let dir = TestDir::new();
    dir.add_file("realdir/file.txt", "");
    dir.add_file("file.txt", "");
    symlink(dir.path().join("realdir"), dir.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let run = run_natls(dir.path(), &[]);
    assert!(run.success);
    assert_eq!(read_output(dir.path(), "files_list.txt"), "file.txt");
}

#[test]
fn test_treedraw_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("subdir/file.rs", "");
    symlink("..", dir.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let run = run_treedraw(dir.path(), &[]);
    assert!(run.success, "treedraw should not hang on parent symlink");
    assert_eq!(
        tree_body(&read_output(dir.path(), "tree.txt")),
        vec![
            "   ┗ 📂 subdir",
            "      ┣ 📂 parent",
            "      ┗ 📄 file.rs",
        ]
    );
}

#[test]
fn test_treedraw_mutual_symlinks_terminate() {
    let dir = TestDir::new();
    dir.add_dir("a");
    dir.add_dir("b");
    symlink(dir.path().join("b"), dir.path().join("a").join("to_b")).unwrap();
    symlink(dir.path().join("a"), dir.path().join("b").join("to_a")).unwrap();

    let run = run_treedraw(dir.path(), &[]);
    assert!(run.success);
    let output = read_output(dir.path(), "tree.txt");
    // a -> to_b (b) -> to_a (cycle, not descended)
    assert!(output.lines().count() < 20, "{}", output);
}

#[test]
fn test_broken_symlink_drawn_as_file() {
    let dir = TestDir::new();
    dir.add_file("real.rs", "");
    symlink("nonexistent.rs", dir.path().join("broken_link.rs"))
        .expect("Failed to create broken symlink");

    let run = run_treedraw(dir.path(), &[]);
    assert!(run.success, "treedraw should handle broken symlinks");
    assert_eq!(
        tree_body(&read_output(dir.path(), "tree.txt")),
        vec!["   ┣ 📄 broken_link.rs", "   ┗ 📄 real.rs"]
    );
}

#[test]
fn test_self_referential_symlink() {
    let dir = TestDir::new();
    dir.add_file("file.rs", "");
    symlink("selfref", dir.path().join("selfref"))
        .expect("Failed to create self-referential symlink");

    let run = run_natls(dir.path(), &[]);
    assert!(run.success);
    assert_eq!(read_output(dir.path(), "files_list.txt"), "file.rs");

    let run = run_treedraw(dir.path(), &[]);
    assert!(run.success);
    assert!(read_output(dir.path(), "tree.txt").contains("selfref"));
}

// ============================================================================
// Permission Error Handling
// ============================================================================

/// Lock a directory; returns false when the current user can read it anyway.
fn lock(dir: &TestDir, path: &std::path::Path) -> bool {
    dir.set_mode(path, 0o000);
    if fs::read_dir(path).is_ok() {
        dir.set_mode(path, 0o755);
        return false;
    }
    true
}

#[test]
fn test_unreadable_subdirectory_contributes_no_lines() {
    let dir = TestDir::new();
    dir.add_file("readable/file.rs", "");
    dir.add_file("unreadable/hidden.rs", "");
    let unreadable = dir.path().join("unreadable");
    if !lock(&dir, &unreadable) {
        return;
    }

    let run = run_treedraw(dir.path(), &[]);
    dir.set_mode(&unreadable, 0o755);

    assert!(run.success, "treedraw should handle unreadable directories");
    let output = read_output(dir.path(), "tree.txt");
    assert!(!output.contains("unreadable"), "{}", output);
    assert!(!output.contains("hidden.rs"));
    assert_eq!(
        tree_body(&output),
        vec!["   ┗ 📂 readable", "      ┗ 📄 file.rs"]
    );
}

#[test]
fn test_mark_denied_flag() {
    let dir = TestDir::new();
    dir.add_file("locked/hidden.rs", "");
    let locked = dir.path().join("locked");
    if !lock(&dir, &locked) {
        return;
    }

    let run = run_treedraw(dir.path(), &["--mark-denied"]);
    dir.set_mode(&locked, 0o755);

    assert!(run.success);
    assert_eq!(
        tree_body(&read_output(dir.path(), "tree.txt")),
        vec!["   ┗ 📂 locked (access denied)"]
    );
}

#[test]
fn test_unreadable_root_fails() {
    let dir = TestDir::new();
    dir.add_file("root/file.rs", "");
    let root = dir.path().join("root");
    if !lock(&dir, &root) {
        return;
    }

    let tree = run_treedraw(dir.path(), &["root"]);
    let list = run_natls(dir.path(), &["root"]);
    dir.set_mode(&root, 0o755);

    assert!(!tree.success);
    assert!(tree.stderr.contains("Permission denied"), "{}", tree.stderr);
    assert!(!dir.path().join("tree.txt").exists());
    assert!(!list.success);
    assert!(list.stderr.contains("Permission denied"), "{}", list.stderr);
}

// ============================================================================
// Unusual Names
// ============================================================================

#[test]
fn test_unicode_and_spaces_in_names() {
    let dir = TestDir::new();
    dir.add_file("ملف 10.txt", "");
    dir.add_file("ملف 2.txt", "");
    dir.add_file("with space 1.txt", "");

    let run = run_natls(dir.path(), &[]);
    assert!(run.success);
    assert_eq!(
        read_output(dir.path(), "files_list.txt"),
        "with space 1.txt\nملف 2.txt\nملف 10.txt"
    );
}

#[test]
fn test_empty_directory_tree() {
    let dir = TestDir::new();

    let run = run_treedraw(dir.path(), &[]);
    assert!(run.success);
    assert!(tree_body(&read_output(dir.path(), "tree.txt")).is_empty());
}
