use super::*;

#[test]
fn create_writes_empty_array() {
    let dir = temp_dir("create");
    let mut db = Database::open(&dir).unwrap();
    db.create("users").unwrap();
    assert_eq!(std::fs::read_to_string(dir.join("users.json")).unwrap(), "[]");
    assert!(db.contains("users"));
    assert_eq!(db.row_size("users"), 0);
}

#[test]
fn create_is_idempotent_and_keeps_rows() {
    let dir = temp_dir("create_twice");
    let mut db = Database::open(&dir).unwrap();
    db.create("users").unwrap();
    db.insert("users", record(json!({"id": 1}))).unwrap();
    db.create("users").unwrap();
    assert_eq!(db.row_size("users"), 1);
    assert_eq!(read_table(&dir, "users"), json!([{"id": 1}]));
}

#[test]
fn create_over_foreign_file_fails() {
    let dir = temp_dir("create_foreign");
    std::fs::create_dir_all(&dir).unwrap();
    let mut db = Database::open(&dir).unwrap();
    std::fs::write(dir.join("users.json"), "not json at all").unwrap();

    let err = db.create("users").unwrap_err();
    assert!(matches!(err, Error::TableExists { .. }));
    assert_eq!(
        std::fs::read_to_string(dir.join("users.json")).unwrap(),
        "not json at all"
    );
}

#[test]
fn create_rejects_bad_names() {
    let dir = temp_dir("create_bad");
    let mut db = Database::open(&dir).unwrap();
    for name in ["", ".", "..", "a/b", "a\\b"] {
        let err = db.create(name).unwrap_err();
        assert!(matches!(err, Error::InvalidTableName { .. }), "{name}");
    }
}

#[test]
fn drop_removes_file_and_state() {
    let dir = temp_dir("drop");
    let mut db = Database::open(&dir).unwrap();
    db.create("users").unwrap();
    db.drop("users").unwrap();
    assert!(!db.contains("users"));
    assert!(!dir.join("users.json").exists());
    assert_eq!(db.size("users"), 0);
}

#[test]
fn drop_unknown_table_fails() {
    let dir = temp_dir("drop_unknown");
    let mut db = Database::open(&dir).unwrap();
    let err = db.drop("ghost").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn truncate_empties_table_and_file() {
    let dir = temp_dir("truncate");
    write_table(&dir, "users", r#"[{"id":1},{"id":2}]"#);
    let mut db = Database::open(&dir).unwrap();
    db.truncate("users").unwrap();
    assert_eq!(db.row_size("users"), 0);
    assert_eq!(read_table(&dir, "users"), json!([]));
    assert_eq!(db.size("users"), 2);
}

#[test]
fn truncate_unknown_table_fails() {
    let dir = temp_dir("truncate_unknown");
    let mut db = Database::open(&dir).unwrap();
    assert!(db.truncate("ghost").unwrap_err().is_not_found());
}

#[test]
fn rename_moves_file_and_state() {
    let dir = temp_dir("rename");
    write_table(&dir, "users", r#"[{"id":1}]"#);
    let mut db = Database::open(&dir).unwrap();
    let size = db.size("users");

    db.rename("users", "people").unwrap();
    assert!(!db.contains("users"));
    assert!(!dir.join("users.json").exists());
    assert_eq!(read_table(&dir, "people"), json!([{"id": 1}]));
    assert_eq!(db.size("people"), size);
    assert_eq!(db.find("people", &Predicate::new().eq("id", 1)), vec![0]);
}

#[test]
fn rename_onto_existing_table_fails() {
    let dir = temp_dir("rename_taken");
    write_table(&dir, "a", r#"[{"id":1}]"#);
    write_table(&dir, "b", r#"[{"id":2}]"#);
    let mut db = Database::open(&dir).unwrap();

    let err = db.rename("a", "b").unwrap_err();
    assert!(matches!(err, Error::TableExists { .. }));
    assert_eq!(read_table(&dir, "b"), json!([{"id": 2}]));
    assert!(db.contains("a"));
}

#[test]
fn rename_unknown_table_fails() {
    let dir = temp_dir("rename_unknown");
    let mut db = Database::open(&dir).unwrap();
    assert!(db.rename("ghost", "spirit").unwrap_err().is_not_found());
}

#[test]
fn copy_duplicates_without_touching_source() {
    let dir = temp_dir("copy");
    write_table(&dir, "users", r#"[{"id":1}]"#);
    let mut db = Database::open(&dir).unwrap();

    db.copy("users", "backup").unwrap();
    db.insert("backup", record(json!({"id": 2}))).unwrap();

    assert_eq!(db.row_size("users"), 1);
    assert_eq!(db.row_size("backup"), 2);
    assert_eq!(read_table(&dir, "users"), json!([{"id": 1}]));
    assert_eq!(read_table(&dir, "backup"), json!([{"id": 1}, {"id": 2}]));
}

#[test]
fn copy_unknown_table_fails() {
    let dir = temp_dir("copy_unknown");
    let mut db = Database::open(&dir).unwrap();
    let err = db.copy("ghost", "x").unwrap_err();
    assert!(matches!(err, Error::TableNotFound { .. }));
    assert!(!db.contains("x"));
    assert!(!dir.join("x.json").exists());
}

#[test]
fn copy_onto_existing_table_fails() {
    let dir = temp_dir("copy_taken");
    write_table(&dir, "a", r#"[{"id":1}]"#);
    write_table(&dir, "b", r#"[{"id":2}]"#);
    let mut db = Database::open(&dir).unwrap();

    let err = db.copy("a", "b").unwrap_err();
    assert!(matches!(err, Error::TableExists { .. }));
    assert_eq!(read_table(&dir, "b"), json!([{"id": 2}]));
    assert_eq!(db.records("b").unwrap(), &[record(json!({"id": 2}))]);
}

#[test]
fn rename_failure_keeps_memory() {
    let dir = temp_dir("rename_fail");
    write_table(&dir, "a", r#"[{"id":1}]"#);
    // A non-empty directory named like the target file blocks the rename.
    std::fs::create_dir_all(dir.join("b.json").join("sub")).unwrap();
    let mut db = Database::open(&dir).unwrap();

    let err = db.rename("a", "b").unwrap_err();
    assert!(err.is_io());
    assert!(db.contains("a"));
    assert!(!db.contains("b"));
    assert_eq!(read_table(&dir, "a"), json!([{"id": 1}]));
}

#[test]
fn copy_failure_keeps_memory() {
    let dir = temp_dir("copy_fail");
    write_table(&dir, "a", r#"[{"id":1}]"#);
    std::fs::create_dir_all(dir.join("b.json").join("sub")).unwrap();
    let mut db = Database::open(&dir).unwrap();

    let err = db.copy("a", "b").unwrap_err();
    assert!(err.is_io());
    assert!(db.contains("a"));
    assert!(!db.contains("b"));
}

#[test]
fn copy_survives_reopen() {
    let dir = temp_dir("copy_reopen");
    write_table(&dir, "users", r#"[{"id":1}]"#);
    {
        let mut db = Database::open(&dir).unwrap();
        db.copy("users", "backup").unwrap();
    }
    let db = Database::open(&dir).unwrap();
    assert_eq!(db.tables(), vec!["backup".to_string(), "users".to_string()]);
}
