use super::*;

#[test]
fn export_returns_file_bytes_with_timestamped_name() {
    let dir = temp_dir("export");
    let content = r#"[{"id":1,"name":"A"}]"#;
    write_table(&dir, "users", content);
    let db = Database::open(&dir).unwrap();

    let export = db.export("users").unwrap();
    assert_eq!(export.bytes, content.as_bytes());
    assert!(export.file_name.starts_with("users_"));
    assert!(export.file_name.ends_with(".json"));
    // users_YYYY-mm-dd_HH-MM-SS.json
    assert_eq!(export.file_name.len(), "users_".len() + 19 + ".json".len());
}

#[test]
fn export_missing_table_is_not_found() {
    let dir = temp_dir("export_missing");
    let db = Database::open(&dir).unwrap();
    let err = db.export("ghost").unwrap_err();
    assert!(err.is_not_found());
}
