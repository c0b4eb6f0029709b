use rollbook::engine::{Persistence, RecordStore};
use tempfile::tempdir;

#[test]
fn test_full_session_scenario() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("students.json");

    let mut store = RecordStore::open(&file_path).unwrap();
    assert!(store.is_empty());

    let bob = store.add("Bob", "22", "Physics").unwrap();
    assert_eq!(bob.id, 1);
    assert_eq!(bob.name, "Bob");
    assert_eq!(bob.age, "22");
    assert_eq!(bob.programme, "Physics");
    assert_eq!(store.len(), 1);

    let carol = store.add("Carol", "19", "Math").unwrap();
    assert_eq!(carol.id, 2);

    let found = store.find("bob").unwrap();
    assert_eq!(found.id, 1);

    assert!(store.delete(1).unwrap());
    assert_eq!(store.records(), &[carol.clone()]);

    // The file mirrors the surviving record.
    let on_disk = Persistence::new(&file_path).load().unwrap();
    assert_eq!(on_disk, vec![carol]);
}

#[test]
fn test_reopen_restores_records_and_id_counter() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("students.json");

    {
        let mut store = RecordStore::open(&file_path).unwrap();
        store.add("Alice", "20", "CS").unwrap();
        store.add("Bob", "22", "Physics").unwrap();
        store.delete(1).unwrap();
    }

    let mut store = RecordStore::open(&file_path).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].name, "Bob");

    // Ids continue past the persisted maximum, never reusing 1.
    let carol = store.add("Carol", "19", "Math").unwrap();
    assert_eq!(carol.id, 3);
}

#[test]
fn test_open_fails_loudly_on_corrupt_file() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("students.json");
    std::fs::write(&file_path, "not a record file").unwrap();

    assert!(RecordStore::open(&file_path).is_err());
}

#[test]
fn test_delete_by_name_keyword_via_find() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("students.json");

    let mut store = RecordStore::open(&file_path).unwrap();
    store.add("Alice", "20", "CS").unwrap();
    store.add("Bob", "22", "Physics").unwrap();

    // The CLI resolves delete keywords through find; mirror that flow.
    let id = store.find("ALICE").map(|r| r.id).unwrap();
    assert!(store.delete(id).unwrap());

    let on_disk = Persistence::new(&file_path).load().unwrap();
    assert_eq!(on_disk.len(), 1);
    assert_eq!(on_disk[0].name, "Bob");
}
