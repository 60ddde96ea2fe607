use scribewise_core::models::style::WritingStyle;
use scribewise_storage::error::StorageError;
use scribewise_storage::sessions::{FileSessionStore, MemorySessionStore, SessionRepository};

fn exercise(repo: &mut dyn SessionRepository) {
    assert!(repo.list().unwrap().is_empty());

    let first = repo.create(WritingStyle::Formal).unwrap();
    let second = repo.create(WritingStyle::Creative).unwrap();

    let ids: Vec<_> = repo.list().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    assert_eq!(repo.get(first.id).unwrap().writing_style, WritingStyle::Formal);

    assert!(repo.remove(first.id).unwrap());
    assert!(!repo.remove(first.id).unwrap());
    assert!(matches!(
        repo.get(first.id),
        Err(StorageError::NotFound { id }) if id == first.id
    ));
    assert_eq!(repo.list().unwrap().len(), 1);
}

#[test]
fn memory_store_behaves_as_index() {
    exercise(&mut MemorySessionStore::new());
}

#[test]
fn file_store_behaves_as_index() {
    let dir = tempfile::tempdir().unwrap();
    exercise(&mut FileSessionStore::new(dir.path().join("sessions.json")));
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("sessions.json");

    let record = FileSessionStore::new(&path).create(WritingStyle::Academic).unwrap();

    let reopened = FileSessionStore::new(&path);
    let records = reopened.list().unwrap();
    assert_eq!(records, vec![record]);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn corrupt_file_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.json");
    std::fs::write(&path, b"not json").unwrap();

    let store = FileSessionStore::new(&path);
    assert!(matches!(store.list(), Err(StorageError::Serialization(_))));
}
