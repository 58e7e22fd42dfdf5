use super::*;

fn store() -> (tempfile::TempDir, FsPhotoStore) {
    let tmp = tempfile::tempdir().unwrap();
    let store = FsPhotoStore::new(tmp.path().join("ClutterBugPhotos")).unwrap();
    (tmp, store)
}

#[test]
fn new_creates_directory() {
    let (_tmp, store) = store();
    assert!(store.dir().is_dir());
}

#[test]
fn save_then_load() {
    let (_tmp, store) = store();
    store.save(b"\x89PNG fake", "abc").unwrap();
    assert!(store.dir().join("abc.png").is_file());
    assert_eq!(store.load("abc").unwrap().as_deref(), Some(&b"\x89PNG fake"[..]));
}

#[test]
fn save_overwrites() {
    let (_tmp, store) = store();
    store.save(b"one", "p").unwrap();
    store.save(b"two", "p").unwrap();
    assert_eq!(store.load("p").unwrap(), Some(b"two".to_vec()));
}

#[test]
fn load_missing_is_none() {
    let (_tmp, store) = store();
    assert!(store.load("nope").unwrap().is_none());
}

#[test]
fn delete_removes_file() {
    let (_tmp, store) = store();
    store.save(b"x", "gone").unwrap();
    store.delete("gone").unwrap();
    assert!(store.load("gone").unwrap().is_none());
}

#[test]
fn delete_missing_is_ok() {
    let (_tmp, store) = store();
    assert!(store.delete("never-saved").is_ok());
}

#[test]
fn rejects_escaping_ids() {
    let (_tmp, store) = store();
    for id in ["", "../x", "a/b", r"a\b", ".."] {
        assert!(matches!(store.save(b"x", id), Err(PhotoError::InvalidId(_))), "{id:?}");
        assert!(matches!(store.load(id), Err(PhotoError::InvalidId(_))), "{id:?}");
        assert!(matches!(store.delete(id), Err(PhotoError::InvalidId(_))), "{id:?}");
    }
}

#[test]
fn new_photo_ids_are_usable_and_unique() {
    let (_tmp, store) = store();
    let a = new_photo_id();
    let b = new_photo_id();
    assert_ne!(a, b);
    store.save(b"x", &a).unwrap();
    assert!(store.load(&a).unwrap().is_some());
}
