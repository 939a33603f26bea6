mod common;

use cli::file_storage::FileStorage;
use common::{valid_token, TestDir};
use session::storage::{TOKEN_KEY, USER_DATA_KEY};
use session::{SessionStorage, SessionStore};
use shared::{Role, UserData};

#[test]
fn test_missing_file_is_empty() -> anyhow::Result<()> {
    let dir = TestDir::new();
    let storage = FileStorage::new(dir.session_file());

    assert_eq!(storage.get(TOKEN_KEY)?, None);
    // Removing from a missing file does not create it
    storage.remove(TOKEN_KEY)?;
    assert!(!dir.session_file().exists());
    Ok(())
}

#[test]
fn test_entries_persist_across_instances() -> anyhow::Result<()> {
    let dir = TestDir::new();
    let token = valid_token();
    {
        let store = SessionStore::new(FileStorage::new(dir.session_file()));
        store.set_auth(&token, &UserData::with_role(Role::Manager))?;
    }

    let store = SessionStore::new(FileStorage::new(dir.session_file()));
    assert_eq!(store.get_token(), Some(token));
    assert!(store.is_manager());
    assert!(store.is_session_active());
    Ok(())
}

#[test]
fn test_file_layout() -> anyhow::Result<()> {
    let dir = TestDir::new();
    let storage = FileStorage::new(dir.session_file());
    storage.set(TOKEN_KEY, "abc123")?;
    storage.set(USER_DATA_KEY, r#"{"role":"user"}"#)?;

    let content: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.session_file())?)?;
    assert_eq!(content["token"], "abc123");
    assert_eq!(content["userData"], r#"{"role":"user"}"#);

    // No temporary files left behind
    let files = std::fs::read_dir(&dir.path)?.count();
    assert_eq!(files, 1);
    Ok(())
}

#[test]
fn test_remove_entry() -> anyhow::Result<()> {
    let dir = TestDir::new();
    let store = SessionStore::new(FileStorage::new(dir.session_file()));
    store.set_auth(&valid_token(), &UserData::with_role(Role::User))?;

    store.clear_auth_data();
    assert!(!store.is_authenticated());
    assert_eq!(store.get_user_data(), None);
    store.clear_auth_data();
    Ok(())
}

#[test]
fn test_corrupt_file_reads_as_no_session() -> anyhow::Result<()> {
    let dir = TestDir::new();
    std::fs::create_dir_all(&dir.path)?;
    std::fs::write(dir.session_file(), "{ this is not json")?;

    let store = SessionStore::new(FileStorage::new(dir.session_file()));
    assert!(store.storage().get(TOKEN_KEY).is_err());
    assert!(!store.is_authenticated());
    assert_eq!(store.get_user_role(), None);

    // Writing starts over with a fresh file
    store.store_token("abc123")?;
    assert_eq!(store.get_token().as_deref(), Some("abc123"));
    Ok(())
}

#[test]
fn test_empty_file_is_empty() -> anyhow::Result<()> {
    let dir = TestDir::new();
    std::fs::create_dir_all(&dir.path)?;
    std::fs::write(dir.session_file(), "")?;

    let storage = FileStorage::new(dir.session_file());
    assert_eq!(storage.get(TOKEN_KEY)?, None);
    Ok(())
}
