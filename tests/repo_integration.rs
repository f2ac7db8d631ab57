use acro_core::Status;
use acro_core::config::StoreConfig;
use acro_core::error::AcroError;
use acro_core::repo::Repository;
use acro_core::repo::sqlite::SqliteRepository;
use acro_core::store::Store;
use tempfile::TempDir;

async fn scratch_repo(tmpdir: &TempDir) -> Result<SqliteRepository, AcroError> {
    let config = StoreConfig::for_path(tmpdir.path().join("acro.db"));
    let store = Store::connect(&config).await?;
    store.bootstrap().await?;
    Ok(SqliteRepository::new(store))
}

fn vals(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sorted(mut values: Vec<String>) -> Vec<String> {
    values.sort();
    values
}

#[tokio::test]
async fn add_and_get() -> Result<(), AcroError> {
    let tmpdir = TempDir::new().unwrap();
    let repo = scratch_repo(&tmpdir).await?;

    let outcome = repo.add("key1", &vals(&["value1", "value2"])).await?;
    assert_eq!(outcome.status, Status::Ok);

    let outcome = repo.get("key1").await?;
    assert_eq!(outcome.status, Status::Ok);
    assert_eq!(sorted(outcome.values), vals(&["value1", "value2"]));

    Ok(())
}

#[tokio::test]
async fn add_merges_value_sets() -> Result<(), AcroError> {
    let tmpdir = TempDir::new().unwrap();
    let repo = scratch_repo(&tmpdir).await?;

    repo.add("key1", &vals(&["value1", "value2"])).await?;
    let outcome = repo.add("key1", &vals(&["value2", "value3"])).await?;
    assert_eq!(outcome.status, Status::Ok);

    let outcome = repo.get("key1").await?;
    assert_eq!(
        sorted(outcome.values),
        vals(&["value1", "value2", "value3"])
    );

    Ok(())
}

#[tokio::test]
async fn add_is_idempotent() -> Result<(), AcroError> {
    let tmpdir = TempDir::new().unwrap();
    let repo = scratch_repo(&tmpdir).await?;

    for _ in 0..3 {
        let outcome = repo.add("key1", &vals(&["value1", "value2"])).await?;
        assert_eq!(outcome.status, Status::Ok);
    }

    let outcome = repo.get("key1").await?;
    assert_eq!(sorted(outcome.values), vals(&["value1", "value2"]));

    Ok(())
}

#[tokio::test]
async fn add_deduplicates_candidate_values() -> Result<(), AcroError> {
    let tmpdir = TempDir::new().unwrap();
    let repo = scratch_repo(&tmpdir).await?;

    repo.add("key1", &vals(&["value1", "value1", "value2"]))
        .await?;

    let outcome = repo.get("key1").await?;
    assert_eq!(sorted(outcome.values), vals(&["value1", "value2"]));

    Ok(())
}

#[tokio::test]
async fn add_empty_values_has_no_effect() -> Result<(), AcroError> {
    let tmpdir = TempDir::new().unwrap();
    let repo = scratch_repo(&tmpdir).await?;

    let outcome = repo.add("key1", &[]).await?;
    assert_eq!(outcome.status, Status::NoValues);

    let outcome = repo.get("key1").await?;
    assert_eq!(outcome.status, Status::NoKey);
    assert!(outcome.values.is_empty());

    Ok(())
}

#[tokio::test]
async fn get_is_case_sensitive() -> Result<(), AcroError> {
    let tmpdir = TempDir::new().unwrap();
    let repo = scratch_repo(&tmpdir).await?;

    repo.add("Key1", &vals(&["value1"])).await?;

    let outcome = repo.get("key1").await?;
    assert_eq!(outcome.status, Status::NoKey);

    let outcome = repo.get("Key1").await?;
    assert_eq!(outcome.status, Status::Ok);

    Ok(())
}

#[tokio::test]
async fn remove_subset_of_values() -> Result<(), AcroError> {
    let tmpdir = TempDir::new().unwrap();
    let repo = scratch_repo(&tmpdir).await?;

    repo.add("key1", &vals(&["value1", "value2", "value3"]))
        .await?;

    let outcome = repo.remove("key1", &vals(&["value2"])).await?;
    assert_eq!(outcome.status, Status::Ok);

    let outcome = repo.get("key1").await?;
    assert_eq!(sorted(outcome.values), vals(&["value1", "value3"]));

    Ok(())
}

#[tokio::test]
async fn remove_refuses_missing_values() -> Result<(), AcroError> {
    let tmpdir = TempDir::new().unwrap();
    let repo = scratch_repo(&tmpdir).await?;

    repo.add("key1", &vals(&["value1", "value2"])).await?;

    let outcome = repo.remove("key1", &vals(&["value3"])).await?;
    assert_eq!(outcome.status, Status::NoValues);

    // A mix of present and missing values must not remove the present ones.
    let outcome = repo.remove("key1", &vals(&["value1", "value3"])).await?;
    assert_eq!(outcome.status, Status::NoValues);

    let outcome = repo.get("key1").await?;
    assert_eq!(sorted(outcome.values), vals(&["value1", "value2"]));

    Ok(())
}

#[tokio::test]
async fn remove_last_values_deletes_key() -> Result<(), AcroError> {
    let tmpdir = TempDir::new().unwrap();
    let repo = scratch_repo(&tmpdir).await?;

    repo.add("key1", &vals(&["value1", "value2"])).await?;

    let outcome = repo.remove("key1", &vals(&["value1", "value2"])).await?;
    assert_eq!(outcome.status, Status::Ok);

    let outcome = repo.get("key1").await?;
    assert_eq!(outcome.status, Status::NoKey);

    let outcome = repo.delete("key1").await?;
    assert_eq!(outcome.status, Status::NoKey);

    Ok(())
}

#[tokio::test]
async fn remove_from_absent_key() -> Result<(), AcroError> {
    let tmpdir = TempDir::new().unwrap();
    let repo = scratch_repo(&tmpdir).await?;

    let outcome = repo.remove("nonexistent", &vals(&["value1"])).await?;
    assert_eq!(outcome.status, Status::NoKey);

    let outcome = repo.remove("nonexistent", &[]).await?;
    assert_eq!(outcome.status, Status::NoValues);

    Ok(())
}

#[tokio::test]
async fn delete_key() -> Result<(), AcroError> {
    let tmpdir = TempDir::new().unwrap();
    let repo = scratch_repo(&tmpdir).await?;

    repo.add("key1", &vals(&["value1", "value2"])).await?;

    let outcome = repo.delete("key1").await?;
    assert_eq!(outcome.status, Status::Ok);

    let outcome = repo.get("key1").await?;
    assert_eq!(outcome.status, Status::NoKey);

    Ok(())
}

#[tokio::test]
async fn delete_absent_key() -> Result<(), AcroError> {
    let tmpdir = TempDir::new().unwrap();
    let repo = scratch_repo(&tmpdir).await?;

    let outcome = repo.delete("nonexistent").await?;
    assert_eq!(outcome.status, Status::NoKey);

    Ok(())
}

#[tokio::test]
async fn list_keys_returns_bounded_sample() -> Result<(), AcroError> {
    let tmpdir = TempDir::new().unwrap();
    let repo = scratch_repo(&tmpdir).await?;

    let stored: Vec<String> = (1..=15).map(|i| format!("key{i}")).collect();
    for key in &stored {
        repo.add(key, &vals(&["value"])).await?;
    }

    let outcome = repo.list_keys().await?;
    assert_eq!(outcome.status, Status::Ok);
    assert_eq!(outcome.values.len(), 10);
    for key in &outcome.values {
        assert!(stored.contains(key));
    }

    Ok(())
}

#[tokio::test]
async fn list_keys_on_empty_store() -> Result<(), AcroError> {
    let tmpdir = TempDir::new().unwrap();
    let repo = scratch_repo(&tmpdir).await?;

    let outcome = repo.list_keys().await?;
    assert_eq!(outcome.status, Status::Ok);
    assert!(outcome.values.is_empty());

    Ok(())
}

#[tokio::test]
async fn list_keys_omits_deleted_keys() -> Result<(), AcroError> {
    let tmpdir = TempDir::new().unwrap();
    let repo = scratch_repo(&tmpdir).await?;

    repo.add("key1", &vals(&["value1"])).await?;
    repo.add("key2", &vals(&["value2"])).await?;
    repo.delete("key1").await?;

    let outcome = repo.list_keys().await?;
    assert_eq!(outcome.values, vals(&["key2"]));

    Ok(())
}
