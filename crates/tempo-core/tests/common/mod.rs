use tempfile::TempDir;
use tempo_core::{DisambiguationPolicy, Tempo, TempoBuilder};

/// Helper function to create a test coordinator with a scratch database.
pub async fn create_test_tempo(policy: DisambiguationPolicy) -> (TempDir, Tempo) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tempo = TempoBuilder::new()
        .with_database_path(Some(&db_path))
        .with_policy(policy)
        .build()
        .await
        .expect("Failed to create tempo");
    (temp_dir, tempo)
}
