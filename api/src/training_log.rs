//! Dataset collection: every successfully parsed instruction is appended to a
//! JSONL file so transcripts and their structured output can later be reviewed
//! or used to tune the rules. Failures to log never fail the request.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use whistle_core::ParseResult;

#[derive(Serialize)]
struct TrainingRecord<'a> {
    timestamp: DateTime<Utc>,
    transcription: &'a str,
    parsed: &'a ParseResult,
}

pub async fn append(path: &Path, result: &ParseResult) {
    if !result.is_success() {
        return;
    }

    let record = TrainingRecord {
        timestamp: Utc::now(),
        transcription: result.original_text(),
        parsed: result,
    };

    let line = match serde_json::to_string(&record) {
        Ok(line) => line,
        Err(err) => {
            tracing::warn!("Failed to serialize training record: {}", err);
            return;
        }
    };

    let write = async {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await
    };

    if let Err(err) = write.await {
        tracing::warn!(path = %path.display(), "Failed to append training record: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whistle_core::interpret;

    #[tokio::test]
    async fn appends_one_line_per_success() {
        let dir = std::env::temp_dir().join(format!("whistle-log-{}", uuid::Uuid::now_v7()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("training_data.jsonl");

        let reference = chrono::NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let result = interpret("easy 10 km run tomorrow", reference);
        append(&path, &result).await;
        append(&path, &result).await;

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(record["transcription"], "easy 10 km run tomorrow");
        assert_eq!(record["parsed"]["confidence"], "High");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn skips_failed_parses() {
        let dir = std::env::temp_dir().join(format!("whistle-log-{}", uuid::Uuid::now_v7()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("training_data.jsonl");

        let reference = chrono::NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let result = interpret("hm", reference);
        append(&path, &result).await;

        assert!(!tokio::fs::try_exists(&path).await.unwrap());
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
