use std::path::Path;

use anyhow::Context;

use crate::models::DogRecord;

pub fn sample_dogs() -> Vec<DogRecord> {
    vec![
        DogRecord {
            weight_kg: 22.0,
            current_food: 250.0,
            owners: vec!["Alice".to_string(), "Bob".to_string()],
        },
        DogRecord {
            weight_kg: 8.0,
            current_food: 200.0,
            owners: vec!["Matilda".to_string()],
        },
        DogRecord {
            weight_kg: 13.0,
            current_food: 275.0,
            owners: vec!["Sarah".to_string(), "John".to_string()],
        },
        DogRecord {
            weight_kg: 32.0,
            current_food: 340.0,
            owners: vec!["Michael".to_string()],
        },
    ]
}

pub fn load_records(csv: Option<&Path>, json: Option<&Path>) -> anyhow::Result<Vec<DogRecord>> {
    if let Some(path) = csv {
        load_csv(path)
    } else if let Some(path) = json {
        load_json(path)
    } else {
        Ok(sample_dogs())
    }
}

pub fn load_csv(path: &Path) -> anyhow::Result<Vec<DogRecord>> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        weight_kg: f64,
        current_food: f64,
        owners: String,
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut records = Vec::new();

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        let owners: Vec<String> = row
            .owners
            .split(';')
            .map(|owner| owner.trim().to_string())
            .filter(|owner| !owner.is_empty())
            .collect();

        if owners.is_empty() {
            anyhow::bail!("record with weight {} has no owners", row.weight_kg);
        }

        records.push(DogRecord {
            weight_kg: row.weight_kg,
            current_food: row.current_food,
            owners,
        });
    }

    tracing::debug!(count = records.len(), path = %path.display(), "loaded dog records");
    Ok(records)
}

pub fn load_json(path: &Path) -> anyhow::Result<Vec<DogRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let records: Vec<DogRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    for record in &records {
        if record.owners.is_empty() {
            anyhow::bail!("record with weight {} has no owners", record.weight_kg);
        }
    }

    tracing::debug!(count = records.len(), path = %path.display(), "loaded dog records");
    Ok(records)
}
