use crate::types::RecipeRecord;

/// Deserialize raw catalog entries, skipping malformed ones.
///
/// The catalog collaborator is allowed to hand over partially broken data;
/// a bad entry is logged and dropped so a single record can never abort a
/// whole recommendation pass.
pub fn sanitize_catalog(entries: Vec<serde_json::Value>) -> Vec<RecipeRecord> {
    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<RecipeRecord>(entry) {
            Ok(record) => match record.validate() {
                Ok(()) => Some(record),
                Err(err) => {
                    tracing::warn!("Skipping catalog record: {}", err);
                    None
                }
            },
            Err(err) => {
                tracing::warn!("Skipping undecodable catalog entry: {}", err);
                None
            }
        })
        .collect()
}

/// Drop already-typed records that would not survive [`RecipeRecord::validate`].
pub fn retain_usable(records: Vec<RecipeRecord>) -> Vec<RecipeRecord> {
    records
        .into_iter()
        .filter(|record| match record.validate() {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Skipping catalog record: {}", err);
                false
            }
        })
        .collect()
}
