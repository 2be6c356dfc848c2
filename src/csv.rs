use std::error::Error;

use serde::de::DeserializeOwned;

/// Deserializes CSV bytes into records, preserving the order of the rows
pub(crate) fn deserialize<'a, D: DeserializeOwned + 'a>(
    data: &'a [u8],
) -> impl Iterator<Item = D> + 'a {
    let rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .from_reader(std::io::Cursor::new(data));
    rdr.into_deserialize().map(|r| {
        let record: D = r.unwrap();
        record
    })
}

/// Loads a CSV from disk, preserving the order of the rows
/// # Error
/// Errors if the file cannot be read
pub(crate) fn load<D: DeserializeOwned>(path: &str) -> Result<Vec<D>, Box<dyn Error>> {
    let data = std::fs::read(path)?;

    Ok(deserialize(&data).collect())
}
