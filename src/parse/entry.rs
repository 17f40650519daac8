//! Feed entry to review record conversion.

use serde_json::Value;

use crate::error_handling::EntryError;
use crate::models::ReviewRecord;

/// Key path from an entry object down to one label, plus its dotted name for errors.
struct LabelPath {
    name: &'static str,
    keys: &'static [&'static str],
}

const ID: LabelPath = LabelPath {
    name: "id.label",
    keys: &["id", "label"],
};
const AUTHOR: LabelPath = LabelPath {
    name: "author.name.label",
    keys: &["author", "name", "label"],
};
const CONTENT: LabelPath = LabelPath {
    name: "content.label",
    keys: &["content", "label"],
};
const RATING: LabelPath = LabelPath {
    name: "im:rating.label",
    keys: &["im:rating", "label"],
};
const VERSION: LabelPath = LabelPath {
    name: "im:version.label",
    keys: &["im:version", "label"],
};

/// Converts one raw feed entry into a review record.
///
/// Reads, in order: `id.label`, `author.name.label`, `content.label`,
/// `im:rating.label` and `im:version.label`. The id and rating labels are
/// parsed as unsigned integers (surrounding whitespace is ignored, a minus
/// sign is rejected); the other three are taken verbatim.
///
/// # Errors
///
/// - `EntryError::MissingField` if any key on a path is absent
/// - `EntryError::NotAString` if a label is present but not a string
/// - `EntryError::ParseError` if the id or rating is not a non-negative integer
pub fn parse_entry(entry: &Value) -> Result<ReviewRecord, EntryError> {
    let id = parse_integer(entry, &ID)?;
    let author = label(entry, &AUTHOR)?.to_string();
    let content = label(entry, &CONTENT)?.to_string();
    let rating = parse_integer(entry, &RATING)?;
    let version = label(entry, &VERSION)?.to_string();

    Ok(ReviewRecord {
        id,
        author,
        content,
        rating,
        version,
    })
}

fn label<'a>(entry: &'a Value, path: &LabelPath) -> Result<&'a str, EntryError> {
    let node = path
        .keys
        .iter()
        .try_fold(entry, |node, key| node.get(key))
        .ok_or(EntryError::MissingField(path.name))?;
    node.as_str().ok_or(EntryError::NotAString(path.name))
}

fn parse_integer<T>(entry: &Value, path: &LabelPath) -> Result<T, EntryError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    let raw = label(entry, path)?;
    raw.trim()
        .parse::<T>()
        .map_err(|source| EntryError::ParseError {
            field: path.name,
            value: raw.to_string(),
            source,
        })
}
