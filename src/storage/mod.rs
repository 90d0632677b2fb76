use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::AbookResult;
use crate::model::AddressBook;

/// Default store file, relative to the working directory.
pub const DEFAULT_PATH: &str = "addressbook.json";

/// Loads the snapshot at `path`. An absent file yields an empty book;
/// any other failure (unreadable file, malformed JSON, an invalid phone
/// in the data) is an error the caller treats as fatal.
pub fn load(path: &Path) -> AbookResult<AddressBook> {
    let contents = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AddressBook::new()),
        Err(e) => return Err(e.into()),
    };
    let book = serde_json::from_str(&contents)?;
    Ok(book)
}

/// Writes the whole book as one snapshot: serialize to a sibling temp
/// file, then rename over the store file so a crash mid-write leaves
/// the previous snapshot intact.
pub fn save(path: &Path, book: &AddressBook) -> AbookResult<()> {
    let json = serde_json::to_string_pretty(book)?;

    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
