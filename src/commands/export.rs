use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::PostStore;

/// Serialize the full post collection (not the filtered view) as pretty
/// JSON. The shell prints the payload verbatim.
pub fn run(store: &PostStore) -> Result<CmdResult> {
    let json = serde_json::to_string_pretty(store.posts())?;
    Ok(CmdResult {
        export_json: Some(json),
        ..Default::default()
    })
}
