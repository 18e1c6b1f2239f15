use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::PostStore;

pub fn run(store: &mut PostStore) -> Result<CmdResult> {
    let count = store.len();
    store.clear_posts();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Cleared {} posts.", count)));
    Ok(result)
}
