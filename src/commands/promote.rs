use crate::archive::Archive;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayPost;
use crate::store::PostStore;

/// Copy archive entries into the main list.
///
/// Each promoted entry is added as a fresh post (new id); the archive
/// keeps the original, so promoting the same index again produces another
/// duplicate. An out-of-range index fails the whole batch before any
/// entry is added.
pub fn run(store: &mut PostStore, archive: &Archive, indexes: &[usize]) -> Result<CmdResult> {
    let mut promoted = Vec::with_capacity(indexes.len());
    for &index in indexes {
        promoted.push(archive.entry(index)?.duplicate());
    }

    let mut result = CmdResult::default();
    for post in promoted {
        result.add_message(CmdMessage::success(format!(
            "Added as new post: {}",
            post.title
        )));
        result.affected_posts.push(DisplayPost {
            post: post.clone(),
            index: 1,
        });
        store.add_post(post);
    }
    Ok(result)
}
