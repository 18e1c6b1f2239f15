use crate::commands::{CmdMessage, CmdResult};
use crate::draft::PostDraft;
use crate::error::Result;
use crate::index::DisplayPost;
use crate::store::PostStore;

/// Submit the add-post draft into the store.
///
/// A draft with a blank title or body is discarded without touching the
/// store or the draft buffers, and without surfacing an error; the result
/// carries no affected posts and no messages in that case.
pub fn run(store: &mut PostStore, draft: &mut PostDraft) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(post) = draft.submit() else {
        return Ok(result);
    };

    let display = DisplayPost {
        post: post.clone(),
        // A fresh post is always the newest, so it gets index 1.
        index: 1,
    };
    result.add_message(CmdMessage::success(format!("Post added: {}", post.title)));
    store.add_post(post);
    result.affected_posts.push(display);
    Ok(result)
}
