//! The draft guard: decides whether closing the composer loses work.

use crate::composer::DraftSnapshot;

/// Returns `true` iff every field of the draft is at its untouched default.
///
/// This is a strict nine-way conjunction; any single non-default field makes
/// the draft non-empty. It gates data loss, so the field list must stay in
/// lockstep with [`DraftSnapshot`].
pub fn is_draft_empty(snapshot: &DraftSnapshot) -> bool {
    snapshot.content.is_empty()
        && snapshot.quoted_publication.is_none()
        && snapshot.attachment_count == 0
        && snapshot.audio_title.is_empty()
        && snapshot.video_thumbnail_url.is_empty()
        && snapshot.video_duration_secs.is_empty()
        && !snapshot.poll_editor_open
        && !snapshot.is_uploading
        && snapshot.first_poll_option.is_empty()
}
