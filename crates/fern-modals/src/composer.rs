//! Composer sub-stores and the draft snapshot derived from them.
//!
//! The in-progress post is spread across several independent stores
//! (text, attachments, audio, video, poll). The draft guard never reads
//! them live; it works from a [`DraftSnapshot`] captured at close time.

use serde::{Deserialize, Serialize};

use fern_common::types::PublicationId;

/// One uploaded (or uploading) media attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub uri: String,
    pub mime_type: String,
}

/// Post text and the publication being quoted, if any.
#[derive(Debug, Clone, Default)]
pub struct PublicationStore {
    pub content: String,
    pub quoted_publication: Option<PublicationId>,
}

#[derive(Debug, Clone, Default)]
pub struct AttachmentStore {
    pub attachments: Vec<Attachment>,
    pub is_uploading: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AudioStore {
    pub title: String,
}

/// Video metadata. Duration is a string because it mirrors the raw form
/// field; an untouched field is the empty string, not zero.
#[derive(Debug, Clone, Default)]
pub struct VideoStore {
    pub thumbnail_url: String,
    pub duration_secs: String,
}

#[derive(Debug, Clone)]
pub struct PollStore {
    pub show_editor: bool,
    pub options: Vec<String>,
    pub length_days: u8,
}

impl Default for PollStore {
    fn default() -> Self {
        Self {
            show_editor: false,
            options: vec![String::new(), String::new()],
            length_days: 1,
        }
    }
}

/// All composer sub-stores, owned together so a discard can reset them
/// as one unit.
#[derive(Debug, Clone, Default)]
pub struct ComposerStores {
    pub publication: PublicationStore,
    pub attachments: AttachmentStore,
    pub audio: AudioStore,
    pub video: VideoStore,
    pub poll: PollStore,
}

impl ComposerStores {
    /// Drop the draft: every sub-store back to its initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Point-in-time view of the draft, one field per store input the
/// emptiness check depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSnapshot {
    pub content: String,
    pub quoted_publication: Option<PublicationId>,
    pub attachment_count: usize,
    pub audio_title: String,
    pub video_thumbnail_url: String,
    pub video_duration_secs: String,
    pub poll_editor_open: bool,
    pub is_uploading: bool,
    pub first_poll_option: String,
}

impl DraftSnapshot {
    pub fn capture(stores: &ComposerStores) -> Self {
        Self {
            content: stores.publication.content.clone(),
            quoted_publication: stores.publication.quoted_publication.clone(),
            attachment_count: stores.attachments.attachments.len(),
            audio_title: stores.audio.title.clone(),
            video_thumbnail_url: stores.video.thumbnail_url.clone(),
            video_duration_secs: stores.video.duration_secs.clone(),
            poll_editor_open: stores.poll.show_editor,
            is_uploading: stores.attachments.is_uploading,
            first_poll_option: stores.poll.options.first().cloned().unwrap_or_default(),
        }
    }

    /// An untouched draft, as captured from freshly constructed stores.
    pub fn empty() -> Self {
        Self::capture(&ComposerStores::default())
    }
}
