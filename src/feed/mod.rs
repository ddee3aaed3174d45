//! In-memory image feed: posts, comments, the draft, and the store that
//! owns them.

mod intent;
mod model;
mod preview;
mod reducer;
mod state;
mod store;

pub use intent::FeedIntent;
pub use model::{has_content, Comment, CommentId, Post, PostId};
pub use preview::{ImageFile, ImageFileError, ImageResolver, PreviewRef, PreviewRegistry};
pub use reducer::FeedReducer;
pub use state::{Draft, DraftImage, FeedState};
pub use store::{FeedStore, SubscriptionId};
