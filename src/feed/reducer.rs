use crate::feed::intent::FeedIntent;
use crate::feed::model::{has_content, Post};
use crate::feed::state::{Draft, FeedState};
use crate::ui::mvi::Reducer;

pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedIntent::SelectImage { image } => FeedState {
                draft: Draft {
                    image: Some(image),
                    ..state.draft
                },
                ..state
            },
            FeedIntent::SetCaption { text } => FeedState {
                draft: Draft {
                    caption: text,
                    ..state.draft
                },
                ..state
            },
            FeedIntent::Publish {
                id,
                author,
                created_at,
            } => {
                let FeedState { mut posts, draft } = state;
                let image = match draft.image {
                    Some(image) if has_content(&draft.caption) => image,
                    image => {
                        return FeedState {
                            posts,
                            draft: Draft { image, ..draft },
                        }
                    }
                };
                posts.insert(
                    0,
                    Post {
                        id,
                        image: image.preview,
                        caption: draft.caption,
                        author,
                        likes: 0,
                        comments: Vec::new(),
                        created_at,
                    },
                );
                FeedState {
                    posts,
                    draft: Draft::default(),
                }
            }
            FeedIntent::Like { post_id } => {
                let mut state = state;
                if let Some(post) = state.posts.iter_mut().find(|post| post.id == post_id) {
                    post.likes = post.likes.saturating_add(1);
                }
                state
            }
            FeedIntent::AddComment { post_id, comment } => {
                if !has_content(&comment.text) {
                    return state;
                }
                let mut state = state;
                if let Some(post) = state.posts.iter_mut().find(|post| post.id == post_id) {
                    post.comments.push(comment);
                }
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::model::{Comment, CommentId, PostId};
    use crate::feed::preview::{ImageFile, ImageResolver, PreviewRegistry};
    use crate::feed::state::DraftImage;
    use chrono::Utc;
    use std::io::Write;
    use tempfile::TempDir;

    fn draft_image(dir: &TempDir, registry: &mut PreviewRegistry) -> DraftImage {
        let path = dir.path().join("pic.jpg");
        std::fs::File::create(&path)
            .and_then(|mut f| f.write_all(b"jpg"))
            .unwrap();
        let file = ImageFile::open(path.to_str().unwrap()).unwrap();
        let preview = registry.acquire(&file);
        DraftImage { file, preview }
    }

    fn publish(state: FeedState) -> FeedState {
        FeedReducer::reduce(
            state,
            FeedIntent::Publish {
                id: PostId::new(),
                author: "あなた".into(),
                created_at: Utc::now(),
            },
        )
    }

    fn comment(text: &str) -> Comment {
        Comment {
            id: CommentId::new(),
            author: "あなた".into(),
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn publish_without_image_is_noop() {
        let state = FeedReducer::reduce(
            FeedState::default(),
            FeedIntent::SetCaption {
                text: "hello".into(),
            },
        );
        let next = publish(state.clone());
        assert_eq!(next, state);
    }

    #[test]
    fn publish_moves_draft_to_top_and_clears_it() {
        let dir = TempDir::new().unwrap();
        let mut registry = PreviewRegistry::new();
        let image = draft_image(&dir, &mut registry);
        let preview = image.preview.clone();

        let state = FeedReducer::reduce(FeedState::default(), FeedIntent::SelectImage { image });
        let state = FeedReducer::reduce(
            state,
            FeedIntent::SetCaption {
                text: "  sunset ".into(),
            },
        );
        let state = publish(state);

        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.posts[0].caption, "  sunset ");
        assert_eq!(state.posts[0].image, preview);
        assert_eq!(state.posts[0].likes, 0);
        assert!(state.posts[0].comments.is_empty());
        assert!(state.draft.is_empty());
    }

    #[test]
    fn blank_comment_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut registry = PreviewRegistry::new();
        let image = draft_image(&dir, &mut registry);
        let state = FeedReducer::reduce(FeedState::default(), FeedIntent::SelectImage { image });
        let state = FeedReducer::reduce(state, FeedIntent::SetCaption { text: "x".into() });
        let state = publish(state);
        let post_id = state.posts[0].id;

        let state = FeedReducer::reduce(
            state,
            FeedIntent::AddComment {
                post_id,
                comment: comment(" \t "),
            },
        );
        assert!(state.posts[0].comments.is_empty());

        let state = FeedReducer::reduce(
            state,
            FeedIntent::AddComment {
                post_id,
                comment: comment("hi"),
            },
        );
        assert_eq!(state.posts[0].comments.len(), 1);
        assert_eq!(state.posts[0].comments[0].text, "hi");
    }

    #[test]
    fn like_unknown_post_is_noop() {
        let state = FeedState::default();
        let next = FeedReducer::reduce(
            state.clone(),
            FeedIntent::Like {
                post_id: PostId::new(),
            },
        );
        assert_eq!(next, state);
    }
}
