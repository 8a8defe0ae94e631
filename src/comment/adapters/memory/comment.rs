//! In-memory repository for comments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::{
    comment::{
        domain::{Comment, CommentId},
        ports::{CommentRepository, CommentRepositoryError, CommentRepositoryResult},
    },
    task::domain::TaskId,
};

/// Thread-safe in-memory comment repository.
///
/// Comments are kept per task in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommentRepository {
    state: Arc<RwLock<InMemoryCommentState>>,
}

#[derive(Debug, Default)]
struct InMemoryCommentState {
    comments: HashMap<CommentId, Comment>,
    task_index: HashMap<TaskId, Vec<CommentId>>,
}

impl InMemoryCommentRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> CommentRepositoryError {
    CommentRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn store(&self, comment: &Comment) -> CommentRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.comments.contains_key(&comment.id()) {
            return Err(CommentRepositoryError::DuplicateComment(comment.id()));
        }
        state
            .task_index
            .entry(comment.task_id())
            .or_default()
            .push(comment.id());
        state.comments.insert(comment.id(), comment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: CommentId) -> CommentRepositoryResult<Option<Comment>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.comments.get(&id).cloned())
    }

    async fn list_by_task(&self, task_id: TaskId) -> CommentRepositoryResult<Vec<Comment>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .task_index
            .get(&task_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.comments.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn delete(&self, id: CommentId) -> CommentRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let removed = state
            .comments
            .remove(&id)
            .ok_or(CommentRepositoryError::NotFound(id))?;
        if let Some(ids) = state.task_index.get_mut(&removed.task_id()) {
            ids.retain(|candidate| *candidate != id);
            if ids.is_empty() {
                state.task_index.remove(&removed.task_id());
            }
        }
        Ok(())
    }

    async fn delete_all_for_task(&self, task_id: TaskId) -> CommentRepositoryResult<usize> {
        let mut state = self.state.write().map_err(lock_error)?;
        let ids = state.task_index.remove(&task_id).unwrap_or_default();
        for id in &ids {
            state.comments.remove(id);
        }
        Ok(ids.len())
    }
}
