//! Article image reconciliation
//!
//! The article form lets the editor queue new images, mark existing ones
//! for removal, and pick a cover that may be one of the not-yet-uploaded
//! files. On save the plan executes in a fixed order: pending uploads
//! first (sequentially), then deletions, then the cover patch; the cover
//! goes last because its id may only exist after the uploads ran.

use std::collections::BTreeSet;
use std::path::PathBuf;

use ludex_core::ArticleImage;

/// Which image should end up as the article's cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverChoice {
    /// Leave the cover as the server has it.
    #[default]
    Keep,
    /// An already-uploaded image.
    Existing(i64),
    /// A queued file, by index into the pending list.
    Pending(usize),
}

/// The executable outcome of the editing session.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcilePlan {
    pub uploads: Vec<PathBuf>,
    pub deletions: Vec<i64>,
    pub cover: CoverChoice,
}

/// Tracks the not-yet-committed image edits for one article.
#[derive(Debug, Clone)]
pub struct ImageReconciler {
    existing: Vec<ArticleImage>,
    removed: BTreeSet<i64>,
    pending: Vec<PathBuf>,
    cover: CoverChoice,
}

impl ImageReconciler {
    pub fn new(existing: Vec<ArticleImage>) -> Self {
        Self {
            existing,
            removed: BTreeSet::new(),
            pending: Vec::new(),
            cover: CoverChoice::Keep,
        }
    }

    pub fn existing(&self) -> &[ArticleImage] {
        &self.existing
    }

    pub fn pending(&self) -> &[PathBuf] {
        &self.pending
    }

    pub fn cover(&self) -> CoverChoice {
        self.cover
    }

    pub fn is_removed(&self, image_id: i64) -> bool {
        self.removed.contains(&image_id)
    }

    /// Anything to do on save?
    pub fn is_dirty(&self) -> bool {
        !self.pending.is_empty()
            || !self.removed.is_empty()
            || self.cover != CoverChoice::Keep
    }

    pub fn queue(&mut self, path: PathBuf) {
        self.pending.push(path);
    }

    pub fn unqueue(&mut self, index: usize) {
        if index >= self.pending.len() {
            return;
        }
        self.pending.remove(index);
        // Adjust a pending cover choice that pointed at or past the
        // removed slot.
        match self.cover {
            CoverChoice::Pending(ix) if ix == index => self.cover = CoverChoice::Keep,
            CoverChoice::Pending(ix) if ix > index => {
                self.cover = CoverChoice::Pending(ix - 1);
            }
            _ => {}
        }
    }

    pub fn toggle_removed(&mut self, image_id: i64) {
        if !self.removed.remove(&image_id) {
            self.removed.insert(image_id);
            // Removing the chosen cover clears the choice.
            if self.cover == CoverChoice::Existing(image_id) {
                self.cover = CoverChoice::Keep;
            }
        }
    }

    pub fn choose_existing_cover(&mut self, image_id: i64) {
        if !self.removed.contains(&image_id) {
            self.cover = CoverChoice::Existing(image_id);
        }
    }

    pub fn choose_pending_cover(&mut self, index: usize) {
        if index < self.pending.len() {
            self.cover = CoverChoice::Pending(index);
        }
    }

    /// Freeze the session into an executable plan.
    pub fn plan(&self) -> ReconcilePlan {
        ReconcilePlan {
            uploads: self.pending.clone(),
            deletions: self.removed.iter().copied().collect(),
            cover: self.cover,
        }
    }

    /// Resolve the cover choice to a concrete image id after the uploads
    /// ran. `uploaded_ids` is positional per pending file, `None` where
    /// that file's upload failed. A failed cover upload keeps the cover
    /// unchanged rather than pointing it at nothing.
    pub fn resolve_cover(choice: CoverChoice, uploaded_ids: &[Option<i64>]) -> Option<i64> {
        match choice {
            CoverChoice::Keep => None,
            CoverChoice::Existing(id) => Some(id),
            CoverChoice::Pending(index) => uploaded_ids.get(index).copied().flatten(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: i64) -> ArticleImage {
        ArticleImage {
            id,
            article_id: 1,
            filename: format!("img-{id}.png"),
        }
    }

    fn reconciler() -> ImageReconciler {
        ImageReconciler::new(vec![image(10), image(11), image(12)])
    }

    #[test]
    fn fresh_session_is_clean() {
        let r = reconciler();
        assert!(!r.is_dirty());
        assert_eq!(r.plan().uploads.len(), 0);
        assert_eq!(r.plan().deletions.len(), 0);
        assert_eq!(r.plan().cover, CoverChoice::Keep);
    }

    #[test]
    fn queueing_and_removal_mark_dirty() {
        let mut r = reconciler();
        r.queue(PathBuf::from("a.png"));
        assert!(r.is_dirty());

        let mut r = reconciler();
        r.toggle_removed(11);
        assert!(r.is_dirty());
        assert_eq!(r.plan().deletions, vec![11]);

        r.toggle_removed(11);
        assert!(!r.is_dirty());
    }

    #[test]
    fn removing_the_chosen_cover_clears_the_choice() {
        let mut r = reconciler();
        r.choose_existing_cover(11);
        assert_eq!(r.cover(), CoverChoice::Existing(11));

        r.toggle_removed(11);
        assert_eq!(r.cover(), CoverChoice::Keep);
    }

    #[test]
    fn a_removed_image_cannot_become_cover() {
        let mut r = reconciler();
        r.toggle_removed(12);
        r.choose_existing_cover(12);
        assert_eq!(r.cover(), CoverChoice::Keep);
    }

    #[test]
    fn unqueue_shifts_pending_cover_choices() {
        let mut r = reconciler();
        r.queue(PathBuf::from("a.png"));
        r.queue(PathBuf::from("b.png"));
        r.queue(PathBuf::from("c.png"));
        r.choose_pending_cover(2);

        r.unqueue(0);
        assert_eq!(r.cover(), CoverChoice::Pending(1));

        // Unqueueing the chosen file itself falls back to Keep.
        r.unqueue(1);
        assert_eq!(r.cover(), CoverChoice::Keep);
    }

    #[test]
    fn pending_cover_resolves_to_uploaded_id() {
        let uploaded = vec![Some(101), Some(102)];
        assert_eq!(
            ImageReconciler::resolve_cover(CoverChoice::Pending(1), &uploaded),
            Some(102)
        );
    }

    #[test]
    fn failed_cover_upload_keeps_the_cover() {
        // File 0 uploaded, file 1 failed; a cover pointing at file 1
        // resolves to nothing instead of a bogus id.
        let uploaded = vec![Some(101), None];
        assert_eq!(
            ImageReconciler::resolve_cover(CoverChoice::Pending(1), &uploaded),
            None
        );
        assert_eq!(
            ImageReconciler::resolve_cover(CoverChoice::Keep, &uploaded),
            None
        );
        assert_eq!(
            ImageReconciler::resolve_cover(CoverChoice::Existing(55), &uploaded),
            Some(55)
        );
    }
}
