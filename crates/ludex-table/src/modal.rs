//! Active-modal state
//!
//! A table shows at most one overlay at a time. The union makes that
//! structural: opening any action simply assigns a new variant, so a
//! second click replaces whatever was open (last-write-wins), matching the
//! platform's single-flight modal semantics.

/// Which overlay a table currently shows, holding the affected row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActiveModal<T> {
    #[default]
    None,
    Viewing(T),
    Editing(T),
    ConfirmingDelete(T),
    Gallery(T),
    Scheduling(T),
    PublishToggle(T),
    CoverPreview(T),
    Creating,
}

impl<T> ActiveModal<T> {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The row the modal refers to, if any.
    pub fn item(&self) -> Option<&T> {
        match self {
            Self::None | Self::Creating => None,
            Self::Viewing(item)
            | Self::Editing(item)
            | Self::ConfirmingDelete(item)
            | Self::Gallery(item)
            | Self::Scheduling(item)
            | Self::PublishToggle(item)
            | Self::CoverPreview(item) => Some(item),
        }
    }

    /// Clear the modal, returning what was open.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_a_second_modal_replaces_the_first() {
        let mut modal = ActiveModal::Editing("item-a");
        modal = ActiveModal::Viewing("item-b");

        // Last write wins: only item-b's modal remains.
        assert_eq!(modal, ActiveModal::Viewing("item-b"));
        assert_eq!(modal.item(), Some(&"item-b"));
    }

    #[test]
    fn item_is_absent_for_none_and_creating() {
        assert_eq!(ActiveModal::<&str>::None.item(), None);
        assert_eq!(ActiveModal::<&str>::Creating.item(), None);
    }

    #[test]
    fn take_clears_and_returns_the_previous_state() {
        let mut modal = ActiveModal::ConfirmingDelete(7);
        let taken = modal.take();
        assert_eq!(taken, ActiveModal::ConfirmingDelete(7));
        assert!(modal.is_none());
    }
}
