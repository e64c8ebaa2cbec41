/// The modal form shared by both pages.
///
/// A draft exists only while the dialog is open, and an edit target only in
/// `OpenForEdit`, so a closed dialog can never still point at an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog<D> {
    Closed,
    OpenForCreate { draft: D },
    OpenForEdit { id: u64, draft: D },
}

impl<D> Default for Dialog<D> {
    fn default() -> Self {
        Dialog::Closed
    }
}

impl<D> Dialog<D> {
    /// Replaces whatever was open with a fresh create form.
    pub fn open_create(&mut self, draft: D) {
        *self = Dialog::OpenForCreate { draft };
    }

    /// Replaces whatever was open with an edit form for `id`.
    pub fn open_edit(&mut self, id: u64, draft: D) {
        *self = Dialog::OpenForEdit { id, draft };
    }

    pub fn close(&mut self) {
        *self = Dialog::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Dialog::Closed)
    }

    pub fn editing_id(&self) -> Option<u64> {
        match self {
            Dialog::OpenForEdit { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            Dialog::Closed => None,
            Dialog::OpenForCreate { draft } | Dialog::OpenForEdit { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            Dialog::Closed => None,
            Dialog::OpenForCreate { draft } | Dialog::OpenForEdit { draft, .. } => Some(draft),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let dialog: Dialog<String> = Dialog::default();
        assert!(!dialog.is_open());
        assert_eq!(dialog.draft(), None);
        assert_eq!(dialog.editing_id(), None);
    }

    #[test]
    fn create_after_edit_forgets_the_target() {
        let mut dialog = Dialog::default();
        dialog.open_edit(4, "old".to_string());
        dialog.open_create(String::new());

        assert_eq!(dialog.editing_id(), None);
        assert_eq!(dialog.draft().map(String::as_str), Some(""));
    }

    #[test]
    fn close_drops_the_draft() {
        let mut dialog = Dialog::default();
        dialog.open_edit(4, "draft".to_string());
        if let Some(draft) = dialog.draft_mut() {
            draft.push('!');
        }
        assert_eq!(dialog.draft().map(String::as_str), Some("draft!"));

        dialog.close();
        assert_eq!(dialog, Dialog::Closed);
    }
}
