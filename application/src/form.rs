use error_stack::Report;
use vodca::References;

use kernel::prelude::entity::{Book, BookDraft, BookField, BookId};
use kernel::KernelError;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum FormMode {
    #[default]
    Closed,
    Create,
    Edit(BookId),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum FormSubmission {
    Create(BookDraft),
    Update { id: BookId, draft: BookDraft },
}

#[derive(Debug, Clone, Default, Eq, PartialEq, References)]
pub struct BookForm {
    mode: FormMode,
    draft: BookDraft,
}

impl BookForm {
    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    pub fn open_create(&mut self) {
        self.mode = FormMode::Create;
        self.draft = BookDraft::default();
    }

    pub fn open_edit(&mut self, book: &Book) {
        self.mode = FormMode::Edit(book.id().clone());
        self.draft = BookDraft::from(book);
    }

    pub fn set_field(
        &mut self,
        field: BookField,
        value: impl Into<String>,
    ) -> error_stack::Result<(), KernelError> {
        if !self.is_open() {
            return Err(Report::new(KernelError::Invalid).attach_printable("book form is closed"));
        }
        self.draft.set(field, value);
        Ok(())
    }

    /// Closes the form and hands out what was typed. `None` when closed.
    pub fn submit(&mut self) -> Option<FormSubmission> {
        let mode = std::mem::take(&mut self.mode);
        let draft = std::mem::take(&mut self.draft);
        match mode {
            FormMode::Closed => None,
            FormMode::Create => Some(FormSubmission::Create(draft)),
            FormMode::Edit(id) => Some(FormSubmission::Update { id, draft }),
        }
    }

    pub fn cancel(&mut self) {
        self.mode = FormMode::Closed;
        self.draft = BookDraft::default();
    }

    pub fn release(&mut self, id: &BookId) {
        if matches!(&self.mode, FormMode::Edit(target) if target == id) {
            self.cancel();
        }
    }
}
