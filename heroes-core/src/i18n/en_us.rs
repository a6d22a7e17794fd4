//! English (en-US)

use super::{ConfirmDeleteTexts, FormTexts, ListTexts, Texts, TitleTexts, ValidationTexts};

pub const TEXTS: Texts = Texts {
    titles: TitleTexts {
        error: "Error",
        validation: "Validation",
        created: "Created!",
        updated: "Updated!",
        deleted: "Deleted!",
    },
    confirm_delete: ConfirmDeleteTexts {
        title: "Are you sure?",
        text: "Once deleted, you will not be able to recover this hero.",
        confirm: "Yes, delete",
        cancel: "Cancel",
    },
    validation: ValidationTexts {
        name_required: "The hero's name is required",
        power_required: "The hero's power is required",
        name_too_short: "The name must be at least 2 characters long",
    },
    list: ListTexts {
        load_error: "Error loading heroes. Please try again.",
        load_failed: "Could not load heroes. Check your connection.",
        deleted: "The hero has been deleted.",
        delete_failed: "Could not delete the hero. Please try again.",
    },
    form: FormTexts {
        load_error: "Error loading the hero's data",
        load_failed: "Could not load the hero. Make sure it exists.",
        save_failed: "Error saving the hero",
    },
    acknowledge: "Got it",
};
