//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, FormTexts, HintTexts, KeyNames, ListTexts, ModalTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Heroes",
        alive: "Alive",
        dead: "Dead",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "Space",
            arrows_ud: "↑↓",
            ctrl_s: "Ctrl+S",
        },
        actions: ActionTexts {
            select: "Select",
            edit: "Edit",
            new: "New",
            delete: "Delete",
            refresh: "Refresh",
            next_field: "Next field",
            toggle: "Toggle",
            save: "Save",
            back: "Back",
            help: "Help",
            quit: "Quit",
            switch: "Switch",
            confirm: "Confirm",
            close: "Close",
        },
    },

    list: ListTexts {
        title: "Heroes",
        col_name: "Name",
        col_power: "Power",
        col_status: "Status",
        loading_title: "Loading",
        loading_text: "Please wait...",
        empty_title: "No records",
        empty_text: "No heroes found.",
        no_selection: "No hero selected.",
    },

    form: FormTexts {
        title_new: "New Hero",
        title_edit: "Edit Hero",
        new_subtitle: "New hero",
        loading_subtitle: "Loading...",
        loading_record: "Loading the hero's data...",
        id_label: "Hero ID",
        id_hint: "This field is generated automatically.",
        name_label: "Name *",
        name_placeholder: "Enter the hero's name",
        power_label: "Power *",
        power_placeholder: "Enter the hero's power",
        length_hint,
        status_label: "Status",
        create: "Create Hero",
        update: "Update Hero",
        creating: "Creating...",
        updating: "Updating...",
        back: "Back",
    },

    modal: ModalTexts {
        help_title: "Help",
        help_list: "List: ↑↓ select · Enter/e edit · n new · d delete · r refresh · q quit",
        help_form: "Editor: Tab next field · Space toggle status · Ctrl+S save · Esc back",
        press_to_close: "Press Esc or Enter to close",
    },
};

fn length_hint(min: usize, max: usize) -> String {
    format!("At least {min} characters, at most {max}.")
}
