//! Traducción al español (es-ES)

use super::keys::{
    ActionTexts, CommonTexts, FormTexts, HintTexts, KeyNames, ListTexts, ModalTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Héroes",
        alive: "Vivo",
        dead: "Muerto",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            space: "Espacio",
            arrows_ud: "↑↓",
            ctrl_s: "Ctrl+S",
        },
        actions: ActionTexts {
            select: "Seleccionar",
            edit: "Modificar",
            new: "Alta",
            delete: "Eliminar",
            refresh: "Recargar",
            next_field: "Siguiente campo",
            toggle: "Cambiar",
            save: "Guardar",
            back: "Volver",
            help: "Ayuda",
            quit: "Salir",
            switch: "Cambiar",
            confirm: "Confirmar",
            close: "Cerrar",
        },
    },

    list: ListTexts {
        title: "Listado de Héroes",
        col_name: "Nombre",
        col_power: "Poder",
        col_status: "Estado",
        loading_title: "Cargando",
        loading_text: "Espere por favor...",
        empty_title: "No hay registros",
        empty_text: "No se encontraron héroes registrados.",
        no_selection: "Ningún héroe seleccionado.",
    },

    form: FormTexts {
        title_new: "Nuevo Héroe",
        title_edit: "Editar Héroe",
        new_subtitle: "Nuevo héroe",
        loading_subtitle: "Cargando...",
        loading_record: "Cargando datos del héroe...",
        id_label: "ID del Héroe",
        id_hint: "Este campo se genera automáticamente.",
        name_label: "Nombre *",
        name_placeholder: "Ingresa el nombre del héroe",
        power_label: "Poder *",
        power_placeholder: "Ingresa el poder del héroe",
        length_hint,
        status_label: "Estado",
        create: "Crear Héroe",
        update: "Actualizar Héroe",
        creating: "Creando...",
        updating: "Actualizando...",
        back: "Volver",
    },

    modal: ModalTexts {
        help_title: "Ayuda",
        help_list: "Listado: ↑↓ seleccionar · Enter/e modificar · n alta · d eliminar · r recargar · q salir",
        help_form: "Editor: Tab siguiente campo · Espacio cambiar estado · Ctrl+S guardar · Esc volver",
        press_to_close: "Pulsa Esc o Enter para cerrar",
    },
};

fn length_hint(min: usize, max: usize) -> String {
    format!("Mínimo {min} caracteres, máximo {max}.")
}
