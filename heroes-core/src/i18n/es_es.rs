//! Spanish (es-ES)

use super::{ConfirmDeleteTexts, FormTexts, ListTexts, Texts, TitleTexts, ValidationTexts};

pub const TEXTS: Texts = Texts {
    titles: TitleTexts {
        error: "Error",
        validation: "Validación",
        created: "¡Creado!",
        updated: "¡Actualizado!",
        deleted: "¡Eliminado!",
    },
    confirm_delete: ConfirmDeleteTexts {
        title: "¿Estás seguro?",
        text: "Una vez eliminado, no podrás recuperar este héroe.",
        confirm: "Sí, eliminar",
        cancel: "Cancelar",
    },
    validation: ValidationTexts {
        name_required: "El nombre del héroe es obligatorio",
        power_required: "El poder del héroe es obligatorio",
        name_too_short: "El nombre debe tener al menos 2 caracteres",
    },
    list: ListTexts {
        load_error: "Error al cargar los héroes. Por favor, intenta de nuevo.",
        load_failed: "No se pudieron cargar los héroes. Verifica tu conexión.",
        deleted: "El héroe ha sido eliminado correctamente.",
        delete_failed: "No se pudo eliminar el héroe. Intenta de nuevo.",
    },
    form: FormTexts {
        load_error: "Error al cargar los datos del héroe",
        load_failed: "No se pudo cargar el héroe. Verifica que existe.",
        save_failed: "Error al guardar el héroe",
    },
    acknowledge: "Entendido",
};
