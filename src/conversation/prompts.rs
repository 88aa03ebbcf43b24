//! All user-visible reply texts for the intake conversation.

use super::fields::{FieldDescriptor, FIELDS};
use super::state::Session;
use crate::documents::DocumentType;

/// Greeting reply for `hola`/`hello`/`hi` in the initial state.
pub fn welcome() -> String {
    "¡Hola! Soy tu asistente para generar convenios legales. \
     Envía 'convenio' para comenzar."
        .to_string()
}

/// Fallback reply for anything else in the initial state.
pub fn start_hint() -> String {
    "Envía 'convenio' para comenzar a generar un documento legal.".to_string()
}

/// The document-type selection menu, numbered 1..=11 in registry order.
pub fn menu() -> String {
    let mut menu = String::from("📄 Selecciona el tipo de convenio:\n\n");
    for (i, doc_type) in DocumentType::ALL.iter().enumerate() {
        menu.push_str(&format!("{}. {}\n", i + 1, doc_type.label()));
    }
    menu.push_str("\nEnvía el número de tu opción:");
    menu
}

/// Re-prompt when the menu selection is not an integer.
pub fn enter_a_number() -> String {
    format!("Por favor ingresa un número. {}", menu())
}

/// Re-prompt when the menu selection is out of range.
pub fn invalid_option() -> String {
    format!("Opción inválida. {}", menu())
}

/// Confirmation line after a valid menu selection.
pub fn selection_confirmed(doc_type: DocumentType) -> String {
    format!("Seleccionaste: {}", doc_type.label())
}

/// Prompt for a single field.
pub fn field_prompt(field: &FieldDescriptor) -> String {
    format!("Ingresa {}:", field.label)
}

/// Validation failure: error message plus the unchanged prompt.
pub fn invalid_field(field: &FieldDescriptor) -> String {
    let error = field
        .validator
        .map(|v| v.error_message())
        .unwrap_or("Valor inválido.");
    format!("{} Ingresa {}:", error, field.label)
}

/// Summary of all collected values, ending with the yes/no request.
pub fn summary(session: &Session) -> String {
    let doc_label = session
        .document_type
        .map(|t| t.label())
        .unwrap_or("N/A");

    let mut summary = String::from("📋 Resumen de datos:\n\n");
    summary.push_str(&format!("📄 Tipo: {doc_label}\n\n"));

    for (title, fields) in [("Demandante", &FIELDS[..5]), ("Demandado", &FIELDS[5..])] {
        summary.push_str(&format!("👤 {title}:\n"));
        for field in fields {
            let value = session.data.get(field.key).map_or("N/A", String::as_str);
            summary.push_str(&format!("   {}: {}\n", field.short_label, value));
        }
        summary.push('\n');
    }

    summary.push_str(
        "¿Los datos son correctos? Responde 'sí' para generar el documento o 'no' para cancelar.",
    );
    summary
}

/// Re-prompt for anything that is neither yes nor no while confirming.
pub fn confirm_retry() -> String {
    "Por favor responde 'sí' o 'no' para confirmar los datos.".to_string()
}

/// Cancellation reply; the session has been reset.
pub fn cancelled() -> String {
    "Operación cancelada. Envía 'convenio' para comenzar de nuevo.".to_string()
}

/// Success reply after document generation.
pub fn generated(doc_type: DocumentType) -> String {
    format!(
        "✅ Documento generado exitosamente!\n\nTipo: {}\n\nEl documento ha sido procesado y está listo.",
        doc_type.label()
    )
}

/// Generic failure reply; details never reach the user.
pub fn generation_failed() -> String {
    "❌ Error al generar el documento. Por favor intenta de nuevo.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::state::ConversationState;

    #[test]
    fn menu_lists_all_eleven_types_in_order() {
        let menu = menu();
        assert!(menu.starts_with("📄 Selecciona el tipo de convenio:"));
        for (i, doc_type) in DocumentType::ALL.iter().enumerate() {
            assert!(
                menu.contains(&format!("{}. {}", i + 1, doc_type.label())),
                "missing entry {}",
                i + 1
            );
        }
        assert!(menu.ends_with("Envía el número de tu opción:"));
    }

    #[test]
    fn invalid_selection_replies_include_menu() {
        assert!(enter_a_number().starts_with("Por favor ingresa un número."));
        assert!(enter_a_number().contains("1. Convenio Niños y Adolescentes"));
        assert!(invalid_option().starts_with("Opción inválida."));
        assert!(invalid_option().contains("11. Declaración Jurada de No Seguro"));
    }

    #[test]
    fn field_prompt_names_the_field() {
        assert_eq!(
            field_prompt(&FIELDS[0]),
            "Ingresa Nombre completo del demandante:"
        );
    }

    #[test]
    fn invalid_field_repeats_the_prompt() {
        let reply = invalid_field(&FIELDS[1]);
        assert!(reply.starts_with("DNI inválido. Debe tener 8 dígitos."));
        assert!(reply.ends_with("Ingresa DNI del demandante:"));
    }

    #[test]
    fn summary_shows_collected_values_and_na_for_missing() {
        let mut session = Session::new();
        session.state = ConversationState::Confirming;
        session.document_type = Some(DocumentType::Honorarios);
        session
            .data
            .insert("nombre_demandante".into(), "Ana García".into());

        let summary = summary(&session);
        assert!(summary.contains("📄 Tipo: Convenio Honorarios"));
        assert!(summary.contains("Nombre: Ana García"));
        assert!(summary.contains("DNI: N/A"));
        assert!(summary.contains("👤 Demandante:"));
        assert!(summary.contains("👤 Demandado:"));
        assert!(summary.ends_with("Responde 'sí' para generar el documento o 'no' para cancelar."));
    }

    #[test]
    fn generated_names_the_document_type() {
        let reply = generated(DocumentType::Patrocinio);
        assert!(reply.contains("Convenio Patrocinio"));
        assert!(reply.starts_with("✅"));
    }
}
