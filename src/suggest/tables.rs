//! Static prediction data tables
//!
//! Hand-written heuristic tables approximating predictive typing for
//! Spanish-language markdown authoring: next-word patterns keyed by the
//! previous word, phrase completions keyed by word prefixes, heading
//! templates, and line-context rules. Kept as plain data so they stay
//! trivially unit-testable and replaceable.

/// How many completions the phrase table may contribute in total.
const PHRASE_LIMIT: usize = 2;

/// Common next-word candidates keyed by the previous word.
pub const CONTEXT_PATTERNS: &[(&str, &[&str])] = &[
    ("el", &["editor", "texto", "contenido", "archivo", "documento", "código", "formato"]),
    ("la", &["lista", "línea", "aplicación", "función", "página", "vista", "tabla"]),
    ("un", &["editor", "texto", "archivo", "documento", "ejemplo", "formato", "enlace"]),
    ("una", &["lista", "línea", "aplicación", "función", "página", "vista", "tabla"]),
    ("de", &["texto", "markdown", "código", "datos", "archivos", "contenido", "formato"]),
    ("en", &["tiempo", "markdown", "español", "línea", "formato", "código", "texto"]),
    ("con", &["markdown", "texto", "código", "formato", "contenido", "datos", "archivos"]),
    ("para", &["escribir", "editar", "crear", "formatear", "guardar", "exportar", "importar"]),
    ("es", &["un", "una", "muy", "importante", "necesario", "posible", "fácil"]),
    ("este", &["editor", "texto", "archivo", "documento", "formato", "código", "ejemplo"]),
    ("esta", &["aplicación", "función", "página", "vista", "tabla", "lista", "línea"]),
    ("muy", &["importante", "útil", "fácil", "rápido", "simple", "eficiente", "práctico"]),
    ("más", &["información", "detalles", "opciones", "funciones", "características", "contenido"]),
    ("markdown", &["editor", "texto", "formato", "código", "documento", "archivo", "contenido"]),
    ("editor", &["de", "markdown", "texto", "código", "avanzado", "simple", "moderno"]),
    ("texto", &["plano", "enriquecido", "markdown", "formato", "contenido", "documento"]),
    ("código", &["fuente", "javascript", "python", "html", "css", "markdown", "ejemplo"]),
];

/// Multi-word phrase completions keyed by a word prefix.
pub const PHRASE_PATTERNS: &[(&str, &[&str])] = &[
    ("este", &["este es un ejemplo", "este editor permite", "este documento contiene"]),
    ("esta", &["esta aplicación ofrece", "esta función permite", "esta herramienta facilita"]),
    ("el", &["el editor de markdown", "el siguiente ejemplo", "el código fuente"]),
    ("la", &["la siguiente sección", "la aplicación permite", "la función principal"]),
    ("para", &["para más información", "para obtener ayuda", "para crear un documento"]),
    ("con", &["con esta herramienta", "con markdown puedes", "con este editor"]),
    ("en", &["en este ejemplo", "en la siguiente sección", "en tiempo real"]),
    ("función", &["función principal", "función que permite", "función de autocompletado"]),
    ("editor", &["editor de markdown", "editor de texto", "editor avanzado"]),
    ("markdown", &["markdown permite crear", "markdown es un lenguaje", "markdown facilita"]),
    ("código", &["código fuente", "código de ejemplo", "código javascript"]),
    ("ejemplo", &["ejemplo de uso", "ejemplo práctico", "ejemplo de código"]),
    ("aplicación", &["aplicación web", "aplicación moderna", "aplicación de escritorio"]),
    ("cómo", &["cómo usar esta función", "cómo crear un documento", "cómo exportar archivos"]),
    ("qué", &["qué es markdown", "qué hace esta función", "qué características ofrece"]),
    ("por", &["por ejemplo", "por defecto", "por favor"]),
    ("también", &["también puedes usar", "también es posible", "también incluye"]),
    ("además", &["además de esto", "además puedes", "además incluye"]),
    ("puedes", &["puedes usar esta función", "puedes crear documentos", "puedes exportar archivos"]),
    ("permite", &["permite crear documentos", "permite editar texto", "permite formatear contenido"]),
    ("incluye", &["incluye características avanzadas", "incluye autocompletado", "incluye vista previa"]),
    ("ofrece", &["ofrece múltiples opciones", "ofrece funcionalidad avanzada", "ofrece una interfaz moderna"]),
];

/// Heading templates offered when the line so far is just a `#` run.
pub const HEADING_TEMPLATES: &[&str] = &[
    "# Título principal",
    "## Subtítulo",
    "### Título de sección",
];

/// Candidates offered inside a heading section, keyed by the first letter
/// of the in-progress word.
pub const SECTION_CONTEXT: &[(char, &[&str])] = &[
    ('e', &["ejemplo de uso", "explicación detallada", "elementos importantes"]),
    ('c', &["características principales", "código de ejemplo", "configuración necesaria"]),
    ('f', &["funcionalidad avanzada", "formato de archivo", "funciones principales"]),
];

/// Candidates offered inside a list item, keyed by the first letter of the
/// in-progress word.
pub const LIST_CONTEXT: &[(char, &[&str])] = &[
    ('f', &["funcionalidad completa", "formato markdown", "fácil de usar"]),
    ('s', &["soporte completo", "sistema inteligente", "sintaxis simple"]),
    ('i', &["interfaz moderna", "integración perfecta", "importar archivos"]),
];

/// Static word lexicon, in suggestion order.
pub const LEXICON: &[&str] = &[
    "el", "la", "de", "que", "y", "a", "en", "un", "es", "se", "no", "te", "lo", "le", "da",
    "su", "por", "son", "con", "para", "al", "del", "los", "las", "una", "uno", "esta", "este",
    "está", "están", "texto", "markdown", "editor", "documento", "archivo", "contenido",
    "escribir", "crear", "editar", "formato", "título", "párrafo", "lista", "enlace", "imagen",
    "tabla", "código", "ejemplo", "función", "importante", "necesario", "posible", "siguiente",
    "anterior", "información", "desarrollo", "proyecto", "aplicación", "sistema", "bienvenido",
    "características", "principales", "tiempo", "real", "inteligente", "sugerencias",
    "contextuales", "corrección", "ortográfica", "errores", "marcados", "automáticamente",
    "soporte", "completo", "tareas", "implementar", "funciones", "avanzadas", "agregar", "más",
    "javascript", "nombre", "hola", "enlaces", "imágenes", "visita", "nuestro", "sitio", "web",
    "cita", "disfruta", "escribiendo",
];

/// Next-word candidates for `current` given the `previous` word.
pub fn context_candidates(previous: &str, current: &str, limit: usize) -> Vec<&'static str> {
    if previous.is_empty() || current.is_empty() {
        return Vec::new();
    }
    let prev = previous.to_lowercase();
    let curr = current.to_lowercase();

    CONTEXT_PATTERNS
        .iter()
        .find(|(key, _)| *key == prev)
        .map(|(_, candidates)| {
            candidates
                .iter()
                .filter(|c| c.starts_with(&curr))
                .take(limit)
                .copied()
                .collect()
        })
        .unwrap_or_default()
}

/// Phrase completions for `current`, plus line-context candidates.
///
/// A phrase key matches when it agrees with the in-progress word up to the
/// shorter of the two; completions are then filtered to those that start
/// with the word itself. Heading-section and list-item context rules key on
/// the first letter of the word.
pub fn phrase_candidates(line: &str, current: &str) -> Vec<&'static str> {
    if current.chars().count() < 2 {
        return Vec::new();
    }
    let line = line.to_lowercase();
    let word = current.to_lowercase();
    let mut completions = Vec::new();

    // The phrase table contributes at most two completions total, even
    // when several keys match the word.
    'table: for (pattern, phrases) in PHRASE_PATTERNS {
        let shorter = pattern.len().min(word.len());
        if !pattern.is_char_boundary(shorter) || !word.is_char_boundary(shorter) {
            continue;
        }
        if word[..shorter] == pattern[..shorter] {
            for phrase in phrases.iter().filter(|p| p.starts_with(&word)) {
                completions.push(*phrase);
                if completions.len() == PHRASE_LIMIT {
                    break 'table;
                }
            }
        }
    }

    let first = word.chars().next();
    if line.contains("##") {
        if let Some(letter) = first {
            if let Some((_, extra)) = SECTION_CONTEXT.iter().find(|(c, _)| *c == letter) {
                completions.extend(extra.iter().copied());
            }
        }
    }
    if is_list_item(&line) {
        if let Some(letter) = first {
            if let Some((_, extra)) = LIST_CONTEXT.iter().find(|(c, _)| *c == letter) {
                completions.extend(extra.iter().copied());
            }
        }
    }

    completions
}

/// Lexicon entries whose prefix matches `current` (min length 2).
pub fn lexicon_candidates(lexicon: &[&str], current: &str, limit: usize) -> Vec<String> {
    if current.chars().count() < 2 {
        return Vec::new();
    }
    let curr = current.to_lowercase();
    lexicon
        .iter()
        .filter(|word| word.starts_with(&curr))
        .take(limit)
        .map(|w| w.to_string())
        .collect()
}

fn is_list_item(line: &str) -> bool {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix(['-', '*']) {
        return rest.starts_with(' ');
    }
    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return false;
    }
    trimmed[digits.len()..].starts_with(". ")
}
