//! Localized UI text.
//!
//! Components never read a global language; they receive a [`TextLookup`]
//! and ask it for strings by key. Unknown keys come back unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use faithlog_storage::{EntryType, ParseEnumError, Status};

/// Settings key under which the selected language is stored
pub const LANGUAGE_SETTING: &str = "language";

/// Source of localized strings
pub trait TextLookup {
    fn text(&self, key: &str) -> String;

    fn entry_type(&self, entry_type: EntryType) -> String {
        self.text(entry_type.label_key())
    }

    fn status(&self, status: Status) -> String {
        self.text(status.label_key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Resolve a stored setting, falling back when it is absent or unknown
    #[must_use]
    pub fn from_setting(stored: Option<&str>, fallback: Self) -> Self {
        stored.and_then(|s| s.parse().ok()).unwrap_or(fallback)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "es" | "spanish" | "espanol" => Ok(Self::Es),
            _ => Err(ParseEnumError {
                kind: "language",
                value: s.to_string(),
            }),
        }
    }
}

/// Table-backed lookup for one language
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    language: Language,
}

impl Translator {
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }
}

impl TextLookup for Translator {
    fn text(&self, key: &str) -> String {
        TRANSLATIONS
            .iter()
            .find(|(k, _, _)| *k == key)
            .map_or(key, |&(_, en, es)| match self.language {
                Language::En => en,
                Language::Es => es,
            })
            .to_string()
    }
}

// (key, English, Spanish)
const TRANSLATIONS: &[(&str, &str, &str)] = &[
    // Entry kinds and statuses
    ("testimony", "Testimony", "Testimonio"),
    ("gratitude", "Gratitude", "Gratitud"),
    ("prayerRequest", "Prayer Request", "Petici\u{f3}n de Oraci\u{f3}n"),
    ("pending", "Pending", "Pendiente"),
    ("inProgress", "In Progress", "En Progreso"),
    ("answered", "Answered", "Respondida"),
    // Entry fields
    ("id", "ID", "ID"),
    ("date", "Date", "Fecha"),
    ("time", "Time", "Hora"),
    ("type", "Type", "Tipo"),
    ("status", "Status", "Estado"),
    ("personName", "Person", "Persona"),
    ("title", "Title", "T\u{ed}tulo"),
    ("details", "Details", "Detalles"),
    ("tags", "Tags", "Etiquetas"),
    ("count", "Count", "Cantidad"),
    // Report
    ("pdfReportTitle", "Faith Journal Report", "Informe del Diario de Fe"),
    ("generatedOn", "Generated on", "Generado el"),
    ("at", "at", "a las"),
    ("for", "For", "Para"),
    // Dashboard
    ("dashboard", "Dashboard", "Panel"),
    ("totalEntries", "Total Entries", "Total de Entradas"),
    ("testimonies", "Testimonies", "Testimonios"),
    ("prayerRequests", "Prayer Requests", "Peticiones de Oraci\u{f3}n"),
    ("entriesByType", "Entries by Type", "Entradas por Tipo"),
    ("prayerRequestsByStatus", "Prayer Requests by Status", "Peticiones por Estado"),
    ("topPeople", "Top People", "Personas Principales"),
    ("trendingTags", "Trending Tags", "Etiquetas Populares"),
    ("recentAnsweredPrayers", "Recently Answered Prayers", "Oraciones Respondidas Recientemente"),
    ("today", "Today", "Hoy"),
    ("thisWeek", "This Week", "Esta Semana"),
    ("thisMonth", "This Month", "Este Mes"),
    ("allTime", "All Time", "Todo el Tiempo"),
    // Entries and settings
    ("entries", "Entries", "Entradas"),
    ("noEntriesFound", "No entries found.", "No se encontraron entradas."),
    ("entrySaved", "Entry saved", "Entrada guardada"),
    ("entryDeleted", "Entry deleted", "Entrada eliminada"),
    ("reportSaved", "Report saved to", "Informe guardado en"),
    ("language", "Language", "Idioma"),
    ("english", "English", "Ingl\u{e9}s"),
    ("spanish", "Spanish", "Espa\u{f1}ol"),
    (
        "confirmClearAllData",
        "Are you sure you want to delete all data? This action cannot be undone.",
        "\u{bf}Est\u{e1}s seguro de que quieres borrar todos los datos? Esta acci\u{f3}n no se puede deshacer.",
    ),
    ("dataCleared", "All data has been cleared.", "Todos los datos han sido borrados."),
];
