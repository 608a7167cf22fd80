/// Settings command handlers (language, clear)
use anyhow::Result;
use std::io::{self, BufRead, Write};

use faithlog_core::i18n::LANGUAGE_SETTING;
use faithlog_core::{Language, TextLookup, Translator};

use crate::app::App;

fn language_name(language: Language, t: &dyn TextLookup) -> String {
    match language {
        Language::En => t.text("english"),
        Language::Es => t.text("spanish"),
    }
}

pub fn handle_language(app: &App, language: Option<&str>) -> Result<()> {
    let Some(value) = language else {
        let current = app.language()?;
        let t = Translator::new(current);
        println!("{}: {} ({current})", t.text("language"), language_name(current, &t));
        return Ok(());
    };

    let selected = value.parse::<Language>()?;
    app.database().set_setting(LANGUAGE_SETTING, selected.code())?;
    log::info!("Language set to {selected}");

    let t = Translator::new(selected);
    println!("{}: {} ({selected})", t.text("language"), language_name(selected, &t));
    Ok(())
}

pub async fn handle_clear(app: &mut App, yes: bool) -> Result<()> {
    let t = app.translator()?;

    if !yes && !confirm(&t.text("confirmClearAllData"))? {
        return Ok(());
    }

    app.journal.clear().await?;
    println!("{}", t.text("dataCleared"));
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "s\u{ed}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(is_yes("s\u{ed}"));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }

    #[test]
    fn test_language_name_is_localized() {
        let es = Translator::new(Language::Es);
        assert_eq!(language_name(Language::En, &es), "Ingl\u{e9}s");
        assert_eq!(language_name(Language::Es, &es), "Espa\u{f1}ol");
    }
}
