use crate::commands::{CmdMessage, CmdResult};
use crate::config::JournalSettings;
use crate::error::Result;
use crate::store::Workspace;
use crate::{datefmt, outline, splice};

/// Opens the journal: locate or create the document, then insert
/// today's heading when automatic headings are on. Content and outline
/// are read fresh here, after creation, so the heading decision never
/// works from stale state.
pub fn run<W: Workspace>(ws: &mut W, settings: &JournalSettings) -> Result<CmdResult> {
    let note = ws.get_or_create(&settings.journal_note_path)?;
    let mut result = CmdResult::default();

    if note.created {
        result.add_message(CmdMessage::info(format!(
            "Creating journal note {}",
            note.path.display()
        )));
    }

    if settings.automatic_date_headings {
        let content = ws.read(&note)?;
        let headings = outline::scan(&content);
        let label = datefmt::today_label(settings);

        if let Some(updated) = splice::ensure_today_heading(&content, &headings, &label) {
            ws.write(&note, &updated)?;
        }
    }

    Ok(result.with_journal_path(note.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryWorkspace;

    #[test]
    fn open_creates_journal_with_todays_heading() {
        let mut ws = InMemoryWorkspace::new();
        let settings = JournalSettings::default();

        let result = run(&mut ws, &settings).unwrap();

        let label = datefmt::today_label(&settings);
        assert_eq!(
            ws.content("Journal").unwrap(),
            format!("# {}\n", label)
        );
        assert!(result.journal_path.is_some());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn open_twice_inserts_one_heading() {
        let mut ws = InMemoryWorkspace::new();
        let settings = JournalSettings::default();

        run(&mut ws, &settings).unwrap();
        let after_first = ws.content("Journal").unwrap().to_string();
        run(&mut ws, &settings).unwrap();

        assert_eq!(ws.content("Journal").unwrap(), after_first);
    }

    #[test]
    fn open_prepends_heading_above_earlier_days() {
        let mut ws = InMemoryWorkspace::new();
        let settings = JournalSettings::default();
        ws.seed("Journal", "# 2019-05-04 (Sat)\nold entry\n");

        run(&mut ws, &settings).unwrap();

        let label = datefmt::today_label(&settings);
        assert_eq!(
            ws.content("Journal").unwrap(),
            format!("# {}\n# 2019-05-04 (Sat)\nold entry\n", label)
        );
    }

    #[test]
    fn open_respects_disabled_automatic_headings() {
        let mut ws = InMemoryWorkspace::new();
        let settings = JournalSettings {
            automatic_date_headings: false,
            ..Default::default()
        };

        run(&mut ws, &settings).unwrap();

        assert_eq!(ws.content("Journal").unwrap(), "");
    }

    #[test]
    fn open_uses_configured_note_path() {
        let mut ws = InMemoryWorkspace::new();
        let settings = JournalSettings {
            journal_note_path: "Diary".to_string(),
            ..Default::default()
        };

        let result = run(&mut ws, &settings).unwrap();

        assert!(ws.content("Diary").is_some());
        assert_eq!(
            result.journal_path.unwrap(),
            std::path::PathBuf::from("Diary.md")
        );
    }
}
