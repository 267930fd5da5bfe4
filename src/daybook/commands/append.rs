use crate::commands::{CmdMessage, CmdResult};
use crate::config::JournalSettings;
use crate::error::Result;
use crate::store::Workspace;
use crate::{outline, splice};

/// Appends `text` to the topmost entry of the journal.
///
/// This does not insert today's heading; it splices under whatever
/// heading is currently first, and callers that want the heading
/// guaranteed run the open flow separately. Works on a journal with no
/// headings at all, and `text` may be empty.
pub fn run<W: Workspace>(ws: &mut W, settings: &JournalSettings, text: &str) -> Result<CmdResult> {
    let note = ws.get_or_create(&settings.journal_note_path)?;
    let mut result = CmdResult::default();

    if note.created {
        result.add_message(CmdMessage::info(format!(
            "Creating journal note {}",
            note.path.display()
        )));
    }

    let content = ws.read(&note)?;
    let headings = outline::scan(&content);
    let updated = splice::append_entry(&content, &headings, text);
    ws.write(&note, &updated)?;

    result.add_message(CmdMessage::success(format!(
        "Appended to {}",
        settings.journal_note_path
    )));
    Ok(result.with_journal_path(note.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::open;
    use crate::datefmt;
    use crate::store::memory::InMemoryWorkspace;

    #[test]
    fn append_to_fresh_journal_has_no_heading() {
        let mut ws = InMemoryWorkspace::new();
        let settings = JournalSettings::default();

        run(&mut ws, &settings, "hello").unwrap();

        assert_eq!(ws.content("Journal").unwrap(), "\nhello\n");
    }

    #[test]
    fn append_after_open_lands_under_todays_heading() {
        let mut ws = InMemoryWorkspace::new();
        let settings = JournalSettings::default();

        open::run(&mut ws, &settings).unwrap();
        run(&mut ws, &settings, "first entry").unwrap();

        let label = datefmt::today_label(&settings);
        assert_eq!(
            ws.content("Journal").unwrap(),
            format!("# {}\n\nfirst entry\n", label)
        );
    }

    #[test]
    fn repeated_appends_stack_in_order() {
        let mut ws = InMemoryWorkspace::new();
        let settings = JournalSettings::default();

        open::run(&mut ws, &settings).unwrap();
        run(&mut ws, &settings, "first").unwrap();
        run(&mut ws, &settings, "second").unwrap();

        let label = datefmt::today_label(&settings);
        assert_eq!(
            ws.content("Journal").unwrap(),
            format!("# {}\n\nfirst\n\nsecond\n", label)
        );
    }

    #[test]
    fn append_targets_topmost_heading_even_when_stale() {
        // With automatic headings off the top heading may be an earlier
        // day; append still goes to the topmost entry.
        let mut ws = InMemoryWorkspace::new();
        let settings = JournalSettings::default();
        ws.seed(
            "Journal",
            "# 2019-05-04 (Sat)\nsaturday entry\n\n# 2019-05-03 (Fri)\nfriday entry\n",
        );

        run(&mut ws, &settings, "late note").unwrap();

        assert_eq!(
            ws.content("Journal").unwrap(),
            "# 2019-05-04 (Sat)\nsaturday entry\n\n\nlate note\n# 2019-05-03 (Fri)\nfriday entry\n"
        );
    }

    #[test]
    fn append_empty_text_succeeds() {
        let mut ws = InMemoryWorkspace::new();
        let settings = JournalSettings::default();

        run(&mut ws, &settings, "").unwrap();

        assert_eq!(ws.content("Journal").unwrap(), "\n\n");
    }
}
