mod common;

use assert2::check;
use common::DataDir;
use docdesk::{DirSnapshot, MatchConfig, MatchResult, select_and_answer};

fn answer(dir: &DataDir, question: &str) -> Option<MatchResult> {
    let config = MatchConfig::default();
    let snapshot = DirSnapshot::scan(dir.path()).expect("scan data dir");
    select_and_answer(question, &snapshot, &config).expect("pipeline should not fail")
}

/// A salary question picks the salary table and returns its row-joined text.
#[test]
fn salary_table_selected_and_row_joined() {
    let dir = DataDir::new();
    dir.write("שכר.csv", "שם,שכר\nדנה,10000\n");
    dir.write("חופשה.txt", "<section><h1>חופשה</h1>כלום</section>");

    let result = answer(&dir, "מה השכר").expect("should match the salary file");
    check!(result.filename == "שכר.csv");
    check!(result.content == "שם | שכר\nדנה | 10000\n");
    check!(result.images.is_empty());
}

/// When a relevant section holds a matching emphasized span, only the lines
/// carrying such spans come back, trimmed.
#[test]
fn emphasis_narrows_to_matching_lines() {
    let dir = DataDir::new();
    dir.write(
        "חופשה.txt",
        "<section><h1>חופשה</h1>\nRegular text\n  יש <strong>20 ימי חופשה</strong> בשנה  \nand <strong>unrelated</strong> extras\n</section>",
    );

    let result = answer(&dir, "כמה ימי חופשה").expect("should match the vacation file");
    check!(result.filename == "חופשה.txt");
    check!(result.content == "יש <strong>20 ימי חופשה</strong> בשנה");
}

/// A question of nonsense tokens matches nothing at all.
#[test]
fn nonsense_question_matches_no_file() {
    let dir = DataDir::new();
    dir.write("שכר.csv", "a,b\n");
    dir.write("חופשה.txt", "text");

    check!(answer(&dir, "זזזז קקקק").is_none());
}

/// A relevant section without qualifying emphasized lines contributes its
/// whole trimmed text.
#[test]
fn relevant_section_without_emphasis_returns_full_section() {
    let dir = DataDir::new();
    dir.write(
        "חופשה.txt",
        "<section><h1>חופשה</h1>\nten days for everyone\n</section>",
    );

    let result = answer(&dir, "חופשה").expect("should match");
    check!(result.content == "<h1>חופשה</h1>\nten days for everyone");
}

/// The "all" quantifier switches aggregation from first-match to every
/// contributed unit, blank-line separated, in document order.
#[test]
fn all_quantifier_aggregates_every_relevant_section() {
    let dir = DataDir::new();
    dir.write(
        "חופשה.txt",
        "<section><h1>חופשה שנתית</h1>\nA\n</section>\
         <section><h1>חופשה מחלה</h1>\nB\n</section>\
         <section><h1>חופשה מיוחדת</h1>\nC\n</section>",
    );

    let all = answer(&dir, "כל סוגי חופשה").expect("should match");
    check!(
        all.content
            == "<h1>חופשה שנתית</h1>\nA\n\n<h1>חופשה מחלה</h1>\nB\n\n<h1>חופשה מיוחדת</h1>\nC"
    );

    let first = answer(&dir, "סוגי חופשה").expect("should match");
    check!(first.content == "<h1>חופשה שנתית</h1>\nA");
}

/// Sections that exist but never match produce the no-information message,
/// with the filename still attached.
#[test]
fn no_relevant_section_yields_no_info_message() {
    let dir = DataDir::new();
    dir.write("חופשה.txt", "<section><h1>חניה</h1>\nbody\n</section>");

    let result = answer(&dir, "חופשה").expect("filename still matches");
    check!(result.filename == "חופשה.txt");
    check!(result.content == "אין מידע על כך.");
}

/// A comment can make a section relevant even when its heading does not.
#[test]
fn comment_match_makes_section_relevant() {
    let dir = DataDir::new();
    dir.write(
        "הטבות.txt",
        "<section><h1>כללי</h1>\n<!-- הטבות לעובדים -->\nlunch is free\n</section>",
    );

    let result = answer(&dir, "הטבות").expect("should match");
    check!(result.content.contains("lunch is free"));
}

/// Rich documents bypass section logic entirely: full text plus images, even
/// though the question shares nothing with the document body.
#[test]
fn rich_document_returns_full_text_and_images() {
    let dir = DataDir::new();
    dir.write_docx("מדיניות.docx", &["סעיף ראשון", "סעיף שני"], true);

    let result = answer(&dir, "מה המדיניות").expect("should match");
    check!(result.filename == "מדיניות.docx");
    check!(result.content == "סעיף ראשון\nסעיף שני\n");
    check!(result.images.len() == 1);
    check!(result.images[0].starts_with("data:image/png;base64,"));
}

/// Unrecognized extensions are scored but never decoded, so winning selection
/// still ends in the no-information message.
#[test]
fn unknown_extension_scores_but_never_decodes() {
    let dir = DataDir::new();
    dir.write("מדריך.xyz", "<section><h1>מדריך</h1>secret</section>");

    let result = answer(&dir, "מדריך").expect("filename still matches");
    check!(result.filename == "מדריך.xyz");
    check!(result.content == "אין מידע על כך.");
}

/// Subdirectories are skipped silently during scoring.
#[test]
fn directories_are_not_candidates() {
    let dir = DataDir::new();
    dir.create_subdir("שכר");
    dir.write("חופשה.txt", "yearly summary");

    check!(answer(&dir, "השכר").is_none());
    let result = answer(&dir, "חופשה").expect("file still matches");
    check!(result.filename == "חופשה.txt");
}

/// Short question particles count as the generic information term, so a
/// file named with that term is selectable by particles alone.
#[test]
fn synonym_particles_select_the_information_file() {
    let dir = DataDir::new();
    dir.write("מידע.txt", "general notes");

    let result = answer(&dir, "תן לי").expect("particle should match");
    check!(result.filename == "מידע.txt");
    check!(result.content == "general notes");
}
