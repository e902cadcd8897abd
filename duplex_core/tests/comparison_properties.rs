use duplex_core::{
    ClassifiedLine, ComparisonConfig, ComparisonResult, ComparisonSession, LineCategory, Result,
};

const PAIRS: &[(&str, &str)] = &[
    ("line1\nline2\nline3", "line1\nlineTWO\nline3"),
    ("keep\nremoveMe", "keep"),
    ("", "a\nb\nc"),
    ("a\nb\n", ""),
    ("x\n\ny", "x\ny\n\n"),
    ("alpha beta\ngamma\n", "alpha\nbeta gamma\ndelta\n"),
    ("<tag> & more\n", "<tag> &amp; more\n"),
    ("same\n", "same\n"),
    ("\n\n\n", "\n"),
    ("one\r\ntwo", "one\r\nthree"),
    ("a\nb\nc\nd", "a\nx\nd\ny\nz"),
];

fn session(engine: &str) -> ComparisonSession {
    let config = ComparisonConfig {
        engine: engine.to_owned(),
        ..ComparisonConfig::default()
    };
    ComparisonSession::new(&config).expect("builtin engine")
}

fn compare(a: &str, b: &str) -> Result<ComparisonResult> {
    ComparisonSession::default().compare(a, b)
}

fn rebuilt(lines: &[ClassifiedLine]) -> String {
    lines
        .iter()
        .filter(|line| !line.is_placeholder)
        .map(|line| line.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn without_final_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}

#[test]
fn modified_line_scenario() -> Result<()> {
    let result = compare("line1\nline2\nline3", "line1\nlineTWO\nline3")?;

    assert_eq!(result.lines_a.len(), 3);
    assert_eq!(result.lines_b.len(), 3);
    assert_eq!(result.lines_a[1].category, LineCategory::Modified);
    assert_eq!(result.lines_b[1].category, LineCategory::Modified);
    assert_eq!(result.lines_a[1].line_number, 2);
    assert_eq!(result.lines_b[1].line_number, 2);
    assert_eq!(result.lines_b[1].content, "lineTWO");
    assert_eq!(result.difference_count, 1);
    assert_eq!(result.words_added, 1);
    assert_eq!(result.words_removed, 1);
    assert_eq!(result.change_summary, ["Line 2: modified"]);
    Ok(())
}

#[test]
fn deleted_line_scenario() -> Result<()> {
    let result = compare("keep\nremoveMe", "keep")?;

    assert_eq!(result.lines_a.len(), 2);
    assert_eq!(result.lines_a[1].category, LineCategory::Deleted);
    assert_eq!(result.lines_a[1].content, "removeMe");
    assert_eq!(result.lines_b.len(), 1);
    assert_eq!(result.lines_b[0].category, LineCategory::Equal);
    assert_eq!(result.difference_count, 1);
    assert_eq!(result.words_removed, 1);
    assert_eq!(result.words_added, 0);
    Ok(())
}

#[test]
fn identical_documents_have_no_differences() -> Result<()> {
    for text in ["", "single", "a\nb\n", "x\n\n\ny z"] {
        let result = compare(text, text)?;
        assert!(result.has_no_differences(), "{text:?}");
        assert_eq!(result.words_added, 0);
        assert_eq!(result.words_removed, 0);
        assert!(result.change_summary.is_empty());
        assert!(result
            .lines_a
            .iter()
            .chain(&result.lines_b)
            .all(|line| line.category == LineCategory::Equal));
        assert_eq!(result.lines_a.len(), result.lines_b.len());
    }
    Ok(())
}

#[test]
fn empty_against_multi_line_is_all_inserted() -> Result<()> {
    let result = compare("", "first line\nsecond\nthird one here")?;

    assert!(result.lines_a.is_empty());
    assert_eq!(result.lines_b.len(), 3);
    assert!(result
        .lines_b
        .iter()
        .all(|line| line.category == LineCategory::Inserted));
    assert_eq!(result.difference_count, 3);
    assert_eq!(result.words_added, 6);
    assert_eq!(
        result.change_summary,
        ["Line 1: inserted", "Line 2: inserted", "Line 3: inserted"]
    );
    Ok(())
}

#[test]
fn sides_reconstruct_their_documents() -> Result<()> {
    for (a, b) in PAIRS {
        let result = compare(a, b)?;
        assert_eq!(rebuilt(&result.lines_a), without_final_newline(a), "A of {a:?} -> {b:?}");
        assert_eq!(rebuilt(&result.lines_b), without_final_newline(b), "B of {a:?} -> {b:?}");
    }
    Ok(())
}

#[test]
fn line_numbers_are_contiguous_for_every_engine() -> Result<()> {
    for engine in ["lines", "words", "chars"] {
        let session = session(engine);
        for (a, b) in PAIRS {
            let result = session.compare(a, b)?;
            for lines in [&result.lines_a, &result.lines_b] {
                let numbers: Vec<u32> = lines.iter().map(|line| line.line_number).collect();
                let expected: Vec<u32> = (1..=u32::try_from(lines.len()).expect("small")).collect();
                assert_eq!(numbers, expected, "{engine}: {a:?} -> {b:?}");
            }
        }
    }
    Ok(())
}

#[test]
fn difference_count_matches_line_groups() -> Result<()> {
    for engine in ["lines", "words", "chars"] {
        let session = session(engine);
        for (a, b) in PAIRS {
            let result = session.compare(a, b)?;

            let modified_a: Vec<&ClassifiedLine> = result
                .lines_a
                .iter()
                .filter(|line| line.category == LineCategory::Modified)
                .collect();
            let modified_b: Vec<&ClassifiedLine> = result
                .lines_b
                .iter()
                .filter(|line| line.category == LineCategory::Modified)
                .collect();
            assert_eq!(modified_a.len(), modified_b.len(), "{engine}: pairs");

            let deleted = result
                .lines_a
                .iter()
                .filter(|line| line.category == LineCategory::Deleted && line.is_substantive())
                .count();
            let inserted = result
                .lines_b
                .iter()
                .filter(|line| line.category == LineCategory::Inserted && line.is_substantive())
                .count();
            let pairs = modified_a
                .iter()
                .zip(&modified_b)
                .filter(|(a, b)| a.is_substantive() || b.is_substantive())
                .count();

            let expected = deleted + inserted + pairs;
            assert_eq!(
                result.difference_count as usize, expected,
                "{engine}: {a:?} -> {b:?}"
            );
            assert_eq!(result.change_summary.len(), expected);
        }
    }
    Ok(())
}

#[test]
fn comparisons_are_deterministic() -> Result<()> {
    let session = ComparisonSession::default();
    for (a, b) in PAIRS {
        assert_eq!(session.compare(a, b)?, session.compare(a, b)?);
    }
    Ok(())
}

#[test]
fn trailing_newline_renders_a_final_blank_line() -> Result<()> {
    let result = compare("a\nb\n", "a\nb\n")?;
    assert_eq!(result.lines_a.len(), 3);
    let last = &result.lines_a[2];
    assert!(last.is_placeholder);
    assert_eq!(last.content, " ");
    assert_eq!(last.category, LineCategory::Equal);
    Ok(())
}

#[test]
fn dropped_trailing_newline_is_not_a_difference() -> Result<()> {
    let result = compare("a\n", "a")?;
    assert!(result.has_no_differences());
    assert!(result.change_summary.is_empty());

    let ghost = &result.lines_a[1];
    assert!(ghost.is_placeholder);
    assert_eq!(ghost.category, LineCategory::Deleted);
    assert_eq!(result.lines_b.len(), 1);
    Ok(())
}

#[test]
fn session_is_shareable_across_threads() -> Result<()> {
    let session = ComparisonSession::default();
    std::thread::scope(|scope| {
        let handles: Vec<_> = PAIRS
            .iter()
            .map(|(a, b)| {
                let session = &session;
                scope.spawn(move || session.compare(a, b))
            })
            .collect();
        for handle in handles {
            handle.join().expect("comparison thread")?;
        }
        Ok(())
    })
}
