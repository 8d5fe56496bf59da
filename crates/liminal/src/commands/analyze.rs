use crate::session::Session;
use serde::Serialize;
use std::io::{self, BufRead, Write};

#[derive(Debug, Serialize)]
struct AnalyzeOutput<'a> {
    text: &'a str,
    analysis: liminal_core::SegmentAnalysis,
}

pub fn run(session: &mut Session, text: Option<String>) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match text {
        Some(t) => analyze_lines(session, t.as_bytes(), &mut out),
        None => analyze_lines(session, io::stdin().lock(), &mut out),
    }
}

/// One JSON line per non-empty input line
fn analyze_lines<R: BufRead, W: Write>(
    session: &mut Session,
    reader: R,
    mut writer: W,
) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let analysis = session.engine.analyze_segment(text);
        let json = serde_json::to_string(&AnalyzeOutput { text, analysis })?;
        writeln!(writer, "{}", json)?;
    }
    writer.flush()?;
    Ok(())
}
