use crate::session::Session;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

pub fn run(session: &mut Session, file: Option<&Path>) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let fired = match file {
        Some(path) => {
            let reader = BufReader::new(std::fs::File::open(path)?);
            feed_segments(session, reader, &mut out)?
        }
        None => feed_segments(session, io::stdin().lock(), &mut out)?,
    };

    tracing::info!(
        segments = session.monitor.segments().len(),
        fired,
        "monitoring finished"
    );
    Ok(())
}

/// Feed each non-empty line as a segment; print an exploration whenever one fires
fn feed_segments<R: BufRead, W: Write>(
    session: &mut Session,
    reader: R,
    mut writer: W,
) -> anyhow::Result<usize> {
    let mut fired = 0;
    for line in reader.lines() {
        let line = line?;
        let segment = line.trim();
        if segment.is_empty() {
            continue;
        }

        let signal = session.monitor.add_segment(segment);
        if !signal.should_explore {
            continue;
        }
        fired += 1;

        let context = signal.context.unwrap_or_default();
        let exploration =
            session
                .engine
                .perform_deep_exploration(&context, liminal_core::Depth::Medium, &[]);
        session.monitor.reset_triggers();

        writeln!(
            writer,
            "[segment {}] {}",
            session.monitor.segments().len(),
            signal.triggers.join("; ")
        )?;
        writeln!(writer, "{}", crate::render::format_exploration(&exploration))?;
    }
    writer.flush()?;
    Ok(fired)
}
