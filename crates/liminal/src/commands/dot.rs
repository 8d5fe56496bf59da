use crate::session::Session;

/// Feed stdin to the monitor as one segment, then answer the period prompt
pub fn run(session: &mut Session, auto_depth: bool) -> anyhow::Result<()> {
    let input = super::text_or_stdin(None)?;
    if !input.trim().is_empty() {
        session.monitor.add_segment(input.trim());
    }
    print!("{}", session.dot_prompt(auto_depth));
    Ok(())
}
