use crate::render::format_exploration;
use crate::session::Session;
use liminal_core::Depth;

pub fn run(
    session: &Session,
    context: Option<String>,
    depth: Depth,
    focus: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let context = super::text_or_stdin(context)?;
    let exploration = session
        .engine
        .perform_deep_exploration(&context, depth, focus);

    if json {
        println!("{}", serde_json::to_string_pretty(&exploration)?);
    } else {
        print!("{}", format_exploration(&exploration));
    }
    Ok(())
}
