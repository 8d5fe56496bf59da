//! Line-delimited JSON tool loop on stdin/stdout

use crate::session::Session;
use liminal_core::{Depth, Error};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{self, BufRead, Write};

#[derive(Debug, Deserialize)]
struct ToolRequest {
    tool: String,
    #[serde(default)]
    arguments: Value,
}

#[derive(Debug, Serialize, PartialEq)]
struct ToolResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ToolResponse {
    fn text(text: String) -> Self {
        Self {
            ok: true,
            text: Some(text),
            error: None,
        }
    }

    fn error(message: String) -> Self {
        Self {
            ok: false,
            text: None,
            error: Some(message),
        }
    }
}

pub fn run(session: &mut Session) -> anyhow::Result<()> {
    tracing::info!("liminal tool loop running on stdin/stdout");
    let stdout = io::stdout();
    serve(session, io::stdin().lock(), stdout.lock())
}

fn serve<R: BufRead, W: Write>(
    session: &mut Session,
    reader: R,
    mut writer: W,
) -> anyhow::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<ToolRequest>(&line) {
            Ok(request) => match dispatch(session, &request) {
                Ok(text) => ToolResponse::text(text),
                Err(e) => {
                    tracing::warn!(tool = %request.tool, error = %e, "tool call rejected");
                    ToolResponse::error(e.to_string())
                }
            },
            Err(e) => ToolResponse::error(format!("Malformed request: {}", e)),
        };

        writeln!(writer, "{}", serde_json::to_string(&response)?)?;
        writer.flush()?;
    }
    Ok(())
}

/// Validate every argument before touching the session
fn dispatch(session: &mut Session, request: &ToolRequest) -> anyhow::Result<String> {
    let args = &request.arguments;
    match request.tool.as_str() {
        "explore_liminal" => {
            let context = required_str(args, "context")?;
            let depth = match optional_str(args, "depth")? {
                Some(token) => Depth::parse_lenient(token),
                None => Depth::Medium,
            };
            let focus = focus_arg(args)?;
            Ok(session.explore(context, depth, &focus))
        }
        "dot_prompt" => {
            let auto_depth = match args.get("auto_depth") {
                None | Some(Value::Null) => true,
                Some(Value::Bool(b)) => *b,
                Some(_) => return Err(invalid("auto_depth must be a boolean").into()),
            };
            Ok(session.dot_prompt(auto_depth))
        }
        "monitor_conversation" => {
            let segment = required_str(args, "segment")?;
            Ok(session.monitor_segment(segment))
        }
        "list_commands" => Ok(session.commands.help()),
        other => anyhow::bail!("Unknown tool: {}", other),
    }
}

fn invalid(message: &str) -> Error {
    Error::InvalidArgument(message.to_string())
}

fn required_str<'a>(args: &'a Value, key: &str) -> Result<&'a str, Error> {
    match args.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(invalid(&format!("{} must be a string", key))),
        None => Err(invalid(&format!("{} is required", key))),
    }
}

fn optional_str<'a>(args: &'a Value, key: &str) -> Result<Option<&'a str>, Error> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(invalid(&format!("{} must be a string", key))),
    }
}

fn focus_arg(args: &Value) -> Result<Vec<String>, Error> {
    match args.get("focus") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| invalid("focus must be an array of strings"))
            })
            .collect(),
        Some(_) => Err(invalid("focus must be an array of strings")),
    }
}
