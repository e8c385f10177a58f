//! Renders the command sequence as source text for the command-buffer API.
//!
//! Purely structural: every error has already been raised by the parsers
//! and the visitor. The output is a `CmdBuf::new` closure whose body
//! mirrors the document's group nesting through indentation.

use std::fmt::Write;

use crate::path::PathCommand;
use crate::visit::{EmittedCommand, PathHandle};

const INDENT: &str = "    ";

/// Content lines sit two indentation units inside the `CmdBuf::new`
/// wrapper before any document nesting applies.
const BASE_DEPTH: usize = 2;

const PREAMBLE: &str = "    CmdBuf::new(|cb| {\n";
const POSTAMBLE: &str = "    })\n";

/// Renders the ordered command sequence into the final output text.
pub fn emit(commands: &[EmittedCommand]) -> String {
    let mut out = String::new();
    out.push_str(PREAMBLE);

    let mut last_built: Option<PathHandle> = None;

    for command in commands {
        match command {
            EmittedCommand::BeginGroup { depth } => {
                let _ = writeln!(out, "{}{{", pad(*depth));
            }
            EmittedCommand::EndGroup { depth } => {
                let _ = writeln!(out, "{}}}", pad(*depth));
            }
            EmittedCommand::BuildPath {
                depth,
                handle,
                commands,
            } => {
                last_built = Some(*handle);
                let spaces = pad(*depth);
                let _ = writeln!(out, "{spaces}let p = cb.build_path(|pb| {{");
                for path_command in commands {
                    let _ = writeln!(out, "{}{}", pad(depth + 1), render_path_command(path_command));
                }
                let _ = writeln!(out, "{spaces}}});");
            }
            EmittedCommand::PushFillSolid {
                depth,
                handle,
                color,
            } => {
                debug_assert_eq!(Some(*handle), last_built);
                let _ = writeln!(
                    out,
                    "{}cb.push(Cmd::FillPathSolid {{ path: p, color: argb_pack_u8s({},{},{}, 255) }});\n",
                    pad(*depth),
                    color.r,
                    color.g,
                    color.b
                );
            }
            EmittedCommand::DiscardPath { depth, handle } => {
                debug_assert_eq!(Some(*handle), last_built);
                let _ = writeln!(out, "{}let _ = p;\n", pad(*depth));
            }
        }
    }

    out.push_str(POSTAMBLE);
    out
}

fn pad(depth: usize) -> String {
    INDENT.repeat(depth + BASE_DEPTH)
}

fn render_path_command(command: &PathCommand) -> String {
    match command {
        PathCommand::MoveTo(p) => format!("pb.move_to([{}, {}].into());", p.x, p.y),
        PathCommand::LineTo(p) => format!("pb.line_to([{}, {}].into());", p.x, p.y),
        PathCommand::QuadTo(control, end) => format!(
            "pb.quad_to([{}, {}].into(), [{}, {}].into());",
            control.x, control.y, end.x, end.y
        ),
        PathCommand::CubicTo(control1, control2, end) => format!(
            "pb.cubic_to([{}, {}].into(), [{}, {}].into(), [{}, {}].into());",
            control1.x, control1.y, control2.x, control2.y, end.x, end.y
        ),
        PathCommand::ClosePath => "pb.close_path();".to_string(),
    }
}
